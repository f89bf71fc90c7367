//! Outer layer around the diff engine
//!
//! - `session`: Output sink shared by the commands
//! - `store`: Loading review documents and API forests from disk

pub mod session;
pub(crate) mod store;
