//! Core utilities shared by the commands
//!
//! - `render`: Printing annotated forests as `+`/`-` rows
//! - [`PagerWriter`]: `Write` adapter over the minus pager

pub mod render;

use derive_new::new;
use minus::Pager;
use std::io::{self, Write};

/// Session sink that buffers rendered diff rows into a minus pager
///
/// `main` installs it only when stdout is a terminal and `NO_PAGER` is unset,
/// then calls `minus::page_all` once the command returns. Rows arrive as
/// whole `writeln!` calls from the renderers, so every chunk is valid UTF-8.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(text).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
