use std::cell::{RefCell, RefMut};
use std::io::Write;

/// One CLI invocation: where command output goes
///
/// Commands are implemented as methods on `Session` so they all share the
/// same writer, which is stdout, the pager or a buffer in tests.
pub struct Session {
    writer: RefCell<Box<dyn Write>>,
}

impl Session {
    pub fn new(writer: Box<dyn Write>) -> Self {
        Session {
            writer: RefCell::new(writer),
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }
}
