//! Two-pass formatting: a dry-run length measurement, then a render into
//! a scratch buffer that must land on exactly the measured length.

use std::collections::TryReserveError;
use std::fmt::{self, Write};

use af_domain::{Error, Result};

/// Counts bytes without storing them.
#[derive(Debug, Default)]
struct CountingWriter {
    count: usize,
    overflowed: bool,
}

impl Write for CountingWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        match self.count.checked_add(s.len()) {
            Some(n) => {
                self.count = n;
                Ok(())
            }
            None => {
                self.overflowed = true;
                Err(fmt::Error)
            }
        }
    }
}

/// Byte length `args` renders to.
pub fn measure(args: fmt::Arguments<'_>, limit: usize) -> Result<usize> {
    if let Some(s) = args.as_str() {
        return Ok(s.len());
    }
    let mut counter = CountingWriter::default();
    match counter.write_fmt(args) {
        Ok(()) => Ok(counter.count),
        Err(_) if counter.overflowed => Err(Error::Overflow { limit }),
        Err(_) => Err(Error::Format("formatter reported an error while measuring".into())),
    }
}

/// Writes into a buffer reserved up front and refuses to grow past it.
struct BoundedWriter {
    buf: String,
    cap: usize,
    overrun: bool,
}

impl Write for BoundedWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.buf.len() + s.len() > self.cap {
            self.overrun = true;
            return Err(fmt::Error);
        }
        self.buf.push_str(s);
        Ok(())
    }
}

fn reserve_exact(len: usize) -> std::result::Result<String, TryReserveError> {
    let mut buf = String::new();
    buf.try_reserve_exact(len)?;
    Ok(buf)
}

/// Render `args` into a fresh string of exactly `expected` bytes.
///
/// A second traversal that disagrees with the measurement (a `Display`
/// impl reading mutable state, say) is a format error.
pub fn render(args: fmt::Arguments<'_>, expected: usize) -> Result<String> {
    let mut writer = BoundedWriter {
        buf: reserve_exact(expected)?,
        cap: expected,
        overrun: false,
    };
    let result = writer.write_fmt(args);
    if writer.overrun || writer.buf.len() != expected {
        return Err(Error::Format(format!(
            "rendered length differs from measured length {expected}"
        )));
    }
    result.map_err(|_| Error::Format("formatter reported an error while rendering".into()))?;
    Ok(writer.buf)
}
