//! Output sinks.
//!
//! A sink is an append-only text destination. The transducer writes to it in
//! document order and calls [`OutputSink::finish`] once, after a fully
//! successful run. A failed run leaves whatever was written so far; callers
//! throw it away.

use std::io::{self, Write};

pub trait OutputSink {
    /// Append `s` to the destination.
    fn write_str(&mut self, s: &str) -> io::Result<()>;

    /// Signal end of output. Sinks without a close step keep the default.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl OutputSink for String {
    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.push_str(s);
        Ok(())
    }
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn write_str(&mut self, s: &str) -> io::Result<()> {
        (**self).write_str(s)
    }

    fn finish(&mut self) -> io::Result<()> {
        (**self).finish()
    }
}

/// Adapts any [`io::Write`] into a sink; `finish` flushes it.
#[derive(Debug)]
pub struct IoSink<W: Write> {
    inner: W,
}

impl<W: Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> OutputSink for IoSink<W> {
    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.inner.write_all(s.as_bytes())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_sink_appends() {
        let mut out = String::new();
        OutputSink::write_str(&mut out, "(a").unwrap();
        OutputSink::write_str(&mut out, ")").unwrap();
        OutputSink::finish(&mut out).unwrap();
        assert_eq!(out, "(a)");
    }

    #[test]
    fn io_sink_writes_bytes() {
        let mut sink = IoSink::new(Vec::new());
        sink.write_str("#\\a").unwrap();
        sink.finish().unwrap();
        assert_eq!(sink.into_inner(), b"#\\a");
    }
}
