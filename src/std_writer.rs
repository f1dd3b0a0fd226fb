use crate::Write;
use std::io;

/// Adapts a [`std::io::Write`] to implement [`Write`].
///
/// Every byte is flushed through to the inner writer immediately, the
/// moral equivalent of `setbuf(stdout, 0)`.
pub struct StdWriter<Inner: io::Write> {
    inner: Inner,
    ended: bool,
}

impl<Inner: io::Write> StdWriter<Inner> {
    /// Construct a new instance of `StdWriter` wrapping `inner`.
    pub fn new(inner: Inner) -> Self {
        Self {
            inner,
            ended: false,
        }
    }

    /// Gets a reference to the underlying writer.
    pub fn get_ref(&self) -> &Inner {
        &self.inner
    }

    /// Gets a mutable reference to the underlying writer.
    ///
    /// It is inadvisable to directly write to the underlying writer.
    pub fn get_mut(&mut self) -> &mut Inner {
        &mut self.inner
    }
}

impl<Inner: io::Write> Write for StdWriter<Inner> {
    #[inline]
    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        if self.ended {
            return Err(stream_already_ended());
        }
        self.inner.write_all(&[byte])?;
        self.inner.flush()
    }

    #[inline]
    fn end(&mut self) -> io::Result<()> {
        if self.ended {
            return Err(stream_already_ended());
        }
        self.ended = true;
        self.inner.flush()
    }
}

fn stream_already_ended() -> io::Error {
    io::Error::new(io::ErrorKind::Other, "stream has already ended")
}

#[cfg(test)]
struct FlushCounter {
    bytes: Vec<u8>,
    flushes: usize,
}

#[cfg(test)]
impl io::Write for FlushCounter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

#[test]
fn test_every_byte_is_flushed() {
    let mut writer = StdWriter::new(FlushCounter {
        bytes: Vec::new(),
        flushes: 0,
    });
    writer.write_byte(b'a').unwrap();
    writer.write_byte(b'b').unwrap();
    writer.end().unwrap();
    assert_eq!(writer.get_ref().bytes, b"ab");
    assert_eq!(writer.get_ref().flushes, 3);
}

#[test]
fn test_write_after_end() {
    let mut writer = StdWriter::new(Vec::new());
    writer.write_byte(b'a').unwrap();
    writer.end().unwrap();
    assert!(writer.write_byte(b'b').is_err());
}
