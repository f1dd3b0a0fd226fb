use std::io;

/// An unbuffered byte sink. Where [`std::io::Write`] permits buffering,
/// implementations of this trait must deliver each byte to the consumer
/// before returning, to preserve interleaving with a real-time reader on
/// the other end.
pub trait Write {
    /// Write one byte and deliver it immediately.
    fn write_byte(&mut self, byte: u8) -> io::Result<()>;

    /// Perform a final flush and declare the end of the stream. Writes
    /// after `end` fail.
    fn end(&mut self) -> io::Result<()>;
}

/// `Vec<u8>` collects bytes as an in-memory sink; there is nothing to
/// flush, so the unbuffered contract holds trivially.
impl Write for Vec<u8> {
    #[inline]
    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.push(byte);
        Ok(())
    }

    #[inline]
    fn end(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_vec_sink() {
    let mut sink = Vec::new();
    Write::write_byte(&mut sink, b'x').unwrap();
    Write::write_byte(&mut sink, b'y').unwrap();
    Write::end(&mut sink).unwrap();
    assert_eq!(sink, b"xy");
}
