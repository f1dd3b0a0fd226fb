use crate::{Unit, NUL};
use std::io;

/// A source of stream units. Unlike [`std::io::Read`], end-of-input is a
/// value rather than a zero-length read, so a single call distinguishes
/// every byte value from the stream ending.
pub trait Read {
    /// Read the next unit from the stream. Once this returns `Unit::End`,
    /// every subsequent call returns `Unit::End`.
    fn read_unit(&mut self) -> io::Result<Unit>;

    /// Read units into `buf` until the `NUL` terminator or end-of-input,
    /// returning the number of bytes appended. The terminator is consumed
    /// but not appended.
    fn read_until_nul(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        default_read_until_nul(self, buf)
    }
}

/// Default implementation of `Read::read_until_nul`.
pub fn default_read_until_nul<Inner: Read + ?Sized>(
    inner: &mut Inner,
    buf: &mut Vec<u8>,
) -> io::Result<usize> {
    let start_len = buf.len();
    loop {
        match inner.read_unit()? {
            Unit::Byte(NUL) | Unit::End => return Ok(buf.len() - start_len),
            Unit::Byte(byte) => buf.push(byte),
        }
    }
}

#[test]
fn test_read_until_nul_appends() {
    let mut reader = crate::SliceReader::new(b"hi\0there");
    let mut buf = b"say: ".to_vec();
    let size = reader.read_until_nul(&mut buf).unwrap();
    assert_eq!(size, 2);
    assert_eq!(buf, b"say: hi");
}

#[test]
fn test_read_until_nul_without_terminator() {
    let mut reader = crate::SliceReader::new(b"plain");
    let mut buf = Vec::new();
    let size = reader.read_until_nul(&mut buf).unwrap();
    assert_eq!(size, 5);
    assert_eq!(buf, b"plain");
}
