use crate::{Read, Unit};
use std::io;

/// Adapts an `&[u8]` to implement `Read`.
pub struct SliceReader<'slice> {
    slice: &'slice [u8],
}

impl<'slice> SliceReader<'slice> {
    /// Construct a new `SliceReader` which wraps `slice`.
    pub fn new(slice: &'slice [u8]) -> Self {
        Self { slice }
    }
}

impl<'slice> Read for SliceReader<'slice> {
    #[inline]
    fn read_unit(&mut self) -> io::Result<Unit> {
        match self.slice.split_first() {
            Some((byte, rest)) => {
                self.slice = rest;
                Ok(Unit::Byte(*byte))
            }
            None => Ok(Unit::End),
        }
    }
}

#[test]
fn test_slice_reader() {
    let mut reader = SliceReader::new(b"ab");
    assert_eq!(reader.read_unit().unwrap(), Unit::Byte(b'a'));
    assert_eq!(reader.read_unit().unwrap(), Unit::Byte(b'b'));
    assert_eq!(reader.read_unit().unwrap(), Unit::End);
    assert_eq!(reader.read_unit().unwrap(), Unit::End);
}
