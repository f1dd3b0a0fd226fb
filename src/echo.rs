use crate::{Read, Unit, Write, NUL};
use std::io;

/// Copy units from `reader` to `writer` until the `NUL` terminator or
/// end-of-input, returning the number of bytes echoed.
///
/// The terminator is consumed but not echoed, and nothing past it is
/// echoed. On loop exit the writer's [`Write::end`] is called, so the last
/// byte is delivered even if the sink buffers despite the contract.
pub fn copy_until_nul<Reader: Read + ?Sized, Writer: Write + ?Sized>(
    reader: &mut Reader,
    writer: &mut Writer,
) -> io::Result<u64> {
    let mut echoed = 0;
    loop {
        match reader.read_unit()? {
            Unit::Byte(NUL) | Unit::End => break,
            Unit::Byte(byte) => {
                writer.write_byte(byte)?;
                echoed += 1;
            }
        }
    }
    writer.end()?;
    Ok(echoed)
}

#[cfg(test)]
fn echo_slice(input: &[u8]) -> (Vec<u8>, u64) {
    let mut reader = crate::SliceReader::new(input);
    let mut sink = Vec::new();
    let echoed = copy_until_nul(&mut reader, &mut sink).unwrap();
    (sink, echoed)
}

#[test]
fn test_no_terminator_is_identity() {
    let input = b"The quick brown fox\njumps over the lazy dog\n";
    let (output, echoed) = echo_slice(input);
    assert_eq!(output, input);
    assert_eq!(echoed, input.len() as u64);
}

#[test]
fn test_stops_at_first_terminator() {
    let (output, echoed) = echo_slice(b"abc\0def");
    assert_eq!(output, b"abc");
    assert_eq!(echoed, 3);
}

#[test]
fn test_empty_input() {
    let (output, echoed) = echo_slice(b"");
    assert_eq!(output, b"");
    assert_eq!(echoed, 0);
}

#[test]
fn test_lone_terminator() {
    let (output, echoed) = echo_slice(b"\0");
    assert_eq!(output, b"");
    assert_eq!(echoed, 0);
}

#[test]
fn test_terminator_at_end() {
    let (output, _) = echo_slice(b"tail\0");
    assert_eq!(output, b"tail");
}

#[test]
fn test_later_terminators_are_not_reached() {
    let (output, _) = echo_slice(b"a\0b\0c");
    assert_eq!(output, b"a");
}

#[test]
fn test_through_std_adapters() {
    let mut reader = crate::StdReader::generic(std::io::Cursor::new(b"std\0io"));
    let mut writer = crate::StdWriter::new(Vec::new());
    let echoed = copy_until_nul(&mut reader, &mut writer).unwrap();
    assert_eq!(echoed, 3);
    assert_eq!(writer.get_ref(), b"std");
}
