/// The terminator byte. Reading it ends the echo without echoing it.
pub const NUL: u8 = 0;

/// One step of a stream cursor: either a byte, or the end of the input.
///
/// This is the modern rendering of an integer "wide enough to hold every
/// byte value plus a distinct end-of-input marker".
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Unit {
    /// A byte read from the stream.
    Byte(u8),

    /// The stream has ended. No more bytes will be transmitted.
    End,
}

impl Unit {
    /// Shorthand for testing equality with `Unit::End`.
    #[inline]
    pub fn is_end(&self) -> bool {
        *self == Self::End
    }

    /// Return whether this unit is the `NUL` terminator.
    #[inline]
    pub fn is_terminator(&self) -> bool {
        *self == Self::Byte(NUL)
    }

    /// Return the byte value, if this unit carries one.
    #[inline]
    pub fn to_byte(self) -> Option<u8> {
        match self {
            Self::Byte(byte) => Some(byte),
            Self::End => None,
        }
    }
}

#[test]
fn test_predicates() {
    assert!(Unit::End.is_end());
    assert!(!Unit::Byte(b'a').is_end());
    assert!(Unit::Byte(NUL).is_terminator());
    assert!(!Unit::Byte(b'a').is_terminator());
    assert!(!Unit::End.is_terminator());
    assert_eq!(Unit::Byte(b'a').to_byte(), Some(b'a'));
    assert_eq!(Unit::End.to_byte(), None);
}
