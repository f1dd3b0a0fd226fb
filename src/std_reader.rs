use crate::{Read, Unit};
#[cfg(unix)]
use std::os::unix::io::AsRawFd;
#[cfg(windows)]
use std::os::windows::io::AsRawHandle;
use std::io;
#[cfg(not(windows))]
use std::mem::MaybeUninit;

/// How many bytes to pull from the inner reader at a time. Input buffering
/// is fine; only output buffering is disabled.
const BUFFER_SIZE: usize = 0x2000;

/// Adapts an `io::Read` to implement `Read`, yielding one unit at a time.
///
/// Bytes are fetched from the inner reader in chunks and handed out
/// individually. Once the inner reader reports end-of-input, `Unit::End`
/// is latched and returned from then on.
pub struct StdReader<Inner: io::Read> {
    inner: Inner,
    buf: Box<[u8]>,
    pos: usize,
    len: usize,
    ended: bool,
}

#[cfg(not(windows))]
impl<Inner: io::Read + AsRawFd> StdReader<Inner> {
    /// Construct a new `StdReader` which wraps `inner`, which implements
    /// `AsRawFd`, and automatically uses one-byte reads if `inner` is a
    /// terminal in canonical mode, so that an interactive session never
    /// consumes input beyond what it echoes.
    pub fn new(inner: Inner) -> Self {
        let canonical = unsafe {
            let mut termios = MaybeUninit::<libc::termios>::uninit();
            if libc::tcgetattr(inner.as_raw_fd(), termios.as_mut_ptr()) == 0 {
                (termios.assume_init().c_lflag & libc::ICANON) == libc::ICANON
            } else {
                // `tcgetattr` fails when it's not reading from a terminal.
                false
            }
        };

        if canonical {
            StdReader::byte_by_byte(inner)
        } else {
            StdReader::generic(inner)
        }
    }
}

#[cfg(windows)]
impl<Inner: io::Read + AsRawHandle> StdReader<Inner> {
    /// Construct a new `StdReader` which wraps `inner`, which implements
    /// `AsRawHandle`.
    pub fn new(inner: Inner) -> Self {
        StdReader::generic(inner)
    }
}

impl<Inner: io::Read> StdReader<Inner> {
    /// Construct a new `StdReader` which wraps `inner` with generic
    /// settings.
    pub fn generic(inner: Inner) -> Self {
        Self::with_buffer_size(inner, BUFFER_SIZE)
    }

    /// Construct a new `StdReader` which wraps `inner` and requests a
    /// single byte per inner read.
    pub fn byte_by_byte(inner: Inner) -> Self {
        Self::with_buffer_size(inner, 1)
    }

    fn with_buffer_size(inner: Inner, size: usize) -> Self {
        Self {
            inner,
            buf: vec![0; size].into_boxed_slice(),
            pos: 0,
            len: 0,
            ended: false,
        }
    }
}

impl<Inner: io::Read> Read for StdReader<Inner> {
    #[inline]
    fn read_unit(&mut self) -> io::Result<Unit> {
        if self.pos == self.len {
            if self.ended {
                return Ok(Unit::End);
            }
            loop {
                match self.inner.read(&mut self.buf) {
                    Ok(0) => {
                        self.ended = true;
                        return Ok(Unit::End);
                    }
                    Ok(size) => {
                        self.pos = 0;
                        self.len = size;
                        break;
                    }
                    Err(ref e) if e.kind() == io::ErrorKind::Interrupted => {}
                    Err(e) => return Err(e),
                }
            }
        }

        let byte = self.buf[self.pos];
        self.pos += 1;
        Ok(Unit::Byte(byte))
    }
}

#[test]
fn test_std_reader() {
    let mut input = io::Cursor::new(b"hello");
    let mut reader = StdReader::generic(&mut input);
    let mut buf = Vec::new();
    reader.read_until_nul(&mut buf).unwrap();
    assert_eq!(buf, b"hello");
    assert_eq!(reader.read_unit().unwrap(), Unit::End);
}

#[test]
fn test_end_is_latched() {
    let mut input = io::Cursor::new(b"a");
    let mut reader = StdReader::byte_by_byte(&mut input);
    assert_eq!(reader.read_unit().unwrap(), Unit::Byte(b'a'));
    assert_eq!(reader.read_unit().unwrap(), Unit::End);
    assert_eq!(reader.read_unit().unwrap(), Unit::End);
}

#[test]
fn test_interrupted_is_retried() {
    struct Flaky {
        interruptions: usize,
        inner: &'static [u8],
    }

    impl io::Read for Flaky {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.interruptions != 0 {
                self.interruptions -= 1;
                return Err(io::Error::new(io::ErrorKind::Interrupted, "signal"));
            }
            io::Read::read(&mut self.inner, buf)
        }
    }

    let flaky = Flaky {
        interruptions: 2,
        inner: b"ok",
    };
    let mut reader = StdReader::generic(flaky);
    let mut buf = Vec::new();
    reader.read_until_nul(&mut buf).unwrap();
    assert_eq!(buf, b"ok");
}
