//! Echo a stream of bytes until a NUL terminator.
//!
//! The [`Read`] trait yields one [`Unit`] at a time, so end-of-input is an
//! ordinary value rather than a special-cased zero-length read, and
//! [`copy_until_nul`] echoes units to an unbuffered [`Write`] sink until
//! it sees the terminator or the end of the stream.

#![deny(missing_docs)]

mod echo;
mod read;
mod slice_reader;
mod std_reader;
mod std_writer;
mod unit;
mod write;

pub use echo::copy_until_nul;
pub use read::{default_read_until_nul, Read};
pub use slice_reader::SliceReader;
pub use std_reader::StdReader;
pub use std_writer::StdWriter;
pub use unit::{Unit, NUL};
pub use write::Write;
