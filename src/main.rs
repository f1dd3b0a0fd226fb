use nulcat::{copy_until_nul, StdReader, StdWriter};

fn main() {
    let mut reader = StdReader::new(std::io::stdin());
    let mut writer = StdWriter::new(std::io::stdout());

    // A failure on either stream ends the echo the same way end-of-input
    // does; the exit status is 0 in every case.
    let _ = copy_until_nul(&mut reader, &mut writer);
}
