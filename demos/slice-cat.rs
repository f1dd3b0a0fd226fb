use nulcat::{copy_until_nul, SliceReader, StdWriter};

fn main() -> anyhow::Result<()> {
    let mut reader = SliceReader::new(b"from a slice\n\0this is never echoed\n");
    let mut writer = StdWriter::new(std::io::stdout());
    copy_until_nul(&mut reader, &mut writer)?;
    Ok(())
}
