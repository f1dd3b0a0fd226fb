use nulcat::{copy_until_nul, StdReader, StdWriter};

fn main() -> anyhow::Result<()> {
    let mut reader = StdReader::new(std::io::stdin());
    let mut writer = StdWriter::new(std::io::stdout());
    let echoed = copy_until_nul(&mut reader, &mut writer)?;
    eprintln!("echoed {} bytes", echoed);
    Ok(())
}
