#![no_main]
use libfuzzer_sys::fuzz_target;
use nulcat::{copy_until_nul, SliceReader};

fuzz_target!(|data: &[u8]| {
    let mut reader = SliceReader::new(data);
    let mut sink = Vec::new();
    let echoed = copy_until_nul(&mut reader, &mut sink).unwrap();

    let expected = match data.iter().position(|byte| *byte == 0) {
        Some(nul) => &data[..nul],
        None => data,
    };
    assert_eq!(sink, expected);
    assert_eq!(echoed, expected.len() as u64);
});
