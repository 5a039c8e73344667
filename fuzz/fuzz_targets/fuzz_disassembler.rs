//! Fuzz target for the disassembler.
//!
//! Feeds arbitrary memory images to `disassemble_range` and checks that
//! the listing walks the image without gaps.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sim6502::disassemble_range;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    bytes: Vec<u8>,
    start: u16,
    count: u8,
}

fuzz_target!(|input: FuzzInput| {
    if input.bytes.len() > 0x10000 {
        return;
    }

    let listing = disassemble_range(&input.bytes, input.start, input.count as usize);
    assert_eq!(listing.len(), input.count as usize);

    let mut expected = input.start;
    for instr in &listing {
        assert_eq!(instr.address, expected);
        assert!((1..=3).contains(&instr.size_bytes()));
        // Rendering must never panic
        let _ = instr.to_string();
        expected = expected.wrapping_add(instr.size_bytes() as u16);
    }
});
