//! Fuzz target for the disassembler.
//!
//! This target feeds arbitrary byte sequences to the disassembler
//! to find edge cases and crashes in instruction decoding.

#![no_main]

use arbitrary::Arbitrary;
use mpu65::{disassemble, format_listing, DisassemblyOptions, CMOS_OPCODES, NMOS_OPCODES};
use libfuzzer_sys::fuzz_target;

/// Disassembly options for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzOptions {
    start_address: u16,
    hex_dump: bool,
    show_addresses: bool,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cmos: bool,
    bytes: Vec<u8>,
    options: FuzzOptions,
}

fuzz_target!(|input: FuzzInput| {
    // Limit input size to prevent OOM
    if input.bytes.len() > 65536 {
        return;
    }

    let options = DisassemblyOptions {
        start_address: input.options.start_address,
        hex_dump: input.options.hex_dump,
        show_addresses: input.options.show_addresses,
    };
    let table = if input.cmos { &CMOS_OPCODES } else { &NMOS_OPCODES };

    let instructions = disassemble(table, &input.bytes, options);

    let mut total_size: usize = 0;
    let mut expected_address = input.options.start_address;

    for instr in &instructions {
        assert_eq!(instr.address, expected_address);
        assert!(instr.size_bytes >= 1 && instr.size_bytes <= 3);

        // `.byte` entries carry their single byte as the operand
        assert!(instr.operand_bytes.len() <= instr.size_bytes as usize);

        total_size += instr.size_bytes as usize;
        expected_address = expected_address.wrapping_add(instr.size_bytes as u16);
    }

    assert_eq!(total_size, input.bytes.len());

    let listing = format_listing(&instructions, &options);
    assert_eq!(listing.lines().count(), instructions.len());
});
