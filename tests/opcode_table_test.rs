//! Opcode table validation tests
//!
//! Verifies that both opcode tables are complete and agree with the
//! documented sizes and cycle counts.

use mpu65::{opcode_for, AddressingMode, Variant, CMOS_OPCODES, NMOS_OPCODES};

#[test]
fn test_every_entry_is_well_formed() {
    for variant in Variant::all() {
        for (opcode, metadata) in variant.opcodes.iter().enumerate() {
            assert!(
                !metadata.mnemonic.is_empty(),
                "{} opcode 0x{:02X} has empty mnemonic",
                variant,
                opcode
            );
            assert!(
                (1..=3).contains(&metadata.size_bytes),
                "{} opcode 0x{:02X} has invalid size",
                variant,
                opcode
            );
            assert!(
                metadata.base_cycles >= 1,
                "{} opcode 0x{:02X} has no cycles",
                variant,
                opcode
            );
        }
    }
}

#[test]
fn test_nmos_table_has_no_cmos_modes() {
    for (opcode, metadata) in NMOS_OPCODES.iter().enumerate() {
        assert!(
            !metadata.addressing_mode.is_cmos_only(),
            "opcode 0x{:02X} uses {:?}",
            opcode,
            metadata.addressing_mode
        );
    }
}

#[test]
fn test_unassigned_entries() {
    for table in [&NMOS_OPCODES, &CMOS_OPCODES] {
        for metadata in table.iter().filter(|m| m.is_unassigned()) {
            assert_eq!(metadata.mnemonic, "???");
            assert_eq!(metadata.size_bytes, 1);
            assert_eq!(metadata.base_cycles, 2);
        }
    }
}

#[test]
fn test_known_cycle_counts() {
    let nmos = [
        (0x00, 7), // BRK
        (0x20, 6), // JSR
        (0x4C, 3), // JMP abs
        (0x6C, 5), // JMP (ind)
        (0xA1, 6), // LDA (zp,X)
        (0xB1, 5), // LDA (zp),Y
        (0x9D, 5), // STA abs,X
        (0xFE, 7), // INC abs,X
        (0x48, 3), // PHA
        (0x68, 4), // PLA
    ];
    for (opcode, cycles) in nmos {
        assert_eq!(NMOS_OPCODES[opcode].base_cycles, cycles, "0x{:02X}", opcode);
    }

    let cmos = [
        (0x6C, 6), // JMP (ind)
        (0x7C, 6), // JMP (abs,X)
        (0xB2, 5), // LDA (zp)
        (0x9E, 5), // STZ abs,X
        (0x04, 5), // TSB zp
        (0x0C, 6), // TSB abs
        (0xCB, 3), // WAI
        (0x07, 5), // RMB0
    ];
    for (opcode, cycles) in cmos {
        assert_eq!(CMOS_OPCODES[opcode].base_cycles, cycles, "0x{:02X}", opcode);
    }
}

#[test]
fn test_page_penalty_flags() {
    // Indexed reads are penalized
    assert!(NMOS_OPCODES[0xBD].page_penalty);
    assert!(NMOS_OPCODES[0xB9].page_penalty);
    assert!(NMOS_OPCODES[0xB1].page_penalty);
    assert!(CMOS_OPCODES[0x3C].page_penalty);

    // Read-modify-write and indexed-indirect are not
    assert!(!NMOS_OPCODES[0x1E].page_penalty);
    assert!(!NMOS_OPCODES[0xA1].page_penalty);
    assert!(!CMOS_OPCODES[0xB2].page_penalty);
}

#[test]
fn test_opcode_lookup() {
    assert_eq!(
        opcode_for(&NMOS_OPCODES, "JMP", AddressingMode::Indirect),
        Some(0x6C)
    );
    assert_eq!(
        opcode_for(&CMOS_OPCODES, "JMP", AddressingMode::IndirectAbsoluteX),
        Some(0x7C)
    );
    assert_eq!(
        opcode_for(&NMOS_OPCODES, "JMP", AddressingMode::IndirectAbsoluteX),
        None
    );
    assert_eq!(
        opcode_for(&CMOS_OPCODES, "SMB3", AddressingMode::ZeroPage),
        Some(0xB7)
    );
    assert_eq!(opcode_for(&CMOS_OPCODES, "???", AddressingMode::Implied), None);
}

#[test]
fn test_lookup_inverts_table() {
    for table in [&NMOS_OPCODES, &CMOS_OPCODES] {
        for (opcode, metadata) in table.iter().enumerate() {
            if metadata.is_unassigned() {
                continue;
            }
            assert_eq!(
                opcode_for(table, metadata.mnemonic, metadata.addressing_mode),
                Some(opcode as u8),
                "{} {:?}",
                metadata.mnemonic,
                metadata.addressing_mode
            );
        }
    }
}
