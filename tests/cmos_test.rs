//! Tests for the instructions and addressing modes the 65C02 adds.
//!
//! Tests cover:
//! - BRA timing, including page crossing
//! - STZ, TSB, TRB
//! - PHX / PHY / PLX / PLY
//! - Accumulator INC / DEC
//! - Zero-page indirect `(zp)` addressing
//! - RMBn / SMBn

use mpu65::{CpuConfig, FlatMemory, MemoryBus, Variant, CPU};

/// Helper function to create a 65C02 starting at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let config = CpuConfig::default()
        .with_variant(Variant::CMOS_65C02)
        .with_start_pc(0x8000);
    CPU::with_config(FlatMemory::new(), config)
}

// ========== BRA ==========

#[test]
fn test_bra_forward_same_page() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x80);
    cpu.memory_mut().write(0x8001, 0x10);

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.pc(), 0x8012);
}

#[test]
fn test_bra_backward_page_cross() {
    let mut cpu = setup_cpu();
    cpu.set_pc(0x0204);

    // BRA $F0 from $0204 lands on $01F6
    cpu.memory_mut().write(0x0204, 0x80);
    cpu.memory_mut().write(0x0205, 0xF0);

    assert_eq!(cpu.step(), 3);
    assert_eq!(cpu.pc(), 0x01F6);
}

// ========== STZ ==========

#[test]
fn test_stz_zero_page() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x64);
    cpu.memory_mut().write(0x8001, 0x32);
    cpu.memory_mut().write(0x0032, 0x88);
    cpu.set_a(0x55);
    let flags = cpu.flags();

    assert_eq!(cpu.step(), 3);
    assert_eq!(cpu.memory().read(0x0032), 0x00);
    assert_eq!(cpu.flags(), flags);
}

#[test]
fn test_stz_absolute_x() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x9E);
    cpu.memory_mut().write(0x8001, 0xFF);
    cpu.memory_mut().write(0x8002, 0x20);
    cpu.memory_mut().write(0x2100, 0x88);
    cpu.set_x(0x01);

    // Stores never take the page-cross penalty
    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.memory().read(0x2100), 0x00);
}

// ========== TSB / TRB ==========

#[test]
fn test_tsb_zero_page() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x04);
    cpu.memory_mut().write(0x8001, 0xBB);
    cpu.memory_mut().write(0x00BB, 0xE0);
    cpu.set_a(0x70);

    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.memory().read(0x00BB), 0xF0);
    assert!(!cpu.flag_z());
    assert_eq!(cpu.a(), 0x70);
}

#[test]
fn test_tsb_sets_zero_from_original_value() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x0C);
    cpu.memory_mut().write(0x8001, 0xCD);
    cpu.memory_mut().write(0x8002, 0xAB);
    cpu.memory_mut().write(0xABCD, 0x80);
    cpu.set_a(0x70);

    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.memory().read(0xABCD), 0xF0);
    assert!(cpu.flag_z());
}

#[test]
fn test_trb_zero_page() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x14);
    cpu.memory_mut().write(0x8001, 0xBB);
    cpu.memory_mut().write(0x00BB, 0xE0);
    cpu.set_a(0x70);

    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.memory().read(0x00BB), 0x80);
    assert!(!cpu.flag_z());
}

// ========== Index Register Stack Operations ==========

#[test]
fn test_phx_then_ply() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xDA); // PHX
    cpu.memory_mut().write(0x8001, 0x7A); // PLY
    cpu.set_x(0x80);

    assert_eq!(cpu.step(), 3);
    assert_eq!(cpu.memory().read(0x01FF), 0x80);
    assert_eq!(cpu.sp(), 0xFE);

    assert_eq!(cpu.step(), 4);
    assert_eq!(cpu.y(), 0x80);
    assert!(cpu.flag_n());
    assert_eq!(cpu.sp(), 0xFF);
}

#[test]
fn test_phy_then_plx_zero() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x5A); // PHY
    cpu.memory_mut().write(0x8001, 0xFA); // PLX
    cpu.set_x(0x33);

    cpu.step();
    cpu.step();

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());
}

// ========== Accumulator INC / DEC ==========

#[test]
fn test_inc_accumulator_wraps() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x1A);
    cpu.set_a(0xFF);

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert_eq!(cpu.pc(), 0x8001);
}

#[test]
fn test_dec_accumulator_wraps() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x3A);

    cpu.step();
    assert_eq!(cpu.a(), 0xFF);
    assert!(cpu.flag_n());
}

// ========== Zero-Page Indirect ==========

#[test]
fn test_lda_zero_page_indirect() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xB2);
    cpu.memory_mut().write(0x8001, 0x10);
    cpu.memory_mut().write(0x0010, 0xCD);
    cpu.memory_mut().write(0x0011, 0xAB);
    cpu.memory_mut().write(0xABCD, 0x80);

    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_n());
}

#[test]
fn test_sta_zero_page_indirect() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x92);
    cpu.memory_mut().write(0x8001, 0x10);
    cpu.memory_mut().write(0x0010, 0xED);
    cpu.memory_mut().write(0x0011, 0xFE);
    cpu.set_a(0x42);

    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.memory().read(0xFEED), 0x42);
}

#[test]
fn test_zero_page_indirect_pointer_at_top_of_page() {
    let mut cpu = setup_cpu();

    // LDA ($FF): high byte comes from $0100
    cpu.memory_mut().write(0x8000, 0xB2);
    cpu.memory_mut().write(0x8001, 0xFF);
    cpu.memory_mut().write(0x00FF, 0x00);
    cpu.memory_mut().write(0x0100, 0x30);
    cpu.memory_mut().write(0x0000, 0x40);
    cpu.memory_mut().write(0x3000, 0x11);
    cpu.memory_mut().write(0x4000, 0x22);

    cpu.step();
    assert_eq!(cpu.a(), 0x11);
}

// ========== RMB / SMB ==========

#[test]
fn test_rmb_clears_one_bit() {
    let mut cpu = setup_cpu();

    // RMB3 $10
    cpu.memory_mut().write(0x8000, 0x37);
    cpu.memory_mut().write(0x8001, 0x10);
    cpu.memory_mut().write(0x0010, 0xFF);
    let flags = cpu.flags();

    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.memory().read(0x0010), 0xF7);
    assert_eq!(cpu.flags(), flags);
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_smb_sets_one_bit() {
    let mut cpu = setup_cpu();

    // SMB7 $10
    cpu.memory_mut().write(0x8000, 0xF7);
    cpu.memory_mut().write(0x8001, 0x10);

    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.memory().read(0x0010), 0x80);
}

#[test]
fn test_every_rmb_smb_opcode() {
    for bit in 0..8u8 {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, (bit << 4) | 0x07);
        cpu.memory_mut().write(0x8001, 0x20);
        cpu.memory_mut().write(0x8002, ((bit + 8) << 4) | 0x07);
        cpu.memory_mut().write(0x8003, 0x21);
        cpu.memory_mut().write(0x0020, 0xFF);

        cpu.step();
        cpu.step();

        assert_eq!(cpu.memory().read(0x0020), !(1 << bit), "RMB{}", bit);
        assert_eq!(cpu.memory().read(0x0021), 1 << bit, "SMB{}", bit);
    }
}
