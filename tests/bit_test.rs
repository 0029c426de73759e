//! Tests for the BIT (Bit Test) instruction.
//!
//! Memory forms copy bits 7 and 6 of the operand into N and V; the 65C02
//! immediate form only updates Z.

use mpu65::{CpuConfig, FlatMemory, MemoryBus, Variant, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

fn setup_cmos_cpu() -> CPU<FlatMemory> {
    let config = CpuConfig::default()
        .with_variant(Variant::CMOS_65C02)
        .with_start_pc(0x8000);
    CPU::with_config(FlatMemory::new(), config)
}

// ========== NMOS Forms ==========

#[test]
fn test_bit_zero_page_copies_high_bits() {
    let mut cpu = setup_cpu();

    // BIT $10
    cpu.memory_mut().write(0x8000, 0x24);
    cpu.memory_mut().write(0x8001, 0x10);
    cpu.memory_mut().write(0x0010, 0xC0);
    cpu.set_a(0x01);

    cpu.step();

    assert!(cpu.flag_n());
    assert!(cpu.flag_v());
    assert!(cpu.flag_z(), "A & M is zero");
    assert_eq!(cpu.a(), 0x01, "BIT does not modify A");
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_bit_absolute_clears_flags() {
    let mut cpu = setup_cpu();

    // BIT $1234
    cpu.memory_mut().write(0x8000, 0x2C);
    cpu.memory_mut().write(0x8001, 0x34);
    cpu.memory_mut().write(0x8002, 0x12);
    cpu.memory_mut().write(0x1234, 0x01);
    cpu.set_a(0x01);
    cpu.set_flag_n(true);
    cpu.set_flag_v(true);

    cpu.step();

    assert!(!cpu.flag_n());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_z());
    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.cycles(), 4);
}

// ========== 65C02 Forms ==========

#[test]
fn test_bit_immediate_only_updates_zero() {
    let mut cpu = setup_cmos_cpu();

    // BIT #$C0
    cpu.memory_mut().write(0x8000, 0x89);
    cpu.memory_mut().write(0x8001, 0xC0);
    cpu.set_a(0x0F);

    cpu.step();

    assert!(cpu.flag_z());
    assert!(!cpu.flag_n(), "N untouched by immediate BIT");
    assert!(!cpu.flag_v(), "V untouched by immediate BIT");
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_bit_zero_page_x() {
    let mut cpu = setup_cmos_cpu();

    // BIT $10,X
    cpu.memory_mut().write(0x8000, 0x34);
    cpu.memory_mut().write(0x8001, 0x10);
    cpu.memory_mut().write(0x0013, 0x40);
    cpu.set_x(0x03);
    cpu.set_a(0x40);

    cpu.step();

    assert!(cpu.flag_v());
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_z());
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_bit_absolute_x_page_cross() {
    let mut cpu = setup_cmos_cpu();

    // BIT $12FF,X
    cpu.memory_mut().write(0x8000, 0x3C);
    cpu.memory_mut().write(0x8001, 0xFF);
    cpu.memory_mut().write(0x8002, 0x12);
    cpu.memory_mut().write(0x1300, 0x80);
    cpu.set_x(0x01);

    cpu.step();

    assert!(cpu.flag_n());
    assert!(cpu.flag_z());
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_bit_immediate_unassigned_on_nmos() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x89);
    cpu.memory_mut().write(0x8001, 0x00);
    let before = cpu.flags();

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.flags(), before);
}
