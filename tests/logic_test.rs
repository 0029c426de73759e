//! Tests for the logical and compare instructions.
//!
//! Tests cover:
//! - AND / ORA / EOR results and N, Z updates
//! - CMP / CPX / CPY carry semantics (register >= operand)
//! - Shifts and rotates on the accumulator and memory

use mpu65::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

fn run_immediate(cpu: &mut CPU<FlatMemory>, opcode: u8, operand: u8) -> u64 {
    cpu.memory_mut().write(0x8000, opcode);
    cpu.memory_mut().write(0x8001, operand);
    cpu.step()
}

// ========== Bitwise Logic ==========

#[test]
fn test_and_immediate() {
    let mut cpu = setup_cpu();
    cpu.set_a(0xF0);

    assert_eq!(run_immediate(&mut cpu, 0x29, 0x0F), 2);
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_ora_immediate_sets_negative() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x01);

    run_immediate(&mut cpu, 0x09, 0x80);
    assert_eq!(cpu.a(), 0x81);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_eor_zero_page() {
    let mut cpu = setup_cpu();

    // EOR $20
    cpu.memory_mut().write(0x8000, 0x45);
    cpu.memory_mut().write(0x8001, 0x20);
    cpu.memory_mut().write(0x0020, 0xFF);
    cpu.set_a(0x0F);

    assert_eq!(cpu.step(), 3);
    assert_eq!(cpu.a(), 0xF0);
    assert!(cpu.flag_n());
}

#[test]
fn test_logic_leaves_carry_and_overflow() {
    let mut cpu = setup_cpu();
    cpu.set_flag_c(true);
    cpu.set_flag_v(true);
    cpu.set_a(0xFF);

    run_immediate(&mut cpu, 0x29, 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_v());
}

// ========== Compares ==========

#[test]
fn test_cmp_greater() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x50);

    run_immediate(&mut cpu, 0xC9, 0x30);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.a(), 0x50, "CMP does not modify A");
}

#[test]
fn test_cmp_equal() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x42);

    run_immediate(&mut cpu, 0xC9, 0x42);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
}

#[test]
fn test_cmp_less() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x10);

    run_immediate(&mut cpu, 0xC9, 0x20);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n(), "0x10 - 0x20 = 0xF0");
}

#[test]
fn test_cpx_and_cpy() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x05);

    run_immediate(&mut cpu, 0xE0, 0x05);
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());

    let mut cpu = setup_cpu();
    cpu.set_y(0x00);

    run_immediate(&mut cpu, 0xC0, 0x01);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

// ========== Shifts and Rotates ==========

#[test]
fn test_asl_accumulator() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x0A);
    cpu.set_a(0x81);

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.a(), 0x02);
    assert!(cpu.flag_c());
    assert_eq!(cpu.pc(), 0x8001);
}

#[test]
fn test_lsr_zero_page() {
    let mut cpu = setup_cpu();

    // LSR $10
    cpu.memory_mut().write(0x8000, 0x46);
    cpu.memory_mut().write(0x8001, 0x10);
    cpu.memory_mut().write(0x0010, 0x01);

    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.memory().read(0x0010), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
}

#[test]
fn test_rol_through_carry() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x2A);
    cpu.set_a(0x40);
    cpu.set_flag_c(true);

    cpu.step();
    assert_eq!(cpu.a(), 0x81);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_ror_absolute_x_has_no_page_penalty() {
    let mut cpu = setup_cpu();

    // ROR $20FF,X
    cpu.memory_mut().write(0x8000, 0x7E);
    cpu.memory_mut().write(0x8001, 0xFF);
    cpu.memory_mut().write(0x8002, 0x20);
    cpu.memory_mut().write(0x2100, 0x01);
    cpu.set_x(0x01);
    cpu.set_flag_c(true);

    assert_eq!(cpu.step(), 7);
    assert_eq!(cpu.memory().read(0x2100), 0x80);
    assert!(cpu.flag_c());
    assert!(cpu.flag_n());
}
