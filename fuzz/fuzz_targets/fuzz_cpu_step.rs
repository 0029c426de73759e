//! Fuzz target for CPU step execution.
//!
//! This target creates arbitrary CPU states and memory contents for either
//! variant, then executes a few instructions and interrupts to find panics
//! and broken invariants.

#![no_main]

use arbitrary::Arbitrary;
use mpu65::{CpuConfig, FlatMemory, MemoryBus, Variant, CPU};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    /// Emulate the 65C02 instead of the 6502
    cmos: bool,
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    /// Raw status byte
    p: u8,
}

/// Memory region for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (a few instructions)
    instruction_bytes: [u8; 8],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// Small region of memory for testing absolute addressing
    main_memory: [u8; 256],
}

/// Interrupt raised between steps
#[derive(Debug, Arbitrary)]
enum FuzzEvent {
    Step,
    Irq,
    Nmi,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    events: Vec<FuzzEvent>,
}

fuzz_target!(|input: FuzzInput| {
    if input.events.len() > 64 {
        return;
    }

    let mut memory = FlatMemory::new();

    // IRQ and NMI handlers at 0x9000 and 0xA000
    memory.write(0xFFFE, 0x00);
    memory.write(0xFFFF, 0x90);
    memory.write(0xFFFA, 0x00);
    memory.write(0xFFFB, 0xA0);

    memory.load(0x8000, &input.memory.instruction_bytes);
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0x4000, &input.memory.main_memory);

    let variant = if input.cpu_state.cmos {
        Variant::CMOS_65C02
    } else {
        Variant::NMOS_6502
    };
    let config = CpuConfig::default()
        .with_variant(variant)
        .with_start_pc(0x8000);
    let mut cpu = CPU::with_config(memory, config);

    {
        let regs = cpu.registers_mut();
        regs.a = input.cpu_state.a;
        regs.x = input.cpu_state.x;
        regs.y = input.cpu_state.y;
        regs.sp = input.cpu_state.sp;
    }
    cpu.set_status(input.cpu_state.p);

    for event in &input.events {
        let before = cpu.cycles();
        match event {
            FuzzEvent::Step => {
                let cycles = cpu.step();
                // No instruction is cheaper than an idle WAI cycle or longer than 7
                assert!((1..=7).contains(&cycles));
                assert_eq!(cpu.cycles(), before + cycles);
            }
            FuzzEvent::Irq => {
                if cpu.irq() {
                    assert_eq!(cpu.pc(), 0x9000);
                    assert!(cpu.flag_i());
                }
                assert!(!cpu.waiting());
            }
            FuzzEvent::Nmi => {
                cpu.nmi();
                assert_eq!(cpu.pc(), 0xA000);
                assert_eq!(cpu.cycles(), before + 7);
            }
        }

        // Bit 5 always reads as set
        assert_eq!(cpu.status() & 0x20, 0x20);
    }
});
