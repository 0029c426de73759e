//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the processor state and
//! the fetch-decode-execute loop shared by both variants.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: A, X, Y, PC, SP, P and the cycle counter (`Registers`)
//! - **Variant**: opcode table and behavioral switches (`Variant`)
//! - **Waiting**: set by the 65C02 `WAI` until an interrupt arrives
//! - **Memory**: any `MemoryBus` implementation, exclusively owned
//!
//! ## Execution Model
//!
//! The CPU executes instructions via:
//! - `step()`: Execute one instruction, returning the cycles it consumed
//! - `run_for_cycles()`: Execute until a cycle budget is exhausted
//! - `irq()` / `nmi()`: Service an interrupt request between instructions
//!
//! Execution never fails. Opcodes without an assigned instruction behave as
//! one-byte, two-cycle no-ops.

pub(crate) mod addressing;
mod interrupts;
mod stack;

pub use interrupts::{IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};
pub use stack::{stack_address, STACK_BASE};

pub(crate) use addressing::Operand;

use crate::{CpuConfig, MemoryBus, Registers, Status, Variant};
use log::trace;
use std::fmt;

/// 6502/65C02 CPU state and execution context.
///
/// The CPU struct contains all processor state including registers, flags,
/// program counter, stack pointer, and cycle counter. It is generic over the
/// memory implementation via the `MemoryBus` trait.
///
/// # Type Parameters
///
/// * `M` - Memory bus implementation (must implement `MemoryBus` trait)
///
/// # Examples
///
/// ```
/// use mpu65::{CPU, FlatMemory, MemoryBus};
///
/// // Create memory and set reset vector
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Low byte
/// memory.write(0xFFFD, 0x80); // High byte (PC = 0x8000)
///
/// // Initialize CPU - loads PC from reset vector
/// let cpu = CPU::new(memory);
///
/// // Inspect initial state
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFF);
/// assert_eq!(cpu.status(), 0x30); // BREAK | UNUSED
/// assert_eq!(cpu.cycles(), 0);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Architectural register file
    pub(crate) regs: Registers,

    /// Variant capabilities (opcode table, quirks)
    pub(crate) variant: Variant,

    /// Program counter forced on reset, if any
    pub(crate) start_pc: Option<u16>,

    /// Halted by WAI until the next interrupt
    pub(crate) waiting: bool,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates an NMOS 6502 with the given memory bus and performs a reset.
    ///
    /// # Arguments
    ///
    /// * `memory` - A MemoryBus implementation that provides the reset vector
    ///
    /// # Examples
    ///
    /// ```
    /// use mpu65::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    ///
    /// let cpu = CPU::new(mem);
    /// assert_eq!(cpu.pc(), 0x8000);
    /// ```
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    /// Creates a CPU from an explicit configuration and performs a reset.
    ///
    /// # Examples
    ///
    /// ```
    /// use mpu65::{CpuConfig, CPU, FlatMemory, Variant};
    ///
    /// let config = CpuConfig::default()
    ///     .with_variant(Variant::CMOS_65C02)
    ///     .with_start_pc(0x1234);
    /// let cpu = CPU::with_config(FlatMemory::new(), config);
    /// assert_eq!(cpu.pc(), 0x1234);
    /// ```
    pub fn with_config(memory: M, config: CpuConfig) -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            variant: config.variant,
            start_pc: config.start_pc,
            waiting: false,
            memory,
        };
        cpu.reset();
        cpu
    }

    /// Executes one instruction and returns the number of cycles it took.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. Fetch opcode byte at PC and advance PC
    /// 2. Look up instruction metadata in the variant's opcode table
    /// 3. Charge the base cycle cost
    /// 4. Resolve the operand and run the handler, which may add penalties
    ///
    /// While the CPU is waiting (after `WAI`), nothing is fetched and one
    /// cycle elapses.
    ///
    /// # Examples
    ///
    /// ```
    /// use mpu65::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// mem.write(0x8000, 0xEA); // NOP
    ///
    /// let mut cpu = CPU::new(mem);
    /// assert_eq!(cpu.step(), 2);
    /// assert_eq!(cpu.pc(), 0x8001);
    /// ```
    pub fn step(&mut self) -> u64 {
        if self.waiting {
            self.regs.cycles = self.regs.cycles.wrapping_add(1);
            return 1;
        }

        let start_cycles = self.regs.cycles;
        let pc = self.regs.pc;
        let opcode = self.fetch_byte();
        let metadata = self.variant.opcodes[opcode as usize];

        trace!("{:04X}  {:02X}  {}", pc, opcode, metadata.mnemonic);

        self.regs.cycles = self.regs.cycles.wrapping_add(metadata.base_cycles as u64);
        crate::instructions::execute(self, &metadata);

        self.regs.cycles.wrapping_sub(start_cycles)
    }

    /// Runs the CPU for a specified number of cycles.
    ///
    /// Executes instructions until the cycle budget is exhausted. Returns the
    /// actual number of cycles consumed (may be slightly more than budget due
    /// to instruction granularity).
    ///
    /// # Arguments
    ///
    /// * `cycle_budget` - Minimum number of cycles to execute
    ///
    /// # Examples
    ///
    /// ```
    /// use mpu65::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// mem.write(0x8000, 0x4C); // JMP $8000
    /// mem.write(0x8001, 0x00);
    /// mem.write(0x8002, 0x80);
    ///
    /// let mut cpu = CPU::new(mem);
    /// let consumed = cpu.run_for_cycles(10);
    /// assert_eq!(consumed, 12); // four 3-cycle jumps
    /// ```
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> u64 {
        let mut consumed: u64 = 0;

        // The cycle counter may wrap; track the budget separately
        while consumed < cycle_budget {
            consumed = consumed.saturating_add(self.step());
        }

        consumed
    }

    // ========== Fetch Helpers ==========

    /// Reads the byte at PC and advances PC.
    pub(crate) fn fetch_byte(&mut self) -> u8 {
        let value = self.memory.read(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    /// Reads the little-endian word at PC and advances PC by two.
    pub(crate) fn fetch_word(&mut self) -> u16 {
        let lo = self.fetch_byte() as u16;
        let hi = self.fetch_byte() as u16;
        (hi << 8) | lo
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.regs.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.regs.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.regs.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.regs.sp
    }

    /// Returns the status register as a packed byte (NV-BDIZC).
    ///
    /// Bit 5 always reads as 1.
    pub fn status(&self) -> u8 {
        (self.regs.p | Status::UNUSED).bits()
    }

    /// Returns the status register as flags.
    pub fn flags(&self) -> Status {
        self.regs.p
    }

    /// Returns the total number of CPU cycles executed since the last reset.
    pub fn cycles(&self) -> u64 {
        self.regs.cycles
    }

    /// Returns a snapshot of the register file.
    pub fn registers(&self) -> Registers {
        self.regs
    }

    /// Direct access to the register file, for fixtures and debuggers.
    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.regs
    }

    /// The variant being emulated.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// True while halted by `WAI`.
    pub fn waiting(&self) -> bool {
        self.waiting
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.regs.p.contains(Status::NEGATIVE)
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.regs.p.contains(Status::OVERFLOW)
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.regs.p.contains(Status::BREAK)
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.regs.p.contains(Status::DECIMAL)
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.regs.p.contains(Status::INTERRUPT)
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.regs.p.contains(Status::ZERO)
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.regs.p.contains(Status::CARRY)
    }

    // ========== Register Setters ==========

    /// Sets the accumulator register value.
    ///
    /// # Examples
    ///
    /// ```
    /// use mpu65::{CPU, FlatMemory};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.set_a(0x42);
    /// assert_eq!(cpu.a(), 0x42);
    /// ```
    pub fn set_a(&mut self, value: u8) {
        self.regs.a = value;
    }

    /// Sets the X index register value.
    pub fn set_x(&mut self, value: u8) {
        self.regs.x = value;
    }

    /// Sets the Y index register value.
    pub fn set_y(&mut self, value: u8) {
        self.regs.y = value;
    }

    /// Sets the program counter value.
    pub fn set_pc(&mut self, value: u16) {
        self.regs.pc = value;
    }

    /// Sets the stack pointer value.
    pub fn set_sp(&mut self, value: u8) {
        self.regs.sp = value;
    }

    /// Sets the status register from a packed byte. Bit 5 is forced high.
    pub fn set_status(&mut self, value: u8) {
        self.regs.p = Status::from_bits_retain(value) | Status::UNUSED;
    }

    /// Sets the cycle counter.
    pub fn set_cycles(&mut self, value: u64) {
        self.regs.cycles = value;
    }

    // ========== Status Flag Setters ==========

    /// Sets or clears the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.regs.p.set(Status::NEGATIVE, value);
    }

    /// Sets or clears the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.regs.p.set(Status::OVERFLOW, value);
    }

    /// Sets or clears the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.regs.p.set(Status::BREAK, value);
    }

    /// Sets or clears the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.regs.p.set(Status::DECIMAL, value);
    }

    /// Sets or clears the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.regs.p.set(Status::INTERRUPT, value);
    }

    /// Sets or clears the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.regs.p.set(Status::ZERO, value);
    }

    /// Sets or clears the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.regs.p.set(Status::CARRY, value);
    }

    // ========== Memory Access ==========

    /// Shared access to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Mutable access to the memory bus, for loading programs and fixtures.
    ///
    /// # Examples
    ///
    /// ```
    /// use mpu65::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.memory_mut().load(0x0000, &[0xA9, 0x01]); // LDA #$01
    /// cpu.step();
    /// assert_eq!(cpu.a(), 0x01);
    /// ```
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and returns its memory bus.
    pub fn into_memory(self) -> M {
        self.memory
    }
}

impl<M: MemoryBus> fmt::Display for CPU<M> {
    /// Two-line register dump:
    ///
    /// ```text
    ///       PC  AC XR YR SP NV-BDIZC
    /// 6502: 0000 00 00 00 ff 00110000
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = " ".repeat(self.variant.name.len() + 2);
        writeln!(f, "{}PC  AC XR YR SP NV-BDIZC", indent)?;
        write!(
            f,
            "{}: {:04x} {:02x} {:02x} {:02x} {:02x} {}",
            self.variant.name,
            self.regs.pc,
            self.regs.a,
            self.regs.x,
            self.regs.y,
            self.regs.sp,
            self.regs.p
        )
    }
}
