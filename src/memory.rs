//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from specific
//! memory implementations. This enables flexible memory configurations including:
//!
//! - Flat RAM of any power-of-two size up to 64KB (`FlatMemory`)
//! - Memory-mapped I/O via read/write observers (`ObservableMemory`)
//! - Test doubles that record or script accesses
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6502 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - The CPU never bounds-checks; whatever the bus does with an address is
//!   what the program sees
//! - Simple signatures for WASM compatibility

use crate::ConfigError;

/// Memory bus trait for CPU to read/write bytes.
///
/// Implementations of this trait provide the memory backend for the CPU.
/// The CPU accesses all memory (RAM, ROM, I/O) through this abstraction.
///
/// # Design
///
/// - `read(&self)`: Immutable reference allows shared reads
/// - `write(&mut self)`: Mutable reference makes side effects explicit
/// - No error types: 6502 hardware has no bus error mechanism
///
/// # Examples
///
/// ```
/// use mpu65::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use mpu65::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],  // 32KB RAM (0x0000-0x7FFF)
///     rom: [u8; 0x8000],  // 32KB ROM (0x8000-0xFFFF)
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM (0x8000+) are silently ignored
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// Must be total over the full address range.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// Must be total over the full address range; read-only or unmapped
    /// locations may ignore the write.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian 16-bit word at `addr` and `addr + 1`.
    ///
    /// The second address wraps from 0xFFFF to 0x0000.
    fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Writes a block of bytes starting at `start`, wrapping at 0xFFFF.
    fn load(&mut self, start: u16, bytes: &[u8]) {
        let mut addr = start;
        for &byte in bytes {
            self.write(addr, byte);
            addr = addr.wrapping_add(1);
        }
    }
}

/// Largest supported address width in bits.
pub const MAX_ADDRESS_WIDTH: u32 = 16;

/// Simple flat memory implementation.
///
/// All `2^width` cells are writable RAM. The default width is 16 bits
/// (65536 cells). With a narrower width the upper address lines are not
/// decoded, so addresses beyond the array mirror the lower cells.
///
/// # Examples
///
/// ```
/// use mpu65::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Reset vector low byte
/// memory.write(0xFFFD, 0x80); // Reset vector high byte (PC = 0x8000)
/// memory.write(0x8000, 0xEA); // NOP
///
/// let cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatMemory {
    data: Box<[u8]>,
    mask: u16,
}

impl FlatMemory {
    /// Creates a new 64KB FlatMemory instance with all bytes initialized to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use mpu65::{FlatMemory, MemoryBus};
    ///
    /// let mem = FlatMemory::new();
    /// assert_eq!(mem.read(0x0000), 0x00);
    /// assert_eq!(mem.read(0xFFFF), 0x00);
    /// ```
    pub fn new() -> Self {
        Self::filled(0x00)
    }

    /// Creates a 64KB FlatMemory with every cell set to `value`.
    pub fn filled(value: u8) -> Self {
        Self {
            data: vec![value; 1 << MAX_ADDRESS_WIDTH].into_boxed_slice(),
            mask: 0xFFFF,
        }
    }

    /// Creates a zeroed memory of `2^width` cells.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidAddressWidth` unless `1 <= width <= 16`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mpu65::{ConfigError, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::with_address_width(12).unwrap();
    /// assert_eq!(mem.len(), 4096);
    /// mem.write(0x1005, 0x42);
    /// assert_eq!(mem.read(0x0005), 0x42); // mirrored
    ///
    /// assert_eq!(
    ///     FlatMemory::with_address_width(17),
    ///     Err(ConfigError::InvalidAddressWidth(17))
    /// );
    /// ```
    pub fn with_address_width(width: u32) -> Result<Self, ConfigError> {
        if width == 0 || width > MAX_ADDRESS_WIDTH {
            return Err(ConfigError::InvalidAddressWidth(width));
        }
        let size = 1usize << width;
        Ok(Self {
            data: vec![0; size].into_boxed_slice(),
            mask: (size - 1) as u16,
        })
    }

    /// Number of byte cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false; a FlatMemory holds at least two cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw view of the cells.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[(addr & self.mask) as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[(addr & self.mask) as usize] = value;
    }
}
