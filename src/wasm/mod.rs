//! WebAssembly bindings for the mpu65 emulator.
//!
//! This module provides JavaScript-callable interfaces to the 6502/65C02
//! emulator, enabling browser-based execution of machine code.

pub mod api;

pub use api::Emulator;
