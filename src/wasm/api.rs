//! WASM API for the emulator.
//!
//! Provides JavaScript-callable interfaces for CPU control, state inspection,
//! console I/O and disassembly.
//!
//! ## Console ports
//!
//! - `$F001` (write): each byte stored is passed to the `on_output` callback
//! - `$F004` (read): returns the next byte queued with `receive_char`, or 0

use crate::{
    disassemble_at, CpuConfig, FlatMemory, MemoryBus, ObservableMemory, Variant, CPU,
};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// Address of the console output port.
pub const PUTC_ADDRESS: u16 = 0xF001;

/// Address of the console input port.
pub const GETC_ADDRESS: u16 = 0xF004;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

/// Result of disassembly operation
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DisassemblyLine {
    address: u16,
    bytes: Vec<u8>,
    text: String,
}

#[wasm_bindgen]
impl DisassemblyLine {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u16 {
        self.address
    }

    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }
}

fn console_memory(
    on_output: js_sys::Function,
    input: Rc<RefCell<VecDeque<u8>>>,
) -> ObservableMemory<FlatMemory> {
    let mut memory = ObservableMemory::new(FlatMemory::new());

    memory.subscribe_to_write([PUTC_ADDRESS], move |_addr, byte| {
        let _ = on_output.call1(&JsValue::NULL, &JsValue::from(byte));
        None
    });
    memory.subscribe_to_read([GETC_ADDRESS], move |_addr| {
        Some(input.borrow_mut().pop_front().unwrap_or(0))
    });

    memory
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator {
    cpu: CPU<ObservableMemory<FlatMemory>>,
    input: Rc<RefCell<VecDeque<u8>>>,
    program_start: u16,
    program_end: u16,
}

#[wasm_bindgen]
impl Emulator {
    /// Create an emulator for the named variant ("6502" or "65C02").
    ///
    /// `on_output` is called with every byte written to the output port.
    #[wasm_bindgen(constructor)]
    pub fn new(variant: &str, on_output: js_sys::Function) -> Result<Emulator, JsError> {
        let variant: Variant = variant
            .parse()
            .map_err(|e: crate::ConfigError| JsError::new(&e.to_string()))?;

        let input = Rc::new(RefCell::new(VecDeque::new()));
        let memory = console_memory(on_output, Rc::clone(&input));
        let config = CpuConfig::default().with_variant(variant);

        Ok(Emulator {
            cpu: CPU::with_config(memory, config),
            input,
            program_start: 0x0000,
            program_end: 0x0000,
        })
    }

    /// Execute a single instruction and return the cycles it took
    pub fn step(&mut self) -> u32 {
        self.cpu.step() as u32
    }

    /// Execute multiple cycles and return actual cycles executed
    pub fn run_for_cycles(&mut self, cycles: u32) -> u32 {
        self.cpu.run_for_cycles(cycles as u64) as u32
    }

    /// Reset the CPU; memory is kept
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Raise a maskable interrupt; returns whether it was taken
    pub fn irq(&mut self) -> bool {
        self.cpu.irq()
    }

    /// Raise a non-maskable interrupt
    pub fn nmi(&mut self) {
        self.cpu.nmi();
    }

    /// Name of the emulated variant
    #[wasm_bindgen(getter)]
    pub fn variant(&self) -> String {
        self.cpu.variant().name.to_string()
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64 // Convert u64 to f64 for JavaScript
    }

    #[wasm_bindgen(getter)]
    pub fn waiting(&self) -> bool {
        self.cpu.waiting()
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flag_n()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.flag_v()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.cpu.flag_d()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.flag_i()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flag_z()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flag_c()
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    /// Queue a byte for the input port
    pub fn receive_char(&mut self, byte: u8) {
        self.input.borrow_mut().push_back(byte);
    }

    // Memory access methods

    /// Read a single byte from memory (input port reads consume input)
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.memory().read(addr)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }

    /// Read a 256-byte page from memory without triggering the ports
    pub fn get_memory_page(&self, page: u8) -> Vec<u8> {
        let start = (page as u16) << 8;
        (0..256)
            .map(|i| self.cpu.memory().subject().read(start + i))
            .collect()
    }

    /// Load a program into memory and set PC
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) {
        self.cpu.memory_mut().write_bytes(start_addr, program);
        self.cpu.set_pc(start_addr);
        self.program_start = start_addr;
        self.program_end = start_addr.wrapping_add(program.len() as u16);
    }

    /// Disassemble memory starting at an address
    pub fn disassemble(&self, start_addr: u16, num_instructions: u32) -> Vec<JsValue> {
        let memory = self.cpu.memory().subject();
        let table = self.cpu.variant().opcodes;
        let mut address = start_addr;

        (0..num_instructions)
            .map(|_| {
                let (length, text) = disassemble_at(memory, table, address);
                let bytes = (0..length as u16)
                    .map(|offset| memory.read(address.wrapping_add(offset)))
                    .collect();
                let line = DisassemblyLine {
                    address,
                    bytes,
                    text,
                };
                address = address.wrapping_add(length as u16);
                JsValue::from(line)
            })
            .collect()
    }

    /// Get the program start address
    #[wasm_bindgen(getter)]
    pub fn program_start(&self) -> u16 {
        self.program_start
    }

    /// Get the program end address
    #[wasm_bindgen(getter)]
    pub fn program_end(&self) -> u16 {
        self.program_end
    }
}
