//! WASM API for the 6502 core.
//!
//! Provides JavaScript-callable interfaces for program loading, CPU control
//! and state inspection.

use crate::{FlatMemory, StepResult, CPU};
use wasm_bindgen::prelude::*;

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

/// Main CPU interface for JavaScript
#[wasm_bindgen]
pub struct NesCpu {
    cpu: CPU<FlatMemory>,
}

impl Default for NesCpu {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl NesCpu {
    /// Create a CPU over zeroed 64KB memory
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        NesCpu {
            cpu: CPU::default(),
        }
    }

    /// Load a program at $8000 and point the reset vector at it
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), JsError> {
        self.cpu
            .load_program(program)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Load a program at an arbitrary address
    pub fn load_at(&mut self, program: &[u8], start_addr: u16) -> Result<(), JsError> {
        self.cpu
            .load(program, start_addr)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Reset registers and reload PC from the reset vector
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Execute a single instruction, returning false once BRK is reached
    pub fn step(&mut self) -> bool {
        self.cpu.step() == StepResult::Continue
    }

    /// Run until BRK or until `max_instructions` have executed
    pub fn run(&mut self, max_instructions: u32) -> Result<u32, JsError> {
        self.cpu
            .run_for_instructions(max_instructions as u64)
            .map(|n| n as u32)
            .map_err(|e| JsError::new(&e.to_string()))
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
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flag_z()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flag_n()
    }

    // Register setters

    pub fn set_a(&mut self, value: u8) {
        self.cpu.set_a(value);
    }

    pub fn set_x(&mut self, value: u8) {
        self.cpu.set_x(value);
    }

    pub fn set_y(&mut self, value: u8) {
        self.cpu.set_y(value);
    }

    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    pub fn set_status(&mut self, value: u8) {
        self.cpu.set_status(value);
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.read_byte(addr)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.write_byte(addr, value);
    }

    /// Read a 256-byte page from memory (for efficient display)
    pub fn get_memory_page(&self, page: u8) -> Vec<u8> {
        let start = (page as u16) << 8;
        (0..=0xFF_u8)
            .map(|i| self.cpu.read_byte(start | i as u16))
            .collect()
    }
}
