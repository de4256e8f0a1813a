//! Intel 8080 CPU core.
//!
//! The core owns its registers, flags and a single flat memory buffer. An
//! external run loop drives it one instruction at a time through
//! [`Cpu8080::step`], delivers interrupts with [`Cpu8080::interrupt`] and
//! reads memory back for rendering.

pub mod config;
pub mod cpu;
pub mod error;
pub mod memory;

pub use config::{CpuConfig, WriteWindow};
pub use cpu::flags::{parity, parity_bits, Flags, StatusFlags};
pub use cpu::regs::Registers;
pub use cpu::table::{OpcodeEntry, INVALID_OPCODES, OPCODE_TABLE};
pub use cpu::{Cpu8080, Instruction, PortAccess, StepOutcome};
pub use error::{CpuError, Result};
pub use memory::Memory;
