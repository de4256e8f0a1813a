mod alu;
mod exec;
pub mod flags;
pub mod regs;
mod report;
pub mod table;


use std::path::Path;

use crate::config::CpuConfig;
use crate::error::{CpuError, Result};
use crate::memory::Memory;
use flags::Flags;
use regs::Registers;
use table::OPCODE_TABLE;

/// One decoded instruction: the opcode and up to two operand bytes.
///
/// Operands the opcode does not use are ignored. For 16-bit operands `lo`
/// is the byte at PC+1 and `hi` the byte at PC+2.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: u8,
    pub lo: u8,
    pub hi: u8,
}

impl Instruction {
    pub const fn new(opcode: u8, lo: u8, hi: u8) -> Self {
        Self { opcode, lo, hi }
    }

    /// An instruction without operands.
    pub const fn implied(opcode: u8) -> Self {
        Self::new(opcode, 0, 0)
    }

    /// An instruction with one immediate byte.
    pub const fn imm8(opcode: u8, value: u8) -> Self {
        Self::new(opcode, value, 0)
    }

    /// An instruction with a 16-bit immediate or address.
    pub const fn imm16(opcode: u8, value: u16) -> Self {
        let [lo, hi] = value.to_le_bytes();
        Self::new(opcode, lo, hi)
    }

    #[inline]
    pub fn word(&self) -> u16 {
        u16::from_le_bytes([self.lo, self.hi])
    }
}

/// An I/O port access made by `IN` or `OUT`.
///
/// The core has no devices: `IN` leaves A untouched and `OUT` goes nowhere.
/// The run loop sees the access in the step result and may service it, e.g.
/// by writing the input byte to `cpu.regs.a` after an `Input`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PortAccess {
    Input(u8),
    Output { port: u8, value: u8 },
}

/// What a call to [`Cpu8080::step`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Executed {
        opcode: u8,
        length: u8,
        port: Option<PortAccess>,
    },
    /// A pending interrupt was taken instead of fetching an opcode.
    Interrupt { vector: u8 },
}

/// How an instruction leaves the program counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Flow {
    /// Advance past the instruction.
    Next,
    /// Transfer control to an absolute address.
    Jump(u16),
    /// Advance past the instruction and report a port access.
    Port(PortAccess),
}

/// Intel 8080 CPU core.
///
/// Owns the registers, flags and memory. Nothing runs on its own: the caller
/// drives execution with [`Cpu8080::step`] and stops whenever it likes.
#[derive(Clone, Debug)]
pub struct Cpu8080 {
    pub regs: Registers,
    pub flags: Flags,
    pub pc: u16,
    pub sp: u16,
    pub interrupts_enabled: bool,
    pending_interrupt: Option<u8>,
    memory: Memory,
    config: CpuConfig,
}

impl Default for Cpu8080 {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu8080 {
    /// Create a CPU with zeroed registers and no memory.
    pub fn new() -> Self {
        Self::with_config(CpuConfig::default())
    }

    pub fn with_config(config: CpuConfig) -> Self {
        Self {
            regs: Registers::default(),
            flags: Flags::default(),
            pc: 0,
            sp: 0,
            interrupts_enabled: false,
            pending_interrupt: None,
            memory: Memory::new(config.write_window),
            config,
        }
    }

    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    /// Reset registers, flags and interrupt state. Memory is kept.
    pub fn reset(&mut self) {
        self.regs = Registers::default();
        self.flags = Flags::default();
        self.pc = 0;
        self.sp = 0;
        self.interrupts_enabled = false;
        self.pending_interrupt = None;
    }

    /// Snapshot of the register file.
    pub fn registers(&self) -> Registers {
        self.regs
    }

    /// Snapshot of the condition flags.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn pc(&self) -> u16 {
        self.pc
    }

    pub fn set_pc(&mut self, pc: u16) {
        self.pc = pc;
    }

    pub fn sp(&self) -> u16 {
        self.sp
    }

    pub fn set_sp(&mut self, sp: u16) {
        self.sp = sp;
    }

    pub fn pending_interrupt(&self) -> Option<u8> {
        self.pending_interrupt
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    /// Replace memory with `size` zeroed bytes. Registers are untouched.
    pub fn allocate_memory(&mut self, size: usize) {
        self.memory.allocate(size);
    }

    /// Load a raw image at address 0, allocating memory to fit it.
    pub fn load_image(&mut self, image: &[u8]) -> usize {
        let loaded = self.memory.load_image(image, self.config.min_memory_size);
        log::debug!(
            "Loaded {loaded} byte image into {} bytes of memory",
            self.memory.len()
        );
        loaded
    }

    /// Read a ROM file and load it at address 0.
    pub fn load_rom<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let image = std::fs::read(path).map_err(|source| CpuError::RomLoad {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.load_image(&image))
    }

    pub fn read_memory(&self, addr: u16) -> Result<u8> {
        self.memory.read(addr as usize)
    }

    /// Store through the write window; see [`crate::WriteWindow`].
    pub fn write_memory(&mut self, addr: u16, value: u8) -> Result<()> {
        self.memory.write(addr as usize, value)
    }

    /// Byte at HL, the `M` operand.
    #[inline]
    pub fn read_m(&self) -> Result<u8> {
        self.read_memory(self.regs.hl())
    }

    #[inline]
    pub fn write_m(&mut self, value: u8) -> Result<()> {
        self.write_memory(self.regs.hl(), value)
    }

    /// Push two bytes: afterwards `memory[SP] == low` and
    /// `memory[SP + 1] == high`.
    ///
    /// SP only moves once both stores succeeded.
    pub fn push(&mut self, high: u8, low: u8) -> Result<()> {
        let sp = self.sp.wrapping_sub(2);
        self.write_memory(sp, low)?;
        self.write_memory(sp.wrapping_add(1), high)?;
        self.sp = sp;
        Ok(())
    }

    /// Pop two bytes pushed by [`Cpu8080::push`], returning `(high, low)`.
    pub fn pop(&mut self) -> Result<(u8, u8)> {
        let low = self.read_memory(self.sp)?;
        let high = self.read_memory(self.sp.wrapping_add(1))?;
        self.sp = self.sp.wrapping_add(2);
        Ok((high, low))
    }

    #[inline]
    fn push_word(&mut self, value: u16) -> Result<()> {
        let [high, low] = value.to_be_bytes();
        self.push(high, low)
    }

    #[inline]
    fn pop_word(&mut self) -> Result<u16> {
        let (high, low) = self.pop()?;
        Ok(u16::from_be_bytes([high, low]))
    }

    /// Request a restart to vector `n` (0–7) on the next [`Cpu8080::step`].
    ///
    /// The run loop calls this between steps; Space Invaders expects RST 1
    /// mid-frame and RST 2 at the end of each frame.
    pub fn interrupt(&mut self, n: u8) {
        let vector = n & 0x07;
        if let Some(previous) = self.pending_interrupt.replace(vector) {
            log::trace!("RST {previous} replaced by RST {vector} before delivery");
        }
    }

    /// Fetch, decode and execute one instruction at PC, or take a pending
    /// interrupt.
    pub fn step(&mut self) -> Result<StepOutcome> {
        if let Some(vector) = self.pending_interrupt.take() {
            if self.interrupts_enabled {
                self.service_interrupt(vector)?;
                return Ok(StepOutcome::Interrupt { vector });
            }
            log::trace!("Dropped RST {vector}: interrupts disabled");
        }

        let instruction = self.fetch()?;
        self.execute(instruction)
    }

    /// Execute `instruction` as if it had been fetched at the current PC.
    ///
    /// Operand bytes come from the argument, not from memory, so single
    /// instructions can be exercised without a program image.
    pub fn execute(&mut self, instruction: Instruction) -> Result<StepOutcome> {
        let entry = &OPCODE_TABLE[instruction.opcode as usize];
        log::trace!(
            "{pc:04X}: {opcode:02X} {mnemonic}",
            pc = self.pc,
            opcode = instruction.opcode,
            mnemonic = entry.mnemonic,
        );

        let mut port = None;
        match (entry.handler)(self, instruction)? {
            Flow::Next => self.pc = self.pc.wrapping_add(u16::from(entry.length)),
            Flow::Jump(addr) => self.pc = addr,
            Flow::Port(access) => {
                self.pc = self.pc.wrapping_add(u16::from(entry.length));
                port = Some(access);
            }
        }

        Ok(StepOutcome::Executed {
            opcode: instruction.opcode,
            length: entry.length,
            port,
        })
    }

    fn fetch(&self) -> Result<Instruction> {
        let opcode = self.read_memory(self.pc)?;
        let length = OPCODE_TABLE[opcode as usize].length;
        let lo = if length > 1 {
            self.read_memory(self.pc.wrapping_add(1))?
        } else {
            0
        };
        let hi = if length > 2 {
            self.read_memory(self.pc.wrapping_add(2))?
        } else {
            0
        };
        Ok(Instruction::new(opcode, lo, hi))
    }

    /// Behave like `RST vector` issued between instructions: push PC, jump
    /// to `8 * vector`, and mask further interrupts until the next EI.
    fn service_interrupt(&mut self, vector: u8) -> Result<()> {
        let ret = self.pc;
        self.push_word(ret)?;
        self.pc = u16::from(vector) << 3;
        self.interrupts_enabled = false;
        log::trace!("Took RST {vector} from PC=0x{ret:04X}");
        Ok(())
    }
}
