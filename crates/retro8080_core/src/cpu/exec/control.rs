use crate::cpu::{Cpu8080, Flow, Instruction};
use crate::error::Result;

impl Cpu8080 {
    /// JMP a16.
    pub(crate) fn exec_jmp(&mut self, ins: Instruction) -> Result<Flow> {
        Ok(Flow::Jump(ins.word()))
    }

    /// Jcc a16: falls through past the 3-byte instruction when not taken.
    pub(crate) fn exec_jcc(&mut self, ins: Instruction) -> Result<Flow> {
        debug_assert_eq!(ins.opcode & 0xc7, 0xc2);
        if self.condition(ins.opcode >> 3) {
            Ok(Flow::Jump(ins.word()))
        } else {
            Ok(Flow::Next)
        }
    }

    /// CALL a16: push the address of the next instruction and jump.
    pub(crate) fn exec_call(&mut self, ins: Instruction) -> Result<Flow> {
        self.call(ins.word())
    }

    /// Ccc a16.
    pub(crate) fn exec_ccc(&mut self, ins: Instruction) -> Result<Flow> {
        debug_assert_eq!(ins.opcode & 0xc7, 0xc4);
        if self.condition(ins.opcode >> 3) {
            self.call(ins.word())
        } else {
            Ok(Flow::Next)
        }
    }

    pub(crate) fn exec_ret(&mut self, _ins: Instruction) -> Result<Flow> {
        Ok(Flow::Jump(self.pop_word()?))
    }

    /// Rcc: falls through to the next byte when not taken.
    pub(crate) fn exec_rcc(&mut self, ins: Instruction) -> Result<Flow> {
        debug_assert_eq!(ins.opcode & 0xc7, 0xc0);
        if self.condition(ins.opcode >> 3) {
            Ok(Flow::Jump(self.pop_word()?))
        } else {
            Ok(Flow::Next)
        }
    }

    /// RST n: push PC+1 and jump to `8 * n`.
    pub(crate) fn exec_rst(&mut self, ins: Instruction) -> Result<Flow> {
        debug_assert_eq!(ins.opcode & 0xc7, 0xc7);
        self.push_word(self.pc.wrapping_add(1))?;
        Ok(Flow::Jump(u16::from(ins.opcode & 0x38)))
    }

    /// PCHL: PC = HL.
    pub(crate) fn exec_pchl(&mut self, _ins: Instruction) -> Result<Flow> {
        Ok(Flow::Jump(self.regs.hl()))
    }

    fn call(&mut self, target: u16) -> Result<Flow> {
        self.push_word(self.pc.wrapping_add(3))?;
        Ok(Flow::Jump(target))
    }
}
