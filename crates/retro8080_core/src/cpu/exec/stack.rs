use crate::cpu::flags::Flags;
use crate::cpu::{Cpu8080, Flow, Instruction};
use crate::error::Result;

impl Cpu8080 {
    /// PUSH B/D/H/PSW.
    ///
    /// PSW pushes A as the high byte and the packed status byte as the low
    /// byte.
    pub(crate) fn exec_push(&mut self, ins: Instruction) -> Result<Flow> {
        debug_assert!(matches!(ins.opcode, 0xc5 | 0xd5 | 0xe5 | 0xf5));
        let (high, low) = match (ins.opcode >> 4) & 0x03 {
            0 => (self.regs.b, self.regs.c),
            1 => (self.regs.d, self.regs.e),
            2 => (self.regs.h, self.regs.l),
            _ => (self.regs.a, self.flags.to_u8()),
        };
        self.push(high, low)?;
        Ok(Flow::Next)
    }

    /// POP B/D/H/PSW.
    pub(crate) fn exec_pop(&mut self, ins: Instruction) -> Result<Flow> {
        debug_assert!(matches!(ins.opcode, 0xc1 | 0xd1 | 0xe1 | 0xf1));
        let (high, low) = self.pop()?;
        match (ins.opcode >> 4) & 0x03 {
            0 => (self.regs.b, self.regs.c) = (high, low),
            1 => (self.regs.d, self.regs.e) = (high, low),
            2 => (self.regs.h, self.regs.l) = (high, low),
            _ => {
                self.regs.a = high;
                self.flags = Flags::from_u8(low);
            }
        }
        Ok(Flow::Next)
    }

    /// XTHL: exchange HL with the word on top of the stack.
    pub(crate) fn exec_xthl(&mut self, _ins: Instruction) -> Result<Flow> {
        let sp = self.sp;
        let low = self.read_memory(sp)?;
        let high = self.read_memory(sp.wrapping_add(1))?;
        self.write_memory(sp, self.regs.l)?;
        self.write_memory(sp.wrapping_add(1), self.regs.h)?;
        self.regs.h = high;
        self.regs.l = low;
        Ok(Flow::Next)
    }

    /// SPHL: SP = HL.
    pub(crate) fn exec_sphl(&mut self, _ins: Instruction) -> Result<Flow> {
        self.sp = self.regs.hl();
        Ok(Flow::Next)
    }
}
