use crate::cpu::{Cpu8080, Flow, Instruction};
use crate::error::Result;

impl Cpu8080 {
    /// MOV r1,r2 (40–7F except 76).
    pub(crate) fn exec_mov(&mut self, ins: Instruction) -> Result<Flow> {
        let dst = (ins.opcode >> 3) & 0x07;
        let src = ins.opcode & 0x07;
        let value = self.read_reg8(src)?;
        self.write_reg8(dst, value)?;
        Ok(Flow::Next)
    }

    /// MVI r,d8.
    pub(crate) fn exec_mvi(&mut self, ins: Instruction) -> Result<Flow> {
        let dst = (ins.opcode >> 3) & 0x07;
        self.write_reg8(dst, ins.lo)?;
        Ok(Flow::Next)
    }

    /// LXI rp,d16.
    pub(crate) fn exec_lxi(&mut self, ins: Instruction) -> Result<Flow> {
        self.write_pair(ins.opcode >> 4, ins.word());
        Ok(Flow::Next)
    }

    /// STAX B / STAX D.
    pub(crate) fn exec_stax(&mut self, ins: Instruction) -> Result<Flow> {
        debug_assert!(matches!(ins.opcode, 0x02 | 0x12));
        let addr = self.read_pair(ins.opcode >> 4);
        self.write_memory(addr, self.regs.a)?;
        Ok(Flow::Next)
    }

    /// LDAX B / LDAX D.
    pub(crate) fn exec_ldax(&mut self, ins: Instruction) -> Result<Flow> {
        debug_assert!(matches!(ins.opcode, 0x0a | 0x1a));
        let addr = self.read_pair(ins.opcode >> 4);
        self.regs.a = self.read_memory(addr)?;
        Ok(Flow::Next)
    }

    pub(crate) fn exec_sta(&mut self, ins: Instruction) -> Result<Flow> {
        self.write_memory(ins.word(), self.regs.a)?;
        Ok(Flow::Next)
    }

    pub(crate) fn exec_lda(&mut self, ins: Instruction) -> Result<Flow> {
        self.regs.a = self.read_memory(ins.word())?;
        Ok(Flow::Next)
    }

    /// SHLD a16: L to addr, H to addr+1.
    pub(crate) fn exec_shld(&mut self, ins: Instruction) -> Result<Flow> {
        let addr = ins.word();
        self.write_memory(addr, self.regs.l)?;
        self.write_memory(addr.wrapping_add(1), self.regs.h)?;
        Ok(Flow::Next)
    }

    /// LHLD a16: L from addr, H from addr+1.
    pub(crate) fn exec_lhld(&mut self, ins: Instruction) -> Result<Flow> {
        let addr = ins.word();
        let l = self.read_memory(addr)?;
        let h = self.read_memory(addr.wrapping_add(1))?;
        self.regs.l = l;
        self.regs.h = h;
        Ok(Flow::Next)
    }

    /// XCHG: swap DE and HL.
    pub(crate) fn exec_xchg(&mut self, _ins: Instruction) -> Result<Flow> {
        std::mem::swap(&mut self.regs.d, &mut self.regs.h);
        std::mem::swap(&mut self.regs.e, &mut self.regs.l);
        Ok(Flow::Next)
    }
}
