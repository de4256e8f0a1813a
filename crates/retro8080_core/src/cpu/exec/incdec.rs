use crate::cpu::{Cpu8080, Flow, Instruction};
use crate::error::Result;

impl Cpu8080 {
    /// INR r / INR M.
    pub(crate) fn exec_inr(&mut self, ins: Instruction) -> Result<Flow> {
        let index = (ins.opcode >> 3) & 0x07;
        let value = self.read_reg8(index)?;
        let result = self.alu_inr(value);
        self.write_reg8(index, result)?;
        Ok(Flow::Next)
    }

    /// DCR r / DCR M.
    pub(crate) fn exec_dcr(&mut self, ins: Instruction) -> Result<Flow> {
        let index = (ins.opcode >> 3) & 0x07;
        let value = self.read_reg8(index)?;
        let result = self.alu_dcr(value);
        self.write_reg8(index, result)?;
        Ok(Flow::Next)
    }

    /// INX rp: 16-bit increment, wraps, no flags.
    pub(crate) fn exec_inx(&mut self, ins: Instruction) -> Result<Flow> {
        let rp = ins.opcode >> 4;
        let value = self.read_pair(rp).wrapping_add(1);
        self.write_pair(rp, value);
        Ok(Flow::Next)
    }

    /// DCX rp: 16-bit decrement, wraps, no flags.
    pub(crate) fn exec_dcx(&mut self, ins: Instruction) -> Result<Flow> {
        let rp = ins.opcode >> 4;
        let value = self.read_pair(rp).wrapping_sub(1);
        self.write_pair(rp, value);
        Ok(Flow::Next)
    }
}
