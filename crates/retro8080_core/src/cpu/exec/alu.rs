use crate::cpu::{Cpu8080, Flow, Instruction};
use crate::error::Result;

impl Cpu8080 {
    /// ADD/ADC/SUB/SBB/ANA/XRA/ORA/CMP with a register or M (80–BF).
    pub(crate) fn exec_alu_reg(&mut self, ins: Instruction) -> Result<Flow> {
        let value = self.read_reg8(ins.opcode & 0x07)?;
        self.alu_op(ins.opcode >> 3, value);
        Ok(Flow::Next)
    }

    /// ADI/ACI/SUI/SBI/ANI/XRI/ORI/CPI d8.
    pub(crate) fn exec_alu_imm(&mut self, ins: Instruction) -> Result<Flow> {
        debug_assert_eq!(ins.opcode & 0xc7, 0xc6);
        self.alu_op(ins.opcode >> 3, ins.lo);
        Ok(Flow::Next)
    }

    /// RLC/RRC/RAL/RAR.
    ///
    /// RLC and RRC feed the bit shifted out back into the vacated bit; RAL
    /// and RAR feed the old carry in instead. All four leave the bit shifted
    /// out in CY and touch no other flag.
    pub(crate) fn exec_rotate(&mut self, ins: Instruction) -> Result<Flow> {
        let a = self.regs.a;
        let carry = u8::from(self.flags.cy);
        let (result, carry_out) = match ins.opcode {
            0x07 => (a.rotate_left(1), a & 0x80 != 0),
            0x0f => (a.rotate_right(1), a & 0x01 != 0),
            0x17 => ((a << 1) | carry, a & 0x80 != 0),
            0x1f => ((a >> 1) | (carry << 7), a & 0x01 != 0),
            op => unreachable!("0x{op:02X} is not a rotate"),
        };
        self.regs.a = result;
        self.flags.cy = carry_out;
        Ok(Flow::Next)
    }

    /// DAD rp.
    pub(crate) fn exec_dad(&mut self, ins: Instruction) -> Result<Flow> {
        let value = self.read_pair(ins.opcode >> 4);
        self.alu_dad(value);
        Ok(Flow::Next)
    }

    pub(crate) fn exec_daa(&mut self, _ins: Instruction) -> Result<Flow> {
        self.alu_daa();
        Ok(Flow::Next)
    }

    /// CMA: complement A, no flags.
    pub(crate) fn exec_cma(&mut self, _ins: Instruction) -> Result<Flow> {
        self.regs.a = !self.regs.a;
        Ok(Flow::Next)
    }

    pub(crate) fn exec_stc(&mut self, _ins: Instruction) -> Result<Flow> {
        self.flags.cy = true;
        Ok(Flow::Next)
    }

    pub(crate) fn exec_cmc(&mut self, _ins: Instruction) -> Result<Flow> {
        self.flags.cy = !self.flags.cy;
        Ok(Flow::Next)
    }
}
