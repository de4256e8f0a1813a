mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::Cpu8080;
use crate::error::Result;

/// Index of the `M` pseudo-register in the 3-bit register field.
const REG_M: u8 = 6;

impl Cpu8080 {
    /// Read the operand named by a 3-bit register field:
    /// 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=M (memory at HL), 7=A.
    #[inline]
    pub(crate) fn read_reg8(&self, index: u8) -> Result<u8> {
        if index == REG_M {
            self.read_m()
        } else {
            Ok(self.regs.get(index))
        }
    }

    /// Write the operand named by a 3-bit register field.
    #[inline]
    pub(crate) fn write_reg8(&mut self, index: u8, value: u8) -> Result<()> {
        if index == REG_M {
            self.write_m(value)
        } else {
            self.regs.set(index, value);
            Ok(())
        }
    }

    /// Register pair named by bits 4–5 of an opcode: 0=BC, 1=DE, 2=HL, 3=SP.
    #[inline]
    pub(crate) fn read_pair(&self, rp: u8) -> u16 {
        match rp & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => self.regs.hl(),
            _ => self.sp,
        }
    }

    #[inline]
    pub(crate) fn write_pair(&mut self, rp: u8, value: u16) {
        match rp & 0x03 {
            0 => self.regs.set_bc(value),
            1 => self.regs.set_de(value),
            2 => self.regs.set_hl(value),
            _ => self.sp = value,
        }
    }

    /// Condition named by bits 3–5 of a conditional jump/call/return.
    ///
    /// Each condition tests exactly one flag; AC is never consulted.
    #[inline]
    pub(crate) fn condition(&self, cc: u8) -> bool {
        match cc & 0x07 {
            0 => !self.flags.z, // NZ
            1 => self.flags.z, // Z
            2 => !self.flags.cy, // NC
            3 => self.flags.cy, // C
            4 => !self.flags.p, // PO
            5 => self.flags.p, // PE
            6 => !self.flags.s, // P
            _ => self.flags.s, // M
        }
    }
}
