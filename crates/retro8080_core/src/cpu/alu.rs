use super::Cpu8080;

/// Carry out of bit 3 for `a + b (+ carry) = result`.
#[inline]
fn half_carry(a: u8, b: u8, result: u8) -> bool {
    (a ^ b ^ result) & 0x10 != 0
}

impl Cpu8080 {
    /// ADD/ADC: `A = A + value (+ CY)`.
    pub(crate) fn alu_add(&mut self, value: u8, carry_in: bool) {
        let a = self.regs.a;
        let result = u16::from(a) + u16::from(value) + u16::from(carry_in);
        self.flags.set_arith(result);
        self.flags.ac = half_carry(a, value, result as u8);
        self.regs.a = result as u8;
    }

    /// Compute `A - value (- CY)` by adding the two's complement and set
    /// flags; A is not written.
    ///
    /// The addition carries out exactly when no borrow occurred, so CY ends
    /// up as the complement of that carry.
    pub(crate) fn alu_compare(&mut self, value: u8, borrow_in: bool) -> u8 {
        let a = self.regs.a;
        let complement = !value;
        let result = u16::from(a) + u16::from(complement) + u16::from(!borrow_in);
        self.flags.set_arith(result);
        self.flags.cy = !self.flags.cy;
        self.flags.ac = half_carry(a, complement, result as u8);
        result as u8
    }

    /// SUB/SBB: `A = A - value (- CY)`, CY set on borrow.
    pub(crate) fn alu_sub(&mut self, value: u8, borrow_in: bool) {
        self.regs.a = self.alu_compare(value, borrow_in);
    }

    pub(crate) fn alu_and(&mut self, value: u8) {
        self.regs.a &= value;
        self.flags.set_logic(self.regs.a);
    }

    pub(crate) fn alu_xor(&mut self, value: u8) {
        self.regs.a ^= value;
        self.flags.set_logic(self.regs.a);
    }

    pub(crate) fn alu_or(&mut self, value: u8) {
        self.regs.a |= value;
        self.flags.set_logic(self.regs.a);
    }

    /// Dispatch on the 3-bit ALU field shared by `80–BF` and the immediate
    /// forms: ADD ADC SUB SBB ANA XRA ORA CMP.
    pub(crate) fn alu_op(&mut self, op: u8, value: u8) {
        match op & 0x07 {
            0 => self.alu_add(value, false),
            1 => self.alu_add(value, self.flags.cy),
            2 => self.alu_sub(value, false),
            3 => self.alu_sub(value, self.flags.cy),
            4 => self.alu_and(value),
            5 => self.alu_xor(value),
            6 => self.alu_or(value),
            _ => {
                self.alu_compare(value, false);
            }
        }
    }

    /// INR: Z/S/P and AC from the result, carry is not affected.
    pub(crate) fn alu_inr(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.flags.set_zsp(result);
        self.flags.ac = result & 0x0f == 0;
        result
    }

    /// DCR: Z/S/P and AC from the result, carry is not affected.
    pub(crate) fn alu_dcr(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.flags.set_zsp(result);
        self.flags.ac = result & 0x0f != 0x0f;
        result
    }

    /// DAD: `HL = HL + value`, only CY changes.
    pub(crate) fn alu_dad(&mut self, value: u16) {
        let sum = u32::from(self.regs.hl()) + u32::from(value);
        self.flags.cy = sum > 0xffff;
        self.regs.set_hl(sum as u16);
    }

    /// Decimal adjust A after a BCD addition.
    pub(crate) fn alu_daa(&mut self) {
        let low = self.regs.a & 0x0f;
        let high = self.regs.a >> 4;
        let mut adjust = 0u8;
        let mut carry = self.flags.cy;

        if low > 9 || self.flags.ac {
            adjust |= 0x06;
        }
        if high > 9 || self.flags.cy || (high >= 9 && low > 9) {
            adjust |= 0x60;
            carry = true;
        }

        self.alu_add(adjust, false);
        self.flags.cy = carry;
    }
}
