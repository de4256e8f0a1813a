/// The seven 8-bit registers of the 8080.
///
/// BC, DE and HL are views computed from the 8-bit halves; they are never
/// stored separately, so the pair and its halves cannot disagree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
}

impl Registers {
    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        let [b, c] = value.to_be_bytes();
        self.b = b;
        self.c = c;
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        let [d, e] = value.to_be_bytes();
        self.d = d;
        self.e = e;
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        let [h, l] = value.to_be_bytes();
        self.h = h;
        self.l = l;
    }

    /// Register selected by the 3-bit field of an opcode:
    /// 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 7=A.
    ///
    /// Index 6 names memory at HL and is resolved by the CPU, not here.
    #[inline]
    pub(crate) fn get(&self, index: u8) -> u8 {
        match index {
            0 => self.b,
            1 => self.c,
            2 => self.d,
            3 => self.e,
            4 => self.h,
            5 => self.l,
            7 => self.a,
            _ => unreachable!("register index {index} is not a register"),
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, index: u8, value: u8) {
        match index {
            0 => self.b = value,
            1 => self.c = value,
            2 => self.d = value,
            3 => self.e = value,
            4 => self.h = value,
            5 => self.l = value,
            7 => self.a = value,
            _ => unreachable!("register index {index} is not a register"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Registers;

    #[test]
    fn pairs_write_both_halves() {
        let mut regs = Registers::default();
        regs.set_bc(0x1234);
        regs.set_de(0xabcd);
        regs.set_hl(0x00ff);
        assert_eq!((regs.b, regs.c), (0x12, 0x34));
        assert_eq!((regs.d, regs.e), (0xab, 0xcd));
        assert_eq!((regs.h, regs.l), (0x00, 0xff));

        regs.l = 0x01;
        assert_eq!(regs.hl(), 0x0001);
    }

    #[test]
    fn index_matches_opcode_encoding() {
        let mut regs = Registers::default();
        for (index, value) in [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (7, 8)] {
            regs.set(index, value);
        }
        assert_eq!(
            regs,
            Registers {
                a: 8,
                b: 1,
                c: 2,
                d: 3,
                e: 4,
                h: 5,
                l: 6,
            }
        );
        assert_eq!(regs.get(4), 5);
    }
}
