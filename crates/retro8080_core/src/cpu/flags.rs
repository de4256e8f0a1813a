use bitflags::bitflags;

bitflags! {
    /// Status byte pushed by `PUSH PSW` and restored by `POP PSW`.
    ///
    /// The layout packs the five flags into the low bits in the order
    /// Z, S, P, CY, AC; bits 5–7 are always zero. This is not the flag byte
    /// of the real 8080 (S Z 0 AC 0 P 1 CY), so code that inspects the
    /// pushed byte directly will see different bits.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct StatusFlags: u8 {
        const ZERO = 0x01;
        const SIGN = 0x02;
        const PARITY = 0x04;
        const CARRY = 0x08;
        const AUX_CARRY = 0x10;
    }
}

/// Condition flags of the 8080.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    pub z: bool,  // zero
    pub s: bool,  // sign
    pub p: bool,  // parity (even)
    pub cy: bool, // carry
    pub ac: bool, // auxiliary carry
}

impl Flags {
    pub fn to_status(self) -> StatusFlags {
        let mut status = StatusFlags::empty();
        status.set(StatusFlags::ZERO, self.z);
        status.set(StatusFlags::SIGN, self.s);
        status.set(StatusFlags::PARITY, self.p);
        status.set(StatusFlags::CARRY, self.cy);
        status.set(StatusFlags::AUX_CARRY, self.ac);
        status
    }

    pub fn from_status(status: StatusFlags) -> Self {
        Self {
            z: status.contains(StatusFlags::ZERO),
            s: status.contains(StatusFlags::SIGN),
            p: status.contains(StatusFlags::PARITY),
            cy: status.contains(StatusFlags::CARRY),
            ac: status.contains(StatusFlags::AUX_CARRY),
        }
    }

    pub fn to_u8(self) -> u8 {
        self.to_status().bits()
    }

    /// Unpack a status byte; bits 5–7 are ignored.
    pub fn from_u8(value: u8) -> Self {
        Self::from_status(StatusFlags::from_bits_truncate(value))
    }

    /// Z, S and P from an 8-bit value. CY and AC are left alone.
    ///
    /// INR and DCR rely on carry surviving this update.
    #[inline]
    pub fn set_zsp(&mut self, value: u8) {
        self.z = value == 0;
        self.s = value & 0x80 != 0;
        self.p = parity(value);
    }

    /// Flags after AND/OR/XOR: CY and AC cleared, Z/S/P from the result.
    #[inline]
    pub fn set_logic(&mut self, value: u8) {
        self.cy = false;
        self.ac = false;
        self.set_zsp(value);
    }

    /// Flags after an 8-bit addition, from the untruncated result.
    ///
    /// CY is the carry out of bit 7; Z/S/P come from the low byte. AC is
    /// computed by the caller, which still has the operands.
    #[inline]
    pub fn set_arith(&mut self, result: u16) {
        self.cy = result > 0xff;
        self.set_zsp(result as u8);
    }
}

/// Even parity of an 8-bit value.
#[inline]
pub fn parity(value: u8) -> bool {
    parity_bits(u32::from(value), 8)
}

/// True when the low `size` bits of `value` hold an even number of ones.
pub fn parity_bits(value: u32, size: u32) -> bool {
    let mask = if size >= u32::BITS {
        u32::MAX
    } else {
        (1u32 << size) - 1
    };
    (value & mask).count_ones() % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parity_of_known_values() {
        assert!(parity(0x00));
        assert!(!parity(0x01));
        assert!(!parity(0xf1));
        assert!(parity(0xff));
    }

    #[test]
    fn parity_respects_size() {
        // 0x1ff has nine ones, but only the low eight count by default.
        assert!(parity_bits(0x1ff, 8));
        assert!(!parity_bits(0x1ff, 9));
        assert!(!parity_bits(0x1, 4));
        assert!(parity_bits(0x3, 32));
    }

    #[test]
    fn zsp_preserves_carry() {
        let mut flags = Flags {
            cy: true,
            ac: true,
            ..Flags::default()
        };
        flags.set_zsp(0x80);
        assert!(flags.cy);
        assert!(flags.ac);
        assert!(flags.s);
        assert!(!flags.z);
        assert!(!flags.p);
    }

    #[test]
    fn logic_clears_carries() {
        let mut flags = Flags {
            cy: true,
            ac: true,
            ..Flags::default()
        };
        flags.set_logic(0x00);
        assert_eq!(
            flags,
            Flags {
                z: true,
                s: false,
                p: true,
                cy: false,
                ac: false,
            }
        );
    }

    #[test]
    fn arith_carry_from_wide_result() {
        let mut flags = Flags::default();
        flags.set_arith(0x102);
        assert!(flags.cy);
        assert!(!flags.z);
        assert!(!flags.p);

        flags.set_arith(0x100);
        assert!(flags.cy);
        assert!(flags.z);
    }

    // The status byte uses Z=bit0, S=bit1, P=bit2, CY=bit3, AC=bit4.
    #[test]
    fn status_byte_layout() {
        let one = |f: fn(&mut Flags)| {
            let mut flags = Flags::default();
            f(&mut flags);
            flags.to_u8()
        };
        assert_eq!(one(|f| f.z = true), 0x01);
        assert_eq!(one(|f| f.s = true), 0x02);
        assert_eq!(one(|f| f.p = true), 0x04);
        assert_eq!(one(|f| f.cy = true), 0x08);
        assert_eq!(one(|f| f.ac = true), 0x10);
        assert_eq!(Flags::from_u8(0xff).to_u8(), 0x1f);
    }
}
