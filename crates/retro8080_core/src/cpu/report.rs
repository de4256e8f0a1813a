use std::fmt;

use super::flags::Flags;
use super::regs::Registers;
use super::Cpu8080;

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A={:02X} B={:02X} C={:02X} D={:02X} E={:02X} H={:02X} L={:02X}",
            self.a, self.b, self.c, self.d, self.e, self.h, self.l
        )
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Z={} S={} P={} CY={} AC={}",
            u8::from(self.z),
            u8::from(self.s),
            u8::from(self.p),
            u8::from(self.cy),
            u8::from(self.ac)
        )
    }
}

impl Cpu8080 {
    /// One-line register dump including PC and SP.
    pub fn register_report(&self) -> String {
        format!("{} SP={:04X} PC={:04X}", self.regs, self.sp, self.pc)
    }

    pub fn print_registers(&self) {
        println!("{}", self.register_report());
    }

    pub fn print_flags(&self) {
        println!("{}", self.flags);
    }
}
