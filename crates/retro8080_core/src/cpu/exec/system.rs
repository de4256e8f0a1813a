use crate::cpu::{Cpu8080, Flow, Instruction, PortAccess};
use crate::error::Result;

impl Cpu8080 {
    pub(crate) fn exec_nop(&mut self, _ins: Instruction) -> Result<Flow> {
        Ok(Flow::Next)
    }

    /// HLT does not stop the CPU here; it only steps over itself and the
    /// run loop keeps going.
    pub(crate) fn exec_hlt(&mut self, _ins: Instruction) -> Result<Flow> {
        log::trace!("HLT at 0x{:04X} treated as NOP", self.pc);
        Ok(Flow::Next)
    }

    /// Unassigned opcodes (08 10 18 20 28 30 38 CB D9 DD ED FD) skip one
    /// byte and change nothing else. Some ROMs step over them on purpose.
    pub(crate) fn exec_invalid(&mut self, ins: Instruction) -> Result<Flow> {
        log::debug!(
            "Invalid opcode 0x{:02X} at 0x{:04X}, skipped",
            ins.opcode,
            self.pc
        );
        Ok(Flow::Next)
    }

    pub(crate) fn exec_ei(&mut self, _ins: Instruction) -> Result<Flow> {
        self.interrupts_enabled = true;
        Ok(Flow::Next)
    }

    pub(crate) fn exec_di(&mut self, _ins: Instruction) -> Result<Flow> {
        self.interrupts_enabled = false;
        Ok(Flow::Next)
    }

    /// IN d8. A is left as is; the run loop may fill it in.
    pub(crate) fn exec_in(&mut self, ins: Instruction) -> Result<Flow> {
        Ok(Flow::Port(PortAccess::Input(ins.lo)))
    }

    /// OUT d8.
    pub(crate) fn exec_out(&mut self, ins: Instruction) -> Result<Flow> {
        Ok(Flow::Port(PortAccess::Output {
            port: ins.lo,
            value: self.regs.a,
        }))
    }
}
