//! Opcode dispatch table.
//!
//! Every one of the 256 opcode values maps to an [`OpcodeEntry`] holding its
//! mnemonic, encoded length and handler. Unassigned opcodes get the invalid
//! handler, which behaves as a one-byte NOP.

use lazy_static::lazy_static;

use super::{Cpu8080, Flow, Instruction};
use crate::error::Result;

pub(crate) type Handler = fn(&mut Cpu8080, Instruction) -> Result<Flow>;

/// Static description of one opcode.
#[derive(Clone, Copy, Debug)]
pub struct OpcodeEntry {
    /// Assembler mnemonic with operand placeholders, `-` for unassigned.
    pub mnemonic: &'static str,
    /// Encoded length in bytes (1–3). PC advances by this much unless the
    /// instruction transfers control.
    pub length: u8,
    pub(crate) handler: Handler,
}

impl OpcodeEntry {
    /// Whether the opcode is one of the unassigned values.
    pub fn is_invalid(&self) -> bool {
        self.mnemonic == "-"
    }
}

lazy_static! {
    /// The 8080 instruction set indexed by opcode byte.
    pub static ref OPCODE_TABLE: [OpcodeEntry; 256] = build_table();
}

/// Opcodes with no assigned instruction.
pub const INVALID_OPCODES: [u8; 12] = [
    0x08, 0x10, 0x18, 0x20, 0x28, 0x30, 0x38, 0xcb, 0xd9, 0xdd, 0xed, 0xfd,
];

#[rustfmt::skip]
const MNEMONICS: [&str; 256] = [
    // 0x00
    "NOP", "LXI B,d16", "STAX B", "INX B", "INR B", "DCR B", "MVI B,d8", "RLC",
    "-", "DAD B", "LDAX B", "DCX B", "INR C", "DCR C", "MVI C,d8", "RRC",
    // 0x10
    "-", "LXI D,d16", "STAX D", "INX D", "INR D", "DCR D", "MVI D,d8", "RAL",
    "-", "DAD D", "LDAX D", "DCX D", "INR E", "DCR E", "MVI E,d8", "RAR",
    // 0x20
    "-", "LXI H,d16", "SHLD a16", "INX H", "INR H", "DCR H", "MVI H,d8", "DAA",
    "-", "DAD H", "LHLD a16", "DCX H", "INR L", "DCR L", "MVI L,d8", "CMA",
    // 0x30
    "-", "LXI SP,d16", "STA a16", "INX SP", "INR M", "DCR M", "MVI M,d8", "STC",
    "-", "DAD SP", "LDA a16", "DCX SP", "INR A", "DCR A", "MVI A,d8", "CMC",
    // 0x40
    "MOV B,B", "MOV B,C", "MOV B,D", "MOV B,E", "MOV B,H", "MOV B,L", "MOV B,M", "MOV B,A",
    "MOV C,B", "MOV C,C", "MOV C,D", "MOV C,E", "MOV C,H", "MOV C,L", "MOV C,M", "MOV C,A",
    // 0x50
    "MOV D,B", "MOV D,C", "MOV D,D", "MOV D,E", "MOV D,H", "MOV D,L", "MOV D,M", "MOV D,A",
    "MOV E,B", "MOV E,C", "MOV E,D", "MOV E,E", "MOV E,H", "MOV E,L", "MOV E,M", "MOV E,A",
    // 0x60
    "MOV H,B", "MOV H,C", "MOV H,D", "MOV H,E", "MOV H,H", "MOV H,L", "MOV H,M", "MOV H,A",
    "MOV L,B", "MOV L,C", "MOV L,D", "MOV L,E", "MOV L,H", "MOV L,L", "MOV L,M", "MOV L,A",
    // 0x70
    "MOV M,B", "MOV M,C", "MOV M,D", "MOV M,E", "MOV M,H", "MOV M,L", "HLT", "MOV M,A",
    "MOV A,B", "MOV A,C", "MOV A,D", "MOV A,E", "MOV A,H", "MOV A,L", "MOV A,M", "MOV A,A",
    // 0x80
    "ADD B", "ADD C", "ADD D", "ADD E", "ADD H", "ADD L", "ADD M", "ADD A",
    "ADC B", "ADC C", "ADC D", "ADC E", "ADC H", "ADC L", "ADC M", "ADC A",
    // 0x90
    "SUB B", "SUB C", "SUB D", "SUB E", "SUB H", "SUB L", "SUB M", "SUB A",
    "SBB B", "SBB C", "SBB D", "SBB E", "SBB H", "SBB L", "SBB M", "SBB A",
    // 0xA0
    "ANA B", "ANA C", "ANA D", "ANA E", "ANA H", "ANA L", "ANA M", "ANA A",
    "XRA B", "XRA C", "XRA D", "XRA E", "XRA H", "XRA L", "XRA M", "XRA A",
    // 0xB0
    "ORA B", "ORA C", "ORA D", "ORA E", "ORA H", "ORA L", "ORA M", "ORA A",
    "CMP B", "CMP C", "CMP D", "CMP E", "CMP H", "CMP L", "CMP M", "CMP A",
    // 0xC0
    "RNZ", "POP B", "JNZ a16", "JMP a16", "CNZ a16", "PUSH B", "ADI d8", "RST 0",
    "RZ", "RET", "JZ a16", "-", "CZ a16", "CALL a16", "ACI d8", "RST 1",
    // 0xD0
    "RNC", "POP D", "JNC a16", "OUT d8", "CNC a16", "PUSH D", "SUI d8", "RST 2",
    "RC", "-", "JC a16", "IN d8", "CC a16", "-", "SBI d8", "RST 3",
    // 0xE0
    "RPO", "POP H", "JPO a16", "XTHL", "CPO a16", "PUSH H", "ANI d8", "RST 4",
    "RPE", "PCHL", "JPE a16", "XCHG", "CPE a16", "-", "XRI d8", "RST 5",
    // 0xF0
    "RP", "POP PSW", "JP a16", "DI", "CP a16", "PUSH PSW", "ORI d8", "RST 6",
    "RM", "SPHL", "JM a16", "EI", "CM a16", "-", "CPI d8", "RST 7",
];

struct TableBuilder {
    entries: [OpcodeEntry; 256],
}

impl TableBuilder {
    fn new() -> Self {
        let invalid = OpcodeEntry {
            mnemonic: "-",
            length: 1,
            handler: Cpu8080::exec_invalid,
        };
        Self {
            entries: [invalid; 256],
        }
    }

    fn set(&mut self, opcode: u8, length: u8, handler: Handler) {
        self.entries[opcode as usize] = OpcodeEntry {
            mnemonic: MNEMONICS[opcode as usize],
            length,
            handler,
        };
    }
}

fn build_table() -> [OpcodeEntry; 256] {
    let mut t = TableBuilder::new();

    t.set(0x00, 1, Cpu8080::exec_nop);
    t.set(0x76, 1, Cpu8080::exec_hlt);

    // Register-pair instructions; bits 4–5 select BC, DE, HL or SP.
    for rp in 0..4u8 {
        let base = rp << 4;
        t.set(base | 0x01, 3, Cpu8080::exec_lxi);
        t.set(base | 0x03, 1, Cpu8080::exec_inx);
        t.set(base | 0x09, 1, Cpu8080::exec_dad);
        t.set(base | 0x0b, 1, Cpu8080::exec_dcx);
        // PUSH/POP use PSW in place of SP.
        t.set(0xc1 | base, 1, Cpu8080::exec_pop);
        t.set(0xc5 | base, 1, Cpu8080::exec_push);
    }

    t.set(0x02, 1, Cpu8080::exec_stax);
    t.set(0x12, 1, Cpu8080::exec_stax);
    t.set(0x0a, 1, Cpu8080::exec_ldax);
    t.set(0x1a, 1, Cpu8080::exec_ldax);
    t.set(0x22, 3, Cpu8080::exec_shld);
    t.set(0x2a, 3, Cpu8080::exec_lhld);
    t.set(0x32, 3, Cpu8080::exec_sta);
    t.set(0x3a, 3, Cpu8080::exec_lda);

    // Bits 3–5 select a register, an ALU operation or a condition.
    for n in 0..8u8 {
        let field = n << 3;
        t.set(0x04 | field, 1, Cpu8080::exec_inr);
        t.set(0x05 | field, 1, Cpu8080::exec_dcr);
        t.set(0x06 | field, 2, Cpu8080::exec_mvi);
        t.set(0xc6 | field, 2, Cpu8080::exec_alu_imm);
        t.set(0xc0 | field, 1, Cpu8080::exec_rcc);
        t.set(0xc2 | field, 3, Cpu8080::exec_jcc);
        t.set(0xc4 | field, 3, Cpu8080::exec_ccc);
        t.set(0xc7 | field, 1, Cpu8080::exec_rst);
    }

    for opcode in [0x07, 0x0f, 0x17, 0x1f] {
        t.set(opcode, 1, Cpu8080::exec_rotate);
    }
    t.set(0x27, 1, Cpu8080::exec_daa);
    t.set(0x2f, 1, Cpu8080::exec_cma);
    t.set(0x37, 1, Cpu8080::exec_stc);
    t.set(0x3f, 1, Cpu8080::exec_cmc);

    for opcode in 0x40..=0x7f {
        if opcode != 0x76 {
            t.set(opcode, 1, Cpu8080::exec_mov);
        }
    }
    for opcode in 0x80..=0xbf {
        t.set(opcode, 1, Cpu8080::exec_alu_reg);
    }

    t.set(0xc3, 3, Cpu8080::exec_jmp);
    t.set(0xc9, 1, Cpu8080::exec_ret);
    t.set(0xcd, 3, Cpu8080::exec_call);
    t.set(0xd3, 2, Cpu8080::exec_out);
    t.set(0xdb, 2, Cpu8080::exec_in);
    t.set(0xe3, 1, Cpu8080::exec_xthl);
    t.set(0xe9, 1, Cpu8080::exec_pchl);
    t.set(0xeb, 1, Cpu8080::exec_xchg);
    t.set(0xf3, 1, Cpu8080::exec_di);
    t.set(0xf9, 1, Cpu8080::exec_sphl);
    t.set(0xfb, 1, Cpu8080::exec_ei);

    t.entries
}
