//! The instruction catalog: one static table shared by the assembler and the
//! disassembler.

use crate::isa::{funct, opcode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    R,
    I,
    J,
    /// Expanded by the macro layer into one or more real words.
    Macro,
}

#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub name: &'static str,
    pub format: Format,
    pub opcode: u32,
    pub funct: u32,
}

const fn r(name: &'static str, funct: u32) -> Entry {
    Entry { name, format: Format::R, opcode: opcode::RTYPE, funct }
}

const fn i(name: &'static str, opcode: u32) -> Entry {
    Entry { name, format: Format::I, opcode, funct: 0 }
}

const fn j(name: &'static str, opcode: u32) -> Entry {
    Entry { name, format: Format::J, opcode, funct: 0 }
}

const fn m(name: &'static str, opcode: u32) -> Entry {
    Entry { name, format: Format::Macro, opcode, funct: 0 }
}

pub const TABLE: &[Entry] = &[
    r("add", funct::ADD),
    r("sub", funct::SUB),
    r("and", funct::AND),
    r("or", funct::OR),
    r("xor", funct::XOR),
    r("shl", funct::SHL),
    r("sal", funct::SAL),
    r("shr", funct::SHR),
    r("sar", funct::SAR),
    r("not", funct::NOT),
    r("lts", funct::LTS),
    r("gts", funct::GTS),
    r("ltu", funct::LTU),
    r("gtu", funct::GTU),
    r("eq", funct::EQ),
    r("ne", funct::NE),
    i("lhi", opcode::LHI),
    i("llo", opcode::LLO),
    i("lb", opcode::LB),
    i("lbu", opcode::LBU),
    i("lh", opcode::LH),
    i("lhu", opcode::LHU),
    i("lw", opcode::LW),
    i("lwu", opcode::LWU),
    i("sb", opcode::SB),
    i("sh", opcode::SH),
    i("sw", opcode::SW),
    i("br", opcode::BR),
    i("jr", opcode::JR),
    j("jmp", opcode::JMP),
    // "noop" carries the reserved opcode so the decoder can name it; the
    // remaining macros never appear in a binary image.
    m("noop", opcode::NOOP),
    m("nop", opcode::NOOP),
    m("jl", opcode::RTYPE),
    m("bl", opcode::RTYPE),
    m("call", opcode::RTYPE),
    m("ret", opcode::RTYPE),
    m("halt", opcode::RTYPE),
    m("push", opcode::RTYPE),
    m("pop", opcode::RTYPE),
];

pub fn by_name(name: &str) -> Option<&'static Entry> {
    TABLE.iter().find(|e| e.name.eq_ignore_ascii_case(name))
}

pub fn r_by_funct(funct: u32) -> Option<&'static Entry> {
    TABLE
        .iter()
        .find(|e| matches!(e.format, Format::R) && e.funct == funct)
}

/// Lookup for non-R opcodes. Matches I and J entries plus the reserved
/// do-nothing opcode; macros encoded as opcode 0 never match.
pub fn by_opcode(op: u32) -> Option<&'static Entry> {
    TABLE.iter().find(|e| {
        e.opcode == op
            && match e.format {
                Format::I | Format::J => true,
                Format::Macro => e.opcode == opcode::NOOP,
                Format::R => false,
            }
    })
}

/// Lexicographically nearest known mnemonic, for typo hints: sort the table
/// names with the candidate inserted and take its predecessor.
pub fn nearest(name: &str) -> &'static str {
    let mut names: Vec<&'static str> = TABLE.iter().map(|e| e.name).collect();
    names.sort_unstable();
    let idx = names.partition_point(|n| *n < name);
    if idx == 0 {
        "?"
    } else {
        names[idx - 1]
    }
}
