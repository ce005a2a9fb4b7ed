//! Bit layout of the 32-bit MX32 instruction word.
//!
//! Three formats share the word:
//!
//! ```text
//! R: opcode(6) | rs(5) | rt(5) | rd(5) | shamt(5) | funct(6)
//! I: opcode(6) | rs(5) | rt(5) | imm(16)
//! J: opcode(6) | addr(26)
//! ```
//!
//! R-format instructions all carry the reserved opcode 0 and are told apart
//! by `funct`. The all-ones opcode is the do-nothing encoding.

pub const BITS_IMM: u32 = 16;
pub const BITS_SHAMT: u32 = 5;
pub const BITS_ADDR: u32 = 26;

pub mod opcode {
    pub const RTYPE: u32 = 0x00;
    pub const LHI: u32 = 0x01;
    pub const LLO: u32 = 0x02;
    pub const LB: u32 = 0x03;
    pub const LBU: u32 = 0x04;
    pub const LH: u32 = 0x05;
    pub const LHU: u32 = 0x06;
    pub const LW: u32 = 0x07;
    pub const LWU: u32 = 0x08;
    pub const SB: u32 = 0x09;
    pub const SH: u32 = 0x0A;
    pub const SW: u32 = 0x0B;
    pub const BR: u32 = 0x0C;
    pub const JR: u32 = 0x0D;
    pub const JMP: u32 = 0x0E;
    pub const NOOP: u32 = 0x3F;
}

pub mod funct {
    pub const ADD: u32 = 0;
    pub const SUB: u32 = 1;
    pub const AND: u32 = 2;
    pub const OR: u32 = 3;
    pub const XOR: u32 = 4;
    pub const SHL: u32 = 5;
    pub const SAL: u32 = 6;
    pub const SHR: u32 = 7;
    pub const SAR: u32 = 8;
    pub const NOT: u32 = 9;
    pub const LTS: u32 = 10;
    pub const GTS: u32 = 11;
    pub const LTU: u32 = 12;
    pub const GTU: u32 = 13;
    pub const EQ: u32 = 14;
    pub const NE: u32 = 15;
}

pub mod reg {
    /// Hardwired zero: reads yield 0, writes are discarded.
    pub const ZERO: u32 = 0;
    /// Holds the constant 1 by calling convention; the macro layer steps the
    /// stack pointer with it.
    pub const ONE: u32 = 1;
    /// Staging register for computed jump targets.
    pub const LINK: u32 = 29;
    /// Stack pointer by convention.
    pub const SP: u32 = 30;
    /// Base/frame pointer by convention.
    pub const BP: u32 = 31;
    pub const COUNT: usize = 32;
}

/// The one-word `noop` encoding: reserved all-ones opcode, everything else 0.
pub const NOOP_WORD: u32 = opcode::NOOP << 26;

#[inline]
pub fn opcode_of(word: u32) -> u32 {
    word >> 26
}

#[inline]
pub fn rs_of(word: u32) -> u32 {
    (word >> 21) & 0x1F
}

#[inline]
pub fn rt_of(word: u32) -> u32 {
    (word >> 16) & 0x1F
}

#[inline]
pub fn rd_of(word: u32) -> u32 {
    (word >> 11) & 0x1F
}

#[inline]
pub fn shamt_of(word: u32) -> u32 {
    (word >> 6) & 0x1F
}

#[inline]
pub fn funct_of(word: u32) -> u32 {
    word & 0x3F
}

#[inline]
pub fn imm16_of(word: u32) -> u32 {
    word & 0xFFFF
}

#[inline]
pub fn addr26_of(word: u32) -> u32 {
    word & 0x03FF_FFFF
}

#[inline]
pub fn sign_ext(v: u32, bits: u32) -> u32 {
    let s = 32 - bits;
    ((v << s) as i32 >> s) as u32
}
