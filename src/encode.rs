//! Word packing, and the textual-operand driver on top of it.
//!
//! Textual operand order is not bit order: R-format reads `(rd, rs, rt[,
//! shamt])`, I-format `(rt, rs, imm)`, J-format `(addr)`.

use crate::catalog::{Entry, Format};
use crate::error::AsmError;
use crate::isa::{BITS_ADDR, BITS_IMM, BITS_SHAMT};
use crate::operand::{parse_literal, resolve_reg};

pub fn r_type(opcode: u32, rd: u32, rs: u32, rt: u32, shamt: u32, funct: u32) -> u32 {
    opcode << 26 | rs << 21 | rt << 16 | rd << 11 | shamt << 6 | funct
}

pub fn i_type(opcode: u32, rt: u32, rs: u32, imm: u32) -> u32 {
    opcode << 26 | rs << 21 | rt << 16 | (imm & 0xFFFF)
}

pub fn j_type(opcode: u32, addr: u32) -> u32 {
    opcode << 26 | (addr & 0x03FF_FFFF)
}

/// Encode one non-macro instruction from its textual operands. The shift
/// amount is optional and defaults to 0; surplus operands are ignored.
pub fn instruction(entry: &Entry, args: &[&str]) -> Result<u32, AsmError> {
    match entry.format {
        Format::R => {
            let rd = resolve_reg(arg(args, 0)?);
            let rs = resolve_reg(arg(args, 1)?);
            let rt = resolve_reg(arg(args, 2)?);
            let shamt = match args.get(3) {
                Some(s) => parse_literal(s, BITS_SHAMT)?,
                None => 0,
            };
            Ok(r_type(entry.opcode, rd, rs, rt, shamt, entry.funct))
        }
        Format::I => {
            let rt = resolve_reg(arg(args, 0)?);
            let rs = resolve_reg(arg(args, 1)?);
            let imm = parse_literal(arg(args, 2)?, BITS_IMM)?;
            Ok(i_type(entry.opcode, rt, rs, imm))
        }
        Format::J => {
            let addr = parse_literal(arg(args, 0)?, BITS_ADDR)?;
            Ok(j_type(entry.opcode, addr))
        }
        Format::Macro => unreachable!("macros are expanded, never encoded directly"),
    }
}

fn arg<'a>(args: &[&'a str], index: usize) -> Result<&'a str, AsmError> {
    args.get(index).copied().ok_or(AsmError::MissingOperand(index + 1))
}
