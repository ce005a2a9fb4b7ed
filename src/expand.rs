//! The macro layer: pseudo-mnemonics that expand to fixed-length sequences
//! of real words.
//!
//! Expansion lengths never depend on operand values, so forward references
//! can emit placeholder words of the right count and be patched in place
//! later. The stack macros lean on the calling convention: r30 is the stack
//! pointer, r31 the base pointer, r29 the jump-staging register, and r1 is
//! expected to hold the constant 1.

use crate::assemble::SourceLine;
use crate::encode::{i_type, j_type, r_type};
use crate::error::AsmError;
use crate::isa::{funct, opcode, reg, NOOP_WORD};
use crate::labels::{FixupTable, LabelTable};
use crate::operand::resolve_reg;

/// The absolute-jump triple: load the target into r29 in two halves, then
/// jump through it. Also the patch routine's template.
pub fn jl_words(addr: u32) -> [u32; 3] {
    [
        i_type(opcode::LLO, reg::LINK, reg::ZERO, addr & 0xFFFF),
        i_type(opcode::LHI, reg::LINK, reg::ZERO, (addr >> 16) & 0xFFFF),
        i_type(opcode::JR, reg::ZERO, reg::LINK, 0),
    ]
}

/// Expand one macro at word index `index`. Label operands resolve
/// immediately when already bound, otherwise three zero words are emitted
/// and a fixup recorded.
pub fn expand(
    name: &str,
    args: &[&str],
    index: u32,
    labels: &LabelTable,
    fixups: &mut FixupTable,
    origin: &SourceLine,
) -> Result<Vec<u32>, AsmError> {
    match name {
        "noop" | "nop" => Ok(vec![NOOP_WORD]),

        "jl" => {
            let label = arg(args, 0)?;
            Ok(label_triple(label, index, labels, fixups, origin).to_vec())
        }

        // Branch-to-label: a one-word branch past the skip jump, an absolute
        // jump over the whole expansion, then the jl triple.
        "bl" => {
            let cond = resolve_reg(arg(args, 0)?);
            let label = arg(args, 1)?;
            let mut out = vec![
                i_type(opcode::BR, cond, cond, 1),
                j_type(opcode::JMP, index + 5),
            ];
            out.extend(label_triple(label, index + 2, labels, fixups, origin));
            Ok(out)
        }

        // Return address into r29, save it and the caller's base pointer
        // into the new frame, point bp at the frame, step sp past it, jump.
        "call" => {
            let label = arg(args, 0)?;
            let ret = index + 10;
            let mut out = vec![
                i_type(opcode::LLO, reg::LINK, reg::ZERO, ret & 0xFFFF),
                i_type(opcode::LHI, reg::LINK, reg::ZERO, (ret >> 16) & 0xFFFF),
                i_type(opcode::SW, reg::LINK, reg::SP, 0),
                i_type(opcode::SW, reg::BP, reg::SP, 1),
                r_type(opcode::RTYPE, reg::BP, reg::SP, reg::ZERO, 0, funct::ADD),
                r_type(opcode::RTYPE, reg::SP, reg::SP, reg::ONE, 0, funct::ADD),
                r_type(opcode::RTYPE, reg::SP, reg::SP, reg::ONE, 0, funct::ADD),
            ];
            out.extend(label_triple(label, index + 7, labels, fixups, origin));
            Ok(out)
        }

        "ret" => Ok(vec![
            r_type(opcode::RTYPE, reg::SP, reg::BP, reg::ZERO, 0, funct::ADD),
            i_type(opcode::LW, reg::BP, reg::SP, 1),
            i_type(opcode::LW, reg::LINK, reg::SP, 0),
            i_type(opcode::JR, reg::ZERO, reg::LINK, 0),
        ]),

        // A jl targeting its own last word: the jr spins in place.
        "halt" => Ok(jl_words(index + 2).to_vec()),

        "push" => {
            let r = resolve_reg(arg(args, 0)?);
            Ok(vec![
                i_type(opcode::SW, r, reg::SP, 0),
                r_type(opcode::RTYPE, reg::SP, reg::SP, reg::ONE, 0, funct::ADD),
            ])
        }

        // The load's destination is the stack pointer itself, not the named
        // register; kept as the original toolchain emitted it.
        "pop" => {
            let _ = resolve_reg(arg(args, 0)?);
            Ok(vec![
                i_type(opcode::LW, reg::SP, reg::SP, 0),
                r_type(opcode::RTYPE, reg::SP, reg::SP, reg::ONE, 0, funct::SUB),
            ])
        }

        other => unreachable!("not a macro mnemonic: {other}"),
    }
}

fn label_triple(
    label: &str,
    at: u32,
    labels: &LabelTable,
    fixups: &mut FixupTable,
    origin: &SourceLine,
) -> [u32; 3] {
    match labels.lookup(label) {
        Some(addr) => jl_words(addr),
        None => {
            fixups.record(at, label, origin);
            [0; 3]
        }
    }
}

fn arg<'a>(args: &[&'a str], index: usize) -> Result<&'a str, AsmError> {
    args.get(index).copied().ok_or(AsmError::MissingOperand(index + 1))
}
