//! Word-to-mnemonic decoding. Recovery is name-only: operand fields are not
//! reconstructed, so disassembly is intentionally lossy.

use crate::catalog::{self, Entry};
use crate::error::AsmError;
use crate::isa;

/// Find the catalog entry a word encodes: opcode 0 dispatches on the funct
/// field, everything else on the opcode alone.
pub fn decode(word: u32) -> Result<&'static Entry, AsmError> {
    let op = isa::opcode_of(word);
    if op == isa::opcode::RTYPE {
        let funct = isa::funct_of(word);
        return catalog::r_by_funct(funct).ok_or(AsmError::UnknownFunct { word, funct });
    }
    catalog::by_opcode(op).ok_or(AsmError::UnknownOpcode { word, opcode: op })
}

pub fn disassemble(words: &[u32]) -> Result<Vec<&'static str>, AsmError> {
    words.iter().map(|&w| decode(w).map(|e| e.name)).collect()
}

/// The `-d` output: one mnemonic per line.
pub fn listing(words: &[u32]) -> Result<String, AsmError> {
    let names = disassemble(words)?;
    let mut out = String::new();
    for name in names {
        out.push_str(name);
        out.push('\n');
    }
    Ok(out)
}
