//! Operand text: register names and integer literals.

use crate::error::AsmError;
use crate::isa::reg;

/// Resolve a register operand to its slot. The sp/bp slots answer only to
/// their aliases and bare indices; `$n` and `Rn` name the 30 plain
/// registers. Anything unrecognized resolves to slot 0, never to an error.
pub fn resolve_reg(text: &str) -> u32 {
    let t = text.trim();
    if t.eq_ignore_ascii_case("rsp") {
        return reg::SP;
    }
    if t.eq_ignore_ascii_case("rbp") {
        return reg::BP;
    }
    // bare decimal indices cover the whole file, sp/bp slots included
    if let Ok(n) = t.parse::<u32>() {
        return match n {
            0..=29 => n,
            30 => reg::SP,
            31 => reg::BP,
            _ => reg::ZERO,
        };
    }
    let body = t
        .strip_prefix('$')
        .or_else(|| t.strip_prefix('r'))
        .or_else(|| t.strip_prefix('R'));
    match body.and_then(|b| b.parse::<u32>().ok()) {
        Some(n) if n < 30 => n,
        _ => reg::ZERO,
    }
}

/// Parse an integer literal (decimal, `0x`, `0o`, `0b`, optional leading
/// `-`) and check it against a field width. Negative values that fit signed
/// are masked to the field's two's-complement representation.
pub fn parse_literal(text: &str, bits: u32) -> Result<u32, AsmError> {
    let t = text.trim();
    let (neg, body) = match t.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, t),
    };
    let parsed = if let Some(h) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        i64::from_str_radix(h, 16)
    } else if let Some(o) = body.strip_prefix("0o").or_else(|| body.strip_prefix("0O")) {
        i64::from_str_radix(o, 8)
    } else if let Some(b) = body.strip_prefix("0b").or_else(|| body.strip_prefix("0B")) {
        i64::from_str_radix(b, 2)
    } else {
        body.parse::<i64>()
    };
    let value = parsed.map_err(|_| AsmError::BadLiteral(t.to_string()))?;
    let value = if neg { -value } else { value };

    let limit = 1i64 << bits;
    if value >= limit || value < -(limit >> 1) {
        return Err(AsmError::LiteralOverflow { text: t.to_string(), bits });
    }
    Ok((value as u32) & ((limit - 1) as u32))
}
