use mx32::{assemble_source, AsmError};
use pretty_assertions::assert_eq;

fn single(src: &str) -> u32 {
    let words = assemble_source(src).unwrap();
    assert_eq!(words.len(), 1, "{src} should assemble to one word");
    words[0]
}

#[test]
fn add_packs_textual_operands_into_bit_order() {
    // textual (rd, rs, rt); bit order op|rs|rt|rd|shamt|funct
    let w = single("add R1, R2, R3");
    assert_eq!(w >> 26, 0);
    assert_eq!((w >> 21) & 0x1F, 2);
    assert_eq!((w >> 16) & 0x1F, 3);
    assert_eq!((w >> 11) & 0x1F, 1);
    assert_eq!((w >> 6) & 0x1F, 0);
    assert_eq!(w & 0x3F, 0);
}

#[test]
fn shift_amount_is_optional() {
    let w = single("shl R1, R2, R3, 4");
    assert_eq!((w >> 6) & 0x1F, 4);
    assert_eq!(w & 0x3F, 5);

    let w = single("shl R1, R2, R3");
    assert_eq!((w >> 6) & 0x1F, 0);
}

#[test]
fn i_format_reads_rt_first() {
    let w = single("lw R5, R6, 12");
    assert_eq!(w >> 26, 0x07);
    assert_eq!((w >> 21) & 0x1F, 6);
    assert_eq!((w >> 16) & 0x1F, 5);
    assert_eq!(w & 0xFFFF, 12);
}

#[test]
fn j_format_takes_an_absolute_word_index() {
    let w = single("jmp 1000");
    assert_eq!(w >> 26, 0x0E);
    assert_eq!(w & 0x03FF_FFFF, 1000);
}

#[test]
fn register_spellings_are_equivalent() {
    assert_eq!(single("add $1, 2, R3"), single("add R1, R2, R3"));
    assert_eq!(single("add rsp, RBP, 30"), single("add 30, 31, 30"));
}

#[test]
fn unknown_register_names_fall_back_to_slot_zero() {
    let w = single("add R1, bogus, R3");
    assert_eq!((w >> 21) & 0x1F, 0);
}

#[test]
fn named_forms_do_not_reach_the_stack_slots() {
    // R30/R31 are not register names; only rsp/rbp and bare 30/31 are
    let w = single("add R1, R30, R31");
    assert_eq!((w >> 21) & 0x1F, 0);
    assert_eq!((w >> 16) & 0x1F, 0);
}

#[test]
fn immediates_wider_than_the_field_are_rejected() {
    assert_eq!(single("lhi R1, R0, 0xFFFF") & 0xFFFF, 0xFFFF);
    let err = assemble_source("lhi R1, R0, 0x10000").unwrap_err();
    match err {
        AsmError::At { source, .. } => {
            assert!(matches!(*source, AsmError::LiteralOverflow { bits: 16, .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn negative_immediates_are_masked() {
    assert_eq!(single("br R1, R1, -1") & 0xFFFF, 0xFFFF);
    assert_eq!(single("br R1, R1, -3") & 0xFFFF, 0xFFFD);
}

#[test]
fn radix_prefixes() {
    assert_eq!(single("lhi R1, R0, 0b1010") & 0xFFFF, 10);
    assert_eq!(single("lhi R1, R0, 0o17") & 0xFFFF, 15);
}

#[test]
fn unknown_mnemonics_carry_a_hint_and_the_line() {
    let err = assemble_source("noop\naddd R1, R2, R3").unwrap_err();
    match err {
        AsmError::At { number, source, .. } => {
            assert_eq!(number, 2);
            assert!(matches!(
                *source,
                AsmError::UnknownMnemonic { ref name, hint: "add" } if name == "addd"
            ));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_operands_are_rejected() {
    let err = assemble_source("add R1, R2").unwrap_err();
    match err {
        AsmError::At { source, .. } => {
            assert!(matches!(*source, AsmError::MissingOperand(3)));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn blank_lines_emit_nothing() {
    let words = assemble_source("\n   \nnoop\n\n").unwrap();
    assert_eq!(words.len(), 1);
}
