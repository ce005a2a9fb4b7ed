use mx32::expand::jl_words;
use mx32::{assemble_source, isa};
use pretty_assertions::assert_eq;

fn words(src: &str) -> Vec<u32> {
    assemble_source(src).unwrap()
}

fn rd(w: u32) -> u32 {
    isa::rd_of(w)
}
fn rs(w: u32) -> u32 {
    isa::rs_of(w)
}
fn rt(w: u32) -> u32 {
    isa::rt_of(w)
}
fn op(w: u32) -> u32 {
    isa::opcode_of(w)
}
fn imm(w: u32) -> u32 {
    isa::imm16_of(w)
}

#[test]
fn expansion_lengths_are_fixed() {
    assert_eq!(words("noop").len(), 1);
    assert_eq!(words("nop").len(), 1);
    assert_eq!(words("x:\njl x").len(), 3);
    assert_eq!(words("x:\nbl R1, x").len(), 5);
    assert_eq!(words("x:\ncall x").len(), 10);
    assert_eq!(words("ret").len(), 4);
    assert_eq!(words("halt").len(), 3);
    assert_eq!(words("push R4").len(), 2);
    assert_eq!(words("pop R4").len(), 2);
}

#[test]
fn noop_is_the_reserved_all_ones_opcode() {
    assert_eq!(words("noop"), vec![isa::NOOP_WORD]);
    assert_eq!(words("nop"), vec![isa::NOOP_WORD]);
}

#[test]
fn halt_targets_its_own_jump_word() {
    // halt starting at index 5 is a jl to index 7
    let w = words("noop\nnoop\nnoop\nnoop\nnoop\nhalt");
    assert_eq!(w.len(), 8);
    assert_eq!(&w[5..8], &jl_words(7));
    assert_eq!(imm(w[5]), 7);
    assert_eq!(imm(w[6]), 0);
}

#[test]
fn bl_branches_past_a_skip_jump() {
    let w = words("bl R2, tgt\ntgt:");
    // branch on the condition register, one word forward
    assert_eq!(op(w[0]), 0x0C);
    assert_eq!(rs(w[0]), 2);
    assert_eq!(rt(w[0]), 2);
    assert_eq!(imm(w[0]), 1);
    // absolute jump over the whole expansion
    assert_eq!(op(w[1]), 0x0E);
    assert_eq!(isa::addr26_of(w[1]), 5);
    assert_eq!(&w[2..5], &jl_words(5));
}

#[test]
fn call_builds_a_frame_and_jumps() {
    let w = words("call fun\nfun:");
    assert_eq!(w.len(), 10);
    // return address (index 10) staged in r29, low then high half
    assert_eq!(op(w[0]), 0x02);
    assert_eq!(rt(w[0]), isa::reg::LINK);
    assert_eq!(imm(w[0]), 10);
    assert_eq!(op(w[1]), 0x01);
    assert_eq!(imm(w[1]), 0);
    // return address and caller bp stored into the frame
    assert_eq!(op(w[2]), 0x0B);
    assert_eq!(rt(w[2]), isa::reg::LINK);
    assert_eq!(rs(w[2]), isa::reg::SP);
    assert_eq!(imm(w[2]), 0);
    assert_eq!(op(w[3]), 0x0B);
    assert_eq!(rt(w[3]), isa::reg::BP);
    assert_eq!(imm(w[3]), 1);
    // bp <- sp, then sp stepped past the frame twice via r1
    assert_eq!(rd(w[4]), isa::reg::BP);
    assert_eq!(rs(w[4]), isa::reg::SP);
    assert_eq!(rt(w[4]), isa::reg::ZERO);
    for w in &w[5..7] {
        assert_eq!(rd(*w), isa::reg::SP);
        assert_eq!(rs(*w), isa::reg::SP);
        assert_eq!(rt(*w), isa::reg::ONE);
    }
    assert_eq!(&w[7..10], &jl_words(10));
}

#[test]
fn ret_unwinds_the_frame_in_order() {
    let w = words("ret");
    assert_eq!(w.len(), 4);
    // sp <- bp
    assert_eq!(rd(w[0]), isa::reg::SP);
    assert_eq!(rs(w[0]), isa::reg::BP);
    // bp <- [sp+1], r29 <- [sp+0]
    assert_eq!(op(w[1]), 0x07);
    assert_eq!(rt(w[1]), isa::reg::BP);
    assert_eq!(imm(w[1]), 1);
    assert_eq!(op(w[2]), 0x07);
    assert_eq!(rt(w[2]), isa::reg::LINK);
    assert_eq!(imm(w[2]), 0);
    // jr through r29
    assert_eq!(op(w[3]), 0x0D);
    assert_eq!(rs(w[3]), isa::reg::LINK);
}

#[test]
fn push_stores_then_bumps_sp() {
    let w = words("push R4");
    assert_eq!(op(w[0]), 0x0B);
    assert_eq!(rt(w[0]), 4);
    assert_eq!(rs(w[0]), isa::reg::SP);
    assert_eq!(rd(w[1]), isa::reg::SP);
    assert_eq!(rt(w[1]), isa::reg::ONE);
    assert_eq!(isa::funct_of(w[1]), 0);
}

#[test]
fn pop_loads_into_the_stack_pointer_itself() {
    // the load's destination is sp, not the named register
    let w = words("pop R4");
    assert_eq!(op(w[0]), 0x07);
    assert_eq!(rt(w[0]), isa::reg::SP);
    assert_eq!(rs(w[0]), isa::reg::SP);
    assert_eq!(rd(w[1]), isa::reg::SP);
    assert_eq!(isa::funct_of(w[1]), 1);
}

#[test]
fn expansions_shift_following_label_bindings() {
    // the label after a call lands 10 words in
    let w = words("call fun\nfun:\nnoop\njl fun");
    assert_eq!(w.len(), 14);
    assert_eq!(&w[11..14], &jl_words(10));
}
