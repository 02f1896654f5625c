//! Label, procedure and jump resolution.

use vecasm_backend::Assembler;
use vecasm_core::{AVXReg::*, AsmError, Reg::*};

fn session() -> Assembler {
    let mut a = Assembler::with_default_page_size().unwrap();
    a.begin();
    a
}

#[test]
fn forward_jump_is_patched_at_insert() {
    let mut a = session();
    a.jump_eq_label("target");
    let site = 2; // 0F 84, then the disp32
    assert_eq!(a.num_bytes(), 6);
    for _ in 0..10 {
        a.ret();
    }
    a.insert_label("target");
    let target = a.num_bytes();
    a.ret();
    a.end().unwrap();
    assert_eq!(a.read_u32(site), (target - (site + 4)) as u32);
}

#[test]
fn backward_jump_is_patched_immediately() {
    let mut a = session();
    a.insert_label("top");
    a.dec(R9);
    a.jump_ne_label("top");
    a.ret();
    a.end().unwrap();
    // dec r9 is 3 bytes, jcc opcode 2, disp at offset 5.
    let disp = a.read_u32(5) as i32;
    assert_eq!(disp, -(9i32));
}

#[test]
fn jump_to_absolute_offset() {
    let mut a = session();
    for _ in 0..16 {
        a.ret();
    }
    a.jump_eq_to(0);
    a.ret();
    a.end().unwrap();
    // Jcc at 16, disp at 18; target 0 => disp = -(18+4).
    assert_eq!(a.read_u32(18) as i32, -22);
}

#[test]
fn jump_raw_relative_is_verbatim() {
    let mut a = session();
    a.jump_ne(0x1234);
    a.ret();
    a.end().unwrap();
    assert_eq!(a.read_u32(2), 0x1234);
}

#[test]
fn unresolved_label_fails_finalize() {
    let mut a = session();
    a.jump_eq_label("nowhere");
    a.ret();
    match a.end() {
        Err(AsmError::UnresolvedLabel(name)) => assert_eq!(name, "nowhere"),
        other => panic!("expected unresolved label, got {other:?}"),
    }
    // Poisoned: execution refuses.
    let err = unsafe { a.execute(std::ptr::null_mut()) }.unwrap_err();
    assert_eq!(err, AsmError::Poisoned);
}

#[test]
fn duplicate_label_fails_finalize() {
    let mut a = session();
    a.insert_label("twice");
    a.ret();
    a.insert_label("twice");
    a.ret();
    match a.end() {
        Err(AsmError::DuplicateLabel(name)) => assert_eq!(name, "twice"),
        other => panic!("expected duplicate label, got {other:?}"),
    }
}

#[test]
fn procedure_called_before_definition() {
    let mut a = session();
    a.call_procedure("sub");
    a.ret();
    let entry = a.num_bytes();
    a.procedure("sub");
    a.addps(Ymm0, Ymm0, Ymm1);
    a.ret();
    a.end().unwrap();
    // call is E8 at 0, disp at 1.
    assert_eq!(a.read_u32(1), (entry - 5) as u32);
}

#[test]
fn procedure_called_after_definition() {
    let mut a = session();
    a.procedure("sub");
    a.ret();
    a.call_procedure("sub");
    a.ret();
    a.end().unwrap();
    // call at 1, disp at 2, target 0 => disp = -6.
    assert_eq!(a.read_u32(2) as i32, -6);
}

#[test]
fn unresolved_procedure_fails_finalize() {
    let mut a = session();
    a.call_procedure("missing");
    a.ret();
    match a.end() {
        Err(AsmError::UnresolvedProcedure(name)) => assert_eq!(name, "missing"),
        other => panic!("expected unresolved procedure, got {other:?}"),
    }
}

#[test]
fn begin_clears_poison() {
    let mut a = session();
    a.jump_eq_label("nowhere");
    a.ret();
    assert!(a.end().is_err());
    a.begin();
    a.ret();
    a.end().unwrap();
}

#[test]
fn labels_are_per_session() {
    let mut a = session();
    a.insert_label("l");
    a.ret();
    a.end().unwrap();
    a.begin();
    // Same name is fresh after begin().
    a.insert_label("l");
    a.ret();
    a.end().unwrap();
}
