//! Session lifecycle, capacity handling and state discipline.

use vecasm_backend::Assembler;
use vecasm_core::{AVXReg::*, AsmError, Reg::*};

#[test]
fn num_bytes_monotonic() {
    let mut a = Assembler::with_default_page_size().unwrap();
    a.begin();
    let mut prev = a.num_bytes();
    for _ in 0..32 {
        a.addps(Ymm0, Ymm1, Ymm2);
        assert!(a.num_bytes() >= prev);
        prev = a.num_bytes();
    }
}

#[test]
fn begin_resets_bytecode() {
    let mut a = Assembler::with_default_page_size().unwrap();
    a.begin();
    a.ret();
    a.end().unwrap();
    assert_eq!(a.num_bytes(), 1);
    a.begin();
    assert_eq!(a.num_bytes(), 0);
}

#[test]
fn memory_form_false_on_full_page() {
    let mut a = Assembler::new(4096).unwrap();
    a.begin();
    while a.num_bytes() + 4 <= a.capacity() {
        a.addps(Ymm0, Ymm1, Ymm2);
    }
    assert!(a.error().is_none());
    let before = a.num_bytes();
    // 5-byte encoding no longer fits; the buffer must stay unchanged.
    assert!(!a.addps_m(Ymm0, Ymm1, Rcx, 0x20));
    assert_eq!(a.num_bytes(), before);
    assert!(a.error().is_none());
}

#[test]
fn void_form_overflow_poisons_finalize() {
    let mut a = Assembler::new(4096).unwrap();
    a.begin();
    while a.num_bytes() + 4 <= a.capacity() {
        a.addps(Ymm0, Ymm1, Ymm2);
    }
    let full = a.num_bytes();
    // cmp needs 7 bytes; the failure is recorded against it.
    a.cmp(Rbx, 0x1234);
    assert_eq!(a.num_bytes(), full);
    match a.error() {
        Some(AsmError::Capacity { mnemonic, offset }) => {
            assert_eq!(*mnemonic, "cmp");
            assert_eq!(*offset, full);
        }
        other => panic!("expected capacity error, got {other:?}"),
    }
    match a.end() {
        Err(AsmError::Capacity { mnemonic, .. }) => assert_eq!(mnemonic, "cmp"),
        other => panic!("expected capacity error, got {other:?}"),
    }
}

#[test]
fn first_overflow_is_reported() {
    let mut a = Assembler::new(4096).unwrap();
    a.begin();
    while a.num_bytes() + 4 <= a.capacity() {
        a.addps(Ymm0, Ymm1, Ymm2);
    }
    a.cmp(Rbx, 0x1234);
    a.lea(Rax, Rcx, 0x123456);
    match a.error() {
        Some(AsmError::Capacity { mnemonic, .. }) => assert_eq!(*mnemonic, "cmp"),
        other => panic!("expected capacity error, got {other:?}"),
    }
}

#[test]
fn execute_before_end_refused() {
    let mut a = Assembler::with_default_page_size().unwrap();
    a.begin();
    a.ret();
    let err = unsafe { a.execute(std::ptr::null_mut()) }.unwrap_err();
    assert_eq!(err, AsmError::NotFinalized);
}

#[test]
fn execute_before_begin_refused() {
    let a = Assembler::with_default_page_size().unwrap();
    let err = unsafe { a.execute(std::ptr::null_mut()) }.unwrap_err();
    assert_eq!(err, AsmError::NotFinalized);
}

#[test]
#[should_panic(expected = "emitter call outside begin()/end()")]
fn emit_without_begin_panics() {
    let mut a = Assembler::with_default_page_size().unwrap();
    a.addps(Ymm0, Ymm1, Ymm2);
}

#[test]
#[should_panic(expected = "emitter call outside begin()/end()")]
fn emit_after_end_panics() {
    let mut a = Assembler::with_default_page_size().unwrap();
    a.begin();
    a.ret();
    a.end().unwrap();
    a.addps(Ymm0, Ymm1, Ymm2);
}

#[test]
fn bytecode_survives_end() {
    let mut a = Assembler::with_default_page_size().unwrap();
    a.begin();
    a.addps(Ymm0, Ymm1, Ymm2);
    a.ret();
    a.end().unwrap();
    assert_eq!(a.bytecode(), [0xC5, 0xF4, 0x58, 0xC2, 0xC3]);
}

#[test]
fn page_size_rounds_up() {
    let page = unsafe { libc::sysconf(libc::_SC_PAGESIZE) } as usize;
    let a = Assembler::new(1).unwrap();
    assert_eq!(a.capacity(), page);
    let b = Assembler::new(page + 1).unwrap();
    assert_eq!(b.capacity(), 2 * page);
}

#[test]
fn release_consumes() {
    let mut a = Assembler::with_default_page_size().unwrap();
    a.begin();
    a.ret();
    a.end().unwrap();
    a.release();
}

#[test]
fn call_unknown_function_is_local_failure() {
    let table = vecasm_funcs::FunctionTable::new();
    let mut a = Assembler::with_default_page_size().unwrap();
    a.begin();
    assert!(!a.call("no_such", &table));
    assert_eq!(a.num_bytes(), 0);
    assert!(a.error().is_none());
    a.ret();
    a.end().unwrap();
}

#[test]
fn call_known_function_emits_indirect_call() {
    let mut table = vecasm_funcs::FunctionTable::new();
    table.add_defaults();
    let mut a = Assembler::with_default_page_size().unwrap();
    a.begin();
    assert!(a.call("sin", &table));
    // mov rax, imm64 (10 bytes) + call rax (2 bytes)
    assert_eq!(a.num_bytes(), 12);
    assert_eq!(&a.bytecode()[..2], &[0x48, 0xB8]);
    assert_eq!(&a.bytecode()[10..], &[0xFF, 0xD0]);
    let addr = u64::from_le_bytes(a.bytecode()[2..10].try_into().unwrap());
    assert_eq!(addr, table.address_of("sin").unwrap());
    a.ret();
    a.end().unwrap();
}
