//! Function-table behavior.

use std::arch::x86_64::__m256;

use vecasm_core::{AsmError, FuncArity};
use vecasm_funcs::{FunctionTable, VecFn};

#[target_feature(enable = "avx")]
unsafe extern "C" fn identity(a: __m256) -> __m256 {
    a
}

#[test]
fn add_and_query() {
    let mut t = FunctionTable::new();
    t.add_func("id", VecFn::F1(identity)).unwrap();
    let (arity, idx) = t.func_info("id").unwrap();
    assert_eq!(arity, FuncArity::OneArg);
    assert_eq!(idx, 0);
    assert!(t.address_of("id").is_some());
}

#[test]
fn unknown_name() {
    let t = FunctionTable::new();
    assert!(t.func_info("nope").is_none());
    assert!(t.address_of("nope").is_none());
}

#[test]
fn duplicate_name_is_error() {
    let mut t = FunctionTable::new();
    t.add_func("id", VecFn::F1(identity)).unwrap();
    let err = t.add_func("id", VecFn::F1(identity)).unwrap_err();
    assert_eq!(err, AsmError::DuplicateFunction("id".to_string()));
    assert_eq!(t.len(), 1);
}

#[test]
fn func_info_returns_insertion_index() {
    let mut t = FunctionTable::new();
    t.add_func("first", VecFn::F1(identity)).unwrap();
    t.add_func("second", VecFn::F1(identity)).unwrap();
    t.add_func("third", VecFn::F1(identity)).unwrap();
    assert_eq!(t.func_info("first").unwrap().1, 0);
    assert_eq!(t.func_info("second").unwrap().1, 1);
    assert_eq!(t.func_info("third").unwrap().1, 2);
}

#[test]
fn defaults_installed() {
    let mut t = FunctionTable::new();
    t.add_defaults();
    // 20 single-precision + 20 double-precision entries.
    assert_eq!(t.len(), 40);
    assert_eq!(t.func_info("sin").unwrap().0, FuncArity::OneArg);
    assert_eq!(t.func_info("atan2").unwrap().0, FuncArity::TwoArgs);
    assert_eq!(t.func_info("sind").unwrap().0, FuncArity::OneArgD);
    assert_eq!(t.func_info("powd").unwrap().0, FuncArity::TwoArgsD);
    assert!(t.address_of("cbrt").is_some());
}

#[test]
fn defaults_do_not_clobber_user_entries() {
    let mut t = FunctionTable::new();
    t.add_func("sin", VecFn::F1(identity)).unwrap();
    let user_addr = t.address_of("sin").unwrap();
    t.add_defaults();
    assert_eq!(t.address_of("sin").unwrap(), user_addr);
    assert_eq!(t.func_info("sin").unwrap().1, 0);
}
