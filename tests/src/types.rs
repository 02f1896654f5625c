use vecasm_core::{AVXReg, CmpPredicate, FuncArity, JumpCond, Reg, RoundMode};

#[test]
fn reg_encoding() {
    assert_eq!(Reg::Rax.low3(), 0);
    assert_eq!(Reg::Rsp.low3(), 4);
    assert_eq!(Reg::R8.low3(), 0);
    assert_eq!(Reg::R15.low3(), 7);
}

#[test]
fn reg_needs_rex() {
    assert!(!Reg::Rax.needs_rex());
    assert!(!Reg::Rdi.needs_rex());
    assert!(Reg::R8.needs_rex());
    assert!(Reg::R15.needs_rex());
}

#[test]
fn avx_reg_encoding() {
    assert_eq!(AVXReg::Ymm0 as u8, 0);
    assert_eq!(AVXReg::Ymm15 as u8, 15);
    assert_eq!(AVXReg::Ymm12.low3(), 4);
    assert!(AVXReg::Ymm8.needs_rex());
    assert!(!AVXReg::Ymm7.needs_rex());
}

#[test]
fn cmp_predicate_values() {
    assert_eq!(CmpPredicate::EqOq.imm(), 0x00);
    assert_eq!(CmpPredicate::LtOs.imm(), 0x01);
    assert_eq!(CmpPredicate::NeqUq.imm(), 0x04);
    assert_eq!(CmpPredicate::GtOs.imm(), 0x0E);
    assert_eq!(CmpPredicate::TrueUs.imm(), 0x1F);
}

#[test]
fn round_mode_values() {
    assert_eq!(RoundMode::FLOOR.imm(), 0x01);
    assert_eq!(RoundMode::CEIL.imm(), 0x02);
    assert_eq!(RoundMode::TRUNC.imm(), 0x03);
    assert_eq!(RoundMode::NEARBYINT.imm(), 0x0C);
    assert_eq!(RoundMode::TO_ZERO.suppress_exceptions().imm(), 0x0B);
}

#[test]
fn jump_cond_codes() {
    // Jcc opcodes are 0x0F 0x80+cc.
    assert_eq!(JumpCond::Eq.code(), 0x4);
    assert_eq!(JumpCond::Ne.code(), 0x5);
    assert_eq!(JumpCond::Lt.code(), 0xC);
    assert_eq!(JumpCond::Ge.code(), 0xD);
    assert_eq!(JumpCond::Le.code(), 0xE);
    assert_eq!(JumpCond::Gt.code(), 0xF);
}

#[test]
fn func_arity() {
    assert_eq!(FuncArity::NoArgs.num_args(), 0);
    assert_eq!(FuncArity::FiveArgs.num_args(), 5);
    assert_eq!(FuncArity::ThreeArgsD.num_args(), 3);
    assert!(FuncArity::TwoArgsD.is_double());
    assert!(!FuncArity::TwoArgs.is_double());
}
