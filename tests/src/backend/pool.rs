//! Constant pool layout and RIP-relative patching.

use vecasm_backend::Assembler;
use vecasm_core::{AVXReg::*, AsmError, Reg::*};

#[test]
fn load_const_is_rip_relative() {
    let mut a = Assembler::with_default_page_size().unwrap();
    a.begin();
    let c = a.set1_ps(1.0);
    a.load_const(Ymm1, c);
    a.ret();
    a.end().unwrap();
    // vmovaps ymm1, [rip+disp] => C5 FC 28 0D <disp32>
    assert_eq!(&a.bytecode()[..4], &[0xC5, 0xFC, 0x28, 0x0D]);
}

#[test]
fn pool_starts_at_32_byte_boundary() {
    let mut a = Assembler::with_default_page_size().unwrap();
    a.begin();
    let c = a.set1_ps(4.5);
    a.load_const(Ymm0, c);
    a.ret();
    a.end().unwrap();

    let code = a.num_bytes();
    let base = (code + 31) & !31;
    assert_eq!(base % 32, 0);
    // The disp points from the end of the load to the pool slot.
    let disp = a.read_u32(4) as i32;
    assert_eq!(disp, base as i32 - 8);
}

#[test]
fn pool_payload_matches_input() {
    let values = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
    let mut a = Assembler::with_default_page_size().unwrap();
    a.begin();
    let c = a.set_ps(values);
    a.load_const(Ymm2, c);
    a.ret();
    a.end().unwrap();

    let base = (a.num_bytes() + 31) & !31;
    for (i, v) in values.iter().enumerate() {
        assert_eq!(a.read_u32(base + 4 * i), v.to_bits());
    }
}

#[test]
fn constants_are_slotted_in_order() {
    let mut a = Assembler::with_default_page_size().unwrap();
    a.begin();
    let c0 = a.set1_epi32(7);
    let c1 = a.set1_pd(2.5);
    a.load_const(Ymm0, c0);
    a.load_const(Ymm1, c1);
    a.ret();
    a.end().unwrap();

    let base = (a.num_bytes() + 31) & !31;
    assert_eq!(a.read_u32(base), 7);
    assert_eq!(
        u64::from(a.read_u32(base + 32)) | (u64::from(a.read_u32(base + 36)) << 32),
        2.5f64.to_bits()
    );

    // First load sits at offset 0, second at 8; each disp lands on its
    // own slot.
    assert_eq!(a.read_u32(4) as i32, base as i32 - 8);
    assert_eq!(a.read_u32(12) as i32, (base + 32) as i32 - 16);
}

#[test]
fn pool_overflow_fails_finalize() {
    // 4096-byte page: 129 slots of 32 bytes cannot fit after any code.
    let mut a = Assembler::new(4096).unwrap();
    a.begin();
    for i in 0..129 {
        a.set1_epi32(i);
    }
    a.ret();
    match a.end() {
        Err(AsmError::PoolOverflow { needed, capacity }) => {
            assert!(needed > capacity);
        }
        other => panic!("expected pool overflow, got {other:?}"),
    }
    assert_eq!(
        unsafe { a.execute(std::ptr::null_mut()) }.unwrap_err(),
        AsmError::Poisoned
    );
}

#[test]
fn duplicate_values_get_distinct_slots() {
    let mut a = Assembler::with_default_page_size().unwrap();
    a.begin();
    let c0 = a.set1_ps(1.5);
    let c1 = a.set1_ps(1.5);
    assert_ne!(c0, c1);
    a.load_const(Ymm0, c0);
    a.load_const(Ymm1, c1);
    a.ret();
    a.end().unwrap();

    let base = (a.num_bytes() + 31) & !31;
    assert_eq!(a.read_u32(base), 1.5f32.to_bits());
    assert_eq!(a.read_u32(base + 32), 1.5f32.to_bits());
}

#[test]
fn code_around_const_load_is_unchanged() {
    let mut a = Assembler::with_default_page_size().unwrap();
    a.begin();
    let c = a.set1_ps(9.0);
    a.movaps_load(Ymm0, Rcx, 32);
    a.load_const(Ymm1, c);
    a.ret();
    a.end().unwrap();
    assert_eq!(&a.bytecode()[..5], &[0xC5, 0xFC, 0x28, 0x41, 0x20]);
}
