//! End-to-end scenarios: assemble, finalize, execute, check memory.
//!
//! Every test bails out early on hosts without AVX2.

use vecasm_backend::Assembler;
use vecasm_core::{AVXReg::*, Reg::*};
use vecasm_funcs::FunctionTable;

/// 32-byte-aligned rows of eight floats; row k sits at [RCX + 32*k].
#[repr(C, align(32))]
struct Rows<const N: usize>([[f32; 8]; N]);

impl<const N: usize> Rows<N> {
    fn ramp() -> Self {
        let mut rows = [[0.0f32; 8]; N];
        for (k, row) in rows.iter_mut().enumerate() {
            *row = [k as f32 * 0.1; 8];
        }
        Self(rows)
    }

    fn ptr(&mut self) -> *mut u8 {
        self.0.as_mut_ptr() as *mut u8
    }

    fn flat(&self) -> Vec<f32> {
        self.0.iter().flatten().copied().collect()
    }
}

fn have_avx2() -> bool {
    is_x86_feature_detected!("avx2")
}

fn assert_close(got: f32, want: f32, eps: f32) {
    assert!(
        (got - want).abs() <= eps,
        "expected {want}, got {got} (eps {eps})"
    );
}

#[test]
fn aligned_move_through() {
    if !have_avx2() {
        return;
    }
    let mut data = Rows::<16>::ramp();
    let orig = data.flat();

    let mut a = Assembler::with_default_page_size().unwrap();
    a.begin();
    a.movaps_load(Ymm0, Rcx, 32);
    a.movups_load(Ymm1, Rcx, 80);
    a.movaps_store(Rcx, 0, Ymm0);
    a.movups_store(Rcx, 8, Ymm1);
    a.ret();
    a.end().unwrap();

    unsafe { a.execute(data.ptr()).unwrap() };
    let flat = data.flat();

    // Row 1 (all 0.1) moved to the front...
    assert_eq!(flat[0], 0.1);
    assert_eq!(flat[1], 0.1);
    // ...then the unaligned window starting at byte 80 (float 20)
    // lands at byte 8 (float 2).
    for i in 0..8 {
        assert_eq!(flat[2 + i], orig[20 + i]);
    }
    // Nothing else moved.
    assert_eq!(&flat[10..], &orig[10..]);
}

#[test]
fn packed_add() {
    if !have_avx2() {
        return;
    }
    let mut data = Rows::<16>::ramp();

    let mut a = Assembler::with_default_page_size().unwrap();
    a.begin();
    a.movaps_load(Ymm1, Rcx, 32);
    a.movaps_load(Ymm2, Rcx, 64);
    a.addps(Ymm0, Ymm1, Ymm2);
    a.movaps_store(Rcx, 0, Ymm0);
    a.ret();
    a.end().unwrap();

    unsafe { a.execute(data.ptr()).unwrap() };
    for v in &data.0[0] {
        assert_close(*v, 0.3, 1e-6);
    }
}

#[test]
fn rsqrt_normalize() {
    if !have_avx2() {
        return;
    }
    let mut data = Rows::<4>::ramp();
    data.0[1] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
    data.0[2] = [2.0, 1.0, 2.0, 1.0, 2.0, 1.0, 2.0, 1.0];
    data.0[3] = [0.5, 0.25, 4.0, 1.0, 2.0, 0.125, 3.0, 0.75];

    let mut a = Assembler::with_default_page_size().unwrap();
    a.begin();
    a.movaps_load(Ymm0, Rcx, 32);
    a.movaps_load(Ymm1, Rcx, 64);
    a.movaps_load(Ymm2, Rcx, 96);
    a.mulps(Ymm3, Ymm0, Ymm0);
    a.mulps(Ymm4, Ymm1, Ymm1);
    a.addps(Ymm3, Ymm3, Ymm4);
    a.mulps(Ymm4, Ymm2, Ymm2);
    a.addps(Ymm3, Ymm3, Ymm4);
    a.rsqrtps(Ymm3, Ymm3);
    a.mulps(Ymm0, Ymm0, Ymm3);
    a.mulps(Ymm1, Ymm1, Ymm3);
    a.mulps(Ymm2, Ymm2, Ymm3);
    a.movaps_store(Rcx, 32, Ymm0);
    a.movaps_store(Rcx, 64, Ymm1);
    a.movaps_store(Rcx, 96, Ymm2);
    a.ret();
    a.end().unwrap();

    unsafe { a.execute(data.ptr()).unwrap() };
    for i in 0..8 {
        let (x, y, z) = (data.0[1][i], data.0[2][i], data.0[3][i]);
        let len = (x * x + y * y + z * z).sqrt();
        assert_close(len, 1.0, 1e-3);
    }
}

#[test]
fn countdown_loop() {
    if !have_avx2() {
        return;
    }
    let mut data = Rows::<10>::ramp();
    for row in data.0.iter_mut() {
        *row = [0.1; 8];
    }

    let mut a = Assembler::with_default_page_size().unwrap();
    a.begin();
    a.setzero(Ymm0);
    a.mov(Rax, Rcx);
    a.loadcount(R9, 10);
    a.insert_label("again");
    a.addps_m(Ymm0, Ymm0, Rax, 0);
    a.lea(Rax, Rax, 32);
    a.dec(R9);
    a.jump_ne_label("again");
    a.movaps_store(Rcx, 0, Ymm0);
    a.ret();
    a.end().unwrap();

    unsafe { a.execute(data.ptr()).unwrap() };
    for v in &data.0[0] {
        assert_close(*v, 1.0, 1e-5);
    }
}

#[test]
fn forward_jump_on_movemask() {
    if !have_avx2() {
        return;
    }
    let mut a = Assembler::with_default_page_size().unwrap();
    a.begin();
    a.push(Rbx);
    a.movaps_load(Ymm0, Rcx, 0);
    a.movemaskps(Rbx, Ymm0);
    a.cmp(Rbx, 0xFF);
    a.jump_eq_label("all_negative");
    a.mulps(Ymm0, Ymm0, Ymm0);
    a.movaps_store(Rcx, 0, Ymm0);
    a.pop(Rbx);
    a.ret();
    a.insert_label("all_negative");
    a.addps(Ymm0, Ymm0, Ymm0);
    a.movaps_store(Rcx, 0, Ymm0);
    a.pop(Rbx);
    a.ret();
    a.end().unwrap();

    let mut pos = Rows::<1>([[3.0; 8]]);
    unsafe { a.execute(pos.ptr()).unwrap() };
    for v in &pos.0[0] {
        assert_close(*v, 9.0, 1e-6);
    }

    let mut neg = Rows::<1>([[-3.0; 8]]);
    unsafe { a.execute(neg.ptr()).unwrap() };
    for v in &neg.0[0] {
        assert_close(*v, -6.0, 1e-6);
    }
}

#[test]
fn constant_pool_products() {
    if !have_avx2() {
        return;
    }
    let mut data = Rows::<4>::ramp();
    let pattern = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];

    let mut a = Assembler::with_default_page_size().unwrap();
    a.begin();
    let broadcast = a.set1_ps(4.5);
    let ramp = a.set_ps(pattern);
    a.load_const(Ymm1, broadcast);
    a.load_const(Ymm2, ramp);
    a.movaps_load(Ymm0, Rcx, 32);
    a.mulps(Ymm1, Ymm1, Ymm0);
    a.mulps(Ymm2, Ymm2, Ymm0);
    a.movaps_store(Rcx, 0, Ymm1);
    a.movaps_store(Rcx, 32, Ymm2);
    a.ret();
    a.end().unwrap();

    unsafe { a.execute(data.ptr()).unwrap() };
    for i in 0..8 {
        assert_close(data.0[0][i], 4.5 * 0.1, 1e-6);
        assert_close(data.0[1][i], pattern[i] * 0.1, 1e-6);
    }
}

#[test]
fn subroutine_roundtrip() {
    if !have_avx2() {
        return;
    }
    let mut data = Rows::<4>::ramp();

    let mut a = Assembler::with_default_page_size().unwrap();
    a.begin();
    a.movaps_load(Ymm0, Rcx, 0);
    a.movaps_load(Ymm1, Rcx, 32);
    a.movaps_load(Ymm2, Rcx, 64);
    a.movaps_load(Ymm3, Rcx, 96);
    a.call_procedure("vec2_add");
    a.movaps_store(Rcx, 0, Ymm0);
    a.movaps_store(Rcx, 32, Ymm1);
    a.ret();
    a.procedure("vec2_add");
    a.addps(Ymm0, Ymm0, Ymm2);
    a.addps(Ymm1, Ymm1, Ymm3);
    a.ret();
    a.end().unwrap();

    unsafe { a.execute(data.ptr()).unwrap() };
    for v in &data.0[0] {
        assert_close(*v, 0.2, 1e-6);
    }
    for v in &data.0[1] {
        assert_close(*v, 0.4, 1e-6);
    }
}

#[test]
fn gather_reverses_row() {
    if !have_avx2() {
        return;
    }
    let mut data = Rows::<3>::ramp();
    data.0[1] = [10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0];
    // Row 2 holds the reversed 32-bit indices 7..0.
    let idx: [i32; 8] = [7, 6, 5, 4, 3, 2, 1, 0];
    data.0[2] = idx.map(|v| f32::from_bits(v as u32));

    let mut a = Assembler::with_default_page_size().unwrap();
    a.begin();
    a.movaps_load(Ymm1, Rcx, 64);
    // All-ones mask: gather every lane.
    a.cmpeqi8(Ymm2, Ymm2, Ymm2);
    assert!(a.i32gatherps(Ymm0, Ymm1, Ymm2, Rcx, 32, 4));
    a.movaps_store(Rcx, 0, Ymm0);
    a.ret();
    a.end().unwrap();

    unsafe { a.execute(data.ptr()).unwrap() };
    for i in 0..8 {
        assert_eq!(data.0[0][i], (17 - i) as f32);
    }
}

#[test]
fn host_function_call() {
    if !have_avx2() {
        return;
    }
    let mut data = Rows::<2>::ramp();
    data.0[1] = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8];
    let expected: Vec<f32> = data.0[1].iter().map(|v| v.sin()).collect();

    let mut table = FunctionTable::new();
    table.add_defaults();

    let mut a = Assembler::with_default_page_size().unwrap();
    a.begin();
    a.frame_enter(64);
    a.mov_store(Rsp, 8, Rcx);
    a.mov_store(Rsp, 16, Rdx);
    a.movaps_load(Ymm0, Rcx, 32);
    assert!(a.call("sin", &table));
    a.mov_load(Rcx, Rsp, 8);
    a.mov_load(Rdx, Rsp, 16);
    a.movaps_store(Rcx, 0, Ymm0);
    a.frame_leave();
    a.ret();
    a.end().unwrap();

    unsafe { a.execute_with(data.ptr(), &table).unwrap() };
    for i in 0..8 {
        assert_close(data.0[0][i], expected[i], 1e-6);
    }
}

#[test]
fn fma_accumulate() {
    if !have_avx2() {
        return;
    }
    if !is_x86_feature_detected!("fma") {
        return;
    }
    let mut data = Rows::<3>::ramp();
    data.0[0] = [2.0; 8];
    data.0[1] = [3.0; 8];
    data.0[2] = [4.0; 8];

    let mut a = Assembler::with_default_page_size().unwrap();
    a.begin();
    a.movaps_load(Ymm0, Rcx, 0);
    a.movaps_load(Ymm1, Rcx, 32);
    a.movaps_load(Ymm2, Rcx, 64);
    // ymm0 = ymm0 * ymm1 + ymm2
    a.fmaddps(Ymm0, Ymm1, Ymm2);
    a.movaps_store(Rcx, 0, Ymm0);
    a.ret();
    a.end().unwrap();

    unsafe { a.execute(data.ptr()).unwrap() };
    for v in &data.0[0] {
        assert_close(*v, 10.0, 1e-6);
    }
}
