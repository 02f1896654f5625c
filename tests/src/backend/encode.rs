//! Byte-exact encoder checks against reference encodings.

use vecasm_backend::Assembler;
use vecasm_core::{AVXReg::*, CmpPredicate, Reg::*, RoundMode};

fn emit(f: impl FnOnce(&mut Assembler)) -> Vec<u8> {
    let mut a = Assembler::with_default_page_size().unwrap();
    a.begin();
    f(&mut a);
    assert!(a.error().is_none(), "emission failed: {:?}", a.error());
    a.bytecode().to_vec()
}

// -- VEX form selection --

#[test]
fn vex2_low_regs() {
    // vaddps ymm0, ymm1, ymm2 => C5 F4 58 C2
    let code = emit(|a| a.addps(Ymm0, Ymm1, Ymm2));
    assert_eq!(code, [0xC5, 0xF4, 0x58, 0xC2]);
}

#[test]
fn vex3_for_extended_rm() {
    // vaddps ymm0, ymm1, ymm8 => C4 C1 74 58 C0 (B bit forces VEX3)
    let code = emit(|a| a.addps(Ymm0, Ymm1, Ymm8));
    assert_eq!(code, [0xC4, 0xC1, 0x74, 0x58, 0xC0]);
}

#[test]
fn vex3_all_extended() {
    // vaddps ymm8, ymm9, ymm10 => C4 41 34 58 C2
    let code = emit(|a| a.addps(Ymm8, Ymm9, Ymm10));
    assert_eq!(code, [0xC4, 0x41, 0x34, 0x58, 0xC2]);
}

// -- Memory operands --

#[test]
fn load_disp8() {
    // vmovaps ymm0, [rcx+0x20] => C5 FC 28 41 20
    let code = emit(|a| {
        a.movaps_load(Ymm0, Rcx, 0x20);
    });
    assert_eq!(code, [0xC5, 0xFC, 0x28, 0x41, 0x20]);
}

#[test]
fn load_disp0() {
    // vmovaps ymm0, [rcx] => C5 FC 28 01
    let code = emit(|a| {
        a.movaps_load(Ymm0, Rcx, 0);
    });
    assert_eq!(code, [0xC5, 0xFC, 0x28, 0x01]);
}

#[test]
fn load_disp32() {
    // vmovaps ymm0, [rcx+0x1000] => C5 FC 28 81 00 10 00 00
    let code = emit(|a| {
        a.movaps_load(Ymm0, Rcx, 0x1000);
    });
    assert_eq!(code, [0xC5, 0xFC, 0x28, 0x81, 0x00, 0x10, 0x00, 0x00]);
}

#[test]
fn rsp_base_needs_sib() {
    // vmovaps ymm0, [rsp+0x10] => C5 FC 28 44 24 10
    let code = emit(|a| {
        a.movaps_load(Ymm0, Rsp, 0x10);
    });
    assert_eq!(code, [0xC5, 0xFC, 0x28, 0x44, 0x24, 0x10]);
}

#[test]
fn rbp_base_needs_disp8() {
    // vmovaps ymm0, [rbp] => C5 FC 28 45 00
    let code = emit(|a| {
        a.movaps_load(Ymm0, Rbp, 0);
    });
    assert_eq!(code, [0xC5, 0xFC, 0x28, 0x45, 0x00]);
}

#[test]
fn r13_base_needs_disp8() {
    // vmovaps ymm0, [r13] => C4 C1 7C 28 45 00
    let code = emit(|a| {
        a.movaps_load(Ymm0, R13, 0);
    });
    assert_eq!(code, [0xC4, 0xC1, 0x7C, 0x28, 0x45, 0x00]);
}

#[test]
fn store_form() {
    // vmovaps [rcx], ymm0 => C5 FC 29 01
    let code = emit(|a| {
        a.movaps_store(Rcx, 0, Ymm0);
    });
    assert_eq!(code, [0xC5, 0xFC, 0x29, 0x01]);
}

#[test]
fn unaligned_move() {
    // vmovups ymm1, [rcx+0x50] => C5 FC 10 49 50
    let code = emit(|a| {
        a.movups_load(Ymm1, Rcx, 0x50);
    });
    assert_eq!(code, [0xC5, 0xFC, 0x10, 0x49, 0x50]);
}

#[test]
fn arith_mem_form() {
    // vmulps ymm0, ymm1, [rcx+0x20] => C5 F4 59 41 20
    let code = emit(|a| {
        a.mulps_m(Ymm0, Ymm1, Rcx, 0x20);
    });
    assert_eq!(code, [0xC5, 0xF4, 0x59, 0x41, 0x20]);
}

// -- pd / prefix selection --

#[test]
fn pd_uses_66_prefix() {
    // vaddpd ymm0, ymm1, ymm2 => C5 F5 58 C2
    let code = emit(|a| a.addpd(Ymm0, Ymm1, Ymm2));
    assert_eq!(code, [0xC5, 0xF5, 0x58, 0xC2]);
}

#[test]
fn haddps_uses_f2_prefix() {
    // vhaddps ymm0, ymm1, ymm2 => C5 F7 7C C2
    let code = emit(|a| a.haddps(Ymm0, Ymm1, Ymm2));
    assert_eq!(code, [0xC5, 0xF7, 0x7C, 0xC2]);
}

#[test]
fn movshdup_uses_f3_prefix() {
    // vmovshdup ymm0, ymm1 => C5 FE 16 C1
    let code = emit(|a| a.movehdupps(Ymm0, Ymm1));
    assert_eq!(code, [0xC5, 0xFE, 0x16, 0xC1]);
}

// -- Scalar (VEX.L = 0) --

#[test]
fn scalar_clears_l() {
    // vaddss xmm0, xmm1, xmm2 => C5 F2 58 C2
    let code = emit(|a| a.addss(Ymm0, Ymm1, Ymm2));
    assert_eq!(code, [0xC5, 0xF2, 0x58, 0xC2]);
}

#[test]
fn sqrtss_merges_dst() {
    // vsqrtss xmm1, xmm1, xmm2 => C5 F2 51 CA
    let code = emit(|a| a.sqrtss(Ymm1, Ymm2));
    assert_eq!(code, [0xC5, 0xF2, 0x51, 0xCA]);
}

#[test]
fn movss_load_form() {
    // vmovss xmm0, [rcx+4] => C5 FA 10 41 04
    let code = emit(|a| {
        a.movss_load(Ymm0, Rcx, 4);
    });
    assert_eq!(code, [0xC5, 0xFA, 0x10, 0x41, 0x04]);
}

#[test]
fn movsd_uses_f2() {
    // vmovsd xmm0, [rcx+8] => C5 FB 10 41 08
    let code = emit(|a| {
        a.movsd_load(Ymm0, Rcx, 8);
    });
    assert_eq!(code, [0xC5, 0xFB, 0x10, 0x41, 0x08]);
}

// -- Immediates --

#[test]
fn cmpps_appends_predicate() {
    // vcmpps ymm0, ymm1, ymm2, 0x1F => C5 F4 C2 C2 1F
    let code = emit(|a| a.cmpps(Ymm0, Ymm1, Ymm2, CmpPredicate::TrueUs));
    assert_eq!(code, [0xC5, 0xF4, 0xC2, 0xC2, 0x1F]);
}

#[test]
fn shuffleps_builds_imm() {
    // vshufps ymm0, ymm1, ymm2, 0xE4 (w=3,z=2,y=1,x=0)
    let code = emit(|a| a.shuffleps(Ymm0, Ymm1, Ymm2, 0, 1, 2, 3));
    assert_eq!(code, [0xC5, 0xF4, 0xC6, 0xC2, 0xE4]);
}

#[test]
fn roundps_map3() {
    // vroundps ymm0, ymm1, 1 => C4 E3 7D 08 C1 01
    let code = emit(|a| a.roundps(Ymm0, Ymm1, RoundMode::FLOOR));
    assert_eq!(code, [0xC4, 0xE3, 0x7D, 0x08, 0xC1, 0x01]);
}

#[test]
fn dpps_imm() {
    // vdpps ymm0, ymm1, ymm2, 0xFF => C4 E3 75 40 C2 FF
    let code = emit(|a| a.dpps(Ymm0, Ymm1, Ymm2, 0xFF));
    assert_eq!(code, [0xC4, 0xE3, 0x75, 0x40, 0xC2, 0xFF]);
}

#[test]
fn blendv_encodes_mask_in_imm() {
    // vblendvps ymm0, ymm1, ymm2, ymm3 => C4 E3 75 4A C2 30
    let code = emit(|a| a.blendvps(Ymm0, Ymm1, Ymm2, Ymm3));
    assert_eq!(code, [0xC4, 0xE3, 0x75, 0x4A, 0xC2, 0x30]);
}

#[test]
fn perm2f128_imm() {
    // vperm2f128 ymm0, ymm1, ymm2, 0x21 => C4 E3 75 06 C2 21
    let code = emit(|a| a.permute2f128(Ymm0, Ymm1, Ymm2, 0x21));
    assert_eq!(code, [0xC4, 0xE3, 0x75, 0x06, 0xC2, 0x21]);
}

#[test]
fn insertf128_low_half() {
    // vinsertf128 ymm0, ymm1, xmm2, 0 => C4 E3 75 18 C2 00
    let code = emit(|a| a.insertf128(Ymm0, Ymm1, Ymm2, 0));
    assert_eq!(code, [0xC4, 0xE3, 0x75, 0x18, 0xC2, 0x00]);
}

#[test]
fn extractf128_upper_half() {
    // vextractf128 xmm0, ymm1, 1 => C4 E3 7D 19 C8 01
    let code = emit(|a| a.extractf128(Ymm0, Ymm1));
    assert_eq!(code, [0xC4, 0xE3, 0x7D, 0x19, 0xC8, 0x01]);
}

// -- FMA --

#[test]
fn fmadd213ps() {
    // vfmadd213ps ymm0, ymm1, ymm2 => C4 E2 75 A8 C2
    let code = emit(|a| a.fmaddps(Ymm0, Ymm1, Ymm2));
    assert_eq!(code, [0xC4, 0xE2, 0x75, 0xA8, 0xC2]);
}

#[test]
fn fmadd213pd_sets_w() {
    // vfmadd213pd ymm0, ymm1, ymm2 => C4 E2 F5 A8 C2
    let code = emit(|a| a.fmaddpd(Ymm0, Ymm1, Ymm2));
    assert_eq!(code, [0xC4, 0xE2, 0xF5, 0xA8, 0xC2]);
}

// -- Integer and shifts --

#[test]
fn paddd_rr() {
    // vpaddd ymm0, ymm1, ymm2 => C5 F5 FE C2
    let code = emit(|a| a.addi32(Ymm0, Ymm1, Ymm2));
    assert_eq!(code, [0xC5, 0xF5, 0xFE, 0xC2]);
}

#[test]
fn pmulld_map2() {
    // vpmulld ymm0, ymm1, ymm2 => C4 E2 75 40 C2
    let code = emit(|a| a.mulli32(Ymm0, Ymm1, Ymm2));
    assert_eq!(code, [0xC4, 0xE2, 0x75, 0x40, 0xC2]);
}

#[test]
fn shift_imm_group_uses_vvvv_dst() {
    // vpslld ymm1, ymm2, 5 => C5 F5 72 F2 05
    let code = emit(|a| a.lshift_u32(Ymm1, Ymm2, 5));
    assert_eq!(code, [0xC5, 0xF5, 0x72, 0xF2, 0x05]);
}

#[test]
fn byte_shift_group() {
    // vpslldq ymm1, ymm2, 4 => C5 F5 73 FA 04
    let code = emit(|a| a.lshift_u128(Ymm1, Ymm2, 4));
    assert_eq!(code, [0xC5, 0xF5, 0x73, 0xFA, 0x04]);
}

#[test]
fn variable_shift_w1() {
    // vpsllvq ymm0, ymm1, ymm2 => C4 E2 F5 47 C2
    let code = emit(|a| a.lshiftv_u64(Ymm0, Ymm1, Ymm2));
    assert_eq!(code, [0xC4, 0xE2, 0xF5, 0x47, 0xC2]);
}

#[test]
fn pbroadcast_reg() {
    // vpbroadcastd ymm0, xmm1 => C4 E2 7D 58 C1
    let code = emit(|a| a.broadcasti32(Ymm0, Ymm1));
    assert_eq!(code, [0xC4, 0xE2, 0x7D, 0x58, 0xC1]);
}

#[test]
fn pmovmskb_to_gpr() {
    // vpmovmskb eax, ymm1 => C5 FD D7 C1
    let code = emit(|a| a.movemaski8(Rax, Ymm1));
    assert_eq!(code, [0xC5, 0xFD, 0xD7, 0xC1]);
}

// -- Masks, broadcast, gather --

#[test]
fn movmskps_to_gpr() {
    // vmovmskps eax, ymm1 => C5 FC 50 C1
    let code = emit(|a| a.movemaskps(Rax, Ymm1));
    assert_eq!(code, [0xC5, 0xFC, 0x50, 0xC1]);
}

#[test]
fn movmskps_extended_gpr() {
    // vmovmskps r8d, ymm1 => C5 7C 50 C1 (VEX2 carries the R bit)
    let code = emit(|a| a.movemaskps(R8, Ymm1));
    assert_eq!(code, [0xC5, 0x7C, 0x50, 0xC1]);
}

#[test]
fn broadcastss_reg() {
    // vbroadcastss ymm0, xmm1 => C4 E2 7D 18 C1
    let code = emit(|a| a.broadcastss(Ymm0, Ymm1));
    assert_eq!(code, [0xC4, 0xE2, 0x7D, 0x18, 0xC1]);
}

#[test]
fn gather_vsib() {
    // vgatherdps ymm0, [rax+ymm1*4], ymm2 => C4 E2 6D 92 04 88
    let code = emit(|a| {
        assert!(a.i32gatherps(Ymm0, Ymm1, Ymm2, Rax, 0, 4));
    });
    assert_eq!(code, [0xC4, 0xE2, 0x6D, 0x92, 0x04, 0x88]);
}

#[test]
fn gather_rejects_bad_scale() {
    let mut a = Assembler::with_default_page_size().unwrap();
    a.begin();
    assert!(!a.i32gatherps(Ymm0, Ymm1, Ymm2, Rax, 0, 3));
    assert_eq!(a.num_bytes(), 0);
}

// -- Conversions --

#[test]
fn cvtdq2ps_rr() {
    // vcvtdq2ps ymm0, ymm1 => C5 FC 5B C1
    let code = emit(|a| a.cvtdq2ps(Ymm0, Ymm1));
    assert_eq!(code, [0xC5, 0xFC, 0x5B, 0xC1]);
}

#[test]
fn cvtps2dq_uses_66() {
    // vcvtps2dq ymm0, ymm1 => C5 FD 5B C1
    let code = emit(|a| a.cvtps2dq(Ymm0, Ymm1));
    assert_eq!(code, [0xC5, 0xFD, 0x5B, 0xC1]);
}

#[test]
fn cvtss2si_gpr_dst() {
    // vcvtss2si eax, xmm1 => C5 FA 2D C1
    let code = emit(|a| a.cvtss2si(Rax, Ymm1));
    assert_eq!(code, [0xC5, 0xFA, 0x2D, 0xC1]);
}

#[test]
fn legacy_cvtpi2ps() {
    // cvtpi2ps xmm0, mm1 => 0F 2A C1 (legacy, no VEX)
    let code = emit(|a| a.cvtpi2ps(Ymm0, Ymm1));
    assert_eq!(code, [0x0F, 0x2A, 0xC1]);
}

// -- GPR group --

#[test]
fn push_pop() {
    // push rax / pop rax => 50 / 58
    let code = emit(|a| {
        a.push(Rax);
        a.pop(Rax);
    });
    assert_eq!(code, [0x50, 0x58]);
}

#[test]
fn push_extended() {
    // push r8 => 41 50
    let code = emit(|a| a.push(R8));
    assert_eq!(code, [0x41, 0x50]);
}

#[test]
fn mov_rr() {
    // mov rax, rcx => 48 89 C8
    let code = emit(|a| a.mov(Rax, Rcx));
    assert_eq!(code, [0x48, 0x89, 0xC8]);
}

#[test]
fn mov_load_store() {
    // mov rax, [rbp+8] => 48 8B 45 08; mov [rbp+8], rax => 48 89 45 08
    let code = emit(|a| {
        a.mov_load(Rax, Rbp, 8);
        a.mov_store(Rbp, 8, Rax);
    });
    assert_eq!(code, [0x48, 0x8B, 0x45, 0x08, 0x48, 0x89, 0x45, 0x08]);
}

#[test]
fn lea_disp8() {
    // lea rax, [rcx+0x10] => 48 8D 41 10
    let code = emit(|a| a.lea(Rax, Rcx, 0x10));
    assert_eq!(code, [0x48, 0x8D, 0x41, 0x10]);
}

#[test]
fn arith_imm8_form() {
    // sub rsp, 0x40 => 48 83 EC 40
    let code = emit(|a| a.sub(Rsp, 0x40));
    assert_eq!(code, [0x48, 0x83, 0xEC, 0x40]);
}

#[test]
fn arith_imm32_form() {
    // cmp rbx, 0xFF => 48 81 FB FF 00 00 00
    let code = emit(|a| a.cmp(Rbx, 0xFF));
    assert_eq!(code, [0x48, 0x81, 0xFB, 0xFF, 0x00, 0x00, 0x00]);
}

#[test]
fn and_negative_imm8() {
    // and rsp, -32 => 48 83 E4 E0
    let code = emit(|a| a.and(Rsp, -32));
    assert_eq!(code, [0x48, 0x83, 0xE4, 0xE0]);
}

#[test]
fn inc_dec() {
    // inc rax => 48 FF C0; dec r9 => 49 FF C9
    let code = emit(|a| {
        a.inc(Rax);
        a.dec(R9);
    });
    assert_eq!(code, [0x48, 0xFF, 0xC0, 0x49, 0xFF, 0xC9]);
}

#[test]
fn loadcount_imm32() {
    // mov r9d, 10 => 41 B9 0A 00 00 00
    let code = emit(|a| a.loadcount(R9, 10));
    assert_eq!(code, [0x41, 0xB9, 0x0A, 0x00, 0x00, 0x00]);
}

#[test]
fn setzero_is_vxorps() {
    // vxorps ymm0, ymm0, ymm0 => C5 FC 57 C0
    let code = emit(|a| a.setzero(Ymm0));
    assert_eq!(code, [0xC5, 0xFC, 0x57, 0xC0]);
}

#[test]
fn ret_byte() {
    let code = emit(|a| a.ret());
    assert_eq!(code, [0xC3]);
}

#[test]
fn frame_enter_sequence() {
    // push rbp; mov rbp, rsp; sub rsp, 0x40; and rsp, -32
    let code = emit(|a| a.frame_enter(64));
    assert_eq!(
        code,
        [0x55, 0x48, 0x89, 0xE5, 0x48, 0x83, 0xEC, 0x40, 0x48, 0x83, 0xE4, 0xE0]
    );
}

#[test]
fn frame_leave_sequence() {
    // mov rsp, rbp; pop rbp
    let code = emit(|a| a.frame_leave());
    assert_eq!(code, [0x48, 0x89, 0xEC, 0x5D]);
}
