//! Packed double-precision operations (4 x f64 lanes).

use vecasm_core::{AVXReg, CmpPredicate, Reg, RoundMode};

use crate::ops::shuffle_pd_imm;
use crate::session::Assembler;
use crate::vex::*;

impl Assembler {
    // -- Moves --

    /// vmovapd ymm, ymm.
    pub fn movapd(&mut self, to: AVXReg, from: AVXReg) {
        self.v2("vmovapd", OPC_VMOVAPD_LOAD, to, from);
    }

    /// vmovapd ymm, [base+disp]; the address must be 32-byte aligned.
    pub fn movapd_load(&mut self, to: AVXReg, base: Reg, disp: i32) -> bool {
        self.v2m(OPC_VMOVAPD_LOAD, to, base, disp)
    }

    /// vmovapd [base+disp], ymm.
    pub fn movapd_store(&mut self, base: Reg, disp: i32, from: AVXReg) -> bool {
        self.vst(OPC_VMOVAPD_STORE, base, disp, from)
    }

    /// vmovupd ymm, ymm.
    pub fn movupd(&mut self, to: AVXReg, from: AVXReg) {
        self.v2("vmovupd", OPC_VMOVUPD_LOAD, to, from);
    }

    pub fn movupd_load(&mut self, to: AVXReg, base: Reg, disp: i32) -> bool {
        self.v2m(OPC_VMOVUPD_LOAD, to, base, disp)
    }

    pub fn movupd_store(&mut self, base: Reg, disp: i32, from: AVXReg) -> bool {
        self.vst(OPC_VMOVUPD_STORE, base, disp, from)
    }

    // -- Arithmetic --

    /// vaddpd: dst = a + b.
    pub fn addpd(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vaddpd", OPC_VADDPD, dst, a, b);
    }

    pub fn addpd_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VADDPD, dst, a, base, disp)
    }

    /// vaddsubpd: subtract in even lanes, add in odd lanes.
    pub fn addsubpd(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vaddsubpd", OPC_VADDSUBPD, dst, a, b);
    }

    pub fn addsubpd_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VADDSUBPD, dst, a, base, disp)
    }

    /// vsubpd: dst = a - b.
    pub fn subpd(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vsubpd", OPC_VSUBPD, dst, a, b);
    }

    pub fn subpd_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VSUBPD, dst, a, base, disp)
    }

    /// vmulpd: dst = a * b.
    pub fn mulpd(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vmulpd", OPC_VMULPD, dst, a, b);
    }

    pub fn mulpd_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VMULPD, dst, a, base, disp)
    }

    /// vdivpd: dst = a / b.
    pub fn divpd(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vdivpd", OPC_VDIVPD, dst, a, b);
    }

    pub fn divpd_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VDIVPD, dst, a, base, disp)
    }

    /// vminpd: lane-wise minimum.
    pub fn minpd(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vminpd", OPC_VMINPD, dst, a, b);
    }

    pub fn minpd_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VMINPD, dst, a, base, disp)
    }

    /// vmaxpd: lane-wise maximum.
    pub fn maxpd(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vmaxpd", OPC_VMAXPD, dst, a, b);
    }

    pub fn maxpd_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VMAXPD, dst, a, base, disp)
    }

    /// vhaddpd: horizontal pairwise add.
    pub fn haddpd(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vhaddpd", OPC_VHADDPD, dst, a, b);
    }

    pub fn haddpd_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VHADDPD, dst, a, base, disp)
    }

    /// vhsubpd: horizontal pairwise subtract.
    pub fn hsubpd(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vhsubpd", OPC_VHSUBPD, dst, a, b);
    }

    pub fn hsubpd_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VHSUBPD, dst, a, base, disp)
    }

    // -- Bitwise --

    /// vandpd.
    pub fn andpd(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vandpd", OPC_VANDPD, dst, a, b);
    }

    pub fn andpd_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VANDPD, dst, a, base, disp)
    }

    /// vandnpd: dst = !a & b.
    pub fn andnotpd(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vandnpd", OPC_VANDNPD, dst, a, b);
    }

    pub fn andnotpd_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VANDNPD, dst, a, base, disp)
    }

    /// vorpd.
    pub fn orpd(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vorpd", OPC_VORPD, dst, a, b);
    }

    pub fn orpd_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VORPD, dst, a, base, disp)
    }

    /// vxorpd.
    pub fn xorpd(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vxorpd", OPC_VXORPD, dst, a, b);
    }

    pub fn xorpd_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VXORPD, dst, a, base, disp)
    }

    // -- Unary --

    /// vsqrtpd.
    pub fn sqrtpd(&mut self, dst: AVXReg, src: AVXReg) {
        self.v2("vsqrtpd", OPC_VSQRTPD, dst, src);
    }

    pub fn sqrtpd_m(&mut self, dst: AVXReg, base: Reg, disp: i32) -> bool {
        self.v2m(OPC_VSQRTPD, dst, base, disp)
    }

    /// vroundpd with the given rounding control.
    pub fn roundpd(&mut self, dst: AVXReg, src: AVXReg, mode: RoundMode) {
        self.v2i("vroundpd", OPC_VROUNDPD, dst, src, mode.imm());
    }

    pub fn roundpd_m(&mut self, dst: AVXReg, base: Reg, disp: i32, mode: RoundMode) -> bool {
        self.v2mi(OPC_VROUNDPD, dst, base, disp, mode.imm())
    }

    // -- Compare / blend --

    /// vcmppd: lane-wise compare producing all-ones/all-zero masks.
    pub fn cmppd(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg, pred: CmpPredicate) {
        self.v3i("vcmppd", OPC_VCMPPD, dst, a, b, pred.imm());
    }

    pub fn cmppd_m(
        &mut self,
        dst: AVXReg,
        a: AVXReg,
        base: Reg,
        disp: i32,
        pred: CmpPredicate,
    ) -> bool {
        self.v3mi(OPC_VCMPPD, dst, a, base, disp, pred.imm())
    }

    /// vblendvpd: dst = mask-sign-bit ? t : f, per lane.
    pub fn blendvpd(&mut self, dst: AVXReg, f: AVXReg, t: AVXReg, mask: AVXReg) {
        self.v3i("vblendvpd", OPC_VBLENDVPD, dst, f, t, (mask as u8) << 4);
    }

    pub fn blendvpd_m(
        &mut self,
        dst: AVXReg,
        f: AVXReg,
        base: Reg,
        disp: i32,
        mask: AVXReg,
    ) -> bool {
        self.v3mi(OPC_VBLENDVPD, dst, f, base, disp, (mask as u8) << 4)
    }

    /// vmovmskpd: gather the four lane sign bits into a GPR.
    pub fn movemaskpd(&mut self, dst: Reg, src: AVXReg) {
        self.op("vmovmskpd", |s| {
            s.vex_rr(OPC_VMOVMSKPD, dst as u8, 0, src as u8);
        });
    }

    /// dppd. The Intel tables list a 256-bit encoding but no compiler
    /// emits one and no intrinsic exposes it; assume it faults until
    /// proven otherwise.
    pub fn dppd(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg, mask: u8) {
        self.v3i("vdppd", OPC_VDPPD, dst, a, b, mask);
    }

    pub fn dppd_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32, mask: u8) -> bool {
        self.v3mi(OPC_VDPPD, dst, a, base, disp, mask)
    }

    // -- Shuffles and permutes --

    /// vshufpd with one selector bit per lane, replicated across both
    /// 128-bit halves.
    pub fn shufflepd(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg, x: u8, y: u8) {
        self.v3i("vshufpd", OPC_VSHUFPD, dst, a, b, shuffle_pd_imm(x, y));
    }

    #[allow(clippy::too_many_arguments)]
    pub fn shufflepd_m(
        &mut self,
        dst: AVXReg,
        a: AVXReg,
        base: Reg,
        disp: i32,
        x: u8,
        y: u8,
    ) -> bool {
        self.v3mi(OPC_VSHUFPD, dst, a, base, disp, shuffle_pd_imm(x, y))
    }

    /// vunpcklpd.
    pub fn unpacklopd(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vunpcklpd", OPC_VUNPCKLPD, dst, a, b);
    }

    pub fn unpacklopd_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VUNPCKLPD, dst, a, base, disp)
    }

    /// vunpckhpd.
    pub fn unpackhipd(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vunpckhpd", OPC_VUNPCKHPD, dst, a, b);
    }

    pub fn unpackhipd_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VUNPCKHPD, dst, a, base, disp)
    }

    /// vmovddup: duplicate the even lanes.
    pub fn moveduppd(&mut self, dst: AVXReg, src: AVXReg) {
        self.v2("vmovddup", OPC_VMOVDDUP, dst, src);
    }

    pub fn moveduppd_m(&mut self, dst: AVXReg, base: Reg, disp: i32) -> bool {
        self.v2m(OPC_VMOVDDUP, dst, base, disp)
    }

    /// vbroadcastsd: replicate the low f64 of `src` into every lane.
    pub fn broadcastsd(&mut self, dst: AVXReg, src: AVXReg) {
        self.v2("vbroadcastsd", OPC_VBROADCASTSD, dst, src);
    }

    pub fn broadcastsd_m(&mut self, dst: AVXReg, base: Reg, disp: i32) -> bool {
        self.v2m(OPC_VBROADCASTSD, dst, base, disp)
    }

    /// vpermilpd (variable).
    pub fn permutevarpd(&mut self, dst: AVXReg, a: AVXReg, control: AVXReg) {
        self.v3("vpermilpd", OPC_VPERMILPD_VAR, dst, a, control);
    }

    pub fn permutevarpd_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPERMILPD_VAR, dst, a, base, disp)
    }

    /// vpermilpd (immediate) with one selector bit per lane, replicated
    /// across both halves.
    pub fn permutepd(&mut self, dst: AVXReg, src: AVXReg, x: u8, y: u8) {
        self.v2i("vpermilpd", OPC_VPERMILPD_IMM, dst, src, shuffle_pd_imm(x, y));
    }

    pub fn permutepd_m(&mut self, dst: AVXReg, base: Reg, disp: i32, x: u8, y: u8) -> bool {
        self.v2mi(OPC_VPERMILPD_IMM, dst, base, disp, shuffle_pd_imm(x, y))
    }

    // -- Fused multiply-add (213 forms) --

    /// vfmadd213pd: dst = (dst * a) + b.
    pub fn fmaddpd(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vfmadd213pd", OPC_VFMADD213PD, dst, a, b);
    }

    pub fn fmaddpd_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VFMADD213PD, dst, a, base, disp)
    }

    /// vfmsub213pd: dst = (dst * a) - b.
    pub fn fmsubpd(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vfmsub213pd", OPC_VFMSUB213PD, dst, a, b);
    }

    pub fn fmsubpd_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VFMSUB213PD, dst, a, base, disp)
    }

    /// vfnmadd213pd: dst = -(dst * a) + b.
    pub fn fnmaddpd(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vfnmadd213pd", OPC_VFNMADD213PD, dst, a, b);
    }

    pub fn fnmaddpd_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VFNMADD213PD, dst, a, base, disp)
    }

    /// vfnmsub213pd: dst = -(dst * a) - b.
    pub fn fnmsubpd(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vfnmsub213pd", OPC_VFNMSUB213PD, dst, a, b);
    }

    pub fn fnmsubpd_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VFNMSUB213PD, dst, a, base, disp)
    }

    /// vfmaddsub213pd: subtract in even lanes, add in odd lanes.
    pub fn fmaddsubpd(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vfmaddsub213pd", OPC_VFMADDSUB213PD, dst, a, b);
    }

    pub fn fmaddsubpd_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VFMADDSUB213PD, dst, a, base, disp)
    }

    /// vfmsubadd213pd: add in even lanes, subtract in odd lanes.
    pub fn fmsubaddpd(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vfmsubadd213pd", OPC_VFMSUBADD213PD, dst, a, b);
    }

    pub fn fmsubaddpd_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VFMSUBADD213PD, dst, a, base, disp)
    }
}
