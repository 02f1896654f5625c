//! Packed single-precision operations (8 x f32 lanes).

use vecasm_core::{AVXReg, CmpPredicate, Reg, RoundMode};

use crate::ops::shuffle_imm;
use crate::session::Assembler;
use crate::vex::*;

impl Assembler {
    // -- Moves --

    /// vmovaps ymm, ymm.
    pub fn movaps(&mut self, to: AVXReg, from: AVXReg) {
        self.v2("vmovaps", OPC_VMOVAPS_LOAD, to, from);
    }

    /// vmovaps ymm, [base+disp]; the address must be 32-byte
    /// aligned at run time.
    pub fn movaps_load(&mut self, to: AVXReg, base: Reg, disp: i32) -> bool {
        self.v2m(OPC_VMOVAPS_LOAD, to, base, disp)
    }

    /// vmovaps [base+disp], ymm.
    pub fn movaps_store(&mut self, base: Reg, disp: i32, from: AVXReg) -> bool {
        self.vst(OPC_VMOVAPS_STORE, base, disp, from)
    }

    /// vmovups ymm, ymm.
    pub fn movups(&mut self, to: AVXReg, from: AVXReg) {
        self.v2("vmovups", OPC_VMOVUPS_LOAD, to, from);
    }

    /// vmovups ymm, [base+disp]; no alignment requirement.
    pub fn movups_load(&mut self, to: AVXReg, base: Reg, disp: i32) -> bool {
        self.v2m(OPC_VMOVUPS_LOAD, to, base, disp)
    }

    /// vmovups [base+disp], ymm.
    pub fn movups_store(&mut self, base: Reg, disp: i32, from: AVXReg) -> bool {
        self.vst(OPC_VMOVUPS_STORE, base, disp, from)
    }

    // -- Arithmetic --

    /// vaddps: dst = a + b.
    pub fn addps(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vaddps", OPC_VADDPS, dst, a, b);
    }

    pub fn addps_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VADDPS, dst, a, base, disp)
    }

    /// vaddsubps: subtract in even lanes, add in odd lanes.
    pub fn addsubps(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vaddsubps", OPC_VADDSUBPS, dst, a, b);
    }

    pub fn addsubps_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VADDSUBPS, dst, a, base, disp)
    }

    /// vsubps: dst = a - b.
    pub fn subps(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vsubps", OPC_VSUBPS, dst, a, b);
    }

    pub fn subps_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VSUBPS, dst, a, base, disp)
    }

    /// vmulps: dst = a * b.
    pub fn mulps(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vmulps", OPC_VMULPS, dst, a, b);
    }

    pub fn mulps_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VMULPS, dst, a, base, disp)
    }

    /// vdivps: dst = a / b.
    pub fn divps(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vdivps", OPC_VDIVPS, dst, a, b);
    }

    pub fn divps_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VDIVPS, dst, a, base, disp)
    }

    /// vminps: lane-wise minimum.
    pub fn minps(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vminps", OPC_VMINPS, dst, a, b);
    }

    pub fn minps_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VMINPS, dst, a, base, disp)
    }

    /// vmaxps: lane-wise maximum.
    pub fn maxps(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vmaxps", OPC_VMAXPS, dst, a, b);
    }

    pub fn maxps_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VMAXPS, dst, a, base, disp)
    }

    /// vhaddps: horizontal pairwise add.
    pub fn haddps(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vhaddps", OPC_VHADDPS, dst, a, b);
    }

    pub fn haddps_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VHADDPS, dst, a, base, disp)
    }

    /// vhsubps: horizontal pairwise subtract.
    pub fn hsubps(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vhsubps", OPC_VHSUBPS, dst, a, b);
    }

    pub fn hsubps_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VHSUBPS, dst, a, base, disp)
    }

    // -- Bitwise --

    /// vandps.
    pub fn andps(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vandps", OPC_VANDPS, dst, a, b);
    }

    pub fn andps_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VANDPS, dst, a, base, disp)
    }

    /// vandnps: dst = !a & b.
    pub fn andnotps(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vandnps", OPC_VANDNPS, dst, a, b);
    }

    pub fn andnotps_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VANDNPS, dst, a, base, disp)
    }

    /// vorps.
    pub fn orps(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vorps", OPC_VORPS, dst, a, b);
    }

    pub fn orps_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VORPS, dst, a, base, disp)
    }

    /// vxorps.
    pub fn xorps(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vxorps", OPC_VXORPS, dst, a, b);
    }

    pub fn xorps_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VXORPS, dst, a, base, disp)
    }

    // -- Unary --

    /// vsqrtps.
    pub fn sqrtps(&mut self, dst: AVXReg, src: AVXReg) {
        self.v2("vsqrtps", OPC_VSQRTPS, dst, src);
    }

    pub fn sqrtps_m(&mut self, dst: AVXReg, base: Reg, disp: i32) -> bool {
        self.v2m(OPC_VSQRTPS, dst, base, disp)
    }

    /// vrsqrtps: approximate reciprocal square root.
    pub fn rsqrtps(&mut self, dst: AVXReg, src: AVXReg) {
        self.v2("vrsqrtps", OPC_VRSQRTPS, dst, src);
    }

    pub fn rsqrtps_m(&mut self, dst: AVXReg, base: Reg, disp: i32) -> bool {
        self.v2m(OPC_VRSQRTPS, dst, base, disp)
    }

    /// vrcpps: approximate reciprocal.
    pub fn rcpps(&mut self, dst: AVXReg, src: AVXReg) {
        self.v2("vrcpps", OPC_VRCPPS, dst, src);
    }

    pub fn rcpps_m(&mut self, dst: AVXReg, base: Reg, disp: i32) -> bool {
        self.v2m(OPC_VRCPPS, dst, base, disp)
    }

    /// vroundps with the given rounding control.
    pub fn roundps(&mut self, dst: AVXReg, src: AVXReg, mode: RoundMode) {
        self.v2i("vroundps", OPC_VROUNDPS, dst, src, mode.imm());
    }

    pub fn roundps_m(&mut self, dst: AVXReg, base: Reg, disp: i32, mode: RoundMode) -> bool {
        self.v2mi(OPC_VROUNDPS, dst, base, disp, mode.imm())
    }

    // -- Compare / blend --

    /// vcmpps: lane-wise compare producing all-ones/all-zero masks.
    pub fn cmpps(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg, pred: CmpPredicate) {
        self.v3i("vcmpps", OPC_VCMPPS, dst, a, b, pred.imm());
    }

    pub fn cmpps_m(
        &mut self,
        dst: AVXReg,
        a: AVXReg,
        base: Reg,
        disp: i32,
        pred: CmpPredicate,
    ) -> bool {
        self.v3mi(OPC_VCMPPS, dst, a, base, disp, pred.imm())
    }

    /// vblendvps: dst = mask-sign-bit ? t : f, per lane.
    pub fn blendvps(&mut self, dst: AVXReg, f: AVXReg, t: AVXReg, mask: AVXReg) {
        self.v3i("vblendvps", OPC_VBLENDVPS, dst, f, t, (mask as u8) << 4);
    }

    pub fn blendvps_m(
        &mut self,
        dst: AVXReg,
        f: AVXReg,
        base: Reg,
        disp: i32,
        mask: AVXReg,
    ) -> bool {
        self.v3mi(OPC_VBLENDVPS, dst, f, base, disp, (mask as u8) << 4)
    }

    /// vmovmskps: gather the lane sign bits into the low 8 bits of a
    /// general-purpose register.
    pub fn movemaskps(&mut self, dst: Reg, src: AVXReg) {
        self.op("vmovmskps", |s| {
            s.vex_rr(OPC_VMOVMSKPS, dst as u8, 0, src as u8);
        });
    }

    /// vdpps: conditional dot product controlled by `mask`.
    pub fn dpps(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg, mask: u8) {
        self.v3i("vdpps", OPC_VDPPS, dst, a, b, mask);
    }

    pub fn dpps_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32, mask: u8) -> bool {
        self.v3mi(OPC_VDPPS, dst, a, base, disp, mask)
    }

    // -- Shuffles and permutes --

    /// vshufps with the selector built from four 2-bit lane indices.
    pub fn shuffleps(
        &mut self,
        dst: AVXReg,
        a: AVXReg,
        b: AVXReg,
        x: u8,
        y: u8,
        z: u8,
        w: u8,
    ) {
        self.v3i("vshufps", OPC_VSHUFPS, dst, a, b, shuffle_imm(x, y, z, w));
    }

    #[allow(clippy::too_many_arguments)]
    pub fn shuffleps_m(
        &mut self,
        dst: AVXReg,
        a: AVXReg,
        base: Reg,
        disp: i32,
        x: u8,
        y: u8,
        z: u8,
        w: u8,
    ) -> bool {
        self.v3mi(OPC_VSHUFPS, dst, a, base, disp, shuffle_imm(x, y, z, w))
    }

    /// vunpcklps: interleave the low lanes of each 128-bit half.
    pub fn unpacklops(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vunpcklps", OPC_VUNPCKLPS, dst, a, b);
    }

    pub fn unpacklops_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VUNPCKLPS, dst, a, base, disp)
    }

    /// vunpckhps: interleave the high lanes of each 128-bit half.
    pub fn unpackhips(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vunpckhps", OPC_VUNPCKHPS, dst, a, b);
    }

    pub fn unpackhips_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VUNPCKHPS, dst, a, base, disp)
    }

    /// vmovshdup: duplicate odd lanes downward.
    pub fn movehdupps(&mut self, dst: AVXReg, src: AVXReg) {
        self.v2("vmovshdup", OPC_VMOVSHDUP, dst, src);
    }

    pub fn movehdupps_m(&mut self, dst: AVXReg, base: Reg, disp: i32) -> bool {
        self.v2m(OPC_VMOVSHDUP, dst, base, disp)
    }

    /// vmovsldup: duplicate even lanes upward.
    pub fn moveldupps(&mut self, dst: AVXReg, src: AVXReg) {
        self.v2("vmovsldup", OPC_VMOVSLDUP, dst, src);
    }

    pub fn moveldupps_m(&mut self, dst: AVXReg, base: Reg, disp: i32) -> bool {
        self.v2m(OPC_VMOVSLDUP, dst, base, disp)
    }

    /// vbroadcastss: replicate the low f32 of `src` into every lane.
    pub fn broadcastss(&mut self, dst: AVXReg, src: AVXReg) {
        self.v2("vbroadcastss", OPC_VBROADCASTSS, dst, src);
    }

    /// vbroadcastss from memory.
    pub fn broadcastss_m(&mut self, dst: AVXReg, base: Reg, disp: i32) -> bool {
        self.v2m(OPC_VBROADCASTSS, dst, base, disp)
    }

    /// vpermilps (variable): permute within each 128-bit half using
    /// per-lane selectors from `control`.
    pub fn permutevarps(&mut self, dst: AVXReg, a: AVXReg, control: AVXReg) {
        self.v3("vpermilps", OPC_VPERMILPS_VAR, dst, a, control);
    }

    pub fn permutevarps_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPERMILPS_VAR, dst, a, base, disp)
    }

    /// vpermps: permute across all eight lanes; `idx` carries the
    /// per-lane source indices.
    pub fn permutevar8ps(&mut self, dst: AVXReg, idx: AVXReg, src: AVXReg) {
        self.v3("vpermps", OPC_VPERMPS, dst, idx, src);
    }

    pub fn permutevar8ps_m(&mut self, dst: AVXReg, idx: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPERMPS, dst, idx, base, disp)
    }

    /// vpermilps (immediate) with the selector built from four 2-bit
    /// lane indices.
    pub fn permuteps(&mut self, dst: AVXReg, src: AVXReg, x: u8, y: u8, z: u8, w: u8) {
        self.v2i(
            "vpermilps",
            OPC_VPERMILPS_IMM,
            dst,
            src,
            shuffle_imm(x, y, z, w),
        );
    }

    #[allow(clippy::too_many_arguments)]
    pub fn permuteps_m(
        &mut self,
        dst: AVXReg,
        base: Reg,
        disp: i32,
        x: u8,
        y: u8,
        z: u8,
        w: u8,
    ) -> bool {
        self.v2mi(OPC_VPERMILPS_IMM, dst, base, disp, shuffle_imm(x, y, z, w))
    }

    // -- Fused multiply-add (213 forms) --

    /// vfmadd213ps: dst = (dst * a) + b.
    pub fn fmaddps(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vfmadd213ps", OPC_VFMADD213PS, dst, a, b);
    }

    pub fn fmaddps_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VFMADD213PS, dst, a, base, disp)
    }

    /// vfmsub213ps: dst = (dst * a) - b.
    pub fn fmsubps(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vfmsub213ps", OPC_VFMSUB213PS, dst, a, b);
    }

    pub fn fmsubps_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VFMSUB213PS, dst, a, base, disp)
    }

    /// vfnmadd213ps: dst = -(dst * a) + b.
    pub fn fnmaddps(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vfnmadd213ps", OPC_VFNMADD213PS, dst, a, b);
    }

    pub fn fnmaddps_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VFNMADD213PS, dst, a, base, disp)
    }

    /// vfnmsub213ps: dst = -(dst * a) - b.
    pub fn fnmsubps(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vfnmsub213ps", OPC_VFNMSUB213PS, dst, a, b);
    }

    pub fn fnmsubps_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VFNMSUB213PS, dst, a, base, disp)
    }

    /// vfmaddsub213ps: subtract in even lanes, add in odd lanes.
    pub fn fmaddsubps(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vfmaddsub213ps", OPC_VFMADDSUB213PS, dst, a, b);
    }

    pub fn fmaddsubps_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VFMADDSUB213PS, dst, a, base, disp)
    }

    /// vfmsubadd213ps: add in even lanes, subtract in odd lanes.
    pub fn fmsubaddps(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vfmsubadd213ps", OPC_VFMSUBADD213PS, dst, a, b);
    }

    pub fn fmsubaddps_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VFMSUBADD213PS, dst, a, base, disp)
    }
}
