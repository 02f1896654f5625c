//! Scalar single/double operations (VEX.L = 0). These act on the low
//! lane only; the upper bits of the destination are merged from the
//! first source.

use vecasm_core::{AVXReg, CmpPredicate, Reg, RoundMode};

use crate::session::Assembler;
use crate::vex::*;

impl Assembler {
    // -- Scalar single --

    /// vmovss xmm, xmm (low lane from `from`, rest from `to`).
    pub fn movss(&mut self, to: AVXReg, from: AVXReg) {
        self.v3("vmovss", OPC_VMOVSS_LOAD, to, to, from);
    }

    /// vmovss xmm, [base+disp]: load one f32, zero the rest.
    pub fn movss_load(&mut self, to: AVXReg, base: Reg, disp: i32) -> bool {
        self.v2m(OPC_VMOVSS_LOAD, to, base, disp)
    }

    /// vmovss [base+disp], xmm.
    pub fn movss_store(&mut self, base: Reg, disp: i32, from: AVXReg) -> bool {
        self.vst(OPC_VMOVSS_STORE, base, disp, from)
    }

    /// vaddss.
    pub fn addss(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vaddss", OPC_VADDSS, dst, a, b);
    }

    pub fn addss_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VADDSS, dst, a, base, disp)
    }

    /// vsubss.
    pub fn subss(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vsubss", OPC_VSUBSS, dst, a, b);
    }

    pub fn subss_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VSUBSS, dst, a, base, disp)
    }

    /// vmulss.
    pub fn mulss(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vmulss", OPC_VMULSS, dst, a, b);
    }

    pub fn mulss_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VMULSS, dst, a, base, disp)
    }

    /// vdivss.
    pub fn divss(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vdivss", OPC_VDIVSS, dst, a, b);
    }

    pub fn divss_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VDIVSS, dst, a, base, disp)
    }

    /// vminss.
    pub fn minss(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vminss", OPC_VMINSS, dst, a, b);
    }

    pub fn minss_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VMINSS, dst, a, base, disp)
    }

    /// vmaxss.
    pub fn maxss(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vmaxss", OPC_VMAXSS, dst, a, b);
    }

    pub fn maxss_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VMAXSS, dst, a, base, disp)
    }

    /// vcmpss.
    pub fn cmpss(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg, pred: CmpPredicate) {
        self.v3i("vcmpss", OPC_VCMPSS, dst, a, b, pred.imm());
    }

    pub fn cmpss_m(
        &mut self,
        dst: AVXReg,
        a: AVXReg,
        base: Reg,
        disp: i32,
        pred: CmpPredicate,
    ) -> bool {
        self.v3mi(OPC_VCMPSS, dst, a, base, disp, pred.imm())
    }

    /// vsqrtss.
    pub fn sqrtss(&mut self, dst: AVXReg, src: AVXReg) {
        self.v3("vsqrtss", OPC_VSQRTSS, dst, dst, src);
    }

    pub fn sqrtss_m(&mut self, dst: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VSQRTSS, dst, dst, base, disp)
    }

    /// vrsqrtss: approximate scalar reciprocal square root.
    pub fn rsqrtss(&mut self, dst: AVXReg, src: AVXReg) {
        self.v3("vrsqrtss", OPC_VRSQRTSS, dst, dst, src);
    }

    pub fn rsqrtss_m(&mut self, dst: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VRSQRTSS, dst, dst, base, disp)
    }

    /// vrcpss: approximate scalar reciprocal.
    pub fn rcpss(&mut self, dst: AVXReg, src: AVXReg) {
        self.v3("vrcpss", OPC_VRCPSS, dst, dst, src);
    }

    pub fn rcpss_m(&mut self, dst: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VRCPSS, dst, dst, base, disp)
    }

    /// vroundss.
    pub fn roundss(&mut self, dst: AVXReg, src: AVXReg, mode: RoundMode) {
        self.v3i("vroundss", OPC_VROUNDSS, dst, dst, src, mode.imm());
    }

    pub fn roundss_m(&mut self, dst: AVXReg, base: Reg, disp: i32, mode: RoundMode) -> bool {
        self.v3mi(OPC_VROUNDSS, dst, dst, base, disp, mode.imm())
    }

    // -- Scalar double --

    /// vmovsd xmm, xmm (low lane from `from`, rest from `to`).
    pub fn movsd(&mut self, to: AVXReg, from: AVXReg) {
        self.v3("vmovsd", OPC_VMOVSD_LOAD, to, to, from);
    }

    /// vmovsd xmm, [base+disp]: load one f64, zero the rest.
    pub fn movsd_load(&mut self, to: AVXReg, base: Reg, disp: i32) -> bool {
        self.v2m(OPC_VMOVSD_LOAD, to, base, disp)
    }

    /// vmovsd [base+disp], xmm.
    pub fn movsd_store(&mut self, base: Reg, disp: i32, from: AVXReg) -> bool {
        self.vst(OPC_VMOVSD_STORE, base, disp, from)
    }

    /// vaddsd.
    pub fn addsd(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vaddsd", OPC_VADDSD, dst, a, b);
    }

    pub fn addsd_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VADDSD, dst, a, base, disp)
    }

    /// vsubsd.
    pub fn subsd(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vsubsd", OPC_VSUBSD, dst, a, b);
    }

    pub fn subsd_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VSUBSD, dst, a, base, disp)
    }

    /// vmulsd.
    pub fn mulsd(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vmulsd", OPC_VMULSD, dst, a, b);
    }

    pub fn mulsd_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VMULSD, dst, a, base, disp)
    }

    /// vdivsd.
    pub fn divsd(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vdivsd", OPC_VDIVSD, dst, a, b);
    }

    pub fn divsd_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VDIVSD, dst, a, base, disp)
    }

    /// vminsd.
    pub fn minsd(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vminsd", OPC_VMINSD, dst, a, b);
    }

    pub fn minsd_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VMINSD, dst, a, base, disp)
    }

    /// vmaxsd.
    pub fn maxsd(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vmaxsd", OPC_VMAXSD, dst, a, b);
    }

    pub fn maxsd_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VMAXSD, dst, a, base, disp)
    }

    /// vcmpsd.
    pub fn cmpsd(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg, pred: CmpPredicate) {
        self.v3i("vcmpsd", OPC_VCMPSD, dst, a, b, pred.imm());
    }

    pub fn cmpsd_m(
        &mut self,
        dst: AVXReg,
        a: AVXReg,
        base: Reg,
        disp: i32,
        pred: CmpPredicate,
    ) -> bool {
        self.v3mi(OPC_VCMPSD, dst, a, base, disp, pred.imm())
    }

    /// vsqrtsd.
    pub fn sqrtsd(&mut self, dst: AVXReg, src: AVXReg) {
        self.v3("vsqrtsd", OPC_VSQRTSD, dst, dst, src);
    }

    pub fn sqrtsd_m(&mut self, dst: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VSQRTSD, dst, dst, base, disp)
    }

    /// vroundsd.
    pub fn roundsd(&mut self, dst: AVXReg, src: AVXReg, mode: RoundMode) {
        self.v3i("vroundsd", OPC_VROUNDSD, dst, dst, src, mode.imm());
    }

    pub fn roundsd_m(&mut self, dst: AVXReg, base: Reg, disp: i32, mode: RoundMode) -> bool {
        self.v3mi(OPC_VROUNDSD, dst, dst, base, disp, mode.imm())
    }
}
