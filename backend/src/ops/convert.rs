//! Conversions between float, double and integer lanes, plus the
//! scalar GPR conversions.

use vecasm_core::{AVXReg, Reg};

use crate::session::Assembler;
use crate::vex::*;

impl Assembler {
    /// vcvtps2pd: four f32 (low half of `src`) to four f64.
    pub fn cvtps2pd(&mut self, dst: AVXReg, src: AVXReg) {
        self.v2("vcvtps2pd", OPC_VCVTPS2PD, dst, src);
    }

    pub fn cvtps2pd_m(&mut self, dst: AVXReg, base: Reg, disp: i32) -> bool {
        self.v2m(OPC_VCVTPS2PD, dst, base, disp)
    }

    /// vcvtps2dq: eight f32 to eight i32, current rounding mode.
    pub fn cvtps2dq(&mut self, dst: AVXReg, src: AVXReg) {
        self.v2("vcvtps2dq", OPC_VCVTPS2DQ, dst, src);
    }

    pub fn cvtps2dq_m(&mut self, dst: AVXReg, base: Reg, disp: i32) -> bool {
        self.v2m(OPC_VCVTPS2DQ, dst, base, disp)
    }

    /// vcvtdq2ps: eight i32 to eight f32.
    pub fn cvtdq2ps(&mut self, dst: AVXReg, src: AVXReg) {
        self.v2("vcvtdq2ps", OPC_VCVTDQ2PS, dst, src);
    }

    pub fn cvtdq2ps_m(&mut self, dst: AVXReg, base: Reg, disp: i32) -> bool {
        self.v2m(OPC_VCVTDQ2PS, dst, base, disp)
    }

    // -- Scalar GPR conversions --

    /// vcvtsi2ss: signed 32-bit GPR to the low f32 lane of `dst`.
    pub fn cvtsi2ss(&mut self, dst: AVXReg, src: Reg) {
        self.op("vcvtsi2ss", |s| {
            s.vex_rr(OPC_VCVTSI2SS, dst as u8, dst as u8, src as u8);
        });
    }

    pub fn cvtsi2ss_m(&mut self, dst: AVXReg, base: Reg, disp: i32) -> bool {
        self.op_m(|s| s.vex_rm(OPC_VCVTSI2SS, dst as u8, dst as u8, base, disp))
    }

    /// vcvtss2si: low f32 lane to a signed 32-bit GPR, rounded.
    pub fn cvtss2si(&mut self, dst: Reg, src: AVXReg) {
        self.op("vcvtss2si", |s| {
            s.vex_rr(OPC_VCVTSS2SI, dst as u8, 0, src as u8);
        });
    }

    pub fn cvtss2si_m(&mut self, dst: Reg, base: Reg, disp: i32) -> bool {
        self.op_m(|s| s.vex_rm(OPC_VCVTSS2SI, dst as u8, 0, base, disp))
    }

    /// vcvttss2si: low f32 lane to a signed 32-bit GPR, truncated.
    pub fn cvttss2si(&mut self, dst: Reg, src: AVXReg) {
        self.op("vcvttss2si", |s| {
            s.vex_rr(OPC_VCVTTSS2SI, dst as u8, 0, src as u8);
        });
    }

    pub fn cvttss2si_m(&mut self, dst: Reg, base: Reg, disp: i32) -> bool {
        self.op_m(|s| s.vex_rm(OPC_VCVTTSS2SI, dst as u8, 0, base, disp))
    }

    /// vcvtsi2sd: signed 32-bit GPR to the low f64 lane of `dst`.
    pub fn cvtsi2sd(&mut self, dst: AVXReg, src: Reg) {
        self.op("vcvtsi2sd", |s| {
            s.vex_rr(OPC_VCVTSI2SD, dst as u8, dst as u8, src as u8);
        });
    }

    pub fn cvtsi2sd_m(&mut self, dst: AVXReg, base: Reg, disp: i32) -> bool {
        self.op_m(|s| s.vex_rm(OPC_VCVTSI2SD, dst as u8, dst as u8, base, disp))
    }

    /// vcvtsd2si: low f64 lane to a signed 32-bit GPR, rounded.
    pub fn cvtsd2si(&mut self, dst: Reg, src: AVXReg) {
        self.op("vcvtsd2si", |s| {
            s.vex_rr(OPC_VCVTSD2SI, dst as u8, 0, src as u8);
        });
    }

    pub fn cvtsd2si_m(&mut self, dst: Reg, base: Reg, disp: i32) -> bool {
        self.op_m(|s| s.vex_rm(OPC_VCVTSD2SI, dst as u8, 0, base, disp))
    }

    /// vcvttsd2si: low f64 lane to a signed 32-bit GPR, truncated.
    pub fn cvttsd2si(&mut self, dst: Reg, src: AVXReg) {
        self.op("vcvttsd2si", |s| {
            s.vex_rr(OPC_VCVTTSD2SI, dst as u8, 0, src as u8);
        });
    }

    pub fn cvttsd2si_m(&mut self, dst: Reg, base: Reg, disp: i32) -> bool {
        self.op_m(|s| s.vex_rm(OPC_VCVTTSD2SI, dst as u8, 0, base, disp))
    }

    // -- Legacy MMX-operand conversions --
    //
    // Pre-AVX encodings operating on the retired MMX register file.
    // Kept for interface parity; you probably don't want these.

    pub fn cvtpi2ps(&mut self, dst: AVXReg, src: AVXReg) {
        self.op("cvtpi2ps", |s| s.rex_rr(OPC_CVTPI2PS, dst as u8, src as u8));
    }

    pub fn cvtpi2ps_m(&mut self, dst: AVXReg, base: Reg, disp: i32) -> bool {
        self.op_m(|s| s.rex_rm(OPC_CVTPI2PS, dst as u8, base, disp))
    }

    pub fn cvtps2pi(&mut self, dst: AVXReg, src: AVXReg) {
        self.op("cvtps2pi", |s| s.rex_rr(OPC_CVTPS2PI, dst as u8, src as u8));
    }

    pub fn cvtps2pi_m(&mut self, dst: AVXReg, base: Reg, disp: i32) -> bool {
        self.op_m(|s| s.rex_rm(OPC_CVTPS2PI, dst as u8, base, disp))
    }

    pub fn cvttps2pi(&mut self, dst: AVXReg, src: AVXReg) {
        self.op("cvttps2pi", |s| s.rex_rr(OPC_CVTTPS2PI, dst as u8, src as u8));
    }

    pub fn cvttps2pi_m(&mut self, dst: AVXReg, base: Reg, disp: i32) -> bool {
        self.op_m(|s| s.rex_rm(OPC_CVTTPS2PI, dst as u8, base, disp))
    }

    pub fn cvtpi2pd(&mut self, dst: AVXReg, src: AVXReg) {
        self.op("cvtpi2pd", |s| s.rex_rr(OPC_CVTPI2PD, dst as u8, src as u8));
    }

    pub fn cvtpi2pd_m(&mut self, dst: AVXReg, base: Reg, disp: i32) -> bool {
        self.op_m(|s| s.rex_rm(OPC_CVTPI2PD, dst as u8, base, disp))
    }

    pub fn cvtpd2pi(&mut self, dst: AVXReg, src: AVXReg) {
        self.op("cvtpd2pi", |s| s.rex_rr(OPC_CVTPD2PI, dst as u8, src as u8));
    }

    pub fn cvtpd2pi_m(&mut self, dst: AVXReg, base: Reg, disp: i32) -> bool {
        self.op_m(|s| s.rex_rm(OPC_CVTPD2PI, dst as u8, base, disp))
    }

    pub fn cvttpd2pi(&mut self, dst: AVXReg, src: AVXReg) {
        self.op("cvttpd2pi", |s| s.rex_rr(OPC_CVTTPD2PI, dst as u8, src as u8));
    }

    pub fn cvttpd2pi_m(&mut self, dst: AVXReg, base: Reg, disp: i32) -> bool {
        self.op_m(|s| s.rex_rm(OPC_CVTTPD2PI, dst as u8, base, disp))
    }
}
