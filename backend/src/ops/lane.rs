//! 128-bit lane manipulation: insert/extract, cross-lane permutes, and
//! whole-lane broadcasts.

use vecasm_core::{AVXReg, Reg};

use crate::session::Assembler;
use crate::vex::*;

impl Assembler {
    /// vinsertf128: copy `src`, with the 128-bit half selected by
    /// `sel` bit 0 replaced by the low half of `in_`.
    pub fn insertf128(&mut self, dst: AVXReg, src: AVXReg, in_: AVXReg, sel: u8) {
        self.v3i("vinsertf128", OPC_VINSERTF128, dst, src, in_, sel & 1);
    }

    pub fn insertf128_m(
        &mut self,
        dst: AVXReg,
        src: AVXReg,
        base: Reg,
        disp: i32,
        sel: u8,
    ) -> bool {
        self.v3mi(OPC_VINSERTF128, dst, src, base, disp, sel & 1)
    }

    /// vinserti128.
    pub fn inserti128(&mut self, dst: AVXReg, src: AVXReg, in_: AVXReg, sel: u8) {
        self.v3i("vinserti128", OPC_VINSERTI128, dst, src, in_, sel & 1);
    }

    pub fn inserti128_m(
        &mut self,
        dst: AVXReg,
        src: AVXReg,
        base: Reg,
        disp: i32,
        sel: u8,
    ) -> bool {
        self.v3mi(OPC_VINSERTI128, dst, src, base, disp, sel & 1)
    }

    /// vextractf128: move the upper 128 bits of `src` into `dst`.
    pub fn extractf128(&mut self, dst: AVXReg, src: AVXReg) {
        self.op("vextractf128", |s| {
            s.vex_rr(OPC_VEXTRACTF128, src as u8, 0, dst as u8);
            s.emit_u8(1);
        });
    }

    /// vextractf128 to memory: store the upper 128 bits of `src` at
    /// [base+disp].
    pub fn extractf128_store(&mut self, base: Reg, disp: i32, src: AVXReg) -> bool {
        self.op_m(|s| {
            s.vex_rm(OPC_VEXTRACTF128, src as u8, 0, base, disp);
            s.emit_u8(1);
        })
    }

    /// vextracti128: move the upper 128 bits of `src` into `dst`.
    pub fn extracti128(&mut self, dst: AVXReg, src: AVXReg) {
        self.op("vextracti128", |s| {
            s.vex_rr(OPC_VEXTRACTI128, src as u8, 0, dst as u8);
            s.emit_u8(1);
        });
    }

    pub fn extracti128_store(&mut self, base: Reg, disp: i32, src: AVXReg) -> bool {
        self.op_m(|s| {
            s.vex_rm(OPC_VEXTRACTI128, src as u8, 0, base, disp);
            s.emit_u8(1);
        })
    }

    /// vperm2f128: build the destination from any two 128-bit halves
    /// of `a` and `b`, selected by `mask` (bit 3/7 zeroes a half).
    pub fn permute2f128(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg, mask: u8) {
        self.v3i("vperm2f128", OPC_VPERM2F128, dst, a, b, mask);
    }

    pub fn permute2f128_m(
        &mut self,
        dst: AVXReg,
        a: AVXReg,
        base: Reg,
        disp: i32,
        mask: u8,
    ) -> bool {
        self.v3mi(OPC_VPERM2F128, dst, a, base, disp, mask)
    }

    /// vperm2i128.
    pub fn permute2i128(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg, mask: u8) {
        self.v3i("vperm2i128", OPC_VPERM2I128, dst, a, b, mask);
    }

    pub fn permute2i128_m(
        &mut self,
        dst: AVXReg,
        a: AVXReg,
        base: Reg,
        disp: i32,
        mask: u8,
    ) -> bool {
        self.v3mi(OPC_VPERM2I128, dst, a, base, disp, mask)
    }

    /// vbroadcastf128: replicate a 128-bit memory operand into both
    /// halves. Memory form only.
    pub fn broadcastf128(&mut self, dst: AVXReg, base: Reg, disp: i32) -> bool {
        self.v2m(OPC_VBROADCASTF128, dst, base, disp)
    }

    /// vbroadcasti128. Memory form only.
    pub fn broadcasti128(&mut self, dst: AVXReg, base: Reg, disp: i32) -> bool {
        self.v2m(OPC_VBROADCASTI128, dst, base, disp)
    }
}
