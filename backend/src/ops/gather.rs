//! AVX2 gather loads with VSIB addressing.
//!
//! Each gather loads lanes whose mask sign bit is set from
//! `[base + index*scale + disp]` and zeroes the mask afterwards: the
//! mask register is architecturally cleared by a completed gather, so
//! rebuild it (e.g. with `cmpeqi8(m, m, m)`) before reusing it.

use vecasm_core::{AVXReg, Reg};

use crate::ops::scale_log2;
use crate::session::Assembler;
use crate::vex::*;

impl Assembler {
    /// vgatherdps: eight f32 gathered through 32-bit indices.
    /// `scale` must be 1, 2, 4 or 8; anything else is refused.
    pub fn i32gatherps(
        &mut self,
        dst: AVXReg,
        indices: AVXReg,
        mask: AVXReg,
        base: Reg,
        disp: i32,
        scale: u8,
    ) -> bool {
        let Some(sl) = scale_log2(scale) else {
            return false;
        };
        self.op_m(|s| {
            s.vex_vsib(OPC_VGATHERDPS, dst as u8, mask as u8, base, indices, sl, disp)
        })
    }

    /// vgatherqps: four f32 gathered through 64-bit indices (result
    /// and mask use the low 128 bits).
    pub fn i64gatherps(
        &mut self,
        dst: AVXReg,
        indices: AVXReg,
        mask: AVXReg,
        base: Reg,
        disp: i32,
        scale: u8,
    ) -> bool {
        let Some(sl) = scale_log2(scale) else {
            return false;
        };
        self.op_m(|s| {
            s.vex_vsib(OPC_VGATHERQPS, dst as u8, mask as u8, base, indices, sl, disp)
        })
    }

    /// vgatherdpd: four f64 gathered through 32-bit indices (indices
    /// use the low 128 bits).
    pub fn i32gatherpd(
        &mut self,
        dst: AVXReg,
        indices: AVXReg,
        mask: AVXReg,
        base: Reg,
        disp: i32,
        scale: u8,
    ) -> bool {
        let Some(sl) = scale_log2(scale) else {
            return false;
        };
        self.op_m(|s| {
            s.vex_vsib(OPC_VGATHERDPD, dst as u8, mask as u8, base, indices, sl, disp)
        })
    }

    /// vgatherqpd: four f64 gathered through 64-bit indices.
    pub fn i64gatherpd(
        &mut self,
        dst: AVXReg,
        indices: AVXReg,
        mask: AVXReg,
        base: Reg,
        disp: i32,
        scale: u8,
    ) -> bool {
        let Some(sl) = scale_log2(scale) else {
            return false;
        };
        self.op_m(|s| {
            s.vex_vsib(OPC_VGATHERQPD, dst as u8, mask as u8, base, indices, sl, disp)
        })
    }
}
