//! The mnemonic-level encoder surface, grouped by instruction family.
//!
//! Every mnemonic comes in up to two shapes: an all-register form and a
//! memory form (`_m` suffix) taking `[base + disp]`, which returns
//! `false`, with the buffer untouched, when the encoding cannot be
//! emitted.

use vecasm_core::{AVXReg, Reg};

use crate::session::Assembler;

pub mod convert;
pub mod ctrl;
pub mod gather;
pub mod gpr;
pub mod int;
pub mod lane;
pub mod pd;
pub mod ps;
pub mod scalar;
pub mod shift;

/// Shared emit-form combinators. Each wraps one instruction in the
/// session's rollback-on-overflow discipline.
impl Assembler {
    /// Three-operand vector op: dst(reg), a(vvvv), b(rm).
    pub(crate) fn v3(&mut self, m: &'static str, opc: u32, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.op(m, |s| s.vex_rr(opc, dst as u8, a as u8, b as u8));
    }

    /// Memory form of [`v3`](Self::v3): dst(reg), a(vvvv), [base+disp].
    pub(crate) fn v3m(
        &mut self,
        opc: u32,
        dst: AVXReg,
        a: AVXReg,
        base: Reg,
        disp: i32,
    ) -> bool {
        self.op_m(|s| s.vex_rm(opc, dst as u8, a as u8, base, disp))
    }

    /// Three-operand vector op with a trailing imm8.
    pub(crate) fn v3i(
        &mut self,
        m: &'static str,
        opc: u32,
        dst: AVXReg,
        a: AVXReg,
        b: AVXReg,
        imm: u8,
    ) {
        self.op(m, |s| {
            s.vex_rr(opc, dst as u8, a as u8, b as u8);
            s.emit_u8(imm);
        });
    }

    /// Memory form of [`v3i`](Self::v3i).
    pub(crate) fn v3mi(
        &mut self,
        opc: u32,
        dst: AVXReg,
        a: AVXReg,
        base: Reg,
        disp: i32,
        imm: u8,
    ) -> bool {
        self.op_m(|s| {
            s.vex_rm(opc, dst as u8, a as u8, base, disp);
            s.emit_u8(imm);
        })
    }

    /// Two-operand vector op (vvvv unused): dst(reg), src(rm).
    pub(crate) fn v2(&mut self, m: &'static str, opc: u32, dst: AVXReg, src: AVXReg) {
        self.op(m, |s| s.vex_rr(opc, dst as u8, 0, src as u8));
    }

    /// Memory form of [`v2`](Self::v2): dst(reg), [base+disp].
    pub(crate) fn v2m(&mut self, opc: u32, dst: AVXReg, base: Reg, disp: i32) -> bool {
        self.op_m(|s| s.vex_rm(opc, dst as u8, 0, base, disp))
    }

    /// Two-operand vector op with a trailing imm8.
    pub(crate) fn v2i(&mut self, m: &'static str, opc: u32, dst: AVXReg, src: AVXReg, imm: u8) {
        self.op(m, |s| {
            s.vex_rr(opc, dst as u8, 0, src as u8);
            s.emit_u8(imm);
        });
    }

    /// Memory form of [`v2i`](Self::v2i).
    pub(crate) fn v2mi(
        &mut self,
        opc: u32,
        dst: AVXReg,
        base: Reg,
        disp: i32,
        imm: u8,
    ) -> bool {
        self.op_m(|s| {
            s.vex_rm(opc, dst as u8, 0, base, disp);
            s.emit_u8(imm);
        })
    }

    /// Vector store: [base+disp] ← src(reg).
    pub(crate) fn vst(&mut self, opc: u32, base: Reg, disp: i32, src: AVXReg) -> bool {
        self.op_m(|s| s.vex_rm(opc, src as u8, 0, base, disp))
    }

    /// Shift-by-immediate group op: ext in ModRM.reg, dst in vvvv,
    /// src in rm, count as imm8.
    pub(crate) fn vshift_imm(
        &mut self,
        m: &'static str,
        opc: u32,
        ext: u8,
        dst: AVXReg,
        src: AVXReg,
        imm: u8,
    ) {
        self.op(m, |s| {
            s.vex_ext_rr(opc, ext, dst as u8, src as u8);
            s.emit_u8(imm);
        });
    }
}

/// SIB scale field for a gather scale of 1, 2, 4 or 8 bytes.
pub(crate) fn scale_log2(scale: u8) -> Option<u8> {
    match scale {
        1 => Some(0),
        2 => Some(1),
        4 => Some(2),
        8 => Some(3),
        _ => None,
    }
}

/// Pack four 2-bit lane selectors into a shuffle imm8.
pub(crate) fn shuffle_imm(x: u8, y: u8, z: u8, w: u8) -> u8 {
    (x & 3) | ((y & 3) << 2) | ((z & 3) << 4) | ((w & 3) << 6)
}

/// Pack two 1-bit lane selectors into a pd shuffle imm8, replicated
/// across both 128-bit halves.
pub(crate) fn shuffle_pd_imm(x: u8, y: u8) -> u8 {
    let half = (x & 1) | ((y & 1) << 1);
    half | (half << 2)
}
