//! Packed shifts: whole-register byte shifts, shift-by-immediate,
//! shift-by-count-register (low 64 bits of an XMM), and the AVX2
//! per-lane variable shifts.

use vecasm_core::{AVXReg, Reg};

use crate::session::Assembler;
use crate::vex::*;

impl Assembler {
    // -- Whole-register byte shifts (per 128-bit half) --

    /// vpslldq: shift each 128-bit half left by `num_bytes`.
    pub fn lshift_u128(&mut self, dst: AVXReg, a: AVXReg, num_bytes: u8) {
        self.vshift_imm("vpslldq", OPC_VPSHIFTQ_IMM, EXT_PSLLDQ, dst, a, num_bytes);
    }

    /// vpsrldq: shift each 128-bit half right by `num_bytes`.
    pub fn rshift_u128(&mut self, dst: AVXReg, a: AVXReg, num_bytes: u8) {
        self.vshift_imm("vpsrldq", OPC_VPSHIFTQ_IMM, EXT_PSRLDQ, dst, a, num_bytes);
    }

    // -- Shift by immediate --

    /// vpsllw: 16-bit lanes left, zero fill.
    pub fn lshift_u16(&mut self, dst: AVXReg, a: AVXReg, num_bits: u8) {
        self.vshift_imm("vpsllw", OPC_VPSHIFTW_IMM, EXT_PSLL, dst, a, num_bits);
    }

    /// vpslld: 32-bit lanes left, zero fill.
    pub fn lshift_u32(&mut self, dst: AVXReg, a: AVXReg, num_bits: u8) {
        self.vshift_imm("vpslld", OPC_VPSHIFTD_IMM, EXT_PSLL, dst, a, num_bits);
    }

    /// vpsllq: 64-bit lanes left, zero fill.
    pub fn lshift_u64(&mut self, dst: AVXReg, a: AVXReg, num_bits: u8) {
        self.vshift_imm("vpsllq", OPC_VPSHIFTQ_IMM, EXT_PSLL, dst, a, num_bits);
    }

    /// vpsrlw: 16-bit lanes right, zero fill.
    pub fn rshift_u16(&mut self, dst: AVXReg, a: AVXReg, num_bits: u8) {
        self.vshift_imm("vpsrlw", OPC_VPSHIFTW_IMM, EXT_PSRL, dst, a, num_bits);
    }

    /// vpsrld: 32-bit lanes right, zero fill.
    pub fn rshift_u32(&mut self, dst: AVXReg, a: AVXReg, num_bits: u8) {
        self.vshift_imm("vpsrld", OPC_VPSHIFTD_IMM, EXT_PSRL, dst, a, num_bits);
    }

    /// vpsrlq: 64-bit lanes right, zero fill.
    pub fn rshift_u64(&mut self, dst: AVXReg, a: AVXReg, num_bits: u8) {
        self.vshift_imm("vpsrlq", OPC_VPSHIFTQ_IMM, EXT_PSRL, dst, a, num_bits);
    }

    /// vpsraw: 16-bit lanes right, sign fill.
    pub fn rshift_i16(&mut self, dst: AVXReg, a: AVXReg, num_bits: u8) {
        self.vshift_imm("vpsraw", OPC_VPSHIFTW_IMM, EXT_PSRA, dst, a, num_bits);
    }

    /// vpsrad: 32-bit lanes right, sign fill.
    pub fn rshift_i32(&mut self, dst: AVXReg, a: AVXReg, num_bits: u8) {
        self.vshift_imm("vpsrad", OPC_VPSHIFTD_IMM, EXT_PSRA, dst, a, num_bits);
    }

    // -- Shift by count register (low 64 bits of `count`) --

    pub fn lshift_u16_r(&mut self, dst: AVXReg, a: AVXReg, count: AVXReg) {
        self.v3("vpsllw", OPC_VPSLLW, dst, a, count);
    }

    pub fn lshift_u16_rm(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPSLLW, dst, a, base, disp)
    }

    pub fn lshift_u32_r(&mut self, dst: AVXReg, a: AVXReg, count: AVXReg) {
        self.v3("vpslld", OPC_VPSLLD, dst, a, count);
    }

    pub fn lshift_u32_rm(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPSLLD, dst, a, base, disp)
    }

    pub fn lshift_u64_r(&mut self, dst: AVXReg, a: AVXReg, count: AVXReg) {
        self.v3("vpsllq", OPC_VPSLLQ, dst, a, count);
    }

    pub fn lshift_u64_rm(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPSLLQ, dst, a, base, disp)
    }

    pub fn rshift_u16_r(&mut self, dst: AVXReg, a: AVXReg, count: AVXReg) {
        self.v3("vpsrlw", OPC_VPSRLW, dst, a, count);
    }

    pub fn rshift_u16_rm(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPSRLW, dst, a, base, disp)
    }

    pub fn rshift_u32_r(&mut self, dst: AVXReg, a: AVXReg, count: AVXReg) {
        self.v3("vpsrld", OPC_VPSRLD, dst, a, count);
    }

    pub fn rshift_u32_rm(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPSRLD, dst, a, base, disp)
    }

    pub fn rshift_u64_r(&mut self, dst: AVXReg, a: AVXReg, count: AVXReg) {
        self.v3("vpsrlq", OPC_VPSRLQ, dst, a, count);
    }

    pub fn rshift_u64_rm(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPSRLQ, dst, a, base, disp)
    }

    pub fn rshift_i16_r(&mut self, dst: AVXReg, a: AVXReg, count: AVXReg) {
        self.v3("vpsraw", OPC_VPSRAW, dst, a, count);
    }

    pub fn rshift_i16_rm(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPSRAW, dst, a, base, disp)
    }

    pub fn rshift_i32_r(&mut self, dst: AVXReg, a: AVXReg, count: AVXReg) {
        self.v3("vpsrad", OPC_VPSRAD, dst, a, count);
    }

    pub fn rshift_i32_rm(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPSRAD, dst, a, base, disp)
    }

    // -- Per-lane variable shifts (AVX2) --

    /// vpsllvd: each 32-bit lane shifted left by its own count.
    pub fn lshiftv_u32(&mut self, dst: AVXReg, a: AVXReg, counts: AVXReg) {
        self.v3("vpsllvd", OPC_VPSLLVD, dst, a, counts);
    }

    pub fn lshiftv_u32_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPSLLVD, dst, a, base, disp)
    }

    /// vpsllvq.
    pub fn lshiftv_u64(&mut self, dst: AVXReg, a: AVXReg, counts: AVXReg) {
        self.v3("vpsllvq", OPC_VPSLLVQ, dst, a, counts);
    }

    pub fn lshiftv_u64_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPSLLVQ, dst, a, base, disp)
    }

    /// vpsrlvd.
    pub fn rshiftv_u32(&mut self, dst: AVXReg, a: AVXReg, counts: AVXReg) {
        self.v3("vpsrlvd", OPC_VPSRLVD, dst, a, counts);
    }

    pub fn rshiftv_u32_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPSRLVD, dst, a, base, disp)
    }

    /// vpsrlvq.
    pub fn rshiftv_u64(&mut self, dst: AVXReg, a: AVXReg, counts: AVXReg) {
        self.v3("vpsrlvq", OPC_VPSRLVQ, dst, a, counts);
    }

    pub fn rshiftv_u64_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPSRLVQ, dst, a, base, disp)
    }

    /// vpsravd: each 32-bit lane shifted right arithmetically by its
    /// own count.
    pub fn rshiftv_i32(&mut self, dst: AVXReg, a: AVXReg, counts: AVXReg) {
        self.v3("vpsravd", OPC_VPSRAVD, dst, a, counts);
    }

    pub fn rshiftv_i32_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPSRAVD, dst, a, base, disp)
    }
}
