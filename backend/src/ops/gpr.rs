//! General-purpose register manipulation: the loop counters, address
//! arithmetic and stack traffic around the vector work.

use vecasm_core::{AVXReg, Reg};

use crate::session::Assembler;
use crate::vex::*;

impl Assembler {
    /// push reg.
    pub fn push(&mut self, reg: Reg) {
        self.op("push", |s| s.raw_push(reg));
    }

    /// pop reg.
    pub fn pop(&mut self, reg: Reg) {
        self.op("pop", |s| s.raw_pop(reg));
    }

    /// mov dst, src (64-bit register copy).
    pub fn mov(&mut self, dst: Reg, src: Reg) {
        self.op("mov", |s| {
            s.rex_rr(OPC_MOV_EvGv | P_W1, src as u8, dst as u8);
        });
    }

    /// mov dst, [base+disp] (64-bit load).
    pub fn mov_load(&mut self, dst: Reg, base: Reg, disp: i32) {
        self.op("mov", |s| {
            s.rex_rm(OPC_MOV_GvEv | P_W1, dst as u8, base, disp);
        });
    }

    /// mov [base+disp], src (64-bit store).
    pub fn mov_store(&mut self, base: Reg, disp: i32, src: Reg) {
        self.op("mov", |s| {
            s.rex_rm(OPC_MOV_EvGv | P_W1, src as u8, base, disp);
        });
    }

    /// lea dst, [base+disp].
    pub fn lea(&mut self, dst: Reg, base: Reg, disp: i32) {
        self.op("lea", |s| {
            s.rex_rm(OPC_LEA | P_W1, dst as u8, base, disp);
        });
    }

    /// mov r32, imm32: load an unsigned loop count (the upper half of
    /// the register is zeroed).
    pub fn loadcount(&mut self, reg: Reg, count: u32) {
        self.op("loadcount", |s| {
            s.rex_opc(OPC_MOV_Iv + reg.low3() as u32, 0, reg as u8);
            s.emit_u32(count);
        });
    }

    /// vxorps reg, reg, reg: zero a YMM register.
    pub fn setzero(&mut self, reg: AVXReg) {
        self.op("vxorps", |s| {
            s.vex_rr(OPC_VXORPS, reg as u8, reg as u8, reg as u8);
        });
    }

    /// inc reg (64-bit).
    pub fn inc(&mut self, reg: Reg) {
        self.op("inc", |s| {
            s.rex_ext(OPC_GRP5 | P_W1, Ext5Op::IncEv as u8, reg);
        });
    }

    /// dec reg (64-bit). Sets ZF when the register reaches zero, which
    /// pairs with `jump_ne_label` for countdown loops.
    pub fn dec(&mut self, reg: Reg) {
        self.op("dec", |s| {
            s.rex_ext(OPC_GRP5 | P_W1, Ext5Op::DecEv as u8, reg);
        });
    }

    /// add reg, imm32.
    pub fn add(&mut self, reg: Reg, imm: i32) {
        self.op("add", |s| s.raw_arith_ri(ArithOp::Add, reg, imm));
    }

    /// or reg, imm32.
    pub fn or(&mut self, reg: Reg, imm: i32) {
        self.op("or", |s| s.raw_arith_ri(ArithOp::Or, reg, imm));
    }

    /// adc reg, imm32.
    pub fn adc(&mut self, reg: Reg, imm: i32) {
        self.op("adc", |s| s.raw_arith_ri(ArithOp::Adc, reg, imm));
    }

    /// sbb reg, imm32.
    pub fn sbb(&mut self, reg: Reg, imm: i32) {
        self.op("sbb", |s| s.raw_arith_ri(ArithOp::Sbb, reg, imm));
    }

    /// and reg, imm32.
    pub fn and(&mut self, reg: Reg, imm: i32) {
        self.op("and", |s| s.raw_arith_ri(ArithOp::And, reg, imm));
    }

    /// sub reg, imm32.
    pub fn sub(&mut self, reg: Reg, imm: i32) {
        self.op("sub", |s| s.raw_arith_ri(ArithOp::Sub, reg, imm));
    }

    /// xor reg, imm32.
    pub fn xor(&mut self, reg: Reg, imm: i32) {
        self.op("xor", |s| s.raw_arith_ri(ArithOp::Xor, reg, imm));
    }

    /// cmp reg, imm32.
    pub fn cmp(&mut self, reg: Reg, imm: i32) {
        self.op("cmp", |s| s.raw_arith_ri(ArithOp::Cmp, reg, imm));
    }

    /// ret. Every emitted function must end with one; execution would
    /// otherwise run off the end of the buffer.
    pub fn ret(&mut self) {
        self.op("ret", |s| s.emit_u8(OPC_RET as u8));
    }
}
