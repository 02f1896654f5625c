//! Packed integer operations (AVX2, 256-bit forms).

use vecasm_core::{AVXReg, Reg};

use crate::session::Assembler;
use crate::vex::*;

impl Assembler {
    // -- 32 x i8 --

    /// vpbroadcastb: replicate the low byte of `src` into all 32 lanes.
    pub fn broadcasti8(&mut self, dst: AVXReg, src: AVXReg) {
        self.v2("vpbroadcastb", OPC_VPBROADCASTB, dst, src);
    }

    pub fn broadcasti8_m(&mut self, dst: AVXReg, base: Reg, disp: i32) -> bool {
        self.v2m(OPC_VPBROADCASTB, dst, base, disp)
    }

    /// vpshufb: byte shuffle within each 128-bit half.
    pub fn shufflei8(&mut self, dst: AVXReg, a: AVXReg, control: AVXReg) {
        self.v3("vpshufb", OPC_VPSHUFB, dst, a, control);
    }

    pub fn shufflei8_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPSHUFB, dst, a, base, disp)
    }

    /// vpmovmskb: byte sign bits into the low 32 bits of a GPR.
    pub fn movemaski8(&mut self, dst: Reg, src: AVXReg) {
        self.op("vpmovmskb", |s| {
            s.vex_rr(OPC_VPMOVMSKB, dst as u8, 0, src as u8);
        });
    }

    /// vpabsb.
    pub fn absi8(&mut self, dst: AVXReg, src: AVXReg) {
        self.v2("vpabsb", OPC_VPABSB, dst, src);
    }

    pub fn absi8_m(&mut self, dst: AVXReg, base: Reg, disp: i32) -> bool {
        self.v2m(OPC_VPABSB, dst, base, disp)
    }

    /// vpavgb: unsigned rounded average.
    pub fn avgi8(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpavgb", OPC_VPAVGB, dst, a, b);
    }

    pub fn avgi8_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPAVGB, dst, a, base, disp)
    }

    /// vpaddb: wrapping byte add.
    pub fn addi8(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpaddb", OPC_VPADDB, dst, a, b);
    }

    pub fn addi8_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPADDB, dst, a, base, disp)
    }

    /// vpaddsb: signed saturating add.
    pub fn addsi8(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpaddsb", OPC_VPADDSB, dst, a, b);
    }

    pub fn addsi8_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPADDSB, dst, a, base, disp)
    }

    /// vpaddusb: unsigned saturating add.
    pub fn addsu8(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpaddusb", OPC_VPADDUSB, dst, a, b);
    }

    pub fn addsu8_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPADDUSB, dst, a, base, disp)
    }

    /// vpsubb: wrapping byte subtract.
    pub fn subi8(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpsubb", OPC_VPSUBB, dst, a, b);
    }

    pub fn subi8_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPSUBB, dst, a, base, disp)
    }

    /// vpsubsb: signed saturating subtract.
    pub fn subsi8(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpsubsb", OPC_VPSUBSB, dst, a, b);
    }

    pub fn subsi8_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPSUBSB, dst, a, base, disp)
    }

    /// vpsubusb: unsigned saturating subtract.
    pub fn subsu8(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpsubusb", OPC_VPSUBUSB, dst, a, b);
    }

    pub fn subsu8_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPSUBUSB, dst, a, base, disp)
    }

    /// vpmaxsb.
    pub fn maxi8(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpmaxsb", OPC_VPMAXSB, dst, a, b);
    }

    pub fn maxi8_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPMAXSB, dst, a, base, disp)
    }

    /// vpminsb.
    pub fn mini8(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpminsb", OPC_VPMINSB, dst, a, b);
    }

    pub fn mini8_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPMINSB, dst, a, base, disp)
    }

    /// vpmaxub.
    pub fn maxu8(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpmaxub", OPC_VPMAXUB, dst, a, b);
    }

    pub fn maxu8_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPMAXUB, dst, a, base, disp)
    }

    /// vpminub.
    pub fn minu8(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpminub", OPC_VPMINUB, dst, a, b);
    }

    pub fn minu8_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPMINUB, dst, a, base, disp)
    }

    /// vpcmpeqb: lanes to all-ones where equal.
    pub fn cmpeqi8(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpcmpeqb", OPC_VPCMPEQB, dst, a, b);
    }

    pub fn cmpeqi8_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPCMPEQB, dst, a, base, disp)
    }

    /// vpcmpgtb: lanes to all-ones where a > b (signed).
    pub fn cmpgti8(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpcmpgtb", OPC_VPCMPGTB, dst, a, b);
    }

    pub fn cmpgti8_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPCMPGTB, dst, a, base, disp)
    }

    // -- 16 x i16 --

    /// vpbroadcastw.
    pub fn broadcasti16(&mut self, dst: AVXReg, src: AVXReg) {
        self.v2("vpbroadcastw", OPC_VPBROADCASTW, dst, src);
    }

    pub fn broadcasti16_m(&mut self, dst: AVXReg, base: Reg, disp: i32) -> bool {
        self.v2m(OPC_VPBROADCASTW, dst, base, disp)
    }

    /// vpabsw.
    pub fn absi16(&mut self, dst: AVXReg, src: AVXReg) {
        self.v2("vpabsw", OPC_VPABSW, dst, src);
    }

    pub fn absi16_m(&mut self, dst: AVXReg, base: Reg, disp: i32) -> bool {
        self.v2m(OPC_VPABSW, dst, base, disp)
    }

    /// vpavgw.
    pub fn avgi16(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpavgw", OPC_VPAVGW, dst, a, b);
    }

    pub fn avgi16_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPAVGW, dst, a, base, disp)
    }

    /// vpaddw.
    pub fn addi16(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpaddw", OPC_VPADDW, dst, a, b);
    }

    pub fn addi16_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPADDW, dst, a, base, disp)
    }

    /// vpaddsw.
    pub fn addsi16(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpaddsw", OPC_VPADDSW, dst, a, b);
    }

    pub fn addsi16_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPADDSW, dst, a, base, disp)
    }

    /// vpaddusw.
    pub fn addsu16(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpaddusw", OPC_VPADDUSW, dst, a, b);
    }

    pub fn addsu16_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPADDUSW, dst, a, base, disp)
    }

    /// vphaddw: horizontal pairwise add.
    pub fn haddi16(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vphaddw", OPC_VPHADDW, dst, a, b);
    }

    pub fn haddi16_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPHADDW, dst, a, base, disp)
    }

    /// vphaddsw: horizontal pairwise saturating add.
    pub fn haddsi16(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vphaddsw", OPC_VPHADDSW, dst, a, b);
    }

    pub fn haddsi16_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPHADDSW, dst, a, base, disp)
    }

    /// vphsubw.
    pub fn hsubi16(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vphsubw", OPC_VPHSUBW, dst, a, b);
    }

    pub fn hsubi16_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPHSUBW, dst, a, base, disp)
    }

    /// vphsubsw.
    pub fn hsubsi16(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vphsubsw", OPC_VPHSUBSW, dst, a, b);
    }

    pub fn hsubsi16_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPHSUBSW, dst, a, base, disp)
    }

    /// vpsubw.
    pub fn subi16(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpsubw", OPC_VPSUBW, dst, a, b);
    }

    pub fn subi16_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPSUBW, dst, a, base, disp)
    }

    /// vpsubsw.
    pub fn subsi16(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpsubsw", OPC_VPSUBSW, dst, a, b);
    }

    pub fn subsi16_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPSUBSW, dst, a, base, disp)
    }

    /// vpsubusw.
    pub fn subsu16(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpsubusw", OPC_VPSUBUSW, dst, a, b);
    }

    pub fn subsu16_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPSUBUSW, dst, a, base, disp)
    }

    /// vpmaxsw.
    pub fn maxi16(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpmaxsw", OPC_VPMAXSW, dst, a, b);
    }

    pub fn maxi16_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPMAXSW, dst, a, base, disp)
    }

    /// vpminsw.
    pub fn mini16(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpminsw", OPC_VPMINSW, dst, a, b);
    }

    pub fn mini16_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPMINSW, dst, a, base, disp)
    }

    /// vpmaxuw.
    pub fn maxu16(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpmaxuw", OPC_VPMAXUW, dst, a, b);
    }

    pub fn maxu16_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPMAXUW, dst, a, base, disp)
    }

    /// vpminuw.
    pub fn minu16(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpminuw", OPC_VPMINUW, dst, a, b);
    }

    pub fn minu16_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPMINUW, dst, a, base, disp)
    }

    /// vpmullw: low 16 bits of the products.
    pub fn mulli16(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpmullw", OPC_VPMULLW, dst, a, b);
    }

    pub fn mulli16_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPMULLW, dst, a, base, disp)
    }

    /// vpmulhw: high 16 bits of the signed products.
    pub fn mulhi16(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpmulhw", OPC_VPMULHW, dst, a, b);
    }

    pub fn mulhi16_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPMULHW, dst, a, base, disp)
    }

    /// vpmulhuw: high 16 bits of the unsigned products.
    pub fn mulhu16(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpmulhuw", OPC_VPMULHUW, dst, a, b);
    }

    pub fn mulhu16_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPMULHUW, dst, a, base, disp)
    }

    /// vpcmpeqw.
    pub fn cmpeqi16(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpcmpeqw", OPC_VPCMPEQW, dst, a, b);
    }

    pub fn cmpeqi16_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPCMPEQW, dst, a, base, disp)
    }

    /// vpcmpgtw.
    pub fn cmpgti16(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpcmpgtw", OPC_VPCMPGTW, dst, a, b);
    }

    pub fn cmpgti16_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPCMPGTW, dst, a, base, disp)
    }

    // -- 8 x i32 --

    /// vpbroadcastd.
    pub fn broadcasti32(&mut self, dst: AVXReg, src: AVXReg) {
        self.v2("vpbroadcastd", OPC_VPBROADCASTD, dst, src);
    }

    pub fn broadcasti32_m(&mut self, dst: AVXReg, base: Reg, disp: i32) -> bool {
        self.v2m(OPC_VPBROADCASTD, dst, base, disp)
    }

    /// vpabsd.
    pub fn absi32(&mut self, dst: AVXReg, src: AVXReg) {
        self.v2("vpabsd", OPC_VPABSD, dst, src);
    }

    pub fn absi32_m(&mut self, dst: AVXReg, base: Reg, disp: i32) -> bool {
        self.v2m(OPC_VPABSD, dst, base, disp)
    }

    /// vpaddd.
    pub fn addi32(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpaddd", OPC_VPADDD, dst, a, b);
    }

    pub fn addi32_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPADDD, dst, a, base, disp)
    }

    /// vphaddd.
    pub fn haddi32(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vphaddd", OPC_VPHADDD, dst, a, b);
    }

    pub fn haddi32_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPHADDD, dst, a, base, disp)
    }

    /// vphsubd.
    pub fn hsubi32(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vphsubd", OPC_VPHSUBD, dst, a, b);
    }

    pub fn hsubi32_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPHSUBD, dst, a, base, disp)
    }

    /// vpsubd.
    pub fn subi32(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpsubd", OPC_VPSUBD, dst, a, b);
    }

    pub fn subi32_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPSUBD, dst, a, base, disp)
    }

    /// vpmulld: low 32 bits of the products.
    pub fn mulli32(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpmulld", OPC_VPMULLD, dst, a, b);
    }

    pub fn mulli32_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPMULLD, dst, a, base, disp)
    }

    /// vpmuldq: signed 32x32 → 64 products of the even lanes.
    pub fn muli32(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpmuldq", OPC_VPMULDQ, dst, a, b);
    }

    pub fn muli32_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPMULDQ, dst, a, base, disp)
    }

    /// vpmaxsd.
    pub fn maxi32(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpmaxsd", OPC_VPMAXSD, dst, a, b);
    }

    pub fn maxi32_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPMAXSD, dst, a, base, disp)
    }

    /// vpminsd.
    pub fn mini32(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpminsd", OPC_VPMINSD, dst, a, b);
    }

    pub fn mini32_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPMINSD, dst, a, base, disp)
    }

    /// vpmaxud.
    pub fn maxu32(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpmaxud", OPC_VPMAXUD, dst, a, b);
    }

    pub fn maxu32_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPMAXUD, dst, a, base, disp)
    }

    /// vpminud.
    pub fn minu32(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpminud", OPC_VPMINUD, dst, a, b);
    }

    pub fn minu32_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPMINUD, dst, a, base, disp)
    }

    /// vpcmpeqd.
    pub fn cmpeqi32(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpcmpeqd", OPC_VPCMPEQD, dst, a, b);
    }

    pub fn cmpeqi32_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPCMPEQD, dst, a, base, disp)
    }

    /// vpcmpgtd.
    pub fn cmpgti32(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpcmpgtd", OPC_VPCMPGTD, dst, a, b);
    }

    pub fn cmpgti32_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPCMPGTD, dst, a, base, disp)
    }

    // -- 4 x i64 --

    /// vpbroadcastq.
    pub fn broadcasti64(&mut self, dst: AVXReg, src: AVXReg) {
        self.v2("vpbroadcastq", OPC_VPBROADCASTQ, dst, src);
    }

    pub fn broadcasti64_m(&mut self, dst: AVXReg, base: Reg, disp: i32) -> bool {
        self.v2m(OPC_VPBROADCASTQ, dst, base, disp)
    }

    /// vpaddq.
    pub fn addi64(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpaddq", OPC_VPADDQ, dst, a, b);
    }

    pub fn addi64_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPADDQ, dst, a, base, disp)
    }

    /// vpsubq.
    pub fn subi64(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpsubq", OPC_VPSUBQ, dst, a, b);
    }

    pub fn subi64_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPSUBQ, dst, a, base, disp)
    }

    /// vpcmpeqq.
    pub fn cmpeqi64(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpcmpeqq", OPC_VPCMPEQQ, dst, a, b);
    }

    pub fn cmpeqi64_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPCMPEQQ, dst, a, base, disp)
    }

    /// vpcmpgtq.
    pub fn cmpgti64(&mut self, dst: AVXReg, a: AVXReg, b: AVXReg) {
        self.v3("vpcmpgtq", OPC_VPCMPGTQ, dst, a, b);
    }

    pub fn cmpgti64_m(&mut self, dst: AVXReg, a: AVXReg, base: Reg, disp: i32) -> bool {
        self.v3m(OPC_VPCMPGTQ, dst, a, base, disp)
    }
}
