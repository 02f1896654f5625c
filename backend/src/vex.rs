//! Prefix flags and opcode constants for the emitted instruction set.
//!
//! An opcode is a `u32`: the low byte is the final opcode byte, the
//! upper bits select the escape map, mandatory prefix, VEX.W and VEX.L.
//! The same flag scheme drives both the VEX serializer (vector ops) and
//! the legacy REX serializer (GPR ops, MMX-era conversions).

#![allow(non_upper_case_globals)]

/// 0x0F escape (legacy two-byte opcodes / VEX map 1).
pub const P_0F: u32 = 0x100;
/// 0x0F 0x38 escape (VEX map 2).
pub const P_0F38: u32 = 0x200;
/// 0x0F 0x3A escape (VEX map 3).
pub const P_0F3A: u32 = 0x400;
/// Mandatory 0x66 prefix (VEX.pp = 01).
pub const P_66: u32 = 0x800;
/// Mandatory 0xF3 prefix (VEX.pp = 10).
pub const P_F3: u32 = 0x1000;
/// Mandatory 0xF2 prefix (VEX.pp = 11).
pub const P_F2: u32 = 0x2000;
/// VEX.W / REX.W = 1.
pub const P_W1: u32 = 0x4000;
/// VEX.L = 1 (256-bit operation).
pub const P_L256: u32 = 0x8000;

/// VEX.pp field for an opcode.
#[inline]
pub const fn pp_bits(opc: u32) -> u8 {
    if opc & P_66 != 0 {
        1
    } else if opc & P_F3 != 0 {
        2
    } else if opc & P_F2 != 0 {
        3
    } else {
        0
    }
}

/// VEX.mmmmm field for an opcode (map 1 unless an escape flag says
/// otherwise).
#[inline]
pub const fn map_bits(opc: u32) -> u8 {
    if opc & P_0F38 != 0 {
        2
    } else if opc & P_0F3A != 0 {
        3
    } else {
        1
    }
}

// -- Packed single-precision (8 x f32) --

pub const OPC_VMOVAPS_LOAD: u32 = 0x28 | P_L256;
pub const OPC_VMOVAPS_STORE: u32 = 0x29 | P_L256;
pub const OPC_VMOVUPS_LOAD: u32 = 0x10 | P_L256;
pub const OPC_VMOVUPS_STORE: u32 = 0x11 | P_L256;
pub const OPC_VADDPS: u32 = 0x58 | P_L256;
pub const OPC_VSUBPS: u32 = 0x5C | P_L256;
pub const OPC_VMULPS: u32 = 0x59 | P_L256;
pub const OPC_VDIVPS: u32 = 0x5E | P_L256;
pub const OPC_VMINPS: u32 = 0x5D | P_L256;
pub const OPC_VMAXPS: u32 = 0x5F | P_L256;
pub const OPC_VANDPS: u32 = 0x54 | P_L256;
pub const OPC_VANDNPS: u32 = 0x55 | P_L256;
pub const OPC_VORPS: u32 = 0x56 | P_L256;
pub const OPC_VXORPS: u32 = 0x57 | P_L256;
pub const OPC_VSQRTPS: u32 = 0x51 | P_L256;
pub const OPC_VRSQRTPS: u32 = 0x52 | P_L256;
pub const OPC_VRCPPS: u32 = 0x53 | P_L256;
pub const OPC_VCMPPS: u32 = 0xC2 | P_L256;
pub const OPC_VSHUFPS: u32 = 0xC6 | P_L256;
pub const OPC_VUNPCKLPS: u32 = 0x14 | P_L256;
pub const OPC_VUNPCKHPS: u32 = 0x15 | P_L256;
pub const OPC_VMOVMSKPS: u32 = 0x50 | P_L256;
pub const OPC_VADDSUBPS: u32 = 0xD0 | P_F2 | P_L256;
pub const OPC_VHADDPS: u32 = 0x7C | P_F2 | P_L256;
pub const OPC_VHSUBPS: u32 = 0x7D | P_F2 | P_L256;
pub const OPC_VMOVSHDUP: u32 = 0x16 | P_F3 | P_L256;
pub const OPC_VMOVSLDUP: u32 = 0x12 | P_F3 | P_L256;
pub const OPC_VROUNDPS: u32 = 0x08 | P_66 | P_0F3A | P_L256;
pub const OPC_VDPPS: u32 = 0x40 | P_66 | P_0F3A | P_L256;
pub const OPC_VBLENDVPS: u32 = 0x4A | P_66 | P_0F3A | P_L256;
pub const OPC_VBROADCASTSS: u32 = 0x18 | P_66 | P_0F38 | P_L256;
pub const OPC_VPERMILPS_VAR: u32 = 0x0C | P_66 | P_0F38 | P_L256;
pub const OPC_VPERMILPS_IMM: u32 = 0x04 | P_66 | P_0F3A | P_L256;
pub const OPC_VPERMPS: u32 = 0x16 | P_66 | P_0F38 | P_L256;
pub const OPC_VFMADD213PS: u32 = 0xA8 | P_66 | P_0F38 | P_L256;
pub const OPC_VFMSUB213PS: u32 = 0xAA | P_66 | P_0F38 | P_L256;
pub const OPC_VFNMADD213PS: u32 = 0xAC | P_66 | P_0F38 | P_L256;
pub const OPC_VFNMSUB213PS: u32 = 0xAE | P_66 | P_0F38 | P_L256;
pub const OPC_VFMADDSUB213PS: u32 = 0xA6 | P_66 | P_0F38 | P_L256;
pub const OPC_VFMSUBADD213PS: u32 = 0xA7 | P_66 | P_0F38 | P_L256;

// -- Packed double-precision (4 x f64) --

pub const OPC_VMOVAPD_LOAD: u32 = 0x28 | P_66 | P_L256;
pub const OPC_VMOVAPD_STORE: u32 = 0x29 | P_66 | P_L256;
pub const OPC_VMOVUPD_LOAD: u32 = 0x10 | P_66 | P_L256;
pub const OPC_VMOVUPD_STORE: u32 = 0x11 | P_66 | P_L256;
pub const OPC_VADDPD: u32 = 0x58 | P_66 | P_L256;
pub const OPC_VSUBPD: u32 = 0x5C | P_66 | P_L256;
pub const OPC_VMULPD: u32 = 0x59 | P_66 | P_L256;
pub const OPC_VDIVPD: u32 = 0x5E | P_66 | P_L256;
pub const OPC_VMINPD: u32 = 0x5D | P_66 | P_L256;
pub const OPC_VMAXPD: u32 = 0x5F | P_66 | P_L256;
pub const OPC_VANDPD: u32 = 0x54 | P_66 | P_L256;
pub const OPC_VANDNPD: u32 = 0x55 | P_66 | P_L256;
pub const OPC_VORPD: u32 = 0x56 | P_66 | P_L256;
pub const OPC_VXORPD: u32 = 0x57 | P_66 | P_L256;
pub const OPC_VSQRTPD: u32 = 0x51 | P_66 | P_L256;
pub const OPC_VCMPPD: u32 = 0xC2 | P_66 | P_L256;
pub const OPC_VSHUFPD: u32 = 0xC6 | P_66 | P_L256;
pub const OPC_VUNPCKLPD: u32 = 0x14 | P_66 | P_L256;
pub const OPC_VUNPCKHPD: u32 = 0x15 | P_66 | P_L256;
pub const OPC_VMOVMSKPD: u32 = 0x50 | P_66 | P_L256;
pub const OPC_VADDSUBPD: u32 = 0xD0 | P_66 | P_L256;
pub const OPC_VHADDPD: u32 = 0x7C | P_66 | P_L256;
pub const OPC_VHSUBPD: u32 = 0x7D | P_66 | P_L256;
pub const OPC_VMOVDDUP: u32 = 0x12 | P_F2 | P_L256;
pub const OPC_VROUNDPD: u32 = 0x09 | P_66 | P_0F3A | P_L256;
/// The Intel tables list this encoding, but no toolchain emits it and
/// it is not exposed as an intrinsic; it may fault on real silicon.
pub const OPC_VDPPD: u32 = 0x41 | P_66 | P_0F3A | P_L256;
pub const OPC_VBLENDVPD: u32 = 0x4B | P_66 | P_0F3A | P_L256;
pub const OPC_VBROADCASTSD: u32 = 0x19 | P_66 | P_0F38 | P_L256;
pub const OPC_VPERMILPD_VAR: u32 = 0x0D | P_66 | P_0F38 | P_L256;
pub const OPC_VPERMILPD_IMM: u32 = 0x05 | P_66 | P_0F3A | P_L256;
pub const OPC_VFMADD213PD: u32 = OPC_VFMADD213PS | P_W1;
pub const OPC_VFMSUB213PD: u32 = OPC_VFMSUB213PS | P_W1;
pub const OPC_VFNMADD213PD: u32 = OPC_VFNMADD213PS | P_W1;
pub const OPC_VFNMSUB213PD: u32 = OPC_VFNMSUB213PS | P_W1;
pub const OPC_VFMADDSUB213PD: u32 = OPC_VFMADDSUB213PS | P_W1;
pub const OPC_VFMSUBADD213PD: u32 = OPC_VFMSUBADD213PS | P_W1;

// -- Scalar single / scalar double (VEX.L = 0) --

pub const OPC_VMOVSS_LOAD: u32 = 0x10 | P_F3;
pub const OPC_VMOVSS_STORE: u32 = 0x11 | P_F3;
pub const OPC_VADDSS: u32 = 0x58 | P_F3;
pub const OPC_VSUBSS: u32 = 0x5C | P_F3;
pub const OPC_VMULSS: u32 = 0x59 | P_F3;
pub const OPC_VDIVSS: u32 = 0x5E | P_F3;
pub const OPC_VMINSS: u32 = 0x5D | P_F3;
pub const OPC_VMAXSS: u32 = 0x5F | P_F3;
pub const OPC_VCMPSS: u32 = 0xC2 | P_F3;
pub const OPC_VSQRTSS: u32 = 0x51 | P_F3;
pub const OPC_VRSQRTSS: u32 = 0x52 | P_F3;
pub const OPC_VRCPSS: u32 = 0x53 | P_F3;
pub const OPC_VROUNDSS: u32 = 0x0A | P_66 | P_0F3A;

pub const OPC_VMOVSD_LOAD: u32 = 0x10 | P_F2;
pub const OPC_VMOVSD_STORE: u32 = 0x11 | P_F2;
pub const OPC_VADDSD: u32 = 0x58 | P_F2;
pub const OPC_VSUBSD: u32 = 0x5C | P_F2;
pub const OPC_VMULSD: u32 = 0x59 | P_F2;
pub const OPC_VDIVSD: u32 = 0x5E | P_F2;
pub const OPC_VMINSD: u32 = 0x5D | P_F2;
pub const OPC_VMAXSD: u32 = 0x5F | P_F2;
pub const OPC_VCMPSD: u32 = 0xC2 | P_F2;
pub const OPC_VSQRTSD: u32 = 0x51 | P_F2;
pub const OPC_VROUNDSD: u32 = 0x0B | P_66 | P_0F3A;

// -- Packed integer (AVX2) --

pub const OPC_VPSHUFB: u32 = 0x00 | P_66 | P_0F38 | P_L256;
pub const OPC_VPBROADCASTB: u32 = 0x78 | P_66 | P_0F38 | P_L256;
pub const OPC_VPBROADCASTW: u32 = 0x79 | P_66 | P_0F38 | P_L256;
pub const OPC_VPBROADCASTD: u32 = 0x58 | P_66 | P_0F38 | P_L256;
pub const OPC_VPBROADCASTQ: u32 = 0x59 | P_66 | P_0F38 | P_L256;
pub const OPC_VPMOVMSKB: u32 = 0xD7 | P_66 | P_L256;
pub const OPC_VPABSB: u32 = 0x1C | P_66 | P_0F38 | P_L256;
pub const OPC_VPABSW: u32 = 0x1D | P_66 | P_0F38 | P_L256;
pub const OPC_VPABSD: u32 = 0x1E | P_66 | P_0F38 | P_L256;
pub const OPC_VPAVGB: u32 = 0xE0 | P_66 | P_L256;
pub const OPC_VPAVGW: u32 = 0xE3 | P_66 | P_L256;
pub const OPC_VPADDB: u32 = 0xFC | P_66 | P_L256;
pub const OPC_VPADDW: u32 = 0xFD | P_66 | P_L256;
pub const OPC_VPADDD: u32 = 0xFE | P_66 | P_L256;
pub const OPC_VPADDQ: u32 = 0xD4 | P_66 | P_L256;
pub const OPC_VPADDSB: u32 = 0xEC | P_66 | P_L256;
pub const OPC_VPADDSW: u32 = 0xED | P_66 | P_L256;
pub const OPC_VPADDUSB: u32 = 0xDC | P_66 | P_L256;
pub const OPC_VPADDUSW: u32 = 0xDD | P_66 | P_L256;
pub const OPC_VPSUBB: u32 = 0xF8 | P_66 | P_L256;
pub const OPC_VPSUBW: u32 = 0xF9 | P_66 | P_L256;
pub const OPC_VPSUBD: u32 = 0xFA | P_66 | P_L256;
pub const OPC_VPSUBQ: u32 = 0xFB | P_66 | P_L256;
pub const OPC_VPSUBSB: u32 = 0xE8 | P_66 | P_L256;
pub const OPC_VPSUBSW: u32 = 0xE9 | P_66 | P_L256;
pub const OPC_VPSUBUSB: u32 = 0xD8 | P_66 | P_L256;
pub const OPC_VPSUBUSW: u32 = 0xD9 | P_66 | P_L256;
pub const OPC_VPHADDW: u32 = 0x01 | P_66 | P_0F38 | P_L256;
pub const OPC_VPHADDD: u32 = 0x02 | P_66 | P_0F38 | P_L256;
pub const OPC_VPHADDSW: u32 = 0x03 | P_66 | P_0F38 | P_L256;
pub const OPC_VPHSUBW: u32 = 0x05 | P_66 | P_0F38 | P_L256;
pub const OPC_VPHSUBD: u32 = 0x06 | P_66 | P_0F38 | P_L256;
pub const OPC_VPHSUBSW: u32 = 0x07 | P_66 | P_0F38 | P_L256;
pub const OPC_VPMAXSB: u32 = 0x3C | P_66 | P_0F38 | P_L256;
pub const OPC_VPMAXSW: u32 = 0xEE | P_66 | P_L256;
pub const OPC_VPMAXSD: u32 = 0x3D | P_66 | P_0F38 | P_L256;
pub const OPC_VPMAXUB: u32 = 0xDE | P_66 | P_L256;
pub const OPC_VPMAXUW: u32 = 0x3E | P_66 | P_0F38 | P_L256;
pub const OPC_VPMAXUD: u32 = 0x3F | P_66 | P_0F38 | P_L256;
pub const OPC_VPMINSB: u32 = 0x38 | P_66 | P_0F38 | P_L256;
pub const OPC_VPMINSW: u32 = 0xEA | P_66 | P_L256;
pub const OPC_VPMINSD: u32 = 0x39 | P_66 | P_0F38 | P_L256;
pub const OPC_VPMINUB: u32 = 0xDA | P_66 | P_L256;
pub const OPC_VPMINUW: u32 = 0x3A | P_66 | P_0F38 | P_L256;
pub const OPC_VPMINUD: u32 = 0x3B | P_66 | P_0F38 | P_L256;
pub const OPC_VPMULLW: u32 = 0xD5 | P_66 | P_L256;
pub const OPC_VPMULHW: u32 = 0xE5 | P_66 | P_L256;
pub const OPC_VPMULHUW: u32 = 0xE4 | P_66 | P_L256;
pub const OPC_VPMULLD: u32 = 0x40 | P_66 | P_0F38 | P_L256;
pub const OPC_VPMULDQ: u32 = 0x28 | P_66 | P_0F38 | P_L256;
pub const OPC_VPCMPEQB: u32 = 0x74 | P_66 | P_L256;
pub const OPC_VPCMPEQW: u32 = 0x75 | P_66 | P_L256;
pub const OPC_VPCMPEQD: u32 = 0x76 | P_66 | P_L256;
pub const OPC_VPCMPEQQ: u32 = 0x29 | P_66 | P_0F38 | P_L256;
pub const OPC_VPCMPGTB: u32 = 0x64 | P_66 | P_L256;
pub const OPC_VPCMPGTW: u32 = 0x65 | P_66 | P_L256;
pub const OPC_VPCMPGTD: u32 = 0x66 | P_66 | P_L256;
pub const OPC_VPCMPGTQ: u32 = 0x37 | P_66 | P_0F38 | P_L256;

// -- Shifts --

/// Group opcode for 16-bit shift-by-immediate (/6 sll, /4 sra, /2 srl).
pub const OPC_VPSHIFTW_IMM: u32 = 0x71 | P_66 | P_L256;
/// Group opcode for 32-bit shift-by-immediate.
pub const OPC_VPSHIFTD_IMM: u32 = 0x72 | P_66 | P_L256;
/// Group opcode for 64-bit and whole-register shift-by-immediate
/// (/6 sllq, /2 srlq, /7 slldq, /3 srldq).
pub const OPC_VPSHIFTQ_IMM: u32 = 0x73 | P_66 | P_L256;

pub const EXT_PSLL: u8 = 6;
pub const EXT_PSRA: u8 = 4;
pub const EXT_PSRL: u8 = 2;
pub const EXT_PSLLDQ: u8 = 7;
pub const EXT_PSRLDQ: u8 = 3;

pub const OPC_VPSLLW: u32 = 0xF1 | P_66 | P_L256;
pub const OPC_VPSLLD: u32 = 0xF2 | P_66 | P_L256;
pub const OPC_VPSLLQ: u32 = 0xF3 | P_66 | P_L256;
pub const OPC_VPSRLW: u32 = 0xD1 | P_66 | P_L256;
pub const OPC_VPSRLD: u32 = 0xD2 | P_66 | P_L256;
pub const OPC_VPSRLQ: u32 = 0xD3 | P_66 | P_L256;
pub const OPC_VPSRAW: u32 = 0xE1 | P_66 | P_L256;
pub const OPC_VPSRAD: u32 = 0xE2 | P_66 | P_L256;
pub const OPC_VPSLLVD: u32 = 0x47 | P_66 | P_0F38 | P_L256;
pub const OPC_VPSLLVQ: u32 = 0x47 | P_66 | P_0F38 | P_W1 | P_L256;
pub const OPC_VPSRLVD: u32 = 0x45 | P_66 | P_0F38 | P_L256;
pub const OPC_VPSRLVQ: u32 = 0x45 | P_66 | P_0F38 | P_W1 | P_L256;
pub const OPC_VPSRAVD: u32 = 0x46 | P_66 | P_0F38 | P_L256;

// -- 128-bit lane operations --

pub const OPC_VINSERTF128: u32 = 0x18 | P_66 | P_0F3A | P_L256;
pub const OPC_VEXTRACTF128: u32 = 0x19 | P_66 | P_0F3A | P_L256;
pub const OPC_VINSERTI128: u32 = 0x38 | P_66 | P_0F3A | P_L256;
pub const OPC_VEXTRACTI128: u32 = 0x39 | P_66 | P_0F3A | P_L256;
pub const OPC_VPERM2F128: u32 = 0x06 | P_66 | P_0F3A | P_L256;
pub const OPC_VPERM2I128: u32 = 0x46 | P_66 | P_0F3A | P_L256;
pub const OPC_VBROADCASTF128: u32 = 0x1A | P_66 | P_0F38 | P_L256;
pub const OPC_VBROADCASTI128: u32 = 0x5A | P_66 | P_0F38 | P_L256;

// -- Conversions --

pub const OPC_VCVTPS2PD: u32 = 0x5A | P_L256;
pub const OPC_VCVTPS2DQ: u32 = 0x5B | P_66 | P_L256;
pub const OPC_VCVTDQ2PS: u32 = 0x5B | P_L256;
pub const OPC_VCVTSI2SS: u32 = 0x2A | P_F3;
pub const OPC_VCVTSS2SI: u32 = 0x2D | P_F3;
pub const OPC_VCVTTSS2SI: u32 = 0x2C | P_F3;
pub const OPC_VCVTSI2SD: u32 = 0x2A | P_F2;
pub const OPC_VCVTSD2SI: u32 = 0x2D | P_F2;
pub const OPC_VCVTTSD2SI: u32 = 0x2C | P_F2;

// Legacy MMX-operand conversions. Kept for interface parity; these
// encode the pre-AVX forms and operate on the retired MMX register
// file, so they are almost never what a caller wants.
pub const OPC_CVTPI2PS: u32 = 0x2A | P_0F;
pub const OPC_CVTPS2PI: u32 = 0x2D | P_0F;
pub const OPC_CVTTPS2PI: u32 = 0x2C | P_0F;
pub const OPC_CVTPI2PD: u32 = 0x2A | P_66 | P_0F;
pub const OPC_CVTPD2PI: u32 = 0x2D | P_66 | P_0F;
pub const OPC_CVTTPD2PI: u32 = 0x2C | P_66 | P_0F;

// -- Gathers (AVX2, VSIB addressing) --

pub const OPC_VGATHERDPS: u32 = 0x92 | P_66 | P_0F38 | P_L256;
pub const OPC_VGATHERQPS: u32 = 0x93 | P_66 | P_0F38 | P_L256;
pub const OPC_VGATHERDPD: u32 = 0x92 | P_66 | P_0F38 | P_W1 | P_L256;
pub const OPC_VGATHERQPD: u32 = 0x93 | P_66 | P_0F38 | P_W1 | P_L256;

// -- General-purpose register opcodes --

pub const OPC_PUSH_R: u32 = 0x50;
pub const OPC_POP_R: u32 = 0x58;
pub const OPC_MOV_EvGv: u32 = 0x89;
pub const OPC_MOV_GvEv: u32 = 0x8B;
pub const OPC_MOV_Iv: u32 = 0xB8;
pub const OPC_LEA: u32 = 0x8D;
pub const OPC_ARITH_EvIb: u32 = 0x83;
pub const OPC_ARITH_EvIz: u32 = 0x81;
pub const OPC_GRP5: u32 = 0xFF;
pub const OPC_RET: u32 = 0xC3;
pub const OPC_JCC_long: u32 = 0x80 | P_0F;
pub const OPC_CALL_Jz: u32 = 0xE8;

/// /r extensions for the 0x81/0x83 immediate arithmetic group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ArithOp {
    Add = 0,
    Or = 1,
    Adc = 2,
    Sbb = 3,
    And = 4,
    Sub = 5,
    Xor = 6,
    Cmp = 7,
}

/// /r extensions for the 0xFF group (inc/dec/call).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Ext5Op {
    IncEv = 0,
    DecEv = 1,
    CallN = 2,
}
