/// x86-64 general-purpose register indices.
///
/// Encoding matches the x86-64 ModR/M and REX register numbering.
/// Some registers have reserved roles in the emitted-function calling
/// convention: RCX carries the data pointer, RDX the function-table
/// pointer, R8 the extra argument. RSI, RSP and RBP must be preserved
/// by emitted code (or restored before `ret`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Reg {
    Rax = 0,
    Rcx = 1,
    Rdx = 2,
    Rbx = 3,
    Rsp = 4,
    Rbp = 5,
    Rsi = 6,
    Rdi = 7,
    R8 = 8,
    R9 = 9,
    R10 = 10,
    R11 = 11,
    R12 = 12,
    R13 = 13,
    R14 = 14,
    R15 = 15,
}

impl Reg {
    /// Low 3 bits of the register encoding (for ModR/M and SIB).
    #[inline]
    pub const fn low3(self) -> u8 {
        (self as u8) & 0x7
    }

    /// Whether this register requires a REX/VEX extension bit (R8-R15).
    #[inline]
    pub const fn needs_rex(self) -> bool {
        (self as u8) >= 8
    }
}

/// 256-bit AVX vector register indices, YMM0-YMM15.
///
/// Each holds eight single-precision floats, four doubles, or the
/// equivalent packed integer lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AVXReg {
    Ymm0 = 0,
    Ymm1 = 1,
    Ymm2 = 2,
    Ymm3 = 3,
    Ymm4 = 4,
    Ymm5 = 5,
    Ymm6 = 6,
    Ymm7 = 7,
    Ymm8 = 8,
    Ymm9 = 9,
    Ymm10 = 10,
    Ymm11 = 11,
    Ymm12 = 12,
    Ymm13 = 13,
    Ymm14 = 14,
    Ymm15 = 15,
}

impl AVXReg {
    /// Low 3 bits of the register encoding (for ModR/M and SIB).
    #[inline]
    pub const fn low3(self) -> u8 {
        (self as u8) & 0x7
    }

    /// Whether this register needs the inverted VEX.R/X/B extension bit.
    #[inline]
    pub const fn needs_rex(self) -> bool {
        (self as u8) >= 8
    }
}
