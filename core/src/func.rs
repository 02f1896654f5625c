/// Prototype tag for a callable vector function.
///
/// The host calling convention passes up to five 256-bit arguments in
/// YMM0-YMM4 and returns in YMM0; the tag records how many arguments a
/// table entry takes and whether it operates on single- or
/// double-precision lanes (`..D` variants).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FuncArity {
    NoArgs,
    OneArg,
    TwoArgs,
    ThreeArgs,
    FourArgs,
    FiveArgs,
    NoArgsD,
    OneArgD,
    TwoArgsD,
    ThreeArgsD,
    FourArgsD,
    FiveArgsD,
}

impl FuncArity {
    /// Number of YMM arguments the prototype consumes.
    pub const fn num_args(self) -> u8 {
        match self {
            FuncArity::NoArgs | FuncArity::NoArgsD => 0,
            FuncArity::OneArg | FuncArity::OneArgD => 1,
            FuncArity::TwoArgs | FuncArity::TwoArgsD => 2,
            FuncArity::ThreeArgs | FuncArity::ThreeArgsD => 3,
            FuncArity::FourArgs | FuncArity::FourArgsD => 4,
            FuncArity::FiveArgs | FuncArity::FiveArgsD => 5,
        }
    }

    /// Whether the prototype operates on double-precision lanes.
    pub const fn is_double(self) -> bool {
        matches!(
            self,
            FuncArity::NoArgsD
                | FuncArity::OneArgD
                | FuncArity::TwoArgsD
                | FuncArity::ThreeArgsD
                | FuncArity::FourArgsD
                | FuncArity::FiveArgsD
        )
    }
}
