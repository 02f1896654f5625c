use std::arch::x86_64::{__m256, __m256d};
use std::collections::HashMap;

use vecasm_core::{AsmError, FuncArity};

/// The only supported host-function prototypes: up to five 256-bit
/// vector arguments in YMM0-YMM4, result in YMM0. On System-V hosts the
/// `extern "C"` vector ABI places the arguments exactly there.
///
/// The assembler does not validate what kind of data the caller loaded
/// into the argument registers; integer/float reinterpretation is the
/// caller's business.
pub type Func0F = unsafe extern "C" fn() -> __m256;
pub type Func1F = unsafe extern "C" fn(__m256) -> __m256;
pub type Func2F = unsafe extern "C" fn(__m256, __m256) -> __m256;
pub type Func3F = unsafe extern "C" fn(__m256, __m256, __m256) -> __m256;
pub type Func4F = unsafe extern "C" fn(__m256, __m256, __m256, __m256) -> __m256;
pub type Func5F = unsafe extern "C" fn(__m256, __m256, __m256, __m256, __m256) -> __m256;

pub type Func0D = unsafe extern "C" fn() -> __m256d;
pub type Func1D = unsafe extern "C" fn(__m256d) -> __m256d;
pub type Func2D = unsafe extern "C" fn(__m256d, __m256d) -> __m256d;
pub type Func3D = unsafe extern "C" fn(__m256d, __m256d, __m256d) -> __m256d;
pub type Func4D = unsafe extern "C" fn(__m256d, __m256d, __m256d, __m256d) -> __m256d;
pub type Func5D = unsafe extern "C" fn(__m256d, __m256d, __m256d, __m256d, __m256d) -> __m256d;

/// A typed pointer to a callable vector function.
#[derive(Clone, Copy)]
pub enum VecFn {
    F0(Func0F),
    F1(Func1F),
    F2(Func2F),
    F3(Func3F),
    F4(Func4F),
    F5(Func5F),
    D0(Func0D),
    D1(Func1D),
    D2(Func2D),
    D3(Func3D),
    D4(Func4D),
    D5(Func5D),
}

impl VecFn {
    /// Prototype tag for this pointer.
    pub fn arity(&self) -> FuncArity {
        match self {
            VecFn::F0(_) => FuncArity::NoArgs,
            VecFn::F1(_) => FuncArity::OneArg,
            VecFn::F2(_) => FuncArity::TwoArgs,
            VecFn::F3(_) => FuncArity::ThreeArgs,
            VecFn::F4(_) => FuncArity::FourArgs,
            VecFn::F5(_) => FuncArity::FiveArgs,
            VecFn::D0(_) => FuncArity::NoArgsD,
            VecFn::D1(_) => FuncArity::OneArgD,
            VecFn::D2(_) => FuncArity::TwoArgsD,
            VecFn::D3(_) => FuncArity::ThreeArgsD,
            VecFn::D4(_) => FuncArity::FourArgsD,
            VecFn::D5(_) => FuncArity::FiveArgsD,
        }
    }

    /// Raw entry address, as loaded into a scratch register by the
    /// emitted `call` sequence.
    pub fn address(&self) -> u64 {
        match *self {
            VecFn::F0(f) => f as usize as u64,
            VecFn::F1(f) => f as usize as u64,
            VecFn::F2(f) => f as usize as u64,
            VecFn::F3(f) => f as usize as u64,
            VecFn::F4(f) => f as usize as u64,
            VecFn::F5(f) => f as usize as u64,
            VecFn::D0(f) => f as usize as u64,
            VecFn::D1(f) => f as usize as u64,
            VecFn::D2(f) => f as usize as u64,
            VecFn::D3(f) => f as usize as u64,
            VecFn::D4(f) => f as usize as u64,
            VecFn::D5(f) => f as usize as u64,
        }
    }
}

/// An insertion-ordered table of named vector functions the emitted
/// code can call.
///
/// Names are unique; overloading is not supported. The same table
/// object must be used both when emitting `call` sites and when
/// executing the finished buffer.
#[derive(Default)]
pub struct FunctionTable {
    entries: Vec<(String, VecFn)>,
    index: HashMap<String, usize>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a function under a unique name.
    pub fn add_func(&mut self, name: &str, f: VecFn) -> Result<(), AsmError> {
        if self.index.contains_key(name) {
            return Err(AsmError::DuplicateFunction(name.to_string()));
        }
        self.index.insert(name.to_string(), self.entries.len());
        self.entries.push((name.to_string(), f));
        Ok(())
    }

    /// Prototype tag and insertion index for a registered name.
    pub fn func_info(&self, name: &str) -> Option<(FuncArity, usize)> {
        let idx = *self.index.get(name)?;
        Some((self.entries[idx].1.arity(), idx))
    }

    /// Entry address for a registered name (used by the emitter to
    /// resolve `call` sites at assembly time).
    pub fn address_of(&self, name: &str) -> Option<u64> {
        let idx = *self.index.get(name)?;
        Some(self.entries[idx].1.address())
    }

    /// Number of registered functions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
