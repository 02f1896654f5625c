//! Function table for the vecasm runtime assembler.
//!
//! Emitted code can call host-supplied vector functions by name: the
//! table maps names to typed `extern "C"` entry points, the assembler
//! resolves the pointer at emit time, and the same table is handed to
//! `execute` so the generated code sees it in RDX.

pub mod defaults;
pub mod table;

pub use table::{FunctionTable, VecFn};
pub use table::{Func0D, Func0F, Func1D, Func1F, Func2D, Func2F};
pub use table::{Func3D, Func3F, Func4D, Func4F, Func5D, Func5F};
