//! Shared types for the vecasm runtime assembler: register identifiers,
//! comparison predicates, rounding modes, function prototype tags, and
//! the session error type.

pub mod cond;
pub mod error;
pub mod func;
pub mod regs;

pub use cond::{CmpPredicate, JumpCond, RoundMode};
pub use error::AsmError;
pub use func::FuncArity;
pub use regs::{AVXReg, Reg};
