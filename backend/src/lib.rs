//! Runtime assembler for the YMM-register subset of AVX/AVX2.
//!
//! A session emits VEX-encoded instructions into a single RWX page,
//! resolves named labels, procedures and pooled constants at
//! finalize, and invokes the result as a function with RCX = data
//! pointer, RDX = function table, R8 = extra argument.
//!
//! ```no_run
//! use vecasm_backend::Assembler;
//! use vecasm_core::{AVXReg, Reg};
//!
//! let mut a = Assembler::with_default_page_size().unwrap();
//! a.begin();
//! a.movaps_load(AVXReg::Ymm0, Reg::Rcx, 32);
//! a.movaps_store(Reg::Rcx, 0, AVXReg::Ymm0);
//! a.ret();
//! a.end().unwrap();
//! ```

mod names;
pub mod ops;
pub mod page;
pub mod pool;
pub mod session;
pub mod vex;

pub use page::{ExecPage, DEFAULT_PAGE_SIZE};
pub use pool::ConstId;
pub use session::Assembler;

pub use vecasm_core::{AVXReg, AsmError, CmpPredicate, FuncArity, JumpCond, Reg, RoundMode};
pub use vecasm_funcs::{FunctionTable, VecFn};
