use thiserror::Error;

/// Errors surfaced by an assembler session or a function table.
///
/// Operand-level problems (bad base register, out-of-range scale) are
/// reported per call as a `false` return with the buffer untouched and
/// never reach this enum. OS-level allocation failures surface as
/// `std::io::Error` from the session constructor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AsmError {
    /// The executable page filled up while emitting; records which
    /// emission overflowed and where the code stood at that point.
    #[error("executable page exhausted at offset {offset} while emitting {mnemonic}")]
    Capacity {
        mnemonic: &'static str,
        offset: usize,
    },

    /// A jump referenced a label that was never inserted.
    #[error("unresolved label `{0}` at finalize")]
    UnresolvedLabel(String),

    /// A call referenced a procedure that was never defined.
    #[error("unresolved procedure `{0}` at finalize")]
    UnresolvedProcedure(String),

    /// `insert_label` was called twice with the same name.
    #[error("label `{0}` inserted more than once")]
    DuplicateLabel(String),

    /// `procedure` was called twice with the same name.
    #[error("procedure `{0}` defined more than once")]
    DuplicateProcedure(String),

    /// A function-table entry with this name already exists.
    #[error("function `{0}` is already registered")]
    DuplicateFunction(String),

    /// Code plus the aligned constant pool would not fit in the page.
    #[error("constant pool overflows the page ({needed} bytes needed, {capacity} available)")]
    PoolOverflow { needed: usize, capacity: usize },

    /// `execute` was called before a successful `end()`.
    #[error("session is not finalized")]
    NotFinalized,

    /// A previous finalize failed; the session refuses to run until the
    /// next `begin()`.
    #[error("session poisoned by an earlier error")]
    Poisoned,
}
