//! Conditional jumps, named labels and named procedures.
//!
//! Jumps to names emit a near Jcc with a 32-bit displacement
//! placeholder. A backward reference is patched immediately; a forward
//! reference is queued and patched when the name is inserted. Any name
//! still pending at `end()` fails the finalize.

use vecasm_core::{AsmError, JumpCond};

use crate::session::Assembler;
use crate::vex::*;

impl Assembler {
    fn jcc_label(&mut self, cond: JumpCond, name: &str) {
        let site = self.op_at("jcc", |s| {
            s.rex_opc(OPC_JCC_long + cond.code() as u32, 0, 0);
            let site = s.num_bytes();
            s.emit_u32(0);
            site
        });
        if let Some(site) = site {
            if let Some(target) = self.labels_mut().reference(name, site) {
                let disp = target as i64 - (site as i64 + 4);
                self.patch_u32(site, disp as u32);
            }
        }
    }

    fn jcc_to(&mut self, cond: JumpCond, target: u32) {
        self.op("jcc", |s| {
            s.rex_opc(OPC_JCC_long + cond.code() as u32, 0, 0);
            let disp = target as i64 - (s.num_bytes() as i64 + 4);
            s.emit_u32(disp as u32);
        });
    }

    fn jcc_rel(&mut self, cond: JumpCond, offset: i32) {
        self.op("jcc", |s| {
            s.rex_opc(OPC_JCC_long + cond.code() as u32, 0, 0);
            s.emit_u32(offset as u32);
        });
    }

    // -- Jumps to named labels --

    pub fn jump_eq_label(&mut self, name: &str) {
        self.jcc_label(JumpCond::Eq, name);
    }

    pub fn jump_ne_label(&mut self, name: &str) {
        self.jcc_label(JumpCond::Ne, name);
    }

    pub fn jump_lt_label(&mut self, name: &str) {
        self.jcc_label(JumpCond::Lt, name);
    }

    pub fn jump_gt_label(&mut self, name: &str) {
        self.jcc_label(JumpCond::Gt, name);
    }

    pub fn jump_le_label(&mut self, name: &str) {
        self.jcc_label(JumpCond::Le, name);
    }

    pub fn jump_ge_label(&mut self, name: &str) {
        self.jcc_label(JumpCond::Ge, name);
    }

    /// Record `name` at the current code offset and patch every jump
    /// already waiting on it. Inserting the same label twice is a
    /// resolution error reported by `end()`.
    pub fn insert_label(&mut self, name: &str) {
        self.require_open();
        let at = self.num_bytes();
        match self.labels_mut().define(name, at) {
            Ok(pending) => {
                for site in pending {
                    let disp = at as i64 - (site as i64 + 4);
                    self.patch_u32(site, disp as u32);
                }
            }
            Err(()) => self.set_error(AsmError::DuplicateLabel(name.to_string())),
        }
    }

    // -- Jumps to absolute code offsets --

    pub fn jump_eq_to(&mut self, target: u32) {
        self.jcc_to(JumpCond::Eq, target);
    }

    pub fn jump_ne_to(&mut self, target: u32) {
        self.jcc_to(JumpCond::Ne, target);
    }

    pub fn jump_lt_to(&mut self, target: u32) {
        self.jcc_to(JumpCond::Lt, target);
    }

    pub fn jump_gt_to(&mut self, target: u32) {
        self.jcc_to(JumpCond::Gt, target);
    }

    pub fn jump_le_to(&mut self, target: u32) {
        self.jcc_to(JumpCond::Le, target);
    }

    pub fn jump_ge_to(&mut self, target: u32) {
        self.jcc_to(JumpCond::Ge, target);
    }

    // -- Jumps by raw relative displacement --
    //
    // The displacement is emitted as-is: it is measured from the end
    // of the jump instruction, so the caller must account for the
    // instruction's own six bytes.

    pub fn jump_eq(&mut self, offset: i32) {
        self.jcc_rel(JumpCond::Eq, offset);
    }

    pub fn jump_ne(&mut self, offset: i32) {
        self.jcc_rel(JumpCond::Ne, offset);
    }

    pub fn jump_lt(&mut self, offset: i32) {
        self.jcc_rel(JumpCond::Lt, offset);
    }

    pub fn jump_gt(&mut self, offset: i32) {
        self.jcc_rel(JumpCond::Gt, offset);
    }

    pub fn jump_le(&mut self, offset: i32) {
        self.jcc_rel(JumpCond::Le, offset);
    }

    pub fn jump_ge(&mut self, offset: i32) {
        self.jcc_rel(JumpCond::Ge, offset);
    }

    // -- Procedures --

    /// Mark the current offset as the entry of procedure `name` and
    /// patch any call sites already waiting on it. The body should end
    /// with `ret`.
    pub fn procedure(&mut self, name: &str) {
        self.require_open();
        let at = self.num_bytes();
        match self.procs_mut().define(name, at) {
            Ok(pending) => {
                for site in pending {
                    let disp = at as i64 - (site as i64 + 4);
                    self.patch_u32(site, disp as u32);
                }
            }
            Err(()) => self.set_error(AsmError::DuplicateProcedure(name.to_string())),
        }
    }

    /// Emit a near call to procedure `name`. The procedure may be
    /// defined later in the session; the displacement is patched when
    /// the definition arrives.
    pub fn call_procedure(&mut self, name: &str) {
        let site = self.op_at("call", |s| {
            s.emit_u8(OPC_CALL_Jz as u8);
            let site = s.num_bytes();
            s.emit_u32(0);
            site
        });
        if let Some(site) = site {
            if let Some(target) = self.procs_mut().reference(name, site) {
                let disp = target as i64 - (site as i64 + 4);
                self.patch_u32(site, disp as u32);
            }
        }
    }
}
