use std::arch::asm;
use std::io;
use std::ptr;
use std::sync::atomic::{fence, Ordering};

use log::{debug, warn};

use vecasm_core::{AVXReg, AsmError, Reg};
use vecasm_funcs::FunctionTable;

use crate::names::NameTable;
use crate::page::{ExecPage, DEFAULT_PAGE_SIZE};
use crate::pool::{self, ConstId, ConstPool};
use crate::vex::*;

/// Session lifecycle states. Emission is only legal in `InProgress`,
/// execution only in `Finalized`. A failed finalize poisons the
/// session until the next `begin()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    InProgress,
    Finalized,
    Poisoned,
}

/// A runtime assembler session for AVX/AVX2 code over the YMM
/// registers.
///
/// Mnemonic-level calls append encoded instructions to an executable
/// page; named labels, procedures and constant loads emit 32-bit
/// displacement placeholders that are back-patched when the target
/// becomes known. `end()` lays out the constant pool, patches every
/// pending site and fences, after which `execute` may run the buffer.
///
/// A session is exclusively owned by one thread; independent sessions
/// may coexist on separate threads.
pub struct Assembler {
    page: ExecPage,
    len: usize,
    state: State,
    labels: NameTable,
    procs: NameTable,
    pool: ConstPool,
    /// Sticky error from a void-returning emitter (capacity, duplicate
    /// name); reported by the next `end()`.
    error: Option<AsmError>,
    /// Set by the emit primitives when a write would overrun the page;
    /// cleared by the per-instruction wrappers after rollback.
    overflowed: bool,
}

impl Assembler {
    /// Create a session backed by an RWX page of at least `page_size`
    /// bytes (rounded up to the system page size).
    pub fn new(page_size: usize) -> io::Result<Self> {
        let page = ExecPage::new(page_size)?;
        debug!("assembler session: {} byte page", page.capacity());
        Ok(Self {
            page,
            len: 0,
            state: State::Idle,
            labels: NameTable::default(),
            procs: NameTable::default(),
            pool: ConstPool::default(),
            error: None,
            overflowed: false,
        })
    }

    /// Create a session with the default 4 KiB page.
    pub fn with_default_page_size() -> io::Result<Self> {
        Self::new(DEFAULT_PAGE_SIZE)
    }

    // -- Lifecycle --

    /// Reset the session for new input. Previously assembled code,
    /// labels, procedures and constants are discarded; the page is
    /// kept. Must be called before any emission.
    pub fn begin(&mut self) {
        self.len = 0;
        self.labels.clear();
        self.procs.clear();
        self.pool.clear();
        self.error = None;
        self.overflowed = false;
        self.state = State::InProgress;
        debug!("begin: capacity {} bytes", self.page.capacity());
    }

    /// Finalize the buffer: verify every label and procedure resolved,
    /// lay out the constant pool after the code, patch all pending
    /// displacements, and fence so the stores are visible to
    /// execution.
    ///
    /// On error the session is poisoned and `execute` refuses to run
    /// until the next `begin()`.
    pub fn end(&mut self) -> Result<(), AsmError> {
        assert!(
            self.state == State::InProgress,
            "end() called without begin()"
        );
        match self.finalize() {
            Ok(()) => {
                self.state = State::Finalized;
                Ok(())
            }
            Err(e) => {
                warn!("finalize failed: {e}");
                self.state = State::Poisoned;
                Err(e)
            }
        }
    }

    fn finalize(&mut self) -> Result<(), AsmError> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        if let Some(name) = self.labels.first_unresolved() {
            return Err(AsmError::UnresolvedLabel(name));
        }
        if let Some(name) = self.procs.first_unresolved() {
            return Err(AsmError::UnresolvedProcedure(name));
        }

        // Constant pool goes after the code, 32-byte aligned, in the
        // same page.
        let base = (self.len + 31) & !31;
        let needed = base + 32 * self.pool.num_consts();
        if needed > self.page.capacity() {
            return Err(AsmError::PoolOverflow {
                needed,
                capacity: self.page.capacity(),
            });
        }
        for (i, value) in self.pool.values().iter().enumerate() {
            self.page.write_bytes(base + 32 * i, value);
        }
        for site in self.pool.load_sites() {
            let target = base + 32 * site.id as usize;
            let disp = target as i64 - (site.offset as i64 + 4);
            self.page.patch_u32(site.offset, disp as u32);
        }

        // Pre-execute barrier: x86-64 keeps instruction fetch coherent
        // with stores from the same thread, so ordering is all that is
        // required.
        fence(Ordering::SeqCst);

        debug!(
            "end: {} code bytes, {} constants at offset {}",
            self.len,
            self.pool.num_consts(),
            base
        );
        Ok(())
    }

    /// Consume the session, unmapping the executable page.
    pub fn release(self) {}

    // -- Observation --

    /// Total size of the emitted code in bytes. Monotonically
    /// non-decreasing within a session until the next `begin()`.
    pub fn num_bytes(&self) -> usize {
        self.len
    }

    /// The emitted code bytes. Stable until the next `begin()`.
    pub fn bytecode(&self) -> &[u8] {
        self.page.as_slice(self.len)
    }

    /// Capacity of the backing page.
    pub fn capacity(&self) -> usize {
        self.page.capacity()
    }

    /// The sticky session error, if a void-returning emitter failed.
    pub fn error(&self) -> Option<&AsmError> {
        self.error.as_ref()
    }

    // -- Execution --

    /// Run the finalized buffer with `data` in RCX and no function
    /// table.
    ///
    /// # Safety
    /// The emitted code is executed as-is: it must uphold the entry
    /// contract (preserve RBX/RBP/RDI/RSI/R12-R15 and the stack, end
    /// with `ret`) and only touch memory it may legally touch.
    pub unsafe fn execute(&self, data: *mut u8) -> Result<(), AsmError> {
        self.invoke(data, ptr::null())
    }

    /// Run the finalized buffer with `data` in RCX and the function
    /// table in RDX. The table must be the same one `call` sites were
    /// resolved against.
    ///
    /// # Safety
    /// As for [`execute`](Self::execute).
    pub unsafe fn execute_with(
        &self,
        data: *mut u8,
        table: &FunctionTable,
    ) -> Result<(), AsmError> {
        self.invoke(data, table as *const FunctionTable as *const u8)
    }

    unsafe fn invoke(&self, data: *mut u8, table: *const u8) -> Result<(), AsmError> {
        match self.state {
            State::Finalized => {}
            State::Poisoned => return Err(AsmError::Poisoned),
            State::Idle | State::InProgress => return Err(AsmError::NotFinalized),
        }
        // Entry contract: RCX = data, RDX = table, R8 = extra. The
        // emitted code must preserve RBX, RBP, RDI, RSI, R12-R15 and
        // the stack; every other register, vector state included, is
        // treated as clobbered.
        asm!(
            "call {entry}",
            entry = in(reg) self.page.base_ptr(),
            inlateout("rcx") data => _,
            inlateout("rdx") table => _,
            inlateout("r8") 0usize => _,
            clobber_abi("sysv64"),
        );
        Ok(())
    }

    // -- Host-function calls --

    /// Emit a call to the named entry of `table`: the pointer is
    /// resolved now, loaded into RAX as an immediate, and called
    /// indirectly. Returns false if the name is unknown (nothing is
    /// emitted).
    ///
    /// RCX and RDX are volatile across the call; spill and restore
    /// them around it. RSP must be 16-byte aligned at the call site;
    /// a frame opened with [`frame_enter`](Self::frame_enter)
    /// guarantees that.
    pub fn call(&mut self, name: &str, table: &FunctionTable) -> bool {
        self.require_open();
        let Some(addr) = table.address_of(name) else {
            return false;
        };
        self.op_m(|s| {
            s.rex_opc(OPC_MOV_Iv | P_W1, 0, Reg::Rax as u8);
            s.emit_u64(addr);
            s.rex_ext(OPC_GRP5, Ext5Op::CallN as u8, Reg::Rax);
        })
    }

    /// Open a stack frame for host-function calls: saves RBP, anchors
    /// it at the entry RSP, then reserves `bytes` (rounded up to 32)
    /// and aligns RSP down to a 32-byte boundary. Every call site
    /// inside the frame is therefore 16-byte aligned, and [RSP..] can
    /// hold YMM spills. Pair with [`frame_leave`](Self::frame_leave).
    pub fn frame_enter(&mut self, bytes: u32) {
        let reserve = ((bytes + 31) & !31) as i32;
        self.op("frame_enter", |s| {
            s.raw_push(Reg::Rbp);
            s.rex_rr(OPC_MOV_EvGv | P_W1, Reg::Rsp as u8, Reg::Rbp as u8);
            s.raw_arith_ri(ArithOp::Sub, Reg::Rsp, reserve);
            s.raw_arith_ri(ArithOp::And, Reg::Rsp, -32);
        });
    }

    /// Close a frame opened by `frame_enter`: restores RSP from RBP
    /// and pops the saved RBP.
    pub fn frame_leave(&mut self) {
        self.op("frame_leave", |s| {
            s.rex_rr(OPC_MOV_EvGv | P_W1, Reg::Rbp as u8, Reg::Rsp as u8);
            s.raw_pop(Reg::Rbp);
        });
    }

    // -- Constants --

    /// Pool a constant with `value` broadcast across all eight f32
    /// lanes.
    pub fn set1_ps(&mut self, value: f32) -> ConstId {
        self.require_open();
        self.pool.push(pool::splat_ps(value))
    }

    /// Pool a constant with `value` broadcast across all four f64
    /// lanes.
    pub fn set1_pd(&mut self, value: f64) -> ConstId {
        self.require_open();
        self.pool.push(pool::splat_pd(value))
    }

    /// Pool a constant with `value` broadcast across all eight i32
    /// lanes.
    pub fn set1_epi32(&mut self, value: i32) -> ConstId {
        self.require_open();
        self.pool.push(pool::splat_epi32(value))
    }

    /// Pool a constant from eight f32 lanes (low lane first).
    pub fn set_ps(&mut self, values: [f32; 8]) -> ConstId {
        self.require_open();
        self.pool.push(pool::pack_ps(values))
    }

    /// Pool a constant from four f64 lanes.
    pub fn set_pd(&mut self, values: [f64; 4]) -> ConstId {
        self.require_open();
        self.pool.push(pool::pack_pd(values))
    }

    /// Pool a constant from eight i32 lanes.
    pub fn set_epi32(&mut self, values: [i32; 8]) -> ConstId {
        self.require_open();
        self.pool.push(pool::pack_epi32(values))
    }

    /// Load a pooled constant into `target` via a RIP-relative aligned
    /// load; the displacement is resolved at `end()` once the pool's
    /// final position is known.
    pub fn load_const(&mut self, target: AVXReg, id: ConstId) {
        if let Some(site) = self.op_at("load_const", |s| s.vex_rip(OPC_VMOVAPS_LOAD, target as u8))
        {
            self.pool.record_load(site, id);
        }
    }

    // -- Emit primitives --

    #[inline]
    pub(crate) fn emit_u8(&mut self, val: u8) {
        if self.overflowed || self.len >= self.page.capacity() {
            self.overflowed = true;
            return;
        }
        self.page.write_u8(self.len, val);
        self.len += 1;
    }

    #[inline]
    pub(crate) fn emit_u32(&mut self, val: u32) {
        if self.overflowed || self.len + 4 > self.page.capacity() {
            self.overflowed = true;
            return;
        }
        self.page.write_bytes(self.len, &val.to_le_bytes());
        self.len += 4;
    }

    #[inline]
    pub(crate) fn emit_u64(&mut self, val: u64) {
        if self.overflowed || self.len + 8 > self.page.capacity() {
            self.overflowed = true;
            return;
        }
        self.page.write_bytes(self.len, &val.to_le_bytes());
        self.len += 8;
    }

    #[inline]
    pub(crate) fn patch_u32(&mut self, offset: usize, val: u32) {
        self.page.patch_u32(offset, val);
    }

    /// Read back a little-endian u32 (tests and demos).
    pub fn read_u32(&self, offset: usize) -> u32 {
        self.page.read_u32(offset)
    }

    pub(crate) fn require_open(&self) {
        assert!(
            self.state == State::InProgress,
            "emitter call outside begin()/end()"
        );
    }

    /// Emit one instruction through a void-returning method. On
    /// overflow the write is rolled back and the failure recorded so
    /// `end()` can report which emission caused it.
    pub(crate) fn op(&mut self, mnemonic: &'static str, f: impl FnOnce(&mut Self)) {
        self.require_open();
        let start = self.len;
        f(self);
        if self.overflowed {
            self.overflowed = false;
            self.len = start;
            if self.error.is_none() {
                warn!("page exhausted emitting {mnemonic} at offset {start}");
                self.error = Some(AsmError::Capacity {
                    mnemonic,
                    offset: start,
                });
            }
        }
    }

    /// Emit one instruction through a bool-returning (memory-form)
    /// method: false means nothing was emitted.
    pub(crate) fn op_m(&mut self, f: impl FnOnce(&mut Self)) -> bool {
        self.require_open();
        let start = self.len;
        f(self);
        if self.overflowed {
            self.overflowed = false;
            self.len = start;
            return false;
        }
        true
    }

    /// Like [`op`](Self::op) but the closure yields a value (e.g. a
    /// patch-site offset) that is only returned when the emission fit.
    pub(crate) fn op_at<T>(
        &mut self,
        mnemonic: &'static str,
        f: impl FnOnce(&mut Self) -> T,
    ) -> Option<T> {
        self.require_open();
        let start = self.len;
        let val = f(self);
        if self.overflowed {
            self.overflowed = false;
            self.len = start;
            if self.error.is_none() {
                warn!("page exhausted emitting {mnemonic} at offset {start}");
                self.error = Some(AsmError::Capacity {
                    mnemonic,
                    offset: start,
                });
            }
            return None;
        }
        Some(val)
    }

    /// Record a sticky resolution error (duplicate label/procedure).
    pub(crate) fn set_error(&mut self, e: AsmError) {
        if self.error.is_none() {
            warn!("{e}");
            self.error = Some(e);
        }
    }

    pub(crate) fn labels_mut(&mut self) -> &mut NameTable {
        &mut self.labels
    }

    pub(crate) fn procs_mut(&mut self) -> &mut NameTable {
        &mut self.procs
    }

    // -- VEX serialization --

    /// Emit the VEX prefix and opcode byte. `r`, `x`, `b` are the raw
    /// register numbers feeding the inverted R/X/B extension bits;
    /// `v` is the register carried in vvvv (0 when unused, which
    /// inverts to the required 1111).
    fn vex_opc(&mut self, opc: u32, r: u8, x: u8, b: u8, v: u8) {
        let r_bit: u8 = if r >= 8 { 0 } else { 0x80 };
        let x_bit: u8 = if x >= 8 { 0 } else { 0x40 };
        let b_bit: u8 = if b >= 8 { 0 } else { 0x20 };
        let vvvv = (!v & 0x0F) << 3;
        let l: u8 = if opc & P_L256 != 0 { 0x04 } else { 0 };
        let w: u8 = if opc & P_W1 != 0 { 0x80 } else { 0 };
        let pp = pp_bits(opc);
        let mm = map_bits(opc);

        // Two-byte form whenever X, B and W carry no information and
        // the opcode lives in map 1.
        if mm == 1 && w == 0 && x_bit != 0 && b_bit != 0 {
            self.emit_u8(0xC5);
            self.emit_u8(r_bit | vvvv | l | pp);
        } else {
            self.emit_u8(0xC4);
            self.emit_u8(r_bit | x_bit | b_bit | mm);
            self.emit_u8(w | vvvv | l | pp);
        }
        self.emit_u8(opc as u8);
    }

    /// VEX op, register-register form: `r` in ModRM.reg, `v` in vvvv,
    /// `rm` in ModRM.rm.
    pub(crate) fn vex_rr(&mut self, opc: u32, r: u8, v: u8, rm: u8) {
        self.vex_opc(opc, r, 0, rm, v);
        self.emit_u8(0xC0 | ((r & 7) << 3) | (rm & 7));
    }

    /// VEX op with an opcode extension in ModRM.reg (the shift-by-
    /// immediate groups, where vvvv names the destination).
    pub(crate) fn vex_ext_rr(&mut self, opc: u32, ext: u8, v: u8, rm: u8) {
        self.vex_opc(opc, 0, 0, rm, v);
        self.emit_u8(0xC0 | (ext << 3) | (rm & 7));
    }

    /// VEX op, memory form: [base + disp].
    pub(crate) fn vex_rm(&mut self, opc: u32, r: u8, v: u8, base: Reg, disp: i32) {
        self.vex_opc(opc, r, 0, base as u8, v);
        self.modrm_mem(r & 7, base, disp);
    }

    /// VEX op, VSIB form: [base + vindex * scale + disp], used by the
    /// gather family. `scale_log2` is the SIB scale field (0..3).
    pub(crate) fn vex_vsib(
        &mut self,
        opc: u32,
        r: u8,
        v: u8,
        base: Reg,
        index: AVXReg,
        scale_log2: u8,
        disp: i32,
    ) {
        self.vex_opc(opc, r, index as u8, base as u8, v);
        let r3 = r & 7;
        let sib = (scale_log2 << 6) | (index.low3() << 3) | base.low3();
        if disp == 0 && base.low3() != 5 {
            self.emit_u8((r3 << 3) | 0x04);
            self.emit_u8(sib);
        } else if (-128..=127).contains(&disp) {
            self.emit_u8(0x44 | (r3 << 3));
            self.emit_u8(sib);
            self.emit_u8(disp as u8);
        } else {
            self.emit_u8(0x84 | (r3 << 3));
            self.emit_u8(sib);
            self.emit_u32(disp as u32);
        }
    }

    /// VEX op, RIP-relative form with a zero disp32 placeholder.
    /// Returns the placeholder offset for later patching.
    pub(crate) fn vex_rip(&mut self, opc: u32, r: u8) -> usize {
        self.vex_opc(opc, r, 0, 0, 0);
        self.emit_u8(((r & 7) << 3) | 0x05);
        let site = self.len;
        self.emit_u32(0);
        site
    }

    // -- Legacy (REX) serialization --

    /// Emit prefixes, REX and opcode for a non-VEX instruction. `r` and
    /// `rm` are raw register numbers feeding REX.R/REX.B.
    pub(crate) fn rex_opc(&mut self, opc: u32, r: u8, rm: u8) {
        let mut rex: u8 = 0;
        if opc & P_W1 != 0 {
            rex |= 0x08;
        }
        if r >= 8 {
            rex |= 0x04;
        }
        if rm >= 8 {
            rex |= 0x01;
        }

        if opc & P_66 != 0 {
            self.emit_u8(0x66);
        }
        if opc & P_F3 != 0 {
            self.emit_u8(0xF3);
        } else if opc & P_F2 != 0 {
            self.emit_u8(0xF2);
        }
        if rex != 0 {
            self.emit_u8(0x40 | rex);
        }
        if opc & (P_0F | P_0F38 | P_0F3A) != 0 {
            self.emit_u8(0x0F);
            if opc & P_0F38 != 0 {
                self.emit_u8(0x38);
            } else if opc & P_0F3A != 0 {
                self.emit_u8(0x3A);
            }
        }
        self.emit_u8(opc as u8);
    }

    /// Legacy op, register-register form.
    pub(crate) fn rex_rr(&mut self, opc: u32, r: u8, rm: u8) {
        self.rex_opc(opc, r, rm);
        self.emit_u8(0xC0 | ((r & 7) << 3) | (rm & 7));
    }

    /// Legacy op with /r opcode extension.
    pub(crate) fn rex_ext(&mut self, opc: u32, ext: u8, rm: Reg) {
        self.rex_opc(opc, ext, rm as u8);
        self.emit_u8(0xC0 | (ext << 3) | rm.low3());
    }

    /// Legacy op, memory form: [base + disp].
    pub(crate) fn rex_rm(&mut self, opc: u32, r: u8, base: Reg, disp: i32) {
        self.rex_opc(opc, r, base as u8);
        self.modrm_mem(r & 7, base, disp);
    }

    /// ModRM + optional SIB + displacement for [base + disp].
    /// RSP/R12 bases force a SIB byte; RBP/R13 with zero displacement
    /// still need an explicit disp8 of zero.
    pub(crate) fn modrm_mem(&mut self, r3: u8, base: Reg, disp: i32) {
        let b3 = base.low3();
        if disp == 0 && b3 != 5 {
            if b3 == 4 {
                self.emit_u8((r3 << 3) | 0x04);
                self.emit_u8(0x24);
            } else {
                self.emit_u8((r3 << 3) | b3);
            }
        } else if (-128..=127).contains(&disp) {
            if b3 == 4 {
                self.emit_u8(0x44 | (r3 << 3));
                self.emit_u8(0x24);
            } else {
                self.emit_u8(0x40 | (r3 << 3) | b3);
            }
            self.emit_u8(disp as u8);
        } else {
            if b3 == 4 {
                self.emit_u8(0x84 | (r3 << 3));
                self.emit_u8(0x24);
            } else {
                self.emit_u8(0x80 | (r3 << 3) | b3);
            }
            self.emit_u32(disp as u32);
        }
    }

    // -- Raw sequences shared by composite emitters --

    pub(crate) fn raw_push(&mut self, reg: Reg) {
        self.rex_opc(OPC_PUSH_R + reg.low3() as u32, 0, reg as u8);
    }

    pub(crate) fn raw_pop(&mut self, reg: Reg) {
        self.rex_opc(OPC_POP_R + reg.low3() as u32, 0, reg as u8);
    }

    /// Arithmetic reg, imm; picks the sign-extended imm8 form when
    /// the immediate fits.
    pub(crate) fn raw_arith_ri(&mut self, op: ArithOp, reg: Reg, imm: i32) {
        if (-128..=127).contains(&imm) {
            self.rex_ext(OPC_ARITH_EvIb | P_W1, op as u8, reg);
            self.emit_u8(imm as u8);
        } else {
            self.rex_ext(OPC_ARITH_EvIz | P_W1, op as u8, reg);
            self.emit_u32(imm as u32);
        }
    }
}
