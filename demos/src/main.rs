//! Worked examples driving the assembler through its public API:
//! aligned moves, packed arithmetic, loops, forward jumps, pooled
//! constants, subroutines and host-function calls.

use std::env;
use std::process;

use vecasm_backend::Assembler;
use vecasm_core::{AVXReg, Reg};
use vecasm_funcs::FunctionTable;

/// 32-byte-aligned argument block: `rows` rows of eight floats, with
/// row k reachable at [RCX + 32*k] from emitted code.
#[repr(C, align(32))]
struct Args<const N: usize>([[f32; 8]; N]);

impl<const N: usize> Args<N> {
    /// Row k = eight copies of 0.1 * k, the layout every example here
    /// works over.
    fn ramp() -> Self {
        let mut rows = [[0.0f32; 8]; N];
        for (k, row) in rows.iter_mut().enumerate() {
            *row = [k as f32 * 0.1; 8];
        }
        Self(rows)
    }

    fn ptr(&mut self) -> *mut u8 {
        self.0.as_mut_ptr() as *mut u8
    }
}

fn print_machine_code(name: &str, a: &Assembler) {
    println!("{name}: {} bytes", a.num_bytes());
    for (i, chunk) in a.bytecode().chunks(16).enumerate() {
        print!("  {:04x}:", i * 16);
        for byte in chunk {
            print!(" {byte:02x}");
        }
        println!();
    }
}

fn print_rows(rows: &[[f32; 8]]) {
    for (k, row) in rows.iter().enumerate() {
        print!("  row {k:2}:");
        for v in row {
            print!(" {v:7.4}");
        }
        println!();
    }
}

/// Aligned and unaligned moves between memory and YMM registers.
fn demo_basics() {
    let mut data = Args::<16>::ramp();
    let mut a = Assembler::with_default_page_size().expect("page allocation");

    a.begin();
    a.movaps_load(AVXReg::Ymm0, Reg::Rcx, 32);
    a.movups_load(AVXReg::Ymm1, Reg::Rcx, 80);
    a.movaps_store(Reg::Rcx, 0, AVXReg::Ymm0);
    a.movups_store(Reg::Rcx, 8, AVXReg::Ymm1);
    a.ret();
    a.end().expect("finalize");

    print_machine_code("00_basics", &a);
    unsafe { a.execute(data.ptr()).expect("execute") };
    print_rows(&data.0);
}

/// vaddps of two rows into row 0.
fn demo_add() {
    let mut data = Args::<4>::ramp();
    let mut a = Assembler::with_default_page_size().expect("page allocation");

    a.begin();
    a.movaps_load(AVXReg::Ymm1, Reg::Rcx, 32);
    a.movaps_load(AVXReg::Ymm2, Reg::Rcx, 64);
    a.addps(AVXReg::Ymm0, AVXReg::Ymm1, AVXReg::Ymm2);
    a.movaps_store(Reg::Rcx, 0, AVXReg::Ymm0);
    a.ret();
    a.end().expect("finalize");

    print_machine_code("02_packed_add", &a);
    unsafe { a.execute(data.ptr()).expect("execute") };
    print_rows(&data.0);
}

/// Normalize (x, y, z) rows with the approximate reciprocal square
/// root.
fn demo_normalize() {
    let mut data = Args::<4>::ramp();
    data.0[1] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
    data.0[2] = [2.0, 1.0, 2.0, 1.0, 2.0, 1.0, 2.0, 1.0];
    data.0[3] = [0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5];
    let mut a = Assembler::with_default_page_size().expect("page allocation");

    a.begin();
    a.movaps_load(AVXReg::Ymm0, Reg::Rcx, 32);
    a.movaps_load(AVXReg::Ymm1, Reg::Rcx, 64);
    a.movaps_load(AVXReg::Ymm2, Reg::Rcx, 96);
    // len2 = x*x + y*y + z*z
    a.mulps(AVXReg::Ymm3, AVXReg::Ymm0, AVXReg::Ymm0);
    a.mulps(AVXReg::Ymm4, AVXReg::Ymm1, AVXReg::Ymm1);
    a.addps(AVXReg::Ymm3, AVXReg::Ymm3, AVXReg::Ymm4);
    a.mulps(AVXReg::Ymm4, AVXReg::Ymm2, AVXReg::Ymm2);
    a.addps(AVXReg::Ymm3, AVXReg::Ymm3, AVXReg::Ymm4);
    a.rsqrtps(AVXReg::Ymm3, AVXReg::Ymm3);
    a.mulps(AVXReg::Ymm0, AVXReg::Ymm0, AVXReg::Ymm3);
    a.mulps(AVXReg::Ymm1, AVXReg::Ymm1, AVXReg::Ymm3);
    a.mulps(AVXReg::Ymm2, AVXReg::Ymm2, AVXReg::Ymm3);
    a.movaps_store(Reg::Rcx, 32, AVXReg::Ymm0);
    a.movaps_store(Reg::Rcx, 64, AVXReg::Ymm1);
    a.movaps_store(Reg::Rcx, 96, AVXReg::Ymm2);
    a.ret();
    a.end().expect("finalize");

    print_machine_code("03_normalize", &a);
    unsafe { a.execute(data.ptr()).expect("execute") };
    print_rows(&data.0);
}

/// Countdown loop accumulating ten rows.
fn demo_loop() {
    let mut data = Args::<16>::ramp();
    for row in data.0.iter_mut().take(10) {
        *row = [0.1; 8];
    }
    let mut a = Assembler::with_default_page_size().expect("page allocation");

    a.begin();
    a.setzero(AVXReg::Ymm0);
    a.mov(Reg::Rax, Reg::Rcx);
    a.loadcount(Reg::R9, 10);
    a.insert_label("loop");
    a.addps_m(AVXReg::Ymm0, AVXReg::Ymm0, Reg::Rax, 0);
    a.lea(Reg::Rax, Reg::Rax, 32);
    a.dec(Reg::R9);
    a.jump_ne_label("loop");
    a.movaps_store(Reg::Rcx, 0, AVXReg::Ymm0);
    a.ret();
    a.end().expect("finalize");

    print_machine_code("04_loop", &a);
    unsafe { a.execute(data.ptr()).expect("execute") };
    print_rows(&data.0[..2]);
}

/// Round-trip two rows through a 32-byte-aligned stack area. The
/// stack itself is only 16-byte aligned, so RBP is parked 32 bytes
/// into the reservation and masked down to a 32-byte boundary.
fn demo_stack() {
    let mut data = Args::<16>::ramp();
    let mut a = Assembler::with_default_page_size().expect("page allocation");

    let stack_size = 64 + 32;

    a.begin();
    a.push(Reg::Rbp);
    a.sub(Reg::Rsp, stack_size);
    a.lea(Reg::Rbp, Reg::Rsp, 32);
    a.and(Reg::Rbp, -32);

    // Park two rows on the stack, then pull them back into fresh
    // registers and write them out swapped.
    a.movaps_load(AVXReg::Ymm0, Reg::Rcx, 32);
    a.movaps_load(AVXReg::Ymm1, Reg::Rcx, 64);
    a.movaps_store(Reg::Rbp, 0, AVXReg::Ymm0);
    a.movaps_store(Reg::Rbp, 32, AVXReg::Ymm1);
    a.movaps_load(AVXReg::Ymm2, Reg::Rbp, 0);
    a.movaps_load(AVXReg::Ymm3, Reg::Rbp, 32);
    a.movaps_store(Reg::Rcx, 32, AVXReg::Ymm3);
    a.movaps_store(Reg::Rcx, 64, AVXReg::Ymm2);

    a.add(Reg::Rsp, stack_size);
    a.pop(Reg::Rbp);
    a.ret();
    a.end().expect("finalize");

    print_machine_code("06_stack", &a);
    unsafe { a.execute(data.ptr()).expect("execute") };
    print_rows(&data.0[..4]);
}

/// Forward jump: square the input, unless every lane is negative, in
/// which case double it.
fn demo_jumps() {
    let mut a = Assembler::with_default_page_size().expect("page allocation");

    a.begin();
    a.push(Reg::Rbx);
    a.movaps_load(AVXReg::Ymm0, Reg::Rcx, 0);
    a.movemaskps(Reg::Rbx, AVXReg::Ymm0);
    a.cmp(Reg::Rbx, 0xFF);
    a.jump_eq_label("all_negative");
    a.mulps(AVXReg::Ymm0, AVXReg::Ymm0, AVXReg::Ymm0);
    a.movaps_store(Reg::Rcx, 0, AVXReg::Ymm0);
    a.pop(Reg::Rbx);
    a.ret();
    a.insert_label("all_negative");
    a.addps(AVXReg::Ymm0, AVXReg::Ymm0, AVXReg::Ymm0);
    a.movaps_store(Reg::Rcx, 0, AVXReg::Ymm0);
    a.pop(Reg::Rbx);
    a.ret();
    a.end().expect("finalize");

    print_machine_code("12_forward_jumps", &a);

    let mut pos = Args::<1>([[9.0; 8]]);
    unsafe { a.execute(pos.ptr()).expect("execute") };
    print_rows(&pos.0);

    let mut neg = Args::<1>([[-9.0; 8]]);
    unsafe { a.execute(neg.ptr()).expect("execute") };
    print_rows(&neg.0);
}

/// Two pooled constants multiplied into the input row.
fn demo_constants() {
    let mut data = Args::<4>::ramp();
    let mut a = Assembler::with_default_page_size().expect("page allocation");

    a.begin();
    let broadcast = a.set1_ps(4.5);
    let ramp = a.set_ps([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    a.load_const(AVXReg::Ymm1, broadcast);
    a.load_const(AVXReg::Ymm2, ramp);
    a.movaps_load(AVXReg::Ymm0, Reg::Rcx, 32);
    a.mulps(AVXReg::Ymm1, AVXReg::Ymm1, AVXReg::Ymm0);
    a.mulps(AVXReg::Ymm2, AVXReg::Ymm2, AVXReg::Ymm0);
    a.movaps_store(Reg::Rcx, 0, AVXReg::Ymm1);
    a.movaps_store(Reg::Rcx, 32, AVXReg::Ymm2);
    a.ret();
    a.end().expect("finalize");

    print_machine_code("10_constants", &a);
    unsafe { a.execute(data.ptr()).expect("execute") };
    print_rows(&data.0);
}

/// A named procedure called before it is defined.
fn demo_subroutines() {
    let mut data = Args::<4>::ramp();
    let mut a = Assembler::with_default_page_size().expect("page allocation");

    a.begin();
    a.movaps_load(AVXReg::Ymm0, Reg::Rcx, 0);
    a.movaps_load(AVXReg::Ymm1, Reg::Rcx, 32);
    a.movaps_load(AVXReg::Ymm2, Reg::Rcx, 64);
    a.movaps_load(AVXReg::Ymm3, Reg::Rcx, 96);
    a.call_procedure("vec2_add");
    a.movaps_store(Reg::Rcx, 0, AVXReg::Ymm0);
    a.movaps_store(Reg::Rcx, 32, AVXReg::Ymm1);
    a.ret();
    // Arguments in YMM0-YMM3, results in YMM0/YMM1; inside emitted
    // code the convention is whatever we decide it is.
    a.procedure("vec2_add");
    a.addps(AVXReg::Ymm0, AVXReg::Ymm0, AVXReg::Ymm2);
    a.addps(AVXReg::Ymm1, AVXReg::Ymm1, AVXReg::Ymm3);
    a.ret();
    a.end().expect("finalize");

    print_machine_code("11_subroutines", &a);
    unsafe { a.execute(data.ptr()).expect("execute") };
    print_rows(&data.0);
}

/// Call host math functions from the default table.
fn demo_functions() {
    let mut data = Args::<4>::ramp();
    let mut table = FunctionTable::new();
    table.add_defaults();
    let mut a = Assembler::with_default_page_size().expect("page allocation");

    a.begin();
    a.frame_enter(64);
    // RCX/RDX are volatile across host calls; keep them in the frame.
    a.mov_store(Reg::Rsp, 8, Reg::Rcx);
    a.mov_store(Reg::Rsp, 16, Reg::Rdx);

    a.movaps_load(AVXReg::Ymm0, Reg::Rcx, 32);
    a.call("sin", &table);
    a.mov_load(Reg::Rcx, Reg::Rsp, 8);
    a.mov_load(Reg::Rdx, Reg::Rsp, 16);
    a.movaps_store(Reg::Rcx, 0, AVXReg::Ymm0);

    a.movaps_load(AVXReg::Ymm0, Reg::Rcx, 64);
    a.call("cos", &table);
    a.mov_load(Reg::Rcx, Reg::Rsp, 8);
    a.mov_load(Reg::Rdx, Reg::Rsp, 16);
    a.movaps_store(Reg::Rcx, 32, AVXReg::Ymm0);

    a.frame_leave();
    a.ret();
    a.end().expect("finalize");

    print_machine_code("07_functions", &a);
    unsafe { a.execute_with(data.ptr(), &table).expect("execute") };
    println!("  sin(0.1) = {} (std: {})", data.0[0][0], 0.1f32.sin());
    println!("  cos(0.2) = {} (std: {})", data.0[1][0], 0.2f32.cos());
}

fn main() {
    env_logger::init();

    if !is_x86_feature_detected!("avx2") {
        eprintln!("this host does not support AVX2");
        process::exit(1);
    }

    let args: Vec<String> = env::args().collect();
    let which = args.get(1).map(String::as_str).unwrap_or("all");

    let demos: &[(&str, fn())] = &[
        ("basics", demo_basics),
        ("add", demo_add),
        ("normalize", demo_normalize),
        ("loop", demo_loop),
        ("stack", demo_stack),
        ("jumps", demo_jumps),
        ("constants", demo_constants),
        ("subroutines", demo_subroutines),
        ("functions", demo_functions),
    ];

    if which == "all" {
        for (name, run) in demos {
            println!("=== {name} ===");
            run();
        }
        return;
    }

    match demos.iter().find(|(name, _)| *name == which) {
        Some((_, run)) => run(),
        None => {
            let names: Vec<&str> = demos.iter().map(|(name, _)| *name).collect();
            eprintln!("usage: vecasm-demos [all|{}]", names.join("|"));
            process::exit(1);
        }
    }
}
