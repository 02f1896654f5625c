//! The default suite of callable vector math functions.
//!
//! These are plain lane-wise approximations built on `std` math: good
//! enough for the demos and tests, opaque to the assembler core. Each
//! is an `extern "C"` function taking and returning YMM values, which
//! is exactly the register contract the emitted `call` sequence
//! expects on System-V hosts.

use std::arch::x86_64::{
    __m256, __m256d, _mm256_loadu_pd, _mm256_loadu_ps, _mm256_storeu_pd, _mm256_storeu_ps,
};

use log::debug;

use crate::table::{FunctionTable, VecFn};

#[target_feature(enable = "avx")]
unsafe fn map_ps(a: __m256, f: impl Fn(f32) -> f32) -> __m256 {
    let mut v = [0.0f32; 8];
    _mm256_storeu_ps(v.as_mut_ptr(), a);
    for x in &mut v {
        *x = f(*x);
    }
    _mm256_loadu_ps(v.as_ptr())
}

#[target_feature(enable = "avx")]
unsafe fn map2_ps(a: __m256, b: __m256, f: impl Fn(f32, f32) -> f32) -> __m256 {
    let mut va = [0.0f32; 8];
    let mut vb = [0.0f32; 8];
    _mm256_storeu_ps(va.as_mut_ptr(), a);
    _mm256_storeu_ps(vb.as_mut_ptr(), b);
    for i in 0..8 {
        va[i] = f(va[i], vb[i]);
    }
    _mm256_loadu_ps(va.as_ptr())
}

#[target_feature(enable = "avx")]
unsafe fn map_pd(a: __m256d, f: impl Fn(f64) -> f64) -> __m256d {
    let mut v = [0.0f64; 4];
    _mm256_storeu_pd(v.as_mut_ptr(), a);
    for x in &mut v {
        *x = f(*x);
    }
    _mm256_loadu_pd(v.as_ptr())
}

#[target_feature(enable = "avx")]
unsafe fn map2_pd(a: __m256d, b: __m256d, f: impl Fn(f64, f64) -> f64) -> __m256d {
    let mut va = [0.0f64; 4];
    let mut vb = [0.0f64; 4];
    _mm256_storeu_pd(va.as_mut_ptr(), a);
    _mm256_storeu_pd(vb.as_mut_ptr(), b);
    for i in 0..4 {
        va[i] = f(va[i], vb[i]);
    }
    _mm256_loadu_pd(va.as_ptr())
}

macro_rules! unary_ps {
    ($($name:ident => $f:expr;)*) => {
        $(
            #[target_feature(enable = "avx")]
            unsafe extern "C" fn $name(a: __m256) -> __m256 {
                map_ps(a, $f)
            }
        )*
    };
}

macro_rules! binary_ps {
    ($($name:ident => $f:expr;)*) => {
        $(
            #[target_feature(enable = "avx")]
            unsafe extern "C" fn $name(a: __m256, b: __m256) -> __m256 {
                map2_ps(a, b, $f)
            }
        )*
    };
}

macro_rules! unary_pd {
    ($($name:ident => $f:expr;)*) => {
        $(
            #[target_feature(enable = "avx")]
            unsafe extern "C" fn $name(a: __m256d) -> __m256d {
                map_pd(a, $f)
            }
        )*
    };
}

macro_rules! binary_pd {
    ($($name:ident => $f:expr;)*) => {
        $(
            #[target_feature(enable = "avx")]
            unsafe extern "C" fn $name(a: __m256d, b: __m256d) -> __m256d {
                map2_pd(a, b, $f)
            }
        )*
    };
}

unary_ps! {
    v_abs => f32::abs;
    v_sin => f32::sin;
    v_cos => f32::cos;
    v_tan => f32::tan;
    v_sinh => f32::sinh;
    v_cosh => f32::cosh;
    v_tanh => f32::tanh;
    v_asin => f32::asin;
    v_acos => f32::acos;
    v_atan => f32::atan;
    v_asinh => f32::asinh;
    v_acosh => f32::acosh;
    v_atanh => f32::atanh;
    v_exp => f32::exp;
    v_log2 => f32::log2;
    v_log => f32::ln;
    v_pow2 => f32::exp2;
    v_cbrt => f32::cbrt;
}

binary_ps! {
    v_atan2 => f32::atan2;
    v_pow => f32::powf;
}

unary_pd! {
    v_absd => f64::abs;
    v_sind => f64::sin;
    v_cosd => f64::cos;
    v_tand => f64::tan;
    v_sinhd => f64::sinh;
    v_coshd => f64::cosh;
    v_tanhd => f64::tanh;
    v_asind => f64::asin;
    v_acosd => f64::acos;
    v_atand => f64::atan;
    v_asinhd => f64::asinh;
    v_acoshd => f64::acosh;
    v_atanhd => f64::atanh;
    v_expd => f64::exp;
    v_log2d => f64::log2;
    v_logd => f64::ln;
    v_pow2d => f64::exp2;
    v_cbrtd => f64::cbrt;
}

binary_pd! {
    v_atan2d => f64::atan2;
    v_powd => f64::powf;
}

impl FunctionTable {
    /// Install the default math suite in both single-precision and
    /// double-precision (`d` suffix) flavors: abs, sin, cos, tan, sinh,
    /// cosh, tanh, asin, acos, atan, atan2, asinh, acosh, atanh, exp,
    /// log2, log, pow2, pow, cbrt.
    pub fn add_defaults(&mut self) {
        let singles: &[(&str, VecFn)] = &[
            ("abs", VecFn::F1(v_abs)),
            ("sin", VecFn::F1(v_sin)),
            ("cos", VecFn::F1(v_cos)),
            ("tan", VecFn::F1(v_tan)),
            ("sinh", VecFn::F1(v_sinh)),
            ("cosh", VecFn::F1(v_cosh)),
            ("tanh", VecFn::F1(v_tanh)),
            ("asin", VecFn::F1(v_asin)),
            ("acos", VecFn::F1(v_acos)),
            ("atan", VecFn::F1(v_atan)),
            ("atan2", VecFn::F2(v_atan2)),
            ("asinh", VecFn::F1(v_asinh)),
            ("acosh", VecFn::F1(v_acosh)),
            ("atanh", VecFn::F1(v_atanh)),
            ("exp", VecFn::F1(v_exp)),
            ("log2", VecFn::F1(v_log2)),
            ("log", VecFn::F1(v_log)),
            ("pow2", VecFn::F1(v_pow2)),
            ("pow", VecFn::F2(v_pow)),
            ("cbrt", VecFn::F1(v_cbrt)),
        ];
        let doubles: &[(&str, VecFn)] = &[
            ("absd", VecFn::D1(v_absd)),
            ("sind", VecFn::D1(v_sind)),
            ("cosd", VecFn::D1(v_cosd)),
            ("tand", VecFn::D1(v_tand)),
            ("sinhd", VecFn::D1(v_sinhd)),
            ("coshd", VecFn::D1(v_coshd)),
            ("tanhd", VecFn::D1(v_tanhd)),
            ("asind", VecFn::D1(v_asind)),
            ("acosd", VecFn::D1(v_acosd)),
            ("atand", VecFn::D1(v_atand)),
            ("atan2d", VecFn::D2(v_atan2d)),
            ("asinhd", VecFn::D1(v_asinhd)),
            ("acoshd", VecFn::D1(v_acoshd)),
            ("atanhd", VecFn::D1(v_atanhd)),
            ("expd", VecFn::D1(v_expd)),
            ("log2d", VecFn::D1(v_log2d)),
            ("logd", VecFn::D1(v_logd)),
            ("pow2d", VecFn::D1(v_pow2d)),
            ("powd", VecFn::D2(v_powd)),
            ("cbrtd", VecFn::D1(v_cbrtd)),
        ];
        for (name, f) in singles.iter().chain(doubles) {
            // Default names only collide if the user registered one of
            // them first; skip those rather than clobber.
            let _ = self.add_func(name, *f);
        }
        debug!("installed {} default vector functions", self.len());
    }
}
