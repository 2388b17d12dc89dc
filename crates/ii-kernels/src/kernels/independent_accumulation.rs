//! Independent-accumulation kernel.
//!
//! Matches `independent-accumulation-v1.yaml`.
//! `acc = Σ_i (a_i % 2)(b_i % 3) + (c_i % 3)(b_i % 5) + (a_i % 7)` over `i = 0..100`.
//!
//! Iteration `i` reads only `a[i]`, `b[i]`, `c[i]` and the accumulator, so the
//! accumulator is the only value carried between iterations. `%` truncates
//! toward zero: the remainder takes the sign of the dividend.
//!
//! Each function provides one of three backends:
//! - `fn independent_accumulation_scalar(...)` -- Pure Rust scalar reference (ground truth)
//! - `unsafe fn independent_accumulation_avx2(...)` -- AVX2 SIMD implementation
//! - `fn independent_accumulation_ptx() -> &'static str` -- PTX assembly source string

use ii_kernels_macros::contract;

use super::{Backend, KernelArray, TRIP_COUNT};
use crate::error::ContractError;

// ────────────────────────────────────────────────────────────────────────────
// Scalar implementation
// ────────────────────────────────────────────────────────────────────────────

/// Contribution of one iteration.
///
/// Bounded by `|term| <= 16` for any inputs, so it never overflows.
#[inline]
pub fn independent_accumulation_term(a_i: i32, b_i: i32, c_i: i32) -> i32 {
    (a_i % 2) * (b_i % 3) + (c_i % 3) * (b_i % 5) + (a_i % 7)
}

/// Independent accumulation (scalar reference).
///
/// Sums [`independent_accumulation_term`] over `i = 0..TRIP_COUNT` in order,
/// with a wrapping `i32` accumulator.
#[contract("independent-accumulation-v1", equation = "independent_accumulation")]
pub fn independent_accumulation_scalar(a: &KernelArray, b: &KernelArray, c: &KernelArray) -> i32 {
    let mut acc = 0i32;
    for i in 0..TRIP_COUNT {
        acc = acc.wrapping_add(independent_accumulation_term(a[i], b[i], c[i]));
    }
    acc
}

/// Run the kernel on `backend`.
///
/// # Errors
///
/// Returns [`ContractError::UnsupportedBackend`] for PTX, and for AVX2 on a
/// host without it.
pub fn independent_accumulation(
    backend: Backend,
    a: &KernelArray,
    b: &KernelArray,
    c: &KernelArray,
) -> Result<i32, ContractError> {
    match backend {
        Backend::Scalar => Ok(independent_accumulation_scalar(a, b, c)),
        #[cfg(target_arch = "x86_64")]
        Backend::Avx2 if backend.is_available() => {
            // SAFETY: AVX2 support was just checked.
            Ok(unsafe { independent_accumulation_avx2(a, b, c) })
        }
        _ => Err(ContractError::UnsupportedBackend(backend)),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// AVX2 implementation
// ────────────────────────────────────────────────────────────────────────────

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Lane-wise truncating remainder of four `i32` by a positive constant.
///
/// The quotient is computed in `f64`, where every `i32 / divisor` is close
/// enough to its true value that truncation yields the exact integer quotient.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
unsafe fn rem_epi32(x: __m128i, divisor: i32) -> __m128i {
    let quotient = _mm256_cvttpd_epi32(_mm256_div_pd(
        _mm256_cvtepi32_pd(x),
        _mm256_set1_pd(f64::from(divisor)),
    ));
    _mm_sub_epi32(x, _mm_mullo_epi32(quotient, _mm_set1_epi32(divisor)))
}

/// AVX2 independent accumulation: four iterations per step.
///
/// Remainders go through [`rem_epi32`]; lane accumulators are combined with
/// wrapping adds, which matches the scalar result exactly.
///
/// # Safety
/// Requires AVX2 support. Caller must verify with
/// `is_x86_feature_detected!("avx2")`.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
pub unsafe fn independent_accumulation_avx2(
    a: &KernelArray,
    b: &KernelArray,
    c: &KernelArray,
) -> i32 {
    const LANES: usize = 4;
    let mut acc = _mm_setzero_si128();
    let mut i = 0;
    while i + LANES <= TRIP_COUNT {
        let va = _mm_loadu_si128(a.as_ptr().add(i).cast());
        let vb = _mm_loadu_si128(b.as_ptr().add(i).cast());
        let vc = _mm_loadu_si128(c.as_ptr().add(i).cast());

        let lhs = _mm_mullo_epi32(rem_epi32(va, 2), rem_epi32(vb, 3));
        let rhs = _mm_mullo_epi32(rem_epi32(vc, 3), rem_epi32(vb, 5));
        let term = _mm_add_epi32(_mm_add_epi32(lhs, rhs), rem_epi32(va, 7));
        acc = _mm_add_epi32(acc, term);
        i += LANES;
    }

    let mut lanes = [0i32; LANES];
    _mm_storeu_si128(lanes.as_mut_ptr().cast(), acc);
    let mut total = lanes.iter().fold(0i32, |s, &v| s.wrapping_add(v));
    for j in i..TRIP_COUNT {
        total = total.wrapping_add(independent_accumulation_term(a[j], b[j], c[j]));
    }
    total
}

// ────────────────────────────────────────────────────────────────────────────
// PTX implementation
// ────────────────────────────────────────────────────────────────────────────

/// PTX assembly for independent accumulation.
///
/// One thread per iteration. `rem.s32` truncates like the scalar `%`; each
/// thread folds its term into `ACC` with `red.global.add.s32`.
pub fn independent_accumulation_ptx() -> &'static str {
    r#".version 8.5
.target sm_90
.address_size 64
.visible .entry independent_accumulation_kernel(
    .param .u64 A,
    .param .u64 B,
    .param .u64 C,
    .param .u64 ACC,
    .param .u32 N
) {
    .reg .u32 %tid, %bid, %n, %idx;
    .reg .u64 %a_ptr, %b_ptr, %c_ptr, %acc_ptr, %addr, %off64;
    .reg .s32 %a, %b, %c, %a2, %b3, %c3, %b5, %a7, %lhs, %rhs, %term;
    .reg .pred %p_bound;

    mov.u32 %tid, %tid.x;
    mov.u32 %bid, %ctaid.x;

    ld.param.u32 %n, [N];
    ld.param.u64 %a_ptr, [A];
    ld.param.u64 %b_ptr, [B];
    ld.param.u64 %c_ptr, [C];
    ld.param.u64 %acc_ptr, [ACC];

    // Global iteration index
    mul.lo.u32 %idx, %bid, 128;
    add.u32 %idx, %idx, %tid;

    setp.ge.u32 %p_bound, %idx, %n;
    @%p_bound bra EXIT;

    mul.wide.u32 %off64, %idx, 4;

    add.u64 %addr, %a_ptr, %off64;
    ld.global.s32 %a, [%addr];
    add.u64 %addr, %b_ptr, %off64;
    ld.global.s32 %b, [%addr];
    add.u64 %addr, %c_ptr, %off64;
    ld.global.s32 %c, [%addr];

    // Truncating remainders
    rem.s32 %a2, %a, 2;
    rem.s32 %b3, %b, 3;
    rem.s32 %c3, %c, 3;
    rem.s32 %b5, %b, 5;
    rem.s32 %a7, %a, 7;

    // term = a2 * b3 + c3 * b5 + a7
    mul.lo.s32 %lhs, %a2, %b3;
    mul.lo.s32 %rhs, %c3, %b5;
    add.s32 %term, %lhs, %rhs;
    add.s32 %term, %term, %a7;

    // acc += term
    red.global.add.s32 [%acc_ptr], %term;

EXIT:
    ret;
}
"#
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
