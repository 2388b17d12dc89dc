//! Scalar-temporary kernel.
//!
//! Matches `scalar-temporary-v1.yaml`.
//! `tmp = a_i * b_i - c_i; acc += tmp + d_i` over `i = 0..100`.
//!
//! `tmp` is written before it is read in every iteration and lives only in the
//! loop body, so it imposes no constraint between iterations. All arithmetic
//! wraps on `i32` overflow.
//!
//! Each function provides one of three backends:
//! - `fn scalar_temporary_scalar(...)` -- Pure Rust scalar reference (ground truth)
//! - `unsafe fn scalar_temporary_avx2(...)` -- AVX2 SIMD implementation
//! - `fn scalar_temporary_ptx() -> &'static str` -- PTX assembly source string

use ii_kernels_macros::contract;

use super::{Backend, KernelArray, TRIP_COUNT};
use crate::error::ContractError;

// ────────────────────────────────────────────────────────────────────────────
// Scalar implementation
// ────────────────────────────────────────────────────────────────────────────

/// Contribution of one iteration: `(a_i * b_i - c_i) + d_i`, wrapping.
#[inline]
pub fn scalar_temporary_step(a_i: i32, b_i: i32, c_i: i32, d_i: i32) -> i32 {
    let tmp = a_i.wrapping_mul(b_i).wrapping_sub(c_i);
    tmp.wrapping_add(d_i)
}

/// Scalar-temporary kernel (scalar reference).
#[contract("scalar-temporary-v1", equation = "scalar_temporary")]
pub fn scalar_temporary_scalar(
    a: &KernelArray,
    b: &KernelArray,
    c: &KernelArray,
    d: &KernelArray,
) -> i32 {
    let mut acc = 0i32;
    for i in 0..TRIP_COUNT {
        let tmp = a[i].wrapping_mul(b[i]).wrapping_sub(c[i]);
        acc = acc.wrapping_add(tmp.wrapping_add(d[i]));
    }
    acc
}

/// Run the kernel on `backend`.
///
/// # Errors
///
/// Returns [`ContractError::UnsupportedBackend`] for PTX, and for AVX2 on a
/// host without it.
pub fn scalar_temporary(
    backend: Backend,
    a: &KernelArray,
    b: &KernelArray,
    c: &KernelArray,
    d: &KernelArray,
) -> Result<i32, ContractError> {
    match backend {
        Backend::Scalar => Ok(scalar_temporary_scalar(a, b, c, d)),
        #[cfg(target_arch = "x86_64")]
        Backend::Avx2 if backend.is_available() => {
            // SAFETY: AVX2 support was just checked.
            Ok(unsafe { scalar_temporary_avx2(a, b, c, d) })
        }
        _ => Err(ContractError::UnsupportedBackend(backend)),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// AVX2 implementation
// ────────────────────────────────────────────────────────────────────────────

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// AVX2 scalar-temporary kernel: eight iterations per step.
///
/// `_mm256_mullo_epi32` keeps the low 32 bits of each product, the same value
/// `wrapping_mul` produces. The trailing `TRIP_COUNT % 8` iterations run
/// through [`scalar_temporary_step`].
///
/// # Safety
/// Requires AVX2 support. Caller must verify with
/// `is_x86_feature_detected!("avx2")`.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
pub unsafe fn scalar_temporary_avx2(
    a: &KernelArray,
    b: &KernelArray,
    c: &KernelArray,
    d: &KernelArray,
) -> i32 {
    const LANES: usize = 8;
    let mut acc = _mm256_setzero_si256();
    let mut i = 0;
    while i + LANES <= TRIP_COUNT {
        let va = _mm256_loadu_si256(a.as_ptr().add(i).cast());
        let vb = _mm256_loadu_si256(b.as_ptr().add(i).cast());
        let vc = _mm256_loadu_si256(c.as_ptr().add(i).cast());
        let vd = _mm256_loadu_si256(d.as_ptr().add(i).cast());

        let tmp = _mm256_sub_epi32(_mm256_mullo_epi32(va, vb), vc);
        acc = _mm256_add_epi32(acc, _mm256_add_epi32(tmp, vd));
        i += LANES;
    }

    let mut lanes = [0i32; LANES];
    _mm256_storeu_si256(lanes.as_mut_ptr().cast(), acc);
    let mut total = lanes.iter().fold(0i32, |s, &v| s.wrapping_add(v));
    for j in i..TRIP_COUNT {
        total = total.wrapping_add(scalar_temporary_step(a[j], b[j], c[j], d[j]));
    }
    total
}

// ────────────────────────────────────────────────────────────────────────────
// PTX implementation
// ────────────────────────────────────────────────────────────────────────────

/// PTX assembly for the scalar-temporary kernel.
///
/// One thread per iteration; `%tmp` is a thread-private register, so no
/// iteration can observe another's temporary.
pub fn scalar_temporary_ptx() -> &'static str {
    r#".version 8.5
.target sm_90
.address_size 64
.visible .entry scalar_temporary_kernel(
    .param .u64 A,
    .param .u64 B,
    .param .u64 C,
    .param .u64 D,
    .param .u64 ACC,
    .param .u32 N
) {
    .reg .u32 %tid, %bid, %n, %idx;
    .reg .u64 %a_ptr, %b_ptr, %c_ptr, %d_ptr, %acc_ptr, %addr, %off64;
    .reg .s32 %a, %b, %c, %d, %tmp, %contrib;
    .reg .pred %p_bound;

    mov.u32 %tid, %tid.x;
    mov.u32 %bid, %ctaid.x;

    ld.param.u32 %n, [N];
    ld.param.u64 %a_ptr, [A];
    ld.param.u64 %b_ptr, [B];
    ld.param.u64 %c_ptr, [C];
    ld.param.u64 %d_ptr, [D];
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
    add.u64 %addr, %d_ptr, %off64;
    ld.global.s32 %d, [%addr];

    // tmp = a * b - c
    mul.lo.s32 %tmp, %a, %b;
    sub.s32 %tmp, %tmp, %c;

    // acc += tmp + d
    add.s32 %contrib, %tmp, %d;
    red.global.add.s32 [%acc_ptr], %contrib;

EXIT:
    ret;
}
"#
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
