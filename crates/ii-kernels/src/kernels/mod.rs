//! Fixture kernels: scalar reference, AVX2 SIMD, and PTX source.
//!
//! Each submodule provides its kernel in three variants:
//! - `fn {name}_scalar(...)`: Pure Rust scalar reference (ground truth)
//! - `unsafe fn {name}_avx2(...)`: AVX2 SIMD implementation
//! - `fn {name}_ptx() -> &'static str`: PTX assembly source string
//!
//! plus `fn {name}(backend, ...)`, which dispatches to a variant and reports
//! backends the host cannot run.
//!
//! Every kernel is a single loop of exactly [`TRIP_COUNT`] iterations over
//! `[i32; TRIP_COUNT]` inputs with a wrapping `i32` accumulator. Wrapping
//! addition is associative and commutative, so the SIMD variants return the
//! same bits as strict `i = 0..TRIP_COUNT` order.

#![allow(
    clippy::many_single_char_names,
    clippy::similar_names,
    clippy::needless_raw_string_hashes,
    clippy::needless_range_loop,
    clippy::cast_ptr_alignment,
    unsafe_op_in_unsafe_fn
)]

pub mod independent_accumulation;
pub mod scalar_temporary;

#[cfg(kani)]
mod kani_proofs;

/// Iterations per kernel call, and the length of every input array.
pub const TRIP_COUNT: usize = 100;

/// One kernel input array.
pub type KernelArray = [i32; TRIP_COUNT];

/// Backend selector for kernel dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Pure Rust scalar reference implementation.
    Scalar,
    /// x86-64 AVX2 SIMD implementation.
    Avx2,
    /// CUDA PTX kernel (returned as assembly source string).
    Ptx,
}

impl Backend {
    /// Fastest backend this host can execute.
    pub fn detect() -> Self {
        if Self::Avx2.is_available() {
            Self::Avx2
        } else {
            Self::Scalar
        }
    }

    /// Whether this backend can run on the current host.
    ///
    /// PTX is source only and never runs in-process.
    pub fn is_available(self) -> bool {
        match self {
            Self::Scalar => true,
            Self::Avx2 => avx2_detected(),
            Self::Ptx => false,
        }
    }
}

#[cfg(target_arch = "x86_64")]
fn avx2_detected() -> bool {
    is_x86_feature_detected!("avx2")
}

#[cfg(not(target_arch = "x86_64"))]
fn avx2_detected() -> bool {
    false
}
