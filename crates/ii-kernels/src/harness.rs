//! Fixture harness: allocate inputs, fill them from an injected random
//! source, invoke a kernel, and hand back the result.
//!
//! The random source is always passed in; nothing here touches global RNG
//! state, so a seeded [`rand::rngs::StdRng`] reproduces a run exactly.

use std::ops::Range;

use log::{debug, warn};
use rand::Rng;

use crate::error::ContractError;
use crate::fixture::Fixture;
use crate::kernels::independent_accumulation::independent_accumulation;
use crate::kernels::scalar_temporary::scalar_temporary;
use crate::kernels::{Backend, KernelArray, TRIP_COUNT};

/// Range every harness input is drawn from.
pub const INPUT_RANGE: Range<i32> = 0..10;

/// Fill one input array with values from [`INPUT_RANGE`].
pub fn random_array<R: Rng + ?Sized>(rng: &mut R) -> KernelArray {
    std::array::from_fn(|_| rng.random_range(INPUT_RANGE))
}

/// Copy a slice into a kernel array.
///
/// # Errors
///
/// Returns [`ContractError::TripCount`] unless `values.len() == TRIP_COUNT`.
pub fn array_from_slice(name: &'static str, values: &[i32]) -> Result<KernelArray, ContractError> {
    values.try_into().map_err(|_| ContractError::TripCount {
        name,
        expected: TRIP_COUNT,
        actual: values.len(),
    })
}

/// Inputs of the independent-accumulation kernel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccumulationInputs {
    pub a: KernelArray,
    pub b: KernelArray,
    pub c: KernelArray,
}

impl AccumulationInputs {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            a: random_array(rng),
            b: random_array(rng),
            c: random_array(rng),
        }
    }

    /// # Errors
    ///
    /// Returns [`ContractError::TripCount`] for the first slice whose length
    /// is not [`TRIP_COUNT`].
    pub fn from_slices(a: &[i32], b: &[i32], c: &[i32]) -> Result<Self, ContractError> {
        Ok(Self {
            a: array_from_slice("a", a)?,
            b: array_from_slice("b", b)?,
            c: array_from_slice("c", c)?,
        })
    }

    /// # Errors
    ///
    /// Returns [`ContractError::UnsupportedBackend`] if `backend` cannot run here.
    pub fn run(&self, backend: Backend) -> Result<i32, ContractError> {
        independent_accumulation(backend, &self.a, &self.b, &self.c)
    }
}

/// Inputs of the scalar-temporary kernel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemporaryInputs {
    pub a: KernelArray,
    pub b: KernelArray,
    pub c: KernelArray,
    pub d: KernelArray,
}

impl TemporaryInputs {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            a: random_array(rng),
            b: random_array(rng),
            c: random_array(rng),
            d: random_array(rng),
        }
    }

    /// # Errors
    ///
    /// Returns [`ContractError::TripCount`] for the first slice whose length
    /// is not [`TRIP_COUNT`].
    pub fn from_slices(a: &[i32], b: &[i32], c: &[i32], d: &[i32]) -> Result<Self, ContractError> {
        Ok(Self {
            a: array_from_slice("a", a)?,
            b: array_from_slice("b", b)?,
            c: array_from_slice("c", c)?,
            d: array_from_slice("d", d)?,
        })
    }

    /// # Errors
    ///
    /// Returns [`ContractError::UnsupportedBackend`] if `backend` cannot run here.
    pub fn run(&self, backend: Backend) -> Result<i32, ContractError> {
        scalar_temporary(backend, &self.a, &self.b, &self.c, &self.d)
    }
}

/// Inputs for any fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureInputs {
    IndependentAccumulation(AccumulationInputs),
    ScalarTemporary(TemporaryInputs),
}

impl FixtureInputs {
    /// Random inputs shaped for `fixture`.
    pub fn random<R: Rng + ?Sized>(fixture: Fixture, rng: &mut R) -> Self {
        match fixture {
            Fixture::IndependentAccumulation => {
                Self::IndependentAccumulation(AccumulationInputs::random(rng))
            }
            Fixture::ScalarTemporary => Self::ScalarTemporary(TemporaryInputs::random(rng)),
        }
    }

    pub fn fixture(&self) -> Fixture {
        match self {
            Self::IndependentAccumulation(_) => Fixture::IndependentAccumulation,
            Self::ScalarTemporary(_) => Fixture::ScalarTemporary,
        }
    }

    /// # Errors
    ///
    /// Returns [`ContractError::UnsupportedBackend`] if `backend` cannot run here.
    pub fn run(&self, backend: Backend) -> Result<i32, ContractError> {
        match self {
            Self::IndependentAccumulation(inputs) => inputs.run(backend),
            Self::ScalarTemporary(inputs) => inputs.run(backend),
        }
    }
}

/// Allocate and fill inputs for `fixture`, then invoke its kernel.
///
/// The result is returned so callers can check it; the reference harness
/// simply drops it.
///
/// # Errors
///
/// Returns [`ContractError::UnsupportedBackend`] if `backend` cannot run here.
pub fn run_fixture<R: Rng + ?Sized>(
    fixture: Fixture,
    backend: Backend,
    rng: &mut R,
) -> Result<i32, ContractError> {
    let inputs = FixtureInputs::random(fixture, rng);
    debug!(
        "{fixture}: {} inputs of {TRIP_COUNT} drawn from {INPUT_RANGE:?}",
        fixture.arity()
    );
    match inputs.run(backend) {
        Ok(value) => {
            debug!("{fixture}: {backend:?} -> {value}");
            Ok(value)
        }
        Err(e) => {
            warn!("{fixture}: {e}");
            Err(e)
        }
    }
}
