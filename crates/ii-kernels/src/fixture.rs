//! The fixture catalogue: which kernels exist, what the scheduling analysis
//! knows them as, and the contract each one is bound to.

use crate::error::ContractError;
use crate::schema::{Contract, parse_contract_str};

/// A fixture kernel handed to the initiation-interval analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixture {
    /// Three inputs, no cross-iteration dependency besides the accumulator.
    IndependentAccumulation,
    /// Four inputs, with a temporary that never outlives its iteration.
    ScalarTemporary,
}

impl Fixture {
    pub const ALL: [Self; 2] = [Self::IndependentAccumulation, Self::ScalarTemporary];

    /// Name the analysis tool uses for this fixture.
    pub fn name(self) -> &'static str {
        match self {
            Self::IndependentAccumulation => "test_initiation_interval_1",
            Self::ScalarTemporary => "test_initiation_interval_2",
        }
    }

    /// Look a fixture up by [`Fixture::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn contract_stem(self) -> &'static str {
        match self {
            Self::IndependentAccumulation => "independent-accumulation-v1",
            Self::ScalarTemporary => "scalar-temporary-v1",
        }
    }

    /// Equation within the contract that the kernel implements.
    pub fn equation(self) -> &'static str {
        match self {
            Self::IndependentAccumulation => "independent_accumulation",
            Self::ScalarTemporary => "scalar_temporary",
        }
    }

    /// Number of input arrays.
    pub fn arity(self) -> usize {
        match self {
            Self::IndependentAccumulation => 3,
            Self::ScalarTemporary => 4,
        }
    }

    /// The contract YAML, embedded at compile time.
    pub fn contract_yaml(self) -> &'static str {
        match self {
            Self::IndependentAccumulation => {
                include_str!("../../../contracts/independent-accumulation-v1.yaml")
            }
            Self::ScalarTemporary => include_str!("../../../contracts/scalar-temporary-v1.yaml"),
        }
    }

    /// Parse the embedded contract.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::Yaml`] if the embedded YAML does not match the
    /// schema.
    pub fn contract(self) -> Result<Contract, ContractError> {
        parse_contract_str(self.contract_yaml())
    }
}

impl std::fmt::Display for Fixture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
