//! Fixture contracts: YAML schema, parsing, and validation.

mod parser;
mod types;
mod validator;

pub use parser::{parse_contract, parse_contract_str};
pub use types::{
    AppliesTo, Contract, Equation, FalsificationTest, FixtureSection, KaniHarness, KaniStrategy,
    KernelPhase, KernelStructure, Metadata, ObligationType, ProofObligation, QaGate,
};
pub use validator::validate_contract;
