//! # ii-kernels
//!
//! Fixture kernels for initiation-interval analysis, bound to YAML
//! contracts and checked against them.
//!
//! Two 100-iteration loops with no loop-carried dependency other than an
//! accumulator. A modulo scheduler should pipeline both; the kernels here
//! pin down what they compute so the scheduled hardware can be checked.
//!
//! ## Modules
//!
//! - [`kernels`]: scalar, AVX2 and PTX implementations with backend dispatch
//! - [`fixture`]: the fixture catalogue and its embedded contracts
//! - [`harness`]: random input generation and kernel invocation
//! - [`schema`]: parse and validate YAML kernel contracts
//! - [`binding`]: map contract equations to implementation functions
//! - [`error`]: error and validation types

pub mod binding;
pub mod error;
pub mod fixture;
pub mod harness;
pub mod kernels;
pub mod schema;
