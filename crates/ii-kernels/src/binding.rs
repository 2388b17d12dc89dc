//! Binding registry: maps contract equations to kernel functions.
//!
//! `contracts/binding.yaml` names, for every equation of every fixture
//! contract, the Rust function that implements it. `build.rs` turns the
//! implemented entries into the env vars `#[contract]` checks at compile time;
//! [`BindingRegistry::check_against`] cross-checks the registry against the
//! parsed contracts.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ContractError;
use crate::schema::Contract;

/// Top-level binding registry parsed from YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindingRegistry {
    pub version: String,
    pub target_crate: String,
    #[serde(default)]
    pub bindings: Vec<KernelBinding>,
}

/// A single binding: one contract equation mapped to one implementation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KernelBinding {
    /// Contract YAML filename (e.g. "scalar-temporary-v1.yaml").
    pub contract: String,
    /// Equation name within the contract.
    pub equation: String,
    /// Full Rust module path (e.g. `ii_kernels::kernels::scalar_temporary`).
    #[serde(default)]
    pub module_path: Option<String>,
    #[serde(default)]
    pub function: Option<String>,
    #[serde(default)]
    pub signature: Option<String>,
    pub status: ImplStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

impl KernelBinding {
    /// Contract filename without the `.yaml` extension.
    pub fn contract_stem(&self) -> &str {
        self.contract
            .strip_suffix(".yaml")
            .unwrap_or(self.contract.as_str())
    }
}

/// Implementation status of a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImplStatus {
    Implemented,
    Partial,
    NotImplemented,
}

impl std::fmt::Display for ImplStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Implemented => "implemented",
            Self::Partial => "partial",
            Self::NotImplemented => "not_implemented",
        };
        write!(f, "{s}")
    }
}

impl BindingRegistry {
    /// Find the binding for `equation` in the contract with stem `contract_stem`.
    pub fn find(&self, contract_stem: &str, equation: &str) -> Option<&KernelBinding> {
        self.bindings
            .iter()
            .find(|b| b.contract_stem() == contract_stem && b.equation == equation)
    }

    /// Cross-check the registry against parsed contracts, keyed by stem.
    ///
    /// # Errors
    ///
    /// - [`ContractError::DuplicateId`] if an equation is bound twice.
    /// - [`ContractError::InvalidReference`] if a binding names a contract or
    ///   equation that does not exist, or a contract equation has no binding.
    /// - [`ContractError::MissingField`] if an implemented binding names no
    ///   function.
    pub fn check_against(&self, contracts: &[(&str, &Contract)]) -> Result<(), ContractError> {
        let mut seen = HashSet::new();
        for binding in &self.bindings {
            let key = format!("{}.{}", binding.contract_stem(), binding.equation);
            if !seen.insert(key.clone()) {
                return Err(ContractError::DuplicateId {
                    id: key,
                    section: "bindings".to_string(),
                });
            }

            let contract = contracts
                .iter()
                .find(|(stem, _)| *stem == binding.contract_stem())
                .map(|(_, c)| *c)
                .ok_or_else(|| ContractError::InvalidReference {
                    from: format!("binding {key}"),
                    to: format!("contract {}", binding.contract),
                })?;
            if !contract.equations.contains_key(&binding.equation) {
                return Err(ContractError::InvalidReference {
                    from: format!("binding {key}"),
                    to: format!("equation {}", binding.equation),
                });
            }

            if binding.status == ImplStatus::Implemented && binding.function.is_none() {
                return Err(ContractError::MissingField {
                    section: format!("bindings.{key}"),
                    field: "function".to_string(),
                });
            }
        }

        for (stem, contract) in contracts {
            for equation in contract.equations.keys() {
                if self.find(stem, equation).is_none() {
                    return Err(ContractError::InvalidReference {
                        from: format!("contract {stem}.{equation}"),
                        to: "binding".to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Parse a binding registry YAML file.
///
/// # Errors
///
/// Returns [`ContractError::Io`] if the file cannot be read,
/// or [`ContractError::Yaml`] if the YAML is malformed.
pub fn parse_binding(path: &Path) -> Result<BindingRegistry, ContractError> {
    let content = std::fs::read_to_string(path)?;
    parse_binding_str(&content)
}

/// Parse a binding registry from a YAML string.
///
/// # Errors
///
/// Returns [`ContractError::Yaml`] if the YAML is malformed.
pub fn parse_binding_str(yaml: &str) -> Result<BindingRegistry, ContractError> {
    let registry: BindingRegistry = serde_yaml::from_str(yaml)?;
    Ok(registry)
}
