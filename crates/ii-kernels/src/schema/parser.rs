use std::path::Path;

use crate::error::ContractError;
use crate::schema::types::Contract;

/// Parse a YAML contract file into a [`Contract`] struct.
///
/// # Errors
///
/// Returns [`ContractError::Io`] if the file cannot be read,
/// or [`ContractError::Yaml`] if the YAML is malformed.
pub fn parse_contract(path: &Path) -> Result<Contract, ContractError> {
    let content = std::fs::read_to_string(path)?;
    parse_contract_str(&content)
}

/// Parse a YAML contract from a string.
///
/// # Errors
///
/// Returns [`ContractError::Yaml`] if the YAML is malformed or misses a
/// required section.
pub fn parse_contract_str(yaml: &str) -> Result<Contract, ContractError> {
    let contract: Contract = serde_yaml::from_str(yaml)?;
    Ok(contract)
}
