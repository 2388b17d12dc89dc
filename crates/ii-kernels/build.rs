//! Exports `CONTRACT_<STEM>_<EQUATION>=bound` for every implemented binding in
//! `contracts/binding.yaml`, which `#[contract]` reads with `env!()`.
//!
//! Any binding that is not `implemented` fails the build.

use std::path::Path;

use serde_yaml::Value;

const BINDING_YAML: &str = "../../contracts/binding.yaml";

fn main() {
    println!("cargo:rerun-if-changed={BINDING_YAML}");
    println!("cargo:rerun-if-changed=../../contracts");

    let path = Path::new(BINDING_YAML);
    let content = std::fs::read_to_string(path).unwrap_or_else(|e| {
        panic!(
            "CONTRACT BUILD ERROR: Cannot read binding YAML at '{}': {e}",
            path.display()
        )
    });
    let registry: Value = serde_yaml::from_str(&content).unwrap_or_else(|e| {
        panic!(
            "CONTRACT BUILD ERROR: Cannot parse binding YAML at '{}': {e}",
            path.display()
        )
    });

    let bindings = registry
        .get("bindings")
        .and_then(Value::as_sequence)
        .map(Vec::as_slice)
        .unwrap_or_default();

    for binding in bindings {
        let field = |name: &str| {
            binding
                .get(name)
                .and_then(Value::as_str)
                .unwrap_or_else(|| panic!("CONTRACT BUILD ERROR: binding without `{name}`"))
        };
        let contract = field("contract");
        let equation = field("equation");
        let status = field("status");
        if status != "implemented" {
            panic!(
                "CONTRACT BUILD ERROR: Binding {contract}.{equation} has status '{status}'. \
                 Every fixture kernel must be implemented."
            );
        }
        let stem = contract.strip_suffix(".yaml").unwrap_or(contract);
        println!("cargo:rustc-env={}=bound", make_env_key(stem, equation));
    }
}

/// Same convention as `ii-kernels-macros::make_env_key`.
fn make_env_key(stem: &str, equation: &str) -> String {
    let upper = |s: &str| s.to_uppercase().replace(['-', '.'], "_");
    format!("CONTRACT_{}_{}", upper(stem), upper(equation))
}
