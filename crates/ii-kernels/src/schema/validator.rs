use std::collections::HashSet;

use crate::error::{Severity, Violation};
use crate::kernels::TRIP_COUNT;
use crate::schema::types::Contract;

/// Validate a parsed contract for completeness and consistency.
///
/// Returns a list of violations. If any violation has
/// [`Severity::Error`], the contract is considered invalid.
pub fn validate_contract(contract: &Contract) -> Vec<Violation> {
    let mut violations = Vec::new();

    validate_metadata(contract, &mut violations);
    validate_fixture(contract, &mut violations);
    validate_equations(contract, &mut violations);
    validate_proof_obligations(contract, &mut violations);
    validate_falsification_tests(contract, &mut violations);
    validate_kani_harnesses(contract, &mut violations);
    validate_qa_gate(contract, &mut violations);

    violations
}

fn violation(severity: Severity, rule: &str, message: String, location: String) -> Violation {
    Violation {
        severity,
        rule: rule.to_string(),
        message,
        location: Some(location),
    }
}

fn validate_metadata(contract: &Contract, violations: &mut Vec<Violation>) {
    if contract.metadata.references.is_empty() {
        violations.push(violation(
            Severity::Error,
            "SCHEMA-001",
            "metadata.references must not be empty; \
             every contract must cite its source(s)"
                .to_string(),
            "metadata.references".to_string(),
        ));
    }

    if contract.metadata.version.is_empty() {
        violations.push(violation(
            Severity::Error,
            "SCHEMA-002",
            "metadata.version must not be empty".to_string(),
            "metadata.version".to_string(),
        ));
    }
}

fn validate_fixture(contract: &Contract, violations: &mut Vec<Violation>) {
    let Some(fixture) = &contract.fixture else {
        violations.push(violation(
            Severity::Warning,
            "SCHEMA-014",
            "No fixture section; the loop shape is undocumented".to_string(),
            "fixture".to_string(),
        ));
        return;
    };

    if fixture.trip_count != TRIP_COUNT {
        violations.push(violation(
            Severity::Error,
            "SCHEMA-015",
            format!(
                "fixture.trip_count is {} but kernels are compiled for {TRIP_COUNT}",
                fixture.trip_count
            ),
            "fixture.trip_count".to_string(),
        ));
    }

    if fixture.arity == 0 {
        violations.push(violation(
            Severity::Error,
            "SCHEMA-016",
            "fixture.arity must be at least 1".to_string(),
            "fixture.arity".to_string(),
        ));
    }

    if let Some([low, high]) = fixture.input_range {
        if low >= high {
            violations.push(violation(
                Severity::Error,
                "SCHEMA-017",
                format!("fixture.input_range [{low}, {high}) is empty"),
                "fixture.input_range".to_string(),
            ));
        }
    }
}

fn validate_equations(contract: &Contract, violations: &mut Vec<Violation>) {
    if contract.equations.is_empty() {
        violations.push(violation(
            Severity::Error,
            "SCHEMA-003",
            "equations must contain at least one equation".to_string(),
            "equations".to_string(),
        ));
    }

    for (name, eq) in &contract.equations {
        if eq.formula.is_empty() {
            violations.push(violation(
                Severity::Error,
                "SCHEMA-004",
                format!("equations.{name}.formula must not be empty"),
                format!("equations.{name}.formula"),
            ));
        }
    }
}

fn validate_proof_obligations(contract: &Contract, violations: &mut Vec<Violation>) {
    let mut seen_formal = HashSet::new();
    for (i, ob) in contract.proof_obligations.iter().enumerate() {
        if ob.property.is_empty() {
            violations.push(violation(
                Severity::Error,
                "SCHEMA-005",
                format!("proof_obligations[{i}].property must not be empty"),
                format!("proof_obligations[{i}].property"),
            ));
        }
        if let Some(formal) = &ob.formal {
            if !seen_formal.insert(formal.as_str()) {
                violations.push(violation(
                    Severity::Warning,
                    "SCHEMA-006",
                    format!("Duplicate formal predicate: {formal}"),
                    format!("proof_obligations[{i}].formal"),
                ));
            }
        }
    }
}

fn validate_falsification_tests(contract: &Contract, violations: &mut Vec<Violation>) {
    let mut ids = HashSet::new();
    for test in &contract.falsification_tests {
        if !ids.insert(&test.id) {
            violations.push(violation(
                Severity::Error,
                "SCHEMA-007",
                format!("Duplicate falsification test ID: {}", test.id),
                format!("falsification_tests.{}", test.id),
            ));
        }
        if test.prediction.is_empty() {
            violations.push(violation(
                Severity::Error,
                "SCHEMA-008",
                format!(
                    "falsification_tests.{}.prediction must not be empty; \
                     every test must make a falsifiable prediction",
                    test.id
                ),
                format!("falsification_tests.{}.prediction", test.id),
            ));
        }
        if test.if_fails.is_empty() {
            violations.push(violation(
                Severity::Warning,
                "SCHEMA-009",
                format!(
                    "falsification_tests.{}.if_fails is empty; \
                     should describe root cause diagnosis",
                    test.id
                ),
                format!("falsification_tests.{}.if_fails", test.id),
            ));
        }
    }
}

fn validate_kani_harnesses(contract: &Contract, violations: &mut Vec<Violation>) {
    let mut ids = HashSet::new();
    for harness in &contract.kani_harnesses {
        if !ids.insert(&harness.id) {
            violations.push(violation(
                Severity::Error,
                "SCHEMA-010",
                format!("Duplicate Kani harness ID: {}", harness.id),
                format!("kani_harnesses.{}", harness.id),
            ));
        }
        if harness.obligation.is_empty() {
            violations.push(violation(
                Severity::Error,
                "SCHEMA-011",
                format!(
                    "kani_harnesses.{}.obligation must not be empty; \
                     every harness must reference a proof obligation",
                    harness.id
                ),
                format!("kani_harnesses.{}.obligation", harness.id),
            ));
        }
        if harness.bound.is_none() {
            violations.push(violation(
                Severity::Warning,
                "SCHEMA-012",
                format!(
                    "kani_harnesses.{}.bound not specified; \
                     Kani requires an unwind bound",
                    harness.id
                ),
                format!("kani_harnesses.{}.bound", harness.id),
            ));
        }
    }
}

fn validate_qa_gate(contract: &Contract, violations: &mut Vec<Violation>) {
    if contract.qa_gate.is_none() {
        violations.push(violation(
            Severity::Warning,
            "SCHEMA-013",
            "No qa_gate defined; contract should define a quality gate".to_string(),
            "qa_gate".to_string(),
        ));
    }
}
