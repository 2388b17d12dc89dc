use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A complete YAML fixture-kernel contract.
///
/// Root type of the files under `contracts/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    pub metadata: Metadata,
    #[serde(default)]
    pub fixture: Option<FixtureSection>,
    pub equations: BTreeMap<String, Equation>,
    #[serde(default)]
    pub proof_obligations: Vec<ProofObligation>,
    #[serde(default)]
    pub kernel_structure: Option<KernelStructure>,
    #[serde(default)]
    pub simd_dispatch: BTreeMap<String, BTreeMap<String, String>>,
    #[serde(default)]
    pub falsification_tests: Vec<FalsificationTest>,
    #[serde(default)]
    pub kani_harnesses: Vec<KaniHarness>,
    #[serde(default)]
    pub qa_gate: Option<QaGate>,
}

/// Contract metadata block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub version: String,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    pub description: String,
    #[serde(default)]
    pub references: Vec<String>,
}

/// Shape of the loop a fixture presents to the scheduling analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSection {
    /// Name the analysis tool knows the fixture by.
    pub name: String,
    pub trip_count: usize,
    /// Number of input arrays.
    pub arity: usize,
    /// Half-open `[low, high)` range the harness draws inputs from.
    #[serde(default)]
    pub input_range: Option<[i32; 2]>,
    /// Whether the analysis is expected to find a pipelined schedule.
    #[serde(default)]
    pub expected_pipelining: bool,
}

/// The equation a kernel implements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Equation {
    pub formula: String,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub codomain: Option<String>,
    #[serde(default)]
    pub invariants: Vec<String>,
}

/// A proof obligation derived from an equation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofObligation {
    #[serde(rename = "type")]
    pub obligation_type: ObligationType,
    pub property: String,
    #[serde(default)]
    pub formal: Option<String>,
    #[serde(default)]
    pub applies_to: Option<AppliesTo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObligationType {
    Invariant,
    Equivalence,
    Bound,
    Linearity,
    Symmetry,
    Associativity,
    Completeness,
}

impl std::fmt::Display for ObligationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Invariant => "invariant",
            Self::Equivalence => "equivalence",
            Self::Bound => "bound",
            Self::Linearity => "linearity",
            Self::Symmetry => "symmetry",
            Self::Associativity => "associativity",
            Self::Completeness => "completeness",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppliesTo {
    All,
    Scalar,
    Simd,
}

/// Kernel phase decomposition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KernelStructure {
    pub phases: Vec<KernelPhase>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KernelPhase {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub invariant: Option<String>,
}

/// A falsification test: a prediction that fails loudly when the kernel is wrong.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FalsificationTest {
    pub id: String,
    pub rule: String,
    pub prediction: String,
    #[serde(default)]
    pub test: Option<String>,
    pub if_fails: String,
}

/// A Kani bounded model checking harness definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KaniHarness {
    pub id: String,
    pub obligation: String,
    #[serde(default)]
    pub property: Option<String>,
    #[serde(default)]
    pub bound: Option<u32>,
    #[serde(default)]
    pub strategy: Option<KaniStrategy>,
    #[serde(default)]
    pub harness: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KaniStrategy {
    Exhaustive,
    Compositional,
    BoundedInt,
}

impl std::fmt::Display for KaniStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Exhaustive => "exhaustive",
            Self::Compositional => "compositional",
            Self::BoundedInt => "bounded_int",
        };
        write!(f, "{s}")
    }
}

/// QA gate a contract must pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaGate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub checks: Vec<String>,
    #[serde(default)]
    pub pass_criteria: Option<String>,
    #[serde(default)]
    pub falsification: Option<String>,
}
