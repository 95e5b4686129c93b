//! Error types for network construction and inference.

use thiserror::Error;

/// Errors that can occur while constructing a network or answering a query.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in the future without breaking changes.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum InferenceError {
    /// A referenced variable name does not exist in the network.
    ///
    /// Raised for malformed evidence, an invalid query variable, or a lookup
    /// of a name the network never declared.
    #[error("unknown variable '{name}'")]
    UnknownVariable { name: String },

    /// A variable name was declared more than once.
    #[error("duplicate variable '{name}'")]
    DuplicateVariable { name: String },

    /// A declared parent is absent from the network's variable set.
    #[error("variable '{variable}' declares unknown parent '{parent}'")]
    UnknownParent { variable: String, parent: String },

    /// The parent graph admits no topological order.
    #[error("parent graph contains a cycle through '{variable}'")]
    CyclicGraph { variable: String },

    /// A CPT's row count does not match its variable's parent count.
    ///
    /// A table over `k` boolean parents needs exactly `2^k` rows.
    #[error(
        "variable '{variable}' has {rows} CPT rows but {parents} parents require {expected}"
    )]
    CptArityMismatch {
        variable: String,
        parents: usize,
        rows: usize,
        expected: usize,
    },

    /// A CPT row is outside `[0, 1]` or not finite.
    #[error("variable '{variable}' CPT row {row} is {value}, not a probability in [0, 1]")]
    InvalidProbability {
        variable: String,
        row: usize,
        value: f64,
    },

    /// The query variable is already fixed by the evidence.
    #[error("query variable '{name}' is already fixed by the evidence")]
    QueryInEvidence { name: String },

    /// A parent value was absent from the assignment during CPT evaluation.
    ///
    /// With a topological traversal every parent is assigned before its
    /// children are evaluated, so this indicates an enumeration-order bug in
    /// the caller, not a user input error.
    #[error("internal error: no value for parent '{parent}' of '{variable}'")]
    MissingParentValue { variable: String, parent: String },

    /// A joint-probability computation received a partial assignment.
    #[error("assignment is missing a value for '{variable}'")]
    IncompleteAssignment { variable: String },

    /// Malformed evidence text.
    #[error("parse error: {0}")]
    Parse(String),
}
