//! # Bayenum - Exact Enumeration Inference
//!
//! Bayenum answers exact conditional queries `P(query | evidence)` over small
//! Bayesian networks of boolean random variables, using the classic
//! enumeration algorithm: recursive marginalization over every unobserved
//! variable, exploiting the chain-rule factorization
//! `P(x1, ..., xn) = Π P(xi | parents(xi))`.
//!
//! ## Architecture
//!
//! - **engine::network**: the network model - named boolean variables, each
//!   with an ordered parent list and a conditional probability table,
//!   validated and topologically ordered at construction
//! - **engine::evidence**: transient query state - partial/complete variable
//!   assignments and the two-valued posterior distribution
//! - **engine::enumerate**: the inference operations themselves
//! - **frontend**: parsing of user-facing evidence strings for the CLI
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bayenum::{ask, Cpt, Network};
//!
//! let network = Network::builder()
//!     .variable("Rain", &[], Cpt::prior(0.2))
//!     .variable("WetGrass", &["Rain"], Cpt::from_rows([0.1, 0.9]))
//!     .build()?;
//!
//! let posterior = ask(&network, "Rain", &[("WetGrass", true)])?;
//! println!("P(Rain | WetGrass) = {:.4}", posterior.p_true);
//! ```
//!
//! Enumeration is exponential in the number of unobserved variables, so the
//! crate targets small networks; there is deliberately no variable
//! elimination or sampling.

#![forbid(unsafe_code)]

pub mod engine;
pub mod frontend;

// Re-export commonly used types
pub use engine::enumerate::{enumerate_all, enumeration_ask, joint_probability, probability_of};
pub use engine::errors::InferenceError;
pub use engine::evidence::{Assignment, Distribution};
pub use engine::network::{Cpt, Network, NetworkBuilder, VarId, Variable};

/// Answers `P(query | evidence)` from name/value evidence pairs.
///
/// This is a convenience wrapper that resolves the evidence names against the
/// network and runs [`enumeration_ask`]. Unknown names in either the query or
/// the evidence fail with [`InferenceError::UnknownVariable`].
pub fn ask(
    network: &Network,
    query: &str,
    evidence: &[(&str, bool)],
) -> Result<Distribution, InferenceError> {
    let assignment = Assignment::from_pairs(network, evidence.iter().copied())?;
    enumeration_ask(network, query, &assignment)
}
