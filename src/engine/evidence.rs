//! Evidence assignments and posterior distributions.
//!
//! An [`Assignment`] maps variables to observed or hypothesized boolean
//! values. Assignments are transient, per-query values owned by the caller;
//! the enumeration recursion never mutates one in place, it extends a copy
//! per branch via [`Assignment::with`] so sibling branches stay independent.

use std::ops::Index;

use rustc_hash::FxHashMap;

use crate::engine::errors::InferenceError;
use crate::engine::network::{Network, VarId};

/// A partial or complete mapping from variables to boolean values.
///
/// Ids are interpreted against whichever [`Network`] the assignment is used
/// with; building via [`Assignment::from_pairs`] validates the names up
/// front.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assignment {
    values: FxHashMap<VarId, bool>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an assignment from name/value pairs resolved against `network`.
    ///
    /// Fails with [`InferenceError::UnknownVariable`] on the first name the
    /// network does not declare.
    pub fn from_pairs<'a>(
        network: &Network,
        pairs: impl IntoIterator<Item = (&'a str, bool)>,
    ) -> Result<Self, InferenceError> {
        let mut assignment = Self::new();
        for (name, value) in pairs {
            assignment.set(network.resolve(name)?, value);
        }
        Ok(assignment)
    }

    pub fn set(&mut self, id: VarId, value: bool) {
        self.values.insert(id, value);
    }

    pub fn get(&self, id: VarId) -> Option<bool> {
        self.values.get(&id).copied()
    }

    pub fn contains(&self, id: VarId) -> bool {
        self.values.contains_key(&id)
    }

    /// Returns a copy extended with `id = value`, leaving `self` untouched.
    pub fn with(&self, id: VarId, value: bool) -> Self {
        let mut extended = self.clone();
        extended.set(id, value);
        extended
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A posterior over the two values of a boolean query variable.
///
/// For any successful query `p_true + p_false == 1.0` within floating-point
/// tolerance, except for the degenerate zero-probability-evidence case where
/// both components are exactly `0.0` ([`Distribution::ZERO`]). The zero case
/// distinguishes "impossible evidence" from failure; it is not an error.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Distribution {
    #[serde(rename = "true")]
    pub p_true: f64,
    #[serde(rename = "false")]
    pub p_false: f64,
}

impl Distribution {
    /// The degenerate distribution returned for zero-probability evidence.
    pub const ZERO: Self = Self {
        p_true: 0.0,
        p_false: 0.0,
    };

    pub fn total(&self) -> f64 {
        self.p_true + self.p_false
    }

    /// True when the evidence had zero probability under the model.
    pub fn is_zero(&self) -> bool {
        self.p_true == 0.0 && self.p_false == 0.0
    }
}

impl Index<bool> for Distribution {
    type Output = f64;

    fn index(&self, value: bool) -> &f64 {
        if value {
            &self.p_true
        } else {
            &self.p_false
        }
    }
}
