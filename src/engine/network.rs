//! # Boolean Bayesian Network Model
//!
//! This module holds the fixed description of a joint distribution's
//! factorization: a set of named boolean variables, each with an ordered
//! parent list and a conditional probability table (CPT).
//!
//! ## Key Components
//!
//! - **Cpt**: dense truth table giving `P(variable = true | parents)` for
//!   every assignment of the declared parents
//! - **NetworkBuilder**: declaration-order builder that validates names,
//!   parent references, CPT shape, and acyclicity
//! - **Network**: immutable, validated network with a precomputed
//!   topological order and O(1) name lookups via a hash index
//!
//! A `Network` is constructed once and never mutated afterwards; all query
//! state lives in [`Assignment`](crate::engine::evidence::Assignment) values
//! owned by the caller, so a shared `&Network` is safe to query from many
//! threads at once.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::engine::errors::InferenceError;

/// A unique identifier for a variable in the network.
///
/// Ids are dense indexes into the network's variable table, assigned in
/// declaration order.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct VarId(pub u32);

impl VarId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// A conditional probability table over a variable's boolean parents.
///
/// The table stores `P(variable = true | parents)` for every combination of
/// parent values: `2^k` rows for `k` parents. The row index is a bitmask over
/// the parents in declaration order, bit `i` set when parent `i` is true, so
/// for parents `[Sprinkler, Rain]` row `0b10` is the "Rain only" case.
///
/// Rows may be exactly `0.0` or `1.0`; deterministic entries make some
/// evidence combinations impossible, which the engine reports as a
/// zero distribution rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Cpt {
    rows: Vec<f64>,
}

impl Cpt {
    /// A table for a variable with no parents: a single prior probability.
    pub fn prior(p_true: f64) -> Self {
        Self {
            rows: vec![p_true],
        }
    }

    /// A table from explicit rows, indexed by the parent-value bitmask.
    ///
    /// Row count and row values are validated when the network is built.
    pub fn from_rows(rows: impl Into<Vec<f64>>) -> Self {
        Self { rows: rows.into() }
    }

    /// All rows in bitmask order.
    pub fn rows(&self) -> &[f64] {
        &self.rows
    }

    /// Looks up `P(variable = true | parents)`.
    ///
    /// `parent_values` must hold one value per declared parent, in
    /// declaration order.
    pub fn p_true(&self, parent_values: &[bool]) -> f64 {
        let mut row = 0usize;
        for (bit, &value) in parent_values.iter().enumerate() {
            if value {
                row |= 1 << bit;
            }
        }
        self.rows[row]
    }
}

/// A boolean random variable: name, ordered parents, and CPT.
#[derive(Debug, Clone)]
pub struct Variable {
    pub id: VarId,
    pub name: Arc<str>,
    pub parents: SmallVec<[VarId; 2]>,
    pub cpt: Cpt,
}

#[derive(Debug)]
struct Declaration {
    name: String,
    parents: Vec<String>,
    cpt: Cpt,
}

/// Builder collecting variable declarations before validation.
///
/// Declarations may arrive in any order; `build` resolves parent names,
/// checks CPT shapes, and computes a topological order (or fails with
/// [`InferenceError::CyclicGraph`] when none exists).
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    declarations: Vec<Declaration>,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a variable with its parents (in CPT bit order) and table.
    pub fn variable(mut self, name: impl Into<String>, parents: &[&str], cpt: Cpt) -> Self {
        self.declarations.push(Declaration {
            name: name.into(),
            parents: parents.iter().map(|p| (*p).to_string()).collect(),
            cpt,
        });
        self
    }

    /// Validates the declarations and produces an immutable [`Network`].
    pub fn build(self) -> Result<Network, InferenceError> {
        let mut index: FxHashMap<Arc<str>, VarId> = FxHashMap::default();
        let mut names: Vec<Arc<str>> = Vec::with_capacity(self.declarations.len());
        for (i, declaration) in self.declarations.iter().enumerate() {
            let name: Arc<str> = Arc::from(declaration.name.as_str());
            if index.insert(name.clone(), VarId(i as u32)).is_some() {
                return Err(InferenceError::DuplicateVariable {
                    name: declaration.name.clone(),
                });
            }
            names.push(name);
        }

        let mut variables = Vec::with_capacity(self.declarations.len());
        for (i, declaration) in self.declarations.iter().enumerate() {
            let mut parents: SmallVec<[VarId; 2]> = SmallVec::new();
            for parent in &declaration.parents {
                let id = index.get(parent.as_str()).copied().ok_or_else(|| {
                    InferenceError::UnknownParent {
                        variable: declaration.name.clone(),
                        parent: parent.clone(),
                    }
                })?;
                parents.push(id);
            }

            let expected = 1usize << parents.len();
            let rows = declaration.cpt.rows();
            if rows.len() != expected {
                return Err(InferenceError::CptArityMismatch {
                    variable: declaration.name.clone(),
                    parents: parents.len(),
                    rows: rows.len(),
                    expected,
                });
            }
            for (row, &value) in rows.iter().enumerate() {
                if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                    return Err(InferenceError::InvalidProbability {
                        variable: declaration.name.clone(),
                        row,
                        value,
                    });
                }
            }

            variables.push(Variable {
                id: VarId(i as u32),
                name: names[i].clone(),
                parents,
                cpt: declaration.cpt.clone(),
            });
        }

        let topological = topological_order(&variables)?;
        Ok(Network {
            variables,
            index,
            topological,
        })
    }
}

/// Kahn's algorithm over parent -> child edges.
///
/// Ties are broken by declaration order, so declaring variables parents-first
/// yields the declaration order itself.
fn topological_order(variables: &[Variable]) -> Result<Vec<VarId>, InferenceError> {
    let mut remaining_parents: Vec<usize> = variables.iter().map(|v| v.parents.len()).collect();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); variables.len()];
    for variable in variables {
        for &parent in &variable.parents {
            children[parent.index()].push(variable.id.index());
        }
    }

    let mut ready: Vec<usize> = (0..variables.len())
        .filter(|&i| remaining_parents[i] == 0)
        .collect();
    let mut order = Vec::with_capacity(variables.len());
    let mut cursor = 0;
    while cursor < ready.len() {
        let current = ready[cursor];
        cursor += 1;
        order.push(VarId(current as u32));
        for &child in &children[current] {
            remaining_parents[child] -= 1;
            if remaining_parents[child] == 0 {
                ready.push(child);
            }
        }
    }

    if order.len() != variables.len() {
        let variable = variables
            .iter()
            .find(|v| remaining_parents[v.id.index()] > 0)
            .map(|v| v.name.to_string())
            .unwrap_or_default();
        return Err(InferenceError::CyclicGraph { variable });
    }
    Ok(order)
}

/// A validated, immutable boolean Bayesian network.
#[derive(Debug, Clone)]
pub struct Network {
    variables: Vec<Variable>,
    index: FxHashMap<Arc<str>, VarId>,
    topological: Vec<VarId>,
}

impl Network {
    pub fn builder() -> NetworkBuilder {
        NetworkBuilder::new()
    }

    /// Resolves a variable name to its id.
    pub fn resolve(&self, name: &str) -> Result<VarId, InferenceError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| InferenceError::UnknownVariable {
                name: name.to_string(),
            })
    }

    /// The variable for an id, if the id belongs to this network.
    pub fn variable(&self, id: VarId) -> Option<&Variable> {
        self.variables.get(id.index())
    }

    /// All variables in declaration order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// The names of a variable's parents, in CPT bit order.
    pub fn parents_of(&self, name: &str) -> Result<Vec<&str>, InferenceError> {
        let id = self.resolve(name)?;
        Ok(self.variables[id.index()]
            .parents
            .iter()
            .map(|&parent| self.variables[parent.index()].name.as_ref())
            .collect())
    }

    /// A variable's conditional probability table.
    pub fn cpt(&self, name: &str) -> Result<&Cpt, InferenceError> {
        let id = self.resolve(name)?;
        Ok(&self.variables[id.index()].cpt)
    }

    /// Variable ids with every variable after all of its parents.
    pub fn topological_order(&self) -> &[VarId] {
        &self.topological
    }

    /// Variable names in topological order.
    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        self.topological
            .iter()
            .map(|&id| self.variables[id.index()].name.as_ref())
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
