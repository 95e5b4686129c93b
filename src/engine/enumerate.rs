//! Exact inference by recursive enumeration.
//!
//! The engine brute-forces the marginal of the evidence by summing the joint
//! over every assignment of the unobserved variables, using the chain-rule
//! factorization `P(x1, ..., xn) = Π P(xi | parents(xi))`. Traversing the
//! variables in the network's topological order guarantees every parent is
//! assigned before any child's CPT is evaluated.
//!
//! All operations are pure: nothing is cached, no argument is mutated, and a
//! shared `&Network` may serve concurrent queries. Cost is O(2^k) in the
//! number of unobserved variables.

use smallvec::SmallVec;

use crate::engine::errors::InferenceError;
use crate::engine::evidence::{Assignment, Distribution};
use crate::engine::network::{Network, VarId, Variable};

fn lookup(network: &Network, id: VarId) -> Result<&Variable, InferenceError> {
    network
        .variable(id)
        .ok_or_else(|| InferenceError::UnknownVariable {
            name: format!("#{}", id.0),
        })
}

/// Computes `P(variable = value | parents in assignment)`.
///
/// The assignment must already hold a value for every parent of the variable;
/// a missing parent fails with [`InferenceError::MissingParentValue`], which
/// signals an enumeration-order bug rather than bad user input.
pub fn probability_of(
    network: &Network,
    id: VarId,
    value: bool,
    assignment: &Assignment,
) -> Result<f64, InferenceError> {
    let variable = lookup(network, id)?;
    let mut parent_values: SmallVec<[bool; 2]> = SmallVec::with_capacity(variable.parents.len());
    for &parent in &variable.parents {
        match assignment.get(parent) {
            Some(parent_value) => parent_values.push(parent_value),
            None => {
                return Err(InferenceError::MissingParentValue {
                    variable: variable.name.to_string(),
                    parent: lookup(network, parent)?.name.to_string(),
                });
            }
        }
    }

    let p_true = variable.cpt.p_true(&parent_values);
    Ok(if value { p_true } else { 1.0 - p_true })
}

/// Computes the joint probability of a complete assignment.
///
/// Every network variable must be assigned; the product runs in topological
/// order, though it is order-independent mathematically.
pub fn joint_probability(
    network: &Network,
    assignment: &Assignment,
) -> Result<f64, InferenceError> {
    let mut product = 1.0;
    for &id in network.topological_order() {
        let value = match assignment.get(id) {
            Some(value) => value,
            None => {
                return Err(InferenceError::IncompleteAssignment {
                    variable: lookup(network, id)?.name.to_string(),
                });
            }
        };
        product *= probability_of(network, id, value, assignment)?;
    }
    Ok(product)
}

/// Sums out `remaining` variables, returning the marginal probability of the
/// evidence extended over them.
///
/// Variables already fixed in `evidence` contribute their factor directly;
/// unobserved variables are summed over both values, each branch recursing on
/// an extended *copy* of the evidence. `remaining` must order every variable
/// no later than its children - pass the network's topological order when
/// starting from scratch.
pub fn enumerate_all(
    network: &Network,
    remaining: &[VarId],
    evidence: &Assignment,
) -> Result<f64, InferenceError> {
    let Some((&first, rest)) = remaining.split_first() else {
        return Ok(1.0);
    };

    match evidence.get(first) {
        Some(value) => {
            Ok(probability_of(network, first, value, evidence)? * enumerate_all(network, rest, evidence)?)
        }
        None => {
            let mut total = 0.0;
            for value in [true, false] {
                let extended = evidence.with(first, value);
                total += probability_of(network, first, value, &extended)?
                    * enumerate_all(network, rest, &extended)?;
            }
            Ok(total)
        }
    }
}

/// Computes the exact posterior `P(query | evidence)` by enumeration.
///
/// The query must name a network variable not already fixed by the evidence.
/// When the evidence itself has zero probability under the model the result
/// is [`Distribution::ZERO`] rather than a division by zero.
pub fn enumeration_ask(
    network: &Network,
    query: &str,
    evidence: &Assignment,
) -> Result<Distribution, InferenceError> {
    let query_id = network.resolve(query)?;
    if evidence.contains(query_id) {
        return Err(InferenceError::QueryInEvidence {
            name: query.to_string(),
        });
    }

    let order = network.topological_order();
    let unnormalized_true = enumerate_all(network, order, &evidence.with(query_id, true))?;
    let unnormalized_false = enumerate_all(network, order, &evidence.with(query_id, false))?;

    let total = unnormalized_true + unnormalized_false;
    if total == 0.0 {
        return Ok(Distribution::ZERO);
    }
    Ok(Distribution {
        p_true: unnormalized_true / total,
        p_false: unnormalized_false / total,
    })
}
