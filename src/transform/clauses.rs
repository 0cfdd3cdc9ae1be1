//! Clause extraction from a CNF matrix and Horn classification.

use crate::fol::{Atom, Clause, ClauseSet, Formula, Literal};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A node that is not a literal turned up where the CNF invariant promises
/// one. This signals a bug in an upstream pass, not a user input error, and
/// is fatal for the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a literal in CNF position: {node}")]
pub struct ExtractionError {
    node: String,
}

impl ExtractionError {
    fn new(node: &Formula) -> Self {
        ExtractionError {
            node: format!("{:?}", node),
        }
    }
}

/// Flatten a CNF matrix into clauses: And nesting splits clauses, Or
/// nesting splits literals, both in source order.
pub fn clauses_from_cnf(matrix: &Formula) -> Result<ClauseSet, ExtractionError> {
    let mut clauses = Vec::new();
    split_clauses(matrix, &mut clauses)?;
    Ok(ClauseSet::new(clauses))
}

fn split_clauses(node: &Formula, clauses: &mut Vec<Clause>) -> Result<(), ExtractionError> {
    if let Formula::And(left, right) = node {
        split_clauses(left, clauses)?;
        split_clauses(right, clauses)?;
    } else {
        let mut literals = Vec::new();
        split_literals(node, &mut literals)?;
        clauses.push(Clause::new(literals));
    }
    Ok(())
}

fn split_literals(node: &Formula, literals: &mut Vec<Literal>) -> Result<(), ExtractionError> {
    if let Formula::Or(left, right) = node {
        split_literals(left, literals)?;
        split_literals(right, literals)?;
    } else {
        literals.push(to_literal(node)?);
    }
    Ok(())
}

/// Exactly the shapes a correctly built CNF matrix may hold at a literal
/// position.
fn to_literal(node: &Formula) -> Result<Literal, ExtractionError> {
    match node {
        Formula::Predicate(name, args) => Ok(Literal::positive(Atom::Predicate(
            name.clone(),
            args.clone(),
        ))),
        Formula::Equal(left, right) => {
            Ok(Literal::positive(Atom::Equal(left.clone(), right.clone())))
        }
        Formula::NotEqual(left, right) => Ok(Literal::positive(Atom::NotEqual(
            left.clone(),
            right.clone(),
        ))),
        Formula::Not(sub) => match sub.as_ref() {
            Formula::Predicate(name, args) => Ok(Literal::negative(Atom::Predicate(
                name.clone(),
                args.clone(),
            ))),
            Formula::Equal(left, right) => {
                Ok(Literal::negative(Atom::Equal(left.clone(), right.clone())))
            }
            Formula::NotEqual(left, right) => Ok(Literal::negative(Atom::NotEqual(
                left.clone(),
                right.clone(),
            ))),
            _ => Err(ExtractionError::new(node)),
        },
        _ => Err(ExtractionError::new(node)),
    }
}

/// Horn verdict for a clause set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HornReport {
    pub is_horn: bool,
    /// 1-based indices of the clauses with more than one positive literal
    pub violating_indices: Vec<usize>,
}

/// A clause set is Horn when every clause has at most one positive literal.
pub fn horn_report(clauses: &ClauseSet) -> HornReport {
    let violating_indices: Vec<usize> = clauses
        .clauses
        .iter()
        .enumerate()
        .filter(|(_, clause)| clause.positive_count() > 1)
        .map(|(i, _)| i + 1)
        .collect();
    HornReport {
        is_horn: violating_indices.is_empty(),
        violating_indices,
    }
}
