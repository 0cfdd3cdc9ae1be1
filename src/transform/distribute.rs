//! CNF and DNF matrix construction by structural distribution.
//!
//! No simplification is performed: duplicate literals stay, tautologies
//! stay, and the result can be exponentially larger than the input.

use crate::fol::Formula;

/// Distribute Or over And until no Or node has an And operand.
pub fn to_cnf(matrix: &Formula) -> Formula {
    match matrix {
        Formula::And(left, right) => {
            Formula::And(Box::new(to_cnf(left)), Box::new(to_cnf(right)))
        }
        Formula::Or(left, right) => distribute_or(to_cnf(left), to_cnf(right)),
        Formula::Not(_)
        | Formula::Predicate(_, _)
        | Formula::Equal(_, _)
        | Formula::NotEqual(_, _)
        | Formula::Implies(_, _)
        | Formula::Iff(_, _)
        | Formula::Quantified(_, _, _) => matrix.clone(),
    }
}

/// `a ∨ (b ∧ c)` becomes `(a ∨ b) ∧ (a ∨ c)`; the right operand is examined
/// first, then the symmetric case.
fn distribute_or(left: Formula, right: Formula) -> Formula {
    if let Formula::And(right_left, right_right) = right {
        return Formula::And(
            Box::new(distribute_or(left.clone(), *right_left)),
            Box::new(distribute_or(left, *right_right)),
        );
    }
    if let Formula::And(left_left, left_right) = left {
        return Formula::And(
            Box::new(distribute_or(*left_left, right.clone())),
            Box::new(distribute_or(*left_right, right)),
        );
    }
    Formula::Or(Box::new(left), Box::new(right))
}

/// Distribute And over Or until no And node has an Or operand; the exact
/// dual of [`to_cnf`].
pub fn to_dnf(matrix: &Formula) -> Formula {
    match matrix {
        Formula::Or(left, right) => Formula::Or(Box::new(to_dnf(left)), Box::new(to_dnf(right))),
        Formula::And(left, right) => distribute_and(to_dnf(left), to_dnf(right)),
        Formula::Not(_)
        | Formula::Predicate(_, _)
        | Formula::Equal(_, _)
        | Formula::NotEqual(_, _)
        | Formula::Implies(_, _)
        | Formula::Iff(_, _)
        | Formula::Quantified(_, _, _) => matrix.clone(),
    }
}

fn distribute_and(left: Formula, right: Formula) -> Formula {
    if let Formula::Or(right_left, right_right) = right {
        return Formula::Or(
            Box::new(distribute_and(left.clone(), *right_left)),
            Box::new(distribute_and(left, *right_right)),
        );
    }
    if let Formula::Or(left_left, left_right) = left {
        return Formula::Or(
            Box::new(distribute_and(*left_left, right.clone())),
            Box::new(distribute_and(*left_right, right)),
        );
    }
    Formula::And(Box::new(left), Box::new(right))
}
