//! Prenex extraction: pull all quantifiers into a leading prefix.

use crate::fol::{Formula, Quantifier};
use serde::{Deserialize, Serialize};

/// One quantifier of a prenex prefix, outermost first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixEntry {
    pub quantifier: Quantifier,
    pub variable: String,
}

/// Split a standardized NNF formula into a quantifier prefix and a
/// quantifier-free matrix.
///
/// Quantifier nodes prepend their entry to the prefix pulled from their
/// body; `And`/`Or` concatenate the left subtree's prefix then the right's
/// and rebuild the connective over the two matrices, so the prefix order is
/// exactly a left-to-right, outer-to-inner traversal.
pub fn to_prenex(formula: &Formula) -> (Vec<PrefixEntry>, Formula) {
    match formula {
        Formula::Quantified(q, var, body) => {
            let (mut prefix, matrix) = to_prenex(body);
            prefix.insert(
                0,
                PrefixEntry {
                    quantifier: *q,
                    variable: var.clone(),
                },
            );
            (prefix, matrix)
        }
        Formula::And(left, right) => {
            let (mut prefix, left_matrix) = to_prenex(left);
            let (right_prefix, right_matrix) = to_prenex(right);
            prefix.extend(right_prefix);
            (
                prefix,
                Formula::And(Box::new(left_matrix), Box::new(right_matrix)),
            )
        }
        Formula::Or(left, right) => {
            let (mut prefix, left_matrix) = to_prenex(left);
            let (right_prefix, right_matrix) = to_prenex(right);
            prefix.extend(right_prefix);
            (
                prefix,
                Formula::Or(Box::new(left_matrix), Box::new(right_matrix)),
            )
        }
        Formula::Not(_)
        | Formula::Predicate(_, _)
        | Formula::Equal(_, _)
        | Formula::NotEqual(_, _)
        | Formula::Implies(_, _)
        | Formula::Iff(_, _) => (Vec::new(), formula.clone()),
    }
}
