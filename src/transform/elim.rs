//! Elimination of implications and biconditionals.

use crate::fol::Formula;

/// Rewrite `A -> B` as `¬A ∨ B` and `A <-> B` as `(¬A ∨ B) ∧ (¬B ∨ A)`,
/// bottom-up. The result contains no `Implies` or `Iff` node.
pub fn eliminate_imp_iff(formula: &Formula) -> Formula {
    match formula {
        Formula::Iff(left, right) => {
            let a = eliminate_imp_iff(left);
            let b = eliminate_imp_iff(right);
            Formula::And(
                Box::new(Formula::Or(
                    Box::new(Formula::Not(Box::new(a.clone()))),
                    Box::new(b.clone()),
                )),
                Box::new(Formula::Or(Box::new(Formula::Not(Box::new(b))), Box::new(a))),
            )
        }
        Formula::Implies(left, right) => {
            let a = eliminate_imp_iff(left);
            let b = eliminate_imp_iff(right);
            Formula::Or(Box::new(Formula::Not(Box::new(a))), Box::new(b))
        }
        Formula::Not(sub) => Formula::Not(Box::new(eliminate_imp_iff(sub))),
        Formula::And(left, right) => Formula::And(
            Box::new(eliminate_imp_iff(left)),
            Box::new(eliminate_imp_iff(right)),
        ),
        Formula::Or(left, right) => Formula::Or(
            Box::new(eliminate_imp_iff(left)),
            Box::new(eliminate_imp_iff(right)),
        ),
        Formula::Quantified(q, var, body) => {
            Formula::Quantified(*q, var.clone(), Box::new(eliminate_imp_iff(body)))
        }
        Formula::Predicate(_, _) | Formula::Equal(_, _) | Formula::NotEqual(_, _) => {
            formula.clone()
        }
    }
}
