//! Negation normal form.

use crate::fol::{Formula, Quantifier};

/// Push negations inward until each sits directly on an atom.
///
/// De Morgan over `And`/`Or`, quantifier duality over binders, and double
/// negations collapse without re-wrapping. Expects implications and
/// biconditionals to be already eliminated; any left over pass through
/// untouched.
pub fn to_nnf(formula: &Formula) -> Formula {
    match formula {
        Formula::Not(sub) => negate(sub),
        Formula::And(left, right) => {
            Formula::And(Box::new(to_nnf(left)), Box::new(to_nnf(right)))
        }
        Formula::Or(left, right) => Formula::Or(Box::new(to_nnf(left)), Box::new(to_nnf(right))),
        Formula::Quantified(q, var, body) => {
            Formula::Quantified(*q, var.clone(), Box::new(to_nnf(body)))
        }
        Formula::Predicate(_, _)
        | Formula::Equal(_, _)
        | Formula::NotEqual(_, _)
        | Formula::Implies(_, _)
        | Formula::Iff(_, _) => formula.clone(),
    }
}

/// The negation of `formula`, already pushed inward.
fn negate(formula: &Formula) -> Formula {
    match formula {
        Formula::Not(sub) => to_nnf(sub),
        Formula::And(left, right) => {
            Formula::Or(Box::new(negate(left)), Box::new(negate(right)))
        }
        Formula::Or(left, right) => {
            Formula::And(Box::new(negate(left)), Box::new(negate(right)))
        }
        Formula::Quantified(Quantifier::Forall, var, body) => {
            Formula::Quantified(Quantifier::Exists, var.clone(), Box::new(negate(body)))
        }
        Formula::Quantified(Quantifier::Exists, var, body) => {
            Formula::Quantified(Quantifier::Forall, var.clone(), Box::new(negate(body)))
        }
        Formula::Predicate(_, _) | Formula::Equal(_, _) | Formula::NotEqual(_, _) => {
            Formula::Not(Box::new(formula.clone()))
        }
        Formula::Implies(_, _) | Formula::Iff(_, _) => Formula::Not(Box::new(to_nnf(formula))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_de_morgan_over_and() {
        let formula = parse("\\neg (P \\land Q)").unwrap();
        assert_eq!(to_nnf(&formula), parse("\\neg P \\lor \\neg Q").unwrap());
    }

    #[test]
    fn test_de_morgan_over_or() {
        let formula = parse("\\neg (P \\lor Q)").unwrap();
        assert_eq!(to_nnf(&formula), parse("\\neg P \\land \\neg Q").unwrap());
    }

    #[test]
    fn test_quantifier_duality() {
        let formula = parse("\\neg \\forall x. P(x)").unwrap();
        assert_eq!(to_nnf(&formula), parse("\\exists x. \\neg P(x)").unwrap());

        let formula = parse("\\neg \\exists x. P(x)").unwrap();
        assert_eq!(to_nnf(&formula), parse("\\forall x. \\neg P(x)").unwrap());
    }

    #[test]
    fn test_double_negation_collapses() {
        let formula = parse("\\neg \\neg P").unwrap();
        assert_eq!(to_nnf(&formula), parse("P").unwrap());

        let formula = parse("\\neg \\neg \\neg P").unwrap();
        assert_eq!(to_nnf(&formula), parse("\\neg P").unwrap());
    }

    #[test]
    fn test_negated_atom_is_kept() {
        let formula = parse("\\neg (x = y)").unwrap();
        assert_eq!(to_nnf(&formula), formula);
    }
}
