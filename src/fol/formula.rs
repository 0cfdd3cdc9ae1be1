//! First-order formulas
//!
//! The formula tree is immutable: every transformation pass builds a new
//! tree and leaves its input untouched.

use super::term::Term;
use serde::{Deserialize, Serialize};

/// Quantifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quantifier {
    Forall,
    Exists,
}

/// First-order formula
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Formula {
    /// Predicate applied to zero or more terms
    Predicate(String, Vec<Term>),
    /// Equality between two terms
    Equal(Term, Term),
    /// Inequality between two terms
    NotEqual(Term, Term),
    /// Negation
    Not(Box<Formula>),
    /// Conjunction
    And(Box<Formula>, Box<Formula>),
    /// Disjunction
    Or(Box<Formula>, Box<Formula>),
    /// Implication
    Implies(Box<Formula>, Box<Formula>),
    /// Biconditional
    Iff(Box<Formula>, Box<Formula>),
    /// Quantified formula
    Quantified(Quantifier, String, Box<Formula>),
}

impl Formula {
    /// Check if the formula is atomic: a predicate, equality, or inequality.
    pub fn is_atom(&self) -> bool {
        matches!(
            self,
            Formula::Predicate(_, _) | Formula::Equal(_, _) | Formula::NotEqual(_, _)
        )
    }

    /// Check if the formula contains any quantifiers
    pub fn has_quantifier(&self) -> bool {
        match self {
            Formula::Predicate(_, _) | Formula::Equal(_, _) | Formula::NotEqual(_, _) => false,
            Formula::Not(sub) => sub.has_quantifier(),
            Formula::And(f1, f2)
            | Formula::Or(f1, f2)
            | Formula::Implies(f1, f2)
            | Formula::Iff(f1, f2) => f1.has_quantifier() || f2.has_quantifier(),
            Formula::Quantified(_, _, _) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_quantifier() {
        let p = Formula::Predicate("P".to_string(), vec![Term::Symbol("x".to_string())]);
        assert!(!p.has_quantifier());

        let quantified = Formula::Quantified(
            Quantifier::Forall,
            "x".to_string(),
            Box::new(p.clone()),
        );
        assert!(quantified.has_quantifier());

        let buried = Formula::And(
            Box::new(p),
            Box::new(Formula::Not(Box::new(quantified))),
        );
        assert!(buried.has_quantifier());
    }
}
