//! Skolemization: replace existential variables with witness terms.

use super::prenex::PrefixEntry;
use crate::fol::{Formula, Quantifier, Term};
use serde::{Deserialize, Serialize};

/// One existential variable and the witness term substituted for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkolemEntry {
    pub variable: String,
    pub witness: Term,
}

/// Result of skolemizing a prenex formula: the matrix with every
/// existential variable replaced, the witness mapping in prefix order, and
/// the universal variables left implicitly bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skolemized {
    pub matrix: Formula,
    pub mapping: Vec<SkolemEntry>,
    pub universals: Vec<String>,
}

/// Walk the prefix left to right, accumulating universal variables. Each
/// existential variable gets a fresh `sk_cN` constant (no universals seen
/// yet) or `sk_fN(...)` applied to the universals in encounter order, and
/// that witness replaces the variable throughout the matrix. Universal
/// quantifiers are dropped; their variables stay free in the output.
///
/// The two counters are separate, start at 1, and live only for this call.
pub fn skolemize(prefix: &[PrefixEntry], matrix: &Formula) -> Skolemized {
    let mut universals: Vec<String> = Vec::new();
    let mut mapping = Vec::new();
    let mut result = matrix.clone();
    let mut const_counter = 1usize;
    let mut func_counter = 1usize;

    for entry in prefix {
        match entry.quantifier {
            Quantifier::Forall => universals.push(entry.variable.clone()),
            Quantifier::Exists => {
                let witness = if universals.is_empty() {
                    let name = format!("sk_c{}", const_counter);
                    const_counter += 1;
                    Term::Symbol(name)
                } else {
                    let name = format!("sk_f{}", func_counter);
                    func_counter += 1;
                    Term::Function(
                        name,
                        universals.iter().map(|u| Term::Symbol(u.clone())).collect(),
                    )
                };
                result = substitute_in_formula(&result, &entry.variable, &witness);
                mapping.push(SkolemEntry {
                    variable: entry.variable.clone(),
                    witness,
                });
            }
        }
    }

    Skolemized {
        matrix: result,
        mapping,
        universals,
    }
}

/// Replace every occurrence of `var` with `witness`. A binder over the same
/// name shadows the substitution in its subtree.
fn substitute_in_formula(formula: &Formula, var: &str, witness: &Term) -> Formula {
    match formula {
        Formula::Predicate(name, args) => Formula::Predicate(
            name.clone(),
            args.iter()
                .map(|arg| substitute_in_term(arg, var, witness))
                .collect(),
        ),
        Formula::Equal(left, right) => Formula::Equal(
            substitute_in_term(left, var, witness),
            substitute_in_term(right, var, witness),
        ),
        Formula::NotEqual(left, right) => Formula::NotEqual(
            substitute_in_term(left, var, witness),
            substitute_in_term(right, var, witness),
        ),
        Formula::Not(sub) => Formula::Not(Box::new(substitute_in_formula(sub, var, witness))),
        Formula::And(l, r) => Formula::And(
            Box::new(substitute_in_formula(l, var, witness)),
            Box::new(substitute_in_formula(r, var, witness)),
        ),
        Formula::Or(l, r) => Formula::Or(
            Box::new(substitute_in_formula(l, var, witness)),
            Box::new(substitute_in_formula(r, var, witness)),
        ),
        Formula::Implies(l, r) => Formula::Implies(
            Box::new(substitute_in_formula(l, var, witness)),
            Box::new(substitute_in_formula(r, var, witness)),
        ),
        Formula::Iff(l, r) => Formula::Iff(
            Box::new(substitute_in_formula(l, var, witness)),
            Box::new(substitute_in_formula(r, var, witness)),
        ),
        Formula::Quantified(q, v, body) => {
            if v == var {
                formula.clone()
            } else {
                Formula::Quantified(
                    *q,
                    v.clone(),
                    Box::new(substitute_in_formula(body, var, witness)),
                )
            }
        }
    }
}

fn substitute_in_term(term: &Term, var: &str, witness: &Term) -> Term {
    match term {
        Term::Symbol(name) => {
            if name == var {
                witness.clone()
            } else {
                term.clone()
            }
        }
        Term::Function(name, args) => Term::Function(
            name.clone(),
            args.iter()
                .map(|arg| substitute_in_term(arg, var, witness))
                .collect(),
        ),
    }
}
