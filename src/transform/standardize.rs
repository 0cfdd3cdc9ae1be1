//! Standardizing apart: give every binder a unique variable name.

use crate::fol::{Formula, Term};
use indexmap::IndexSet;
use std::collections::HashMap;

/// Rename every bound variable so that no two quantifiers share a name and
/// no bound name collides with a symbol or function name appearing in any
/// term. Free symbols pass through unchanged.
pub fn standardize_apart(formula: &Formula) -> Formula {
    let mut used = IndexSet::new();
    collect_used_names(formula, &mut used);
    let mut standardizer = Standardizer { used };
    standardizer.rebuild(formula, &HashMap::new())
}

/// Names standardization must avoid: every bound-variable name plus every
/// symbol and function name reachable in a term.
fn collect_used_names(formula: &Formula, used: &mut IndexSet<String>) {
    match formula {
        Formula::Predicate(_, args) => {
            for arg in args {
                collect_term_names(arg, used);
            }
        }
        Formula::Equal(left, right) | Formula::NotEqual(left, right) => {
            collect_term_names(left, used);
            collect_term_names(right, used);
        }
        Formula::Not(sub) => collect_used_names(sub, used),
        Formula::And(l, r)
        | Formula::Or(l, r)
        | Formula::Implies(l, r)
        | Formula::Iff(l, r) => {
            collect_used_names(l, used);
            collect_used_names(r, used);
        }
        Formula::Quantified(_, var, body) => {
            used.insert(var.clone());
            collect_used_names(body, used);
        }
    }
}

fn collect_term_names(term: &Term, used: &mut IndexSet<String>) {
    match term {
        Term::Symbol(name) => {
            used.insert(name.clone());
        }
        Term::Function(name, args) => {
            used.insert(name.clone());
            for arg in args {
                collect_term_names(arg, used);
            }
        }
    }
}

/// Per-invocation renaming state; never shared across calls.
struct Standardizer {
    used: IndexSet<String>,
}

impl Standardizer {
    /// Mint a name not yet in use: the letters of the original name (or `x`
    /// when nothing remains), then `base1`, `base2`, ...
    fn fresh_name(&mut self, original: &str) -> String {
        let mut base: String = original.chars().filter(|c| c.is_ascii_alphabetic()).collect();
        if base.is_empty() {
            base.push('x');
        }
        let mut candidate = base.clone();
        let mut suffix = 1usize;
        while self.used.contains(&candidate) {
            candidate = format!("{}{}", base, suffix);
            suffix += 1;
        }
        self.used.insert(candidate.clone());
        candidate
    }

    /// Top-down rebuild threading the variable-renaming environment by
    /// scope.
    fn rebuild(&mut self, formula: &Formula, env: &HashMap<String, String>) -> Formula {
        match formula {
            Formula::Predicate(name, args) => Formula::Predicate(
                name.clone(),
                args.iter().map(|arg| rename_term(arg, env)).collect(),
            ),
            Formula::Equal(left, right) => {
                Formula::Equal(rename_term(left, env), rename_term(right, env))
            }
            Formula::NotEqual(left, right) => {
                Formula::NotEqual(rename_term(left, env), rename_term(right, env))
            }
            Formula::Not(sub) => Formula::Not(Box::new(self.rebuild(sub, env))),
            Formula::And(l, r) => Formula::And(
                Box::new(self.rebuild(l, env)),
                Box::new(self.rebuild(r, env)),
            ),
            Formula::Or(l, r) => Formula::Or(
                Box::new(self.rebuild(l, env)),
                Box::new(self.rebuild(r, env)),
            ),
            Formula::Implies(l, r) => Formula::Implies(
                Box::new(self.rebuild(l, env)),
                Box::new(self.rebuild(r, env)),
            ),
            Formula::Iff(l, r) => Formula::Iff(
                Box::new(self.rebuild(l, env)),
                Box::new(self.rebuild(r, env)),
            ),
            Formula::Quantified(q, var, body) => {
                let fresh = self.fresh_name(var);
                let mut inner = env.clone();
                inner.insert(var.clone(), fresh.clone());
                Formula::Quantified(*q, fresh, Box::new(self.rebuild(body, &inner)))
            }
        }
    }
}

/// Substitute renamings through a term; unmapped names are free symbols and
/// pass through.
fn rename_term(term: &Term, env: &HashMap<String, String>) -> Term {
    match term {
        Term::Symbol(name) => match env.get(name) {
            Some(fresh) => Term::Symbol(fresh.clone()),
            None => term.clone(),
        },
        Term::Function(name, args) => Term::Function(
            name.clone(),
            args.iter().map(|arg| rename_term(arg, env)).collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_every_binder_gets_a_fresh_name() {
        let formula = parse("\\forall x. P(x)").unwrap();
        let standardized = standardize_apart(&formula);
        // `x` is already used by the term in P, so the binder moves to x1.
        assert_eq!(standardized, parse("\\forall x1. P(x1)").unwrap());
    }

    #[test]
    fn test_shadowed_variable_is_split() {
        let formula = parse("\\forall x. (P(x) \\land \\exists x. Q(x))").unwrap();
        let standardized = standardize_apart(&formula);
        assert_eq!(
            standardized,
            parse("\\forall x1. (P(x1) \\land \\exists x2. Q(x2))").unwrap()
        );
    }

    #[test]
    fn test_reused_name_across_scopes_is_split() {
        let formula = parse("(\\exists y. P(y)) \\lor (\\forall y. Q(y))").unwrap();
        let standardized = standardize_apart(&formula);
        assert_eq!(
            standardized,
            parse("(\\exists y1. P(y1)) \\lor (\\forall y2. Q(y2))").unwrap()
        );
    }

    #[test]
    fn test_free_symbols_pass_through() {
        let formula = parse("\\forall x. R(x, c, f(c))").unwrap();
        let standardized = standardize_apart(&formula);
        assert_eq!(standardized, parse("\\forall x1. R(x1, c, f(c))").unwrap());
    }

    #[test]
    fn test_digits_are_stripped_from_the_base_name() {
        let formula = parse("\\exists v7. P(v7)").unwrap();
        let standardized = standardize_apart(&formula);
        // Base `v` is free once the digits are stripped and `v` itself is
        // unused, so the bare base is taken.
        assert_eq!(standardized, parse("\\exists v. P(v)").unwrap());
    }
}
