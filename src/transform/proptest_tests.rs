//! Property-based tests for the transformation passes using proptest.

use super::{eliminate_imp_iff, standardize_apart, to_cnf, to_dnf, to_nnf, to_prenex};
use crate::fol::{Formula, Quantifier, Term};
use crate::latex::formula_to_latex;
use crate::parser::parse;
use indexmap::IndexSet;
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Generate a random term of bounded depth from a small symbol pool.
fn arb_term(max_depth: u32) -> BoxedStrategy<Term> {
    if max_depth == 0 {
        (0..4u8)
            .prop_map(|i| Term::Symbol(format!("x{}", i)))
            .boxed()
    } else {
        prop_oneof![
            3 => (0..4u8).prop_map(|i| Term::Symbol(format!("x{}", i))),
            1 => (0..2u8, proptest::collection::vec(arb_term(max_depth - 1), 1..=2))
                .prop_map(|(f, args)| Term::Function(format!("f{}", f), args)),
        ]
        .boxed()
    }
}

fn arb_atom() -> BoxedStrategy<Formula> {
    prop_oneof![
        3 => (0..3u8, proptest::collection::vec(arb_term(1), 0..=2))
            .prop_map(|(p, args)| Formula::Predicate(format!("P{}", p), args)),
        1 => (arb_term(1), arb_term(1)).prop_map(|(l, r)| Formula::Equal(l, r)),
        1 => (arb_term(1), arb_term(1)).prop_map(|(l, r)| Formula::NotEqual(l, r)),
    ]
    .boxed()
}

fn arb_quantifier() -> BoxedStrategy<Quantifier> {
    prop_oneof![Just(Quantifier::Forall), Just(Quantifier::Exists)].boxed()
}

/// Generate a random formula of bounded depth over the full variant set.
fn arb_formula(max_depth: u32) -> BoxedStrategy<Formula> {
    if max_depth == 0 {
        arb_atom()
    } else {
        let sub = arb_formula(max_depth - 1);
        prop_oneof![
            2 => arb_atom(),
            1 => sub.clone().prop_map(|f| Formula::Not(Box::new(f))),
            1 => (sub.clone(), sub.clone())
                .prop_map(|(l, r)| Formula::And(Box::new(l), Box::new(r))),
            1 => (sub.clone(), sub.clone())
                .prop_map(|(l, r)| Formula::Or(Box::new(l), Box::new(r))),
            1 => (sub.clone(), sub.clone())
                .prop_map(|(l, r)| Formula::Implies(Box::new(l), Box::new(r))),
            1 => (sub.clone(), sub.clone())
                .prop_map(|(l, r)| Formula::Iff(Box::new(l), Box::new(r))),
            1 => (arb_quantifier(), 0..4u8, sub)
                .prop_map(|(q, v, body)| Formula::Quantified(
                    q,
                    format!("x{}", v),
                    Box::new(body)
                )),
        ]
        .boxed()
    }
}

fn contains_imp_iff(formula: &Formula) -> bool {
    match formula {
        Formula::Implies(_, _) | Formula::Iff(_, _) => true,
        Formula::Not(sub) => contains_imp_iff(sub),
        Formula::And(l, r) | Formula::Or(l, r) => contains_imp_iff(l) || contains_imp_iff(r),
        Formula::Quantified(_, _, body) => contains_imp_iff(body),
        Formula::Predicate(_, _) | Formula::Equal(_, _) | Formula::NotEqual(_, _) => false,
    }
}

fn is_nnf(formula: &Formula) -> bool {
    match formula {
        Formula::Not(sub) => sub.is_atom(),
        Formula::And(l, r) | Formula::Or(l, r) => is_nnf(l) && is_nnf(r),
        Formula::Quantified(_, _, body) => is_nnf(body),
        Formula::Predicate(_, _) | Formula::Equal(_, _) | Formula::NotEqual(_, _) => true,
        Formula::Implies(_, _) | Formula::Iff(_, _) => false,
    }
}

fn collect_binders(formula: &Formula, binders: &mut Vec<String>) {
    match formula {
        Formula::Not(sub) => collect_binders(sub, binders),
        Formula::And(l, r)
        | Formula::Or(l, r)
        | Formula::Implies(l, r)
        | Formula::Iff(l, r) => {
            collect_binders(l, binders);
            collect_binders(r, binders);
        }
        Formula::Quantified(_, var, body) => {
            binders.push(var.clone());
            collect_binders(body, binders);
        }
        Formula::Predicate(_, _) | Formula::Equal(_, _) | Formula::NotEqual(_, _) => {}
    }
}

fn collect_term_names(formula: &Formula, names: &mut IndexSet<String>) {
    fn from_term(term: &Term, names: &mut IndexSet<String>) {
        match term {
            Term::Symbol(name) => {
                names.insert(name.clone());
            }
            Term::Function(name, args) => {
                names.insert(name.clone());
                for arg in args {
                    from_term(arg, names);
                }
            }
        }
    }
    match formula {
        Formula::Predicate(_, args) => {
            for arg in args {
                from_term(arg, names);
            }
        }
        Formula::Equal(l, r) | Formula::NotEqual(l, r) => {
            from_term(l, names);
            from_term(r, names);
        }
        Formula::Not(sub) => collect_term_names(sub, names),
        Formula::And(l, r)
        | Formula::Or(l, r)
        | Formula::Implies(l, r)
        | Formula::Iff(l, r) => {
            collect_term_names(l, names);
            collect_term_names(r, names);
        }
        Formula::Quantified(_, _, body) => collect_term_names(body, names),
    }
}

/// No Or node may keep an And operand anywhere below it.
fn cnf_shape_ok(formula: &Formula) -> bool {
    fn or_free_of_and(formula: &Formula) -> bool {
        match formula {
            Formula::And(_, _) => false,
            Formula::Or(l, r) => or_free_of_and(l) && or_free_of_and(r),
            _ => true,
        }
    }
    match formula {
        Formula::And(l, r) => cnf_shape_ok(l) && cnf_shape_ok(r),
        Formula::Or(l, r) => or_free_of_and(l) && or_free_of_and(r),
        _ => true,
    }
}

fn dnf_shape_ok(formula: &Formula) -> bool {
    fn and_free_of_or(formula: &Formula) -> bool {
        match formula {
            Formula::Or(_, _) => false,
            Formula::And(l, r) => and_free_of_or(l) && and_free_of_or(r),
            _ => true,
        }
    }
    match formula {
        Formula::Or(l, r) => dnf_shape_ok(l) && dnf_shape_ok(r),
        Formula::And(l, r) => and_free_of_or(l) && and_free_of_or(r),
        _ => true,
    }
}

/// The distinct literal subtrees below And/Or nesting. Distribution may
/// duplicate literals but must never invent or drop one.
fn distinct_literals(formula: &Formula, literals: &mut BTreeSet<String>) {
    match formula {
        Formula::And(l, r) | Formula::Or(l, r) => {
            distinct_literals(l, literals);
            distinct_literals(r, literals);
        }
        other => {
            literals.insert(format!("{:?}", other));
        }
    }
}

fn prenex_matrix(formula: &Formula) -> (usize, Formula) {
    let standardized = standardize_apart(&to_nnf(&eliminate_imp_iff(formula)));
    let (prefix, matrix) = to_prenex(&standardized);
    (prefix.len(), matrix)
}

proptest! {
    #[test]
    fn elimination_removes_imp_and_iff(f in arb_formula(4)) {
        prop_assert!(!contains_imp_iff(&eliminate_imp_iff(&f)));
    }

    #[test]
    fn eliminated_formulas_round_trip_through_display(f in arb_formula(3)) {
        let eliminated = eliminate_imp_iff(&f);
        let reparsed = parse(&formula_to_latex(&eliminated)).unwrap();
        prop_assert_eq!(reparsed, eliminated);
    }

    #[test]
    fn nnf_leaves_negations_only_on_atoms(f in arb_formula(4)) {
        prop_assert!(is_nnf(&to_nnf(&eliminate_imp_iff(&f))));
    }

    #[test]
    fn standardization_makes_binders_unique(f in arb_formula(4)) {
        let mut original_names = IndexSet::new();
        collect_term_names(&f, &mut original_names);

        let standardized = standardize_apart(&f);
        let mut binders = Vec::new();
        collect_binders(&standardized, &mut binders);

        let distinct: BTreeSet<&String> = binders.iter().collect();
        prop_assert_eq!(distinct.len(), binders.len());
        // Fresh names avoid every symbol and function name of the input.
        for binder in &binders {
            prop_assert!(!original_names.contains(binder));
        }
    }

    #[test]
    fn prenex_extracts_every_quantifier(f in arb_formula(4)) {
        let standardized = standardize_apart(&to_nnf(&eliminate_imp_iff(&f)));
        let mut binders = Vec::new();
        collect_binders(&standardized, &mut binders);

        let (prefix_len, matrix) = prenex_matrix(&f);
        prop_assert!(!matrix.has_quantifier());
        prop_assert_eq!(prefix_len, binders.len());
    }

    // Depth 3 keeps the worst-case distribution blow-up (nested
    // biconditionals) within a few thousand clauses per case.
    #[test]
    fn cnf_distribution_produces_cnf_shape(f in arb_formula(3)) {
        let (_, matrix) = prenex_matrix(&f);
        let cnf = to_cnf(&matrix);
        prop_assert!(cnf_shape_ok(&cnf));

        let mut before = BTreeSet::new();
        let mut after = BTreeSet::new();
        distinct_literals(&matrix, &mut before);
        distinct_literals(&cnf, &mut after);
        prop_assert_eq!(before, after);
    }

    #[test]
    fn dnf_distribution_produces_dnf_shape(f in arb_formula(3)) {
        let (_, matrix) = prenex_matrix(&f);
        let dnf = to_dnf(&matrix);
        prop_assert!(dnf_shape_ok(&dnf));

        let mut before = BTreeSet::new();
        let mut after = BTreeSet::new();
        distinct_literals(&matrix, &mut before);
        distinct_literals(&dnf, &mut after);
        prop_assert_eq!(before, after);
    }
}
