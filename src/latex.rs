//! LaTeX rendering of formulas, prefixes, and clause lines.
//!
//! The strings produced here are handed verbatim to the presentation
//! layer. Grouping follows operator precedence, so re-parsing the output
//! yields the same tree shape.

use crate::fol::{Clause, ClauseSet, Formula, Literal, Quantifier, Term};
use crate::transform::PrefixEntry;

/// Render a term: a bare symbol name or `f\left(x,\,y\right)`.
pub fn term_to_latex(term: &Term) -> String {
    match term {
        Term::Symbol(name) => name.clone(),
        Term::Function(name, args) => {
            let args: Vec<String> = args.iter().map(term_to_latex).collect();
            format!("{}\\left({}\\right)", name, args.join(",\\,"))
        }
    }
}

/// Render a formula in display notation.
pub fn formula_to_latex(formula: &Formula) -> String {
    match formula {
        Formula::Predicate(name, args) => {
            if args.is_empty() {
                name.clone()
            } else {
                let args: Vec<String> = args.iter().map(term_to_latex).collect();
                format!("{}\\left({}\\right)", name, args.join(",\\,"))
            }
        }
        Formula::Equal(left, right) => {
            format!("{}\\,=\\,{}", term_to_latex(left), term_to_latex(right))
        }
        Formula::NotEqual(left, right) => {
            format!("{}\\,\\ne\\,{}", term_to_latex(left), term_to_latex(right))
        }
        Formula::Not(sub) => {
            if sub.is_atom() {
                format!("\\neg {}", formula_to_latex(sub))
            } else {
                format!("\\neg \\left({}\\right)", formula_to_latex(sub))
            }
        }
        Formula::And(left, right) => binary(left, "\\land", right),
        Formula::Or(left, right) => binary(left, "\\lor", right),
        Formula::Implies(left, right) => binary(left, "\\rightarrow", right),
        Formula::Iff(left, right) => binary(left, "\\leftrightarrow", right),
        Formula::Quantified(q, var, body) => {
            format!("{}\\, {}\\, {}", quantifier_symbol(*q), var, grouped(body))
        }
    }
}

/// Render a prenex prefix and matrix: `\forall\, x\, \exists\, y\; M`. An
/// empty prefix prints only the matrix.
pub fn prenex_to_latex(prefix: &[PrefixEntry], matrix: &Formula) -> String {
    let quantifiers: Vec<String> = prefix
        .iter()
        .map(|entry| {
            format!(
                "{}\\, {}",
                quantifier_symbol(entry.quantifier),
                entry.variable
            )
        })
        .collect();
    let matrix = grouped(matrix);
    if quantifiers.is_empty() {
        matrix
    } else {
        format!("{}\\; {}", quantifiers.join("\\, "), matrix)
    }
}

/// Render a literal for clause lines: the plain notation with `\lnot` as
/// the negation marker.
pub fn literal_to_latex(literal: &Literal) -> String {
    if literal.polarity {
        format!("{}", literal.atom)
    } else {
        format!("\\lnot {}", literal.atom)
    }
}

/// One numbered clause line: `3.\;\{ P(x) \lor \lnot Q(x) \}`.
pub fn clause_to_latex(index: usize, clause: &Clause) -> String {
    let literals: Vec<String> = clause.literals.iter().map(literal_to_latex).collect();
    format!("{}.\\;\\{{ {} \\}}", index, literals.join(" \\lor "))
}

/// All clause lines of a set, joined for a `gathered` block.
pub fn clause_set_to_latex(clauses: &ClauseSet) -> String {
    let lines: Vec<String> = clauses
        .clauses
        .iter()
        .enumerate()
        .map(|(i, clause)| clause_to_latex(i + 1, clause))
        .collect();
    lines.join(" \\\\ ")
}

fn quantifier_symbol(quantifier: Quantifier) -> &'static str {
    match quantifier {
        Quantifier::Forall => "\\forall",
        Quantifier::Exists => "\\exists",
    }
}

/// Operands of connectives and quantifier bodies group unless they are
/// atomic or a negation.
fn grouped(operand: &Formula) -> String {
    if operand.is_atom() || matches!(operand, Formula::Not(_)) {
        formula_to_latex(operand)
    } else {
        format!("\\left({}\\right)", formula_to_latex(operand))
    }
}

fn binary(left: &Formula, op: &str, right: &Formula) -> String {
    format!("{}\\;{}\\;{}", grouped(left), op, grouped(right))
}
