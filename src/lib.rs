//! Clausal: normal-form transformations for first-order logic
//!
//! This library parses a forgiving LaTeX-like formula notation and turns
//! the result into prenex conjunctive/disjunctive normal form, a
//! skolemized clause set, and a Horn classification report. Every pass is
//! a pure function over an immutable formula tree; a pipeline run is one
//! deterministic computation over one input string.

pub mod fol;
pub mod json;
pub mod latex;
pub mod parser;
pub mod pipeline;
pub mod transform;

// Re-export commonly used types from fol
pub use fol::{Atom, Clause, ClauseSet, Formula, Literal, Quantifier, Term};

// Re-export the formula front end
pub use parser::{parse, tokenize, ParseError, Token, TokenizeError};

// Re-export the transformation passes
pub use transform::{
    clauses_from_cnf, eliminate_imp_iff, horn_report, skolemize, standardize_apart, to_cnf,
    to_dnf, to_nnf, to_prenex, ExtractionError, HornReport, PrefixEntry, SkolemEntry, Skolemized,
};

// Re-export the printer
pub use latex::{
    clause_set_to_latex, clause_to_latex, formula_to_latex, literal_to_latex, prenex_to_latex,
    term_to_latex,
};

pub use pipeline::{PipelineError, PipelineRun};
