//! The pure AST-to-AST transformation passes, composed by the pipeline in a
//! fixed order: eliminate implications, NNF, standardize apart, prenex,
//! then CNF/DNF distribution and, on the skolemized branch, clause
//! extraction and Horn classification.

mod clauses;
mod distribute;
mod elim;
mod nnf;
mod prenex;
mod skolemize;
mod standardize;

#[cfg(test)]
mod proptest_tests;

pub use clauses::{clauses_from_cnf, horn_report, ExtractionError, HornReport};
pub use distribute::{to_cnf, to_dnf};
pub use elim::eliminate_imp_iff;
pub use nnf::to_nnf;
pub use prenex::{to_prenex, PrefixEntry};
pub use skolemize::{skolemize, SkolemEntry, Skolemized};
pub use standardize::standardize_apart;
