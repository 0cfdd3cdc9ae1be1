//! One-call orchestration of the full transformation pipeline.

use crate::fol::{ClauseSet, Formula};
use crate::parser::{parse, ParseError};
use crate::transform::{
    clauses_from_cnf, eliminate_imp_iff, horn_report, skolemize, standardize_apart, to_cnf,
    to_dnf, to_nnf, to_prenex, ExtractionError, HornReport, PrefixEntry, Skolemized,
};
use thiserror::Error;

/// Everything a single pipeline run produces, one field per displayed
/// stage.
#[derive(Debug, Clone)]
pub struct PipelineRun {
    pub original: Formula,
    pub eliminated: Formula,
    pub nnf: Formula,
    pub standardized: Formula,
    pub prefix: Vec<PrefixEntry>,
    pub matrix: Formula,
    pub cnf_matrix: Formula,
    pub dnf_matrix: Formula,
    pub skolemized: Skolemized,
    pub skolemized_cnf: Formula,
    pub clauses: ClauseSet,
    pub horn: HornReport,
}

/// Failure of a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

/// Run every stage over one input string.
///
/// Deterministic and synchronous; the first failure aborts the run and no
/// partial result is returned.
pub fn run(input: &str) -> Result<PipelineRun, PipelineError> {
    let original = parse(input)?;
    let eliminated = eliminate_imp_iff(&original);
    let nnf = to_nnf(&eliminated);
    let standardized = standardize_apart(&nnf);
    let (prefix, matrix) = to_prenex(&standardized);

    let cnf_matrix = to_cnf(&matrix);
    let dnf_matrix = to_dnf(&matrix);

    let skolemized = skolemize(&prefix, &matrix);
    let skolemized_cnf = to_cnf(&skolemized.matrix);
    let clauses = clauses_from_cnf(&skolemized_cnf)?;
    let horn = horn_report(&clauses);

    Ok(PipelineRun {
        original,
        eliminated,
        nnf,
        standardized,
        prefix,
        matrix,
        cnf_matrix,
        dnf_matrix,
        skolemized,
        skolemized_cnf,
        clauses,
        horn,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_produces_every_stage() {
        let run = run("\\forall x. (P(x) -> \\exists y. Q(x,y))").unwrap();

        assert!(run.original.has_quantifier());
        assert!(!run.matrix.has_quantifier());
        assert!(!run.skolemized.matrix.has_quantifier());
        assert_eq!(run.prefix.len(), 2);
        assert_eq!(run.clauses.len(), 1);
        assert!(run.horn.is_horn);
    }

    #[test]
    fn test_parse_failure_aborts_the_run() {
        assert!(matches!(run("P(x) ->"), Err(PipelineError::Parse(_))));
    }
}
