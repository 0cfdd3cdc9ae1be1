//! JSON report types for a pipeline run.
//!
//! The presentation layer receives one serializable tree per run; field
//! names match the panels it fills.

use crate::latex::{clause_set_to_latex, formula_to_latex, prenex_to_latex, term_to_latex};
use crate::pipeline::PipelineRun;
use serde::{Deserialize, Serialize};

/// LaTeX for the rewriting stages shared by every panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StagesJson {
    pub original: String,
    pub no_implications: String,
    pub nnf: String,
    pub standardized: String,
    pub prenex: String,
}

/// One skolem witness, rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkolemEntryJson {
    pub variable: String,
    pub witness: String,
}

/// Horn verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HornJson {
    pub is_horn: bool,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub violating_indices: Vec<usize>,
}

/// Full report for one input formula.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineJson {
    pub stages: StagesJson,
    pub pcnf: String,
    pub pdnf: String,
    pub skolemized_matrix: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub skolem_mapping: Vec<SkolemEntryJson>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub universals: Vec<String>,
    pub clauses: Vec<Vec<String>>,
    pub clauses_latex: String,
    pub horn: HornJson,
}

impl PipelineJson {
    pub fn from_run(run: &PipelineRun) -> Self {
        PipelineJson {
            stages: StagesJson {
                original: formula_to_latex(&run.original),
                no_implications: formula_to_latex(&run.eliminated),
                nnf: formula_to_latex(&run.nnf),
                standardized: formula_to_latex(&run.standardized),
                prenex: prenex_to_latex(&run.prefix, &run.matrix),
            },
            pcnf: prenex_to_latex(&run.prefix, &run.cnf_matrix),
            pdnf: prenex_to_latex(&run.prefix, &run.dnf_matrix),
            skolemized_matrix: formula_to_latex(&run.skolemized.matrix),
            skolem_mapping: run
                .skolemized
                .mapping
                .iter()
                .map(|entry| SkolemEntryJson {
                    variable: entry.variable.clone(),
                    witness: term_to_latex(&entry.witness),
                })
                .collect(),
            universals: run.skolemized.universals.clone(),
            clauses: run
                .clauses
                .clauses
                .iter()
                .map(|clause| clause.literals.iter().map(|lit| lit.to_string()).collect())
                .collect(),
            clauses_latex: clause_set_to_latex(&run.clauses),
            horn: HornJson {
                is_horn: run.horn.is_horn,
                violating_indices: run.horn.violating_indices.clone(),
            },
        }
    }
}
