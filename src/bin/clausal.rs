//! Print every normal-form stage for one formula.

use clausal::json::PipelineJson;
use clausal::latex::{formula_to_latex, prenex_to_latex};
use clausal::pipeline;
use std::io::Read;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut json_output = false;
    let mut formula_arg: Option<String> = None;

    for arg in &args[1..] {
        match arg.as_str() {
            "--json" => json_output = true,
            "--help" | "-h" => {
                print_usage(&args[0]);
                return;
            }
            _ => formula_arg = Some(arg.clone()),
        }
    }

    // Formula from the command line, or stdin when none was given.
    let input = match formula_arg {
        Some(formula) => formula,
        None => {
            let mut buffer = String::new();
            if std::io::stdin().read_to_string(&mut buffer).is_err()
                || buffer.trim().is_empty()
            {
                print_usage(&args[0]);
                std::process::exit(1);
            }
            buffer
        }
    };

    let run = match pipeline::run(input.trim()) {
        Ok(run) => run,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if json_output {
        let report = PipelineJson::from_run(&run);
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("Original:        {}", formula_to_latex(&run.original));
    println!("No implications: {}", formula_to_latex(&run.eliminated));
    println!("NNF:             {}", formula_to_latex(&run.nnf));
    println!("Standardized:    {}", formula_to_latex(&run.standardized));
    println!("Prenex:          {}", prenex_to_latex(&run.prefix, &run.matrix));
    println!("PCNF:            {}", prenex_to_latex(&run.prefix, &run.cnf_matrix));
    println!("PDNF:            {}", prenex_to_latex(&run.prefix, &run.dnf_matrix));
    println!("Skolemized:      {}", formula_to_latex(&run.skolemized.matrix));
    for entry in &run.skolemized.mapping {
        println!("  {} := {}", entry.variable, entry.witness);
    }
    println!("Clauses:");
    for (i, clause) in run.clauses.clauses.iter().enumerate() {
        println!("  {}. {}", i + 1, clause);
    }
    if run.horn.is_horn {
        println!("Horn: yes (every clause has at most one positive literal)");
    } else {
        let indices: Vec<String> = run
            .horn
            .violating_indices
            .iter()
            .map(|i| i.to_string())
            .collect();
        println!("Horn: no (violating clauses: {})", indices.join(", "));
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [--json] '<formula>'", program);
    eprintln!("\nReads the formula from stdin when none is given.");
    eprintln!("\nOptions:");
    eprintln!("  --json    Print the full report as JSON");
}
