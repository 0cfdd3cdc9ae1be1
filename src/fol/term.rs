//! Terms in first-order logic

use serde::{Deserialize, Serialize};
use std::fmt;

/// A term: a bare symbol or a function application.
///
/// The surface notation does not distinguish variables from constants, so a
/// `Symbol` covers both; only the binding structure of the enclosing formula
/// decides which role a name plays.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    Symbol(String),
    Function(String, Vec<Term>),
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Symbol(name) => write!(f, "{}", name),
            Term::Function(name, args) => {
                write!(f, "{}(", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_nested_function() {
        let term = Term::Function(
            "f".to_string(),
            vec![
                Term::Symbol("x".to_string()),
                Term::Function("g".to_string(), vec![Term::Symbol("y".to_string())]),
            ],
        );
        assert_eq!(term.to_string(), "f(x,g(y))");
    }
}
