//! Recursive-descent parser for the formula notation.
//!
//! One token of lookahead, precedence low→high: Iff → Imp → Or → And →
//! unary → primary. All four binary connectives are left-associative at
//! their level.

use super::lexer::{tokenize, Token, TokenizeError};
use crate::fol::{Formula, Quantifier, Term};
use thiserror::Error;

/// Parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
    #[error("expected {expected}, found {found:?} (token {position})")]
    Unexpected {
        expected: String,
        found: Token,
        position: usize,
    },
    #[error("trailing input after a complete formula, starting with {found:?} (token {position})")]
    TrailingInput { found: Token, position: usize },
}

/// Parse a complete formula.
///
/// Fail-fast: no partial AST is returned, and tokens left over after a
/// complete top-level formula are an error.
pub fn parse(input: &str) -> Result<Formula, ParseError> {
    let tokens = tokenize(input)?;
    let mut parser = Parser { tokens, pos: 0 };
    let formula = parser.parse_iff()?;
    match parser.peek() {
        Token::Eof => Ok(formula),
        found => Err(ParseError::TrailingInput {
            found: found.clone(),
            position: parser.pos,
        }),
    }
}

/// Parser state: the token stream and a cursor into it.
struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> &Token {
        // tokenize always appends Eof and advance never moves past it
        &self.tokens[self.pos]
    }

    fn advance(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn expect(&mut self, expected: Token) -> Result<(), ParseError> {
        if *self.peek() == expected {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::Unexpected {
                expected: format!("{:?}", expected),
                found: self.peek().clone(),
                position: self.pos,
            })
        }
    }

    fn try_eat(&mut self, expected: &Token) -> bool {
        if self.peek() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_ident(&mut self) -> Result<String, ParseError> {
        match self.peek() {
            Token::Ident(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            found => Err(ParseError::Unexpected {
                expected: "an identifier".to_string(),
                found: found.clone(),
                position: self.pos,
            }),
        }
    }

    fn parse_iff(&mut self) -> Result<Formula, ParseError> {
        let mut node = self.parse_imp()?;
        while self.try_eat(&Token::Iff) {
            let right = self.parse_imp()?;
            node = Formula::Iff(Box::new(node), Box::new(right));
        }
        Ok(node)
    }

    fn parse_imp(&mut self) -> Result<Formula, ParseError> {
        let mut node = self.parse_or()?;
        while self.try_eat(&Token::Imp) {
            let right = self.parse_or()?;
            node = Formula::Implies(Box::new(node), Box::new(right));
        }
        Ok(node)
    }

    fn parse_or(&mut self) -> Result<Formula, ParseError> {
        let mut node = self.parse_and()?;
        while self.try_eat(&Token::Or) {
            let right = self.parse_and()?;
            node = Formula::Or(Box::new(node), Box::new(right));
        }
        Ok(node)
    }

    fn parse_and(&mut self) -> Result<Formula, ParseError> {
        let mut node = self.parse_unary()?;
        while self.try_eat(&Token::And) {
            let right = self.parse_unary()?;
            node = Formula::And(Box::new(node), Box::new(right));
        }
        Ok(node)
    }

    fn parse_unary(&mut self) -> Result<Formula, ParseError> {
        match self.peek().clone() {
            Token::LParen => {
                self.advance();
                let inner = self.parse_iff()?;
                self.expect(Token::RParen)?;
                Ok(inner)
            }
            Token::Forall | Token::Exists => self.parse_quantified(),
            Token::Not => {
                self.advance();
                let sub = self.parse_unary()?;
                Ok(Formula::Not(Box::new(sub)))
            }
            Token::Ident(_) => {
                if let Some(equality) = self.try_parse_equality() {
                    return Ok(equality);
                }
                self.parse_predicate()
            }
            found => Err(ParseError::Unexpected {
                expected: "a formula".to_string(),
                found,
                position: self.pos,
            }),
        }
    }

    /// Quantifier with a comma-separated variable list and an optional
    /// separator; `\forall x,y,z. F` desugars right-to-left so the
    /// rightmost-listed variable becomes the innermost binder.
    fn parse_quantified(&mut self) -> Result<Formula, ParseError> {
        let quantifier = match self.peek() {
            Token::Forall => Quantifier::Forall,
            _ => Quantifier::Exists,
        };
        self.advance();

        let mut vars = vec![self.expect_ident()?];
        while self.try_eat(&Token::Comma) {
            vars.push(self.expect_ident()?);
        }
        self.try_eat(&Token::Dot);

        let body = if self.try_eat(&Token::LParen) {
            let inner = self.parse_iff()?;
            self.expect(Token::RParen)?;
            inner
        } else {
            self.parse_unary()?
        };

        Ok(vars.into_iter().rev().fold(body, |acc, var| {
            Formula::Quantified(quantifier, var, Box::new(acc))
        }))
    }

    /// Speculative equality parse. Saves the cursor, tries `term (=|≠)
    /// term`, and restores on any failure so the caller can fall through to
    /// a predicate atom.
    fn try_parse_equality(&mut self) -> Option<Formula> {
        let saved = self.pos;
        let result = self.parse_equality_attempt();
        if result.is_none() {
            self.pos = saved;
        }
        result
    }

    fn parse_equality_attempt(&mut self) -> Option<Formula> {
        let left = self.parse_term().ok()?;
        let negated = match self.peek() {
            Token::Eq => false,
            Token::Neq => true,
            _ => return None,
        };
        self.advance();
        let right = self.parse_term().ok()?;
        if negated {
            Some(Formula::NotEqual(left, right))
        } else {
            Some(Formula::Equal(left, right))
        }
    }

    fn parse_predicate(&mut self) -> Result<Formula, ParseError> {
        let name = self.expect_ident()?;
        let mut args = Vec::new();
        if self.try_eat(&Token::LParen) {
            if *self.peek() != Token::RParen {
                args.push(self.parse_term()?);
                while self.try_eat(&Token::Comma) {
                    args.push(self.parse_term()?);
                }
            }
            self.expect(Token::RParen)?;
        }
        Ok(Formula::Predicate(name, args))
    }

    /// A term is an identifier, optionally applied to a parenthesized
    /// argument list.
    fn parse_term(&mut self) -> Result<Term, ParseError> {
        let name = self.expect_ident()?;
        if self.try_eat(&Token::LParen) {
            let mut args = Vec::new();
            if *self.peek() != Token::RParen {
                args.push(self.parse_term()?);
                while self.try_eat(&Token::Comma) {
                    args.push(self.parse_term()?);
                }
            }
            self.expect(Token::RParen)?;
            Ok(Term::Function(name, args))
        } else {
            Ok(Term::Symbol(name))
        }
    }
}
