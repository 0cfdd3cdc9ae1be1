//! Tokenizer for the LaTeX-like formula notation.
//!
//! The notation is forgiving: every connective and quantifier has several
//! spellings (command-style and symbolic), all three bracket styles fold
//! into the same generic open/close tokens, and purely visual commands
//! (`\left`, `\text{...}`, spacing) are skipped without producing a token.

use thiserror::Error;

/// Token kinds produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Forall,
    Exists,
    Not,
    And,
    Or,
    Imp,
    Iff,
    Eq,
    Neq,
    LParen,
    RParen,
    Comma,
    Dot,
    Ident(String),
    Eof,
}

/// Tokenizer failure, carrying the offending fragment and its byte offset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    #[error("unknown command \\{name} at offset {offset}")]
    UnknownCommand { name: String, offset: usize },
    #[error("unrecognized input {fragment:?} at offset {offset}")]
    Unrecognized { fragment: String, offset: usize },
}

/// Connective and quantifier spellings, longest first so greedy matching
/// picks `\neq` over `\ne` and `\leftrightarrow` never loses to a shorter
/// spelling sharing its prefix.
const ALIASES: &[(&str, Token)] = &[
    ("\\leftrightarrow", Token::Iff),
    ("\\Leftrightarrow", Token::Iff),
    ("\\rightarrow", Token::Imp),
    ("\\Rightarrow", Token::Imp),
    ("\\forall", Token::Forall),
    ("\\exists", Token::Exists),
    ("\\wedge", Token::And),
    ("\\lnot", Token::Not),
    ("\\land", Token::And),
    ("\\iff", Token::Iff),
    ("\\neg", Token::Not),
    ("\\neq", Token::Neq),
    ("\\lor", Token::Or),
    ("\\vee", Token::Or),
    ("\\to", Token::Imp),
    ("\\ne", Token::Neq),
    ("<->", Token::Iff),
    ("->", Token::Imp),
    ("∀", Token::Forall),
    ("∃", Token::Exists),
    ("¬", Token::Not),
    ("∧", Token::And),
    ("∨", Token::Or),
    ("⇒", Token::Imp),
    ("→", Token::Imp),
    ("⇔", Token::Iff),
    ("↔", Token::Iff),
    ("≠", Token::Neq),
    ("~", Token::Not),
    ("=", Token::Eq),
];

/// Spacing commands that vanish without a token.
const SPACING_COMMANDS: &[&str] = &["\\,", "\\;", "\\:", "\\!"];

/// Visual commands skipped along with one following `{...}` group.
const FORMATTING_COMMANDS: &[&str] = &[
    "left", "right", "big", "Big", "bigg", "Bigg", "quad", "qquad", "enspace", "hspace", "vspace",
    "text", "mathrm", "operatorname", "mathbf", "mathit", "mathsf", "mathtt", "color",
];

/// Tokenize a complete input string.
///
/// Fail-fast: an unrecognized fragment aborts the scan and no partial token
/// stream is returned. The returned vector always ends with `Token::Eof`.
pub fn tokenize(input: &str) -> Result<Vec<Token>, TokenizeError> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token == Token::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

/// Lexer state.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Lexer { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Result<Token, TokenizeError> {
        'scan: loop {
            self.skip_whitespace_and_comments();

            if self.pos >= self.input.len() {
                return Ok(Token::Eof);
            }

            let rest = self.rest();
            let ch = rest.chars().next().unwrap();

            // All bracket styles fold into the same generic pair.
            match ch {
                '(' | '[' | '{' => {
                    self.pos += 1;
                    return Ok(Token::LParen);
                }
                ')' | ']' | '}' => {
                    self.pos += 1;
                    return Ok(Token::RParen);
                }
                ',' => {
                    self.pos += 1;
                    return Ok(Token::Comma);
                }
                '.' | ':' => {
                    self.pos += 1;
                    return Ok(Token::Dot);
                }
                _ => {}
            }

            // Greedy alias match, longest spelling first.
            for (spelling, token) in ALIASES {
                if rest.starts_with(spelling) {
                    self.pos += spelling.len();
                    return Ok(token.clone());
                }
            }

            if ch == '\\' {
                for spacing in SPACING_COMMANDS {
                    if rest.starts_with(spacing) {
                        self.pos += spacing.len();
                        continue 'scan;
                    }
                }

                let offset = self.pos;
                let name: String = rest[1..]
                    .chars()
                    .take_while(|c| c.is_ascii_alphabetic())
                    .collect();
                if FORMATTING_COMMANDS.contains(&name.as_str()) {
                    self.pos += 1 + name.len();
                    self.skip_brace_group();
                    continue 'scan;
                }
                return Err(TokenizeError::UnknownCommand { name, offset });
            }

            if ch.is_ascii_alphabetic() || ch == '_' {
                return Ok(self.lex_identifier());
            }

            let fragment: String = rest.chars().take(12).collect();
            return Err(TokenizeError::Unrecognized {
                fragment,
                offset: self.pos,
            });
        }
    }

    fn skip_whitespace_and_comments(&mut self) {
        while self.pos < self.input.len() {
            let ch = self.rest().chars().next().unwrap();
            if ch == '%' {
                // Line comment, discarded to end of line
                while self.pos < self.input.len() {
                    let c = self.rest().chars().next().unwrap();
                    self.pos += c.len_utf8();
                    if c == '\n' {
                        break;
                    }
                }
            } else if ch.is_whitespace() {
                self.pos += ch.len_utf8();
            } else {
                break;
            }
        }
    }

    /// Skip one balanced `{...}` group if the cursor sits on `{`.
    fn skip_brace_group(&mut self) {
        if !self.rest().starts_with('{') {
            return;
        }
        let mut depth = 0usize;
        while self.pos < self.input.len() {
            let c = self.rest().chars().next().unwrap();
            self.pos += c.len_utf8();
            match c {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                _ => {}
            }
        }
    }

    fn lex_identifier(&mut self) -> Token {
        let start = self.pos;
        while self.pos < self.input.len() {
            let c = self.rest().chars().next().unwrap();
            if c.is_ascii_alphanumeric() || c == '_' || ('\u{00C0}'..='\u{017F}').contains(&c) {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
        Token::Ident(self.input[start..self.pos].to_string())
    }
}
