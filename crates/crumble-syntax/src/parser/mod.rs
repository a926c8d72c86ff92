//! Recursive-descent parser for Crumble expressions.
//!
//! Cursor plumbing, error raising, and the public [`parse`] entry
//! point live here; the grammar ladder itself is in `expressions.rs`.

mod expressions;

use crate::ast::Expr;
use crate::error::{Diagnostics, SyntaxError};
use crate::lexer::{Token, TokenKind};

/// Kinds that begin a statement in the full grammar. `synchronize`
/// stops when it reaches one of them, so a future statement grammar
/// can resume parsing there after an error.
const STATEMENT_STARTERS: [TokenKind; 8] = [
    TokenKind::Class,
    TokenKind::Fun,
    TokenKind::Var,
    TokenKind::For,
    TokenKind::If,
    TokenKind::While,
    TokenKind::Print,
    TokenKind::Return,
];

/// Parses a scanned token sequence into a single expression tree.
///
/// `None` means a syntax error was raised: the report has already
/// reached `diagnostics`, and the parser has discarded tokens up to a
/// likely statement boundary.
pub fn parse(tokens: Vec<Token>, diagnostics: &mut Diagnostics) -> Option<Expr> {
    let mut parser = Parser::new(tokens, diagnostics);
    match parser.parse_expression() {
        Ok(expr) => Some(expr),
        Err(_) => {
            parser.synchronize();
            None
        }
    }
}

/// Single-pass cursor over a token sequence.
///
/// Never backtracks beyond one-token lookahead; every grammar method
/// returns `Result` and short-circuits with `?` on the first raised
/// error.
pub struct Parser<'d> {
    tokens: Vec<Token>,
    pos: usize,
    diagnostics: &'d mut Diagnostics,
}

impl<'d> Parser<'d> {
    pub fn new(tokens: Vec<Token>, diagnostics: &'d mut Diagnostics) -> Self {
        Self {
            tokens,
            pos: 0,
            diagnostics,
        }
    }

    #[inline]
    pub(super) fn peek(&self) -> Result<&Token, SyntaxError> {
        self.tokens
            .get(self.pos)
            .ok_or_else(|| cursor_fault("No token to peek."))
    }

    #[inline]
    pub(super) fn previous(&self) -> Result<&Token, SyntaxError> {
        if self.pos == 0 {
            return Err(cursor_fault("No previous token available."));
        }
        Ok(&self.tokens[self.pos - 1])
    }

    /// Consumes and returns the current token. Running past the end of
    /// the buffer is a cursor fault in the caller, not a parse error;
    /// the `Eof` sentinel stops every loop before it can happen.
    #[inline]
    pub(super) fn advance(&mut self) -> Result<Token, SyntaxError> {
        let token = self
            .tokens
            .get(self.pos)
            .cloned()
            .ok_or_else(|| cursor_fault("Unexpected end of input."))?;
        self.pos += 1;
        Ok(token)
    }

    #[inline]
    pub(super) fn is_at_end(&self) -> bool {
        self.tokens
            .get(self.pos)
            .is_none_or(|t| t.kind == TokenKind::Eof)
    }

    /// Advances when the current token's kind is one of `kinds`.
    /// Never raises.
    pub(super) fn matches(&mut self, kinds: &[TokenKind]) -> bool {
        if self.is_at_end() {
            return false;
        }
        let Some(kind) = self.tokens.get(self.pos).map(|t| t.kind) else {
            return false;
        };
        if kinds.contains(&kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Advances past the expected kind, or reports at the current
    /// token and raises.
    pub(super) fn consume(
        &mut self,
        expected: TokenKind,
        message: &str,
    ) -> Result<Token, SyntaxError> {
        if !self.is_at_end() && self.peek()?.kind == expected {
            self.advance()
        } else {
            Err(self.error(message))
        }
    }

    /// Reports `message` to the sink at the current token and builds
    /// the unwinding signal. The location qualifier names the
    /// offending lexeme, or `end` when the cursor sits on `Eof`.
    pub(super) fn error(&mut self, message: &str) -> SyntaxError {
        let (line, location) = match self.tokens.get(self.pos) {
            Some(token) if token.kind == TokenKind::Eof => (token.line, "end".to_string()),
            Some(token) => (token.line, format!("'{}'", token.lexeme)),
            None => (self.tokens.last().map_or(1, |t| t.line), "end".to_string()),
        };
        let message = format!("{} (at {})", message, location);
        self.diagnostics.report(line, message.clone());
        SyntaxError { line, message }
    }

    /// Panic-mode recovery: discards tokens until just past a `;` or
    /// at a keyword that starts a statement, whichever comes first.
    fn synchronize(&mut self) {
        if self.advance().is_err() {
            return;
        }

        while !self.is_at_end() {
            if self.previous().ok().map(|t| t.kind) == Some(TokenKind::Semicolon) {
                return;
            }
            if let Ok(token) = self.peek() {
                if STATEMENT_STARTERS.contains(&token.kind) {
                    return;
                }
            }
            if self.advance().is_err() {
                return;
            }
        }
    }
}

fn cursor_fault(message: &str) -> SyntaxError {
    SyntaxError {
        line: 0,
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Expr;
    use crate::lexer::{self, Value};

    fn parse_source(source: &str) -> (Option<Expr>, Diagnostics) {
        let mut diagnostics = Diagnostics::new();
        let tokens = lexer::tokenize(source, &mut diagnostics);
        let expr = parse(tokens, &mut diagnostics);
        (expr, diagnostics)
    }

    #[test]
    fn test_parse_literal() {
        let (expr, diagnostics) = parse_source("42");

        assert_eq!(
            expr,
            Some(Expr::Literal {
                value: Value::Number(42.0)
            })
        );
        assert!(!diagnostics.had_error());
    }

    #[test]
    fn test_missing_paren_yields_no_tree() {
        let (expr, diagnostics) = parse_source("(1 + 2");

        assert!(expr.is_none());
        assert!(diagnostics.had_error());
        assert!(
            diagnostics.reports()[0]
                .message
                .contains("Expect ')' after expression.")
        );
    }

    #[test]
    fn test_error_at_end_names_end() {
        let (expr, diagnostics) = parse_source("1 +");

        assert!(expr.is_none());
        assert!(diagnostics.reports()[0].message.contains("(at end)"));
    }

    #[test]
    fn test_synchronize_stops_past_semicolon() {
        let mut diagnostics = Diagnostics::new();
        let tokens = lexer::tokenize(") ; 42", &mut diagnostics);
        let mut parser = Parser::new(tokens, &mut diagnostics);

        assert!(parser.parse_expression().is_err());
        parser.synchronize();

        assert_eq!(parser.tokens[parser.pos].kind, TokenKind::Number);
    }

    #[test]
    fn test_synchronize_stops_at_statement_keyword() {
        let mut diagnostics = Diagnostics::new();
        let tokens = lexer::tokenize(") var x", &mut diagnostics);
        let mut parser = Parser::new(tokens, &mut diagnostics);

        assert!(parser.parse_expression().is_err());
        parser.synchronize();

        assert_eq!(parser.tokens[parser.pos].kind, TokenKind::Var);
    }

    #[test]
    fn test_synchronize_runs_to_end_of_input() {
        let mut diagnostics = Diagnostics::new();
        let tokens = lexer::tokenize(") 1 2 3", &mut diagnostics);
        let mut parser = Parser::new(tokens, &mut diagnostics);

        assert!(parser.parse_expression().is_err());
        parser.synchronize();

        assert!(parser.is_at_end());
    }
}
