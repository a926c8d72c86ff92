//! # Crumble Syntax
//!
//! Lexer, parser, and Abstract Syntax Tree (AST) definitions for the
//! Crumble expression language.
//!
//! ## Overview
//!
//! This crate provides the front end for Crumble source text:
//!
//! - **Lexer**: Tokenizes source code into a stream of tokens
//! - **Parser**: Builds an expression tree from tokens using recursive descent
//! - **AST**: Type-safe representation of Crumble expressions, with a
//!   visitor trait for traversals
//! - **Diagnostics**: An explicit sink that collects every error report
//!   with its line number
//!
//! ## Architecture
//!
//! ```text
//! Source Code
//!     ↓
//! Lexer (tokenize)
//!     ↓
//! Vec<Token>
//!     ↓
//! Parser (parse)
//!     ↓
//! Expr (AST)
//! ```
//!
//! Both phases report into the same [`Diagnostics`] value, owned by the
//! caller. Neither phase aborts on the first error: the lexer scans the
//! whole input, and the parser recovers to a statement boundary before
//! giving up on the current expression.
//!
//! ## Example
//!
//! ```rust
//! use crumble_syntax::{AstPrinter, Diagnostics, parse, tokenize};
//!
//! let mut diagnostics = Diagnostics::new();
//! let tokens = tokenize("1 + 2 * 3", &mut diagnostics);
//! let expr = parse(tokens, &mut diagnostics).expect("grammatical input");
//!
//! assert!(!diagnostics.had_error());
//! let rendered = AstPrinter::new().print(&expr);
//! assert!(rendered.starts_with("Binary"));
//! ```
//!
//! ## Grammar Overview
//!
//! ```text
//! expression → equality
//! equality   → comparison ( ( "!=" | "==" ) comparison )*
//! comparison → term ( ( ">" | ">=" | "<" | "<=" ) term )*
//! term       → factor ( ( "-" | "+" ) factor )*
//! factor     → unary ( ( "/" | "*" ) unary )*
//! unary      → ( "!" | "-" ) unary | primary
//! primary    → NUMBER | STRING | "true" | "false" | "null"
//!            | "(" expression ")"
//! ```
//!
//! ## Error Handling
//!
//! Errors never panic and never abort the run; they accumulate in the
//! sink with the line they were noticed on:
//!
//! ```rust
//! use crumble_syntax::{Diagnostics, parse, tokenize};
//!
//! let mut diagnostics = Diagnostics::new();
//! let tokens = tokenize("(1 + 2", &mut diagnostics);
//! assert!(parse(tokens, &mut diagnostics).is_none());
//!
//! let report = &diagnostics.reports()[0];
//! assert_eq!(report.to_string(), "[line 1] Error: Expect ')' after expression. (at end)");
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod printer;

pub use ast::{Expr, Visitor};
pub use error::{Diagnostic, Diagnostics, SyntaxError};
pub use lexer::{Token, TokenKind, Value, tokenize};
pub use parser::parse;
pub use printer::AstPrinter;
