//! Expression tree produced by the parser.

use crate::lexer::{Token, Value};

/// A closed set of expression node variants.
///
/// Every node owns its children exclusively (a tree, never a graph)
/// and is immutable once built. The null constant is represented by
/// [`Value::Null`] inside a `Literal`; no child is ever absent.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `left <op> right`, where the operator token is one of
    /// `== != > >= < <= - + / *`.
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    /// A parenthesized sub-expression.
    Grouping { inner: Box<Expr> },
    /// A constant: number, string, boolean, or null.
    Literal { value: Value },
    /// `!operand` or `-operand`.
    Unary {
        operator: Token,
        operand: Box<Expr>,
    },
}

/// Double-dispatch traversal over [`Expr`], parameterized over the
/// result type.
///
/// Implementing this trait is the only step needed to add a new
/// operation over the tree; the exhaustive `match` inside
/// [`Expr::accept`] guarantees a handler exists for every variant, so
/// the variants themselves never change.
pub trait Visitor {
    type Output;

    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> Self::Output;
    fn visit_grouping(&mut self, inner: &Expr) -> Self::Output;
    fn visit_literal(&mut self, value: &Value) -> Self::Output;
    fn visit_unary(&mut self, operator: &Token, operand: &Expr) -> Self::Output;
}

impl Expr {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expr::Binary {
                left,
                operator,
                right,
            } => visitor.visit_binary(left, operator, right),
            Expr::Grouping { inner } => visitor.visit_grouping(inner),
            Expr::Literal { value } => visitor.visit_literal(value),
            Expr::Unary { operator, operand } => visitor.visit_unary(operator, operand),
        }
    }
}
