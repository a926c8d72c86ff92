//! Tree-shaped rendering of an [`Expr`] for the driver's output.

use crate::ast::{Expr, Visitor};
use crate::lexer::{Token, Value};

/// Renders an expression tree with box-drawing branch prefixes:
///
/// ```text
/// Binary
/// ├── Operator: +
/// ├── Literal: 1
/// └── Literal: 2
/// ```
#[derive(Debug, Default)]
pub struct AstPrinter;

impl AstPrinter {
    pub fn new() -> Self {
        Self
    }

    pub fn print(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    fn tree(&self, label: &str, children: &[String]) -> String {
        let mut out = String::new();
        out.push_str(label);
        out.push('\n');
        for (i, child) in children.iter().enumerate() {
            let prefix = if i == children.len() - 1 {
                "└── "
            } else {
                "├── "
            };
            out.push_str(&indent(child, prefix));
        }
        out
    }
}

fn indent(text: &str, prefix: &str) -> String {
    let mut out = String::new();
    let mut lines = text.lines();
    if let Some(first) = lines.next() {
        out.push_str(prefix);
        out.push_str(first);
        out.push('\n');
    }
    for line in lines {
        out.push_str("│   ");
        out.push_str(line);
        out.push('\n');
    }
    out
}

impl Visitor for AstPrinter {
    type Output = String;

    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> String {
        let left = left.accept(self);
        let right = right.accept(self);
        self.tree(
            "Binary",
            &[format!("Operator: {}", operator.lexeme), left, right],
        )
    }

    fn visit_grouping(&mut self, inner: &Expr) -> String {
        let inner = inner.accept(self);
        self.tree("Grouping", &[inner])
    }

    fn visit_literal(&mut self, value: &Value) -> String {
        format!("Literal: {}", value)
    }

    fn visit_unary(&mut self, operator: &Token, operand: &Expr) -> String {
        let operand = operand.accept(self);
        self.tree("Unary", &[format!("Operator: {}", operator.lexeme), operand])
    }
}
