use std::{fmt, mem};

/// An arithmetic operator usable between two expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
}

impl BinaryOperator {
    /// Maps operator text to its operator, or `None` for anything else.
    ///
    /// # Example
    /// ```
    /// use ember::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol("%"), Some(BinaryOperator::Mod));
    /// assert_eq!(BinaryOperator::from_symbol("^"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "%" => Some(Self::Mod),
            _ => None,
        }
    }

    /// The source spelling of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        }
    }

    /// Whether the operator belongs to the additive tier (`+`, `-`).
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }

    /// Whether the operator belongs to the multiplicative tier (`*`, `/`,
    /// `%`).
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div | Self::Mod)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Parentheses leave no trace in the tree; they only change which operands a
/// `Binary` node ends up with.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A number such as `42`.
    NumericLiteral {
        /// The parsed value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// The `null` keyword.
    NullLiteral {
        /// Line number in the source code.
        line: usize,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary arithmetic operation.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number of the operator.
        line:  usize,
    },
}

impl Expr {
    /// Builds a `Binary` node from two operands.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self, line: usize) -> Self {
        Self::Binary { left: Box::new(left),
                       op,
                       right: Box::new(right),
                       line }
    }

    /// The source line this expression was parsed from.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::NumericLiteral { line, .. }
            | Self::NullLiteral { line }
            | Self::Identifier { line, .. }
            | Self::Binary { line, .. } => *line,
        }
    }
}

// Iterative: dropping an operator chain of any length uses constant stack.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        take_operands(self, &mut pending);
        while let Some(mut expr) = pending.pop() {
            take_operands(&mut expr, &mut pending);
        }
    }
}

fn take_operands(expr: &mut Expr, into: &mut Vec<Expr>) {
    if let Expr::Binary { left, right, .. } = expr {
        into.push(mem::replace(left.as_mut(), Expr::NullLiteral { line: 0 }));
        into.push(mem::replace(right.as_mut(), Expr::NullLiteral { line: 0 }));
    }
}

/// A top-level unit of a program.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// An expression whose value is the statement's value.
    Expression {
        /// The expression.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `let name = value`
    VariableDeclaration {
        /// The name being bound.
        name:  String,
        /// The initializer.
        value: Expr,
        /// Line number of the `let` keyword.
        line:  usize,
    },
}

/// The root of a parse: statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// The parsed statements.
    pub body: Vec<Statement>,
}
