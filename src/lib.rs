//! # ember
//!
//! ember is a minimal expression language written in Rust.
//! Source text goes through a lexer, a precedence-climbing parser and a
//! tree-walking evaluator. Variables declared with `let` persist for the
//! lifetime of a [`Session`].

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::Error,
    interpreter::{
        environment::Environment, evaluator::core::evaluate_program, lexer::tokenize,
        parser::core::parse_program, value::RuntimeValue,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent source code as a tree. The AST is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the closed set of statement and expression variants.
/// - Attaches line numbers to nodes for error reporting.
pub mod ast;
/// Provides error types for lexing, parsing and evaluation.
///
/// Each stage has its own error enum; [`error::Error`] wraps all of them.
/// Every error carries the line it was detected on.
pub mod error;
/// Orchestrates lexing, parsing and evaluation.
///
/// This module ties together the lexer, parser, evaluator, environment and
/// value representation.
pub mod interpreter;

/// Tokenizes and parses source text without evaluating it.
///
/// # Example
/// ```
/// use ember::{
///     ast::{BinaryOperator, Expr, Statement},
///     produce_ast,
/// };
///
/// let program = produce_ast("1 + 2").unwrap();
/// let Statement::Expression { expr, .. } = &program.body[0] else {
///     panic!("expected an expression");
/// };
/// assert!(matches!(expr, Expr::Binary { op: BinaryOperator::Add, .. }));
/// ```
pub fn produce_ast(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source)?;
    Ok(parse_program(&tokens)?)
}

/// An evaluation session.
///
/// Owns the environment that outlives individual inputs, so a variable
/// declared by one call to [`run`](Self::run) is visible to the next.
#[derive(Debug, Default)]
pub struct Session {
    env: Environment,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lexes, parses and evaluates `source`, returning the value of its last
    /// statement, or `Null` if it has none.
    ///
    /// # Errors
    /// Returns the first lexical, syntax or evaluation error. Declarations
    /// completed before an evaluation error are kept.
    ///
    /// # Example
    /// ```
    /// use ember::{Session, interpreter::value::RuntimeValue};
    ///
    /// let mut session = Session::new();
    /// session.run("let width = 6").unwrap();
    ///
    /// assert_eq!(session.run("width * 7").unwrap(), RuntimeValue::Number(42.0));
    /// assert!(session.run("height").is_err());
    /// ```
    pub fn run(&mut self, source: &str) -> Result<RuntimeValue, Error> {
        let program = produce_ast(source)?;
        Ok(evaluate_program(&program, &mut self.env)?)
    }

    /// The session's variable bindings.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.env
    }
}

/// Returns the final evaluation result of `source` in a fresh session.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use ember::{get_result, interpreter::value::RuntimeValue};
///
/// assert_eq!(get_result("2 + 3 * 4").unwrap(), RuntimeValue::Number(14.0));
///
/// // 'x' is not defined.
/// assert!(get_result("x + 1").is_err());
/// ```
pub fn get_result(source: &str) -> Result<RuntimeValue, Error> {
    Session::new().run(source)
}
