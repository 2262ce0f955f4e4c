use log::{debug, trace};

use crate::{
    ast::{BinaryOperator, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{environment::Environment, evaluator::binary::eval_binary, value::RuntimeValue},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates every statement of a program in order.
///
/// Returns the value of the last statement, or `Null` for an empty program.
/// Evaluation stops at the first error; declarations made by earlier
/// statements stay in `env`.
///
/// # Example
/// ```
/// use ember::interpreter::{
///     environment::Environment, evaluator::core::evaluate_program, lexer::tokenize,
///     parser::core::parse_program, value::RuntimeValue,
/// };
///
/// let tokens = tokenize("let x = 4 x * 2").unwrap();
/// let program = parse_program(&tokens).unwrap();
/// let mut env = Environment::new();
///
/// assert_eq!(evaluate_program(&program, &mut env), Ok(RuntimeValue::Number(8.0)));
/// ```
pub fn evaluate_program(program: &Program, env: &mut Environment) -> EvalResult<RuntimeValue> {
    let mut last = RuntimeValue::Null;
    for statement in &program.body {
        last = evaluate(statement, env)?;
    }
    Ok(last)
}

/// Evaluates a single statement.
///
/// An expression statement yields the expression's value. A declaration
/// evaluates its initializer, binds it in the innermost scope and yields the
/// bound value.
///
/// # Errors
/// - `VariableAlreadyDeclared` if the name is already bound in the innermost
///   scope.
/// - Anything raised by [`evaluate_expr`].
pub fn evaluate(statement: &Statement, env: &mut Environment) -> EvalResult<RuntimeValue> {
    match statement {
        Statement::Expression { expr, .. } => evaluate_expr(expr, env),
        Statement::VariableDeclaration { name, value, line } => {
            if env.contains_local(name) {
                return Err(RuntimeError::VariableAlreadyDeclared { name: name.clone(),
                                                                   line: *line, });
            }

            let value = evaluate_expr(value, env)?;
            env.declare(name, value);
            debug!("declared {name} = {value}");
            Ok(value)
        },
    }
}

/// Evaluates an expression and returns the resulting value.
///
/// Binary operands are evaluated left before right. The tree is walked with an
/// explicit work stack, so arbitrarily long operator chains are evaluated
/// without deep recursion.
///
/// # Errors
/// - `UnknownVariable` for an identifier with no binding.
/// - Anything raised by [`eval_binary`].
pub fn evaluate_expr(expr: &Expr, env: &Environment) -> EvalResult<RuntimeValue> {
    let mut tasks = vec![Task::Visit(expr)];
    let mut operands: Vec<RuntimeValue> = Vec::new();

    while let Some(task) = tasks.pop() {
        match task {
            Task::Visit(Expr::NumericLiteral { value, .. }) => {
                operands.push(RuntimeValue::from(*value));
            },
            Task::Visit(Expr::NullLiteral { .. }) => operands.push(RuntimeValue::Null),
            Task::Visit(Expr::Identifier { name, line }) => {
                let value = env.lookup(name)
                               .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone(),
                                                                              line: *line, })?;
                operands.push(value);
            },
            Task::Visit(Expr::Binary { left, op, right, line }) => {
                tasks.push(Task::Apply(*op, *line));
                tasks.push(Task::Visit(right));
                tasks.push(Task::Visit(left));
            },
            Task::Apply(op, line) => {
                let (Some(right), Some(left)) = (operands.pop(), operands.pop()) else {
                    unreachable!("both operands are evaluated before their operator");
                };
                let result = eval_binary(op, &left, &right, line)?;
                trace!("{left} {op} {right} = {result}");
                operands.push(result);
            },
        }
    }

    let Some(value) = operands.pop() else {
        unreachable!("every expression leaves exactly one value");
    };
    Ok(value)
}

enum Task<'e> {
    Visit(&'e Expr),
    Apply(BinaryOperator, usize),
}
