/// Variable bindings.
///
/// A stack of scopes mapping names to runtime values. One environment lives
/// for a whole session so bindings survive from one input to the next.
pub mod environment;
/// The evaluator module walks the AST and computes results.
///
/// The evaluator resolves identifiers, binds declarations and performs
/// arithmetic. It never mutates the tree it is given.
///
/// # Responsibilities
/// - Evaluates every statement and expression variant.
/// - Reports unknown variables, operand type mismatches and division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a finite sequence of
/// tokens, each carrying its kind, its literal text and its line. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Re-tags reserved words as keywords.
/// - Reports lexical errors for characters no token can start with.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one function per precedence tier. It reads
/// the token buffer through an index cursor and never modifies it.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Encodes operator precedence and left associativity in the tree shape.
/// - Reports unexpected and missing tokens with their line.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
pub mod value;
