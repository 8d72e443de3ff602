//! # infixcalc
//!
//! infixcalc is an interactive arithmetic expression evaluator written in
//! Rust. Expression lines are tokenized, reordered into postfix form with the
//! shunting-yard algorithm, and reduced on an operand stack. A session layer
//! adds variables, history and export on top of that pipeline.

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

use crate::interpreter::{
    converter::convert, evaluator::eval, lexer::lex, variables::VariableLookup,
};

/// Provides the error types of every stage.
///
/// This module defines the errors raised while lexing, converting and
/// evaluating expressions, the error wrapping a whole pipeline run, and the
/// errors reported by session commands. Every error carries enough position
/// information to point the user at the offending part of the input.
///
/// # Responsibilities
/// - Defines one error type per pipeline stage.
/// - Composes them into a single pipeline error.
/// - Implements `Display` and `std::error::Error` for user-facing reporting.
pub mod error;
/// Implements the expression pipeline.
///
/// This module ties together the lexer, the infix-to-postfix converter, the
/// postfix evaluator, the static operator and function registry, and the
/// variable table consulted during evaluation.
///
/// # Responsibilities
/// - Turns text into tokens, tokens into postfix order, and postfix order into
///   a number.
/// - Holds the immutable operator and function tables.
/// - Defines how variables are looked up.
pub mod interpreter;
/// Implements the line-oriented command dispatcher.
///
/// A session owns the variable table and the expression history and executes
/// the `set`, `eval`, `vars`, `history`, `export`, `help` and `quit`
/// commands.
pub mod session;

pub use error::{EvalError, EvaluationError, LexError, SessionError, SyntaxError};
pub use interpreter::variables::Variables;
pub use session::Session;

/// Evaluates one infix expression.
///
/// The text is lexed, converted to postfix order and evaluated against
/// `variables`. The first failing stage stops the run; no partial result is
/// ever returned.
///
/// # Errors
/// Returns an [`EvaluationError`] tagged with the stage that failed.
///
/// # Examples
/// ```
/// use infixcalc::{Variables, evaluate};
///
/// let variables = Variables::with_constants();
///
/// assert_eq!(evaluate("2 + 3 * 4", &variables).unwrap(), 14.0);
/// assert_eq!(evaluate("2 ^ 3 ^ 2", &variables).unwrap(), 512.0);
///
/// // 'x' is not defined.
/// assert!(evaluate("x + 1", &variables).is_err());
/// ```
#[tracing::instrument(level = "debug", skip(variables))]
pub fn evaluate<V>(source: &str, variables: &V) -> Result<f64, EvaluationError>
    where V: VariableLookup + ?Sized
{
    let tokens = lex(source)?;
    let postfix = convert(tokens)?;
    let value = eval(&postfix, variables)?;

    tracing::debug!(%postfix, value, "evaluated expression");
    Ok(value)
}
