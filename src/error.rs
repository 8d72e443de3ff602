/// Lexing errors.
///
/// Raised when a character of the input line starts no token.
pub mod lex_error;
/// Conversion errors.
///
/// Contains the structural errors found while reordering infix tokens into
/// postfix form: stray commas and unbalanced parentheses.
pub mod syntax_error;
/// Evaluation errors.
///
/// Contains all errors raised while reducing a postfix sequence, such as
/// division by zero, unknown variables or a malformed operand stack.
pub mod eval_error;
/// Pipeline errors.
///
/// Wraps the error of whichever stage stopped an evaluation.
pub mod evaluation_error;
/// Session errors.
///
/// Errors reported by the command dispatcher: failed evaluations, misused
/// commands and failed exports.
pub mod session_error;

pub use eval_error::EvalError;
pub use evaluation_error::EvaluationError;
pub use lex_error::LexError;
pub use session_error::SessionError;
pub use syntax_error::SyntaxError;
