use crate::error::{EvalError, LexError, SyntaxError};

#[derive(Debug, Clone, PartialEq, Eq)]
/// The failure of one whole `lex → convert → eval` run, tagged by the stage
/// that stopped it.
pub enum EvaluationError {
    /// The input could not be tokenized.
    Lex(LexError),
    /// The tokens could not be brought into postfix order.
    Syntax(SyntaxError),
    /// The postfix sequence could not be reduced to a value.
    Eval(EvalError),
}

impl From<LexError> for EvaluationError {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<SyntaxError> for EvaluationError {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl From<EvalError> for EvaluationError {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvaluationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}
