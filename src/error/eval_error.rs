#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reducing a postfix sequence.
pub enum EvalError {
    /// An identifier did not name a known variable.
    UnknownVariable {
        /// The name of the variable.
        name:     String,
        /// 0-based character position of the identifier.
        position: usize,
    },
    /// An operator or function found fewer operands on the stack than it
    /// consumes.
    InsufficientOperands {
        /// The operator symbol or function name.
        symbol:   String,
        /// 0-based character position of the operator or function.
        position: usize,
    },
    /// The right operand of `/` was exactly zero.
    DivideByZero {
        /// 0-based character position of the `/`.
        position: usize,
    },
    /// A number token could not be parsed as a floating-point value.
    BadLiteral {
        /// The literal text as written.
        literal:  String,
        /// 0-based character position of the literal.
        position: usize,
    },
    /// The operand stack did not end with exactly one value.
    MalformedExpression {
        /// How many values were left on the stack.
        remaining: usize,
    },
    /// A registered operator without arithmetic meaning, such as `=`.
    UnsupportedOperator {
        /// The operator symbol.
        symbol:   char,
        /// 0-based character position of the operator.
        position: usize,
    },
    /// Grouping punctuation reached the evaluator.
    UnexpectedToken {
        /// The token text.
        token:    String,
        /// 0-based character position of the token.
        position: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, position } => {
                write!(f, "Error at column {}: Unknown variable '{name}'.", position + 1)
            },
            Self::InsufficientOperands { symbol, position } => write!(f,
                                                                      "Error at column {}: Not enough operands for '{symbol}'.",
                                                                      position + 1),
            Self::DivideByZero { position } => {
                write!(f, "Error at column {}: Division by zero.", position + 1)
            },
            Self::BadLiteral { literal, position } => write!(f,
                                                             "Error at column {}: Invalid number literal '{literal}'.",
                                                             position + 1),
            Self::MalformedExpression { remaining } => write!(f,
                                                              "Error: Malformed expression, expected one result but {remaining} values remain."),
            Self::UnsupportedOperator { symbol, position } => write!(f,
                                                                     "Error at column {}: Operator '{symbol}' cannot be evaluated.",
                                                                     position + 1),
            Self::UnexpectedToken { token, position } => write!(f,
                                                                "Error at column {}: Unexpected '{token}' in postfix expression.",
                                                                position + 1),
        }
    }
}

impl std::error::Error for EvalError {}
