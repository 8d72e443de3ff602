#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents the structural errors detected while converting infix tokens to
/// postfix order.
///
/// Every variant records the 0-based character position of the token that
/// exposed the problem.
pub enum SyntaxError {
    /// A comma appeared outside of any parenthesised group.
    MismatchedComma {
        /// Position of the comma.
        position: usize,
    },
    /// A closing parenthesis had no matching opening parenthesis.
    MismatchedParen {
        /// Position of the closing parenthesis.
        position: usize,
    },
    /// The input ended while a group was still open.
    UnbalancedGrouping {
        /// Position of the parenthesis that was never closed.
        position: usize,
    },
}

impl SyntaxError {
    /// Returns the 0-based character position attached to the error.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::MismatchedComma { position }
            | Self::MismatchedParen { position }
            | Self::UnbalancedGrouping { position } => *position,
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let column = self.position() + 1;

        match self {
            Self::MismatchedComma { .. } => write!(f, "Error at column {column}: Misplaced comma."),
            Self::MismatchedParen { .. } => {
                write!(f, "Error at column {column}: Mismatched closing parenthesis.")
            },
            Self::UnbalancedGrouping { .. } => {
                write!(f, "Error at column {column}: Unclosed parenthesis.")
            },
        }
    }
}

impl std::error::Error for SyntaxError {}
