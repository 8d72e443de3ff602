#[derive(Debug, Clone, PartialEq, Eq)]
/// Raised when the lexer meets a character that starts no token.
pub struct LexError {
    /// The character that could not be classified.
    pub invalid_char: char,
    /// 0-based character position of `invalid_char` in the input line.
    pub position:     usize,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Error at column {}: Unexpected character '{}'.",
               self.position + 1,
               self.invalid_char)
    }
}

impl std::error::Error for LexError {}
