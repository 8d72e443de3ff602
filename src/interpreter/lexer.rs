use logos::Logos;

use crate::{
    error::LexError,
    interpreter::registry::{
        FunctionDescriptor, OperatorDescriptor, lookup_function, lookup_operator,
    },
};

/// A token paired with the 0-based character position where its span starts.
pub type Spanned = (Token, usize);

/// Represents a classified token of an expression line.
///
/// Names are resolved against the function registry while lexing, and
/// operator symbols against the operator registry, so later stages never look
/// at raw characters again.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal text such as `3.14` or `.5`. Parsed by the evaluator.
    Number(String),
    /// A variable reference such as `x` or `rate_2`.
    Identifier(String),
    /// A registered one-argument function such as `sqrt`.
    Function(&'static FunctionDescriptor),
    /// A registered operator such as `+` or `^`.
    Operator(&'static OperatorDescriptor),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `,`
    Comma,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(text) | Self::Identifier(text) => write!(f, "{text}"),
            Self::Function(function) => write!(f, "{}", function.name),
            Self::Operator(operator) => write!(f, "{}", operator.symbol),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::Comma => write!(f, ","),
        }
    }
}

/// The raw lexemes recognised by the scanner before registry classification.
#[derive(Logos, Debug, PartialEq, Clone)]
enum Lexeme {
    /// Digits and decimal points, taken greedily. `1.2.3` is one lexeme.
    #[regex(r"[\p{Nd}.]+", |lex| lex.slice().to_string())]
    Number(String),
    /// A letter followed by letters, digits or underscores, in any script.
    #[regex(r"\p{L}[\p{L}\p{Nd}_]*", |lex| lex.slice().to_string())]
    Name(String),
    /// Control whitespace, the separators `\x1C`-`\x1F`, and Unicode spaces
    /// other than the no-break ones.
    #[regex(r"[ \t\n\x0B\f\r\x1C-\x1F\x{1680}\x{2000}-\x{2006}\x{2008}-\x{200A}\x{2028}\x{2029}\x{205F}\x{3000}]+",
            logos::skip)]
    Whitespace,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// Any other single character; only registered operators survive.
    #[regex(r".", |lex| lex.slice().chars().next(), priority = 0)]
    Symbol(char),
}

/// Splits an expression line into classified tokens.
///
/// Whitespace separates tokens but is never emitted. Each returned token
/// carries the character position where it starts.
///
/// # Errors
/// Returns a [`LexError`] naming the first character that starts no token.
///
/// # Example
/// ```
/// use infixcalc::interpreter::lexer::{Token, lex};
///
/// let tokens = lex("sqrt(x) * 2").unwrap();
///
/// assert!(matches!(tokens[0], (Token::Function(f), 0) if f.name == "sqrt"));
/// assert_eq!(tokens[2], (Token::Identifier("x".to_string()), 5));
/// assert_eq!(tokens[5], (Token::Number("2".to_string()), 10));
///
/// let error = lex("2 $ 3").unwrap_err();
/// assert_eq!(error.invalid_char, '$');
/// assert_eq!(error.position, 2);
/// ```
pub fn lex(source: &str) -> Result<Vec<Spanned>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        let position = char_position(source, lexer.span().start);

        let token = match lexeme {
            Ok(Lexeme::Whitespace) => continue,
            Ok(Lexeme::Number(text)) => Token::Number(text),
            Ok(Lexeme::Name(name)) => classify_name(name),
            Ok(Lexeme::LParen) => Token::LeftParen,
            Ok(Lexeme::RParen) => Token::RightParen,
            Ok(Lexeme::Comma) => Token::Comma,
            Ok(Lexeme::Symbol(symbol)) => match lookup_operator(symbol) {
                Some(operator) => Token::Operator(operator),
                None => {
                    return Err(LexError { invalid_char: symbol,
                                          position });
                },
            },
            Err(()) => {
                let invalid_char = lexer.slice().chars().next().unwrap_or('\u{FFFD}');
                return Err(LexError { invalid_char,
                                      position });
            },
        };

        tokens.push((token, position));
    }

    tracing::trace!(count = tokens.len(), "lexed expression");
    Ok(tokens)
}

/// Resolves a scanned name to a function token when the registry knows it,
/// otherwise to a variable reference.
fn classify_name(name: String) -> Token {
    match lookup_function(&name) {
        Some(function) => Token::Function(function),
        None => Token::Identifier(name),
    }
}

/// Converts a byte offset reported by the scanner into a character position.
fn char_position(source: &str, byte_offset: usize) -> usize {
    source[..byte_offset].chars().count()
}
