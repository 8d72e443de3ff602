use crate::{
    error::SyntaxError,
    interpreter::lexer::{Spanned, Token},
};

/// Result type used by the converter.
pub type ConvertResult<T> = Result<T, SyntaxError>;

/// A token sequence in postfix (reverse Polish) order.
///
/// A `Postfix` produced by [`convert`] only ever holds numbers, identifiers,
/// operators and functions; grouping has been resolved into the order itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Postfix {
    tokens: Vec<Spanned>,
}

impl Postfix {
    /// Returns the tokens in evaluation order.
    #[must_use]
    pub fn tokens(&self) -> &[Spanned] {
        &self.tokens
    }

    /// Returns `true` if the sequence holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the number of tokens in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }
}

impl From<Vec<Spanned>> for Postfix {
    fn from(tokens: Vec<Spanned>) -> Self {
        Self { tokens }
    }
}

impl std::fmt::Display for Postfix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (token, _)) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

/// Reorders infix tokens into postfix order (shunting-yard).
///
/// Operands go straight to the output. Operators wait on a stack until an
/// operator that binds at most as tightly arrives, parentheses delimit
/// groups, and a function is emitted as soon as its argument group closes.
///
/// # Parameters
/// - `tokens`: Spanned tokens as produced by [`lex`](super::lexer::lex).
///
/// # Returns
/// The postfix sequence, ready for evaluation.
///
/// # Errors
/// - `MismatchedComma` if a comma appears outside any group.
/// - `MismatchedParen` if a `)` has no matching `(`.
/// - `UnbalancedGrouping` if a `(` is still open at the end of input.
///
/// # Example
/// ```
/// use infixcalc::interpreter::{converter::convert, lexer::lex};
///
/// let postfix = convert(lex("2^3^2 - sqrt(4)").unwrap()).unwrap();
/// assert_eq!(postfix.to_string(), "2 3 2 ^ ^ 4 sqrt -");
/// ```
pub fn convert(tokens: Vec<Spanned>) -> ConvertResult<Postfix> {
    let mut output: Vec<Spanned> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Spanned> = Vec::new();

    for (token, position) in tokens {
        match token {
            Token::Number(_) | Token::Identifier(_) => output.push((token, position)),

            Token::Function(_) | Token::LeftParen => stack.push((token, position)),

            Token::Comma => {
                pop_until_left_paren(&mut stack, &mut output)
                    .ok_or(SyntaxError::MismatchedComma { position })?;
            },

            Token::Operator(incoming) => {
                while let Some((Token::Operator(top), _)) = stack.last()
                      && incoming.yields_to(top)
                {
                    output.extend(stack.pop());
                }
                stack.push((token, position));
            },

            Token::RightParen => {
                pop_until_left_paren(&mut stack, &mut output)
                    .ok_or(SyntaxError::MismatchedParen { position })?;
                stack.pop();

                if let Some((Token::Function(_), _)) = stack.last() {
                    output.extend(stack.pop());
                }
            },
        }
    }

    while let Some((token, position)) = stack.pop() {
        match token {
            Token::LeftParen | Token::RightParen => {
                return Err(SyntaxError::UnbalancedGrouping { position });
            },
            _ => output.push((token, position)),
        }
    }

    let postfix = Postfix::from(output);
    tracing::trace!(%postfix, "converted to postfix");
    Ok(postfix)
}

/// Moves stack entries to the output until a `(` is on top.
///
/// The `(` itself stays on the stack. Returns `None` when the stack runs out
/// without finding one.
fn pop_until_left_paren(stack: &mut Vec<Spanned>, output: &mut Vec<Spanned>) -> Option<()> {
    loop {
        match stack.last() {
            Some((Token::LeftParen, _)) => return Some(()),
            Some(_) => output.extend(stack.pop()),
            None => return None,
        }
    }
}
