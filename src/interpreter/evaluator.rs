use crate::{
    error::EvalError,
    interpreter::{
        converter::Postfix,
        lexer::Token,
        registry::{Operator, OperatorDescriptor},
        variables::VariableLookup,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Reduces a postfix sequence to a single number.
///
/// Operands are pushed onto a stack; operators pop their right operand, then
/// their left one, and push the result; functions replace the top of the
/// stack with their result. Variables are read from `variables` and never
/// written.
///
/// # Parameters
/// - `postfix`: Sequence in evaluation order.
/// - `variables`: Read-only variable lookup.
///
/// # Returns
/// The single value left on the stack.
///
/// # Errors
/// - `BadLiteral` for number text that is not a valid `f64`.
/// - `UnknownVariable` for identifiers missing from `variables`.
/// - `InsufficientOperands` when an operator or function finds too few
///   values.
/// - `DivideByZero` when the right operand of `/` is zero.
/// - `UnsupportedOperator` for registered operators without arithmetic
///   meaning.
/// - `UnexpectedToken` for grouping punctuation.
/// - `MalformedExpression` unless exactly one value remains.
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// use infixcalc::interpreter::{converter::convert, evaluator::eval, lexer::lex};
///
/// let variables = HashMap::from([("x".to_string(), 4.0)]);
/// let postfix = convert(lex("(x + 2) * 3").unwrap()).unwrap();
///
/// assert_eq!(eval(&postfix, &variables).unwrap(), 18.0);
/// ```
pub fn eval<V>(postfix: &Postfix, variables: &V) -> EvalResult<f64>
    where V: VariableLookup + ?Sized
{
    let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());

    for (token, position) in postfix.tokens() {
        let position = *position;

        match token {
            Token::Number(literal) => {
                let value = literal.parse::<f64>()
                                   .map_err(|_| EvalError::BadLiteral { literal: literal.clone(),
                                                                        position })?;
                stack.push(value);
            },

            Token::Identifier(name) => {
                let value =
                    variables.lookup(name)
                             .ok_or_else(|| EvalError::UnknownVariable { name: name.clone(),
                                                                         position })?;
                stack.push(value);
            },

            Token::Operator(descriptor) => {
                let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                    return Err(EvalError::InsufficientOperands { symbol:
                                                                     descriptor.symbol
                                                                               .to_string(),
                                                                 position });
                };
                stack.push(apply_operator(descriptor, left, right, position)?);
            },

            Token::Function(function) => {
                let argument =
                    stack.pop()
                         .ok_or_else(|| EvalError::InsufficientOperands { symbol:
                                                                              function.name
                                                                                      .to_string(),
                                                                          position })?;
                stack.push(function.apply(argument));
            },

            Token::LeftParen | Token::RightParen | Token::Comma => {
                return Err(EvalError::UnexpectedToken { token: token.to_string(),
                                                        position });
            },
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        _ => Err(EvalError::MalformedExpression { remaining: stack.len() }),
    }
}

/// Applies a binary operator to two operands.
///
/// Division checks for an exactly zero divisor before dividing. Power uses
/// `powf`.
///
/// # Example
/// ```
/// use infixcalc::interpreter::{evaluator::apply_operator, registry::lookup_operator};
///
/// let minus = lookup_operator('-').unwrap();
/// assert_eq!(apply_operator(minus, 8.0, 3.0, 0).unwrap(), 5.0);
///
/// let slash = lookup_operator('/').unwrap();
/// assert!(apply_operator(slash, 1.0, 0.0, 0).is_err());
/// ```
pub fn apply_operator(descriptor: &OperatorDescriptor,
                      left: f64,
                      right: f64,
                      position: usize)
                      -> EvalResult<f64> {
    match descriptor.operator {
        Operator::Add => Ok(left + right),
        Operator::Subtract => Ok(left - right),
        Operator::Multiply => Ok(left * right),
        Operator::Divide => {
            if right == 0.0 {
                return Err(EvalError::DivideByZero { position });
            }
            Ok(left / right)
        },
        Operator::Power => Ok(left.powf(right)),
        Operator::Assign | Operator::Separator => {
            Err(EvalError::UnsupportedOperator { symbol: descriptor.symbol,
                                                 position })
        },
    }
}
