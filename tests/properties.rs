use std::{collections::HashMap, iter::Peekable, str::Chars};

use infixcalc::evaluate;
use proptest::prelude::*;

/// Straightforward recursive-descent evaluator used as an oracle.
///
/// Grammar:
/// ```text
/// sum     := product (("+" | "-") product)*
/// product := power (("*" | "/") power)*
/// power   := primary ("^" power)?
/// primary := number | name | name "(" sum ")" | "(" sum ")"
/// ```
struct Reference<'a> {
    chars:     Peekable<Chars<'a>>,
    variables: &'a HashMap<String, f64>,
}

impl<'a> Reference<'a> {
    fn evaluate(src: &'a str, variables: &'a HashMap<String, f64>) -> Option<f64> {
        let mut parser = Self { chars: src.chars().peekable(),
                                variables };
        let value = parser.sum()?;
        parser.peek().is_none().then_some(value)
    }

    /// Skips whitespace and returns the next character without consuming it.
    fn peek(&mut self) -> Option<char> {
        while self.chars.next_if(|c| c.is_whitespace()).is_some() {}
        self.chars.peek().copied()
    }

    fn expect(&mut self, expected: char) -> Option<()> {
        if self.peek()? != expected {
            return None;
        }
        self.chars.next();
        Some(())
    }

    fn sum(&mut self) -> Option<f64> {
        let mut value = self.product()?;
        loop {
            match self.peek() {
                Some('+') => {
                    self.chars.next();
                    value += self.product()?;
                },
                Some('-') => {
                    self.chars.next();
                    value -= self.product()?;
                },
                _ => return Some(value),
            }
        }
    }

    fn product(&mut self) -> Option<f64> {
        let mut value = self.power()?;
        loop {
            match self.peek() {
                Some('*') => {
                    self.chars.next();
                    value *= self.power()?;
                },
                Some('/') => {
                    self.chars.next();
                    let divisor = self.power()?;
                    if divisor == 0.0 {
                        return None;
                    }
                    value /= divisor;
                },
                _ => return Some(value),
            }
        }
    }

    fn power(&mut self) -> Option<f64> {
        let base = self.primary()?;
        if self.peek() == Some('^') {
            self.chars.next();
            let exponent = self.power()?;
            return Some(base.powf(exponent));
        }
        Some(base)
    }

    fn primary(&mut self) -> Option<f64> {
        match self.peek()? {
            '(' => {
                self.chars.next();
                let value = self.sum()?;
                self.expect(')')?;
                Some(value)
            },
            c if c.is_ascii_digit() || c == '.' => {
                let mut literal = String::new();
                while let Some(c) = self.chars.next_if(|c| c.is_ascii_digit() || *c == '.') {
                    literal.push(c);
                }
                literal.parse().ok()
            },
            c if c.is_ascii_alphabetic() => {
                let mut name = String::new();
                while let Some(c) = self.chars.next_if(char::is_ascii_alphabetic) {
                    name.push(c);
                }
                let transform: fn(f64) -> f64 = match name.as_str() {
                    "sqrt" => f64::sqrt,
                    "ln" => f64::ln,
                    "log" => f64::log10,
                    "sin" => |x: f64| x.to_radians().sin(),
                    "cos" => |x: f64| x.to_radians().cos(),
                    "tan" => |x: f64| x.to_radians().tan(),
                    _ => return self.variables.get(&name).copied(),
                };
                self.expect('(')?;
                let argument = self.sum()?;
                self.expect(')')?;
                Some(transform(argument))
            },
            _ => None,
        }
    }
}

fn space() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(""), Just(" "), Just("\t"), Just("\u{2003}")]
}

fn expression() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![(0u32..50).prop_map(|n| n.to_string()),
                           (0u32..50, 0u32..10).prop_map(|(i, d)| format!("{i}.{d}")),
                           Just("x".to_string()),
                           Just("y".to_string()),];

    leaf.prop_recursive(4, 48, 2, |inner| {
            prop_oneof![(inner.clone(),
                         space(),
                         prop_oneof![Just('+'), Just('-'), Just('*'), Just('/'), Just('^')],
                         space(),
                         inner.clone()).prop_map(|(l, s1, op, s2, r)| format!("{l}{s1}{op}{s2}{r}")),
                        (space(), inner.clone(), space()).prop_map(|(s1, e, s2)| {
                                                             format!("({s1}{e}{s2})")
                                                         }),
                        (prop_oneof![Just("sqrt"),
                                     Just("ln"),
                                     Just("log"),
                                     Just("sin"),
                                     Just("cos"),
                                     Just("tan")],
                         space(),
                         inner).prop_map(|(f, s, e)| format!("{f}{s}({e})")),]
        })
}

fn same(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
}

proptest! {
    #[test]
    fn pipeline_agrees_with_recursive_descent(src in expression(), x in 0u32..20, y in 0u32..20) {
        let variables = HashMap::from([("x".to_string(), f64::from(x)),
                                       ("y".to_string(), f64::from(y))]);

        let expected = Reference::evaluate(&src, &variables);
        let actual = evaluate(&src, &variables).ok();

        match (actual, expected) {
            (Some(a), Some(b)) => prop_assert!(same(a, b), "{src}: pipeline {a}, reference {b}"),
            (None, None) => {},
            (a, b) => prop_assert!(false, "{src}: pipeline {a:?}, reference {b:?}"),
        }
    }

    #[test]
    fn lexing_arbitrary_text_never_panics(src in "\\PC{0,40}") {
        let _ = evaluate(&src, &HashMap::new());
    }
}
