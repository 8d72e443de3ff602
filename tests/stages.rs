use std::ptr;

use infixcalc::{
    EvalError, SyntaxError, Variables,
    interpreter::{
        converter::{Postfix, convert},
        evaluator::eval,
        lexer::{Token, lex},
        registry::{
            Associativity, FUNCTION_NAMES, OPERATOR_SYMBOLS, Operator, is_function_name,
            lookup_function, lookup_operator,
        },
    },
};

fn postfix_of(src: &str) -> String {
    convert(lex(src).unwrap()).unwrap().to_string()
}

#[test]
fn lexer_classifies_tokens() {
    let tokens = lex("sin(x1) + 2.5,").unwrap();
    let kinds = tokens.iter().map(|(token, _)| token.clone()).collect::<Vec<_>>();

    assert_eq!(kinds,
               vec![Token::Function(lookup_function("sin").unwrap()),
                    Token::LeftParen,
                    Token::Identifier("x1".to_string()),
                    Token::RightParen,
                    Token::Operator(lookup_operator('+').unwrap()),
                    Token::Number("2.5".to_string()),
                    Token::Comma,]);
}

#[test]
fn lexer_records_start_positions() {
    let positions = lex("  12 *  foo_bar").unwrap()
                                          .into_iter()
                                          .map(|(_, position)| position)
                                          .collect::<Vec<_>>();

    assert_eq!(positions, vec![2, 5, 8]);
}

#[test]
fn lexer_counts_characters_not_bytes() {
    let error = lex("café + π $ 1").unwrap_err();

    assert_eq!(error.invalid_char, '$');
    assert_eq!(error.position, 9);
}

#[test]
fn lexer_accepts_letters_of_any_script() {
    assert_eq!(lex("café").unwrap(), vec![(Token::Identifier("café".to_string()), 0)]);
    assert_eq!(lex("π").unwrap(), vec![(Token::Identifier("π".to_string()), 0)]);
    assert_eq!(lex("Δx_2").unwrap(), vec![(Token::Identifier("Δx_2".to_string()), 0)]);
}

#[test]
fn lexer_skips_unicode_whitespace() {
    for source in ["1\u{0B}+2", "1\u{2003}+2", "1\u{3000}+\u{1F}2", "1\u{2028}+2"] {
        let positions = lex(source).unwrap()
                                   .into_iter()
                                   .map(|(_, position)| position)
                                   .collect::<Vec<_>>();
        assert_eq!(positions, vec![0, 2, 4], "{source:?}");
    }
}

#[test]
fn lexer_rejects_no_break_spaces() {
    let error = lex("1\u{A0}+2").unwrap_err();

    assert_eq!(error.invalid_char, '\u{A0}');
    assert_eq!(error.position, 1);
}

#[test]
fn lexer_keeps_multiple_decimal_points_in_one_literal() {
    assert_eq!(lex("1.2.3").unwrap(), vec![(Token::Number("1.2.3".to_string()), 0)]);
}

#[test]
fn lexer_treats_function_prefixes_as_variables() {
    assert_eq!(lex("sine").unwrap(), vec![(Token::Identifier("sine".to_string()), 0)]);
}

#[test]
fn lexer_accepts_empty_input() {
    assert!(lex("   ").unwrap().is_empty());
}

#[test]
fn converter_resolves_precedence_and_associativity() {
    assert_eq!(postfix_of("2+3*4"), "2 3 4 * +");
    assert_eq!(postfix_of("(2+3)*4"), "2 3 + 4 *");
    assert_eq!(postfix_of("8-3-2"), "8 3 - 2 -");
    assert_eq!(postfix_of("2^3^2"), "2 3 2 ^ ^");
}

#[test]
fn converter_emits_functions_after_their_argument() {
    assert_eq!(postfix_of("sqrt(16) + 1"), "16 sqrt 1 +");
    assert_eq!(postfix_of("sin(cos(x) * 2)"), "x cos 2 * sin");
}

#[test]
fn converter_drops_grouping_punctuation() {
    let postfix = convert(lex("((1)) + (2 * (3))").unwrap()).unwrap();

    assert!(postfix.tokens()
                   .iter()
                   .all(|(token, _)| !matches!(token,
                                               Token::LeftParen
                                               | Token::RightParen
                                               | Token::Comma)));
    assert_eq!(postfix.len(), 5);
}

#[test]
fn converter_keeps_source_positions() {
    let postfix = convert(lex("1 + 2").unwrap()).unwrap();
    let positions = postfix.tokens().iter().map(|(_, p)| *p).collect::<Vec<_>>();

    assert_eq!(positions, vec![0, 4, 2]);
}

#[test]
fn converter_reports_grouping_errors() {
    assert_eq!(convert(lex("(1+2").unwrap()),
               Err(SyntaxError::UnbalancedGrouping { position: 0 }));
    assert_eq!(convert(lex("1+2)").unwrap()),
               Err(SyntaxError::MismatchedParen { position: 3 }));
    assert_eq!(convert(lex("sqrt(1))").unwrap()),
               Err(SyntaxError::MismatchedParen { position: 7 }));
    assert_eq!(convert(lex("1,2").unwrap()),
               Err(SyntaxError::MismatchedComma { position: 1 }));
}

#[test]
fn converter_reports_innermost_unclosed_parenthesis() {
    assert_eq!(convert(lex("(1 + (2").unwrap()),
               Err(SyntaxError::UnbalancedGrouping { position: 5 }));
}

#[test]
fn evaluator_reduces_postfix() {
    let postfix = convert(lex("(1 + 2) * 3 ^ 2").unwrap()).unwrap();

    assert_eq!(eval(&postfix, &Variables::new()).unwrap(), 27.0);
}

#[test]
fn evaluator_rejects_punctuation() {
    let postfix = Postfix::from(vec![(Token::Number("1".to_string()), 0), (Token::LeftParen, 1)]);

    assert_eq!(eval(&postfix, &Variables::new()),
               Err(EvalError::UnexpectedToken { token:    "(".to_string(),
                                                position: 1, }));
}

#[test]
fn evaluator_needs_exactly_one_result() {
    assert!(Postfix::default().is_empty());
    assert!(convert(lex("()").unwrap()).unwrap().is_empty());
    assert_eq!(eval(&Postfix::default(), &Variables::new()),
               Err(EvalError::MalformedExpression { remaining: 0 }));
}

#[test]
fn evaluator_pops_right_operand_first() {
    let postfix = convert(lex("10 - 4").unwrap()).unwrap();
    assert_eq!(eval(&postfix, &Variables::new()).unwrap(), 6.0);

    let postfix = convert(lex("2 ^ 3").unwrap()).unwrap();
    assert_eq!(eval(&postfix, &Variables::new()).unwrap(), 8.0);
}

#[test]
fn registry_tables_are_fixed() {
    let expected = [('+', 1, Associativity::Left),
                    ('-', 1, Associativity::Left),
                    ('*', 2, Associativity::Left),
                    ('/', 2, Associativity::Left),
                    ('^', 3, Associativity::Right),
                    ('=', 3, Associativity::Left),
                    (',', 3, Associativity::Left)];

    for (symbol, precedence, associativity) in expected {
        let descriptor = lookup_operator(symbol).unwrap();
        assert_eq!(descriptor.precedence, precedence, "precedence of {symbol}");
        assert_eq!(descriptor.associativity, associativity, "associativity of {symbol}");
    }

    assert_eq!(OPERATOR_SYMBOLS.len(), expected.len());
    assert_eq!(lookup_operator('^').unwrap().operator, Operator::Power);
    assert_eq!(FUNCTION_NAMES, &["sin", "cos", "tan", "sqrt", "ln", "log"]);
}

#[test]
fn registry_lookups_are_idempotent() {
    for symbol in OPERATOR_SYMBOLS {
        assert!(ptr::eq(lookup_operator(*symbol).unwrap(), lookup_operator(*symbol).unwrap()));
    }
    for name in FUNCTION_NAMES {
        assert!(ptr::eq(lookup_function(name).unwrap(), lookup_function(name).unwrap()));
        assert!(is_function_name(name));
    }

    assert!(lookup_operator('%').is_none());
    assert!(lookup_function("exp").is_none());
    assert!(!is_function_name("pi"));
}
