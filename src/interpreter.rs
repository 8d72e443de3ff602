/// The lexer module tokenizes expression lines.
///
/// The lexer reads the raw text of one line and produces a sequence of
/// classified tokens: numbers, variable references, registered functions,
/// registered operators and grouping punctuation. Every token carries the
/// position it was read from.
///
/// # Responsibilities
/// - Skips whitespace and splits the line into non-overlapping tokens.
/// - Classifies names as functions or variables using the registry.
/// - Reports the first character that starts no token.
pub mod lexer;
/// The converter module reorders infix tokens into postfix order.
///
/// It implements the shunting-yard algorithm with an explicit operator stack,
/// resolving precedence, associativity, grouping and function application into
/// a flat evaluation order.
///
/// # Responsibilities
/// - Emits operands immediately and holds operators until they may be applied.
/// - Emits a function once its argument group closes.
/// - Reports misplaced commas and unbalanced parentheses.
pub mod converter;
/// The evaluator module reduces postfix sequences to numbers.
///
/// A single scan with an operand stack resolves literals and variables and
/// applies operators and functions.
///
/// # Responsibilities
/// - Parses numeric literals and looks up variables.
/// - Applies arithmetic with a division-by-zero check.
/// - Verifies that exactly one value remains.
pub mod evaluator;
/// The registry module holds the static operator and function tables.
///
/// Both tables are immutable for the lifetime of the process and shared by
/// the lexer, converter and evaluator.
pub mod registry;
/// The variables module defines the variable table and lookup trait.
pub mod variables;
