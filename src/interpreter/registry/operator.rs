/// How operators of equal precedence group when chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` groups as `a ^ (b ^ c)`.
    Right,
}

/// The binary operators known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `^`
    Power,
    /// `=`; registered for precedence only, assignment is a session command.
    Assign,
    /// `,`; registered for precedence only, commas are lexed as punctuation.
    Separator,
}

/// Precedence and associativity metadata for one operator symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorDescriptor {
    /// The operator this symbol denotes.
    pub operator:      Operator,
    /// The single character that spells the operator.
    pub symbol:        char,
    /// Binding strength; higher binds tighter. Always positive.
    pub precedence:    u8,
    /// Grouping of equal-precedence chains.
    pub associativity: Associativity,
}

impl OperatorDescriptor {
    /// Decides whether `self`, arriving from the input, forces `top` off the
    /// operator stack before it is pushed.
    ///
    /// A left-associative operator yields to anything of equal or higher
    /// precedence, a right-associative one only to strictly higher
    /// precedence.
    ///
    /// # Example
    /// ```
    /// use infixcalc::interpreter::registry::lookup_operator;
    ///
    /// let minus = lookup_operator('-').unwrap();
    /// let caret = lookup_operator('^').unwrap();
    ///
    /// assert!(minus.yields_to(minus));
    /// assert!(!caret.yields_to(caret));
    /// ```
    #[must_use]
    pub fn yields_to(&self, top: &Self) -> bool {
        match self.associativity {
            Associativity::Left => self.precedence <= top.precedence,
            Associativity::Right => self.precedence < top.precedence,
        }
    }
}

/// Defines the operator table.
///
/// Each entry maps a symbol to its operator, precedence and associativity.
/// The macro produces `OPERATOR_TABLE`, the static lookup table, and
/// `OPERATOR_SYMBOLS`, the list of registered symbols.
macro_rules! operator_table {
    (
        $(
            $symbol:literal => {
                operator: $operator:expr,
                precedence: $precedence:expr,
                associativity: $associativity:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static OPERATOR_TABLE: &[OperatorDescriptor] = &[
            $(
                OperatorDescriptor { operator:      $operator,
                                     symbol:        $symbol,
                                     precedence:    $precedence,
                                     associativity: $associativity, },
            )*
        ];
        /// Every symbol the registry knows, in table order.
        pub const OPERATOR_SYMBOLS: &[char] = &[
            $($symbol,)*
        ];
    };
}

operator_table! {
    '+' => { operator: Operator::Add,       precedence: 1, associativity: Associativity::Left },
    '-' => { operator: Operator::Subtract,  precedence: 1, associativity: Associativity::Left },
    '*' => { operator: Operator::Multiply,  precedence: 2, associativity: Associativity::Left },
    '/' => { operator: Operator::Divide,    precedence: 2, associativity: Associativity::Left },
    '^' => { operator: Operator::Power,     precedence: 3, associativity: Associativity::Right },
    '=' => { operator: Operator::Assign,    precedence: 3, associativity: Associativity::Left },
    ',' => { operator: Operator::Separator, precedence: 3, associativity: Associativity::Left },
}

/// Looks up the descriptor registered for `symbol`.
///
/// The returned reference points into a static table, so repeated lookups of
/// the same symbol yield the very same descriptor.
///
/// # Example
/// ```
/// use infixcalc::interpreter::registry::{Associativity, lookup_operator};
///
/// let caret = lookup_operator('^').unwrap();
/// assert_eq!(caret.precedence, 3);
/// assert_eq!(caret.associativity, Associativity::Right);
/// assert!(lookup_operator('%').is_none());
/// ```
#[must_use]
pub fn lookup_operator(symbol: char) -> Option<&'static OperatorDescriptor> {
    OPERATOR_TABLE.iter().find(|d| d.symbol == symbol)
}
