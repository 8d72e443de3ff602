use std::collections::HashMap;

/// Read access to named numeric values.
///
/// The evaluator only ever needs to resolve a name, so anything that can map
/// a name to an `f64` can back an evaluation.
pub trait VariableLookup {
    /// Returns the value bound to `name`, if any.
    fn lookup(&self, name: &str) -> Option<f64>;
}

impl VariableLookup for HashMap<String, f64> {
    fn lookup(&self, name: &str) -> Option<f64> {
        self.get(name).copied()
    }
}

/// The variable table of a calculator session.
///
/// Values are only changed through [`Variables::set`]; evaluations borrow the
/// table immutably.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variables {
    values: HashMap<String, f64>,
}

impl Variables {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table pre-seeded with `pi` and `e`.
    ///
    /// # Example
    /// ```
    /// use infixcalc::interpreter::variables::Variables;
    ///
    /// let variables = Variables::with_constants();
    /// assert_eq!(variables.get("pi"), Some(std::f64::consts::PI));
    /// assert_eq!(variables.get("e"), Some(std::f64::consts::E));
    /// ```
    #[must_use]
    pub fn with_constants() -> Self {
        let mut variables = Self::new();
        variables.set("pi", std::f64::consts::PI);
        variables.set("e", std::f64::consts::E);
        variables
    }

    /// Returns the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Binds `name` to `value`, returning the previous value if there was one.
    pub fn set(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(name.into(), value)
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns the number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no variable is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns all bindings ordered by name.
    #[must_use]
    pub fn iter_sorted(&self) -> Vec<(&str, f64)> {
        let mut entries = self.values
                              .iter()
                              .map(|(name, value)| (name.as_str(), *value))
                              .collect::<Vec<_>>();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl VariableLookup for Variables {
    fn lookup(&self, name: &str) -> Option<f64> {
        self.get(name)
    }
}
