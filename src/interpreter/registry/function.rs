/// A named one-argument numeric transform.
#[derive(Debug, Clone, Copy)]
pub struct FunctionDescriptor {
    /// The name the function is called by.
    pub name:      &'static str,
    /// The transform applied to the single argument.
    pub transform: fn(f64) -> f64,
}

impl FunctionDescriptor {
    /// Applies the function to `argument`.
    #[must_use]
    pub fn apply(&self, argument: f64) -> f64 {
        (self.transform)(argument)
    }
}

// Names are unique within the table, so the name identifies the transform.
impl PartialEq for FunctionDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for FunctionDescriptor {}

/// Defines the function table.
///
/// Each entry provides a name and the transform implementing it. The macro
/// produces `FUNCTION_TABLE`, the static lookup table, and `FUNCTION_NAMES`,
/// the public list of registered names.
macro_rules! function_table {
    (
        $(
            $name:literal => $transform:expr
        ),* $(,)?
    ) => {
        static FUNCTION_TABLE: &[FunctionDescriptor] = &[
            $(
                FunctionDescriptor { name: $name, transform: $transform },
            )*
        ];
        /// Every function name the registry knows, in table order.
        pub const FUNCTION_NAMES: &[&str] = &[
            $($name,)*
        ];
    };
}

function_table! {
    "sin"  => |degrees| degrees.to_radians().sin(),
    "cos"  => |degrees| degrees.to_radians().cos(),
    "tan"  => |degrees| degrees.to_radians().tan(),
    "sqrt" => f64::sqrt,
    "ln"   => f64::ln,
    "log"  => f64::log10,
}

/// Looks up the function registered under `name`.
///
/// Trigonometric functions take their argument in degrees.
///
/// # Example
/// ```
/// use infixcalc::interpreter::registry::lookup_function;
///
/// let sin = lookup_function("sin").unwrap();
/// assert!((sin.apply(90.0) - 1.0).abs() < 1e-12);
///
/// let log = lookup_function("log").unwrap();
/// assert!((log.apply(1000.0) - 3.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn lookup_function(name: &str) -> Option<&'static FunctionDescriptor> {
    FUNCTION_TABLE.iter().find(|d| d.name == name)
}

/// Returns `true` if `name` is a registered function.
#[must_use]
pub fn is_function_name(name: &str) -> bool {
    FUNCTION_NAMES.contains(&name)
}
