/// The function table.
///
/// Maps function names to one-argument transforms (`sin`, `cos`, `tan`,
/// `sqrt`, `ln`, `log`).
pub mod function;
/// The operator table.
///
/// Maps operator symbols to precedence and associativity.
pub mod operator;

pub use function::{FUNCTION_NAMES, FunctionDescriptor, is_function_name, lookup_function};
pub use operator::{Associativity, OPERATOR_SYMBOLS, Operator, OperatorDescriptor, lookup_operator};
