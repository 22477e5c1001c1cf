use crate::{
    error::EvalError,
    expr::Operation,
    numerals::convert::{arabic_to_roman, roman_to_arabic},
};

/// Applies an arithmetic operation to two integers.
///
/// Division truncates toward zero, discarding the remainder. Operands are
/// restricted to `[1, 10]` by the contract of callers (the parser enforces
/// it); the function itself performs no range validation.
///
/// # Parameters
/// - `operation`: The operation to apply.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// The computed integer.
///
/// # Panics
/// Panics on division if `right` is zero, which the parser's operand range
/// makes impossible.
///
/// # Example
/// ```
/// use numera::{calculator::evaluator::apply, expr::Operation};
///
/// assert_eq!(apply(Operation::Mul, 9, 9), 81);
/// assert_eq!(apply(Operation::Div, 7, 2), 3);
/// ```
#[must_use]
pub const fn apply(operation: Operation, left: i64, right: i64) -> i64 {
    match operation {
        Operation::Add => left + right,
        Operation::Sub => left - right,
        Operation::Mul => left * right,
        Operation::Div => left / right,
    }
}

/// Evaluates an expression whose operands are Arabic numeral strings.
///
/// # Parameters
/// - `left`: Left operand text, `"1"` through `"10"`.
/// - `operation`: The operation to apply.
/// - `right`: Right operand text, `"1"` through `"10"`.
///
/// # Returns
/// The result rendered as decimal text. Subtraction may yield `"0"` or a
/// negative value; both render normally on the Arabic path.
///
/// # Errors
/// Returns `EvalError::MalformedOperand` if an operand string is not a
/// decimal integer. Operands produced by the parser always are.
///
/// # Example
/// ```
/// use numera::{calculator::evaluator::evaluate_arabic, expr::Operation};
///
/// let result = evaluate_arabic("9", Operation::Mul, "9").unwrap();
/// assert_eq!(result, "81");
/// ```
pub fn evaluate_arabic(left: &str,
                       operation: Operation,
                       right: &str)
                       -> Result<String, EvalError> {
    let left = parse_operand(left)?;
    let right = parse_operand(right)?;

    Ok(apply(operation, left, right).to_string())
}

/// Evaluates an expression whose operands are Roman numeral strings.
///
/// Both operands are converted to integers, the operation is applied, and the
/// result is converted back — except that a result of zero or below has no
/// Roman representation and yields the empty string instead: `I - I` is `""`.
/// This is the one asymmetry between the Arabic and Roman paths.
///
/// # Parameters
/// - `left`: Left operand, a Roman numeral `I` through `X`.
/// - `operation`: The operation to apply.
/// - `right`: Right operand, a Roman numeral `I` through `X`.
///
/// # Returns
/// The result as a canonical Roman numeral, or the empty string for a
/// non-positive result.
///
/// # Example
/// ```
/// use numera::{calculator::evaluator::evaluate_roman, expr::Operation};
///
/// assert_eq!(evaluate_roman("IX", Operation::Mul, "IX"), "LXXXI");
/// assert_eq!(evaluate_roman("I", Operation::Sub, "I"), "");
/// ```
#[must_use]
pub fn evaluate_roman(left: &str, operation: Operation, right: &str) -> String {
    let result = apply(operation, roman_to_arabic(left), roman_to_arabic(right));

    if result > 0 {
        arabic_to_roman(result)
    } else {
        String::new()
    }
}

/// Parses an Arabic operand string into its integer value.
fn parse_operand(text: &str) -> Result<i64, EvalError> {
    text.parse()
        .map_err(|_| EvalError::MalformedOperand { operand: text.to_string() })
}
