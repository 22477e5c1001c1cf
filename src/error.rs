#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression.
pub enum EvalError {
    /// The input did not match either of the two recognized grammars.
    InvalidExpression {
        /// The offending input, with surrounding whitespace trimmed.
        expression: String,
    },
    /// An operand string handed to the Arabic evaluator was not a decimal
    /// integer. Unreachable through [`evaluate`](crate::evaluate), whose
    /// parser only produces valid operand tokens.
    MalformedOperand {
        /// The operand text that failed to parse.
        operand: String,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidExpression { expression } => {
                write!(f, "Invalid expression: '{expression}'.")
            },

            Self::MalformedOperand { operand } => {
                write!(f, "Malformed operand: '{operand}'.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
