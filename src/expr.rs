/// Represents one of the four supported arithmetic operations.
///
/// The original dispatch table keyed by operator symbol becomes a fieldless
/// enum here, so every use site is an exhaustiveness-checked `match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Addition, written `+`.
    Add,
    /// Subtraction, written `-`.
    Sub,
    /// Multiplication, written `*`.
    Mul,
    /// Truncating integer division, written `/`.
    Div,
}

impl Operation {
    /// Returns the operator symbol as it appears in expression text.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The numeral system an expression's operands are written in.
///
/// Both operands of an expression share a single notation; the parser rejects
/// mixed forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// Standard base-10 digit strings, `"1"` through `"10"`.
    Arabic,
    /// Canonical Roman numerals, `"I"` through `"X"`.
    Roman,
}

/// A recognized two-operand expression, as produced by the parser.
///
/// Operands are carried as the exact token text the parser matched, so they
/// can be handed back to callers unchanged. The struct is consumed
/// immediately by the evaluator dispatch and has no lifecycle beyond a single
/// evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedExpression {
    /// The left operand, exactly as written.
    pub left_operand:  String,
    /// The arithmetic operation between the operands.
    pub operation:     Operation,
    /// The right operand, exactly as written.
    pub right_operand: String,
    /// The numeral system both operands are written in.
    pub notation:      Notation,
}
