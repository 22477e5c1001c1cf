/// The lexer module tokenizes expression text for the parser.
///
/// The lexer reads the raw expression and produces operand and operator
/// tokens. Operand tokens carry the exact text they matched so the parser can
/// hand it back to callers unchanged.
///
/// # Responsibilities
/// - Recognizes the Arabic operand tokens `1`–`10` and the Roman operand
///   tokens `I`–`X`.
/// - Recognizes the four operator symbols.
/// - Skips plain spaces and rejects every other character.
pub mod lexer;

/// The parser module recognizes two-operand expressions.
///
/// The parser checks that the token stream is exactly one operand, one
/// operator and one operand, classifies the notation, and extracts the parts.
///
/// # Responsibilities
/// - Trims surrounding whitespace and lexes the remainder.
/// - Produces a [`ParsedExpression`](crate::expr::ParsedExpression) on a
///   match, or `None` for anything outside the grammar.
pub mod parser;

/// The evaluator module computes expression results.
///
/// The evaluator applies one of the four arithmetic operations to a pair of
/// operands, either directly on Arabic values or by routing Roman operands
/// through the numeral converter.
///
/// # Responsibilities
/// - Dispatches exhaustively over the [`Operation`](crate::expr::Operation)
///   enum.
/// - Renders Arabic results as decimal text and Roman results as canonical
///   numerals, with the empty string for non-positive Roman results.
pub mod evaluator;
