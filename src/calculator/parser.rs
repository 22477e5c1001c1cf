use logos::Logos;

use crate::{
    calculator::lexer::Token,
    expr::{Notation, Operation, ParsedExpression},
};

/// Parses a two-operand expression into its parts.
///
/// Surrounding whitespace is trimmed first, then the remainder is lexed. A
/// match is exactly one operand, one operator and one operand, with both
/// operands in the same notation. Everything else — empty input, a missing
/// operand, extra tokens, mixed notations, an unrecognized character —
/// produces `None` rather than an error.
///
/// Matching is whole-string anchored: the lexer consumes the entire trimmed
/// input, so no leading or trailing extraneous characters can slip through.
///
/// # Parameters
/// - `expression`: The expression text.
///
/// # Returns
/// - `Some(ParsedExpression)`: The extracted operands, operation and
///   notation.
/// - `None`: If the input does not match either grammar.
///
/// # Example
/// ```
/// use numera::{
///     calculator::parser::parse_expression,
///     expr::{Notation, Operation, ParsedExpression},
/// };
///
/// let parsed = parse_expression("9 * 9").unwrap();
/// assert_eq!(parsed,
///            ParsedExpression { left_operand:  "9".to_string(),
///                               operation:     Operation::Mul,
///                               right_operand: "9".to_string(),
///                               notation:      Notation::Arabic, });
///
/// assert!(parse_expression("IX * IX").is_some());
/// assert!(parse_expression("9 * ").is_none());
/// ```
#[must_use]
pub fn parse_expression(expression: &str) -> Option<ParsedExpression> {
    let mut tokens = Vec::new();

    for token in Token::lexer(expression.trim()) {
        tokens.push(token.ok()?);
    }

    match tokens.as_slice() {
        [Token::Arabic(left), operator, Token::Arabic(right)] => {
            Some(ParsedExpression { left_operand:  left.clone(),
                                    operation:     token_to_operation(operator)?,
                                    right_operand: right.clone(),
                                    notation:      Notation::Arabic, })
        },

        [Token::Roman(left), operator, Token::Roman(right)] => {
            Some(ParsedExpression { left_operand:  left.clone(),
                                    operation:     token_to_operation(operator)?,
                                    right_operand: right.clone(),
                                    notation:      Notation::Roman, })
        },

        _ => None,
    }
}

/// Maps an operator token to its [`Operation`], or `None` for any other
/// token.
const fn token_to_operation(token: &Token) -> Option<Operation> {
    match token {
        Token::Plus => Some(Operation::Add),
        Token::Minus => Some(Operation::Sub),
        Token::Star => Some(Operation::Mul),
        Token::Slash => Some(Operation::Div),
        _ => None,
    }
}
