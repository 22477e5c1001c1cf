//! # numera
//!
//! numera is a calculator for simple two-operand arithmetic expressions whose
//! operands are written either in Arabic numerals (1–10) or Roman numerals
//! (I–X). It parses an expression, evaluates it in the notation it was
//! written in, and returns a textual result. The numeral converter it is
//! built on handles the full canonical range 1–1000.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    calculator::{evaluator, parser::parse_expression},
    error::EvalError,
    expr::Notation,
};

/// Orchestrates the expression pipeline: lexing, parsing and evaluation.
///
/// This module ties together the lexer, the parser and the evaluator to
/// recognize and compute two-operand expressions in either notation.
///
/// # Responsibilities
/// - Tokenizes expression text.
/// - Recognizes the two-operand grammar and classifies its notation.
/// - Computes results on the Arabic or Roman path.
pub mod calculator;
/// Provides the error type for expression evaluation.
///
/// This module defines the single error enum surfaced by the crate. Parsing
/// itself never errors — a non-matching expression is an `Option::None` from
/// the parser — so all errors here are raised at evaluation time.
///
/// # Responsibilities
/// - Defines `EvalError` with a variant per failure mode.
/// - Implements `Display` with user-facing messages.
pub mod error;
/// Defines the parsed-expression data model.
///
/// This module declares the `Operation` and `Notation` enums and the
/// `ParsedExpression` struct the parser produces and the evaluator consumes.
///
/// # Responsibilities
/// - Models the four arithmetic operations as an exhaustive enum.
/// - Carries parsed operands as the exact text they were written in.
pub mod expr;
/// Converts between Arabic and Roman numerals.
///
/// This module holds the immutable numeral tables and the bidirectional
/// converter built on them. The tables pair Arabic magnitudes with Roman
/// symbols, subtractive forms included, in strictly descending order.
///
/// # Responsibilities
/// - Declares the constant magnitude/symbol tables.
/// - Renders integers as canonical Roman numerals and reads them back.
pub mod numerals;

/// Evaluates a two-operand expression and returns its textual result.
///
/// This is the top-level entry point. The expression is parsed, then
/// dispatched to the Arabic or Roman evaluation path according to the
/// notation its operands are written in. Arabic results are decimal text;
/// Roman results are canonical numerals, with the empty string standing in
/// for results of zero or below.
///
/// # Errors
/// Returns `EvalError::InvalidExpression` if the input matches neither the
/// Arabic nor the Roman grammar.
///
/// # Examples
/// ```
/// use numera::evaluate;
///
/// assert_eq!(evaluate("9 * 9").unwrap(), "81");
/// assert_eq!(evaluate("IX * IX").unwrap(), "LXXXI");
///
/// // Neither grammar matches, so evaluation fails.
/// assert!(evaluate("IX * 9").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<String, EvalError> {
    let Some(parsed) = parse_expression(expression) else {
        return Err(EvalError::InvalidExpression { expression: expression.trim().to_string() });
    };

    match parsed.notation {
        Notation::Arabic => evaluator::evaluate_arabic(&parsed.left_operand,
                                                       parsed.operation,
                                                       &parsed.right_operand),
        Notation::Roman => Ok(evaluator::evaluate_roman(&parsed.left_operand,
                                                        parsed.operation,
                                                        &parsed.right_operand)),
    }
}
