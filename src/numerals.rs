/// Static numeral tables shared by the converter.
///
/// This module holds the ordered, index-aligned correspondence between Arabic
/// magnitudes and Roman symbols, including the subtractive forms, plus a
/// lookup helper for single-letter Roman symbols.
///
/// # Responsibilities
/// - Declares the immutable magnitude and symbol tables.
/// - Resolves a single Roman letter to its magnitude.
pub mod table;

/// Bidirectional conversion between Arabic and Roman numerals.
///
/// This module implements the greedy subtractive-pair conversion from Arabic
/// to Roman and the single-pass conversion from Roman back to Arabic, both
/// driven by the tables in [`table`].
///
/// # Responsibilities
/// - Renders integers in `[1, 1000]` as canonical Roman numerals.
/// - Reads canonical Roman numerals back into integers.
pub mod convert;
