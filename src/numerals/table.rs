/// Arabic magnitudes in strictly descending order, including the subtractive
/// forms 900, 400, 90, 40, 9 and 4. Index-aligned with [`ROMAN_SYMBOLS`].
pub const ARABIC_MAGNITUDES: [i64; 13] =
    [1000, 900, 500, 400, 100, 90, 50, 40, 10, 9, 5, 4, 1];

/// Roman symbols in strictly descending order of magnitude. The two-letter
/// entries are the subtractive pairs, stored as single table entries so the
/// converter never has to derive them. Index-aligned with
/// [`ARABIC_MAGNITUDES`].
pub const ROMAN_SYMBOLS: [&str; 13] =
    ["M", "CM", "D", "CD", "C", "XC", "L", "XL", "X", "IX", "V", "IV", "I"];

/// Resolves a single-letter Roman symbol to its magnitude.
///
/// Only the seven single letters (M, D, C, L, X, V, I) resolve; the two-letter
/// subtractive entries are skipped, since a character-by-character scan sees
/// their halves individually.
///
/// # Parameters
/// - `symbol`: The character to look up.
///
/// # Returns
/// - `Some(i64)`: The magnitude, if `symbol` is a single-letter Roman symbol.
/// - `None`: For any other character.
///
/// # Example
/// ```
/// use numera::numerals::table::symbol_magnitude;
///
/// assert_eq!(symbol_magnitude('X'), Some(10));
/// assert_eq!(symbol_magnitude('M'), Some(1000));
/// assert_eq!(symbol_magnitude('Z'), None);
/// ```
#[must_use]
pub fn symbol_magnitude(symbol: char) -> Option<i64> {
    ROMAN_SYMBOLS.iter()
                 .position(|entry| entry.len() == 1 && entry.starts_with(symbol))
                 .map(|index| ARABIC_MAGNITUDES[index])
}
