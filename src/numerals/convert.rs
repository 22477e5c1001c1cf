use crate::numerals::table::{symbol_magnitude, ARABIC_MAGNITUDES, ROMAN_SYMBOLS};

/// Converts an integer in `[1, 1000]` to its canonical Roman numeral.
///
/// The conversion walks the numeral tables in descending magnitude order and
/// greedily appends each symbol while the remaining value covers its
/// magnitude. Because the tables encode the subtractive forms (CM, CD, XC,
/// XL, IX, IV) as single entries, the greedy walk produces canonical numerals
/// for the whole range.
///
/// Callers must guarantee `1 <= number <= 1000`. For zero or negative input
/// the walk never appends anything and the result is the empty string; the
/// Roman evaluation path relies on that for its non-positive results.
///
/// # Parameters
/// - `number`: The value to convert.
///
/// # Returns
/// The canonical Roman numeral as a `String`.
///
/// # Example
/// ```
/// use numera::numerals::convert::arabic_to_roman;
///
/// assert_eq!(arabic_to_roman(81), "LXXXI");
/// assert_eq!(arabic_to_roman(1000), "M");
/// ```
#[must_use]
pub fn arabic_to_roman(number: i64) -> String {
    let mut remaining = number;
    let mut result = String::new();

    for (index, symbol) in ROMAN_SYMBOLS.iter().enumerate() {
        while remaining >= ARABIC_MAGNITUDES[index] {
            result.push_str(symbol);
            remaining -= ARABIC_MAGNITUDES[index];
        }
    }

    result
}

/// Converts a canonical Roman numeral to its integer value.
///
/// The conversion is a single left-to-right pass over the characters. Each
/// character is resolved to its magnitude; when the current magnitude exceeds
/// the previous one, a subtractive pair was just split into its two halves
/// (e.g. "IX" scanned as I then X), so `current - previous * 2` is added to
/// compensate for having already added `previous` on the prior step.
///
/// The "no previous character" state is an explicit `Option` rather than a
/// sentinel index. Input is assumed well-formed; characters outside the
/// single-letter symbol set are skipped.
///
/// # Parameters
/// - `roman`: The Roman numeral to read.
///
/// # Returns
/// The integer value of the numeral.
///
/// # Example
/// ```
/// use numera::numerals::convert::roman_to_arabic;
///
/// assert_eq!(roman_to_arabic("LXXXI"), 81);
/// assert_eq!(roman_to_arabic("IX"), 9);
/// ```
#[must_use]
pub fn roman_to_arabic(roman: &str) -> i64 {
    let mut previous: Option<i64> = None;
    let mut result = 0;

    for symbol in roman.chars() {
        let Some(magnitude) = symbol_magnitude(symbol) else {
            continue;
        };

        match previous {
            Some(prev) if magnitude > prev => result += magnitude - prev * 2,
            _ => result += magnitude,
        }

        previous = Some(magnitude);
    }

    result
}
