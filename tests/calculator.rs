use numera::{
    calculator::{
        evaluator::{evaluate_arabic, evaluate_roman},
        parser::parse_expression,
    },
    evaluate,
    expr::{Notation, Operation, ParsedExpression},
    numerals::{
        convert::{arabic_to_roman, roman_to_arabic},
        table::{ARABIC_MAGNITUDES, ROMAN_SYMBOLS},
    },
};

const OPERATIONS: [Operation; 4] =
    [Operation::Add, Operation::Sub, Operation::Mul, Operation::Div];

const ARABIC_OPERANDS: [&str; 10] = ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"];
const ROMAN_OPERANDS: [&str; 10] =
    ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];

fn assert_no_match(expression: &str) {
    assert!(parse_expression(expression).is_none(),
            "'{expression}' parsed but should not match");
}

#[test]
fn tables_are_aligned_and_descending() {
    assert_eq!(ARABIC_MAGNITUDES.len(), 13);
    assert_eq!(ROMAN_SYMBOLS.len(), 13);

    for window in ARABIC_MAGNITUDES.windows(2) {
        assert!(window[0] > window[1], "magnitudes must strictly descend");
    }
}

#[test]
fn table_entries_convert_both_ways() {
    for (index, magnitude) in ARABIC_MAGNITUDES.iter().enumerate() {
        assert_eq!(arabic_to_roman(*magnitude), ROMAN_SYMBOLS[index]);
        assert_eq!(roman_to_arabic(ROMAN_SYMBOLS[index]), *magnitude);
    }
}

#[test]
fn conversion_round_trips_over_full_range() {
    for number in 1..=1000 {
        let roman = arabic_to_roman(number);
        assert_eq!(roman_to_arabic(&roman), number, "round trip failed for {number}");
        assert_eq!(arabic_to_roman(roman_to_arabic(&roman)), roman);
    }
}

#[test]
fn conversion_example_values() {
    assert_eq!(arabic_to_roman(81), "LXXXI");
    assert_eq!(roman_to_arabic("LXXXI"), 81);
    assert_eq!(arabic_to_roman(999), "CMXCIX");
    assert_eq!(roman_to_arabic("CMXCIX"), 999);
}

#[test]
fn arabic_evaluation_example_and_edges() {
    assert_eq!(evaluate_arabic("9", Operation::Mul, "9").unwrap(), "81");

    assert_eq!(evaluate_arabic("1", Operation::Add, "1").unwrap(), "2");
    assert_eq!(evaluate_arabic("1", Operation::Sub, "1").unwrap(), "0");
    assert_eq!(evaluate_arabic("1", Operation::Mul, "1").unwrap(), "1");
    assert_eq!(evaluate_arabic("1", Operation::Div, "1").unwrap(), "1");

    assert_eq!(evaluate_arabic("10", Operation::Add, "10").unwrap(), "20");
    assert_eq!(evaluate_arabic("10", Operation::Sub, "10").unwrap(), "0");
    assert_eq!(evaluate_arabic("10", Operation::Mul, "10").unwrap(), "100");
    assert_eq!(evaluate_arabic("10", Operation::Div, "10").unwrap(), "1");

    // Subtraction may go negative on the Arabic path.
    assert_eq!(evaluate_arabic("1", Operation::Sub, "10").unwrap(), "-9");
    // Division truncates toward zero.
    assert_eq!(evaluate_arabic("9", Operation::Div, "2").unwrap(), "4");
}

#[test]
fn roman_evaluation_example_and_edges() {
    assert_eq!(evaluate_roman("IX", Operation::Mul, "IX"), "LXXXI");

    assert_eq!(evaluate_roman("I", Operation::Add, "I"), "II");
    assert_eq!(evaluate_roman("I", Operation::Sub, "I"), "");
    assert_eq!(evaluate_roman("I", Operation::Mul, "I"), "I");
    assert_eq!(evaluate_roman("I", Operation::Div, "I"), "I");

    assert_eq!(evaluate_roman("X", Operation::Add, "X"), "XX");
    assert_eq!(evaluate_roman("X", Operation::Sub, "X"), "");
    assert_eq!(evaluate_roman("X", Operation::Mul, "X"), "C");
    assert_eq!(evaluate_roman("X", Operation::Div, "X"), "I");
}

#[test]
fn roman_non_positive_results_are_empty() {
    assert_eq!(evaluate_roman("I", Operation::Sub, "X"), "");
    assert_eq!(evaluate_roman("V", Operation::Sub, "V"), "");
}

#[test]
fn parser_extracts_example_expressions() {
    assert_eq!(parse_expression("9 * 9").unwrap(),
               ParsedExpression { left_operand:  "9".to_string(),
                                  operation:     Operation::Mul,
                                  right_operand: "9".to_string(),
                                  notation:      Notation::Arabic, });

    assert_eq!(parse_expression("IX * IX").unwrap(),
               ParsedExpression { left_operand:  "IX".to_string(),
                                  operation:     Operation::Mul,
                                  right_operand: "IX".to_string(),
                                  notation:      Notation::Roman, });
}

#[test]
fn parser_matches_full_operand_grid() {
    for operation in OPERATIONS {
        for operand in ARABIC_OPERANDS {
            let parsed =
                parse_expression(&format!("{operand} {operation} {operand}")).unwrap();
            assert_eq!(parsed.left_operand, operand);
            assert_eq!(parsed.operation, operation);
            assert_eq!(parsed.right_operand, operand);
            assert_eq!(parsed.notation, Notation::Arabic);
        }

        for operand in ROMAN_OPERANDS {
            let parsed =
                parse_expression(&format!("{operand} {operation} {operand}")).unwrap();
            assert_eq!(parsed.left_operand, operand);
            assert_eq!(parsed.operation, operation);
            assert_eq!(parsed.right_operand, operand);
            assert_eq!(parsed.notation, Notation::Roman);
        }
    }
}

#[test]
fn parser_rejects_incomplete_expressions() {
    assert_no_match("");
    assert_no_match("9");
    assert_no_match("9 * ");
    assert_no_match(" * 9");
    assert_no_match("IX");
    assert_no_match("IX * ");
    assert_no_match(" * IX");
}

#[test]
fn parser_rejects_malformed_expressions() {
    // Mixed notations.
    assert_no_match("9 + IX");
    assert_no_match("IX + 9");
    // Operands outside 1-10.
    assert_no_match("0 + 1");
    assert_no_match("11 + 1");
    assert_no_match("XI + I");
    assert_no_match("100 + 1");
    // Unrecognized operators and extra tokens.
    assert_no_match("9 % 9");
    assert_no_match("9 * 9 * 9");
    assert_no_match("9 * 9x");
    assert_no_match("-9 + 1");
}

#[test]
fn parser_spacing_rules() {
    // Zero or more plain spaces between operand and operator.
    assert!(parse_expression("9*9").is_some());
    assert!(parse_expression("9  *  9").is_some());
    assert!(parse_expression("IX*IX").is_some());

    // Surrounding whitespace of any kind is trimmed.
    assert!(parse_expression("  9 * 9  ").is_some());
    assert!(parse_expression("\nIX * IX\t").is_some());

    // Interior whitespace other than plain spaces is not allowed.
    assert_no_match("9\t*\t9");
    assert_no_match("9 *\n9");
}

#[test]
fn evaluate_dispatches_on_notation() {
    assert_eq!(evaluate("9 * 9").unwrap(), "81");
    assert_eq!(evaluate("IX * IX").unwrap(), "LXXXI");
    assert_eq!(evaluate("1 - 10").unwrap(), "-9");
    assert_eq!(evaluate("I - X").unwrap(), "");
    assert_eq!(evaluate("10 / 10").unwrap(), "1");
}

#[test]
fn evaluate_fails_on_unparseable_input() {
    for expression in ["", "9", "9 * ", " * 9", "nonsense", "IX * 9"] {
        assert!(evaluate(expression).is_err(),
                "'{expression}' evaluated but should fail");
    }
}
