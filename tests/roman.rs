use interpreta::{
    interpreter::rule::{ROMAN_RULES, Rule, matching_rules, scan},
    render_roman, roman_result,
};

fn assert_result(input: &str, expected: u32) {
    let result = roman_result(input);
    assert_eq!(result, expected, "Input {input:?} scored {result}, expected {expected}");
}

#[test]
fn known_symbols() {
    assert_result("I", 1);
    assert_result("IV", 4);
    assert_result("V", 5);
}

#[test]
fn unknown_input_scores_zero() {
    for input in ["X", "", "iv", "i", "v", "II", "VI", "IIII", " IV", "IV ", "IVV"] {
        assert_result(input, 0);
    }
}

#[test]
fn evaluation_is_idempotent() {
    for input in ["I", "IV", "V", "X", ""] {
        assert_eq!(roman_result(input), roman_result(input));
    }
}

#[test]
fn no_input_matches_more_than_one_rule() {
    let candidates = ROMAN_RULES.iter().map(|rule| rule.token).chain(["", "X", "IIV", "VI"]);

    for input in candidates {
        assert!(matching_rules(input, &ROMAN_RULES).len() <= 1,
                "Input {input:?} matched more than one rule");
    }

    for (i, a) in ROMAN_RULES.iter().enumerate() {
        for b in &ROMAN_RULES[i + 1..] {
            assert_ne!(a.token, b.token, "Rules {a:?} and {b:?} share a token");
        }
    }
}

#[test]
fn declaration_order_does_not_change_outcome() {
    let mut reversed = ROMAN_RULES;
    reversed.reverse();

    for input in ["I", "IV", "V", "X"] {
        assert_eq!(scan(input, &ROMAN_RULES), scan(input, &reversed));
    }
}

#[test]
fn first_match_wins_for_overlapping_rules() {
    let rules = [Rule::new("A", 1), Rule::new("A", 2)];
    assert_eq!(scan("A", &rules), 1);
    assert_eq!(matching_rules("A", &rules).len(), 2);
}

#[test]
fn empty_rule_set_scores_zero() {
    assert_eq!(scan("IV", &[]), 0);
}

#[test]
fn rule_returns_value_only_on_exact_match() {
    let one = Rule::new("I", 1);
    assert_eq!(one.interpret("I"), 1);
    assert_eq!(one.interpret("II"), 0);
    assert_eq!(one.interpret("I\n"), 0);
}

#[test]
fn output_line_format() {
    assert_eq!(render_roman(roman_result("IV")), "Resultado: 4");
    assert_eq!(render_roman(roman_result("X")), "Resultado: 0");
}
