//! Output comparison
//!
//! Test authors may supply expected output as a structured literal
//! (`[1,2,3]`) or a plain scalar/string. Both sides are parsed as JSON when
//! possible and compared structurally, which tolerates formatting
//! differences like array spacing; otherwise comparison degrades to exact
//! string equality after trimming. Pure, no side effects.

use serde_json::Value;

/// Comparison outcome with normalized forms for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub passed: bool,
    pub actual: String,
    pub expected: String,
}

/// Compare captured output against expected output.
pub fn compare(actual: &str, expected: &str) -> Comparison {
    let actual_value: Result<Value, _> = serde_json::from_str(actual);
    let expected_value: Result<Value, _> = serde_json::from_str(expected);

    match (actual_value, expected_value) {
        (Ok(a), Ok(e)) => Comparison {
            passed: a == e,
            actual: a.to_string(),
            expected: e.to_string(),
        },
        // Parse failure on either side is not an error; fall back to
        // trimmed string equality.
        _ => {
            let a = actual.trim();
            let e = expected.trim();
            Comparison {
                passed: a == e,
                actual: a.to_string(),
                expected: e.to_string(),
            }
        }
    }
}
