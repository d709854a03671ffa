//! Harness synthesis
//!
//! Turns raw submitted source text plus one serialized test input into a
//! self-contained program that prints exactly one serialized result to
//! standard output. The submitted source is untrusted and may be
//! syntactically invalid; synthesis is purely textual and never fails.

use std::sync::LazyLock;

use regex::Regex;

/// Named function declaration: `function add(a, b) { ... }`
static FUNCTION_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"function\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*\(([^)]*)\)")
        .expect("invalid function declaration pattern")
});

/// Arrow assignment with parenthesized parameters: `const add = (a, b) => ...`
static ARROW_ASSIGN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:const|let|var)\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*=\s*\(([^)]*)\)\s*=>")
        .expect("invalid arrow assignment pattern")
});

/// Arrow assignment with a single bare parameter: `const square = n => ...`
static BARE_ARROW_ASSIGN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:const|let|var)\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*=\s*[A-Za-z_$][A-Za-z0-9_$]*\s*=>")
        .expect("invalid bare arrow assignment pattern")
});

/// A top-level callable extracted from submitted source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Callable {
    pub name: String,
    pub param_count: usize,
}

impl Callable {
    /// Multi-arg mode spreads the deserialized input as separate arguments
    pub fn is_multi_arg(&self) -> bool {
        self.param_count > 1
    }
}

/// Find the first top-level callable in source order.
///
/// Multiple callables are not an error; the first syntactic match wins
/// deterministically.
pub fn find_callable(source: &str) -> Option<Callable> {
    let mut best: Option<(usize, Callable)> = None;

    let mut consider = |start: usize, candidate: Callable| {
        if best.as_ref().is_none_or(|(s, _)| start < *s) {
            best = Some((start, candidate));
        }
    };

    if let Some(caps) = FUNCTION_DECL.captures(source) {
        let m = caps.get(0).map(|m| m.start()).unwrap_or(0);
        consider(
            m,
            Callable {
                name: caps[1].to_string(),
                param_count: count_params(&caps[2]),
            },
        );
    }
    if let Some(caps) = ARROW_ASSIGN.captures(source) {
        let m = caps.get(0).map(|m| m.start()).unwrap_or(0);
        consider(
            m,
            Callable {
                name: caps[1].to_string(),
                param_count: count_params(&caps[2]),
            },
        );
    }
    if let Some(caps) = BARE_ARROW_ASSIGN.captures(source) {
        let m = caps.get(0).map(|m| m.start()).unwrap_or(0);
        consider(
            m,
            Callable {
                name: caps[1].to_string(),
                param_count: 1,
            },
        );
    }

    best.map(|(_, callable)| callable)
}

fn count_params(params: &str) -> usize {
    let trimmed = params.trim();
    if trimmed.is_empty() {
        0
    } else {
        trimmed.split(',').count()
    }
}

/// Synthesize an executable program from submitted source and one test input.
///
/// With no recognizable callable the source is returned unchanged and runs
/// as a free-standing script (the bare "run code" action).
pub fn synthesize(source: &str, input: &str) -> String {
    let Some(callable) = find_callable(source) else {
        return source.to_string();
    };

    // Embed the raw input as a JSON string literal; the harness parses it at
    // runtime so malformed inputs surface as a runtime diagnostic.
    let input_literal =
        serde_json::to_string(input).unwrap_or_else(|_| String::from("\"null\""));

    let call = if callable.is_multi_arg() {
        format!("{}(...__input)", callable.name)
    } else {
        format!("{}(__input)", callable.name)
    };

    format!(
        "{source}\n\n\
         const __input = JSON.parse({input_literal});\n\
         const __result = {call};\n\
         console.log(JSON.stringify(__result));\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_function_multi_arg() {
        let callable = find_callable("function add(a, b) { return a + b; }").unwrap();
        assert_eq!(callable.name, "add");
        assert_eq!(callable.param_count, 2);
        assert!(callable.is_multi_arg());
    }

    #[test]
    fn test_named_function_single_arg() {
        let callable = find_callable("function square(n) { return n * n; }").unwrap();
        assert_eq!(callable.name, "square");
        assert_eq!(callable.param_count, 1);
        assert!(!callable.is_multi_arg());
    }

    #[test]
    fn test_arrow_with_parens() {
        let callable = find_callable("const sum = (a, b, c) => a + b + c;").unwrap();
        assert_eq!(callable.name, "sum");
        assert_eq!(callable.param_count, 3);
    }

    #[test]
    fn test_bare_arrow_param() {
        let callable = find_callable("let double = x => x * 2;").unwrap();
        assert_eq!(callable.name, "double");
        assert_eq!(callable.param_count, 1);
    }

    #[test]
    fn test_zero_params() {
        let callable = find_callable("function greet() { return 'hi'; }").unwrap();
        assert_eq!(callable.param_count, 0);
        assert!(!callable.is_multi_arg());
    }

    #[test]
    fn test_first_match_wins() {
        let source = "const first = x => x;\nfunction second(a, b) { return a; }";
        let callable = find_callable(source).unwrap();
        assert_eq!(callable.name, "first");
    }

    #[test]
    fn test_no_callable() {
        assert_eq!(find_callable("console.log('hello');"), None);
    }

    #[test]
    fn test_synthesize_multi_arg_spreads_input() {
        let program = synthesize("function add(a, b) { return a + b; }", "[2,3]");
        assert!(program.contains("JSON.parse(\"[2,3]\")"));
        assert!(program.contains("add(...__input)"));
        assert!(program.contains("console.log(JSON.stringify(__result))"));
    }

    #[test]
    fn test_synthesize_single_arg_passes_directly() {
        let program = synthesize("function square(n) { return n * n; }", "4");
        assert!(program.contains("square(__input)"));
        assert!(!program.contains("..."));
    }

    #[test]
    fn test_synthesize_raw_script_passthrough() {
        let source = "console.log('standalone');";
        assert_eq!(synthesize(source, ""), source);
    }

    #[test]
    fn test_synthesize_escapes_input_literal() {
        let program = synthesize("function echo(s) { return s; }", "\"quoted\"");
        // The embedded literal must be JSON-escaped, not spliced verbatim.
        assert!(program.contains(r#"JSON.parse("\"quoted\"")"#));
    }

    #[test]
    fn test_two_sum_shape() {
        let program = synthesize(
            "function twoSum(nums, target) { return [0, 1]; }",
            "[[2,7,11,15],9]",
        );
        assert!(program.contains("twoSum(...__input)"));
    }
}
