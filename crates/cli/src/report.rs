//! Rendering of per-line results for the `parse` and `analyze` commands.

use serde_json::{json, Map, Value};
use txsched_core::schedule::Schedule;
use txsched_core::{check, conflicts, Property};
use txsched_parser::ParseError;

/// Non-blank lines of `input` with `#` comments removed, numbered from 1.
pub fn schedule_lines(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input.lines().enumerate().filter_map(|(i, line)| {
        let code = line.split_once('#').map_or(line, |(code, _)| code).trim();
        (!code.is_empty()).then_some((i + 1, code))
    })
}

/// `R2(A),C1,W3(A)  transactions: 2, 1, 3`
#[must_use]
pub fn describe_schedule(schedule: &Schedule<String, String>) -> String {
    format!(
        "{schedule}  transactions: {}",
        schedule.transaction_ids().join(", ")
    )
}

/// `R2,C1: 'R2': read/write operations require a resource argument`
#[must_use]
pub fn describe_parse_error(text: &str, error: &ParseError) -> String {
    format!("{text}: {error}")
}

/// JSON key of a property, e.g. `conflict_serializable`.
#[must_use]
pub fn property_key(property: Property) -> String {
    property.to_string().replace(' ', "_")
}

/// Text report: the schedule, then one `name: yes|no` line per property.
///
/// With `verbose`, failed properties carry the violation and the conflicting
/// pairs are listed at the end.
#[must_use]
pub fn render_analysis(
    schedule: &Schedule<String, String>,
    properties: &[Property],
    verbose: bool,
) -> String {
    let mut out = describe_schedule(schedule);
    for &property in properties {
        let line = match check(schedule, property) {
            Ok(()) => format!("\n  {property}: yes"),
            Err(e) if verbose => format!("\n  {property}: no ({e})"),
            Err(_) => format!("\n  {property}: no"),
        };
        out.push_str(&line);
    }
    if verbose {
        let pairs = conflicts(schedule);
        if pairs.is_empty() {
            out.push_str("\n  conflicts: none");
        } else {
            out.push_str("\n  conflicts:");
            for pair in pairs {
                out.push_str(&format!("\n    {pair}"));
            }
        }
    }
    out
}

/// JSON report for one analyzed line.
#[must_use]
pub fn analysis_json(
    line: usize,
    schedule: &Schedule<String, String>,
    properties: &[Property],
    verbose: bool,
) -> Value {
    let mut results = Map::new();
    let mut violations = Map::new();
    for &property in properties {
        let outcome = check(schedule, property);
        if let Err(e) = &outcome {
            violations.insert(property_key(property), json!(e));
        }
        results.insert(property_key(property), Value::Bool(outcome.is_ok()));
    }

    let mut report = json!({
        "line": line,
        "schedule": schedule.to_string(),
        "transactions": schedule.transaction_ids(),
        "results": results,
    });
    if verbose {
        report["violations"] = Value::Object(violations);
        report["conflicts"] = conflicts(schedule)
            .iter()
            .map(|pair| Value::String(pair.to_string()))
            .collect();
    }
    report
}

#[must_use]
pub fn parse_error_json(line: usize, error: &ParseError) -> Value {
    json!({
        "line": line,
        "error": error,
        "message": error.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use txsched_parser::parse_schedule;

    use super::*;

    #[test]
    fn test_schedule_lines() {
        let input = "# header\nW1(A),C1\n\n   \nR1(A) # trailing\n#only";
        let lines: Vec<_> = schedule_lines(input).collect();
        assert_eq!(lines, [(2, "W1(A),C1"), (5, "R1(A)")]);
    }

    #[test]
    fn test_describe_schedule() {
        let schedule = parse_schedule("R2(A), C1, W3(A) C3 R2(A) C2").expect("should parse");
        assert_eq!(
            describe_schedule(&schedule),
            "R2(A),C1,W3(A),C3,R2(A),C2  transactions: 2, 1, 3"
        );
    }

    #[test]
    fn test_describe_parse_error() {
        let text = "R2,C1,W3(A),C3,R2(A),C2";
        let err = parse_schedule(text).expect_err("should fail");
        assert_eq!(
            describe_parse_error(text, &err),
            "R2,C1,W3(A),C3,R2(A),C2: 'R2': read/write operations require a resource argument"
        );
    }

    #[test]
    fn test_render_analysis() {
        let schedule = parse_schedule("W1(A),R2(A),C1,C2").expect("should parse");
        assert_eq!(
            render_analysis(&schedule, &Property::ALL, false),
            "W1(A),R2(A),C1,C2  transactions: 1, 2\
             \n  conflict serializable: yes\
             \n  recoverable: yes\
             \n  cascadeless: no\
             \n  strict: no"
        );
    }

    #[test]
    fn test_render_analysis_verbose() {
        let schedule = parse_schedule("W1(A),R2(A),C1,C2").expect("should parse");
        let text = render_analysis(&schedule, &[Property::Cascadeless], true);
        assert!(text.contains("cascadeless: no (R2(A) at 1 reads the uncommitted write of T1)"));
        assert!(text.ends_with("conflicts:\n    W1(A) -> R2(A)"));
    }

    #[test]
    fn test_analysis_json() {
        let schedule = parse_schedule("W1(A),W2(A),C2,C1").expect("should parse");
        let report = analysis_json(1, &schedule, &Property::ALL, true);
        assert_eq!(report["line"], 1);
        assert_eq!(report["transactions"], json!(["1", "2"]));
        assert_eq!(report["results"]["conflict_serializable"], true);
        assert_eq!(report["results"]["cascadeless"], true);
        assert_eq!(report["results"]["strict"], false);
        assert!(report["violations"]["strict"].is_object());
        assert_eq!(report["conflicts"], json!(["W1(A) -> W2(A)"]));
    }

    #[test]
    fn test_analysis_json_terse() {
        let schedule = parse_schedule("").expect("should parse");
        let report = analysis_json(3, &schedule, &[Property::Strict], false);
        assert_eq!(report["results"], json!({ "strict": true }));
        assert!(report.get("conflicts").is_none());
    }

    #[test]
    fn test_parse_error_json() {
        let err = parse_schedule("C1(C)").expect_err("should fail");
        let report = parse_error_json(2, &err);
        assert_eq!(report["error"]["token"], "C1(C)");
        assert_eq!(
            report["message"],
            "'C1(C)': commit operations do not take arguments"
        );
    }
}
