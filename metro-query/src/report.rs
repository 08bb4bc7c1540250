//! Human-readable rendering of query results.

use std::io::{self, Write};

use crate::domain::QueryResult;

/// Marker printed in place of a duration when a query failed.
pub const FAILURE_MARKER: &str = "query failed";

/// Render one result as a single line (without trailing newline).
///
/// ```
/// use metro_query::domain::QueryResult;
/// use metro_query::report::format_result;
///
/// let ok = QueryResult::new("A".into(), "B".into(), Some(180));
/// assert_eq!(format_result(&ok), "A -> B: 180s (3.0 min)");
///
/// let failed = QueryResult::new("A".into(), "B".into(), None);
/// assert_eq!(format_result(&failed), "A -> B: query failed");
/// ```
pub fn format_result(result: &QueryResult) -> String {
    match (result.duration_secs, result.duration_minutes()) {
        (Some(secs), Some(mins)) => {
            format!("{} -> {}: {secs}s ({mins:.1} min)", result.start, result.end)
        }
        _ => format!("{} -> {}: {FAILURE_MARKER}", result.start, result.end),
    }
}

/// Write one line per result to `out`.
pub fn print_results<W: Write>(out: &mut W, results: &[QueryResult]) -> io::Result<()> {
    for result in results {
        writeln!(out, "{}", format_result(result))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(results: &[QueryResult]) -> String {
        let mut out = Vec::new();
        print_results(&mut out, results).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn success_shows_seconds_and_minutes() {
        let text = render(&[QueryResult::new("A".into(), "B".into(), Some(180))]);
        assert!(text.contains("180"));
        assert!(text.contains("3.0"));
        assert_eq!(text, "A -> B: 180s (3.0 min)\n");
    }

    #[test]
    fn minutes_rounded_to_one_decimal() {
        let result = QueryResult::new("A".into(), "B".into(), Some(200));
        assert_eq!(format_result(&result), "A -> B: 200s (3.3 min)");
    }

    #[test]
    fn failure_has_marker_and_no_number() {
        let text = render(&[QueryResult::new("A".into(), "B".into(), None)]);
        assert!(text.contains(FAILURE_MARKER));
        assert!(!text.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn one_line_per_result_in_order() {
        let text = render(&[
            QueryResult::new("解放碑".into(), "小什字".into(), Some(120)),
            QueryResult::new("C".into(), "D".into(), None),
        ]);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec!["解放碑 -> 小什字: 120s (2.0 min)", "C -> D: query failed"]
        );
    }

    #[test]
    fn empty_prints_nothing() {
        assert_eq!(render(&[]), "");
    }
}
