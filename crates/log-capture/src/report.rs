//! Failure-report rendering.
//!
//! Assertion failures carry a human-readable diff between the expected and
//! the captured entries. The helpers here render the captured list as a boxed
//! snippet (truncated when long) and assemble the per-failure messages used
//! by the error types.

/// Maximum number of captured entries to display in a failure report.
const MAX_ENTRIES_DISPLAY: usize = 12;

/// Render the captured entries as a boxed snippet, truncating if necessary.
#[must_use]
pub fn format_entries_snippet(entries: &[String]) -> String {
    if entries.is_empty() {
        return "(no entries were captured)".to_string();
    }

    let total = entries.len();

    if total <= MAX_ENTRIES_DISPLAY {
        return format!(
            "┌─ captured entries ({total}) ──────────────────\n│ {}\n└────────────────────────────────────────",
            numbered(entries, 0).join("\n│ ")
        );
    }

    // Long capture: show the tail with a truncation indicator
    let tail = &entries[total - MAX_ENTRIES_DISPLAY..];
    let hidden = total - tail.len();

    format!(
        "┌─ captured entries ({total}) ──────────────────\n│ ... ({hidden} entries hidden)\n│ {}\n└────────────────────────────────────────",
        numbered(tail, hidden).join("\n│ ")
    )
}

fn numbered(entries: &[String], offset: usize) -> Vec<String> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("{:>3}: {entry}", i + offset))
        .collect()
}

/// Format the failure message for an expectation that matched no entry.
#[must_use]
pub fn format_missing_error(
    expectation: &str,
    index: usize,
    searched_from: usize,
    ordered: bool,
    entries: &[String],
) -> String {
    let snippet = format_entries_snippet(entries);
    let scope = if ordered && searched_from > 0 {
        format!("(searched in order, starting at entry {searched_from})\n\n")
    } else {
        String::new()
    };

    format!(
        "expected log entry was not captured\n\
         \n\
         Expectation #{index}: {expectation}\n\
         {scope}{snippet}\n\
         \n\
         Tip: The expectation did not match any captured entry. Check that:\n\
         - The message matcher fits the actual message text\n\
         - The level, target, marker, and properties are what the code logs\n\
         - For ordered assertions, earlier expectations did not already\n\
           consume the entry you meant to match"
    )
}

/// Format the failure message for an exact scan with a count mismatch.
#[must_use]
pub fn format_count_error(expected: usize, actual: usize, entries: &[String]) -> String {
    let snippet = format_entries_snippet(entries);

    format!(
        "captured entry count does not match\n\
         \n\
         Expected exactly {expected} entries, but {actual} were captured.\n\
         \n\
         {snippet}"
    )
}

/// Format the failure message for an exact scan with a positional mismatch.
#[must_use]
pub fn format_mismatch_error(
    position: usize,
    expectation: &str,
    entry: &str,
    entries: &[String],
) -> String {
    let snippet = format_entries_snippet(entries);

    format!(
        "captured entry does not match expectation at position {position}\n\
         \n\
         Expected: {expectation}\n\
         Captured: {entry}\n\
         \n\
         {snippet}"
    )
}

/// Format the failure message for a forbidden entry that was logged anyway.
#[must_use]
pub fn format_unexpected_error(expectation: &str, index: usize, entry: &str) -> String {
    format!(
        "forbidden log entry was captured\n\
         \n\
         Expectation (must not be logged): {expectation}\n\
         Captured at entry {index}: {entry}\n\
         \n\
         Tip: Loosen the negative expectation or silence the offending log\n\
         statement."
    )
}

/// Format the failure message for entries left unmatched by prior assertions.
#[must_use]
pub fn format_unmatched_error(unmatched: &[String], total: usize) -> String {
    let snippet = format_entries_snippet(unmatched);

    format!(
        "captured entries were not covered by any assertion\n\
         \n\
         {} of {total} captured entries were never matched:\n\
         \n\
         {snippet}\n\
         \n\
         Tip: assert_nothing_else_logged() requires every captured entry to\n\
         have been matched by a previous positive assertion on this handle.",
        unmatched.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippet_empty() {
        assert_eq!(format_entries_snippet(&[]), "(no entries were captured)");
    }

    #[test]
    fn snippet_small_shows_all_numbered() {
        let entries = vec!["INFO app: one".to_string(), "WARN app: two".to_string()];
        let snippet = format_entries_snippet(&entries);
        assert!(snippet.contains("captured entries (2)"));
        assert!(snippet.contains("0: INFO app: one"));
        assert!(snippet.contains("1: WARN app: two"));
    }

    #[test]
    fn snippet_truncates_long_captures() {
        let entries: Vec<String> = (0..40).map(|i| format!("INFO app: tick {i}")).collect();
        let snippet = format_entries_snippet(&entries);
        assert!(snippet.contains("entries hidden"));
        assert!(snippet.contains("tick 39"));
        assert!(!snippet.contains("tick 0\n"));
    }

    #[test]
    fn missing_error_mentions_expectation_and_tip() {
        let msg = format_missing_error(
            "INFO message containing \"ready\"",
            1,
            2,
            true,
            &["INFO app: starting".to_string()],
        );
        assert!(msg.contains("Expectation #1"));
        assert!(msg.contains("containing \"ready\""));
        assert!(msg.contains("starting at entry 2"));
        assert!(msg.contains("Tip:"));
    }

    #[test]
    fn unmatched_error_counts() {
        let msg = format_unmatched_error(&["WARN app: leftover".to_string()], 3);
        assert!(msg.contains("1 of 3"));
        assert!(msg.contains("leftover"));
    }
}
