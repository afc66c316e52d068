//! Marker block surgery on the editor settings document
//!
//! The document is handled as lines so comments and formatting are never
//! touched. The managed region starts at the first line containing
//! [`START_MARKER`] and ends at the first line at or after it containing
//! [`END_MARKER`].

use std::ops::RangeInclusive;

/// Token identifying the first line of the managed block
pub const START_MARKER: &str = "// create-prettier-config:start";

/// Token identifying the last line of the managed block
pub const END_MARKER: &str = "// create-prettier-config:end";

/// The canonical managed block, sentinels included
pub const BLOCK_LINES: [&str; 4] = [
    "  // create-prettier-config:start",
    "  \"editor.formatOnSave\": true,",
    "  \"editor.defaultFormatter\": \"esbenp.prettier-vscode\",",
    "  // create-prettier-config:end",
];

/// Locate the managed block, returning its inclusive line range
pub fn find_block<S: AsRef<str>>(lines: &[S]) -> Option<RangeInclusive<usize>> {
    let start = lines
        .iter()
        .position(|line| line.as_ref().contains(START_MARKER))?;
    let len = lines[start..]
        .iter()
        .position(|line| line.as_ref().contains(END_MARKER))?;
    Some(start..=start + len)
}

/// Check whether a document carries a managed block
pub fn has_block(document: &str) -> bool {
    let lines: Vec<&str> = document.split('\n').collect();
    find_block(&lines).is_some()
}

/// Insert or replace the managed block
///
/// - an existing block is replaced in place, so merging twice is a no-op
/// - otherwise the block goes right after the first line starting with `{`;
///   an object that also closes on that line is split open around the block
/// - with no opening brace at all, a minimal `{ block }` document is produced
///
/// # Example
/// ```
/// use create_prettier_config::settings::block::merge_block;
///
/// let merged = merge_block("{\n\"a\": 1\n}");
/// assert!(merged.starts_with("{\n  // create-prettier-config:start\n"));
/// assert!(merged.ends_with("\"a\": 1\n}\n"));
/// ```
pub fn merge_block(document: &str) -> String {
    let mut lines: Vec<&str> = document.split('\n').collect();

    if let Some(range) = find_block(&lines) {
        lines.splice(range, BLOCK_LINES);
    } else if let Some(brace) = lines.iter().position(|l| l.trim().starts_with('{')) {
        let line = lines[brace];
        match single_line_object(line) {
            Some((open, close)) => {
                // Object opened and closed on one line: open it up around the block
                let inner = line[open + 1..close].trim();
                let mut expanded = vec![&line[..=open]];
                expanded.extend(BLOCK_LINES);
                if !inner.is_empty() {
                    expanded.push(inner);
                }
                expanded.push(&line[close..]);
                lines.splice(brace..=brace, expanded);
            }
            None => {
                lines.splice(brace + 1..brace + 1, BLOCK_LINES);
            }
        }
    } else {
        lines = wrapped_block();
    }

    finish(&lines.join("\n"))
}

/// Remove the managed block, leaving the rest of the document in place
///
/// Blank lines left behind at the seam collapse into the one separator that
/// was already there. A document without a block comes back unchanged apart
/// from trailing whitespace normalization.
pub fn remove_block(document: &str) -> String {
    let mut lines: Vec<&str> = document.split('\n').collect();

    if let Some(range) = find_block(&lines) {
        let seam = *range.start();
        lines.drain(range);

        while seam < lines.len()
            && lines[seam].trim().is_empty()
            && (seam == 0 || lines[seam - 1].trim().is_empty())
        {
            lines.remove(seam);
        }
    }

    finish(&lines.join("\n"))
}

/// Byte offsets of the first `{` on `line` and the `}` closing it, if both
/// are on this line and no line comment comes first
fn single_line_object(line: &str) -> Option<(usize, usize)> {
    let open = line.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in line[open..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some((open, open + i));
                }
            }
            '/' if line[open + i..].starts_with("//") => return None,
            _ => {}
        }
    }
    None
}

/// The block wrapped in a minimal object
fn wrapped_block<'a>() -> Vec<&'a str> {
    let mut lines = Vec::with_capacity(BLOCK_LINES.len() + 2);
    lines.push("{");
    lines.extend(BLOCK_LINES);
    lines.push("}");
    lines
}

/// Trim trailing whitespace and end with exactly one newline
fn finish(document: &str) -> String {
    format!("{}\n", document.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::parse_settings;
    use pretty_assertions::assert_eq;
    use std::path::Path;

    fn block() -> String {
        BLOCK_LINES.join("\n")
    }

    #[test]
    fn test_find_block_first_pair() {
        let lines = [
            "{",
            "  // create-prettier-config:start",
            "  \"x\": 1,",
            "  // create-prettier-config:end",
            "  // create-prettier-config:start",
            "  // create-prettier-config:end",
            "}",
        ];
        assert_eq!(find_block(&lines), Some(1..=3));
    }

    #[test]
    fn test_find_block_end_before_start_is_ignored() {
        // An end sentinel above the start does not close it
        let lines = [
            "// create-prettier-config:end",
            "{",
            "// create-prettier-config:start",
            "}",
        ];
        assert_eq!(find_block(&lines), None);
    }

    #[test]
    fn test_find_block_missing_end() {
        let lines = ["{", "  // create-prettier-config:start", "}"];
        assert_eq!(find_block(&lines), None);
    }

    #[test]
    fn test_merge_inserts_after_opening_brace() {
        let merged = merge_block("{\n\"a\": 1\n}");
        assert_eq!(merged, format!("{{\n{}\n\"a\": 1\n}}\n", block()));
    }

    #[test]
    fn test_merge_keeps_lines_above_brace() {
        let doc = "// workspace settings\n\n  {\n  \"files.eol\": \"\\n\"\n}\n";
        let merged = merge_block(doc);
        assert_eq!(
            merged,
            format!(
                "// workspace settings\n\n  {{\n{}\n  \"files.eol\": \"\\n\"\n}}\n",
                block()
            )
        );
    }

    #[test]
    fn test_merge_replaces_exactly_the_marker_range() {
        let doc = [
            "{",
            "  \"before\": true,",
            "  // create-prettier-config:start",
            "  \"editor.formatOnSave\": false,",
            "  \"stale.key\": 1,",
            "  // create-prettier-config:end",
            "  \"after\": true",
            "}",
        ]
        .join("\n");

        let merged = merge_block(&doc);
        let expected = format!(
            "{{\n  \"before\": true,\n{}\n  \"after\": true\n}}\n",
            block()
        );
        assert_eq!(merged, expected);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let once = merge_block("{\n  \"a\": 1\n}\n\n\n");
        let twice = merge_block(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_merge_empty_document() {
        assert_eq!(merge_block(""), format!("{{\n{}\n}}\n", block()));
    }

    #[test]
    fn test_merge_empty_object_on_one_line() {
        assert_eq!(merge_block("{}"), format!("{{\n{}\n}}\n", block()));
    }

    #[test]
    fn test_merge_opens_single_line_object() {
        let merged = merge_block("{ \"a\": 1 }");
        assert_eq!(merged, format!("{{\n{}\n\"a\": 1\n}}\n", block()));

        let parsed = parse_settings(&merged, Path::new("settings.json")).unwrap();
        assert_eq!(parsed["a"], serde_json::json!(1));
        assert_eq!(parsed["editor.formatOnSave"], serde_json::json!(true));
    }

    #[test]
    fn test_merge_single_line_object_with_nesting_and_strings() {
        let merged = merge_block("  { \"a\": { \"b\": \"}\" } } // tail");
        assert_eq!(
            merged,
            format!("  {{\n{}\n\"a\": {{ \"b\": \"}}\" }}\n}} // tail\n", block())
        );
    }

    #[test]
    fn test_merge_brace_line_with_comment_is_not_split() {
        let merged = merge_block("{ // settings {}\n  \"a\": 1\n}");
        assert_eq!(
            merged,
            format!("{{ // settings {{}}\n{}\n  \"a\": 1\n}}\n", block())
        );
    }

    #[test]
    fn test_merge_without_brace_synthesizes_document() {
        assert_eq!(
            merge_block("not json at all"),
            format!("{{\n{}\n}}\n", block())
        );
    }

    #[test]
    fn test_merge_unterminated_block_inserts_fresh() {
        let doc = "{\n  // create-prettier-config:start\n  \"a\": 1\n}";
        let merged = merge_block(doc);
        assert_eq!(
            merged,
            format!(
                "{{\n{}\n  // create-prettier-config:start\n  \"a\": 1\n}}\n",
                block()
            )
        );
    }

    #[test]
    fn test_merge_preserves_crlf_lines() {
        let merged = merge_block("{\r\n  \"a\": 1\r\n}\r\n");
        assert!(merged.contains("  \"a\": 1\r\n}"));
        assert!(merged.ends_with("}\n"));
    }

    #[test]
    fn test_has_block() {
        assert!(!has_block("{\n}"));
        assert!(has_block(&merge_block("{\n}")));
    }

    #[test]
    fn test_remove_block_inverts_merge() {
        let doc = "{\n  \"a\": 1,\n  // keep me\n  \"b\": [1, 2]\n}\n";
        assert_eq!(remove_block(&merge_block(doc)), doc);
    }

    #[test]
    fn test_remove_block_collapses_blank_seam() {
        let doc = format!("{{\n  \"a\": 1,\n\n{}\n\n  \"b\": 2\n}}", block());
        assert_eq!(remove_block(&doc), "{\n  \"a\": 1,\n\n  \"b\": 2\n}\n");
    }

    #[test]
    fn test_remove_block_from_synthesized_document() {
        assert_eq!(remove_block(&merge_block("")), "{\n}\n");
    }

    #[test]
    fn test_remove_block_without_block() {
        assert_eq!(remove_block("{\n  \"a\": 1\n}  \n\n"), "{\n  \"a\": 1\n}\n");
    }
}
