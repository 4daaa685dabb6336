//! Annotation weaver.
//!
//! Rewrites a plain [`Document`] into the annotated text that lands on disk:
//! section banners and per-field commentary from the [`FIELDS`] table are
//! inserted directly above each field line. Comments are reconstructed from
//! metadata on every write and never read back, so a hand-edited file picks
//! up current documentation on the next load.
//!
//! The weaver only looks at the `name` tag on field lines; it never parses
//! rendered text.

use crate::config::codec::{DocLine, Document};
use crate::config::schema::{field_spec, BLANK_LINE_MARKER};

/// Render a document with commentary woven in above each field line.
///
/// Per field: banner block first, then comment lines (one `//` line per
/// metadata line, trimmed), then the field line unchanged; documented fields
/// get one separating blank line after. Lines without metadata pass through
/// untouched. A post-pass inserts a blank line after every closing array
/// bracket.
pub fn annotate(document: &Document) -> String {
    let mut lines: Vec<String> = Vec::new();

    for line in &document.lines {
        match line {
            DocLine::Plain(text) => lines.push(text.clone()),
            DocLine::Field { name, rendered } => {
                let spec = field_spec(name);

                if let Some(banner) = spec.and_then(|spec| spec.banner) {
                    push_banner(&mut lines, banner);
                }

                let comment = spec.and_then(|spec| spec.comment);
                if let Some(comment) = comment {
                    for comment_line in comment.split('\n') {
                        lines.push(format!("// {}", comment_line.trim()));
                    }
                }

                lines.push(rendered.clone());

                if comment.is_some() {
                    lines.push(String::new());
                }
            }
        }
    }

    let mut out = String::new();
    for line in &lines {
        out.push_str(line);
        out.push('\n');
        if is_array_close(line) {
            out.push('\n');
        }
    }
    out
}

/// Emit a banner block. The blank-line marker controls spacing: present
/// anywhere, the banner gets a blank line after it; present at the start,
/// also one before it. Without the marker the banner is a bare comment line.
fn push_banner(lines: &mut Vec<String>, banner: &str) {
    if banner.contains(BLANK_LINE_MARKER) {
        let text = banner.replace(BLANK_LINE_MARKER, "");
        if banner.starts_with(BLANK_LINE_MARKER) {
            lines.push(String::new());
        }
        lines.push(format!("// {}", text.trim()));
        lines.push(String::new());
    } else {
        lines.push(format!("// {banner}"));
    }
}

/// Closing array bracket, optionally followed by a comma.
fn is_array_close(line: &str) -> bool {
    matches!(line.trim(), "]" | "],")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::codec::encode;
    use crate::config::schema::ConfigRecord;

    fn annotated_default_lines() -> Vec<String> {
        annotate(&encode(&ConfigRecord::default()))
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_banner_with_trailing_marker_gets_blank_after_only() {
        let lines = annotated_default_lines();

        assert_eq!(lines[0], "{");
        assert_eq!(
            lines[1],
            "// ----------------------------[ ↓ Plugin Info ↓ ]----------------------------"
        );
        assert_eq!(lines[2], "");
        assert!(lines[3].starts_with("  \"Version\": "));
    }

    #[test]
    fn test_banner_with_leading_marker_gets_blank_before() {
        let lines = annotated_default_lines();

        let banner_at = lines
            .iter()
            .position(|line| line.contains("Locally Config"))
            .unwrap();
        assert_eq!(lines[banner_at - 1], "");
        assert_eq!(lines[banner_at + 1], "");
        assert!(lines[banner_at].starts_with("// ---"));
    }

    #[test]
    fn test_banner_without_marker_is_a_bare_comment_line() {
        let mut lines = Vec::new();
        push_banner(&mut lines, "no marker here");
        assert_eq!(lines, vec!["// no marker here".to_string()]);
    }

    #[test]
    fn test_comment_lines_precede_field_line_in_order() {
        let lines = annotated_default_lines();

        let field_at = lines
            .iter()
            .position(|line| line.starts_with("  \"Locally_Enable\": "))
            .unwrap();
        let expected = [
            "// Save Chat Messages Locally (In ../chat-logger/logs/)?",
            "// 1 = Yes, But Log When Player Chat Direct",
            "// 2 = Yes, But Log And Send All Messages When Round End (Recommended For Performance)",
            "// 3 = Yes, But Log And Send All Messages When Map End (Recommended For Performance)",
            "// 0 = No, Disable",
        ];
        for (offset, comment) in expected.iter().rev().enumerate() {
            assert_eq!(&lines[field_at - 1 - offset], comment);
        }
        assert_eq!(lines[field_at + 1], "");
    }

    #[test]
    fn test_undocumented_fields_stay_adjacent() {
        let lines = annotated_default_lines();

        let version_at = lines
            .iter()
            .position(|line| line.starts_with("  \"Version\": "))
            .unwrap();
        assert!(lines[version_at + 1].starts_with("  \"Link\": "));
    }

    #[test]
    fn test_unknown_field_passes_through_unannotated() {
        let document = Document {
            lines: vec![
                DocLine::Plain("{".to_string()),
                DocLine::Field {
                    name: "Mystery".to_string(),
                    rendered: "  \"Mystery\": 1".to_string(),
                },
                DocLine::Plain("}".to_string()),
            ],
        };

        let annotated = annotate(&document);
        assert_eq!(annotated, "{\n  \"Mystery\": 1\n}\n");
    }

    #[test]
    fn test_blank_line_inserted_after_array_close() {
        let document = Document {
            lines: vec![
                DocLine::Plain("{".to_string()),
                DocLine::Field {
                    name: "List".to_string(),
                    rendered: "  \"List\": [".to_string(),
                },
                DocLine::Plain("    \"entry\",".to_string()),
                DocLine::Plain("  ],".to_string()),
                DocLine::Plain("}".to_string()),
            ],
        };

        let annotated = annotate(&document);
        assert_eq!(
            annotated,
            "{\n  \"List\": [\n    \"entry\",\n  ],\n\n}\n"
        );
    }

    #[test]
    fn test_annotate_is_idempotent_on_structure() {
        let document = encode(&ConfigRecord::default());
        let first = annotate(&document);

        let re_extracted = Document::from_text(&first);
        assert_eq!(re_extracted, document);

        let second = annotate(&re_extracted);
        assert_eq!(second, first);
    }
}
