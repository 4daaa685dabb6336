//! Document codec for the persisted configuration.
//!
//! The codec renders a [`ConfigRecord`] into an ordered, line-oriented
//! [`Document`] and reads one back from text. Field order always follows the
//! [`FIELDS`] table, and every field occupies exactly one line; the
//! annotation weaver depends on both. Reading is deliberately lenient so a
//! hand-edited file never takes the plugin down.

use serde_json::{Map, Value};

use crate::config::schema::{ConfigRecord, FieldKind, FIELDS};

/// One line of a serialized configuration document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocLine {
    /// Structural text passed through untouched (braces, array items).
    Plain(String),
    /// A field assignment, tagged with the document field name.
    Field { name: String, rendered: String },
}

/// Ordered, annotation-free representation of a configuration document.
///
/// Field lines keep their fully rendered text; downstream passes key off the
/// `name` tag instead of re-parsing that text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub lines: Vec<DocLine>,
}

impl Document {
    /// Re-extract document structure from rendered text.
    ///
    /// Drops `//` full-line comments and blank lines and classifies what
    /// remains, so it accepts plain and annotated renderings alike. This is
    /// the first stage of [`decode`].
    pub fn from_text(text: &str) -> Self {
        let mut lines = Vec::new();
        for raw in text.lines() {
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with("//") {
                continue;
            }
            match field_name_of(raw) {
                Some(name) => lines.push(DocLine::Field {
                    name: name.to_string(),
                    rendered: raw.to_string(),
                }),
                None => lines.push(DocLine::Plain(raw.to_string())),
            }
        }
        Self { lines }
    }

    /// Render the document as plain JSON text, one line per entry.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (index, line) in self.lines.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            match line {
                DocLine::Plain(text) => out.push_str(text),
                DocLine::Field { rendered, .. } => out.push_str(rendered),
            }
        }
        out
    }
}

/// Render a record into a document, fields in declaration order.
///
/// Values render onto single lines with 2-space indentation. The record is a
/// flat struct of scalars, so serialization itself cannot fail; a missing
/// entry would surface as `null` and get caught by the schema shape test.
pub fn encode(record: &ConfigRecord) -> Document {
    let value = serde_json::to_value(record).unwrap_or_default();
    let empty = Map::new();
    let map = value.as_object().unwrap_or(&empty);

    let mut lines = Vec::with_capacity(FIELDS.len() + 2);
    lines.push(DocLine::Plain("{".to_string()));
    for (index, spec) in FIELDS.iter().enumerate() {
        let value = map.get(spec.name).cloned().unwrap_or(Value::Null);
        let comma = if index + 1 < FIELDS.len() { "," } else { "" };
        lines.push(DocLine::Field {
            name: spec.name.to_string(),
            rendered: format!("  \"{}\": {}{}", spec.name, value, comma),
        });
    }
    lines.push(DocLine::Plain("}".to_string()));
    Document { lines }
}

/// Decode a document from text.
///
/// Tolerates annotations, trailing commas, unknown fields, and per-field
/// drift: a declared field that is missing or holds the wrong type falls
/// back to the scalar zero value (0 / false / ""). Returns `None` only when
/// the text does not parse as a JSON object at all; callers treat that the
/// same as an absent file.
pub fn decode(text: &str) -> Option<ConfigRecord> {
    let stripped = Document::from_text(text).to_text();
    let cleaned = strip_trailing_commas(&stripped);
    let value: Value = serde_json::from_str(&cleaned).ok()?;
    let source = value.as_object()?;

    let mut corrected = Map::new();
    for spec in FIELDS {
        let raw = source.get(spec.name);
        let coerced = match spec.kind {
            FieldKind::Int => Value::from(raw.and_then(Value::as_i64).unwrap_or(0)),
            FieldKind::Bool => Value::from(raw.and_then(Value::as_bool).unwrap_or(false)),
            FieldKind::Text => Value::from(raw.and_then(Value::as_str).unwrap_or("")),
        };
        corrected.insert(spec.name.to_string(), coerced);
    }

    let mut record: ConfigRecord = serde_json::from_value(Value::Object(corrected)).ok()?;
    record.pin_invariants();
    Some(record)
}

/// A field line is leading whitespace, a quoted identifier, then a colon.
fn field_name_of(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix('"')?;
    let end = rest.find('"')?;
    let name = &rest[..end];
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    rest[end + 1..].trim_start().starts_with(':').then_some(name)
}

/// Drop commas that sit directly before a closing brace or bracket.
/// serde_json is strict about these; hand-edited documents are not.
fn strip_trailing_commas(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut escaped = false;

    for (index, &c) in chars.iter().enumerate() {
        if in_string {
            out.push(c);
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
            '"' => {
                in_string = true;
                out.push(c);
            }
            ',' => {
                let next = chars[index + 1..]
                    .iter()
                    .find(|c| !c.is_whitespace())
                    .copied();
                if !matches!(next, Some('}' | ']')) {
                    out.push(c);
                }
            }
            _ => out.push(c),
        }
    }
    out
}
