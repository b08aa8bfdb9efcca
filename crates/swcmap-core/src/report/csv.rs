//! CSV rendering and export.
//!
//! Hand-rendered delimited output: UTF-8 with a byte order mark so
//! spreadsheet tools pick the right encoding, a header row in fixed
//! column order, and minimal quoting with doubled quote characters.

use std::fs;
use std::path::Path;

use crate::errors::ExportError;
use super::types::{ReportRow, COLUMNS};

const BOM: &str = "\u{feff}";

/// Render rows as CSV text, header included.
pub fn render(rows: &[ReportRow]) -> String {
    let mut out = String::new();
    out.push_str(BOM);
    out.push_str(&COLUMNS.join(","));
    out.push('\n');

    for row in rows {
        let fields = row.fields();
        let encoded: Vec<String> = fields.iter().map(|f| escape_field(f)).collect();
        out.push_str(&encoded.join(","));
        out.push('\n');
    }

    out
}

/// Write the rendered report to `path`.
pub fn export(rows: &[ReportRow], path: &Path) -> Result<(), ExportError> {
    fs::write(path, render(rows)).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse CSV text back into raw field records, header row included.
/// Understands exactly the quoting `render` produces; used to verify
/// exported output.
pub fn parse_records(text: &str) -> Vec<Vec<String>> {
    let body = text.strip_prefix(BOM).unwrap_or(text);

    let mut records = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => fields.push(std::mem::take(&mut field)),
                '\n' => {
                    fields.push(std::mem::take(&mut field));
                    records.push(std::mem::take(&mut fields));
                }
                '\r' => {}
                _ => field.push(c),
            }
        }
    }
    if !field.is_empty() || !fields.is_empty() {
        fields.push(field);
        records.push(fields);
    }

    records
}

/// Quote a field when it contains the delimiter, a quote, or a line
/// break; embedded quotes are doubled.
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
