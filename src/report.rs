// File- and value-level entry points around the extract → render pipeline.

use std::fs;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::extract::{extract, ExtractionRecord};
use crate::render::render_record;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Extract and render in one step. Total, like both halves.
pub fn extract_and_render(raw_text: &str) -> String {
    render_record(&extract(raw_text))
}

/// Accept an already-parsed JSON value instead of raw text. Objects and
/// arrays are pretty-printed before extraction so the quoted-pair patterns
/// see the same shape as serialized model output; strings pass through
/// without their surrounding quotes.
pub fn extract_value(value: &Value) -> ExtractionRecord {
    extract(&value_to_text(value))
}

/// [`extract_value`] composed with rendering.
pub fn value_to_report_text(value: &Value) -> String {
    render_record(&extract_value(value))
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(_) | Value::Array(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        other => other.to_string(),
    }
}

/// Read a report file as UTF-8.
pub fn read_report_file(path: &Path) -> Result<String, ReportError> {
    fs::read_to_string(path).map_err(|source| ReportError::Read {
        path: path.display().to_string(),
        source,
    })
}

/// Read `path` and run the pipeline. A read failure comes back as a short
/// diagnostic string, so this call always produces text.
pub fn process_file(path: &Path) -> String {
    match read_report_file(path) {
        Ok(contents) => extract_and_render(&contents),
        Err(e) => {
            tracing::warn!(error = %e, "Report file could not be read");
            format!("Error reading file: {e}")
        }
    }
}
