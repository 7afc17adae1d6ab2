//! medglean — tolerant field recovery from malformed medical-report JSON.
//!
//! Model output describing a pathology report is routinely truncated or
//! otherwise not valid JSON. This crate recovers the known fields it can
//! still find (patient info, clinical notes, specimens, diagnoses, gross
//! descriptions, and any other quoted pair) and renders them as
//! section-grouped plain text. Extraction never fails: unmatched categories
//! are simply left empty, and the worst case is an empty report.

pub mod config;
pub mod extract;
pub mod render;
pub mod report;

pub use extract::{extract, Diagnosis, ExtractionRecord, PatientField, Specimen};
pub use render::render_record;
pub use report::{
    extract_and_render, extract_value, process_file, read_report_file, value_to_report_text,
    ReportError,
};
