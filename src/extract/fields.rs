// Category extractors: best-effort field recovery from JSON-like text.
// Every pass scans the full normalized text on its own; none of them needs
// the input to be balanced or even parseable. A pass that finds nothing
// leaves its category empty.

use std::sync::LazyLock;

use regex::Regex;

use super::normalize::normalize_text;
use super::types::{Diagnosis, ExtractionRecord, PatientField, Specimen};

/// Canonical patient-info field names, in render order.
pub const PATIENT_FIELDS: [&str; 4] = ["patient_name", "patient_id", "age", "sex"];

/// Keys claimed by the category passes; any other quoted key/value pair
/// lands in `unclassified`.
pub const RESERVED_KEYS: [&str; 8] = [
    "patient_name",
    "patient_id",
    "age",
    "sex",
    "site",
    "type",
    "result",
    "description",
];

static PATIENT_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    PATIENT_FIELDS
        .iter()
        .map(|field| {
            let pattern = format!(r#"(?i)"{field}"\s*:\s*"([^"]+)""#);
            (*field, Regex::new(&pattern).unwrap())
        })
        .collect()
});

static CLINICAL_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)"clinical_data"\s*:\s*\[(.*?)\]"#).unwrap());
static SPECIMEN_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)"specimen"\s*:\s*\[(.*?)\]"#).unwrap());
static DIAGNOSIS_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)"diagnosis"\s*:\s*\[(.*?)\]"#).unwrap());
static GROSS_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)"gross_description"\s*:\s*\[(.*?)\]"#).unwrap());

static OBJECT_FRAGMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)\{(.*?)\}").unwrap());
static QUOTED_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""([^"]+)""#).unwrap());

static SITE_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""site"\s*:\s*"([^"]+)""#).unwrap());
static TYPE_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""type"\s*:\s*"([^"]+)""#).unwrap());
static RESULT_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""result"\s*:\s*"([^"]+)""#).unwrap());
static DESCRIPTION_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""description"\s*:\s*"([^"]+)""#).unwrap());

static KEY_VALUE_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)"\s*:\s*"([^"]+)""#).unwrap());

/// Run every category pass over `raw` and assemble a fresh record.
///
/// Never fails, whatever the input looks like. The unclassified pass runs
/// last so it can skip keys already claimed by `patient_info`.
pub fn extract(raw: &str) -> ExtractionRecord {
    let text = normalize_text(raw);
    let mut record = ExtractionRecord::default();

    collect_patient_info(&text, &mut record);
    collect_clinical_notes(&text, &mut record);
    collect_specimens(&text, &mut record);
    collect_diagnoses(&text, &mut record);
    collect_descriptions(&text, &mut record);
    collect_unclassified(&text, &mut record);

    tracing::debug!(
        patient_fields = record.patient_info.len(),
        clinical_notes = record.clinical_notes.len(),
        specimens = record.specimens.len(),
        diagnoses = record.diagnoses.len(),
        descriptions = record.descriptions.len(),
        unclassified = record.unclassified.len(),
        "Report extraction finished"
    );

    record
}

/// First match per canonical field name, case-insensitive. Absent fields
/// are omitted; insertion order follows the pattern table.
fn collect_patient_info(text: &str, record: &mut ExtractionRecord) {
    for (name, pattern) in PATIENT_PATTERNS.iter() {
        if let Some(cap) = pattern.captures(text) {
            record.patient_info.push(PatientField {
                name: (*name).to_string(),
                value: cap[1].to_string(),
            });
        }
    }
}

/// Every quoted token inside the `clinical_data` list, first occurrence
/// wins on exact duplicates.
fn collect_clinical_notes(text: &str, record: &mut ExtractionRecord) {
    let Some(list) = CLINICAL_LIST.captures(text) else {
        return;
    };
    for token in QUOTED_TOKEN.captures_iter(&list[1]) {
        let item = token[1].to_string();
        if !record.clinical_notes.contains(&item) {
            record.clinical_notes.push(item);
        }
    }
}

/// Sites and types are collected independently across the whole `specimen`
/// span and zipped by index, so broken object boundaries still yield pairs.
/// Trailing entries of the longer list are dropped.
fn collect_specimens(text: &str, record: &mut ExtractionRecord) {
    let Some(list) = SPECIMEN_LIST.captures(text) else {
        return;
    };
    let span = &list[1];
    let sites: Vec<String> = SITE_VALUE
        .captures_iter(span)
        .map(|c| c[1].to_string())
        .collect();
    let types: Vec<String> = TYPE_VALUE
        .captures_iter(span)
        .map(|c| c[1].to_string())
        .collect();

    if sites.len() != types.len() {
        tracing::warn!(
            sites = sites.len(),
            types = types.len(),
            "Unbalanced specimen site/type lists; trailing entries dropped"
        );
    }

    for (i, (site, specimen_type)) in sites.into_iter().zip(types).enumerate() {
        record.specimens.push(Specimen {
            label: format!("specimen_{}", i + 1),
            site,
            specimen_type,
        });
    }
}

/// Split the `diagnosis` list into `{...}` fragments and keep each fragment
/// that carries both a site and a result. Type falls back to `N/A`.
fn collect_diagnoses(text: &str, record: &mut ExtractionRecord) {
    let Some(list) = DIAGNOSIS_LIST.captures(text) else {
        return;
    };
    for fragment in OBJECT_FRAGMENT.captures_iter(&list[1]) {
        let body = &fragment[1];
        let site = SITE_VALUE.captures(body).map(|c| c[1].to_string());
        let result = RESULT_VALUE.captures(body).map(|c| c[1].to_string());
        let (Some(site), Some(result)) = (site, result) else {
            continue;
        };
        let diagnosis_type = TYPE_VALUE
            .captures(body)
            .map_or_else(|| "N/A".to_string(), |c| c[1].to_string());
        record.diagnoses.push(Diagnosis {
            site,
            diagnosis_type,
            result,
        });
    }
}

/// Every `description` value inside the `gross_description` list, in order,
/// deduplicated.
fn collect_descriptions(text: &str, record: &mut ExtractionRecord) {
    let Some(list) = GROSS_LIST.captures(text) else {
        return;
    };
    for cap in DESCRIPTION_VALUE.captures_iter(&list[1]) {
        let item = cap[1].to_string();
        if !record.descriptions.contains(&item) {
            record.descriptions.push(item);
        }
    }
}

/// Every quoted key/value pair anywhere in the text whose key is neither
/// reserved nor already captured as patient info. Duplicate pairs are kept
/// as they occur.
fn collect_unclassified(text: &str, record: &mut ExtractionRecord) {
    for pair in KEY_VALUE_PAIR.captures_iter(text) {
        let key = &pair[1];
        let value = &pair[2];
        if is_reserved_key(key) {
            continue;
        }
        if record.patient_info.iter().any(|f| f.name == key) {
            continue;
        }
        record.unclassified.push(format!("{key}: {value}"));
    }
}

fn is_reserved_key(key: &str) -> bool {
    RESERVED_KEYS.iter().any(|r| r.eq_ignore_ascii_case(key))
}
