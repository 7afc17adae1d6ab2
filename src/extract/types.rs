use serde::{Deserialize, Serialize};

/// Everything recovered from a single report text, grouped by category.
///
/// A record is built fresh for every extraction call; nothing is merged
/// across calls. Absent fields stay at their empty defaults rather than
/// being filled with error markers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionRecord {
    pub patient_info: Vec<PatientField>,
    pub clinical_notes: Vec<String>,
    pub specimens: Vec<Specimen>,
    pub diagnoses: Vec<Diagnosis>,
    pub descriptions: Vec<String>,
    pub unclassified: Vec<String>,
}

impl ExtractionRecord {
    /// True when no category matched anything.
    pub fn is_empty(&self) -> bool {
        self.patient_info.is_empty()
            && self.clinical_notes.is_empty()
            && self.specimens.is_empty()
            && self.diagnoses.is_empty()
            && self.descriptions.is_empty()
            && self.unclassified.is_empty()
    }

    /// Value of a patient field by canonical name, if it was captured.
    pub fn patient_field(&self, name: &str) -> Option<&str> {
        self.patient_info
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }
}

/// One recovered patient-info pair. `name` is always a member of the
/// canonical field set (`patient_name`, `patient_id`, `age`, `sex`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientField {
    pub name: String,
    pub value: String,
}

/// A site/type pair from the specimen list.
///
/// `label` is the synthesized `specimen_<n>` key (1-based). Sites and types
/// are paired positionally across the whole specimen span, so the pair is
/// not guaranteed to come from the same source object when the input is
/// malformed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Specimen {
    pub label: String,
    pub site: String,
    #[serde(rename = "type")]
    pub specimen_type: String,
}

/// One diagnosis entry. `site` and `result` are always non-empty;
/// `diagnosis_type` is the literal `N/A` when the source fragment had no
/// type field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnosis {
    pub site: String,
    #[serde(rename = "type")]
    pub diagnosis_type: String,
    pub result: String,
}
