// Plain-text rendering of an ExtractionRecord. Section order and line
// shapes are fixed; a section with no entries is omitted entirely.

use crate::extract::ExtractionRecord;

/// Render the record as section-grouped plain text.
///
/// Pure function of the record: identical records always produce
/// byte-identical output. Returns an empty string for an empty record.
pub fn render_record(record: &ExtractionRecord) -> String {
    let mut lines: Vec<String> = Vec::new();

    if !record.patient_info.is_empty() {
        lines.push("PATIENT INFORMATION:".to_string());
        for field in &record.patient_info {
            lines.push(format!("  • {}: {}", display_key(&field.name), field.value));
        }
        lines.push(String::new());
    }

    if !record.clinical_notes.is_empty() {
        lines.push("CLINICAL DATA:".to_string());
        for item in &record.clinical_notes {
            lines.push(format!("  • {item}"));
        }
        lines.push(String::new());
    }

    if !record.specimens.is_empty() {
        lines.push("SPECIMEN COLLECTION SITES:".to_string());
        for specimen in &record.specimens {
            // The synthesized label is for lookups, not display.
            lines.push(format!("  • {} - {}", specimen.site, specimen.specimen_type));
        }
        lines.push(String::new());
    }

    if !record.diagnoses.is_empty() {
        lines.push("DIAGNOSIS RESULTS:".to_string());
        for (i, diagnosis) in record.diagnoses.iter().enumerate() {
            lines.push(format!("  {}. Site: {}", i + 1, diagnosis.site));
            lines.push(format!("     Type: {}", diagnosis.diagnosis_type));
            lines.push(format!("     Result: {}", diagnosis.result));
            lines.push(String::new());
        }
    }

    if !record.descriptions.is_empty() {
        lines.push("GROSS DESCRIPTIONS:".to_string());
        for (i, description) in record.descriptions.iter().enumerate() {
            lines.push(format!("  {}. {}", i + 1, description));
        }
        lines.push(String::new());
    }

    if !record.unclassified.is_empty() {
        lines.push("ADDITIONAL INFORMATION:".to_string());
        for item in &record.unclassified {
            lines.push(format!("  • {item}"));
        }
    }

    lines.join("\n")
}

/// `patient_id` → `Patient Id`: underscores become spaces, words are
/// title-cased.
fn display_key(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{Diagnosis, PatientField, Specimen};

    fn record_with_patient() -> ExtractionRecord {
        ExtractionRecord {
            patient_info: vec![
                PatientField {
                    name: "patient_name".into(),
                    value: "John Doe".into(),
                },
                PatientField {
                    name: "age".into(),
                    value: "30 Years".into(),
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn empty_record_renders_empty_string() {
        assert_eq!(render_record(&ExtractionRecord::default()), "");
    }

    #[test]
    fn patient_section_title_cases_keys() {
        let text = render_record(&record_with_patient());
        assert!(text.starts_with("PATIENT INFORMATION:\n"));
        assert!(text.contains("  • Patient Name: John Doe"));
        assert!(text.contains("  • Age: 30 Years"));
    }

    #[test]
    fn patient_only_record_has_no_other_sections() {
        let text = render_record(&record_with_patient());
        assert!(!text.contains("CLINICAL DATA:"));
        assert!(!text.contains("SPECIMEN COLLECTION SITES:"));
        assert!(!text.contains("DIAGNOSIS RESULTS:"));
        assert!(!text.contains("GROSS DESCRIPTIONS:"));
        assert!(!text.contains("ADDITIONAL INFORMATION:"));
    }

    #[test]
    fn specimens_render_site_dash_type() {
        let record = ExtractionRecord {
            specimens: vec![Specimen {
                label: "specimen_1".into(),
                site: "Right Arm".into(),
                specimen_type: "Shave Biopsy".into(),
            }],
            ..Default::default()
        };
        let text = render_record(&record);
        assert!(text.contains("SPECIMEN COLLECTION SITES:\n  • Right Arm - Shave Biopsy"));
        assert!(!text.contains("specimen_1"));
    }

    #[test]
    fn diagnoses_render_numbered_with_sublines() {
        let record = ExtractionRecord {
            diagnoses: vec![
                Diagnosis {
                    site: "Skin, Right Arm".into(),
                    diagnosis_type: "Shave Biopsy".into(),
                    result: "Benign".into(),
                },
                Diagnosis {
                    site: "Skin, Left Neck".into(),
                    diagnosis_type: "N/A".into(),
                    result: "Benign".into(),
                },
            ],
            ..Default::default()
        };
        let text = render_record(&record);
        let expected = "DIAGNOSIS RESULTS:\n\
                        \x20 1. Site: Skin, Right Arm\n\
                        \x20    Type: Shave Biopsy\n\
                        \x20    Result: Benign\n\
                        \n\
                        \x20 2. Site: Skin, Left Neck\n\
                        \x20    Type: N/A\n\
                        \x20    Result: Benign\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn descriptions_render_numbered() {
        let record = ExtractionRecord {
            descriptions: vec!["First description".into(), "Second description".into()],
            ..Default::default()
        };
        let text = render_record(&record);
        assert!(text.contains("GROSS DESCRIPTIONS:\n  1. First description\n  2. Second description"));
    }

    #[test]
    fn additional_information_has_no_trailing_blank() {
        let record = ExtractionRecord {
            unclassified: vec!["lab_no: A-42".into()],
            ..Default::default()
        };
        assert_eq!(
            render_record(&record),
            "ADDITIONAL INFORMATION:\n  • lab_no: A-42"
        );
    }

    #[test]
    fn rendering_is_deterministic() {
        let record = record_with_patient();
        assert_eq!(render_record(&record), render_record(&record));
    }

    #[test]
    fn display_key_title_cases_words() {
        assert_eq!(display_key("patient_id"), "Patient Id");
        assert_eq!(display_key("sex"), "Sex");
        assert_eq!(display_key("patient_name"), "Patient Name");
    }
}
