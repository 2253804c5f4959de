// src/data/mod.rs
use std::collections::HashSet;

use crate::error::DataError;

pub mod record;

// Re-export commonly used types
pub use record::{NewRecord, Record, RecordCollection};

const SAMPLE_DATA: &str = include_str!("../../assets/sample_data.ron");

/// Loads the fictitious records the portal starts with.
pub fn load_sample_records() -> Result<Vec<Record>, DataError> {
    parse_records(SAMPLE_DATA)
}

/// Decodes a RON list of records and checks the collection invariants.
pub fn parse_records(source: &str) -> Result<Vec<Record>, DataError> {
    let records: Vec<Record> = ron::from_str(source)?;

    let mut seen = HashSet::new();
    for record in &records {
        if !seen.insert(record.id) {
            return Err(DataError::DuplicateId(record.id));
        }
        if record.country.trim().is_empty() || record.company.trim().is_empty() {
            return Err(DataError::EmptyField(record.id));
        }
        if !record.co2.is_finite() || record.co2 < 0.0 {
            return Err(DataError::InvalidCo2 {
                id: record.id,
                value: record.co2,
            });
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bundled_records_load() {
        let records = load_sample_records().unwrap();
        let countries: Vec<&str> = records.iter().map(|r| r.country.as_str()).collect();
        assert_eq!(
            countries,
            vec!["Germany", "USA", "China", "France", "India", "Brazil"]
        );
        assert_eq!(records[2].company, "Beijing Power");
        assert_eq!(records[2].co2, 980.4);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let source = r#"[
            (id: 1, country: "A", company: "B", co2: 1.0),
            (id: 1, country: "C", company: "D", co2: 2.0),
        ]"#;
        assert!(matches!(parse_records(source), Err(DataError::DuplicateId(1))));
    }

    #[test]
    fn rejects_negative_co2() {
        let source = r#"[(id: 7, country: "A", company: "B", co2: -1.0)]"#;
        assert!(matches!(
            parse_records(source),
            Err(DataError::InvalidCo2 { id: 7, .. })
        ));
    }

    #[test]
    fn rejects_blank_company() {
        let source = r#"[(id: 3, country: "A", company: "  ", co2: 1.0)]"#;
        assert!(matches!(parse_records(source), Err(DataError::EmptyField(3))));
    }

    #[test]
    fn reports_malformed_documents() {
        assert!(matches!(parse_records("[(id: 1"), Err(DataError::Parse(_))));
    }
}
