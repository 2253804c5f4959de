// src/data/record.rs
use serde::{Serialize, Deserialize};

/// One fictitious emissions entry. `co2` is in kilotonnes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    pub country: String,
    pub company: String,
    pub co2: f64,
}

/// A validated record that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecord {
    pub country: String,
    pub company: String,
    pub co2: f64,
}

/// Append-only, insertion-ordered record list.
#[derive(Debug, Clone)]
pub struct RecordCollection {
    records: Vec<Record>,
    next_id: u64,
    version: u64,
}

impl Default for RecordCollection {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl RecordCollection {
    pub fn new(records: Vec<Record>) -> Self {
        let next_id = records.iter().map(|r| r.id).max().map_or(1, |max| max + 1);
        Self {
            records,
            next_id,
            version: 0,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Bumped on every append; used as part of the view cache key.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Appends `record` at the end with a fresh id and returns it.
    pub fn append(&mut self, record: NewRecord) -> &Record {
        let id = self.next_id;
        self.next_id += 1;
        self.version += 1;

        self.records.push(Record {
            id,
            country: record.country,
            company: record.company,
            co2: record.co2,
        });
        &self.records[self.records.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(id: u64, country: &str) -> Record {
        Record {
            id,
            country: country.to_string(),
            company: "Acme".to_string(),
            co2: 1.0,
        }
    }

    fn new_record(country: &str) -> NewRecord {
        NewRecord {
            country: country.to_string(),
            company: "Acme".to_string(),
            co2: 2.5,
        }
    }

    #[test]
    fn append_keeps_insertion_order() {
        let mut collection = RecordCollection::new(vec![record(1, "B"), record(2, "A")]);
        collection.append(new_record("C"));

        let countries: Vec<&str> = collection.records().iter().map(|r| r.country.as_str()).collect();
        assert_eq!(countries, vec!["B", "A", "C"]);
    }

    #[test]
    fn appended_ids_are_unique() {
        let mut collection = RecordCollection::new(vec![record(9, "A"), record(4, "B")]);
        let first = collection.append(new_record("C")).id;
        let second = collection.append(new_record("D")).id;

        assert_eq!(first, 10);
        assert_eq!(second, 11);
    }

    #[test]
    fn empty_collection_starts_at_one() {
        let mut collection = RecordCollection::default();
        assert!(collection.is_empty());
        assert_eq!(collection.append(new_record("A")).id, 1);
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn version_tracks_appends() {
        let mut collection = RecordCollection::new(vec![record(1, "A")]);
        assert_eq!(collection.version(), 0);
        collection.append(new_record("B"));
        collection.append(new_record("C"));
        assert_eq!(collection.version(), 2);
        assert_eq!(collection.len(), 3);
    }
}
