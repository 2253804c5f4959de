// src/state/view.rs
use std::cmp::Ordering;

use crate::data::Record;
use crate::sanitize::escape_input;

/// Shown as the only table row when nothing matches.
pub const EMPTY_VIEW_MESSAGE: &str = "Keine Einträge gefunden.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Country,
    Company,
    Co2,
}

impl SortField {
    pub fn all() -> &'static [SortField] {
        &[SortField::Country, SortField::Company, SortField::Co2]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortField::Country => "Land",
            SortField::Company => "Unternehmen",
            SortField::Co2 => "CO₂ (kt)",
        }
    }

    fn compare(&self, a: &Record, b: &Record) -> Ordering {
        match self {
            SortField::Country => compare_text(&a.country, &b.country),
            SortField::Company => compare_text(&a.company, &b.company),
            SortField::Co2 => a.co2.total_cmp(&b.co2),
        }
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub field: SortField,
    pub ascending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            field: SortField::Country,
            ascending: true,
        }
    }
}

impl SortState {
    /// Column header click: same field flips the direction, another field
    /// becomes active in ascending order.
    pub fn toggle(&mut self, field: SortField) {
        if self.field == field {
            self.ascending = !self.ascending;
        } else {
            self.field = field;
            self.ascending = true;
        }
    }

    /// Drop-down selection: switches the field and keeps the direction.
    pub fn select(&mut self, field: SortField) {
        self.field = field;
    }

    fn compare(&self, a: &Record, b: &Record) -> Ordering {
        let ordering = self.field.compare(a, b);
        if self.ascending {
            ordering
        } else {
            ordering.reverse()
        }
    }
}

/// Substring filters on country and company. Empty strings match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub country: String,
    pub company: String,
}

impl Filter {
    pub fn matches(&self, record: &Record) -> bool {
        let country = escape_input(&self.country).to_lowercase();
        let company = escape_input(&self.company).to_lowercase();
        matches_needles(record, &country, &company)
    }
}

fn matches_needles(record: &Record, country: &str, company: &str) -> bool {
    record.country.to_lowercase().contains(country) && record.company.to_lowercase().contains(company)
}

/// Filters and sorts `records` into a fresh list.
///
/// The sort is stable, so records that compare equal keep their collection
/// order in both directions.
pub fn derive_view(records: &[Record], filter: &Filter, sort: SortState) -> Vec<Record> {
    let country = escape_input(&filter.country).to_lowercase();
    let company = escape_input(&filter.company).to_lowercase();

    let mut view: Vec<Record> = records
        .iter()
        .filter(|record| matches_needles(record, &country, &company))
        .cloned()
        .collect();

    view.sort_by(|a, b| sort.compare(a, b));
    view
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ViewKey {
    version: u64,
    filter: Filter,
    sort: SortState,
}

/// Keeps the last derived view until one of its inputs changes.
#[derive(Debug, Default)]
pub struct ViewCache {
    key: Option<ViewKey>,
    rows: Vec<Record>,
}

impl ViewCache {
    pub fn get(&mut self, records: &[Record], version: u64, filter: &Filter, sort: SortState) -> &[Record] {
        let key = ViewKey {
            version,
            filter: filter.clone(),
            sort,
        };

        if self.key.as_ref() != Some(&key) {
            tracing::trace!(version, "re-deriving table view");
            self.rows = derive_view(records, filter, sort);
            self.key = Some(key);
        }
        &self.rows
    }
}

/// What the table body shows.
#[derive(Debug, Clone, PartialEq)]
pub enum TableRow {
    Record(Record),
    Placeholder(&'static str),
}

impl TableRow {
    /// CO₂ column text, one decimal place.
    pub fn co2_text(co2: f64) -> String {
        format!("{co2:.1}")
    }
}

pub fn table_rows(view: &[Record]) -> Vec<TableRow> {
    if view.is_empty() {
        return vec![TableRow::Placeholder(EMPTY_VIEW_MESSAGE)];
    }
    view.iter().cloned().map(TableRow::Record).collect()
}
