// src/state/mod.rs
use tracing::{debug, info, warn};

use crate::data::{Record, RecordCollection};
use crate::env::{Environment, TextDirection};
use crate::error::ValidationError;

pub mod form;
pub mod view;

pub use form::AddRecordForm;
pub use view::{Filter, SortField, SortState, TableRow, ViewCache};

// In-page navigation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Data,
    About,
    Contact,
    Add,
    Method,
}

impl Section {
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Data => "Daten",
            Section::About => "Über",
            Section::Contact => "Kontakt",
            Section::Add => "Daten hinzufügen",
            Section::Method => "Methodik",
        }
    }

    /// Whether the page has something to scroll to for this link.
    pub fn has_target(&self) -> bool {
        matches!(self, Section::Home | Section::Data | Section::Add)
    }
}

// Core page state
#[derive(Debug)]
pub struct AppState {
    records: RecordCollection,
    pub filter: Filter,
    pub sort: SortState,
    pub form: AddRecordForm,

    // Presentation only
    pub menu_open: bool,
    pub direction: TextDirection,
    pub alert: Option<String>,
    scroll_target: Option<Section>,

    view_cache: ViewCache,
}

impl AppState {
    pub fn new(records: Vec<Record>, env: &dyn Environment) -> Self {
        let direction = TextDirection::detect(env);
        info!(records = records.len(), ?direction, "page state initialised");

        Self {
            records: RecordCollection::new(records),
            filter: Filter::default(),
            sort: SortState::default(),
            form: AddRecordForm::new(),
            menu_open: false,
            direction,
            alert: None,
            scroll_target: None,
            view_cache: ViewCache::default(),
        }
    }

    pub fn records(&self) -> &[Record] {
        self.records.records()
    }

    pub fn set_country_filter(&mut self, text: impl Into<String>) {
        self.filter.country = text.into();
        debug!(country = %self.filter.country, "country filter changed");
    }

    pub fn set_company_filter(&mut self, text: impl Into<String>) {
        self.filter.company = text.into();
        debug!(company = %self.filter.company, "company filter changed");
    }

    /// Column header click.
    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort.toggle(field);
        debug!(field = ?self.sort.field, ascending = self.sort.ascending, "sort toggled");
    }

    /// Sort drop-down.
    pub fn select_sort_field(&mut self, field: SortField) {
        self.sort.select(field);
        debug!(field = ?self.sort.field, ascending = self.sort.ascending, "sort field selected");
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn navigate(&mut self, section: Section) {
        debug!(?section, "navigation link followed");
        if section.has_target() {
            self.scroll_target = Some(section);
        }
        self.menu_open = false;
    }

    /// Returns the pending scroll target once.
    pub fn take_scroll_target(&mut self, section: Section) -> bool {
        if self.scroll_target == Some(section) {
            self.scroll_target = None;
            true
        } else {
            false
        }
    }

    /// Validates the form and appends the record. On failure the form keeps
    /// its contents and an alert is raised.
    pub fn submit_form(&mut self) -> Result<&Record, ValidationError> {
        match self.form.validate() {
            Ok(new_record) => {
                self.form.clear();
                let record = self.records.append(new_record);
                info!(id = record.id, country = %record.country, company = %record.company, co2 = record.co2, "record added");
                Ok(record)
            }
            Err(e) => {
                warn!(error = %e, "add-record input refused");
                self.alert = Some(e.user_message().to_string());
                Err(e)
            }
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// The filtered, sorted records, recomputed only when an input changed.
    pub fn visible_records(&mut self) -> &[Record] {
        self.view_cache.get(
            self.records.records(),
            self.records.version(),
            &self.filter,
            self.sort,
        )
    }

    pub fn table_rows(&mut self) -> Vec<TableRow> {
        view::table_rows(self.visible_records())
    }
}
