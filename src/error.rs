// src/error.rs
use thiserror::Error;

/// Text of the blocking notification shown when a new record is refused.
pub const INVALID_INPUT_MESSAGE: &str =
    "Bitte gültige Werte eingeben: Land, Unternehmen und numerischer CO₂-Wert.";

/// Problems with the bundled record set.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to parse sample data: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("duplicate record id {0}")]
    DuplicateId(u64),

    #[error("record {0} has an empty country or company")]
    EmptyField(u64),

    #[error("record {id} has an invalid CO2 value {value}")]
    InvalidCo2 { id: u64, value: f64 },
}

/// Reasons an add-record submission is refused.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("country is empty")]
    EmptyCountry,

    #[error("company is empty")]
    EmptyCompany,

    #[error("CO2 value {0:?} is not a finite number")]
    InvalidCo2(String),

    #[error("CO2 value {0} is negative")]
    NegativeCo2(f64),
}

impl ValidationError {
    /// The message presented to the user. Identical for every variant.
    pub fn user_message(&self) -> &'static str {
        INVALID_INPUT_MESSAGE
    }
}
