// src/state/form.rs
use crate::data::NewRecord;
use crate::error::ValidationError;
use crate::sanitize::escape_input;

/// Raw text of the three add-record inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddRecordForm {
    pub country: String,
    pub company: String,
    pub co2: String,
}

impl AddRecordForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sanitizes the text fields and parses the CO₂ value.
    /// Leaves the form untouched either way.
    pub fn validate(&self) -> Result<NewRecord, ValidationError> {
        let country = escape_input(&self.country).trim().to_string();
        if country.is_empty() {
            return Err(ValidationError::EmptyCountry);
        }

        let company = escape_input(&self.company).trim().to_string();
        if company.is_empty() {
            return Err(ValidationError::EmptyCompany);
        }

        let co2 = parse_co2(&self.co2)?;

        Ok(NewRecord { country, company, co2 })
    }

    pub fn clear(&mut self) {
        self.country.clear();
        self.company.clear();
        self.co2.clear();
    }
}

fn parse_co2(value: &str) -> Result<f64, ValidationError> {
    let co2: f64 = value
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidCo2(value.to_string()))?;

    // `parse` accepts "inf" and "NaN"
    if !co2.is_finite() {
        return Err(ValidationError::InvalidCo2(value.to_string()));
    }
    if co2 < 0.0 {
        return Err(ValidationError::NegativeCo2(co2));
    }
    // "-0" parses to negative zero, which would print as "-0.0"
    Ok(co2 + 0.0)
}
