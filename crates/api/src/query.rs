//! Query parameter types for the conversion endpoints.
//!
//! Every field is optional at the extractor level so an absent parameter
//! can be reported by name in the JSON error body.

use serde::Deserialize;

use crate::error::AppError;

/// `?fromUnit=&toUnit=` for lookups and removals.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitPairParams {
    pub from_unit: Option<String>,
    pub to_unit: Option<String>,
}

/// `?fromUnit=&toUnit=&inputValue=` for conversions.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertParams {
    pub from_unit: Option<String>,
    pub to_unit: Option<String>,
    pub input_value: Option<f64>,
}

/// Unwrap a query parameter or fail with a 400 naming it.
pub fn required<T>(value: Option<T>, name: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::BadRequest(format!("Required parameter [{name}] is not present.")))
}

impl UnitPairParams {
    /// Both unit names, or a 400 for the first one missing.
    pub fn into_pair(self) -> Result<(String, String), AppError> {
        Ok((
            required(self.from_unit, "fromUnit")?,
            required(self.to_unit, "toUnit")?,
        ))
    }
}
