//! Conversion rule model, request DTOs, and the rule arithmetic.
//!
//! A rule is a single undirected edge between two unit names. The stored
//! `from_unit` decides which way the factor is applied at convert time.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A persisted conversion rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRule {
    pub id: DbId,
    pub from_unit: String,
    pub to_unit: String,
    pub convert_factor: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addend: Option<f64>,
}

/// Which way a rule is traversed for a given conversion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Requested `from_unit` equals the stored `from_unit`: multiply.
    Forward,
    /// Requested `from_unit` is the stored `to_unit`: divide.
    Inverse,
}

impl ConversionRule {
    /// Infer the traversal direction from the caller's source unit.
    ///
    /// Anything other than an exact match on the stored `from_unit` is
    /// treated as the reverse orientation.
    pub fn direction_from(&self, from_unit: &str) -> Direction {
        if from_unit == self.from_unit {
            Direction::Forward
        } else {
            Direction::Inverse
        }
    }

    /// Apply this rule to `value`, converting out of `from_unit`.
    ///
    /// The addend is added after the factor step in both directions; it is
    /// never subtracted on the inverse path.
    pub fn apply(&self, from_unit: &str, value: f64) -> f64 {
        let scaled = match self.direction_from(from_unit) {
            Direction::Forward => value * self.convert_factor,
            Direction::Inverse => value / self.convert_factor,
        };

        match self.addend {
            Some(addend) => scaled + addend,
            None => scaled,
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a rule.
///
/// Missing fields fall back to empty/zero values so incomplete payloads are
/// rejected by validation instead of by the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateConversionRule {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub from_unit: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub to_unit: String,
    #[serde(default)]
    #[validate(range(exclusive_min = 0.0))]
    pub convert_factor: f64,
    /// Must be strictly positive when present.
    #[serde(default)]
    #[validate(range(exclusive_min = 0.0))]
    pub addend: Option<f64>,
}

/// DTO for replacing the factor and addend of an existing rule.
///
/// The unit names only locate the rule; they are never written back. The
/// addend is taken as-is, without the positivity check applied on create.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConversionRule {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub from_unit: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub to_unit: String,
    #[serde(default)]
    #[validate(range(exclusive_min = 0.0))]
    pub convert_factor: f64,
    #[serde(default)]
    pub addend: Option<f64>,
}

impl CreateConversionRule {
    pub fn new(from_unit: &str, to_unit: &str, convert_factor: f64, addend: Option<f64>) -> Self {
        Self {
            from_unit: from_unit.to_owned(),
            to_unit: to_unit.to_owned(),
            convert_factor,
            addend,
        }
    }

    pub(crate) fn check(&self) -> Result<(), CoreError> {
        self.validate().map_err(|_| {
            CoreError::Validation(
                "Incorrect value for one of the parameters for the conversion rule create"
                    .to_string(),
            )
        })
    }
}

impl UpdateConversionRule {
    pub fn new(from_unit: &str, to_unit: &str, convert_factor: f64, addend: Option<f64>) -> Self {
        Self {
            from_unit: from_unit.to_owned(),
            to_unit: to_unit.to_owned(),
            convert_factor,
            addend,
        }
    }

    pub(crate) fn check(&self) -> Result<(), CoreError> {
        self.validate().map_err(|_| {
            CoreError::Validation(
                "Incorrect value for one of the parameters for the conversion rule update"
                    .to_string(),
            )
        })
    }
}
