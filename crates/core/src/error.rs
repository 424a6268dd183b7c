use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Conversion from {from_unit} to {to_unit} not found")]
    NotFound { from_unit: String, to_unit: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conversion from {from_unit} to {to_unit} already exists")]
    Conflict { from_unit: String, to_unit: String },

    #[error("Storage failure: {0}")]
    Storage(#[from] StoreError),
}

impl CoreError {
    pub(crate) fn not_found(from_unit: &str, to_unit: &str) -> Self {
        CoreError::NotFound {
            from_unit: from_unit.to_owned(),
            to_unit: to_unit.to_owned(),
        }
    }

    pub(crate) fn conflict(from_unit: &str, to_unit: &str) -> Self {
        CoreError::Conflict {
            from_unit: from_unit.to_owned(),
            to_unit: to_unit.to_owned(),
        }
    }
}
