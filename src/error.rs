//! Error type shared by the engine, the catalog adapter and the selection session.

/// Errors surfaced by the impact engine.
///
/// Missing catalog fields are not errors: the adapter defaults them to zero
/// and records them on the entry instead.
#[derive(thiserror::Error, Debug)]
pub enum ImpactError {
    #[error("invalid {field}: {value} ({reason})")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("catalog data unavailable: {0}")]
    DataUnavailable(String),

    #[error("malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no catalog object with id {0:?}")]
    UnknownObject(String),

    #[error("no object selected")]
    NoSelection,
}

impl ImpactError {
    /// True for failures of the catalog collaborator (fetch, read, parse).
    ///
    /// These must be reported as "data unavailable" rather than defaulted into
    /// the physics pipeline.
    pub fn is_data_unavailable(&self) -> bool {
        matches!(
            self,
            ImpactError::DataUnavailable(_) | ImpactError::Parse(_) | ImpactError::Io(_)
        )
    }
}

/// Reject negative or non-finite values for `field`.
pub(crate) fn require_non_negative(field: &'static str, value: f64) -> Result<f64, ImpactError> {
    if !value.is_finite() {
        return Err(ImpactError::InvalidInput {
            field,
            value,
            reason: "must be finite",
        });
    }
    if value < 0.0 {
        return Err(ImpactError::InvalidInput {
            field,
            value,
            reason: "must not be negative",
        });
    }
    Ok(value)
}

/// Reject zero, negative or non-finite values for `field`.
pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<f64, ImpactError> {
    require_non_negative(field, value)?;
    if value == 0.0 {
        return Err(ImpactError::InvalidInput {
            field,
            value,
            reason: "must be positive",
        });
    }
    Ok(value)
}
