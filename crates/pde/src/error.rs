use spectral::SpectralError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PdeError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    #[error("dimension mismatch for `{name}`: expected {expected}, got {actual}")]
    DimensionMismatch {
        name: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("spectral transform failed: {0}")]
    Spectral(#[from] SpectralError),
}

impl PdeError {
    #[must_use]
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        PdeError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Fails with [`PdeError::DimensionMismatch`] unless `actual == expected`.
///
/// # Errors
///
/// Returns the mismatch error tagged with `name`.
pub fn check_len(name: &'static str, expected: usize, actual: usize) -> Result<(), PdeError> {
    if expected == actual {
        Ok(())
    } else {
        Err(PdeError::DimensionMismatch {
            name,
            expected,
            actual,
        })
    }
}
