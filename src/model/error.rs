use thiserror::Error;

pub type Result<T> = std::result::Result<T, RatingError>;

/// Errors raised by the rating engine. All of them describe a problem with the
/// caller's input, so none of them are worth retrying.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RatingError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Dimension mismatch: expected {expected} values, observed {observed}")]
    DimensionMismatch { expected: usize, observed: usize },

    #[error("Numeric degeneracy: {0}")]
    NumericDegeneracy(String)
}

/// Fails with [`RatingError::NumericDegeneracy`] when any value is NaN or infinite.
pub(crate) fn ensure_finite(values: &[f64], what: &str) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(i) => Err(RatingError::NumericDegeneracy(format!(
            "{} contains a non-finite value at index {} ({})",
            what, i, values[i]
        ))),
        None => Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::model::error::{ensure_finite, RatingError};

    #[test]
    fn test_ensure_finite_accepts_regular_values() {
        assert_eq!(ensure_finite(&[1000.0, -25.5, 0.0], "ratings"), Ok(()));
    }

    #[test]
    fn test_ensure_finite_rejects_nan() {
        let result = ensure_finite(&[1000.0, f64::NAN], "ratings");

        assert!(matches!(result, Err(RatingError::NumericDegeneracy(_))));
    }

    #[test]
    fn test_ensure_finite_rejects_infinity() {
        let result = ensure_finite(&[f64::NEG_INFINITY], "adjustments");

        assert!(matches!(result, Err(RatingError::NumericDegeneracy(_))));
    }

    #[test]
    fn test_dimension_mismatch_message() {
        let err = RatingError::DimensionMismatch {
            expected: 4,
            observed: 3
        };

        assert_eq!(err.to_string(), "Dimension mismatch: expected 4 values, observed 3");
    }
}
