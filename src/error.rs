use thiserror::Error;

/// Errors surfaced by the footprint engine and its adapters.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FootprintError {
    #[error("invalid input: {field} = {value} (must be finite and non-negative)")]
    InvalidInput { field: &'static str, value: f64 },
    #[error("unknown emission category: {0}")]
    UnknownCategory(String),
    #[error("unknown car fuel type: {0} (expected gasoline or diesel)")]
    UnknownFuelType(String),
    #[error("malformed activity row: {0}")]
    MalformedRow(String),
    #[error("configuration error: {0}")]
    Config(String),
}

/// Reject negative, NaN and infinite quantities. Never clamps.
pub fn ensure_quantity(field: &'static str, value: f64) -> Result<f64, FootprintError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(FootprintError::InvalidInput { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_quantity_bounds() {
        assert_eq!(ensure_quantity("x", 0.0), Ok(0.0));
        assert_eq!(ensure_quantity("x", 1e9), Ok(1e9));
        assert!(ensure_quantity("x", -0.1).is_err());
        assert!(ensure_quantity("x", f64::NAN).is_err());
        assert!(ensure_quantity("x", f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_message_names_field() {
        let err = ensure_quantity("lpg_kg", -3.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid input: lpg_kg = -3 (must be finite and non-negative)"
        );
    }
}
