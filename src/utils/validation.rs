use crate::utils::error::{OptimizeError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(OptimizeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(OptimizeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    validate_finite(field_name, value)?;
    if value < 0.0 {
        return Err(OptimizeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be negative".to_string(),
        });
    }
    Ok(())
}

/// `min` 不可大於 `max`
pub fn validate_ordered<T: PartialOrd + std::fmt::Display + Copy>(
    min_field: &str,
    min: T,
    max_field: &str,
    max: T,
) -> Result<()> {
    if min > max {
        return Err(OptimizeError::InvalidConfigValueError {
            field: min_field.to_string(),
            value: min.to_string(),
            reason: format!("Value must not exceed {} ({})", max_field, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("simulation.poly_min", 5, 1).is_ok());
        assert!(validate_positive_number("simulation.poly_min", 0, 1).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("simulation.size_min_mb", 0.0).is_ok());
        assert!(validate_non_negative("simulation.size_min_mb", -1.0).is_err());
        assert!(validate_non_negative("simulation.size_min_mb", f64::NAN).is_err());
        assert!(validate_finite("simulation.size_max_mb", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_ordered() {
        assert!(validate_ordered("a", 1, "b", 1).is_ok());
        assert!(validate_ordered("a", 1.5, "b", 2.0).is_ok());

        let err = validate_ordered("simulation.poly_min", 10, "simulation.poly_max", 5).unwrap_err();
        match err {
            OptimizeError::InvalidConfigValueError { field, value, .. } => {
                assert_eq!(field, "simulation.poly_min");
                assert_eq!(value, "10");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
