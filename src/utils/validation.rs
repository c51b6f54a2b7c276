//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! de entrada que no cubre el derive de `validator`.

use validator::ValidationError;

/// Validar que un string no esté vacío ni sea sólo espacios
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un límite de precio sea un número finito
///
/// `f64::from_str` acepta "NaN" e "inf", que romperían las comparaciones.
pub fn validate_price_bound(name: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        let mut error = ValidationError::new("finite");
        error.add_param("bound".into(), &name);
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("red").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank(" \t ").is_err());
    }

    #[test]
    fn test_validate_price_bound() {
        assert_eq!(validate_price_bound("min", 15000.0).unwrap(), 15000.0);
        assert_eq!(validate_price_bound("min", -1.0).unwrap(), -1.0);
        assert!(validate_price_bound("max", f64::NAN).is_err());
        assert!(validate_price_bound("max", f64::INFINITY).is_err());
    }
}
