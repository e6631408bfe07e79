use crate::utils::error::{Result, TierError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// CORS 來源必須是 http(s) 且不帶路徑
pub fn validate_origin(field_name: &str, origin: &str) -> Result<()> {
    if origin.is_empty() {
        return Err(TierError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: origin.to_string(),
            reason: "Origin cannot be empty".to_string(),
        });
    }

    match Url::parse(origin) {
        Ok(url) => {
            match url.scheme() {
                "http" | "https" => {}
                scheme => {
                    return Err(TierError::InvalidConfigValueError {
                        field: field_name.to_string(),
                        value: origin.to_string(),
                        reason: format!("Unsupported URL scheme: {}", scheme),
                    })
                }
            }
            if url.path() != "/" || url.query().is_some() {
                return Err(TierError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: origin.to_string(),
                    reason: "Origin must not contain a path or query".to_string(),
                });
            }
            Ok(())
        }
        Err(e) => Err(TierError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: origin.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TierError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(TierError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// 規格欄位：整數下限
pub fn validate_min(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(TierError::validation(
            field_name,
            format!("must be at least {}, got {}", min_value, value),
        ));
    }
    Ok(())
}

/// 規格欄位：有限且大於零的浮點數
pub fn validate_positive_float(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(TierError::validation(
            field_name,
            format!("must be a finite number greater than 0, got {}", value),
        ));
    }
    Ok(())
}
