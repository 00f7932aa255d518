use crate::utils::error::{PrimerError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PrimerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(PrimerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "List must contain at least one element".to_string(),
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
        return Err(PrimerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// A bare file name: non-empty, no path separators, no NUL bytes, not a
/// directory reference. The scratch file always lives directly under the
/// configured scratch directory.
pub fn validate_bare_file_name(field_name: &str, name: &str) -> Result<()> {
    let reason = if name.trim().is_empty() {
        Some("File name cannot be empty")
    } else if name.contains('/') || name.contains('\\') {
        Some("File name cannot contain path separators")
    } else if name.contains('\0') {
        Some("File name cannot contain null bytes")
    } else if name == "." || name == ".." {
        Some("File name cannot be a directory reference")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(PrimerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}
