use crate::utils::error::{GmapsError, Result};
use std::path::Path;
use std::time::Duration;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl ToString, reason: impl Into<String>) -> GmapsError {
    GmapsError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Checks a browser binary setting. A bare name is left for `PATH` lookup at
/// launch; anything with a directory part must point at an existing file.
pub fn validate_executable_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(invalid(field_name, path, "Browser executable cannot be empty"));
    }
    if path.contains('\0') {
        return Err(invalid(field_name, path.escape_debug(), "Browser executable contains a NUL byte"));
    }

    let candidate = Path::new(path);
    let has_dir = candidate
        .parent()
        .map_or(false, |parent| !parent.as_os_str().is_empty());
    if !has_dir {
        return Ok(());
    }
    if candidate.is_dir() {
        return Err(invalid(field_name, path, "Expected a browser binary, found a directory"));
    }
    if !candidate.exists() {
        return Err(invalid(field_name, path, "No browser binary at this path"));
    }
    Ok(())
}

/// Rejects timeouts shorter than `min`. Durations are reported in milliseconds.
pub fn validate_min_duration(field_name: &str, value: Duration, min: Duration) -> Result<()> {
    if value < min {
        return Err(invalid(
            field_name,
            format!("{}ms", value.as_millis()),
            format!("Timeout must be at least {}ms", min.as_millis()),
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field_name, value, "Value cannot be empty or whitespace-only"));
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
        return Err(invalid(
            field_name,
            value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}
