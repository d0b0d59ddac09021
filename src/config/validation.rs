use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Base URL cannot be empty and must carry an http:// or https:// scheme
/// - HTTP timeout must be positive, a zero timeout would let a fetch hang
/// - Output directory cannot be empty
/// - If log file path is provided, it cannot be empty and its parent
///   directory must exist or be creatable
pub fn validate_config(
    base_url: &str,
    output_dir: &str,
    http_timeout_seconds: u64,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if base_url.is_empty() {
        return Err(AppError::config_error("Base URL cannot be empty"));
    }

    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(AppError::config_error(
            "Base URL must start with http:// or https://",
        ));
    }

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least one second",
        ));
    }

    if output_dir.trim().is_empty() {
        return Err(AppError::config_error("Output directory cannot be empty"));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
