use super::models::Config;
use axum::http::{HeaderValue, StatusCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Fallback status {status} is not a valid HTTP status code")]
    InvalidFallbackStatus { status: u16 },

    #[error("Source path '{field}' must not be empty")]
    EmptySourcePath { field: String },

    #[error("Redirect for '{path}' has a target that cannot be sent as a Location header: {url:?}")]
    InvalidRedirectTarget { path: String, url: String },
}

/// Validate the entire configuration
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    validate_fallback(config)?;
    validate_sources(config)?;
    validate_redirects(config)?;
    Ok(())
}

fn validate_fallback(config: &Config) -> Result<(), ValidationError> {
    let status = config.fallback.status;
    StatusCode::from_u16(status).map_err(|_| ValidationError::InvalidFallbackStatus { status })?;
    Ok(())
}

fn validate_sources(config: &Config) -> Result<(), ValidationError> {
    let sources = &config.sources;
    let named = [
        ("sources.yaml_path", &sources.yaml_path),
        ("sources.json_path", &sources.json_path),
    ];

    for (field, path) in named {
        if path.as_os_str().is_empty() {
            return Err(ValidationError::EmptySourcePath {
                field: field.to_string(),
            });
        }
    }

    for (i, path) in sources.documents.iter().enumerate() {
        if path.as_os_str().is_empty() {
            return Err(ValidationError::EmptySourcePath {
                field: format!("sources.documents[{}]", i),
            });
        }
    }

    Ok(())
}

/// Static targets end up verbatim in the Location header
fn validate_redirects(config: &Config) -> Result<(), ValidationError> {
    for redirect in &config.redirects {
        if HeaderValue::from_str(&redirect.url).is_err() {
            return Err(ValidationError::InvalidRedirectTarget {
                path: redirect.path.clone(),
                url: redirect.url.clone(),
            });
        }
    }
    Ok(())
}
