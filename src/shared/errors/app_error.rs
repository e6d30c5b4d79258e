use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Service with id {0} not found")]
    ServiceNotFound(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::ExternalServiceError("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::ExternalServiceError("Failed to connect to provider".to_string())
        } else if err.is_decode() {
            AppError::SerializationError(format!("Invalid provider response body: {}", err))
        } else {
            AppError::ExternalServiceError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::ConfigurationError(format!("Invalid number: {}", err))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_not_found_message_names_the_id() {
        let err = AppError::ServiceNotFound("unknown-id".to_string());
        assert_eq!(err.to_string(), "Service with id unknown-id not found");
    }

    #[test]
    fn test_serde_error_maps_to_serialization_error() {
        let err = serde_json::from_str::<Vec<u32>>("{not json").unwrap_err();
        assert!(matches!(AppError::from(err), AppError::SerializationError(_)));
    }

    #[test]
    fn test_error_serializes_with_type_tag() {
        let json = serde_json::to_value(AppError::ServiceNotFound("a".to_string())).unwrap();
        assert_eq!(json["type"], "ServiceNotFound");
        assert_eq!(json["message"], "a");
    }
}
