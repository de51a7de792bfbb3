use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// A create/update request carried its identifier in the wrong state.
    /// Carries the entity name and a machine-readable reason code so the
    /// client can show a targeted message.
    #[error("{message}")]
    BadRequestAlert {
        entity_name: &'static str,
        error_key: &'static str,
        message: String,
    },

    /// Field-level validation failures
    #[error("Validation error: {0}")]
    Validation(String),

    /// Database operation errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// HTTP client errors (client-side service layer)
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        let mut body = serde_json::json!({
            "error": {
                "message": self.to_string(),
                "code": status_code.as_u16(),
            }
        });

        if let AppError::BadRequestAlert {
            entity_name,
            error_key,
            ..
        } = self
        {
            body["error"]["entity"] = serde_json::json!(entity_name);
            body["error"]["key"] = serde_json::json!(error_key);
        }

        HttpResponse::build(status_code).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequestAlert { .. } => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::HttpClient(_) => StatusCode::BAD_GATEWAY,
            AppError::Json(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// Creation payload already carried an identifier
    pub fn id_exists(entity_name: &'static str) -> Self {
        AppError::BadRequestAlert {
            entity_name,
            error_key: "idexists",
            message: format!("A new {} cannot already have an id", entity_name),
        }
    }

    /// Update payload was missing its identifier
    pub fn id_null(entity_name: &'static str) -> Self {
        AppError::BadRequestAlert {
            entity_name,
            error_key: "idnull",
            message: format!("An existing {} must have an id", entity_name),
        }
    }
}
