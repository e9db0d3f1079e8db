use opentelemetry_semantic_conventions::{attribute::OTEL_STATUS_CODE, trace::ERROR_TYPE};
use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{Span, error, warn};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Invalid credential: {0}")]
    InvalidCredential(String),

    #[error("Authorization error: {0}")]
    Authorization(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// A foreign key was violated. Deletes surface this as a conflict, writes
    /// that point at a missing row surface it as a validation failure.
    #[error("Reference violation: {0}")]
    Reference(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ErrorBody {
    pub erro: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            erro: message.into(),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() {
                return AppError::Conflict("Registro duplicado.".to_string());
            }
            if db_err.is_foreign_key_violation() {
                return AppError::Reference("Registro vinculado a outras entidades.".to_string());
            }
        }
        AppError::Database(err)
    }
}

impl AppError {
    /// Replaces the message of a uniqueness conflict.
    pub fn on_duplicate(self, message: &str) -> Self {
        match self {
            AppError::Conflict(_) => AppError::Conflict(message.to_string()),
            other => other,
        }
    }

    /// A delete hit a row that is still referenced.
    pub fn on_referenced(self, message: &str) -> Self {
        match self {
            AppError::Reference(_) => AppError::Conflict(message.to_string()),
            other => other,
        }
    }

    /// An insert or update pointed at a row that does not exist.
    pub fn on_missing_reference(self, message: &str) -> Self {
        match self {
            AppError::Reference(_) => AppError::Validation(message.to_string()),
            other => other,
        }
    }

    /// Replaces the message shown for a database fault. The driver detail stays in the logs.
    pub fn on_database(self, message: &str) -> Self {
        match self {
            AppError::Database(err) => {
                error!(db_error = %err, "Database error");
                AppError::Internal(message.to_string())
            }
            other => other,
        }
    }

    pub fn log_and_record(&self, ctx: &str) {
        let current_span = Span::current();
        let is_valid_span = !current_span.is_none();

        let message = self.to_string();
        let error_kind = match self {
            AppError::Database(err) => {
                error!(error = %message, context = %ctx, db_error = %err, "Database error");
                "database_error"
            }
            AppError::Validation(msg) => {
                warn!(message = %msg, context = %ctx, "Validation error");
                "validation_error"
            }
            AppError::Authentication(msg) => {
                warn!(message = %msg, context = %ctx, "Authentication error");
                "authentication_error"
            }
            AppError::InvalidCredential(msg) => {
                warn!(message = %msg, context = %ctx, "Invalid credential");
                "invalid_credential"
            }
            AppError::Authorization(msg) => {
                warn!(message = %msg, context = %ctx, "Authorization error");
                "authorization_error"
            }
            AppError::NotFound(msg) => {
                warn!(message = %msg, context = %ctx, "Not found error");
                "not_found_error"
            }
            AppError::Conflict(msg) => {
                warn!(message = %msg, context = %ctx, "Conflict error");
                "conflict_error"
            }
            AppError::Reference(msg) => {
                warn!(message = %msg, context = %ctx, "Reference violation");
                "reference_error"
            }
            AppError::Internal(msg) => {
                error!(message = %msg, context = %ctx, "Internal server error");
                "internal_error"
            }
        };

        if is_valid_span {
            current_span.record("error", tracing::field::display(true));
            current_span.record(ERROR_TYPE, tracing::field::display(error_kind));
            current_span.record("error.message", tracing::field::display(&message));

            if let AppError::Database(_) | AppError::Internal(_) = self {
                current_span.record(OTEL_STATUS_CODE, tracing::field::display("ERROR"));
            }
        }
    }

    pub fn status_code(&self) -> Status {
        match self {
            AppError::Database(_) => Status::InternalServerError,
            AppError::Validation(_) => Status::BadRequest,
            AppError::Authentication(_) => Status::Unauthorized,
            AppError::InvalidCredential(_) => Status::Forbidden,
            AppError::Authorization(_) => Status::Forbidden,
            AppError::NotFound(_) => Status::NotFound,
            AppError::Conflict(_) => Status::Conflict,
            AppError::Reference(_) => Status::Conflict,
            AppError::Internal(_) => Status::InternalServerError,
        }
    }

    /// Message sent to the client. Database faults never leak driver detail.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Database(_) => "Erro interno no servidor".to_string(),
            AppError::Validation(msg)
            | AppError::Authentication(msg)
            | AppError::InvalidCredential(msg)
            | AppError::Authorization(msg)
            | AppError::NotFound(msg)
            | AppError::Conflict(msg)
            | AppError::Reference(msg)
            | AppError::Internal(msg) => msg.clone(),
        }
    }

    pub fn to_status_with_log(&self, context: &str) -> Status {
        self.log_and_record(context);
        self.status_code()
    }
}

impl<'r> rocket::response::Responder<'r, 'static> for AppError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'static> {
        let status = self.to_status_with_log(&format!("Request to {} {}", req.method(), req.uri()));
        Custom(status, Json(ErrorBody::new(self.public_message()))).respond_to(req)
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> Self {
        AppError::Internal(format!("Cryptography error: {}", error))
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(error: jsonwebtoken::errors::Error) -> Self {
        AppError::Internal(format!("Token signing error: {}", error))
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(error: sqlx::migrate::MigrateError) -> Self {
        AppError::Internal(format!("Migration error: {}", error))
    }
}
