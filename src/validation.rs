use rocket::serde::json::Json;
use validator::{Validate, ValidationErrors};

use crate::error::AppError;

const FALLBACK_MESSAGE: &str = "Dados inválidos.";

pub trait JsonValidateExt<T> {
    /// Unwraps the body after running its `validator` rules.
    fn validate_custom(self) -> Result<T, AppError>;
}

impl<T: Validate> JsonValidateExt<T> for Json<T> {
    fn validate_custom(self) -> Result<T, AppError> {
        let inner = self.into_inner();
        inner
            .validate()
            .map_err(|errors| AppError::Validation(collect_messages(&errors)))?;
        Ok(inner)
    }
}

/// Flattens field errors into one message, ordered by field name with
/// repeated messages collapsed.
pub fn collect_messages(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let mut messages: Vec<String> = Vec::new();
    for (_, field_errors) in fields {
        for error in field_errors.iter() {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());

            if !messages.contains(&message) {
                messages.push(message);
            }
        }
    }

    if messages.is_empty() {
        FALLBACK_MESSAGE.to_string()
    } else {
        messages.join(" ")
    }
}
