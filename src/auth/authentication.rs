use rocket::Request;
use rocket::http::Status;
use rocket::request::{FromRequest, Outcome};

use crate::error::AppError;

use super::{AuthUser, TokenKeys};

/// Why the credential verifier rejected a request; read back by the catcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    MissingToken,
    InvalidToken,
}

impl AuthFailure {
    pub fn message(&self) -> &'static str {
        match self {
            AuthFailure::MissingToken => "Token de autenticação não fornecido.",
            AuthFailure::InvalidToken => "Token de autenticação inválido ou expirado.",
        }
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    let token = token.trim();

    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AuthUser {
    type Error = AppError;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let keys = match request.rocket().state::<TokenKeys>() {
            Some(keys) => keys,
            _ => {
                tracing::error!("Token keys not found in managed state");
                return Outcome::Error((
                    Status::InternalServerError,
                    AppError::Internal("Token keys not configured".to_string()),
                ));
            }
        };

        let token = request
            .headers()
            .get_one("Authorization")
            .and_then(bearer_token);

        let Some(token) = token else {
            tracing::warn!(uri = %request.uri(), "Request without bearer token");
            request.local_cache(|| Some(AuthFailure::MissingToken));
            return Outcome::Error((
                Status::Unauthorized,
                AppError::Authentication(AuthFailure::MissingToken.message().to_string()),
            ));
        };

        match keys.verify(token) {
            Ok(claims) => {
                let user = AuthUser::from(claims);
                tracing::debug!(
                    user_id = %user.id,
                    role = %user.role,
                    "User authenticated via bearer token"
                );
                Outcome::Success(user)
            }
            Err(err) => {
                request.local_cache(|| Some(AuthFailure::InvalidToken));
                Outcome::Error((Status::Forbidden, err))
            }
        }
    }
}
