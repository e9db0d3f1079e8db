use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::error::AppError;

use super::Role;

/// JWT payload: `{ id, nome, role }` plus issue and expiry timestamps.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    pub id: i64,
    pub nome: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

/// HS256 signing material, managed by Rocket.
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl TokenKeys {
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::default(),
            ttl_secs,
        }
    }

    #[instrument(skip(self, nome))]
    pub fn issue(&self, id: i64, nome: &str, role: Role) -> Result<String, AppError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            id,
            nome: nome.to_string(),
            role,
            iat: now,
            exp: now + self.ttl_secs,
        };

        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| {
                warn!(error = %err, "Rejected bearer token");
                AppError::InvalidCredential(
                    "Token de autenticação inválido ou expirado.".to_string(),
                )
            })
    }
}
