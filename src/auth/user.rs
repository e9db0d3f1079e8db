use serde::Serialize;

use crate::error::AppError;

use super::{Claims, Role};

/// Identity verified from the bearer token, scoped to a single request.
#[derive(Debug, Serialize, Clone)]
pub struct AuthUser {
    pub id: i64,
    pub nome: String,
    pub role: Role,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.id,
            nome: claims.nome,
            role: claims.role,
        }
    }
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Role gate: the identity's role must be one of `allowed`.
    pub fn require_role(&self, allowed: &[Role]) -> Result<(), AppError> {
        if allowed.contains(&self.role) {
            Ok(())
        } else {
            tracing::warn!(
                user_id = %self.id,
                role = %self.role.as_str(),
                allowed = ?allowed,
                "Permission denied"
            );
            Err(AppError::Authorization(
                "Acesso negado. Você não tem permissão para realizar esta ação.".to_string(),
            ))
        }
    }

    /// Admins may address any user record, everyone else only their own.
    pub fn require_self_or_admin(&self, user_id: i64, message: &str) -> Result<(), AppError> {
        if self.is_admin() || self.id == user_id {
            Ok(())
        } else {
            tracing::warn!(
                user_id = %self.id,
                target_id = %user_id,
                "Access to another user's record denied"
            );
            Err(AppError::Authorization(message.to_string()))
        }
    }
}
