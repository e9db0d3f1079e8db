use sqlx::{Pool, Sqlite};
use tracing::{info, instrument};

use super::update::{UpdateSet, UserColumn};
use crate::auth::Role;
use crate::error::AppError;
use crate::models::{User, UserCredentials};

const USER_COLUMNS: &str =
    "SELECT id_usuario AS id, email, nome_completo AS full_name, role FROM usuario";

#[instrument(skip(pool, password_hash))]
pub async fn create_user(
    pool: &Pool<Sqlite>,
    full_name: &str,
    email: &str,
    password_hash: &str,
    role: Role,
) -> Result<i64, AppError> {
    info!("Creating user");
    let result = sqlx::query(
        "INSERT INTO usuario (nome_completo, email, senha, role) VALUES (?, ?, ?, ?)",
    )
    .bind(full_name)
    .bind(email)
    .bind(password_hash)
    .bind(role)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

#[instrument(skip(pool))]
pub async fn get_all_users(pool: &Pool<Sqlite>) -> Result<Vec<User>, AppError> {
    info!("Getting all users");
    let users = sqlx::query_as::<_, User>(&format!("{} ORDER BY id_usuario", USER_COLUMNS))
        .fetch_all(pool)
        .await?;

    Ok(users)
}

#[instrument(skip(pool))]
pub async fn get_user(pool: &Pool<Sqlite>, id: i64) -> Result<Option<User>, AppError> {
    info!("Fetching user by ID");
    let user = sqlx::query_as::<_, User>(&format!("{} WHERE id_usuario = ?", USER_COLUMNS))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}

#[instrument(skip(pool))]
pub async fn find_credentials_by_email(
    pool: &Pool<Sqlite>,
    email: &str,
) -> Result<Option<UserCredentials>, AppError> {
    info!("Looking up credentials");
    let credentials = sqlx::query_as::<_, UserCredentials>(
        "SELECT id_usuario AS id, nome_completo AS full_name, senha AS password_hash, role
         FROM usuario WHERE email = ?",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(credentials)
}

#[instrument(skip(pool, changes), fields(columns = ?changes.columns()))]
pub async fn update_user(
    pool: &Pool<Sqlite>,
    id: i64,
    changes: UpdateSet<UserColumn>,
) -> Result<u64, AppError> {
    info!("Updating user");
    changes.execute(pool, id).await
}
