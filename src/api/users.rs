use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::{Route, State};
use sqlx::{Pool, Sqlite};
use tracing::{debug, info};

use super::{affected, created, found, message};
use crate::auth::{ADMIN_ONLY, AuthUser, PasswordHasher, TokenKeys};
use crate::db::update::{UpdateSet, UserColumn};
use crate::db::{
    create_user, delete_row, find_credentials_by_email, get_all_users, get_user, update_user,
};
use crate::error::AppError;
use crate::models::{
    Created, LoginRequest, LoginResponse, Message, NewUser, User, UserUpdate, parse_role_field,
};
use crate::validation::JsonValidateExt;

#[post("/usuarios", data = "<registration>")]
pub async fn api_register(
    registration: Json<NewUser>,
    db: &State<Pool<Sqlite>>,
    hasher: &State<PasswordHasher>,
) -> Result<Custom<Json<Created>>, AppError> {
    let registration = registration.validate_custom()?;
    let role = parse_role_field(registration.role.as_deref().unwrap_or_default())?;
    let password_hash = hasher.hash(registration.password.as_deref().unwrap_or_default())?;

    let id = create_user(
        db,
        registration.full_name.as_deref().unwrap_or_default(),
        registration.email.as_deref().unwrap_or_default(),
        &password_hash,
        role,
    )
    .await
    .map_err(|e| {
        e.on_duplicate("Este email já está cadastrado.")
            .on_database("Erro ao conectar o banco de dados ou cadastrar usuário")
    })?;

    info!(user_id = %id, %role, "User registered");
    Ok(created("Usuário cadastrado com sucesso", "id_usuario", id))
}

#[post("/login", data = "<login>")]
pub async fn api_login(
    login: Json<LoginRequest>,
    db: &State<Pool<Sqlite>>,
    hasher: &State<PasswordHasher>,
    keys: &State<TokenKeys>,
) -> Result<Json<LoginResponse>, AppError> {
    let login = login.validate_custom()?;
    let email = login.email.as_deref().unwrap_or_default();

    let credentials = find_credentials_by_email(db, email)
        .await
        .map_err(|e| e.on_database("Erro ao conectar no banco de dados"))?
        .ok_or_else(|| AppError::Validation("Usuário não encontrado".to_string()))?;

    if !hasher.verify(
        login.password.as_deref().unwrap_or_default(),
        &credentials.password_hash,
    ) {
        return Err(AppError::Validation("Senha incorreta!".to_string()));
    }

    let token = keys.issue(credentials.id, &credentials.full_name, credentials.role)?;

    info!(user_id = %credentials.id, "User logged in");
    Ok(Json(LoginResponse {
        message: "Login efetuado com sucesso".to_string(),
        token,
    }))
}

#[get("/usuarios")]
pub async fn api_get_users(
    user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Vec<User>>, AppError> {
    user.require_role(ADMIN_ONLY)?;

    let users = get_all_users(db)
        .await
        .map_err(|e| e.on_database("Erro ao buscar usuários"))?;

    Ok(Json(users))
}

#[get("/usuarios/<id>")]
pub async fn api_get_user(
    id: i64,
    user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<User>, AppError> {
    user.require_self_or_admin(
        id,
        "Acesso negado. Você não tem permissão para ver este usuário.",
    )?;

    let row = get_user(db, id)
        .await
        .map_err(|e| e.on_database("Erro ao buscar usuário"))?;

    found(row, "Usuário não encontrado.")
}

#[put("/usuarios/<id>", data = "<update>")]
pub async fn api_update_user(
    id: i64,
    update: Json<UserUpdate>,
    user: AuthUser,
    db: &State<Pool<Sqlite>>,
    hasher: &State<PasswordHasher>,
) -> Result<Json<Message>, AppError> {
    user.require_self_or_admin(
        id,
        "Acesso negado. Você não tem permissão para editar este usuário.",
    )?;
    let update = update.validate_custom()?;

    let role = match update.role.as_deref() {
        Some(role) if user.is_admin() => Some(parse_role_field(role)?),
        // Dropped rather than rejected; a body with only `role` then has nothing to update.
        Some(_) => {
            debug!(user_id = %user.id, "Ignoring role change requested by non-admin");
            None
        }
        None => None,
    };

    let password_hash = update
        .password
        .as_deref()
        .map(|password| hasher.hash(password))
        .transpose()?;

    let changes = UpdateSet::new()
        .set_some(UserColumn::FullName, update.full_name)
        .set_some(UserColumn::Email, update.email)
        .set_some(UserColumn::PasswordHash, password_hash)
        .set_some(UserColumn::Role, role)
        .require_changes()?;

    let rows = update_user(db, id, changes).await.map_err(|e| {
        e.on_duplicate("Este email já está cadastrado para outro usuário.")
            .on_database("Erro ao atualizar usuário")
    })?;
    affected(rows, "Usuário não encontrado ou nenhum dado alterado.")?;

    Ok(message("Usuário atualizado com sucesso."))
}

#[delete("/usuarios/<id>")]
pub async fn api_delete_user(
    id: i64,
    user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Message>, AppError> {
    user.require_role(ADMIN_ONLY)?;

    let rows = delete_row::<UserColumn>(db, id).await.map_err(|e| {
        e.on_referenced(
            "Não é possível deletar este usuário pois ele está vinculado a outras entidades (ex: professor).",
        )
        .on_database("Erro ao deletar usuário")
    })?;
    affected(rows, "Usuário não encontrado.")?;

    Ok(message("Usuário deletado com sucesso."))
}

pub fn routes() -> Vec<Route> {
    routes![
        api_register,
        api_login,
        api_get_users,
        api_get_user,
        api_update_user,
        api_delete_user
    ]
}
