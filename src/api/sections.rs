use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::{Route, State};
use sqlx::{Pool, Sqlite};

use super::{affected, created, found, message};
use crate::auth::{ADMIN_ONLY, AuthUser};
use crate::db::update::SectionColumn;
use crate::db::{create_section, delete_row, get_section, get_sections, update_section};
use crate::error::AppError;
use crate::models::{Created, Message, NewSection, Section, SectionUpdate, Shift};
use crate::validation::JsonValidateExt;

const UNKNOWN_COURSE: &str = "Curso informado não existe";

#[post("/turmas", data = "<section>")]
pub async fn api_create_section(
    section: Json<NewSection>,
    user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Custom<Json<Created>>, AppError> {
    user.require_role(ADMIN_ONLY)?;
    let section = section.validate_custom()?;
    let shift = Shift::parse_field(section.shift.as_deref().unwrap_or_default())?;

    let id = create_section(db, &section, shift).await.map_err(|e| {
        e.on_duplicate(
            "Já existe uma turma com esse número, módulo, ano e turno para o curso informado",
        )
        .on_missing_reference(UNKNOWN_COURSE)
        .on_database("Erro ao cadastrar turma")
    })?;

    Ok(created("Turma criada com sucesso", "id_turma", id))
}

#[get("/turmas?<id_curso_fk>")]
pub async fn api_get_sections(
    id_curso_fk: Option<i64>,
    _user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Vec<Section>>, AppError> {
    let sections = get_sections(db, id_curso_fk)
        .await
        .map_err(|e| e.on_database("Erro ao listar turmas"))?;

    Ok(Json(sections))
}

#[get("/turmas/<id>")]
pub async fn api_get_section(
    id: i64,
    _user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Section>, AppError> {
    let section = get_section(db, id)
        .await
        .map_err(|e| e.on_database("Erro ao buscar turma"))?;

    found(section, "Turma não encontrada.")
}

#[put("/turmas/<id>", data = "<update>")]
pub async fn api_update_section(
    id: i64,
    update: Json<SectionUpdate>,
    user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Message>, AppError> {
    user.require_role(ADMIN_ONLY)?;
    let update = update.validate_custom()?;

    let rows = update_section(db, id, update).await.map_err(|e| {
        e.on_duplicate("Já existe uma turma com esses dados para o curso informado.")
            .on_missing_reference(UNKNOWN_COURSE)
            .on_database("Erro ao atualizar turma")
    })?;
    affected(rows, "Turma não encontrada ou nenhum dado alterado.")?;

    Ok(message("Turma atualizada com sucesso."))
}

#[delete("/turmas/<id>")]
pub async fn api_delete_section(
    id: i64,
    user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Message>, AppError> {
    user.require_role(ADMIN_ONLY)?;

    let rows = delete_row::<SectionColumn>(db, id).await.map_err(|e| {
        e.on_referenced(
            "Não é possível deletar esta turma pois ela está vinculada a alocações de professor.",
        )
        .on_database("Erro ao deletar turma")
    })?;
    affected(rows, "Turma não encontrada.")?;

    Ok(message("Turma deletada com sucesso."))
}

pub fn routes() -> Vec<Route> {
    routes![
        api_create_section,
        api_get_sections,
        api_get_section,
        api_update_section,
        api_delete_section
    ]
}
