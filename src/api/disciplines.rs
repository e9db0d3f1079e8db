use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::{Route, State};
use sqlx::{Pool, Sqlite};

use super::{affected, created, found, message};
use crate::auth::{ADMIN_ONLY, AuthUser};
use crate::db::update::DisciplineColumn;
use crate::db::{
    create_discipline, delete_row, get_all_disciplines, get_discipline, update_discipline,
};
use crate::error::AppError;
use crate::models::{Created, Discipline, DisciplineUpdate, Message, NewDiscipline};
use crate::validation::JsonValidateExt;

const UNKNOWN_COURSE: &str = "Curso informado não existe";

#[post("/disciplinas", data = "<discipline>")]
pub async fn api_create_discipline(
    discipline: Json<NewDiscipline>,
    user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Custom<Json<Created>>, AppError> {
    user.require_role(ADMIN_ONLY)?;
    let discipline = discipline.validate_custom()?;

    let id = create_discipline(db, &discipline).await.map_err(|e| {
        e.on_missing_reference(UNKNOWN_COURSE)
            .on_database("Erro ao cadastrar disciplina")
    })?;

    Ok(created("Disciplina cadastrada com sucesso!", "id_disciplina", id))
}

#[get("/disciplinas")]
pub async fn api_get_disciplines(
    _user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Vec<Discipline>>, AppError> {
    let disciplines = get_all_disciplines(db)
        .await
        .map_err(|e| e.on_database("Erro ao buscar disciplinas"))?;

    Ok(Json(disciplines))
}

#[get("/disciplinas/<id>")]
pub async fn api_get_discipline(
    id: i64,
    _user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Discipline>, AppError> {
    let discipline = get_discipline(db, id)
        .await
        .map_err(|e| e.on_database("Erro ao buscar disciplina"))?;

    found(discipline, "Disciplina não encontrada.")
}

#[put("/disciplinas/<id>", data = "<update>")]
pub async fn api_update_discipline(
    id: i64,
    update: Json<DisciplineUpdate>,
    user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Message>, AppError> {
    user.require_role(ADMIN_ONLY)?;
    let update = update.validate_custom()?;

    let rows = update_discipline(db, id, update).await.map_err(|e| {
        e.on_missing_reference(UNKNOWN_COURSE)
            .on_database("Erro ao atualizar disciplina")
    })?;
    affected(rows, "Disciplina não encontrada ou nenhum dado alterado.")?;

    Ok(message("Disciplina atualizada com sucesso."))
}

#[delete("/disciplinas/<id>")]
pub async fn api_delete_discipline(
    id: i64,
    user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Message>, AppError> {
    user.require_role(ADMIN_ONLY)?;

    let rows = delete_row::<DisciplineColumn>(db, id).await.map_err(|e| {
        e.on_referenced(
            "Não é possível deletar esta disciplina pois ela está vinculada a alocações de professor ou softwares.",
        )
        .on_database("Erro ao deletar disciplina")
    })?;
    affected(rows, "Disciplina não encontrada.")?;

    Ok(message("Disciplina deletada com sucesso."))
}

pub fn routes() -> Vec<Route> {
    routes![
        api_create_discipline,
        api_get_disciplines,
        api_get_discipline,
        api_update_discipline,
        api_delete_discipline
    ]
}
