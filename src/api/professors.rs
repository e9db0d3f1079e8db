use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::{Route, State};
use sqlx::{Pool, Sqlite};

use super::{affected, created, found, message};
use crate::auth::{ADMIN_ONLY, AuthUser};
use crate::db::update::ProfessorColumn;
use crate::db::{
    ProfessorLink, create_professor, delete_row, get_all_professors, get_professor,
    get_professor_summaries, relink_professor,
};
use crate::error::AppError;
use crate::models::{Created, Message, Professor, ProfessorRequest, ProfessorSummary};
use crate::validation::JsonValidateExt;

const ALREADY_PROFESSOR: &str = "Este usuário já está cadastrado como professor.";

#[post("/professores", data = "<professor>")]
pub async fn api_create_professor(
    professor: Json<ProfessorRequest>,
    user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Custom<Json<Created>>, AppError> {
    user.require_role(ADMIN_ONLY)?;
    let user_id = professor.validate_custom()?.user_id.unwrap_or_default();

    let link = create_professor(db, user_id).await.map_err(|e| {
        e.on_duplicate(ALREADY_PROFESSOR)
            .on_database("Erro ao cadastrar professor no banco de dados.")
    })?;

    match link {
        ProfessorLink::Linked(id) => Ok(created(
            "Professor cadastrado com sucesso",
            "id_professor",
            id,
        )),
        ProfessorLink::UnknownUser => {
            Err(AppError::NotFound("Usuário não encontrado.".to_string()))
        }
        ProfessorLink::NotAProfessor(_) => Err(AppError::Authorization(
            "Apenas usuários com o role 'professor' podem ser cadastrados como professores."
                .to_string(),
        )),
    }
}

#[get("/professores")]
pub async fn api_get_professors(
    _user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Vec<Professor>>, AppError> {
    let professors = get_all_professors(db)
        .await
        .map_err(|e| e.on_database("Erro ao buscar professores"))?;

    Ok(Json(professors))
}

#[get("/professores/<id>")]
pub async fn api_get_professor(
    id: i64,
    _user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Professor>, AppError> {
    let professor = get_professor(db, id)
        .await
        .map_err(|e| e.on_database("Erro ao buscar professor"))?;

    found(professor, "Professor não encontrado.")
}

#[put("/professores/<id>", data = "<professor>")]
pub async fn api_update_professor(
    id: i64,
    professor: Json<ProfessorRequest>,
    user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Message>, AppError> {
    user.require_role(ADMIN_ONLY)?;
    let user_id = professor
        .validate_custom()
        .map_err(|_| {
            AppError::Validation("O ID do usuário é obrigatório para atualização.".to_string())
        })?
        .user_id
        .unwrap_or_default();

    let link = relink_professor(db, id, user_id).await.map_err(|e| {
        e.on_duplicate(ALREADY_PROFESSOR)
            .on_database("Erro ao atualizar professor")
    })?;

    match link {
        ProfessorLink::Linked(rows) => {
            affected(rows, "Professor não encontrado ou nenhum dado alterado.")?;
            Ok(message("Professor atualizado com sucesso."))
        }
        ProfessorLink::UnknownUser => Err(AppError::NotFound(
            "Novo usuário para professor não encontrado.".to_string(),
        )),
        ProfessorLink::NotAProfessor(_) => Err(AppError::Authorization(
            "Apenas usuários com o role 'professor' podem ser vinculados como professores."
                .to_string(),
        )),
    }
}

#[delete("/professores/<id>")]
pub async fn api_delete_professor(
    id: i64,
    user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Message>, AppError> {
    user.require_role(ADMIN_ONLY)?;

    let rows = delete_row::<ProfessorColumn>(db, id).await.map_err(|e| {
        e.on_referenced(
            "Não é possível deletar este professor pois ele está vinculado a alocações.",
        )
        .on_database("Erro ao deletar professor")
    })?;
    affected(rows, "Professor não encontrado.")?;

    Ok(message("Professor deletado com sucesso."))
}

#[get("/professores-com-nomes")]
pub async fn api_get_professor_summaries(
    _user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Vec<ProfessorSummary>>, AppError> {
    let summaries = get_professor_summaries(db)
        .await
        .map_err(|e| e.on_database("Erro ao buscar professores com nomes e alocações."))?;

    Ok(Json(summaries))
}

pub fn routes() -> Vec<Route> {
    routes![
        api_create_professor,
        api_get_professors,
        api_get_professor,
        api_update_professor,
        api_delete_professor,
        api_get_professor_summaries
    ]
}
