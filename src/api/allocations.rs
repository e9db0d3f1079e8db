use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::{Route, State};
use sqlx::{Pool, Sqlite};

use super::{affected, created, found, message};
use crate::auth::{ADMIN_ONLY, AuthUser};
use crate::db::update::AllocationColumn;
use crate::db::{
    create_allocation, delete_row, get_all_allocations, get_allocation, update_allocation,
};
use crate::error::AppError;
use crate::models::{Allocation, AllocationUpdate, Created, Message, NewAllocation};
use crate::validation::JsonValidateExt;

const DUPLICATE_ALLOCATION: &str = "Esta alocação (professor, disciplina, turma) já existe.";
const DANGLING_REFERENCE: &str =
    "Professor, disciplina, turma ou sala informados não existem.";

#[post("/professor-alocacoes", data = "<allocation>")]
pub async fn api_create_allocation(
    allocation: Json<NewAllocation>,
    user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Custom<Json<Created>>, AppError> {
    user.require_role(ADMIN_ONLY)?;
    let allocation = allocation.validate_custom()?;

    let id = create_allocation(db, &allocation).await.map_err(|e| {
        e.on_duplicate(DUPLICATE_ALLOCATION)
            .on_missing_reference(DANGLING_REFERENCE)
            .on_database("Erro ao criar alocação de professor.")
    })?;

    Ok(created(
        "Alocação de professor criada com sucesso!",
        "id_professor_alocacao",
        id,
    ))
}

#[get("/professor-alocacoes")]
pub async fn api_get_allocations(
    _user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Vec<Allocation>>, AppError> {
    let allocations = get_all_allocations(db)
        .await
        .map_err(|e| e.on_database("Erro ao buscar alocações de professor."))?;

    Ok(Json(allocations))
}

#[get("/professor-alocacoes/<id>")]
pub async fn api_get_allocation(
    id: i64,
    _user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Allocation>, AppError> {
    let allocation = get_allocation(db, id)
        .await
        .map_err(|e| e.on_database("Erro ao buscar alocação de professor."))?;

    found(allocation, "Alocação de professor não encontrada.")
}

#[put("/professor-alocacoes/<id>", data = "<update>")]
pub async fn api_update_allocation(
    id: i64,
    update: Json<AllocationUpdate>,
    user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Message>, AppError> {
    user.require_role(ADMIN_ONLY)?;
    let update = update.validate_custom()?;

    let rows = update_allocation(db, id, update).await.map_err(|e| {
        e.on_duplicate(DUPLICATE_ALLOCATION)
            .on_missing_reference(DANGLING_REFERENCE)
            .on_database("Erro ao atualizar alocação de professor")
    })?;
    affected(
        rows,
        "Alocação de professor não encontrada ou nenhum dado alterado.",
    )?;

    Ok(message("Alocação de professor atualizada com sucesso."))
}

#[delete("/professor-alocacoes/<id>")]
pub async fn api_delete_allocation(
    id: i64,
    user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Message>, AppError> {
    user.require_role(ADMIN_ONLY)?;

    let rows = delete_row::<AllocationColumn>(db, id)
        .await
        .map_err(|e| e.on_database("Erro ao deletar alocação de professor"))?;
    affected(rows, "Alocação de professor não encontrada.")?;

    Ok(message("Alocação de professor deletada com sucesso."))
}

pub fn routes() -> Vec<Route> {
    routes![
        api_create_allocation,
        api_get_allocations,
        api_get_allocation,
        api_update_allocation,
        api_delete_allocation
    ]
}
