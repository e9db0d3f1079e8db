use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::{Route, State};
use sqlx::{Pool, Sqlite};

use super::{affected, message};
use crate::auth::{ADMIN_ONLY, AuthUser};
use crate::db::{get_software_links, link_software, unlink_software};
use crate::error::AppError;
use crate::models::{Message, NewSoftwareLink, SoftwareLink};
use crate::validation::JsonValidateExt;

#[post("/disciplina-software", data = "<link>")]
pub async fn api_link_software(
    link: Json<NewSoftwareLink>,
    user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Custom<Json<Message>>, AppError> {
    user.require_role(ADMIN_ONLY)?;
    let link = link.validate_custom()?;

    link_software(
        db,
        link.discipline_id.unwrap_or_default(),
        link.software_id.unwrap_or_default(),
    )
    .await
    .map_err(|e| {
        e.on_duplicate("Este software já está vinculado a esta disciplina.")
            .on_missing_reference("Disciplina ou software informados não existem.")
            .on_database("Erro ao vincular software")
    })?;

    Ok(Custom(Status::Created, message("Software vinculado à disciplina!")))
}

#[get("/disciplina-software")]
pub async fn api_get_software_links(
    _user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Vec<SoftwareLink>>, AppError> {
    let links = get_software_links(db)
        .await
        .map_err(|e| e.on_database("Erro ao buscar vínculos de software"))?;

    Ok(Json(links))
}

#[delete("/disciplina-software/<discipline_id>/<software_id>")]
pub async fn api_unlink_software(
    discipline_id: i64,
    software_id: i64,
    user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Message>, AppError> {
    user.require_role(ADMIN_ONLY)?;

    let rows = unlink_software(db, discipline_id, software_id)
        .await
        .map_err(|e| e.on_database("Erro ao desvincular software"))?;
    affected(rows, "Vínculo entre disciplina e software não encontrado.")?;

    Ok(message("Software desvinculado da disciplina com sucesso."))
}

pub fn routes() -> Vec<Route> {
    routes![api_link_software, api_get_software_links, api_unlink_software]
}
