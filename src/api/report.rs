use rocket::serde::json::Json;
use rocket::{Route, State};
use sqlx::{Pool, Sqlite};

use crate::auth::AuthUser;
use crate::db::get_curriculum;
use crate::error::AppError;
use crate::models::CurriculumRow;

/// The whole curriculum grid, straight from `vw_grade_curricular_completa`.
#[get("/grade-curricular")]
pub async fn api_get_curriculum(
    _user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Vec<CurriculumRow>>, AppError> {
    let rows = get_curriculum(db)
        .await
        .map_err(|e| e.on_database("Erro ao gerar relatório da grade curricular"))?;

    Ok(Json(rows))
}

pub fn routes() -> Vec<Route> {
    routes![api_get_curriculum]
}
