pub mod allocations;
pub mod catalog;
pub mod catchers;
pub mod disciplines;
pub mod links;
pub mod professors;
pub mod report;
pub mod sections;
pub mod users;

use rocket::Route;
use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;

use crate::error::AppError;
use crate::models::{Created, Message};

pub use catchers::default_catcher;

/// 201 with `{ mensagem, <id_field> }`.
pub fn created(message: &str, id_field: &'static str, id: i64) -> Custom<Json<Created>> {
    Custom(
        Status::Created,
        Json(Created {
            message: message.to_string(),
            id_field,
            id,
        }),
    )
}

pub fn message(message: &str) -> Json<Message> {
    Json(Message::new(message))
}

/// Turns an optional row into the row or a 404 with `not_found`.
pub fn found<T>(row: Option<T>, not_found: &str) -> Result<Json<T>, AppError> {
    row.map(Json)
        .ok_or_else(|| AppError::NotFound(not_found.to_string()))
}

/// A write that matched no row is a 404.
pub fn affected(rows: u64, not_found: &str) -> Result<(), AppError> {
    if rows == 0 {
        Err(AppError::NotFound(not_found.to_string()))
    } else {
        Ok(())
    }
}

#[get("/health")]
pub fn health() -> &'static str {
    "OK"
}

pub fn routes() -> Vec<Route> {
    let mut routes = routes![health];
    routes.extend(users::routes());
    routes.extend(catalog::routes());
    routes.extend(disciplines::routes());
    routes.extend(professors::routes());
    routes.extend(sections::routes());
    routes.extend(allocations::routes());
    routes.extend(links::routes());
    routes.extend(report::routes());
    routes
}
