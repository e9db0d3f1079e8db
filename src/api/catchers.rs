use rocket::Request;
use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;

use crate::auth::AuthFailure;
use crate::error::ErrorBody;

/// Gives framework-level failures the same `{ erro }` body as handler errors.
#[catch(default)]
pub fn default_catcher(status: Status, request: &Request<'_>) -> Custom<Json<ErrorBody>> {
    let failure = *request.local_cache(|| None::<AuthFailure>);

    let (status, message) = match (status.code, failure) {
        (401 | 403, Some(failure)) => (status, failure.message()),
        (401, None) => (status, AuthFailure::MissingToken.message()),
        (400 | 422, _) => (
            Status::BadRequest,
            "Dados inválidos. Verifique o corpo da requisição.",
        ),
        (404, _) => (status, "Recurso não encontrado."),
        (code, _) if code >= 500 => (status, "Erro interno no servidor"),
        _ => (status, status.reason().unwrap_or("Erro na requisição")),
    };

    tracing::warn!(
        status = status.code,
        uri = %request.uri(),
        "Request failed before reaching a handler"
    );
    Custom(status, Json(ErrorBody::new(message)))
}
