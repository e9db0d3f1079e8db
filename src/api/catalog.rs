//! Courses, rooms and software: catalog entities with no cross-checks of
//! their own. Reads need any valid token, writes need an admin.

use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::{Route, State};
use sqlx::{Pool, Sqlite};

use super::{affected, created, found, message};
use crate::auth::{ADMIN_ONLY, AuthUser};
use crate::db::update::{CourseColumn, RoomColumn, SoftwareColumn};
use crate::db::{
    create_course, create_room, create_software, delete_row, get_all_courses, get_all_rooms,
    get_all_software, get_course, get_room, get_software, update_course, update_room,
    update_software,
};
use crate::error::AppError;
use crate::models::{
    Course, CourseUpdate, Created, Message, NewCourse, NewRoom, NewSoftware, Room, RoomUpdate,
    Software, SoftwareUpdate,
};
use crate::validation::JsonValidateExt;

// Courses

#[post("/cursos", data = "<course>")]
pub async fn api_create_course(
    course: Json<NewCourse>,
    user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Custom<Json<Created>>, AppError> {
    user.require_role(ADMIN_ONLY)?;
    let course = course.validate_custom()?;

    let id = create_course(db, &course)
        .await
        .map_err(|e| e.on_database("Erro ao cadastrar curso"))?;

    Ok(created("Curso cadastrado com sucesso", "id_curso", id))
}

#[get("/cursos")]
pub async fn api_get_courses(
    _user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Vec<Course>>, AppError> {
    let courses = get_all_courses(db)
        .await
        .map_err(|e| e.on_database("Erro ao buscar cursos"))?;

    Ok(Json(courses))
}

#[get("/cursos/<id>")]
pub async fn api_get_course(
    id: i64,
    _user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Course>, AppError> {
    let course = get_course(db, id)
        .await
        .map_err(|e| e.on_database("Erro ao buscar curso"))?;

    found(course, "Curso não encontrado.")
}

#[put("/cursos/<id>", data = "<update>")]
pub async fn api_update_course(
    id: i64,
    update: Json<CourseUpdate>,
    user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Message>, AppError> {
    user.require_role(ADMIN_ONLY)?;
    let update = update.validate_custom()?;

    let rows = update_course(db, id, update)
        .await
        .map_err(|e| e.on_database("Erro ao atualizar curso"))?;
    affected(rows, "Curso não encontrado ou nenhum dado alterado.")?;

    Ok(message("Curso atualizado com sucesso."))
}

#[delete("/cursos/<id>")]
pub async fn api_delete_course(
    id: i64,
    user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Message>, AppError> {
    user.require_role(ADMIN_ONLY)?;

    let rows = delete_row::<CourseColumn>(db, id).await.map_err(|e| {
        e.on_referenced(
            "Não é possível deletar este curso pois ele está vinculado a disciplinas ou turmas.",
        )
        .on_database("Erro ao deletar curso")
    })?;
    affected(rows, "Curso não encontrado.")?;

    Ok(message("Curso deletado com sucesso."))
}

// Rooms

#[post("/salas", data = "<room>")]
pub async fn api_create_room(
    room: Json<NewRoom>,
    user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Custom<Json<Created>>, AppError> {
    user.require_role(ADMIN_ONLY)?;
    let room = room.validate_custom()?;

    let id = create_room(db, &room)
        .await
        .map_err(|e| e.on_database("Erro ao cadastrar sala"))?;

    Ok(created("Sala cadastrada com sucesso", "id_sala", id))
}

#[get("/salas")]
pub async fn api_get_rooms(
    _user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Vec<Room>>, AppError> {
    let rooms = get_all_rooms(db)
        .await
        .map_err(|e| e.on_database("Erro ao buscar salas"))?;

    Ok(Json(rooms))
}

#[get("/salas/<id>")]
pub async fn api_get_room(
    id: i64,
    _user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Room>, AppError> {
    let room = get_room(db, id)
        .await
        .map_err(|e| e.on_database("Erro ao buscar sala"))?;

    found(room, "Sala não encontrada.")
}

#[put("/salas/<id>", data = "<update>")]
pub async fn api_update_room(
    id: i64,
    update: Json<RoomUpdate>,
    user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Message>, AppError> {
    user.require_role(ADMIN_ONLY)?;
    let update = update.validate_custom()?;

    let rows = update_room(db, id, update)
        .await
        .map_err(|e| e.on_database("Erro ao atualizar sala"))?;
    affected(rows, "Sala não encontrada ou nenhum dado alterado.")?;

    Ok(message("Sala atualizada com sucesso."))
}

#[delete("/salas/<id>")]
pub async fn api_delete_room(
    id: i64,
    user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Message>, AppError> {
    user.require_role(ADMIN_ONLY)?;

    let rows = delete_row::<RoomColumn>(db, id).await.map_err(|e| {
        e.on_referenced(
            "Não é possível deletar esta sala pois ela está vinculada a alocações de professor.",
        )
        .on_database("Erro ao deletar sala")
    })?;
    affected(rows, "Sala não encontrada.")?;

    Ok(message("Sala deletada com sucesso."))
}

// Software

#[post("/softwares", data = "<software>")]
pub async fn api_create_software(
    software: Json<NewSoftware>,
    user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Custom<Json<Created>>, AppError> {
    user.require_role(ADMIN_ONLY)?;
    let software = software.validate_custom()?;

    let id = create_software(db, &software)
        .await
        .map_err(|e| e.on_database("Erro ao cadastrar software"))?;

    Ok(created("Software cadastrado com sucesso", "id_software", id))
}

#[get("/softwares")]
pub async fn api_get_software_list(
    _user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Vec<Software>>, AppError> {
    let software = get_all_software(db)
        .await
        .map_err(|e| e.on_database("Erro ao buscar softwares"))?;

    Ok(Json(software))
}

#[get("/softwares/<id>")]
pub async fn api_get_software(
    id: i64,
    _user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Software>, AppError> {
    let software = get_software(db, id)
        .await
        .map_err(|e| e.on_database("Erro ao buscar software"))?;

    found(software, "Software não encontrado.")
}

#[put("/softwares/<id>", data = "<update>")]
pub async fn api_update_software(
    id: i64,
    update: Json<SoftwareUpdate>,
    user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Message>, AppError> {
    user.require_role(ADMIN_ONLY)?;
    let update = update.validate_custom()?;

    let rows = update_software(db, id, update)
        .await
        .map_err(|e| e.on_database("Erro ao atualizar software"))?;
    affected(rows, "Software não encontrado ou nenhum dado alterado.")?;

    Ok(message("Software atualizado com sucesso."))
}

#[delete("/softwares/<id>")]
pub async fn api_delete_software(
    id: i64,
    user: AuthUser,
    db: &State<Pool<Sqlite>>,
) -> Result<Json<Message>, AppError> {
    user.require_role(ADMIN_ONLY)?;

    let rows = delete_row::<SoftwareColumn>(db, id).await.map_err(|e| {
        e.on_referenced(
            "Não é possível deletar este software pois ele está vinculado a disciplinas.",
        )
        .on_database("Erro ao deletar software")
    })?;
    affected(rows, "Software não encontrado.")?;

    Ok(message("Software deletado com sucesso."))
}

pub fn routes() -> Vec<Route> {
    routes![
        api_create_course,
        api_get_courses,
        api_get_course,
        api_update_course,
        api_delete_course,
        api_create_room,
        api_get_rooms,
        api_get_room,
        api_update_room,
        api_delete_room,
        api_create_software,
        api_get_software_list,
        api_get_software,
        api_update_software,
        api_delete_software
    ]
}
