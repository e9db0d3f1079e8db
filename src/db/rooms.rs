use sqlx::{Pool, Sqlite};
use tracing::{info, instrument};

use super::update::{RoomColumn, UpdateSet};
use crate::error::AppError;
use crate::models::{NewRoom, Room, RoomUpdate};

const ROOM_COLUMNS: &str = "SELECT id_sala AS id, nome_sala AS name, tipo_sala AS kind,
        recursos_sala AS resources
     FROM sala";

impl From<RoomUpdate> for UpdateSet<RoomColumn> {
    fn from(update: RoomUpdate) -> Self {
        UpdateSet::new()
            .set_some(RoomColumn::Name, update.name)
            .set_some(RoomColumn::Kind, update.kind)
            .set_some(RoomColumn::Resources, update.resources)
    }
}

#[instrument(skip(pool))]
pub async fn create_room(pool: &Pool<Sqlite>, room: &NewRoom) -> Result<i64, AppError> {
    info!("Creating room");
    let result =
        sqlx::query("INSERT INTO sala (nome_sala, tipo_sala, recursos_sala) VALUES (?, ?, ?)")
            .bind(&room.name)
            .bind(&room.kind)
            .bind(&room.resources)
            .execute(pool)
            .await?;

    Ok(result.last_insert_rowid())
}

#[instrument(skip(pool))]
pub async fn get_all_rooms(pool: &Pool<Sqlite>) -> Result<Vec<Room>, AppError> {
    info!("Getting all rooms");
    let rooms = sqlx::query_as::<_, Room>(&format!("{} ORDER BY nome_sala", ROOM_COLUMNS))
        .fetch_all(pool)
        .await?;

    Ok(rooms)
}

#[instrument(skip(pool))]
pub async fn get_room(pool: &Pool<Sqlite>, id: i64) -> Result<Option<Room>, AppError> {
    info!("Fetching room by ID");
    let room = sqlx::query_as::<_, Room>(&format!("{} WHERE id_sala = ?", ROOM_COLUMNS))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(room)
}

#[instrument(skip(pool))]
pub async fn update_room(
    pool: &Pool<Sqlite>,
    id: i64,
    update: RoomUpdate,
) -> Result<u64, AppError> {
    info!("Updating room");
    UpdateSet::from(update).require_changes()?.execute(pool, id).await
}
