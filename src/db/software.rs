use sqlx::{Pool, Sqlite};
use tracing::{info, instrument};

use super::update::{SoftwareColumn, UpdateSet};
use crate::error::AppError;
use crate::models::{NewSoftware, Software, SoftwareUpdate};

const SOFTWARE_COLUMNS: &str =
    "SELECT id_software AS id, nome_software AS name, observacao AS note FROM software";

impl From<SoftwareUpdate> for UpdateSet<SoftwareColumn> {
    fn from(update: SoftwareUpdate) -> Self {
        UpdateSet::new()
            .set_some(SoftwareColumn::Name, update.name)
            .set_some(SoftwareColumn::Note, update.note)
    }
}

#[instrument(skip(pool))]
pub async fn create_software(pool: &Pool<Sqlite>, software: &NewSoftware) -> Result<i64, AppError> {
    info!("Creating software");
    let result = sqlx::query("INSERT INTO software (nome_software, observacao) VALUES (?, ?)")
        .bind(&software.name)
        .bind(&software.note)
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}

#[instrument(skip(pool))]
pub async fn get_all_software(pool: &Pool<Sqlite>) -> Result<Vec<Software>, AppError> {
    info!("Getting all software");
    let software =
        sqlx::query_as::<_, Software>(&format!("{} ORDER BY nome_software", SOFTWARE_COLUMNS))
            .fetch_all(pool)
            .await?;

    Ok(software)
}

#[instrument(skip(pool))]
pub async fn get_software(pool: &Pool<Sqlite>, id: i64) -> Result<Option<Software>, AppError> {
    info!("Fetching software by ID");
    let software =
        sqlx::query_as::<_, Software>(&format!("{} WHERE id_software = ?", SOFTWARE_COLUMNS))
            .bind(id)
            .fetch_optional(pool)
            .await?;

    Ok(software)
}

#[instrument(skip(pool))]
pub async fn update_software(
    pool: &Pool<Sqlite>,
    id: i64,
    update: SoftwareUpdate,
) -> Result<u64, AppError> {
    info!("Updating software");
    UpdateSet::from(update).require_changes()?.execute(pool, id).await
}
