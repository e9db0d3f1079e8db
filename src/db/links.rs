use sqlx::{Pool, Sqlite};
use tracing::{info, instrument};

use crate::error::AppError;
use crate::models::SoftwareLink;

#[instrument(skip(pool))]
pub async fn link_software(
    pool: &Pool<Sqlite>,
    discipline_id: i64,
    software_id: i64,
) -> Result<(), AppError> {
    info!("Linking software to discipline");
    sqlx::query("INSERT INTO disciplina_software (id_disciplina_fk, id_software_fk) VALUES (?, ?)")
        .bind(discipline_id)
        .bind(software_id)
        .execute(pool)
        .await?;

    Ok(())
}

#[instrument(skip(pool))]
pub async fn unlink_software(
    pool: &Pool<Sqlite>,
    discipline_id: i64,
    software_id: i64,
) -> Result<u64, AppError> {
    info!("Unlinking software from discipline");
    let result = sqlx::query(
        "DELETE FROM disciplina_software WHERE id_disciplina_fk = ? AND id_software_fk = ?",
    )
    .bind(discipline_id)
    .bind(software_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

#[instrument(skip(pool))]
pub async fn get_software_links(pool: &Pool<Sqlite>) -> Result<Vec<SoftwareLink>, AppError> {
    info!("Getting discipline-software links");
    let links = sqlx::query_as::<_, SoftwareLink>(
        "SELECT ds.id_disciplina_fk AS discipline_id, ds.id_software_fk AS software_id,
                d.nome_disciplina AS discipline_name, s.nome_software AS software_name
         FROM disciplina_software ds
         JOIN disciplina d ON ds.id_disciplina_fk = d.id_disciplina
         JOIN software s ON ds.id_software_fk = s.id_software
         ORDER BY d.nome_disciplina, s.nome_software",
    )
    .fetch_all(pool)
    .await?;

    Ok(links)
}
