use sqlx::{Pool, Sqlite};
use tracing::{info, instrument};

use super::update::{AllocationColumn, UpdateSet};
use crate::error::AppError;
use crate::models::{Allocation, AllocationUpdate, NewAllocation};

const ALLOCATION_COLUMNS: &str = "SELECT
        pa.id_professor_alocacao AS id,
        pa.id_professor_fk AS professor_id,
        pa.id_disciplina_fk AS discipline_id,
        pa.id_turma_fk AS section_id,
        pa.id_sala_fk AS room_id,
        u.nome_completo AS professor_name,
        d.nome_disciplina AS discipline_name,
        t.numero_turma AS section_number,
        t.modulo_ano AS term,
        t.turno AS shift,
        s.nome_sala AS room_name
     FROM professor_alocacao pa
     JOIN professor p ON pa.id_professor_fk = p.id_professor
     JOIN usuario u ON p.id_usuario_fk = u.id_usuario
     JOIN disciplina d ON pa.id_disciplina_fk = d.id_disciplina
     JOIN turma t ON pa.id_turma_fk = t.id_turma
     LEFT JOIN sala s ON pa.id_sala_fk = s.id_sala";

impl From<AllocationUpdate> for UpdateSet<AllocationColumn> {
    fn from(update: AllocationUpdate) -> Self {
        UpdateSet::new()
            .set_some(AllocationColumn::Professor, update.professor_id)
            .set_some(AllocationColumn::Discipline, update.discipline_id)
            .set_some(AllocationColumn::Section, update.section_id)
            .set_some(AllocationColumn::Room, update.room_id)
    }
}

#[instrument(skip(pool))]
pub async fn create_allocation(
    pool: &Pool<Sqlite>,
    allocation: &NewAllocation,
) -> Result<i64, AppError> {
    info!("Creating allocation");
    let result = sqlx::query(
        "INSERT INTO professor_alocacao (id_professor_fk, id_disciplina_fk, id_turma_fk, id_sala_fk)
         VALUES (?, ?, ?, ?)",
    )
    .bind(allocation.professor_id)
    .bind(allocation.discipline_id)
    .bind(allocation.section_id)
    .bind(allocation.room_id)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

#[instrument(skip(pool))]
pub async fn get_all_allocations(pool: &Pool<Sqlite>) -> Result<Vec<Allocation>, AppError> {
    info!("Getting all allocations");
    let allocations = sqlx::query_as::<_, Allocation>(&format!(
        "{} ORDER BY pa.id_professor_alocacao",
        ALLOCATION_COLUMNS
    ))
    .fetch_all(pool)
    .await?;

    Ok(allocations)
}

#[instrument(skip(pool))]
pub async fn get_allocation(pool: &Pool<Sqlite>, id: i64) -> Result<Option<Allocation>, AppError> {
    info!("Fetching allocation by ID");
    let allocation = sqlx::query_as::<_, Allocation>(&format!(
        "{} WHERE pa.id_professor_alocacao = ?",
        ALLOCATION_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(allocation)
}

#[instrument(skip(pool))]
pub async fn update_allocation(
    pool: &Pool<Sqlite>,
    id: i64,
    update: AllocationUpdate,
) -> Result<u64, AppError> {
    info!("Updating allocation");
    UpdateSet::from(update).require_changes()?.execute(pool, id).await
}
