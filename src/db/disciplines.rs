use sqlx::{Pool, Sqlite};
use tracing::{info, instrument};

use super::update::{DisciplineColumn, UpdateSet};
use crate::error::AppError;
use crate::models::{Discipline, DisciplineUpdate, NewDiscipline};

const DISCIPLINE_COLUMNS: &str = "SELECT
        d.id_disciplina AS id,
        d.nome_disciplina AS name,
        d.ch_pratica AS practical_hours,
        d.ch_teorica AS theory_hours,
        d.carga_horaria AS total_hours,
        d.total_de_encontros AS meetings,
        c.id_curso AS course_id,
        c.nome_curso AS course_name
     FROM disciplina d
     JOIN curso c ON d.id_curso_fk = c.id_curso";

impl From<DisciplineUpdate> for UpdateSet<DisciplineColumn> {
    fn from(update: DisciplineUpdate) -> Self {
        UpdateSet::new()
            .set_some(DisciplineColumn::Name, update.name)
            .set_some(DisciplineColumn::PracticalHours, update.practical_hours)
            .set_some(DisciplineColumn::TheoryHours, update.theory_hours)
            .set_some(DisciplineColumn::Course, update.course_id)
    }
}

#[instrument(skip(pool))]
pub async fn create_discipline(
    pool: &Pool<Sqlite>,
    discipline: &NewDiscipline,
) -> Result<i64, AppError> {
    info!("Creating discipline");
    let result = sqlx::query(
        "INSERT INTO disciplina (nome_disciplina, ch_pratica, ch_teorica, id_curso_fk)
         VALUES (?, ?, ?, ?)",
    )
    .bind(&discipline.name)
    .bind(discipline.practical_hours)
    .bind(discipline.theory_hours)
    .bind(discipline.course_id)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

#[instrument(skip(pool))]
pub async fn get_all_disciplines(pool: &Pool<Sqlite>) -> Result<Vec<Discipline>, AppError> {
    info!("Getting all disciplines");
    let disciplines = sqlx::query_as::<_, Discipline>(&format!(
        "{} ORDER BY c.nome_curso, d.nome_disciplina",
        DISCIPLINE_COLUMNS
    ))
    .fetch_all(pool)
    .await?;

    Ok(disciplines)
}

#[instrument(skip(pool))]
pub async fn get_discipline(pool: &Pool<Sqlite>, id: i64) -> Result<Option<Discipline>, AppError> {
    info!("Fetching discipline by ID");
    let discipline = sqlx::query_as::<_, Discipline>(&format!(
        "{} WHERE d.id_disciplina = ?",
        DISCIPLINE_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(discipline)
}

#[instrument(skip(pool))]
pub async fn update_discipline(
    pool: &Pool<Sqlite>,
    id: i64,
    update: DisciplineUpdate,
) -> Result<u64, AppError> {
    info!("Updating discipline");
    UpdateSet::from(update).require_changes()?.execute(pool, id).await
}
