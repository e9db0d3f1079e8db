use sqlx::{Pool, Sqlite};
use tracing::{info, instrument};

use super::update::{SectionColumn, UpdateSet};
use crate::error::AppError;
use crate::models::{NewSection, Section, SectionUpdate, Shift};

const SECTION_COLUMNS: &str = "SELECT t.id_turma AS id, t.id_curso_fk AS course_id,
        t.numero_turma AS number, t.modulo_ano AS term, t.turno AS shift,
        c.nome_curso AS course_name
     FROM turma t
     LEFT JOIN curso c ON c.id_curso = t.id_curso_fk";

impl TryFrom<SectionUpdate> for UpdateSet<SectionColumn> {
    type Error = AppError;

    fn try_from(update: SectionUpdate) -> Result<Self, Self::Error> {
        let shift = update.shift.as_deref().map(Shift::parse_field).transpose()?;

        Ok(UpdateSet::new()
            .set_some(SectionColumn::Course, update.course_id)
            .set_some(SectionColumn::Number, update.number)
            .set_some(SectionColumn::Term, update.term)
            .set_some(SectionColumn::Shift, shift))
    }
}

#[instrument(skip(pool))]
pub async fn create_section(
    pool: &Pool<Sqlite>,
    section: &NewSection,
    shift: Shift,
) -> Result<i64, AppError> {
    info!("Creating section");
    let result = sqlx::query(
        "INSERT INTO turma (id_curso_fk, numero_turma, modulo_ano, turno) VALUES (?, ?, ?, ?)",
    )
    .bind(section.course_id)
    .bind(&section.number)
    .bind(&section.term)
    .bind(shift)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Lists sections, optionally only those of one course.
#[instrument(skip(pool))]
pub async fn get_sections(
    pool: &Pool<Sqlite>,
    course_id: Option<i64>,
) -> Result<Vec<Section>, AppError> {
    info!("Getting sections");
    let sections = sqlx::query_as::<_, Section>(&format!(
        "{} WHERE (?1 IS NULL OR t.id_curso_fk = ?1) ORDER BY c.nome_curso, t.numero_turma",
        SECTION_COLUMNS
    ))
    .bind(course_id)
    .fetch_all(pool)
    .await?;

    Ok(sections)
}

#[instrument(skip(pool))]
pub async fn get_section(pool: &Pool<Sqlite>, id: i64) -> Result<Option<Section>, AppError> {
    info!("Fetching section by ID");
    let section = sqlx::query_as::<_, Section>(&format!("{} WHERE t.id_turma = ?", SECTION_COLUMNS))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(section)
}

#[instrument(skip(pool))]
pub async fn update_section(
    pool: &Pool<Sqlite>,
    id: i64,
    update: SectionUpdate,
) -> Result<u64, AppError> {
    info!("Updating section");
    UpdateSet::try_from(update)?
        .require_changes()?
        .execute(pool, id)
        .await
}
