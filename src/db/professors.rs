use sqlx::{Pool, Sqlite, SqliteConnection};
use tracing::{info, instrument, warn};

use super::update::{ProfessorColumn, UpdateSet};
use crate::auth::Role;
use crate::error::AppError;
use crate::models::{Professor, ProfessorSummary};

const PROFESSOR_COLUMNS: &str = "SELECT p.id_professor AS id, u.id_usuario AS user_id,
        u.nome_completo AS name, u.email
     FROM professor p
     JOIN usuario u ON p.id_usuario_fk = u.id_usuario";

/// Result of a write that links a professor record to a user.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfessorLink<T> {
    Linked(T),
    UnknownUser,
    NotAProfessor(Role),
}

async fn user_role(conn: &mut SqliteConnection, user_id: i64) -> Result<Option<Role>, AppError> {
    let role = sqlx::query_scalar::<_, Role>("SELECT role FROM usuario WHERE id_usuario = ?")
        .bind(user_id)
        .fetch_optional(conn)
        .await?;

    Ok(role)
}

/// Inserts a professor for `user_id`. The role check and the insert share a
/// transaction.
#[instrument(skip(pool))]
pub async fn create_professor(
    pool: &Pool<Sqlite>,
    user_id: i64,
) -> Result<ProfessorLink<i64>, AppError> {
    info!("Creating professor");
    let mut tx = pool.begin().await?;

    match user_role(&mut *tx, user_id).await? {
        None => return Ok(ProfessorLink::UnknownUser),
        Some(Role::Professor) => {}
        Some(role) => {
            warn!(%role, "User cannot be linked as a professor");
            return Ok(ProfessorLink::NotAProfessor(role));
        }
    }

    let result = sqlx::query("INSERT INTO professor (id_usuario_fk) VALUES (?)")
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(ProfessorLink::Linked(result.last_insert_rowid()))
}

/// Points professor `id` at another user, returning the rows matched.
#[instrument(skip(pool))]
pub async fn relink_professor(
    pool: &Pool<Sqlite>,
    id: i64,
    user_id: i64,
) -> Result<ProfessorLink<u64>, AppError> {
    info!("Relinking professor");
    let mut tx = pool.begin().await?;

    match user_role(&mut *tx, user_id).await? {
        None => return Ok(ProfessorLink::UnknownUser),
        Some(Role::Professor) => {}
        Some(role) => {
            warn!(%role, "User cannot be linked as a professor");
            return Ok(ProfessorLink::NotAProfessor(role));
        }
    }

    let rows = UpdateSet::new()
        .set(ProfessorColumn::User, user_id)
        .execute(&mut *tx, id)
        .await?;

    tx.commit().await?;
    Ok(ProfessorLink::Linked(rows))
}

#[instrument(skip(pool))]
pub async fn get_all_professors(pool: &Pool<Sqlite>) -> Result<Vec<Professor>, AppError> {
    info!("Getting all professors");
    let professors = sqlx::query_as::<_, Professor>(&format!(
        "{} ORDER BY u.nome_completo",
        PROFESSOR_COLUMNS
    ))
    .fetch_all(pool)
    .await?;

    Ok(professors)
}

#[instrument(skip(pool))]
pub async fn get_professor(pool: &Pool<Sqlite>, id: i64) -> Result<Option<Professor>, AppError> {
    info!("Fetching professor by ID");
    let professor =
        sqlx::query_as::<_, Professor>(&format!("{} WHERE p.id_professor = ?", PROFESSOR_COLUMNS))
            .bind(id)
            .fetch_optional(pool)
            .await?;

    Ok(professor)
}

#[instrument(skip(pool))]
pub async fn get_professor_summaries(
    pool: &Pool<Sqlite>,
) -> Result<Vec<ProfessorSummary>, AppError> {
    info!("Getting professors with their allocations");
    let summaries = sqlx::query_as::<_, ProfessorSummary>(
        "SELECT
            p.id_professor AS id,
            u.nome_completo AS name,
            (SELECT group_concat(d.nome_disciplina, ', ')
               FROM disciplina d
              WHERE d.id_disciplina IN (
                    SELECT pa.id_disciplina_fk FROM professor_alocacao pa
                     WHERE pa.id_professor_fk = p.id_professor)) AS disciplines,
            (SELECT group_concat(t.numero_turma || ' (' || c.nome_curso || ')', '; ')
               FROM turma t
               JOIN curso c ON t.id_curso_fk = c.id_curso
              WHERE t.id_turma IN (
                    SELECT pa.id_turma_fk FROM professor_alocacao pa
                     WHERE pa.id_professor_fk = p.id_professor)) AS sections
         FROM professor p
         JOIN usuario u ON p.id_usuario_fk = u.id_usuario
         ORDER BY u.nome_completo",
    )
    .fetch_all(pool)
    .await?;

    Ok(summaries)
}
