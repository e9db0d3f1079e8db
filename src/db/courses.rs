use sqlx::{Pool, Sqlite};
use tracing::{info, instrument};

use super::update::{CourseColumn, UpdateSet};
use crate::error::AppError;
use crate::models::{Course, CourseUpdate, NewCourse};

const COURSE_COLUMNS: &str = "SELECT id_curso AS id, nome_curso AS name, carga_horaria AS workload,
        area, descricao AS description
     FROM curso";

impl From<CourseUpdate> for UpdateSet<CourseColumn> {
    fn from(update: CourseUpdate) -> Self {
        UpdateSet::new()
            .set_some(CourseColumn::Name, update.name)
            .set_some(CourseColumn::Workload, update.workload)
            .set_some(CourseColumn::Area, update.area)
            .set_some(CourseColumn::Description, update.description)
    }
}

#[instrument(skip(pool))]
pub async fn create_course(pool: &Pool<Sqlite>, course: &NewCourse) -> Result<i64, AppError> {
    info!("Creating course");
    let result = sqlx::query(
        "INSERT INTO curso (nome_curso, carga_horaria, area, descricao) VALUES (?, ?, ?, ?)",
    )
    .bind(&course.name)
    .bind(course.workload)
    .bind(&course.area)
    .bind(&course.description)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

#[instrument(skip(pool))]
pub async fn get_all_courses(pool: &Pool<Sqlite>) -> Result<Vec<Course>, AppError> {
    info!("Getting all courses");
    let courses = sqlx::query_as::<_, Course>(&format!("{} ORDER BY nome_curso", COURSE_COLUMNS))
        .fetch_all(pool)
        .await?;

    Ok(courses)
}

#[instrument(skip(pool))]
pub async fn get_course(pool: &Pool<Sqlite>, id: i64) -> Result<Option<Course>, AppError> {
    info!("Fetching course by ID");
    let course = sqlx::query_as::<_, Course>(&format!("{} WHERE id_curso = ?", COURSE_COLUMNS))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(course)
}

#[instrument(skip(pool))]
pub async fn update_course(
    pool: &Pool<Sqlite>,
    id: i64,
    update: CourseUpdate,
) -> Result<u64, AppError> {
    info!("Updating course");
    UpdateSet::from(update).require_changes()?.execute(pool, id).await
}
