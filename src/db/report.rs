use sqlx::{Pool, Sqlite};
use tracing::{info, instrument};

use crate::error::AppError;
use crate::models::CurriculumRow;

#[instrument(skip(pool))]
pub async fn get_curriculum(pool: &Pool<Sqlite>) -> Result<Vec<CurriculumRow>, AppError> {
    info!("Building curriculum report");
    let rows = sqlx::query_as::<_, CurriculumRow>(
        "SELECT
            id_professor_alocacao AS allocation_id,
            nome_professor AS professor_name,
            nome_curso AS course_name,
            numero_turma AS section_number,
            modulo_ano AS term,
            turno AS shift,
            nome_disciplina AS discipline_name,
            ch_total AS total_hours,
            ch_pratica AS practical_hours,
            ch_teorica AS theory_hours,
            total_de_encontros AS meetings,
            laboratorio_sala AS room_name,
            recursos_lab AS room_resources,
            softwares_usados AS software
         FROM vw_grade_curricular_completa
         ORDER BY nome_curso, numero_turma, nome_disciplina",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
