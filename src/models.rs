use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::auth::Role;
use crate::error::AppError;

/// Distinguishes an absent field from an explicit `null` in partial updates.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Shift {
    Matutino,
    Diurno,
    Noturno,
    Integral,
}

impl Shift {
    pub const ALL: [Shift; 4] = [
        Shift::Matutino,
        Shift::Diurno,
        Shift::Noturno,
        Shift::Integral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Shift::Matutino => "matutino",
            Shift::Diurno => "diurno",
            Shift::Noturno => "noturno",
            Shift::Integral => "integral",
        }
    }

    pub fn valid_values() -> String {
        Shift::ALL
            .iter()
            .map(Shift::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Parses a request value, failing with the client-facing message.
    pub fn parse_field(value: &str) -> Result<Self, AppError> {
        value.parse().map_err(|_| {
            AppError::Validation(format!(
                "Turno inválido. Valores válidos: {}",
                Shift::valid_values()
            ))
        })
    }
}

impl FromStr for Shift {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Shift::ALL
            .into_iter()
            .find(|shift| shift.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown shift: {}", s))
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parses a role supplied in a request body.
pub fn parse_role_field(value: &str) -> Result<Role, AppError> {
    value.parse().map_err(|_| {
        AppError::Validation(format!(
            "Role inválida. Valores válidos: {}",
            Role::valid_values()
        ))
    })
}

// ---------------------------------------------------------------------------
// Response bodies
// ---------------------------------------------------------------------------

/// `{ mensagem }` body returned by updates and deletes.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Message {
    #[serde(rename = "mensagem")]
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{ mensagem, id_<entity> }` body returned by creates.
#[derive(Debug, Clone, PartialEq)]
pub struct Created {
    pub message: String,
    pub id_field: &'static str,
    pub id: i64,
}

impl Serialize for Created {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("mensagem", &self.message)?;
        map.serialize_entry(self.id_field, &self.id)?;
        map.end()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoginResponse {
    #[serde(rename = "mensagem")]
    pub message: String,
    pub token: String,
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, sqlx::FromRow)]
pub struct User {
    #[serde(rename = "id_usuario")]
    pub id: i64,
    pub email: String,
    #[serde(rename = "nome_completo")]
    pub full_name: String,
    pub role: Role,
}

/// Login lookup row, never serialized.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserCredentials {
    pub id: i64,
    pub full_name: String,
    pub password_hash: String,
    pub role: Role,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, Default)]
pub struct NewUser {
    #[serde(rename = "nome_completo", skip_serializing_if = "Option::is_none")]
    #[validate(
        required(message = "Preencha todos os campos!"),
        length(min = 1, message = "Preencha todos os campos!")
    )]
    pub full_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(
        required(message = "Preencha todos os campos!"),
        email(message = "Informe um email válido.")
    )]
    pub email: Option<String>,

    #[serde(rename = "senha", skip_serializing_if = "Option::is_none")]
    #[validate(
        required(message = "Preencha todos os campos!"),
        length(min = 1, message = "Preencha todos os campos!")
    )]
    pub password: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required(message = "Preencha todos os campos!"))]
    pub role: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, Default)]
pub struct UserUpdate {
    #[serde(rename = "nome_completo", default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Os campos informados não podem ficar em branco."))]
    pub full_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Informe um email válido."))]
    pub email: Option<String>,

    #[serde(rename = "senha", default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Os campos informados não podem ficar em branco."))]
    pub password: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, Default)]
pub struct LoginRequest {
    #[validate(
        required(message = "Preencha todos os campos"),
        length(min = 1, message = "Preencha todos os campos")
    )]
    pub email: Option<String>,

    #[serde(rename = "senha")]
    #[validate(
        required(message = "Preencha todos os campos"),
        length(min = 1, message = "Preencha todos os campos")
    )]
    pub password: Option<String>,
}

// ---------------------------------------------------------------------------
// Courses
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, sqlx::FromRow)]
pub struct Course {
    #[serde(rename = "id_curso")]
    pub id: i64,
    #[serde(rename = "nome_curso")]
    pub name: String,
    #[serde(rename = "carga_horaria")]
    pub workload: i64,
    pub area: String,
    #[serde(rename = "descricao")]
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, Default)]
pub struct NewCourse {
    #[serde(rename = "nome_curso", skip_serializing_if = "Option::is_none")]
    #[validate(
        required(message = "Preencha todos os campos: nome_curso, carga_horaria, area, descricao."),
        length(min = 1, message = "Preencha todos os campos: nome_curso, carga_horaria, area, descricao.")
    )]
    pub name: Option<String>,

    #[serde(rename = "carga_horaria", skip_serializing_if = "Option::is_none")]
    #[validate(
        required(message = "Preencha todos os campos: nome_curso, carga_horaria, area, descricao."),
        range(min = 1, max = 20000, message = "A carga horária deve estar entre 1 e 20000 horas.")
    )]
    pub workload: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(
        required(message = "Preencha todos os campos: nome_curso, carga_horaria, area, descricao."),
        length(min = 1, message = "Preencha todos os campos: nome_curso, carga_horaria, area, descricao.")
    )]
    pub area: Option<String>,

    #[serde(rename = "descricao", skip_serializing_if = "Option::is_none")]
    #[validate(
        required(message = "Preencha todos os campos: nome_curso, carga_horaria, area, descricao."),
        length(min = 1, message = "Preencha todos os campos: nome_curso, carga_horaria, area, descricao.")
    )]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, Default)]
pub struct CourseUpdate {
    #[serde(rename = "nome_curso", default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Os campos informados não podem ficar em branco."))]
    pub name: Option<String>,

    #[serde(rename = "carga_horaria", default, skip_serializing_if = "Option::is_none")]
    #[validate(range(
        min = 1, max = 20000,
        message = "A carga horária deve estar entre 1 e 20000 horas."
    ))]
    pub workload: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Os campos informados não podem ficar em branco."))]
    pub area: Option<String>,

    #[serde(rename = "descricao", default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Os campos informados não podem ficar em branco."))]
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Rooms
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, sqlx::FromRow)]
pub struct Room {
    #[serde(rename = "id_sala")]
    pub id: i64,
    #[serde(rename = "nome_sala")]
    pub name: String,
    #[serde(rename = "tipo_sala")]
    pub kind: Option<String>,
    #[serde(rename = "recursos_sala")]
    pub resources: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, Default)]
pub struct NewRoom {
    #[serde(rename = "nome_sala", skip_serializing_if = "Option::is_none")]
    #[validate(
        required(message = "O nome da sala é obrigatório."),
        length(min = 1, message = "O nome da sala é obrigatório.")
    )]
    pub name: Option<String>,

    #[serde(rename = "tipo_sala", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(rename = "recursos_sala", default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, Default)]
pub struct RoomUpdate {
    #[serde(rename = "nome_sala", default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Os campos informados não podem ficar em branco."))]
    pub name: Option<String>,

    #[serde(
        rename = "tipo_sala",
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<Option<String>>,

    #[serde(
        rename = "recursos_sala",
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub resources: Option<Option<String>>,
}

// ---------------------------------------------------------------------------
// Software
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, sqlx::FromRow)]
pub struct Software {
    #[serde(rename = "id_software")]
    pub id: i64,
    #[serde(rename = "nome_software")]
    pub name: String,
    #[serde(rename = "observacao")]
    pub note: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, Default)]
pub struct NewSoftware {
    #[serde(rename = "nome_software", skip_serializing_if = "Option::is_none")]
    #[validate(
        required(message = "Informe o nome do software"),
        length(min = 1, message = "Informe o nome do software")
    )]
    pub name: Option<String>,

    #[serde(rename = "observacao", default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, Default)]
pub struct SoftwareUpdate {
    #[serde(rename = "nome_software", default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Os campos informados não podem ficar em branco."))]
    pub name: Option<String>,

    /// `null` clears the note.
    #[serde(
        rename = "observacao",
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub note: Option<Option<String>>,
}

// ---------------------------------------------------------------------------
// Disciplines
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, sqlx::FromRow)]
pub struct Discipline {
    #[serde(rename = "id_disciplina")]
    pub id: i64,
    #[serde(rename = "nome_disciplina")]
    pub name: String,
    #[serde(rename = "ch_pratica")]
    pub practical_hours: i64,
    #[serde(rename = "ch_teorica")]
    pub theory_hours: i64,
    #[serde(rename = "carga_horaria")]
    pub total_hours: i64,
    #[serde(rename = "total_de_encontros")]
    pub meetings: i64,
    #[serde(rename = "id_curso_fk")]
    pub course_id: i64,
    #[serde(rename = "nome_curso")]
    pub course_name: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, Default)]
pub struct NewDiscipline {
    #[serde(rename = "nome_disciplina", skip_serializing_if = "Option::is_none")]
    #[validate(
        required(message = "Todos os campos são obrigatórios: nome_disciplina, ch_pratica, ch_teorica, id_curso_fk"),
        length(min = 1, message = "Todos os campos são obrigatórios: nome_disciplina, ch_pratica, ch_teorica, id_curso_fk")
    )]
    pub name: Option<String>,

    #[serde(rename = "ch_pratica", skip_serializing_if = "Option::is_none")]
    #[validate(
        required(message = "Todos os campos são obrigatórios: nome_disciplina, ch_pratica, ch_teorica, id_curso_fk"),
        range(min = 0, max = 10000, message = "A carga horária deve estar entre 0 e 10000 horas.")
    )]
    pub practical_hours: Option<i64>,

    #[serde(rename = "ch_teorica", skip_serializing_if = "Option::is_none")]
    #[validate(
        required(message = "Todos os campos são obrigatórios: nome_disciplina, ch_pratica, ch_teorica, id_curso_fk"),
        range(min = 0, max = 10000, message = "A carga horária deve estar entre 0 e 10000 horas.")
    )]
    pub theory_hours: Option<i64>,

    #[serde(rename = "id_curso_fk", skip_serializing_if = "Option::is_none")]
    #[validate(required(
        message = "Todos os campos são obrigatórios: nome_disciplina, ch_pratica, ch_teorica, id_curso_fk"
    ))]
    pub course_id: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, Default)]
pub struct DisciplineUpdate {
    #[serde(rename = "nome_disciplina", default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Os campos informados não podem ficar em branco."))]
    pub name: Option<String>,

    #[serde(rename = "ch_pratica", default, skip_serializing_if = "Option::is_none")]
    #[validate(range(
        min = 0, max = 10000,
        message = "A carga horária deve estar entre 0 e 10000 horas."
    ))]
    pub practical_hours: Option<i64>,

    #[serde(rename = "ch_teorica", default, skip_serializing_if = "Option::is_none")]
    #[validate(range(
        min = 0, max = 10000,
        message = "A carga horária deve estar entre 0 e 10000 horas."
    ))]
    pub theory_hours: Option<i64>,

    #[serde(rename = "id_curso_fk", default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<i64>,
}

// ---------------------------------------------------------------------------
// Professors
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, sqlx::FromRow)]
pub struct Professor {
    #[serde(rename = "id_professor")]
    pub id: i64,
    #[serde(rename = "id_usuario")]
    pub user_id: i64,
    #[serde(rename = "nome_professor")]
    pub name: String,
    pub email: String,
}

/// Professor with the disciplines and sections they are allocated to.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, sqlx::FromRow)]
pub struct ProfessorSummary {
    #[serde(rename = "id_professor")]
    pub id: i64,
    #[serde(rename = "nome_professor")]
    pub name: String,
    #[serde(rename = "disciplinas_alocadas")]
    pub disciplines: Option<String>,
    #[serde(rename = "turmas_alocadas")]
    pub sections: Option<String>,
}

/// Body of both professor create and relink.
#[derive(Debug, Serialize, Deserialize, Validate, Clone, Default)]
pub struct ProfessorRequest {
    #[serde(rename = "id_usuario_fk", skip_serializing_if = "Option::is_none")]
    #[validate(required(message = "O ID do usuário é obrigatório."))]
    pub user_id: Option<i64>,
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, sqlx::FromRow)]
pub struct Section {
    #[serde(rename = "id_turma")]
    pub id: i64,
    #[serde(rename = "id_curso_fk")]
    pub course_id: i64,
    #[serde(rename = "numero_turma")]
    pub number: String,
    #[serde(rename = "modulo_ano")]
    pub term: String,
    #[serde(rename = "turno")]
    pub shift: Shift,
    #[serde(rename = "nome_curso")]
    pub course_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, Default)]
pub struct NewSection {
    #[serde(rename = "id_curso_fk", skip_serializing_if = "Option::is_none")]
    #[validate(required(
        message = "Todos os campos são obrigatórios (id_curso_fk, numero_turma, modulo_ano, turno)"
    ))]
    pub course_id: Option<i64>,

    #[serde(rename = "numero_turma", skip_serializing_if = "Option::is_none")]
    #[validate(
        required(message = "Todos os campos são obrigatórios (id_curso_fk, numero_turma, modulo_ano, turno)"),
        length(min = 1, message = "Todos os campos são obrigatórios (id_curso_fk, numero_turma, modulo_ano, turno)")
    )]
    pub number: Option<String>,

    #[serde(rename = "modulo_ano", skip_serializing_if = "Option::is_none")]
    #[validate(
        required(message = "Todos os campos são obrigatórios (id_curso_fk, numero_turma, modulo_ano, turno)"),
        length(min = 1, message = "Todos os campos são obrigatórios (id_curso_fk, numero_turma, modulo_ano, turno)")
    )]
    pub term: Option<String>,

    #[serde(rename = "turno", skip_serializing_if = "Option::is_none")]
    #[validate(
        required(message = "Todos os campos são obrigatórios (id_curso_fk, numero_turma, modulo_ano, turno)"),
        length(min = 1, message = "Todos os campos são obrigatórios (id_curso_fk, numero_turma, modulo_ano, turno)")
    )]
    pub shift: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, Default)]
pub struct SectionUpdate {
    #[serde(rename = "id_curso_fk", default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<i64>,

    #[serde(rename = "numero_turma", default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Os campos informados não podem ficar em branco."))]
    pub number: Option<String>,

    #[serde(rename = "modulo_ano", default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Os campos informados não podem ficar em branco."))]
    pub term: Option<String>,

    #[serde(rename = "turno", default, skip_serializing_if = "Option::is_none")]
    pub shift: Option<String>,
}

// ---------------------------------------------------------------------------
// Allocations
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, sqlx::FromRow)]
pub struct Allocation {
    #[serde(rename = "id_professor_alocacao")]
    pub id: i64,
    #[serde(rename = "id_professor_fk")]
    pub professor_id: i64,
    #[serde(rename = "id_disciplina_fk")]
    pub discipline_id: i64,
    #[serde(rename = "id_turma_fk")]
    pub section_id: i64,
    #[serde(rename = "id_sala_fk")]
    pub room_id: Option<i64>,
    #[serde(rename = "nome_professor")]
    pub professor_name: String,
    #[serde(rename = "nome_disciplina")]
    pub discipline_name: String,
    #[serde(rename = "numero_turma")]
    pub section_number: String,
    #[serde(rename = "modulo_ano")]
    pub term: String,
    #[serde(rename = "turno")]
    pub shift: Shift,
    #[serde(rename = "nome_sala")]
    pub room_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, Default)]
pub struct NewAllocation {
    #[serde(rename = "id_professor_fk", skip_serializing_if = "Option::is_none")]
    #[validate(required(
        message = "Os campos id_professor_fk, id_disciplina_fk e id_turma_fk são obrigatórios."
    ))]
    pub professor_id: Option<i64>,

    #[serde(rename = "id_disciplina_fk", skip_serializing_if = "Option::is_none")]
    #[validate(required(
        message = "Os campos id_professor_fk, id_disciplina_fk e id_turma_fk são obrigatórios."
    ))]
    pub discipline_id: Option<i64>,

    #[serde(rename = "id_turma_fk", skip_serializing_if = "Option::is_none")]
    #[validate(required(
        message = "Os campos id_professor_fk, id_disciplina_fk e id_turma_fk são obrigatórios."
    ))]
    pub section_id: Option<i64>,

    #[serde(rename = "id_sala_fk", default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, Default)]
pub struct AllocationUpdate {
    #[serde(rename = "id_professor_fk", default, skip_serializing_if = "Option::is_none")]
    pub professor_id: Option<i64>,

    #[serde(rename = "id_disciplina_fk", default, skip_serializing_if = "Option::is_none")]
    pub discipline_id: Option<i64>,

    #[serde(rename = "id_turma_fk", default, skip_serializing_if = "Option::is_none")]
    pub section_id: Option<i64>,

    /// `null` removes the room from the allocation.
    #[serde(
        rename = "id_sala_fk",
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub room_id: Option<Option<i64>>,
}

// ---------------------------------------------------------------------------
// Discipline-software links
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, sqlx::FromRow)]
pub struct SoftwareLink {
    #[serde(rename = "id_disciplina_fk")]
    pub discipline_id: i64,
    #[serde(rename = "id_software_fk")]
    pub software_id: i64,
    #[serde(rename = "nome_disciplina")]
    pub discipline_name: String,
    #[serde(rename = "nome_software")]
    pub software_name: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, Default)]
pub struct NewSoftwareLink {
    #[serde(rename = "id_disciplina_fk", skip_serializing_if = "Option::is_none")]
    #[validate(required(message = "Informe disciplina e software"))]
    pub discipline_id: Option<i64>,

    #[serde(rename = "id_software_fk", skip_serializing_if = "Option::is_none")]
    #[validate(required(message = "Informe disciplina e software"))]
    pub software_id: Option<i64>,
}

// ---------------------------------------------------------------------------
// Curriculum report
// ---------------------------------------------------------------------------

/// One row of `vw_grade_curricular_completa`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, sqlx::FromRow)]
pub struct CurriculumRow {
    #[serde(rename = "id_professor_alocacao")]
    pub allocation_id: i64,
    #[serde(rename = "nome_professor")]
    pub professor_name: String,
    #[serde(rename = "nome_curso")]
    pub course_name: String,
    #[serde(rename = "numero_turma")]
    pub section_number: String,
    #[serde(rename = "modulo_ano")]
    pub term: String,
    #[serde(rename = "turno")]
    pub shift: Shift,
    #[serde(rename = "nome_disciplina")]
    pub discipline_name: String,
    #[serde(rename = "ch_total")]
    pub total_hours: i64,
    #[serde(rename = "ch_pratica")]
    pub practical_hours: i64,
    #[serde(rename = "ch_teorica")]
    pub theory_hours: i64,
    #[serde(rename = "total_de_encontros")]
    pub meetings: i64,
    #[serde(rename = "laboratorio_sala")]
    pub room_name: Option<String>,
    #[serde(rename = "recursos_lab")]
    pub room_resources: Option<String>,
    #[serde(rename = "softwares_usados")]
    pub software: Option<String>,
}
