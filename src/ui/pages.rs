//! Page definitions for every CRUD entity.

use super::form::{Choice, Field, FormValues, nullable_number, nullable_text, number, text};
use super::page::PageSpec;
use super::table::or_dash;
use crate::auth::Role;
use crate::client::{
    Allocations, ApiClient, ClientError, Courses, Disciplines, Professors, Rooms, Sections,
    Softwares, Transport, Users,
};
use crate::models::{
    AllocationUpdate, Course, CourseUpdate, Discipline, DisciplineUpdate, NewAllocation,
    NewCourse, NewDiscipline, NewRoom, NewSection, NewSoftware, NewUser, Professor,
    ProfessorRequest, Room, RoomUpdate, Section, SectionUpdate, Shift, SoftwareUpdate, User,
    UserUpdate,
};

fn course_choices(courses: &[Course]) -> Vec<Choice> {
    courses
        .iter()
        .map(|c| Choice::new(c.id, c.name.clone()))
        .collect()
}

fn section_label(section: &Section) -> String {
    format!(
        "{} {} ({})",
        section.number,
        section.term,
        section.shift.as_str()
    )
}

#[rocket::async_trait]
impl PageSpec for Users {
    const TITLE: &'static str = "Usuários";
    const COLUMNS: &'static [&'static str] = &["ID", "Nome", "Email", "Role"];

    type Refs = ();

    async fn load_refs<T: Transport>(_: &ApiClient<T>) -> Result<(), ClientError> {
        Ok(())
    }

    fn cells(row: &User) -> Vec<String> {
        vec![
            row.id.to_string(),
            row.full_name.clone(),
            row.email.clone(),
            row.role.as_str().to_string(),
        ]
    }

    fn fields(_: &(), _: &FormValues) -> Vec<Field> {
        vec![
            Field::text("nome_completo", "Nome completo"),
            Field::text("email", "Email"),
            Field::text("senha", "Senha"),
            Field::select(
                "role",
                "Role",
                Role::ALL
                    .iter()
                    .map(|r| Choice::new(r.as_str(), r.as_str()))
                    .collect(),
            ),
        ]
    }

    fn form_values(row: &User) -> FormValues {
        FormValues::from([
            ("nome_completo", row.full_name.clone()),
            ("email", row.email.clone()),
            ("role", row.role.as_str().to_string()),
        ])
    }

    fn to_create(form: &FormValues) -> NewUser {
        NewUser {
            full_name: text(form, "nome_completo"),
            email: text(form, "email"),
            password: text(form, "senha"),
            role: text(form, "role"),
        }
    }

    fn to_update(form: &FormValues) -> UserUpdate {
        UserUpdate {
            full_name: text(form, "nome_completo"),
            email: text(form, "email"),
            password: text(form, "senha"),
            role: text(form, "role"),
        }
    }
}

#[rocket::async_trait]
impl PageSpec for Courses {
    const TITLE: &'static str = "Cursos";
    const COLUMNS: &'static [&'static str] =
        &["ID", "Nome", "Carga horária", "Área", "Descrição"];

    type Refs = ();

    async fn load_refs<T: Transport>(_: &ApiClient<T>) -> Result<(), ClientError> {
        Ok(())
    }

    fn cells(row: &Course) -> Vec<String> {
        vec![
            row.id.to_string(),
            row.name.clone(),
            row.workload.to_string(),
            row.area.clone(),
            row.description.clone(),
        ]
    }

    fn fields(_: &(), _: &FormValues) -> Vec<Field> {
        vec![
            Field::text("nome_curso", "Nome do curso"),
            Field::number("carga_horaria", "Carga horária"),
            Field::text("area", "Área"),
            Field::text("descricao", "Descrição"),
        ]
    }

    fn form_values(row: &Course) -> FormValues {
        FormValues::from([
            ("nome_curso", row.name.clone()),
            ("carga_horaria", row.workload.to_string()),
            ("area", row.area.clone()),
            ("descricao", row.description.clone()),
        ])
    }

    fn to_create(form: &FormValues) -> NewCourse {
        NewCourse {
            name: text(form, "nome_curso"),
            workload: number(form, "carga_horaria"),
            area: text(form, "area"),
            description: text(form, "descricao"),
        }
    }

    fn to_update(form: &FormValues) -> CourseUpdate {
        CourseUpdate {
            name: text(form, "nome_curso"),
            workload: number(form, "carga_horaria"),
            area: text(form, "area"),
            description: text(form, "descricao"),
        }
    }
}

#[rocket::async_trait]
impl PageSpec for Rooms {
    const TITLE: &'static str = "Salas";
    const COLUMNS: &'static [&'static str] = &["ID", "Nome", "Tipo", "Recursos"];

    type Refs = ();

    async fn load_refs<T: Transport>(_: &ApiClient<T>) -> Result<(), ClientError> {
        Ok(())
    }

    fn cells(row: &Room) -> Vec<String> {
        vec![
            row.id.to_string(),
            row.name.clone(),
            or_dash(row.kind.as_deref()),
            or_dash(row.resources.as_deref()),
        ]
    }

    fn fields(_: &(), _: &FormValues) -> Vec<Field> {
        vec![
            Field::text("nome_sala", "Nome da sala"),
            Field::text("tipo_sala", "Tipo"),
            Field::text("recursos_sala", "Recursos"),
        ]
    }

    fn form_values(row: &Room) -> FormValues {
        let mut values = FormValues::from([("nome_sala", row.name.clone())]);
        if let Some(kind) = &row.kind {
            values.insert("tipo_sala", kind.clone());
        }
        if let Some(resources) = &row.resources {
            values.insert("recursos_sala", resources.clone());
        }
        values
    }

    fn to_create(form: &FormValues) -> NewRoom {
        NewRoom {
            name: text(form, "nome_sala"),
            kind: text(form, "tipo_sala"),
            resources: text(form, "recursos_sala"),
        }
    }

    fn to_update(form: &FormValues) -> RoomUpdate {
        RoomUpdate {
            name: text(form, "nome_sala"),
            kind: nullable_text(form, "tipo_sala"),
            resources: nullable_text(form, "recursos_sala"),
        }
    }
}

#[rocket::async_trait]
impl PageSpec for Softwares {
    const TITLE: &'static str = "Softwares";
    const COLUMNS: &'static [&'static str] = &["ID", "Nome", "Observação"];

    type Refs = ();

    async fn load_refs<T: Transport>(_: &ApiClient<T>) -> Result<(), ClientError> {
        Ok(())
    }

    fn cells(row: &crate::models::Software) -> Vec<String> {
        vec![
            row.id.to_string(),
            row.name.clone(),
            or_dash(row.note.as_deref()),
        ]
    }

    fn fields(_: &(), _: &FormValues) -> Vec<Field> {
        vec![
            Field::text("nome_software", "Nome do software"),
            Field::text("observacao", "Observação"),
        ]
    }

    fn form_values(row: &crate::models::Software) -> FormValues {
        let mut values = FormValues::from([("nome_software", row.name.clone())]);
        if let Some(note) = &row.note {
            values.insert("observacao", note.clone());
        }
        values
    }

    fn to_create(form: &FormValues) -> NewSoftware {
        NewSoftware {
            name: text(form, "nome_software"),
            note: text(form, "observacao"),
        }
    }

    fn to_update(form: &FormValues) -> SoftwareUpdate {
        SoftwareUpdate {
            name: text(form, "nome_software"),
            note: nullable_text(form, "observacao"),
        }
    }
}

#[rocket::async_trait]
impl PageSpec for Disciplines {
    const TITLE: &'static str = "Disciplinas";
    const COLUMNS: &'static [&'static str] = &[
        "ID",
        "Nome",
        "CH prática",
        "CH teórica",
        "CH total",
        "Encontros",
        "Curso",
    ];

    type Refs = Vec<Course>;

    async fn load_refs<T: Transport>(client: &ApiClient<T>) -> Result<Vec<Course>, ClientError> {
        client.crud::<Courses>().list().await
    }

    fn cells(row: &Discipline) -> Vec<String> {
        vec![
            row.id.to_string(),
            row.name.clone(),
            row.practical_hours.to_string(),
            row.theory_hours.to_string(),
            row.total_hours.to_string(),
            row.meetings.to_string(),
            row.course_name.clone(),
        ]
    }

    fn fields(courses: &Vec<Course>, _: &FormValues) -> Vec<Field> {
        vec![
            Field::text("nome_disciplina", "Nome da disciplina"),
            Field::number("ch_pratica", "CH prática"),
            Field::number("ch_teorica", "CH teórica"),
            Field::select("id_curso_fk", "Curso", course_choices(courses)),
        ]
    }

    fn form_values(row: &Discipline) -> FormValues {
        FormValues::from([
            ("nome_disciplina", row.name.clone()),
            ("ch_pratica", row.practical_hours.to_string()),
            ("ch_teorica", row.theory_hours.to_string()),
            ("id_curso_fk", row.course_id.to_string()),
        ])
    }

    fn to_create(form: &FormValues) -> NewDiscipline {
        NewDiscipline {
            name: text(form, "nome_disciplina"),
            practical_hours: number(form, "ch_pratica"),
            theory_hours: number(form, "ch_teorica"),
            course_id: number(form, "id_curso_fk"),
        }
    }

    fn to_update(form: &FormValues) -> DisciplineUpdate {
        DisciplineUpdate {
            name: text(form, "nome_disciplina"),
            practical_hours: number(form, "ch_pratica"),
            theory_hours: number(form, "ch_teorica"),
            course_id: number(form, "id_curso_fk"),
        }
    }
}

#[rocket::async_trait]
impl PageSpec for Professors {
    const TITLE: &'static str = "Professores";
    const COLUMNS: &'static [&'static str] = &["ID", "Usuário", "Nome", "Email"];

    /// Users with the professor role.
    type Refs = Vec<User>;

    async fn load_refs<T: Transport>(client: &ApiClient<T>) -> Result<Vec<User>, ClientError> {
        let users = client.crud::<Users>().list().await?;
        Ok(users
            .into_iter()
            .filter(|u| u.role == Role::Professor)
            .collect())
    }

    fn cells(row: &Professor) -> Vec<String> {
        vec![
            row.id.to_string(),
            row.user_id.to_string(),
            row.name.clone(),
            row.email.clone(),
        ]
    }

    fn fields(users: &Vec<User>, _: &FormValues) -> Vec<Field> {
        vec![Field::select(
            "id_usuario_fk",
            "Usuário",
            users
                .iter()
                .map(|u| Choice::new(u.id, format!("{} <{}>", u.full_name, u.email)))
                .collect(),
        )]
    }

    fn form_values(row: &Professor) -> FormValues {
        FormValues::from([("id_usuario_fk", row.user_id.to_string())])
    }

    fn to_create(form: &FormValues) -> ProfessorRequest {
        ProfessorRequest {
            user_id: number(form, "id_usuario_fk"),
        }
    }

    fn to_update(form: &FormValues) -> ProfessorRequest {
        Self::to_create(form)
    }
}

#[rocket::async_trait]
impl PageSpec for Sections {
    const TITLE: &'static str = "Turmas";
    const COLUMNS: &'static [&'static str] = &["ID", "Curso", "Número", "Módulo/Ano", "Turno"];

    type Refs = Vec<Course>;

    async fn load_refs<T: Transport>(client: &ApiClient<T>) -> Result<Vec<Course>, ClientError> {
        client.crud::<Courses>().list().await
    }

    fn cells(row: &Section) -> Vec<String> {
        vec![
            row.id.to_string(),
            or_dash(row.course_name.as_deref()),
            row.number.clone(),
            row.term.clone(),
            row.shift.to_string(),
        ]
    }

    fn fields(courses: &Vec<Course>, _: &FormValues) -> Vec<Field> {
        vec![
            Field::select("id_curso_fk", "Curso", course_choices(courses)),
            Field::text("numero_turma", "Número da turma"),
            Field::text("modulo_ano", "Módulo/Ano"),
            Field::select(
                "turno",
                "Turno",
                Shift::ALL
                    .iter()
                    .map(|s| Choice::new(s.as_str(), s.as_str()))
                    .collect(),
            ),
        ]
    }

    fn form_values(row: &Section) -> FormValues {
        FormValues::from([
            ("id_curso_fk", row.course_id.to_string()),
            ("numero_turma", row.number.clone()),
            ("modulo_ano", row.term.clone()),
            ("turno", row.shift.to_string()),
        ])
    }

    fn to_create(form: &FormValues) -> NewSection {
        NewSection {
            course_id: number(form, "id_curso_fk"),
            number: text(form, "numero_turma"),
            term: text(form, "modulo_ano"),
            shift: text(form, "turno"),
        }
    }

    fn to_update(form: &FormValues) -> SectionUpdate {
        SectionUpdate {
            course_id: number(form, "id_curso_fk"),
            number: text(form, "numero_turma"),
            term: text(form, "modulo_ano"),
            shift: text(form, "turno"),
        }
    }
}

/// Reference lists of the allocation form.
#[derive(Debug, Default)]
pub struct AllocationRefs {
    pub courses: Vec<Course>,
    pub professors: Vec<Professor>,
    pub disciplines: Vec<Discipline>,
    pub sections: Vec<Section>,
    pub rooms: Vec<Room>,
}

/// Form-only field narrowing the discipline and section choices.
pub const COURSE_FILTER: &str = "curso";

pub fn disciplines_for_course(
    disciplines: &[Discipline],
    course_id: Option<i64>,
) -> Vec<&Discipline> {
    disciplines
        .iter()
        .filter(|d| course_id.map_or(true, |id| d.course_id == id))
        .collect()
}

pub fn sections_for_course(sections: &[Section], course_id: Option<i64>) -> Vec<&Section> {
    sections
        .iter()
        .filter(|s| course_id.map_or(true, |id| s.course_id == id))
        .collect()
}

#[rocket::async_trait]
impl PageSpec for Allocations {
    const TITLE: &'static str = "Alocações de professores";
    const COLUMNS: &'static [&'static str] = &[
        "ID",
        "Professor",
        "Disciplina",
        "Turma",
        "Módulo/Ano",
        "Turno",
        "Sala",
    ];

    type Refs = AllocationRefs;

    async fn load_refs<T: Transport>(client: &ApiClient<T>) -> Result<AllocationRefs, ClientError> {
        let courses = client.crud::<Courses>();
        let professors = client.crud::<Professors>();
        let disciplines = client.crud::<Disciplines>();
        let sections = client.crud::<Sections>();
        let rooms = client.crud::<Rooms>();
        let (courses, professors, disciplines, sections, rooms) = tokio::try_join!(
            courses.list(),
            professors.list(),
            disciplines.list(),
            sections.list(),
            rooms.list(),
        )?;

        Ok(AllocationRefs {
            courses,
            professors,
            disciplines,
            sections,
            rooms,
        })
    }

    fn cells(row: &crate::models::Allocation) -> Vec<String> {
        vec![
            row.id.to_string(),
            row.professor_name.clone(),
            row.discipline_name.clone(),
            row.section_number.clone(),
            row.term.clone(),
            row.shift.to_string(),
            or_dash(row.room_name.as_deref()),
        ]
    }

    fn fields(refs: &AllocationRefs, form: &FormValues) -> Vec<Field> {
        let course = number(form, COURSE_FILTER);

        vec![
            Field::select(COURSE_FILTER, "Filtrar por curso", course_choices(&refs.courses)),
            Field::select(
                "id_professor_fk",
                "Professor",
                refs.professors
                    .iter()
                    .map(|p| Choice::new(p.id, p.name.clone()))
                    .collect(),
            ),
            Field::select(
                "id_disciplina_fk",
                "Disciplina",
                disciplines_for_course(&refs.disciplines, course)
                    .into_iter()
                    .map(|d| Choice::new(d.id, d.name.clone()))
                    .collect(),
            ),
            Field::select(
                "id_turma_fk",
                "Turma",
                sections_for_course(&refs.sections, course)
                    .into_iter()
                    .map(|s| Choice::new(s.id, section_label(s)))
                    .collect(),
            ),
            Field::select(
                "id_sala_fk",
                "Sala",
                refs.rooms
                    .iter()
                    .map(|r| Choice::new(r.id, r.name.clone()))
                    .collect(),
            ),
        ]
    }

    fn form_values(row: &crate::models::Allocation) -> FormValues {
        let mut values = FormValues::from([
            ("id_professor_fk", row.professor_id.to_string()),
            ("id_disciplina_fk", row.discipline_id.to_string()),
            ("id_turma_fk", row.section_id.to_string()),
        ]);
        if let Some(room) = row.room_id {
            values.insert("id_sala_fk", room.to_string());
        }
        values
    }

    fn to_create(form: &FormValues) -> NewAllocation {
        NewAllocation {
            professor_id: number(form, "id_professor_fk"),
            discipline_id: number(form, "id_disciplina_fk"),
            section_id: number(form, "id_turma_fk"),
            room_id: number(form, "id_sala_fk"),
        }
    }

    fn to_update(form: &FormValues) -> AllocationUpdate {
        AllocationUpdate {
            professor_id: number(form, "id_professor_fk"),
            discipline_id: number(form, "id_disciplina_fk"),
            section_id: number(form, "id_turma_fk"),
            room_id: nullable_number(form, "id_sala_fk"),
        }
    }
}
