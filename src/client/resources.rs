use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{ApiClient, ClientError, Transport};
use crate::models::{
    Allocation, AllocationUpdate, Course, CourseUpdate, CurriculumRow, Discipline,
    DisciplineUpdate, Message, NewAllocation, NewCourse, NewDiscipline, NewRoom, NewSection,
    NewSoftware, NewSoftwareLink, NewUser, Professor, ProfessorRequest, ProfessorSummary, Room,
    RoomUpdate, Section, SectionUpdate, Software, SoftwareLink, SoftwareUpdate, User, UserUpdate,
};

/// An entity exposed through the standard five CRUD routes.
pub trait Resource: Send + Sync + 'static {
    const PATH: &'static str;
    const ID_FIELD: &'static str;

    type Row: DeserializeOwned + Clone + Send + Sync;
    type Create: Serialize + Send + Sync;
    type Update: Serialize + Send + Sync;

    fn id(row: &Self::Row) -> i64;
}

macro_rules! resource {
    ($marker:ident, $path:literal, $id_field:literal, $row:ty, $create:ty, $update:ty) => {
        pub struct $marker;

        impl Resource for $marker {
            const PATH: &'static str = $path;
            const ID_FIELD: &'static str = $id_field;

            type Row = $row;
            type Create = $create;
            type Update = $update;

            fn id(row: &Self::Row) -> i64 {
                row.id
            }
        }
    };
}

resource!(Users, "/usuarios", "id_usuario", User, NewUser, UserUpdate);
resource!(Courses, "/cursos", "id_curso", Course, NewCourse, CourseUpdate);
resource!(Rooms, "/salas", "id_sala", Room, NewRoom, RoomUpdate);
resource!(Softwares, "/softwares", "id_software", Software, NewSoftware, SoftwareUpdate);
resource!(
    Disciplines,
    "/disciplinas",
    "id_disciplina",
    Discipline,
    NewDiscipline,
    DisciplineUpdate
);
resource!(
    Professors,
    "/professores",
    "id_professor",
    Professor,
    ProfessorRequest,
    ProfessorRequest
);
resource!(Sections, "/turmas", "id_turma", Section, NewSection, SectionUpdate);
resource!(
    Allocations,
    "/professor-alocacoes",
    "id_professor_alocacao",
    Allocation,
    NewAllocation,
    AllocationUpdate
);

/// CRUD calls for one [`Resource`].
pub struct Crud<'a, R, T> {
    client: &'a ApiClient<T>,
    resource: PhantomData<R>,
}

impl<'a, R: Resource, T: Transport> Crud<'a, R, T> {
    pub async fn list(&self) -> Result<Vec<R::Row>, ClientError> {
        self.client.get(R::PATH).await
    }

    pub async fn get(&self, id: i64) -> Result<R::Row, ClientError> {
        self.client.get(&format!("{}/{}", R::PATH, id)).await
    }

    /// Creates the row and returns its new id.
    pub async fn create(&self, body: &R::Create) -> Result<i64, ClientError> {
        let created: serde_json::Value = self.client.post(R::PATH, body).await?;
        created
            .get(R::ID_FIELD)
            .and_then(serde_json::Value::as_i64)
            .ok_or_else(|| ClientError::Decode(format!("response without {}", R::ID_FIELD)))
    }

    pub async fn update(&self, id: i64, body: &R::Update) -> Result<Message, ClientError> {
        self.client.put(&format!("{}/{}", R::PATH, id), body).await
    }

    pub async fn remove(&self, id: i64) -> Result<Message, ClientError> {
        self.client.delete(&format!("{}/{}", R::PATH, id)).await
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn crud<R: Resource>(&self) -> Crud<'_, R, T> {
        Crud {
            client: self,
            resource: PhantomData,
        }
    }

    pub async fn register(&self, user: &NewUser) -> Result<i64, ClientError> {
        self.crud::<Users>().create(user).await
    }

    pub async fn sections_by_course(&self, course_id: i64) -> Result<Vec<Section>, ClientError> {
        self.get(&format!("/turmas?id_curso_fk={}", course_id)).await
    }

    pub async fn professors_with_allocations(&self) -> Result<Vec<ProfessorSummary>, ClientError> {
        self.get("/professores-com-nomes").await
    }

    pub async fn software_links(&self) -> Result<Vec<SoftwareLink>, ClientError> {
        self.get("/disciplina-software").await
    }

    pub async fn link_software(
        &self,
        discipline_id: i64,
        software_id: i64,
    ) -> Result<Message, ClientError> {
        let body = NewSoftwareLink {
            discipline_id: Some(discipline_id),
            software_id: Some(software_id),
        };
        self.post("/disciplina-software", &body).await
    }

    pub async fn unlink_software(
        &self,
        discipline_id: i64,
        software_id: i64,
    ) -> Result<Message, ClientError> {
        self.delete(&format!(
            "/disciplina-software/{}/{}",
            discipline_id, software_id
        ))
        .await
    }

    pub async fn curriculum(&self) -> Result<Vec<CurriculumRow>, ClientError> {
        self.get("/grade-curricular").await
    }
}
