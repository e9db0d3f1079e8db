use sqlx::{Executor, QueryBuilder, Sqlite};
use std::fmt::Debug;

use crate::auth::Role;
use crate::error::AppError;
use crate::models::Shift;

/// A column that may appear in the `SET` clause of a partial update.
pub trait Column: Copy + Debug {
    const TABLE: &'static str;
    const KEY: &'static str;

    fn name(self) -> &'static str;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Int(i64),
    Null,
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<Role> for Value {
    fn from(value: Role) -> Self {
        Value::Text(value.as_str().to_string())
    }
}

impl From<Shift> for Value {
    fn from(value: Shift) -> Self {
        Value::Text(value.as_str().to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}

/// Column assignments for `UPDATE <table> SET ... WHERE <key> = ?`.
///
/// Column names come from the `Column` enum, every value is a bound
/// parameter.
#[derive(Debug, Clone)]
pub struct UpdateSet<C: Column> {
    assignments: Vec<(C, Value)>,
}

impl<C: Column> Default for UpdateSet<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Column> UpdateSet<C> {
    pub fn new() -> Self {
        Self {
            assignments: Vec::new(),
        }
    }

    pub fn set(mut self, column: C, value: impl Into<Value>) -> Self {
        self.assignments.push((column, value.into()));
        self
    }

    /// Assigns only when a value was supplied.
    pub fn set_some<V: Into<Value>>(self, column: C, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(column, value),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn columns(&self) -> Vec<&'static str> {
        self.assignments.iter().map(|(c, _)| c.name()).collect()
    }

    /// Fails when the request carried no recognized field.
    pub fn require_changes(self) -> Result<Self, AppError> {
        if self.is_empty() {
            Err(AppError::Validation(
                "Nenhum campo para atualizar fornecido.".to_string(),
            ))
        } else {
            Ok(self)
        }
    }

    pub fn into_query(self, id: i64) -> QueryBuilder<'static, Sqlite> {
        let mut builder = QueryBuilder::<Sqlite>::new(format!("UPDATE {} SET ", C::TABLE));

        let mut separated = builder.separated(", ");
        for (column, value) in self.assignments {
            separated.push(format!("{} = ", column.name()));
            match value {
                Value::Text(text) => separated.push_bind_unseparated(text),
                Value::Int(number) => separated.push_bind_unseparated(number),
                Value::Null => separated.push_bind_unseparated(Option::<i64>::None),
            };
        }

        builder.push(format!(" WHERE {} = ", C::KEY));
        builder.push_bind(id);
        builder
    }

    /// Runs the update and returns the number of rows matched.
    pub async fn execute<'e, E>(self, executor: E, id: i64) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        if self.is_empty() {
            return Err(AppError::Validation(
                "Nenhum campo para atualizar fornecido.".to_string(),
            ));
        }

        let mut query = self.into_query(id);
        let result = query.build().execute(executor).await?;
        Ok(result.rows_affected())
    }
}

macro_rules! columns {
    ($name:ident, $table:literal, $key:literal, { $($variant:ident => $column:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl Column for $name {
            const TABLE: &'static str = $table;
            const KEY: &'static str = $key;

            fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $column),+
                }
            }
        }
    };
}

columns!(UserColumn, "usuario", "id_usuario", {
    FullName => "nome_completo",
    Email => "email",
    PasswordHash => "senha",
    Role => "role",
});

columns!(CourseColumn, "curso", "id_curso", {
    Name => "nome_curso",
    Workload => "carga_horaria",
    Area => "area",
    Description => "descricao",
});

columns!(RoomColumn, "sala", "id_sala", {
    Name => "nome_sala",
    Kind => "tipo_sala",
    Resources => "recursos_sala",
});

columns!(SoftwareColumn, "software", "id_software", {
    Name => "nome_software",
    Note => "observacao",
});

columns!(DisciplineColumn, "disciplina", "id_disciplina", {
    Name => "nome_disciplina",
    PracticalHours => "ch_pratica",
    TheoryHours => "ch_teorica",
    Course => "id_curso_fk",
});

columns!(SectionColumn, "turma", "id_turma", {
    Course => "id_curso_fk",
    Number => "numero_turma",
    Term => "modulo_ano",
    Shift => "turno",
});

columns!(ProfessorColumn, "professor", "id_professor", {
    User => "id_usuario_fk",
});

columns!(AllocationColumn, "professor_alocacao", "id_professor_alocacao", {
    Professor => "id_professor_fk",
    Discipline => "id_disciplina_fk",
    Section => "id_turma_fk",
    Room => "id_sala_fk",
});
