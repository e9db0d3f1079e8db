use super::table::{or_dash, render_table};
use super::{Command, Console, parse_command};
use crate::client::{ApiClient, Transport};
use crate::models::CurriculumRow;

const COLUMNS: &[&str] = &[
    "Professor",
    "Curso",
    "Turma",
    "Módulo/Ano",
    "Turno",
    "Disciplina",
    "CH total",
    "CH prática",
    "CH teórica",
    "Encontros",
    "Sala",
    "Recursos",
    "Softwares",
];

/// Read-only view of the consolidated curriculum.
#[derive(Debug, Default)]
pub struct ReportPage {
    pub rows: Vec<CurriculumRow>,
    pub notice: Option<String>,
}

impl ReportPage {
    pub async fn open<T: Transport>(client: &ApiClient<T>) -> Self {
        let mut page = Self::default();
        page.reload(client).await;
        page
    }

    pub async fn reload<T: Transport>(&mut self, client: &ApiClient<T>) {
        match client.curriculum().await {
            Ok(rows) => self.rows = rows,
            Err(err) => self.notice = Some(err.user_message()),
        }
    }

    pub fn render(&self) -> String {
        let rows: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|r| {
                vec![
                    r.professor_name.clone(),
                    r.course_name.clone(),
                    r.section_number.clone(),
                    r.term.clone(),
                    r.shift.to_string(),
                    r.discipline_name.clone(),
                    r.total_hours.to_string(),
                    r.practical_hours.to_string(),
                    r.theory_hours.to_string(),
                    r.meetings.to_string(),
                    or_dash(r.room_name.as_deref()),
                    or_dash(r.room_resources.as_deref()),
                    or_dash(r.software.as_deref()),
                ]
            })
            .collect();

        let mut out = vec![
            "== Grade curricular ==".to_string(),
            render_table(COLUMNS, &rows),
        ];
        if let Some(notice) = &self.notice {
            out.push(format!("> {}", notice));
        }
        out.join("\n")
    }

    pub async fn run<T, C>(&mut self, client: &ApiClient<T>, console: &mut C)
    where
        T: Transport,
        C: Console + ?Sized,
    {
        loop {
            console.show(&self.render());
            self.notice = None;

            let Some(line) = console.read_line("[r]ecarregar, [v]oltar") else {
                return;
            };
            match parse_command(&line) {
                Command::Reload => self.reload(client).await,
                Command::Back => return,
                _ => self.notice = Some("Comando inválido.".to_string()),
            }
        }
    }
}
