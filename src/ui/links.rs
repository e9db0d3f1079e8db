use super::form::{Choice, Field, FormValues, fill_form, number};
use super::table::render_table;
use super::{Command, Console, parse_command};
use crate::client::{ApiClient, ClientError, Disciplines, Softwares, Transport};
use crate::models::{Discipline, Software, SoftwareLink};

/// Which software each discipline uses.
#[derive(Debug, Default)]
pub struct LinksPage {
    pub rows: Vec<SoftwareLink>,
    pub disciplines: Vec<Discipline>,
    pub software: Vec<Software>,
    pub notice: Option<String>,
}

impl LinksPage {
    pub async fn open<T: Transport>(client: &ApiClient<T>) -> Self {
        let mut page = Self::default();
        let disciplines = client.crud::<Disciplines>();
        let software = client.crud::<Softwares>();
        let refs = tokio::try_join!(disciplines.list(), software.list());

        match refs {
            Ok((disciplines, software)) => {
                page.disciplines = disciplines;
                page.software = software;
            }
            Err(err) => page.notice = Some(err.user_message()),
        }
        page.reload(client).await;
        page
    }

    pub async fn reload<T: Transport>(&mut self, client: &ApiClient<T>) {
        match client.software_links().await {
            Ok(rows) => self.rows = rows,
            Err(err) => self.notice = Some(err.user_message()),
        }
    }

    pub async fn link<T: Transport>(
        &mut self,
        client: &ApiClient<T>,
        discipline_id: i64,
        software_id: i64,
    ) -> bool {
        let outcome = client.link_software(discipline_id, software_id).await;
        self.settle(client, outcome.map(|done| done.message)).await
    }

    pub async fn unlink<T: Transport>(
        &mut self,
        client: &ApiClient<T>,
        discipline_id: i64,
        software_id: i64,
    ) -> bool {
        let outcome = client.unlink_software(discipline_id, software_id).await;
        self.settle(client, outcome.map(|done| done.message)).await
    }

    async fn settle<T: Transport>(
        &mut self,
        client: &ApiClient<T>,
        outcome: Result<String, ClientError>,
    ) -> bool {
        match outcome {
            Ok(message) => {
                self.notice = Some(message);
                self.reload(client).await;
                true
            }
            Err(err) => {
                self.notice = Some(err.user_message());
                false
            }
        }
    }

    fn fields(&self, _: &FormValues) -> Vec<Field> {
        vec![
            Field::select(
                "id_disciplina_fk",
                "Disciplina",
                self.disciplines
                    .iter()
                    .map(|d| Choice::new(d.id, format!("{} ({})", d.name, d.course_name)))
                    .collect(),
            ),
            Field::select(
                "id_software_fk",
                "Software",
                self.software
                    .iter()
                    .map(|s| Choice::new(s.id, s.name.clone()))
                    .collect(),
            ),
        ]
    }

    pub fn render(&self) -> String {
        let rows: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|l| {
                vec![
                    l.discipline_id.to_string(),
                    l.discipline_name.clone(),
                    l.software_id.to_string(),
                    l.software_name.clone(),
                ]
            })
            .collect();

        let mut out = vec![
            "== Softwares por disciplina ==".to_string(),
            render_table(&["ID disc.", "Disciplina", "ID soft.", "Software"], &rows),
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

            let Some(line) = console.read_line(
                "[n]ovo vínculo, [d]eletar <id disciplina> <id software>, [r]ecarregar, [v]oltar",
            ) else {
                return;
            };

            match parse_command(&line) {
                Command::New => {
                    let answers = fill_form(console, |form| self.fields(form), FormValues::new());
                    let pair = answers.and_then(|form| {
                        Some((number(&form, "id_disciplina_fk")?, number(&form, "id_software_fk")?))
                    });
                    match pair {
                        Some((discipline_id, software_id)) => {
                            self.link(client, discipline_id, software_id).await;
                        }
                        None => self.notice = Some("Operação cancelada.".to_string()),
                    }
                }
                Command::Delete(ids) if ids.len() == 2 => {
                    let (discipline_id, software_id) = (ids[0], ids[1]);
                    if console.confirm("Confirma a remoção do vínculo?") {
                        self.unlink(client, discipline_id, software_id).await;
                    } else {
                        self.notice = Some("Exclusão cancelada.".to_string());
                    }
                }
                Command::Reload => self.reload(client).await,
                Command::Back => return,
                _ => self.notice = Some("Comando inválido.".to_string()),
            }
        }
    }
}
