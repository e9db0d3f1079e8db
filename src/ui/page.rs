use tracing::{debug, instrument};

use super::form::{Field, FormValues, fill_form};
use super::table::render_table;
use super::{Command, Console, parse_command};
use crate::client::{ApiClient, ClientError, Resource, Transport};

/// What a CRUD page needs to know about its entity.
#[rocket::async_trait]
pub trait PageSpec: Resource {
    const TITLE: &'static str;
    const COLUMNS: &'static [&'static str];

    /// Lists the form's select fields draw their options from.
    type Refs: Default + Send + Sync;

    async fn load_refs<T: Transport>(client: &ApiClient<T>) -> Result<Self::Refs, ClientError>;

    fn cells(row: &Self::Row) -> Vec<String>;

    fn fields(refs: &Self::Refs, form: &FormValues) -> Vec<Field>;

    /// Current values of a row, used to pre-fill the edit form.
    fn form_values(row: &Self::Row) -> FormValues;

    fn to_create(form: &FormValues) -> Self::Create;

    fn to_update(form: &FormValues) -> Self::Update;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Creating,
    Editing(i64),
}

/// Table plus form for one entity.
pub struct CrudPage<R: PageSpec> {
    pub rows: Vec<R::Row>,
    pub refs: R::Refs,
    pub mode: Mode,
    pub notice: Option<String>,
}

impl<R: PageSpec> Default for CrudPage<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            refs: R::Refs::default(),
            mode: Mode::Creating,
            notice: None,
        }
    }
}

impl<R: PageSpec> CrudPage<R> {
    /// Loads the reference lists and the rows at the same time.
    #[instrument(skip_all, fields(page = R::TITLE))]
    pub async fn open<T: Transport>(client: &ApiClient<T>) -> Self {
        let mut page = Self::default();
        let crud = client.crud::<R>();
        let (refs, rows) = tokio::join!(R::load_refs(client), crud.list());

        match refs {
            Ok(refs) => page.refs = refs,
            Err(err) => page.notice = Some(err.user_message()),
        }
        match rows {
            Ok(rows) => page.rows = rows,
            Err(err) => page.notice = Some(err.user_message()),
        }

        page
    }

    pub async fn reload<T: Transport>(&mut self, client: &ApiClient<T>) {
        match client.crud::<R>().list().await {
            Ok(rows) => {
                debug!(page = R::TITLE, rows = rows.len(), "Reloaded");
                self.rows = rows;
            }
            Err(err) => self.notice = Some(err.user_message()),
        }
    }

    pub fn find(&self, id: i64) -> Option<&R::Row> {
        self.rows.iter().find(|row| R::id(row) == id)
    }

    /// Switches to edit mode and returns the row's values for the form.
    pub fn begin_edit(&mut self, id: i64) -> Option<FormValues> {
        match self.find(id).map(R::form_values) {
            Some(values) => {
                self.mode = Mode::Editing(id);
                Some(values)
            }
            None => {
                self.notice = Some(format!("Registro {} não encontrado.", id));
                None
            }
        }
    }

    pub fn cancel_edit(&mut self) {
        self.mode = Mode::Creating;
    }

    /// Sends the form as a create or an update depending on the mode.
    /// On success the page leaves edit mode and re-fetches its rows.
    pub async fn submit<T: Transport>(&mut self, client: &ApiClient<T>, form: &FormValues) -> bool {
        let crud = client.crud::<R>();
        let outcome = match self.mode {
            Mode::Creating => crud
                .create(&R::to_create(form))
                .await
                .map(|id| format!("Registro {} cadastrado com sucesso.", id)),
            Mode::Editing(id) => crud
                .update(id, &R::to_update(form))
                .await
                .map(|done| done.message),
        };

        self.settle(client, outcome).await
    }

    pub async fn delete<T: Transport>(&mut self, client: &ApiClient<T>, id: i64) -> bool {
        let outcome = client
            .crud::<R>()
            .remove(id)
            .await
            .map(|done| done.message);
        self.settle(client, outcome).await
    }

    async fn settle<T: Transport>(
        &mut self,
        client: &ApiClient<T>,
        outcome: Result<String, ClientError>,
    ) -> bool {
        match outcome {
            Ok(message) => {
                self.mode = Mode::Creating;
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

    pub fn render(&self) -> String {
        let rows: Vec<Vec<String>> = self.rows.iter().map(R::cells).collect();
        let mut out = vec![format!("== {} ==", R::TITLE), render_table(R::COLUMNS, &rows)];

        if let Mode::Editing(id) = self.mode {
            out.push(format!("Editando registro {}", id));
        }
        if let Some(notice) = &self.notice {
            out.push(format!("> {}", notice));
        }

        out.join("\n")
    }

    /// Interactive loop until the user goes back or input ends.
    pub async fn run<T, C>(&mut self, client: &ApiClient<T>, console: &mut C)
    where
        T: Transport,
        C: Console + ?Sized,
    {
        loop {
            console.show(&self.render());
            self.notice = None;

            let Some(line) = console
                .read_line("[n]ovo, [e]ditar <id>, [d]eletar <id>, [r]ecarregar, [v]oltar")
            else {
                return;
            };

            match parse_command(&line) {
                Command::New => {
                    self.cancel_edit();
                    self.fill_and_submit(client, console, FormValues::new()).await;
                }
                Command::Edit(id) => {
                    if let Some(values) = self.begin_edit(id) {
                        self.fill_and_submit(client, console, values).await;
                    }
                }
                Command::Delete(ids) if ids.len() == 1 => {
                    let id = ids[0];
                    if console.confirm(&format!("Confirma a exclusão do registro {}?", id)) {
                        self.delete(client, id).await;
                    } else {
                        self.notice = Some("Exclusão cancelada.".to_string());
                    }
                }
                Command::Reload => self.reload(client).await,
                Command::Back => return,
                Command::Delete(_) | Command::Unknown => {
                    self.notice = Some("Comando inválido.".to_string())
                }
            }
        }
    }

    async fn fill_and_submit<T, C>(
        &mut self,
        client: &ApiClient<T>,
        console: &mut C,
        values: FormValues,
    )
    where
        T: Transport,
        C: Console + ?Sized,
    {
        let refs = &self.refs;
        match fill_form(console, |form| R::fields(refs, form), values) {
            Some(form) => {
                self.submit(client, &form).await;
            }
            None => {
                self.cancel_edit();
                self.notice = Some("Operação cancelada.".to_string());
            }
        }
    }
}
