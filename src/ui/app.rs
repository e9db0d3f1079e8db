use tracing::info;

use super::Console;
use super::links::LinksPage;
use super::page::{CrudPage, PageSpec};
use super::report::ReportPage;
use super::table::{or_dash, render_table};
use crate::client::{
    Allocations, ApiClient, Courses, Disciplines, Professors, Rooms, Sections, Softwares,
    Transport, Users,
};

const MENU: &str = "\
== Menu ==
 1 - Usuários
 2 - Cursos
 3 - Salas
 4 - Softwares
 5 - Disciplinas
 6 - Professores
 7 - Turmas
 8 - Alocações de professores
 9 - Softwares por disciplina
10 - Professores e alocações
11 - Grade curricular
 s - Sair";

/// Asks for credentials until a login succeeds. `false` when input ends first.
pub async fn login<T, C>(client: &mut ApiClient<T>, console: &mut C, email: Option<&str>) -> bool
where
    T: Transport,
    C: Console + ?Sized,
{
    loop {
        let email = match email {
            Some(email) => email.to_string(),
            None => match console.read_line("Email") {
                Some(email) => email.trim().to_string(),
                None => return false,
            },
        };
        let Some(password) = console.read_line("Senha") else {
            return false;
        };

        match client.login(&email, &password).await {
            Ok(response) => {
                info!(%email, "Logged in");
                console.show(&response.message);
                return true;
            }
            Err(err) => console.show(&err.user_message()),
        }
    }
}

async fn crud_page<R, T, C>(client: &ApiClient<T>, console: &mut C)
where
    R: PageSpec,
    T: Transport,
    C: Console + ?Sized,
{
    CrudPage::<R>::open(client).await.run(client, console).await;
}

async fn show_professor_summaries<T, C>(client: &ApiClient<T>, console: &mut C)
where
    T: Transport,
    C: Console + ?Sized,
{
    match client.professors_with_allocations().await {
        Ok(summaries) => {
            let rows: Vec<Vec<String>> = summaries
                .iter()
                .map(|p| {
                    vec![
                        p.id.to_string(),
                        p.name.clone(),
                        or_dash(p.disciplines.as_deref()),
                        or_dash(p.sections.as_deref()),
                    ]
                })
                .collect();
            console.show(&render_table(&["ID", "Professor", "Disciplinas", "Turmas"], &rows));
        }
        Err(err) => console.show(&err.user_message()),
    }
}

/// Logs in, then serves the main menu until the user leaves.
pub async fn run<T, C>(client: &mut ApiClient<T>, console: &mut C, email: Option<&str>)
where
    T: Transport,
    C: Console + ?Sized,
{
    if !login(client, console, email).await {
        return;
    }

    loop {
        console.show(MENU);
        let Some(choice) = console.read_line("Opção") else {
            break;
        };

        let client = &*client;
        match choice.trim() {
            "1" => crud_page::<Users, _, _>(client, console).await,
            "2" => crud_page::<Courses, _, _>(client, console).await,
            "3" => crud_page::<Rooms, _, _>(client, console).await,
            "4" => crud_page::<Softwares, _, _>(client, console).await,
            "5" => crud_page::<Disciplines, _, _>(client, console).await,
            "6" => crud_page::<Professors, _, _>(client, console).await,
            "7" => crud_page::<Sections, _, _>(client, console).await,
            "8" => crud_page::<Allocations, _, _>(client, console).await,
            "9" => LinksPage::open(client).await.run(client, console).await,
            "10" => show_professor_summaries(client, console).await,
            "11" => ReportPage::open(client).await.run(client, console).await,
            "s" | "S" | "sair" => break,
            _ => console.show("Opção inválida."),
        }
    }

    client.clear_token();
}
