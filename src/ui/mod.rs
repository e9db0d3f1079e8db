//! Terminal pages: one form-and-table page per entity plus the curriculum
//! report, all driven through [`crate::client`].

pub mod app;
pub mod console;
pub mod form;
pub mod links;
pub mod page;
pub mod pages;
pub mod report;
pub mod table;

pub use app::run;
pub use console::{Console, ScriptedConsole, StdConsole};
pub use page::{CrudPage, Mode, PageSpec};

/// A command typed at a page prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    New,
    Edit(i64),
    Delete(Vec<i64>),
    Reload,
    Back,
    Unknown,
}

pub fn parse_command(line: &str) -> Command {
    let mut parts = line.split_whitespace();
    let verb = parts.next().unwrap_or_default().to_lowercase();
    let ids: Option<Vec<i64>> = parts.map(|p| p.parse().ok()).collect();

    match (verb.as_str(), ids) {
        ("n" | "novo", Some(ids)) if ids.is_empty() => Command::New,
        ("e" | "editar", Some(ids)) if ids.len() == 1 => Command::Edit(ids[0]),
        ("d" | "deletar", Some(ids)) if !ids.is_empty() => Command::Delete(ids),
        ("r" | "recarregar", _) => Command::Reload,
        ("v" | "voltar", _) => Command::Back,
        _ => Command::Unknown,
    }
}
