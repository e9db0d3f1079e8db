use std::collections::BTreeMap;

use super::Console;

/// Answers typed into a form, keyed by wire field name.
/// An empty string marks a field the user cleared with `-`.
pub type FormValues = BTreeMap<&'static str, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    pub fn new(value: impl ToString, label: impl Into<String>) -> Self {
        Self {
            value: value.to_string(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Select(Vec<Choice>),
}

#[derive(Debug, Clone)]
pub struct Field {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl Field {
    pub fn text(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Text,
        }
    }

    pub fn number(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Number,
        }
    }

    pub fn select(key: &'static str, label: &'static str, choices: Vec<Choice>) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Select(choices),
        }
    }

    fn accepts(&self, answer: &str) -> Result<(), &'static str> {
        match &self.kind {
            FieldKind::Text => Ok(()),
            FieldKind::Number => answer
                .parse::<i64>()
                .map(|_| ())
                .map_err(|_| "Valor numérico inválido."),
            FieldKind::Select(choices) if choices.iter().any(|c| c.value == answer) => Ok(()),
            FieldKind::Select(_) => Err("Opção inválida."),
        }
    }
}

/// Walks the user through `fields`, starting from `current`.
///
/// Fields are recomputed after every answer so a choice can narrow the
/// options of later fields. A blank answer keeps the current value, `-`
/// clears it. Returns `None` when input runs out.
pub fn fill_form<C, F>(console: &mut C, fields: F, current: FormValues) -> Option<FormValues>
where
    C: Console + ?Sized,
    F: Fn(&FormValues) -> Vec<Field>,
{
    let mut values = current;
    let mut index = 0;

    while let Some(field) = fields(&values).into_iter().nth(index) {
        if let FieldKind::Select(choices) = &field.kind {
            let options = choices
                .iter()
                .map(|c| format!("  {} - {}", c.value, c.label))
                .collect::<Vec<_>>();
            console.show(&if options.is_empty() {
                "  (nenhuma opção disponível)".to_string()
            } else {
                options.join("\n")
            });
        }

        let prompt = match values.get(field.key).filter(|v| !v.is_empty()) {
            Some(current) => format!("{} [{}]", field.label, current),
            None => field.label.to_string(),
        };

        let answer = console.read_line(&prompt)?;
        let answer = answer.trim();

        match answer {
            "" => {}
            "-" => {
                values.insert(field.key, String::new());
            }
            _ => match field.accepts(answer) {
                Ok(()) => {
                    values.insert(field.key, answer.to_string());
                }
                Err(problem) => {
                    console.show(problem);
                    continue;
                }
            },
        }

        index += 1;
    }

    Some(values)
}

/// Non-blank text of a field.
pub fn text(form: &FormValues, key: &str) -> Option<String> {
    form.get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub fn number(form: &FormValues, key: &str) -> Option<i64> {
    text(form, key).and_then(|v| v.parse().ok())
}

/// Tri-state value for nullable columns: untouched, cleared, or set.
pub fn nullable_text(form: &FormValues, key: &str) -> Option<Option<String>> {
    form.get(key).map(|_| text(form, key))
}

pub fn nullable_number(form: &FormValues, key: &str) -> Option<Option<i64>> {
    form.get(key).map(|_| number(form, key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::ScriptedConsole;

    fn room_fields(_: &FormValues) -> Vec<Field> {
        vec![
            Field::text("nome_sala", "Nome"),
            Field::number("capacidade", "Capacidade"),
            Field::select(
                "tipo_sala",
                "Tipo",
                vec![Choice::new("lab", "Laboratório"), Choice::new("aula", "Sala de aula")],
            ),
        ]
    }

    #[test]
    fn test_blank_keeps_and_dash_clears() {
        let mut console = ScriptedConsole::new(&["", "-", "aula"]);
        let current = FormValues::from([
            ("nome_sala", "Lab 1".to_string()),
            ("capacidade", "30".to_string()),
        ]);

        let values = fill_form(&mut console, room_fields, current).unwrap();
        assert_eq!(values["nome_sala"], "Lab 1");
        assert_eq!(values["capacidade"], "");
        assert_eq!(values["tipo_sala"], "aula");
        assert!(console.transcript().contains("Nome [Lab 1]"));
    }

    #[test]
    fn test_invalid_answers_are_asked_again() {
        let mut console = ScriptedConsole::new(&["Lab", "trinta", "30", "cozinha", "lab"]);

        let values = fill_form(&mut console, room_fields, FormValues::new()).unwrap();
        assert_eq!(values["capacidade"], "30");
        assert_eq!(values["tipo_sala"], "lab");

        let transcript = console.transcript();
        assert!(transcript.contains("Valor numérico inválido."));
        assert!(transcript.contains("Opção inválida."));
    }

    #[test]
    fn test_exhausted_input_cancels() {
        let mut console = ScriptedConsole::new(&["Lab"]);
        assert!(fill_form(&mut console, room_fields, FormValues::new()).is_none());
    }

    #[test]
    fn test_nullable_reads_three_states() {
        let form = FormValues::from([("a", String::new()), ("b", " x ".to_string())]);
        assert_eq!(nullable_text(&form, "a"), Some(None));
        assert_eq!(nullable_text(&form, "b"), Some(Some("x".to_string())));
        assert_eq!(nullable_text(&form, "c"), None);
    }
}
