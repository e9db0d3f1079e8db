use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Line-oriented terminal the pages talk to.
pub trait Console {
    fn show(&mut self, text: &str);

    /// Prompts and reads one line; `None` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Option<String>;

    fn confirm(&mut self, question: &str) -> bool {
        let answer = self.read_line(&format!("{} (s/n)", question));
        matches!(
            answer.as_deref().map(|a| a.trim().to_lowercase()).as_deref(),
            Some("s" | "sim")
        )
    }
}

pub struct StdConsole;

impl Console for StdConsole {
    fn show(&mut self, text: &str) {
        println!("{}", text);
    }

    fn read_line(&mut self, prompt: &str) -> Option<String> {
        print!("{}: ", prompt);
        io::stdout().flush().ok()?;

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

/// Replays canned input and keeps everything shown.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    pub output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|l| l.to_string()).collect(),
            output: Vec::new(),
        }
    }

    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }
}

impl Console for ScriptedConsole {
    fn show(&mut self, text: &str) {
        self.output.push(text.to_string());
    }

    fn read_line(&mut self, prompt: &str) -> Option<String> {
        let line = self.input.pop_front();
        self.output
            .push(format!("{}: {}", prompt, line.as_deref().unwrap_or("<eof>")));
        line
    }
}
