//! Interactive questions asked by `folio new`.

use std::io::{self, BufRead, Write};

use dialoguer::{theme::ColorfulTheme, Input};
use folio_record::Identity;

/// Answers collected for a new project.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Answers {
    pub project_name: String,
    pub identity: Identity,
}

/// A source of answers to free-text questions.
pub trait Prompt {
    /// Ask one question. Optional questions accept an empty answer.
    fn ask(&mut self, question: &str, optional: bool) -> io::Result<String>;
}

/// Ask every question in order and collect trimmed answers.
pub fn collect_answers(prompt: &mut impl Prompt) -> io::Result<Answers> {
    let mut ask = |question: &str, optional: bool| -> io::Result<String> {
        Ok(prompt.ask(question, optional)?.trim().to_string())
    };

    let project_name = ask("Project name (e.g., my-resume)", false)?;
    let name = ask("Your full name", false)?;
    let title = ask("Your professional title (e.g., Senior Software Engineer)", false)?;
    let subtitle = ask("Your specializations (e.g., Java Backend | Cloud)", false)?;
    let email = ask("Your email", false)?;
    let linkedin = ask("LinkedIn profile URL (optional)", true)?;
    let github = ask("GitHub profile URL (optional)", true)?;
    let portfolio = ask("Portfolio URL (optional)", true)?;

    Ok(Answers {
        project_name,
        identity: Identity {
            name,
            title,
            subtitle,
            email,
            linkedin,
            github,
            portfolio,
        },
    })
}

/// Prompt on an interactive terminal.
pub struct TerminalPrompt {
    theme: ColorfulTheme,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for TerminalPrompt {
    fn ask(&mut self, question: &str, optional: bool) -> io::Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(question)
            .allow_empty(optional)
            .interact_text()
            .map_err(io::Error::other)
    }
}

/// Prompt reading one line per answer, for piped input.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn ask(&mut self, question: &str, _optional: bool) -> io::Result<String> {
        write!(self.output, "{}: ", question)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
