//! Create a new resume project.

use std::env;
use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use folio::{collect_answers, scaffold, template_dir, LinePrompt, TerminalPrompt};

/// Run the new command.
pub async fn run() -> Result<()> {
    println!("\nWelcome to the folio resume generator!\n");
    println!("This tool will create a new resume project with your information.\n");

    let answers = if io::stdin().is_terminal() {
        collect_answers(&mut TerminalPrompt::new())
    } else {
        collect_answers(&mut LinePrompt::new(io::stdin().lock(), io::stdout()))
    }
    .context("Failed to read answers")?;

    let cwd = env::current_dir().context("Failed to resolve current directory")?;
    let templates = template_dir();
    match &templates {
        Some(dir) => tracing::debug!("Using templates from {}", dir.display()),
        None => tracing::debug!("No template directory found"),
    }

    tracing::info!("Creating project structure...");

    let project = scaffold(&cwd, &answers, templates.as_deref())?;

    println!("\n✓ Project created successfully!\n");
    println!("Project location: {}\n", project.root.display());
    println!("Next steps:\n");
    println!("   1. cd {}", answers.project_name);
    println!("   2. Edit resume-data.json with your information");
    println!("   3. folio render");
    println!("   4. folio serve\n");

    Ok(())
}
