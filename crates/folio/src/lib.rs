//! Project scaffolding and configuration for the folio CLI.

pub mod manifest;
pub mod prompt;
pub mod scaffold;

pub use manifest::{Manifest, ManifestError};
pub use prompt::{collect_answers, Answers, LinePrompt, Prompt, TerminalPrompt};
pub use scaffold::{scaffold, template_dir, ScaffoldError, Scaffolded};
