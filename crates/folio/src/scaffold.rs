//! Create a new resume project.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use folio_record::ResumeRecord;

use crate::manifest::{Manifest, ManifestError};
use crate::prompt::Answers;

/// Environment variable overriding the template directory.
pub const TEMPLATE_DIR_ENV: &str = "FOLIO_TEMPLATE_DIR";

/// Files copied from the template directory, relative to both roots.
const TEMPLATE_FILES: [&str; 3] = ["public/styles.css", "public/script.js", "render.sh"];

/// Errors that can occur while scaffolding.
#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    #[error("Directory '{}' already exists", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Invalid project name: '{0}'")]
    InvalidName(String),

    #[error("Failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Failed to serialize resume data: {0}")]
    Record(#[from] serde_json::Error),

    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

/// Outcome of a successful scaffold.
#[derive(Debug)]
pub struct Scaffolded {
    /// Project directory
    pub root: PathBuf,

    /// Files written, relative to the root
    pub written: Vec<PathBuf>,

    /// Template files that were not found and skipped
    pub skipped: Vec<PathBuf>,
}

/// Locate the directory holding the starter stylesheet, script and render
/// wrapper.
///
/// Checks `$FOLIO_TEMPLATE_DIR`, then `share/folio/templates` and `templates`
/// next to the installed binary, then `./templates`, then the source tree the
/// binary was built from.
pub fn template_dir() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(dir) = env::var_os(TEMPLATE_DIR_ENV) {
        candidates.push(PathBuf::from(dir));
    }
    if let Some(exe_dir) = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        candidates.push(exe_dir.join("../share/folio/templates"));
        candidates.push(exe_dir.join("templates"));
    }
    candidates.push(PathBuf::from("templates"));
    candidates.push(Path::new(env!("CARGO_MANIFEST_DIR")).join("../../templates"));

    candidates.into_iter().find(|p| p.is_dir())
}

/// Create `<parent>/<project name>` and populate it.
///
/// Refuses to touch an existing directory. There is no rollback: an IO error
/// partway through leaves whatever was already written.
pub fn scaffold(
    parent: &Path,
    answers: &Answers,
    templates: Option<&Path>,
) -> Result<Scaffolded, ScaffoldError> {
    validate_name(&answers.project_name)?;

    let root = parent.join(&answers.project_name);
    if root.exists() {
        return Err(ScaffoldError::AlreadyExists(PathBuf::from(
            &answers.project_name,
        )));
    }

    create_dir(&root)?;
    create_dir(&root.join("public"))?;

    let identity = &answers.identity;
    let mut written = Vec::new();

    let manifest = Manifest::for_project(&answers.project_name, &identity.name).to_toml()?;
    let record = ResumeRecord::placeholder(identity).to_json_pretty()?;
    let readme = readme(&identity.name);

    let files: [(&str, &str); 5] = [
        ("folio.toml", manifest.as_str()),
        ("resume-data.json", record.as_str()),
        ("serve.sh", SERVE_SCRIPT),
        (".gitignore", GITIGNORE),
        ("README.md", readme.as_str()),
    ];

    for (name, content) in files {
        write_file(&root.join(name), content)?;
        tracing::debug!("Created {}", name);
        written.push(PathBuf::from(name));
    }
    make_executable(&root.join("serve.sh"))?;

    let mut skipped = Vec::new();
    for relative in TEMPLATE_FILES {
        let source = templates.map(|dir| dir.join(relative));
        match source {
            Some(source) if source.is_file() => {
                let dest = root.join(relative);
                fs::copy(&source, &dest).map_err(|source| ScaffoldError::Write {
                    path: dest.clone(),
                    source,
                })?;
                tracing::debug!("Copied {}", relative);
                written.push(PathBuf::from(relative));
            }
            _ => {
                tracing::debug!("Template {} not found, skipping", relative);
                skipped.push(PathBuf::from(relative));
            }
        }
    }

    Ok(Scaffolded {
        root,
        written,
        skipped,
    })
}

fn validate_name(name: &str) -> Result<(), ScaffoldError> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\'])
        || name.chars().any(char::is_control);

    if invalid {
        return Err(ScaffoldError::InvalidName(name.to_string()));
    }
    Ok(())
}

fn create_dir(path: &Path) -> Result<(), ScaffoldError> {
    fs::create_dir(path).map_err(|source| ScaffoldError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, content: &str) -> Result<(), ScaffoldError> {
    fs::write(path, content).map_err(|source| ScaffoldError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<(), ScaffoldError> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).map_err(|source| {
        ScaffoldError::Write {
            path: path.to_path_buf(),
            source,
        }
    })
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<(), ScaffoldError> {
    Ok(())
}

fn readme(full_name: &str) -> String {
    format!(
        r##"# {full_name}'s Resume Website

A professional resume website built with folio.

## Quick Start

1. Update your resume data in `resume-data.json`

2. Build and run locally:
   ```
   folio render
   folio serve
   ```
   or use the bundled scripts: `./render.sh` and `./serve.sh`.

3. View at http://localhost:3000

## Customization

### Update Resume Content
Edit `resume-data.json` with your information:
- Personal details and contact info
- Professional summary
- Work experience
- Skills
- Education
- Awards and accomplishments

Sections without data are left out of the page and its menu.
Text is inserted as-is, so inline HTML such as `<strong>` works.

### Customize Theme
Modify the `theme` section in `resume-data.json`:
```json
"theme": {{
  "primaryColor": "#2563eb",
  "secondaryColor": "#1e40af",
  "accentColor": "#3b82f6"
}}
```

### Customize Styling
Edit `public/styles.css` for additional styling changes.

### Settings
`folio.toml` holds the data and output paths used by `folio render` and the
directory and port used by `folio serve`. The `PORT` environment variable
overrides the configured port.

## Deployment

Everything under `public/` is static. Publish that directory to any static
host, e.g. GitHub Pages.

## License

MIT
"##
    )
}

const SERVE_SCRIPT: &str = r#"#!/bin/sh
# Serve the built site from public/. PORT selects the port (default 3000).
cd "$(dirname "$0")" || exit 1
exec folio serve --dir public "$@"
"#;

const GITIGNORE: &str = "*.log
.DS_Store
.env
.env.local
";
