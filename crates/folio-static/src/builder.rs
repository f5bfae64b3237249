//! Resume page builder.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

use folio_record::{RecordError, ResumeRecord};

use crate::sections::{body_order, Section};
use crate::templates::{Context, TemplateEngine};

/// Configuration for building a resume page.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Resume data file
    pub data_path: PathBuf,

    /// HTML file to write; its parent directory must exist
    pub output_path: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("resume-data.json"),
            output_path: PathBuf::from("public/index.html"),
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Sections emitted, in navigation order
    pub sections: Vec<Section>,

    /// Size of the written document
    pub bytes: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output file
    pub output_path: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Record(#[from] RecordError),

    #[error("Failed to render template: {0}")]
    TemplateError(#[from] minijinja::Error),

    #[error("Failed to write {}: {source}", path.display())]
    WriteError { path: PathBuf, source: io::Error },
}

/// Render a record into a complete HTML document.
///
/// Pure function of the record: the same input always yields the same bytes.
pub fn render_document(record: &ResumeRecord) -> Result<String, BuildError> {
    TemplateEngine::new().render(record)
}

impl TemplateEngine {
    /// Render a record with this engine.
    pub fn render(&self, record: &ResumeRecord) -> Result<String, BuildError> {
        let plan = Section::plan(record);
        let context = Context::new(record, &plan);

        let blocks = body_order(&plan)
            .into_iter()
            .map(|section| self.render_section(section, &context))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self.render_page(&context, &blocks)?)
    }
}

/// Resume page builder.
pub struct StaticBuilder {
    config: BuildConfig,
    templates: TemplateEngine,
}

impl StaticBuilder {
    /// Create a new builder.
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            templates: TemplateEngine::new(),
        }
    }

    /// Load the record, render it and write the page.
    ///
    /// The output file is only opened once rendering has succeeded, so a bad
    /// record leaves an existing page untouched.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        let record = ResumeRecord::load(&self.config.data_path)?;
        let sections = Section::plan(&record);

        tracing::debug!(
            "Rendering sections: {}",
            sections
                .iter()
                .map(|s| s.id())
                .collect::<Vec<_>>()
                .join(", ")
        );

        let html = self.templates.render(&record)?;

        fs::write(&self.config.output_path, &html).map_err(|source| BuildError::WriteError {
            path: self.config.output_path.clone(),
            source,
        })?;

        let duration = start.elapsed();

        Ok(BuildResult {
            sections,
            bytes: html.len(),
            duration_ms: duration.as_millis() as u64,
            output_path: self.config.output_path.clone(),
        })
    }
}
