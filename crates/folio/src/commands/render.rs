//! Resume render command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use folio::Manifest;
use folio_static::{BuildConfig, StaticBuilder};

/// Run the render command.
pub async fn run(config: &Path, data: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let manifest = Manifest::load_or_default(config)?;

    let config = BuildConfig {
        data_path: data.unwrap_or(manifest.build.data),
        output_path: output.unwrap_or(manifest.build.output),
    };

    tracing::debug!("Rendering {}", config.data_path.display());

    let result = StaticBuilder::new(config).build()?;

    tracing::debug!(
        "Rendered {} sections ({} bytes) in {}ms",
        result.sections.len(),
        result.bytes,
        result.duration_ms
    );

    println!(
        "✓ Resume generated successfully: {}",
        result.output_path.display()
    );

    Ok(())
}
