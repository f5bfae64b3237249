//! Project manifest (`folio.toml`).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Manifest file structure.
///
/// Paths are resolved against the working directory, like every other path
/// the CLI takes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<PackageMeta>,

    #[serde(default)]
    pub build: BuildSettings,

    #[serde(default)]
    pub serve: ServeSettings,
}

/// Descriptive project metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageMeta {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: String,
    #[serde(default = "default_license")]
    pub license: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildSettings {
    /// Resume data file
    #[serde(default = "default_data")]
    pub data: PathBuf,
    /// Rendered page
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServeSettings {
    /// Directory to serve
    #[serde(default = "default_serve_dir")]
    pub dir: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            data: default_data(),
            output: default_output(),
        }
    }
}

impl Default for ServeSettings {
    fn default() -> Self {
        Self {
            dir: default_serve_dir(),
            port: None,
        }
    }
}

fn default_version() -> String {
    "1.0.0".to_string()
}
fn default_license() -> String {
    "MIT".to_string()
}
fn default_data() -> PathBuf {
    PathBuf::from("resume-data.json")
}
fn default_output() -> PathBuf {
    PathBuf::from("public/index.html")
}
fn default_serve_dir() -> PathBuf {
    PathBuf::from("public")
}

/// Errors that can occur when reading or writing the manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Failed to serialize manifest: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl Manifest {
    /// Manifest for a freshly scaffolded project.
    pub fn for_project(project_name: &str, full_name: &str) -> Self {
        Self {
            package: Some(PackageMeta {
                name: project_name.to_string(),
                version: default_version(),
                description: format!("Resume website for {}", full_name),
                author: full_name.to_string(),
                license: default_license(),
            }),
            build: BuildSettings::default(),
            serve: ServeSettings {
                port: Some(folio_server::DEFAULT_PORT),
                ..Default::default()
            },
        }
    }

    /// Load the manifest if it exists.
    ///
    /// A missing file yields the defaults; a file that exists but does not
    /// parse is an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ManifestError> {
        if !path.exists() {
            tracing::debug!("No manifest at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest = toml::from_str(&content).map_err(|e| ManifestError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        tracing::info!("Loaded config from {}", path.display());

        Ok(manifest)
    }

    pub fn to_toml(&self) -> Result<String, ManifestError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
