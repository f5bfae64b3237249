//! Static server command.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use folio::Manifest;
use folio_server::{ServerConfig, StaticServer, DEFAULT_PORT};

/// Run the serve command.
pub async fn run(
    config: &Path,
    port: Option<u16>,
    dir: Option<PathBuf>,
    host: String,
    open: bool,
) -> Result<()> {
    let manifest = Manifest::load_or_default(config)?;

    let port = resolve_port(port, env::var("PORT").ok(), manifest.serve.port)?;

    let config = ServerConfig {
        root: dir.unwrap_or(manifest.serve.dir),
        port,
        host,
        open,
    };

    StaticServer::new(config).start().await?;

    Ok(())
}

/// Pick the listening port: flag, then `PORT`, then manifest, then 3000.
fn resolve_port(flag: Option<u16>, env_port: Option<String>, manifest: Option<u16>) -> Result<u16> {
    if let Some(port) = flag {
        return Ok(port);
    }
    if let Some(value) = env_port.filter(|v| !v.trim().is_empty()) {
        return value
            .trim()
            .parse()
            .with_context(|| format!("Invalid PORT value: {}", value));
    }
    Ok(manifest.unwrap_or(DEFAULT_PORT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins() {
        assert_eq!(
            resolve_port(Some(8080), Some("9000".into()), Some(7000)).unwrap(),
            8080
        );
    }

    #[test]
    fn env_beats_manifest() {
        assert_eq!(resolve_port(None, Some("9000".into()), Some(7000)).unwrap(), 9000);
    }

    #[test]
    fn falls_back_to_manifest_then_default() {
        assert_eq!(resolve_port(None, None, Some(7000)).unwrap(), 7000);
        assert_eq!(resolve_port(None, Some(String::new()), None).unwrap(), 3000);
    }

    #[test]
    fn rejects_garbage_port() {
        assert!(resolve_port(None, Some("http".into()), None).is_err());
    }
}
