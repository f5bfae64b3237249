//! folio CLI - static resume site generator.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Static resume site generator")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to folio.toml manifest
    #[arg(short, long, default_value = "folio.toml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new resume project in the current directory
    New,

    /// Render resume data into an HTML page
    Render {
        /// Resume data file (defaults to config or "resume-data.json")
        data: Option<PathBuf>,

        /// Output HTML file (defaults to config or "public/index.html")
        output: Option<PathBuf>,
    },

    /// Serve the built site
    Serve {
        /// Port to listen on (defaults to $PORT, then config, then 3000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory to serve (defaults to config or "public")
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// IP address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Open the site in a browser
        #[arg(long)]
        open: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::New => {
            commands::new::run().await?;
        }
        Commands::Render { data, output } => {
            commands::render::run(&cli.config, data, output).await?;
        }
        Commands::Serve {
            port,
            dir,
            host,
            open,
        } => {
            commands::serve::run(&cli.config, port, dir, host, open).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_render_with_defaults() {
        let cli = Cli::try_parse_from(["folio", "render"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("folio.toml"));
        match cli.command {
            Commands::Render { data, output } => {
                assert!(data.is_none());
                assert!(output.is_none());
            }
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn parses_render_with_paths() {
        let cli = Cli::try_parse_from(["folio", "render", "me.json", "out/index.html"]).unwrap();
        match cli.command {
            Commands::Render { data, output } => {
                assert_eq!(data, Some(PathBuf::from("me.json")));
                assert_eq!(output, Some(PathBuf::from("out/index.html")));
            }
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn parses_serve_flags() {
        let cli = Cli::try_parse_from([
            "folio", "serve", "--port", "8080", "--dir", "site", "--host", "0.0.0.0", "--open",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Serve {
                port,
                dir,
                host,
                open,
            } => {
                assert_eq!(port, Some(8080));
                assert_eq!(dir, Some(PathBuf::from("site")));
                assert_eq!(host, "0.0.0.0");
                assert!(open);
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn serve_binds_loopback_by_default() {
        let cli = Cli::try_parse_from(["folio", "serve"]).unwrap();
        match cli.command {
            Commands::Serve { host, open, .. } => {
                assert_eq!(host, "127.0.0.1");
                assert!(!open);
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn rejects_unknown_command() {
        assert!(Cli::try_parse_from(["folio", "publish"]).is_err());
    }
}
