//! Vitrine CLI - website-builder backend with static export.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(about = "Website-builder backend with static export")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory and seed a starter project
    Init {
        /// Overwrite an existing vitrine.toml
        #[arg(short, long)]
        yes: bool,
    },

    /// Run the API server
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Directory holding the project collection
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Open the service banner in a browser
        #[arg(long)]
        open: bool,
    },

    /// Export a project's static bundle from the local store
    Export {
        /// Project id to export
        id: String,

        /// Output directory, or zip path with --zip
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write a zip archive instead of a directory
        #[arg(long)]
        zip: bool,

        /// Minify the exported stylesheet
        #[arg(long, conflicts_with = "no_minify")]
        minify: bool,

        /// Skip stylesheet minification
        #[arg(long)]
        no_minify: bool,
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

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(yes).await?;
        }
        Commands::Serve {
            port,
            host,
            data_dir,
            open,
        } => {
            commands::serve::run(port, host, data_dir, open).await?;
        }
        Commands::Export {
            id,
            output,
            zip,
            minify,
            no_minify,
        } => {
            let minify = if minify {
                Some(true)
            } else if no_minify {
                Some(false)
            } else {
                None
            };
            commands::export::run(&id, output, zip, minify).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_minify_flag_enables_minification() {
        let cli = Cli::try_parse_from(["vitrine", "export", "abc-123", "--minify"]).unwrap();

        match cli.command {
            Commands::Export { minify, no_minify, .. } => {
                assert!(minify);
                assert!(!no_minify);
            }
            _ => panic!("expected export command"),
        }
    }

    #[test]
    fn minify_flags_conflict() {
        let result =
            Cli::try_parse_from(["vitrine", "export", "abc-123", "--minify", "--no-minify"]);

        assert!(result.is_err());
    }

    #[test]
    fn serve_accepts_data_dir_override() {
        let cli = Cli::try_parse_from(["vitrine", "serve", "--data-dir", "elsewhere"]).unwrap();

        match cli.command {
            Commands::Serve { data_dir, .. } => {
                assert_eq!(data_dir, Some(PathBuf::from("elsewhere")));
            }
            _ => panic!("expected serve command"),
        }
    }
}
