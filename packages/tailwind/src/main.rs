use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use sudoku_form_tailwind::TailwindConfig;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "TAILWIND_CONFIG_LOG";

/// Render and inspect the generator page's tailwind config.
#[derive(Parser)]
#[clap(name = "tailwind-config", version)]
struct Cli {
    #[clap(subcommand)]
    action: Commands,

    /// TOML file with a `[tailwind]` table. The built-in config is used when absent.
    #[clap(long, short, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging.
    #[clap(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print tailwind.config.js, or write it into a directory.
    Render {
        /// Directory to write tailwind.config.js into.
        #[clap(long)]
        out: Option<PathBuf>,
    },

    /// Report whether tailwind scans each path, relative to the web root.
    Check {
        #[clap(required = true)]
        paths: Vec<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match std::env::var(LOG_ENV) {
        Ok(_) => EnvFilter::from_env(LOG_ENV),
        Err(_) if cli.verbose => EnvFilter::new("debug"),
        Err(_) => EnvFilter::new("warn"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => TailwindConfig::load(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => TailwindConfig::default(),
    };

    match cli.action {
        Commands::Render { out: Some(dir) } => {
            let path = config.write_to(&dir)?;
            println!("{}", path.display());
        }
        Commands::Render { out: None } => print!("{}", config.render_js()),
        Commands::Check { paths } => {
            let matcher = config.matcher()?;
            for path in paths {
                let matching = matcher.matching(&path);
                if matching.is_empty() {
                    println!("ignored  {}", path.display());
                } else {
                    println!("scanned  {}  ({})", path.display(), matching.join(", "));
                }
            }
        }
    }

    Ok(())
}
