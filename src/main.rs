use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use perfkit::config;

#[derive(Parser)]
#[command(name = "perfkit")]
#[command(about = "Inspect the upscaling configuration", long_about = None)]
struct Cli {
    /// Configuration file (defaults to the platform config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the configuration and log the effective settings (default)
    Show,
    /// Fail if the configuration file is missing or malformed
    Check,
    /// Print the effective settings as YAML
    Dump,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    perfkit::logging::init(cli.verbose);

    let path = cli.config.unwrap_or_else(config::default_config_path);

    match cli.command {
        None | Some(Commands::Show) => {
            config::load_config(&path);
            config::print_current_config();
        }
        Some(Commands::Check) => {
            let settings = config::try_load(&path)
                .with_context(|| format!("Invalid configuration: {}", path.display()))?;
            config::global().replace(settings);
            tracing::info!("Configuration {} is valid", path.display());
            config::print_current_config();
        }
        Some(Commands::Dump) => {
            config::load_config(&path);
            let yaml = serde_yaml::to_string(&config::settings())
                .context("Failed to serialize settings")?;
            print!("{yaml}");
        }
    }

    Ok(())
}
