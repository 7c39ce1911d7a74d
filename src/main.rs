use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use weekmenu::cli::{Filters, OutputFormat};
use weekmenu_shared::user::Preferences;

/// weekmenu - Monday to Friday menu planner
#[derive(Parser)]
#[command(name = "weekmenu")]
#[command(about = "Plan a Monday to Friday menu from a dish catalog", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Dish catalog (JSON or TOML), overrides the config file
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a menu for the week
    Generate {
        #[command(flatten)]
        filters: Filters,

        /// Seed for a reproducible menu (overrides config file)
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show how many dishes are left per category with the given filters
    Catalog {
        #[command(flatten)]
        filters: Filters,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = weekmenu::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    weekmenu::observability::init_observability(
        "weekmenu",
        env!("CARGO_PKG_VERSION"),
        &config.logging.level,
        &config.logging.format,
    )?;

    let catalog = weekmenu::load_catalog(&config, cli.catalog);
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Generate {
            filters,
            seed,
            format,
        } => {
            let preferences = Preferences::from(filters);
            let seed = seed.or(config.planner.seed);
            let planned =
                weekmenu::cli::generate(&catalog, &preferences, seed, format, &mut stdout)?;

            if planned {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Catalog { filters } => {
            weekmenu::cli::summary(&catalog, &filters.into(), &mut stdout)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
