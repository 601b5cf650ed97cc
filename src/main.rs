mod app;
mod cache;
mod catalog;
mod error;
mod infra;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;

use catalog::models::ImageRecord;
use error::Result;
use infra::config::{AppConfig, CatalogKind};

/// Click-to-enlarge image gallery with a dark/light theme.
#[derive(Parser, Debug)]
#[command(name = "os-logos-gallery", version, about)]
struct Cli {
    /// Config file (defaults to <config dir>/os-logos-gallery/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Load the catalog from a JSON array of {id, url, title}
    #[arg(long, value_name = "FILE", conflicts_with = "catalog_dir")]
    catalog_json: Option<PathBuf>,

    /// Build the catalog from the images in a folder
    #[arg(long, value_name = "DIR")]
    catalog_dir: Option<PathBuf>,

    /// Start in light mode
    #[arg(long)]
    light: bool,

    /// Simulated catalog latency
    #[arg(long, value_name = "MS")]
    load_delay_ms: Option<u64>,

    /// Verbose logging (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Open the gallery window (default)
    Ui,
    /// Print the catalog as id, title, url
    List,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    infra::logging::init_logging(cli.verbose);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(error) => {
            error!(error = %error, "failed to load config");
            eprintln!("failed to load config: {error}");
            return ExitCode::from(1);
        }
    };

    match run(cli.command.unwrap_or(Command::Ui), &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!(error = %error, "os-logos-gallery failed");
            eprintln!("{error}");
            ExitCode::from(1)
        }
    }
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    apply_overrides(&mut config, cli);
    Ok(config)
}

fn apply_overrides(config: &mut AppConfig, cli: &Cli) {
    if let Some(path) = &cli.catalog_json {
        config.catalog.source = CatalogKind::Json;
        config.catalog.path = Some(path.clone());
    }
    if let Some(path) = &cli.catalog_dir {
        config.catalog.source = CatalogKind::Directory;
        config.catalog.path = Some(path.clone());
    }
    if cli.light {
        config.gallery.dark_mode = false;
    }
    if let Some(delay) = cli.load_delay_ms {
        config.gallery.load_delay_ms = delay;
    }
}

fn run(command: Command, config: &AppConfig) -> Result<()> {
    let source = config.catalog.build_source()?;
    match command {
        Command::Ui => ui::app_shell::launch_window(config, source),
        Command::List => {
            let images = source.load()?;
            if images.is_empty() {
                println!("no images in catalog");
                return Ok(());
            }
            for image in &images {
                println!("{}", present_image_row(image));
            }
            Ok(())
        }
    }
}

fn present_image_row(image: &ImageRecord) -> String {
    format!("{}\t{}\t{}", image.id.get(), image.title, image.url)
}
