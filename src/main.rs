//! Command line entry point for retrieving GFS files from NOMADS.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use nomads::{Downloader, RequestConfig, Service};

#[derive(Parser)]
#[command(
    name = "nomads",
    version,
    about = "Download GFS GRIB2 files through NOAA's NOMADS filter service"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Retrieve the files described by a request configuration
    Get {
        /// Path to the request configuration file
        config_file: PathBuf,

        /// Directory downloaded files are written to
        #[arg(short = 'o', long)]
        output_folder: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Get {
            config_file,
            output_folder,
        } => get(&config_file, output_folder),
    }
}

fn get(config_file: &Path, output_folder: Option<PathBuf>) -> anyhow::Result<()> {
    let config = RequestConfig::load(config_file)
        .with_context(|| format!("failed to load configuration {}", config_file.display()))?;

    let output_folder = config.output_folder(output_folder);
    let params = config.to_params()?;

    let service = Service::new(params)?;
    let downloader = Downloader::new(output_folder)?;
    service.get_files(&downloader)?;
    Ok(())
}
