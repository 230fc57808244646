//! mapstitch CLI - Command-line interface
//!
//! Stitches Minecraft map items into a single PNG, finest detail on top.

mod commands;
mod error;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use mapstitch::config::ConfigFile;
use mapstitch::logging::init_logging;
use tracing::debug;

use commands::inspect::InspectArgs;
use commands::render::RenderArgs;
use error::CliError;

#[derive(Debug, Parser)]
#[command(name = "mapstitch")]
#[command(version, about = "Stitch Minecraft map items into a single PNG", long_about = None)]
struct Cli {
    /// Configuration file (defaults to <config dir>/mapstitch/config.ini)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Composite overworld maps into a PNG, finer scales drawn over coarser
    Render(RenderArgs),

    /// Print scale, dimension, center and covered region of each map
    Inspect(InspectArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => ConfigFile::load_from(path)?,
        None => ConfigFile::load()?,
    };

    let _guard = init_logging(&config.logging, cli.verbose)?;
    debug!(?config, "Loaded configuration");

    match cli.command {
        Commands::Render(args) => commands::render::run(args, &config),
        Commands::Inspect(args) => commands::inspect::run(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from([
            "mapstitch",
            "-v",
            "render",
            "-o",
            "world.png",
            "--strict",
            "data",
            "map_7.dat",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Render(args) => {
                assert_eq!(args.output, Some(PathBuf::from("world.png")));
                assert!(args.strict);
                assert_eq!(
                    args.paths,
                    vec![PathBuf::from("data"), PathBuf::from("map_7.dat")]
                );
            }
            other => panic!("expected render, got {:?}", other),
        }
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli =
            Cli::try_parse_from(["mapstitch", "inspect", "--config", "my.ini", "map_0.dat"])
                .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("my.ini")));
        assert!(matches!(cli.command, Commands::Inspect(_)));
    }

    #[test]
    fn test_render_requires_paths() {
        assert!(Cli::try_parse_from(["mapstitch", "render"]).is_err());
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["mapstitch"]).is_err());
    }
}
