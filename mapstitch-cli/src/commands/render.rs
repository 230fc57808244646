//! `mapstitch render`: composite overworld maps into one PNG.

use std::fmt;
use std::path::PathBuf;

use clap::Args;
use mapstitch::canvas::Canvas;
use mapstitch::compositor::{composite, union_region};
use mapstitch::config::ConfigFile;
use mapstitch::loader::load_tiles;
use mapstitch::output::write_png;
use tracing::{debug, info, warn};

use super::collect_inputs;
use crate::error::CliError;

/// Arguments for the render command.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Map files, or directories of map files (not searched recursively)
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Output PNG path (defaults to output.path from config.ini)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Abort on the first map file that fails to load
    #[arg(long)]
    pub strict: bool,
}

/// What a render did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub drawn: usize,
    pub skipped: usize,
    pub other_dimension: usize,
}

impl fmt::Display for RenderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wrote {} ({}x{}) from {} maps; {} unreadable, {} from other dimensions",
            self.output.display(),
            self.width,
            self.height,
            self.drawn,
            self.skipped,
            self.other_dimension
        )
    }
}

/// Run the render command and print its summary.
pub fn run(args: RenderArgs, config: &ConfigFile) -> Result<(), CliError> {
    let summary = render(&args, config)?;
    println!("{}", summary);
    Ok(())
}

/// Load, filter, composite and write.
pub fn render(args: &RenderArgs, config: &ConfigFile) -> Result<RenderSummary, CliError> {
    let strict = args.strict || config.input.strict;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| config.output.path.clone());

    let files = collect_inputs(&args.paths)?;
    info!(files = files.len(), "Loading maps");

    let mut tiles = Vec::with_capacity(files.len());
    let mut skipped = 0;
    let mut other_dimension = 0;

    for (path, result) in load_tiles(&files) {
        match result {
            Ok(tile) if tile.dimension().is_primary() => tiles.push(tile),
            Ok(tile) => {
                debug!(
                    path = %path.display(),
                    dimension = %tile.dimension(),
                    "Ignoring map from another dimension"
                );
                other_dimension += 1;
            }
            Err(e) if strict => return Err(e.into()),
            Err(e) => {
                warn!(error = %e, "Skipping unreadable map");
                skipped += 1;
            }
        }
    }

    if tiles.is_empty() {
        return Err(CliError::NoTiles);
    }

    let region = union_region(&tiles);
    let max = config.output.max_pixels;
    if !Canvas::fits(region, max) {
        return Err(CliError::CanvasTooLarge {
            width: region.width(),
            height: region.height(),
            max,
        });
    }

    debug!(region = %region, tiles = tiles.len(), "Compositing");
    let canvas = composite(&tiles);
    write_png(&canvas, &output)?;

    Ok(RenderSummary {
        output,
        width: canvas.width(),
        height: canvas.height(),
        drawn: tiles.len(),
        skipped,
        other_dimension,
    })
}
