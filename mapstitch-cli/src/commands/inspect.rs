//! `mapstitch inspect`: print what each map file contains.

use std::path::PathBuf;

use clap::Args;
use mapstitch::loader::load_tiles;
use mapstitch::map::Tile;

use super::collect_inputs;
use crate::error::CliError;

/// Arguments for the inspect command.
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Map files, or directories of map files (not searched recursively)
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

/// Print one line per map file. Fails if any file could not be read.
pub fn run(args: InspectArgs) -> Result<(), CliError> {
    let files = collect_inputs(&args.paths)?;
    let total = files.len();
    let mut failed = 0;

    for (path, result) in load_tiles(&files) {
        match result {
            Ok(tile) => println!("{}: {}", path.display(), describe(&tile)),
            Err(e) => {
                eprintln!("{}", e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(CliError::Unreadable { failed, total });
    }
    Ok(())
}

fn describe(tile: &Tile) -> String {
    let (x, z) = tile.center();
    format!(
        "scale {} ({} blocks/pixel), {}, center ({}, {}), covers {}",
        tile.scale(),
        1u32 << tile.scale(),
        tile.dimension(),
        x,
        z,
        tile.region()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::write_map;
    use mapstitch::loader::load_tile;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_describe() {
        let dir = TempDir::new().unwrap();
        let path = write_map(dir.path(), "map_0.dat", 2, -1, (192, -320), 4);
        let tile = load_tile(&path).unwrap();

        assert_eq!(
            describe(&tile),
            "scale 2 (4 blocks/pixel), nether, center (192, -320), covers (-64,-576)-(448,-64)"
        );
    }

    #[test]
    fn test_run_reports_unreadable_count() {
        let dir = TempDir::new().unwrap();
        write_map(dir.path(), "map_0.dat", 0, 0, (0, 0), 4);
        fs::write(dir.path().join("map_1.dat"), b"junk").unwrap();

        let err = run(InspectArgs {
            paths: vec![dir.path().to_path_buf()],
        })
        .unwrap_err();
        assert!(matches!(
            err,
            CliError::Unreadable {
                failed: 1,
                total: 2
            }
        ));
    }

    #[test]
    fn test_run_succeeds_on_valid_maps() {
        let dir = TempDir::new().unwrap();
        let path = write_map(dir.path(), "map_0.dat", 0, 0, (0, 0), 4);
        assert!(run(InspectArgs { paths: vec![path] }).is_ok());
    }
}
