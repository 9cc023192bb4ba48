//! Command-line front end for creating, editing and checking map files
//!
//! Each editing command loads a map, applies one or more `EditorCommand`s
//! through an `EditorSession` and writes the result back. The file is only
//! rewritten after every command succeeded.

use crate::editor::session::{EditorCommand, EditorSession};
use crate::io::configuration::{DEFAULT_HEIGHT, DEFAULT_TILE_SCALE, DEFAULT_WIDTH, PREVIEW_SUFFIX};
use crate::io::error::{MapError, Result, invalid_parameter};
use crate::io::file::{collect_map_files, export_path, is_map_file, load_map, save_map};
use crate::io::image::render_png;
use crate::io::progress::ProgressManager;
use crate::map::tile::TileType;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Cell coordinates parsed from an `X,Y` argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellArg {
    /// Column
    pub x: usize,
    /// Row
    pub y: usize,
}

impl FromStr for CellArg {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        let (x, y) = value
            .split_once(',')
            .ok_or_else(|| "expected format X,Y".to_string())?;

        let x = x
            .trim()
            .parse::<usize>()
            .map_err(|error| format!("invalid x: {error}"))?;
        let y = y
            .trim()
            .parse::<usize>()
            .map_err(|error| format!("invalid y: {error}"))?;

        Ok(Self { x, y })
    }
}

#[derive(Parser)]
#[command(name = "tilemap")]
#[command(author, version, about = "Create, edit and validate 2D tile map files")]
/// Command-line arguments for the map tool
pub struct Cli {
    /// Suppress progress and status output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Operations supported by the map tool
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create a new all-grass map file
    New {
        /// Map file to create, or a directory to create `<name>.map` in
        file: PathBuf,
        /// Grid width in tiles
        #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
        width: usize,
        /// Grid height in tiles
        #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
        height: usize,
        /// Map display name
        #[arg(short, long, default_value = "")]
        name: String,
        /// Surround the map with walls
        #[arg(short, long)]
        border: bool,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
    /// Paint one or more cells with a tile
    Paint {
        /// Map file to edit
        file: PathBuf,
        /// Tile to paint (grass, wall, water or 0-2)
        #[arg(short, long)]
        tile: TileType,
        /// Cells to paint
        #[arg(value_name = "X,Y", required = true)]
        cells: Vec<CellArg>,
    },
    /// Move the spawn point
    Spawn {
        /// Map file to edit
        file: PathBuf,
        /// New spawn cell
        #[arg(value_name = "X,Y")]
        cell: CellArg,
    },
    /// Surround the map with walls
    Border {
        /// Map file to edit
        file: PathBuf,
    },
    /// Reset every tile to grass
    Clear {
        /// Map file to edit
        file: PathBuf,
    },
    /// Rebuild the map at a new size, discarding all tiles
    Resize {
        /// Map file to edit
        file: PathBuf,
        /// New width in tiles
        #[arg(short = 'w', long)]
        width: usize,
        /// New height in tiles
        #[arg(short = 'H', long)]
        height: usize,
    },
    /// Change the map display name
    Rename {
        /// Map file to edit
        file: PathBuf,
        /// New display name
        name: String,
    },
    /// Print the encoded map
    Show {
        /// Map file to print
        file: PathBuf,
    },
    /// Validate a map file or every map in a directory
    Check {
        /// Map file or directory
        #[arg(value_name = "TARGET")]
        target: PathBuf,
    },
    /// Write a PNG preview beside a map file or every map in a directory
    Render {
        /// Map file or directory
        #[arg(value_name = "TARGET")]
        target: PathBuf,
        /// Pixels per tile edge
        #[arg(short, long, default_value_t = DEFAULT_TILE_SCALE)]
        scale: u32,
        /// Render even if the preview exists
        #[arg(short, long)]
        no_skip: bool,
    },
}

impl Cli {
    /// Check if progress and status lines should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Executes one parsed command against the file system
pub struct MapProcessor {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl MapProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run the parsed command
    ///
    /// # Errors
    ///
    /// Returns an error if the target cannot be loaded, a command is rejected
    /// by the model, or output cannot be written. `check` reports every
    /// invalid file and then fails if any were found.
    pub fn process(&mut self) -> Result<()> {
        match self.cli.command.clone() {
            Command::New {
                file,
                width,
                height,
                name,
                border,
                force,
            } => Self::create_file(&file, width, height, name, border, force),
            Command::Paint { file, tile, cells } => Self::edit_file(
                &file,
                cells.into_iter().map(|cell| EditorCommand::Paint {
                    x: cell.x,
                    y: cell.y,
                    tile,
                }),
            ),
            Command::Spawn { file, cell } => Self::edit_file(
                &file,
                [EditorCommand::SetSpawn {
                    x: cell.x,
                    y: cell.y,
                }],
            ),
            Command::Border { file } => Self::edit_file(&file, [EditorCommand::AddBorder]),
            Command::Clear { file } => Self::edit_file(&file, [EditorCommand::Clear]),
            Command::Resize {
                file,
                width,
                height,
            } => Self::edit_file(&file, [EditorCommand::Resize { width, height }]),
            Command::Rename { file, name } => {
                Self::edit_file(&file, [EditorCommand::Rename(name)])
            }
            Command::Show { file } => Self::show_file(&file),
            Command::Check { target } => self.check_target(&target),
            Command::Render {
                target,
                scale,
                no_skip,
            } => self.render_target(&target, scale, !no_skip),
        }
    }

    fn create_file(
        path: &Path,
        width: usize,
        height: usize,
        name: String,
        border: bool,
        force: bool,
    ) -> Result<()> {
        let mut session = EditorSession::with_size(width, height)?;
        session.apply(EditorCommand::Rename(name))?;
        if border {
            session.apply(EditorCommand::AddBorder)?;
        }
        let model = session.into_model();

        let path = if path.is_dir() {
            export_path(path, &model)
        } else {
            path.to_path_buf()
        };

        if !is_map_file(&path) {
            return Err(MapError::UnsupportedFile { path });
        }
        if path.exists() && !force {
            return Err(invalid_parameter(
                "file",
                &path.display(),
                &"already exists (use --force to overwrite)",
            ));
        }

        save_map(&path, &model)
    }

    /// Load, apply every command, then save; nothing is written on failure
    fn edit_file(path: &Path, commands: impl IntoIterator<Item = EditorCommand>) -> Result<()> {
        let mut session = EditorSession::from_model(load_map(path)?);
        session.apply_all(commands)?;
        save_map(path, session.model())
    }

    // Allow print for the encoded map, which is the command's output
    #[allow(clippy::print_stdout)]
    fn show_file(path: &Path) -> Result<()> {
        let session = EditorSession::from_model(load_map(path)?);
        print!("{}", session.export_text());
        Ok(())
    }

    fn collect_targets(target: &Path) -> Result<Vec<PathBuf>> {
        if target.is_file() {
            if is_map_file(target) {
                Ok(vec![target.to_path_buf()])
            } else {
                Err(MapError::UnsupportedFile {
                    path: target.to_path_buf(),
                })
            }
        } else if target.is_dir() {
            collect_map_files(target)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be a map file or directory",
            ))
        }
    }

    // Allow print for user feedback on per-file results
    #[allow(clippy::print_stderr)]
    fn report(&self, message: &str) {
        if self.cli.quiet {
            return;
        }
        self.progress_manager.suspend(|| eprintln!("{message}"));
    }

    fn check_target(&mut self, target: &Path) -> Result<()> {
        let files = Self::collect_targets(target)?;
        self.progress_manager.initialize(files.len());

        for file in &files {
            self.progress_manager.start_file(file);

            let outcome = load_map(file);
            if let Err(ref error) = outcome {
                self.report(&format!("{}: {error}", file.display()));
            }

            self.progress_manager.complete_file(outcome.is_ok());
        }

        self.progress_manager.finish();

        match self.progress_manager.failed() {
            0 => Ok(()),
            failed => Err(invalid_parameter(
                "target",
                &target.display(),
                &format!("{failed} of {} maps failed validation", files.len()),
            )),
        }
    }

    fn render_target(&mut self, target: &Path, scale: u32, skip_existing: bool) -> Result<()> {
        let files = Self::collect_targets(target)?;

        let pending: Vec<PathBuf> = files
            .into_iter()
            .filter(|file| {
                let keep = !skip_existing || !Self::get_preview_path(file).exists();
                if !keep {
                    self.report(&format!("Skipping: {} (preview exists)", file.display()));
                }
                keep
            })
            .collect();

        self.progress_manager.initialize(pending.len());

        for file in &pending {
            self.progress_manager.start_file(file);

            let model = load_map(file)?;
            render_png(&model, scale, &Self::get_preview_path(file))?;

            self.progress_manager.complete_file(true);
        }

        self.progress_manager.finish();

        Ok(())
    }

    /// Preview image path for a map: `<stem>_<ext>_preview.png` beside it
    ///
    /// The extension is part of the name so `cave.map` and `cave.txt` in one
    /// directory get separate previews.
    pub fn get_preview_path(map_path: &Path) -> PathBuf {
        let stem = map_path.file_stem().unwrap_or_default().to_string_lossy();
        let preview_name = match map_path.extension() {
            Some(ext) => format!("{stem}_{}{PREVIEW_SUFFIX}.png", ext.to_string_lossy()),
            None => format!("{stem}{PREVIEW_SUFFIX}.png"),
        };

        if let Some(parent) = map_path.parent() {
            parent.join(preview_name)
        } else {
            PathBuf::from(preview_name)
        }
    }
}
