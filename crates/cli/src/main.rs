use anyhow::{anyhow, Context};
use config::{Config, Environment, File};
use hexgrid::{timed, Axial, Cube, CubeSet, GridConfig, HexGrid};
use log::{info, LevelFilter};
use serde::Serialize;
use serde_json::json;
use simple_logger::SimpleLogger;
use std::{
    path::{Path, PathBuf},
    process,
};
use structopt::StructOpt;

/// CLI for building hex grids and running spatial queries on them. All output
/// is printed to stdout as JSON.
///
/// Coordinates are given as `q,r` or `q,r,s`. Wrap coordinates with negative
/// components in parentheses, e.g. `(-1,2)`, so they aren't mistaken for
/// flags.
#[derive(Debug, StructOpt)]
#[structopt(name = "hexgrid")]
struct Opt {
    /// Path to a config file that defines the grid to be built. Supported
    /// formats: JSON, TOML. Any field can also be set with a `HEXGRID_`
    /// environment variable, e.g. `HEXGRID_WIDTH=20`. Missing fields use
    /// their defaults.
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,

    /// Mark a hex as an obstacle. Obstacles are skipped by range, line,
    /// reachable and path queries. Can be given multiple times.
    #[structopt(long, number_of_values = 1, allow_hyphen_values = true)]
    obstacle: Vec<Cube>,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Print the fully resolved grid config
    Config {
        /// Print the config as TOML, so it can be saved and loaded later with
        /// `--config`
        #[structopt(long)]
        toml: bool,
    },

    /// Print every hex in the grid
    Hexes {
        /// Print hexes in axial (q, r) form instead of cube form
        #[structopt(long)]
        axial: bool,
    },

    /// Find the hex under a pixel position
    Pick {
        #[structopt(long, allow_hyphen_values = true)]
        x: f64,
        #[structopt(long, allow_hyphen_values = true)]
        y: f64,
    },

    /// Get the pixel position of the center of a hex
    Pixel { cube: Cube },

    /// Get the six hexes around a hex, whether they exist in the grid or not
    Neighbors {
        cube: Cube,
        /// Get the hexes across each corner instead of each side
        #[structopt(long)]
        diagonal: bool,
    },

    /// Get the hexes exactly `radius` steps from a center hex
    Ring { center: Cube, radius: u32 },

    /// Draw a line between two hexes, keeping only open hexes
    Line { from: Cube, to: Cube },

    /// Get every open hex within `radius` steps of a center hex
    Range { center: Cube, radius: u32 },

    /// Get every hex that can be walked to within `range` steps, grouped by
    /// number of steps
    Reachable { start: Cube, range: u32 },

    /// Find the shortest walkable path between two hexes. The output is
    /// empty if there is no path.
    Path { start: Cube, target: Cube },
}

/// A cube coordinate with all three components spelled out
#[derive(Copy, Clone, Debug, Serialize)]
struct CubeOutput {
    q: i32,
    r: i32,
    s: i32,
}

impl From<Cube> for CubeOutput {
    fn from(cube: Cube) -> Self {
        Self {
            q: cube.q(),
            r: cube.r(),
            s: cube.s(),
        }
    }
}

fn cubes_output(cubes: impl IntoIterator<Item = Cube>) -> Vec<CubeOutput> {
    cubes.into_iter().map(CubeOutput::from).collect()
}

fn load_config(config_path: Option<&Path>) -> anyhow::Result<GridConfig> {
    let mut settings = Config::new();
    if let Some(config_path) = config_path {
        let config_path = config_path.to_str().ok_or_else(|| {
            anyhow!("invalid character in path {:?}", config_path)
        })?;
        settings
            .merge(File::with_name(config_path))
            .context("error reading config file")?;
    }
    settings
        .merge(Environment::with_prefix("HEXGRID"))
        .context("error reading config from environment")?;
    settings.try_into().context("error reading config")
}

/// Run a single query against the grid and produce its serialized output
fn execute(
    command: Command,
    config: &GridConfig,
    grid: &HexGrid,
    obstacles: &CubeSet,
) -> anyhow::Result<String> {
    if let Command::Config { toml: true } = command {
        return toml::to_string_pretty(config)
            .context("error serializing config");
    }

    // Hexes that exist and aren't blocked. Every walking query uses this.
    let is_open =
        |cube: Cube| grid.contains(cube) && !obstacles.contains(&cube);

    let output = match command {
        Command::Config { .. } => serde_json::to_value(config)?,
        Command::Hexes { axial: true } => serde_json::to_value(
            grid.hexes()
                .iter()
                .map(|&cube| Axial::from(cube))
                .collect::<Vec<_>>(),
        )?,
        Command::Hexes { axial: false } => {
            serde_json::to_value(cubes_output(grid.hexes().iter().copied()))?
        }
        Command::Pick { x, y } => {
            let cube = grid.pixel_to_cube(x, y, config.hex_size)?;
            json!({
                "hex": CubeOutput::from(cube),
                "occupied": grid.contains(cube),
                "obstacle": obstacles.contains(&cube),
            })
        }
        Command::Pixel { cube } => {
            let pixel = grid.cube_to_pixel(cube, config.hex_size)?;
            json!({ "x": pixel.x, "y": pixel.y })
        }
        Command::Neighbors {
            cube,
            diagonal: false,
        } => {
            serde_json::to_value(cubes_output(grid.neighbors(cube)?.to_vec()))?
        }
        Command::Neighbors {
            cube,
            diagonal: true,
        } => serde_json::to_value(cubes_output(
            grid.diagonal_neighbors(cube)?.to_vec(),
        ))?,
        Command::Ring { center, radius } => {
            serde_json::to_value(cubes_output(grid.ring(center, radius)?))?
        }
        Command::Line { from, to } => serde_json::to_value(cubes_output(
            from.line_to(to).into_iter().filter(|&cube| is_open(cube)),
        ))?,
        Command::Range { center, radius } => {
            let hexes = center.range(radius);
            serde_json::to_value(cubes_output(
                hexes.into_iter().filter(|&cube| is_open(cube)),
            ))?
        }
        Command::Reachable { start, range } => {
            let layers = if is_open(start) {
                grid.reachable(start, range, is_open)?
            } else {
                info!("Start hex {} is not open, nothing is reachable", start);
                Vec::new()
            };
            serde_json::to_value(
                layers.into_iter().map(cubes_output).collect::<Vec<_>>(),
            )?
        }
        Command::Path { start, target } => {
            let path = if is_open(start) {
                grid.shortest_path(start, target, is_open)?
            } else {
                info!("Start hex {} is not open, no path exists", start);
                Vec::new()
            };
            serde_json::to_value(cubes_output(path))?
        }
    };
    serde_json::to_string_pretty(&output).context("error serializing output")
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let config = load_config(opt.config.as_deref())?;
    let grid = timed!("Grid generation", log::Level::Info, {
        HexGrid::from_config(&config).context("error building grid")?
    });
    let obstacles: CubeSet = opt.obstacle.into_iter().collect();

    let output = execute(opt.command, &config, &grid, &obstacles)?;
    println!("{}", output);
    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
