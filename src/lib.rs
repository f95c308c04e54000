//! Procedural maze and dungeon layouts on a fixed-size wall/open grid.
//!
//! A run picks one of five generation strategies, lets it carve paths into an all-wall grid,
//! optionally stamps rectangular rooms on top, and hands back a [`Maze`] for a renderer.
//!
//! ```
//! use maze_carver::{generate, GenerationConfig, GeneratorKind};
//!
//! let config = GenerationConfig::with_dims(10, 10)
//!     .generator(GeneratorKind::Prims)
//!     .seed(7);
//! let maze = generate(&config).unwrap();
//! assert_eq!((maze.width(), maze.height()), (10, 10));
//! ```

pub mod config;
pub mod error;
pub mod generators;
pub mod grids;
pub mod maze;
pub mod rng;
pub mod rooms;

pub use config::GenerationConfig;
pub use error::ConfigError;
pub use generators::{new_generator, GenerationStats, Generator, GeneratorKind};
pub use grids::CellKind;
pub use maze::{Maze, MazeSession, Renderer, TextRenderer};
pub use rng::MazeRng;

use grids::block_grid::BlockGrid;
use rooms::RoomCarver;

/// Runs one generation with the configured seed, or a fresh one if none is set.
pub fn generate(config: &GenerationConfig) -> Result<Maze, ConfigError> {
    let mut rng = match config.seed {
        Some(seed) => MazeRng::new(seed),
        None => MazeRng::from_entropy(),
    };
    generate_with_rng(config, &mut rng)
}

/// Runs one generation drawing from `rng`. Ignores `config.seed`.
pub fn generate_with_rng(config: &GenerationConfig, rng: &mut MazeRng) -> Result<Maze, ConfigError> {
    config.validate()?;
    log::debug!(
        "generating {}x{} maze with {} (seed {})",
        config.width,
        config.height,
        config.generator_kind,
        rng.seed()
    );

    let mut grid = BlockGrid::walled(config.width, config.height);
    let stats = new_generator(config.generator_kind, config).generate_maze(&mut grid, rng);
    RoomCarver::from_config(config).carve(&mut grid, rng);

    Ok(Maze::new(grid, config.has_border, rng.seed(), stats))
}
