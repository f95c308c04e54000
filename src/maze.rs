//! Finished mazes and the contract with whatever draws them.

use crate::config::GenerationConfig;
use crate::error::ConfigError;
use crate::generators::GenerationStats;
use crate::grids::block_grid::BlockGrid;
use crate::grids::CellKind;

/// Read-only result of one generation run. Never contains the border ring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: BlockGrid,
    has_border: bool,
    seed: u64,
    stats: GenerationStats,
}

impl Maze {
    pub(crate) fn new(grid: BlockGrid, has_border: bool, seed: u64, stats: GenerationStats) -> Self {
        Self {
            grid,
            has_border,
            seed,
            stats,
        }
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn has_border(&self) -> bool {
        self.has_border
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn stats(&self) -> GenerationStats {
        self.stats
    }

    pub fn grid(&self) -> &BlockGrid {
        &self.grid
    }

    pub fn cell(&self, x: usize, y: usize) -> CellKind {
        self.grid.get_cell(x, y)
    }

    pub fn is_wall(&self, x: usize, y: usize) -> bool {
        self.cell(x, y) == CellKind::Wall
    }

    pub fn open_cell_count(&self) -> usize {
        self.grid.open_cell_count()
    }

    /// Row-major snapshot, `1` for walls and `0` for open cells.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.grid.cells.iter().map(|kind| u8::from(*kind)).collect()
    }

    /// Tile count along x as the renderer lays it out, ring included.
    pub fn render_width(&self) -> usize {
        self.width() + self.ring()
    }

    pub fn render_height(&self) -> usize {
        self.height() + self.ring()
    }

    fn ring(&self) -> usize {
        if self.has_border {
            2
        } else {
            0
        }
    }

    /// Wall test in render coordinates: with a border, the ring is always wall and the grid
    /// sits one tile in.
    pub fn bordered_wall(&self, x: usize, y: usize) -> bool {
        if !self.has_border {
            return self.is_wall(x, y);
        }
        if x == 0 || y == 0 || x > self.width() || y > self.height() {
            return true;
        }
        self.is_wall(x - 1, y - 1)
    }
}

/// Downstream consumer of finished mazes.
pub trait Renderer {
    /// Throws away everything drawn for the previous maze.
    fn clear(&mut self);
    fn draw(&mut self, maze: &Maze);
}

/// Renders a maze as one line of characters per row.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    pub wall: char,
    pub open: char,
    lines: Vec<String>,
}

impl TextRenderer {
    pub fn new(wall: char, open: char) -> Self {
        Self {
            wall,
            open,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new('#', ' ')
    }
}

impl Renderer for TextRenderer {
    fn clear(&mut self) {
        self.lines.clear();
    }

    fn draw(&mut self, maze: &Maze) {
        for y in 0..maze.render_height() {
            let line: String = (0..maze.render_width())
                .map(|x| {
                    if maze.bordered_wall(x, y) {
                        self.wall
                    } else {
                        self.open
                    }
                })
                .collect();
            self.lines.push(line);
        }
    }
}

impl std::fmt::Display for TextRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in self.lines.iter() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Keeps one maze on screen at a time; every regeneration fully replaces the last.
pub struct MazeSession<R: Renderer> {
    config: GenerationConfig,
    renderer: R,
    maze: Option<Maze>,
}

impl<R: Renderer> MazeSession<R> {
    pub fn new(config: GenerationConfig, renderer: R) -> Self {
        Self {
            config,
            renderer,
            maze: None,
        }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut GenerationConfig {
        &mut self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn maze(&self) -> Option<&Maze> {
        self.maze.as_ref()
    }

    pub fn regenerate(&mut self) -> Result<&Maze, ConfigError> {
        // reject before clearing so a bad config leaves the previous maze on screen
        self.config.validate()?;

        self.renderer.clear();
        self.maze = None;

        let maze = crate::generate(&self.config)?;
        self.renderer.draw(&maze);
        Ok(&*self.maze.get_or_insert(maze))
    }
}
