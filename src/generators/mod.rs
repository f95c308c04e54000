pub mod crawler;
pub mod prim;
pub mod random;
pub mod recursive;
pub mod wilsons;

use crate::config::GenerationConfig;
use crate::grids::block_grid::BlockGrid;
use crate::rng::MazeRng;

use crawler::Crawler;
use prim::RandPrims;
use random::RandomFill;
use recursive::RecursiveBacktracker;
use wilsons::Wilsons;

/// Iteration cap for the strategies that can stall on degenerate grids.
pub const WATCHDOG_LIMIT: usize = 5000;

/// Bookkeeping from one strategy run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Outer iterations consumed: crawls, visits, walk passes or frontier pops.
    pub iterations: usize,
    /// Wilson's walks erased after failing to reach the tree.
    pub aborted: usize,
    /// Set when a watchdog stopped the run before it finished on its own.
    pub capped: bool,
}

pub trait Generator {
    /// Carves paths into `grid`, which arrives with every cell a wall.
    fn generate_maze(&mut self, grid: &mut BlockGrid, rng: &mut MazeRng) -> GenerationStats;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratorKind {
    Random,
    Crawler,
    Recursive,
    Wilsons,
    Prims,
}

impl GeneratorKind {
    pub const ALL: [GeneratorKind; 5] = [
        GeneratorKind::Random,
        GeneratorKind::Crawler,
        GeneratorKind::Recursive,
        GeneratorKind::Wilsons,
        GeneratorKind::Prims,
    ];

    /// Maps the numeric selector (0-4). Anything else falls back to `Random`.
    pub fn from_selector(selector: u8) -> Self {
        match selector {
            0 => GeneratorKind::Random,
            1 => GeneratorKind::Crawler,
            2 => GeneratorKind::Recursive,
            3 => GeneratorKind::Wilsons,
            4 => GeneratorKind::Prims,
            other => {
                log::warn!("unknown generator selector {}, using random fill", other);
                GeneratorKind::Random
            }
        }
    }

    pub fn selector(self) -> u8 {
        match self {
            GeneratorKind::Random => 0,
            GeneratorKind::Crawler => 1,
            GeneratorKind::Recursive => 2,
            GeneratorKind::Wilsons => 3,
            GeneratorKind::Prims => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GeneratorKind::Random => "random",
            GeneratorKind::Crawler => "crawler",
            GeneratorKind::Recursive => "recursive",
            GeneratorKind::Wilsons => "wilsons",
            GeneratorKind::Prims => "prims",
        }
    }
}

impl Default for GeneratorKind {
    fn default() -> Self {
        GeneratorKind::Random
    }
}

impl std::fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for GeneratorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_ascii_lowercase();
        GeneratorKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| {
                format!(
                    "unknown algorithm '{}', expected one of: random, crawler, recursive, wilsons, prims",
                    s
                )
            })
    }
}

pub fn new_generator(generator_kind: GeneratorKind, config: &GenerationConfig) -> Box<dyn Generator> {
    match generator_kind {
        GeneratorKind::Random => Box::new(RandomFill),
        GeneratorKind::Crawler => Box::new(Crawler::new(
            config.vertical_crawl_count,
            config.horizontal_crawl_count,
        )),
        GeneratorKind::Recursive => Box::new(RecursiveBacktracker),
        GeneratorKind::Wilsons => Box::new(Wilsons::new()),
        GeneratorKind::Prims => Box::new(RandPrims::new()),
    }
}
