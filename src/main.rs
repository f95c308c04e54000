use clap::Parser;

use maze_carver::{GenerationConfig, GeneratorKind, MazeSession, TextRenderer};

/// Generate a maze and draw it to the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Grid width in cells, border excluded
    #[arg(long, default_value_t = 30)]
    width: usize,

    /// Grid height in cells, border excluded
    #[arg(long, default_value_t = 30)]
    height: usize,

    /// random, crawler, recursive, wilsons or prims
    #[arg(long, conflicts_with = "selector")]
    algorithm: Option<GeneratorKind>,

    /// Numeric algorithm selector: 0-Random, 1-Crawler, 2-Recursive, 3-Wilsons, 4-Prims
    #[arg(long)]
    selector: Option<u8>,

    /// Random seed; a fresh one is drawn when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the wall ring drawn around the maze
    #[arg(long)]
    no_border: bool,

    #[arg(long, default_value_t = 5)]
    vertical_crawls: u32,

    #[arg(long, default_value_t = 5)]
    horizontal_crawls: u32,

    /// Rectangular rooms stamped over the maze
    #[arg(long, default_value_t = 0)]
    rooms: u32,

    #[arg(long, default_value_t = 0)]
    min_room_size: usize,

    #[arg(long, default_value_t = 0)]
    max_room_size: usize,

    /// Cells kept between rooms and the grid edge
    #[arg(long, default_value_t = 0)]
    room_distance: usize,

    #[arg(long, default_value_t = '#')]
    wall: char,

    #[arg(long, default_value_t = ' ')]
    open: char,

    /// Draw this many mazes in a row, each replacing the last
    #[arg(long, default_value_t = 1)]
    regenerate: u32,
}

impl Args {
    fn generator_kind(&self) -> GeneratorKind {
        match (self.algorithm, self.selector) {
            (Some(kind), _) => kind,
            (None, Some(selector)) => GeneratorKind::from_selector(selector),
            (None, None) => GeneratorKind::default(),
        }
    }

    fn config(&self) -> GenerationConfig {
        GenerationConfig {
            width: self.width,
            height: self.height,
            has_border: !self.no_border,
            generator_kind: self.generator_kind(),
            vertical_crawl_count: self.vertical_crawls,
            horizontal_crawl_count: self.horizontal_crawls,
            number_of_rooms: self.rooms,
            min_room_size: self.min_room_size,
            max_room_size: self.max_room_size,
            room_distance_from_wall: self.room_distance,
            seed: self.seed,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut session = MazeSession::new(args.config(), TextRenderer::new(args.wall, args.open));

    for run in 0..args.regenerate.max(1) {
        let maze = session.regenerate()?;
        let seed = maze.seed();
        let stats = maze.stats();

        if run > 0 {
            println!();
        }
        print!("{}", session.renderer());
        eprintln!(
            "{} seed={} iterations={} capped={}",
            session.config().generator_kind,
            seed,
            stats.iterations,
            stats.capped
        );

        // replays of a fixed seed would just redraw the same maze
        if let Some(seed) = session.config().seed {
            session.config_mut().seed = Some(seed.wrapping_add(1));
        }
    }

    Ok(())
}
