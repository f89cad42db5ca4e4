//! Runs one of the bundled puzzle domains through a chosen algorithm and
//! prints a report: statistics table plus the solution path or grid.

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use waypoint::{
    error::{Result, SearchError},
    heuristics::standard_tile_registry,
    problems::{
        eight_puzzle::{EightPuzzle, TileState},
        river_crossing::{RiverCrossing, RiverState},
        sudoku::SudokuBoard,
        water_jugs::WaterJugs,
    },
    report::{render_path, render_stats_table},
    search::{
        best_first::{astar_problem, ucs_problem},
        bfs::bfs,
        ids::ids,
        problem::SearchProblem,
        stats::SearchOutcome,
    },
};

#[derive(Debug, Parser)]
#[command(name = "run_reports", about = "Run search reports on toy puzzle domains")]
struct Args {
    #[command(subcommand)]
    domain: Domain,
    /// Emit the statistics as JSON instead of a table.
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Debug, Subcommand)]
enum Domain {
    /// Wolf/goat/cabbage river crossing.
    River {
        /// Start state as 4 letters L/R (farmer, wolf, goat, cabbage),
        /// e.g. LLLL. Defaults to three example instances.
        #[arg(long)]
        start: Option<String>,
        #[arg(long, value_enum, default_value = "bfs")]
        algorithm: Algorithm,
    },
    /// Water jugs.
    Jugs {
        /// Comma-separated capacities, e.g. 3,5.
        #[arg(long)]
        capacities: Option<String>,
        /// Target volume any jug must reach.
        #[arg(long)]
        target: Option<u32>,
        #[arg(long, value_enum, default_value = "bfs")]
        algorithm: Algorithm,
    },
    /// 3x3 sliding-tile puzzle.
    Tiles {
        /// Start as a 9-digit row-major string, e.g. 123456780.
        /// Defaults to three shallow example instances.
        #[arg(long)]
        start: Option<String>,
        #[arg(long, value_enum, default_value = "astar")]
        algorithm: Algorithm,
        /// Heuristic name (h0, h1, h2, misplaced); unknown names fall back
        /// to Manhattan.
        #[arg(long, default_value = "h1")]
        heuristic: String,
    },
    /// 9x9 Sudoku as a CSP.
    Sudoku {
        /// Puzzle as an 81-character row-major string; 0 or . for empty.
        /// Defaults to a classic instance.
        #[arg(long)]
        puzzle: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Algorithm {
    Bfs,
    Ids,
    Ucs,
    Astar,
}

impl Algorithm {
    fn label(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Ids => "IDS",
            Algorithm::Ucs => "UCS",
            Algorithm::Astar => "A*",
        }
    }
}

const IDS_MAX_LIMIT: usize = 50;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    match args.domain {
        Domain::River { start, algorithm } => run_river(start, algorithm, args.json),
        Domain::Jugs {
            capacities,
            target,
            algorithm,
        } => run_jugs(capacities, target, algorithm, args.json),
        Domain::Tiles {
            start,
            algorithm,
            heuristic,
        } => run_tiles(start, algorithm, &heuristic, args.json),
        Domain::Sudoku { puzzle } => run_sudoku(puzzle.as_deref(), args.json),
    }
}

fn run_river(start: Option<String>, algorithm: Algorithm, json: bool) -> Result<()> {
    let starts = match start {
        Some(text) => vec![RiverState::parse(&text)?],
        None => vec![
            RiverState::parse("LLLL")?,
            RiverState::parse("RRRL")?,
            RiverState::parse("RLRL")?,
        ],
    };
    for start in starts {
        if !start.is_safe() {
            eprintln!("Skipping unsafe start state {start:?}");
            continue;
        }
        let problem = RiverCrossing::from_start(start);
        let outcome = run_uninformed(&problem, algorithm)?;
        print_report("river", algorithm.label(), &problem, &outcome, json);
    }
    Ok(())
}

fn run_jugs(
    capacities: Option<String>,
    target: Option<u32>,
    algorithm: Algorithm,
    json: bool,
) -> Result<()> {
    let instances: Vec<(Vec<u32>, u32)> = match (capacities, target) {
        (Some(caps), Some(target)) => vec![(parse_capacities(&caps)?, target)],
        _ => vec![
            (vec![3, 5], 4),
            (vec![8, 5, 3], 4),
            (vec![2, 4], 2),
        ],
    };
    for (capacities, target) in instances {
        let problem = WaterJugs::new(capacities, target)?;
        let outcome = run_uninformed(&problem, algorithm)?;
        print_report("jugs", algorithm.label(), &problem, &outcome, json);
    }
    Ok(())
}

fn run_tiles(
    start: Option<String>,
    algorithm: Algorithm,
    heuristic: &str,
    json: bool,
) -> Result<()> {
    // Shallow defaults so the uninformed algorithms finish quickly.
    let starts = match start {
        Some(text) => vec![TileState::parse(&text)?],
        None => vec![
            TileState::parse("123456780")?,
            TileState::parse("123456708")?,
            TileState::parse("123456078")?,
        ],
    };
    let registry = standard_tile_registry();
    for start in starts {
        let problem = EightPuzzle::new(start);
        let outcome = match algorithm {
            Algorithm::Astar => {
                let h = registry.get(heuristic);
                astar_problem(&problem, |s| h(s), heuristic)?
            }
            other => run_uninformed(&problem, other)?,
        };
        print_report("tiles", algorithm.label(), &problem, &outcome, json);
    }
    Ok(())
}

fn run_sudoku(puzzle: Option<&str>, json: bool) -> Result<()> {
    const DEFAULT: &str = "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    let board = SudokuBoard::parse_line(puzzle.unwrap_or(DEFAULT))?;
    let (solution, stats) = board.solve()?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).unwrap_or_default()
        );
    } else {
        println!(
            "Domain: sudoku | assignments tried: {} | backtracks: {}",
            stats.assignments_tried, stats.backtracks
        );
    }
    match solution {
        Some(assignment) => println!("{}", SudokuBoard::render(&assignment)),
        None => println!("No solution."),
    }
    Ok(())
}

fn run_uninformed<P: SearchProblem>(
    problem: &P,
    algorithm: Algorithm,
) -> Result<SearchOutcome<P::State, P::Action>> {
    match algorithm {
        Algorithm::Bfs => bfs(problem),
        Algorithm::Ids => ids(problem, IDS_MAX_LIMIT),
        // A* without a domain heuristic degenerates to uniform cost.
        Algorithm::Ucs | Algorithm::Astar => ucs_problem(problem),
    }
}

fn print_report<P>(
    domain: &str,
    algorithm: &str,
    problem: &P,
    outcome: &SearchOutcome<P::State, P::Action>,
    json: bool,
) where
    P: SearchProblem,
    P::Action: std::fmt::Display,
{
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&outcome.stats).unwrap_or_default()
        );
    } else {
        println!("{}", render_stats_table(domain, algorithm, &outcome.stats));
    }
    match &outcome.path {
        Some(path) => {
            println!("Path:");
            println!("{}", render_path(problem, path));
        }
        None => println!("No solution.\n"),
    }
}

fn parse_capacities(text: &str) -> Result<Vec<u32>> {
    text.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse().map_err(|_| {
                SearchError::MalformedInput(format!(
                    "capacities must be comma-separated integers, got {part:?}"
                ))
                .into()
            })
        })
        .collect()
}
