use anyhow::{bail, Context, Result};
use clap::Parser;
use clearance_pathfinding::config::{Endpoints, SearchConfig};
use clearance_pathfinding::render::render_ascii;
use clearance_pathfinding::workspace::Workspace;
use clearance_pathfinding::Planner;
use grid_util::point::Point;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Finds the minimum-cost path of a point robot through a clearance-inflated workspace.
#[derive(Parser, Debug)]
#[command(name = "clearance_pathfinding", version)]
struct Args {
    /// Start and goal as START_X START_Y GOAL_X GOAL_Y
    #[arg(
        num_args = 4,
        value_names = ["START_X", "START_Y", "GOAL_X", "GOAL_Y"],
        allow_negative_numbers = true
    )]
    coords: Vec<i32>,

    /// File with the start on the first line and the goal on the second
    #[arg(short, long, conflicts_with = "coords")]
    endpoints: Option<PathBuf>,

    /// Workspace description in TOML; the built-in reference workspace if omitted
    #[arg(short, long)]
    workspace: Option<PathBuf>,

    /// Give up after settling this many states
    #[arg(long)]
    max_expansions: Option<usize>,

    /// Give up after this many milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Write the path and settlement history as JSON
    #[arg(long)]
    history: Option<PathBuf>,

    /// Print the workspace with the explored region and path
    #[arg(long)]
    render: bool,
}

fn endpoints(args: &Args) -> Result<Endpoints> {
    if let Some(path) = &args.endpoints {
        return Ok(Endpoints::load(path)?);
    }
    match args.coords.as_slice() {
        &[sx, sy, gx, gy] => Ok(Endpoints {
            start: Point::new(sx, sy),
            goal: Point::new(gx, gy),
        }),
        _ => bail!("expected START_X START_Y GOAL_X GOAL_Y or --endpoints FILE"),
    }
}

fn run(args: Args) -> Result<()> {
    let Endpoints { start, goal } = endpoints(&args)?;
    let workspace = match &args.workspace {
        Some(path) => Workspace::load(path)?,
        None => Workspace::reference(),
    };
    let config = SearchConfig {
        max_expansions: args.max_expansions,
        timeout_ms: args.timeout_ms,
    };
    let result = Planner::with_config(&workspace, config).plan(start, goal)?;
    println!("{}", result.summary());

    if args.render {
        print!(
            "{}",
            render_ascii(&workspace, workspace.width(), workspace.height(), Some(&result))
        );
    }
    if let Some(path) = &args.history {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer(BufWriter::new(file), &result.report())
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("Wrote settlement history to {}", path.display());
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run(Args::parse()) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
