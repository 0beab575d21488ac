use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use tracing::{info, warn};

use gridsearch_core::{report, Algorithm, GridProblem, Layout, Report, Search, SearchOptions, Searcher};
use gridsearch_core::grid::Cell;

pub mod config;
pub use config::Config;

#[derive(Parser, Debug, Clone)]
#[command(name = "gridsearch", version, about = "Run textbook graph searches over an ASCII grid layout")]
pub struct Args {
    /// Layout name, read from <layout-dir>/<name>.lay; a path ending in .lay is used as given
    #[arg(short = 'l', long = "layout", value_name = "LAYOUT_FILE", default_value = "mediumClassic")]
    pub layout: String,

    /// Directory holding layout files [env: GRIDSEARCH_LAYOUT_DIR]
    #[arg(long = "layout-dir", value_name = "DIR")]
    pub layout_dir: Option<PathBuf>,

    /// Directory for annotated maps [env: GRIDSEARCH_OUT_DIR]
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Algorithm to run (gfs, astar, bfs, dfs, hc); repeatable, defaults to all
    #[arg(short = 'a', long = "algorithm", value_name = "ALG")]
    pub algorithms: Vec<Algorithm>,

    /// Stop any single search after this many expansions [env: GRIDSEARCH_MAX_EXPANSIONS]
    #[arg(long = "max-expansions", value_name = "N")]
    pub max_expansions: Option<u64>,

    /// Print results and the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON lines
    #[arg(long = "log-json")]
    pub log_json: bool,

    /// Skip writing annotated maps
    #[arg(long = "no-output")]
    pub no_output: bool,
}

impl Args {
    pub fn algorithms(&self) -> Vec<Algorithm> {
        if self.algorithms.is_empty() { Algorithm::ALL.to_vec() } else { self.algorithms.clone() }
    }
}

#[derive(Debug)]
pub struct RunSummary {
    pub written: Vec<PathBuf>,
    pub report: Report,
}

pub fn resolve_layout_path(layout: &str, layout_dir: &Path) -> PathBuf {
    if layout.ends_with(".lay") {
        PathBuf::from(layout)
    } else {
        layout_dir.join(format!("{}.lay", layout))
    }
}

fn layout_name(layout: &str) -> String {
    Path::new(layout)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| layout.to_string())
}

fn fmt_cells(cells: &[Cell]) -> String {
    cells.iter().map(|(x, y)| format!("({}, {})", x, y)).collect::<Vec<_>>().join(", ")
}

fn write_annotated(layout: &Layout, res: &Search<Cell, Cell>, out_path: &Path) -> Result<()> {
    let solution = res.solution().unwrap_or_default();
    let text = layout.render(res.explored.iter(), solution.iter());
    fs::write(out_path, text).with_context(|| format!("writing {:?}", out_path))?;
    Ok(())
}

/// Load the layout, run each selected algorithm, write annotated maps and the report.
pub fn run<W: Write>(args: &Args, cfg: &Config, out: &mut W) -> Result<RunSummary> {
    let path = resolve_layout_path(&args.layout, &cfg.layout_dir);
    let layout = Layout::load(&path).with_context(|| format!("failed to load layout {:?}", path))?;
    let name = layout_name(&args.layout);
    let problem: GridProblem = layout.problem();
    let options = SearchOptions { max_expansions: cfg.max_expansions };
    let algorithms = args.algorithms();
    info!(layout = %name, algorithms = algorithms.len(), "starting run");

    if !args.json {
        let walls: Vec<Cell> = layout.walls.iter().copied().collect();
        let ghosts: Vec<Cell> = layout.ghosts.iter().copied().collect();
        writeln!(out, "Walls: {}", fmt_cells(&walls))?;
        writeln!(out, "Ghosts: {}", fmt_cells(&ghosts))?;
        writeln!(out, "Start: {:?}", layout.start)?;
        writeln!(out, "Goal: {:?}", layout.goal)?;
        writeln!(out)?;
    }

    if !args.no_output {
        fs::create_dir_all(&cfg.out_dir).with_context(|| format!("creating {:?}", cfg.out_dir))?;
    }

    let mut written = Vec::new();
    let mut results = Vec::new();
    for &algorithm in &algorithms {
        let res = Searcher::with_options(&problem, options.clone())
            .run(algorithm)
            .with_context(|| format!("{} search on {}", algorithm, name))?;

        if !res.is_success() {
            warn!(%algorithm, outcome = %res.outcome, "no path to goal");
        }
        let states = res.states();
        if args.json {
            results.push(json!({
                "algorithm": algorithm,
                "outcome": res.outcome.to_string(),
                "states": states,
                "cost": res.path_cost(),
                "stats": res.stats,
            }));
        } else {
            writeln!(out, "{}:", algorithm)?;
            match &states {
                Some(s) => {
                    writeln!(out, "Path: {}", fmt_cells(s))?;
                    writeln!(out, "Solution: {}", fmt_cells(&res.solution().unwrap_or_default()))?;
                    writeln!(out, "Cost: {:.2}", res.path_cost().unwrap_or(0.0))?;
                }
                None => writeln!(out, "Path: none")?,
            }
            writeln!(out, "Outcome: {}", res.outcome)?;
        }

        if !args.no_output {
            let out_path = cfg.out_dir.join(format!("{}_{}.lay", name, algorithm.tag()));
            write_annotated(&layout, &res, &out_path)?;
            info!(path = ?out_path, "wrote annotated layout");
            written.push(out_path);
        }
    }

    let labelled = [(name.clone(), &problem)];
    let report = report::run(&algorithms, &labelled, &options)?;
    if args.json {
        let doc = json!({ "layout": name, "start": layout.start, "goal": layout.goal, "results": results, "report": &report });
        writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
    } else {
        writeln!(out)?;
        writeln!(out, "Performance:")?;
        write!(out, "{}", report)?;
    }

    Ok(RunSummary { written, report })
}
