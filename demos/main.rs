//! gridseek: runs a search strategy over one seeded random grid.
//!
//! ```text
//! gridseek [--pace] [ROWS [COLS [DENSITY [SEED [ALGORITHM | all]]]]]
//! ```
//!
//! The algorithm defaults to `bfs`; `all` runs the six strategies in turn.
//! Depth-limited and iterative-deepening search enumerate paths, which grows
//! exponentially with the depth bound. They are skipped when breadth-first
//! search shows the target is unreachable or beyond their bound, since the
//! answer is then known to be "no path". A reachable target more than a
//! dozen steps away still makes them slow on open 15x15 grids.
//!
//! `GRIDSEEK_LOG` selects the log filter (`error` .. `trace`, default `info`).
//! With `--pace` every visit waits for the configured step delay.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use gridseek_core::{GridConfig, GridGen, SearchConfig};
use gridseek_search::{Algorithm, Explorer, LogObserver, Paced, SearchView, path_cost};
use rand::SeedableRng;
use rand::rngs::StdRng;

struct Options {
    grid: GridConfig,
    search: SearchConfig,
    seed: u64,
    algorithms: Vec<Algorithm>,
    pace: bool,
}

fn parse_args() -> Result<Options, Box<dyn std::error::Error>> {
    let mut pace = false;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--pace" => pace = true,
            _ => positional.push(arg),
        }
    }

    let mut grid = GridConfig::default();
    let search = SearchConfig::default();
    let mut seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let mut algorithms = vec![Algorithm::BreadthFirst];

    let mut it = positional.into_iter();
    if let Some(rows) = it.next() {
        grid.rows = rows.parse()?;
    }
    if let Some(cols) = it.next() {
        grid.cols = cols.parse()?;
    }
    if let Some(density) = it.next() {
        grid.obstacle_density = density.parse()?;
    }
    if let Some(s) = it.next() {
        seed = s.parse()?;
    }
    if let Some(key) = it.next() {
        algorithms = if key.eq_ignore_ascii_case("all") {
            Algorithm::from_config(&search).to_vec()
        } else {
            vec![key.parse::<Algorithm>()?]
        };
    }
    if let Some(extra) = it.next() {
        return Err(format!("unexpected argument {extra:?}").into());
    }

    Ok(Options {
        grid: grid.validate()?,
        search,
        seed,
        algorithms,
        pace,
    })
}

/// Why `alg` need not run, given the fewest steps to the target (`None` when
/// unreachable). Only the depth-bounded strategies are ever skipped.
fn skip_reason(alg: Algorithm, hops: Option<usize>) -> Option<String> {
    let bound = match alg {
        Algorithm::DepthLimited { limit } => limit,
        Algorithm::IterativeDeepening { max_depth } => max_depth,
        _ => return None,
    };
    match hops {
        None => Some("target unreachable".to_string()),
        Some(h) if h > bound as usize => {
            Some(format!("target is {h} steps away, beyond depth {bound}"))
        }
        Some(_) => None,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("GRIDSEEK_LOG", "info"))
        .init();
    let opts = parse_args()?;

    let mut generator = GridGen::new(StdRng::seed_from_u64(opts.seed));
    let grid = generator.generate(opts.grid)?;
    log::info!(
        "{}x{} grid, density {}, seed {}: start {} target {}",
        grid.rows(),
        grid.cols(),
        opts.grid.obstacle_density,
        opts.seed,
        grid.start(),
        grid.target()
    );
    println!("{grid}\n");

    let delay = if opts.pace {
        opts.search.step_delay
    } else {
        Duration::ZERO
    };
    let hops = Explorer::headless(&grid)
        .breadth_first()
        .map(|p| p.len() - 1);

    for alg in opts.algorithms {
        println!("== {alg}");
        if let Some(reason) = skip_reason(alg, hops) {
            log::info!("{}: skipped, {reason}", alg.key());
            println!("no path ({reason}), not run\n");
            continue;
        }

        let observer = (SearchView::new(), Paced::new(LogObserver::new(alg.key()), delay));
        let mut explorer = Explorer::new(&grid, observer);
        let path = explorer.run(alg);
        let visits = explorer.visits();
        let (view, _) = explorer.into_observer();

        println!("{}", view.render(&grid));
        match path {
            Some(path) => println!(
                "path: {} steps, cost {:.3}, {visits} visits\n",
                path.len() - 1,
                path_cost(&grid, &path)
            ),
            None => println!("no path, {visits} visits\n"),
        }
    }
    Ok(())
}
