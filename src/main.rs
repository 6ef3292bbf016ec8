use anyhow::{bail, Context, Result};
use gridflow::adapters::inbound::{FilesystemPuzzleSource, StdinPuzzleSource};
use gridflow::adapters::outbound::{
    init_buffered_logger, init_combined_logger, init_console_logger, init_file_logger,
    init_noop_logger,
};
use gridflow::application::{SolverService, CATALOG};
use gridflow::domains::{parse_level, DynLogger, PuzzleSource};
use gridflow::Config;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: gridflow [--config FILE] [--trace] <problem> [INPUT]\n       gridflow list";

struct Args {
    config: Option<PathBuf>,
    trace: bool,
    problem: String,
    input: Option<String>,
}

fn parse_args(mut raw: impl Iterator<Item = String>) -> Result<Args> {
    let mut config = None;
    let mut trace = false;
    let mut positional = Vec::new();

    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--config" => {
                let path = raw.next().context("--config needs a file")?;
                config = Some(PathBuf::from(path));
            }
            "--trace" => trace = true,
            "-h" | "--help" => bail!("{}", USAGE),
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    let Some(problem) = positional.next() else { bail!("{}", USAGE) };
    Ok(Args { config, trace, problem, input: positional.next() })
}

fn build_logger(config: &Config) -> DynLogger {
    let level = parse_level(&config.logging.level);
    let logger = match (&config.logging.file, config.logging.console) {
        (Some(file), true) => init_combined_logger(file, level),
        (Some(file), false) => init_file_logger(file, level).unwrap_or_else(|e| {
            eprintln!("{}", e);
            init_console_logger()
        }),
        (None, true) => init_console_logger(),
        (None, false) => init_noop_logger(),
    };

    if config.logging.buffer_capacity > 0 {
        init_buffered_logger(logger, config.logging.buffer_capacity)
    } else {
        logger
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = parse_args(std::env::args().skip(1))?;
    let config = Config::load(args.config.as_deref())?;

    // `init()` would also claim the `log` facade, which the fast_log file logger needs
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.level))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("installing tracing subscriber")?;
    debug!(?config, "configuration loaded");

    if args.problem == "list" {
        for entry in CATALOG.iter() {
            println!("{:<22}{}", entry.id, entry.summary);
        }
        return Ok(());
    }

    let logger = build_logger(&config);
    let (source, input_name): (Arc<dyn PuzzleSource>, String) = match args.input.as_deref() {
        None | Some("-") => (Arc::new(StdinPuzzleSource), "-".to_string()),
        Some(name) => (
            Arc::new(FilesystemPuzzleSource::new(config.data.dir.clone())),
            name.to_string(),
        ),
    };

    let service = SolverService::new(source, logger);
    let solution = match service.solve_named(&args.problem, &input_name) {
        Ok(solution) => solution,
        Err(e) => {
            error!(problem = %args.problem, "{}", e);
            log::logger().flush();
            return Err(e.into());
        }
    };

    println!("{}", solution.answer);

    if args.trace || config.solver.emit_trace {
        for envelope in &solution.trace {
            eprintln!("{}", serde_json::to_string(envelope)?);
        }
    }
    info!(problem = %args.problem, events = solution.trace.len(), "done");

    // Let the buffered writer drain before the runtime shuts down
    if config.logging.buffer_capacity > 0 {
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    // Blocks until fast_log has written everything queued so far
    log::logger().flush();

    Ok(())
}
