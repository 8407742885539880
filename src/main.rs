use std::{
    fs,
    io::{self, Read, Write},
    num::ParseIntError,
    process::ExitCode,
};

use sparselife::{Codec, FormatError, GameOfLife, Life106};

mod options;
mod stats;

use options::Args;
use stats::GenerationStats;

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("invalid arguments: {0}")]
    Args(#[from] getopts::Fail),
    #[error("invalid --{name} value: {source}")]
    Count {
        name: &'static str,
        source: ParseIntError,
    },
    #[error("failed to start thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("failed to write {path}: {source}")]
    Write { path: String, source: io::Error },
}

/// Reads the input file if one was given, `stdin` otherwise
fn read_input<R: Read>(args: &Args, mut stdin: R) -> Result<String, AppError> {
    match args.input_file() {
        Some(path) => fs::read_to_string(&path).map_err(|source| AppError::Read { path, source }),
        None => {
            let mut input = String::new();
            stdin
                .read_to_string(&mut input)
                .map_err(|source| AppError::Read {
                    path: "<stdin>".to_owned(),
                    source,
                })?;
            Ok(input)
        }
    }
}

/// Writes `encoded` and a trailing newline to the output file, or `stdout`
fn write_output<W: Write>(args: &Args, encoded: &str, mut stdout: W) -> Result<(), AppError> {
    match args.output_file() {
        Some(path) => fs::write(&path, format!("{}\n", encoded))
            .map_err(|source| AppError::Write { path, source }),
        None => writeln!(stdout, "{}", encoded)
            .and_then(|()| stdout.flush())
            .map_err(|source| AppError::Write {
                path: "<stdout>".to_owned(),
                source,
            }),
    }
}

fn simulate<R: Read, W: Write>(args: &Args, stdin: R, stdout: W) -> Result<(), AppError> {
    let generations = args.generations().map_err(|source| AppError::Count {
        name: "generations",
        source,
    })?;
    let threads = args.threads().map_err(|source| AppError::Count {
        name: "threads",
        source,
    })?;

    let codec = Life106::default();
    let alive = codec.decode(&read_input(args, stdin)?)?;
    log::info!("alive: {}", alive.len());

    let pool = if threads > 1 {
        Some(
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?,
        )
    } else {
        None
    };

    let mut game = GameOfLife::from_alive(alive);
    let mut stats = GenerationStats::new(args.stats_file().is_some());
    for _ in 0..generations {
        match &pool {
            Some(pool) => pool.install(|| game.next_generation_parallel()),
            None => game.next_generation(),
        }
        stats.record(&game);
        if let Some(report) = stats.take_report() {
            log::info!("{}", report);
        }
    }
    log::info!(
        "finished {} generations, alive: {}",
        game.generation(),
        game.alive_count()
    );

    // output first: a failed stats write must not lose the board
    write_output(args, &codec.encode(game.alive()), stdout)?;

    if let Some(path) = args.stats_file() {
        stats
            .save(&path)
            .map_err(|source| AppError::Write { path, source })?;
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let result = match Args::from_env() {
        Ok(Some(args)) => simulate(&args, io::stdin().lock(), io::stdout().lock()),
        // help was printed
        Ok(None) => Ok(()),
        Err(fail) => Err(AppError::from(fail)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
