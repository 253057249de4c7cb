//! Wheel Words CLI
//!
//! Reads a wheel grid file and a dictionary file and prints every distinct
//! dictionary word the wheels can spell.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wheel_words::{Dictionary, SearchReport, WheelError, WheelGrid, WheelSolver};

#[derive(Parser, Debug)]
#[command(name = "wheel-words", version)]
#[command(about = "Find every dictionary word readable from a grid of lettered wheels")]
struct Cli {
    /// Wheel grid file: wheel count, letters per wheel, then one line per wheel
    wheels: PathBuf,

    /// Dictionary file, one word per line
    dictionary: PathBuf,

    /// Trailing arguments are accepted and ignored
    #[arg(hide = true)]
    rest: Vec<PathBuf>,

    /// Additional wheel grid files searched with the same dictionary
    #[arg(long = "also", value_name = "WHEELS")]
    also: Vec<PathBuf>,

    /// Print words in alphabetical order
    #[arg(long)]
    sorted: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Open every input up front so a missing file is reported together with
/// any other missing one.
fn open_inputs(paths: &[&Path]) -> Result<Vec<BufReader<File>>, WheelError> {
    let mut readers = Vec::with_capacity(paths.len());
    let mut failed = Vec::new();
    for path in paths {
        match File::open(path) {
            Ok(file) => readers.push(BufReader::new(file)),
            Err(_) => failed.push(path.to_path_buf()),
        }
    }
    if !failed.is_empty() {
        return Err(WheelError::FileAccess { paths: failed });
    }
    Ok(readers)
}

fn print_report(out: &mut impl Write, report: &SearchReport, sorted: bool) -> io::Result<()> {
    if sorted {
        for word in report.sorted_words() {
            writeln!(out, "{}", word)?;
        }
    } else {
        for word in &report.words {
            writeln!(out, "{}", word)?;
        }
    }
    writeln!(out, "Found {} unique words", report.word_count())
}

fn run(cli: Cli) -> Result<()> {
    if !cli.rest.is_empty() {
        debug!(ignored = ?cli.rest, "extra arguments ignored");
    }

    let mut paths = vec![cli.wheels.as_path(), cli.dictionary.as_path()];
    paths.extend(cli.also.iter().map(PathBuf::as_path));

    let mut readers = open_inputs(&paths)?;
    let dictionary_reader = readers.remove(1);
    let grids = readers
        .into_iter()
        .map(WheelGrid::from_reader)
        .collect::<Result<Vec<_>, _>>()?;

    let maximum_word_size = grids
        .iter()
        .map(WheelGrid::number_of_wheels)
        .max()
        .unwrap_or(0);
    let dictionary = Dictionary::from_reader(dictionary_reader, maximum_word_size)?;
    debug!(words = dictionary.word_count(), "dictionary ready");

    let solver = WheelSolver::new(dictionary);
    let reports = solver.solve_all(&grids);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if reports.len() == 1 {
        print_report(&mut out, &reports[0], cli.sorted)?;
    } else {
        let grid_paths = std::iter::once(&cli.wheels).chain(cli.also.iter());
        for (path, report) in grid_paths.zip(&reports) {
            writeln!(out, "== {}", path.display())?;
            print_report(&mut out, report, cli.sorted)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let rendered = err.render().to_string();
            let usage = WheelError::Usage(
                rendered
                    .trim_start_matches("error: ")
                    .trim_end()
                    .to_string(),
            );
            eprintln!("error: {}", usage);
            return ExitCode::FAILURE;
        }
    };

    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
