//! CLI tool to select, reorder and filter columns of a delimited table.
//!
//! Usage:
//!   t2t <input> <output> -c 3,1,2
//!   t2t <input> <output> -c 1,4 -f 'col4>=10' -f '!col2:test' -H skip:#
//!
//! Delimiters are inferred from `.tsv`, `.csv` and `.ssv` extensions unless
//! given explicitly.

use clap::{ArgAction, Parser};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use t2t::{
    Delimiter, RunConfig, T2tError, TracingObserver, parse_columns, parse_filters,
    parse_header_actions, run_files,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Select, reorder and filter columns of a TSV/CSV/SSV file.
#[derive(Parser)]
#[command(name = "t2t", version)]
struct Cli {
    /// Input table file
    input: PathBuf,

    /// Output table file
    output: PathBuf,

    /// Output columns, 1-based and comma-separated (e.g. 3,1,1,2)
    #[arg(short, long)]
    columns: String,

    /// Row filter [+|!|-]col<N><op><query>; ops: = != : !: > >= < <= i= i!= f= f!=
    #[arg(short = 'f', long = "filter", allow_hyphen_values = true)]
    filters: Vec<String>,

    /// Header action <keep|skip|rearrange>:<count|char>, applied in order
    #[arg(short = 'H', long = "header")]
    headers: Vec<String>,

    /// Input delimiter: tab, comma or space (default: from extension, else tab)
    #[arg(long)]
    input_delimiter: Option<Delimiter>,

    /// Output delimiter: tab, comma or space (default: from extension, else input's)
    #[arg(long)]
    output_delimiter: Option<Delimiter>,

    /// Overwrite an existing output file without asking
    #[arg(short, long)]
    yes: bool,

    /// Do not print the line counts
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn build_config(cli: &Cli) -> Result<RunConfig, T2tError> {
    let input_delimiter = cli
        .input_delimiter
        .or_else(|| Delimiter::from_path(&cli.input))
        .unwrap_or_default();
    let output_delimiter = cli
        .output_delimiter
        .or_else(|| Delimiter::from_path(&cli.output))
        .unwrap_or(input_delimiter);

    Ok(RunConfig::new(parse_columns(&cli.columns)?)
        .with_delimiters(input_delimiter, output_delimiter)
        .with_filters(parse_filters(&cli.filters)?)
        .with_header_actions(parse_header_actions(&cli.headers)?))
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

fn confirm_overwrite(path: &Path) -> io::Result<bool> {
    eprint!("Output file '{}' already exists. Overwrite? [y/N] ", path.display());
    io::stderr().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    if !cli.input.is_file() {
        eprintln!("Error: input file '{}' does not exist", cli.input.display());
        process::exit(1);
    }
    if same_file(&cli.input, &cli.output) {
        eprintln!("Error: input and output must be different files");
        process::exit(1);
    }
    if cli.output.exists() && !cli.yes {
        match confirm_overwrite(&cli.output) {
            Ok(true) => {}
            Ok(false) => {
                eprintln!("Aborted.");
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error reading confirmation: {e}");
                process::exit(1);
            }
        }
    }
    if let Some(parent) = cli.output.parent()
        && !parent.as_os_str().is_empty()
        && fs::create_dir_all(parent).is_err()
    {
        eprintln!(
            "Error creating output directory for '{}'",
            cli.output.display()
        );
        process::exit(1);
    }

    info!(input = %cli.input.display(), delimiter = %config.input_delimiter, "reading");
    info!(output = %cli.output.display(), delimiter = %config.output_delimiter, "writing");
    for criterion in config.filters.include().iter().chain(config.filters.exclude()) {
        info!(%criterion, "filter");
    }
    for action in &config.header_actions {
        info!(%action, "header action");
    }

    match run_files(&cli.input, &cli.output, &config, &mut TracingObserver) {
        Ok(metrics) => {
            if !cli.quiet {
                eprintln!(
                    "Processed {} lines, {} passed -> {}",
                    metrics.total_lines,
                    metrics.passed_lines,
                    cli.output.display()
                );
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
