//! # fnloc
//!
//! A CLI tool that lists the functions in a Rust source tree by length.
//!
//! ## Overview
//!
//! fnloc is built on top of fnloclib. It scans every `.rs` file under a root
//! directory (default `src`), finds each function definition, measures it
//! from its signature line to its closing brace, and prints the functions
//! longest first.
//!
//! ## Usage
//!
//! ```bash
//! # List every function under ./src
//! fnloc
//!
//! # Only functions longer than 50 lines
//! fnloc 50
//!
//! # Scan another tree, skipping generated code
//! fnloc 20 --root crates --exclude "**/generated/**"
//!
//! # Output as JSON
//! fnloc 20 --output json
//! ```

mod logging;
mod render;

use std::process::ExitCode;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use fnloclib::{scan_directory, FilterConfig, FunctionQuerySet, ScanOptions};
use tracing::debug;

use crate::render::OutputMode;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("fnloc")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("List Rust functions by length in lines, longest first")
        .arg(
            Arg::new("min-lines")
                .value_name("MIN_LINES")
                .value_parser(value_parser!(usize))
                .default_value("0")
                .help("Only list functions with more lines than this"),
        )
        .arg(
            Arg::new("root")
                .short('r')
                .long("root")
                .default_value("src")
                .help("Directory to scan"),
        )
        .arg(
            Arg::new("ext")
                .short('x')
                .long("ext")
                .default_value(fnloclib::source::DEFAULT_EXTENSION)
                .help("File extension to scan"),
        )
        .arg(
            Arg::new("include")
                .short('i')
                .long("include")
                .action(ArgAction::Append)
                .help("Include files matching glob pattern"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .help("Exclude files matching glob pattern"),
        )
        .arg(
            Arg::new("jobs")
                .short('j')
                .long("jobs")
                .value_parser(value_parser!(usize))
                .help("Number of worker threads (default: one per CPU)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
}

/// Build filter config from matches
fn build_filter(matches: &ArgMatches) -> anyhow::Result<FilterConfig> {
    let ext = matches
        .get_one::<String>("ext")
        .map(|s| s.as_str())
        .unwrap_or(fnloclib::source::DEFAULT_EXTENSION);
    let mut filter = FilterConfig::new().extension(ext);

    if let Some(includes) = matches.get_many::<String>("include") {
        for pattern in includes {
            filter = filter.include(pattern)?;
        }
    }

    if let Some(excludes) = matches.get_many::<String>("exclude") {
        for pattern in excludes {
            filter = filter.exclude(pattern)?;
        }
    }

    Ok(filter)
}

/// Scan, select and render according to the parsed arguments.
fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let root = matches
        .get_one::<String>("root")
        .map(|s| s.as_str())
        .unwrap_or("src");
    let min_lines = matches.get_one::<usize>("min-lines").copied().unwrap_or(0);
    let mode = matches
        .get_one::<String>("output")
        .map(|s| OutputMode::from_arg(s))
        .unwrap_or(OutputMode::Table);

    let mut options = ScanOptions::new().filter(build_filter(matches)?);
    if let Some(jobs) = matches.get_one::<usize>("jobs") {
        options = options.jobs(*jobs);
    }

    let result =
        scan_directory(root, &options).with_context(|| format!("cannot scan '{root}'"))?;
    debug!(
        files = result.file_count,
        functions = result.functions.len(),
        skipped = result.skipped.len(),
        "scan finished"
    );

    let queryset = FunctionQuerySet::from_result(&result, min_lines);
    render::render(&queryset, mode)
}

fn main() -> ExitCode {
    logging::init_logging();

    let matches = match build_command().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            // Help and version go to stdout; every other parse error is a
            // usage error.
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    match run(&matches) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
