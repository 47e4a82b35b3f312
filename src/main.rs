//! `ziyy` command-line front end.
//!
//! Renders markup given on the command line or read from a file and writes
//! the styled result to stdout.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind;
use log::{debug, warn};
use once_cell::sync::Lazy;
use ziyy_core::{Bindings, compile, rgb_fg, style_with};

/// Markup for the help screen, rendered through the compiler itself.
const USAGE: &str = include_str!("usage.zi");

/// Variables available to every document rendered by the CLI.
static DEFAULT_BINDINGS: Lazy<Bindings> = Lazy::new(|| {
    Bindings::new()
        .with("green", rgb_fg(0, 150, 75))
        .with("cyan", rgb_fg(0, 150, 150))
});

#[derive(Parser, Debug)]
#[command(name = "ziyy", version, about = "Convenient terminal output styler")]
struct Cli {
    /// Markup to render
    text: Option<String>,

    /// Read markup from FILENAME
    #[arg(short, long, value_name = "FILENAME", conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Do not print a newline after the output
    #[arg(short, long)]
    no_newline: bool,
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only rendered output.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("ziyy: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Render the help screen.
fn usage() -> anyhow::Result<String> {
    style_with(USAGE, &DEFAULT_BINDINGS).context("failed to render usage")
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::DisplayHelp => {
            print!("{}", usage()?);
            return Ok(ExitCode::SUCCESS);
        }
        Err(err) => err.exit(),
    };

    let source = match (cli.text, cli.file) {
        (_, Some(path)) => {
            if !path.is_file() {
                warn!("not a regular file: {}", path.display());
                eprint!("{}", usage()?);
                return Ok(ExitCode::FAILURE);
            }
            fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?
        }
        (Some(text), None) => text,
        (None, None) => {
            print!("{}", usage()?);
            return Ok(ExitCode::SUCCESS);
        }
    };

    debug!("rendering {} bytes of markup", source.len());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    compile(&source, &mut out, &DEFAULT_BINDINGS)?;
    if !cli.no_newline {
        writeln!(out)?;
    }
    out.flush()?;
    Ok(ExitCode::SUCCESS)
}
