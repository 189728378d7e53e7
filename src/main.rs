use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::builder::RangedU64ValueParser;
use clap::Parser;
use tracing::debug;

use deptree::format::{IndentStyle, MAX_INDENT_WIDTH};
use deptree::logger::{init_logger, Verbosity};
use deptree::resolver::resolve_file;

#[derive(Parser)]
#[command(name = "deptree")]
#[command(version)]
#[command(about = "Print the dependency tree of every package in a JSON dependency file", long_about = None)]
struct Cli {
    /// Path to the JSON dependency specification
    path: PathBuf,

    /// Indent with one tab per level (default)
    #[arg(long, conflicts_with = "spaces")]
    tabs: bool,

    /// Indent with N spaces per level
    #[arg(
        long,
        value_name = "N",
        value_parser = RangedU64ValueParser::<usize>::new().range(0..=MAX_INDENT_WIDTH as u64)
    )]
    spaces: Option<usize>,

    /// Show debug logging on stderr
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn indent_style(&self) -> IndentStyle {
        match (self.tabs, self.spaces) {
            (false, Some(width)) => IndentStyle::Spaces(width),
            _ => IndentStyle::Tabs,
        }
    }

    fn verbosity(&self) -> Verbosity {
        if self.verbose {
            Verbosity::Verbose
        } else if self.quiet {
            Verbosity::Quiet
        } else {
            Verbosity::Normal
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbosity());

    let style = cli.indent_style();
    debug!(path = %cli.path.display(), %style, "resolving dependencies");

    let output = match resolve_file(&cli.path, style.renderer()) {
        Ok(output) => output,
        Err(e) => {
            debug!(kind = ?e.kind(), error = %e, "resolution failed");
            eprintln!("{}", e.user_message());
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = print_output(&output) {
        eprintln!("Error: {:#}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn print_output(output: &str) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", output).context("failed to write dependency tree to stdout")?;
    stdout.flush().context("failed to flush stdout")?;
    Ok(())
}
