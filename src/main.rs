use anyhow::{Context, Result};
use clap::Parser;
use regex::Regex;
use std::path::PathBuf;
use timetable2json::{run, TableLocator};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Parser)]
#[command(
    name = "timetable2json",
    version,
    about = "Parses a University of Nottingham timetable to JSON"
)]
struct Args {
    /// The input timetable HTML file
    input: PathBuf,
    /// The JSON output file
    output: PathBuf,
    /// CSS selector for the timetable table [default: body > table:nth-child(3)]
    #[arg(long, conflicts_with = "heading")]
    selector: Option<String>,
    /// Pick the table whose caption or preceding label matches this regex
    #[arg(long)]
    heading: Option<String>,
}

impl Args {
    fn locator(&self) -> Result<TableLocator> {
        Ok(match (&self.selector, &self.heading) {
            (Some(css), _) => TableLocator::Selector(css.clone()),
            (None, Some(pattern)) => TableLocator::Heading(
                Regex::new(pattern).with_context(|| format!("invalid --heading `{}`", pattern))?,
            ),
            (None, None) => TableLocator::default(),
        })
    }
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let locator = args.locator()?;

    let count = run(&args.input, &args.output, &locator)
        .with_context(|| format!("converting {}", args.input.display()))?;

    info!(records = count, output = %args.output.display(), "done");
    Ok(())
}
