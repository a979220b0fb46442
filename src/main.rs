use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use serde_json::json;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use tracing::{info, warn, Level};

use damlev::{distance, Distance, Options};

mod cli;
use cli::display::{distance_value, highlight_range, row, section_bot, section_top};
use cli::{Cli, Commands, CostArgs};

/// One line of `damlev batch` input.
#[derive(Deserialize)]
struct BatchRequest {
    source: String,
    target: String,
    #[serde(default)]
    options: OptionOverrides,
}

/// Per-line options; anything left out keeps the command-line value.
#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct OptionOverrides {
    insertion_cost: Option<f64>,
    deletion_cost: Option<f64>,
    substitution_cost: Option<f64>,
    transposition_cost: Option<f64>,
    #[serde(alias = "useTransposition")]
    damerau: Option<bool>,
    restricted: Option<bool>,
    search: Option<bool>,
}

impl OptionOverrides {
    fn over(&self, base: Options) -> Options {
        Options {
            insertion_cost: self.insertion_cost.unwrap_or(base.insertion_cost),
            deletion_cost: self.deletion_cost.unwrap_or(base.deletion_cost),
            substitution_cost: self.substitution_cost.unwrap_or(base.substitution_cost),
            transposition_cost: self.transposition_cost.unwrap_or(base.transposition_cost),
            damerau: self.damerau.unwrap_or(base.damerau),
            restricted: self.restricted.unwrap_or(base.restricted),
            search: self.search.unwrap_or(base.search),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Distance {
            source,
            target,
            costs,
        } => run_distance(&source, &target, &costs),
        Commands::Search {
            pattern,
            haystack,
            costs,
        } => run_search(&pattern, &haystack, &costs),
        Commands::Batch { file, costs } => run_batch(file.as_deref(), &costs),
    }
}

fn run_distance(source: &str, target: &str, costs: &CostArgs) -> Result<()> {
    let options = Options {
        search: false,
        ..costs.options()?
    };
    let result = distance(source, target, &options)?;
    if costs.json {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        println!("{}", distance_value(result.value(), source.chars().count()));
    }
    Ok(())
}

fn run_search(pattern: &str, haystack: &str, costs: &CostArgs) -> Result<()> {
    let options = Options {
        search: true,
        ..costs.options()?
    };
    let result = distance(pattern, haystack, &options)?;
    let Some(found) = result.as_match() else {
        anyhow::bail!("search did not produce a match");
    };

    if costs.json {
        println!("{}", serde_json::to_string(&result)?);
        return Ok(());
    }

    section_top("MATCH");
    row(&format!(" pattern   {}", pattern));
    row(&format!(" haystack  {}", highlight_range(haystack, found.range())));
    row(&format!(" matched   {}", found.matched));
    row(&format!(
        " distance  {}",
        distance_value(found.distance, pattern.chars().count())
    ));
    row(&format!(" offset    {}", found.offset));
    section_bot();
    Ok(())
}

fn run_batch(file: Option<&str>, costs: &CostArgs) -> Result<()> {
    let base = costs.options()?;
    let reader: Box<dyn BufRead> = match file {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut processed = 0usize;
    let mut failed = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("failed to read line {}", line_no))?;
        if line.trim().is_empty() {
            continue;
        }

        let record = match evaluate_line(&line, base) {
            Ok(result) => json!({ "line": line_no, "result": result }),
            Err(e) => {
                warn!(line = line_no, error = %e, "skipping request");
                failed += 1;
                json!({ "line": line_no, "error": e.to_string() })
            }
        };
        writeln!(out, "{}", record)?;
        processed += 1;
    }

    info!(processed, failed, "batch finished");
    Ok(())
}

fn evaluate_line(line: &str, base: Options) -> Result<Distance> {
    let request: BatchRequest = serde_json::from_str(line).context("malformed request")?;
    let options = request.options.over(base);
    Ok(distance(&request.source, &request.target, &options)?)
}
