use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};
use make10::batch::answer_line;
use make10::export::{emit_awk, emit_rust, from_json, to_json};
use make10::solver::constants::DEFAULT_TARGET;
use make10::utils::validate_digit_string;
use make10::{LookupTable, Make10Solver, ShapeSet, SolverConfig, TableBuilder, TableQuery};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Output format for `export`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Awk,
    Rust,
}

/// make10 - Find every way to make 10 from four digits
#[derive(Parser, Debug)]
#[command(name = "make10")]
#[command(about = "Find every arithmetic expression over four digits that evaluates to 10")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Value every expression must evaluate to
    #[arg(short, long, global = true, default_value_t = DEFAULT_TARGET)]
    pub target: i64,

    /// Search all five tree shapes instead of the two classic ones
    #[arg(short, long, global = true)]
    pub extended: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, global = true, default_value = "warn")]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print every expression for four digits, e.g. `1457`
    Solve { digits: String },
    /// Answer a file of four-digit records, one per line
    Batch {
        input: PathBuf,
        /// Use a table previously written by `export --format json`
        #[arg(long)]
        table: Option<PathBuf>,
    },
    /// Write the full lookup table
    Export {
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Destination file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Summarise the lookup table
    Stats,
}

impl CliArgs {
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            target: self.target,
            shapes: if self.extended {
                ShapeSet::Extended
            } else {
                ShapeSet::Classic
            },
        }
    }
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")
}

fn build_table(config: SolverConfig) -> Result<LookupTable> {
    TableBuilder::new(Make10Solver::new(config))
        .build()
        .context("Failed to build lookup table")
}

fn load_or_build(config: SolverConfig, path: Option<&Path>) -> Result<LookupTable> {
    let Some(path) = path else {
        return build_table(config);
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read table {}", path.display()))?;
    let table = from_json(&text).with_context(|| format!("Invalid table {}", path.display()))?;
    info!(
        "Loaded table from {} (target {}, {:?} shapes)",
        path.display(),
        table.target(),
        table.shapes()
    );
    Ok(table)
}

fn run_solve(config: SolverConfig, digits: &str) -> Result<()> {
    let digits = validate_digit_string(digits).context("Invalid digit string")?;
    let solver = Make10Solver::new(config);

    info!(
        "Searching for expressions using digits {:?} that equal {}",
        digits, config.target
    );

    let solutions = solver.solve(digits);
    if solutions.is_empty() {
        warn!("No matching expression found");
        println!("No solution.");
        return Ok(());
    }

    for expr in solutions {
        println!("{} = {}", expr, config.target);
    }
    Ok(())
}

fn run_batch(config: SolverConfig, input: &Path, table_path: Option<&Path>) -> Result<()> {
    let table = load_or_build(config, table_path)?;
    let query = TableQuery::new(&table);

    let file =
        File::open(input).with_context(|| format!("Failed to open {}", input.display()))?;
    let reader = BufReader::with_capacity(64 * 1024, file);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut answered = 0usize;
    let mut skipped = 0usize;
    for line in reader.lines() {
        let line = line.context("Failed to read input record")?;
        match answer_line(&query, &line) {
            Ok(Some(answer)) => {
                writeln!(out, "{}", answer)?;
                answered += 1;
            }
            Ok(None) => skipped += 1,
            Err(err) => {
                warn!("Skipping record '{}': {}", line.trim(), err);
                skipped += 1;
            }
        }
    }
    out.flush()?;

    info!("Answered {} records, skipped {}", answered, skipped);
    Ok(())
}

fn run_export(config: SolverConfig, format: ExportFormat, output: Option<&Path>) -> Result<()> {
    let table = build_table(config)?;
    let text = match format {
        ExportFormat::Json => to_json(&table).context("Failed to serialize table")?,
        ExportFormat::Awk => emit_awk(&table),
        ExportFormat::Rust => emit_rust(&table),
    };

    match output {
        Some(path) => {
            fs::write(path, text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {:?} table to {}", format, path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}

fn run_stats(config: SolverConfig) -> Result<()> {
    let table = build_table(config)?;
    println!("target:          {}", table.target());
    println!("shapes:          {:?}", table.shapes());
    println!("multisets:       {}", table.considered());
    println!("solvable:        {}", table.populated());
    println!("expressions:     {}", table.total_solutions());
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    // Initialize logging
    init_logging(&args.log_level)?;

    let config = args.solver_config();
    match args.command {
        Command::Solve { digits } => run_solve(config, &digits),
        Command::Batch { input, table } => run_batch(config, &input, table.as_deref()),
        Command::Export { format, output } => run_export(config, format, output.as_deref()),
        Command::Stats => run_stats(config),
    }
}
