mod reports;
mod scenarios;
mod simulation;
mod stats;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use babipoly_game::{Money, PolicyConfig};
use reports::RunRecord;
use scenarios::{CATALOG, SWEEP_PLAYER_COUNTS};
use simulation::{BatchConfig, run_batch};

#[derive(Debug, Parser)]
#[command(name = "babipoly-sim", version)]
#[command(about = "Balance analysis for the Babipoly board game - batch simulation and reporting")]
struct Args {
    /// Games per batch
    #[arg(long, default_value_t = 1_000)]
    games: usize,

    /// Players per game (2-8)
    #[arg(long, default_value_t = 4)]
    players: usize,

    /// Starting money in FCFA
    #[arg(long, default_value_t = 250_000)]
    starting_money: Money,

    /// Base seed; every game derives its own stream from this
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Run the full starting-money sweep across 2/4/6/8 players instead
    /// of a single batch
    #[arg(long)]
    scenarios: bool,

    /// List the sweep scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["console", "markdown", "json"])]
    report: String,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    if args.report == "console" {
        announce_banner();
    }

    let start_time = Instant::now();
    let records = if args.scenarios {
        run_sweep(&args)?
    } else {
        vec![run_single(&args)?]
    };

    write_report(&args, &records, start_time)?;
    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut target = OutputTarget::new(args.output.clone())?;
    writeln!(target, "Available scenarios:")?;
    for scenario in CATALOG {
        writeln!(
            target,
            "  {:18} {:>9} FCFA - {}",
            scenario.name, scenario.starting_money, scenario.description
        )?;
    }
    target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🎲 Babipoly Balance Simulator".bright_cyan().bold());
    println!("{}", "================================".cyan());
}

fn run_single(args: &Args) -> Result<RunRecord> {
    let cfg = BatchConfig {
        games: args.games,
        num_players: args.players,
        starting_money: args.starting_money,
        seed: args.seed,
        policy: PolicyConfig::default(),
    };
    let started = Instant::now();
    let summary = run_batch(&cfg).context("batch failed")?;
    let label = format!("{}P @ {} FCFA", args.players, args.starting_money);
    Ok(RunRecord::new(label, summary, started.elapsed()))
}

fn run_sweep(args: &Args) -> Result<Vec<RunRecord>> {
    let mut records = Vec::with_capacity(CATALOG.len() * SWEEP_PLAYER_COUNTS.len());
    for players in SWEEP_PLAYER_COUNTS {
        for scenario in CATALOG {
            if args.verbose {
                println!(
                    "▶ {} with {players} players, {} games",
                    scenario.name.bold(),
                    args.games
                );
            }
            let cfg = BatchConfig {
                games: args.games,
                num_players: players,
                starting_money: scenario.starting_money,
                seed: args.seed,
                policy: PolicyConfig::default(),
            };
            let started = Instant::now();
            let summary = run_batch(&cfg)
                .with_context(|| format!("scenario {} ({players}P) failed", scenario.name))?;
            let label = format!("{} [{players}P]", scenario.name);
            records.push(RunRecord::new(label, summary, started.elapsed()));
        }
    }
    Ok(records)
}

fn write_report(args: &Args, records: &[RunRecord], start_time: Instant) -> Result<()> {
    let mut target = OutputTarget::new(args.output.clone())?;
    match args.report.as_str() {
        "json" => reports::generate_json_report(&mut target, records)?,
        "markdown" => reports::generate_markdown_report(&mut target, records)?,
        _ => reports::generate_console_report(&mut target, records, start_time.elapsed())?,
    }
    target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
