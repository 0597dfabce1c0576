use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use combat_session::{PromptInput, RunReport, Session, SkirmishConfig, WriterDisplay};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Turn-based skirmishes for a single soldier")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fight every opponent listed in a loadout file and emit a JSON report.
    Play(PlayArgs),
    /// Print the starting inventory described by a loadout file.
    Inventory(InventoryArgs),
    /// Pretty-print an existing report.
    Report(ReportArgs),
}

#[derive(Args)]
struct PlayArgs {
    #[arg(long, default_value = "skirmish.toml")]
    config: PathBuf,
    #[arg(long)]
    id: Option<String>,
    /// Skip the name prompt and use this name.
    #[arg(long)]
    name: Option<String>,
}

#[derive(Args)]
struct InventoryArgs {
    #[arg(long, default_value = "skirmish.toml")]
    config: PathBuf,
}

#[derive(Args)]
struct ReportArgs {
    #[arg(long)]
    input: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Play(args) => handle_play(args),
        Commands::Inventory(args) => handle_inventory(args),
        Commands::Report(args) => {
            init_tracing(None);
            handle_report(args)
        }
    }
}

/// Logs go to stderr so they never interleave with prompts on stdout.
fn init_tracing(config_filter: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config_filter.unwrap_or("warn")))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .ok();
}

fn handle_play(args: PlayArgs) -> Result<()> {
    let config = SkirmishConfig::from_path(&args.config)?;
    init_tracing(config.trace_filter());

    let run_id = args
        .id
        .unwrap_or_else(|| format!("run-{}", Utc::now().format("%Y%m%dT%H%M%S")));
    let input = PromptInput::new(io::stdin().lock(), io::stdout());
    let display = WriterDisplay::new(io::stdout());
    let mut session = Session::new(config.build_combatant(), input, display);

    match args.name {
        Some(name) => session.combatant_mut().set_name(name),
        None => session.choose_name()?,
    }
    session.show_inventory()?;

    let mut encounters = Vec::new();
    for (i, mut opponent) in config.opponents.iter().cloned().enumerate() {
        if i > 0 {
            session.resupply()?;
        }
        let record = session
            .run_encounter(&mut opponent)
            .with_context(|| format!("encounter with {} ended early", opponent.name))?;
        encounters.push(record);
    }

    let (combatant, journal) = session.into_parts();
    let report = RunReport::new(run_id, &combatant, encounters, journal);
    info!(target: "skirmish", id = %report.id, status = ?report.summary.status, "run finished");
    println!("{}", report.summarize());

    if let Some(report_cfg) = config.report.as_ref() {
        if let Some(parent) = report_cfg.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&report_cfg.path, serde_json::to_string_pretty(&report)?)
            .with_context(|| format!("failed to write {}", report_cfg.path.display()))?;
        println!("Report written to {}", report_cfg.path.display());
    }

    Ok(())
}

fn handle_inventory(args: InventoryArgs) -> Result<()> {
    let config = SkirmishConfig::from_path(&args.config)?;
    init_tracing(config.trace_filter());
    println!("{}", config.build_combatant().inventory());
    for opponent in &config.opponents {
        println!(
            "Opponent {}: {} HP, hits for {}, bounty {}",
            opponent.name, opponent.hp, opponent.damage, opponent.bounty
        );
    }
    Ok(())
}

fn handle_report(args: ReportArgs) -> Result<()> {
    let data = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let report: RunReport = serde_json::from_str(&data)?;
    println!("{}", report.summarize());
    for record in &report.encounters {
        println!(
            "  {} after {} rounds: {:?}",
            record.opponent, record.rounds, record.outcome
        );
    }
    Ok(())
}
