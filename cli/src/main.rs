//! `mission-sim` - drive a landmine mission from the command line.

mod logging;
mod script;

use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use mission_simulator_core_rs::{MissionConfig, MissionEngine, RunMode};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "mission-sim")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Two-agent landmine mission simulator")]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    /// Append logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a mission script (one action per line)
    Run(RunArgs),

    /// Print a summary of a mission file
    Inspect {
        /// Mission JSON file
        #[arg(short, long)]
        config: PathBuf,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Mission JSON file
    #[arg(short, long)]
    config: PathBuf,

    /// Evaluation mode: use the configured start/end nodes
    #[arg(long)]
    eval: bool,

    /// RNG seed for training-mode endpoint sampling
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Script file; reads stdin when omitted
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Write the event log as JSON to this file
    #[arg(long)]
    events_out: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose, cli.json_logs, cli.log_file.as_deref()) {
        eprintln!("error: {:#}", e);
        return ExitCode::FAILURE;
    }

    let result = match cli.command {
        Commands::Run(args) => cmd_run(&args),
        Commands::Inspect { config } => cmd_inspect(&config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_engine(path: &Path, mode: RunMode) -> anyhow::Result<MissionEngine> {
    let config = MissionConfig::from_path(path)
        .with_context(|| format!("failed to load mission {}", path.display()))?;
    MissionEngine::new(config, mode).context("invalid mission configuration")
}

fn cmd_run(args: &RunArgs) -> anyhow::Result<()> {
    let mode = if args.eval {
        RunMode::Evaluation
    } else {
        RunMode::Training { seed: args.seed }
    };
    let mut engine = load_engine(&args.config, mode)?;
    info!(run_id = engine.run_id(), "mission loaded");

    println!("{}", script::status_line(&engine));

    let reader: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(BufReader::new(
            fs::File::open(path)
                .with_context(|| format!("cannot open script {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    for (index, line) in reader.lines().enumerate() {
        let line = line.context("failed to read script")?;
        let Some(command) = script::parse_line(index + 1, &line)? else {
            continue;
        };
        debug!(?command, "executing");

        let seen = engine.event_log().len();
        let outcome = script::execute(&mut engine, &command);
        println!("> {}", line.trim());
        println!("  {}", outcome);
        for message in script::messages_since(&engine, seen) {
            println!("  {}", message);
        }
    }

    print_summary(&engine);

    if let Some(path) = &args.events_out {
        let json = serde_json::to_string_pretty(engine.event_log().events())
            .context("failed to serialize event log")?;
        fs::write(path, json)
            .with_context(|| format!("cannot write events to {}", path.display()))?;
        info!(path = %path.display(), events = engine.event_log().len(), "event log written");
    }

    Ok(())
}

fn print_summary(engine: &MissionEngine) {
    let costs = engine.costs();
    println!();
    println!("{}", script::status_line(engine));
    println!("  ground traversal  {}", costs.ground_traversal);
    println!("  hazard clearing   {}", costs.hazard_clearing);
    println!("  air traversal     {}", costs.air_traversal);
    println!("  human queries     {}", costs.human_queries);
    println!("  AI queries        {}", costs.ai_queries);
    println!("  total             {}", engine.total_cost());
}

fn cmd_inspect(path: &Path) -> anyhow::Result<()> {
    let config = MissionConfig::from_path(path)
        .with_context(|| format!("failed to load mission {}", path.display()))?;
    let engine = MissionEngine::new(config.clone(), RunMode::Training { seed: 1 })
        .context("invalid mission configuration")?;

    let mined = engine.edges().iter().filter(|e| e.landmine_present()).count();

    println!("mission       {}", path.display());
    println!("nodes         {}", engine.nodes().len());
    println!("interior      {}", engine.interior_nodes().len());
    println!("edges         {}", engine.edges().len());
    println!("landmines     {}", mined);
    println!(
        "start / end   {} / {}",
        config.mission.start.as_deref().unwrap_or("-"),
        config.mission.end.as_deref().unwrap_or("-")
    );
    println!("config hash   {}", engine.config_hash());

    Ok(())
}
