//! Conflict campaign runner
//!
//! Resolves a number of weeks from the reference world (or a saved
//! snapshot), prints the summaries and writes the final snapshot.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use war_is_choice::conflict::{build_reference_world, load_world, save_world, summarize_turn, Campaign};
use war_is_choice::core::{CampaignConfig, Result};

#[derive(Parser, Debug)]
#[command(name = "conflict_sim")]
#[command(about = "Run a turn-based conflict campaign and save the final world")]
struct Args {
    /// TOML campaign config; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of weeks to resolve
    #[arg(long)]
    turns: Option<u32>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the final snapshot
    #[arg(long)]
    output: Option<PathBuf>,

    /// Continue from a saved snapshot instead of the reference world
    #[arg(long)]
    resume: Option<PathBuf>,

    /// Also write every turn report and the final world as JSON
    #[arg(long)]
    report_json: Option<PathBuf>,

    /// Only print the start and end summaries
    #[arg(long, short = 'q')]
    quiet: bool,
}

impl Args {
    fn campaign_config(&self) -> Result<CampaignConfig> {
        let mut config = match &self.config {
            Some(path) => CampaignConfig::load(path)?,
            None => CampaignConfig::default(),
        };
        if let Some(turns) = self.turns {
            config.turns = turns;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(output) = &self.output {
            config.snapshot_path = output.clone();
        }
        if self.quiet {
            config.print_notes = false;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    if let Err(e) = run(Args::parse()) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = args.campaign_config()?;

    let world = match &args.resume {
        Some(path) => {
            let world = load_world(path)?;
            world.validate()?;
            world
        }
        None => build_reference_world(config.seed),
    };

    let mut campaign = Campaign::new(world, config.seed);

    println!("Starting simulation");
    println!("{}", campaign.initial_summary());

    for _ in 0..config.turns {
        let report = campaign.step()?;
        if config.print_notes {
            println!("\n{}", summarize_turn(report));
        }
    }

    let output = campaign.finish();
    println!("\n{}", output.summary());

    save_world(&output.final_world, &config.snapshot_path)?;
    println!("\nFinal snapshot saved to {}", config.snapshot_path.display());

    if let Some(path) = &args.report_json {
        fs::write(path, output.to_json()?)?;
        println!("Turn reports written to {}", path.display());
    }

    Ok(())
}
