//! `souvenir` - CLI for the relationship-memory timeline
//!
//! This binary opens the terminal viewer or prints timeline data on
//! stdout, depending on the subcommand.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;

use souvenir::cli::{Cli, Command, ConfigCommand, MomentsCommand, StatsCommand};
use souvenir::timeline::{days_since_milestones, parse_date, stats};
use souvenir::{init_logging, Config, MilestoneSet, MomentStore};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // The timeline itself is in-source data; refuse to start on bad seeds.
    let store = souvenir::store::seed().context("seed data is invalid")?;
    let milestones = MilestoneSet::standard();

    match cli.command.unwrap_or(Command::View) {
        Command::View => run_view(&config, store, milestones),
        Command::Stats(cmd) => handle_stats(&store, &milestones, &cmd),
        Command::Moments(cmd) => handle_moments(&store, &cmd),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn run_view(config: &Config, store: MomentStore, milestones: MilestoneSet) -> anyhow::Result<()> {
    // The UI is event-driven on one thread; the runtime only schedules the
    // transition timer alongside the input channel.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to build the UI runtime")?;
    runtime.block_on(souvenir::ui::run(config, store, milestones))?;
    Ok(())
}

fn handle_stats(
    store: &MomentStore,
    milestones: &MilestoneSet,
    cmd: &StatsCommand,
) -> anyhow::Result<()> {
    let as_of = match &cmd.date {
        Some(value) => parse_date(value)?,
        None => store.last().date,
    };
    let counters = days_since_milestones(as_of, milestones);

    if cmd.json {
        let payload = serde_json::json!({
            "as_of": as_of,
            "counters": counters,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{}", stats::as_of_label(as_of));
        if counters.is_empty() {
            println!("  (这一天还没有里程碑)");
        }
        for counter in counters {
            println!("  {:<4} {:>6} {}", counter.label, counter.days, stats::DAY_UNIT);
        }
    }
    Ok(())
}

fn handle_moments(store: &MomentStore, cmd: &MomentsCommand) -> anyhow::Result<()> {
    if cmd.json {
        let listing: Vec<_> = store
            .iter()
            .enumerate()
            .map(|(index, moment)| {
                serde_json::json!({
                    "index": index,
                    "date": moment.date,
                    "title": moment.title,
                    "has_image": moment.has_image(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&listing)?);
    } else {
        let total = store.len();
        for (index, moment) in store.iter().enumerate() {
            println!(
                "{:>3} / {}  {}  {}",
                index + 1,
                total,
                moment.date_label(),
                moment.title
            );
        }
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Audio]");
                match &config.audio.track {
                    Some(track) => println!("  Track:     {}", track.display()),
                    None => println!("  Track:     (none)"),
                }
                println!("  Autoplay:  {}", config.audio.autoplay);
                println!("  Volume:    {:.0}%", config.audio.volume * 100.0);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
