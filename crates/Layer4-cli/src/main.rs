//! SkillView CLI - Main entry point

mod output;

use anyhow::Context;
use clap::{Parser, Subcommand};
use skillview_core::{SkillAggregator, VisibilityReport};
use skillview_foundation::DatasetConfig;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use output::OutputFormat;

/// SkillView - which skills can one person see of another
#[derive(Parser, Debug)]
#[command(name = "skillview")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Dataset file (overrides JSONFILE, default: system.json)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Compute viewer blocks in parallel
    #[arg(long, global = true)]
    parallel: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print visible skills for every pair of people (default)
    Report {
        /// Only print rows for this viewer
        #[arg(long)]
        viewer: Option<String>,
    },
    /// Check what one viewer can see of one viewee
    Check {
        viewer: String,
        viewee: String,

        /// Check a single skill instead of the whole catalog
        #[arg(short, long)]
        skill: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging (stderr, stdout는 결과 전용)
    let log_level = if args.debug { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = DatasetConfig::resolve(args.file.clone());
    let system = config
        .load()
        .with_context(|| format!("Cannot load dataset {}", config.path().display()))?;

    let rendered = match args.command.unwrap_or(Command::Report { viewer: None }) {
        Command::Report { viewer } => {
            let report = match viewer {
                Some(viewer) => {
                    if !system.contains(&viewer) {
                        anyhow::bail!("Unknown viewer: {}", viewer);
                    }
                    if !system.networks.contains_key(&viewer) {
                        warn!(
                            "{} has no network entry: nothing is visible to them and they are not listed as a viewee",
                            viewer
                        );
                    }
                    VisibilityReport::for_viewer(&system, &viewer)
                }
                None if args.parallel => VisibilityReport::build_parallel(&system),
                None => VisibilityReport::build(&system),
            };
            output::report(&report, args.format)?
        }
        Command::Check {
            viewer,
            viewee,
            skill,
        } => {
            for person in [&viewer, &viewee] {
                if !system.contains(person) {
                    anyhow::bail!("Unknown person: {}", person);
                }
                if !system.networks.contains_key(person.as_str()) {
                    warn!("{} has no network entry", person);
                }
            }

            let aggregator = SkillAggregator::new(&system);
            match skill {
                Some(skill) => {
                    let visible = aggregator.visibility(&viewer, &viewee, &skill);
                    output::skill(&viewer, &viewee, &skill, visible, args.format)?
                }
                None => {
                    let skills = aggregator.visible_skills(&viewer, &viewee);
                    output::pair(&viewer, &viewee, &skills, args.format)?
                }
            }
        }
    };

    print!("{}", rendered);
    Ok(())
}
