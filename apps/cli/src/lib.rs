pub mod cli;
pub mod drill;
pub mod render;
pub mod settings;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser as _;
use sixpence_core::{Config, Item, Parser, Scheduler};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Command};
use crate::drill::run_drill;
use crate::settings::Overrides;

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = settings::load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Drill {
            files,
            no_hints,
            no_answers,
        } => {
            Overrides {
                right: cli.right,
                no_hints,
                no_answers,
            }
            .apply(&mut config);

            let mut scheduler = build_scheduler(&config, &files)?;
            let stdin = std::io::stdin();
            run_drill(&mut scheduler, &config.display, stdin.lock(), std::io::stdout())?;
        }
        Command::Check { files, json } => {
            Overrides {
                right: cli.right,
                ..Overrides::default()
            }
            .apply(&mut config);

            check(&config, &files, json, std::io::stdout().lock())?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Load every file, in order, into one session queue.
pub fn build_scheduler(config: &Config, files: &[PathBuf]) -> anyhow::Result<Scheduler> {
    let parser = Parser::new(config);
    let mut scheduler = Scheduler::with_grade_scale(Vec::<Item>::new(), config.grade_scale.clone());

    for path in files {
        let items = load(&parser, path)?;
        scheduler.extend(items);
    }

    tracing::info!("Session ready with {} items", scheduler.todo());
    Ok(scheduler)
}

/// Parse `files` and write each item back out, as canonical lines or JSON.
pub fn check<W: Write>(
    config: &Config,
    files: &[PathBuf],
    json: bool,
    mut output: W,
) -> anyhow::Result<()> {
    let parser = Parser::new(config);
    let mut items = Vec::new();
    for path in files {
        items.extend(load(&parser, path)?);
    }

    if json {
        serde_json::to_writer_pretty(&mut output, &items)?;
        writeln!(output)?;
    } else {
        for item in &items {
            writeln!(output, "{}", item.to_text(parser.format()))?;
        }
    }

    Ok(())
}

fn load(parser: &Parser, path: &Path) -> anyhow::Result<Vec<Item>> {
    parser
        .load_file(path)
        .with_context(|| format!("could not load items from {}", path.display()))
}
