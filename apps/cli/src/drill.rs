//! The interactive drill loop.

use crate::render;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sixpence_core::{DisplayConfig, Scheduler, SessionStats};
use std::io::{BufRead, Write};

/// How a drill session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DrillOutcome {
    /// Every item was answered correctly.
    Completed,
    /// Input ran out with items still pending.
    Interrupted,
}

/// Final state of a drill session.
#[derive(Debug, Clone, Serialize)]
pub struct DrillSummary {
    pub outcome: DrillOutcome,
    pub stats: SessionStats,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Drill until the queue is empty or `input` hits end of file.
///
/// Each round prints the status line and the head item, reads one line as
/// the answer, judges it and prints the verdict.
pub fn run_drill<R: BufRead, W: Write>(
    scheduler: &mut Scheduler,
    display: &DisplayConfig,
    mut input: R,
    mut output: W,
) -> anyhow::Result<DrillSummary> {
    let started_at = Utc::now();
    let mut outcome = DrillOutcome::Completed;

    while let Some(item) = scheduler.current_item() {
        writeln!(output, "{}", render::status_line(&scheduler.stats()?))?;
        writeln!(output, "{}", render::question(item, display))?;
        write!(output, "[Your answer] ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            outcome = DrillOutcome::Interrupted;
            break;
        }

        let accepted = item.answers().to_vec();
        let correct = scheduler.submit_answer(line.trim()).unwrap_or(false);
        writeln!(output, "{}\n", render::feedback(correct, &accepted, display))?;
    }

    let finished_at = Utc::now();
    let stats = scheduler.stats()?;

    match outcome {
        DrillOutcome::Completed => writeln!(output, "All items done.")?,
        DrillOutcome::Interrupted => writeln!(output, "Session ended with {} item(s) left.", stats.todo)?,
    }
    writeln!(output, "{}", render::status_line(&stats))?;
    writeln!(
        output,
        "Time: {}",
        render::elapsed(finished_at.signed_duration_since(started_at))
    )?;

    tracing::info!(
        outcome = ?outcome,
        attempted = stats.attempted,
        correct = stats.correct,
        "Drill finished"
    );

    Ok(DrillSummary {
        outcome,
        stats,
        started_at,
        finished_at,
    })
}
