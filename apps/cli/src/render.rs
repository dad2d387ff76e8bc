//! Plain-text rendering of drill screens.

use sixpence_core::{DisplayConfig, Item, ItemType, SessionStats};

/// One-line status bar: counters, percentage and grade.
///
/// Percentage and grade stay blank until the first attempt.
pub fn status_line(stats: &SessionStats) -> String {
    let percentage = stats
        .percentage_correct
        .map(|p| format!("{}%", p))
        .unwrap_or_default();
    let grade = stats.grade.map(|g| format!("{:.1}", g)).unwrap_or_default();

    [
        ("Attempted", stats.attempted.to_string()),
        ("To do", stats.todo.to_string()),
        ("Correct", stats.correct.to_string()),
        ("Incorrect", stats.incorrect.to_string()),
        ("Percentage", percentage),
        ("Grade", grade),
    ]
    .iter()
    .map(|(key, value)| format!("[{}] {}", key, value).trim_end().to_string())
    .collect::<Vec<_>>()
    .join(" | ")
}

/// The question block shown before reading an answer.
pub fn question(item: &Item, display: &DisplayConfig) -> String {
    let mut out = String::from("[Question]\n");

    match item.item_type() {
        ItemType::Text => out.push_str(item.question()),
        other => out.push_str(&format!("[{}] {}", other, item.question())),
    }

    if display.show_hints {
        if let Some(hint) = item.hint() {
            out.push_str(&format!("\n[hint: {}]", hint));
        }
    }

    out
}

/// Verdict after an answer, with the accepted answers on a miss if enabled.
pub fn feedback(correct: bool, accepted: &[String], display: &DisplayConfig) -> String {
    if correct {
        return "CORRECT!".to_string();
    }

    let mut out = String::from("WRONG!");
    if display.show_answers_on_fail {
        out.push_str("\n[Accepted answers]");
        for answer in accepted {
            out.push_str(&format!("\n  {}", answer));
        }
    }
    out
}

/// Human-readable duration such as `3m 07s`.
pub fn elapsed(duration: chrono::Duration) -> String {
    let seconds = duration.num_seconds().max(0);
    if seconds < 60 {
        format!("{}s", seconds)
    } else {
        format!("{}m {:02}s", seconds / 60, seconds % 60)
    }
}
