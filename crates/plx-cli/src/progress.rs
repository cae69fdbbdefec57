use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use plx_core::progress::JobProgress;

use crate::ui;

/// Terminal progress display for one job. A no-op when progress is disabled.
pub struct Progress {
    bar: Option<ProgressBar>,
}

fn terminal_columns() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
}

fn bar_template() -> &'static str {
    match terminal_columns() {
        Some(cols) if cols >= 110 => "{spinner:.cyan} {bar:40.cyan/blue} {pos:>3}% {msg}",
        Some(cols) if cols >= 80 => "{spinner:.cyan} {wide_bar:.cyan/blue} {pos:>3}% {msg}",
        _ => "{spinner:.cyan} {pos:>3}% {msg}",
    }
}

/// Status line for a snapshot, e.g. `running · chunk 3 of 10 · Analyzing`.
#[must_use]
pub fn describe(progress: &JobProgress) -> String {
    let mut parts = vec![progress.status.to_string()];
    if let Some(chunk) = progress.chunk_label() {
        parts.push(chunk);
    }
    if !progress.message.is_empty() {
        parts.push(progress.message.clone());
    }
    parts.join(" · ")
}

impl Progress {
    /// A 0–100 percent bar.
    #[must_use]
    pub fn percent(message: &str) -> Self {
        if !ui::prefs().progress {
            return Self { bar: None };
        }

        let bar = ProgressBar::new(100);
        bar.enable_steady_tick(Duration::from_millis(120));
        bar.set_style(
            ProgressStyle::with_template(bar_template())
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar.set_message(message.to_string());
        Self { bar: Some(bar) }
    }

    #[must_use]
    pub fn spinner(message: &str) -> Self {
        if !ui::prefs().progress {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(Duration::from_millis(100));
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        Self { bar: Some(bar) }
    }

    /// Reflect a tracker snapshot.
    pub fn update(&self, progress: &JobProgress) {
        if let Some(bar) = &self.bar {
            bar.set_position(u64::from(progress.percent.min(100)));
            bar.set_message(describe(progress));
        }
    }

    pub fn finish_ok(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.set_position(100);
            bar.finish_with_message(message.to_string());
        }
    }

    pub fn finish_clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }

    pub fn finish_err(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.abandon_with_message(message.to_string());
        }
    }
}
