//! Spinners for pipeline stages without a known length
//!
//! Built on indicatif; nothing is drawn when stderr is not a terminal.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Template for stage spinners
pub const STAGE_SPINNER_TEMPLATE: &str = "{spinner:.green} [{elapsed}] {msg}";

const TICK_INTERVAL: Duration = Duration::from_millis(120);

/// Start a spinner labelled with the running stage
#[must_use]
pub fn stage_spinner(stage: &str) -> ProgressBar {
    let style = ProgressStyle::with_template(STAGE_SPINNER_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    let spinner = ProgressBar::new_spinner()
        .with_style(style)
        .with_message(stage.to_string());
    spinner.enable_steady_tick(TICK_INTERVAL);
    spinner
}

/// Stop a stage spinner and remove it from the terminal
pub fn finish_stage(spinner: &ProgressBar) {
    spinner.finish_and_clear();
}
