use std::time::Duration;

use dbcode::progress::{ProgressNotifier, Stage};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Spinner shown on the standard error while a command runs. Messages printed
/// through it do not get overwritten by the spinner.
#[derive(Debug, Clone)]
pub(crate) struct EncodeProgressBar {
    bar: ProgressBar,
}

impl EncodeProgressBar {
    pub fn new() -> EncodeProgressBar {
        let bar = ProgressBar::hidden();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} [{pos}/{len}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.enable_steady_tick(Duration::from_millis(50));
        bar.set_message("Initializing...");

        Self { bar }
    }

    pub fn show(&self) {
        self.bar.set_draw_target(ProgressDrawTarget::stderr());
    }

    pub fn is_hidden(&self) -> bool {
        self.bar.is_hidden()
    }

    pub fn set_message(&self, msg: &'static str) {
        self.bar.set_message(msg);
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear()
    }

    /// Prints a line on the standard error, above the spinner if it is
    /// visible.
    pub fn println<I: AsRef<str>>(&self, msg: I) {
        if self.is_hidden() {
            eprintln!("{}", msg.as_ref());
        } else {
            self.bar.println(msg);
        }
    }
}

impl ProgressNotifier for EncodeProgressBar {
    fn stage_started(&self, stage: Stage) {
        self.bar.set_message(format!("{}...", stage));
    }

    fn set_iter_num(&self, num_iter: u64) {
        self.bar.set_length(num_iter);
        self.bar.set_position(0);
    }

    fn inc_iter(&self) {
        self.bar.inc(1);
    }
}
