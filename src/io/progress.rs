//! Progress display for commands that walk many map files

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Maps: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar counting processed files
///
/// Tracks how many files passed and failed so the final message can report
/// both. A hidden manager keeps the counts but never draws.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    visible: bool,
    succeeded: usize,
    failed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bar yet
    pub const fn new() -> Self {
        Self {
            bar: None,
            visible: true,
            succeeded: 0,
            failed: 0,
        }
    }

    /// Create a manager that only counts, for quiet runs
    pub const fn hidden() -> Self {
        Self {
            bar: None,
            visible: false,
            succeeded: 0,
            failed: 0,
        }
    }

    /// Start a batch of `file_count` files, resetting the counts
    pub fn initialize(&mut self, file_count: usize) {
        if self.visible {
            let bar = ProgressBar::new(file_count as u64);
            bar.set_style(BATCH_STYLE.clone());
            self.bar = Some(bar);
        }
        self.succeeded = 0;
        self.failed = 0;
    }

    /// Show the file currently being processed
    pub fn start_file(&self, path: &Path) {
        if let Some(ref bar) = self.bar {
            let display_name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            bar.set_message(display_name);
        }
    }

    /// Record the outcome of one file and advance the bar
    pub fn complete_file(&mut self, succeeded: bool) {
        if succeeded {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Files processed successfully so far
    pub const fn succeeded(&self) -> usize {
        self.succeeded
    }

    /// Files that failed so far
    pub const fn failed(&self) -> usize {
        self.failed
    }

    /// Run `f` with the bar hidden so it can write to the terminal
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        match self.bar {
            Some(ref bar) => bar.suspend(f),
            None => f(),
        }
    }

    /// Close the bar with a summary
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message(format!(
                "{} ok, {} failed",
                self.succeeded, self.failed
            ));
        }
    }
}
