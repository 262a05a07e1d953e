//! Progress display for palette training and canvas generation

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Coordinates the training and generation progress bars
///
/// Training advances once per palette file; generation tracks colored pixels
/// and shows the number of regions filled in its prefix
pub struct ProgressManager {
    multi_progress: MultiProgress,
    training_bar: Option<ProgressBar>,
    generation_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static TRAINING_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Training   [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static GENERATION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Generating [{{bar:{PROGRESS_BAR_WIDTH}.green/blue}}] {{percent:>3}}% {{prefix}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            training_bar: None,
            generation_bar: None,
        }
    }

    /// Add the training bar for `file_count` palette files
    pub fn start_training(&mut self, file_count: usize) {
        let bar = ProgressBar::new(file_count as u64);
        bar.set_style(TRAINING_STYLE.clone());
        self.training_bar = Some(self.multi_progress.add(bar));
    }

    /// Advance the training bar past one palette file
    pub fn complete_palette(&self, path: &Path, trained: bool) {
        if let Some(ref bar) = self.training_bar {
            let name = path.file_name().unwrap_or_default().to_string_lossy();
            let marker = if trained { "✓" } else { "✗" };
            bar.set_message(format!("{marker} {name}"));
            bar.inc(1);
        }
    }

    /// Add the generation bar and return a handle for the generation pass
    ///
    /// The length is set by the pass once the pixel limit is known.
    pub fn start_generation(&mut self) -> ProgressBar {
        if let Some(ref bar) = self.training_bar {
            bar.finish();
        }

        let bar = self.multi_progress.add(ProgressBar::new(0));
        bar.set_style(GENERATION_STYLE.clone());
        self.generation_bar = Some(bar.clone());
        bar
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref bar) = self.generation_bar {
            bar.finish();
        }
        let _ = self.multi_progress.clear();
    }
}
