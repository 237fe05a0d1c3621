//! Stage progress display for long-running wall queries

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix:>8}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{elapsed_precise}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Shows one progress bar per pipeline stage
///
/// Bars are drawn to stderr so the wall counts on stdout stay clean.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    hidden: bool,
    stages_completed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager drawing to stderr
    pub const fn new() -> Self {
        Self {
            bar: None,
            hidden: false,
            stages_completed: 0,
        }
    }

    /// Create a progress manager that tracks stages without drawing
    pub const fn hidden() -> Self {
        Self {
            bar: None,
            hidden: true,
            stages_completed: 0,
        }
    }

    /// Begin a new stage of `len` steps, finishing any stage still open
    pub fn start_stage(&mut self, label: &'static str, len: usize) {
        self.finish_stage();

        let bar = ProgressBar::with_draw_target(Some(len as u64), self.draw_target());
        bar.set_style(STAGE_STYLE.clone());
        bar.set_prefix(label);
        self.bar = Some(bar);
    }

    /// Report the absolute position within the current stage
    pub fn set_position(&self, position: usize) {
        if let Some(ref bar) = self.bar {
            bar.set_position(position as u64);
        }
    }

    /// Current position within the open stage, if any
    pub fn position(&self) -> Option<usize> {
        self.bar.as_ref().map(|bar| bar.position() as usize)
    }

    /// Complete and clear the current stage
    pub fn finish_stage(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
            self.stages_completed += 1;
        }
    }

    /// Number of stages finished so far
    pub const fn stages_completed(&self) -> usize {
        self.stages_completed
    }

    fn draw_target(&self) -> ProgressDrawTarget {
        if self.hidden {
            ProgressDrawTarget::hidden()
        } else {
            ProgressDrawTarget::stderr()
        }
    }
}
