//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TEMPLATE: &str = "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}";

/// Progress reporter for file processing
///
/// Shared by worker threads in parallel mode; all methods take `&self`.
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a reporter; nothing is drawn when `quiet` or with a single input
    pub fn new(total_files: u64, quiet: bool) -> Self {
        if quiet || total_files < 2 {
            return Self { progress_bar: None };
        }

        let pb = ProgressBar::new(total_files);
        match ProgressStyle::default_bar().template(TEMPLATE) {
            Ok(style) => pb.set_style(style.progress_chars("##-")),
            Err(e) => log::debug!("Falling back to default progress style: {e}"),
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        Self {
            progress_bar: Some(pb),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.progress_bar.is_some()
    }

    /// Update progress for a completed file
    pub fn file_completed(&self, name: &str, replacements: usize) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("{name}: {replacements} replacements"));
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Complete");
        }
    }
}
