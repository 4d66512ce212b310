use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

/// Progress over a set of files, measured in bytes imported.
pub struct ImportProgressBar {
    bar: ProgressBar,
}

impl ImportProgressBar {
    pub fn new(files: &[PathBuf]) -> Self {
        let total_bytes: u64 = files.iter().map(|p| file_size(p)).sum();

        let bar = ProgressBar::new(total_bytes);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(" {spinner:.cyan} Importing [{wide_bar:.cyan/blue}] {percent:>3}% {msg}")
                .unwrap(),
        );

        Self { bar }
    }

    pub fn file_done(&self, path: &Path) {
        self.bar.inc(file_size(path));
        self.bar.set_message(path.display().to_string());
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

fn file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
