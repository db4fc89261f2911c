//! Per-texture status lines and progress display

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use crate::textures::Texture;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Textures: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Reports generation progress to the terminal
///
/// Status lines are printed above the bar while it is visible, and straight
/// to stdout when the bar is hidden (non-terminal output). Quiet mode prints
/// nothing at all.
pub struct ProgressReporter {
    bar: ProgressBar,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a reporter for `total` textures
    pub fn new(total: usize, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(PROGRESS_STYLE.clone());
            bar
        };

        Self { bar, quiet }
    }

    /// Show which texture is being drawn
    pub fn start_texture(&self, texture: Texture) {
        self.bar.set_message(texture.name());
    }

    /// Record a written texture and print its status line
    pub fn texture_written(&self, texture: Texture, path: &Path) {
        self.bar.inc(1);
        log::info!("wrote {texture} to {}", path.display());
        self.status(&format!("Created {}", texture.file_name()));
    }

    /// Clear the bar and print the completion message
    pub fn finish(&self) {
        self.bar.finish_and_clear();
        self.status("All textures created successfully!");
    }

    // Allow print for user feedback when no bar is drawn
    #[allow(clippy::print_stdout)]
    fn status(&self, line: &str) {
        if self.quiet {
            return;
        }
        if self.bar.is_hidden() {
            println!("{line}");
        } else {
            self.bar.println(line);
        }
    }
}
