use crate::listing::TopWindow;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// User-facing options with sensible defaults and builder chaining.
#[derive(Clone, Debug)]
pub struct ScrapeOptions {
    pub subreddit: String,            // no "r/" prefix, case preserved
    pub mode: String,                 // validated when a run starts
    pub limit: usize,                 // >= 1
    pub flair_allow_list: Vec<String>, // empty = no filter
    pub output_path: PathBuf,
    pub write_pause: Duration,        // pacing between written rows; zero disables
    pub top_window: TopWindow,        // only used by "top"
    pub progress: bool,               // show progress bar on stderr
    pub progress_label: Option<String>,

    // IO tuning
    pub write_buffer_bytes: usize,    // csv writer buffer capacity
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            subreddit: "Steam".to_string(),
            mode: "new".to_string(),
            limit: 1000,
            flair_allow_list: Vec::new(),
            output_path: PathBuf::from("reddit_posts.csv"),
            write_pause: Duration::from_millis(50),
            top_window: TopWindow::All,
            progress: true,
            progress_label: None,

            write_buffer_bytes: 64 * 1024,
        }
    }
}

impl ScrapeOptions {
    pub fn with_subreddit(mut self, sub: impl AsRef<str>) -> Self {
        let s = sub.as_ref().trim();
        let s = s.strip_prefix("r/").or_else(|| s.strip_prefix("/r/")).unwrap_or(s);
        self.subreddit = s.trim_end_matches('/').to_string();
        self
    }
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }
    pub fn with_flair_allow_list<I, S>(mut self, flairs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flair_allow_list = flairs.into_iter().map(Into::into).collect();
        self
    }
    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output_path = path.as_ref().to_path_buf();
        self
    }
    pub fn with_write_pause(mut self, pause: Duration) -> Self {
        self.write_pause = pause;
        self
    }
    pub fn with_top_window(mut self, window: TopWindow) -> Self {
        self.top_window = window;
        self
    }
    pub fn with_progress(mut self, yes: bool) -> Self {
        self.progress = yes;
        self
    }
    pub fn with_progress_label(mut self, label: impl Into<String>) -> Self {
        self.progress_label = Some(label.into());
        self
    }
    pub fn with_io_write_buffer(mut self, bytes: usize) -> Self {
        self.write_buffer_bytes = bytes.max(8 * 1024);
        self
    }
}
