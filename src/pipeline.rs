use crate::client::RedditClient;
use crate::config::ScrapeOptions;
use crate::credentials::Credentials;
use crate::error::ScrapeError;
use crate::filters::FlairFilter;
use crate::listing::{ListingMode, PostSource, TopWindow};
use crate::progress::make_count_progress;
use crate::record::PostRecord;
use crate::util::init_tracing_once;
use crate::writer::PostCsvWriter;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Clone, Debug, Default)]
pub struct RedditScraper {
    pub(crate) opts: ScrapeOptions,
}

/// Outcome of a completed run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeSummary {
    /// Posts pulled from the listing, before flair filtering.
    pub fetched: u64,
    /// Rows written to the CSV (excludes the header).
    pub written: u64,
    pub output: PathBuf,
}

impl fmt::Display for ScrapeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Saved {} posts to {}", self.written, self.output.display())
    }
}

impl RedditScraper {
    pub fn new() -> Self {
        Self { opts: ScrapeOptions::default() }
    }

    pub fn from_options(opts: ScrapeOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &ScrapeOptions {
        &self.opts
    }

    // -------- Builder methods --------
    pub fn subreddit(mut self, sub: impl AsRef<str>) -> Self { self.opts = self.opts.with_subreddit(sub); self }
    pub fn mode(mut self, mode: impl Into<String>) -> Self { self.opts = self.opts.with_mode(mode); self }
    pub fn limit(mut self, limit: usize) -> Self { self.opts = self.opts.with_limit(limit); self }
    pub fn flair_allow_list<I, S>(mut self, flairs: I) -> Self where I: IntoIterator<Item = S>, S: Into<String> { self.opts = self.opts.with_flair_allow_list(flairs); self }
    pub fn output_path(mut self, path: impl AsRef<Path>) -> Self { self.opts = self.opts.with_output_path(path); self }
    pub fn write_pause(mut self, pause: Duration) -> Self { self.opts = self.opts.with_write_pause(pause); self }
    pub fn top_window(mut self, window: TopWindow) -> Self { self.opts = self.opts.with_top_window(window); self }
    pub fn progress(mut self, yes: bool) -> Self { self.opts = self.opts.with_progress(yes); self }
    pub fn progress_label(mut self, label: impl Into<String>) -> Self { self.opts = self.opts.with_progress_label(label); self }
    pub fn io_write_buffer(mut self, bytes: usize) -> Self { self.opts = self.opts.with_io_write_buffer(bytes); self }

    /// Load credentials from the environment, build the Reddit client and run.
    pub fn run(self) -> Result<ScrapeSummary, ScrapeError> {
        let credentials = Credentials::from_env()?;
        let client = RedditClient::new(credentials)?.with_top_window(self.opts.top_window);
        self.run_with(&client)
    }

    /// Single forward pass over `source`: fetch, map, filter, write.
    ///
    /// The mode is validated before the output file is created or anything is
    /// fetched. Any later error propagates immediately; rows already written
    /// stay in the file.
    pub fn run_with<S: PostSource + ?Sized>(&self, source: &S) -> Result<ScrapeSummary, ScrapeError> {
        init_tracing_once();
        let opts = &self.opts;
        let mode: ListingMode = opts.mode.parse()?;
        let filter = FlairFilter::new(opts.flair_allow_list.iter().cloned());

        tracing::info!(
            subreddit = %opts.subreddit,
            mode = %mode,
            limit = opts.limit,
            flair_filter = filter.is_enabled(),
            output = %opts.output_path.display(),
            "starting scrape"
        );

        let mut writer = PostCsvWriter::create(&opts.output_path, opts.write_buffer_bytes)?;

        let pb = if opts.progress {
            let label = opts
                .progress_label
                .clone()
                .unwrap_or_else(|| format!("r/{} ({})", opts.subreddit, mode));
            Some(make_count_progress(opts.limit as u64, &label))
        } else {
            None
        };

        let mut fetched: u64 = 0;
        for item in source.fetch_listing(&opts.subreddit, mode, opts.limit)? {
            let record = PostRecord::from(item?);
            fetched += 1;
            if let Some(pb) = &pb { pb.inc(1); }

            if !filter.accepts(&record.flair) {
                continue;
            }
            writer.write(&record)?;

            if !opts.write_pause.is_zero() {
                std::thread::sleep(opts.write_pause);
            }
        }

        let written = writer.finish()?;
        if let Some(pb) = pb { pb.finish_and_clear(); }

        if filter.is_enabled() && fetched > 0 && written == 0 {
            tracing::warn!(fetched, "flair allow-list matched none of the fetched posts");
        }
        tracing::info!(fetched, written, "scrape complete");

        Ok(ScrapeSummary { fetched, written, output: opts.output_path.clone() })
    }
}
