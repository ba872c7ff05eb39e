//! Listing modes and the narrow fetch capability the pipeline depends on.

use crate::error::ScrapeError;
use crate::response::RawPost;
use std::fmt;
use std::str::FromStr;

/// Which subreddit listing to read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListingMode {
    /// Reverse-chronological.
    New,
    /// Reddit's ranking.
    Hot,
    /// By score over the configured time window.
    Top,
}

impl ListingMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ListingMode::New => "new",
            ListingMode::Hot => "hot",
            ListingMode::Top => "top",
        }
    }
}

impl fmt::Display for ListingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListingMode {
    type Err = ScrapeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(ListingMode::New),
            "hot" => Ok(ListingMode::Hot),
            "top" => Ok(ListingMode::Top),
            other => Err(ScrapeError::InvalidMode(other.to_string())),
        }
    }
}

/// Time window applied to `top` listings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TopWindow {
    Hour,
    Day,
    Week,
    Month,
    Year,
    #[default]
    All,
}

impl TopWindow {
    pub fn as_str(self) -> &'static str {
        match self {
            TopWindow::Hour => "hour",
            TopWindow::Day => "day",
            TopWindow::Week => "week",
            TopWindow::Month => "month",
            TopWindow::Year => "year",
            TopWindow::All => "all",
        }
    }
}

/// Lazy, finite, single-pass sequence of posts in listing order.
pub type PostStream<'a> = Box<dyn Iterator<Item = Result<RawPost, ScrapeError>> + 'a>;

/// Anything that can produce a subreddit listing. `RedditClient` is the real
/// implementation; tests plug in an in-memory source.
pub trait PostSource {
    /// Start a listing of at most `limit` posts. Implementations may defer all
    /// network work until the stream is first polled.
    fn fetch_listing<'a>(
        &'a self,
        subreddit: &str,
        mode: ListingMode,
        limit: usize,
    ) -> Result<PostStream<'a>, ScrapeError>;
}

/// Parse `mode` and start the listing. An unknown mode fails before the
/// source is asked for anything.
pub fn get_posts<'a, S>(
    source: &'a S,
    subreddit: &str,
    mode: &str,
    limit: usize,
) -> Result<PostStream<'a>, ScrapeError>
where
    S: PostSource + ?Sized,
{
    let mode: ListingMode = mode.parse()?;
    source.fetch_listing(subreddit, mode, limit)
}
