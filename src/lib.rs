mod config;
mod credentials;
mod error;
mod util;
mod progress;

mod response;
mod listing;
mod client;

mod record;
mod filters;
mod writer;
mod pipeline;

pub use crate::config::ScrapeOptions;
pub use crate::credentials::{Credentials, CLIENT_ID_VAR, CLIENT_SECRET_VAR, USER_AGENT_VAR};
pub use crate::error::{ExternalServiceError, ScrapeError};
pub use crate::pipeline::{RedditScraper, ScrapeSummary};

// Listing capability and the Reddit-backed implementation.
pub use crate::listing::{get_posts, ListingMode, PostSource, PostStream, TopWindow};
pub use crate::client::{Listing, RedditClient, RedditEndpoints, MAX_PAGE_SIZE};
pub use crate::response::RawPost;

// Row mapping, filtering and output, usable on their own.
pub use crate::record::{safe_text, PostRecord, CSV_HEADER};
pub use crate::filters::FlairFilter;
pub use crate::writer::PostCsvWriter;

pub use crate::util::init_tracing_once;
