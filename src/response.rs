//! Wire types for the parts of Reddit's JSON we read.

use serde::Deserialize;

/// Generic `{ "kind": ..., "data": ... }` envelope Reddit wraps every object in.
#[derive(Debug, Deserialize)]
pub struct Thing<T> {
    pub kind: String,
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub struct ListingData<T> {
    /// Fullname cursor of the last item on this page; `None` once the listing is exhausted.
    #[serde(default)]
    pub after: Option<String>,
    #[serde(default = "Vec::new")]
    pub children: Vec<T>,
}

/// One page of a subreddit listing. Children are kept as raw JSON so non-post
/// kinds can be skipped without failing the page.
pub type ListingPage = Thing<ListingData<Thing<serde_json::Value>>>;

/// Fields of a `t3` (link/self post) object. Unknown fields are ignored; the
/// numeric fields are required so a truncated post fails to decode.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RawPost {
    pub id: String,
    pub created_utc: f64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub selftext: Option<String>,
    pub score: i64,
    pub num_comments: u64,
    #[serde(default)]
    pub link_flair_text: Option<String>,
}

/// Token endpoint reply. Reddit sometimes answers 200 with `{"error": ...}`.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Reddit kind prefix for link/self posts.
pub const POST_KIND: &str = "t3";
