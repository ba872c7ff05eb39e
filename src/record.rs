//! Fixed-schema output row built from a raw listing post.

use crate::response::RawPost;
use serde::Serialize;

/// Output column order. Serialization of `PostRecord` follows the same order.
pub const CSV_HEADER: [&str; 7] = ["post_id", "created_utc", "title", "body", "score", "num_comments", "flair"];

/// One CSV row. Text fields are never absent: a null upstream value becomes `""`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PostRecord {
    pub post_id: String,
    pub created_utc: i64,
    pub title: String,
    pub body: String,
    pub score: i64,
    pub num_comments: u64,
    pub flair: String,
}

#[inline]
pub fn safe_text(s: Option<String>) -> String {
    s.unwrap_or_default()
}

impl From<RawPost> for PostRecord {
    fn from(post: RawPost) -> Self {
        Self {
            post_id: post.id,
            // Reddit reports fractional seconds; whole seconds are kept.
            created_utc: post.created_utc as i64,
            title: safe_text(post.title),
            body: safe_text(post.selftext),
            score: post.score,
            num_comments: post.num_comments,
            flair: safe_text(post.link_flair_text),
        }
    }
}
