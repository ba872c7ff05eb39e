#![allow(dead_code)]

use redcsv::{ExternalServiceError, ListingMode, PostSource, PostStream, RawPost, ScrapeError};
use std::cell::{Cell, RefCell};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Build a synthetic listing post. `created_utc` carries a fractional part to
/// exercise truncation.
pub fn post(id: &str, flair: Option<&str>) -> RawPost {
    RawPost {
        id: id.to_string(),
        created_utc: 1_700_000_000.75,
        title: Some(format!("title {id}")),
        selftext: Some(format!("body of {id}")),
        score: 10,
        num_comments: 3,
        link_flair_text: flair.map(str::to_string),
    }
}

/// In-memory `PostSource`. Records every call, honours `limit`, and can fail
/// after yielding a fixed number of posts.
#[derive(Default)]
pub struct FakeSource {
    pub posts: Vec<RawPost>,
    pub fail_after: Option<usize>,
    pub calls: Cell<usize>,
    pub last_request: RefCell<Option<(String, ListingMode, usize)>>,
}

impl FakeSource {
    pub fn new(posts: Vec<RawPost>) -> Self {
        Self { posts, ..Default::default() }
    }

    pub fn failing_after(posts: Vec<RawPost>, n: usize) -> Self {
        Self { posts, fail_after: Some(n), ..Default::default() }
    }
}

impl PostSource for FakeSource {
    fn fetch_listing<'a>(
        &'a self,
        subreddit: &str,
        mode: ListingMode,
        limit: usize,
    ) -> Result<PostStream<'a>, ScrapeError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_request.borrow_mut() = Some((subreddit.to_string(), mode, limit));

        let fail_after = self.fail_after;
        let iter = self.posts.iter().take(limit).enumerate().map(move |(i, p)| {
            if fail_after.is_some_and(|n| i >= n) {
                Err(ScrapeError::ExternalService(ExternalServiceError::Auth("token revoked".into())))
            } else {
                Ok(p.clone())
            }
        });
        Ok(Box::new(iter))
    }
}

pub fn temp_out(name: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    (dir, path)
}

/// Read a CSV file as raw string records, header included.
pub fn read_csv_rows(path: &Path) -> Vec<Vec<String>> {
    let f = File::open(path).unwrap();
    let mut rdr = csv::ReaderBuilder::new().has_headers(false).from_reader(f);
    rdr.records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect()
}

pub fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path).unwrap().lines().map(str::to_string).collect()
}
