use anyhow::{Context, Result};
use redcsv::RedditScraper;
use std::time::Duration;

const SUBREDDIT: &str = "Steam";
const MODE: &str = "new"; // new | hot | top
const LIMIT: usize = 1000;
const OUTPUT_CSV: &str = "reddit_posts.csv";

// e.g. &["Review", "Bug Report"]; empty = no filter
const FLAIR_WHITELIST: &[&str] = &[];

const WRITE_PAUSE: Duration = Duration::from_millis(50);

// Credentials come from the environment:
//   export REDDIT_CLIENT_ID="..."
//   export REDDIT_CLIENT_SECRET="..."
//   export REDDIT_USER_AGENT="myapp:reddit_scraper:v1 (by u/yourusername)"

fn main() -> Result<()> {
    let summary = RedditScraper::new()
        .subreddit(SUBREDDIT)
        .mode(MODE)
        .limit(LIMIT)
        .flair_allow_list(FLAIR_WHITELIST.iter().copied())
        .output_path(OUTPUT_CSV)
        .write_pause(WRITE_PAUSE)
        .run()
        .with_context(|| format!("scraping r/{SUBREDDIT} into {OUTPUT_CSV}"))?;

    println!("{summary}");
    Ok(())
}
