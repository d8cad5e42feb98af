use anyhow::Result;
use regex::Regex;
use tracing::{info, warn};

use crate::stats::VideoRecord;

/// Ordered fallback patterns for the subscriber count: the embedded-JSON
/// shape first, then the visible page text forms.
const SUBSCRIBER_PATTERNS: [&str; 3] = [
    r#""subscriberCountText":\{"simpleText":"([^"]+)""#,
    r"(\d+\.?\d*[KMB]?) subscribers",
    r"(\d+\.?\d*[KMB]?) subscriber",
];

const VIEW_PATTERN: &str = r#""viewCountText":\{"simpleText":"([^"]+)""#;
const TITLE_PATTERN: &str = r#""title":\{"runs":\[\{"text":"([^"]+)""#;
const PUBLISHED_PATTERN: &str = r#""publishedTimeText":\{"simpleText":"([^"]+)""#;

/// Compiled pattern sets for pulling channel fields out of raw page markup.
/// The three per-video fields live in different embedded-data shapes, so they
/// are extracted independently and joined positionally (see [`zip_videos`]).
pub struct PageExtractor {
    subscriber_patterns: Vec<Regex>,
    view_re: Regex,
    title_re: Regex,
    published_re: Regex,
}

impl PageExtractor {
    pub fn new() -> Result<Self> {
        let subscriber_patterns = SUBSCRIBER_PATTERNS
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PageExtractor {
            subscriber_patterns,
            view_re: Regex::new(VIEW_PATTERN)?,
            title_re: Regex::new(TITLE_PATTERN)?,
            published_re: Regex::new(PUBLISHED_PATTERN)?,
        })
    }

    /// First match of the first pattern that hits, with unit words stripped.
    /// `None` when no pattern matches; the caller degrades, never aborts.
    pub fn subscriber_count(&self, html: &str) -> Option<String> {
        for pattern in &self.subscriber_patterns {
            if let Some(captures) = pattern.captures(html) {
                let text = captures[1]
                    .replace(" subscribers", "")
                    .replace(" subscriber", "")
                    .trim()
                    .to_string();
                return Some(text);
            }
        }
        warn!(component = "extract", "No subscriber-count pattern matched");
        None
    }

    /// Extracts up to `count` recent videos from the videos-page markup.
    pub fn videos(&self, html: &str, count: usize) -> Vec<VideoRecord> {
        let titles = all_captures(&self.title_re, html);
        let views = all_captures(&self.view_re, html);
        let published = all_captures(&self.published_re, html);

        info!(
            component = "extract",
            titles = titles.len(),
            views = views.len(),
            published = published.len(),
            "Extracted per-video field sequences"
        );

        zip_videos(titles, views, published, count)
    }
}

fn all_captures(re: &Regex, html: &str) -> Vec<String> {
    re.captures_iter(html)
        .map(|c| c[1].to_string())
        .collect()
}

/// Positional join of the independently extracted field sequences, assuming
/// extraction order matches render order. Truncates to the shorter of the
/// title and view sequences; a missing published entry becomes "Unknown".
/// Isolated here so a structural join could replace it without touching the
/// scoring code.
fn zip_videos(
    titles: Vec<String>,
    views: Vec<String>,
    published: Vec<String>,
    count: usize,
) -> Vec<VideoRecord> {
    let take = count.min(titles.len()).min(views.len());

    titles
        .into_iter()
        .zip(views)
        .enumerate()
        .take(take)
        .map(|(i, (title, views))| VideoRecord {
            title,
            views,
            published: published.get(i).cloned().unwrap_or_else(|| "Unknown".to_string()),
        })
        .collect()
}
