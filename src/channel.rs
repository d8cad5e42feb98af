use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::info;
use url::Url;

use crate::cadence::estimate_cadence;
use crate::error::AnalyzeError;
use crate::extract::PageExtractor;
use crate::fetch::Fetcher;
use crate::fit::evaluate_fit;
use crate::keywords::{self, KeywordConfig};
use crate::numeric::Magnitude;
use crate::relevance::is_relevant;
use crate::stats::{AnalysisResult, ChannelSnapshot, VideoRecord};
use crate::utils::format_number;
use crate::Args;

const DEFAULT_SITE: &str = "https://www.youtube.com";

/// The home and videos-page addresses derived from one channel input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelAddress {
    pub handle: String,
    pub base_url: String,
    pub videos_url: String,
}

/// Normalizes a bare handle or absolute URL into the pair of addresses the
/// run fetches. The handle is the last non-empty path segment; both fetch
/// addresses are rebuilt from it against the default site.
pub fn resolve_channel_address(input: &str) -> Result<ChannelAddress, AnalyzeError> {
    let absolute = if input.starts_with("http") {
        input.to_string()
    } else {
        format!("{DEFAULT_SITE}/{}", input.trim_start_matches('/'))
    };

    let parsed = Url::parse(&absolute).map_err(|source| AnalyzeError::Address {
        input: input.to_string(),
        source,
    })?;

    let handle = parsed
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .unwrap_or_default()
        .to_string();

    let base_url = format!("{DEFAULT_SITE}/{handle}");
    let videos_url = format!("{base_url}/videos");

    Ok(ChannelAddress {
        handle,
        base_url,
        videos_url,
    })
}

/// Runs the whole pipeline for one channel: two fetches, extraction, the
/// aggregate metrics and the fit evaluation. The only hard-stop conditions
/// are a failed fetch and a zero-video extraction; everything else degrades
/// to placeholder values.
pub fn analyze_channel(channel: &str, args: &Args) -> Result<AnalysisResult> {
    let total_start = Instant::now();

    let address = resolve_channel_address(channel)?;
    info!(handle = %address.handle, "Starting channel analysis");

    let config = keywords::load_keyword_config(args.keywords.as_deref())?;
    let extractor = PageExtractor::new()?;
    let fetcher = Fetcher::new(Duration::from_secs(args.timeout));

    let main_html = fetcher.get(&address.base_url)?;
    let videos_html = fetcher.get(&address.videos_url)?;

    let result = build_result(&address, &main_html, &videos_html, args.count, &extractor, &config)?;

    info!(
        handle = %address.handle,
        videos = result.snapshot.recent_videos.len(),
        rating = %result.fit.rating,
        duration_ms = total_start.elapsed().as_millis(),
        "Analysis completed"
    );

    Ok(result)
}

/// Pure tail of the pipeline: page text in, result record out. Deterministic
/// in its inputs, which keeps runs on identical page content identical.
fn build_result(
    address: &ChannelAddress,
    main_html: &str,
    videos_html: &str,
    count: usize,
    extractor: &PageExtractor,
    config: &KeywordConfig,
) -> Result<AnalysisResult, AnalyzeError> {
    let subscribers = extractor.subscriber_count(main_html);
    let videos = extractor.videos(videos_html, count);

    if videos.is_empty() {
        return Err(AnalyzeError::NoVideos {
            url: address.videos_url.clone(),
        });
    }

    let subscriber_numeric = subscribers
        .as_deref()
        .map(|s| Magnitude::parse(s).value() as u64)
        .unwrap_or(0);

    let published: Vec<String> = videos.iter().map(|v| v.published.clone()).collect();

    let snapshot = ChannelSnapshot {
        handle: address.handle.clone(),
        url: address.base_url.clone(),
        subscribers,
        subscriber_numeric,
        average_views: average_views(&videos),
        cadence: estimate_cadence(&published),
        ai_relevant: is_relevant(&videos, &config.relevance),
        recent_videos: videos,
    };

    let fit = evaluate_fit(&snapshot, &config.categories);

    Ok(AnalysisResult { snapshot, fit })
}

fn average_views(videos: &[VideoRecord]) -> u64 {
    if videos.is_empty() {
        return 0;
    }
    let total: f64 = videos.iter().map(|v| Magnitude::parse(&v.views).value()).sum();
    (total / videos.len() as f64) as u64
}

pub fn print_report(result: &AnalysisResult) {
    let snapshot = &result.snapshot;
    let fit = &result.fit;
    let banner = "=".repeat(70);

    println!("\n{banner}");
    println!("YouTube Channel Analysis Report");
    println!("{banner}\n");

    println!("Channel: {}", snapshot.handle);
    println!("URL: {}\n", snapshot.url);

    println!("METRICS:");
    println!(
        "- Subscribers: {} ({})",
        snapshot.subscribers.as_deref().unwrap_or("not found"),
        format_number(snapshot.subscriber_numeric)
    );
    println!(
        "- Average Views (Recent {}): {}",
        snapshot.recent_videos.len(),
        format_number(snapshot.average_views)
    );
    println!("- Update Frequency: {}", snapshot.cadence);
    println!(
        "- AI/Tech Related: {}\n",
        if snapshot.ai_relevant { "Yes" } else { "No" }
    );

    println!("RECENT VIDEOS:");
    for (i, video) in snapshot.recent_videos.iter().enumerate() {
        let title: String = video.title.chars().take(60).collect();
        let views_numeric = Magnitude::parse(&video.views).value() as u64;
        println!("\n{}. {}", i + 1, title);
        println!("   Views: {} ({})", format_number(views_numeric), video.views);
        println!("   Published: {}", video.published);
    }

    let engagement_rate = if snapshot.subscriber_numeric > 0 {
        snapshot.average_views as f64 / snapshot.subscriber_numeric as f64 * 100.0
    } else {
        0.0
    };

    println!("\n{banner}");
    println!("KEY INSIGHTS:");
    println!("- Engagement Rate: {engagement_rate:.1}% (views/subscribers)");
    println!(
        "- Content Focus: {}",
        if snapshot.ai_relevant {
            "AI/Tech Tools"
        } else {
            "General Content"
        }
    );
    println!("- Publishing Consistency: {}\n", snapshot.cadence);

    println!("COLLABORATION FIT:");
    println!("- Rating: {}", fit.rating);
    println!("- Reason: {}\n", fit.joined_reasons());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{CadenceBucket, FitRating};

    fn fixture_config() -> KeywordConfig {
        keywords::load_keyword_config(None).unwrap()
    }

    fn video_entry(title: &str, views: &str, published: &str) -> String {
        format!(
            r#""title":{{"runs":[{{"text":"{title}""viewCountText":{{"simpleText":"{views}""publishedTimeText":{{"simpleText":"{published}""#
        )
    }

    #[test]
    fn bare_handle_resolves_against_the_default_site() {
        let address = resolve_channel_address("@MoeLueker").unwrap();
        assert_eq!(address.handle, "@MoeLueker");
        assert_eq!(address.base_url, "https://www.youtube.com/@MoeLueker");
        assert_eq!(address.videos_url, "https://www.youtube.com/@MoeLueker/videos");
    }

    #[test]
    fn full_url_resolves_to_its_last_path_segment() {
        let address = resolve_channel_address("https://www.youtube.com/@MoeLueker").unwrap();
        assert_eq!(address.handle, "@MoeLueker");
        assert_eq!(address.base_url, "https://www.youtube.com/@MoeLueker");
    }

    #[test]
    fn trailing_slash_does_not_blank_the_handle() {
        let address = resolve_channel_address("https://www.youtube.com/@MoeLueker/").unwrap();
        assert_eq!(address.handle, "@MoeLueker");
    }

    #[test]
    fn average_views_handles_mixed_magnitudes_and_garbage() {
        let videos = vec![
            VideoRecord {
                title: "A".into(),
                views: "1K views".into(),
                published: "1 day ago".into(),
            },
            VideoRecord {
                title: "B".into(),
                views: "3,000 views".into(),
                published: "2 days ago".into(),
            },
            VideoRecord {
                title: "C".into(),
                views: "mystery".into(),
                published: "3 days ago".into(),
            },
        ];
        // (1000 + 3000 + 0) / 3
        assert_eq!(average_views(&videos), 1333);
        assert_eq!(average_views(&[]), 0);
    }

    #[test]
    fn zero_extracted_videos_is_a_hard_stop() {
        let address = resolve_channel_address("@empty").unwrap();
        let extractor = PageExtractor::new().unwrap();
        let err = build_result(
            &address,
            "<html></html>",
            "<html></html>",
            5,
            &extractor,
            &fixture_config(),
        )
        .unwrap_err();
        assert!(matches!(err, AnalyzeError::NoVideos { .. }));
    }

    #[test]
    fn missing_subscriber_count_degrades_instead_of_aborting() {
        let address = resolve_channel_address("@nosubs").unwrap();
        let extractor = PageExtractor::new().unwrap();
        let videos_html = video_entry("Some video", "1K views", "2 days ago");

        let result = build_result(
            &address,
            "<html>no counts</html>",
            &videos_html,
            5,
            &extractor,
            &fixture_config(),
        )
        .unwrap();

        assert_eq!(result.snapshot.subscribers, None);
        assert_eq!(result.snapshot.subscriber_numeric, 0);
        // One timestamp is below the 2-sample cadence floor.
        assert_eq!(result.snapshot.cadence, CadenceBucket::Unknown);
    }

    #[test]
    fn full_pipeline_over_fixture_markup() {
        let address = resolve_channel_address("@aichannel").unwrap();
        let extractor = PageExtractor::new().unwrap();

        let main_html = r#""subscriberCountText":{"simpleText":"10K subscribers"}"#;
        let videos_html = [
            video_entry("AI tutorial: automate everything", "12K views", "2 days ago"),
            video_entry("How to earn with ChatGPT", "8,000 views", "3 days ago"),
            video_entry("My GPT coding workflow", "4K views", "4 days ago"),
        ]
        .concat();

        let result = build_result(
            &address,
            main_html,
            &videos_html,
            5,
            &extractor,
            &fixture_config(),
        )
        .unwrap();

        let snapshot = &result.snapshot;
        assert_eq!(snapshot.subscribers.as_deref(), Some("10K"));
        assert_eq!(snapshot.subscriber_numeric, 10_000);
        assert_eq!(snapshot.recent_videos.len(), 3);
        assert_eq!(snapshot.average_views, 8_000);
        assert_eq!(snapshot.cadence, CadenceBucket::WithinThreeDays);
        assert!(snapshot.ai_relevant);
        assert_ne!(result.fit.rating, FitRating::Low);
        assert!(result
            .fit
            .reasons
            .iter()
            .any(|r| r.contains("engagement (80%)")));
    }

    #[test]
    fn identical_page_content_yields_identical_results() {
        let address = resolve_channel_address("@stable").unwrap();
        let extractor = PageExtractor::new().unwrap();
        let config = fixture_config();

        let main_html = r#""subscriberCountText":{"simpleText":"1.5K subscribers"}"#;
        let videos_html = [
            video_entry("AI news", "1K views", "1 day ago"),
            video_entry("Weekly vlog", "2K views", "8 days ago"),
        ]
        .concat();

        let first =
            build_result(&address, main_html, &videos_html, 5, &extractor, &config).unwrap();
        let second =
            build_result(&address, main_html, &videos_html, 5, &extractor, &config).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
