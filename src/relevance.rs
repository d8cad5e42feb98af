use crate::stats::VideoRecord;

/// Relevance threshold: at least this share of titles must contain a
/// relevance keyword.
const RELEVANCE_THRESHOLD: f64 = 0.6;

/// Classifies a channel as topically relevant when at least 60% of the
/// sampled titles contain a relevance keyword (case-insensitive substring).
/// The threshold is inclusive, so an empty sample is vacuously relevant
/// (0 >= 0). That quirk is pinned by a test below; in practice the
/// orchestrator aborts before this sees an empty list.
pub fn is_relevant(videos: &[VideoRecord], keywords: &[String]) -> bool {
    let relevant_count = videos
        .iter()
        .filter(|video| {
            let title = video.title.to_lowercase();
            keywords.iter().any(|kw| title.contains(kw.as_str()))
        })
        .count();

    relevant_count as f64 >= videos.len() as f64 * RELEVANCE_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    fn videos(titles: &[&str]) -> Vec<VideoRecord> {
        titles
            .iter()
            .map(|t| VideoRecord {
                title: t.to_string(),
                views: "1K views".to_string(),
                published: "1 day ago".to_string(),
            })
            .collect()
    }

    fn keywords() -> Vec<String> {
        vec!["ai".to_string(), "chatgpt".to_string()]
    }

    #[test]
    fn three_of_five_matching_titles_is_relevant_at_the_boundary() {
        let videos = videos(&[
            "AI coding assistants",
            "ChatGPT for writers",
            "My AI workflow",
            "Vacation vlog",
            "Cooking pasta",
        ]);
        // 3/5 = 0.6 exactly; the comparison is inclusive.
        assert!(is_relevant(&videos, &keywords()));
    }

    #[test]
    fn two_of_five_matching_titles_is_not_relevant() {
        let videos = videos(&[
            "AI coding assistants",
            "ChatGPT for writers",
            "Vacation vlog",
            "Cooking pasta",
            "Desk setup tour",
        ]);
        assert!(!is_relevant(&videos, &keywords()));
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let videos = videos(&["CHATGPT changed my life"]);
        assert!(is_relevant(&videos, &keywords()));
    }

    #[test]
    fn empty_video_list_is_vacuously_relevant() {
        // Documented boundary quirk: 0 >= 0.6 * 0 holds.
        assert!(is_relevant(&[], &keywords()));
    }
}
