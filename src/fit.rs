use crate::keywords::KeywordSet;
use crate::numeric::Magnitude;
use crate::stats::{CategoryScore, ChannelSnapshot, FitRating, FitResult};
use crate::utils::format_number;

/// Scores the channel against the keyword categories and derives the
/// four-tier rating. Each video bumps a category's score by at most one, no
/// matter how many of its keywords hit, so scores count videos rather than
/// keyword occurrences.
pub fn evaluate_fit(snapshot: &ChannelSnapshot, categories: &[KeywordSet]) -> FitResult {
    let videos = &snapshot.recent_videos;

    let mut scores = vec![0u32; categories.len()];
    for video in videos {
        let title = video.title.to_lowercase();
        for (i, category) in categories.iter().enumerate() {
            if category.keywords.iter().any(|kw| title.contains(kw.as_str())) {
                scores[i] += 1;
            }
        }
    }

    let matched_categories = scores.iter().filter(|&&s| s >= 2).count();
    let total_matches: u32 = scores.iter().sum();

    // First matching tier wins; the mention gate is the per-category score a
    // category needs before it is named in the justification.
    let (rating, mention_gate) = if matched_categories >= 3 || total_matches >= 8 {
        (FitRating::High, 2)
    } else if matched_categories >= 2 || total_matches >= 5 {
        (FitRating::MediumHigh, 1)
    } else if matched_categories >= 1 || total_matches >= 2 {
        (FitRating::Medium, 1)
    } else {
        (FitRating::Low, 0)
    };

    let mut reasons: Vec<String> = if rating == FitRating::Low {
        vec!["no category match".to_string()]
    } else {
        categories
            .iter()
            .zip(&scores)
            .filter(|(_, &score)| score >= mention_gate)
            .map(|(category, _)| category.label.clone())
            .collect()
    };

    // Engagement and virality annotate the justification but never move the
    // rating itself.
    if snapshot.subscriber_numeric > 0 {
        let engagement_rate =
            snapshot.average_views as f64 / snapshot.subscriber_numeric as f64 * 100.0;
        if engagement_rate >= 70.0 {
            reasons.push(format!("high engagement ({engagement_rate:.0}%)"));
        } else if engagement_rate >= 50.0 {
            reasons.push(format!("moderate engagement ({engagement_rate:.0}%)"));
        }
    }

    if !videos.is_empty() {
        let views: Vec<f64> = videos
            .iter()
            .map(|v| Magnitude::parse(&v.views).value())
            .collect();
        let mean = views.iter().sum::<f64>() / views.len() as f64;
        let max = views.iter().cloned().fold(0.0_f64, f64::max);
        if max > mean * 3.0 {
            reasons.push(format!("viral potential ({} views)", format_number(max as u64)));
        }
    }

    FitResult {
        rating,
        reasons,
        scores: categories
            .iter()
            .zip(scores)
            .map(|(category, score)| CategoryScore {
                name: category.name.clone(),
                score,
            })
            .collect(),
    }
}
