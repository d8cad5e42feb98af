use once_cell::sync::Lazy;
use regex::Regex;

use crate::stats::CadenceBucket;

static DAYS_AGO_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s+days?\s+ago").expect("valid days-ago pattern"));
static WEEKS_AGO_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s+weeks?\s+ago").expect("valid weeks-ago pattern"));

/// Maps one relative publish-time string to a day offset. Rules apply in
/// priority order; a string matching none of them contributes no sample.
fn day_offset(published: &str) -> Option<u32> {
    if let Some(captures) = DAYS_AGO_RE.captures(published) {
        return captures[1].parse().ok();
    }
    if published.contains("hour") || published.contains("minute") {
        return Some(0);
    }
    if published.contains("1 week") {
        return Some(7);
    }
    if let Some(captures) = WEEKS_AGO_RE.captures(published) {
        // An offset too large for u32 contributes no sample instead of
        // aborting on page-derived garbage.
        let weeks: u32 = captures[1].parse().ok()?;
        return weeks.checked_mul(7);
    }
    if published.contains("1 month") {
        return Some(30);
    }
    None
}

/// Estimates upload cadence from the most-recent publish-time strings
/// (newest first). Needs at least 2 parseable samples, then averages the
/// first 3 parsed ones. Note the quirk: when an early string fails to parse,
/// the average covers the first 3 *parsed* entries, which are not necessarily
/// the 3 most recent uploads.
pub fn estimate_cadence(published_times: &[String]) -> CadenceBucket {
    let days: Vec<u32> = published_times
        .iter()
        .filter_map(|t| day_offset(t))
        .collect();

    if days.len() < 2 {
        return CadenceBucket::Unknown;
    }

    let recent = &days[..days.len().min(3)];
    let total: u64 = recent.iter().map(|&d| u64::from(d)).sum();
    let avg_interval = total as f64 / recent.len() as f64;

    if avg_interval <= 3.0 {
        CadenceBucket::WithinThreeDays
    } else if avg_interval <= 7.0 {
        CadenceBucket::FourToSevenDays
    } else if avg_interval <= 14.0 {
        CadenceBucket::OverSevenDays
    } else {
        CadenceBucket::OverFourteenDays
    }
}
