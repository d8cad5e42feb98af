use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// One recently published video, exactly as extracted from the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoRecord {
    pub title: String,
    pub views: String,
    pub published: String,
}

/// Estimated upload cadence, bucketed from a small recent sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CadenceBucket {
    WithinThreeDays,
    FourToSevenDays,
    OverSevenDays,
    OverFourteenDays,
    Unknown,
}

impl CadenceBucket {
    /// Fixed presentation label; not derivable from the thresholds alone.
    pub fn label(&self) -> &'static str {
        match self {
            CadenceBucket::WithinThreeDays => "within 3 days/video",
            CadenceBucket::FourToSevenDays => "4-7 days/video",
            CadenceBucket::OverSevenDays => "7+ days/video",
            CadenceBucket::OverFourteenDays => "14+ days/video",
            CadenceBucket::Unknown => "Unknown",
        }
    }
}

impl Serialize for CadenceBucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl std::fmt::Display for CadenceBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything measured about a channel in one run. Built once by the
/// orchestrator and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelSnapshot {
    pub handle: String,
    pub url: String,
    pub subscribers: Option<String>,
    pub subscriber_numeric: u64,
    pub recent_videos: Vec<VideoRecord>,
    pub average_views: u64,
    pub cadence: CadenceBucket,
    pub ai_relevant: bool,
}

/// Four-tier collaboration-fit rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitRating {
    High,
    MediumHigh,
    Medium,
    Low,
}

impl FitRating {
    pub fn label(&self) -> &'static str {
        match self {
            FitRating::High => "high",
            FitRating::MediumHigh => "medium-high",
            FitRating::Medium => "medium",
            FitRating::Low => "low",
        }
    }
}

impl Serialize for FitRating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl std::fmt::Display for FitRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-category match count. Kept as an ordered list, not a map, so the
/// category order from the keyword config carries through to reasons and to
/// the JSON dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub name: String,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitResult {
    pub rating: FitRating,
    pub reasons: Vec<String>,
    pub scores: Vec<CategoryScore>,
}

impl FitResult {
    /// Reasons joined into the single display string used by the report.
    pub fn joined_reasons(&self) -> String {
        self.reasons.join(", ")
    }
}

/// The complete result record for one analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub snapshot: ChannelSnapshot,
    pub fit: FitResult,
}

impl Serialize for AnalysisResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("AnalysisResult", 10)?;
        s.serialize_field("channel_handle", &self.snapshot.handle)?;
        s.serialize_field("channel_url", &self.snapshot.url)?;
        s.serialize_field("subscribers", &self.snapshot.subscribers)?;
        s.serialize_field("subscriber_numeric", &self.snapshot.subscriber_numeric)?;
        s.serialize_field("recent_videos", &self.snapshot.recent_videos)?;
        s.serialize_field("average_views", &self.snapshot.average_views)?;
        s.serialize_field("update_frequency", &self.snapshot.cadence)?;
        s.serialize_field("ai_relevant", &self.snapshot.ai_relevant)?;
        s.serialize_field("fit_rating", &self.fit.rating)?;
        s.serialize_field("fit", &self.fit)?;
        s.end()
    }
}
