pub mod args;
pub mod cadence;
pub mod channel;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod fit;
pub mod keywords;
pub mod numeric;
pub mod relevance;
pub mod stats;
pub mod utils;

pub use args::Args;
pub use channel::{analyze_channel, print_report};
pub use error::AnalyzeError;
pub use keywords::init_default_keywords;
pub use stats::{AnalysisResult, ChannelSnapshot, FitResult, VideoRecord};
