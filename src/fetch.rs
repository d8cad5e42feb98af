use std::io::Read;
use std::time::Duration;

use tracing::info;

use crate::error::AnalyzeError;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Blocking HTTP boundary: plain GETs with fixed headers and a fixed
/// timeout. No retries; any failure is fatal for the run.
pub struct Fetcher {
    agent: ureq::Agent,
}

impl Fetcher {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Fetcher { agent }
    }

    /// Fetches one page and returns its body as text.
    pub fn get(&self, url: &str) -> Result<String, AnalyzeError> {
        info!(component = "fetch", url, "Fetching page");

        let response = self
            .agent
            .get(url)
            .set("User-Agent", USER_AGENT)
            .set("Accept-Language", ACCEPT_LANGUAGE)
            .call()
            .map_err(|e| AnalyzeError::Fetch {
                url: url.to_string(),
                source: Box::new(e),
            })?;

        // Channel pages routinely exceed into_string()'s size cap, so read
        // the body through a plain reader.
        let mut body = String::new();
        response
            .into_reader()
            .read_to_string(&mut body)
            .map_err(|e| AnalyzeError::Body {
                url: url.to_string(),
                source: e,
            })?;

        info!(component = "fetch", url, bytes = body.len(), "Fetched page");
        Ok(body)
    }
}
