// Re-export modules
pub mod analysis;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::AnalyzerConfig;
pub use error::AnalyzeError;
pub use results::{Analysis, AnalysisResponse, ContentSignals, PageFacts, ScoreReport};

use analysis::signals::SignalComputer;

/// Builder for running page analyses.
///
/// Each call to [`Analyzer::analyze`] is one independent request:
/// fetch, extract, compute, score. Nothing is shared or cached across
/// requests.
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    /// Create an analyzer with the default configuration
    pub fn new() -> Self {
        Self {
            config: AnalyzerConfig::default(),
        }
    }

    /// Apply a configuration
    pub fn with_config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(
        mut self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        self.config = AnalyzerConfig::from_file(path)?;
        Ok(self)
    }

    /// Override the fetch timeout in seconds
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.config.timeout_secs = timeout_secs;
        self
    }

    /// Override the response body byte ceiling
    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.config.max_body_bytes = max_body_bytes;
        self
    }

    /// Analyze the page at the given address.
    ///
    /// Always returns a well-formed response: address and fetch
    /// problems are surfaced with their own messages, anything
    /// unexpected is logged and surfaced as a generic message. Nothing
    /// propagates past this boundary.
    pub async fn analyze(&self, address: &str) -> AnalysisResponse {
        let url = match fetcher::validate_address(address) {
            Ok(url) => url,
            Err(err) => {
                ::log::info!("Rejected address {:?}: {}", address, err);
                return AnalysisResponse::failure(err.user_message());
            }
        };

        let html = match fetcher::fetch_document(&url, &self.config).await {
            Ok(html) => html,
            Err(err) => {
                ::log::warn!("Fetch failed for {}: {}", url, err);
                return AnalysisResponse::failure(err.user_message());
            }
        };

        match self.analyze_markup(url.as_str(), &html) {
            Ok(analysis) => AnalysisResponse::ok(analysis),
            Err(err) => {
                ::log::error!("Analysis failed for {}: {}", url, err);
                AnalysisResponse::failure(err.user_message())
            }
        }
    }

    /// Run the synchronous extract/compute/score stages over markup
    /// that has already been fetched. Used by tests and the CLI's
    /// local-file mode.
    pub fn analyze_markup(&self, address: &str, html: &str) -> Result<Analysis, AnalyzeError> {
        let url = fetcher::validate_address(address)?;

        let extraction = analysis::extract::extract(&url, html);

        let computer = SignalComputer::new(&self.config.patterns)
            .map_err(|err| AnalyzeError::Internal(format!("invalid signal pattern: {err}")))?;
        let signals = computer.compute(&extraction);

        let score = analysis::scoring::score(&extraction.facts, &signals);
        let recommendations = analysis::scoring::recommend(&extraction.facts, &signals);

        Ok(Analysis {
            facts: extraction.facts,
            signals,
            score,
            recommendations,
        })
    }
}
