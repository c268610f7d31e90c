use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for the page analyzer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Timeout for the page fetch, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Ceiling on the number of response body bytes read; anything
    /// beyond it is discarded rather than treated as an error
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// User-Agent header sent with the fetch
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Trigger pattern tables for the heuristic content signals
    #[serde(default)]
    pub patterns: SignalPatterns,
}

/// Trigger patterns for the text-based content signals, keyed by
/// signal. Each list is ordered; locale variants can be added here
/// without touching the scoring logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalPatterns {
    /// Case-insensitive substrings that mark an FAQ section
    #[serde(default = "default_faq_markers")]
    pub faq_markers: Vec<String>,

    /// Case-insensitive substrings that mark a summary or conclusion
    #[serde(default = "default_summary_markers")]
    pub summary_markers: Vec<String>,

    /// Regex patterns that mark numbered step-by-step content
    #[serde(default = "default_step_patterns")]
    pub step_patterns: Vec<String>,

    /// Phrases counted as citation indicators (matched case-insensitively)
    #[serde(default = "default_citation_phrases")]
    pub citation_phrases: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_body_bytes: default_max_body_bytes(),
            user_agent: default_user_agent(),
            patterns: SignalPatterns::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }
}

impl Default for SignalPatterns {
    fn default() -> Self {
        Self {
            faq_markers: default_faq_markers(),
            summary_markers: default_summary_markers(),
            step_patterns: default_step_patterns(),
            citation_phrases: default_citation_phrases(),
        }
    }
}

/// Default fetch timeout in seconds
fn default_timeout_secs() -> u64 {
    10
}

/// Default response body ceiling (5 MiB)
fn default_max_body_bytes() -> usize {
    5 * 1024 * 1024
}

/// Default User-Agent header
fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; PageGauge/1.0)".to_string()
}

fn default_faq_markers() -> Vec<String> {
    vec!["常見問題".to_string(), "faq".to_string()]
}

fn default_summary_markers() -> Vec<String> {
    vec![
        "總結".to_string(),
        "結論".to_string(),
        "摘要".to_string(),
        "summary".to_string(),
        "conclusion".to_string(),
    ]
}

fn default_step_patterns() -> Vec<String> {
    vec![
        r"步驟\s*[1-9一二三四五六七八九十]".to_string(),
        r"(?i)step\s*[1-9]".to_string(),
    ]
}

fn default_citation_phrases() -> Vec<String> {
    vec![
        "根據".to_string(),
        "研究顯示".to_string(),
        "調查指出".to_string(),
        "according to".to_string(),
        "study shows".to_string(),
        "research indicates".to_string(),
    ]
}
