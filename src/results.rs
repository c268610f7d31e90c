use serde::{Deserialize, Serialize};

/// One image element found on the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageFact {
    /// Value of the src attribute (empty when the attribute is missing)
    pub src: String,

    /// Alt text; None when the attribute is missing or empty
    pub alt: Option<String>,
}

/// Immutable structural snapshot of one fetched page.
///
/// Built once per analysis by the extractor and never mutated after.
/// Optional scalar fields are None when absent, never an empty string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageFacts {
    /// Address the page was fetched from
    pub url: String,

    /// First title element text, trimmed
    pub title: Option<String>,

    /// Title length in characters (0 when absent)
    pub title_length: usize,

    /// meta[name="description"] content
    pub meta_description: Option<String>,

    /// Meta description length in characters (0 when absent)
    pub meta_description_length: usize,

    /// H1 heading texts in document order
    pub h1: Vec<String>,

    /// H2 heading texts in document order
    pub h2: Vec<String>,

    /// H3 heading texts in document order
    pub h3: Vec<String>,

    /// All images in document order
    pub images: Vec<ImageFact>,

    /// Number of images with no alt text
    pub images_without_alt: usize,

    /// Links pointing at this page's own host (or root-relative)
    pub internal_links: usize,

    /// Links pointing at a different host
    pub external_links: usize,

    /// Whitespace-delimited token count of the body text
    pub word_count: usize,

    /// link[rel="canonical"] target
    pub canonical: Option<String>,

    /// Open Graph title
    pub og_title: Option<String>,

    /// Open Graph description
    pub og_description: Option<String>,

    /// Open Graph image
    pub og_image: Option<String>,

    /// Whether any structured-data block was found
    pub has_schema: bool,

    /// JSON-LD @type names in document order
    pub schema_types: Vec<String>,

    /// meta[name="robots"] directive
    pub robots: Option<String>,

    /// meta[name="viewport"] directive
    pub viewport: Option<String>,

    /// lang attribute of the html element
    pub language: Option<String>,
}

/// Three-level clarity rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Clarity {
    High,
    Medium,
    Low,
}

/// Three-level readability rating based on average sentence length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Readability {
    Easy,
    Medium,
    Hard,
}

/// Three-level content depth rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Depth {
    Deep,
    Medium,
    Shallow,
}

/// Content signals derived from the page facts and body text.
///
/// Recomputed fresh for every analysis; nothing here is cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSignals {
    /// Lists, tables, or at least two H2 headings
    pub has_structured_content: bool,

    /// FAQ markup, FAQ text marker, or a question-mark H2
    pub has_faq: bool,

    /// At least one list element
    pub has_lists: bool,

    /// At least one table element
    pub has_tables: bool,

    /// Definition list, definition term, or abbreviation elements
    pub has_definitions: bool,

    /// Structure-based clarity rating
    pub content_clarity: Clarity,

    /// Summary/conclusion marker found in body text
    pub has_summary: bool,

    /// Ordered list or a "step N" text pattern
    pub has_numbered_steps: bool,

    /// Question-mark characters (ASCII and full-width) in body text
    pub question_count: usize,

    /// Citation phrases plus scholarly reference elements
    pub citation_indicators: usize,

    /// Average-sentence-length readability rating
    pub readability_score: Readability,

    /// Structured-data based entity clarity rating
    pub entity_clarity: Clarity,

    /// Word-count and heading based depth rating
    pub content_depth: Depth,
}

/// Bounded quality scores for one page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Structural (on-page SEO) score, 0-100
    pub seo: u32,

    /// Retrieval-friendliness (GEO) score, 0-100
    pub geo: u32,

    /// Rounded average of the two component scores
    pub overall: u32,
}

/// Full successful analysis of one page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    /// Structural facts extracted from the markup
    pub facts: PageFacts,

    /// Derived content signals
    pub signals: ContentSignals,

    /// Bounded scores
    pub score: ScoreReport,

    /// Human-readable recommendations in fixed rule order
    pub recommendations: Vec<String>,
}

/// Result object returned for every analysis request.
///
/// Always well-formed: failures carry an error message and nothing
/// else, successes carry the full analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Whether the analysis completed
    pub success: bool,

    /// Error message when success is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Page facts when success is true
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facts: Option<PageFacts>,

    /// Content signals when success is true
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signals: Option<ContentSignals>,

    /// Scores when success is true
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<ScoreReport>,

    /// Recommendations when success is true
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<String>>,
}

impl AnalysisResponse {
    /// Build a success response from a completed analysis
    pub fn ok(analysis: Analysis) -> Self {
        Self {
            success: true,
            error: None,
            facts: Some(analysis.facts),
            signals: Some(analysis.signals),
            score: Some(analysis.score),
            recommendations: Some(analysis.recommendations),
        }
    }

    /// Build a failure response carrying only an error message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
            facts: None,
            signals: None,
            score: None,
            recommendations: None,
        }
    }
}
