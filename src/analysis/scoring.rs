use crate::results::{Clarity, ContentSignals, Depth, PageFacts, Readability, ScoreReport};

/// Map facts and signals through the fixed weighted rules into bounded
/// scores. Each rule fires at most once; both component sums are
/// clamped to [0,100] before the overall average is taken.
pub fn score(facts: &PageFacts, signals: &ContentSignals) -> ScoreReport {
    let seo = structural_score(facts).min(100);
    let geo = retrieval_score(signals).min(100);
    let overall = ((seo + geo) as f64 / 2.0).round() as u32;

    ScoreReport { seo, geo, overall }
}

/// Point table for traditional on-page SEO signals
fn structural_score(facts: &PageFacts) -> u32 {
    let mut points = 0;

    if facts.title.is_some() && (30..=60).contains(&facts.title_length) {
        points += 15;
    } else if facts.title.is_some() {
        points += 8;
    }

    if facts.meta_description.is_some() && (120..=160).contains(&facts.meta_description_length) {
        points += 15;
    } else if facts.meta_description.is_some() {
        points += 8;
    }

    if facts.h1.len() == 1 {
        points += 10;
    }
    if facts.h2.len() >= 2 {
        points += 10;
    }

    if facts.images_without_alt == 0 && !facts.images.is_empty() {
        points += 10;
    } else if facts.images_without_alt * 2 < facts.images.len() {
        points += 5;
    }

    if facts.canonical.is_some() {
        points += 5;
    }
    if facts.og_title.is_some() && facts.og_description.is_some() {
        points += 10;
    }
    if facts.has_schema {
        points += 15;
    }
    if facts.viewport.is_some() {
        points += 5;
    }
    if facts.language.is_some() {
        points += 5;
    }

    points
}

/// Point table for AI-retrieval friendliness
fn retrieval_score(signals: &ContentSignals) -> u32 {
    let mut points = 0;

    if signals.has_structured_content {
        points += 15;
    }
    if signals.has_faq {
        points += 15;
    }
    if signals.has_lists {
        points += 10;
    }
    if signals.has_tables {
        points += 5;
    }
    if signals.has_summary {
        points += 10;
    }
    if signals.has_numbered_steps {
        points += 10;
    }

    match signals.content_clarity {
        Clarity::High => points += 15,
        Clarity::Medium => points += 8,
        Clarity::Low => {}
    }

    match signals.readability_score {
        Readability::Easy => points += 10,
        Readability::Medium => points += 5,
        Readability::Hard => {}
    }

    if signals.citation_indicators > 0 {
        points += 10;
    }

    match signals.content_depth {
        Depth::Deep => points += 10,
        Depth::Medium => points += 5,
        Depth::Shallow => {}
    }

    points
}

/// Evaluate the fixed ordered recommendation rules. SEO messages come
/// first, then GEO messages, each in declaration order; any subset may
/// fire.
pub fn recommend(facts: &PageFacts, signals: &ContentSignals) -> Vec<String> {
    let mut out = Vec::new();

    if facts.title.is_none() {
        out.push("Missing page title (title tag)".to_string());
    } else if facts.title_length < 30 {
        out.push("Title is too short; aim for 30-60 characters".to_string());
    } else if facts.title_length > 60 {
        out.push("Title is too long and may get truncated".to_string());
    }

    if facts.meta_description.is_none() {
        out.push("Missing meta description".to_string());
    } else if facts.meta_description_length < 120 {
        out.push("Meta description is too short; aim for 120-160 characters".to_string());
    } else if facts.meta_description_length > 160 {
        out.push("Meta description is too long and may get truncated".to_string());
    }

    if facts.h1.is_empty() {
        out.push("Missing H1 heading".to_string());
    } else if facts.h1.len() > 1 {
        out.push("Multiple H1 headings found; keep a single one".to_string());
    }

    if facts.h2.is_empty() {
        out.push("No H2 subheadings; content structure suffers".to_string());
    }

    if facts.images_without_alt > 0 {
        out.push(format!(
            "{} image(s) missing an alt attribute",
            facts.images_without_alt
        ));
    }

    if facts.canonical.is_none() {
        out.push("Add a canonical URL".to_string());
    }
    if facts.og_title.is_none() || facts.og_description.is_none() {
        out.push("Complete the Open Graph title and description tags".to_string());
    }
    if !facts.has_schema {
        out.push("Add structured data (JSON-LD)".to_string());
    }
    if facts.language.is_none() {
        out.push("Declare a lang attribute on the html element".to_string());
    }

    if !signals.has_structured_content {
        out.push("GEO: add structured content such as lists or tables".to_string());
    }
    if !signals.has_faq {
        out.push("GEO: add an FAQ section".to_string());
    }
    if !signals.has_summary {
        out.push("GEO: add a summary or conclusion section".to_string());
    }
    if signals.content_clarity == Clarity::Low {
        out.push("GEO: improve content structure with more subheadings".to_string());
    }
    if signals.readability_score == Readability::Hard {
        out.push("GEO: sentences run long; simplify them to improve readability".to_string());
    }
    if signals.citation_indicators == 0 {
        out.push("GEO: cite authoritative sources to build credibility".to_string());
    }
    if signals.content_depth == Depth::Shallow {
        out.push("GEO: content is thin; expand it with more detail".to_string());
    }

    out
}
