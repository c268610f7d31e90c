use crate::results::{ImageFact, PageFacts};
use crate::utils;
use scraper::{Html, Selector};
use url::Url;

/// Element-presence facts the signal computer needs but that are not
/// part of the page snapshot proper
#[derive(Debug, Clone, Default)]
pub struct MarkupTraits {
    /// At least one ul or ol element
    pub has_list: bool,
    /// At least one ol element
    pub has_ordered_list: bool,
    /// At least one table element
    pub has_table: bool,
    /// At least one dl, dfn, or abbr element
    pub has_definitions: bool,
    /// An element carrying an FAQPage itemtype marker
    pub has_faq_markup: bool,
    /// Anchors to scholarly domains plus cite/blockquote elements
    pub scholarly_refs: usize,
}

/// Everything the extractor pulls out of one page's markup
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Structural snapshot of the page
    pub facts: PageFacts,
    /// Element-presence traits for signal computation
    pub markup: MarkupTraits,
    /// Whole-body text with whitespace runs collapsed
    pub body_text: String,
}

/// Parses markup into a page snapshot via a fixed set of selector
/// rules. Optional fields take the first matching element in document
/// order, or None; they are never an empty string.
pub fn extract(url: &Url, html: &str) -> Extraction {
    let doc = Html::parse_document(html);

    let title = first_text(&doc, "title");
    let meta_description = first_attr(&doc, r#"meta[name="description"]"#, "content");

    let h1 = all_texts(&doc, "h1");
    let h2 = all_texts(&doc, "h2");
    let h3 = all_texts(&doc, "h3");

    let images = extract_images(&doc);
    let images_without_alt = images.iter().filter(|img| img.alt.is_none()).count();

    let (internal_links, external_links) = classify_links(&doc, url);

    let body_text = extract_body_text(&doc);
    let word_count = utils::count_words(&body_text);

    let schema_types = extract_schema_types(&doc);

    let facts = PageFacts {
        url: url.to_string(),
        title_length: title.as_deref().map_or(0, |t| t.chars().count()),
        title,
        meta_description_length: meta_description
            .as_deref()
            .map_or(0, |d| d.chars().count()),
        meta_description,
        h1,
        h2,
        h3,
        images_without_alt,
        images,
        internal_links,
        external_links,
        word_count,
        canonical: first_attr(&doc, r#"link[rel="canonical"]"#, "href"),
        og_title: first_attr(&doc, r#"meta[property="og:title"]"#, "content"),
        og_description: first_attr(&doc, r#"meta[property="og:description"]"#, "content"),
        og_image: first_attr(&doc, r#"meta[property="og:image"]"#, "content"),
        has_schema: !schema_types.is_empty(),
        schema_types,
        robots: first_attr(&doc, r#"meta[name="robots"]"#, "content"),
        viewport: first_attr(&doc, r#"meta[name="viewport"]"#, "content"),
        language: first_attr(&doc, "html", "lang"),
    };

    let markup = MarkupTraits {
        has_list: matches_any(&doc, "ul, ol"),
        has_ordered_list: matches_any(&doc, "ol"),
        has_table: matches_any(&doc, "table"),
        has_definitions: matches_any(&doc, "dl, dfn, abbr"),
        has_faq_markup: matches_any(&doc, r#"[itemtype*="FAQPage"]"#),
        scholarly_refs: count_matches(
            &doc,
            r#"a[href*="doi.org"], a[href*="pubmed"], cite, blockquote"#,
        ),
    };

    Extraction {
        facts,
        markup,
        body_text,
    }
}

/// Parse a static selector; all selectors in this module are literals
fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap()
}

/// Trimmed text of the first matching element, or None when there is
/// no match or the text is empty
fn first_text(doc: &Html, css: &str) -> Option<String> {
    let sel = selector(css);
    let text = doc
        .select(&sel)
        .next()?
        .text()
        .collect::<String>()
        .trim()
        .to_string();

    if text.is_empty() { None } else { Some(text) }
}

/// Attribute of the first matching element, or None when there is no
/// match or the attribute is missing or empty
fn first_attr(doc: &Html, css: &str, attr: &str) -> Option<String> {
    let sel = selector(css);
    doc.select(&sel)
        .next()
        .and_then(|el| el.value().attr(attr))
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
}

/// Trimmed texts of all matching elements in document order
fn all_texts(doc: &Html, css: &str) -> Vec<String> {
    let sel = selector(css);
    doc.select(&sel)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect()
}

fn matches_any(doc: &Html, css: &str) -> bool {
    let sel = selector(css);
    doc.select(&sel).next().is_some()
}

fn count_matches(doc: &Html, css: &str) -> usize {
    let sel = selector(css);
    doc.select(&sel).count()
}

fn extract_images(doc: &Html) -> Vec<ImageFact> {
    let sel = selector("img");
    doc.select(&sel)
        .map(|el| ImageFact {
            src: el.value().attr("src").unwrap_or_default().to_string(),
            alt: el
                .value()
                .attr("alt")
                .filter(|a| !a.is_empty())
                .map(|a| a.to_string()),
        })
        .collect()
}

/// Classify anchor targets into (internal, external) counts.
///
/// A link is external when it carries an http(s) scheme and its host
/// differs from the page's host; internal when it is root-relative or
/// its host matches. Anything else (fragments, mailto, bare relative
/// paths) lands in neither bucket.
fn classify_links(doc: &Html, page_url: &Url) -> (usize, usize) {
    let page_host = page_url.host_str().unwrap_or_default();
    let sel = selector("a[href]");

    let mut internal = 0;
    let mut external = 0;

    for el in doc.select(&sel) {
        let href = el.value().attr("href").unwrap_or_default();

        if href.starts_with("http://") || href.starts_with("https://") {
            match Url::parse(href) {
                Ok(target) if target.host_str() == Some(page_host) => internal += 1,
                Ok(_) => external += 1,
                Err(_) => {}
            }
        } else if href.starts_with('/') {
            internal += 1;
        }
    }

    (internal, external)
}

/// Whole-body text with whitespace runs collapsed to single spaces
fn extract_body_text(doc: &Html) -> String {
    let sel = selector("body");
    let joined = doc
        .select(&sel)
        .flat_map(|n| n.text())
        .collect::<Vec<_>>()
        .join(" ");

    utils::collapse_whitespace(&joined)
}

/// Collect JSON-LD @type names in document order. A block whose @type
/// is a list contributes every string in it. Malformed JSON is skipped
/// silently; it never aborts the analysis.
fn extract_schema_types(doc: &Html) -> Vec<String> {
    let sel = selector(r#"script[type="application/ld+json"]"#);
    let mut types = Vec::new();

    for el in doc.select(&sel) {
        let raw = el.text().collect::<String>();
        let Ok(value) = serde_json::from_str::<serde_json::Value>(&raw) else {
            ::log::debug!("Skipping malformed JSON-LD block");
            continue;
        };

        match value.get("@type") {
            Some(serde_json::Value::String(name)) => types.push(name.clone()),
            Some(serde_json::Value::Array(names)) => {
                for name in names {
                    if let serde_json::Value::String(name) = name {
                        types.push(name.clone());
                    }
                }
            }
            _ => {}
        }
    }

    types
}
