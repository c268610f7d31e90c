use crate::analysis::extract::Extraction;
use crate::config::SignalPatterns;
use crate::results::{Clarity, ContentSignals, Depth, Readability};
use regex::{Regex, RegexBuilder};
use std::collections::HashSet;

/// Derives content signals from an extracted page.
///
/// Compiles its trigger pattern tables once at construction; compute
/// itself is pure and allocation-light.
#[derive(Debug)]
pub struct SignalComputer {
    faq_markers: Vec<String>,
    summary_markers: Vec<String>,
    step_regexes: Vec<Regex>,
    citation_regex: Option<Regex>,
}

impl SignalComputer {
    /// Build a computer from a pattern table, compiling the regex
    /// entries. Fails only on an invalid user-supplied pattern.
    pub fn new(patterns: &SignalPatterns) -> Result<Self, regex::Error> {
        let mut step_regexes = Vec::with_capacity(patterns.step_patterns.len());
        for pattern in &patterns.step_patterns {
            step_regexes.push(Regex::new(pattern)?);
        }

        // Citation phrases are plain text; fold them into one
        // case-insensitive alternation
        let citation_regex = if patterns.citation_phrases.is_empty() {
            None
        } else {
            let alternation = patterns
                .citation_phrases
                .iter()
                .map(|p| regex::escape(p))
                .collect::<Vec<_>>()
                .join("|");
            Some(
                RegexBuilder::new(&alternation)
                    .case_insensitive(true)
                    .build()?,
            )
        };

        Ok(Self {
            faq_markers: lowercased(&patterns.faq_markers),
            summary_markers: lowercased(&patterns.summary_markers),
            step_regexes,
            citation_regex,
        })
    }

    /// Evaluate every signal rule against one extracted page. Rules
    /// are independent; none excludes another.
    pub fn compute(&self, extraction: &Extraction) -> ContentSignals {
        let facts = &extraction.facts;
        let markup = &extraction.markup;
        let body = &extraction.body_text;
        let body_lower = body.to_lowercase();

        let has_lists = markup.has_list;
        let has_tables = markup.has_table;

        let has_faq = markup.has_faq_markup
            || self.faq_markers.iter().any(|m| body_lower.contains(m))
            || facts
                .h2
                .iter()
                .any(|h| h.contains('?') || h.contains('？'));

        let has_summary = self.summary_markers.iter().any(|m| body_lower.contains(m));

        let has_numbered_steps = markup.has_ordered_list
            || self.step_regexes.iter().any(|re| re.is_match(body));

        let question_count = body.chars().filter(|c| *c == '?' || *c == '？').count();

        let citation_indicators = self
            .citation_regex
            .as_ref()
            .map_or(0, |re| re.find_iter(body).count())
            + markup.scholarly_refs;

        let mut clarity_points = 0;
        if facts.h1.len() == 1 {
            clarity_points += 2;
        }
        if facts.h2.len() >= 2 {
            clarity_points += 2;
        }
        if has_lists {
            clarity_points += 1;
        }
        if has_tables {
            clarity_points += 1;
        }
        if facts.meta_description.is_some() {
            clarity_points += 1;
        }
        let content_clarity = if clarity_points >= 5 {
            Clarity::High
        } else if clarity_points >= 3 {
            Clarity::Medium
        } else {
            Clarity::Low
        };

        let readability_score = readability(body);

        let distinct_types: HashSet<&str> =
            facts.schema_types.iter().map(|t| t.as_str()).collect();
        let entity_clarity = if facts.has_schema && distinct_types.len() >= 2 {
            Clarity::High
        } else if facts.has_schema {
            Clarity::Medium
        } else {
            Clarity::Low
        };

        let content_depth = if facts.word_count > 2000 && facts.h2.len() >= 5 {
            Depth::Deep
        } else if facts.word_count > 800 && facts.h2.len() >= 2 {
            Depth::Medium
        } else {
            Depth::Shallow
        };

        ContentSignals {
            has_structured_content: has_lists || has_tables || facts.h2.len() >= 2,
            has_faq,
            has_lists,
            has_tables,
            has_definitions: markup.has_definitions,
            content_clarity,
            has_summary,
            has_numbered_steps,
            question_count,
            citation_indicators,
            readability_score,
            entity_clarity,
            content_depth,
        }
    }
}

/// Average sentence length in characters, bucketed. Sentences split on
/// ASCII and full-width terminators; zero sentences count as average 0.
fn readability(body: &str) -> Readability {
    let sentences = body
        .split(['.', '。', '!', '！', '?', '？'])
        .filter(|s| !s.trim().is_empty())
        .count();

    let avg = if sentences > 0 {
        body.chars().count() as f64 / sentences as f64
    } else {
        0.0
    };

    if avg < 50.0 {
        Readability::Easy
    } else if avg < 100.0 {
        Readability::Medium
    } else {
        Readability::Hard
    }
}

fn lowercased(markers: &[String]) -> Vec<String> {
    markers.iter().map(|m| m.to_lowercase()).collect()
}
