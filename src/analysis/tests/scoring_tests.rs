use crate::analysis::extract;
use crate::analysis::scoring;
use crate::analysis::signals::SignalComputer;
use crate::config::SignalPatterns;
use crate::results::{ContentSignals, PageFacts, ScoreReport};
use url::Url;

fn analyze(html: &str) -> (PageFacts, ContentSignals, ScoreReport, Vec<String>) {
    let url = Url::parse("https://example.com/page").unwrap();
    let extraction = extract::extract(&url, html);
    let computer = SignalComputer::new(&SignalPatterns::default()).unwrap();
    let signals = computer.compute(&extraction);
    let score = scoring::score(&extraction.facts, &signals);
    let recommendations = scoring::recommend(&extraction.facts, &signals);
    (extraction.facts, signals, score, recommendations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_score_reference_fixture() {
        // Title of exactly 45 chars, meta description of exactly 140,
        // one H1, two H2s, schema with two distinct types, canonical,
        // OG title+description, viewport, lang, zero images.
        let title = "a".repeat(45);
        let meta = "d".repeat(140);
        let html = format!(
            r#"<html lang="en"><head>
            <title>{title}</title>
            <meta name="description" content="{meta}">
            <meta name="viewport" content="width=device-width">
            <link rel="canonical" href="https://example.com/page">
            <meta property="og:title" content="OG Title">
            <meta property="og:description" content="OG Description">
            <script type="application/ld+json">{{"@type": ["Article", "FAQPage"]}}</script>
            </head><body>
            <h1>Main</h1><h2>First</h2><h2>Second</h2><p>Short body.</p>
            </body></html>"#
        );
        let (facts, _, score, _) = analyze(&html);

        assert_eq!(facts.title_length, 45);
        assert_eq!(facts.meta_description_length, 140);
        assert!(facts.images.is_empty());
        // 15 + 15 + 10 + 10 + 0 (no images) + 5 + 10 + 15 + 5 + 5
        assert_eq!(score.seo, 90);
    }

    #[test]
    fn test_scores_bounded_and_overall_formula() {
        // A page that fires every retrieval rule; the raw sum exceeds
        // 100 and must be clamped.
        let words = "word ".repeat(2100);
        let html = format!(
            r#"<html lang="en"><head>
            <title>A perfectly reasonable page title here</title>
            <meta name="description" content="desc">
            </head><body>
            <h1>Main</h1>
            <h2>A</h2><h2>B</h2><h2>C</h2><h2>D</h2><h2>E</h2>
            <ul><li>item</li></ul>
            <ol><li>step</li></ol>
            <table><tr><td>cell</td></tr></table>
            <p>FAQ and summary below According to research</p>
            <p>{words}</p>
            </body></html>"#
        );
        let (_, _, score, _) = analyze(&html);

        assert!(score.seo <= 100);
        assert_eq!(score.geo, 100);
        assert_eq!(
            score.overall,
            ((score.seo + score.geo) as f64 / 2.0).round() as u32
        );
    }

    #[test]
    fn test_empty_page_scores_stay_bounded() {
        let (_, _, score, _) = analyze("<html><body></body></html>");

        assert!(score.seo <= 100);
        assert!(score.geo <= 100);
        assert_eq!(
            score.overall,
            ((score.seo + score.geo) as f64 / 2.0).round() as u32
        );
    }

    #[test]
    fn test_title_length_boundaries() {
        for (len, expected) in [(29, 8), (30, 15), (60, 15), (61, 8)] {
            let html = format!(
                "<html><head><title>{}</title></head><body></body></html>",
                "t".repeat(len)
            );
            let (_, _, score, _) = analyze(&html);
            assert_eq!(score.seo, expected, "title length {}", len);
        }
    }

    #[test]
    fn test_missing_title_scoring_and_recommendation() {
        let (facts, _, score, recommendations) =
            analyze("<html><body><p>no title here</p></body></html>");

        assert_eq!(facts.title, None);
        assert_eq!(facts.title_length, 0);
        // Nothing else on this page scores either
        assert_eq!(score.seo, 0);
        assert_eq!(recommendations[0], "Missing page title (title tag)");
    }

    #[test]
    fn test_image_alt_scoring() {
        // All images described
        let html = r#"<html><body><img src="a.png" alt="a"><img src="b.png" alt="b"></body></html>"#;
        let (_, _, score, _) = analyze(html);
        assert_eq!(score.seo, 10);

        // One of three missing: under half, partial credit
        let html = r#"<html><body>
            <img src="a.png" alt="a"><img src="b.png" alt="b"><img src="c.png">
            </body></html>"#;
        let (_, _, score, recommendations) = analyze(html);
        assert_eq!(score.seo, 5);
        assert!(
            recommendations
                .iter()
                .any(|r| r == "1 image(s) missing an alt attribute")
        );

        // Two of three missing: no credit
        let html = r#"<html><body>
            <img src="a.png" alt="a"><img src="b.png"><img src="c.png">
            </body></html>"#;
        let (_, _, score, _) = analyze(html);
        assert_eq!(score.seo, 0);
    }

    #[test]
    fn test_multiple_h1_recommendation() {
        let (_, _, _, recommendations) =
            analyze("<html><body><h1>One</h1><h1>Two</h1></body></html>");
        assert!(
            recommendations
                .iter()
                .any(|r| r == "Multiple H1 headings found; keep a single one")
        );
    }

    #[test]
    fn test_recommendation_order_seo_before_geo() {
        let (_, _, _, recommendations) =
            analyze("<html><body><p>minimal page</p></body></html>");

        assert!(!recommendations.is_empty());
        let first_geo = recommendations
            .iter()
            .position(|r| r.starts_with("GEO:"))
            .expect("a minimal page should draw GEO recommendations");
        // Every message after the first GEO one is also GEO
        assert!(
            recommendations[first_geo..]
                .iter()
                .all(|r| r.starts_with("GEO:"))
        );
        // And every message before it is not
        assert!(
            recommendations[..first_geo]
                .iter()
                .all(|r| !r.starts_with("GEO:"))
        );
    }

    #[test]
    fn test_well_formed_page_draws_fewer_recommendations() {
        let minimal = analyze("<html><body><p>x</p></body></html>").3;

        let meta = "d".repeat(140);
        let rich = format!(
            r#"<html lang="en"><head>
            <title>A perfectly reasonable page title here</title>
            <meta name="description" content="{meta}">
            <link rel="canonical" href="https://example.com/page">
            <meta property="og:title" content="t"><meta property="og:description" content="d">
            <script type="application/ld+json">{{"@type": "Article"}}</script>
            </head><body>
            <h1>Main</h1><h2>FAQ?</h2><h2>Summary</h2>
            <ul><li>In conclusion, according to research, it works.</li></ul>
            </body></html>"#
        );
        let rich = analyze(&rich).3;

        assert!(rich.len() < minimal.len());
    }
}
