// Report module: plain-text and JSON presentation of a results record.

use crate::types::{Recommendation, ResultsRecord, WiscarDimension};
use serde::Serialize;
use std::fmt::Write;

const BAR_WIDTH: usize = 20;

/// Results plus the context needed to interpret them later.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    /// Where the answers came from (file path or "interactive")
    pub source: String,
    /// Fingerprint of the catalog that produced the scores
    pub catalog: String,
    pub answered: usize,
    pub total: usize,
    pub results: ResultsRecord,
}

fn headline(recommendation: Recommendation) -> &'static str {
    match recommendation {
        Recommendation::Yes => "Strong fit: pursue Edge Cloud Architecture",
        Recommendation::Maybe => "Possible fit: build foundations first",
        Recommendation::No => "Limited fit: consider related roles",
    }
}

fn bar(score: u8) -> String {
    let filled = usize::from(score.min(100)) * BAR_WIDTH / 100;
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

fn score_line(out: &mut String, label: &str, score: u8) {
    let _ = writeln!(out, "  {:<26} {:>3}/100 [{}]", label, score, bar(score));
}

fn list(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{}", title);
    for item in items {
        let _ = writeln!(out, "  - {}", item);
    }
}

/// Human-readable report for the terminal.
pub fn render_text(report: &ScoreReport) -> String {
    let results = &report.results;
    let scores = &results.scores;
    let mut out = String::new();

    let _ = writeln!(out, "=== Assessment Results ===");
    let _ = writeln!(
        out,
        "Source: {} ({}/{} answered, catalog {})",
        report.source,
        report.answered,
        report.total,
        &report.catalog[..8.min(report.catalog.len())]
    );
    let _ = writeln!(
        out,
        "\n{} (recommendation: {}, confidence {}%)",
        headline(results.recommendation),
        results.recommendation,
        results.confidence
    );
    let _ = writeln!(out, "Overall score: {}/100", scores.overall);

    let _ = writeln!(out, "\nCore scores");
    score_line(&mut out, "Psychometric Fit", scores.psychometric);
    score_line(&mut out, "Technical Knowledge", scores.technical);
    score_line(&mut out, "Problem-Solving Aptitude", scores.aptitude);

    let _ = writeln!(out, "\nWISCAR");
    for dimension in WiscarDimension::ALL {
        score_line(&mut out, dimension.label(), scores.wiscar.get(dimension));
    }

    list(&mut out, "Insights", &results.insights);
    list(&mut out, "Next steps", &results.next_steps);
    if let Some(roles) = &results.alternative_roles {
        list(&mut out, "Alternative roles", roles);
    }

    let path = &results.learning_path;
    list(&mut out, "Learning path: beginner", &path.beginner);
    list(&mut out, "Learning path: intermediate", &path.intermediate);
    list(&mut out, "Learning path: advanced", &path.advanced);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::AnswerSet;
    use crate::catalog::QuestionCatalog;
    use crate::synthesizer::synthesize;

    fn empty_report() -> ScoreReport {
        let catalog = QuestionCatalog::builtin().unwrap();
        ScoreReport {
            source: "test".to_string(),
            catalog: catalog.fingerprint(),
            answered: 0,
            total: catalog.len(),
            results: synthesize(&catalog, &AnswerSet::new()),
        }
    }

    #[test]
    fn bar_is_fixed_width() {
        assert_eq!(bar(0), ".".repeat(BAR_WIDTH));
        assert_eq!(bar(100), "#".repeat(BAR_WIDTH));
        assert_eq!(bar(50).len(), BAR_WIDTH);
    }

    #[test]
    fn text_report_lists_roles_for_no() {
        let text = render_text(&empty_report());
        assert!(text.contains("recommendation: no"));
        assert!(text.contains("Alternative roles"));
        assert!(text.contains("Real-World Fit"));
        assert!(text.contains("0/17 answered"));
    }

    #[test]
    fn json_report_uses_camel_case_results() {
        let json = serde_json::to_value(empty_report()).unwrap();
        assert_eq!(json["results"]["recommendation"], "no");
        assert!(json["results"]["nextSteps"].is_array());
        assert_eq!(json["results"]["scores"]["wiscar"]["realWorld"], 0);
    }
}
