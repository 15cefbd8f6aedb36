// Scorer module: reduce an answer set to 0..100 category scores.
//
// Per answered question:
//   likert  -> ((value - 1) / 4) * 100        (1 -> 0, 3 -> 50, 5 -> 100)
//   choice  -> option_scores[id][index]        (50 when the question has no row)
// Category score = round(sum(score * weight) / sum(weight)), 0 when nothing was answered.
// Unanswered questions are left out of both sums.

use crate::answers::AnswerSet;
use crate::catalog::QuestionCatalog;
use crate::types::{AnswerValue, Category, QuestionDefinition};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// What to do with a text answer that matches none of the question's options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnmatchedOption {
    /// Treat the question as unanswered
    #[default]
    Skip,
    /// Score it as if the first option had been picked
    FirstOption,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoringOptions {
    pub unmatched_option: UnmatchedOption,
}

/// Map a likert position onto 0..=100.
pub fn normalize_likert(value: f64) -> f64 {
    (((value - 1.0) / 4.0) * 100.0).clamp(0.0, 100.0)
}

/// Stateless scorer bound to one catalog.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine<'a> {
    pub(crate) catalog: &'a QuestionCatalog,
    pub(crate) options: ScoringOptions,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(catalog: &'a QuestionCatalog) -> Self {
        Self::with_options(catalog, ScoringOptions::default())
    }

    pub fn with_options(catalog: &'a QuestionCatalog, options: ScoringOptions) -> Self {
        Self { catalog, options }
    }

    pub fn catalog(&self) -> &'a QuestionCatalog {
        self.catalog
    }

    /// Normalized 0..=100 score of one answer, or None when it should not count.
    pub fn answer_score(&self, question: &QuestionDefinition, value: &AnswerValue) -> Option<f64> {
        match value {
            AnswerValue::Number(n) if n.is_finite() => Some(normalize_likert(*n)),
            AnswerValue::Number(_) => None,
            AnswerValue::Text(text) => {
                let index = match (question.option_index(text), self.options.unmatched_option) {
                    (Some(index), _) => index,
                    (None, UnmatchedOption::FirstOption) => 0,
                    (None, UnmatchedOption::Skip) => {
                        trace!(question = %question.id, answer = %text, "unmatched option skipped");
                        return None;
                    }
                };
                Some(f64::from(self.catalog.option_score(&question.id, index)))
            }
        }
    }

    /// Weighted category score, optionally restricted to one subcategory.
    pub fn category_score(
        &self,
        answers: &AnswerSet,
        category: Category,
        subcategory: Option<&str>,
    ) -> u8 {
        let mut total_score = 0.0;
        let mut total_weight = 0.0;

        for question in self.catalog.select(category, subcategory) {
            let Some(value) = answers.value(&question.id) else {
                continue;
            };
            if let Some(score) = self.answer_score(question, value) {
                total_score += score * question.weight;
                total_weight += question.weight;
            }
        }

        let score = if total_weight > 0.0 {
            (total_score / total_weight).round().clamp(0.0, 100.0) as u8
        } else {
            0
        };
        debug!(
            category = %category,
            subcategory = subcategory.unwrap_or("*"),
            weight = total_weight,
            score,
            "category scored"
        );
        score
    }
}
