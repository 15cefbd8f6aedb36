// Synthesizer module: category scores -> overall score, tier, confidence and guidance.
//
//   overall = round(0.25*psychometric + 0.30*technical + 0.20*aptitude + 0.25*mean(wiscar))
//
//   overall >= 75  -> yes,   confidence = overall + 10
//   overall >= 55  -> maybe, confidence = overall
//   otherwise      -> no,    confidence = 100 - overall
//
// Confidence is clamped to 30..=95 for every tier.

use crate::answers::AnswerSet;
use crate::catalog::QuestionCatalog;
use crate::rules;
use crate::scorer::ScoringEngine;
use crate::types::{Category, Recommendation, ResultsRecord, Scores, WiscarDimension, WiscarScores};
use tracing::info;

const PSYCHOMETRIC_WEIGHT: f64 = 0.25;
const TECHNICAL_WEIGHT: f64 = 0.30;
const APTITUDE_WEIGHT: f64 = 0.20;
const WISCAR_WEIGHT: f64 = 0.25;

const YES_THRESHOLD: u8 = 75;
const MAYBE_THRESHOLD: u8 = 55;
const YES_CONFIDENCE_BONUS: u8 = 10;
pub const MIN_CONFIDENCE: u8 = 30;
pub const MAX_CONFIDENCE: u8 = 95;

/// Fixed linear blend of the category scores.
pub fn overall_score(scores: &Scores) -> u8 {
    let blended = f64::from(scores.psychometric) * PSYCHOMETRIC_WEIGHT
        + f64::from(scores.technical) * TECHNICAL_WEIGHT
        + f64::from(scores.aptitude) * APTITUDE_WEIGHT
        + scores.wiscar.average() * WISCAR_WEIGHT;
    blended.round().clamp(0.0, 100.0) as u8
}

/// Tier and confidence for an overall score.
pub fn recommend(overall: u8) -> (Recommendation, u8) {
    let (recommendation, confidence) = if overall >= YES_THRESHOLD {
        (Recommendation::Yes, overall.saturating_add(YES_CONFIDENCE_BONUS))
    } else if overall >= MAYBE_THRESHOLD {
        (Recommendation::Maybe, overall)
    } else {
        (Recommendation::No, 100u8.saturating_sub(overall))
    };
    (
        recommendation,
        confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE),
    )
}

impl<'a> ScoringEngine<'a> {
    /// All category and WISCAR scores plus the overall blend.
    pub fn scores(&self, answers: &AnswerSet) -> Scores {
        let mut wiscar = WiscarScores::default();
        for dimension in WiscarDimension::ALL {
            let score = self.category_score(answers, Category::Wiscar, Some(dimension.as_str()));
            wiscar.set(dimension, score);
        }

        let mut scores = Scores {
            psychometric: self.category_score(answers, Category::Psychometric, None),
            technical: self.category_score(answers, Category::Technical, None),
            aptitude: self.category_score(answers, Category::Aptitude, None),
            wiscar,
            overall: 0,
        };
        scores.overall = overall_score(&scores);
        scores
    }

    /// Produce the results record for a snapshot of the answers.
    pub fn synthesize(&self, answers: &AnswerSet) -> ResultsRecord {
        let scores = self.scores(answers);
        let (recommendation, confidence) = recommend(scores.overall);

        let alternative_roles = match recommendation {
            Recommendation::No => Some(rules::alternative_roles(&scores)),
            Recommendation::Yes | Recommendation::Maybe => None,
        };

        info!(
            answered = answers.answered(self.catalog),
            overall = scores.overall,
            %recommendation,
            confidence,
            "assessment scored"
        );

        ResultsRecord {
            scores,
            recommendation,
            confidence,
            insights: rules::insights(&scores),
            next_steps: rules::next_steps(recommendation),
            alternative_roles,
            learning_path: rules::learning_path(&scores),
        }
    }
}

/// Score `answers` against `catalog` with default options.
pub fn synthesize(catalog: &QuestionCatalog, answers: &AnswerSet) -> ResultsRecord {
    ScoringEngine::new(catalog).synthesize(answers)
}
