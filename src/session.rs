// Session module: externally owned state of one assessment run.
//
// The caller owns the session and passes the catalog and engine in; scoring
// only ever sees a snapshot of the answer set taken by `complete`.

use crate::answers::{validate_answer, AnswerSet};
use crate::catalog::QuestionCatalog;
use crate::error::AssessError;
use crate::scorer::ScoringEngine;
use crate::types::{Answer, AnswerValue, QuestionDefinition, ResultsRecord};
use chrono::{DateTime, Duration, Utc};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct AssessmentSession {
    current_step: usize,
    answers: AnswerSet,
    started_at: DateTime<Utc>,
    results: Option<ResultsRecord>,
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentSession {
    pub fn new() -> Self {
        Self {
            current_step: 0,
            answers: AnswerSet::new(),
            started_at: Utc::now(),
            results: None,
        }
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn elapsed(&self) -> Duration {
        Utc::now() - self.started_at
    }

    pub fn results(&self) -> Option<&ResultsRecord> {
        self.results.as_ref()
    }

    pub fn is_completed(&self) -> bool {
        self.results.is_some()
    }

    pub fn current_question<'c>(&self, catalog: &'c QuestionCatalog) -> Option<&'c QuestionDefinition> {
        catalog.questions().get(self.current_step)
    }

    /// (answered, total) against the catalog.
    pub fn progress(&self, catalog: &QuestionCatalog) -> (usize, usize) {
        (self.answers.answered(catalog), catalog.len())
    }

    /// Validate and record an answer. Questions may be answered in any order.
    pub fn answer(
        &mut self,
        catalog: &QuestionCatalog,
        question_id: &str,
        value: AnswerValue,
    ) -> Result<(), AssessError> {
        if self.is_completed() {
            return Err(AssessError::Session(
                "assessment already completed; reset to start over".to_string(),
            ));
        }
        let question = catalog
            .get(question_id)
            .ok_or_else(|| AssessError::Answer(format!("unknown question: {}", question_id)))?;
        validate_answer(question, &value)?;
        self.answers.upsert(Answer::new(question_id, value));
        debug!(question = question_id, step = self.current_step, "answer recorded");
        Ok(())
    }

    /// Advance one step. Returns false when already on the last question.
    pub fn next_step(&mut self, catalog: &QuestionCatalog) -> bool {
        if self.current_step + 1 < catalog.len() {
            self.current_step += 1;
            true
        } else {
            false
        }
    }

    pub fn previous_step(&mut self) {
        self.current_step = self.current_step.saturating_sub(1);
    }

    /// Score the current answers once and keep the record.
    pub fn complete(&mut self, engine: &ScoringEngine<'_>) -> &ResultsRecord {
        let snapshot = self.answers.clone();
        self.results.insert(engine.synthesize(&snapshot))
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_stays_in_bounds() {
        let catalog = QuestionCatalog::builtin().unwrap();
        let mut session = AssessmentSession::new();
        session.previous_step();
        assert_eq!(session.current_step(), 0);
        for _ in 0..catalog.len() - 1 {
            assert!(session.next_step(&catalog));
        }
        assert!(!session.next_step(&catalog));
        assert_eq!(session.current_step(), catalog.len() - 1);
        assert_eq!(
            session.current_question(&catalog).map(|q| q.id.as_str()),
            Some("wiscar_real_world_1")
        );
    }

    #[test]
    fn answers_rejected_after_completion() {
        let catalog = QuestionCatalog::builtin().unwrap();
        let engine = ScoringEngine::new(&catalog);
        let mut session = AssessmentSession::new();
        session.answer(&catalog, "psych_1", 5.0.into()).unwrap();
        session.complete(&engine);
        let err = session.answer(&catalog, "psych_2", 5.0.into()).unwrap_err();
        assert!(matches!(err, AssessError::Session(_)));

        session.reset();
        assert!(!session.is_completed());
        assert!(session.answers().is_empty());
    }

    #[test]
    fn invalid_answer_not_recorded() {
        let catalog = QuestionCatalog::builtin().unwrap();
        let mut session = AssessmentSession::new();
        assert!(session.answer(&catalog, "psych_1", 7.0.into()).is_err());
        assert!(session.answer(&catalog, "nope", 3.0.into()).is_err());
        assert_eq!(session.progress(&catalog), (0, 17));
    }
}
