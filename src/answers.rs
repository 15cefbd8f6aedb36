// Answers module: the collected answer set, one answer per question.

use crate::catalog::QuestionCatalog;
use crate::error::AssessError;
use crate::types::{Answer, AnswerValue, QuestionDefinition, QuestionType};
use std::path::Path;

const LIKERT_RANGE: std::ops::RangeInclusive<f64> = 1.0..=5.0;

/// Answers in the order they were (last) given. A later answer for the same
/// question supersedes the earlier one; no history is kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerSet {
    answers: Vec<Answer>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold answers in order, so later duplicates win.
    pub fn from_answers<I: IntoIterator<Item = Answer>>(answers: I) -> Self {
        let mut set = Self::new();
        for answer in answers {
            set.upsert(answer);
        }
        set
    }

    /// Parse a JSON array of answers.
    pub fn from_json_str(content: &str) -> Result<Self, AssessError> {
        let answers: Vec<Answer> = serde_json::from_str(content)?;
        Ok(Self::from_answers(answers))
    }

    pub fn load(path: &Path) -> Result<Self, AssessError> {
        let content = std::fs::read_to_string(path)?;
        let answers: Vec<Answer> = serde_json::from_str(&content)
            .map_err(|e| AssessError::Parse(format!("{}: {}", path.display(), e)))?;
        Ok(Self::from_answers(answers))
    }

    /// Insert or replace; the replacement moves to the end.
    pub fn upsert(&mut self, answer: Answer) {
        self.answers.retain(|a| a.question_id != answer.question_id);
        self.answers.push(answer);
    }

    pub fn get(&self, question_id: &str) -> Option<&Answer> {
        self.answers.iter().find(|a| a.question_id == question_id)
    }

    pub fn value(&self, question_id: &str) -> Option<&AnswerValue> {
        self.get(question_id).map(|a| &a.value)
    }

    pub fn remove(&mut self, question_id: &str) -> Option<Answer> {
        let idx = self
            .answers
            .iter()
            .position(|a| a.question_id == question_id)?;
        Some(self.answers.remove(idx))
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Answer> {
        self.answers.iter()
    }

    /// Number of catalog questions that have an answer here.
    pub fn answered(&self, catalog: &QuestionCatalog) -> usize {
        catalog
            .questions()
            .iter()
            .filter(|q| self.get(&q.id).is_some())
            .count()
    }

    pub fn to_json_pretty(&self) -> Result<String, AssessError> {
        Ok(serde_json::to_string_pretty(&self.answers)?)
    }
}

impl FromIterator<Answer> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = Answer>>(iter: I) -> Self {
        Self::from_answers(iter)
    }
}

/// Strict check of a value against the question's answer domain.
///
/// The scorer never calls this; it accepts whatever the collection flow stored.
pub fn validate_answer(
    question: &QuestionDefinition,
    value: &AnswerValue,
) -> Result<(), AssessError> {
    match (question.question_type, value) {
        (QuestionType::Likert, AnswerValue::Number(n)) if LIKERT_RANGE.contains(n) => Ok(()),
        (QuestionType::Likert, other) => Err(AssessError::Answer(format!(
            "{}: likert answer must be a number from 1 to 5, got {}",
            question.id, other
        ))),
        (_, AnswerValue::Text(text)) if question.option_index(text).is_some() => Ok(()),
        (_, other) => Err(AssessError::Answer(format!(
            "{}: '{}' is not one of [{}]",
            question.id,
            other,
            question.answer_domain().join(", ")
        ))),
    }
}
