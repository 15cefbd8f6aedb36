use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AssessError;

/// Top-level grouping of questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Psychometric,
    Technical,
    Aptitude,
    Wiscar,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Psychometric,
        Category::Technical,
        Category::Aptitude,
        Category::Wiscar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Psychometric => "psychometric",
            Category::Technical => "technical",
            Category::Aptitude => "aptitude",
            Category::Wiscar => "wiscar",
        }
    }

    /// Section heading shown while the questions of this category are asked.
    pub fn title(&self) -> &'static str {
        match self {
            Category::Psychometric => "Personality & Motivation Assessment",
            Category::Technical => "Technical Knowledge Evaluation",
            Category::Aptitude => "Problem-Solving Aptitude",
            Category::Wiscar => "WISCAR Framework Analysis",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Category::Psychometric => {
                "Understanding your personality traits, cognitive style, and motivation for edge cloud architecture."
            }
            Category::Technical => {
                "Evaluating your current technical knowledge and understanding of edge computing concepts."
            }
            Category::Aptitude => "Testing your logical reasoning and problem-solving abilities.",
            Category::Wiscar => {
                "Comprehensive evaluation of Will, Interest, Skill, Cognitive readiness, Ability to learn, and Real-world fit."
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = AssessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AssessError::Parse(format!("unknown category: {}", s)))
    }
}

/// Answer domain of a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    MultipleChoice,
    Likert,
    YesNo,
    Scenario,
}

impl QuestionType {
    /// Multiple-choice and scenario questions answer with one of their options.
    pub fn is_choice(&self) -> bool {
        matches!(self, QuestionType::MultipleChoice | QuestionType::Scenario)
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionType::MultipleChoice => write!(f, "multiple-choice"),
            QuestionType::Likert => write!(f, "likert"),
            QuestionType::YesNo => write!(f, "yes-no"),
            QuestionType::Scenario => write!(f, "scenario"),
        }
    }
}

/// The six WISCAR readiness dimensions, used as subcategories of `Category::Wiscar`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WiscarDimension {
    #[serde(rename = "will")]
    Will,
    #[serde(rename = "interest")]
    Interest,
    #[serde(rename = "skill")]
    Skill,
    #[serde(rename = "cognitive")]
    Cognitive,
    #[serde(rename = "ability")]
    Ability,
    #[serde(rename = "realWorld")]
    RealWorld,
}

impl WiscarDimension {
    pub const ALL: [WiscarDimension; 6] = [
        WiscarDimension::Will,
        WiscarDimension::Interest,
        WiscarDimension::Skill,
        WiscarDimension::Cognitive,
        WiscarDimension::Ability,
        WiscarDimension::RealWorld,
    ];

    /// Subcategory string used in the catalog
    pub fn as_str(&self) -> &'static str {
        match self {
            WiscarDimension::Will => "will",
            WiscarDimension::Interest => "interest",
            WiscarDimension::Skill => "skill",
            WiscarDimension::Cognitive => "cognitive",
            WiscarDimension::Ability => "ability",
            WiscarDimension::RealWorld => "realWorld",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WiscarDimension::Will => "Will (Motivation)",
            WiscarDimension::Interest => "Interest",
            WiscarDimension::Skill => "Current Skill Level",
            WiscarDimension::Cognitive => "Cognitive Readiness",
            WiscarDimension::Ability => "Learning Ability",
            WiscarDimension::RealWorld => "Real-World Fit",
        }
    }

    pub fn from_subcategory(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == raw)
    }
}

/// Scale end labels for likert questions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikertLabels {
    pub min: String,
    pub max: String,
}

fn default_weight() -> f64 {
    1.0
}

/// A single question of the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionDefinition {
    pub id: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    /// Question text shown to the respondent
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Legal answers for choice questions, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likert_labels: Option<LikertLabels>,
    /// Relative contribution to the category score
    #[serde(default = "default_weight")]
    pub weight: f64,
}

impl QuestionDefinition {
    /// Options the answer is matched against. Yes-no questions carry two
    /// implicit options so that they can be scored through the option table.
    pub fn answer_domain(&self) -> Vec<&str> {
        match self.question_type {
            QuestionType::YesNo => vec!["yes", "no"],
            _ => self.options.iter().map(String::as_str).collect(),
        }
    }

    /// Position of `text` among the answer options
    pub fn option_index(&self, text: &str) -> Option<usize> {
        self.answer_domain().iter().position(|o| *o == text)
    }

    pub fn wiscar_dimension(&self) -> Option<WiscarDimension> {
        if self.category != Category::Wiscar {
            return None;
        }
        self.subcategory
            .as_deref()
            .and_then(WiscarDimension::from_subcategory)
    }
}

/// Raw answer value: a likert position or the verbatim option text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Number(n) => write!(f, "{}", n),
            AnswerValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        AnswerValue::Number(value)
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        AnswerValue::Text(value)
    }
}

/// One recorded answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    pub value: AnswerValue,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, value: impl Into<AnswerValue>) -> Self {
        Self {
            question_id: question_id.into(),
            value: value.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Three-valued recommendation tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Yes,
    Maybe,
    No,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Yes => write!(f, "yes"),
            Recommendation::Maybe => write!(f, "maybe"),
            Recommendation::No => write!(f, "no"),
        }
    }
}

/// WISCAR subscores, each 0..=100
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WiscarScores {
    pub will: u8,
    pub interest: u8,
    pub skill: u8,
    pub cognitive: u8,
    pub ability: u8,
    pub real_world: u8,
}

impl WiscarScores {
    pub fn get(&self, dimension: WiscarDimension) -> u8 {
        match dimension {
            WiscarDimension::Will => self.will,
            WiscarDimension::Interest => self.interest,
            WiscarDimension::Skill => self.skill,
            WiscarDimension::Cognitive => self.cognitive,
            WiscarDimension::Ability => self.ability,
            WiscarDimension::RealWorld => self.real_world,
        }
    }

    pub fn set(&mut self, dimension: WiscarDimension, score: u8) {
        let slot = match dimension {
            WiscarDimension::Will => &mut self.will,
            WiscarDimension::Interest => &mut self.interest,
            WiscarDimension::Skill => &mut self.skill,
            WiscarDimension::Cognitive => &mut self.cognitive,
            WiscarDimension::Ability => &mut self.ability,
            WiscarDimension::RealWorld => &mut self.real_world,
        };
        *slot = score;
    }

    /// Unrounded mean of the six dimensions
    pub fn average(&self) -> f64 {
        let sum: u32 = WiscarDimension::ALL
            .iter()
            .map(|d| u32::from(self.get(*d)))
            .sum();
        sum as f64 / WiscarDimension::ALL.len() as f64
    }
}

/// Category scores plus the blended overall score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub psychometric: u8,
    pub technical: u8,
    pub aptitude: u8,
    pub wiscar: WiscarScores,
    pub overall: u8,
}

/// Suggested curriculum grouped by level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningPath {
    pub beginner: Vec<String>,
    pub intermediate: Vec<String>,
    pub advanced: Vec<String>,
}

/// Immutable outcome of one scoring run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsRecord {
    pub scores: Scores,
    pub recommendation: Recommendation,
    /// 30..=95
    pub confidence: u8,
    pub insights: Vec<String>,
    pub next_steps: Vec<String>,
    /// Present only when the recommendation is `No`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_roles: Option<Vec<String>>,
    pub learning_path: LearningPath,
}
