// Catalog module: the fixed question battery and its per-option scoring table.
//
// The built-in catalog is declared as static seed tables and converted into a
// validated `QuestionCatalog` at load time. External catalogs use the same
// validation, read from TOML:
//
//   [[questions]]
//   id = "tech_1"
//   type = "multiple-choice"
//   category = "technical"
//   prompt = "..."
//   options = ["A", "B", "C", "D"]
//   weight = 1.5
//
//   [option_scores]
//   tech_1 = [20, 100, 10, 15]

use crate::error::AssessError;
use crate::types::{Category, LikertLabels, QuestionDefinition, QuestionType};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use tracing::debug;

/// Score of an option whose question has no row in the option table.
pub const NEUTRAL_OPTION_SCORE: u8 = 50;

const LIKERT_MIN: &str = "Strongly Disagree";
const LIKERT_MAX: &str = "Strongly Agree";

pub struct QuestionSeed {
    pub id: &'static str,
    pub question_type: QuestionType,
    pub category: Category,
    pub subcategory: &'static str,
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub weight: f64,
}

pub static QUESTIONS: &[QuestionSeed] = &[
    // Psychometric
    QuestionSeed {
        id: "psych_1",
        question_type: QuestionType::Likert,
        category: Category::Psychometric,
        subcategory: "openness",
        prompt: "I enjoy exploring new technologies and learning about emerging trends.",
        options: &[],
        weight: 1.2,
    },
    QuestionSeed {
        id: "psych_2",
        question_type: QuestionType::Likert,
        category: Category::Psychometric,
        subcategory: "conscientiousness",
        prompt: "I prefer working with structured, well-defined technical specifications.",
        options: &[],
        weight: 1.0,
    },
    QuestionSeed {
        id: "psych_3",
        question_type: QuestionType::MultipleChoice,
        category: Category::Psychometric,
        subcategory: "cognitive_style",
        prompt: "When faced with a complex system problem, I prefer to:",
        options: &[
            "Break it down into smaller, manageable components",
            "Look at the big picture first, then dive into details",
            "Research similar problems and adapt existing solutions",
            "Experiment with different approaches until something works",
        ],
        weight: 1.3,
    },
    QuestionSeed {
        id: "psych_4",
        question_type: QuestionType::Likert,
        category: Category::Psychometric,
        subcategory: "motivation",
        prompt: "I would pursue edge cloud architecture even if it required 6-12 months of intensive learning.",
        options: &[],
        weight: 1.5,
    },
    QuestionSeed {
        id: "psych_5",
        question_type: QuestionType::MultipleChoice,
        category: Category::Psychometric,
        subcategory: "interest",
        prompt: "Which type of technology challenges excite you most?",
        options: &[
            "Optimizing system performance and reducing latency",
            "Designing user interfaces and experiences",
            "Managing data and databases",
            "Building secure authentication systems",
        ],
        weight: 1.4,
    },
    // Technical and aptitude
    QuestionSeed {
        id: "tech_1",
        question_type: QuestionType::MultipleChoice,
        category: Category::Technical,
        subcategory: "networking",
        prompt: "What is the primary advantage of processing data at the edge rather than in a centralized cloud?",
        options: &[
            "Lower costs",
            "Reduced latency and faster response times",
            "Better user interface design",
            "Easier data backup",
        ],
        weight: 1.5,
    },
    QuestionSeed {
        id: "tech_2",
        question_type: QuestionType::MultipleChoice,
        category: Category::Technical,
        subcategory: "architecture",
        prompt: "In a distributed edge network, what happens when one edge node fails?",
        options: &[
            "The entire system shuts down",
            "Traffic is rerouted to other available nodes",
            "All data is lost permanently",
            "The central cloud takes over all processing",
        ],
        weight: 1.3,
    },
    QuestionSeed {
        id: "aptitude_1",
        question_type: QuestionType::MultipleChoice,
        category: Category::Aptitude,
        subcategory: "logic",
        prompt: "If latency increases by 10ms for each network hop, and your data travels through 5 hops, what is the total additional latency?",
        options: &["25ms", "40ms", "50ms", "60ms"],
        weight: 1.0,
    },
    QuestionSeed {
        id: "tech_3",
        question_type: QuestionType::Scenario,
        category: Category::Technical,
        subcategory: "problem_solving",
        prompt: "A smart factory needs real-time monitoring of 1000 sensors with response times under 5ms. How would you architect this system?",
        options: &[
            "Send all data to a central cloud for processing",
            "Deploy edge computing nodes near sensor clusters",
            "Use a single powerful server in the factory",
            "Process everything on each individual sensor",
        ],
        weight: 1.6,
    },
    // WISCAR
    QuestionSeed {
        id: "wiscar_will_1",
        question_type: QuestionType::Likert,
        category: Category::Wiscar,
        subcategory: "will",
        prompt: "I consistently work through complex technical problems, even when the solution isn't immediately obvious.",
        options: &[],
        weight: 1.2,
    },
    QuestionSeed {
        id: "wiscar_will_2",
        question_type: QuestionType::Likert,
        category: Category::Wiscar,
        subcategory: "will",
        prompt: "I stay motivated when working on long-term technical projects with uncertain outcomes.",
        options: &[],
        weight: 1.2,
    },
    QuestionSeed {
        id: "wiscar_interest_1",
        question_type: QuestionType::Likert,
        category: Category::Wiscar,
        subcategory: "interest",
        prompt: "Edge computing and IoT systems fascinate me more than traditional web development.",
        options: &[],
        weight: 1.4,
    },
    QuestionSeed {
        id: "wiscar_interest_2",
        question_type: QuestionType::MultipleChoice,
        category: Category::Wiscar,
        subcategory: "interest",
        prompt: "Which scenario sounds most interesting to work on?",
        options: &[
            "Autonomous vehicle communication systems",
            "Social media platform features",
            "E-commerce checkout optimization",
            "Corporate HR management systems",
        ],
        weight: 1.3,
    },
    QuestionSeed {
        id: "wiscar_skill_1",
        question_type: QuestionType::MultipleChoice,
        category: Category::Wiscar,
        subcategory: "skill",
        prompt: "How comfortable are you with Linux command line operations?",
        options: &[
            "Expert - I use advanced commands and scripting daily",
            "Intermediate - I can navigate and perform basic operations",
            "Beginner - I know a few basic commands",
            "Novice - I rarely or never use command line",
        ],
        weight: 1.3,
    },
    QuestionSeed {
        id: "wiscar_cognitive_1",
        question_type: QuestionType::Scenario,
        category: Category::Wiscar,
        subcategory: "cognitive",
        prompt: "You need to design a system where 100 smart cameras must process video in real-time. How do you approach this?",
        options: &[
            "Start by understanding the specific latency and processing requirements",
            "Research what hardware specifications the cameras need",
            "Look for existing similar implementations to adapt",
            "Begin by testing with a small prototype setup",
        ],
        weight: 1.4,
    },
    QuestionSeed {
        id: "wiscar_ability_1",
        question_type: QuestionType::Likert,
        category: Category::Wiscar,
        subcategory: "ability",
        prompt: "I learn effectively from failure and use setbacks to improve my technical approach.",
        options: &[],
        weight: 1.2,
    },
    QuestionSeed {
        id: "wiscar_real_world_1",
        question_type: QuestionType::MultipleChoice,
        category: Category::Wiscar,
        subcategory: "realWorld",
        prompt: "What do you think is the most important skill for an Edge Cloud Architect?",
        options: &[
            "Understanding distributed systems and networking",
            "Advanced programming in multiple languages",
            "Project management and team leadership",
            "Understanding business requirements and costs",
        ],
        weight: 1.3,
    },
];

/// Per-option scores, authored for correctness/alignment rather than option order.
pub static OPTION_SCORES: &[(&str, &[u8])] = &[
    ("psych_3", &[75, 85, 65, 70]),
    ("psych_5", &[90, 30, 50, 40]),
    ("tech_1", &[20, 100, 10, 15]),
    ("tech_2", &[0, 100, 10, 50]),
    ("aptitude_1", &[0, 0, 100, 0]),
    ("tech_3", &[20, 100, 60, 30]),
    ("wiscar_interest_2", &[100, 20, 40, 30]),
    ("wiscar_skill_1", &[100, 75, 50, 25]),
    ("wiscar_cognitive_1", &[100, 80, 70, 85]),
    ("wiscar_real_world_1", &[100, 70, 60, 80]),
];

impl QuestionSeed {
    fn to_definition(&self) -> QuestionDefinition {
        let likert_labels = (self.question_type == QuestionType::Likert).then(|| LikertLabels {
            min: LIKERT_MIN.to_string(),
            max: LIKERT_MAX.to_string(),
        });
        QuestionDefinition {
            id: self.id.to_string(),
            question_type: self.question_type,
            category: self.category,
            subcategory: Some(self.subcategory.to_string()),
            prompt: self.prompt.to_string(),
            description: None,
            options: self.options.iter().map(|o| o.to_string()).collect(),
            likert_labels,
            weight: self.weight,
        }
    }
}

/// On-disk catalog layout
#[derive(Debug, Deserialize)]
struct CatalogFile {
    questions: Vec<QuestionDefinition>,
    #[serde(default)]
    option_scores: BTreeMap<String, Vec<u8>>,
}

/// Validated, immutable question catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionCatalog {
    questions: Vec<QuestionDefinition>,
    option_scores: BTreeMap<String, Vec<u8>>,
}

impl QuestionCatalog {
    /// Build a catalog, rejecting anything the scorer could not interpret.
    pub fn new(
        questions: Vec<QuestionDefinition>,
        option_scores: BTreeMap<String, Vec<u8>>,
    ) -> Result<Self, AssessError> {
        let catalog = Self {
            questions,
            option_scores,
        };
        catalog.validate()?;
        debug!(
            questions = catalog.questions.len(),
            option_rows = catalog.option_scores.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// The Edge Cloud Architect battery.
    pub fn builtin() -> Result<Self, AssessError> {
        let questions = QUESTIONS.iter().map(QuestionSeed::to_definition).collect();
        let option_scores = OPTION_SCORES
            .iter()
            .map(|(id, scores)| (id.to_string(), scores.to_vec()))
            .collect();
        Self::new(questions, option_scores)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, AssessError> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.questions, file.option_scores)
    }

    /// Read a catalog TOML file.
    pub fn load(path: &Path) -> Result<Self, AssessError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
            .map_err(|e| AssessError::Catalog(format!("{}: {}", path.display(), e)))
    }

    fn validate(&self) -> Result<(), AssessError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for q in &self.questions {
            if q.id.trim().is_empty() {
                return Err(AssessError::Catalog("question with empty id".to_string()));
            }
            if !seen.insert(q.id.as_str()) {
                return Err(AssessError::Catalog(format!("duplicate question id: {}", q.id)));
            }
            if !q.weight.is_finite() || q.weight <= 0.0 {
                return Err(AssessError::Catalog(format!(
                    "{}: weight must be positive, got {}",
                    q.id, q.weight
                )));
            }
            if q.question_type.is_choice() && q.options.is_empty() {
                return Err(AssessError::Catalog(format!(
                    "{}: {} question needs options",
                    q.id, q.question_type
                )));
            }
            if !q.question_type.is_choice() && !q.options.is_empty() {
                return Err(AssessError::Catalog(format!(
                    "{}: {} question must not declare options",
                    q.id, q.question_type
                )));
            }
            if q.category == Category::Wiscar && q.wiscar_dimension().is_none() {
                return Err(AssessError::Catalog(format!(
                    "{}: wiscar subcategory {:?} is not a WISCAR dimension",
                    q.id, q.subcategory
                )));
            }
        }

        for (id, scores) in &self.option_scores {
            let question = self.get(id).ok_or_else(|| {
                AssessError::Catalog(format!("option scores for unknown question: {}", id))
            })?;
            let expected = question.answer_domain().len();
            if scores.len() != expected {
                return Err(AssessError::Catalog(format!(
                    "{}: {} option scores for {} options",
                    id,
                    scores.len(),
                    expected
                )));
            }
            if let Some(bad) = scores.iter().find(|s| **s > 100) {
                return Err(AssessError::Catalog(format!(
                    "{}: option score {} exceeds 100",
                    id, bad
                )));
            }
        }
        Ok(())
    }

    pub fn questions(&self) -> &[QuestionDefinition] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&QuestionDefinition> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Questions of `category`, further filtered by `subcategory` when given.
    pub fn select<'a>(
        &'a self,
        category: Category,
        subcategory: Option<&'a str>,
    ) -> impl Iterator<Item = &'a QuestionDefinition> + 'a {
        self.questions.iter().filter(move |q| {
            q.category == category
                && subcategory.map_or(true, |sub| q.subcategory.as_deref() == Some(sub))
        })
    }

    pub fn option_scores(&self, id: &str) -> Option<&[u8]> {
        self.option_scores.get(id).map(Vec::as_slice)
    }

    /// Score of option `index` for question `id`; neutral when the question has no row.
    pub fn option_score(&self, id: &str, index: usize) -> u8 {
        match self.option_scores(id) {
            Some(row) => row.get(index).copied().unwrap_or(NEUTRAL_OPTION_SCORE),
            None => NEUTRAL_OPTION_SCORE,
        }
    }

    pub fn count_by_category(&self) -> BTreeMap<Category, usize> {
        let mut counts = BTreeMap::new();
        for q in &self.questions {
            *counts.entry(q.category).or_insert(0) += 1;
        }
        counts
    }

    /// SHA256 over everything that influences scoring, as a hex string.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for q in &self.questions {
            hasher.update(q.id.as_bytes());
            hasher.update([0u8]);
            hasher.update(q.question_type.to_string().as_bytes());
            hasher.update(q.category.as_str().as_bytes());
            hasher.update(q.subcategory.as_deref().unwrap_or("").as_bytes());
            hasher.update([0u8]);
            for option in &q.options {
                hasher.update(option.as_bytes());
                hasher.update([0u8]);
            }
            hasher.update(q.weight.to_le_bytes());
        }
        for (id, scores) in &self.option_scores {
            hasher.update(id.as_bytes());
            hasher.update([0u8]);
            hasher.update(scores);
        }
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn likert(id: &str, category: Category, subcategory: Option<&str>) -> QuestionDefinition {
        QuestionDefinition {
            id: id.to_string(),
            question_type: QuestionType::Likert,
            category,
            subcategory: subcategory.map(String::from),
            prompt: "prompt".to_string(),
            description: None,
            options: vec![],
            likert_labels: None,
            weight: 1.0,
        }
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = QuestionCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 17);
        let counts = catalog.count_by_category();
        assert_eq!(counts[&Category::Psychometric], 5);
        assert_eq!(counts[&Category::Technical], 3);
        assert_eq!(counts[&Category::Aptitude], 1);
        assert_eq!(counts[&Category::Wiscar], 8);
    }

    #[test]
    fn option_score_defaults_to_neutral() {
        let catalog = QuestionCatalog::builtin().unwrap();
        assert_eq!(catalog.option_score("tech_1", 1), 100);
        assert_eq!(catalog.option_score("aptitude_1", 0), 0);
        assert_eq!(catalog.option_score("psych_1", 0), NEUTRAL_OPTION_SCORE);
    }

    #[test]
    fn duplicate_ids_rejected() {
        let questions = vec![
            likert("q1", Category::Technical, None),
            likert("q1", Category::Technical, None),
        ];
        let err = QuestionCatalog::new(questions, BTreeMap::new()).unwrap_err();
        assert!(err.to_string().contains("duplicate question id: q1"));
    }

    #[test]
    fn option_row_length_must_match() {
        let mut q = likert("mc", Category::Technical, None);
        q.question_type = QuestionType::MultipleChoice;
        q.options = vec!["A".to_string(), "B".to_string()];
        let mut scores = BTreeMap::new();
        scores.insert("mc".to_string(), vec![10, 20, 30]);
        let err = QuestionCatalog::new(vec![q], scores).unwrap_err();
        assert!(matches!(err, AssessError::Catalog(_)));
    }

    #[test]
    fn unknown_wiscar_dimension_rejected() {
        let q = likert("w", Category::Wiscar, Some("courage"));
        assert!(QuestionCatalog::new(vec![q], BTreeMap::new()).is_err());
    }

    #[test]
    fn select_filters_by_subcategory() {
        let catalog = QuestionCatalog::builtin().unwrap();
        let will: Vec<_> = catalog
            .select(Category::Wiscar, Some("will"))
            .map(|q| q.id.as_str())
            .collect();
        assert_eq!(will, vec!["wiscar_will_1", "wiscar_will_2"]);
        assert_eq!(catalog.select(Category::Technical, None).count(), 3);
    }

    #[test]
    fn fingerprint_tracks_weights() {
        let a = QuestionCatalog::new(vec![likert("q", Category::Aptitude, None)], BTreeMap::new())
            .unwrap();
        let mut heavier = likert("q", Category::Aptitude, None);
        heavier.weight = 2.0;
        let b = QuestionCatalog::new(vec![heavier], BTreeMap::new()).unwrap();
        assert_eq!(a.fingerprint(), a.clone().fingerprint());
        assert_ne!(a.fingerprint(), b.fingerprint());
        assert_eq!(a.fingerprint().len(), 64);
    }
}
