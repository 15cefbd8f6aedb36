pub mod answers;
pub mod catalog;
pub mod config;
pub mod error;
pub mod report;
pub mod rules;
pub mod scorer;
pub mod session;
pub mod synthesizer;
pub mod telemetry;
pub mod types;

pub use answers::AnswerSet;
pub use catalog::QuestionCatalog;
pub use config::AssessConfig;
pub use error::AssessError;
pub use scorer::{ScoringEngine, ScoringOptions, UnmatchedOption};
pub use session::AssessmentSession;
pub use synthesizer::synthesize;
pub use types::*;
