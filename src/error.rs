use std::fmt;

/// Typed error for techfit library operations.
#[derive(Debug)]
pub enum AssessError {
    /// Catalog validation errors (duplicate ids, option table mismatches)
    Catalog(String),
    /// Answer rejected by strict validation
    Answer(String),
    /// Parsing errors (answer JSON, catalog TOML)
    Parse(String),
    /// Configuration errors (config file, log filter)
    Config(String),
    /// Session state errors (answering a completed session)
    Session(String),
    /// IO errors (file read/write)
    Io(std::io::Error),
}

impl fmt::Display for AssessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssessError::Catalog(msg) => write!(f, "catalog error: {}", msg),
            AssessError::Answer(msg) => write!(f, "invalid answer: {}", msg),
            AssessError::Parse(msg) => write!(f, "parse error: {}", msg),
            AssessError::Config(msg) => write!(f, "config error: {}", msg),
            AssessError::Session(msg) => write!(f, "session error: {}", msg),
            AssessError::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for AssessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssessError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AssessError {
    fn from(err: std::io::Error) -> Self {
        AssessError::Io(err)
    }
}

impl From<serde_json::Error> for AssessError {
    fn from(err: serde_json::Error) -> Self {
        AssessError::Parse(err.to_string())
    }
}

impl From<toml::de::Error> for AssessError {
    fn from(err: toml::de::Error) -> Self {
        AssessError::Parse(err.to_string())
    }
}
