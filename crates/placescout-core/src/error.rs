use thiserror::Error;

/// Errors raised by domain validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The primary keyword was empty or whitespace; no search may be issued.
    #[error("primary keyword must not be empty")]
    EmptyKeyword,

    #[error("unknown ranking policy \"{0}\" (expected one of: phone_first, phone_and_rating, rating_only, alphabetical, none)")]
    UnknownRankingPolicy(String),
}

/// Errors raised while loading [`crate::AppConfig`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
