use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneadateError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Nested precision: {0}")]
    NestedPrecision(String),
    #[error("Not comparable: {0}")]
    NotComparable(String),
}

pub type Result<T> = std::result::Result<T, GeneadateError>;

// Helper conversions
impl From<::config::ConfigError> for GeneadateError {
    fn from(e: ::config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
