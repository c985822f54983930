use thiserror::Error;

pub type Result<T> = std::result::Result<T, SybilError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SybilError {
    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("invalid network size: {0} (must be > 0)")]
    InvalidNetworkSize(i64),

    #[error("no feasible placement under the given KL budget and constraints")]
    NoFeasiblePlacement,
}

impl SybilError {
    /// True for errors caused by caller input (never by the search itself).
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            SybilError::Configuration(_) | SybilError::InvalidNetworkSize(_)
        )
    }
}
