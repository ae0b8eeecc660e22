use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScafForgeError {
    #[error("Configuration Error: {0}")]
    Config(String),

    /// An operator produced a sequence that is no longer a permutation of
    /// the block set. This is a bug in the operator, not a runtime
    /// condition the caller can recover from.
    #[error("Operator Invariant Violation: {0}")]
    Invariant(String),

    #[error("Evaluation Error: {0}")]
    Evaluation(String),
}

pub type SfResult<T> = Result<T, ScafForgeError>;
