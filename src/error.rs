use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InitError {
    #[error("cannot initialise an empty {0} in place, it has no dimensions to size it from")]
    EmptyTensor(&'static str),

    #[error("invalid distribution parameters: {0}")]
    InvalidDistribution(String),
}
