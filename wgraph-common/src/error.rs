use thiserror::Error;

pub type WGraphResult<T> = Result<T, WGraphError>;

#[derive(Debug, Error)]
pub enum WGraphError {
    #[error("unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("invalid weight: {0}")]
    InvalidWeight(String),

    #[error("negative cycle reachable from source")]
    NegativeCycle,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl WGraphError {
    pub fn unknown_vertex(vertex: &impl std::fmt::Debug) -> Self {
        WGraphError::UnknownVertex(format!("{vertex:?}"))
    }
}
