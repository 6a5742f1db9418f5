use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("stop {0:?} already exists")]
    DuplicateStop(String),

    #[error("bus {0:?} already exists")]
    DuplicateBus(String),

    #[error("unknown stop {0:?}")]
    UnknownStop(String),

    #[error("bus {0:?} has no stops")]
    EmptyRoute(String),

    #[error("catalogue too large: {0} entries exceed the 32-bit id space")]
    TooLarge(usize),

    #[error("catalogue parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CatalogueResult<T> = Result<T, CatalogueError>;
