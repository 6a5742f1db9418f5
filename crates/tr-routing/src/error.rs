use thiserror::Error;
use tr_core::CoreError;
use tr_graph::GraphError;

#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("invalid routing settings: {0}")]
    Settings(#[from] CoreError),

    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
}

pub type RoutingResult<T> = Result<T, RoutingError>;
