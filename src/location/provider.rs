use crate::domain::Coordinates;
use async_trait::async_trait;
use thiserror::Error;

/// One-shot position source: at most one success or one error per request,
/// no stream of updates, no caching.
#[async_trait]
pub trait PositionProvider: Send + Sync {
    async fn current_position(&self) -> Result<Coordinates, PositionError>;
}

#[derive(Error, Debug)]
pub enum PositionError {
    #[error("permission to read the position was denied")]
    PermissionDenied,
    #[error("position is currently unavailable")]
    Unavailable,
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
}
