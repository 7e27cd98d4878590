// src/error.rs

use thiserror::Error;

use crate::core::net::NetError;

/// First failure in the fetch → extract → preload pipeline.
///
/// Transport and page-format failures stay distinct so callers can tell a
/// flaky network from site drift. No variant is retried anywhere.
#[derive(Debug, Error)]
pub enum GameError {
    /// Network/request-layer failure, surfaced unmodified.
    #[error("request failed: {0}")]
    Transport(#[from] NetError),

    /// The `gadgetInfo = {...}` pattern was absent from the page body.
    #[error("gadget info not found")]
    InfoNotFound,

    /// The repaired fragment is not valid JSON.
    #[error("gadget info is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A game-specific preload hook failed.
    #[error("preload failed: {0}")]
    Preload(String),
}
