//! Error types for the playback engine

use thiserror::Error;

use crate::renderers::RenderError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PlayerError {
    /// The element tree rejected an update
    #[error("Render failed: {0}")]
    Render(#[from] RenderError),

    /// The host could not schedule the next frame
    #[error("Frame scheduling failed: {0}")]
    Schedule(String),
}
