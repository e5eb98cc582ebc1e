//! Player configuration
//!
//! Deserialized from a plain JavaScript object; every key is optional.

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONTAINER_ID: &str = "lrc-container";
pub const DEFAULT_LINE_HEIGHT: f64 = 30.0;
pub const DEFAULT_TEXT_CLASS: &str = "lrc-player-text";
pub const DEFAULT_HIGHLIGHT_CLASS: &str = "lrc-player-highlight";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerConfig {
    /// Id assigned to the outer container element
    pub container_id: String,

    /// Line height in px used when the first line cannot be measured
    pub line_height_fallback: f64,

    /// Class carried by every unhighlighted line
    pub text_class: String,

    /// Class carried by the active line
    pub highlight_class: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            line_height_fallback: DEFAULT_LINE_HEIGHT,
            text_class: DEFAULT_TEXT_CLASS.to_string(),
            highlight_class: DEFAULT_HIGHLIGHT_CLASS.to_string(),
        }
    }
}

impl PlayerConfig {
    /// Default configuration with a custom container id
    pub fn with_container_id(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            ..Self::default()
        }
    }

    /// Id of the inner scroll wrapper
    pub fn wrapper_id(&self) -> String {
        format!("{}-wrapper", self.container_id)
    }
}
