//! LRC Player WASM Module
//!
//! Parses timestamped (LRC) lyric text and scrolls/highlights the lines in
//! a page in sync with a playback clock. The engine itself is plain Rust
//! over small host traits, so it also runs headless.

pub mod models;
pub mod parse;
pub mod renderers;
pub mod playback;
pub mod api;

// Re-export commonly used types
pub use models::{LyricLine, PlayerConfig, PlayerState};
pub use parse::parse_lrc;
pub use playback::{LyricListener, LyricPlayer, PlayerError};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            web_sys::console::warn_1(&format!("[LRC] logger already initialized: {}", e).into());
        }
    }

    log::info!("LRC player WASM module initialized");
}
