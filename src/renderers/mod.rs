//! Renderers module for the LRC player
//!
//! The player never talks to the browser directly. It draws through the
//! `RenderTarget` trait, implemented by `DomTarget` over the real document
//! and by `MemoryTarget` for headless use.

pub mod target;
pub mod lyrics_view;
pub mod memory;
pub mod dom;

// Re-export commonly used types
pub use target::{RenderError, RenderTarget};
pub use lyrics_view::LyricsView;
pub use memory::{MemoryNode, MemoryTarget};
pub use dom::DomTarget;
