//! Render target abstraction
//!
//! The minimal capability set the player needs from a host element tree.

use thiserror::Error;

/// Failures reported by a host element tree
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RenderError {
    /// No document/body to render into (e.g. running outside a page)
    #[error("Host document unavailable: {0}")]
    HostUnavailable(String),

    /// The host rejected an element operation
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

/// A host element tree the player can build into and update.
///
/// `Element` is a cheap handle to one element owned by the host.
pub trait RenderTarget {
    type Element: Clone;

    fn create_element(&mut self, tag: &str) -> Result<Self::Element, RenderError>;

    fn set_id(&mut self, element: &Self::Element, id: &str) -> Result<(), RenderError>;

    fn set_text(&mut self, element: &Self::Element, text: &str) -> Result<(), RenderError>;

    /// Set one inline style property
    fn set_style(
        &mut self,
        element: &Self::Element,
        property: &str,
        value: &str,
    ) -> Result<(), RenderError>;

    /// Add (`enabled`) or remove a class; both are idempotent
    fn set_class(
        &mut self,
        element: &Self::Element,
        class: &str,
        enabled: bool,
    ) -> Result<(), RenderError>;

    fn append_child(
        &mut self,
        parent: &Self::Element,
        child: &Self::Element,
    ) -> Result<(), RenderError>;

    /// Attach an element to the document root (the page body)
    fn append_to_root(&mut self, element: &Self::Element) -> Result<(), RenderError>;

    /// Remove the attached element with `id`. Returns `false` if none exists.
    fn remove_element(&mut self, id: &str) -> Result<bool, RenderError>;

    /// Rendered height in px, or `None` if the host cannot measure it
    fn measure_height(&self, element: &Self::Element) -> Option<f64>;
}
