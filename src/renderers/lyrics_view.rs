//! Lyrics view
//!
//! Builds the container, the scroll wrapper and one element per lyric line,
//! then moves the wrapper and swaps highlight classes as the active line
//! changes.

use crate::models::{LyricLine, PlayerConfig};
use crate::renderers::target::{RenderError, RenderTarget};

const CONTAINER_STYLE: &[(&str, &str)] = &[
    ("position", "relative"),
    ("min-height", "10vh"),
    ("overflow", "hidden"),
    ("margin", "20px 0"),
];

const WRAPPER_STYLE: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("width", "100%"),
    ("transition", "transform 0.1s linear"),
];

const LINE_STYLE: &[(&str, &str)] = &[("padding", "5px 0"), ("text-align", "center")];

/// Handles to the elements created for one player
#[derive(Debug, Clone)]
pub struct LyricsView<E> {
    pub container: E,
    pub wrapper: E,
    pub lines: Vec<E>,
}

impl<E: Clone> LyricsView<E> {
    /// Create the element subtree for `lines` and attach it to the root.
    ///
    /// Every line starts with the text (unhighlighted) class.
    pub fn build<R>(
        target: &mut R,
        config: &PlayerConfig,
        lines: &[LyricLine],
    ) -> Result<Self, RenderError>
    where
        R: RenderTarget<Element = E>,
    {
        let container = target.create_element("div")?;
        target.set_id(&container, &config.container_id)?;
        apply_styles(target, &container, CONTAINER_STYLE)?;

        let wrapper = target.create_element("div")?;
        target.set_id(&wrapper, &config.wrapper_id())?;
        apply_styles(target, &wrapper, WRAPPER_STYLE)?;

        let mut elements = Vec::with_capacity(lines.len());
        for line in lines {
            let element = target.create_element("div")?;
            target.set_class(&element, &config.text_class, true)?;
            target.set_text(&element, &line.text)?;
            apply_styles(target, &element, LINE_STYLE)?;
            target.append_child(&wrapper, &element)?;
            elements.push(element);
        }

        target.append_child(&container, &wrapper)?;
        target.append_to_root(&container)?;

        Ok(Self {
            container,
            wrapper,
            lines: elements,
        })
    }

    /// Height used for scrolling: the first line's, or the fallback.
    ///
    /// A zero height means layout has not happened yet.
    pub fn line_height<R>(&self, target: &R, fallback: f64) -> f64
    where
        R: RenderTarget<Element = E>,
    {
        self.lines
            .first()
            .and_then(|first| target.measure_height(first))
            .filter(|height| *height > 0.0)
            .unwrap_or(fallback)
    }

    /// Scroll `active` to the top and make it the only highlighted line
    pub fn show_active<R>(
        &self,
        target: &mut R,
        config: &PlayerConfig,
        active: usize,
    ) -> Result<(), RenderError>
    where
        R: RenderTarget<Element = E>,
    {
        let line_height = self.line_height(target, config.line_height_fallback);
        let offset = 0.0 - active as f64 * line_height;
        target.set_style(&self.wrapper, "transform", &format!("translateY({}px)", offset))?;

        for (index, element) in self.lines.iter().enumerate() {
            let highlighted = index == active;
            target.set_class(element, &config.highlight_class, highlighted)?;
            target.set_class(element, &config.text_class, !highlighted)?;
        }

        Ok(())
    }
}

fn apply_styles<R: RenderTarget>(
    target: &mut R,
    element: &R::Element,
    styles: &[(&str, &str)],
) -> Result<(), RenderError> {
    for (property, value) in styles {
        target.set_style(element, property, value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderers::memory::MemoryTarget;

    fn lines() -> Vec<LyricLine> {
        vec![
            LyricLine::new(1.0, "first"),
            LyricLine::new(2.0, "second"),
            LyricLine::new(3.0, "third"),
        ]
    }

    #[test]
    fn test_build_attaches_container_with_one_child_per_line() {
        let mut target = MemoryTarget::new();
        let config = PlayerConfig::default();
        let view = LyricsView::build(&mut target, &config, &lines()).unwrap();

        assert_eq!(target.element_by_id("lrc-container"), Some(view.container));
        assert_eq!(target.element_by_id("lrc-container-wrapper"), Some(view.wrapper));
        assert_eq!(target.children(view.wrapper), view.lines.as_slice());
        assert_eq!(target.text(view.lines[1]), "second");
        assert_eq!(target.style(view.container, "overflow"), Some("hidden"));

        for line in &view.lines {
            assert_eq!(target.classes(*line), ["lrc-player-text"]);
        }
    }

    #[test]
    fn test_show_active_moves_wrapper_and_highlights_one_line() {
        let mut target = MemoryTarget::new();
        let config = PlayerConfig::default();
        let view = LyricsView::build(&mut target, &config, &lines()).unwrap();

        view.show_active(&mut target, &config, 2).unwrap();

        // unmeasured layout uses the 30px fallback
        assert_eq!(target.style(view.wrapper, "transform"), Some("translateY(-60px)"));
        assert!(target.has_class(view.lines[2], "lrc-player-highlight"));
        assert!(!target.has_class(view.lines[2], "lrc-player-text"));
        assert!(target.has_class(view.lines[0], "lrc-player-text"));
        assert!(!target.has_class(view.lines[0], "lrc-player-highlight"));
    }

    #[test]
    fn test_measured_line_height_is_used() {
        let mut target = MemoryTarget::with_layout_height(24.0);
        let config = PlayerConfig::default();
        let view = LyricsView::build(&mut target, &config, &lines()).unwrap();

        view.show_active(&mut target, &config, 1).unwrap();
        assert_eq!(target.style(view.wrapper, "transform"), Some("translateY(-24px)"));

        view.show_active(&mut target, &config, 0).unwrap();
        assert_eq!(target.style(view.wrapper, "transform"), Some("translateY(0px)"));
    }

    #[test]
    fn test_empty_lyrics_still_build_container() {
        let mut target = MemoryTarget::new();
        let config = PlayerConfig::with_container_id("empty");
        let view = LyricsView::build(&mut target, &config, &[]).unwrap();

        assert!(view.lines.is_empty());
        assert!(target.element_by_id("empty").is_some());
        assert_eq!(view.line_height(&target, 30.0), 30.0);
    }
}
