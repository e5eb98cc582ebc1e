//! In-memory render target
//!
//! A small element tree that records ids, text, classes and inline styles.
//! Used to run the player headless and to inspect what it rendered.

use std::collections::BTreeMap;

use crate::renderers::target::{RenderError, RenderTarget};

/// Handle to an element in a `MemoryTarget`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoryNode(usize);

#[derive(Debug, Clone, Default)]
struct MemoryElement {
    tag: String,
    id: Option<String>,
    text: String,
    classes: Vec<String>,
    styles: BTreeMap<String, String>,
    children: Vec<MemoryNode>,
    parent: Option<MemoryNode>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryTarget {
    elements: Vec<MemoryElement>,
    /// Elements attached directly to the root
    root: Vec<MemoryNode>,
    /// Height every element reports; `None` models an unmeasured layout
    layout_height: Option<f64>,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// A target where every element measures `height` px
    pub fn with_layout_height(height: f64) -> Self {
        Self {
            layout_height: Some(height),
            ..Self::default()
        }
    }

    pub fn set_layout_height(&mut self, height: Option<f64>) {
        self.layout_height = height;
    }

    /// Find an element with `id` that is attached to the root
    pub fn element_by_id(&self, id: &str) -> Option<MemoryNode> {
        let mut stack: Vec<MemoryNode> = self.root.iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            let element = &self.elements[node.0];
            if element.id.as_deref() == Some(id) {
                return Some(node);
            }
            stack.extend(element.children.iter().rev().copied());
        }
        None
    }

    pub fn root_children(&self) -> &[MemoryNode] {
        &self.root
    }

    pub fn children(&self, node: MemoryNode) -> &[MemoryNode] {
        &self.elements[node.0].children
    }

    pub fn tag(&self, node: MemoryNode) -> &str {
        &self.elements[node.0].tag
    }

    pub fn text(&self, node: MemoryNode) -> &str {
        &self.elements[node.0].text
    }

    pub fn classes(&self, node: MemoryNode) -> &[String] {
        &self.elements[node.0].classes
    }

    pub fn has_class(&self, node: MemoryNode, class: &str) -> bool {
        self.classes(node).iter().any(|c| c == class)
    }

    pub fn style(&self, node: MemoryNode, property: &str) -> Option<&str> {
        self.elements[node.0].styles.get(property).map(String::as_str)
    }

    fn element_mut(&mut self, node: &MemoryNode) -> Result<&mut MemoryElement, RenderError> {
        self.elements
            .get_mut(node.0)
            .ok_or_else(|| RenderError::Dom(format!("unknown element {}", node.0)))
    }

    fn detach(&mut self, node: MemoryNode) {
        match self.elements[node.0].parent.take() {
            Some(parent) => self.elements[parent.0].children.retain(|c| *c != node),
            None => self.root.retain(|c| *c != node),
        }
    }
}

impl RenderTarget for MemoryTarget {
    type Element = MemoryNode;

    fn create_element(&mut self, tag: &str) -> Result<MemoryNode, RenderError> {
        self.elements.push(MemoryElement {
            tag: tag.to_string(),
            ..MemoryElement::default()
        });
        Ok(MemoryNode(self.elements.len() - 1))
    }

    fn set_id(&mut self, element: &MemoryNode, id: &str) -> Result<(), RenderError> {
        self.element_mut(element)?.id = Some(id.to_string());
        Ok(())
    }

    fn set_text(&mut self, element: &MemoryNode, text: &str) -> Result<(), RenderError> {
        self.element_mut(element)?.text = text.to_string();
        Ok(())
    }

    fn set_style(
        &mut self,
        element: &MemoryNode,
        property: &str,
        value: &str,
    ) -> Result<(), RenderError> {
        self.element_mut(element)?
            .styles
            .insert(property.to_string(), value.to_string());
        Ok(())
    }

    fn set_class(
        &mut self,
        element: &MemoryNode,
        class: &str,
        enabled: bool,
    ) -> Result<(), RenderError> {
        let classes = &mut self.element_mut(element)?.classes;
        let present = classes.iter().any(|c| c == class);
        if enabled && !present {
            classes.push(class.to_string());
        } else if !enabled && present {
            classes.retain(|c| c != class);
        }
        Ok(())
    }

    fn append_child(&mut self, parent: &MemoryNode, child: &MemoryNode) -> Result<(), RenderError> {
        self.element_mut(parent)?;
        self.element_mut(child)?;
        if parent == child {
            return Err(RenderError::Dom("cannot append an element to itself".to_string()));
        }

        self.detach(*child);
        self.elements[child.0].parent = Some(*parent);
        self.elements[parent.0].children.push(*child);
        Ok(())
    }

    fn append_to_root(&mut self, element: &MemoryNode) -> Result<(), RenderError> {
        self.element_mut(element)?;
        self.detach(*element);
        self.root.push(*element);
        Ok(())
    }

    fn remove_element(&mut self, id: &str) -> Result<bool, RenderError> {
        match self.element_by_id(id) {
            Some(node) => {
                self.detach(node);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn measure_height(&self, element: &MemoryNode) -> Option<f64> {
        self.elements.get(element.0)?;
        self.layout_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_element_detaches_subtree() {
        let mut target = MemoryTarget::new();
        let outer = target.create_element("div").unwrap();
        let inner = target.create_element("span").unwrap();
        target.set_id(&outer, "outer").unwrap();
        target.set_id(&inner, "inner").unwrap();
        target.append_child(&outer, &inner).unwrap();
        target.append_to_root(&outer).unwrap();

        assert_eq!(target.element_by_id("inner"), Some(inner));
        assert_eq!(target.remove_element("outer"), Ok(true));
        assert!(target.element_by_id("outer").is_none());
        assert!(target.element_by_id("inner").is_none());
        assert!(target.root_children().is_empty());

        // removing again is a silent no-op
        assert_eq!(target.remove_element("outer"), Ok(false));
    }

    #[test]
    fn test_detached_elements_are_not_found_by_id() {
        let mut target = MemoryTarget::new();
        let node = target.create_element("div").unwrap();
        target.set_id(&node, "loose").unwrap();

        assert!(target.element_by_id("loose").is_none());
        assert_eq!(target.tag(node), "div");
    }

    #[test]
    fn test_set_class_is_idempotent() {
        let mut target = MemoryTarget::new();
        let node = target.create_element("div").unwrap();

        target.set_class(&node, "a", true).unwrap();
        target.set_class(&node, "a", true).unwrap();
        assert_eq!(target.classes(node), ["a"]);

        target.set_class(&node, "a", false).unwrap();
        target.set_class(&node, "a", false).unwrap();
        assert!(target.classes(node).is_empty());
    }

    #[test]
    fn test_measure_height_follows_layout() {
        let mut target = MemoryTarget::new();
        let node = target.create_element("div").unwrap();
        assert_eq!(target.measure_height(&node), None);

        target.set_layout_height(Some(18.0));
        assert_eq!(target.measure_height(&node), Some(18.0));
    }
}
