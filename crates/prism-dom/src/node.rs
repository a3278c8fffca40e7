//! Snapshot Node
//!
//! Node records stored in the snapshot arena.

use serde::Serialize;

use crate::NodeId;

/// A node in the snapshot tree
#[derive(Debug, Clone)]
pub struct Node {
    /// Parent node (None for the document root)
    pub parent: Option<NodeId>,
    /// Children in document order
    pub children: Vec<NodeId>,
    /// Stable locator, unique within the snapshot
    pub locator: String,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Document root
    Document,
    /// Element with tag, attributes and resolved style
    Element(ElementData),
    /// Text content
    Text(String),
}

/// Element-specific data
#[derive(Debug, Clone)]
pub struct ElementData {
    /// Lowercase tag name
    pub tag: String,
    /// Attributes (keys unique, insertion order preserved)
    pub attrs: Vec<Attribute>,
    /// Computed style, where the renderer resolved one
    pub style: Option<ComputedStyle>,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
            style: None,
        }
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Check attribute presence (value may be empty)
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|a| a.name == name)
    }

    /// Set an attribute, replacing an existing value
    pub fn set_attr(&mut self, name: &str, value: &str) {
        for attr in self.attrs.iter_mut() {
            if attr.name == name {
                attr.value = value.to_string();
                return;
            }
        }
        self.attrs.push(Attribute {
            name: name.to_string(),
            value: value.to_string(),
        });
    }
}

/// Attribute
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// Computed style record as resolved by the external renderer.
///
/// Colors stay in their declared string form; parsing them is the
/// audit's job so that an unparsable declaration can be skipped per
/// node instead of failing snapshot construction.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ComputedStyle {
    pub color: Option<String>,
    pub background_color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_lookup() {
        let mut el = ElementData::new("IMG");
        el.set_attr("src", "chart.png");
        el.set_attr("alt", "");

        assert_eq!(el.tag, "img");
        assert_eq!(el.get_attr("src"), Some("chart.png"));
        assert_eq!(el.get_attr("alt"), Some(""));
        assert!(el.has_attr("alt"));
        assert!(!el.has_attr("role"));
    }

    #[test]
    fn test_attr_replace() {
        let mut el = ElementData::new("input");
        el.set_attr("type", "text");
        el.set_attr("type", "email");
        assert_eq!(el.get_attr("type"), Some("email"));
        assert_eq!(el.attrs.len(), 1);
    }
}
