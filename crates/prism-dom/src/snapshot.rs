//! Document Snapshot (arena-based)
//!
//! Read-only tree handed to the audit. All traversal is index-based
//! over the flat node array; document order is pre-order.

use crate::{ElementData, Node, NodeId};

/// Immutable snapshot of a rendered document tree
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub(crate) nodes: Vec<Node>,
}

impl Snapshot {
    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Number of nodes (including the document root and text nodes)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.element_count() == 0
    }

    /// Number of element nodes
    pub fn element_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_element()).count()
    }

    /// Locator for a node, if it exists
    pub fn locator(&self, id: NodeId) -> Option<&str> {
        self.get(id).map(|n| n.locator.as_str())
    }

    /// All node IDs in document order (pre-order), root first
    pub fn document_order(&self) -> impl Iterator<Item = NodeId> + '_ {
        DocumentOrder {
            snapshot: self,
            stack: if self.nodes.is_empty() {
                Vec::new()
            } else {
                vec![NodeId::ROOT]
            },
        }
    }

    /// All elements in document order
    pub fn elements(&self) -> impl Iterator<Item = (NodeId, &ElementData)> + '_ {
        self.document_order()
            .filter_map(|id| self.get(id).and_then(Node::as_element).map(|e| (id, e)))
    }

    /// Elements matching a tag name, in document order
    pub fn elements_by_tag<'a>(
        &'a self,
        tag: &'a str,
    ) -> impl Iterator<Item = (NodeId, &'a ElementData)> + 'a {
        self.elements().filter(move |(_, e)| e.tag == tag)
    }

    /// First element whose `id` attribute equals `id_value`
    pub fn element_by_id(&self, id_value: &str) -> Option<(NodeId, &ElementData)> {
        self.elements()
            .find(|(_, e)| e.get_attr("id") == Some(id_value))
    }

    /// IDs of all descendants of `id` (excluding `id`), document order
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = match self.get(id) {
            Some(node) => node.children.iter().rev().copied().collect(),
            None => Vec::new(),
        };
        while let Some(next) = stack.pop() {
            out.push(next);
            if let Some(node) = self.get(next) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        out
    }

    /// Concatenated, whitespace-trimmed text content under a node
    pub fn text_content(&self, id: NodeId) -> String {
        let mut parts = Vec::new();
        if let Some(text) = self.get(id).and_then(Node::as_text) {
            parts.push(text.trim().to_string());
        }
        for child in self.descendants(id) {
            if let Some(text) = self.get(child).and_then(Node::as_text) {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    parts.push(trimmed.to_string());
                }
            }
        }
        parts.join(" ").trim().to_string()
    }
}

struct DocumentOrder<'a> {
    snapshot: &'a Snapshot,
    stack: Vec<NodeId>,
}

impl Iterator for DocumentOrder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        if let Some(node) = self.snapshot.get(id) {
            self.stack.extend(node.children.iter().rev().copied());
        }
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use crate::SnapshotBuilder;

    #[test]
    fn test_document_order() {
        let mut b = SnapshotBuilder::new();
        let body = b.element(b.root(), "body", &[]);
        let h1 = b.element(body, "h1", &[]);
        b.text(h1, "Title");
        let p = b.element(body, "p", &[]);
        b.text(p, "Body text");
        let snapshot = b.build();

        let tags: Vec<String> = snapshot.elements().map(|(_, e)| e.tag.clone()).collect();
        assert_eq!(tags, vec!["body", "h1", "p"]);
    }

    #[test]
    fn test_text_content_accumulates() {
        let mut b = SnapshotBuilder::new();
        let button = b.element(b.root(), "button", &[]);
        let span = b.element(button, "span", &[]);
        b.text(span, "  Save ");
        b.text(button, "changes");
        let snapshot = b.build();

        assert_eq!(snapshot.text_content(button), "Save changes");
    }

    #[test]
    fn test_element_by_id() {
        let mut b = SnapshotBuilder::new();
        b.element(b.root(), "input", &[("id", "email")]);
        let snapshot = b.build();

        let (_, el) = snapshot.element_by_id("email").unwrap();
        assert_eq!(el.tag, "input");
        assert!(snapshot.element_by_id("missing").is_none());
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = SnapshotBuilder::new().build();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.element_count(), 0);
        // The document root still exists
        assert_eq!(snapshot.len(), 1);
    }
}
