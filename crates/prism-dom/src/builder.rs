//! Snapshot Builder
//!
//! Construction side of a snapshot, used by the external renderer
//! adapter and by tests. Node IDs returned here are only valid for
//! the builder that produced them.
//!
//! Locators are assigned at build time: `#id` when the element carries
//! an `id` attribute, otherwise a rooted `tag[n]` path such as
//! `/body[1]/img[2]` (n counts same-tag preceding siblings), which is
//! unique within the snapshot.

use crate::{ComputedStyle, ElementData, Node, NodeData, NodeId, Snapshot};

/// Builds an immutable [`Snapshot`]
#[derive(Debug)]
pub struct SnapshotBuilder {
    nodes: Vec<Node>,
}

impl Default for SnapshotBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotBuilder {
    /// Create a builder holding only the document root
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                parent: None,
                children: Vec::new(),
                locator: "/".to_string(),
                data: NodeData::Document,
            }],
        }
    }

    /// Document root ID
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Append an element under `parent`
    pub fn element(&mut self, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let mut data = ElementData::new(tag);
        for (name, value) in attrs {
            data.set_attr(name, value);
        }
        self.push(parent, NodeData::Element(data))
    }

    /// Append an element with resolved foreground/background colors
    pub fn styled_element(
        &mut self,
        parent: NodeId,
        tag: &str,
        attrs: &[(&str, &str)],
        color: Option<&str>,
        background_color: Option<&str>,
    ) -> NodeId {
        let id = self.element(parent, tag, attrs);
        self.set_style(
            id,
            ComputedStyle {
                color: color.map(str::to_string),
                background_color: background_color.map(str::to_string),
            },
        );
        id
    }

    /// Append a text node under `parent`
    pub fn text(&mut self, parent: NodeId, content: &str) -> NodeId {
        self.push(parent, NodeData::Text(content.to_string()))
    }

    /// Attach a computed style to an existing element
    pub fn set_style(&mut self, id: NodeId, style: ComputedStyle) {
        if let Some(NodeData::Element(el)) = self.nodes.get_mut(id.index()).map(|n| &mut n.data) {
            el.style = Some(style);
        }
    }

    fn push(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            parent: Some(parent),
            children: Vec::new(),
            locator: String::new(),
            data,
        });
        if let Some(p) = self.nodes.get_mut(parent.index()) {
            p.children.push(id);
        }
        id
    }

    /// Finalize: assign locators and freeze the tree
    pub fn build(mut self) -> Snapshot {
        let locators: Vec<String> = (1..self.nodes.len())
            .map(|idx| self.locator_for(NodeId(idx as u32)))
            .collect();
        for (idx, locator) in locators.into_iter().enumerate() {
            self.nodes[idx + 1].locator = locator;
        }
        Snapshot { nodes: self.nodes }
    }

    fn locator_for(&self, id: NodeId) -> String {
        let node = &self.nodes[id.index()];
        if let NodeData::Element(el) = &node.data {
            if let Some(id_attr) = el.get_attr("id") {
                if !id_attr.is_empty() {
                    return format!("#{id_attr}");
                }
            }
        }

        let mut segments = Vec::new();
        let mut current = id;
        loop {
            let node = &self.nodes[current.index()];
            let parent = match node.parent {
                Some(p) => p,
                None => break,
            };
            segments.push(self.segment(parent, current));
            current = parent;
        }
        segments.reverse();
        format!("/{}", segments.join("/"))
    }

    /// `tag[n]` for elements, `text()[n]` for text nodes
    fn segment(&self, parent: NodeId, id: NodeId) -> String {
        let node = &self.nodes[id.index()];
        let siblings = &self.nodes[parent.index()].children;
        match &node.data {
            NodeData::Element(el) => {
                let nth = siblings
                    .iter()
                    .take_while(|&&s| s != id)
                    .filter(|&&s| {
                        matches!(&self.nodes[s.index()].data,
                            NodeData::Element(other) if other.tag == el.tag)
                    })
                    .count()
                    + 1;
                format!("{}[{}]", el.tag, nth)
            }
            _ => {
                let nth = siblings
                    .iter()
                    .take_while(|&&s| s != id)
                    .filter(|&&s| !self.nodes[s.index()].is_element())
                    .count()
                    + 1;
                format!("text()[{nth}]")
            }
        }
    }
}
