//! Tree Inspectors
//!
//! Five independent analyzers, each a pure function of the snapshot.
//! Every inspector returns its emitted defects plus its sub-report;
//! none mutates shared state, so they may run in any order.

pub mod contrast;
pub mod images;
pub mod headings;
pub mod forms;
pub mod keyboard;

use prism_dom::ElementData;

/// Reconstruct a short markup snippet for display in defect nodes
pub(crate) fn render_snippet(el: &ElementData) -> String {
    let mut out = format!("<{}", el.tag);
    for attr in &el.attrs {
        out.push_str(&format!(" {}=\"{}\"", attr.name, attr.value));
    }
    out.push('>');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_snippet() {
        let mut el = ElementData::new("img");
        el.set_attr("src", "hero.jpg");
        el.set_attr("class", "hero-image");
        assert_eq!(render_snippet(&el), "<img src=\"hero.jpg\" class=\"hero-image\">");
    }
}
