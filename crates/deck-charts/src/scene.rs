//! Retained element tree and drawing surfaces
//!
//! Renderers produce [`Node`] trees; a [`Surface`] is the container those
//! trees are mounted into. The in-memory [`SceneSurface`] backs tests and
//! markup export, the DOM surface lives in [`crate::chart`].

use std::fmt::Write;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Namespace for an element `tag` created under a parent in `parent_ns`.
///
/// `<svg>` opens the SVG namespace and its descendants inherit it; `None`
/// means a plain HTML element.
pub fn element_namespace(tag: &str, parent_ns: Option<&'static str>) -> Option<&'static str> {
    if tag == "svg" { Some(SVG_NS) } else { parent_ns }
}

// ============================================================================
// NODE
// ============================================================================

/// One element with attributes, optional text content and children
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Node {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub text: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            ..Default::default()
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl ToString) -> Self {
        self.attrs.push((name, value.to_string()));
        self
    }

    pub fn class(self, class: &'static str) -> Self {
        self.attr("class", class)
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Value of attribute `name`, if set
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|c| c.split_whitespace().any(|c| c == class))
    }

    /// This node and every descendant, depth-first
    pub fn descendants(&self) -> Vec<&Node> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.descendants());
        }
        out
    }

    /// Descendants (including self) with the given tag
    pub fn find_all(&self, tag: &str) -> Vec<&Node> {
        self.descendants()
            .into_iter()
            .filter(|n| n.tag == tag)
            .collect()
    }

    /// Descendants (including self) carrying the given class
    pub fn find_class(&self, class: &str) -> Vec<&Node> {
        self.descendants()
            .into_iter()
            .filter(|n| n.has_class(class))
            .collect()
    }

    /// Serialize as HTML/SVG markup
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape(value));
        }
        out.push('>');
        if let Some(text) = &self.text {
            out.push_str(&escape(text));
        }
        for child in &self.children {
            child.write_markup(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// ============================================================================
// SURFACE
// ============================================================================

/// Container the engine draws into and exclusively owns the contents of
pub trait Surface {
    /// Remove every element previously appended
    fn clear(&mut self);

    /// Append one top-level element
    fn append(&mut self, node: Node);
}

/// In-memory surface
#[derive(Debug, Clone, Default)]
pub struct SceneSurface {
    nodes: Vec<Node>,
    mutations: usize,
}

impl SceneSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of `clear`/`append` calls received so far
    pub fn mutation_count(&self) -> usize {
        self.mutations
    }

    /// Every element on the surface with the given tag
    pub fn find_all(&self, tag: &str) -> Vec<&Node> {
        self.nodes.iter().flat_map(|n| n.find_all(tag)).collect()
    }

    /// Every element on the surface carrying the given class
    pub fn find_class(&self, class: &str) -> Vec<&Node> {
        self.nodes.iter().flat_map(|n| n.find_class(class)).collect()
    }

    pub fn to_markup(&self) -> String {
        self.nodes.iter().map(Node::to_markup).collect()
    }
}

impl Surface for SceneSurface {
    fn clear(&mut self) {
        self.nodes.clear();
        self.mutations += 1;
    }

    fn append(&mut self, node: Node) {
        self.nodes.push(node);
        self.mutations += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_namespace() {
        assert_eq!(element_namespace("div", None), None);
        assert_eq!(element_namespace("svg", None), Some(SVG_NS));
        assert_eq!(element_namespace("path", Some(SVG_NS)), Some(SVG_NS));
        assert_eq!(element_namespace("text", None), None);
    }

    #[test]
    fn test_markup_escapes_text_and_attrs() {
        let node = Node::new("text").attr("data-x", "a\"b").text("1 < 2 & 3");
        assert_eq!(
            node.to_markup(),
            "<text data-x=\"a&quot;b\">1 &lt; 2 &amp; 3</text>"
        );
    }

    #[test]
    fn test_nested_markup() {
        let node = Node::new("g")
            .class("axis")
            .child(Node::new("path").attr("d", "M0,0"));
        assert_eq!(
            node.to_markup(),
            "<g class=\"axis\"><path d=\"M0,0\"></path></g>"
        );
    }

    #[test]
    fn test_find_by_tag_and_class() {
        let node = Node::new("svg").child(
            Node::new("g")
                .class("grid tick")
                .child(Node::new("line"))
                .child(Node::new("line")),
        );
        assert_eq!(node.find_all("line").len(), 2);
        assert_eq!(node.find_class("tick").len(), 1);
        assert!(node.find_class("tic").is_empty());
    }

    #[test]
    fn test_scene_surface_counts_mutations() {
        let mut surface = SceneSurface::new();
        assert_eq!(surface.mutation_count(), 0);

        surface.append(Node::new("svg"));
        surface.append(Node::new("div"));
        assert_eq!(surface.nodes().len(), 2);

        surface.clear();
        assert!(surface.is_empty());
        assert_eq!(surface.mutation_count(), 3);
    }
}
