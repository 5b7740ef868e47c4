#![forbid(unsafe_code)]

//! Element tree produced by component renders.
//!
//! An [`Element`] is the committed output of a render pass: a plain value
//! tree with no behavior attached. Hosts store the last committed tree and
//! present it however they like; tests compare trees structurally.

/// A rendered UI value.
///
/// `Element` is cheap to clone relative to a render pass and compares
/// structurally, so "the boundary's output equals the configured fallback"
/// is a plain equality assertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Element {
    /// Renders nothing. Distinct from "no element configured": an explicitly
    /// supplied `Empty` is a real (blank) presentation.
    #[default]
    Empty,
    /// A text run.
    Text(String),
    /// A tagged node with attributes and children.
    Node(Node),
}

impl Element {
    /// Create a text element.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Whether this element renders nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Concatenated text content of the subtree, depth-first.
    #[must_use]
    pub fn text_content(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(text) => text.clone(),
            Self::Node(node) => node
                .children
                .iter()
                .map(Element::text_content)
                .collect::<Vec<_>>()
                .join(""),
        }
    }

    /// First node with the given kind, depth-first, including self.
    #[must_use]
    pub fn find(&self, kind: &str) -> Option<&Node> {
        match self {
            Self::Node(node) => {
                if node.kind == kind {
                    return Some(node);
                }
                node.children.iter().find_map(|child| child.find(kind))
            }
            _ => None,
        }
    }
}

impl From<Node> for Element {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<&str> for Element {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Element {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// A tagged element with attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    kind: String,
    attrs: Vec<(String, String)>,
    children: Vec<Element>,
}

impl Node {
    /// Create an empty node of the given kind.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append an attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Append a child element.
    #[must_use]
    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Node kind.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// All attributes in insertion order.
    #[must_use]
    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    /// Value of the first attribute with the given name.
    #[must_use]
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Child elements in order.
    #[must_use]
    pub fn children(&self) -> &[Element] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(Element::default().is_empty());
        assert!(!Element::text("x").is_empty());
    }

    #[test]
    fn node_builder_accumulates() {
        let node = Node::new("alert")
            .attr("role", "alert")
            .child("Something went wrong:")
            .child(Node::new("pre").child("boom"));
        assert_eq!(node.kind(), "alert");
        assert_eq!(node.attr_value("role"), Some("alert"));
        assert_eq!(node.attr_value("missing"), None);
        assert_eq!(node.children().len(), 2);
    }

    #[test]
    fn text_content_concatenates_depth_first() {
        let el: Element = Node::new("div")
            .child("a")
            .child(Node::new("pre").child("b"))
            .child("c")
            .into();
        assert_eq!(el.text_content(), "abc");
        assert_eq!(Element::Empty.text_content(), "");
    }

    #[test]
    fn find_locates_nested_node() {
        let el: Element = Node::new("div")
            .child(Node::new("section").child(Node::new("pre").child("boom")))
            .into();
        let pre = el.find("pre").expect("pre node present");
        assert_eq!(pre.children(), &[Element::text("boom")]);
        assert!(el.find("button").is_none());
    }

    #[test]
    fn structural_equality() {
        let a: Element = Node::new("div").child("x").into();
        let b: Element = Node::new("div").child("x").into();
        let c: Element = Node::new("div").child("y").into();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn from_str_is_text() {
        let el: Element = "hi".into();
        assert_eq!(el, Element::text("hi"));
    }
}
