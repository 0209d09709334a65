//! Owned HTML markup tree and its text writer.
//!
//! The renderer produces a [`Fragment`] of [`Node`]s rather than a
//! string so tests and downstream harnesses can inspect structure
//! (tags, attributes, order) without parsing HTML. Serialization
//! escapes text content and attribute values.

use std::fmt::Write;

/// One markup node: an element or a text run.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An element with tag, attributes (in insertion order) and children.
    Element {
        tag: &'static str,
        attrs: Vec<(&'static str, String)>,
        children: Vec<Node>,
    },
    /// A text run; escaped on serialization.
    Text(String),
}

impl Node {
    /// A new element with no attributes or children.
    pub fn element(tag: &'static str) -> Node {
        Node::Element {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// A text node.
    pub fn text(content: impl Into<String>) -> Node {
        Node::Text(content.into())
    }

    /// Append an attribute. No-op on text nodes.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Node {
        if let Node::Element { attrs, .. } = &mut self {
            attrs.push((name, value.into()));
        }
        self
    }

    /// Append a child node. No-op on text nodes.
    pub fn child(mut self, node: Node) -> Node {
        if let Node::Element { children, .. } = &mut self {
            children.push(node);
        }
        self
    }

    /// Append several children in order. No-op on text nodes.
    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Node {
        if let Node::Element { children, .. } = &mut self {
            children.extend(nodes);
        }
        self
    }

    /// The attribute value for `name`, if this is an element carrying it.
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        match self {
            Node::Element { attrs, .. } => attrs
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| v.as_str()),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text content of this node and its descendants.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element { children, .. } => {
                children.iter().map(Node::text_content).collect()
            }
        }
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&escape_text(text)),
            Node::Element {
                tag,
                attrs,
                children,
            } => {
                let _ = write!(out, "<{}", tag);
                for (name, value) in attrs {
                    let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
                }
                out.push('>');
                if is_void(tag) {
                    return;
                }
                for child in children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", tag);
            }
        }
    }

    /// Serialize this node to an HTML string.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }
}

/// An ordered list of top-level nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragment {
    /// Top-level nodes in render order.
    pub nodes: Vec<Node>,
}

impl Fragment {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Serialize all nodes, concatenated in order.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            node.write_html(&mut out);
        }
        out
    }
}

/// Void elements take no children and no end tag.
fn is_void(tag: &str) -> bool {
    matches!(tag, "meta" | "link" | "br" | "hr" | "img")
}

/// Escape text content: `& < >`.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape attribute values: text escapes plus `"`.
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_serialization() {
        let node = Node::element("section")
            .attr("data-section", "about")
            .child(Node::element("h2").child(Node::text("About")));

        assert_eq!(
            node.to_html(),
            "<section data-section=\"about\"><h2>About</h2></section>"
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let node = Node::element("p").child(Node::text("a < b && c > d"));
        assert_eq!(node.to_html(), "<p>a &lt; b &amp;&amp; c &gt; d</p>");
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let node = Node::element("a").attr("title", "say \"hi\" & <go>");
        assert_eq!(
            node.to_html(),
            "<a title=\"say &quot;hi&quot; &amp; &lt;go&gt;\"></a>"
        );
    }

    #[test]
    fn test_void_elements_have_no_end_tag() {
        let node = Node::element("meta").attr("charset", "utf-8");
        assert_eq!(node.to_html(), "<meta charset=\"utf-8\">");
    }

    #[test]
    fn test_fragment_preserves_node_order() {
        let fragment = Fragment::new(vec![
            Node::element("h1"),
            Node::element("h2"),
            Node::element("h3"),
        ]);
        assert_eq!(fragment.to_html(), "<h1></h1><h2></h2><h3></h3>");
    }

    #[test]
    fn test_text_content_walks_descendants() {
        let node = Node::element("li")
            .child(Node::element("h3").child(Node::text("Acme")))
            .child(Node::element("time").child(Node::text("2019 - 2021")));
        assert_eq!(node.text_content(), "Acme2019 - 2021");
    }
}
