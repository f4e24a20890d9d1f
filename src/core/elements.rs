//! Parsed diagram elements and their CeTZ rendering
//!
//! Each element knows how to turn itself into one or more CeTZ statements
//! through the [`ToCetz`] trait, so the emitter never needs to know which
//! drawing primitives exist.

use std::fmt::Write;

use crate::core::style::StyleMap;

/// Style identifier of the square Hadamard gate
pub const H_GATE_STYLE: &str = "h_gate";

/// Offset that centers the H-gate square on its declared coordinate
pub const H_GATE_OFFSET: (f64, f64) = (0.5, 0.5);

/// Anchor suffix naming the geometric center of a shape
pub const CENTER_SUFFIX: &str = ".center";

/// Anything that renders to a list of CeTZ statements
pub trait ToCetz {
    /// Render as CeTZ statements, one per output line, without indentation
    fn to_cetz(&self) -> Vec<String>;
}

/// A TikZ `\node` declaration
#[derive(Debug, Clone, PartialEq)]
pub struct NodeElement {
    /// Drawing primitive, e.g. `h_gate` or `none_`
    pub style: String,
    /// Remaining `key=value` pairs of the style list
    pub extra_styles: StyleMap,
    /// Identifier other statements refer to
    pub name: String,
    /// Raw coordinate expression, e.g. `0,0`
    pub coordinate: String,
    /// Raw label text, possibly empty
    pub label: String,
}

impl NodeElement {
    pub fn new(
        style: impl Into<String>,
        extra_styles: StyleMap,
        name: impl Into<String>,
        coordinate: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            style: style.into(),
            extra_styles,
            name: name.into(),
            coordinate: coordinate.into(),
            label: label.into(),
        }
    }

    /// Whether the node is drawn shifted off its literal coordinate
    pub fn is_offset(&self) -> bool {
        self.style == H_GATE_STYLE
    }

    fn shape_statement(&self) -> String {
        let mut stmt = format!("{}(({})", self.style, self.coordinate);
        if self.is_offset() {
            let (dx, dy) = H_GATE_OFFSET;
            let _ = write!(stmt, ", (rel: ({}, {}))", dx, dy);
        }
        let _ = write!(stmt, ", name: \"{}\")", self.name);
        stmt
    }
}

impl ToCetz for NodeElement {
    fn to_cetz(&self) -> Vec<String> {
        let mut emit = vec![self.shape_statement()];
        if !self.label.is_empty() {
            emit.push(format!(
                "content(\"{}\", [{}])",
                self.name,
                sanitize_label(&self.label)
            ));
        }
        emit
    }
}

/// A TikZ `\draw (a) to (b);` declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeElement {
    /// Raw style list, kept for fidelity but not rendered
    pub styles: Option<String>,
    /// Start node name, without any `.center` suffix
    pub start: String,
    /// End node name, without any `.center` suffix
    pub end: String,
}

impl EdgeElement {
    pub fn new(styles: Option<String>, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            styles,
            start: start.into(),
            end: end.into(),
        }
    }
}

impl ToCetz for EdgeElement {
    fn to_cetz(&self) -> Vec<String> {
        vec![format!(
            "line((\"{}{}\"), (\"{}{}\"))",
            self.start, CENTER_SUFFIX, self.end, CENTER_SUFFIX
        )]
    }
}

/// A parsed TikZ picture: nodes and edges in declaration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub nodes: Vec<NodeElement>,
    pub edges: Vec<EdgeElement>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// Strip every backslash from a TikZ label.
///
/// `\alpha_1` becomes `alpha_1`, which Typst reads as math. Braces, carets
/// and underscores pass through unchanged.
pub fn sanitize_label(label: &str) -> String {
    label.replace('\\', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(style: &str, name: &str, coordinate: &str, label: &str) -> NodeElement {
        NodeElement::new(style, StyleMap::new(), name, coordinate, label)
    }

    #[test]
    fn test_h_gate_is_offset() {
        let cetz = node("h_gate", "q0", "0,0", "H").to_cetz();
        assert_eq!(
            cetz,
            vec![
                r#"h_gate((0,0), (rel: (0.5, 0.5)), name: "q0")"#.to_string(),
                r#"content("q0", [H])"#.to_string(),
            ]
        );
    }

    #[test]
    fn test_plain_node_at_literal_coordinate() {
        let cetz = node("ctrl", "c", "2,-1", "").to_cetz();
        assert_eq!(cetz, vec![r#"ctrl((2,-1), name: "c")"#.to_string()]);
    }

    #[test]
    fn test_only_h_gate_is_offset() {
        assert!(node("h_gate", "a", "0,0", "").is_offset());
        for style in ["none_", "x_gate", "h", "H_gate", "h_gate_"] {
            let n = node(style, "a", "0,0", "");
            assert!(!n.is_offset(), "{} should not be offset", style);
            assert!(!n.to_cetz()[0].contains("rel:"));
        }
    }

    #[test]
    fn test_label_is_sanitized() {
        let cetz = node("box", "u", "1,1", r"\alpha_1").to_cetz();
        assert_eq!(cetz.len(), 2);
        assert_eq!(cetz[1], r#"content("u", [alpha_1])"#);
    }

    #[test]
    fn test_edge_adds_center_anchor() {
        let edge = EdgeElement::new(None, "q0", "q1");
        assert_eq!(
            edge.to_cetz(),
            vec![r#"line(("q0.center"), ("q1.center"))"#.to_string()]
        );
    }

    #[test]
    fn test_edge_styles_not_rendered() {
        let edge = EdgeElement::new(Some("style=wire".to_string()), "a", "b");
        let cetz = edge.to_cetz();
        assert_eq!(cetz.len(), 1);
        assert!(!cetz[0].contains("wire"));
    }

    #[test]
    fn test_sanitize_label() {
        assert_eq!(sanitize_label(r"\alpha_1"), "alpha_1");
        assert_eq!(sanitize_label(""), "");
        assert_eq!(sanitize_label(r"\frac{\pi}{2}^x"), "frac{pi}{2}^x");
        assert_eq!(sanitize_label(r"\\"), "");
        assert_eq!(sanitize_label("plain"), "plain");
    }
}
