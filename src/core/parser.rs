//! Line-oriented TikZ parser
//!
//! Input is read one line at a time. Each line is first classified by its
//! leading command (`\begin`/`\end`, `\node`, `\draw`) and then matched
//! against the full grammar of that class. A line that fails its grammar,
//! or belongs to no class, aborts the whole parse.
//!
//! ```text
//! \node [style=h gate] (q0) at (0,0) {H};
//! \draw [style=wire] (q0.center) to (q1);
//! ```

use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::core::elements::{Document, EdgeElement, NodeElement};
use crate::core::options::CetzOptions;
use crate::core::style::{parse_style_list, take_primary_style, StyleError};
use crate::utils::error::{ConversionError, ConversionResult};

lazy_static! {
    // Line classifiers (prefix only)
    static ref STRUCTURAL_MARKER: Regex = Regex::new(r"^\s*\\(?:begin|end)").unwrap();
    static ref NODE_MARKER: Regex = Regex::new(r"^\s*\\node").unwrap();
    static ref EDGE_MARKER: Regex = Regex::new(r"^\s*\\draw").unwrap();

    // Full grammars; anything after the closing `;` is ignored
    static ref NODE_DECL: Regex =
        Regex::new(r"^\s*\\node \[(.+)\] \((.+?)\) at \((.+?)\) \{(.*?)\};").unwrap();
    static ref EDGE_DECL: Regex =
        Regex::new(r"^\s*\\draw(?: \[(.+)\])? \((.+?)(?:\.center)?\) to \((.+?)(?:\.center)?\);")
            .unwrap();
}

/// Class of a single input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Whitespace only
    Blank,
    /// `\begin{...}` or `\end{...}`
    Structural,
    /// Starts with `\node`
    Node,
    /// Starts with `\draw`
    Edge,
    /// None of the above
    Unrecognized,
}

/// Classify a line by its leading command
pub fn classify_line(line: &str) -> LineKind {
    if line.trim().is_empty() {
        LineKind::Blank
    } else if STRUCTURAL_MARKER.is_match(line) {
        LineKind::Structural
    } else if NODE_MARKER.is_match(line) {
        LineKind::Node
    } else if EDGE_MARKER.is_match(line) {
        LineKind::Edge
    } else {
        LineKind::Unrecognized
    }
}

/// Fields of a line matching the node grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeMatch<'a> {
    pub styles: &'a str,
    pub name: &'a str,
    pub coordinate: &'a str,
    pub label: &'a str,
}

/// Fields of a line matching the edge grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeMatch<'a> {
    pub styles: Option<&'a str>,
    pub start: &'a str,
    pub end: &'a str,
}

/// Match `\node [styles] (name) at (coordinate) {label};`
pub fn match_node(line: &str) -> Option<NodeMatch<'_>> {
    let caps = NODE_DECL.captures(line)?;
    Some(NodeMatch {
        styles: caps.get(1)?.as_str(),
        name: caps.get(2)?.as_str(),
        coordinate: caps.get(3)?.as_str(),
        label: caps.get(4)?.as_str(),
    })
}

/// Match `\draw [styles] (start) to (end);`, stripping `.center` suffixes
pub fn match_edge(line: &str) -> Option<EdgeMatch<'_>> {
    let caps = EDGE_DECL.captures(line)?;
    Some(EdgeMatch {
        styles: caps.get(1).map(|m| m.as_str()),
        start: caps.get(2)?.as_str(),
        end: caps.get(3)?.as_str(),
    })
}

/// Parse a node line into a [`NodeElement`]
pub fn parse_node_line(line: &str, line_number: usize) -> ConversionResult<NodeElement> {
    let m = match_node(line).ok_or_else(|| ConversionError::MalformedNode {
        line_number,
        line: line.to_string(),
    })?;

    let style_error = |err: StyleError| match err {
        StyleError::MissingStyleKey => ConversionError::MissingStyleKey {
            line_number,
            line: line.to_string(),
        },
        StyleError::MalformedEntry(entry) => ConversionError::MalformedStyleEntry {
            line_number,
            entry,
            line: line.to_string(),
        },
    };

    let mut extra_styles = parse_style_list(m.styles).map_err(style_error)?;
    let style = take_primary_style(&mut extra_styles).map_err(style_error)?;

    Ok(NodeElement::new(
        style,
        extra_styles,
        m.name,
        m.coordinate,
        m.label,
    ))
}

/// Parse an edge line into an [`EdgeElement`]
pub fn parse_edge_line(line: &str, line_number: usize) -> ConversionResult<EdgeElement> {
    let m = match_edge(line).ok_or_else(|| ConversionError::MalformedEdge {
        line_number,
        line: line.to_string(),
    })?;
    Ok(EdgeElement::new(
        m.styles.map(str::to_string),
        m.start,
        m.end,
    ))
}

/// Parse TikZ source into a [`Document`]
///
/// Fails on the first line that is malformed or unrecognized.
pub fn parse_document(input: &str, options: &CetzOptions) -> ConversionResult<Document> {
    let mut doc = Document::new();

    for (idx, line) in input.lines().enumerate() {
        let line_number = idx + 1;
        let kind = classify_line(line);
        trace!(line_number = line_number, kind:? = kind; "Classified line");

        match kind {
            LineKind::Blank if options.skip_blank_lines => {}
            LineKind::Structural => {}
            LineKind::Node => doc.nodes.push(parse_node_line(line, line_number)?),
            LineKind::Edge => doc.edges.push(parse_edge_line(line, line_number)?),
            LineKind::Blank | LineKind::Unrecognized => {
                return Err(ConversionError::UnrecognizedLine {
                    line_number,
                    line: line.to_string(),
                });
            }
        }
    }

    debug!(nodes = doc.nodes.len(), edges = doc.edges.len(); "Parsed TikZ document");
    Ok(doc)
}

/// Read and parse a TikZ file
pub fn parse_file(path: impl AsRef<Path>, options: &CetzOptions) -> ConversionResult<Document> {
    let input = fs::read_to_string(path.as_ref())?;
    parse_document(&input, options)
}
