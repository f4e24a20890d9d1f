//! Error handling for tikz2cetz conversions
//!
//! Every malformation is fatal: the first offending line aborts the whole
//! conversion and is carried in the error together with its line number.

use thiserror::Error;

/// Conversion error type
#[derive(Debug, Error)]
pub enum ConversionError {
    /// A `\node` line that does not match the node grammar
    #[error("Illegal node at line {line_number}: {line}")]
    MalformedNode { line_number: usize, line: String },

    /// A `\draw` line that does not match the edge grammar
    #[error("Illegal edge at line {line_number}: {line}")]
    MalformedEdge { line_number: usize, line: String },

    /// A line that is neither structural, a node, nor an edge
    #[error("Illegal line {line_number}: {line}")]
    UnrecognizedLine { line_number: usize, line: String },

    /// A node whose style list has no `style=` entry
    #[error("Missing required `style` key in node at line {line_number}: {line}")]
    MissingStyleKey { line_number: usize, line: String },

    /// A style list entry that is not a single `key=value` pair
    #[error("Malformed style entry `{entry}` at line {line_number}: {line}")]
    MalformedStyleEntry {
        line_number: usize,
        entry: String,
        line: String,
    },

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConversionError {
    /// 1-based line number of the offending input line, if any
    pub fn line_number(&self) -> Option<usize> {
        match self {
            ConversionError::MalformedNode { line_number, .. }
            | ConversionError::MalformedEdge { line_number, .. }
            | ConversionError::UnrecognizedLine { line_number, .. }
            | ConversionError::MissingStyleKey { line_number, .. }
            | ConversionError::MalformedStyleEntry { line_number, .. } => Some(*line_number),
            ConversionError::Io(_) => None,
        }
    }

    /// Raw text of the offending input line, if any
    pub fn line(&self) -> Option<&str> {
        match self {
            ConversionError::MalformedNode { line, .. }
            | ConversionError::MalformedEdge { line, .. }
            | ConversionError::UnrecognizedLine { line, .. }
            | ConversionError::MissingStyleKey { line, .. }
            | ConversionError::MalformedStyleEntry { line, .. } => Some(line),
            ConversionError::Io(_) => None,
        }
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_node_display() {
        let err = ConversionError::MalformedNode {
            line_number: 3,
            line: r"\node [style=h gate] (q0) {H};".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Illegal node"));
        assert!(msg.contains("line 3"));
        assert!(msg.contains(r"\node [style=h gate] (q0) {H};"));
    }

    #[test]
    fn test_style_entry_display() {
        let err = ConversionError::MalformedStyleEntry {
            line_number: 1,
            entry: "thick".to_string(),
            line: r"\node [thick] (a) at (0,0) {};".to_string(),
        };
        assert!(err.to_string().contains("`thick`"));
    }

    #[test]
    fn test_line_accessors() {
        let err = ConversionError::UnrecognizedLine {
            line_number: 7,
            line: "garbage".to_string(),
        };
        assert_eq!(err.line_number(), Some(7));
        assert_eq!(err.line(), Some("garbage"));

        let io: ConversionError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(io.line_number(), None);
        assert_eq!(io.line(), None);
        assert!(io.to_string().contains("IO error"));
    }
}
