//! Conversion options

/// Name of the support file defining the gate shapes used by the output
pub const DEFAULT_STYLE_FILE: &str = "cetzsty.typ";

/// Layer that receives the edges, beneath the default layer 0
pub const DEFAULT_EDGE_LAYER: i32 = -1;

/// Options controlling TikZ → CeTZ conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CetzOptions {
    /// File imported by the generated document
    /// Default: `cetzsty.typ`
    pub style_file: String,

    /// Indentation of statements inside the canvas and layer blocks
    /// Default: one tab
    pub indent: String,

    /// Layer index of the edge block
    /// Default: -1
    pub edge_layer: i32,

    /// Silently skip whitespace-only input lines
    /// Default: true
    pub skip_blank_lines: bool,
}

impl Default for CetzOptions {
    fn default() -> Self {
        Self {
            style_file: DEFAULT_STYLE_FILE.to_string(),
            indent: "\t".to_string(),
            edge_layer: DEFAULT_EDGE_LAYER,
            skip_blank_lines: true,
        }
    }
}

impl CetzOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Import a different support file
    pub fn with_style_file(mut self, style_file: impl Into<String>) -> Self {
        self.style_file = style_file.into();
        self
    }

    /// Reject blank lines instead of skipping them
    pub fn strict(mut self) -> Self {
        self.skip_blank_lines = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = CetzOptions::new();
        assert_eq!(opts.style_file, "cetzsty.typ");
        assert_eq!(opts.indent, "\t");
        assert_eq!(opts.edge_layer, -1);
        assert!(opts.skip_blank_lines);
    }

    #[test]
    fn test_builders() {
        let opts = CetzOptions::new().with_style_file("gates.typ").strict();
        assert_eq!(opts.style_file, "gates.typ");
        assert!(!opts.skip_blank_lines);
    }
}
