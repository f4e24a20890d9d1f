//! # tikz2cetz
//!
//! Translate TikZ diagrams (typically quantum circuits exported by a
//! graphical TikZ editor) into Typst CeTZ drawing code.
//!
//! Only a line-oriented subset of TikZ is understood:
//!
//! - `\begin{...}` / `\end{...}` lines, which are skipped
//! - `\node [style=..., key=value] (name) at (x,y) {label};`
//! - `\draw [styles] (start) to (end);`
//!
//! Anything else is rejected, and a single bad line fails the whole
//! conversion.
//!
//! ## Usage Examples
//!
//! ```rust
//! use tikz2cetz::convert_tikz_to_cetz;
//!
//! let tikz = r"\begin{tikzpicture}
//!     \node [style=h gate] (q0) at (0,0) {H};
//!     \node [style=none] (q1) at (1,0) {};
//!     \draw (q0) to (q1.center);
//! \end{tikzpicture}";
//!
//! let cetz = convert_tikz_to_cetz(tikz).unwrap();
//! assert!(cetz.contains(r#"h_gate((0,0), (rel: (0.5, 0.5)), name: "q0")"#));
//! assert!(cetz.contains(r#"line(("q0.center"), ("q1.center"))"#));
//! ```
//!
//! The generated document imports a `cetzsty.typ` support file that must
//! define every style used (e.g. `h_gate`, `none_`). That file is not
//! produced here.

/// Core conversion modules
pub mod core;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

use std::path::Path;

use log::info;

// Re-export core conversion items
pub use crate::core::{
    parse_document, parse_file, render_document, write_document, CetzOptions, Document,
    EdgeElement, NodeElement, ToCetz,
};

// Re-export utilities
pub use utils::error::{ConversionError, ConversionResult};

/// Convert TikZ source to a CeTZ document
///
/// # Arguments
/// * `input` - TikZ source, one declaration per line
///
/// # Returns
/// CeTZ source, or the error for the first offending line
pub fn convert_tikz_to_cetz(input: &str) -> ConversionResult<String> {
    convert_tikz_to_cetz_with_options(input, &CetzOptions::default())
}

/// Convert TikZ source to a CeTZ document with custom options
pub fn convert_tikz_to_cetz_with_options(
    input: &str,
    options: &CetzOptions,
) -> ConversionResult<String> {
    let doc = parse_document(input, options)?;
    Ok(render_document(&doc, options))
}

/// Convert a TikZ file into a CeTZ file
///
/// The input is parsed completely before the output is opened, so a parse
/// failure never creates or touches `out_file`.
pub fn tikz2cetz(in_file: impl AsRef<Path>, out_file: impl AsRef<Path>) -> ConversionResult<()> {
    tikz2cetz_with_options(in_file, out_file, &CetzOptions::default())
}

/// Convert a TikZ file into a CeTZ file with custom options
pub fn tikz2cetz_with_options(
    in_file: impl AsRef<Path>,
    out_file: impl AsRef<Path>,
    options: &CetzOptions,
) -> ConversionResult<()> {
    let in_file = in_file.as_ref();
    info!(input:? = in_file; "Converting TikZ file");
    let doc = parse_file(in_file, options)?;
    write_document(&doc, out_file, options)
}
