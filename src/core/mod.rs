//! Core conversion modules
//!
//! The pipeline is linear:
//! - `parser`: TikZ lines → [`Document`]
//! - `elements`: node/edge types and their CeTZ rendering
//! - `emitter`: [`Document`] → CeTZ source

pub mod elements;
pub mod emitter;
pub mod options;
pub mod parser;
pub mod style;

pub use elements::{Document, EdgeElement, NodeElement, ToCetz};
pub use emitter::{render_document, write_document};
pub use options::CetzOptions;
pub use parser::{parse_document, parse_file};
