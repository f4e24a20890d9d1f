//! CeTZ document assembly
//!
//! The generated document imports the gate-shape support file, opens a
//! canvas holding every node, and puts every edge on a lower layer so
//! wires are drawn behind the gates:
//!
//! ```text
//! #import "cetzsty.typ": *
//!
//! #cetz.canvas({
//!     h_gate((0,0), (rel: (0.5, 0.5)), name: "q0")
//!     content("q0", [H])
//! on-layer(-1, {
//!     line(("q0.center"), ("q1.center"))
//! })
//! })
//! ```

use std::fmt::Write;
use std::fs;
use std::path::Path;

use log::info;

use crate::core::elements::{Document, ToCetz};
use crate::core::options::CetzOptions;
use crate::utils::error::ConversionResult;

/// Render a parsed document as CeTZ source
pub fn render_document(doc: &Document, options: &CetzOptions) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "#import \"{}\": *", options.style_file);
    output.push('\n');
    output.push_str("#cetz.canvas({\n");
    write_statements(&mut output, &doc.nodes, &options.indent);

    let _ = writeln!(output, "on-layer({}, {{", options.edge_layer);
    write_statements(&mut output, &doc.edges, &options.indent);
    output.push_str("})\n");

    output.push_str("})\n");
    output
}

/// Append every element's statements, one indented statement per line
fn write_statements<T: ToCetz>(output: &mut String, elements: &[T], indent: &str) {
    for element in elements {
        for stmt in element.to_cetz() {
            let _ = writeln!(output, "{}{}", indent, stmt);
        }
    }
}

/// Render a document and write it to `path`, replacing any existing file
pub fn write_document(
    doc: &Document,
    path: impl AsRef<Path>,
    options: &CetzOptions,
) -> ConversionResult<()> {
    let path = path.as_ref();
    fs::write(path, render_document(doc, options))?;
    info!(output:? = path; "CeTZ document written");
    Ok(())
}
