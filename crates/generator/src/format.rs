//! Source normalization for rendered output

use listtags_gen_common::{GeneratorError, Result};

/// Header placed at the top of the generated file.
///
/// Added after formatting because `syn` drops plain comments.
pub const FILE_HEADER: &str = "// Code generated by listtags-gen; DO NOT EDIT.";

/// Parse rendered text as a Rust file and pretty-print it
pub fn format_source(source: &str) -> Result<String> {
    let file = syn::parse_file(source).map_err(|e| GeneratorError::Format(e.to_string()))?;
    Ok(prettyplease::unparse(&file))
}

/// Prepend [`FILE_HEADER`] to formatted source
pub fn with_header(formatted: &str) -> String {
    format!("{}\n\n{}", FILE_HEADER, formatted)
}
