//! Code generation for per-service tag listing functions
//!
//! Renders one `<Service>ListTags` function per service into a single Rust
//! source file, formats it, and writes it out. The output is meant to be
//! compiled as a submodule of the crate that defines `KeyValueTags` and the
//! per-service `<Service>KeyValueTags` conversions.

pub mod format;
mod templates;

pub use format::{format_source, FILE_HEADER};
pub use templates::LIST_TAGS_TEMPLATE;

use listtags_gen_common::{services, GeneratorError, Result};
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tera::Tera;

/// Default output file, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "list_tags_gen.rs";

/// Tag listing function generator
///
/// Holds a sorted service list and the loaded template. Sorting happens on
/// construction, so the output does not depend on input order.
pub struct ListTagsGenerator {
    services: Vec<String>,
    tera: Tera,
}

impl ListTagsGenerator {
    /// Create a generator over the compiled-in service table
    pub fn new() -> Result<Self> {
        Self::with_services(services::SERVICE_NAMES.iter().copied())
    }

    /// Create a generator over an arbitrary list of service names
    pub fn with_services<I, S>(service_names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut services: Vec<String> = service_names.into_iter().map(Into::into).collect();
        // Always sort to reduce any potential generation churn
        services.sort();

        let tera = templates::load_templates()?;
        Ok(Self { services, tera })
    }

    /// Service names in generation order
    pub fn services(&self) -> &[String] {
        &self.services
    }

    /// Render the template without formatting
    pub fn render(&self) -> Result<String> {
        debug!("rendering {} services", self.services.len());

        let mut context = tera::Context::new();
        context.insert("services", &self.services);

        self.tera
            .render(LIST_TAGS_TEMPLATE, &context)
            .map_err(|e| GeneratorError::TemplateRender(templates::error_chain(&e)))
    }

    /// Render, format, and add the generated-file header
    pub fn generate(&self) -> Result<String> {
        let rendered = self.render()?;
        debug!("rendered {} bytes", rendered.len());

        let formatted = format::format_source(&rendered)?;
        Ok(format::with_header(&formatted))
    }

    /// Generate and write to `path`, replacing any existing file
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let contents = self.generate()?;

        fs::write(path, &contents).map_err(|source| GeneratorError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("wrote {} bytes to {}", contents.len(), path.display());
        Ok(())
    }

    /// Whether `path` already holds exactly what would be generated
    ///
    /// A missing file counts as stale.
    pub fn is_up_to_date(&self, path: &Path) -> Result<bool> {
        let expected = self.generate()?;

        match fs::read_to_string(path) {
            Ok(existing) => Ok(existing == expected),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(source) => Err(GeneratorError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

/// Generate the compiled-in service table to `output_path` (convenience function)
pub fn generate_list_tags(output_path: &Path) -> Result<()> {
    let generator = ListTagsGenerator::new()?;
    generator.write_to(output_path)
}
