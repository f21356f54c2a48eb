//! Common types and utilities for listtags-gen
//!
//! This crate contains the compiled-in service table, the per-service
//! attribute resolvers, and the error type shared by the generator and CLI.

pub mod naming;
pub mod services;

pub use naming::{snake_case, tags_expression, title_case};
pub use services::{
    is_known_service, sorted_service_names, ServiceAttributes, ServiceOverrides, SERVICE_NAMES,
};

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during generation
///
/// Every variant is fatal for the run; nothing is retried.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("error parsing template: {0}")]
    TemplateParse(String),

    #[error("error executing template: {0}")]
    TemplateRender(String),

    #[error("error formatting generated file: {0}")]
    Format(String),

    #[error("error writing to file ({}): {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error reading file ({}): {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;
