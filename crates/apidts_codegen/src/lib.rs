//! Converts apidoc field descriptors into named TypeScript interface
//! declarations.
//!
//! The pipeline for one handler is:
//! 1. [`tree::build_field_tree`] folds the ordered, dotted field paths into a [`tree::FieldTree`]
//! 2. [`typegen::synthesize_types`] walks the tree and emits a [`TypeMap`], naming nested shapes
//!    `Parent_Field`
//! 3. [`handlers`] and [`render`] group handlers by service and render the declaration file

pub mod case;
pub mod handlers;
pub mod model;
pub mod render;
pub mod source;
pub mod tree;
pub mod typegen;


use camino::Utf8PathBuf;
use indexmap::IndexMap;
use thiserror::Error;

use crate::model::FieldDescriptor;

/// Fields of a single synthesized type, keyed by field name.
pub type FieldMap = IndexMap<String, FieldDescriptor>;

/// Synthesized types keyed by type name. The root type is always the first entry.
pub type TypeMap = IndexMap<String, FieldMap>;

pub type CodegenResult<T> = Result<T, CodegenError>;

#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("For field `{}` can't find a top level field to continue", .field.field)]
    OrphanContinuationField { field: Box<FieldDescriptor> },

    #[error("{field} of {type_name} has no apidoc definition")]
    MissingTypeDefinition { field: String, type_name: String },

    #[error("Failed reading {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed parsing {path}: {source}")]
    Json {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Handler `{handler}`: {source}")]
    Handler {
        handler: String,
        #[source]
        source: Box<CodegenError>,
    },

    #[error("Template error: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),

    #[error("Render error: {0}")]
    Render(#[from] Box<handlebars::RenderError>),
}

impl CodegenError {
    /// Wraps an error with the name of the handler being processed
    pub fn in_handler(self, handler: &str) -> Self {
        Self::Handler {
            handler: handler.into(),
            source: Box::new(self),
        }
    }
}

pub use tree::build_field_tree;
pub use typegen::{generate_types, synthesize_types};
