//! Input side of the c4bind binding generator.
//!
//! - [`DescriptorFile`] - line-oriented function descriptors
//! - [`CType`] - the closed set of type tokens
//! - [`Literals`] - bridge and raw literal override catalogs
//! - [`Config`] - optional `c4bind.toml`
//! - [`Workspace`] - an input directory tying the above together

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod ctype;
mod descriptor;
mod error;
mod literals;
mod workspace;

pub use config::{Config, GeneratorConfig, TemplateConfig};
pub use ctype::CType;
pub use descriptor::{
    BRIDGE_MARKER, Binding, Body, Descriptor, DescriptorFile, Param, Signature,
};
pub use error::{Error, Result, SourceContext};
pub use literals::{LiteralCatalog, Literals};
pub use workspace::Workspace;
