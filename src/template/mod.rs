//! Template catalog and the substitution engine that fills it in.

pub mod catalog;
mod render;

pub use catalog::{CatalogEntry, entry, lookup};
pub use render::{TemplateError, render_template, vars};
