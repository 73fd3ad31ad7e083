//! Data binding construction
//!
//! Companion API for callers that assemble bindings outside the compiler:
//! - `builder` - fluent field-by-field construction with a validated
//!   finalize step
//! - `templates` - canned bindings for the conventional REST endpoint
//!   naming scheme

pub mod builder;
pub mod templates;

pub use builder::{BindingError, DataSourceBuilder};
pub use templates::DataBindingTemplates;
