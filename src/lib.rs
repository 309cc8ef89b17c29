//! optini - apply INI files to a tabular-data option registry
//!
//! Each `[section]` / `option = value` pair of the file becomes a dotted
//! option key (`section.option`) whose value is evaluated as a literal and
//! written to an [`OptionRegistry`].

pub mod config;
pub mod error;
pub mod literal;
pub mod loader;
pub mod registry;

pub use crate::config::LoaderSettings;
pub use error::{EntryError, LiteralError, LoadError, OptionError};
pub use literal::{Literal, parse_literal};
pub use loader::{LoadReport, Loader, load};
pub use registry::{OptionRegistry, OptionTable, tabular_options};
