//! Literal values
//!
//! Converts raw INI strings into native values.

pub mod parser;
pub mod value;

pub use parser::parse_literal;
pub use value::Literal;
