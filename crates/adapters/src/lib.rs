//! Adapters exposing code types at application boundaries.
//!
//! - [`convert`] - request parameter conversion with a per-type converter cache
//! - [`value`] - serde codec writing a code as its wire value
//! - [`constraint`] - the [`CodeValue`] field constraint and its validator
//!
//! Adapters that work by type name go through a [`CodeRegistry`](codeset_core::CodeRegistry)
//! built by the application; nothing is discovered implicitly.

pub mod constraint;
pub mod convert;
pub mod value;

pub use constraint::{CodeValue, CodeValueValidator, Violation};
pub use convert::{CodeConverter, CodeParam, ConverterCache};

#[cfg(test)]
mod test_fixtures;
