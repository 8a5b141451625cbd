//! Typed code registries.
//!
//! A *code type* is a closed, ordered set of constants, each carrying an
//! external wire value (`"1"`, `"2"`, ...), a display label and an ordinal.
//! This crate resolves constants from wire values, filters and sorts
//! constant sets, and looks up named metadata (filters, aliases, short
//! labels) attached to a code type at declaration time.
//!
//! # Modules
//!
//! - [`contract`] - the [`CodeEnum`] trait every code type implements
//! - [`filter`] - [`Filter`] and the [`include`]/[`exclude`] combinators
//! - [`meta`] - [`CodeType`] descriptors and metadata lookup
//! - [`engine`] - resolve/list/contains lookups
//! - [`dynamic`] - type-erased views and the name-keyed [`CodeRegistry`]
//!
//! # Declaring a code type
//!
//! Use [`code_enum!`]; it generates the enum, its contract impl and its
//! descriptor. Hand-written impls are possible but must keep `Peer = Self`
//! and list every constant in [`CodeType::builder`], or engine calls fail
//! with [`CodeError::InvalidVariantType`] / [`CodeError::NotAnEnumeration`].

pub mod contract;
pub mod dynamic;
pub mod engine;
pub mod error;
pub mod filter;
mod macros;
pub mod meta;

pub use contract::CodeEnum;
pub use dynamic::{CodeMatcher, CodeRegistry, CodeRegistryBuilder, DynCodeType, erase};
pub use engine::{
	alias, by_ordinal, contains, contains_filtered, enumerate, find, find_filtered, list, list_by,
	list_filtered, list_sorted, resolve, resolve_filtered, resolve_or, resolve_or_filtered,
	short_label,
};
pub use error::{CodeError, DeclarationError, RegistryError};
pub use filter::{Filter, any, exclude, include};
pub use meta::{
	CodeType, CodeTypeBuilder, Marker, is_valid_code_type, require_code_type, resolve_alias_string,
	resolve_filter,
};

#[cfg(test)]
pub(crate) mod test_fixtures;
