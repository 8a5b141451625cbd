//! Code resolution engine.
//!
//! Generic lookups over the constant set of a code type `C`. The type
//! parameter is the type handle: every entry point checks that `C` is a
//! closed enumeration ([`CodeError::NotAnEnumeration`]) and that it names
//! itself as peer ([`CodeError::InvalidVariantType`]) before any value is
//! compared, so a malformed type fails the same way for every input.
//!
//! Filters default to [`Filter::ANY`] and sorting defaults to [`by_ordinal`].

use core::cmp::Ordering;

use crate::error::CodeError;
use crate::filter::Filter;
use crate::meta::{self, Marker};
use crate::CodeEnum;

/// Returns the declaration-ordered constant set of `C`.
///
/// Only checks enumerability; use the lookup functions for full contract checks.
pub fn enumerate<C: CodeEnum>() -> Result<&'static [C], CodeError> {
	let ty = C::code_type();
	ty.constants().ok_or_else(|| {
		tracing::debug!(code_type = ty.name(), "code type is not an enumeration");
		CodeError::NotAnEnumeration {
			type_name: ty.name(),
		}
	})
}

fn checked<C: CodeEnum>() -> Result<&'static [C], CodeError> {
	let constants = enumerate::<C>()?;
	if !meta::names_itself::<C>() {
		return Err(CodeError::InvalidVariantType {
			type_name: C::code_type().name(),
		});
	}
	Ok(constants)
}

/// Compares two codes by declaration order.
pub fn by_ordinal<C: CodeEnum>(a: &C, b: &C) -> Ordering {
	a.ordinal().cmp(&b.ordinal())
}

/// Returns the first constant whose value is `value`, if any.
pub fn find<C: CodeEnum>(value: &str) -> Result<Option<C>, CodeError> {
	find_filtered(value, &Filter::ANY)
}

/// Returns the first constant passing `filter` whose value is `value`, if any.
pub fn find_filtered<C: CodeEnum>(value: &str, filter: &Filter<C>) -> Result<Option<C>, CodeError> {
	Ok(checked::<C>()?
		.iter()
		.copied()
		.filter(|c| filter.test(c))
		.find(|c| c.value() == value))
}

/// Resolves the constant whose value is `value`.
pub fn resolve<C: CodeEnum>(value: &str) -> Result<C, CodeError> {
	resolve_filtered(value, &Filter::ANY)
}

/// Resolves the constant passing `filter` whose value is `value`.
pub fn resolve_filtered<C: CodeEnum>(value: &str, filter: &Filter<C>) -> Result<C, CodeError> {
	find_filtered(value, filter)?.ok_or_else(|| {
		let type_name = C::code_type().name();
		tracing::debug!(code_type = type_name, value, "code not found");
		CodeError::CodeNotFound {
			type_name,
			value: value.to_owned(),
		}
	})
}

/// Resolves the constant whose value is `value`, or returns `default`.
pub fn resolve_or<C: CodeEnum>(value: &str, default: C) -> Result<C, CodeError> {
	resolve_or_filtered(value, default, &Filter::ANY)
}

/// Resolves the constant passing `filter` whose value is `value`, or returns `default`.
pub fn resolve_or_filtered<C: CodeEnum>(
	value: &str,
	default: C,
	filter: &Filter<C>,
) -> Result<C, CodeError> {
	Ok(find_filtered(value, filter)?.unwrap_or(default))
}

/// Returns all constants in declaration order.
pub fn list<C: CodeEnum>() -> Result<Vec<C>, CodeError> {
	list_by(&Filter::ANY, by_ordinal::<C>)
}

/// Returns the constants passing `filter` in declaration order.
pub fn list_filtered<C: CodeEnum>(filter: &Filter<C>) -> Result<Vec<C>, CodeError> {
	list_by(filter, by_ordinal::<C>)
}

/// Returns all constants ordered by `sorter`; ties keep declaration order.
pub fn list_sorted<C: CodeEnum>(
	sorter: impl FnMut(&C, &C) -> Ordering,
) -> Result<Vec<C>, CodeError> {
	list_by(&Filter::ANY, sorter)
}

/// Returns the constants passing `filter` ordered by `sorter`; ties keep declaration order.
pub fn list_by<C: CodeEnum>(
	filter: &Filter<C>,
	sorter: impl FnMut(&C, &C) -> Ordering,
) -> Result<Vec<C>, CodeError> {
	let mut codes: Vec<C> = checked::<C>()?
		.iter()
		.copied()
		.filter(|c| filter.test(c))
		.collect();
	codes.sort_by(sorter);
	Ok(codes)
}

/// Returns true if some constant has value `value`.
pub fn contains<C: CodeEnum>(value: &str) -> Result<bool, CodeError> {
	contains_filtered(value, &Filter::<C>::ANY)
}

/// Returns true if some constant passing `filter` has value `value`.
pub fn contains_filtered<C: CodeEnum>(value: &str, filter: &Filter<C>) -> Result<bool, CodeError> {
	Ok(checked::<C>()?
		.iter()
		.any(|c| filter.test(c) && c.value() == value))
}

/// Returns the legacy short label of the constant whose value is `value`.
pub fn short_label<C: CodeEnum>(value: &str) -> Result<&'static str, CodeError> {
	let code = resolve::<C>(value)?;
	meta::resolve_alias_string(&code, Marker::ShortLabel, code.name())
}

/// Returns the alias `name` of the constant whose value is `value`.
pub fn alias<C: CodeEnum>(value: &str, name: &str) -> Result<&'static str, CodeError> {
	let code = resolve::<C>(value)?;
	meta::resolve_alias_string(&code, Marker::Alias, name)
}
