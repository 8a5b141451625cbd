//! Code type descriptors and metadata lookup.
//!
//! # Role
//!
//! Every code type owns one [`CodeType`] descriptor, built once from its
//! declaration. The descriptor holds the ordered constant set and the named
//! members attached to the type: filters, aliases and legacy short labels.
//!
//! # Member forms
//!
//! Filters and aliases come in two forms. A *field* member stores its value
//! at declaration time; a *method* member computes it on each lookup.
//! Lookups probe field members before method members. A name may be declared
//! at most once per marker kind across both forms; the builder rejects the
//! second declaration with [`DeclarationError::DuplicateMember`].
//!
//! # Invariants
//!
//! - Descriptors are immutable after [`CodeTypeBuilder::build`]; lookups never mutate.
//! - Lookups treat a missing member as absent. Only the public entry points turn
//!   absence into [`CodeError::FilterNotFound`] / [`CodeError::AttributeNotFound`].

use core::any::TypeId;
use core::fmt;

use rustc_hash::FxHashMap;

use crate::error::{CodeError, DeclarationError};
use crate::filter::Filter;
use crate::CodeEnum;

/// Kind of metadata member attached to a code type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
	/// A named [`Filter`] over the type.
	Filter,
	/// A named string attribute of each constant.
	Alias,
	/// Legacy fixed label attached to one constant, keyed by its declared name.
	ShortLabel,
}

impl Marker {
	/// Returns the marker name used in diagnostics.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Filter => "filter",
			Self::Alias => "alias",
			Self::ShortLabel => "short-label",
		}
	}
}

impl fmt::Display for Marker {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

type FilterFn<C> = fn() -> Filter<C>;
type AliasFn<C> = fn(&C) -> Option<&'static str>;

/// Named members of one marker kind, split by form.
struct Members<F, M> {
	fields: Vec<(&'static str, F)>,
	methods: Vec<(&'static str, M)>,
}

impl<F, M> Default for Members<F, M> {
	fn default() -> Self {
		Self {
			fields: Vec::new(),
			methods: Vec::new(),
		}
	}
}

impl<F, M> Members<F, M> {
	fn field(&self, name: &str) -> Option<&F> {
		self.fields.iter().find(|(n, _)| *n == name).map(|(_, f)| f)
	}

	fn method(&self, name: &str) -> Option<&M> {
		self.methods.iter().find(|(n, _)| *n == name).map(|(_, m)| m)
	}

	fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.fields
			.iter()
			.map(|(n, _)| *n)
			.chain(self.methods.iter().map(|(n, _)| *n))
	}

	fn first_duplicate(&self) -> Option<&'static str> {
		let mut seen = Vec::with_capacity(self.fields.len() + self.methods.len());
		self.names().find(|name| {
			if seen.contains(name) {
				return true;
			}
			seen.push(*name);
			false
		})
	}
}

/// Descriptor of a code type: its name, constant set and metadata members.
pub struct CodeType<C> {
	name: &'static str,
	constants: Option<Box<[C]>>,
	filters: Members<Filter<C>, FilterFn<C>>,
	aliases: Members<FxHashMap<C, &'static str>, AliasFn<C>>,
	short_labels: FxHashMap<&'static str, &'static str>,
}

impl<C: CodeEnum> CodeType<C> {
	/// Starts a descriptor for a closed enumeration with `constants` in declaration order.
	pub fn builder(name: &'static str, constants: &[C]) -> CodeTypeBuilder<C> {
		CodeTypeBuilder {
			name,
			constants: Some(constants.into()),
			filters: Members::default(),
			aliases: Vec::new(),
			alias_fns: Vec::new(),
			short_labels: Vec::new(),
		}
	}

	/// Returns a descriptor for a type that is not a closed enumeration.
	pub fn opaque(name: &'static str) -> Self {
		Self {
			name,
			constants: None,
			filters: Members::default(),
			aliases: Members::default(),
			short_labels: FxHashMap::default(),
		}
	}

	/// Returns the type name used in diagnostics.
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Returns the constants in declaration order, or `None` for opaque types.
	pub fn constants(&self) -> Option<&[C]> {
		self.constants.as_deref()
	}

	/// Returns true if the type carries a closed constant set.
	pub fn is_enumeration(&self) -> bool {
		self.constants.is_some()
	}

	/// Returns declared filter names, fields first.
	pub fn filter_names(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.filters.names()
	}

	/// Returns declared alias names, fields first.
	pub fn alias_names(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.aliases.names()
	}

	pub(crate) fn find_filter(&self, name: &str) -> Option<Filter<C>> {
		if let Some(filter) = self.filters.field(name) {
			return Some(filter.clone());
		}
		self.filters.method(name).map(|make| make())
	}

	pub(crate) fn find_string(&self, code: &C, marker: Marker, name: &str) -> Option<&'static str> {
		match marker {
			Marker::Filter => None,
			// Short labels are field-only and keyed by the constant's own name.
			Marker::ShortLabel if code.name() == name => self.short_labels.get(name).copied(),
			Marker::ShortLabel => None,
			Marker::Alias => self
				.aliases
				.field(name)
				.and_then(|values| values.get(code).copied())
				.or_else(|| self.aliases.method(name).and_then(|f| f(code))),
		}
	}
}

impl<C: fmt::Debug> fmt::Debug for CodeType<C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CodeType")
			.field("name", &self.name)
			.field("constants", &self.constants)
			.field("filters", &self.filters.names().collect::<Vec<_>>())
			.field("aliases", &self.aliases.names().collect::<Vec<_>>())
			.field("short_labels", &self.short_labels.len())
			.finish()
	}
}

/// Declaration-time builder for [`CodeType`].
pub struct CodeTypeBuilder<C> {
	name: &'static str,
	constants: Option<Box<[C]>>,
	filters: Members<Filter<C>, FilterFn<C>>,
	aliases: Vec<(&'static str, Vec<(C, &'static str)>)>,
	alias_fns: Vec<(&'static str, AliasFn<C>)>,
	short_labels: Vec<(C, &'static str)>,
}

impl<C: CodeEnum> CodeTypeBuilder<C> {
	/// Applies a configuration function; used by [`code_enum!`](crate::code_enum).
	pub fn configure(self, f: impl FnOnce(Self) -> Self) -> Self {
		f(self)
	}

	/// Declares a named filter with a stored value.
	pub fn filter(mut self, name: &'static str, filter: Filter<C>) -> Self {
		self.filters.fields.push((name, filter));
		self
	}

	/// Declares a named filter computed on each lookup.
	pub fn filter_fn(mut self, name: &'static str, make: fn() -> Filter<C>) -> Self {
		self.filters.methods.push((name, make));
		self
	}

	/// Declares a named alias with a stored value per constant.
	///
	/// Constants missing from `values` have no value for this alias. If a
	/// constant is listed twice, the first entry wins.
	pub fn alias(mut self, name: &'static str, values: &[(C, &'static str)]) -> Self {
		self.aliases.push((name, values.to_vec()));
		self
	}

	/// Declares a named alias computed from the constant on each lookup.
	pub fn alias_fn(mut self, name: &'static str, f: AliasFn<C>) -> Self {
		self.alias_fns.push((name, f));
		self
	}

	/// Attaches a legacy short label to one constant.
	pub fn short_label(mut self, code: C, label: &'static str) -> Self {
		self.short_labels.push((code, label));
		self
	}

	/// Validates the declaration and freezes it into a [`CodeType`].
	pub fn build(self) -> Result<CodeType<C>, DeclarationError> {
		let name = self.name;
		let constants = self.constants.as_deref().unwrap_or_default();
		let declared = |marker: Marker, member: &'static str, code: &C| {
			if constants.contains(code) {
				Ok(())
			} else {
				Err(DeclarationError::UnknownConstant {
					type_name: name,
					marker,
					name: member,
					constant: format!("{code:?}"),
				})
			}
		};

		warn_duplicate_values(name, constants);

		if let Some(dup) = self.filters.first_duplicate() {
			return Err(DeclarationError::DuplicateMember {
				type_name: name,
				marker: Marker::Filter,
				name: dup,
			});
		}

		let mut aliases = Members::default();
		for (alias, values) in self.aliases {
			let mut table = FxHashMap::default();
			for (code, value) in values {
				declared(Marker::Alias, alias, &code)?;
				table.entry(code).or_insert(value);
			}
			aliases.fields.push((alias, table));
		}
		aliases.methods = self.alias_fns;
		if let Some(dup) = aliases.first_duplicate() {
			return Err(DeclarationError::DuplicateMember {
				type_name: name,
				marker: Marker::Alias,
				name: dup,
			});
		}

		let mut short_labels = FxHashMap::default();
		for (code, label) in self.short_labels {
			declared(Marker::ShortLabel, code.name(), &code)?;
			if short_labels.insert(code.name(), label).is_some() {
				return Err(DeclarationError::DuplicateMember {
					type_name: name,
					marker: Marker::ShortLabel,
					name: code.name(),
				});
			}
		}

		tracing::trace!(
			code_type = name,
			constants = constants.len(),
			filters = self.filters.fields.len() + self.filters.methods.len(),
			aliases = aliases.fields.len() + aliases.methods.len(),
			"code type declared"
		);

		Ok(CodeType {
			name,
			constants: self.constants,
			filters: self.filters,
			aliases,
			short_labels,
		})
	}
}

fn warn_duplicate_values<C: CodeEnum>(type_name: &'static str, constants: &[C]) {
	let mut seen: FxHashMap<&'static str, &'static str> = FxHashMap::default();
	for code in constants {
		if let Some(first) = seen.insert(code.value(), code.name()) {
			tracing::warn!(
				code_type = type_name,
				value = code.value(),
				first,
				second = code.name(),
				"duplicate code value; lookups return the first declared constant"
			);
			seen.insert(code.value(), first);
		}
	}
}

/// Returns true if `C` is a closed enumeration whose peer type is itself.
pub fn is_valid_code_type<C: CodeEnum>() -> bool {
	C::code_type().is_enumeration() && names_itself::<C>()
}

pub(crate) fn names_itself<C: CodeEnum>() -> bool {
	TypeId::of::<C::Peer>() == TypeId::of::<C>()
}

/// Returns the descriptor of `C` if it satisfies the full code type contract.
pub fn require_code_type<C: CodeEnum>() -> Result<&'static CodeType<C>, CodeError> {
	let ty = C::code_type();
	if !is_valid_code_type::<C>() {
		tracing::debug!(code_type = ty.name(), "invalid code type");
		return Err(CodeError::InvalidVariantType {
			type_name: ty.name(),
		});
	}
	Ok(ty)
}

/// Resolves the filter member named `name` on `C`.
pub fn resolve_filter<C: CodeEnum>(name: &str) -> Result<Filter<C>, CodeError> {
	let ty = require_code_type::<C>()?;
	ty.find_filter(name).ok_or_else(|| {
		tracing::debug!(code_type = ty.name(), filter = name, "code filter not found");
		CodeError::FilterNotFound {
			type_name: ty.name(),
			name: name.to_owned(),
		}
	})
}

/// Resolves the string member named `name` with the given marker, evaluated for `code`.
pub fn resolve_alias_string<C: CodeEnum>(
	code: &C,
	marker: Marker,
	name: &str,
) -> Result<&'static str, CodeError> {
	let ty = require_code_type::<C>()?;
	ty.find_string(code, marker, name).ok_or_else(|| {
		tracing::debug!(
			code_type = ty.name(),
			%marker,
			attribute = name,
			code = code.name(),
			"attribute not found"
		);
		CodeError::AttributeNotFound {
			type_name: ty.name(),
			marker,
			name: name.to_owned(),
		}
	})
}

#[cfg(test)]
mod tests;
