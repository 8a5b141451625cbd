//! Type-erased code types and the name-keyed registry.
//!
//! Adapters that only know a code type by name (configuration, validation
//! declarations) go through [`CodeRegistry`] and the [`DynCodeType`] view,
//! which forwards to the generic engine for the concrete type.

use core::any::TypeId;
use core::fmt;
use core::marker::PhantomData;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::error::{CodeError, RegistryError};
use crate::filter::Filter;
use crate::{CodeEnum, engine, meta};

/// Object-safe view of a code type.
pub trait DynCodeType: Send + Sync {
	/// Returns the type name.
	fn name(&self) -> &'static str;

	/// Returns the [`TypeId`] of the concrete code type.
	fn type_id(&self) -> TypeId;

	/// Returns true if the type carries a closed constant set.
	fn is_enumeration(&self) -> bool;

	/// Returns true if the type satisfies the full code type contract.
	fn is_valid(&self) -> bool;

	/// Returns the values of all constants in declaration order.
	fn values(&self) -> Result<Vec<&'static str>, CodeError>;

	/// Returns the label of the constant whose value is `value`.
	fn label(&self, value: &str) -> Result<&'static str, CodeError>;

	/// Returns true if a constant passing every named filter has value `value`.
	fn contains(&self, value: &str, filters: &[&str]) -> Result<bool, CodeError> {
		Ok(self.matcher(filters)?.matches(value))
	}

	/// Resolves the named filters once and returns a reusable value matcher.
	///
	/// Filters are combined with logical AND; an empty list accepts every constant.
	fn matcher(&self, filters: &[&str]) -> Result<CodeMatcher, CodeError>;

	/// Returns the alias `name` of the constant whose value is `value`.
	fn alias(&self, value: &str, name: &str) -> Result<&'static str, CodeError>;

	/// Returns the legacy short label of the constant whose value is `value`.
	fn short_label(&self, value: &str) -> Result<&'static str, CodeError>;
}

impl fmt::Debug for dyn DynCodeType + '_ {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DynCodeType")
			.field("name", &self.name())
			.field("valid", &self.is_valid())
			.finish()
	}
}

struct Erased<C>(PhantomData<fn() -> C>);

impl<C: CodeEnum> DynCodeType for Erased<C> {
	fn name(&self) -> &'static str {
		C::code_type().name()
	}

	fn type_id(&self) -> TypeId {
		TypeId::of::<C>()
	}

	fn is_enumeration(&self) -> bool {
		C::code_type().is_enumeration()
	}

	fn is_valid(&self) -> bool {
		meta::is_valid_code_type::<C>()
	}

	fn values(&self) -> Result<Vec<&'static str>, CodeError> {
		Ok(engine::list::<C>()?.iter().map(CodeEnum::value).collect())
	}

	fn label(&self, value: &str) -> Result<&'static str, CodeError> {
		Ok(engine::resolve::<C>(value)?.label())
	}

	fn matcher(&self, filters: &[&str]) -> Result<CodeMatcher, CodeError> {
		let ty = meta::require_code_type::<C>()?;
		let mut combined = Filter::ANY;
		for name in filters {
			combined = combined.and(meta::resolve_filter::<C>(name)?);
		}
		Ok(CodeMatcher::new(ty.name(), TypeId::of::<C>(), move |value| {
			engine::contains_filtered::<C>(value, &combined).unwrap_or(false)
		}))
	}

	fn alias(&self, value: &str, name: &str) -> Result<&'static str, CodeError> {
		engine::alias::<C>(value, name)
	}

	fn short_label(&self, value: &str) -> Result<&'static str, CodeError> {
		engine::short_label::<C>(value)
	}
}

/// Returns the type-erased view of `C`.
pub fn erase<C: CodeEnum>() -> Box<dyn DynCodeType> {
	Box::new(Erased::<C>(PhantomData))
}

/// Value membership test over one code type with pre-resolved filters.
#[derive(Clone)]
pub struct CodeMatcher {
	code_type: &'static str,
	type_id: TypeId,
	test: Arc<dyn Fn(&str) -> bool + Send + Sync>,
}

impl CodeMatcher {
	fn new(
		code_type: &'static str,
		type_id: TypeId,
		test: impl Fn(&str) -> bool + Send + Sync + 'static,
	) -> Self {
		Self {
			code_type,
			type_id,
			test: Arc::new(test),
		}
	}

	/// Returns the name of the code type this matcher tests against.
	pub fn code_type(&self) -> &'static str {
		self.code_type
	}

	/// Returns true if the matcher was built for the concrete code type `C`.
	pub fn is_for<C: CodeEnum>(&self) -> bool {
		self.type_id == TypeId::of::<C>()
	}

	/// Returns true if `value` is the value of a constant passing the filters.
	pub fn matches(&self, value: &str) -> bool {
		(self.test)(value)
	}
}

impl fmt::Debug for CodeMatcher {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CodeMatcher")
			.field("code_type", &self.code_type)
			.finish_non_exhaustive()
	}
}

/// Code types indexed by name, in registration order.
#[derive(Debug, Default)]
pub struct CodeRegistry {
	types: Vec<Box<dyn DynCodeType>>,
	by_name: FxHashMap<&'static str, usize>,
}

impl CodeRegistry {
	/// Starts an empty registry builder.
	pub fn builder() -> CodeRegistryBuilder {
		CodeRegistryBuilder::default()
	}

	/// Looks up a code type by name.
	pub fn get(&self, name: &str) -> Option<&dyn DynCodeType> {
		let idx = *self.by_name.get(name)?;
		Some(self.types[idx].as_ref())
	}

	/// Looks up a code type by name, failing if it is not registered.
	pub fn require(&self, name: &str) -> Result<&dyn DynCodeType, RegistryError> {
		self.get(name).ok_or_else(|| RegistryError::UnknownType {
			name: name.to_owned(),
		})
	}

	/// Looks up the registered view of `C`.
	pub fn get_type<C: CodeEnum>(&self) -> Option<&dyn DynCodeType> {
		let id = TypeId::of::<C>();
		self.iter().find(|ty| ty.type_id() == id)
	}

	/// Returns all registered code types in registration order.
	pub fn iter(&self) -> impl Iterator<Item = &dyn DynCodeType> + '_ {
		self.types.iter().map(|ty| ty.as_ref())
	}

	/// Returns the number of registered code types.
	pub fn len(&self) -> usize {
		self.types.len()
	}

	/// Returns true if no code type is registered.
	pub fn is_empty(&self) -> bool {
		self.types.is_empty()
	}
}

/// Builder for [`CodeRegistry`].
#[derive(Default)]
pub struct CodeRegistryBuilder {
	types: Vec<Box<dyn DynCodeType>>,
}

impl CodeRegistryBuilder {
	/// Adds the code type `C` under its declared name.
	pub fn register<C: CodeEnum>(mut self) -> Self {
		self.types.push(erase::<C>());
		self
	}

	/// Indexes the registered types, rejecting duplicate names.
	pub fn build(self) -> Result<CodeRegistry, RegistryError> {
		let mut by_name = FxHashMap::default();
		for (idx, ty) in self.types.iter().enumerate() {
			if by_name.insert(ty.name(), idx).is_some() {
				return Err(RegistryError::DuplicateType { name: ty.name() });
			}
			if !ty.is_valid() {
				tracing::warn!(
					code_type = ty.name(),
					"registered code type violates the code type contract"
				);
			}
		}
		tracing::debug!(count = self.types.len(), "code registry built");
		Ok(CodeRegistry {
			types: self.types,
			by_name,
		})
	}
}
