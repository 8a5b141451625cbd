//! Request parameter conversion.
//!
//! Converts a single textual parameter to a code constant and back. Unknown
//! values convert to an absent code rather than an error; validation of
//! presence is left to [`constraint`](crate::constraint).

use core::any::{Any, TypeId};
use core::fmt;
use core::marker::PhantomData;
use core::str::FromStr;
use std::sync::Arc;

use codeset_core::{CodeEnum, CodeError, find, is_valid_code_type, require_code_type};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// String conversion for one code type.
pub struct CodeConverter<C> {
	_code: PhantomData<fn() -> C>,
}

impl<C: CodeEnum> CodeConverter<C> {
	/// Creates a converter, checking that `C` is a valid code type.
	pub fn new() -> Result<Self, CodeError> {
		require_code_type::<C>()?;
		Ok(Self { _code: PhantomData })
	}

	/// Converts a raw parameter; unknown values yield `None`.
	pub fn from_param(&self, raw: &str) -> Option<C> {
		find::<C>(raw).ok().flatten()
	}

	/// Converts a code back to its parameter form.
	pub fn to_param(&self, code: &C) -> &'static str {
		code.value()
	}
}

impl<C: CodeEnum> fmt::Debug for CodeConverter<C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("CodeConverter")
			.field(&C::code_type().name())
			.finish()
	}
}

type AnyConverter = Arc<dyn Any + Send + Sync>;

/// One [`CodeConverter`] per code type, created on first request.
///
/// Reads take a shared lock; a miss upgrades to the write lock and inserts
/// only if no other caller got there first, so every caller observes the
/// same converter instance.
#[derive(Default)]
pub struct ConverterCache {
	converters: RwLock<FxHashMap<TypeId, AnyConverter>>,
}

impl ConverterCache {
	/// Creates an empty cache.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the converter for `C`, or `None` if `C` is not a valid code type.
	pub fn get<C: CodeEnum>(&self) -> Option<Arc<CodeConverter<C>>> {
		if !is_valid_code_type::<C>() {
			tracing::trace!(code_type = C::code_type().name(), "no converter for invalid code type");
			return None;
		}
		let id = TypeId::of::<C>();
		if let Some(converter) = self.converters.read().get(&id) {
			return Arc::clone(converter).downcast().ok();
		}

		let mut converters = self.converters.write();
		let converter = converters.entry(id).or_insert_with(|| {
			tracing::debug!(code_type = C::code_type().name(), "converter created");
			Arc::new(CodeConverter::<C> { _code: PhantomData }) as AnyConverter
		});
		Arc::clone(converter).downcast().ok()
	}

	/// Returns the number of cached converters.
	pub fn len(&self) -> usize {
		self.converters.read().len()
	}

	/// Returns true if no converter has been created yet.
	pub fn is_empty(&self) -> bool {
		self.converters.read().is_empty()
	}
}

impl fmt::Debug for ConverterCache {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ConverterCache")
			.field("len", &self.len())
			.finish()
	}
}

/// A request parameter holding a code, absent when the raw value is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodeParam<C>(Option<C>);

impl<C: CodeEnum> CodeParam<C> {
	/// Wraps an already-resolved code.
	pub fn new(code: Option<C>) -> Self {
		Self(code)
	}

	/// Returns the converted code, if the raw value was known.
	pub fn get(&self) -> Option<C> {
		self.0
	}

	/// Unwraps into the converted code.
	pub fn into_inner(self) -> Option<C> {
		self.0
	}
}

impl<C: CodeEnum> FromStr for CodeParam<C> {
	type Err = CodeError;

	/// Fails only when `C` itself is malformed.
	fn from_str(raw: &str) -> Result<Self, Self::Err> {
		Ok(Self(find::<C>(raw)?))
	}
}

impl<C: CodeEnum> fmt::Display for CodeParam<C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.0 {
			Some(code) => f.write_str(code.value()),
			None => Ok(()),
		}
	}
}
