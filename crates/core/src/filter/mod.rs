//! Filter combinators.
//!
//! A [`Filter`] selects a subset of one code type's constants. Filters are
//! stateless, cheap to clone and shared freely across threads. Catalog
//! authors build named filters with [`include`] and [`exclude`]; the engine
//! uses [`Filter::ANY`] so filtered and unfiltered lookups share one path.

use std::sync::Arc;

use crate::CodeEnum;

type Predicate<C> = Arc<dyn Fn(&C) -> bool + Send + Sync>;

/// A predicate over the constants of one code type.
pub struct Filter<C> {
	inner: Inner<C>,
}

enum Inner<C> {
	Any,
	Predicate(Predicate<C>),
}

impl<C> Filter<C> {
	/// Filter that accepts every constant.
	pub const ANY: Self = Self { inner: Inner::Any };

	/// Wraps a predicate function.
	pub fn new(predicate: impl Fn(&C) -> bool + Send + Sync + 'static) -> Self {
		Self {
			inner: Inner::Predicate(Arc::new(predicate)),
		}
	}

	/// Returns true if `code` passes the filter.
	#[inline]
	pub fn test(&self, code: &C) -> bool {
		match &self.inner {
			Inner::Any => true,
			Inner::Predicate(p) => p(code),
		}
	}

	/// Returns true if this is the match-everything filter.
	pub fn is_any(&self) -> bool {
		matches!(self.inner, Inner::Any)
	}
}

impl<C: 'static> Filter<C> {
	/// Returns a filter accepting constants that pass both `self` and `other`.
	pub fn and(self, other: Self) -> Self {
		match (self.inner, other.inner) {
			(Inner::Any, inner) | (inner, Inner::Any) => Self { inner },
			(Inner::Predicate(a), Inner::Predicate(b)) => Self::new(move |c| a(c) && b(c)),
		}
	}

	/// Returns a filter accepting constants that pass `self` or `other`.
	pub fn or(self, other: Self) -> Self {
		match (self.inner, other.inner) {
			(Inner::Any, _) | (_, Inner::Any) => Self::ANY,
			(Inner::Predicate(a), Inner::Predicate(b)) => Self::new(move |c| a(c) || b(c)),
		}
	}

	/// Returns the logical negation of this filter.
	pub fn negate(self) -> Self {
		match self.inner {
			Inner::Any => Self::new(|_| false),
			Inner::Predicate(p) => Self::new(move |c| !p(c)),
		}
	}
}

impl<C> Clone for Filter<C> {
	fn clone(&self) -> Self {
		let inner = match &self.inner {
			Inner::Any => Inner::Any,
			Inner::Predicate(p) => Inner::Predicate(Arc::clone(p)),
		};
		Self { inner }
	}
}

impl<C> Default for Filter<C> {
	fn default() -> Self {
		Self::ANY
	}
}

impl<C> core::fmt::Debug for Filter<C> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self.inner {
			Inner::Any => f.write_str("Filter::ANY"),
			Inner::Predicate(_) => f.write_str("Filter(..)"),
		}
	}
}

/// Returns the match-everything filter.
pub fn any<C>() -> Filter<C> {
	Filter::ANY
}

/// Returns a filter accepting exactly the given constants.
pub fn include<C: CodeEnum>(codes: impl IntoIterator<Item = C>) -> Filter<C> {
	let codes: Box<[C]> = codes.into_iter().collect();
	Filter::new(move |c| codes.contains(c))
}

/// Returns a filter rejecting exactly the given constants.
pub fn exclude<C: CodeEnum>(codes: impl IntoIterator<Item = C>) -> Filter<C> {
	include(codes).negate()
}
