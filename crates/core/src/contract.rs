//! The variant contract every code type implements.

use core::fmt::Debug;
use core::hash::Hash;

use crate::meta::CodeType;

/// A closed, ordered set of code constants with external wire values.
///
/// Implementations are normally generated by [`code_enum!`](crate::code_enum),
/// which guarantees the structural contract: the type is a fieldless enum,
/// `Peer` is `Self`, and ordinals follow declaration order.
///
/// `Peer` mirrors the self-parameter of the contract. A type that names any
/// other peer is rejected by [`require_code_type`](crate::require_code_type)
/// and by every engine entry point.
pub trait CodeEnum: Copy + Eq + Hash + Debug + Send + Sync + 'static {
	/// Type membership is declared against. Must be `Self`.
	type Peer: 'static;

	/// Returns the external wire value, unique within the type.
	fn value(&self) -> &'static str;

	/// Returns the human-readable display label.
	fn label(&self) -> &'static str;

	/// Returns the 0-based declaration position.
	fn ordinal(&self) -> usize;

	/// Returns the declared name of the constant (e.g. `"Male"`).
	fn name(&self) -> &'static str;

	/// Returns the type descriptor holding the constant set and metadata.
	fn code_type() -> &'static CodeType<Self>;

	/// Returns true if `self` equals any of `codes`.
	fn is_in(&self, codes: &[Self]) -> bool {
		codes.contains(self)
	}

	/// Returns true if `self` equals none of `codes`.
	fn not_in(&self, codes: &[Self]) -> bool {
		!self.is_in(codes)
	}
}
