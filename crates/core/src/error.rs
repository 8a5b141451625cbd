//! Error types for code resolution, declaration and registration.
//!
//! Every message embeds the code type name together with the searched value
//! or member name, so callers can match on them directly.

use crate::meta::Marker;

/// Failure raised by the resolution engine and metadata lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeError {
	/// The type handle does not carry a closed, fixed constant set.
	#[error("code type must be a closed enumeration. type=[{type_name}]")]
	NotAnEnumeration { type_name: &'static str },

	/// The type is not a closed enumeration implementing `CodeEnum<Peer = Self>`.
	#[error(
		"{type_name} is not a valid code type. code types must be closed enumerations implementing CodeEnum<Peer = Self>"
	)]
	InvalidVariantType { type_name: &'static str },

	/// No constant's value matched (after filtering).
	#[error("code is not found. type=[{type_name}], value=[{value}]")]
	CodeNotFound { type_name: &'static str, value: String },

	/// No filter member with this name is declared on the type.
	#[error("code filter '{name}' for {type_name} is not found")]
	FilterNotFound { type_name: &'static str, name: String },

	/// No string member with this name and marker is declared on the type.
	#[error("attribute marked as '{marker}' with name '{name}' is not found in {type_name}")]
	AttributeNotFound {
		type_name: &'static str,
		marker: Marker,
		name: String,
	},
}

impl CodeError {
	/// Returns the name of the code type the failure refers to.
	pub fn type_name(&self) -> &'static str {
		match self {
			Self::NotAnEnumeration { type_name }
			| Self::InvalidVariantType { type_name }
			| Self::CodeNotFound { type_name, .. }
			| Self::FilterNotFound { type_name, .. }
			| Self::AttributeNotFound { type_name, .. } => type_name,
		}
	}
}

/// Malformed code type declaration, detected when its metadata table is built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeclarationError {
	/// Two members of the same marker kind share a name.
	#[error("duplicate {marker} member: type={type_name} name={name:?}")]
	DuplicateMember {
		type_name: &'static str,
		marker: Marker,
		name: &'static str,
	},

	/// Metadata was attached to a constant outside the declared set.
	#[error("{marker} member {name:?} refers to a constant outside {type_name}: {constant}")]
	UnknownConstant {
		type_name: &'static str,
		marker: Marker,
		name: &'static str,
		constant: String,
	},
}

/// Failure raised by [`CodeRegistry`](crate::CodeRegistry) registration and lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// Two code types were registered under the same name.
	#[error("duplicate code type: name={name:?}")]
	DuplicateType { name: &'static str },

	/// No code type is registered under this name.
	#[error("code type '{name}' is not registered")]
	UnknownType { name: String },

	#[error(transparent)]
	Code(#[from] CodeError),
}
