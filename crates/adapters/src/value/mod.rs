//! Serde codec encoding a code as its wire value.
//!
//! Use with `#[serde(with = "codeset_adapters::value")]` on `C` fields, or
//! `#[serde(with = "codeset_adapters::value::option")]` on `Option<C>` fields.
//! Unknown values fail deserialization with the engine's not-found message.

use codeset_core::{CodeEnum, resolve};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

/// Serializes `code` as its value string.
pub fn serialize<C: CodeEnum, S: Serializer>(code: &C, serializer: S) -> Result<S::Ok, S::Error> {
	serializer.serialize_str(code.value())
}

/// Deserializes a code from its value string.
pub fn deserialize<'de, C: CodeEnum, D: Deserializer<'de>>(deserializer: D) -> Result<C, D::Error> {
	let raw = String::deserialize(deserializer)?;
	resolve::<C>(&raw).map_err(D::Error::custom)
}

/// Codec for `Option<C>`; `null` maps to `None`, unknown values still fail.
pub mod option {
	use codeset_core::{CodeEnum, resolve};
	use serde::de::Error as _;
	use serde::{Deserialize, Deserializer, Serializer};

	/// Serializes `Some(code)` as its value string and `None` as null.
	pub fn serialize<C: CodeEnum, S: Serializer>(
		code: &Option<C>,
		serializer: S,
	) -> Result<S::Ok, S::Error> {
		match code {
			Some(code) => serializer.serialize_some(code.value()),
			None => serializer.serialize_none(),
		}
	}

	/// Deserializes an optional code from its value string.
	pub fn deserialize<'de, C: CodeEnum, D: Deserializer<'de>>(
		deserializer: D,
	) -> Result<Option<C>, D::Error> {
		Option::<String>::deserialize(deserializer)?
			.map(|raw| resolve::<C>(&raw).map_err(D::Error::custom))
			.transpose()
	}
}
