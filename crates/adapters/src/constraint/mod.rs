//! Validation constraint restricting a string field to a code type's values.
//!
//! A [`CodeValue`] names the target code type and zero or more named filters.
//! [`CodeValueValidator::new`] resolves both once, at setup; validation then
//! only tests membership. An absent value is valid: the constraint rejects
//! unrecognized values, not missing ones.

use codeset_core::{CodeEnum, CodeMatcher, CodeRegistry, RegistryError};
use serde::{Deserialize, Serialize};

/// Default message key for values outside the constrained set.
pub const MESSAGE: &str = "codeset.constraint.CodeValue.message";

/// Message key for parameters that failed conversion to a code.
pub const CONVERT_FAILURE_MESSAGE: &str = "codeset.constraint.CodeValue.message.convertFailure";

/// Declarative constraint configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeValue {
	/// Registered name of the target code type.
	pub code: String,
	/// Named filters of the code type, combined with logical AND.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub filters: Vec<String>,
	/// Overrides [`MESSAGE`].
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
}

impl CodeValue {
	/// Creates a constraint on `code` with no filters.
	pub fn new(code: impl Into<String>) -> Self {
		Self {
			code: code.into(),
			filters: Vec::new(),
			message: None,
		}
	}

	/// Adds a named filter.
	pub fn with_filter(mut self, name: impl Into<String>) -> Self {
		self.filters.push(name.into());
		self
	}

	/// Overrides the violation message.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}
}

/// A rejected field value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message} (value={value:?})")]
pub struct Violation {
	/// Name of the validated field.
	pub field: String,
	/// The rejected value, or `None` when conversion failed.
	pub value: Option<String>,
	/// Message key or literal message.
	pub message: String,
}

/// Validator built from a [`CodeValue`].
#[derive(Debug, Clone)]
pub struct CodeValueValidator {
	matcher: CodeMatcher,
	message: String,
}

impl CodeValueValidator {
	/// Resolves the constraint's code type and filters.
	///
	/// Fails if the type is not registered, does not satisfy the code type
	/// contract, or lacks one of the named filters.
	pub fn new(registry: &CodeRegistry, constraint: &CodeValue) -> Result<Self, RegistryError> {
		let ty = registry.require(&constraint.code)?;
		let filters: Vec<&str> = constraint.filters.iter().map(String::as_str).collect();
		let matcher = ty.matcher(&filters)?;
		tracing::debug!(
			code_type = ty.name(),
			filters = ?constraint.filters,
			"code value constraint initialized"
		);
		Ok(Self {
			matcher,
			message: constraint.message.clone().unwrap_or_else(|| MESSAGE.to_owned()),
		})
	}

	/// Returns the name of the constrained code type.
	pub fn code_type(&self) -> &'static str {
		self.matcher.code_type()
	}

	/// Returns true if `value` is absent or a value of an accepted constant.
	pub fn is_valid(&self, value: Option<&str>) -> bool {
		value.is_none_or(|v| self.matcher.matches(v))
	}

	/// Validates a raw string field.
	pub fn validate(&self, field: &str, value: Option<&str>) -> Result<(), Violation> {
		if self.is_valid(value) {
			return Ok(());
		}
		Err(Violation {
			field: field.to_owned(),
			value: value.map(str::to_owned),
			message: self.message.clone(),
		})
	}

	/// Validates a field already converted to a code.
	///
	/// `None` means the raw parameter did not convert and is reported with
	/// [`CONVERT_FAILURE_MESSAGE`]. Codes of a different type than the
	/// constrained one are rejected.
	pub fn validate_code<C: CodeEnum>(&self, field: &str, value: Option<C>) -> Result<(), Violation> {
		let Some(code) = value else {
			return Err(Violation {
				field: field.to_owned(),
				value: None,
				message: CONVERT_FAILURE_MESSAGE.to_owned(),
			});
		};
		if self.matcher.is_for::<C>() && self.matcher.matches(code.value()) {
			return Ok(());
		}
		Err(Violation {
			field: field.to_owned(),
			value: Some(code.value().to_owned()),
			message: self.message.clone(),
		})
	}
}
