use super::{CodeType, Marker, is_valid_code_type, require_code_type, resolve_alias_string, resolve_filter};
use crate::error::{CodeError, DeclarationError};
use crate::test_fixtures::{Gender, NotEnum, Shadowed, UserType, WrongPeer, init_tracing};
use crate::{CodeEnum, exclude, include};

#[test]
fn test_valid_code_types() {
	assert!(is_valid_code_type::<Gender>());
	assert!(is_valid_code_type::<UserType>());
	assert!(is_valid_code_type::<Shadowed>());
}

#[test]
fn test_opaque_type_is_invalid() {
	assert!(!is_valid_code_type::<NotEnum>());
	let err = require_code_type::<NotEnum>().unwrap_err();
	assert_eq!(
		err,
		CodeError::InvalidVariantType {
			type_name: "NotEnum"
		}
	);
	assert_eq!(
		err.to_string(),
		"NotEnum is not a valid code type. code types must be closed enumerations implementing CodeEnum<Peer = Self>"
	);
}

#[test]
fn test_wrong_peer_is_invalid() {
	assert!(WrongPeer::code_type().is_enumeration());
	assert!(!is_valid_code_type::<WrongPeer>());
	assert!(matches!(
		require_code_type::<WrongPeer>(),
		Err(CodeError::InvalidVariantType {
			type_name: "WrongPeer"
		})
	));
}

#[test]
fn test_require_returns_descriptor() {
	let ty = require_code_type::<Gender>().unwrap();
	assert_eq!(ty.name(), "Gender");
	assert_eq!(ty.constants(), Some(Gender::ALL));
	assert_eq!(ty.filter_names().collect::<Vec<_>>(), ["JIS_X0303", "KNOWN"]);
	assert_eq!(ty.alias_names().collect::<Vec<_>>(), ["english", "initial"]);
}

#[test]
fn test_resolve_filter_field() {
	let filter = resolve_filter::<Gender>("JIS_X0303").unwrap();
	assert!(filter.test(&Gender::Male));
	assert!(filter.test(&Gender::Female));
	assert!(!filter.test(&Gender::NotKnown));
	assert!(!filter.test(&Gender::NotApplicable));
}

#[test]
fn test_resolve_filter_method() {
	let filter = resolve_filter::<Gender>("KNOWN").unwrap();
	let expected = exclude([Gender::NotKnown]);
	for g in Gender::ALL {
		assert_eq!(filter.test(g), expected.test(g), "{g:?}");
	}
}

#[test]
fn test_resolve_filter_not_found() {
	init_tracing();
	let err = resolve_filter::<Gender>("ISO_5218").unwrap_err();
	assert_eq!(err.to_string(), "code filter 'ISO_5218' for Gender is not found");

	// Alias members are not filters.
	assert!(matches!(
		resolve_filter::<Gender>("english"),
		Err(CodeError::FilterNotFound { .. })
	));
}

#[test]
fn test_resolve_filter_checks_contract_first() {
	assert!(matches!(
		resolve_filter::<WrongPeer>("YES"),
		Err(CodeError::InvalidVariantType { .. })
	));
	assert!(matches!(
		resolve_filter::<NotEnum>("ANY"),
		Err(CodeError::InvalidVariantType { .. })
	));
}

#[test]
fn test_resolve_alias_field_and_method() {
	assert_eq!(resolve_alias_string(&Gender::Female, Marker::Alias, "english"), Ok("female"));
	assert_eq!(resolve_alias_string(&Gender::Female, Marker::Alias, "initial"), Ok("F"));
	assert_eq!(resolve_alias_string(&UserType::Member, Marker::Alias, "english"), Ok("MEMBER"));
}

#[test]
fn test_resolve_alias_method_without_value() {
	let err = resolve_alias_string(&Gender::NotKnown, Marker::Alias, "initial").unwrap_err();
	assert_eq!(
		err.to_string(),
		"attribute marked as 'alias' with name 'initial' is not found in Gender"
	);
}

#[test]
fn test_resolve_alias_not_found_names_marker() {
	let err = resolve_alias_string(&UserType::Operator, Marker::Alias, "japanese").unwrap_err();
	assert_eq!(
		err,
		CodeError::AttributeNotFound {
			type_name: "UserType",
			marker: Marker::Alias,
			name: "japanese".into(),
		}
	);

	let err = resolve_alias_string(&Gender::Male, Marker::ShortLabel, "english").unwrap_err();
	assert_eq!(
		err.to_string(),
		"attribute marked as 'short-label' with name 'english' is not found in Gender"
	);

	// Filters are not string-valued.
	assert!(matches!(
		resolve_alias_string(&Gender::Male, Marker::Filter, "JIS_X0303"),
		Err(CodeError::AttributeNotFound {
			marker: Marker::Filter,
			..
		})
	));
}

#[test]
fn test_short_label_keyed_by_constant_name() {
	assert_eq!(resolve_alias_string(&Gender::Male, Marker::ShortLabel, "Male"), Ok("男"));
	assert!(resolve_alias_string(&Gender::Male, Marker::ShortLabel, "Female").is_err());
	assert!(resolve_alias_string(&Gender::NotKnown, Marker::ShortLabel, "NotKnown").is_err());
}

#[test]
fn test_duplicate_filter_rejected() {
	let err = CodeType::builder("Gender", Gender::ALL)
		.filter("BINARY", include([Gender::Male, Gender::Female]))
		.filter_fn("BINARY", || include([Gender::Male]))
		.build()
		.unwrap_err();
	assert_eq!(
		err,
		DeclarationError::DuplicateMember {
			type_name: "Gender",
			marker: Marker::Filter,
			name: "BINARY",
		}
	);
}

#[test]
fn test_duplicate_alias_rejected() {
	let err = CodeType::builder("Gender", Gender::ALL)
		.alias("english", &[(Gender::Male, "male")])
		.alias_fn("english", |_| Some("person"))
		.build()
		.unwrap_err();
	assert!(matches!(
		err,
		DeclarationError::DuplicateMember {
			marker: Marker::Alias,
			name: "english",
			..
		}
	));
}

#[test]
fn test_same_name_across_markers_allowed() {
	let ty = CodeType::builder("Gender", Gender::ALL)
		.filter("english", include([Gender::Male]))
		.alias("english", &[(Gender::Male, "male")])
		.build()
		.unwrap();
	assert!(ty.find_filter("english").is_some());
	assert_eq!(ty.find_string(&Gender::Male, Marker::Alias, "english"), Some("male"));
}

#[test]
fn test_duplicate_short_label_rejected() {
	let err = CodeType::builder("Gender", Gender::ALL)
		.short_label(Gender::Male, "男")
		.short_label(Gender::Male, "M")
		.build()
		.unwrap_err();
	assert_eq!(err.to_string(), "duplicate short-label member: type=Gender name=\"Male\"");
}

#[test]
fn test_metadata_on_undeclared_constant_rejected() {
	let err = CodeType::builder("Gender", &[Gender::Male, Gender::Female])
		.alias("english", &[(Gender::NotKnown, "not known")])
		.build()
		.unwrap_err();
	assert_eq!(
		err,
		DeclarationError::UnknownConstant {
			type_name: "Gender",
			marker: Marker::Alias,
			name: "english",
			constant: "NotKnown".into(),
		}
	);
}

#[test]
fn test_alias_first_entry_wins() {
	let ty = CodeType::builder("Gender", Gender::ALL)
		.alias("english", &[(Gender::Male, "male"), (Gender::Male, "man")])
		.build()
		.unwrap();
	assert_eq!(ty.find_string(&Gender::Male, Marker::Alias, "english"), Some("male"));
}

#[test]
fn test_duplicate_values_are_accepted() {
	init_tracing();
	let ty = Shadowed::code_type();
	assert_eq!(ty.constants().map(<[_]>::len), Some(3));
}

#[test]
fn test_opaque_descriptor() {
	let ty = NotEnum::code_type();
	assert_eq!(ty.name(), "NotEnum");
	assert!(!ty.is_enumeration());
	assert!(ty.constants().is_none());
	assert_eq!(ty.filter_names().count(), 0);
}

#[test]
fn test_marker_display() {
	assert_eq!(Marker::Filter.to_string(), "filter");
	assert_eq!(Marker::Alias.to_string(), "alias");
	assert_eq!(Marker::ShortLabel.to_string(), "short-label");
}
