use std::sync::LazyLock;

use crate::{CodeEnum, CodeType, exclude, include};

pub(crate) fn init_tracing() {
	let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

crate::code_enum! {
	/// Sex codes per ISO/IEC 5218.
	pub(crate) enum Gender {
		Male = ("1", "男性"),
		Female = ("2", "女性"),
		NotKnown = ("0", "不明"),
		NotApplicable = ("9", "適用不能"),
	}
	metadata: |b| b
		.filter("JIS_X0303", include([Gender::Male, Gender::Female]))
		.filter_fn("KNOWN", || exclude([Gender::NotKnown]))
		.alias("english", &[
			(Gender::Male, "male"),
			(Gender::Female, "female"),
			(Gender::NotKnown, "not known"),
			(Gender::NotApplicable, "not applicable"),
		])
		.alias_fn("initial", |g| match g {
			Gender::Male => Some("M"),
			Gender::Female => Some("F"),
			_ => None,
		})
		.short_label(Gender::Male, "男")
		.short_label(Gender::Female, "女"),
}

crate::code_enum! {
	pub(crate) enum UserType {
		Administrator = ("1", "管理者"),
		Operator = ("2", "運用者"),
		Member = ("3", "利用者"),
	}
	metadata: |b| b.alias("english", &[
		(UserType::Administrator, "ADMINISTRATOR"),
		(UserType::Operator, "OPERATOR"),
		(UserType::Member, "MEMBER"),
	]),
}

/// Code-like type without a closed constant set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NotEnum;

impl CodeEnum for NotEnum {
	type Peer = Self;

	fn value(&self) -> &'static str {
		"1"
	}

	fn label(&self) -> &'static str {
		"not enum"
	}

	fn ordinal(&self) -> usize {
		0
	}

	fn name(&self) -> &'static str {
		"NotEnum"
	}

	fn code_type() -> &'static CodeType<Self> {
		static CODE_TYPE: LazyLock<CodeType<NotEnum>> = LazyLock::new(|| CodeType::opaque("NotEnum"));
		&CODE_TYPE
	}
}

/// Enumeration that declares `Gender` as its peer instead of itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum WrongPeer {
	Yes,
	No,
}

impl CodeEnum for WrongPeer {
	type Peer = Gender;

	fn value(&self) -> &'static str {
		match self {
			Self::Yes => "1",
			Self::No => "0",
		}
	}

	fn label(&self) -> &'static str {
		match self {
			Self::Yes => "yes",
			Self::No => "no",
		}
	}

	fn ordinal(&self) -> usize {
		*self as usize
	}

	fn name(&self) -> &'static str {
		match self {
			Self::Yes => "Yes",
			Self::No => "No",
		}
	}

	fn code_type() -> &'static CodeType<Self> {
		static CODE_TYPE: LazyLock<CodeType<WrongPeer>> = LazyLock::new(|| {
			CodeType::builder("WrongPeer", &[WrongPeer::Yes, WrongPeer::No])
				.filter("YES", include([WrongPeer::Yes]))
				.alias("english", &[(WrongPeer::Yes, "yes")])
				.build()
				.expect("valid declaration")
		});
		&CODE_TYPE
	}
}

crate::code_enum! {
	/// Codes whose values collide; lookups return the first declared constant.
	pub(crate) enum Shadowed {
		First = ("x", "first"),
		Second = ("x", "second"),
		Third = ("y", "third"),
	}
}
