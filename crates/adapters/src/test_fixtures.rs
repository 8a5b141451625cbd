use std::sync::LazyLock;

use codeset_core::{CodeEnum, CodeRegistry, CodeType, code_enum, exclude, include};

code_enum! {
	pub(crate) enum Gender {
		Male = ("1", "男性"),
		Female = ("2", "女性"),
		NotKnown = ("0", "不明"),
		NotApplicable = ("9", "適用不能"),
	}
	metadata: |b| b
		.filter("JIS_X0303", include([Gender::Male, Gender::Female]))
		.filter_fn("KNOWN", || exclude([Gender::NotKnown])),
}

code_enum! {
	pub(crate) enum UserType {
		Administrator = ("1", "管理者"),
		Operator = ("2", "運用者"),
		Member = ("3", "利用者"),
	}
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

pub(crate) fn registry() -> CodeRegistry {
	CodeRegistry::builder()
		.register::<Gender>()
		.register::<UserType>()
		.register::<NotEnum>()
		.build()
		.expect("distinct names")
}
