//! Declaration macro for code types.

/// Declares a code type: a fieldless enum plus its [`CodeEnum`](crate::CodeEnum) impl.
///
/// Each constant is written `Name = (value, label)`. Ordinals follow
/// declaration order. The optional `metadata:` closure receives the
/// [`CodeTypeBuilder`](crate::CodeTypeBuilder) and attaches named filters,
/// aliases and short labels. The descriptor is built on first use; a
/// malformed declaration panics there with the [`DeclarationError`](crate::DeclarationError).
///
/// # Example
///
/// ```
/// use codeset_core::{CodeEnum, code_enum, include};
///
/// code_enum! {
///     /// Sex codes.
///     pub enum Gender {
///         Male = ("1", "male"),
///         Female = ("2", "female"),
///         NotKnown = ("0", "not known"),
///         NotApplicable = ("9", "not applicable"),
///     }
///     metadata: |b| b
///         .filter("JIS_X0303", include([Gender::Male, Gender::Female]))
///         .short_label(Gender::Male, "M"),
/// }
///
/// assert_eq!(codeset_core::resolve::<Gender>("2").unwrap(), Gender::Female);
/// assert_eq!(Gender::NotKnown.ordinal(), 2);
/// ```
#[macro_export]
macro_rules! code_enum {
	(
		$(#[$attr:meta])*
		$vis:vis enum $name:ident {
			$(
				$(#[$vattr:meta])*
				$variant:ident = ($value:literal, $label:literal)
			),+ $(,)?
		}
		$(metadata: $metadata:expr $(,)?)?
	) => {
		$(#[$attr])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		$vis enum $name {
			$(
				$(#[$vattr])*
				$variant,
			)+
		}

		impl $name {
			/// All constants in declaration order.
			$vis const ALL: &'static [Self] = &[$(Self::$variant),+];
		}

		impl $crate::CodeEnum for $name {
			type Peer = Self;

			fn value(&self) -> &'static str {
				match self {
					$(Self::$variant => $value,)+
				}
			}

			fn label(&self) -> &'static str {
				match self {
					$(Self::$variant => $label,)+
				}
			}

			fn ordinal(&self) -> usize {
				*self as usize
			}

			fn name(&self) -> &'static str {
				match self {
					$(Self::$variant => stringify!($variant),)+
				}
			}

			fn code_type() -> &'static $crate::CodeType<Self> {
				static CODE_TYPE: ::std::sync::LazyLock<$crate::CodeType<$name>> =
					::std::sync::LazyLock::new(|| {
						$crate::CodeType::builder(stringify!($name), $name::ALL)
							$(.configure($metadata))?
							.build()
							.unwrap_or_else(|e| panic!("code type {}: {}", stringify!($name), e))
					});
				&CODE_TYPE
			}
		}
	};
}
