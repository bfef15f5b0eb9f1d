#![allow(unused_macros, unused_macro_rules)]

/// Like [`std::assert!`], but returns an error instead of panicking.
macro_rules! assert {
	($cond:expr $(,)?) => {
		if !($cond) {
			anyhow::bail!("assertion failed: `{}`", std::stringify!($cond));
		}
	};
	($cond:expr, $($msg:tt)+) => {
		if !($cond) {
			anyhow::bail!(
				"assertion failed: `{}` ({})",
				std::stringify!($cond),
				std::format_args!($($msg)+),
			);
		}
	};
}

/// Like [`std::assert_eq!`], but returns an error instead of panicking.
macro_rules! assert_eq {
	($lhs:expr, $rhs:expr $(,)?) => {
		match (&$lhs, &$rhs) {
			(lhs, rhs) => {
				if !(*lhs == *rhs) {
					anyhow::bail!(
						"assertion failed: `{}` == `{}`\n  lhs: {:?}\n  rhs: {:?}",
						std::stringify!($lhs),
						std::stringify!($rhs),
						lhs,
						rhs,
					);
				}
			},
		}
	};
}

/// Returns an error if `$expr` does not match `$pat`.
macro_rules! assert_matches {
	($expr:expr, $pat:pat $(if $guard:expr)? $(,)?) => {
		if !(std::matches!($expr, $pat $(if $guard)?)) {
			anyhow::bail!(
				"assertion failed: `{}` does not match `{}`",
				std::stringify!($expr),
				std::stringify!($pat),
			);
		}
	};
}

pub(crate) use {assert, assert_eq, assert_matches};
