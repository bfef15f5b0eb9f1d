//! Process-wide configuration.
//!
//! The only thing that can be configured is the base URI used for the default [`type`] member of
//! new [`ProblemDetails`]. It can be [installed] once, usually at startup; everything constructed
//! before that uses [`DEFAULT_TYPE_BASE_URI`].
//!
//! [`type`]: https://www.rfc-editor.org/rfc/rfc7807.html#section-3.1
//! [`ProblemDetails`]: crate::ProblemDetails
//! [installed]: Config::install
//! [`DEFAULT_TYPE_BASE_URI`]: crate::status::DEFAULT_TYPE_BASE_URI

use std::sync::OnceLock;

use serde::Deserialize;
use url::Url;

use crate::status::DEFAULT_TYPE_BASE_URI;

static TYPE_BASE_URI: OnceLock<Box<str>> = OnceLock::new();

/// Configuration for this crate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config
{
	/// The base URI for default problem types.
	///
	/// The status code is appended to this, so `https://example.org/problems/` turns into
	/// `https://example.org/problems/404` for a `404 Not Found` problem.
	#[serde(default = "default_type_base_uri")]
	pub type_base_uri: Url,
}

/// Errors that can occur when [installing] a [`Config`].
///
/// [installing]: Config::install
#[derive(Debug, Error)]
pub enum ConfigError
{
	/// A configuration has already been installed.
	#[error("problem details configuration has already been installed")]
	AlreadyInstalled,

	/// The configured base URI can't have paths appended to it.
	#[error("`{0}` cannot be used as a base URI")]
	CannotBeABase(Url),
}

impl Config
{
	/// Makes this configuration the process-wide one.
	///
	/// This can only succeed once.
	pub fn install(self) -> Result<(), ConfigError>
	{
		if self.type_base_uri.cannot_be_a_base() {
			return Err(ConfigError::CannotBeABase(self.type_base_uri));
		}

		let mut base = String::from(self.type_base_uri);

		if !base.ends_with('/') {
			base.push('/');
		}

		debug!(type_base_uri = %base, "installing problem details configuration");

		TYPE_BASE_URI
			.set(base.into_boxed_str())
			.map_err(|_| ConfigError::AlreadyInstalled)
	}
}

impl Default for Config
{
	fn default() -> Self
	{
		Self { type_base_uri: default_type_base_uri() }
	}
}

fn default_type_base_uri() -> Url
{
	DEFAULT_TYPE_BASE_URI
		.parse::<Url>()
		.unwrap_or_else(|err| panic!("hard-coded url should always be valid: {err}"))
}

/// Returns the installed base URI, or the default one.
pub(crate) fn type_base_uri() -> &'static str
{
	TYPE_BASE_URI
		.get()
		.map_or(DEFAULT_TYPE_BASE_URI, |base| &**base)
}
