//! # [RFC 7807][rfc] - Problem Details for HTTP APIs
//!
//! This crate provides an error type, [`ProblemDetails`], that can be returned from any layer of
//! request-handling code like a regular [`std::error::Error`], and written as an
//! `application/problem+json` response once it reaches the HTTP boundary.
//!
//! ```
//! use http_problem::{HttpError, ProblemDetails, Recorder};
//!
//! let problem = ProblemDetails::new(404).with_detail("no user with ID 42");
//! let mut response = Recorder::new();
//!
//! problem.write(&mut response)?;
//!
//! assert_eq!(response.status(), http::StatusCode::NOT_FOUND);
//! assert_eq!(problem.status(), 404);
//! assert_eq!(problem.to_string(), "Not Found");
//! # Ok::<(), http_problem::WriteError>(())
//! ```
//!
//! Errors that don't carry a status can still be turned into a response with
//! [`must_dispatch()`], which falls back to `500 Internal Server Error`.
//!
//! [rfc]: https://www.rfc-editor.org/rfc/rfc7807.html

#[macro_use]
extern crate tracing as _;

#[macro_use]
extern crate thiserror as _;

pub use self::{
	config::{Config, ConfigError},
	http_error::{ErasedHttpError, HttpError, Problem},
	problem_details::ProblemDetails,
	recorder::Recorder,
	validation::{ValidationError, ValidationProblem},
	write::{
		DispatchError,
		ResponseSink,
		WriteError,
		dispatch,
		must_dispatch,
		raw_write,
		report_error,
		reportf,
	},
};
use mime::Mime;

#[cfg(test)]
mod testing;

pub mod config;
mod http_error;
mod problem_details;
mod recorder;
pub mod status;
mod validation;
mod write;

/// The `Content-Type` used for problem details responses.
pub const CONTENT_TYPE: &str = "application/problem+json";

/// An opaque error, as it is usually passed around by request handlers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Returns the [`Content-Type`] value used in responses.
///
/// [`Content-Type`]: https://developer.mozilla.org/en-US/docs/Web/HTTP/Headers/Content-Type
pub fn content_type() -> Mime
{
	CONTENT_TYPE
		.parse::<Mime>()
		.unwrap_or_else(|err| panic!("hard-coded string should always be valid: {err}"))
}

/// Creates a [`ProblemDetails`] with the given status and a `format!`-style detail message.
///
/// This is the macro form of [`reportf()`].
///
/// ```
/// use http_problem::reportf;
///
/// let user_id = 42;
/// let problem = reportf!(404, "no user with ID {user_id}");
///
/// assert_eq!(problem.detail(), "no user with ID 42");
/// ```
#[macro_export]
macro_rules! reportf {
	($status:expr, $($fmt:tt)+) => {
		$crate::reportf($status, ::std::format_args!($($fmt)+))
	};
}
