//! The status capability.
//!
//! [`HttpError`] is the only thing the [writer] needs to know about a value, so anything that has
//! a status and can be serialized can be written as a problem details response.
//! [`ErasedHttpError`] and [`Problem`] make the same capability available behind a trait object,
//! which is what [`dispatch()`] relies on when it receives an opaque error.
//!
//! [writer]: crate::raw_write
//! [`dispatch()`]: crate::dispatch

use {
	crate::{ProblemDetails, ValidationProblem},
	serde::{Serialize, Serializer, ser::Error as _},
	std::{error::Error, fmt},
};

/// A value that describes a failed HTTP request.
#[diagnostic::on_unimplemented(
	message = "`{Self}` does not have an HTTP status",
	note = "only types that implement `HttpError` can be written as problem details"
)]
pub trait HttpError: Serialize
{
	/// The HTTP status code to respond with.
	///
	/// `0` means "unset"; such a value cannot be written.
	fn status(&self) -> u16;
}

/// Object-safe version of [`HttpError`].
///
/// This is implemented for every error type that implements [`HttpError`].
pub trait ErasedHttpError: Error + Send + Sync + 'static
{
	/// See [`HttpError::status()`].
	fn erased_status(&self) -> u16;

	/// Serializes `self` into a JSON value.
	///
	/// Object members are sorted by key.
	fn to_json_value(&self) -> Result<serde_json::Value, serde_json::Error>;

	/// Encodes `self` as JSON, the same way [`raw_write()`] does.
	///
	/// [`raw_write()`]: crate::raw_write
	fn to_json_vec(&self) -> Result<Vec<u8>, serde_json::Error>;

	/// Returns `self` as a plain error.
	fn as_error(&self) -> &(dyn Error + 'static);
}

impl<T> ErasedHttpError for T
where
	T: HttpError + Error + Send + Sync + 'static,
{
	fn erased_status(&self) -> u16
	{
		self.status()
	}

	fn to_json_value(&self) -> Result<serde_json::Value, serde_json::Error>
	{
		serde_json::to_value(self)
	}

	fn to_json_vec(&self) -> Result<Vec<u8>, serde_json::Error>
	{
		serde_json::to_vec(self)
	}

	fn as_error(&self) -> &(dyn Error + 'static)
	{
		self
	}
}

/// A type-erased [`HttpError`].
///
/// [`ProblemDetails`] and [`ValidationProblem`] are recognized by [`dispatch()`] even after being
/// turned into a [`BoxError`]. Any other problem type has to be wrapped in a [`Problem`] first:
///
/// ```
/// use http_problem::{BoxError, HttpError, Problem, Recorder};
///
/// #[derive(Debug, serde::Serialize)]
/// struct OutOfCredit
/// {
///     status: u16,
///     balance: u32,
/// }
///
/// impl HttpError for OutOfCredit
/// {
///     fn status(&self) -> u16
///     {
///         self.status
///     }
/// }
///
/// impl std::fmt::Display for OutOfCredit
/// {
///     fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
///     {
///         fmt.write_str("out of credit")
///     }
/// }
///
/// impl std::error::Error for OutOfCredit {}
///
/// let error: BoxError = Problem::new(OutOfCredit { status: 403, balance: 30 }).into();
/// let mut response = Recorder::new();
///
/// http_problem::dispatch(&mut response, Some(error))?;
///
/// assert_eq!(response.status(), http::StatusCode::FORBIDDEN);
/// # Ok::<(), http_problem::DispatchError>(())
/// ```
///
/// [`BoxError`]: crate::BoxError
/// [`dispatch()`]: crate::dispatch
pub struct Problem(Box<dyn ErasedHttpError>);

impl Problem
{
	/// Erases the type of `problem`.
	pub fn new<T: ErasedHttpError>(problem: T) -> Self
	{
		Self(Box::new(problem))
	}

	/// Returns a reference to the erased value.
	pub fn get_ref(&self) -> &dyn ErasedHttpError
	{
		&*self.0
	}

	/// Returns a reference to the inner value if it is of type `T`.
	pub fn downcast_ref<T: ErasedHttpError>(&self) -> Option<&T>
	{
		self.0.as_error().downcast_ref::<T>()
	}
}

impl fmt::Debug for Problem
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		fmt.debug_tuple("Problem").field(&self.0).finish()
	}
}

impl fmt::Display for Problem
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		fmt::Display::fmt(&self.0, fmt)
	}
}

impl Error for Problem
{
	fn source(&self) -> Option<&(dyn Error + 'static)>
	{
		self.0.source()
	}
}

impl Serialize for Problem
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		self.0
			.to_json_value()
			.map_err(S::Error::custom)?
			.serialize(serializer)
	}
}

impl HttpError for Problem
{
	fn status(&self) -> u16
	{
		self.0.erased_status()
	}
}

impl From<ProblemDetails> for Problem
{
	fn from(problem: ProblemDetails) -> Self
	{
		Self::new(problem)
	}
}

impl From<ValidationProblem> for Problem
{
	fn from(problem: ValidationProblem) -> Self
	{
		Self::new(problem)
	}
}

/// Returns the status capability of `error`, if it has one.
pub(crate) fn as_http_error<'a>(
	error: &'a (dyn Error + Send + Sync + 'static),
) -> Option<&'a dyn ErasedHttpError>
{
	if let Some(problem) = error.downcast_ref::<Problem>() {
		return Some(problem.get_ref());
	}

	if let Some(problem) = error.downcast_ref::<ProblemDetails>() {
		return Some(problem as &dyn ErasedHttpError);
	}

	error
		.downcast_ref::<ValidationProblem>()
		.map(|problem| problem as &dyn ErasedHttpError)
}
