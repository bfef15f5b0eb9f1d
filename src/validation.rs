//! Reporting server-side validation errors.
//!
//! [`ValidationProblem`] extends [`ProblemDetails`] the way section 3 of the RFC does in its
//! example, by adding an `invalid-params` member.

use {
	crate::{HttpError, ProblemDetails, ResponseSink, WriteError},
	serde::{Deserialize, Serialize},
	std::{error::Error, fmt},
};

/// A validation error for one field of data submitted as JSON or via a web form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError
{
	/// The name of the invalid field.
	pub name: String,

	/// Why the field is invalid.
	pub reason: String,
}

/// A [`ProblemDetails`] with a list of [`ValidationError`]s.
///
/// ```
/// use http_problem::{HttpError, ValidationProblem};
///
/// let mut problem = ValidationProblem::new();
/// problem
///     .add("email", "Must be a valid e-mail address")
///     .add("name", "You must provide your name");
///
/// assert_eq!(problem.status(), 400);
/// assert_eq!(problem.validation_errors().len(), 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationProblem
{
	#[serde(flatten)]
	problem: ProblemDetails,

	#[serde(rename = "invalid-params", default, skip_serializing_if = "Vec::is_empty")]
	validation_errors: Vec<ValidationError>,
}

impl ValidationProblem
{
	/// The `detail` every new [`ValidationProblem`] starts out with.
	pub const DEFAULT_DETAIL: &'static str = "Validation error";

	/// Creates a new `400 Bad Request` problem without any validation errors.
	pub fn new() -> Self
	{
		Self {
			problem: ProblemDetails::new(400).with_detail(Self::DEFAULT_DETAIL),
			validation_errors: Vec::new(),
		}
	}

	/// Adds a validation error for `field`.
	///
	/// Errors are kept in the order they were added; adding the same field twice adds two
	/// errors.
	///
	/// `field` must not be empty. This is checked in debug builds only.
	pub fn add(&mut self, field: impl Into<String>, reason: impl Into<String>) -> &mut Self
	{
		let name = field.into();

		debug_assert!(!name.is_empty(), "validation errors must name a field");

		self.validation_errors.push(ValidationError { name, reason: reason.into() });
		self
	}

	/// Returns the validation errors, in the order they were added.
	pub fn validation_errors(&self) -> &[ValidationError]
	{
		&self.validation_errors
	}

	/// Returns whether no validation errors have been added.
	pub fn is_empty(&self) -> bool
	{
		self.validation_errors.is_empty()
	}

	/// Returns a shared reference to the underlying [`ProblemDetails`].
	pub fn problem(&self) -> &ProblemDetails
	{
		&self.problem
	}

	/// Returns an exclusive reference to the underlying [`ProblemDetails`].
	pub fn problem_mut(&mut self) -> &mut ProblemDetails
	{
		&mut self.problem
	}

	/// Writes `self` into `sink`.
	///
	/// See [`raw_write()`] for details.
	///
	/// [`raw_write()`]: crate::raw_write
	pub fn write<S>(&self, sink: &mut S) -> Result<(), WriteError>
	where
		S: ResponseSink + ?Sized,
	{
		crate::raw_write(sink, self)
	}
}

impl HttpError for ValidationProblem
{
	fn status(&self) -> u16
	{
		self.problem.status()
	}
}

impl fmt::Display for ValidationProblem
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		fmt::Display::fmt(&self.problem, fmt)
	}
}

impl Error for ValidationProblem
{
	fn source(&self) -> Option<&(dyn Error + 'static)>
	{
		self.problem.source()
	}
}

impl From<ValidationProblem> for ProblemDetails
{
	fn from(problem: ValidationProblem) -> Self
	{
		problem.problem
	}
}

#[cfg(test)]
mod tests
{
	use super::*;
	use crate::{Recorder, testing};

	const EMAIL_REASON: &str = "Must be a valid e-mail address";
	const NAME_REASON: &str = "You must provide your name";

	#[test]
	fn new_is_bad_request() -> testing::Result
	{
		let problem = ValidationProblem::new();

		testing::assert_eq!(problem.status(), 400);
		testing::assert_eq!(problem.problem().title(), "Bad Request");
		testing::assert_eq!(problem.problem().detail(), ValidationProblem::DEFAULT_DETAIL);
		testing::assert_eq!(problem.to_string(), "Bad Request");
		testing::assert!(problem.is_empty());

		Ok(())
	}

	#[test]
	fn write_keeps_field_reasons_together() -> testing::Result
	{
		let mut problem = ValidationProblem::new();
		problem.add("email", EMAIL_REASON).add("name", NAME_REASON);

		let mut response = Recorder::new();

		crate::must_dispatch(&mut response, Some(problem.into()))?;

		let problem = testing::decode_body::<ValidationProblem>(&response)?;

		testing::assert_eq!(response.status(), http::StatusCode::BAD_REQUEST);
		testing::assert_eq!(problem.status(), 400);
		testing::assert_eq!(problem.validation_errors().len(), 2);

		for error in problem.validation_errors() {
			match error.name.as_str() {
				"email" => testing::assert_eq!(error.reason, EMAIL_REASON),
				"name" => testing::assert_eq!(error.reason, NAME_REASON),
				name => testing::bail!("unexpected field {name:?}"),
			}
		}

		Ok(())
	}

	#[test]
	fn add_keeps_order_and_duplicates() -> testing::Result
	{
		let mut problem = ValidationProblem::new();
		problem
			.add("password", "Must be at least 8 characters long")
			.add("email", EMAIL_REASON)
			.add("password", "Must contain a digit");

		let names = problem
			.validation_errors()
			.iter()
			.map(|error| error.name.as_str())
			.collect::<Vec<_>>();

		testing::assert_eq!(names, ["password", "email", "password"]);

		Ok(())
	}

	#[test]
	#[cfg(debug_assertions)]
	#[should_panic = "validation errors must name a field"]
	fn add_rejects_empty_field_name()
	{
		ValidationProblem::new().add("", "must not be empty");
	}

	#[test]
	fn serialize_flattens_base_members() -> testing::Result
	{
		let mut problem = ValidationProblem::new();
		problem.add("age", "must be a positive integer");

		testing::assert_eq!(
			serde_json::to_value(&problem)?,
			serde_json::json!({
				"status": 400,
				"title": "Bad Request",
				"detail": "Validation error",
				"type": "https://httpstatuses.com/400",
				"invalid-params": [
					{ "name": "age", "reason": "must be a positive integer" },
				],
			})
		);

		testing::assert!(
			serde_json::to_value(ValidationProblem::new())?.get("invalid-params").is_none()
		);

		Ok(())
	}

	#[test]
	fn problem_mut_forwards_overrides() -> testing::Result
	{
		let mut problem = ValidationProblem::new();
		let base = std::mem::take(problem.problem_mut());
		*problem.problem_mut() = base.with_detail("Your request parameters didn't validate.");

		testing::assert_eq!(problem.problem().detail(), "Your request parameters didn't validate.");
		testing::assert_eq!(problem.status(), 400);

		Ok(())
	}
}
