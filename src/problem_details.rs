//! The [`ProblemDetails`] type.

use {
	crate::{BoxError, HttpError, ResponseSink, WriteError, status},
	serde::{Deserialize, Serialize},
	std::{error::Error, fmt, sync::Arc},
};

/// [RFC 7807][rfc] - Problem Details
///
/// This is both an error type and the body of the response it will eventually turn into. Every
/// member is omitted from the JSON representation if it is empty.
///
/// ```
/// use http_problem::ProblemDetails;
///
/// let error = std::io::Error::other("disk is full");
/// let problem = ProblemDetails::new(507).wrapf(error, format_args!("saving upload"));
///
/// assert_eq!(problem.title(), "Insufficient Storage");
/// assert_eq!(problem.detail(), "saving upload: disk is full");
/// assert_eq!(problem.problem_type(), "https://httpstatuses.com/507");
/// ```
///
/// [rfc]: https://www.rfc-editor.org/rfc/rfc7807.html
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProblemDetails
{
	/// The response's [`status`] member. `0` means unset.
	///
	/// [`status`]: https://www.rfc-editor.org/rfc/rfc7807.html#section-3.1
	#[serde(skip_serializing_if = "is_zero")]
	status: u16,

	/// The response's [`title`] member.
	///
	/// [`title`]: https://www.rfc-editor.org/rfc/rfc7807.html#section-3.1
	#[serde(skip_serializing_if = "String::is_empty")]
	title: String,

	/// The response's [`detail`] member.
	///
	/// [`detail`]: https://www.rfc-editor.org/rfc/rfc7807.html#section-3.1
	#[serde(skip_serializing_if = "String::is_empty")]
	detail: String,

	/// The response's [`type`] member.
	///
	/// [`type`]: https://www.rfc-editor.org/rfc/rfc7807.html#section-3.1
	#[serde(rename = "type", skip_serializing_if = "String::is_empty")]
	problem_type: String,

	/// The response's [`instance`] member.
	///
	/// [`instance`]: https://www.rfc-editor.org/rfc/rfc7807.html#section-3.1
	#[serde(skip_serializing_if = "String::is_empty")]
	instance: String,

	/// The error that caused this problem, if any.
	///
	/// This is shared with whoever created it and is never serialized.
	#[serde(skip)]
	cause: Option<Arc<dyn Error + Send + Sync + 'static>>,
}

fn is_zero(status: &u16) -> bool
{
	*status == 0
}

impl ProblemDetails
{
	/// Creates a new [`ProblemDetails`] for the given status code.
	///
	/// The title is taken from the [status catalog], and the type is derived from `status`.
	/// Unknown status codes result in an empty title.
	///
	/// [status catalog]: crate::status
	pub fn new(status: u16) -> Self
	{
		Self {
			status,
			title: status::title_for(status).to_owned(),
			problem_type: status::type_for(status),
			..Default::default()
		}
	}

	/// Returns the value of the `title` member.
	pub fn title(&self) -> &str
	{
		&self.title
	}

	/// Returns the value of the `detail` member.
	pub fn detail(&self) -> &str
	{
		&self.detail
	}

	/// Returns the value of the `type` member.
	pub fn problem_type(&self) -> &str
	{
		&self.problem_type
	}

	/// Returns the value of the `instance` member.
	pub fn instance(&self) -> &str
	{
		&self.instance
	}

	/// Returns the error that caused this problem, if any.
	///
	/// This is the same value returned by [`Error::source()`], but keeps the `Send + Sync` bounds.
	pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)>
	{
		self.cause.as_deref()
	}

	/// Sets the `detail` member to the formatted message.
	///
	/// Nothing is wrapped, so any previously captured [cause] is dropped. Use [`wrapf()`] to
	/// capture one.
	///
	/// [cause]: ProblemDetails::cause
	/// [`wrapf()`]: ProblemDetails::wrapf
	pub fn errorf(mut self, args: fmt::Arguments<'_>) -> Self
	{
		self.detail = args.to_string();
		self.cause = None;
		self
	}

	/// Captures `cause` and sets the `detail` member to `"{message}: {cause}"`.
	///
	/// If the formatted message is empty, `detail` becomes the cause's message on its own.
	pub fn wrapf(mut self, cause: impl Into<BoxError>, args: fmt::Arguments<'_>) -> Self
	{
		let cause = Arc::<dyn Error + Send + Sync>::from(cause.into());
		let message = args.to_string();

		self.detail = if message.is_empty() {
			cause.to_string()
		} else {
			format!("{message}: {cause}")
		};

		self.cause = Some(cause);
		self
	}

	/// Sets the `detail` member.
	pub fn with_detail(mut self, detail: impl Into<String>) -> Self
	{
		self.detail = detail.into();
		self
	}

	/// Captures `err` as the cause of this problem.
	///
	/// If the `detail` member is still empty, it is initialized with the error's message.
	pub fn with_err(mut self, err: impl Into<BoxError>) -> Self
	{
		let cause = Arc::<dyn Error + Send + Sync>::from(err.into());

		if self.detail.is_empty() {
			self.detail = cause.to_string();
		}

		self.cause = Some(cause);
		self
	}

	/// Overrides the `title` member.
	pub fn with_title(mut self, title: impl Into<String>) -> Self
	{
		self.title = title.into();
		self
	}

	/// Overrides the `type` member.
	pub fn with_type(mut self, problem_type: impl Into<String>) -> Self
	{
		self.problem_type = problem_type.into();
		self
	}

	/// Sets the `instance` member.
	pub fn with_instance(mut self, instance: impl Into<String>) -> Self
	{
		self.instance = instance.into();
		self
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

impl HttpError for ProblemDetails
{
	fn status(&self) -> u16
	{
		self.status
	}
}

impl fmt::Display for ProblemDetails
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		fmt.write_str(&self.title)
	}
}

impl Error for ProblemDetails
{
	fn source(&self) -> Option<&(dyn Error + 'static)>
	{
		self.cause
			.as_deref()
			.map(|cause| cause as &(dyn Error + 'static))
	}
}
