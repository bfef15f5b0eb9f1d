//! Writing problem details into HTTP responses.
//!
//! [`raw_write()`] is the primitive everything else builds on: it writes any [`HttpError`] into a
//! [`ResponseSink`]. [`dispatch()`] and [`must_dispatch()`] accept opaque errors, as they come out
//! of request handlers, and decide what to do with them.

pub use self::sink::ResponseSink;
use {
	crate::{BoxError, HttpError, ProblemDetails, http_error::as_http_error},
	http::{HeaderValue, StatusCode, header},
	std::{fmt, io},
};

mod response;
mod sink;

/// Errors that can occur when writing problem details into a [`ResponseSink`].
///
/// The sink is left untouched if either the status or the body are invalid.
#[derive(Debug, Error)]
pub enum WriteError
{
	/// The problem's status can't be used as an HTTP status code.
	#[error("`{0}` is not a valid HTTP status code")]
	InvalidStatus(u16),

	/// The problem could not be serialized.
	#[error("failed to serialize problem details")]
	Serialize(#[from] serde_json::Error),

	/// The sink rejected the body.
	#[error("failed to write response body")]
	Io(#[from] io::Error),
}

/// Errors returned by [`dispatch()`].
#[derive(Debug, Error)]
pub enum DispatchError
{
	/// The error does not have an HTTP status and was not written.
	///
	/// This is the exact error passed to [`dispatch()`].
	#[error("{0}")]
	Unhandled(BoxError),

	/// The error has an HTTP status, but writing it failed.
	#[error(transparent)]
	Write(#[from] WriteError),
}

impl DispatchError
{
	/// Returns the unhandled error, if this is [`DispatchError::Unhandled`].
	pub fn into_unhandled(self) -> Option<BoxError>
	{
		match self {
			Self::Unhandled(error) => Some(error),
			Self::Write(_) => None,
		}
	}
}

/// Writes `problem` into `sink`.
///
/// This sets the `Content-Type` header to [`application/problem+json`], sets the response status
/// to the problem's [status], and writes the problem as JSON into the body.
///
/// The JSON is encoded before anything is written, so if this returns an error, `sink` has not
/// been modified. Calling this more than once for the same response is a logic error.
///
/// [`application/problem+json`]: crate::CONTENT_TYPE
/// [status]: HttpError::status
pub fn raw_write<S, T>(sink: &mut S, problem: &T) -> Result<(), WriteError>
where
	S: ResponseSink + ?Sized,
	T: HttpError + ?Sized,
{
	let status = problem.status();
	let body = serde_json::to_vec(problem)?;

	commit(sink, status, &body)
}

fn commit<S>(sink: &mut S, status: u16, body: &[u8]) -> Result<(), WriteError>
where
	S: ResponseSink + ?Sized,
{
	let status = StatusCode::from_u16(status).map_err(|_| WriteError::InvalidStatus(status))?;

	sink.set_header(header::CONTENT_TYPE, HeaderValue::from_static(crate::CONTENT_TYPE));
	sink.set_status(status);
	sink.write_body(body)?;

	trace!(%status, bytes = body.len(), "wrote problem details");

	Ok(())
}

/// Writes `error` into `sink` if it has an HTTP status.
///
/// | `error`                 | effect          | returns                          |
/// |-------------------------|-----------------|----------------------------------|
/// | `None`                  | none            | `Ok(())`                         |
/// | a structured problem    | [`raw_write()`] | `Ok(())`                         |
/// | any other error         | none            | [`DispatchError::Unhandled`]     |
///
/// Structured problems are [`ProblemDetails`], [`ValidationProblem`]s, and anything wrapped in a
/// [`Problem`].
///
/// [`ValidationProblem`]: crate::ValidationProblem
/// [`Problem`]: crate::Problem
pub fn dispatch<S>(sink: &mut S, error: Option<BoxError>) -> Result<(), DispatchError>
where
	S: ResponseSink + ?Sized,
{
	let Some(error) = error else {
		return Ok(());
	};

	let Some(problem) = as_http_error(&*error) else {
		trace!(%error, "error has no HTTP status");
		return Err(DispatchError::Unhandled(error));
	};

	let body = problem.to_json_vec().map_err(WriteError::Serialize)?;

	commit(sink, problem.erased_status(), &body).map_err(DispatchError::Write)
}

/// Like [`dispatch()`], but errors without an HTTP status are written as
/// `500 Internal Server Error`.
///
/// The error becomes the [cause] of the new problem, and its message becomes the `detail`. The
/// same happens to the [`WriteError`] if a structured problem has an invalid status or can't be
/// encoded. If `error` is `None`, nothing is written; handling a successful request is up to the
/// caller.
///
/// An I/O error from the sink is returned as-is, since the sink has already been modified.
///
/// [cause]: ProblemDetails::cause
pub fn must_dispatch<S>(sink: &mut S, error: Option<BoxError>) -> Result<(), WriteError>
where
	S: ResponseSink + ?Sized,
{
	let error = match dispatch(sink, error) {
		Ok(()) => return Ok(()),
		Err(DispatchError::Write(error @ WriteError::Io(_))) => return Err(error),
		Err(DispatchError::Write(error)) => {
			debug!(%error, "failed to write problem details; responding with 500");
			BoxError::from(error)
		},
		Err(DispatchError::Unhandled(error)) => {
			debug!(%error, "responding with 500 to error without HTTP status");
			error
		},
	};

	ProblemDetails::new(StatusCode::INTERNAL_SERVER_ERROR.as_u16())
		.with_err(error)
		.write(sink)
}

/// Creates a new [`ProblemDetails`] with the given status and detail message.
///
/// See also the [`reportf!`] macro.
///
/// [`reportf!`]: crate::reportf!
pub fn reportf(status: u16, args: fmt::Arguments<'_>) -> ProblemDetails
{
	ProblemDetails::new(status).errorf(args)
}

/// Writes a new [`ProblemDetails`] with the given detail message and status into `sink`.
pub fn report_error<S>(sink: &mut S, detail: &str, status: u16) -> Result<(), WriteError>
where
	S: ResponseSink + ?Sized,
{
	ProblemDetails::new(status).with_detail(detail).write(sink)
}
