//! Conversions into [`http::Response`], and [`IntoResponse`] implementations.
//!
//! [`IntoResponse`]: https://docs.rs/axum-core/latest/axum_core/response/trait.IntoResponse.html

use {
	crate::{HttpError, Problem, ProblemDetails, ValidationProblem},
	http::StatusCode,
};

/// Builds a response from `problem`.
///
/// If `problem` can't be written, the response is a `500 Internal Server Error` explaining why.
fn to_response<T, B>(problem: &T) -> http::Response<B>
where
	T: HttpError + ?Sized,
	Vec<u8>: Into<B>,
{
	let mut response = http::Response::new(Vec::new());

	if let Err(error) = crate::raw_write(&mut response, problem) {
		warn!(%error, "failed to write problem details; responding with 500");

		response = http::Response::new(Vec::new());

		if let Err(error) = ProblemDetails::new(StatusCode::INTERNAL_SERVER_ERROR.as_u16())
			.with_err(error)
			.write(&mut response)
		{
			warn!(%error, "failed to write fallback problem details");
			*response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
		}
	}

	response.map(Into::into)
}

macro_rules! impl_response_conversions {
	($($problem:ty),* $(,)?) => {
		$(
			impl<B> From<&$problem> for http::Response<B>
			where
				Vec<u8>: Into<B>,
			{
				fn from(problem: &$problem) -> Self
				{
					to_response(problem)
				}
			}

			impl<B> From<$problem> for http::Response<B>
			where
				Vec<u8>: Into<B>,
			{
				fn from(problem: $problem) -> Self
				{
					to_response(&problem)
				}
			}

			#[cfg(feature = "axum")]
			impl axum_core::response::IntoResponse for $problem
			{
				fn into_response(self) -> axum_core::response::Response
				{
					to_response(&self)
				}
			}
		)*
	};
}

impl_response_conversions!(ProblemDetails, ValidationProblem, Problem);
