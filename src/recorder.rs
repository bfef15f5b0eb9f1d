use {
	crate::ResponseSink,
	bytes::{Bytes, BytesMut},
	http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
	std::io,
};

/// An in-memory [`ResponseSink`].
///
/// This records everything written into it, which is mostly useful in tests and for hosting
/// layers that want to build their own response type afterwards.
#[derive(Debug, Default, Clone)]
pub struct Recorder
{
	status: Option<StatusCode>,
	headers: HeaderMap,
	body: BytesMut,
}

impl Recorder
{
	/// Creates a new, empty [`Recorder`].
	pub fn new() -> Self
	{
		Self::default()
	}

	/// Returns the recorded status, or `200 OK` if none has been set.
	pub fn status(&self) -> StatusCode
	{
		self.status.unwrap_or(StatusCode::OK)
	}

	/// Returns the recorded headers.
	pub fn headers(&self) -> &HeaderMap
	{
		&self.headers
	}

	/// Returns the recorded body.
	pub fn body(&self) -> &[u8]
	{
		&self.body
	}

	/// Returns whether nothing has been written yet.
	pub fn is_untouched(&self) -> bool
	{
		self.status.is_none() && self.headers.is_empty() && self.body.is_empty()
	}

	/// Turns the recording into a response.
	pub fn into_response(self) -> http::Response<Bytes>
	{
		let mut response = http::Response::new(self.body.freeze());

		*response.status_mut() = self.status.unwrap_or(StatusCode::OK);
		*response.headers_mut() = self.headers;

		response
	}
}

impl ResponseSink for Recorder
{
	fn set_header(&mut self, name: HeaderName, value: HeaderValue)
	{
		self.headers.insert(name, value);
	}

	fn set_status(&mut self, status: StatusCode)
	{
		self.status = Some(status);
	}

	fn write_body(&mut self, bytes: &[u8]) -> io::Result<()>
	{
		self.body.extend_from_slice(bytes);
		Ok(())
	}
}

#[cfg(test)]
mod tests
{
	use super::*;
	use crate::testing;

	#[test]
	fn records_everything() -> testing::Result
	{
		let mut recorder = Recorder::new();

		testing::assert!(recorder.is_untouched());
		testing::assert_eq!(recorder.status(), StatusCode::OK);

		recorder.set_status(StatusCode::IM_A_TEAPOT);
		recorder.set_header(http::header::RETRY_AFTER, HeaderValue::from_static("120"));
		recorder.write_body(b"short")?;
		recorder.write_body(b" and stout")?;

		testing::assert!(!recorder.is_untouched());

		let response = recorder.into_response();

		testing::assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
		testing::assert_eq!(
			response.headers().get(http::header::RETRY_AFTER),
			Some(&HeaderValue::from_static("120"))
		);
		testing::assert_eq!(&response.body()[..], b"short and stout");

		Ok(())
	}
}
