use {
	http::{HeaderName, HeaderValue, StatusCode},
	std::io,
};

/// The part of an HTTP response that problem details are written into.
///
/// This is whatever the hosting HTTP layer provides; implementations exist for
/// [`http::Response<Vec<u8>>`] and for the in-memory [`Recorder`].
///
/// Writing into the same sink more than once is a logic error, but it is not detected.
///
/// [`Recorder`]: crate::Recorder
pub trait ResponseSink
{
	/// Sets the header `name` to `value`, replacing any previous value.
	fn set_header(&mut self, name: HeaderName, value: HeaderValue);

	/// Sets the response status.
	fn set_status(&mut self, status: StatusCode);

	/// Appends `bytes` to the response body.
	fn write_body(&mut self, bytes: &[u8]) -> io::Result<()>;
}

impl<T> ResponseSink for &mut T
where
	T: ResponseSink + ?Sized,
{
	fn set_header(&mut self, name: HeaderName, value: HeaderValue)
	{
		(**self).set_header(name, value);
	}

	fn set_status(&mut self, status: StatusCode)
	{
		(**self).set_status(status);
	}

	fn write_body(&mut self, bytes: &[u8]) -> io::Result<()>
	{
		(**self).write_body(bytes)
	}
}

impl ResponseSink for http::Response<Vec<u8>>
{
	fn set_header(&mut self, name: HeaderName, value: HeaderValue)
	{
		self.headers_mut().insert(name, value);
	}

	fn set_status(&mut self, status: StatusCode)
	{
		*self.status_mut() = status;
	}

	fn write_body(&mut self, bytes: &[u8]) -> io::Result<()>
	{
		self.body_mut().extend_from_slice(bytes);
		Ok(())
	}
}
