//! The status catalog.
//!
//! Maps HTTP status codes in the 4xx and 5xx ranges to their canonical titles, which are used to
//! populate the [`title`] member of new [`ProblemDetails`].
//!
//! [`title`]: https://www.rfc-editor.org/rfc/rfc7807.html#section-3.1
//! [`ProblemDetails`]: crate::ProblemDetails

use http::StatusCode;

/// Titles for every status code registered with IANA in the 4xx and 5xx ranges.
///
/// See <https://www.iana.org/assignments/http-status-codes/http-status-codes.xhtml>.
pub const REGISTERED: &[(StatusCode, &str)] = &[
	(StatusCode::BAD_REQUEST, "Bad Request"),
	(StatusCode::UNAUTHORIZED, "Unauthorized"),
	(StatusCode::PAYMENT_REQUIRED, "Payment Required"),
	(StatusCode::FORBIDDEN, "Forbidden"),
	(StatusCode::NOT_FOUND, "Not Found"),
	(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed"),
	(StatusCode::NOT_ACCEPTABLE, "Not Acceptable"),
	(StatusCode::PROXY_AUTHENTICATION_REQUIRED, "Proxy Authentication Required"),
	(StatusCode::REQUEST_TIMEOUT, "Request Timeout"),
	(StatusCode::CONFLICT, "Conflict"),
	(StatusCode::GONE, "Gone"),
	(StatusCode::LENGTH_REQUIRED, "Length Required"),
	(StatusCode::PRECONDITION_FAILED, "Precondition Failed"),
	(StatusCode::PAYLOAD_TOO_LARGE, "Payload Too Large"),
	(StatusCode::URI_TOO_LONG, "URI Too Long"),
	(StatusCode::UNSUPPORTED_MEDIA_TYPE, "Unsupported Media Type"),
	(StatusCode::RANGE_NOT_SATISFIABLE, "Range Not Satisfiable"),
	(StatusCode::EXPECTATION_FAILED, "Expectation Failed"),
	// RFC 2324
	(StatusCode::IM_A_TEAPOT, "I'm a teapot"),
	(StatusCode::MISDIRECTED_REQUEST, "Misdirected Request"),
	(StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable Entity"),
	(StatusCode::LOCKED, "Locked"),
	(StatusCode::FAILED_DEPENDENCY, "Failed Dependency"),
	(StatusCode::TOO_EARLY, "Too Early"),
	(StatusCode::UPGRADE_REQUIRED, "Upgrade Required"),
	(StatusCode::PRECONDITION_REQUIRED, "Precondition Required"),
	(StatusCode::TOO_MANY_REQUESTS, "Too Many Requests"),
	(StatusCode::REQUEST_HEADER_FIELDS_TOO_LARGE, "Request Header Fields Too Large"),
	(StatusCode::UNAVAILABLE_FOR_LEGAL_REASONS, "Unavailable For Legal Reasons"),
	(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
	(StatusCode::NOT_IMPLEMENTED, "Not Implemented"),
	(StatusCode::BAD_GATEWAY, "Bad Gateway"),
	(StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable"),
	(StatusCode::GATEWAY_TIMEOUT, "Gateway Timeout"),
	(StatusCode::HTTP_VERSION_NOT_SUPPORTED, "HTTP Version Not Supported"),
	(StatusCode::VARIANT_ALSO_NEGOTIATES, "Variant Also Negotiates"),
	(StatusCode::INSUFFICIENT_STORAGE, "Insufficient Storage"),
	(StatusCode::LOOP_DETECTED, "Loop Detected"),
	(StatusCode::NOT_EXTENDED, "Not Extended"),
	(StatusCode::NETWORK_AUTHENTICATION_REQUIRED, "Network Authentication Required"),
];

/// nginx's "Client Closed Request".
pub const CLIENT_CLOSED_REQUEST: u16 = 499;

/// The "Network Connect Timeout" used by some proxies.
pub const NETWORK_CONNECT_TIMEOUT: u16 = 599;

/// Titles for status codes that are in common operational use but not registered with IANA.
pub const INFORMAL: &[(u16, &str)] = &[
	(CLIENT_CLOSED_REQUEST, "Client Closed Request"),
	(NETWORK_CONNECT_TIMEOUT, "Network Connect Timeout"),
];

/// The base URI used for default [`type`] members if none has been [configured].
///
/// [`type`]: https://www.rfc-editor.org/rfc/rfc7807.html#section-3.1
/// [configured]: crate::Config
pub const DEFAULT_TYPE_BASE_URI: &str = "https://httpstatuses.com/";

/// Returns the canonical title for the given `status`.
///
/// Returns an empty string for codes the catalog doesn't know about.
pub fn title_for(status: u16) -> &'static str
{
	REGISTERED
		.iter()
		.find(|(code, _)| code.as_u16() == status)
		.map(|&(_, title)| title)
		.or_else(|| {
			INFORMAL
				.iter()
				.find(|&&(code, _)| code == status)
				.map(|&(_, title)| title)
		})
		.unwrap_or_default()
}

/// Returns the default [`type`] URI for the given `status`.
///
/// This is `{base}{status}`, where `{base}` is either the [configured] base URI or
/// [`DEFAULT_TYPE_BASE_URI`]. Unlike [`title_for()`], this works for any status code.
///
/// [`type`]: https://www.rfc-editor.org/rfc/rfc7807.html#section-3.1
/// [configured]: crate::Config
pub fn type_for(status: u16) -> String
{
	format!("{}{status}", crate::config::type_base_uri())
}

/// Returns whether `status` is one of the [informal] codes in the catalog.
///
/// [informal]: INFORMAL
pub fn is_informal(status: u16) -> bool
{
	INFORMAL.iter().any(|&(code, _)| code == status)
}

/// Returns an iterator over every `(status, title)` pair in the catalog.
///
/// Registered codes come first, followed by the [informal] ones.
///
/// [informal]: INFORMAL
pub fn iter() -> impl Iterator<Item = (u16, &'static str)>
{
	REGISTERED
		.iter()
		.map(|&(code, title)| (code.as_u16(), title))
		.chain(INFORMAL.iter().copied())
}

#[cfg(test)]
mod tests
{
	use std::collections::HashMap;

	use super::*;
	use crate::testing;

	fn is_title_case(title: &str) -> bool
	{
		title
			.split(' ')
			.all(|word| word.chars().next().is_some_and(char::is_uppercase))
	}

	#[test]
	fn titles_and_types_are_unique() -> testing::Result
	{
		let mut titles = HashMap::new();
		let mut types = HashMap::new();

		for status in 400..=599 {
			let title = title_for(status);

			if title.is_empty() {
				continue;
			}

			if let Some(previous) = titles.insert(title, status) {
				testing::bail!("got title {title:?} twice, for {previous} and {status}");
			}

			let problem_type = type_for(status);
			url::Url::parse(&problem_type)?;

			if let Some(previous) = types.insert(problem_type.clone(), status) {
				testing::bail!("got type {problem_type:?} twice, for {previous} and {status}");
			}
		}

		testing::assert_eq!(titles.len(), REGISTERED.len() + INFORMAL.len());

		Ok(())
	}

	#[test]
	fn titles_are_title_case() -> testing::Result
	{
		for (status, title) in iter() {
			if status == StatusCode::IM_A_TEAPOT.as_u16() {
				testing::assert_eq!(title, "I'm a teapot");
				continue;
			}

			testing::assert!(is_title_case(title), "{status} has title {title:?}");
		}

		Ok(())
	}

	#[test]
	fn informal_codes_are_separate() -> testing::Result
	{
		testing::assert!(is_informal(CLIENT_CLOSED_REQUEST));
		testing::assert!(is_informal(NETWORK_CONNECT_TIMEOUT));
		testing::assert!(!is_informal(500));

		for &(code, _) in INFORMAL {
			testing::assert!(REGISTERED.iter().all(|(registered, _)| registered.as_u16() != code));
		}

		testing::assert_eq!(title_for(499), "Client Closed Request");
		testing::assert_eq!(title_for(599), "Network Connect Timeout");

		Ok(())
	}

	#[test]
	fn unknown_codes_have_no_title() -> testing::Result
	{
		testing::assert_eq!(title_for(0), "");
		testing::assert_eq!(title_for(200), "");
		testing::assert_eq!(title_for(420), "");
		testing::assert_eq!(type_for(420), "https://httpstatuses.com/420");

		Ok(())
	}
}
