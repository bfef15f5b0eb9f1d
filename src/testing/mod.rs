//! Utilities for unit tests.

use serde::de::DeserializeOwned;

mod macros;

#[allow(unused_imports)]
pub(crate) use {
	anyhow::bail,
	macros::{assert, assert_eq, assert_matches},
};

use crate::Recorder;

pub(crate) type Error = anyhow::Error;
pub(crate) type Result<T = (), E = Error> = std::result::Result<T, E>;

/// Decodes the body recorded by `response` as JSON.
pub(crate) fn decode_body<T: DeserializeOwned>(response: &Recorder) -> Result<T>
{
	serde_json::from_slice(response.body()).map_err(Into::into)
}
