use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::session::bearer_header;
use gloo_net::http::{RequestBuilder, Response};
use habit_tracker_shared::messages::ApiErrorBody;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod auth;
pub mod habits;
pub mod memory;

/// Sends requests to the API, attaching the session token when one is stored.
#[derive(Clone, Debug)]
pub struct HttpClient {
	base_url: String,
}

impl HttpClient {
	pub fn new(config: &ClientConfig) -> Self {
		Self {
			base_url: String::from(config.api_url.trim_end_matches('/')),
		}
	}

	pub fn url(&self, path: &str) -> String {
		format!("{}{}", self.base_url, path)
	}

	fn authorize(builder: RequestBuilder) -> RequestBuilder {
		match bearer_header() {
			Some(header) => builder.header("Authorization", &header),
			None => builder,
		}
	}

	/// Sends a request with no body and reads the JSON response.
	pub async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
		let response = Self::authorize(builder).send().await?;
		read_response(response).await
	}

	/// Sends a request with a JSON body and reads the JSON response.
	pub async fn send_json<B: Serialize, T: DeserializeOwned>(
		&self,
		builder: RequestBuilder,
		body: &B,
	) -> Result<T, ApiError> {
		let request = Self::authorize(builder).json(body)?;
		let response = request.send().await?;
		read_response(response).await
	}

	/// Sends a request whose success response has no body worth reading.
	pub async fn send_empty(&self, builder: RequestBuilder) -> Result<(), ApiError> {
		let response = Self::authorize(builder).send().await?;
		if !response.ok() {
			return Err(error_from_response(response).await);
		}
		Ok(())
	}
}

async fn error_from_response(response: Response) -> ApiError {
	let status = response.status();
	let body = response
		.json::<ApiErrorBody>()
		.await
		.unwrap_or_else(|_| ApiErrorBody::generic());
	ApiError::Response { status, body }
}

/// Reads a response, turning any non-success status into an error carrying the server's error body.
async fn read_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
	if !response.ok() {
		return Err(error_from_response(response).await);
	}
	Ok(response.json().await?)
}

/// Encodes a value for use as a single URL path segment.
pub fn path_segment(value: &str) -> String {
	String::from(js_sys::encode_uri_component(value))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::parse_config;

	#[test]
	fn urls_join_without_double_slashes() {
		let config = parse_config("api-url \"http://localhost:8000/\"").unwrap();
		let client = HttpClient::new(&config);
		assert_eq!(client.url("/habits/3"), "http://localhost:8000/habits/3");
	}
}
