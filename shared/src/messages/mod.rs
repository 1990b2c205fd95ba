// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub mod auth;
pub mod habits;

const GENERIC_REQUEST_FAILURE: &str = "The request failed";

/// Error body sent by the API alongside any non-success status
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ApiErrorBody {
	#[serde(default)]
	pub message: Option<String>,
	#[serde(default)]
	pub code: Option<String>,
	#[serde(default)]
	pub detail: Option<String>,
	/// Messages keyed by the name of the field they apply to
	#[serde(default)]
	pub details: Option<BTreeMap<String, Vec<String>>>,
}

impl ApiErrorBody {
	/// The body used when the server's response couldn't be read as an error body.
	pub fn generic() -> Self {
		Self {
			message: Some(String::from(GENERIC_REQUEST_FAILURE)),
			..Default::default()
		}
	}

	/// Whether the structured details carry any message for the given field.
	pub fn has_details_for(&self, field: &str) -> bool {
		self.details
			.as_ref()
			.and_then(|details| details.get(field))
			.is_some_and(|messages| !messages.is_empty())
	}

	/// The most specific human-readable text available in the body.
	pub fn best_message(&self) -> Option<&str> {
		self.detail
			.as_deref()
			.filter(|detail| !detail.is_empty())
			.or_else(|| self.message.as_deref().filter(|message| !message.is_empty()))
	}
}

impl fmt::Display for ApiErrorBody {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match (self.best_message(), self.code.as_ref()) {
			(Some(message), Some(code)) => write!(f, "{} ({})", message, code),
			(Some(message), None) => write!(f, "{}", message),
			(None, Some(code)) => write!(f, "{}", code),
			(None, None) => write!(f, "{}", GENERIC_REQUEST_FAILURE),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn error_body_reads_partial_json() {
		let body: ApiErrorBody =
			serde_json::from_str(r#"{"detail": "Username already registered", "details": {"username": ["taken"]}}"#)
				.unwrap();
		assert_eq!(body.detail.as_deref(), Some("Username already registered"));
		assert!(body.message.is_none());
		assert!(body.has_details_for("username"));
		assert!(!body.has_details_for("email"));
	}

	#[test]
	fn empty_detail_lists_do_not_count() {
		let body: ApiErrorBody = serde_json::from_str(r#"{"details": {"email": []}}"#).unwrap();
		assert!(!body.has_details_for("email"));
	}

	#[test]
	fn best_message_prefers_detail() {
		let body = ApiErrorBody {
			message: Some(String::from("Conflict")),
			detail: Some(String::from("email already exists")),
			..Default::default()
		};
		assert_eq!(body.best_message(), Some("email already exists"));

		let body = ApiErrorBody {
			message: Some(String::from("Conflict")),
			detail: Some(String::new()),
			..Default::default()
		};
		assert_eq!(body.best_message(), Some("Conflict"));
		assert_eq!(ApiErrorBody::default().best_message(), None);
	}

	#[test]
	fn display_includes_code() {
		let body = ApiErrorBody {
			message: Some(String::from("Not found")),
			code: Some(String::from("not_found")),
			..Default::default()
		};
		assert_eq!(body.to_string(), "Not found (not_found)");
		assert_eq!(ApiErrorBody::generic().to_string(), GENERIC_REQUEST_FAILURE);
	}
}
