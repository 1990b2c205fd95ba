// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use habit_tracker_shared::messages::ApiErrorBody;
use std::error::Error;
use std::fmt;

/// Errors that can occur when talking to the API
#[derive(Clone, Debug, PartialEq)]
pub enum ApiError {
	/// The server answered with a non-success status
	Response { status: u16, body: ApiErrorBody },
	/// No response was received from the server
	Network(String),
	/// A response was received but couldn't be understood
	InvalidData(String),
}

impl ApiError {
	pub fn not_found(message: &str) -> Self {
		Self::Response {
			status: 404,
			body: ApiErrorBody {
				message: Some(String::from(message)),
				code: Some(String::from("not_found")),
				..Default::default()
			},
		}
	}

	/// The HTTP status, if the server responded at all
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Response { status, .. } => Some(*status),
			Self::Network(_) | Self::InvalidData(_) => None,
		}
	}
}

impl fmt::Display for ApiError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Response { status, body } => write!(f, "The server responded with status {}: {}", status, body),
			Self::Network(error) => write!(f, "Couldn't reach the server: {}", error),
			Self::InvalidData(error) => write!(f, "An invalid response was received: {}", error),
		}
	}
}

impl Error for ApiError {}

impl From<gloo_net::Error> for ApiError {
	fn from(error: gloo_net::Error) -> Self {
		match error {
			gloo_net::Error::SerdeError(error) => Self::InvalidData(error.to_string()),
			other => Self::Network(other.to_string()),
		}
	}
}
