use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct User {
	pub id: String,
	pub email: String,
	pub name: String,
}

/// Data from the client when trying to log in
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct LoginCredentials {
	pub email: String,
	pub password: String,
}

/// Response data from the server for a successful login
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AuthResponse {
	pub user: User,
	pub token: String,
}

/// Data from the client when trying to register an account.
///
/// The password confirmation is a client-side concern and is never part of the payload.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RegisterPayload {
	pub username: String,
	pub email: String,
	pub password: String,
}

/// Response data from the server for a full registration attempt
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RegisterResponse {
	pub id: String,
	pub email: String,
	pub username: String,
	pub created_at: DateTime<Utc>,
}

/// Response data from the server for a username or email check
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AvailabilityResponse {
	pub available: bool,
}
