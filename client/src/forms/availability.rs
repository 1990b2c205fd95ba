use crate::error::ApiError;
use habit_tracker_shared::messages::auth::AvailabilityResponse;
use habit_tracker_shared::validation::{validate_email, validate_username, USERNAME_MIN_LENGTH};

/// Where an availability check stands for one field
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum AsyncStatus {
	#[default]
	Idle,
	Checking,
	Available,
	Taken,
}

/// The registration fields that must be unique on the server
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum CheckedField {
	Username,
	Email,
}

impl CheckedField {
	/// The field name used by the API
	pub fn name(&self) -> &'static str {
		match self {
			Self::Username => "username",
			Self::Email => "email",
		}
	}

	pub fn taken_message(&self) -> &'static str {
		match self {
			Self::Username => "This username is not available",
			Self::Email => "This email is already registered",
		}
	}

	/// Whether a value is complete enough to be worth asking the server about.
	fn is_checkable(&self, value: &str) -> bool {
		match self {
			Self::Username => value.chars().count() >= USERNAME_MIN_LENGTH && validate_username(value).is_ok(),
			Self::Email => !value.is_empty() && validate_email(value).is_ok(),
		}
	}
}

/// One availability request to send to the server
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CheckRequest {
	pub field: CheckedField,
	pub sequence: u64,
	pub value: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CheckOutcome {
	Available,
	Taken,
	/// The request failed; the field went back to idle
	Failed,
	/// A newer check was started after this one, so its answer was ignored
	Stale,
}

/// Tracks availability checks for one field.
///
/// Every transition takes a new sequence number and responses are only accepted for the latest one, so a slow
/// response for an old value can't overwrite the status of the current value.
#[derive(Clone, Debug)]
pub struct AvailabilityCheck {
	field: CheckedField,
	status: AsyncStatus,
	sequence: u64,
}

impl AvailabilityCheck {
	pub fn new(field: CheckedField) -> Self {
		Self {
			field,
			status: AsyncStatus::Idle,
			sequence: 0,
		}
	}

	pub fn field(&self) -> CheckedField {
		self.field
	}

	pub fn status(&self) -> AsyncStatus {
		self.status
	}

	/// Starts a check for a newly debounced value. Returns the request to send, or `None` when the value isn't
	/// worth checking and the field is idle.
	pub fn begin(&mut self, value: &str) -> Option<CheckRequest> {
		self.sequence += 1;
		if !self.field.is_checkable(value) {
			self.status = AsyncStatus::Idle;
			return None;
		}
		self.status = AsyncStatus::Checking;
		Some(CheckRequest {
			field: self.field,
			sequence: self.sequence,
			value: String::from(value),
		})
	}

	pub fn finish(
		&mut self,
		request: &CheckRequest,
		result: Result<AvailabilityResponse, ApiError>,
	) -> CheckOutcome {
		if request.field != self.field || request.sequence != self.sequence {
			log::debug!(
				"Ignoring outdated {} availability response for {:?}",
				self.field.name(),
				request.value
			);
			return CheckOutcome::Stale;
		}

		match result {
			Ok(response) if response.available => {
				self.status = AsyncStatus::Available;
				CheckOutcome::Available
			}
			Ok(_) => {
				self.status = AsyncStatus::Taken;
				CheckOutcome::Taken
			}
			Err(error) => {
				log::warn!("Failed to check {} availability: {}", self.field.name(), error);
				self.status = AsyncStatus::Idle;
				CheckOutcome::Failed
			}
		}
	}

	/// Records that the server rejected the value as taken outside of a check.
	pub fn mark_taken(&mut self) {
		self.sequence += 1;
		self.status = AsyncStatus::Taken;
	}

	pub fn reset(&mut self) {
		self.sequence += 1;
		self.status = AsyncStatus::Idle;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn available(available: bool) -> Result<AvailabilityResponse, ApiError> {
		Ok(AvailabilityResponse { available })
	}

	#[test]
	fn incomplete_usernames_are_not_checked() {
		let mut check = AvailabilityCheck::new(CheckedField::Username);
		for value in ["", "a", "ab", "ab!", "no spaces"] {
			assert_eq!(check.begin(value), None);
			assert_eq!(check.status(), AsyncStatus::Idle);
		}
	}

	#[test]
	fn invalid_emails_are_not_checked() {
		let mut check = AvailabilityCheck::new(CheckedField::Email);
		for value in ["", "fan", "fan@", "fan@example"] {
			assert_eq!(check.begin(value), None);
			assert_eq!(check.status(), AsyncStatus::Idle);
		}
	}

	#[test]
	fn valid_value_starts_checking() {
		let mut check = AvailabilityCheck::new(CheckedField::Username);
		let request = check.begin("habit_fan").unwrap();
		assert_eq!(request.value, "habit_fan");
		assert_eq!(request.field, CheckedField::Username);
		assert_eq!(check.status(), AsyncStatus::Checking);
	}

	#[test]
	fn responses_set_the_status() {
		let mut check = AvailabilityCheck::new(CheckedField::Email);
		let request = check.begin("fan@example.com").unwrap();
		assert_eq!(check.finish(&request, available(true)), CheckOutcome::Available);
		assert_eq!(check.status(), AsyncStatus::Available);

		let request = check.begin("taken@example.com").unwrap();
		assert_eq!(check.finish(&request, available(false)), CheckOutcome::Taken);
		assert_eq!(check.status(), AsyncStatus::Taken);
	}

	#[test]
	fn failures_fall_back_to_idle() {
		let mut check = AvailabilityCheck::new(CheckedField::Username);
		let request = check.begin("habit_fan").unwrap();
		let outcome = check.finish(&request, Err(ApiError::Network(String::from("offline"))));
		assert_eq!(outcome, CheckOutcome::Failed);
		assert_eq!(check.status(), AsyncStatus::Idle);
	}

	#[test]
	fn outdated_responses_are_ignored() {
		let mut check = AvailabilityCheck::new(CheckedField::Username);
		let old_request = check.begin("habit").unwrap();
		let new_request = check.begin("habit_fan").unwrap();

		assert_eq!(check.finish(&old_request, available(false)), CheckOutcome::Stale);
		assert_eq!(check.status(), AsyncStatus::Checking);
		assert_eq!(check.finish(&new_request, available(true)), CheckOutcome::Available);
		assert_eq!(check.status(), AsyncStatus::Available);
	}

	#[test]
	fn response_after_value_became_too_short_is_ignored() {
		let mut check = AvailabilityCheck::new(CheckedField::Username);
		let request = check.begin("habit_fan").unwrap();
		assert_eq!(check.begin("ha"), None);
		assert_eq!(check.finish(&request, available(true)), CheckOutcome::Stale);
		assert_eq!(check.status(), AsyncStatus::Idle);
	}

	#[test]
	fn requests_for_other_fields_are_ignored() {
		let mut username = AvailabilityCheck::new(CheckedField::Username);
		let mut email = AvailabilityCheck::new(CheckedField::Email);
		let email_request = email.begin("fan@example.com").unwrap();
		username.begin("habit_fan");
		assert_eq!(username.finish(&email_request, available(true)), CheckOutcome::Stale);
	}

	#[test]
	fn mark_taken_discards_checks_in_flight() {
		let mut check = AvailabilityCheck::new(CheckedField::Email);
		let request = check.begin("fan@example.com").unwrap();
		check.mark_taken();
		assert_eq!(check.finish(&request, available(true)), CheckOutcome::Stale);
		assert_eq!(check.status(), AsyncStatus::Taken);

		check.reset();
		assert_eq!(check.status(), AsyncStatus::Idle);
	}
}
