// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::availability::{AsyncStatus, AvailabilityCheck, CheckOutcome, CheckRequest, CheckedField};
use super::form_state::FormState;
use super::{FieldErrors, FormValues, StateCell};
use crate::api::auth::AuthApi;
use crate::error::ApiError;
use habit_tracker_shared::messages::auth::{AvailabilityResponse, RegisterPayload, RegisterResponse};
use habit_tracker_shared::messages::ApiErrorBody;
use habit_tracker_shared::validation::{
	validate_confirm_password, validate_email, validate_password, validate_username,
};
use std::fmt;

const INVALID_DATA_MESSAGE: &str = "Invalid data. Please check the fields.";
const BAD_REQUEST_MESSAGE: &str = "There was a problem with the submitted data.";
const CONFLICT_MESSAGE: &str = "An account with these details already exists.";
const RETRY_MESSAGE: &str = "Registration failed. Please try again.";
const CONNECTION_MESSAGE: &str = "Could not connect to the server";
const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred";

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum RegisterField {
	Email,
	Username,
	Password,
	ConfirmPassword,
}

impl RegisterField {
	pub const ALL: [RegisterField; 4] = [Self::Email, Self::Username, Self::Password, Self::ConfirmPassword];
}

impl From<CheckedField> for RegisterField {
	fn from(field: CheckedField) -> Self {
		match field {
			CheckedField::Username => Self::Username,
			CheckedField::Email => Self::Email,
		}
	}
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RegisterValues {
	pub email: String,
	pub username: String,
	pub password: String,
	pub confirm_password: String,
}

impl FormValues for RegisterValues {
	type Field = RegisterField;

	fn value(&self, field: RegisterField) -> &str {
		match field {
			RegisterField::Email => &self.email,
			RegisterField::Username => &self.username,
			RegisterField::Password => &self.password,
			RegisterField::ConfirmPassword => &self.confirm_password,
		}
	}

	fn set_value(&mut self, field: RegisterField, value: String) {
		match field {
			RegisterField::Email => self.email = value,
			RegisterField::Username => self.username = value,
			RegisterField::Password => self.password = value,
			RegisterField::ConfirmPassword => self.confirm_password = value,
		}
	}
}

pub fn validate_register_form(values: &RegisterValues) -> FieldErrors<RegisterField> {
	let results = [
		(RegisterField::Username, validate_username(&values.username)),
		(RegisterField::Email, validate_email(&values.email)),
		(RegisterField::Password, validate_password(&values.password)),
		(
			RegisterField::ConfirmPassword,
			validate_confirm_password(&values.password, &values.confirm_password),
		),
	];
	results
		.into_iter()
		.filter_map(|(field, result)| result.err().map(|error| (field, error.to_string())))
		.collect()
}

/// Why a registration attempt didn't create an account
#[derive(Clone, Debug, PartialEq)]
pub enum RegisterFailure {
	/// The form wasn't ready to submit, so nothing was sent
	InvalidForm,
	/// The server refused the registration or couldn't be reached
	Rejected(ApiError),
}

impl fmt::Display for RegisterFailure {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::InvalidForm => write!(f, "The registration form is incomplete or invalid"),
			Self::Rejected(error) => write!(f, "{}", error),
		}
	}
}

/// All state behind the registration page: field values and errors, the username and email availability checks,
/// and whether a submission is in flight.
#[derive(Clone)]
pub struct RegisterForm {
	form: FormState<RegisterValues>,
	username_check: AvailabilityCheck,
	email_check: AvailabilityCheck,
	submitting: bool,
}

impl Default for RegisterForm {
	fn default() -> Self {
		Self::new()
	}
}

impl RegisterForm {
	pub fn new() -> Self {
		Self {
			form: FormState::new(RegisterValues::default(), validate_register_form),
			username_check: AvailabilityCheck::new(CheckedField::Username),
			email_check: AvailabilityCheck::new(CheckedField::Email),
			submitting: false,
		}
	}

	pub fn form(&self) -> &FormState<RegisterValues> {
		&self.form
	}

	pub fn values(&self) -> &RegisterValues {
		self.form.values()
	}

	pub fn handle_change(&mut self, field: RegisterField, value: String) {
		self.form.handle_change(field, value);
	}

	pub fn handle_blur(&mut self, field: RegisterField) {
		self.form.handle_blur(field);
	}

	pub fn status(&self, field: CheckedField) -> AsyncStatus {
		self.check(field).status()
	}

	pub fn is_submitting(&self) -> bool {
		self.submitting
	}

	fn check(&self, field: CheckedField) -> &AvailabilityCheck {
		match field {
			CheckedField::Username => &self.username_check,
			CheckedField::Email => &self.email_check,
		}
	}

	fn check_mut(&mut self, field: CheckedField) -> &mut AvailabilityCheck {
		match field {
			CheckedField::Username => &mut self.username_check,
			CheckedField::Email => &mut self.email_check,
		}
	}

	pub fn can_submit(&self) -> bool {
		let all_fields_filled = RegisterField::ALL
			.iter()
			.all(|field| !self.form.value(*field).is_empty());
		!self.form.has_errors()
			&& all_fields_filled
			&& self.username_check.status() == AsyncStatus::Available
			&& self.email_check.status() == AsyncStatus::Available
			&& !self.submitting
	}

	/// Starts an availability check for a field's newly debounced value.
	pub fn begin_check(&mut self, field: CheckedField, debounced_value: &str) -> Option<CheckRequest> {
		self.check_mut(field).begin(debounced_value)
	}

	pub fn finish_check(
		&mut self,
		request: &CheckRequest,
		result: Result<AvailabilityResponse, ApiError>,
	) -> CheckOutcome {
		let outcome = self.check_mut(request.field).finish(request, result);
		if outcome == CheckOutcome::Taken {
			self.form
				.set_field_error(request.field.into(), request.field.taken_message());
		}
		outcome
	}

	/// Marks the form as submitting and builds the payload, or refuses if the form can't be submitted yet.
	pub fn begin_submit(&mut self) -> Result<RegisterPayload, RegisterFailure> {
		if !self.can_submit() {
			return Err(RegisterFailure::InvalidForm);
		}
		self.submitting = true;

		let values = self.form.values();
		Ok(RegisterPayload {
			username: String::from(values.username.trim()),
			email: values.email.trim().to_lowercase(),
			password: values.password.clone(),
		})
	}

	/// Applies the server's answer to a submission. Always ends the submission.
	pub fn finish_submit(
		&mut self,
		result: Result<RegisterResponse, ApiError>,
	) -> Result<RegisterResponse, RegisterFailure> {
		self.submitting = false;
		match result {
			Ok(response) => {
				self.form.reset();
				self.username_check.reset();
				self.email_check.reset();
				Ok(response)
			}
			Err(error) => {
				self.apply_submit_error(&error);
				Err(RegisterFailure::Rejected(error))
			}
		}
	}

	fn mark_taken(&mut self, field: CheckedField) {
		self.form.set_field_error(field.into(), field.taken_message());
		self.check_mut(field).mark_taken();
	}

	fn apply_submit_error(&mut self, error: &ApiError) {
		let message = match error {
			ApiError::Response { status: 409, body } => {
				let fields = conflicting_fields(body);
				if !fields.is_empty() {
					for field in fields {
						self.mark_taken(field);
					}
					return;
				}
				body.best_message().unwrap_or(CONFLICT_MESSAGE).to_owned()
			}
			ApiError::Response { status: 422, .. } => String::from(INVALID_DATA_MESSAGE),
			ApiError::Response { status: 400, body } => body
				.detail
				.clone()
				.filter(|detail| !detail.is_empty())
				.unwrap_or_else(|| String::from(BAD_REQUEST_MESSAGE)),
			ApiError::Response { .. } => String::from(RETRY_MESSAGE),
			ApiError::Network(_) => String::from(CONNECTION_MESSAGE),
			ApiError::InvalidData(_) => String::from(UNEXPECTED_MESSAGE),
		};
		self.form.set_field_error(RegisterField::Email, message);
	}
}

/// Works out which unique fields a conflict response is about.
///
/// The structured `details` map is preferred. Older servers only describe the conflict in `detail`, so as a
/// fallback that text is searched for the field names, email first.
fn conflicting_fields(body: &ApiErrorBody) -> Vec<CheckedField> {
	let structured: Vec<CheckedField> = [CheckedField::Email, CheckedField::Username]
		.into_iter()
		.filter(|field| body.has_details_for(field.name()))
		.collect();
	if !structured.is_empty() {
		return structured;
	}

	let detail = body.detail.as_deref().unwrap_or_default().to_lowercase();
	[CheckedField::Email, CheckedField::Username]
		.into_iter()
		.find(|field| detail.contains(field.name()))
		.into_iter()
		.collect()
}

/// Runs an availability check for a debounced value against the API and records the result.
///
/// Returns `None` when the value wasn't worth checking.
pub async fn check_availability<C, A>(cell: &C, api: &A, field: CheckedField, value: String) -> Option<CheckOutcome>
where
	C: StateCell<RegisterForm> + ?Sized,
	A: AuthApi + ?Sized,
{
	let request = cell.update(|form| form.begin_check(field, &value))?;
	let result = match field {
		CheckedField::Username => api.check_username(&request.value).await,
		CheckedField::Email => api.check_email(&request.value).await,
	};
	Some(cell.update(|form| form.finish_check(&request, result)))
}

/// Submits the registration form.
pub async fn handle_register<C, A>(cell: &C, api: &A) -> Result<RegisterResponse, RegisterFailure>
where
	C: StateCell<RegisterForm> + ?Sized,
	A: AuthApi + ?Sized,
{
	let payload = match cell.update(RegisterForm::begin_submit) {
		Ok(payload) => payload,
		Err(failure) => {
			log::warn!("Registration form isn't ready to submit");
			return Err(failure);
		}
	};

	let result = api.register(&payload).await;
	if let Err(error) = result.as_ref() {
		log::error!("Registration failed: {}", error);
	}
	cell.update(|form| form.finish_submit(result))
}
