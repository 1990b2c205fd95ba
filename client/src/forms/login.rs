use super::form_state::FormState;
use super::{FieldErrors, FormValues, StateCell};
use crate::api::auth::AuthApi;
use crate::error::ApiError;
use habit_tracker_shared::messages::auth::{AuthResponse, LoginCredentials};
use habit_tracker_shared::validation::{validate_email, ValidationError};

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum LoginField {
	Email,
	Password,
}

impl LoginField {
	pub const ALL: [LoginField; 2] = [Self::Email, Self::Password];
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LoginValues {
	pub email: String,
	pub password: String,
}

impl LoginValues {
	pub fn credentials(&self) -> LoginCredentials {
		LoginCredentials {
			email: self.email.trim().to_lowercase(),
			password: self.password.clone(),
		}
	}
}

impl FormValues for LoginValues {
	type Field = LoginField;

	fn value(&self, field: LoginField) -> &str {
		match field {
			LoginField::Email => &self.email,
			LoginField::Password => &self.password,
		}
	}

	fn set_value(&mut self, field: LoginField, value: String) {
		match field {
			LoginField::Email => self.email = value,
			LoginField::Password => self.password = value,
		}
	}
}

/// Password strength isn't checked here; accounts made under older rules still need to log in.
pub fn validate_login_form(values: &LoginValues) -> FieldErrors<LoginField> {
	let mut errors = FieldErrors::new();
	if let Err(error) = validate_email(&values.email) {
		errors.insert(LoginField::Email, error.to_string());
	}
	if values.password.is_empty() {
		errors.insert(LoginField::Password, ValidationError::Required.to_string());
	}
	errors
}

/// The message to show when a login attempt fails.
pub fn login_error_message(error: &ApiError) -> &'static str {
	match error {
		ApiError::Response { status: 400 | 401, .. } => "Incorrect email or password",
		ApiError::Response { status: 422, .. } => "Invalid data. Please check the fields.",
		ApiError::Response { .. } => "Login failed. Please try again.",
		ApiError::Network(_) => "Could not connect to the server",
		ApiError::InvalidData(_) => "An unexpected error occurred",
	}
}

pub fn new_login_form() -> FormState<LoginValues> {
	FormState::new(LoginValues::default(), validate_login_form)
}

/// Why a login attempt didn't sign the user in
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoginFailure {
	/// Some fields failed validation, so nothing was sent
	InvalidForm,
	/// The server refused the credentials or couldn't be reached
	Rejected(&'static str),
}

/// Sends the form's credentials. Every field is touched first so the reasons for an invalid form are shown.
pub async fn handle_login<C, A>(cell: &C, api: &A) -> Result<AuthResponse, LoginFailure>
where
	C: StateCell<FormState<LoginValues>> + ?Sized,
	A: AuthApi + ?Sized,
{
	let credentials = cell.update(|form| {
		if form.validate_all(&LoginField::ALL) {
			Some(form.values().credentials())
		} else {
			None
		}
	});
	let Some(credentials) = credentials else {
		return Err(LoginFailure::InvalidForm);
	};

	match api.login(&credentials).await {
		Ok(response) => {
			cell.update(|form| form.reset());
			Ok(response)
		}
		Err(error) => {
			log::error!("Login failed: {}", error);
			Err(LoginFailure::Rejected(login_error_message(&error)))
		}
	}
}
