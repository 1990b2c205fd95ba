// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Field validation rules for the registration, login, and habit forms.
//!
//! Each validator checks its rules in order (required, then length or format, then content) and reports only the
//! first rule that fails.

use std::error::Error;
use std::fmt;

pub const USERNAME_MIN_LENGTH: usize = 3;
pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const HABIT_TITLE_MIN_LENGTH: usize = 3;
pub const HABIT_TITLE_MAX_LENGTH: usize = 100;
pub const HABIT_DESCRIPTION_MAX_LENGTH: usize = 200;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidationError {
	Required,
	UsernameTooShort,
	InvalidUsername,
	InvalidEmail,
	PasswordTooShort,
	PasswordNeedsUppercase,
	PasswordNeedsLowercase,
	PasswordNeedsNumber,
	PasswordsDoNotMatch,
	TitleTooShort,
	TitleTooLong,
	DescriptionTooLong,
	InvalidCategory,
}

impl fmt::Display for ValidationError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Required => write!(f, "This field is required"),
			Self::UsernameTooShort => write!(f, "Username must be at least {} characters", USERNAME_MIN_LENGTH),
			Self::InvalidUsername => write!(f, "Username may only contain letters, numbers and underscores"),
			Self::InvalidEmail => write!(f, "Invalid email address"),
			Self::PasswordTooShort => write!(f, "Password must be at least {} characters", PASSWORD_MIN_LENGTH),
			Self::PasswordNeedsUppercase => write!(f, "Password must contain at least one uppercase letter"),
			Self::PasswordNeedsLowercase => write!(f, "Password must contain at least one lowercase letter"),
			Self::PasswordNeedsNumber => write!(f, "Password must contain at least one number"),
			Self::PasswordsDoNotMatch => write!(f, "Passwords do not match"),
			Self::TitleTooShort => write!(f, "Title must be at least {} characters", HABIT_TITLE_MIN_LENGTH),
			Self::TitleTooLong => write!(f, "Title cannot exceed {} characters", HABIT_TITLE_MAX_LENGTH),
			Self::DescriptionTooLong => write!(
				f,
				"Description cannot exceed {} characters",
				HABIT_DESCRIPTION_MAX_LENGTH
			),
			Self::InvalidCategory => write!(f, "Choose one of the listed categories"),
		}
	}
}

impl Error for ValidationError {}

pub type ValidationResult = Result<(), ValidationError>;

fn char_count(value: &str) -> usize {
	value.chars().count()
}

pub fn validate_username(username: &str) -> ValidationResult {
	if username.is_empty() {
		return Err(ValidationError::Required);
	}
	if char_count(username) < USERNAME_MIN_LENGTH {
		return Err(ValidationError::UsernameTooShort);
	}
	if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
		return Err(ValidationError::InvalidUsername);
	}
	Ok(())
}

/// Checks for a `local@domain.tld` shape: no whitespace, exactly one `@` with text before it, and a dot in the
/// domain with text on both sides of it.
fn is_email_shaped(email: &str) -> bool {
	if email.chars().any(char::is_whitespace) {
		return false;
	}
	let Some((local, domain)) = email.split_once('@') else {
		return false;
	};
	if local.is_empty() || domain.contains('@') {
		return false;
	}
	let domain_chars: Vec<char> = domain.chars().collect();
	let last = domain_chars.len().saturating_sub(1);
	domain_chars
		.iter()
		.enumerate()
		.any(|(index, c)| *c == '.' && index > 0 && index < last)
}

pub fn validate_email(email: &str) -> ValidationResult {
	if email.is_empty() {
		return Err(ValidationError::Required);
	}
	if !is_email_shaped(email) {
		return Err(ValidationError::InvalidEmail);
	}
	Ok(())
}

pub fn validate_password(password: &str) -> ValidationResult {
	if password.is_empty() {
		return Err(ValidationError::Required);
	}
	if char_count(password) < PASSWORD_MIN_LENGTH {
		return Err(ValidationError::PasswordTooShort);
	}
	if !password.chars().any(|c| c.is_ascii_uppercase()) {
		return Err(ValidationError::PasswordNeedsUppercase);
	}
	if !password.chars().any(|c| c.is_ascii_lowercase()) {
		return Err(ValidationError::PasswordNeedsLowercase);
	}
	if !password.chars().any(|c| c.is_ascii_digit()) {
		return Err(ValidationError::PasswordNeedsNumber);
	}
	Ok(())
}

pub fn validate_confirm_password(password: &str, confirm_password: &str) -> ValidationResult {
	if confirm_password.is_empty() {
		return Err(ValidationError::Required);
	}
	if confirm_password != password {
		return Err(ValidationError::PasswordsDoNotMatch);
	}
	Ok(())
}

pub fn validate_habit_title(title: &str) -> ValidationResult {
	let title = title.trim();
	if title.is_empty() {
		return Err(ValidationError::Required);
	}
	let length = char_count(title);
	if length < HABIT_TITLE_MIN_LENGTH {
		return Err(ValidationError::TitleTooShort);
	}
	if length > HABIT_TITLE_MAX_LENGTH {
		return Err(ValidationError::TitleTooLong);
	}
	Ok(())
}

/// Descriptions are optional, so only the length is checked.
pub fn validate_habit_description(description: &str) -> ValidationResult {
	if char_count(description) > HABIT_DESCRIPTION_MAX_LENGTH {
		return Err(ValidationError::DescriptionTooLong);
	}
	Ok(())
}
