use super::{FieldErrors, FormValues};
use std::collections::BTreeSet;

/// Computes the errors for every field of a form. Must be pure and must not panic for any input.
pub type Validator<V> = fn(&V) -> FieldErrors<<V as FormValues>::Field>;

/// Field values, touched fields, and synchronous validation errors for one form
#[derive(Clone)]
pub struct FormState<V: FormValues> {
	initial_values: V,
	values: V,
	errors: FieldErrors<V::Field>,
	touched: BTreeSet<V::Field>,
	validator: Validator<V>,
}

impl<V: FormValues> FormState<V> {
	pub fn new(initial_values: V, validator: Validator<V>) -> Self {
		Self {
			values: initial_values.clone(),
			initial_values,
			errors: FieldErrors::new(),
			touched: BTreeSet::new(),
			validator,
		}
	}

	pub fn values(&self) -> &V {
		&self.values
	}

	pub fn value(&self, field: V::Field) -> &str {
		self.values.value(field)
	}

	pub fn errors(&self) -> &FieldErrors<V::Field> {
		&self.errors
	}

	pub fn error(&self, field: V::Field) -> Option<&str> {
		self.errors.get(&field).map(String::as_str)
	}

	/// The error to show for a field; errors stay hidden until the user has interacted with the field.
	pub fn visible_error(&self, field: V::Field) -> Option<&str> {
		if self.is_touched(field) {
			self.error(field)
		} else {
			None
		}
	}

	pub fn has_errors(&self) -> bool {
		!self.errors.is_empty()
	}

	pub fn is_touched(&self, field: V::Field) -> bool {
		self.touched.contains(&field)
	}

	pub fn handle_change(&mut self, field: V::Field, value: String) {
		self.values.set_value(field, value);
		self.touched.insert(field);
		self.errors = (self.validator)(&self.values);
	}

	pub fn handle_blur(&mut self, field: V::Field) {
		self.touched.insert(field);
	}

	/// Sets an error that didn't come from the validator, such as one reported by the server.
	///
	/// It stays until the next change recomputes the errors.
	pub fn set_field_error(&mut self, field: V::Field, message: impl Into<String>) {
		self.errors.insert(field, message.into());
	}

	/// Runs the validator over the current values and marks every field as touched so all errors show.
	pub fn validate_all(&mut self, fields: &[V::Field]) -> bool {
		self.touched.extend(fields.iter().copied());
		self.errors = (self.validator)(&self.values);
		self.errors.is_empty()
	}

	pub fn reset(&mut self) {
		self.values = self.initial_values.clone();
		self.errors.clear();
		self.touched.clear();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
	enum NoteField {
		Title,
		Body,
	}

	#[derive(Clone, Debug, Default, PartialEq)]
	struct NoteValues {
		title: String,
		body: String,
	}

	impl FormValues for NoteValues {
		type Field = NoteField;

		fn value(&self, field: NoteField) -> &str {
			match field {
				NoteField::Title => &self.title,
				NoteField::Body => &self.body,
			}
		}

		fn set_value(&mut self, field: NoteField, value: String) {
			match field {
				NoteField::Title => self.title = value,
				NoteField::Body => self.body = value,
			}
		}
	}

	fn validate_note(values: &NoteValues) -> FieldErrors<NoteField> {
		let mut errors = FieldErrors::new();
		if values.title.is_empty() {
			errors.insert(NoteField::Title, String::from("required"));
		}
		if values.body.len() > 5 {
			errors.insert(NoteField::Body, String::from("too long"));
		}
		errors
	}

	fn note_form() -> FormState<NoteValues> {
		FormState::new(NoteValues::default(), validate_note)
	}

	#[test]
	fn change_updates_value_and_touches_field() {
		let mut form = note_form();
		assert!(!form.is_touched(NoteField::Title));
		form.handle_change(NoteField::Title, String::from("Plan"));
		assert_eq!(form.value(NoteField::Title), "Plan");
		assert!(form.is_touched(NoteField::Title));
		assert!(!form.is_touched(NoteField::Body));
	}

	#[test]
	fn change_revalidates_every_field() {
		let mut form = note_form();
		form.handle_change(NoteField::Body, String::from("longer than five"));
		assert_eq!(form.error(NoteField::Title), Some("required"));
		assert_eq!(form.error(NoteField::Body), Some("too long"));

		form.handle_change(NoteField::Title, String::from("Plan"));
		form.handle_change(NoteField::Body, String::from("ok"));
		assert!(!form.has_errors());
	}

	#[test]
	fn errors_show_only_for_touched_fields() {
		let mut form = note_form();
		form.handle_change(NoteField::Body, String::from("ok"));
		assert_eq!(form.error(NoteField::Title), Some("required"));
		assert_eq!(form.visible_error(NoteField::Title), None);

		form.handle_blur(NoteField::Title);
		assert_eq!(form.visible_error(NoteField::Title), Some("required"));
	}

	#[test]
	fn blur_does_not_validate() {
		let mut form = note_form();
		form.handle_blur(NoteField::Title);
		assert!(form.is_touched(NoteField::Title));
		assert!(!form.has_errors());
	}

	#[test]
	fn set_field_error_lasts_until_next_change() {
		let mut form = note_form();
		form.handle_change(NoteField::Title, String::from("Plan"));
		form.set_field_error(NoteField::Title, "already used");
		assert_eq!(form.error(NoteField::Title), Some("already used"));

		form.handle_change(NoteField::Body, String::from("hi"));
		assert_eq!(form.error(NoteField::Title), None);
	}

	#[test]
	fn validate_all_touches_listed_fields() {
		let mut form = note_form();
		assert!(!form.validate_all(&[NoteField::Title, NoteField::Body]));
		assert_eq!(form.visible_error(NoteField::Title), Some("required"));
		assert!(form.is_touched(NoteField::Body));
	}

	#[test]
	fn reset_restores_initial_state() {
		let initial = NoteValues {
			title: String::from("Draft"),
			body: String::new(),
		};
		let mut form = FormState::new(initial.clone(), validate_note);
		form.handle_change(NoteField::Title, String::new());
		form.set_field_error(NoteField::Body, "server error");
		form.reset();
		assert_eq!(form.values(), &initial);
		assert!(!form.has_errors());
		assert!(!form.is_touched(NoteField::Title));
	}
}
