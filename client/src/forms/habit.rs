use super::form_state::FormState;
use super::{FieldErrors, FormValues, StateCell};
use crate::api::habits::HabitStore;
use crate::error::ApiError;
use habit_tracker_shared::messages::habits::{Habit, HabitCategory, NewHabit};
use habit_tracker_shared::validation::{validate_habit_description, validate_habit_title, ValidationError};

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum HabitField {
	Title,
	Description,
	Category,
}

impl HabitField {
	pub const ALL: [HabitField; 3] = [Self::Title, Self::Description, Self::Category];
}

/// Text fields of the new habit form. The category holds the category's wire value, as a select element does.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HabitFormValues {
	pub title: String,
	pub description: String,
	pub category: String,
}

impl Default for HabitFormValues {
	fn default() -> Self {
		Self {
			title: String::new(),
			description: String::new(),
			category: String::from(HabitCategory::default().value()),
		}
	}
}

impl HabitFormValues {
	/// Builds the habit to create. Returns `None` if the category isn't one we know.
	pub fn new_habit(&self, is_public: bool, track_time: bool) -> Option<NewHabit> {
		let category = HabitCategory::from_value(&self.category)?;
		let description = self.description.trim();
		Some(NewHabit {
			title: String::from(self.title.trim()),
			description: if description.is_empty() {
				None
			} else {
				Some(String::from(description))
			},
			category,
			is_public,
			track_time,
		})
	}
}

impl FormValues for HabitFormValues {
	type Field = HabitField;

	fn value(&self, field: HabitField) -> &str {
		match field {
			HabitField::Title => &self.title,
			HabitField::Description => &self.description,
			HabitField::Category => &self.category,
		}
	}

	fn set_value(&mut self, field: HabitField, value: String) {
		match field {
			HabitField::Title => self.title = value,
			HabitField::Description => self.description = value,
			HabitField::Category => self.category = value,
		}
	}
}

pub fn validate_habit_form(values: &HabitFormValues) -> FieldErrors<HabitField> {
	let mut errors = FieldErrors::new();
	if let Err(error) = validate_habit_title(&values.title) {
		errors.insert(HabitField::Title, error.to_string());
	}
	if let Err(error) = validate_habit_description(&values.description) {
		errors.insert(HabitField::Description, error.to_string());
	}
	if HabitCategory::from_value(&values.category).is_none() {
		errors.insert(HabitField::Category, ValidationError::InvalidCategory.to_string());
	}
	errors
}

pub fn new_habit_form() -> FormState<HabitFormValues> {
	FormState::new(HabitFormValues::default(), validate_habit_form)
}

/// Creates a habit from the form's values, clearing the form once the store has accepted it.
///
/// Returns `Ok(None)` when the form is invalid; the field errors are left showing in that case.
pub async fn handle_create_habit<C, S>(
	cell: &C,
	store: &S,
	is_public: bool,
	track_time: bool,
) -> Result<Option<Habit>, ApiError>
where
	C: StateCell<FormState<HabitFormValues>> + ?Sized,
	S: HabitStore + ?Sized,
{
	let new_habit = cell.update(|form| {
		if form.validate_all(&HabitField::ALL) {
			form.values().new_habit(is_public, track_time)
		} else {
			None
		}
	});
	let Some(new_habit) = new_habit else {
		return Ok(None);
	};

	let habit = store.create(&new_habit).await?;
	cell.update(|form| form.reset());
	Ok(Some(habit))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::api::memory::MemoryHabitStore;
	use futures::executor::block_on;
	use std::cell::RefCell;

	#[test]
	fn blank_form_needs_a_title() {
		let errors = validate_habit_form(&HabitFormValues::default());
		assert_eq!(errors.len(), 1);
		assert_eq!(errors[&HabitField::Title], "This field is required");
	}

	#[test]
	fn unknown_category_is_rejected() {
		let values = HabitFormValues {
			title: String::from("Stretch"),
			description: String::new(),
			category: String::from("sleep"),
		};
		assert!(validate_habit_form(&values).contains_key(&HabitField::Category));
		assert_eq!(values.new_habit(false, false), None);
	}

	#[test]
	fn new_habit_trims_and_drops_empty_description() {
		let values = HabitFormValues {
			title: String::from("  Stretch "),
			description: String::from("   "),
			category: String::from("health"),
		};
		let habit = values.new_habit(true, false).unwrap();
		assert_eq!(habit.title, "Stretch");
		assert_eq!(habit.description, None);
		assert_eq!(habit.category, HabitCategory::Health);
		assert!(habit.is_public);
		assert!(!habit.track_time);
	}

	#[test]
	fn invalid_habit_is_not_created() {
		let store = MemoryHabitStore::new(Vec::new(), 0);
		let cell = RefCell::new(new_habit_form());

		let created = block_on(handle_create_habit(&cell, &store, false, false)).unwrap();
		assert_eq!(created, None);
		assert!(block_on(store.list()).unwrap().is_empty());
		cell.read(|form| assert_eq!(form.visible_error(HabitField::Title), Some("This field is required")));
	}

	#[test]
	fn created_habit_clears_the_form() {
		let store = MemoryHabitStore::new(Vec::new(), 0);
		let cell = RefCell::new(new_habit_form());
		cell.update(|form| {
			form.handle_change(HabitField::Title, String::from("Stretch"));
			form.handle_change(HabitField::Category, String::from("health"));
		});

		let created = block_on(handle_create_habit(&cell, &store, true, true)).unwrap().unwrap();
		assert_eq!(created.title, "Stretch");
		assert_eq!(created.category, HabitCategory::Health);
		assert!(created.track_time);
		assert_eq!(block_on(store.list()).unwrap().len(), 1);
		cell.read(|form| assert_eq!(form.values(), &HabitFormValues::default()));
	}

	#[test]
	fn padded_short_title_is_not_created() {
		let store = MemoryHabitStore::new(Vec::new(), 0);
		let cell = RefCell::new(new_habit_form());
		cell.update(|form| form.handle_change(HabitField::Title, String::from("  a")));

		let created = block_on(handle_create_habit(&cell, &store, false, false)).unwrap();
		assert_eq!(created, None);
		assert!(block_on(store.list()).unwrap().is_empty());
		cell.read(|form| {
			assert_eq!(
				form.visible_error(HabitField::Title),
				Some("Title must be at least 3 characters")
			)
		});
	}
}
