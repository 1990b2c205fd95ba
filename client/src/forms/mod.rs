use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt::Debug;
use sycamore::prelude::Signal;

pub mod availability;
pub mod debounce;
pub mod form_state;
pub mod habit;
pub mod login;
pub mod register;

/// Messages for the fields that currently fail validation
pub type FieldErrors<F> = BTreeMap<F, String>;

/// The text values of a form, addressed by a field enum
pub trait FormValues: Clone + Default {
	type Field: Copy + Debug + Ord;

	fn value(&self, field: Self::Field) -> &str;

	fn set_value(&mut self, field: Self::Field, value: String);
}

/// Holds a piece of UI state that's written by one page and the futures it spawns.
pub trait StateCell<T> {
	fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R;

	fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R;
}

impl<T> StateCell<T> for RefCell<T> {
	fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
		f(&mut self.borrow_mut())
	}

	fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		f(&self.borrow())
	}
}

impl<T: Clone> StateCell<T> for Signal<T> {
	fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
		f(&mut self.modify())
	}

	/// Reads without subscribing the current reactive scope.
	fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		f(&self.get_untracked())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use sycamore::prelude::{create_effect, create_scope_immediate, create_signal};

	#[test]
	fn signals_can_hold_page_state() {
		create_scope_immediate(|ctx| {
			let signal = create_signal(ctx, vec![String::from("Exercise")]);
			let count = signal.update(|habits| {
				habits.push(String::from("Read"));
				habits.len()
			});
			assert_eq!(count, 2);
			assert_eq!(signal.read(|habits| habits.clone()), vec!["Exercise", "Read"]);
		});
	}

	#[test]
	fn reading_a_signal_cell_does_not_subscribe() {
		create_scope_immediate(|ctx| {
			let signal = create_signal(ctx, 1u32);
			let runs = create_signal(ctx, 0u32);
			create_effect(ctx, move || {
				signal.read(|_| ());
				runs.set(*runs.get_untracked() + 1);
			});
			signal.update(|value| *value += 1);
			assert_eq!(*runs.get_untracked(), 1);
		});
	}
}
