// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt::Display;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

/// A message about something that went wrong, optionally with the error that caused it
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorData {
	message: &'static str,
	error: Option<String>,
}

impl ErrorData {
	/// Creates a new data object with no error object to render
	pub fn new(message: &'static str) -> Self {
		Self { message, error: None }
	}

	/// Creates a new data object with an error object to render
	pub fn new_with_error(message: &'static str, error: impl Display) -> Self {
		let error = Some(format!("{error}"));
		Self { message, error }
	}

	pub fn message(&self) -> &'static str {
		self.message
	}

	pub fn details(&self) -> Option<&str> {
		self.error.as_deref()
	}

	pub fn to_view<'a, G: Html>(&self, ctx: Scope<'a>, dismiss_handler: impl Fn(WebEvent) + 'a) -> View<G> {
		let message = self.message;
		let details_view = match self.error.clone() {
			Some(error_details) => view! {
				ctx,
				span(class="page_error_entry_details") { (error_details) }
			},
			None => view! { ctx, },
		};
		view! {
			ctx,
			li(class="page_error_entry") {
				span(class="page_error_entry_text") { (message) }
				(details_view)
				span(class="page_error_entry_dismiss") {
					a(class="click", on:click=dismiss_handler) { "[X]" }
				}
			}
		}
	}
}

/// Errors that happened on the current page and haven't been dismissed yet
#[derive(Clone)]
pub struct PageErrors {
	pub errors: RcSignal<Vec<ErrorData>>,
}

impl PageErrors {
	pub fn new() -> Self {
		Self {
			errors: create_rc_signal(Vec::new()),
		}
	}

	pub fn push(&self, error: ErrorData) {
		log::error!(
			"{}{}",
			error.message(),
			error.details().map(|details| format!(": {}", details)).unwrap_or_default()
		);
		self.errors.modify().push(error);
	}

	pub fn dismiss(&self, error: &ErrorData) {
		let index = self.errors.get().iter().position(|check_error| check_error == error);
		if let Some(index) = index {
			self.errors.modify().remove(index);
		}
	}

	pub fn clear(&self) {
		self.errors.modify().clear();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn error_entries_render_with_scoped_dismiss_handlers() {
		let html = sycamore::render_to_string(|ctx| {
			let dismissed = create_signal(ctx, false);
			let error = ErrorData::new_with_error("Failed to load your habits.", "offline");
			error.to_view(ctx, move |_event| dismissed.set(true))
		});
		assert!(html.contains("Failed to load your habits."));
		assert!(html.contains("offline"));
		assert!(html.contains("[X]"));
	}

	#[test]
	fn entries_without_details_render_only_the_message() {
		let html = sycamore::render_to_string(|ctx| ErrorData::new("Failed to delete the habit.").to_view(ctx, |_| ()));
		assert!(html.contains("Failed to delete the habit."));
		assert!(!html.contains("page_error_entry_details"));
	}
}
