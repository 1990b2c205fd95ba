use crate::page_errors::ErrorData;
use sycamore::prelude::*;

/// Renders a full-page error for failures the app can't continue from.
pub fn error_message_view<G: Html>(ctx: Scope<'_>, error: &ErrorData) -> View<G> {
	let message = error.message();
	match error.details() {
		Some(details) => {
			let details = String::from(details);
			view! {
				ctx,
				div(id="app_error") {
					(message)
					br {}
					(details)
				}
			}
		}
		None => view! {
			ctx,
			div(id="app_error") { (message) }
		},
	}
}

#[component]
pub fn ErrorView<G: Html>(ctx: Scope) -> View<G> {
	let error_data: &Signal<Option<ErrorData>> = use_context(ctx);

	match (*error_data.get()).clone() {
		Some(error) => error_message_view(ctx, &error),
		None => error_message_view(ctx, &ErrorData::new("A completely unknown error occurred")),
	}
}
