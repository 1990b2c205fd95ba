// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::page_errors::PageErrors;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

/// Lists the errors collected for the current page, each with a dismiss link
#[component]
pub fn ErrorDisplay<G: Html>(ctx: Scope<'_>) -> View<G> {
	let page_errors: &PageErrors = use_context(ctx);
	let errors = create_memo(ctx, || (*page_errors.errors.get()).clone());

	view! {
		ctx,
		ul(id="page_errors") {
			Indexed(
				iterable=errors,
				view=|ctx, error| {
					let dismiss_handler = {
						let error = error.clone();
						move |_event: WebEvent| {
							let page_errors: &PageErrors = use_context(ctx);
							page_errors.dismiss(&error);
						}
					};
					error.to_view(ctx, dismiss_handler)
				}
			)
		}
	}
}
