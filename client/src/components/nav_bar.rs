// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::page_errors::PageErrors;
use crate::session::clear_token;
use habit_tracker_shared::messages::auth::User;
use sycamore::prelude::*;
use sycamore_router::navigate;
use web_sys::Event as WebEvent;

/// Ends the session: forgets the token and the signed-in user, then returns to the login page.
pub fn log_out(ctx: Scope<'_>) {
	log::debug!("Logging out");
	clear_token();

	let user_signal: &Signal<Option<User>> = use_context(ctx);
	user_signal.set(None);
	let page_errors: &PageErrors = use_context(ctx);
	page_errors.clear();

	navigate("/login");
}

#[component]
pub fn NavBar<G: Html>(ctx: Scope) -> View<G> {
	let user_signal: &Signal<Option<User>> = use_context(ctx);
	let user_name = create_memo(ctx, || {
		(*user_signal.get())
			.as_ref()
			.map(|user| user.name.clone())
			.unwrap_or_else(|| String::from("there"))
	});

	let logout_handler = move |_event: WebEvent| log_out(ctx);

	view! {
		ctx,
		nav(id="user") {
			div(id="home_link") {
				a(href="/dashboard") {
					"Habit Tracker"
				}
			}
			div(id="user_greeting") {
				"Hi, "
				(user_name.get())
				button(id="logout_button", type="button", on:click=logout_handler) {
					"Log out"
				}
			}
		}
	}
}
