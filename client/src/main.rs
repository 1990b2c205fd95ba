// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use habit_tracker_shared::messages::auth::{RegisterResponse, User};
use sycamore::prelude::*;

mod api;
mod app;
mod components;
mod config;
mod error;
mod forms;
mod page_errors;
mod page_utils;
mod pages;
mod services;
mod session;
use app::App;
use config::bundled_config;
use page_errors::{ErrorData, PageErrors};
use pages::error::error_message_view;
use services::Services;

fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());

	let config = match bundled_config() {
		Ok(config) => config,
		Err(error) => {
			log::error!("Failed to read the client configuration: {:?}", error);
			sycamore::render(move |ctx| {
				error_message_view(
					ctx,
					&ErrorData::new_with_error("Unable to load: the client configuration is invalid", error),
				)
			});
			return;
		}
	};
	log::info!("Using API at {} with {:?} habit data", config.api_url, config.data_source);

	sycamore::render(move |ctx| {
		provide_context(ctx, Services::new(config));
		provide_context(ctx, PageErrors::new());

		let user_signal: &Signal<Option<User>> = create_signal(ctx, None);
		provide_context_ref(ctx, user_signal);
		let registered_signal: &Signal<Option<RegisterResponse>> = create_signal(ctx, None);
		provide_context_ref(ctx, registered_signal);
		let error_signal: &Signal<Option<ErrorData>> = create_signal(ctx, None);
		provide_context_ref(ctx, error_signal);

		view! { ctx, App }
	});
}
