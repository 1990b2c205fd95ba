// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::components::availability_badge::AvailabilityBadge;
use crate::components::field_message::FieldMessage;
use crate::forms::availability::CheckedField;
use crate::forms::debounce::create_debounced_signal;
use crate::forms::register::{check_availability, handle_register, RegisterField, RegisterForm};
use crate::page_utils::{event_value, set_page_title};
use crate::services::Services;
use crate::session::stored_token;
use habit_tracker_shared::messages::auth::RegisterResponse;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore_router::navigate;
use web_sys::Event as WebEvent;

/// Checks a unique field against the server each time its value settles after typing.
fn watch_availability<'a>(ctx: Scope<'a>, form_signal: &'a Signal<RegisterForm>, field: CheckedField) {
	let services: &Services = use_context(ctx);
	let value_signal = create_selector(ctx, move || {
		String::from(form_signal.get().form().value(RegisterField::from(field)))
	});
	let debounced_signal = create_debounced_signal(ctx, value_signal, services.config.debounce_delay_ms);

	create_effect(ctx, move || {
		let value = (*debounced_signal.get()).clone();
		spawn_local_scoped(ctx, async move {
			let outcome = check_availability(form_signal, services.auth.as_ref(), field, value).await;
			if let Some(outcome) = outcome {
				log::debug!("[Register] {} availability check finished: {:?}", field.name(), outcome);
			}
		});
	});
}

fn input_handler<'a>(form_signal: &'a Signal<RegisterForm>, field: RegisterField) -> impl Fn(WebEvent) + 'a {
	move |event: WebEvent| {
		if let Some(value) = event_value(&event) {
			form_signal.modify().handle_change(field, value);
		}
	}
}

fn blur_handler<'a>(form_signal: &'a Signal<RegisterForm>, field: RegisterField) -> impl Fn(WebEvent) + 'a {
	move |_event: WebEvent| form_signal.modify().handle_blur(field)
}

#[component]
pub fn RegistrationView<G: Html>(ctx: Scope<'_>) -> View<G> {
	if stored_token().is_some() {
		spawn_local_scoped(ctx, async {
			navigate("/dashboard");
		});
		return view! { ctx, };
	}
	set_page_title("Register");

	let form_signal = create_signal(ctx, RegisterForm::new());
	watch_availability(ctx, form_signal, CheckedField::Username);
	watch_availability(ctx, form_signal, CheckedField::Email);

	let field_value =
		move |field: RegisterField| create_memo(ctx, move || String::from(form_signal.get().form().value(field)));
	let field_error = move |field: RegisterField| {
		create_memo(ctx, move || {
			form_signal.get().form().visible_error(field).map(String::from)
		})
	};

	let email_value = field_value(RegisterField::Email);
	let username_value = field_value(RegisterField::Username);
	let password_value = field_value(RegisterField::Password);
	let confirm_password_value = field_value(RegisterField::ConfirmPassword);

	let email_error = field_error(RegisterField::Email);
	let username_error = field_error(RegisterField::Username);
	let password_error = field_error(RegisterField::Password);
	let confirm_password_error = field_error(RegisterField::ConfirmPassword);

	let username_status = create_memo(ctx, || form_signal.get().status(CheckedField::Username));
	let email_status = create_memo(ctx, || form_signal.get().status(CheckedField::Email));
	let cannot_submit = create_memo(ctx, || !form_signal.get().can_submit());
	let submitting = create_memo(ctx, || form_signal.get().is_submitting());

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		spawn_local_scoped(ctx, async move {
			let services: &Services = use_context(ctx);
			match handle_register(form_signal, services.auth.as_ref()).await {
				Ok(response) => {
					log::info!("[Register] Created account {}", response.username);
					let registered_signal: &Signal<Option<RegisterResponse>> = use_context(ctx);
					registered_signal.set(Some(response));
					navigate("/register_complete");
				}
				Err(failure) => log::debug!("[Register] Registration didn't complete: {}", failure),
			}
		});
	};

	view! {
		ctx,
		div(id="register") {
			h1 { "Create an Account" }
			p { "Join the community" }
			form(id="register_user", on:submit=form_submission_handler) {
				div(class="input_with_message") {
					label(for="register_username") { "Username" }
					input(
						id="register_username",
						type="text",
						placeholder="user123",
						prop:value=(*username_value.get()).clone(),
						on:input=input_handler(form_signal, RegisterField::Username),
						on:blur=blur_handler(form_signal, RegisterField::Username)
					)
					AvailabilityBadge(id="register_username_availability", status=username_status)
					FieldMessage(id="register_username_error", message=username_error)
				}
				div(class="input_with_message") {
					label(for="register_email") { "Email" }
					input(
						id="register_email",
						type="email",
						placeholder="example@email.com",
						prop:value=(*email_value.get()).clone(),
						on:input=input_handler(form_signal, RegisterField::Email),
						on:blur=blur_handler(form_signal, RegisterField::Email)
					)
					AvailabilityBadge(id="register_email_availability", status=email_status)
					FieldMessage(id="register_email_error", message=email_error)
				}
				div(class="input_with_message") {
					label(for="register_password") { "Password" }
					input(
						id="register_password",
						type="password",
						prop:value=(*password_value.get()).clone(),
						on:input=input_handler(form_signal, RegisterField::Password),
						on:blur=blur_handler(form_signal, RegisterField::Password)
					)
					FieldMessage(id="register_password_error", message=password_error)
				}
				div(class="input_with_message") {
					label(for="register_confirm_password") { "Confirm password" }
					input(
						id="register_confirm_password",
						type="password",
						prop:value=(*confirm_password_value.get()).clone(),
						on:input=input_handler(form_signal, RegisterField::ConfirmPassword),
						on:blur=blur_handler(form_signal, RegisterField::ConfirmPassword)
					)
					FieldMessage(id="register_confirm_password_error", message=confirm_password_error)
				}
				button(type="submit", disabled=*cannot_submit.get()) {
					(if *submitting.get() { "Creating account..." } else { "Create account" })
				}
			}
			p {
				"Already have an account? "
				a(href="/login") { "Log in" }
			}
		}
	}
}
