use crate::components::field_message::FieldMessage;
use crate::forms::form_state::FormState;
use crate::forms::login::{handle_login, new_login_form, LoginFailure, LoginField, LoginValues};
use crate::page_utils::{event_value, set_page_title};
use crate::services::Services;
use crate::session::{store_token, stored_token};
use habit_tracker_shared::messages::auth::User;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore_router::navigate;
use web_sys::Event as WebEvent;

#[component]
pub fn LoginView<G: Html>(ctx: Scope<'_>) -> View<G> {
	if stored_token().is_some() {
		spawn_local_scoped(ctx, async {
			navigate("/dashboard");
		});
		return view! { ctx, };
	}
	set_page_title("Log In");

	let form_signal: &Signal<FormState<LoginValues>> = create_signal(ctx, new_login_form());
	let login_error_signal: &Signal<Option<String>> = create_signal(ctx, None);
	let submitting_signal = create_signal(ctx, false);

	let email_value = create_memo(ctx, || String::from(form_signal.get().value(LoginField::Email)));
	let password_value = create_memo(ctx, || String::from(form_signal.get().value(LoginField::Password)));
	let email_error = create_memo(ctx, || form_signal.get().visible_error(LoginField::Email).map(String::from));
	let password_error = create_memo(ctx, || {
		form_signal.get().visible_error(LoginField::Password).map(String::from)
	});

	let input_handler = move |field: LoginField| {
		move |event: WebEvent| {
			if let Some(value) = event_value(&event) {
				login_error_signal.set(None);
				form_signal.modify().handle_change(field, value);
			}
		}
	};
	let blur_handler = move |field: LoginField| move |_event: WebEvent| form_signal.modify().handle_blur(field);

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();
		if *submitting_signal.get() {
			return;
		}
		submitting_signal.set(true);

		spawn_local_scoped(ctx, async move {
			let services: &Services = use_context(ctx);
			let result = handle_login(form_signal, services.auth.as_ref()).await;
			submitting_signal.set(false);

			match result {
				Ok(response) => {
					log::info!("[Login] Logged in as {}", response.user.name);
					store_token(&response.token);
					let user_signal: &Signal<Option<User>> = use_context(ctx);
					user_signal.set(Some(response.user));
					navigate("/dashboard");
				}
				Err(LoginFailure::InvalidForm) => (),
				Err(LoginFailure::Rejected(message)) => login_error_signal.set(Some(String::from(message))),
			}
		});
	};

	view! {
		ctx,
		div(id="login") {
			h1 { "Habit Tracker" }
			form(id="login_user", on:submit=form_submission_handler) {
				div(class="input_with_message") {
					label(for="login_email") { "Email" }
					input(
						id="login_email",
						type="email",
						placeholder="example@email.com",
						prop:value=(*email_value.get()).clone(),
						on:input=input_handler(LoginField::Email),
						on:blur=blur_handler(LoginField::Email)
					)
					FieldMessage(id="login_email_error", message=email_error)
				}
				div(class="input_with_message") {
					label(for="login_password") { "Password" }
					input(
						id="login_password",
						type="password",
						prop:value=(*password_value.get()).clone(),
						on:input=input_handler(LoginField::Password),
						on:blur=blur_handler(LoginField::Password)
					)
					FieldMessage(id="login_password_error", message=password_error)
				}
				FieldMessage(id="login_error", message=login_error_signal)
				button(type="submit", disabled=*submitting_signal.get()) {
					"Log in"
				}
			}
			p {
				"Don't have an account? "
				a(href="/register") { "Register" }
			}
		}
	}
}
