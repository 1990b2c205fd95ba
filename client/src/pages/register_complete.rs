use crate::page_utils::set_page_title;
use habit_tracker_shared::messages::auth::RegisterResponse;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore_router::navigate;

#[component]
pub fn RegistrationCompleteView<G: Html>(ctx: Scope) -> View<G> {
	let registered_signal: &Signal<Option<RegisterResponse>> = use_context(ctx);
	let Some(account) = (*registered_signal.get()).clone() else {
		spawn_local_scoped(ctx, async {
			navigate("/register");
		});
		return view! { ctx, };
	};
	set_page_title("Registration Complete");

	let greeting = format!("Welcome, {}!", account.username);
	let created = format!(
		"Your account for {} was created on {}.",
		account.email,
		account.created_at.format("%Y-%m-%d")
	);

	view! {
		ctx,
		div(id="register_complete") {
			h1 {
				"Registration complete!"
			}
			p { (greeting) }
			p { (created) }
			p {
				a(href="/login") {
					"Log in to start tracking your habits"
				}
			}
		}
	}
}
