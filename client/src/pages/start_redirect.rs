use crate::session::stored_token;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore_router::navigate;

#[component]
pub fn StartRedirectView<G: Html>(ctx: Scope) -> View<G> {
	log::debug!("Activating start page redirect view");

	spawn_local_scoped(ctx, async move {
		if stored_token().is_some() {
			log::debug!("Redirecting to dashboard");
			navigate("/dashboard");
		} else {
			log::debug!("Redirecting to login");
			navigate("/login");
		}
	});

	view! { ctx, }
}
