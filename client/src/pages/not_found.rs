use crate::page_utils::set_page_title;
use crate::session::stored_token;
use sycamore::prelude::*;

#[component]
pub fn NotFoundView<G: Html>(ctx: Scope) -> View<G> {
	log::debug!("Showing not found page for an unknown route");
	set_page_title("Page Not Found");

	let (home_link, home_text) = if stored_token().is_some() {
		("/dashboard", "Back to your habits")
	} else {
		("/login", "Go to the login page")
	};

	view! {
		ctx,
		div(id="not_found") {
			h1 { "Page not found" }
			p { "This page doesn't exist. It may have moved, or the link may be mistyped." }
			a(href=home_link) { (home_text) }
		}
	}
}
