use crate::page_errors::PageErrors;
use crate::pages::dashboard::DashboardView;
use crate::pages::error::ErrorView;
use crate::pages::login::LoginView;
use crate::pages::not_found::NotFoundView;
use crate::pages::register::RegistrationView;
use crate::pages::register_complete::RegistrationCompleteView;
use crate::pages::start_redirect::StartRedirectView;
use sycamore::prelude::*;
use sycamore_router::{HistoryIntegration, Route, Router};

#[derive(Clone, Copy, Debug, Route)]
pub enum AppRoutes {
	#[to("/")]
	Start,
	#[to("/login")]
	Login,
	#[to("/register")]
	Register,
	#[to("/register_complete")]
	RegisterComplete,
	#[to("/dashboard")]
	Dashboard,
	#[to("/error")]
	Error,
	#[not_found]
	NotFound,
}

#[component]
pub fn App<G: Html>(ctx: Scope) -> View<G> {
	view! {
		ctx,
		Router(
			integration=HistoryIntegration::new(),
			view=|ctx, route: &ReadSignal<AppRoutes>| {
				view! {
					ctx,
					({
						let route = *route.get();
						log::debug!("Navigated to {:?}", route);
						// Errors belong to the page they happened on
						let page_errors: &PageErrors = use_context(ctx);
						page_errors.clear();

						match route {
							AppRoutes::Start => view! { ctx, StartRedirectView },
							AppRoutes::Login => view! { ctx, LoginView },
							AppRoutes::Register => view! { ctx, RegistrationView },
							AppRoutes::RegisterComplete => view! { ctx, RegistrationCompleteView },
							AppRoutes::Dashboard => view! { ctx, DashboardView },
							AppRoutes::Error => view! { ctx, ErrorView },
							AppRoutes::NotFound => view! { ctx, NotFoundView },
						}
					})
				}
			}
		)
	}
}
