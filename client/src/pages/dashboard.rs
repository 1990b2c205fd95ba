// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::components::error_display::ErrorDisplay;
use crate::components::field_message::FieldMessage;
use crate::components::nav_bar::{log_out, NavBar};
use crate::error::ApiError;
use crate::forms::form_state::FormState;
use crate::forms::habit::{handle_create_habit, new_habit_form, HabitField, HabitFormValues};
use crate::page_errors::{ErrorData, PageErrors};
use crate::page_utils::{event_value, set_page_title};
use crate::services::Services;
use crate::session::stored_token;
use habit_tracker_shared::messages::habits::{Habit, HabitCategory, HabitId};
use habit_tracker_shared::progress::{level_for_points, next_level, POINTS_PER_COMPLETION};
use std::collections::HashSet;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore::suspense::Suspense;
use sycamore_router::navigate;
use web_sys::Event as WebEvent;

#[component]
async fn DashboardLoadedView<G: Html>(ctx: Scope<'_>) -> View<G> {
	let services: &Services = use_context(ctx);
	let page_errors: &PageErrors = use_context(ctx);

	let habits = match services.habits.list().await {
		Ok(habits) => habits,
		Err(error) => {
			if error.status() == Some(401) {
				log::info!("[Dashboard] Session expired");
				log_out(ctx);
				return view! { ctx, };
			}
			if let ApiError::InvalidData(_) = error {
				let error_signal: &Signal<Option<ErrorData>> = use_context(ctx);
				error_signal.set(Some(ErrorData::new_with_error(
					"The server sent habit data this page can't read. Please refresh the page.",
					error,
				)));
				navigate("/error");
				return view! { ctx, };
			}
			page_errors.push(ErrorData::new_with_error("Failed to load your habits.", error));
			Vec::new()
		}
	};
	log::debug!("[Dashboard] Loaded {} habits", habits.len());

	let habits_signal = create_signal(ctx, habits);
	let points_signal = create_signal(ctx, 0u32);
	let completed_signal: &Signal<HashSet<HabitId>> = create_signal(ctx, HashSet::new());

	let level_signal = create_memo(ctx, || level_for_points(*points_signal.get()));
	let level_class = create_memo(ctx, || format!("user_rank {}", level_signal.get().color_class));
	let next_level_text = create_memo(ctx, || {
		let points = *points_signal.get();
		match next_level(points) {
			Some(level) => format!("{} points to rank {}", level.min_points - points, level.rank),
			None => String::from("Top rank reached!"),
		}
	});

	let form_signal: &Signal<FormState<HabitFormValues>> = create_signal(ctx, new_habit_form());
	let is_public_signal = create_signal(ctx, false);
	let track_time_signal = create_signal(ctx, false);
	let creating_signal = create_signal(ctx, false);

	let title_value = create_memo(ctx, || String::from(form_signal.get().value(HabitField::Title)));
	let description_value = create_memo(ctx, || String::from(form_signal.get().value(HabitField::Description)));
	let category_value = create_memo(ctx, || String::from(form_signal.get().value(HabitField::Category)));
	let title_error = create_memo(ctx, || form_signal.get().visible_error(HabitField::Title).map(String::from));
	let description_error = create_memo(ctx, || {
		form_signal.get().visible_error(HabitField::Description).map(String::from)
	});
	let category_error = create_memo(ctx, || {
		form_signal.get().visible_error(HabitField::Category).map(String::from)
	});

	let input_handler = move |field: HabitField| {
		move |event: WebEvent| {
			if let Some(value) = event_value(&event) {
				form_signal.modify().handle_change(field, value);
			}
		}
	};
	let blur_handler = move |field: HabitField| move |_event: WebEvent| form_signal.modify().handle_blur(field);

	let category_options = View::new_fragment(
		HabitCategory::ALL
			.iter()
			.map(move |category| {
				let value = category.value();
				let label = category.label();
				view! { ctx, option(value=value, selected=*category_value.get() == value) { (label) } }
			})
			.collect(),
	);

	let new_habit_submit_handler = move |event: WebEvent| {
		event.prevent_default();
		if *creating_signal.get() {
			return;
		}
		creating_signal.set(true);

		spawn_local_scoped(ctx, async move {
			let services: &Services = use_context(ctx);
			let is_public = *is_public_signal.get();
			let track_time = *track_time_signal.get();
			let result = handle_create_habit(form_signal, services.habits.as_ref(), is_public, track_time).await;
			creating_signal.set(false);

			match result {
				Ok(Some(habit)) => {
					log::debug!("[Dashboard] Created habit {}", habit.id);
					habits_signal.modify().push(habit);
					is_public_signal.set(false);
					track_time_signal.set(false);
				}
				Ok(None) => (),
				Err(error) => {
					let page_errors: &PageErrors = use_context(ctx);
					page_errors.push(ErrorData::new_with_error("Failed to create the habit.", error));
				}
			}
		});
	};

	view! {
		ctx,
		div(id="dashboard_progress") {
			h2 { "Progress" }
			div(class=level_class.get()) {
				"Rank "
				(level_signal.get().rank)
			}
			div(id="dashboard_points") {
				(points_signal.get())
				" points"
			}
			div(id="dashboard_next_rank") { (next_level_text.get()) }
		}
		div(id="dashboard_habits") {
			h2 { "My Habits" }
			(if habits_signal.get().is_empty() {
				view! { ctx, p(id="dashboard_no_habits") { "You don't have any habits yet." } }
			} else {
				view! { ctx, }
			})
			ul(id="dashboard_habit_list") {
				Keyed(
					iterable=habits_signal,
					key=|habit| habit.id,
					view=move |ctx, habit: Habit| {
						let habit_id = habit.id;
						let title = habit.title.clone();
						let category = habit.category.label();
						let description = habit.description.clone().unwrap_or_default();
						let completed = create_memo(ctx, move || completed_signal.get().contains(&habit_id));

						let complete_handler = move |_event: WebEvent| {
							spawn_local_scoped(ctx, async move {
								let services: &Services = use_context(ctx);
								match services.habits.complete(habit_id, None).await {
									Ok(completion) => {
										log::debug!("[Dashboard] Completed habit {} ({})", habit_id, completion.id);
										completed_signal.modify().insert(habit_id);
										points_signal.set(*points_signal.get() + POINTS_PER_COMPLETION);
									}
									Err(error) => {
										let page_errors: &PageErrors = use_context(ctx);
										page_errors.push(ErrorData::new_with_error("Failed to complete the habit.", error));
									}
								}
							});
						};
						let delete_handler = move |_event: WebEvent| {
							spawn_local_scoped(ctx, async move {
								let services: &Services = use_context(ctx);
								match services.habits.delete(habit_id).await {
									Ok(()) => habits_signal.modify().retain(|habit| habit.id != habit_id),
									Err(error) => {
										let page_errors: &PageErrors = use_context(ctx);
										page_errors.push(ErrorData::new_with_error("Failed to delete the habit.", error));
									}
								}
							});
						};

						view! {
							ctx,
							li(class="dashboard_habit") {
								span(class="dashboard_habit_title") { (title) }
								span(class="dashboard_habit_category") { (category) }
								span(class="dashboard_habit_description") { (description) }
								button(type="button", disabled=*completed.get(), on:click=complete_handler) {
									(if *completed.get() { "Done" } else { "Complete" })
								}
								button(type="button", on:click=delete_handler) { "Delete" }
							}
						}
					}
				)
			}
		}
		form(id="dashboard_new_habit", on:submit=new_habit_submit_handler) {
			h2 { "New Habit" }
			div(class="input_with_message") {
				label(for="new_habit_title") { "Title" }
				input(
					id="new_habit_title",
					type="text",
					prop:value=(*title_value.get()).clone(),
					on:input=input_handler(HabitField::Title),
					on:blur=blur_handler(HabitField::Title)
				)
				FieldMessage(id="new_habit_title_error", message=title_error)
			}
			div(class="input_with_message") {
				label(for="new_habit_description") { "Description" }
				textarea(
					id="new_habit_description",
					prop:value=(*description_value.get()).clone(),
					on:input=input_handler(HabitField::Description),
					on:blur=blur_handler(HabitField::Description)
				)
				FieldMessage(id="new_habit_description_error", message=description_error)
			}
			div(class="input_with_message") {
				label(for="new_habit_category") { "Category" }
				select(
					id="new_habit_category",
					on:input=input_handler(HabitField::Category),
					on:blur=blur_handler(HabitField::Category)
				) {
					(category_options)
				}
				FieldMessage(id="new_habit_category_error", message=category_error)
			}
			label {
				input(type="checkbox", bind:checked=is_public_signal)
				"Public"
			}
			label {
				input(type="checkbox", bind:checked=track_time_signal)
				"Track time"
			}
			button(type="submit", disabled=*creating_signal.get()) { "Add habit" }
		}
	}
}

#[component]
pub fn DashboardView<G: Html>(ctx: Scope<'_>) -> View<G> {
	if stored_token().is_none() {
		spawn_local_scoped(ctx, async {
			navigate("/login");
		});
		return view! { ctx, };
	}
	set_page_title("Dashboard");

	view! {
		ctx,
		NavBar
		ErrorDisplay
		main(id="dashboard") {
			h1 { "Dashboard" }
			Suspense(fallback=view! { ctx, "Loading your habits..." }) {
				DashboardLoadedView
			}
		}
	}
}
