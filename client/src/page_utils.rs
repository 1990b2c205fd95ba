use wasm_bindgen::JsCast;
use web_sys::{window, Event as WebEvent, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

const APP_TITLE: &str = "Habit Tracker";

pub fn set_page_title(new_title: &str) {
	if let Some(window) = window() {
		if let Some(document) = window.document() {
			document.set_title(&format!("{} | {}", new_title, APP_TITLE));
		}
	}
}

/// Gets the current value of the form control that fired an event.
pub fn event_value(event: &WebEvent) -> Option<String> {
	let target = event.target()?;
	if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
		return Some(input.value());
	}
	if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
		return Some(select.value());
	}
	target.dyn_ref::<HtmlTextAreaElement>().map(|text_area| text_area.value())
}
