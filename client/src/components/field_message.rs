use sycamore::prelude::*;

#[derive(Prop)]
pub struct FieldMessageProps<'a> {
	id: &'static str,
	message: &'a ReadSignal<Option<String>>,
}

/// Shows the validation message for one form field, when it has one
#[component]
pub fn FieldMessage<'a, G: Html>(ctx: Scope<'a>, props: FieldMessageProps<'a>) -> View<G> {
	let id = props.id;
	let message = props.message;

	view! {
		ctx,
		(match (*message.get()).clone() {
			Some(message) => view! {
				ctx,
				span(id=id, class="input_error") { (message) }
			},
			None => view! { ctx, },
		})
	}
}
