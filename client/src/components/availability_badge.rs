use crate::forms::availability::AsyncStatus;
use sycamore::prelude::*;

#[derive(Prop)]
pub struct AvailabilityBadgeProps<'a> {
	id: &'static str,
	status: &'a ReadSignal<AsyncStatus>,
}

#[component]
pub fn AvailabilityBadge<'a, G: Html>(ctx: Scope<'a>, props: AvailabilityBadgeProps<'a>) -> View<G> {
	let id = props.id;
	let status = props.status;

	view! {
		ctx,
		(match *status.get() {
			AsyncStatus::Idle => view! { ctx, },
			AsyncStatus::Checking => view! {
				ctx,
				span(id=id, class="availability availability_checking") { "Checking..." }
			},
			AsyncStatus::Available => view! {
				ctx,
				span(id=id, class="availability availability_available") { "Available" }
			},
			AsyncStatus::Taken => view! {
				ctx,
				span(id=id, class="availability availability_taken") { "Taken" }
			},
		})
	}
}
