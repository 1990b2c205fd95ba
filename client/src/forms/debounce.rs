use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use sycamore::prelude::*;

/// Identifies one scheduled propagation. Only the most recently issued ticket can fire.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DebounceTicket(u64);

/// Holds back a changing value until it stops changing.
///
/// Each [`schedule`](Debouncer::schedule) restarts the wait: tickets from earlier calls will never fire. The timer
/// itself lives outside so this can be driven by any clock.
#[derive(Debug)]
pub struct Debouncer<T> {
	generation: u64,
	pending: Option<T>,
}

impl<T> Default for Debouncer<T> {
	fn default() -> Self {
		Self {
			generation: 0,
			pending: None,
		}
	}
}

impl<T> Debouncer<T> {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn schedule(&mut self, value: T) -> DebounceTicket {
		self.generation += 1;
		self.pending = Some(value);
		DebounceTicket(self.generation)
	}

	/// Called when a ticket's delay has elapsed. Returns the value to propagate if the ticket is still current.
	pub fn fire(&mut self, ticket: DebounceTicket) -> Option<T> {
		if ticket.0 != self.generation {
			return None;
		}
		self.pending.take()
	}

	/// Drops any pending value so no outstanding ticket fires.
	pub fn cancel(&mut self) {
		self.generation += 1;
		self.pending = None;
	}
}

/// Runs a [`Debouncer`] on a timer.
///
/// `H` is the handle of a started timer; dropping it must cancel that timer. Each scheduled value replaces the
/// previous handle, so only the latest timer can still fire.
pub struct TimedDebouncer<T, H> {
	debouncer: Rc<RefCell<Debouncer<T>>>,
	on_ready: Rc<dyn Fn(T)>,
	timer: Option<H>,
}

impl<T: 'static, H> TimedDebouncer<T, H> {
	pub fn new(on_ready: impl Fn(T) + 'static) -> Self {
		Self {
			debouncer: Rc::new(RefCell::new(Debouncer::new())),
			on_ready: Rc::new(on_ready),
			timer: None,
		}
	}

	/// Restarts the wait with a new value. `start_timer` is given the callback to run once the delay has elapsed and
	/// returns the handle of the timer it started.
	pub fn schedule(&mut self, value: T, start_timer: impl FnOnce(Box<dyn FnOnce()>) -> H) {
		let ticket = self.debouncer.borrow_mut().schedule(value);
		let debouncer = self.debouncer.clone();
		let on_ready = self.on_ready.clone();
		let elapsed: Box<dyn FnOnce()> = Box::new(move || {
			let ready = debouncer.borrow_mut().fire(ticket);
			if let Some(value) = ready {
				on_ready(value);
			}
		});
		self.timer = Some(start_timer(elapsed));
	}

	/// Stops the running timer and discards the pending value.
	pub fn cancel(&mut self) {
		self.debouncer.borrow_mut().cancel();
		self.timer = None;
	}
}

/// Creates a signal that follows `source` once it has stayed unchanged for `delay_ms` milliseconds.
///
/// The pending timer is cancelled when the scope is disposed, so the returned signal never updates after that.
pub fn create_debounced_signal<'a, T: Clone + 'static>(
	ctx: Scope<'a>,
	source: &'a ReadSignal<T>,
	delay_ms: u32,
) -> &'a ReadSignal<T> {
	let debounced = create_rc_signal((*source.get_untracked()).clone());
	let timed: Rc<RefCell<TimedDebouncer<T, Timeout>>> = Rc::new(RefCell::new(TimedDebouncer::new({
		let debounced = debounced.clone();
		move |value| debounced.set(value)
	})));

	create_effect(ctx, {
		let timed = timed.clone();
		move || {
			let value = (*source.get()).clone();
			timed
				.borrow_mut()
				.schedule(value, |elapsed| Timeout::new(delay_ms, elapsed));
		}
	});

	on_cleanup(ctx, move || timed.borrow_mut().cancel());

	let debounced: &'a RcSignal<T> = create_ref(ctx, debounced);
	debounced
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::cell::Cell;

	#[test]
	fn rapid_updates_only_propagate_the_last_value() {
		let mut debouncer = Debouncer::new();
		let tickets: Vec<DebounceTicket> = ["h", "ha", "hab", "habi"]
			.into_iter()
			.map(|value| debouncer.schedule(value))
			.collect();

		let propagated: Vec<&str> = tickets.into_iter().filter_map(|ticket| debouncer.fire(ticket)).collect();
		assert_eq!(propagated, vec!["habi"]);
	}

	#[test]
	fn spaced_updates_all_propagate() {
		let mut debouncer = Debouncer::new();
		let mut propagated = Vec::new();
		for value in ["run", "read", "rest"] {
			let ticket = debouncer.schedule(value);
			propagated.extend(debouncer.fire(ticket));
		}
		assert_eq!(propagated, vec!["run", "read", "rest"]);
	}

	#[test]
	fn tickets_fire_once() {
		let mut debouncer = Debouncer::new();
		let ticket = debouncer.schedule(5);
		assert_eq!(debouncer.fire(ticket), Some(5));
		assert_eq!(debouncer.fire(ticket), None);
	}

	#[test]
	fn cancel_discards_pending_value() {
		let mut debouncer = Debouncer::new();
		let ticket = debouncer.schedule(String::from("late"));
		debouncer.cancel();
		assert_eq!(debouncer.fire(ticket), None);
	}

	#[test]
	fn scheduling_after_cancel_works_again() {
		let mut debouncer = Debouncer::new();
		debouncer.schedule(1);
		debouncer.cancel();
		let ticket = debouncer.schedule(2);
		assert_eq!(debouncer.fire(ticket), Some(2));
	}

	/// Stands in for a browser timer: callbacks run when the test says so, and dropped handles cancel them.
	#[derive(Default)]
	struct FakeClock {
		timers: RefCell<Vec<(Rc<Cell<bool>>, Box<dyn FnOnce()>)>>,
	}

	struct FakeTimer {
		cancelled: Rc<Cell<bool>>,
	}

	impl Drop for FakeTimer {
		fn drop(&mut self) {
			self.cancelled.set(true);
		}
	}

	impl FakeClock {
		fn start(&self, elapsed: Box<dyn FnOnce()>) -> FakeTimer {
			let cancelled = Rc::new(Cell::new(false));
			self.timers.borrow_mut().push((cancelled.clone(), elapsed));
			FakeTimer { cancelled }
		}

		/// Runs every timer that hasn't been cancelled.
		fn advance(&self) {
			let timers: Vec<_> = self.timers.borrow_mut().drain(..).collect();
			for (cancelled, elapsed) in timers {
				if !cancelled.get() {
					elapsed();
				}
			}
		}

		fn running(&self) -> usize {
			self.timers.borrow().iter().filter(|(cancelled, _)| !cancelled.get()).count()
		}
	}

	fn timed_with_output() -> (TimedDebouncer<&'static str, FakeTimer>, Rc<RefCell<Vec<&'static str>>>) {
		let output = Rc::new(RefCell::new(Vec::new()));
		let timed = TimedDebouncer::new({
			let output = output.clone();
			move |value| output.borrow_mut().push(value)
		});
		(timed, output)
	}

	#[test]
	fn replacing_a_timer_cancels_the_previous_one() {
		let clock = FakeClock::default();
		let (mut timed, output) = timed_with_output();

		timed.schedule("hab", |elapsed| clock.start(elapsed));
		timed.schedule("habit", |elapsed| clock.start(elapsed));
		assert_eq!(clock.running(), 1);

		clock.advance();
		assert_eq!(*output.borrow(), vec!["habit"]);
	}

	#[test]
	fn settled_values_each_propagate() {
		let clock = FakeClock::default();
		let (mut timed, output) = timed_with_output();

		timed.schedule("run", |elapsed| clock.start(elapsed));
		clock.advance();
		timed.schedule("read", |elapsed| clock.start(elapsed));
		clock.advance();
		assert_eq!(*output.borrow(), vec!["run", "read"]);
	}

	#[test]
	fn cancelled_debouncer_never_propagates() {
		let clock = FakeClock::default();
		let (mut timed, output) = timed_with_output();

		timed.schedule("late", |elapsed| clock.start(elapsed));
		timed.cancel();
		assert_eq!(clock.running(), 0);

		clock.advance();
		assert!(output.borrow().is_empty());
	}

	#[test]
	fn stale_callback_is_ignored_even_if_its_timer_runs() {
		let output = Rc::new(RefCell::new(Vec::new()));
		let mut timed = TimedDebouncer::new({
			let output = output.clone();
			move |value| output.borrow_mut().push(value)
		});
		let mut callbacks: Vec<Box<dyn FnOnce()>> = Vec::new();

		timed.schedule(1, |elapsed| callbacks.push(elapsed));
		timed.schedule(2, |elapsed| callbacks.push(elapsed));
		for elapsed in callbacks {
			elapsed();
		}
		assert_eq!(*output.borrow(), vec![2]);
	}
}
