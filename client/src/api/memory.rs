use super::habits::HabitStore;
use crate::error::ApiError;
use chrono::Utc;
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_timers::future::TimeoutFuture;
use habit_tracker_shared::messages::habits::{Habit, HabitCategory, HabitCompletion, HabitId, HabitUpdate, NewHabit};
use std::cell::RefCell;

const SAMPLE_USER_ID: u64 = 1;
const HABIT_NOT_FOUND: &str = "Habit not found";

#[derive(Default)]
struct MemoryData {
	habits: Vec<Habit>,
	completions: u64,
}

/// A habit store that keeps everything in the page's memory, for working on the front end without the API.
#[derive(Default)]
pub struct MemoryHabitStore {
	data: RefCell<MemoryData>,
	latency_ms: u32,
}

impl MemoryHabitStore {
	pub fn new(habits: Vec<Habit>, latency_ms: u32) -> Self {
		Self {
			data: RefCell::new(MemoryData { habits, completions: 0 }),
			latency_ms,
		}
	}

	/// Creates a store holding a few example habits.
	pub fn with_sample_habits(latency_ms: u32) -> Self {
		let now = Utc::now();
		let sample = |id: HabitId, title: &str, description: Option<&str>, category, is_public, track_time| Habit {
			id,
			user_id: SAMPLE_USER_ID,
			title: String::from(title),
			description: description.map(String::from),
			category,
			is_public,
			track_time,
			created_at: now,
			updated_at: now,
		};
		let habits = vec![
			sample(1, "Exercise", Some("30 minutes of cardio"), HabitCategory::Health, true, true),
			sample(2, "Read 20 pages", Some("Before going to sleep"), HabitCategory::Study, false, false),
			sample(3, "Meditate", None, HabitCategory::Health, true, true),
		];
		Self::new(habits, latency_ms)
	}

	async fn simulate_latency(&self) {
		if self.latency_ms > 0 {
			TimeoutFuture::new(self.latency_ms).await;
		}
	}
}

impl HabitStore for MemoryHabitStore {
	fn list(&self) -> LocalBoxFuture<'_, Result<Vec<Habit>, ApiError>> {
		async move {
			self.simulate_latency().await;
			Ok(self.data.borrow().habits.clone())
		}
		.boxed_local()
	}

	fn get(&self, id: HabitId) -> LocalBoxFuture<'_, Result<Habit, ApiError>> {
		async move {
			self.simulate_latency().await;
			self.data
				.borrow()
				.habits
				.iter()
				.find(|habit| habit.id == id)
				.cloned()
				.ok_or_else(|| ApiError::not_found(HABIT_NOT_FOUND))
		}
		.boxed_local()
	}

	fn create<'a>(&'a self, habit: &'a NewHabit) -> LocalBoxFuture<'a, Result<Habit, ApiError>> {
		async move {
			self.simulate_latency().await;
			let mut data = self.data.borrow_mut();
			let id = data.habits.iter().map(|habit| habit.id).max().unwrap_or(0) + 1;
			let now = Utc::now();
			let new_habit = Habit {
				id,
				user_id: SAMPLE_USER_ID,
				title: habit.title.clone(),
				description: habit.description.clone(),
				category: habit.category,
				is_public: habit.is_public,
				track_time: habit.track_time,
				created_at: now,
				updated_at: now,
			};
			data.habits.push(new_habit.clone());
			log::debug!("Created in-memory habit {}", id);
			Ok(new_habit)
		}
		.boxed_local()
	}

	fn update<'a>(&'a self, id: HabitId, changes: &'a HabitUpdate) -> LocalBoxFuture<'a, Result<Habit, ApiError>> {
		async move {
			self.simulate_latency().await;
			let mut data = self.data.borrow_mut();
			let Some(habit) = data.habits.iter_mut().find(|habit| habit.id == id) else {
				return Err(ApiError::not_found(HABIT_NOT_FOUND));
			};
			habit.apply_update(changes);
			habit.updated_at = Utc::now();
			log::debug!("Updated in-memory habit {}", id);
			Ok(habit.clone())
		}
		.boxed_local()
	}

	fn delete(&self, id: HabitId) -> LocalBoxFuture<'_, Result<(), ApiError>> {
		async move {
			self.simulate_latency().await;
			let mut data = self.data.borrow_mut();
			let Some(index) = data.habits.iter().position(|habit| habit.id == id) else {
				return Err(ApiError::not_found(HABIT_NOT_FOUND));
			};
			data.habits.remove(index);
			log::debug!("Deleted in-memory habit {}", id);
			Ok(())
		}
		.boxed_local()
	}

	fn complete(&self, id: HabitId, time_spent: Option<u32>) -> LocalBoxFuture<'_, Result<HabitCompletion, ApiError>> {
		async move {
			self.simulate_latency().await;
			let mut data = self.data.borrow_mut();
			if !data.habits.iter().any(|habit| habit.id == id) {
				return Err(ApiError::not_found(HABIT_NOT_FOUND));
			}
			data.completions += 1;
			Ok(HabitCompletion {
				id: data.completions,
				habit_id: id,
				completed_at: Utc::now(),
				time_spent,
			})
		}
		.boxed_local()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use futures::executor::block_on;

	fn new_habit(title: &str) -> NewHabit {
		NewHabit {
			title: String::from(title),
			description: None,
			category: HabitCategory::Work,
			is_public: false,
			track_time: false,
		}
	}

	#[test]
	fn sample_store_lists_three_habits() {
		let store = MemoryHabitStore::with_sample_habits(0);
		let habits = block_on(store.list()).unwrap();
		let ids: Vec<HabitId> = habits.iter().map(|habit| habit.id).collect();
		assert_eq!(ids, vec![1, 2, 3]);
	}

	#[test]
	fn created_habits_get_the_next_id() {
		let store = MemoryHabitStore::with_sample_habits(0);
		block_on(store.delete(2)).unwrap();
		let created = block_on(store.create(&new_habit("Write a journal entry"))).unwrap();
		assert_eq!(created.id, 4);
		assert_eq!(created.category, HabitCategory::Work);
		assert_eq!(block_on(store.get(4)).unwrap(), created);

		let empty = MemoryHabitStore::default();
		assert_eq!(block_on(empty.create(&new_habit("Drink water"))).unwrap().id, 1);
	}

	#[test]
	fn updates_merge_present_fields() {
		let store = MemoryHabitStore::with_sample_habits(0);
		let before = block_on(store.get(1)).unwrap();
		let changes = HabitUpdate {
			title: Some(String::from("Exercise outdoors")),
			..Default::default()
		};
		let updated = block_on(store.update(1, &changes)).unwrap();
		assert_eq!(updated.title, "Exercise outdoors");
		assert_eq!(updated.description, before.description);
		assert!(updated.updated_at >= before.updated_at);
		assert_eq!(block_on(store.get(1)).unwrap(), updated);
	}

	#[test]
	fn missing_habits_are_not_found() {
		let store = MemoryHabitStore::with_sample_habits(0);
		let not_found = Some(404);
		assert_eq!(block_on(store.get(42)).unwrap_err().status(), not_found);
		assert_eq!(
			block_on(store.update(42, &HabitUpdate::default())).unwrap_err().status(),
			not_found
		);
		assert_eq!(block_on(store.delete(42)).unwrap_err().status(), not_found);
		assert_eq!(block_on(store.complete(42, None)).unwrap_err().status(), not_found);
	}

	#[test]
	fn deleted_habits_disappear() {
		let store = MemoryHabitStore::with_sample_habits(0);
		block_on(store.delete(1)).unwrap();
		assert_eq!(block_on(store.list()).unwrap().len(), 2);
		assert!(block_on(store.get(1)).is_err());
	}

	#[test]
	fn completions_are_numbered() {
		let store = MemoryHabitStore::with_sample_habits(0);
		let first = block_on(store.complete(3, Some(15))).unwrap();
		let second = block_on(store.complete(1, None)).unwrap();
		assert_eq!((first.id, first.habit_id, first.time_spent), (1, 3, Some(15)));
		assert_eq!((second.id, second.habit_id, second.time_spent), (2, 1, None));
	}
}
