use super::memory::MemoryHabitStore;
use super::HttpClient;
use crate::config::{ClientConfig, DataSource};
use crate::error::ApiError;
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_net::http::Request;
use habit_tracker_shared::messages::habits::{CompleteHabit, Habit, HabitCompletion, HabitId, HabitUpdate, NewHabit};
use std::rc::Rc;

/// Everything the dashboard can do with habits. Implemented both against the API and in memory.
pub trait HabitStore {
	fn list(&self) -> LocalBoxFuture<'_, Result<Vec<Habit>, ApiError>>;

	fn get(&self, id: HabitId) -> LocalBoxFuture<'_, Result<Habit, ApiError>>;

	fn create<'a>(&'a self, habit: &'a NewHabit) -> LocalBoxFuture<'a, Result<Habit, ApiError>>;

	fn update<'a>(&'a self, id: HabitId, changes: &'a HabitUpdate) -> LocalBoxFuture<'a, Result<Habit, ApiError>>;

	fn delete(&self, id: HabitId) -> LocalBoxFuture<'_, Result<(), ApiError>>;

	fn complete(&self, id: HabitId, time_spent: Option<u32>) -> LocalBoxFuture<'_, Result<HabitCompletion, ApiError>>;
}

/// Creates the habit store selected by the configuration.
pub fn habit_store_for(config: &ClientConfig) -> Rc<dyn HabitStore> {
	match config.data_source {
		DataSource::Memory => {
			log::info!("Using in-memory sample habits");
			Rc::new(MemoryHabitStore::with_sample_habits(config.mock_latency_ms))
		}
		DataSource::Http => Rc::new(HttpHabitStore::new(HttpClient::new(config))),
	}
}

pub struct HttpHabitStore {
	client: HttpClient,
}

impl HttpHabitStore {
	pub fn new(client: HttpClient) -> Self {
		Self { client }
	}

	fn habit_url(&self, id: HabitId) -> String {
		self.client.url(&format!("/habits/{}", id))
	}
}

impl HabitStore for HttpHabitStore {
	fn list(&self) -> LocalBoxFuture<'_, Result<Vec<Habit>, ApiError>> {
		async move { self.client.send(Request::get(&self.client.url("/habits"))).await }.boxed_local()
	}

	fn get(&self, id: HabitId) -> LocalBoxFuture<'_, Result<Habit, ApiError>> {
		async move { self.client.send(Request::get(&self.habit_url(id))).await }.boxed_local()
	}

	fn create<'a>(&'a self, habit: &'a NewHabit) -> LocalBoxFuture<'a, Result<Habit, ApiError>> {
		async move {
			self.client
				.send_json(Request::post(&self.client.url("/habits")), habit)
				.await
		}
		.boxed_local()
	}

	fn update<'a>(&'a self, id: HabitId, changes: &'a HabitUpdate) -> LocalBoxFuture<'a, Result<Habit, ApiError>> {
		async move { self.client.send_json(Request::put(&self.habit_url(id)), changes).await }.boxed_local()
	}

	fn delete(&self, id: HabitId) -> LocalBoxFuture<'_, Result<(), ApiError>> {
		async move { self.client.send_empty(Request::delete(&self.habit_url(id))).await }.boxed_local()
	}

	fn complete(&self, id: HabitId, time_spent: Option<u32>) -> LocalBoxFuture<'_, Result<HabitCompletion, ApiError>> {
		async move {
			let url = format!("{}/complete", self.habit_url(id));
			self.client
				.send_json(Request::post(&url), &CompleteHabit { time_spent })
				.await
		}
		.boxed_local()
	}
}
