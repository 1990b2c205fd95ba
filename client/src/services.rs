use crate::api::auth::{AuthApi, HttpAuthApi};
use crate::api::habits::{habit_store_for, HabitStore};
use crate::api::HttpClient;
use crate::config::ClientConfig;
use std::rc::Rc;

/// The configuration and API clients shared by every page
pub struct Services {
	pub config: ClientConfig,
	pub auth: Rc<dyn AuthApi>,
	pub habits: Rc<dyn HabitStore>,
}

impl Services {
	pub fn new(config: ClientConfig) -> Self {
		let auth = Rc::new(HttpAuthApi::new(HttpClient::new(&config)));
		let habits = habit_store_for(&config);
		Self { config, auth, habits }
	}
}
