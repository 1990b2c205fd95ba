use super::{path_segment, HttpClient};
use crate::error::ApiError;
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_net::http::Request;
use habit_tracker_shared::messages::auth::{
	AuthResponse, AvailabilityResponse, LoginCredentials, RegisterPayload, RegisterResponse,
};

/// The account endpoints of the API
pub trait AuthApi {
	fn login<'a>(&'a self, credentials: &'a LoginCredentials) -> LocalBoxFuture<'a, Result<AuthResponse, ApiError>>;

	fn register<'a>(&'a self, payload: &'a RegisterPayload) -> LocalBoxFuture<'a, Result<RegisterResponse, ApiError>>;

	fn check_username<'a>(&'a self, username: &'a str) -> LocalBoxFuture<'a, Result<AvailabilityResponse, ApiError>>;

	fn check_email<'a>(&'a self, email: &'a str) -> LocalBoxFuture<'a, Result<AvailabilityResponse, ApiError>>;
}

pub struct HttpAuthApi {
	client: HttpClient,
}

impl HttpAuthApi {
	pub fn new(client: HttpClient) -> Self {
		Self { client }
	}
}

impl AuthApi for HttpAuthApi {
	fn login<'a>(&'a self, credentials: &'a LoginCredentials) -> LocalBoxFuture<'a, Result<AuthResponse, ApiError>> {
		async move {
			let builder = Request::post(&self.client.url("/auth/login"));
			self.client.send_json(builder, credentials).await
		}
		.boxed_local()
	}

	fn register<'a>(&'a self, payload: &'a RegisterPayload) -> LocalBoxFuture<'a, Result<RegisterResponse, ApiError>> {
		async move {
			let builder = Request::post(&self.client.url("/auth/register"));
			self.client.send_json(builder, payload).await
		}
		.boxed_local()
	}

	fn check_username<'a>(&'a self, username: &'a str) -> LocalBoxFuture<'a, Result<AvailabilityResponse, ApiError>> {
		async move {
			let path = format!("/auth/check-username/{}", path_segment(username));
			self.client.send(Request::get(&self.client.url(&path))).await
		}
		.boxed_local()
	}

	fn check_email<'a>(&'a self, email: &'a str) -> LocalBoxFuture<'a, Result<AvailabilityResponse, ApiError>> {
		async move {
			let path = format!("/auth/check-email/{}", path_segment(email));
			self.client.send(Request::get(&self.client.url(&path))).await
		}
		.boxed_local()
	}
}
