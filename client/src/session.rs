use web_sys::{window, Storage};

const TOKEN_KEY: &str = "token";

fn local_storage() -> Option<Storage> {
	window()?.local_storage().ok().flatten()
}

/// Gets the bearer token saved by the last successful login, if there is one.
pub fn stored_token() -> Option<String> {
	local_storage()?
		.get_item(TOKEN_KEY)
		.ok()
		.flatten()
		.filter(|token| !token.is_empty())
}

pub fn store_token(token: &str) {
	let Some(storage) = local_storage() else {
		log::warn!("Local storage is unavailable; the session won't survive a reload");
		return;
	};
	if storage.set_item(TOKEN_KEY, token).is_err() {
		log::warn!("Failed to save the session token");
	}
}

pub fn clear_token() {
	if let Some(storage) = local_storage() {
		if storage.remove_item(TOKEN_KEY).is_err() {
			log::warn!("Failed to remove the session token");
		}
	}
}

/// Formats the authorization header value for the stored token.
pub fn bearer_header() -> Option<String> {
	stored_token().map(|token| format!("Bearer {}", token))
}
