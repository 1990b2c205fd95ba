use knuffel::{Decode, DecodeScalar};

const CONFIG_FILE_NAME: &str = "config.kdl";
const BUNDLED_CONFIG: &str = include_str!("../config.kdl");

/// Where the habit list is stored
#[derive(Clone, Copy, Debug, Default, DecodeScalar, Eq, PartialEq)]
pub enum DataSource {
	/// Sample data kept in the page's memory; nothing is sent to the API
	#[default]
	Memory,
	/// The habit endpoints of the API
	Http,
}

#[derive(Clone, Debug, Decode, PartialEq)]
pub struct ClientConfig {
	#[knuffel(child, unwrap(argument))]
	pub api_url: String,
	#[knuffel(child, unwrap(argument), default)]
	pub data_source: DataSource,
	#[knuffel(child, unwrap(argument), default = 500)]
	pub debounce_delay_ms: u32,
	#[knuffel(child, unwrap(argument), default = 300)]
	pub mock_latency_ms: u32,
}

pub fn parse_config(config_file_contents: &str) -> Result<ClientConfig, knuffel::Error> {
	knuffel::parse(CONFIG_FILE_NAME, config_file_contents)
}

/// Parses the configuration that was bundled into the client at build time.
pub fn bundled_config() -> Result<ClientConfig, knuffel::Error> {
	parse_config(BUNDLED_CONFIG)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bundled_config_is_valid() {
		let config = bundled_config().unwrap();
		assert!(!config.api_url.is_empty());
		assert_eq!(config.debounce_delay_ms, 500);
	}

	#[test]
	fn optional_values_use_defaults() {
		let config = parse_config("api-url \"https://habits.example.com/api\"").unwrap();
		assert_eq!(config.api_url, "https://habits.example.com/api");
		assert_eq!(config.data_source, DataSource::Memory);
		assert_eq!(config.debounce_delay_ms, 500);
		assert_eq!(config.mock_latency_ms, 300);
	}

	#[test]
	fn data_source_is_read() {
		let config = parse_config("api-url \"http://localhost:8000\"\ndata-source \"http\"\nmock-latency-ms 0").unwrap();
		assert_eq!(config.data_source, DataSource::Http);
		assert_eq!(config.mock_latency_ms, 0);
	}

	#[test]
	fn missing_api_url_is_an_error() {
		assert!(parse_config("debounce-delay-ms 250").is_err());
	}
}
