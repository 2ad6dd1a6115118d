use std::time::Duration;

use color_eyre::{Result, eyre};
use reqwest::Client;
use serde_json::Value;

/// Service-to-service credential scoped to the push-delivery capability.
#[derive(Clone)]
pub struct AccessToken {
	pub token: String,
}

pub async fn acquire(cfg: &tipline_config::Push) -> Result<AccessToken> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let form = [
		("grant_type", "client_credentials"),
		("client_id", cfg.client_id.as_str()),
		("client_secret", cfg.client_secret.as_str()),
		("scope", cfg.scope.as_str()),
	];
	let res = client.post(&cfg.token_url).form(&form).send().await?;
	let json: Value = res.error_for_status()?.json().await?;

	parse_token_response(json)
}

fn parse_token_response(json: Value) -> Result<AccessToken> {
	let token = json
		.get("access_token")
		.and_then(|v| v.as_str())
		.ok_or_else(|| eyre::eyre!("Token response is missing access_token."))?;

	if token.is_empty() {
		return Err(eyre::eyre!("Token response access_token is empty."));
	}

	Ok(AccessToken { token: token.to_string() })
}
