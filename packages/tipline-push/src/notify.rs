use std::time::Duration;

use color_eyre::Result;
use reqwest::Client;
use serde_json::Value;

use crate::token::AccessToken;

/// One outbound notification: the displayed title plus the target user and
/// the intent the platform invokes when the user taps it.
#[derive(Debug, Clone)]
pub struct PushMessage {
	pub title: String,
	pub user_id: String,
	pub intent: String,
}

pub async fn send(
	cfg: &tipline_config::Push,
	token: &AccessToken,
	msg: &PushMessage,
) -> Result<u16> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let res = client
		.post(url)
		.bearer_auth(&token.token)
		.json(&payload(msg))
		.send()
		.await?;
	let status = res.error_for_status()?.status();

	Ok(status.as_u16())
}

fn payload(msg: &PushMessage) -> Value {
	serde_json::json!({
		"customPushMessage": {
			"userNotification": {
				"title": msg.title,
			},
			"target": {
				"userId": msg.user_id,
				"intent": msg.intent,
			},
		}
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn payload_targets_the_user_and_intent() {
		let msg = PushMessage {
			title: "Here's a fresh tip for you".to_string(),
			user_id: "user-1".to_string(),
			intent: "tell_latest_tip".to_string(),
		};
		let body = payload(&msg);

		assert_eq!(body["customPushMessage"]["userNotification"]["title"], msg.title.as_str());
		assert_eq!(body["customPushMessage"]["target"]["userId"], "user-1");
		assert_eq!(body["customPushMessage"]["target"]["intent"], "tell_latest_tip");
	}
}
