use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, TipService};
use tipline_domain::{Intent, Reply, UserFlags};

/// One intent invocation from the conversational platform. Activations are
/// stateless: everything a handler may touch arrives here, including the
/// user's cross-conversation flag bag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookRequest {
	pub intent: String,
	#[serde(default)]
	pub parameters: HashMap<String, String>,
	#[serde(default)]
	pub platform: PlatformArgs,
	#[serde(default)]
	pub user_flags: UserFlags,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformArgs {
	#[serde(rename = "PERMISSION", default, skip_serializing_if = "Option::is_none")]
	pub permission: Option<bool>,
	#[serde(rename = "UPDATES_USER_ID", default, skip_serializing_if = "Option::is_none")]
	pub updates_user_id: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub registered: Option<RegistrationStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationStatus {
	pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookResponse {
	pub reply: Reply,
	/// The flag bag always travels back, updated or not, so the platform can
	/// persist it for the next conversation.
	pub user_flags: UserFlags,
}

impl TipService {
	pub async fn handle(&self, req: WebhookRequest) -> Result<WebhookResponse> {
		let Some(intent) = Intent::parse(&req.intent) else {
			return Err(Error::InvalidRequest {
				message: format!("Unrecognized intent: {}.", req.intent),
			});
		};

		match intent {
			Intent::TellTip => self.tell_tip(req).await,
			Intent::SetupPush => self.setup_push(req).await,
			Intent::FinishPushSetup => self.finish_push_setup(req).await,
			Intent::SetupUpdate => self.setup_update(req).await,
			Intent::FinishUpdateSetup => self.finish_update_setup(req).await,
		}
	}
}
