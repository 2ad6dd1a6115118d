use crate::{Result, TipService, WebhookRequest, WebhookResponse, tell_tip::RANDOM_CATEGORY};
use tipline_domain::{RegistrationRequest, Reply};

const REGISTRATION_SPEECH: &str = "I can send you a tip every day.";

impl TipService {
	/// Daily updates use the platform-managed registration primitive; unlike
	/// push opt-in, no state is persisted on this side.
	pub(crate) async fn setup_update(&self, req: WebhookRequest) -> Result<WebhookResponse> {
		let category = req
			.parameters
			.get("category")
			.map(|value| value.trim())
			.filter(|value| !value.is_empty())
			.unwrap_or(RANDOM_CATEGORY)
			.to_string();
		let reply = Reply::ask(REGISTRATION_SPEECH)
			.with_registration_request(RegistrationRequest { category });

		Ok(WebhookResponse { reply, user_flags: req.user_flags })
	}
}
