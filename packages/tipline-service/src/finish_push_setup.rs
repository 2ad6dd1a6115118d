use crate::{Error, Result, TipService, WebhookRequest, WebhookResponse};
use tipline_domain::{NOTIFICATION_INTENT, Reply};
use tipline_storage::models::NewConsent;

const CONFIRMED_SPEECH: &str = "Great, I'll notify you whenever there's a new tip.";
const DECLINED_SPEECH: &str = "Okay, I won't notify you about new tips.";

impl TipService {
	/// Second half of the opt-in dialogue: the platform's asynchronous
	/// permission verdict. A consent row is written on a grant and only on a
	/// grant; either branch closes the conversation.
	pub(crate) async fn finish_push_setup(&self, req: WebhookRequest) -> Result<WebhookResponse> {
		let flags = req.user_flags;
		let permission = req.platform.permission.ok_or_else(|| Error::InvalidRequest {
			message: "finish_push_setup requires a PERMISSION platform argument.".to_string(),
		})?;

		if !permission {
			return Ok(WebhookResponse { reply: Reply::close(DECLINED_SPEECH), user_flags: flags });
		}

		let user_id = req
			.platform
			.updates_user_id
			.as_deref()
			.map(str::trim)
			.filter(|id| !id.is_empty())
			.ok_or_else(|| Error::InvalidRequest {
				message: "A granted permission must carry UPDATES_USER_ID.".to_string(),
			})?;
		let consent =
			NewConsent { user_id: user_id.to_string(), intent: NOTIFICATION_INTENT.to_string() };

		// The store-assigned id is the write's only output; nothing downstream
		// needs it.
		let _ = self.stores.consents.insert(&consent).await?;

		Ok(WebhookResponse { reply: Reply::close(CONFIRMED_SPEECH), user_flags: flags })
	}
}
