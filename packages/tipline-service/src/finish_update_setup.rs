use crate::{Result, TipService, WebhookRequest, WebhookResponse};
use tipline_domain::Reply;

const REGISTERED_STATUS_OK: &str = "OK";
const CONFIRMED_SPEECH: &str = "Okay, I'll send you a tip every day.";
const DECLINED_SPEECH: &str = "Okay, no daily tips then.";

impl TipService {
	/// The registration verdict arrives synchronously in the same turn as a
	/// status code; both branches close the conversation.
	pub(crate) async fn finish_update_setup(&self, req: WebhookRequest) -> Result<WebhookResponse> {
		let registered = req
			.platform
			.registered
			.as_ref()
			.map(|registration| registration.status == REGISTERED_STATUS_OK)
			.unwrap_or(false);
		let speech = if registered { CONFIRMED_SPEECH } else { DECLINED_SPEECH };

		Ok(WebhookResponse { reply: Reply::close(speech), user_flags: req.user_flags })
	}
}
