use crate::{Result, TipService, WebhookRequest, WebhookResponse};
use tipline_domain::{NOTIFICATION_INTENT, PermissionRequest, Reply};

const PERMISSION_SPEECH: &str = "I can send you a push notification whenever there's a new tip.";
const PERMISSION_REASON: &str = "to alert you of new tips";

impl TipService {
	/// First half of the opt-in dialogue: ask the platform to run its native
	/// permission prompt. The verdict arrives later as a separate
	/// finish_push_setup activation.
	pub(crate) async fn setup_push(&self, req: WebhookRequest) -> Result<WebhookResponse> {
		let reply = Reply::ask(PERMISSION_SPEECH).with_permission_request(PermissionRequest {
			reason: PERMISSION_REASON.to_string(),
			intent: NOTIFICATION_INTENT.to_string(),
		});

		Ok(WebhookResponse { reply, user_flags: req.user_flags })
	}
}
