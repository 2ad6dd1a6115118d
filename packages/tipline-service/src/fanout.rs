use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Result, TipService};
use tipline_domain::NOTIFICATION_INTENT;
use tipline_push::PushMessage;

/// The store's change notification for a freshly created tip. The record
/// already exists by the time this arrives; at-least-once delivery of the
/// trigger is accepted as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTipEvent {
	pub id: Uuid,
	pub category: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FanoutReport {
	pub attempted: usize,
	pub failed: usize,
}

impl TipService {
	/// Delivers one push per consent row naming the notification intent.
	/// Token acquisition is the blocking prerequisite: when it fails, the
	/// whole fanout aborts and nothing is sent. After that, recipients are
	/// independent; a failed send is logged and the loop keeps going. No
	/// retries anywhere.
	pub async fn notify_new_tip(&self, event: &NewTipEvent) -> Result<FanoutReport> {
		let token = self.push.acquire_token(&self.cfg.push).await?;
		let consents = self.stores.consents.by_intent(NOTIFICATION_INTENT).await?;
		let mut report = FanoutReport { attempted: 0, failed: 0 };

		for consent in &consents {
			let msg = PushMessage {
				title: self.cfg.push.notification_title.clone(),
				user_id: consent.user_id.clone(),
				intent: consent.intent.clone(),
			};

			report.attempted += 1;

			if let Err(err) = self.push.send(&self.cfg.push, &token, &msg).await {
				report.failed += 1;

				tracing::warn!(consent_id = %consent.id, error = %err, "Push delivery failed.");
			}
		}

		tracing::info!(
			tip_id = %event.id,
			category = %event.category,
			attempted = report.attempted,
			failed = report.failed,
			"Fanout finished."
		);

		Ok(report)
	}
}
