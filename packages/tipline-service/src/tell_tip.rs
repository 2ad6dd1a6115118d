use crate::{Result, TipService, WebhookRequest, WebhookResponse};
use tipline_domain::{TipView, reply, selection};
use tipline_storage::models::TipFilter;

/// Pseudo-category that selects across the whole collection.
pub const RANDOM_CATEGORY: &str = "random";

impl TipService {
	pub(crate) async fn tell_tip(&self, req: WebhookRequest) -> Result<WebhookResponse> {
		let mut flags = req.user_flags;
		let category = req
			.parameters
			.get("category")
			.map(|value| value.trim())
			.filter(|value| !value.is_empty())
			.unwrap_or(RANDOM_CATEGORY);
		let filter = if category == RANDOM_CATEGORY {
			TipFilter::default()
		} else {
			TipFilter { category: Some(category.to_string()), ..TipFilter::default() }
		};
		let tips = self.stores.tips.query(&filter).await?;
		let picked = selection::pick(&mut rand::thread_rng(), &tips);
		let reply =
			reply::tip_reply(picked.map(|tip| TipView { tip: &tip.tip, url: &tip.url }), &mut flags);

		Ok(WebhookResponse { reply, user_flags: flags })
	}
}
