use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TipRecord {
	pub id: Uuid,
	pub category: String,
	pub tip: String,
	pub url: String,
	pub created_at: OffsetDateTime,
}

/// One user's standing consent to push delivery for a named intent. Rows are
/// append-only; duplicates for the same (user_id, intent) are legal.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ConsentRecord {
	pub id: Uuid,
	pub user_id: String,
	pub intent: String,
	pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewTip {
	pub category: String,
	pub tip: String,
	pub url: String,
}

#[derive(Debug, Clone)]
pub struct NewConsent {
	pub user_id: String,
	pub intent: String,
}

#[derive(Debug, Clone, Default)]
pub struct TipFilter {
	/// `None` queries the full set (the "random" category).
	pub category: Option<String>,
	pub order_by_created_desc: bool,
	pub limit: Option<i64>,
}
