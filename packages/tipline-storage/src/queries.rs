use sqlx::QueryBuilder;
use uuid::Uuid;

use crate::{
	Error, Result,
	db::Db,
	models::{ConsentRecord, NewConsent, NewTip, TipFilter, TipRecord},
};

pub async fn insert_tip(db: &Db, tip: &NewTip) -> Result<Uuid> {
	let id = Uuid::new_v4();

	sqlx::query("INSERT INTO tips (id, category, tip, url) VALUES ($1, $2, $3, $4)")
		.bind(id)
		.bind(tip.category.as_str())
		.bind(tip.tip.as_str())
		.bind(tip.url.as_str())
		.execute(&db.pool)
		.await?;

	Ok(id)
}

pub async fn list_tips(db: &Db, filter: &TipFilter) -> Result<Vec<TipRecord>> {
	if let Some(limit) = filter.limit
		&& limit <= 0
	{
		return Err(Error::InvalidArgument("limit must be greater than zero.".to_string()));
	}

	let mut builder =
		QueryBuilder::new("SELECT id, category, tip, url, created_at FROM tips");

	if let Some(category) = &filter.category {
		builder.push(" WHERE category = ");
		builder.push_bind(category);
	}
	if filter.order_by_created_desc {
		builder.push(" ORDER BY created_at DESC");
	}
	if let Some(limit) = filter.limit {
		builder.push(" LIMIT ");
		builder.push_bind(limit);
	}

	let tips: Vec<TipRecord> = builder.build_query_as().fetch_all(&db.pool).await?;

	Ok(tips)
}

/// The store's atomic batch-write primitive: delete everything, insert the
/// seed list, commit as one transaction.
pub async fn replace_all_tips(db: &Db, tips: &[NewTip]) -> Result<usize> {
	let mut tx = db.pool.begin().await?;

	sqlx::query("DELETE FROM tips").execute(&mut *tx).await?;

	for tip in tips {
		sqlx::query("INSERT INTO tips (id, category, tip, url) VALUES ($1, $2, $3, $4)")
			.bind(Uuid::new_v4())
			.bind(tip.category.as_str())
			.bind(tip.tip.as_str())
			.bind(tip.url.as_str())
			.execute(&mut *tx)
			.await?;
	}

	tx.commit().await?;

	Ok(tips.len())
}

pub async fn insert_consent(db: &Db, consent: &NewConsent) -> Result<Uuid> {
	let id = Uuid::new_v4();

	sqlx::query("INSERT INTO consents (id, user_id, intent) VALUES ($1, $2, $3)")
		.bind(id)
		.bind(consent.user_id.as_str())
		.bind(consent.intent.as_str())
		.execute(&db.pool)
		.await?;

	Ok(id)
}

pub async fn consents_by_intent(db: &Db, intent: &str) -> Result<Vec<ConsentRecord>> {
	let consents: Vec<ConsentRecord> = sqlx::query_as(
		"SELECT id, user_id, intent, created_at FROM consents WHERE intent = $1 ORDER BY created_at",
	)
	.bind(intent)
	.fetch_all(&db.pool)
	.await?;

	Ok(consents)
}
