use uuid::Uuid;

use crate::{
	BoxFuture, Result,
	db::Db,
	models::{ConsentRecord, NewConsent, NewTip, TipFilter, TipRecord},
	queries,
};

/// Contract of the tip collection. The service only ever talks to the store
/// through this seam, so tests can swap in an in-memory implementation.
pub trait TipStore
where
	Self: Send + Sync,
{
	fn query<'a>(&'a self, filter: &'a TipFilter) -> BoxFuture<'a, Result<Vec<TipRecord>>>;
	fn insert<'a>(&'a self, tip: &'a NewTip) -> BoxFuture<'a, Result<Uuid>>;
	fn replace_all<'a>(&'a self, tips: &'a [NewTip]) -> BoxFuture<'a, Result<usize>>;
}

/// Contract of the consent collection. `insert` returns the store-assigned
/// id; callers are free to discard it. There is no uniqueness enforcement on
/// (user_id, intent).
pub trait ConsentStore
where
	Self: Send + Sync,
{
	fn by_intent<'a>(&'a self, intent: &'a str) -> BoxFuture<'a, Result<Vec<ConsentRecord>>>;
	fn insert<'a>(&'a self, consent: &'a NewConsent) -> BoxFuture<'a, Result<Uuid>>;
}

pub struct PgTipStore {
	db: Db,
}
impl PgTipStore {
	pub fn new(db: Db) -> Self {
		Self { db }
	}
}
impl TipStore for PgTipStore {
	fn query<'a>(&'a self, filter: &'a TipFilter) -> BoxFuture<'a, Result<Vec<TipRecord>>> {
		Box::pin(queries::list_tips(&self.db, filter))
	}

	fn insert<'a>(&'a self, tip: &'a NewTip) -> BoxFuture<'a, Result<Uuid>> {
		Box::pin(queries::insert_tip(&self.db, tip))
	}

	fn replace_all<'a>(&'a self, tips: &'a [NewTip]) -> BoxFuture<'a, Result<usize>> {
		Box::pin(queries::replace_all_tips(&self.db, tips))
	}
}

pub struct PgConsentStore {
	db: Db,
}
impl PgConsentStore {
	pub fn new(db: Db) -> Self {
		Self { db }
	}
}
impl ConsentStore for PgConsentStore {
	fn by_intent<'a>(&'a self, intent: &'a str) -> BoxFuture<'a, Result<Vec<ConsentRecord>>> {
		Box::pin(queries::consents_by_intent(&self.db, intent))
	}

	fn insert<'a>(&'a self, consent: &'a NewConsent) -> BoxFuture<'a, Result<Uuid>> {
		Box::pin(queries::insert_consent(&self.db, consent))
	}
}
