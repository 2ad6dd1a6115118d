use std::sync::{
	Mutex,
	atomic::{AtomicBool, AtomicI64, Ordering},
};

use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use tipline_storage::{
	BoxFuture, Result,
	models::{ConsentRecord, NewConsent, NewTip, TipFilter, TipRecord},
	store::{ConsentStore, TipStore},
};

/// In-memory tip collection. Records every filter it was queried with so
/// tests can assert how the store was asked, not just what came back.
#[derive(Default)]
pub struct MemoryTipStore {
	tips: Mutex<Vec<TipRecord>>,
	seen_filters: Mutex<Vec<TipFilter>>,
	stamp: AtomicI64,
}
impl MemoryTipStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_tips(tips: Vec<NewTip>) -> Self {
		let store = Self::new();

		{
			let mut held = store.tips.lock().unwrap_or_else(|err| err.into_inner());

			for tip in tips {
				let record = store.make_record(tip);

				held.push(record);
			}
		}

		store
	}

	pub fn records(&self) -> Vec<TipRecord> {
		self.tips.lock().unwrap_or_else(|err| err.into_inner()).clone()
	}

	pub fn seen_filters(&self) -> Vec<TipFilter> {
		self.seen_filters.lock().unwrap_or_else(|err| err.into_inner()).clone()
	}

	fn make_record(&self, tip: NewTip) -> TipRecord {
		// Monotonic stamps keep created_at ordering deterministic.
		let offset = self.stamp.fetch_add(1, Ordering::Relaxed);

		TipRecord {
			id: Uuid::new_v4(),
			category: tip.category,
			tip: tip.tip,
			url: tip.url,
			created_at: OffsetDateTime::now_utc() + Duration::microseconds(offset),
		}
	}
}
impl TipStore for MemoryTipStore {
	fn query<'a>(&'a self, filter: &'a TipFilter) -> BoxFuture<'a, Result<Vec<TipRecord>>> {
		Box::pin(async move {
			self.seen_filters.lock().unwrap_or_else(|err| err.into_inner()).push(filter.clone());

			let mut tips: Vec<TipRecord> = self
				.tips
				.lock()
				.unwrap_or_else(|err| err.into_inner())
				.iter()
				.filter(|tip| {
					filter.category.as_ref().map(|category| &tip.category == category).unwrap_or(true)
				})
				.cloned()
				.collect();

			if filter.order_by_created_desc {
				tips.sort_by(|a, b| b.created_at.cmp(&a.created_at));
			}
			if let Some(limit) = filter.limit {
				tips.truncate(limit.max(0) as usize);
			}

			Ok(tips)
		})
	}

	fn insert<'a>(&'a self, tip: &'a NewTip) -> BoxFuture<'a, Result<Uuid>> {
		Box::pin(async move {
			let record = self.make_record(tip.clone());
			let id = record.id;

			self.tips.lock().unwrap_or_else(|err| err.into_inner()).push(record);

			Ok(id)
		})
	}

	fn replace_all<'a>(&'a self, tips: &'a [NewTip]) -> BoxFuture<'a, Result<usize>> {
		Box::pin(async move {
			let records: Vec<TipRecord> =
				tips.iter().map(|tip| self.make_record(tip.clone())).collect();
			let mut held = self.tips.lock().unwrap_or_else(|err| err.into_inner());

			held.clear();
			held.extend(records);

			Ok(tips.len())
		})
	}
}

/// In-memory consent collection with optional write-fault injection.
#[derive(Default)]
pub struct MemoryConsentStore {
	consents: Mutex<Vec<ConsentRecord>>,
	fail_inserts: AtomicBool,
	stamp: AtomicI64,
}
impl MemoryConsentStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_consents(consents: Vec<NewConsent>) -> Self {
		let store = Self::new();

		{
			let mut held = store.consents.lock().unwrap_or_else(|err| err.into_inner());

			for consent in consents {
				let record = store.make_record(consent);

				held.push(record);
			}
		}

		store
	}

	/// Makes every subsequent insert fail, for exercising write-fault paths.
	pub fn fail_inserts(&self) {
		self.fail_inserts.store(true, Ordering::Relaxed);
	}

	pub fn records(&self) -> Vec<ConsentRecord> {
		self.consents.lock().unwrap_or_else(|err| err.into_inner()).clone()
	}

	fn make_record(&self, consent: NewConsent) -> ConsentRecord {
		let offset = self.stamp.fetch_add(1, Ordering::Relaxed);

		ConsentRecord {
			id: Uuid::new_v4(),
			user_id: consent.user_id,
			intent: consent.intent,
			created_at: OffsetDateTime::now_utc() + Duration::microseconds(offset),
		}
	}
}
impl ConsentStore for MemoryConsentStore {
	fn by_intent<'a>(&'a self, intent: &'a str) -> BoxFuture<'a, Result<Vec<ConsentRecord>>> {
		Box::pin(async move {
			let consents = self
				.consents
				.lock()
				.unwrap_or_else(|err| err.into_inner())
				.iter()
				.filter(|consent| consent.intent == intent)
				.cloned()
				.collect();

			Ok(consents)
		})
	}

	fn insert<'a>(&'a self, consent: &'a NewConsent) -> BoxFuture<'a, Result<Uuid>> {
		Box::pin(async move {
			if self.fail_inserts.load(Ordering::Relaxed) {
				return Err(tipline_storage::Error::Sqlx(sqlx::Error::PoolClosed));
			}

			let record = self.make_record(consent.clone());
			let id = record.id;

			self.consents.lock().unwrap_or_else(|err| err.into_inner()).push(record);

			Ok(id)
		})
	}
}
