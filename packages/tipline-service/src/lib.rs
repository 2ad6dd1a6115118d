pub mod fanout;
pub mod finish_push_setup;
pub mod finish_update_setup;
pub mod reset;
pub mod setup_push;
pub mod setup_update;
pub mod tell_tip;
pub mod webhook;

mod error;

pub use error::{Error, Result};
pub use fanout::{FanoutReport, NewTipEvent};
pub use reset::ResetReport;
pub use webhook::{PlatformArgs, RegistrationStatus, WebhookRequest, WebhookResponse};

use std::sync::Arc;

use tipline_config::Config;
use tipline_push::{AccessToken, PushMessage, notify, token};
use tipline_storage::{
	BoxFuture,
	db::Db,
	store::{ConsentStore, PgConsentStore, PgTipStore, TipStore},
};

/// Seam to the push-delivery transport. The default implementation talks to
/// the real endpoints; tests inject recording or failing stand-ins.
pub trait PushProvider
where
	Self: Send + Sync,
{
	fn acquire_token<'a>(
		&'a self,
		cfg: &'a tipline_config::Push,
	) -> BoxFuture<'a, color_eyre::Result<AccessToken>>;
	fn send<'a>(
		&'a self,
		cfg: &'a tipline_config::Push,
		token: &'a AccessToken,
		msg: &'a PushMessage,
	) -> BoxFuture<'a, color_eyre::Result<u16>>;
}

struct DefaultPush;

impl PushProvider for DefaultPush {
	fn acquire_token<'a>(
		&'a self,
		cfg: &'a tipline_config::Push,
	) -> BoxFuture<'a, color_eyre::Result<AccessToken>> {
		Box::pin(token::acquire(cfg))
	}

	fn send<'a>(
		&'a self,
		cfg: &'a tipline_config::Push,
		token: &'a AccessToken,
		msg: &'a PushMessage,
	) -> BoxFuture<'a, color_eyre::Result<u16>> {
		Box::pin(notify::send(cfg, token, msg))
	}
}

#[derive(Clone)]
pub struct Stores {
	pub tips: Arc<dyn TipStore>,
	pub consents: Arc<dyn ConsentStore>,
}
impl Stores {
	pub fn new(tips: Arc<dyn TipStore>, consents: Arc<dyn ConsentStore>) -> Self {
		Self { tips, consents }
	}

	pub fn postgres(db: Db) -> Self {
		Self {
			tips: Arc::new(PgTipStore::new(db.clone())),
			consents: Arc::new(PgConsentStore::new(db)),
		}
	}
}

pub struct TipService {
	pub cfg: Config,
	pub stores: Stores,
	pub push: Arc<dyn PushProvider>,
}
impl TipService {
	pub fn new(cfg: Config, db: Db) -> Self {
		Self { cfg, stores: Stores::postgres(db), push: Arc::new(DefaultPush) }
	}

	pub fn with_parts(cfg: Config, stores: Stores, push: Arc<dyn PushProvider>) -> Self {
		Self { cfg, stores, push }
	}
}
