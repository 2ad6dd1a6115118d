use std::sync::Arc;

use tipline_service::TipService;
use tipline_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<TipService>,
}
impl AppState {
	pub async fn new(config: tipline_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema().await?;

		let service = TipService::new(config, db);

		Ok(Self { service: Arc::new(service) })
	}

	pub fn with_service(service: TipService) -> Self {
		Self { service: Arc::new(service) }
	}
}
