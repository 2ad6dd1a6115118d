use std::fs;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, TipService};
use tipline_storage::models::NewTip;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetReport {
	pub seeded: usize,
}

#[derive(Debug, Deserialize)]
struct SeedTip {
	category: String,
	tip: String,
	url: String,
}

impl TipService {
	/// Administrative reseed: drop every tip and load the fixed list from
	/// `storage.seed_path`, as one batch write.
	pub async fn reset_tips(&self) -> Result<ResetReport> {
		let seed_path = self.cfg.storage.seed_path.as_str();
		let raw = fs::read_to_string(seed_path).map_err(|err| Error::SeedList {
			message: format!("Failed to read seed list at {seed_path}: {err}."),
		})?;
		let seeds: Vec<SeedTip> = serde_json::from_str(&raw).map_err(|err| Error::SeedList {
			message: format!("Failed to parse seed list at {seed_path}: {err}."),
		})?;
		let tips: Vec<NewTip> = seeds
			.into_iter()
			.map(|seed| NewTip { category: seed.category, tip: seed.tip, url: seed.url })
			.collect();
		let seeded = self.stores.tips.replace_all(&tips).await?;

		tracing::info!(seeded, "Tip collection reseeded.");

		Ok(ResetReport { seeded })
	}
}
