mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Postgres, Push, Security, Service, Storage};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.service.admin_bind.is_empty() {
		return Err(Error::Validation {
			message: "service.admin_bind must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.pool_max_conns == 0 {
		return Err(Error::Validation {
			message: "storage.postgres.pool_max_conns must be greater than zero.".to_string(),
		});
	}
	if cfg.storage.seed_path.is_empty() {
		return Err(Error::Validation {
			message: "storage.seed_path must be non-empty.".to_string(),
		});
	}
	if cfg.push.token_url.is_empty() {
		return Err(Error::Validation { message: "push.token_url must be non-empty.".to_string() });
	}
	if cfg.push.client_id.is_empty() {
		return Err(Error::Validation { message: "push.client_id must be non-empty.".to_string() });
	}
	if cfg.push.client_secret.is_empty() {
		return Err(Error::Validation {
			message: "push.client_secret must be non-empty.".to_string(),
		});
	}
	if cfg.push.scope.is_empty() {
		return Err(Error::Validation { message: "push.scope must be non-empty.".to_string() });
	}
	if cfg.push.api_base.is_empty() {
		return Err(Error::Validation { message: "push.api_base must be non-empty.".to_string() });
	}
	if cfg.push.path.is_empty() {
		return Err(Error::Validation { message: "push.path must be non-empty.".to_string() });
	}
	if cfg.push.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "push.timeout_ms must be greater than zero.".to_string(),
		});
	}
	if cfg.push.notification_title.is_empty() {
		return Err(Error::Validation {
			message: "push.notification_title must be non-empty.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.service.http_bind = cfg.service.http_bind.trim().to_string();
	cfg.service.admin_bind = cfg.service.admin_bind.trim().to_string();
	cfg.storage.seed_path = cfg.storage.seed_path.trim().to_string();
	cfg.push.token_url = cfg.push.token_url.trim().to_string();
	cfg.push.api_base = cfg.push.api_base.trim().to_string();
	cfg.push.path = cfg.push.path.trim().to_string();
}
