pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Provider error: {message}")]
	Provider { message: String },
	#[error("Seed list error: {message}")]
	SeedList { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
}
impl From<tipline_storage::Error> for Error {
	fn from(err: tipline_storage::Error) -> Self {
		match err {
			tipline_storage::Error::Sqlx(inner) => Self::Storage { message: inner.to_string() },
			tipline_storage::Error::InvalidArgument(message) => Self::InvalidRequest { message },
		}
	}
}

impl From<color_eyre::Report> for Error {
	fn from(err: color_eyre::Report) -> Self {
		Self::Provider { message: err.to_string() }
	}
}
