pub mod notify;
pub mod token;

pub use notify::PushMessage;
pub use token::AccessToken;
