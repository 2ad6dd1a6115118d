pub mod intent;
pub mod reply;
pub mod selection;
pub mod upsell;

pub use intent::{Intent, NOTIFICATION_INTENT};
pub use reply::{Card, PermissionRequest, RegistrationRequest, Reply, TipView};
pub use upsell::{Upsell, UserFlags};
