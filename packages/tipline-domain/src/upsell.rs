use serde::{Deserialize, Serialize};

/// Cross-conversation flag bag owned by the conversational platform. It
/// arrives with every webhook call and the (possibly updated) bag is returned
/// in the response; nothing here is process state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFlags {
	#[serde(rename = "DAILY_NOTIFICATION_ASKED", default)]
	pub daily_notification_asked: bool,
	#[serde(rename = "PUSH_NOTIFICATION_ASKED", default)]
	pub push_notification_asked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsell {
	DailyUpdates,
	PushNotifications,
}

impl Upsell {
	/// The next upsell to offer, if any. Daily updates come first; push comes
	/// only after daily has been offered; never both in one reply. Once a
	/// flag is set the upsell is never offered again (no expiry).
	pub fn next(flags: &UserFlags) -> Option<Self> {
		if !flags.daily_notification_asked {
			Some(Self::DailyUpdates)
		} else if !flags.push_notification_asked {
			Some(Self::PushNotifications)
		} else {
			None
		}
	}

	pub fn suggestion(&self) -> &'static str {
		match self {
			Self::DailyUpdates => "Send daily",
			Self::PushNotifications => "Alert me of new tips",
		}
	}
}

impl UserFlags {
	pub fn mark(&mut self, upsell: Upsell) {
		match upsell {
			Upsell::DailyUpdates => self.daily_notification_asked = true,
			Upsell::PushNotifications => self.push_notification_asked = true,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn offers_daily_before_push() {
		let flags = UserFlags::default();

		assert_eq!(Upsell::next(&flags), Some(Upsell::DailyUpdates));
	}

	#[test]
	fn offers_push_after_daily_was_shown() {
		let mut flags = UserFlags::default();

		flags.mark(Upsell::DailyUpdates);

		assert_eq!(Upsell::next(&flags), Some(Upsell::PushNotifications));
	}

	#[test]
	fn offers_nothing_once_both_were_shown() {
		let mut flags = UserFlags::default();

		flags.mark(Upsell::DailyUpdates);
		flags.mark(Upsell::PushNotifications);

		assert_eq!(Upsell::next(&flags), None);
	}

	#[test]
	fn marked_flags_stay_set() {
		let mut flags = UserFlags::default();

		flags.mark(Upsell::DailyUpdates);
		flags.mark(Upsell::DailyUpdates);

		assert!(flags.daily_notification_asked);
		assert!(!flags.push_notification_asked);
	}

	#[test]
	fn empty_bag_decodes_to_all_unset() {
		let flags: UserFlags = serde_json::from_str("{}").expect("Empty bag must decode.");

		assert_eq!(flags, UserFlags::default());
	}

	#[test]
	fn round_trips_platform_key_names() {
		let flags = UserFlags { daily_notification_asked: true, push_notification_asked: false };
		let json = serde_json::to_value(flags).expect("Flags must encode.");

		assert_eq!(json["DAILY_NOTIFICATION_ASKED"], true);
		assert_eq!(json["PUSH_NOTIFICATION_ASKED"], false);
	}
}
