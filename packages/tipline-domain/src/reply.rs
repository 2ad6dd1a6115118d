use serde::{Deserialize, Serialize};

use crate::upsell::{Upsell, UserFlags};

pub const LEARN_MORE_LINK_TITLE: &str = "Learn more!";
pub const NO_TIP_SPEECH: &str =
	"I don't have a tip for that category yet. Try another category, or ask for a random tip.";

/// What a webhook activation hands back to the conversational platform: the
/// spoken text plus optional visual affordances. `expect_user_response`
/// distinguishes a mid-dialogue prompt from a conversation-closing reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
	pub speech: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub card: Option<Card>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub suggestions: Vec<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub permission_request: Option<PermissionRequest>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub registration_request: Option<RegistrationRequest>,
	pub expect_user_response: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
	pub text: String,
	pub link_title: String,
	pub link_url: String,
}

/// Asks the platform to run its native push-permission prompt, naming the
/// intent a grant unlocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionRequest {
	pub reason: String,
	pub intent: String,
}

/// Asks the platform to run its managed daily-registration prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
	pub category: String,
}

impl Reply {
	pub fn ask(speech: impl Into<String>) -> Self {
		Self {
			speech: speech.into(),
			card: None,
			suggestions: Vec::new(),
			permission_request: None,
			registration_request: None,
			expect_user_response: true,
		}
	}

	pub fn close(speech: impl Into<String>) -> Self {
		Self { expect_user_response: false, ..Self::ask(speech) }
	}

	pub fn with_card(mut self, card: Card) -> Self {
		self.card = Some(card);

		self
	}

	pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
		self.suggestions.push(suggestion.into());

		self
	}

	pub fn with_permission_request(mut self, request: PermissionRequest) -> Self {
		self.permission_request = Some(request);

		self
	}

	pub fn with_registration_request(mut self, request: RegistrationRequest) -> Self {
		self.registration_request = Some(request);

		self
	}
}

#[derive(Debug, Clone, Copy)]
pub struct TipView<'a> {
	pub tip: &'a str,
	pub url: &'a str,
}

/// Composes the spoken tip (or the no-tip fallback) and at most one upsell
/// chip. Offering an upsell sets its flag, so the same user is never nudged
/// twice for the same feature.
pub fn tip_reply(tip: Option<TipView<'_>>, flags: &mut UserFlags) -> Reply {
	let mut reply = match tip {
		Some(view) => Reply::ask(view.tip).with_card(Card {
			text: view.tip.to_string(),
			link_title: LEARN_MORE_LINK_TITLE.to_string(),
			link_url: view.url.to_string(),
		}),
		None => Reply::ask(NO_TIP_SPEECH),
	};

	if let Some(upsell) = Upsell::next(flags) {
		flags.mark(upsell);
		reply = reply.with_suggestion(upsell.suggestion());
	}

	reply
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tip_reply_carries_the_tip_and_a_card() {
		let mut flags = UserFlags { daily_notification_asked: true, push_notification_asked: true };
		let view = TipView { tip: "Test on a real device.", url: "https://example.test/devices" };
		let reply = tip_reply(Some(view), &mut flags);

		assert_eq!(reply.speech, "Test on a real device.");

		let card = reply.card.expect("A found tip must carry a card.");

		assert_eq!(card.link_title, LEARN_MORE_LINK_TITLE);
		assert_eq!(card.link_url, "https://example.test/devices");
	}

	#[test]
	fn missing_tip_falls_back_without_a_card() {
		let mut flags = UserFlags { daily_notification_asked: true, push_notification_asked: true };
		let reply = tip_reply(None, &mut flags);

		assert_eq!(reply.speech, NO_TIP_SPEECH);
		assert!(reply.card.is_none());
		assert!(reply.expect_user_response);
	}

	#[test]
	fn offers_at_most_one_upsell_and_marks_it() {
		let mut flags = UserFlags::default();
		let reply = tip_reply(None, &mut flags);

		assert_eq!(reply.suggestions, vec![Upsell::DailyUpdates.suggestion().to_string()]);
		assert!(flags.daily_notification_asked);
		assert!(!flags.push_notification_asked);

		let reply = tip_reply(None, &mut flags);

		assert_eq!(reply.suggestions, vec![Upsell::PushNotifications.suggestion().to_string()]);
		assert!(flags.push_notification_asked);
	}

	#[test]
	fn offers_nothing_once_both_flags_are_set() {
		let mut flags = UserFlags::default();

		flags.mark(Upsell::DailyUpdates);
		flags.mark(Upsell::PushNotifications);

		let reply = tip_reply(None, &mut flags);

		assert!(reply.suggestions.is_empty());
	}
}
