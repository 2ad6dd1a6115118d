/// The one intent push fanout delivers for. A granted permission unlocks it,
/// and every consent row names it.
pub const NOTIFICATION_INTENT: &str = "tell_latest_tip";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
	TellTip,
	SetupPush,
	FinishPushSetup,
	SetupUpdate,
	FinishUpdateSetup,
}

impl Intent {
	pub fn parse(name: &str) -> Option<Self> {
		match name {
			"tell_latest_tip" => Some(Self::TellTip),
			"setup_push" => Some(Self::SetupPush),
			"finish_push_setup" => Some(Self::FinishPushSetup),
			"setup_update" => Some(Self::SetupUpdate),
			"finish_update_setup" => Some(Self::FinishUpdateSetup),
			_ => None,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::TellTip => "tell_latest_tip",
			Self::SetupPush => "setup_push",
			Self::FinishPushSetup => "finish_push_setup",
			Self::SetupUpdate => "setup_update",
			Self::FinishUpdateSetup => "finish_update_setup",
		}
	}
}
