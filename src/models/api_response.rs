use serde::{Deserialize, Serialize};

use super::battle::Battle;

/// Message object the backend sends instead of a battle array once the
/// pagination cursor has moved past the oldest stored battle.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ApiMessage {
    pub message: String,
}

/// Exact sentinel text the backend uses to signal end-of-data.
pub const NO_MORE_BATTLES: &str = "No more battles to fetch.";

/// The `/api/next_battles` endpoint answers with either shape on status 200.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum NextBattlesBody {
    Battles(Vec<Battle>),
    Message(ApiMessage),
}
