use serde::{Deserialize, Serialize};

use crate::utils::errors::RenderError;

/// One completed match as the `/api/next_battles` endpoint returns it.
///
/// Tower HP values arrive as numeric strings and the deck lists as a
/// stringified list with single quotes (`"['Knight', 'Archers', ...]"`),
/// both artifacts of how the backend stores score rows.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Battle {
    pub time: String,
    pub game_mode: String,

    pub player1_name: String,
    pub player1_crowns: u32,
    pub player1_king_hp: String,
    pub player1_princess1_hp: String,
    pub player1_princess2_hp: String,
    pub player1_elixir_leaked: f64,
    pub player1_deck_string: String,

    pub player2_name: String,
    pub player2_crowns: u32,
    pub player2_king_hp: String,
    pub player2_princess1_hp: String,
    pub player2_princess2_hp: String,
    pub player2_elixir_leaked: f64,
    pub player2_deck_string: String,
}

impl Battle {
    /// Card names of player 1's deck, in play order.
    pub fn player1_deck(&self) -> Result<Vec<String>, RenderError> {
        parse_deck_string(&self.player1_deck_string)
    }

    /// Card names of player 2's deck, in play order.
    pub fn player2_deck(&self) -> Result<Vec<String>, RenderError> {
        parse_deck_string(&self.player2_deck_string)
    }
}

/// Decodes a single-quoted deck list into card names.
///
/// # Arguments
/// * `deck_string` - The raw deck column value, e.g. `"['Knight', 'Mega Minion']"`.
///
/// # Returns
/// * `Ok(Vec<String>)` - The card names.
/// * `Err(RenderError::DeckParse)` - If the value is not a well-formed list.
pub fn parse_deck_string(deck_string: &str) -> Result<Vec<String>, RenderError> {
    let json = deck_string.replace('\'', "\"");
    serde_json::from_str::<Vec<String>>(&json)
        .map_err(|_| RenderError::DeckParse(deck_string.to_string()))
}
