use reqwest::StatusCode;

use crate::models::api_response::{NextBattlesBody, NO_MORE_BATTLES};
use crate::models::battle::Battle;
use crate::utils::errors::BattleFetchError;
use crate::SETTINGS;

/// Query for one page of battles, assembled from the page filters and the
/// timestamp cursor of the last rendered battle.
#[derive(Debug, Clone)]
pub struct BattleQuery {
    pub battle_time: String,
    pub game_mode_selection: String,
    /// Present only in a specific-player page context.
    pub player_tag: Option<String>,
    /// Sent alongside `player_tag`; the form value `"None"` means all enemies.
    pub enemy_selection: String,
}

/// Result of a page request. An empty `Page` is a normal (if unusual)
/// response; `EndOfData` is the backend's explicit sentinel and means the
/// load-more affordance should go away for good.
#[derive(Debug)]
pub enum NextBattles {
    Page(Vec<Battle>),
    EndOfData,
}

impl BattleQuery {
    /// Requests the next page of battles from the stats backend.
    ///
    /// # Returns
    /// * `Ok(NextBattles)` - A page of battles or the end-of-data sentinel.
    /// * `Err(BattleFetchError)` - Non-OK status, transport failure or an
    ///   undecodable body.
    pub async fn request(&self) -> Result<NextBattles, BattleFetchError> {
        let settings = SETTINGS.get().expect("Settings not initialized");
        let api_url = format!("{}/api/next_battles", settings.api_server);

        let mut params: Vec<(&str, &str)> = vec![
            ("battle-time", self.battle_time.as_str()),
            ("game-mode-selection", self.game_mode_selection.as_str()),
        ];
        if let Some(player_tag) = &self.player_tag {
            params.push(("player-tag", player_tag.as_str()));
            params.push(("enemy-selection", self.enemy_selection.as_str()));
        }

        let client = reqwest::Client::new();
        match client.get(api_url).query(&params).send().await {
            Err(error) => Err(BattleFetchError::Request(error.to_string())),
            Ok(response) => match response.status() {
                StatusCode::OK => {
                    let body = response
                        .text()
                        .await
                        .map_err(|e| BattleFetchError::Request(e.to_string()))?;
                    parse_next_battles(&body)
                }
                status => Err(BattleFetchError::HttpStatus(status.as_u16())),
            },
        }
    }
}

/// Decodes a 200-status body, which is either a battle array or the
/// end-of-data message object.
pub fn parse_next_battles(body: &str) -> Result<NextBattles, BattleFetchError> {
    match serde_json::from_str::<NextBattlesBody>(body) {
        Ok(NextBattlesBody::Battles(battles)) => Ok(NextBattles::Page(battles)),
        Ok(NextBattlesBody::Message(msg)) if msg.message == NO_MORE_BATTLES => {
            Ok(NextBattles::EndOfData)
        }
        Ok(NextBattlesBody::Message(msg)) => Err(BattleFetchError::InvalidBody(msg.message)),
        Err(error) => Err(BattleFetchError::InvalidBody(error.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BATTLE_JSON: &str = r#"{
        "time": "2024-03-01 18:30:12",
        "game_mode": "DraftMode",
        "player1_name": "Raue Haende",
        "player1_crowns": 2,
        "player1_king_hp": "4824",
        "player1_princess1_hp": "3052",
        "player1_princess2_hp": "3052",
        "player1_elixir_leaked": 3.7,
        "player1_deck_string": "['Knight', 'Archers']",
        "player2_name": "Gegner",
        "player2_crowns": 1,
        "player2_king_hp": "0",
        "player2_princess1_hp": "0",
        "player2_princess2_hp": "0",
        "player2_elixir_leaked": 11.0,
        "player2_deck_string": "['Golem', 'Baby Dragon']"
    }"#;

    #[test]
    fn test_parse_battle_array() {
        let body = format!("[{BATTLE_JSON}]");
        let next = parse_next_battles(&body).unwrap();
        match next {
            NextBattles::Page(battles) => {
                assert_eq!(battles.len(), 1);
                assert_eq!(battles[0].player1_name, "Raue Haende");
            }
            NextBattles::EndOfData => panic!("array must not parse as sentinel"),
        }
    }

    #[test]
    fn test_parse_empty_array_is_a_page_not_the_sentinel() {
        // A normal empty page keeps the load-more affordance alive
        assert!(matches!(
            parse_next_battles("[]").unwrap(),
            NextBattles::Page(battles) if battles.is_empty()
        ));
    }

    #[test]
    fn test_parse_end_of_data_sentinel() {
        let body = r#"{"message": "No more battles to fetch."}"#;
        assert!(matches!(
            parse_next_battles(body).unwrap(),
            NextBattles::EndOfData
        ));
    }

    #[test]
    fn test_parse_unknown_message_is_invalid() {
        let body = r#"{"message": "Missing battle-time parameter"}"#;
        assert!(matches!(
            parse_next_battles(body),
            Err(BattleFetchError::InvalidBody(_))
        ));
    }

    #[test]
    fn test_parse_garbage_body_is_invalid() {
        assert!(parse_next_battles("<html>502</html>").is_err());
    }
}
