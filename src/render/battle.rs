use chrono::{DateTime, NaiveDateTime, Utc};

use crate::models::battle::Battle;
use crate::render::cards::{deck_image_paths, image_row_html};
use crate::render::damage::{calculate_damage, parse_tower_hp};
use crate::render::game_modes::GameModeTable;
use crate::utils::errors::RenderError;

/// How battle times are displayed (and read back as the pagination cursor).
pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Card indices after whose extra duel row a separator line is inserted.
const DUEL_SEPARATOR_BOUNDARIES: [usize; 3] = [4, 12, 20];

/// A rendered battle entry: the HTML fragment plus the timestamp text it
/// displays, kept separately so the page can read the cursor without
/// scraping its own markup.
#[derive(Debug, Clone)]
pub struct BattleCard {
    pub timestamp: String,
    pub html: String,
}

/// Normalizes a backend battle time to `YYYY-MM-DD HH:MM:SS` in UTC.
///
/// The endpoint has emitted RFC 2822 dates (serialized datetime columns) as
/// well as ISO 8601 and plain `YYYY-MM-DD HH:MM:SS` strings, so all three
/// are accepted.
pub fn format_battle_time(raw: &str) -> Result<String, RenderError> {
    if let Ok(time) = DateTime::parse_from_rfc3339(raw) {
        return Ok(time.with_timezone(&Utc).format(DISPLAY_TIME_FORMAT).to_string());
    }
    if let Ok(time) = DateTime::parse_from_rfc2822(raw) {
        return Ok(time.with_timezone(&Utc).format(DISPLAY_TIME_FORMAT).to_string());
    }
    if let Ok(time) = NaiveDateTime::parse_from_str(raw, DISPLAY_TIME_FORMAT) {
        return Ok(time.format(DISPLAY_TIME_FORMAT).to_string());
    }
    Err(RenderError::InvalidTimestamp(raw.to_string()))
}

fn first_four(paths: &[String]) -> &[String] {
    &paths[..paths.len().min(4)]
}

fn last_four(paths: &[String]) -> &[String] {
    &paths[paths.len().saturating_sub(4)..]
}

fn group_of_four(paths: &[String], start: usize) -> &[String] {
    if start >= paths.len() {
        return &[];
    }
    &paths[start..paths.len().min(start + 4)]
}

fn image_row(left: &[String], right: &[String]) -> String {
    format!(
        "<div class=\"img-row\">\n    \
         <div class=\"row-left\">{}</div>\n    \
         <div class=\"row-right\">{}</div>\n\
         </div>\n",
        image_row_html(left),
        image_row_html(right)
    )
}

/// The card-image section of a battle card, one 4-card row per side per group.
///
/// Standard modes show the first and last four cards with a closing
/// separator. Duel decks carry more than 8 cards; each remaining group of 4
/// gets its own row, with a separator after the groups starting at card
/// index 4, 12 and 20 so the sub-matches of the duel stay visually apart.
fn deck_rows(player1_paths: &[String], player2_paths: &[String], duel: bool) -> String {
    let mut rows = image_row(first_four(player1_paths), first_four(player2_paths));

    if duel {
        let deck_len = player1_paths.len().max(player2_paths.len());
        let mut start = 4;
        while start < deck_len {
            rows += &image_row(
                group_of_four(player1_paths, start),
                group_of_four(player2_paths, start),
            );
            if DUEL_SEPARATOR_BOUNDARIES.contains(&start) {
                rows += "<hr>\n";
            }
            start += 4;
        }
    } else {
        rows += &image_row(last_four(player1_paths), last_four(player2_paths));
        rows += "<hr>\n";
    }

    rows
}

/// Pure transform from a battle record to the HTML fragment the page appends.
///
/// # Arguments
/// * `battle` - The record as fetched from the backend.
/// * `modes` - The injected game-mode display table.
///
/// # Returns
/// * `Ok(BattleCard)` - The fragment and its displayed timestamp.
/// * `Err(RenderError)` - If the time, a tower HP or a deck string is malformed.
pub fn render_battle(battle: &Battle, modes: &GameModeTable) -> Result<BattleCard, RenderError> {
    let formatted_time = format_battle_time(&battle.time)?;

    let player1_damage = calculate_damage(
        parse_tower_hp(&battle.player1_king_hp)?,
        parse_tower_hp(&battle.player1_princess1_hp)?,
        parse_tower_hp(&battle.player1_princess2_hp)?,
    );
    let player2_damage = calculate_damage(
        parse_tower_hp(&battle.player2_king_hp)?,
        parse_tower_hp(&battle.player2_princess1_hp)?,
        parse_tower_hp(&battle.player2_princess2_hp)?,
    );

    let player1_paths = deck_image_paths(&battle.player1_deck()?);
    let player2_paths = deck_image_paths(&battle.player2_deck()?);

    let header = format!(
        "<div class=\"battle-metadata\">\n    \
         <span class=\"timestamp\">{formatted_time}</span>\n    \
         <span class=\"game-mode\">{game_mode}</span>\n\
         </div>\n\
         <div class=\"player-score\">\n    \
         <span class=\"player-left\">{player1}</span>\n    \
         <span class=\"score\">{crowns1} - {crowns2}</span>\n    \
         <span class=\"player-right\">{player2}</span>\n\
         </div>\n",
        game_mode = modes.label(&battle.game_mode),
        player1 = battle.player1_name,
        player2 = battle.player2_name,
        crowns1 = battle.player1_crowns,
        crowns2 = battle.player2_crowns,
    );

    let rows = deck_rows(
        &player1_paths,
        &player2_paths,
        modes.is_duel(&battle.game_mode),
    );

    let footer = format!(
        "<div class=\"elixir-damage\">\n    \
         <span class=\"elixir\"><img src=\"/static/images/elixir_leaked.webp\" alt=\"Verschwendetes Elixier\" class=\"icon-width\">{elixir1}</span>\n    \
         <span class=\"dmg\"><img src=\"/static/images/damage.webp\" alt=\"Verursachter Schaden\" class=\"icon-width\">{damage1}</span>\n    \
         <span class=\"elixir\"><img src=\"/static/images/elixir_leaked.webp\" alt=\"Verschwendetes Elixier\" class=\"icon-width\">{elixir2}</span>\n    \
         <span class=\"dmg\"><img src=\"/static/images/damage.webp\" alt=\"Verursachter Schaden\" class=\"icon-width\">{damage2}</span>\n\
         </div>\n",
        elixir1 = battle.player1_elixir_leaked,
        elixir2 = battle.player2_elixir_leaked,
        damage1 = player1_damage,
        damage2 = player2_damage,
    );

    let html = format!("<div class=\"battle\">\n{header}{rows}{footer}</div>\n");

    Ok(BattleCard {
        timestamp: formatted_time,
        html,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck_string(cards: usize) -> String {
        let names: Vec<String> = (0..cards).map(|i| format!("'Card {i}'")).collect();
        format!("[{}]", names.join(", "))
    }

    fn sample_battle(game_mode: &str, deck_cards: usize) -> Battle {
        Battle {
            time: "2024-03-01 18:30:12".to_string(),
            game_mode: game_mode.to_string(),
            player1_name: "Raue Haende".to_string(),
            player1_crowns: 2,
            player1_king_hp: "4824".to_string(),
            player1_princess1_hp: "3052".to_string(),
            player1_princess2_hp: "3052".to_string(),
            player1_elixir_leaked: 3.7,
            player1_deck_string: deck_string(deck_cards),
            player2_name: "Gegner".to_string(),
            player2_crowns: 1,
            player2_king_hp: "0".to_string(),
            player2_princess1_hp: "0".to_string(),
            player2_princess2_hp: "0".to_string(),
            player2_elixir_leaked: 11.0,
            player2_deck_string: deck_string(deck_cards),
        }
    }

    #[test]
    fn test_format_battle_time_accepts_three_shapes() {
        // RFC 2822, as jsonify emits datetime columns
        assert_eq!(
            format_battle_time("Wed, 21 Oct 2015 07:28:00 GMT").unwrap(),
            "2015-10-21 07:28:00"
        );
        // ISO 8601 with offset, normalized to UTC
        assert_eq!(
            format_battle_time("2024-03-01T19:30:12+01:00").unwrap(),
            "2024-03-01 18:30:12"
        );
        // Already in display format
        assert_eq!(
            format_battle_time("2024-03-01 18:30:12").unwrap(),
            "2024-03-01 18:30:12"
        );
    }

    #[test]
    fn test_format_battle_time_rejects_garbage() {
        assert!(format_battle_time("yesterday").is_err());
    }

    #[test]
    fn test_standard_battle_renders_two_rows_one_separator() {
        let battle = sample_battle("DraftMode", 8);
        let card = render_battle(&battle, &GameModeTable::default()).unwrap();
        assert_eq!(card.html.matches("class=\"img-row\"").count(), 2);
        assert_eq!(card.html.matches("<hr>").count(), 1);
        assert!(card.html.contains("<span class=\"game-mode\">Auswahlkampf</span>"));
        assert!(card.html.contains("<span class=\"score\">2 - 1</span>"));
    }

    #[test]
    fn test_duel_with_twelve_cards_renders_three_rows_one_separator() {
        let battle = sample_battle("Duel_1v1_Friendly", 12);
        let card = render_battle(&battle, &GameModeTable::default()).unwrap();
        // Groups at 0, 4 and 8; separator only after the group starting at 4
        assert_eq!(card.html.matches("class=\"img-row\"").count(), 3);
        assert_eq!(card.html.matches("<hr>").count(), 1);
    }

    #[test]
    fn test_duel_with_sixteen_cards_renders_four_rows_two_separators() {
        let battle = sample_battle("Duel_1v1_Friendly", 16);
        let card = render_battle(&battle, &GameModeTable::default()).unwrap();
        // Separators after the groups starting at 4 and 12
        assert_eq!(card.html.matches("class=\"img-row\"").count(), 4);
        assert_eq!(card.html.matches("<hr>").count(), 2);
    }

    #[test]
    fn test_damage_values_rendered_per_side() {
        let battle = sample_battle("DraftMode", 8);
        let card = render_battle(&battle, &GameModeTable::default()).unwrap();
        // Player 1 kept all towers, player 2 lost everything
        assert!(card.html.contains("class=\"icon-width\">0</span>"));
        assert!(card.html.contains("class=\"icon-width\">10928</span>"));
    }

    #[test]
    fn test_unknown_mode_renders_undefined_label() {
        let battle = sample_battle("Ladder_1v1", 8);
        let card = render_battle(&battle, &GameModeTable::default()).unwrap();
        assert!(card.html.contains("<span class=\"game-mode\">undefined</span>"));
    }

    #[test]
    fn test_timestamp_kept_alongside_fragment() {
        let battle = sample_battle("DraftMode", 8);
        let card = render_battle(&battle, &GameModeTable::default()).unwrap();
        assert_eq!(card.timestamp, "2024-03-01 18:30:12");
        assert!(card.html.contains("<span class=\"timestamp\">2024-03-01 18:30:12</span>"));
    }

    #[test]
    fn test_malformed_deck_string_fails() {
        let mut battle = sample_battle("DraftMode", 8);
        battle.player2_deck_string = "['Knight',".to_string();
        assert!(render_battle(&battle, &GameModeTable::default()).is_err());
    }

    #[test]
    fn test_non_numeric_tower_hp_fails() {
        let mut battle = sample_battle("DraftMode", 8);
        battle.player1_king_hp = "unknown".to_string();
        assert!(render_battle(&battle, &GameModeTable::default()).is_err());
    }
}
