use std::collections::HashMap;

/// Display label for mode keys the table does not know.
const UNKNOWN_MODE_LABEL: &str = "undefined";
/// Label marking the duel mode, which renders extended decks.
const DUEL_LABEL: &str = "Duell";

/// Maps backend game-mode keys to the German display labels of the page.
///
/// Injected into the renderer instead of living as a module global, so a
/// page for a different clan or language only swaps the table.
#[derive(Debug, Clone)]
pub struct GameModeTable {
    labels: HashMap<String, String>,
}

impl GameModeTable {
    pub fn new(entries: &[(&str, &str)]) -> Self {
        let labels = entries
            .iter()
            .map(|(key, label)| (key.to_string(), label.to_string()))
            .collect();
        GameModeTable { labels }
    }

    /// Display label for a mode key; unknown keys show as `undefined`,
    /// matching what the page has always rendered for them.
    pub fn label(&self, game_mode: &str) -> &str {
        self.labels
            .get(game_mode)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_MODE_LABEL)
    }

    /// Whether this mode uses the extended duel deck layout.
    pub fn is_duel(&self, game_mode: &str) -> bool {
        self.label(game_mode) == DUEL_LABEL
    }
}

impl Default for GameModeTable {
    /// The five modes the clan records battles for.
    fn default() -> Self {
        GameModeTable::new(&[
            ("ClassicDecks_Friendly", "Klassikdeck-Kampf"),
            ("Draft_Competitive", "Dreifach-Auswahlkampf"),
            ("DraftMode", "Auswahlkampf"),
            ("Duel_1v1_Friendly", "Duell"),
            ("PickMode", "Mega-Auswahlherausforderung"),
        ])
    }
}
