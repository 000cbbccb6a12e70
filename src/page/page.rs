use crate::render::battle::BattleCard;

/// Label the trigger shows while a request is in flight.
pub const LOADING_LABEL: &str = "Lädt...";
/// Label the trigger shows when it is ready for another click.
pub const IDLE_LABEL: &str = "Mehr Kämpfe laden";

/// The load-more control: a button with an enabled flag and a visible label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadMore {
    pub enabled: bool,
    pub label: String,
}

impl Default for LoadMore {
    fn default() -> Self {
        LoadMore {
            enabled: true,
            label: IDLE_LABEL.to_string(),
        }
    }
}

/// The filter controls of the battles page.
///
/// `player_tag` is present only on a specific-player page; `enemy_selection`
/// carries the form value verbatim, including the `"None"` option meaning
/// all enemies.
#[derive(Debug, Clone)]
pub struct FilterControls {
    pub game_mode_selection: String,
    pub player_tag: Option<String>,
    pub enemy_selection: String,
}

impl Default for FilterControls {
    fn default() -> Self {
        FilterControls {
            game_mode_selection: "ALL".to_string(),
            player_tag: None,
            enemy_selection: "None".to_string(),
        }
    }
}

/// The handful of live page elements the feed controller works against:
/// the rendered battle cards, the load-more control and the filter controls.
#[derive(Debug)]
pub struct BattlePage {
    battles: Vec<BattleCard>,
    load_more: Option<LoadMore>,
    pub filters: FilterControls,
}

impl BattlePage {
    pub fn new(filters: FilterControls) -> Self {
        BattlePage {
            battles: Vec::new(),
            load_more: Some(LoadMore::default()),
            filters,
        }
    }

    /// Displayed timestamp text of the last rendered battle, if any.
    pub fn last_battle_time(&self) -> Option<&str> {
        self.battles.last().map(|card| card.timestamp.as_str())
    }

    pub fn append(&mut self, card: BattleCard) {
        self.battles.push(card);
    }

    pub fn battle_count(&self) -> usize {
        self.battles.len()
    }

    /// Takes the load-more control out of the page; it goes back at the
    /// bottom once new cards are appended.
    pub fn detach_load_more(&mut self) -> Option<LoadMore> {
        self.load_more.take()
    }

    /// Puts the load-more control back at the bottom of the page.
    pub fn attach_load_more(&mut self, control: LoadMore) {
        self.load_more = Some(control);
    }

    pub fn load_more(&self) -> Option<&LoadMore> {
        self.load_more.as_ref()
    }

    pub fn load_more_mut(&mut self) -> Option<&mut LoadMore> {
        self.load_more.as_mut()
    }

    /// All rendered battle fragments in display order.
    pub fn to_html(&self) -> String {
        self.battles
            .iter()
            .map(|card| card.html.as_str())
            .collect::<Vec<&str>>()
            .join("")
    }
}
