use crate::feed::api::{BattleQuery, NextBattles};
use crate::logger;
use crate::page::page::{BattlePage, LoadMore, LOADING_LABEL};
use crate::render::battle::render_battle;
use crate::render::game_modes::GameModeTable;
use crate::stats::cards::CardUsage;
use crate::utils::errors::{BattleFetchError, LoadMoreError};
use crate::utils::logger::Logger;

/// Cursor sent while no battles are rendered yet: the backend's own
/// open-ended upper bound, so the first page query stays well-formed.
const FIRST_PAGE_CURSOR: &str = "2200-12-31 23:59:59";

/// What a completed load-more click did to the page.
#[derive(Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// This many battle cards were appended and the trigger was restored.
    Appended(usize),
    /// The backend has no more battles; the affordance is gone for good.
    EndOfData,
}

/// Drives the battles page: on a load-more click it reads the timestamp
/// cursor, fetches the next page, renders each battle and appends it.
///
/// All collaborators are injected at construction; the controller holds no
/// globals beyond the shared settings the fetch layer reads.
pub struct BattleFeedController {
    page: BattlePage,
    game_modes: GameModeTable,
    usage: CardUsage,
}

impl BattleFeedController {
    pub fn new(page: BattlePage, game_modes: GameModeTable) -> Self {
        BattleFeedController {
            page,
            game_modes,
            usage: CardUsage::default(),
        }
    }

    pub fn page(&self) -> &BattlePage {
        &self.page
    }

    pub fn card_usage(&self) -> &CardUsage {
        &self.usage
    }

    /// Displayed timestamp of the last rendered battle; `None` on an empty page.
    pub fn last_battle_time(&self) -> Option<&str> {
        self.page.last_battle_time()
    }

    fn next_query(&self) -> BattleQuery {
        let filters = &self.page.filters;
        BattleQuery {
            battle_time: self
                .page
                .last_battle_time()
                .unwrap_or(FIRST_PAGE_CURSOR)
                .to_string(),
            game_mode_selection: filters.game_mode_selection.clone(),
            player_tag: filters.player_tag.clone(),
            enemy_selection: filters.enemy_selection.clone(),
        }
    }

    /// Disables the trigger and swaps in the loading label.
    fn begin_loading(&mut self) {
        if let Some(control) = self.page.load_more_mut() {
            control.enabled = false;
            control.label = LOADING_LABEL.to_string();
        }
    }

    /// Applies a finished fetch to the page.
    ///
    /// On the sentinel the load-more control is removed and never re-attached.
    /// On a page of battles everything renders before anything is appended, so
    /// one bad record appends nothing. On error the trigger deliberately stays
    /// disabled with the loading label; that is the long-standing behavior of
    /// the page and callers rely on the log line instead.
    fn complete(
        &mut self,
        fetched: Result<NextBattles, BattleFetchError>,
    ) -> Result<LoadOutcome, LoadMoreError> {
        let battles = match fetched {
            Err(error) => {
                logger!(ERROR, "Error fetching new battles: {error}");
                return Err(error.into());
            }
            Ok(NextBattles::EndOfData) => {
                logger!(INFO, "No more battles to fetch");
                self.page.detach_load_more();
                return Ok(LoadOutcome::EndOfData);
            }
            Ok(NextBattles::Page(battles)) => battles,
        };

        let mut cards = Vec::with_capacity(battles.len());
        for battle in &battles {
            match render_battle(battle, &self.game_modes) {
                Ok(card) => cards.push(card),
                Err(error) => {
                    logger!(ERROR, "Error rendering battle: {error}");
                    return Err(error.into());
                }
            }
        }

        self.page.detach_load_more();
        let appended = cards.len();
        for card in cards {
            self.page.append(card);
        }
        for battle in &battles {
            // Decks already parsed once during rendering, so this cannot fail
            self.usage.record(battle)?;
        }
        self.page.attach_load_more(LoadMore::default());

        Ok(LoadOutcome::Appended(appended))
    }

    /// The full load-more click: disable the trigger, fetch the page after
    /// the last rendered timestamp, append the fragments and restore the
    /// trigger (or drop it at end-of-data).
    pub async fn load_more(&mut self) -> Result<LoadOutcome, LoadMoreError> {
        if self.page.load_more().is_none() {
            // Affordance already removed; there is nothing left to click.
            return Ok(LoadOutcome::EndOfData);
        }
        self.begin_loading();
        let fetched = self.next_query().request().await;
        self.complete(fetched)
    }
}
