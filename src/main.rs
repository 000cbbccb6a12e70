use std::error::Error;
use std::sync::OnceLock;

use crate::feed::controller::{BattleFeedController, LoadOutcome};
use crate::models::settings::Settings;
use crate::page::page::{BattlePage, FilterControls};
use crate::render::game_modes::GameModeTable;
use crate::utils::logger::Logger;

mod feed;
mod models;
mod page;
mod render;
mod stats;
mod utils;

pub static SETTINGS: OnceLock<Settings> = OnceLock::new();

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let settings = Settings::load()?;
    SETTINGS
        .set(settings)
        .expect("Settings already initialized");

    let page = BattlePage::new(FilterControls::default());
    let mut controller = BattleFeedController::new(page, GameModeTable::default());

    // Each iteration is one load-more click; run until the backend is drained.
    loop {
        match controller.load_more().await {
            Ok(LoadOutcome::Appended(0)) => {
                crate::logger!(WARN, "Received an empty page, stopping");
                break;
            }
            Ok(LoadOutcome::Appended(count)) => {
                crate::logger!(INFO, "Appended {count} battles");
            }
            Ok(LoadOutcome::EndOfData) => break,
            // Already logged; the trigger stays in its loading state.
            Err(_) => break,
        }
    }

    print!("{}", controller.page().to_html());

    crate::logger!(
        INFO,
        "Loaded {} battles total",
        controller.page().battle_count()
    );
    if let Some(oldest) = controller.last_battle_time() {
        crate::logger!(INFO, "Oldest loaded battle at {oldest}");
    }
    for stats in controller.card_usage().summary().iter().take(10) {
        crate::logger!(
            INFO,
            "{}: {} battles, {} wins",
            stats.name,
            stats.battle_count,
            stats.win_count
        );
    }

    Ok(())
}
