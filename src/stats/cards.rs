use std::collections::HashMap;

use crate::models::battle::Battle;
use crate::utils::errors::RenderError;

/// Usage numbers for one card across the loaded battles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardStats {
    pub name: String,
    pub battle_count: u32,
    pub win_count: u32,
}

/// Accumulates per-card battle and win counts from battle records.
///
/// A card is counted once per deck it appears in; the winning side is the
/// one with strictly more crowns, draws count for neither deck.
#[derive(Debug, Default)]
pub struct CardUsage {
    counts: HashMap<String, (u32, u32)>,
}

impl CardUsage {
    pub fn record(&mut self, battle: &Battle) -> Result<(), RenderError> {
        let player1_deck = battle.player1_deck()?;
        let player2_deck = battle.player2_deck()?;

        for card in player1_deck.iter().chain(player2_deck.iter()) {
            self.counts.entry(card.clone()).or_insert((0, 0)).0 += 1;
        }

        let winning_deck = if battle.player1_crowns > battle.player2_crowns {
            Some(&player1_deck)
        } else if battle.player2_crowns > battle.player1_crowns {
            Some(&player2_deck)
        } else {
            None
        };
        if let Some(deck) = winning_deck {
            for card in deck {
                self.counts.entry(card.clone()).or_insert((0, 0)).1 += 1;
            }
        }

        Ok(())
    }

    /// Stats ordered by battle count descending, name ascending on ties.
    pub fn summary(&self) -> Vec<CardStats> {
        let mut stats: Vec<CardStats> = self
            .counts
            .iter()
            .map(|(name, (battle_count, win_count))| CardStats {
                name: name.clone(),
                battle_count: *battle_count,
                win_count: *win_count,
            })
            .collect();
        stats.sort_by(|a, b| {
            b.battle_count
                .cmp(&a.battle_count)
                .then_with(|| a.name.cmp(&b.name))
        });
        stats
    }
}
