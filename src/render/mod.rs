pub mod battle;
pub mod cards;
pub mod damage;
pub mod game_modes;
