pub mod render;
pub mod report;
pub mod territory;

pub use report::GameReport;
pub use territory::{DeckRng, DrawRng, GameConfig, GameError, GameState, Outcome, Team};
