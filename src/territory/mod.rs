mod board;
mod card;
mod config;
mod deck;
mod game_state;
mod player;

pub use board::{Board, BoardError, BoardPosition, BoardPositionError, BoardSpace};
pub use card::Card;
pub use config::{ConfigError, EmptyDeckPolicy, GameConfig};
pub use deck::{Deck, DrawRng, DECK_SIZE};
pub use game_state::{DeckRng, EndReason, GameError, GameState, MoveOutcome, Outcome, Scores};
pub use player::{Player, Team};
