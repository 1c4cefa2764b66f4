use crate::report::GameReport;
use crate::territory::board::{Board, BoardError, BoardPosition, BoardPositionError};
use crate::territory::card::Card;
use crate::territory::config::{ConfigError, EmptyDeckPolicy, GameConfig};
use crate::territory::deck::{Deck, DrawRng};
use crate::territory::player::{Player, Players, Team};
use rand::prelude::IteratorRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Debug;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug)]
pub struct DeckRng {
    rng: StdRng,
}

impl Default for DeckRng {
    fn default() -> Self {
        DeckRng {
            rng: StdRng::from_entropy(),
        }
    }
}

impl DeckRng {
    pub fn seeded(seed: u64) -> Self {
        DeckRng {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl DrawRng for DeckRng {
    fn draw<T, I: Iterator<Item = T> + Sized>(&mut self, iter: I) -> Option<T> {
        iter.choose(&mut self.rng)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid game configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Could not build board: {0}")]
    Board(#[from] BoardError),
    #[error("Invalid starting position: {0}")]
    Position(#[from] BoardPositionError),
    #[error("Card index {index} is out of range for the {team} team's deck of {len} cards")]
    InvalidDeckIndex { team: Team, index: usize, len: usize },
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    AlphaWin,
    BetaWin,
    Draw,
}

impl Outcome {
    pub fn winner(&self) -> Option<Team> {
        match self {
            Outcome::AlphaWin => Some(Team::Alpha),
            Outcome::BetaWin => Some(Team::Beta),
            Outcome::Draw => None,
        }
    }
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Scores {
    pub alpha: u32,
    pub beta: u32,
}

impl Scores {
    pub fn outcome(&self) -> Outcome {
        match self.alpha.cmp(&self.beta) {
            Ordering::Greater => Outcome::AlphaWin,
            Ordering::Less => Outcome::BetaWin,
            Ordering::Equal => Outcome::Draw,
        }
    }
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum EndReason {
    TurnLimit,
    // The team whose empty deck stopped the game
    DeckExhausted(Team),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved {
        card: Card,
        from: BoardPosition,
        to: BoardPosition,
    },
    // The card is spent even though the token stays put
    OutOfBounds { card: Card, from: BoardPosition },
}

impl MoveOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }

    pub fn card(&self) -> Card {
        match self {
            MoveOutcome::Moved { card, .. } | MoveOutcome::OutOfBounds { card, .. } => *card,
        }
    }
}

#[derive(Debug)]
pub struct GameState<R: Debug> {
    board: Board,
    players: Players,
    active_team: Team,
    turn: u32,
    max_turns: u32,
    empty_deck_policy: EmptyDeckPolicy,
    end_reason: Option<EndReason>,
    rng: R,
}

impl<R: DrawRng + Debug> GameState<R> {
    /// Sets up a fresh game: an unpainted board, Alpha in the top-left corner,
    /// Beta in the bottom-right corner and a randomly generated deck for each
    /// team (Alpha's first).
    pub fn new(config: GameConfig, mut rng: R) -> Result<Self, GameError> {
        config.validate()?;
        let alpha_deck = Deck::generate(&mut rng);
        let beta_deck = Deck::generate(&mut rng);
        GameState::with_decks(config, alpha_deck, beta_deck, rng)
    }

    pub fn with_decks(
        config: GameConfig,
        alpha_deck: Deck,
        beta_deck: Deck,
        rng: R,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let board = Board::empty(config.board_height, config.board_width)?;
        let top_left = BoardPosition::new(&board, 0, 0)?;
        let bottom_right =
            BoardPosition::new(&board, config.board_height - 1, config.board_width - 1)?;
        let players = [
            Player::new(alpha_deck, top_left),
            Player::new(beta_deck, bottom_right),
        ];
        Ok(GameState::from_parts(
            board,
            players,
            config.max_turns,
            config.empty_deck_policy,
            rng,
        ))
    }

    // Alpha always moves first
    pub fn from_parts(
        board: Board,
        players: [Player; 2],
        max_turns: u32,
        empty_deck_policy: EmptyDeckPolicy,
        rng: R,
    ) -> Self {
        GameState {
            board,
            players: Players::new(players),
            active_team: Team::Alpha,
            turn: 0,
            max_turns,
            empty_deck_policy,
            end_reason: None,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self, team: Team) -> &Player {
        &self.players[team]
    }

    pub fn active_team(&self) -> Team {
        self.active_team
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn max_turns(&self) -> u32 {
        self.max_turns
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    pub fn is_over(&self) -> bool {
        self.end_reason.is_some() || self.turn >= self.max_turns
    }

    pub fn validate_move(&self, team: Team, card: Card) -> bool {
        self.board
            .get_absolute_position(self.players[team].position(), card)
            .is_ok()
    }

    /// Plays the card at `card_index` from `team`'s deck.
    ///
    /// The card is removed from the deck whether or not the move stays on the
    /// board. Only a move that lands on the board paints the destination and
    /// moves the token.
    pub fn apply_move(&mut self, team: Team, card_index: usize) -> Result<MoveOutcome, GameError> {
        let player = &mut self.players[team];
        let len = player.deck().len();
        let card = player
            .deck_mut()
            .remove(card_index)
            .ok_or(GameError::InvalidDeckIndex {
                team,
                index: card_index,
                len,
            })?;
        let from = player.position();

        match self.board.get_absolute_position(from, card) {
            Ok(to) => {
                self.board.set_ink(to, team);
                player.move_to(to);
                debug!("{} team played {:?} from {} to {}", team, card, from, to);
                Ok(MoveOutcome::Moved { card, from, to })
            }
            Err(err) => {
                warn!("Invalid move for {} team with {:?}: {}", team, card, err);
                Ok(MoveOutcome::OutOfBounds { card, from })
            }
        }
    }

    /// Plays one turn for the active team with a randomly chosen card.
    ///
    /// Returns whether the game should continue.
    pub fn advance_turn(&mut self) -> bool {
        if self.turn >= self.max_turns {
            self.end(EndReason::TurnLimit);
            return false;
        }
        if self.end_reason.is_some() {
            return false;
        }

        let team = self.active_team;
        let drawn = self.players[team].deck().draw_card(&mut self.rng);
        let Some(card_index) = drawn else {
            return self.handle_empty_deck(team);
        };
        if let Err(err) = self.apply_move(team, card_index) {
            warn!("Could not play drawn card: {}", err);
            return self.handle_empty_deck(team);
        }

        self.active_team = team.opponent();
        self.turn += 1;
        if self.turn >= self.max_turns {
            self.end(EndReason::TurnLimit);
            return false;
        }
        true
    }

    fn handle_empty_deck(&mut self, team: Team) -> bool {
        match self.empty_deck_policy {
            EmptyDeckPolicy::EndGame => {
                warn!("{} team has no cards left, ending the game", team);
                self.end(EndReason::DeckExhausted(team));
                false
            }
            EmptyDeckPolicy::SkipTurn if self.players[team.opponent()].deck().is_empty() => {
                warn!("Both teams are out of cards, ending the game");
                self.end(EndReason::DeckExhausted(team));
                false
            }
            EmptyDeckPolicy::SkipTurn => {
                warn!("{} team has no cards left, skipping its turn", team);
                self.active_team = team.opponent();
                true
            }
        }
    }

    fn end(&mut self, reason: EndReason) {
        if self.end_reason.is_some() {
            return;
        }
        self.end_reason = Some(reason);
        let scores = self.compute_scores();
        info!(
            "Game over after {} turns ({:?}). α: {}, β: {}",
            self.turn, reason, scores.alpha, scores.beta
        );
    }

    pub fn compute_scores(&self) -> Scores {
        Scores {
            alpha: self.board.count_inked_spaces(Team::Alpha),
            beta: self.board.count_inked_spaces(Team::Beta),
        }
    }

    pub fn check_winner(&self) -> Outcome {
        self.compute_scores().outcome()
    }

    pub fn run_game(&mut self) -> GameReport {
        while self.advance_turn() {}

        let scores = self.compute_scores();
        let outcome = scores.outcome();
        info!("Game finished with outcome {:?}", outcome);
        GameReport {
            board: self.board.clone(),
            scores,
            outcome,
            turns_played: self.turn,
            end_reason: self.end_reason.unwrap_or(EndReason::TurnLimit),
        }
    }
}
