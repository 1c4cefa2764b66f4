use crate::territory::board::BoardPosition;
use crate::territory::deck::Deck;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Team {
    Alpha,
    Beta,
}

impl Team {
    pub fn opponent(&self) -> Team {
        match self {
            Team::Alpha => Team::Beta,
            Team::Beta => Team::Alpha,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Alpha => write!(f, "α"),
            Team::Beta => write!(f, "β"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Players([Player; 2]);

impl Index<Team> for Players {
    type Output = Player;
    fn index(&self, index: Team) -> &Self::Output {
        match index {
            Team::Alpha => &self.0[0],
            Team::Beta => &self.0[1],
        }
    }
}

impl IndexMut<Team> for Players {
    fn index_mut(&mut self, index: Team) -> &mut Self::Output {
        match index {
            Team::Alpha => &mut self.0[0],
            Team::Beta => &mut self.0[1],
        }
    }
}

impl Players {
    // The first player is Alpha and the second is Beta
    pub fn new(players: [Player; 2]) -> Self {
        Players(players)
    }
}

#[derive(Clone, Debug)]
pub struct Player {
    deck: Deck,
    position: BoardPosition,
}

impl Player {
    pub fn new(deck: Deck, position: BoardPosition) -> Self {
        Player { deck, position }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    pub fn position(&self) -> BoardPosition {
        self.position
    }

    pub fn move_to(&mut self, position: BoardPosition) {
        self.position = position;
    }
}
