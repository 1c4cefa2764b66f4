use crate::territory::card::Card;
use serde::{Deserialize, Serialize};

pub const DECK_SIZE: usize = 10;

/// A source of uniform choices.
///
/// `draw` picks one item of the iterator uniformly at random, or returns `None`
/// when the iterator is empty.
pub trait DrawRng {
    fn draw<T, I: Iterator<Item = T> + Sized>(&mut self, iter: I) -> Option<T>;
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Deck {
    pub fn new(cards: Vec<Card>) -> Self {
        Deck(cards)
    }

    // Cards are drawn independently, so duplicates are expected
    pub fn generate<R: DrawRng>(rng: &mut R) -> Self {
        Deck(
            (0..DECK_SIZE)
                .filter_map(|_| rng.draw(Card::ALL.iter().copied()))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn get(&self, idx: usize) -> Option<Card> {
        self.0.get(idx).copied()
    }

    pub fn remove(&mut self, idx: usize) -> Option<Card> {
        if idx < self.0.len() {
            Some(self.0.remove(idx))
        } else {
            None
        }
    }

    pub fn draw_card<R: DrawRng>(&self, rng: &mut R) -> Option<usize> {
        rng.draw(0..self.0.len())
    }
}
