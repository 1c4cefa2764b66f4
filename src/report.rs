use crate::territory::{Board, EndReason, Outcome, Scores, Team};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GameReport {
    pub board: Board,
    pub scores: Scores,
    pub outcome: Outcome,
    pub turns_played: u32,
    pub end_reason: EndReason,
}

impl GameReport {
    pub fn winner(&self) -> Option<Team> {
        self.outcome.winner()
    }
}

// Final scores followed by the winner line
impl fmt::Display for GameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Team Score: {}", Team::Alpha, self.scores.alpha)?;
        writeln!(f, "{} Team Score: {}", Team::Beta, self.scores.beta)?;
        match self.winner() {
            Some(team) => write!(f, "{} Team Wins!", team),
            None => write!(f, "It's a Draw!"),
        }
    }
}
