use serde::{Serialize, Deserialize};
use crate::models::VoteResponse;

pub type Score = i64;

/// The acting user's current vote on one playlist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteState {
    Up,
    Down,
    #[default]
    None,
}

impl VoteState {
    pub const fn weight(self) -> Score {
        match self {
            VoteState::Up => 1,
            VoteState::Down => -1,
            VoteState::None => 0,
        }
    }

    pub const fn is_up(self) -> bool {
        matches!(self, VoteState::Up)
    }

    pub const fn is_down(self) -> bool {
        matches!(self, VoteState::Down)
    }
}

/// The button the user pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteAction {
    Up,
    Down,
}

impl VoteAction {
    pub const fn target(self) -> VoteState {
        match self {
            VoteAction::Up => VoteState::Up,
            VoteAction::Down => VoteState::Down,
        }
    }

    /// Pressing the button of the vote already held clears it.
    pub fn resolve(self, current: VoteState) -> VoteState {
        if current == self.target() { VoteState::None } else { self.target() }
    }
}

pub fn apply(score: Score, current: VoteState, action: VoteAction) -> (Score, VoteState) {
    let next = action.resolve(current);
    (score.saturating_add(next.weight() - current.weight()), next)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteTally {
    pub score: Score,
    pub vote: VoteState,
}

impl VoteTally {
    pub const fn new(score: Score, vote: VoteState) -> Self {
        Self { score, vote }
    }

    pub fn apply(self, action: VoteAction) -> Self {
        let (score, vote) = apply(self.score, self.vote, action);
        Self { score, vote }
    }
}

/// What the vote buttons show while a vote request may be in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptimisticTally {
    shown: VoteTally,
    rollback: Option<VoteTally>,
}

impl OptimisticTally {
    pub const fn new(tally: VoteTally) -> Self {
        Self { shown: tally, rollback: None }
    }

    pub const fn shown(&self) -> VoteTally {
        self.shown
    }

    pub const fn is_pending(&self) -> bool {
        self.rollback.is_some()
    }

    /// Applies the press locally. Returns `false` and changes nothing while
    /// an earlier press is still unanswered.
    pub fn press(&mut self, action: VoteAction) -> bool {
        if self.is_pending() {
            return false;
        }
        self.rollback = Some(self.shown);
        self.shown = self.shown.apply(action);
        true
    }

    /// The server's answer replaces whatever was applied locally.
    pub fn confirm(&mut self, response: &VoteResponse) {
        self.shown = VoteTally::new(response.score, response.user_vote);
        self.rollback = None;
    }

    pub fn fail(&mut self) {
        if let Some(previous) = self.rollback.take() {
            self.shown = previous;
        }
    }
}
