use crate::types::{CardFace, GameOutcome, Resolution, TimeLimit, DECK_SIZE};

/// Copyable view of a [`GameState`](crate::GameState) for renderers.
///
/// Face-down cards are `CardFace::Hidden`, so holding a snapshot never reveals
/// the deck layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub cards: [CardFace; DECK_SIZE],
    pub time_remaining: u32,
    pub outcome: GameOutcome,
    pub started: bool,
    pub selected: TimeLimit,
    pub pending_reveal: bool,
    pub matched_pairs: u32,
    pub session_id: u32,
    pub seed: u64,
    pub last_resolution: Option<Resolution>,
}

impl GameSnapshot {
    /// Title screen: nothing started yet.
    pub fn on_title(&self) -> bool {
        !self.started
    }

    pub fn playable(&self) -> bool {
        self.started && !self.outcome.is_terminal()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            cards: [CardFace::Hidden; DECK_SIZE],
            time_remaining: 0,
            outcome: GameOutcome::InProgress,
            started: false,
            selected: TimeLimit::default(),
            pending_reveal: false,
            matched_pairs: 0,
            session_id: 0,
            seed: 0,
            last_resolution: None,
        }
    }
}
