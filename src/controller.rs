//! Routes player actions to the game state.
//!
//! The same key means different things per phase: on the title screen Enter
//! starts a game, while playing it flips the card under the cursor, and on the
//! result screen it returns to the title.

use tracing::debug;

use crate::core::GameState;
use crate::input::GridCursor;
use crate::types::{Direction, GameAction};

/// Which screen the player is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Title,
    Playing,
    GameOver,
}

impl Phase {
    pub fn of(state: &GameState) -> Self {
        if !state.started() {
            Phase::Title
        } else if state.is_over() {
            Phase::GameOver
        } else {
            Phase::Playing
        }
    }
}

/// Apply `action`; returns whether anything changed.
pub fn dispatch(action: GameAction, state: &mut GameState, cursor: &mut GridCursor) -> bool {
    let phase = Phase::of(state);
    debug!(?phase, ?action, "dispatch");

    match (phase, action) {
        (Phase::Title, GameAction::SelectPreset(limit)) => state.select_time_limit(limit),
        (Phase::Title, GameAction::CyclePreset) => {
            state.select_time_limit(state.selected_limit().next())
        }
        (Phase::Title, GameAction::Move(dir)) => {
            let limit = state.selected_limit();
            match dir {
                Direction::Up | Direction::Left => state.select_time_limit(limit.prev()),
                Direction::Down | Direction::Right => state.select_time_limit(limit.next()),
            }
        }
        (Phase::Title, GameAction::Confirm | GameAction::Flip) => {
            state.start_game(state.selected_limit());
            cursor.reset();
            true
        }
        (Phase::Title, GameAction::Reset) => false,

        (Phase::Playing, GameAction::Move(dir)) => cursor.move_dir(dir),
        (Phase::Playing, GameAction::Flip | GameAction::Confirm) => {
            state.flip_card(cursor.index())
        }

        (Phase::GameOver, GameAction::Confirm) => {
            state.reset();
            true
        }
        (Phase::Playing | Phase::GameOver, GameAction::Reset) => {
            state.reset();
            true
        }

        _ => false,
    }
}
