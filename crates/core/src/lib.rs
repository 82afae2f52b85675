//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the memory-match rules and state machine.
//! It has **no dependencies** on terminal I/O or input handling, making it:
//!
//! - **Deterministic**: Same seed deals identical decks
//! - **Testable**: Every rule is exercised headless
//! - **Portable**: Any presentation layer can drive it (terminal, test harness)
//!
//! # Module Structure
//!
//! - [`deck`]: 16-card deck (8 symbols, each twice) and its invariants
//! - [`game_state`]: Flip/match sets, countdown, outcome and the reveal pause
//! - [`rng`]: Seeded ChaCha8 shuffling
//! - [`snapshot`]: Copyable, secrecy-preserving view for renderers
//!
//! # Game Rules
//!
//! - At most two unmatched cards are face-up at once
//! - A face-up pair is compared after a short reveal pause: equal symbols stay
//!   revealed for good, anything else turns face-down again
//! - Matching all eight pairs wins and stops the clock
//! - A countdown tick arriving with zero seconds left loses the game
//! - Resetting returns to the title state; a new `start_game` is required
//!
//! # Example
//!
//! ```
//! use memory_match_core::{Deck, GameState};
//! use memory_match_types::{GameOutcome, TimeLimit};
//!
//! let mut game = GameState::new(12345).with_reveal_delay_ms(0);
//! game.start_with_deck(TimeLimit::Hard, Deck::ordered());
//!
//! // Card 0 and card 8 share a symbol in the ordered deck.
//! game.flip_card(0);
//! game.flip_card(8);
//! assert!(game.is_matched(0));
//! assert_eq!(game.outcome(), GameOutcome::InProgress);
//! ```
//!
//! # Timing
//!
//! The event loop calls [`GameState::update`](game_state::GameState::update)
//! every frame with the elapsed milliseconds; every full second becomes one
//! [`tick`](game_state::GameState::tick).

pub mod deck;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use memory_match_types as types;

// Re-export commonly used types for convenience
pub use deck::Deck;
pub use game_state::GameState;
pub use rng::DeckRng;
pub use snapshot::GameSnapshot;
