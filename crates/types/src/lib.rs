//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Deck Dimensions
//!
//! - **Alphabet**: 8 distinct symbols
//! - **Deck**: 16 cards (each symbol exactly twice)
//! - **Grid**: 4 columns by 4 rows
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 1000 | One countdown second |
//! | `FRAME_MS` | 50 | Fixed timestep of the event loop |
//! | `REVEAL_DELAY_MS` | 1000 | Pause showing two face-up cards before resolution |
//!
//! # Examples
//!
//! ```
//! use memory_match_types::{Symbol, TimeLimit, DECK_SIZE};
//!
//! assert_eq!(TimeLimit::from_secs(60), Some(TimeLimit::Medium));
//! assert_eq!(TimeLimit::from_str("hard"), Some(TimeLimit::Hard));
//! assert_eq!(TimeLimit::from_secs(45), None);
//!
//! assert_eq!(Symbol::ALL.len() * 2, DECK_SIZE);
//! ```

/// Number of distinct symbols in the alphabet.
pub const PAIR_COUNT: usize = 8;

/// Number of cards in a deck (every symbol twice).
pub const DECK_SIZE: usize = PAIR_COUNT * 2;

/// Cards per row in the on-screen grid.
pub const GRID_COLUMNS: usize = 4;

/// One countdown step (1 second).
pub const TICK_MS: u32 = 1000;

/// Fixed timestep of the terminal event loop (50ms = 20 FPS).
pub const FRAME_MS: u32 = 50;

/// Default pause between the second flip and its resolution.
pub const REVEAL_DELAY_MS: u32 = 1000;


/// The eight card symbols
///
/// The core only compares symbols for equality; the letter is what the
/// terminal draws on a face-up card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Apple,
    Banana,
    Grapes,
    Watermelon,
    Strawberry,
    Cherries,
    Peach,
    Pineapple,
}

impl Symbol {
    /// The full alphabet, in a fixed order.
    pub const ALL: [Symbol; PAIR_COUNT] = [
        Symbol::Apple,
        Symbol::Banana,
        Symbol::Grapes,
        Symbol::Watermelon,
        Symbol::Strawberry,
        Symbol::Cherries,
        Symbol::Peach,
        Symbol::Pineapple,
    ];

    /// Single-column glyph drawn on a face-up card.
    pub fn letter(&self) -> char {
        match self {
            Symbol::Apple => 'A',
            Symbol::Banana => 'B',
            Symbol::Grapes => 'G',
            Symbol::Watermelon => 'W',
            Symbol::Strawberry => 'S',
            Symbol::Cherries => 'C',
            Symbol::Peach => 'P',
            Symbol::Pineapple => 'N',
        }
    }
}

/// Countdown presets offered on the title screen
///
/// - **Easy**: 90 seconds
/// - **Medium**: 60 seconds
/// - **Hard**: 30 seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeLimit {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl TimeLimit {
    /// Presets in picker order.
    pub const ALL: [TimeLimit; 3] = [TimeLimit::Easy, TimeLimit::Medium, TimeLimit::Hard];

    /// Countdown length in seconds.
    pub fn secs(&self) -> u32 {
        match self {
            TimeLimit::Easy => 90,
            TimeLimit::Medium => 60,
            TimeLimit::Hard => 30,
        }
    }

    /// Map a second count back to its preset. Anything outside {30, 60, 90} is `None`.
    pub fn from_secs(secs: u32) -> Option<Self> {
        match secs {
            90 => Some(TimeLimit::Easy),
            60 => Some(TimeLimit::Medium),
            30 => Some(TimeLimit::Hard),
            _ => None,
        }
    }

    /// Parse a preset from its name or its second count (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use memory_match_types::TimeLimit;
    ///
    /// assert_eq!(TimeLimit::from_str("Easy"), Some(TimeLimit::Easy));
    /// assert_eq!(TimeLimit::from_str("30"), Some(TimeLimit::Hard));
    /// assert_eq!(TimeLimit::from_str("forever"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(TimeLimit::Easy),
            "medium" => Some(TimeLimit::Medium),
            "hard" => Some(TimeLimit::Hard),
            other => other.parse::<u32>().ok().and_then(Self::from_secs),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeLimit::Easy => "easy",
            TimeLimit::Medium => "medium",
            TimeLimit::Hard => "hard",
        }
    }

    /// Human-readable picker label, e.g. `Easy (90s)`.
    pub fn label(&self) -> &'static str {
        match self {
            TimeLimit::Easy => "Easy (90s)",
            TimeLimit::Medium => "Medium (60s)",
            TimeLimit::Hard => "Hard (30s)",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            TimeLimit::Easy => TimeLimit::Medium,
            TimeLimit::Medium => TimeLimit::Hard,
            TimeLimit::Hard => TimeLimit::Easy,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            TimeLimit::Easy => TimeLimit::Hard,
            TimeLimit::Medium => TimeLimit::Easy,
            TimeLimit::Hard => TimeLimit::Medium,
        }
    }
}

/// Outcome of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameOutcome {
    #[default]
    InProgress,
    WonByMatchingAll,
    LostByTimeout,
}

impl GameOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

/// Grid cursor direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// What a single card shows to the presentation layer
///
/// Face-down cards carry no symbol, so a renderer cannot leak the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardFace {
    #[default]
    Hidden,
    FaceUp(Symbol),
    Matched(Symbol),
}

impl CardFace {
    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            CardFace::Hidden => None,
            CardFace::FaceUp(s) | CardFace::Matched(s) => Some(*s),
        }
    }

    pub fn is_revealed(&self) -> bool {
        !matches!(self, CardFace::Hidden)
    }
}

/// Result of comparing two face-up cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// Both cards moved to the matched set.
    Matched(usize, usize),
    /// Both cards were turned face-down again.
    Mismatched(usize, usize),
}

impl Resolution {
    pub fn is_match(&self) -> bool {
        matches!(self, Resolution::Matched(..))
    }
}

/// Player intents produced by the input layer
///
/// The controller decides what each action means in the current phase
/// (title screen, playing, game over).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the grid cursor
    Move(Direction),
    /// Flip the card under the cursor
    Flip,
    /// Start the game (title) or acknowledge the result (game over)
    Confirm,
    /// Return to the title screen
    Reset,
    /// Pick the next preset on the title screen
    CyclePreset,
    /// Pick a specific preset on the title screen
    SelectPreset(TimeLimit),
}
