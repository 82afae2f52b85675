//! Game state module - manages the complete game state
//!
//! This module ties together the deck, the face-up and matched sets, the
//! countdown and the session outcome. All mutation happens synchronously inside
//! the action methods; the reveal pause is a countdown stored in the state
//! itself, so clearing it on `reset`/`start_game` is enough to cancel it.

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::deck::Deck;
use crate::rng::DeckRng;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    deck: Deck,
    rng: DeckRng,
    /// Revealed but unresolved cards, in flip order.
    face_up: ArrayVec<usize, 2>,
    matched: [bool; DECK_SIZE],
    matched_count: usize,
    /// Remaining pause before the face-up pair is resolved.
    pending_reveal_ms: Option<u32>,
    reveal_delay_ms: u32,
    time_remaining: u32,
    /// Elapsed time not yet converted into a countdown tick.
    countdown_ms: u32,
    outcome: GameOutcome,
    started: bool,
    selected: TimeLimit,
    /// Monotonic id, bumped on every start and reset.
    session_id: u32,
    last_resolution: Option<Resolution>,
}

impl GameState {
    /// Create an unstarted game with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_rng(DeckRng::new(seed))
    }

    /// Create an unstarted game with an OS-provided seed.
    pub fn from_entropy() -> Self {
        Self::with_rng(DeckRng::from_entropy())
    }

    fn with_rng(mut rng: DeckRng) -> Self {
        let deck = Deck::shuffled(&mut rng);
        Self {
            deck,
            rng,
            face_up: ArrayVec::new(),
            matched: [false; DECK_SIZE],
            matched_count: 0,
            pending_reveal_ms: None,
            reveal_delay_ms: REVEAL_DELAY_MS,
            time_remaining: 0,
            countdown_ms: 0,
            outcome: GameOutcome::InProgress,
            started: false,
            selected: TimeLimit::default(),
            session_id: 0,
            last_resolution: None,
        }
    }

    /// Override the pause between the second flip and its resolution.
    ///
    /// A delay of 0 resolves the pair inside `flip_card`.
    pub fn with_reveal_delay_ms(mut self, delay_ms: u32) -> Self {
        self.reveal_delay_ms = delay_ms;
        self
    }

    /// Deal a fresh deck and start the countdown.
    ///
    /// Callable from any state; a pending resolution from the previous session
    /// is dropped.
    pub fn start_game(&mut self, limit: TimeLimit) {
        let deck = Deck::shuffled(&mut self.rng);
        self.start_with_deck(limit, deck);
    }

    /// Start with a caller-chosen layout (replays and tests).
    pub fn start_with_deck(&mut self, limit: TimeLimit, deck: Deck) {
        self.clear_board(deck);
        self.selected = limit;
        self.time_remaining = limit.secs();
        self.outcome = GameOutcome::InProgress;
        self.started = true;
        self.session_id = self.session_id.wrapping_add(1);
        info!(
            session = self.session_id,
            limit = limit.as_str(),
            "game started"
        );
    }

    /// Return to the title state.
    ///
    /// The deck is redealt and both sets are cleared, but the countdown does not
    /// run until `start_game` is called again. The selected preset is kept.
    pub fn reset(&mut self) {
        let deck = Deck::shuffled(&mut self.rng);
        self.clear_board(deck);
        self.time_remaining = 0;
        self.outcome = GameOutcome::InProgress;
        self.started = false;
        self.session_id = self.session_id.wrapping_add(1);
        info!(session = self.session_id, "game reset");
    }

    fn clear_board(&mut self, deck: Deck) {
        if self.pending_reveal_ms.take().is_some() {
            debug!(session = self.session_id, "pending reveal discarded");
        }
        self.deck = deck;
        self.face_up.clear();
        self.matched = [false; DECK_SIZE];
        self.matched_count = 0;
        self.countdown_ms = 0;
        self.last_resolution = None;
    }

    /// Remember the preset offered on the title screen.
    ///
    /// Ignored while a game is running.
    pub fn select_time_limit(&mut self, limit: TimeLimit) -> bool {
        if self.is_playing() {
            return false;
        }
        self.selected = limit;
        true
    }

    /// Turn a card face-up.
    ///
    /// Returns `false` (and changes nothing) when the game is not running, the
    /// index is out of range, the card is already revealed, or two cards are
    /// still waiting for resolution.
    pub fn flip_card(&mut self, index: usize) -> bool {
        if !self.is_playing()
            || index >= self.deck.len()
            || self.matched[index]
            || self.face_up.contains(&index)
            || self.face_up.is_full()
        {
            return false;
        }

        self.face_up.push(index);
        debug!(session = self.session_id, index, "card flipped");

        if self.face_up.is_full() {
            if self.reveal_delay_ms == 0 {
                self.resolve_face_up();
            } else {
                self.pending_reveal_ms = Some(self.reveal_delay_ms);
            }
        }
        true
    }

    /// Resolve the face-up pair now instead of waiting out the pause.
    pub fn resolve_pending(&mut self) -> Option<Resolution> {
        self.pending_reveal_ms.take()?;
        self.resolve_face_up()
    }

    fn resolve_face_up(&mut self) -> Option<Resolution> {
        let (a, b) = match self.face_up.as_slice() {
            &[a, b] => (a, b),
            _ => return None,
        };
        self.face_up.clear();

        let resolution = if self.deck.get(a) == self.deck.get(b) {
            self.matched[a] = true;
            self.matched[b] = true;
            self.matched_count += 2;
            Resolution::Matched(a, b)
        } else {
            Resolution::Mismatched(a, b)
        };
        self.last_resolution = Some(resolution);
        debug!(session = self.session_id, ?resolution, "pair resolved");

        if self.matched_count == self.deck.len() {
            self.outcome = GameOutcome::WonByMatchingAll;
            info!(
                session = self.session_id,
                time_remaining = self.time_remaining,
                "all pairs matched"
            );
        }
        Some(resolution)
    }

    /// One countdown second.
    ///
    /// Decrements the remaining time; a tick arriving with no time left ends
    /// the game. Ignored before start and after the game is over.
    pub fn tick(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }

        if self.time_remaining > 0 {
            self.time_remaining -= 1;
        } else {
            self.outcome = GameOutcome::LostByTimeout;
            self.pending_reveal_ms = None;
            info!(
                session = self.session_id,
                matched_pairs = self.matched_pairs(),
                "time ran out"
            );
        }
        true
    }

    /// Fixed-timestep update driven by the event loop.
    ///
    /// Runs down the reveal pause and converts every full `TICK_MS` of elapsed
    /// time into one `tick()`. Returns whether anything visible changed.
    pub fn update(&mut self, elapsed_ms: u32) -> bool {
        if !self.is_playing() {
            return false;
        }

        let mut changed = false;

        if let Some(remaining) = self.pending_reveal_ms {
            let remaining = remaining.saturating_sub(elapsed_ms);
            if remaining == 0 {
                changed |= self.resolve_pending().is_some();
            } else {
                self.pending_reveal_ms = Some(remaining);
            }
        }

        self.countdown_ms = self.countdown_ms.saturating_add(elapsed_ms);
        while self.countdown_ms >= TICK_MS && self.is_playing() {
            self.countdown_ms -= TICK_MS;
            changed |= self.tick();
        }

        changed
    }

    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    /// Symbol of a revealed card; `None` for face-down or out-of-range cards.
    pub fn symbol_at(&self, index: usize) -> Option<Symbol> {
        self.card(index).and_then(|face| face.symbol())
    }

    pub fn card(&self, index: usize) -> Option<CardFace> {
        let symbol = self.deck.get(index)?;
        Some(if self.matched[index] {
            CardFace::Matched(symbol)
        } else if self.face_up.contains(&index) {
            CardFace::FaceUp(symbol)
        } else {
            CardFace::Hidden
        })
    }

    /// True when the card is face-up or matched.
    pub fn is_face_up(&self, index: usize) -> bool {
        self.card(index).is_some_and(|face| face.is_revealed())
    }

    pub fn is_matched(&self, index: usize) -> bool {
        self.matched.get(index).copied().unwrap_or(false)
    }

    pub fn face_up(&self) -> &[usize] {
        &self.face_up
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn did_win(&self) -> bool {
        self.outcome == GameOutcome::WonByMatchingAll
    }

    pub fn started(&self) -> bool {
        self.started
    }

    /// Started and not yet won or lost.
    pub fn is_playing(&self) -> bool {
        self.started && !self.is_over()
    }

    pub fn has_pending_reveal(&self) -> bool {
        self.pending_reveal_ms.is_some()
    }

    pub fn matched_pairs(&self) -> u32 {
        (self.matched_count / 2) as u32
    }

    pub fn selected_limit(&self) -> TimeLimit {
        self.selected
    }

    pub fn session_id(&self) -> u32 {
        self.session_id
    }

    pub fn last_resolution(&self) -> Option<Resolution> {
        self.last_resolution
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (i, slot) in out.cards.iter_mut().enumerate() {
            *slot = self.card(i).unwrap_or_default();
        }
        out.time_remaining = self.time_remaining;
        out.outcome = self.outcome;
        out.started = self.started;
        out.selected = self.selected;
        out.pending_reveal = self.has_pending_reveal();
        out.matched_pairs = self.matched_pairs();
        out.session_id = self.session_id;
        out.seed = self.rng.seed();
        out.last_resolution = self.last_resolution;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        state.start_game(TimeLimit::Easy);
        state
    }

    fn first_mismatch(state: &GameState) -> (usize, usize) {
        (1..DECK_SIZE)
            .find(|&i| state.deck.get(0) != state.deck.get(i))
            .map(|i| (0, i))
            .unwrap()
    }

    fn match_all(state: &mut GameState) {
        for i in 0..DECK_SIZE {
            if state.matched[i] {
                continue;
            }
            let j = state.deck.partner_of(i).unwrap();
            assert!(state.flip_card(i));
            assert!(state.flip_card(j));
            state.resolve_pending();
        }
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert!(!state.started);
        assert!(!state.is_playing());
        assert_eq!(state.outcome, GameOutcome::InProgress);
        assert_eq!(state.time_remaining, 0);
        assert_eq!(state.session_id, 0);
        assert_eq!(state.deck_size(), DECK_SIZE);
        assert!(state.deck.is_valid());
        assert!(state.face_up.is_empty());
        assert_eq!(state.matched_count, 0);
    }

    #[test]
    fn test_start_game() {
        let mut state = GameState::new(12345);
        state.start_game(TimeLimit::Medium);

        assert!(state.started);
        assert!(state.is_playing());
        assert_eq!(state.time_remaining, 60);
        assert_eq!(state.selected, TimeLimit::Medium);
        assert_eq!(state.session_id, 1);
    }

    #[test]
    fn test_flip_before_start_is_ignored() {
        let mut state = GameState::new(1);
        assert!(!state.flip_card(0));
        assert!(!state.is_face_up(0));
    }

    #[test]
    fn test_flip_out_of_range_is_ignored() {
        let mut state = playing(1);
        assert!(!state.flip_card(DECK_SIZE));
        assert!(!state.flip_card(usize::MAX));
        assert!(state.face_up.is_empty());
    }

    #[test]
    fn test_flip_same_card_twice_is_ignored() {
        let mut state = playing(1);
        assert!(state.flip_card(3));
        assert!(!state.flip_card(3));
        assert_eq!(state.face_up.as_slice(), &[3]);
        assert!(!state.has_pending_reveal());
    }

    #[test]
    fn test_third_flip_while_pending_is_ignored() {
        let mut state = playing(1);
        let (a, b) = first_mismatch(&state);
        let c = (0..DECK_SIZE).find(|&i| i != a && i != b).unwrap();

        assert!(state.flip_card(a));
        assert!(state.flip_card(b));
        assert!(state.has_pending_reveal());
        assert!(!state.flip_card(c));
        assert!(!state.is_face_up(c));
    }

    #[test]
    fn test_matching_pair_moves_to_matched() {
        let mut state = playing(7);
        let partner = state.deck.partner_of(0).unwrap();

        state.flip_card(0);
        state.flip_card(partner);
        assert_eq!(
            state.resolve_pending(),
            Some(Resolution::Matched(0, partner))
        );

        assert!(state.is_matched(0));
        assert!(state.is_matched(partner));
        assert!(state.face_up.is_empty());
        assert_eq!(state.matched_pairs(), 1);
        assert!(!state.flip_card(0));
        assert!(!state.flip_card(partner));
        assert_eq!(state.card(0), Some(CardFace::Matched(state.deck.get(0).unwrap())));
    }

    #[test]
    fn test_mismatched_pair_flips_back() {
        let mut state = playing(7);
        let (a, b) = first_mismatch(&state);
        let deck_before = state.deck;

        state.flip_card(a);
        state.flip_card(b);
        assert!(state.is_face_up(a));
        assert!(state.is_face_up(b));
        assert_eq!(state.resolve_pending(), Some(Resolution::Mismatched(a, b)));

        assert!(!state.is_face_up(a));
        assert!(!state.is_face_up(b));
        assert_eq!(state.deck, deck_before);
        assert_eq!(state.matched_count, 0);
        assert_eq!(state.outcome, GameOutcome::InProgress);
    }

    #[test]
    fn test_resolution_waits_for_reveal_delay() {
        let mut state = playing(3);
        let (a, b) = first_mismatch(&state);
        state.flip_card(a);
        state.flip_card(b);

        assert!(!state.update(REVEAL_DELAY_MS - FRAME_MS));
        assert!(state.has_pending_reveal());
        assert!(state.is_face_up(a));

        assert!(state.update(FRAME_MS));
        assert!(!state.has_pending_reveal());
        assert!(!state.is_face_up(a));
    }

    #[test]
    fn test_zero_delay_resolves_on_second_flip() {
        let mut state = GameState::new(3).with_reveal_delay_ms(0);
        state.start_game(TimeLimit::Hard);
        let (a, b) = first_mismatch(&state);

        state.flip_card(a);
        state.flip_card(b);
        assert!(!state.has_pending_reveal());
        assert!(state.face_up.is_empty());
        assert_eq!(state.last_resolution, Some(Resolution::Mismatched(a, b)));
    }

    #[test]
    fn test_symbol_hidden_while_face_down() {
        let mut state = playing(5);
        assert_eq!(state.symbol_at(0), None);
        assert_eq!(state.card(0), Some(CardFace::Hidden));

        state.flip_card(0);
        assert_eq!(state.symbol_at(0), state.deck.get(0));
        assert_eq!(state.symbol_at(DECK_SIZE), None);
        assert_eq!(state.card(DECK_SIZE), None);
    }

    #[test]
    fn test_tick_counts_down_then_times_out() {
        let mut state = GameState::new(1);
        state.start_game(TimeLimit::Hard);

        for expected in (0..30).rev() {
            assert!(state.tick());
            assert_eq!(state.time_remaining, expected);
            assert_eq!(state.outcome, GameOutcome::InProgress);
        }

        assert!(state.tick());
        assert_eq!(state.outcome, GameOutcome::LostByTimeout);
        assert!(!state.tick());
        assert_eq!(state.time_remaining, 0);
    }

    #[test]
    fn test_tick_before_start_is_ignored() {
        let mut state = GameState::new(1);
        assert!(!state.tick());
        assert!(!state.update(5 * TICK_MS));
        assert_eq!(state.outcome, GameOutcome::InProgress);
    }

    #[test]
    fn test_update_accumulates_partial_seconds() {
        let mut state = playing(1);
        for _ in 0..(TICK_MS / FRAME_MS - 1) {
            state.update(FRAME_MS);
        }
        assert_eq!(state.time_remaining, 90);
        state.update(FRAME_MS);
        assert_eq!(state.time_remaining, 89);

        state.update(3 * TICK_MS);
        assert_eq!(state.time_remaining, 86);
    }

    #[test]
    fn test_timeout_discards_pending_reveal() {
        let mut state = GameState::new(1);
        state.start_game(TimeLimit::Hard);
        for _ in 0..30 {
            state.tick();
        }
        let partner = state.deck.partner_of(0).unwrap();
        state.flip_card(0);
        state.flip_card(partner);

        state.tick();
        assert_eq!(state.outcome, GameOutcome::LostByTimeout);
        assert!(!state.has_pending_reveal());
        assert_eq!(state.resolve_pending(), None);
        assert!(!state.is_matched(0));
    }

    #[test]
    fn test_win_when_all_pairs_matched() {
        let mut state = playing(11);
        match_all(&mut state);

        assert_eq!(state.outcome, GameOutcome::WonByMatchingAll);
        assert!(state.did_win());
        assert!(state.is_over());
        assert_eq!(state.matched_pairs(), PAIR_COUNT as u32);
    }

    #[test]
    fn test_win_is_final() {
        let mut state = playing(11);
        match_all(&mut state);
        let remaining = state.time_remaining;

        for _ in 0..200 {
            assert!(!state.tick());
        }
        assert!(!state.update(10 * TICK_MS));
        assert_eq!(state.outcome, GameOutcome::WonByMatchingAll);
        assert_eq!(state.time_remaining, remaining);
    }

    #[test]
    fn test_reset_returns_to_title() {
        let mut state = playing(2);
        state.flip_card(0);
        state.reset();

        assert!(!state.started);
        assert!(!state.is_playing());
        assert_eq!(state.outcome, GameOutcome::InProgress);
        assert_eq!(state.time_remaining, 0);
        assert!(state.face_up.is_empty());
        assert!(state.deck.is_valid());
        assert_eq!(state.selected, TimeLimit::Easy);
        assert!(!state.flip_card(0));
        assert!(!state.tick());
    }

    #[test]
    fn test_reset_cancels_pending_reveal() {
        let mut state = playing(4);
        let partner = state.deck.partner_of(0).unwrap();
        state.flip_card(0);
        state.flip_card(partner);
        assert!(state.has_pending_reveal());

        state.reset();
        state.start_game(TimeLimit::Easy);
        assert!(!state.has_pending_reveal());

        state.update(REVEAL_DELAY_MS * 2);
        assert_eq!(state.matched_count, 0);
        assert!(state.face_up.is_empty());
        assert_eq!(state.last_resolution, None);
    }

    #[test]
    fn test_restart_while_pending_uses_fresh_state() {
        let mut state = playing(4);
        let (a, b) = first_mismatch(&state);
        state.flip_card(a);
        state.flip_card(b);

        state.start_game(TimeLimit::Medium);
        assert!(!state.has_pending_reveal());
        assert!(state.face_up.is_empty());
        assert_eq!(state.time_remaining, 60);
        assert_eq!(state.session_id, 2);
    }

    #[test]
    fn test_select_time_limit_only_on_title() {
        let mut state = GameState::new(1);
        assert!(state.select_time_limit(TimeLimit::Hard));
        assert_eq!(state.selected, TimeLimit::Hard);

        state.start_game(TimeLimit::Hard);
        assert!(!state.select_time_limit(TimeLimit::Easy));
        assert_eq!(state.selected, TimeLimit::Hard);

        state.reset();
        assert_eq!(state.selected, TimeLimit::Hard);
    }

    #[test]
    fn test_start_with_deck_uses_layout() {
        let mut state = GameState::new(1);
        state.start_with_deck(TimeLimit::Easy, Deck::ordered());
        state.flip_card(0);
        state.flip_card(PAIR_COUNT);
        assert_eq!(
            state.resolve_pending(),
            Some(Resolution::Matched(0, PAIR_COUNT))
        );
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = playing(9);
        state.flip_card(5);
        let snap = state.snapshot();

        assert!(snap.started);
        assert_eq!(snap.time_remaining, 90);
        assert_eq!(snap.cards[5], CardFace::FaceUp(state.deck.get(5).unwrap()));
        assert_eq!(snap.cards[0], CardFace::Hidden);
        assert!(!snap.pending_reveal);
        assert_eq!(snap.session_id, 1);
        assert_eq!(snap.seed, 9);
    }
}
