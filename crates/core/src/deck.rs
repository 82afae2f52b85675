//! Deck module - the 16 shuffled cards of one session
//!
//! A deck is the 8-symbol alphabet written out twice and permuted uniformly.

use crate::rng::DeckRng;
use crate::types::{Symbol, DECK_SIZE, PAIR_COUNT};

/// Ordered cards of one session. A card's identity is its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Deck {
    cards: [Symbol; DECK_SIZE],
}

impl Deck {
    /// The unshuffled deck: the alphabet followed by the alphabet again.
    pub fn ordered() -> Self {
        let mut cards = [Symbol::Apple; DECK_SIZE];
        for (i, slot) in cards.iter_mut().enumerate() {
            *slot = Symbol::ALL[i % PAIR_COUNT];
        }
        Self { cards }
    }

    /// Deal a fresh deck using `rng`.
    pub fn shuffled(rng: &mut DeckRng) -> Self {
        let mut deck = Self::ordered();
        rng.shuffle(&mut deck.cards);
        deck
    }

    /// Build a deck from an explicit layout.
    ///
    /// Returns `None` unless every symbol appears exactly twice.
    pub fn from_cards(cards: [Symbol; DECK_SIZE]) -> Option<Self> {
        let deck = Self { cards };
        deck.is_valid().then_some(deck)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Symbol> {
        self.cards.get(index).copied()
    }

    pub fn cards(&self) -> &[Symbol; DECK_SIZE] {
        &self.cards
    }

    /// How many times `symbol` appears.
    pub fn count(&self, symbol: Symbol) -> usize {
        self.cards.iter().filter(|&&s| s == symbol).count()
    }

    /// Every symbol of the alphabet exactly twice.
    pub fn is_valid(&self) -> bool {
        Symbol::ALL.iter().all(|&s| self.count(s) == 2)
    }

    /// Index of the other card carrying the same symbol as `index`.
    pub fn partner_of(&self, index: usize) -> Option<usize> {
        let symbol = self.get(index)?;
        self.cards
            .iter()
            .enumerate()
            .find(|&(i, &s)| i != index && s == symbol)
            .map(|(i, _)| i)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::ordered()
    }
}
