//! Grid cursor over the card layout.
//!
//! Row-major, clamped at the edges (no wrap-around).

use crate::types::{Direction, DECK_SIZE, GRID_COLUMNS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
    index: usize,
    columns: usize,
    len: usize,
}

impl GridCursor {
    pub fn new() -> Self {
        Self::with_layout(GRID_COLUMNS, DECK_SIZE)
    }

    /// Cursor over `len` cards laid out `columns` per row.
    pub fn with_layout(columns: usize, len: usize) -> Self {
        Self {
            index: 0,
            columns: columns.max(1),
            len,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn row(&self) -> usize {
        self.index / self.columns
    }

    pub fn column(&self) -> usize {
        self.index % self.columns
    }

    /// Move one cell; returns `false` when already at that edge.
    pub fn move_dir(&mut self, dir: Direction) -> bool {
        let next = match dir {
            Direction::Left if self.column() > 0 => self.index - 1,
            Direction::Right if self.column() + 1 < self.columns => self.index + 1,
            Direction::Up if self.row() > 0 => self.index - self.columns,
            Direction::Down => self.index + self.columns,
            _ => return false,
        };
        if next >= self.len {
            return false;
        }
        self.index = next;
        true
    }

    /// Home the cursor on the first card.
    pub fn reset(&mut self) {
        self.index = 0;
    }
}

impl Default for GridCursor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_top_left() {
        let cursor = GridCursor::new();
        assert_eq!(cursor.index(), 0);
        assert_eq!((cursor.row(), cursor.column()), (0, 0));
    }

    #[test]
    fn clamps_at_edges() {
        let mut cursor = GridCursor::new();
        assert!(!cursor.move_dir(Direction::Left));
        assert!(!cursor.move_dir(Direction::Up));

        for _ in 0..GRID_COLUMNS - 1 {
            assert!(cursor.move_dir(Direction::Right));
        }
        assert!(!cursor.move_dir(Direction::Right));
        assert_eq!(cursor.index(), GRID_COLUMNS - 1);

        for _ in 0..(DECK_SIZE / GRID_COLUMNS) - 1 {
            assert!(cursor.move_dir(Direction::Down));
        }
        assert!(!cursor.move_dir(Direction::Down));
        assert_eq!(cursor.index(), DECK_SIZE - 1);
    }

    #[test]
    fn short_last_row_blocks_down() {
        // 5 cards in rows of 3: the second row holds indices 3 and 4 only.
        let mut cursor = GridCursor::with_layout(3, 5);
        cursor.move_dir(Direction::Right);
        cursor.move_dir(Direction::Right);
        assert_eq!(cursor.index(), 2);
        assert!(!cursor.move_dir(Direction::Down));

        cursor.move_dir(Direction::Left);
        assert!(cursor.move_dir(Direction::Down));
        assert_eq!(cursor.index(), 4);
    }

    #[test]
    fn reset_homes_cursor() {
        let mut cursor = GridCursor::new();
        cursor.move_dir(Direction::Down);
        cursor.move_dir(Direction::Right);
        assert_eq!(cursor.index(), GRID_COLUMNS + 1);
        cursor.reset();
        assert_eq!(cursor.index(), 0);
    }
}
