//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{
    CardFace, GameOutcome, Symbol, TimeLimit, DECK_SIZE, GRID_COLUMNS, PAIR_COUNT,
};

/// Game title shown on both screens.
pub const TITLE: &str = "EMOJI MATCH";

const CARD_W: u16 = 7;
const CARD_H: u16 = 3;
const GAP_X: u16 = 1;
const GAP_Y: u16 = 1;
/// Title row plus one blank row above the board frame.
const HEADER_H: u16 = 2;

const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const BOARD_BG: Rgb = Rgb::new(30, 30, 40);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Placement of the board frame inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
}

impl BoardLayout {
    /// Top-left corner of card `index`.
    pub fn card_origin(&self, index: usize) -> (u16, u16) {
        let col = (index % GRID_COLUMNS) as u16;
        let row = (index / GRID_COLUMNS) as u16;
        (
            self.frame_x + 2 + col * (CARD_W + GAP_X),
            self.frame_y + 1 + row * (CARD_H + GAP_Y),
        )
    }
}

/// A lightweight terminal renderer for the memory game.
pub struct GameView {
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Board frame size, border included.
    pub fn frame_size() -> (u16, u16) {
        let cols = GRID_COLUMNS as u16;
        let rows = DECK_SIZE.div_ceil(GRID_COLUMNS) as u16;
        let inner_w = cols * CARD_W + (cols - 1) * GAP_X;
        let inner_h = rows * CARD_H + (rows - 1) * GAP_Y;
        (inner_w + 4, inner_h + 2)
    }

    /// Compute where the board is placed for `viewport`.
    pub fn layout(&self, viewport: Viewport) -> BoardLayout {
        let (frame_w, frame_h) = Self::frame_size();
        let total_h = frame_h + HEADER_H;
        let top = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };
        BoardLayout {
            frame_x: viewport.width.saturating_sub(frame_w) / 2,
            frame_y: top + HEADER_H,
            frame_w,
            frame_h,
        }
    }

    /// Render into an existing framebuffer.
    ///
    /// `cursor` is the highlighted card index, if any.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        cursor: Option<usize>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        if snap.on_title() {
            self.draw_title_screen(fb, snap.selected, viewport);
            return;
        }

        let layout = self.layout(viewport);
        let heading = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str_centered(
            layout.frame_x,
            layout.frame_w,
            layout.frame_y.saturating_sub(HEADER_H),
            TITLE,
            heading,
        );

        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        fb.fill_rect(
            layout.frame_x + 1,
            layout.frame_y + 1,
            layout.frame_w.saturating_sub(2),
            layout.frame_h.saturating_sub(2),
            ' ',
            CellStyle::new(BOARD_BG, BOARD_BG),
        );
        fb.draw_box(
            layout.frame_x,
            layout.frame_y,
            layout.frame_w,
            layout.frame_h,
            border,
        );

        let cursor = cursor.filter(|_| snap.playable());
        for (i, face) in snap.cards.iter().enumerate() {
            self.draw_card(fb, &layout, i, *face, cursor == Some(i));
        }

        self.draw_side_panel(fb, snap, &layout, viewport);

        match snap.outcome {
            GameOutcome::InProgress => {}
            GameOutcome::WonByMatchingAll => {
                self.draw_result(fb, &layout, true, snap.time_remaining)
            }
            GameOutcome::LostByTimeout => self.draw_result(fb, &layout, false, 0),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        cursor: Option<usize>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    fn draw_title_screen(&self, fb: &mut FrameBuffer, selected: TimeLimit, viewport: Viewport) {
        const BLOCK_W: u16 = 24;
        const BLOCK_H: u16 = 10;

        let x = viewport.width.saturating_sub(BLOCK_W) / 2;
        let mut y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(BLOCK_H) / 2,
            AnchorY::Top => 0,
        };

        let heading = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let label = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let hint = label.dim();
        let chosen = CellStyle::new(Rgb::new(20, 20, 20), Rgb::new(100, 220, 120)).bold();

        fb.put_str_centered(x, BLOCK_W, y, TITLE, heading);
        y = y.saturating_add(2);
        fb.put_str(x, y, "Select time", label);
        y = y.saturating_add(1);

        for (i, limit) in TimeLimit::ALL.iter().enumerate() {
            let style = if *limit == selected { chosen } else { label };
            let marker = if *limit == selected { '>' } else { ' ' };
            fb.put_char(x, y, marker, style);
            fb.put_u32(x + 2, y, (i as u32) + 1, style);
            fb.put_str(x + 4, y, limit.label(), style);
            y = y.saturating_add(1);
        }

        y = y.saturating_add(1);
        fb.put_str(x, y, "Enter  start game", hint);
        y = y.saturating_add(1);
        fb.put_str(x, y, "Tab    change time", hint);
        y = y.saturating_add(1);
        fb.put_str(x, y, "q      quit", hint);
    }

    fn draw_card(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        index: usize,
        face: CardFace,
        selected: bool,
    ) {
        let (x, y) = layout.card_origin(index);

        let (edge, fill, glyph) = match face {
            CardFace::Hidden => (
                CellStyle::new(Rgb::new(90, 120, 220), BOARD_BG),
                CellStyle::new(Rgb::new(70, 100, 200), BOARD_BG),
                '░',
            ),
            CardFace::FaceUp(symbol) => (
                CellStyle::new(Rgb::new(240, 240, 240), BOARD_BG).bold(),
                CellStyle::new(symbol_color(symbol), BOARD_BG).bold(),
                symbol.letter(),
            ),
            CardFace::Matched(symbol) => (
                CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim(),
                CellStyle::new(symbol_color(symbol), BOARD_BG).dim(),
                symbol.letter(),
            ),
        };
        let edge = if selected {
            CellStyle::new(Rgb::new(255, 210, 60), BOARD_BG).bold()
        } else {
            edge
        };

        fb.draw_box(x, y, CARD_W, CARD_H, edge);
        match face {
            CardFace::Hidden => fb.fill_rect(x + 1, y + 1, CARD_W - 2, CARD_H - 2, glyph, fill),
            CardFace::FaceUp(_) | CardFace::Matched(_) => {
                fb.put_char(x + CARD_W / 2, y + CARD_H / 2, glyph, fill)
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        layout: &BoardLayout,
        viewport: Viewport,
    ) {
        let panel_x = layout.frame_x.saturating_add(layout.frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let urgent = CellStyle::new(Rgb::new(230, 80, 80), PANEL_BG).bold();

        let mut y = layout.frame_y;
        fb.put_str(panel_x, y, "TIME", label);
        y = y.saturating_add(1);
        let time_style = if snap.time_remaining <= 10 { urgent } else { value };
        let end = fb.put_u32(panel_x, y, snap.time_remaining, time_style);
        fb.put_char(end, y, 's', time_style);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "PAIRS", label);
        y = y.saturating_add(1);
        let end = fb.put_u32(panel_x, y, snap.matched_pairs, value);
        fb.put_char(end, y, '/', value);
        fb.put_u32(end.saturating_add(1), y, PAIR_COUNT as u32, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MODE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, snap.selected.label(), value);
        y = y.saturating_add(2);

        let status = if snap.pending_reveal {
            Some(("...", value))
        } else {
            snap.last_resolution.map(|resolution| {
                if resolution.is_match() {
                    ("MATCH!", CellStyle::new(Rgb::new(100, 220, 120), PANEL_BG).bold())
                } else {
                    ("NO MATCH", value.dim())
                }
            })
        };
        if let Some((text, style)) = status {
            fb.put_str(panel_x, y, text, style);
        }
        y = y.saturating_add(2);

        let hint = value.dim();
        for line in ["Space flip", "r     reset", "q     quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_result(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        won: bool,
        seconds_left: u32,
    ) {
        const BOX_W: u16 = 27;
        const BOX_H: u16 = 6;

        let x = layout.frame_x + layout.frame_w.saturating_sub(BOX_W) / 2;
        let y = layout.frame_y + layout.frame_h.saturating_sub(BOX_H) / 2;

        let bg = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0));
        fb.fill_rect(x, y, BOX_W, BOX_H, ' ', bg);
        fb.draw_box(x, y, BOX_W, BOX_H, bg);

        let inner_x = x + 1;
        let inner_w = BOX_W - 2;
        if won {
            fb.put_str_centered(inner_x, inner_w, y + 1, "YOU WIN!", bg.bold());
            fb.put_str_centered(inner_x, inner_w, y + 2, "All cards matched with", bg);
            // "<n> seconds remaining", centred as a unit.
            let digits = decimal_width(seconds_left);
            let line_w = digits + " seconds remaining".len() as u16;
            let lx = inner_x + inner_w.saturating_sub(line_w) / 2;
            let end = fb.put_u32(lx, y + 3, seconds_left, bg.bold());
            fb.put_str(end, y + 3, " seconds remaining", bg);
        } else {
            fb.put_str_centered(inner_x, inner_w, y + 1, "TIME'S UP!", bg.bold());
            fb.put_str_centered(inner_x, inner_w, y + 2, "Want to play again?", bg);
        }
        fb.put_str_centered(inner_x, inner_w, y + 4, "Enter: play again", bg.dim());
    }
}

fn decimal_width(mut v: u32) -> u16 {
    let mut w = 1;
    while v >= 10 {
        v /= 10;
        w += 1;
    }
    w
}

fn symbol_color(symbol: Symbol) -> Rgb {
    match symbol {
        Symbol::Apple => Rgb::new(220, 60, 60),
        Symbol::Banana => Rgb::new(240, 220, 80),
        Symbol::Grapes => Rgb::new(160, 90, 220),
        Symbol::Watermelon => Rgb::new(100, 220, 120),
        Symbol::Strawberry => Rgb::new(255, 110, 140),
        Symbol::Cherries => Rgb::new(200, 30, 70),
        Symbol::Peach => Rgb::new(255, 180, 120),
        Symbol::Pineapple => Rgb::new(255, 165, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_fits_four_by_four_grid() {
        assert_eq!(GameView::frame_size(), (35, 17));
    }

    #[test]
    fn card_origins_step_by_card_size() {
        let layout = BoardLayout {
            frame_x: 0,
            frame_y: 0,
            frame_w: 35,
            frame_h: 17,
        };
        assert_eq!(layout.card_origin(0), (2, 1));
        assert_eq!(layout.card_origin(1), (10, 1));
        assert_eq!(layout.card_origin(GRID_COLUMNS), (2, 5));
        assert_eq!(layout.card_origin(DECK_SIZE - 1), (26, 13));
    }

    #[test]
    fn decimal_width_counts_digits() {
        assert_eq!(decimal_width(0), 1);
        assert_eq!(decimal_width(9), 1);
        assert_eq!(decimal_width(10), 2);
        assert_eq!(decimal_width(90), 2);
        assert_eq!(decimal_width(100), 3);
    }

    #[test]
    fn symbol_colors_are_distinct() {
        for (i, a) in Symbol::ALL.iter().enumerate() {
            for b in &Symbol::ALL[i + 1..] {
                assert_ne!(symbol_color(*a), symbol_color(*b));
            }
        }
    }
}
