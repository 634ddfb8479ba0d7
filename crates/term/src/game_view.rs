//! GameView: lays a [`GameSnapshot`] out on a framebuffer.
//!
//! Pure, no I/O. The board sits in a box-drawn frame, horizontally centered,
//! with a status panel to its right when the terminal is wide enough.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Glyph, Ink};
use crate::types::CellKind;

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

/// Vertical placement of the board frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Narrowest status panel worth drawing.
const MIN_PANEL_WIDTH: u16 = 12;

const KEY_HELP: [&str; 6] = [
    "ijkl/arrows move",
    "r reverse",
    "a autopilot",
    "s sound",
    "n new game",
    "q quit",
];

pub struct GameView {
    /// Terminal columns per board cell
    cell_w: u16,
    /// Terminal rows per board cell
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keep board cells roughly square.
        Self::new(2, 1)
    }
}

/// Outer rectangle of the board frame, border included.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into a reused framebuffer, reshaped to the viewport. Does not
    /// allocate once the buffer has reached the viewport size.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reshape(viewport.width, viewport.height);
        let frame = self.place(snap, viewport);

        draw_box(fb, frame);
        for row in 0..snap.height {
            for col in 0..snap.width {
                if let Some(kind) = snap.kind_at(row, col) {
                    fb.fill(
                        frame.x + 1 + col * self.cell_w,
                        frame.y + 1 + row * self.cell_h,
                        self.cell_w,
                        self.cell_h,
                        glyph_for(kind),
                    );
                }
            }
        }

        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if viewport.width.saturating_sub(panel_x) >= MIN_PANEL_WIDTH {
            draw_panel(fb, snap, panel_x, frame.y);
        }

        if snap.game_over {
            let text = "GAME OVER";
            let x = frame.x + frame.w.saturating_sub(text.len() as u16) / 2;
            fb.text(x, frame.y.saturating_add(frame.h / 2), text, Ink::Banner);
        }
    }

    /// Render into a fresh framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn place(&self, snap: &GameSnapshot, viewport: Viewport) -> Frame {
        let w = snap.width.saturating_mul(self.cell_w).saturating_add(2);
        let h = snap.height.saturating_mul(self.cell_h).saturating_add(2);
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y,
            w,
            h,
        }
    }
}

fn glyph_for(kind: CellKind) -> Glyph {
    match kind {
        CellKind::Wall => Glyph::new('█', Ink::Wall),
        CellKind::Open => Glyph::new('·', Ink::Floor),
        CellKind::Head => Glyph::new('█', Ink::Head),
        CellKind::Body => Glyph::new('█', Ink::Body),
        CellKind::Food => Glyph::new('●', Ink::Food),
        CellKind::Teleport => Glyph::new('◆', Ink::Teleport),
    }
}

fn draw_box(fb: &mut FrameBuffer, frame: Frame) {
    let Frame { x, y, w, h } = frame;
    if w < 2 || h < 2 {
        return;
    }
    let (right, bottom) = (x + w - 1, y + h - 1);
    let edge = |ch| Glyph::new(ch, Ink::Frame);

    fb.fill(x + 1, y, w - 2, 1, edge('─'));
    fb.fill(x + 1, bottom, w - 2, 1, edge('─'));
    fb.fill(x, y + 1, 1, h - 2, edge('│'));
    fb.fill(right, y + 1, 1, h - 2, edge('│'));
    fb.put(x, y, edge('┌'));
    fb.put(right, y, edge('┐'));
    fb.put(x, bottom, edge('└'));
    fb.put(right, bottom, edge('┘'));
}

enum Field {
    Number(u32),
    Text(&'static str),
}

/// Label/value pairs, a blank line after each, then the key help.
fn draw_panel(fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, top: u16) {
    let count = |n: usize| Field::Number(u32::try_from(n).unwrap_or(u32::MAX));
    let fields = [
        ("LENGTH", count(snap.length())),
        ("TICK", Field::Number(snap.tick)),
        ("MODE", Field::Text(snap.mode.as_str())),
        ("HEADING", Field::Text(snap.heading.as_str())),
        ("FOOD", count(snap.food.len())),
    ];

    let mut y = top;
    for (name, field) in fields {
        fb.text(x, y, name, Ink::Label);
        let value_y = y.saturating_add(1);
        match field {
            Field::Number(n) => fb.number(x, value_y, n, Ink::Value),
            Field::Text(s) => fb.text(x, value_y, s, Ink::Value),
        };
        y = y.saturating_add(3);
    }
    for line in KEY_HELP {
        fb.text(x, y, line, Ink::Hint);
        y = y.saturating_add(1);
    }
}
