//! Framebuffer of palette-tagged glyphs.
//!
//! Cells carry an [`Ink`] instead of concrete colors. The renderer owns the
//! mapping from ink to terminal colors, so the view never deals with RGB.

/// Palette entry of a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Ink {
    #[default]
    Blank,
    Frame,
    Label,
    Value,
    Hint,
    Banner,
    Wall,
    Floor,
    Head,
    Body,
    Food,
    Teleport,
}

/// One terminal column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub ink: Ink,
}

impl Glyph {
    pub const BLANK: Glyph = Glyph::new(' ', Ink::Blank);

    pub const fn new(ch: char, ink: Ink) -> Self {
        Self { ch, ink }
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Row-major grid of glyphs. Writes outside the buffer are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::BLANK; usize::from(width) * usize::from(height)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Change the size and blank every glyph. The allocation is kept when it
    /// is already large enough.
    pub fn reshape(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.glyphs.clear();
        self.glyphs
            .resize(usize::from(width) * usize::from(height), Glyph::BLANK);
    }

    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.offset(x, y).map(|i| self.glyphs[i])
    }

    /// The glyphs of row `y`; empty past the last row.
    pub fn row(&self, y: u16) -> &[Glyph] {
        if y >= self.height {
            return &[];
        }
        let start = usize::from(y) * usize::from(self.width);
        &self.glyphs[start..start + usize::from(self.width)]
    }

    pub fn put(&mut self, x: u16, y: u16, glyph: Glyph) {
        if let Some(i) = self.offset(x, y) {
            self.glyphs[i] = glyph;
        }
    }

    /// Write `s` from `(x, y)` rightwards. Returns the column after the last
    /// character written.
    pub fn text(&mut self, x: u16, y: u16, s: &str, ink: Ink) -> u16 {
        let mut col = x;
        for ch in s.chars() {
            if col >= self.width {
                break;
            }
            self.put(col, y, Glyph::new(ch, ink));
            col += 1;
        }
        col
    }

    /// Write `value` in decimal without allocating.
    pub fn number(&mut self, x: u16, y: u16, value: u32, ink: Ink) -> u16 {
        let digits = value.checked_ilog10().unwrap_or(0) as u16 + 1;
        let mut rest = value;
        for i in (0..digits).rev() {
            let digit = char::from(b'0' + (rest % 10) as u8);
            self.put(x.saturating_add(i), y, Glyph::new(digit, ink));
            rest /= 10;
        }
        x.saturating_add(digits)
    }

    pub fn fill(&mut self, x: u16, y: u16, w: u16, h: u16, glyph: Glyph) {
        for row in y..y.saturating_add(h).min(self.height) {
            for col in x..x.saturating_add(w).min(self.width) {
                self.put(col, row, glyph);
            }
        }
    }

    /// Characters only, one line per row (tests and logs).
    pub fn to_text(&self) -> String {
        (0..self.height)
            .map(|y| self.row(y).iter().map(|g| g.ch).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
