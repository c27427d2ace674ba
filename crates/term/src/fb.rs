//! Back buffer of styled character cells.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Foreground and background of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Rgb,
    pub bg: Rgb,
}

impl Style {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self { fg, bg }
    }

    /// White on black.
    pub const PLAIN: Style = Style::new(Rgb::WHITE, Rgb::BLACK);
}

impl Default for Style {
    fn default() -> Self {
        Self::PLAIN
    }
}

/// A character with its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: Style,
}

impl Glyph {
    pub const BLANK: Glyph = Glyph {
        ch: ' ',
        style: Style::PLAIN,
    };

    pub const fn new(ch: char, style: Style) -> Self {
        Self { ch, style }
    }

    /// A space painted in `bg`.
    pub const fn solid(bg: Rgb) -> Self {
        Self {
            ch: ' ',
            style: Style::new(Rgb::BLACK, bg),
        }
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Fixed-size grid of glyphs. Writes outside the buffer are ignored.
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
            glyphs: vec![Glyph::BLANK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, reusing the allocation where possible. Contents are blanked.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.glyphs.clear();
        self.glyphs
            .resize(width as usize * height as usize, Glyph::BLANK);
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.idx(x as i32, y as i32).map(|i| self.glyphs[i])
    }

    /// Set a glyph; signed coordinates so callers can draw partly off-screen.
    pub fn set(&mut self, x: i32, y: i32, glyph: Glyph) {
        if let Some(i) = self.idx(x, y) {
            self.glyphs[i] = glyph;
        }
    }

    pub fn clear(&mut self) {
        self.glyphs.fill(Glyph::BLANK);
    }

    pub fn put_str(&mut self, x: i32, y: i32, s: &str, style: Style) {
        for (i, ch) in s.chars().enumerate() {
            self.set(x + i as i32, y, Glyph::new(ch, style));
        }
    }

    /// The text of row `y`, for tests and debugging.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|g| g.ch)
            .collect()
    }
}
