//! Character-cell framebuffer.
//!
//! The scene draws into a [`FrameBuffer`] with no I/O; the terminal renderer
//! later flushes only the cells that changed since the previous frame.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// Axis-aligned rectangle in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && (x as u32) < self.x as u32 + self.w as u32
            && (y as u32) < self.y as u32 + self.h as u32
    }
}

/// Grid of styled cells, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Change dimensions, reusing the allocation when it is large enough.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.cells
            .resize(width as usize * height as usize, Cell::default());
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Write a cell; positions outside the buffer are ignored.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Write a string left to right, clipped at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        for (i, ch) in s.chars().enumerate() {
            let Some(cx) = x.checked_add(i as u16).filter(|&cx| cx < self.width) else {
                break;
            };
            self.put_char(cx, y, ch, style);
        }
    }

    /// Write a number without allocating.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) {
        let mut digits = [0u8; 10];
        let mut n = value;
        let mut len = 0;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        for (i, d) in digits[..len].iter().rev().enumerate() {
            self.put_char(x.saturating_add(i as u16), y, *d as char, style);
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, ch: char, style: CellStyle) {
        for dy in 0..rect.h {
            for dx in 0..rect.w {
                self.put_char(rect.x.saturating_add(dx), rect.y.saturating_add(dy), ch, style);
            }
        }
    }

    /// Outline a rectangle with box-drawing characters.
    pub fn stroke_rect(&mut self, rect: Rect, style: CellStyle) {
        if rect.w < 2 || rect.h < 2 {
            return;
        }
        let right = rect.x + rect.w - 1;
        let bottom = rect.y + rect.h - 1;

        for x in rect.x + 1..right {
            self.put_char(x, rect.y, '─', style);
            self.put_char(x, bottom, '─', style);
        }
        for y in rect.y + 1..bottom {
            self.put_char(rect.x, y, '│', style);
            self.put_char(right, y, '│', style);
        }
        self.put_char(rect.x, rect.y, '┌', style);
        self.put_char(right, rect.y, '┐', style);
        self.put_char(rect.x, bottom, '└', style);
        self.put_char(right, bottom, '┘', style);
    }

    /// Rows of characters, for tests and debugging
    pub fn to_lines(&self) -> Vec<String> {
        self.cells
            .chunks(self.width.max(1) as usize)
            .map(|row| row.iter().map(|c| c.ch).collect())
            .collect()
    }
}
