//! Truecolor half-block output. Every terminal cell shows two stacked grid
//! pixels: the background colour paints the top one, the foreground colour of
//! `▄` paints the bottom one. Text is laid over the cells as plain characters.

use std::io::Write;

use super::{PostFx, Renderer, Shape, TextItem};
use crate::color::{blend, Rgb, WHITE};
use crate::error::Result;

/// World pixels covered by one grid pixel along each axis.
pub const PIXELS_PER_CELL: f32 = 8.0;

/// World size matching a terminal of `cols × rows` cells.
pub fn world_size(cols: usize, rows: usize) -> (f32, f32) {
    (
        cols as f32 * PIXELS_PER_CELL,
        rows as f32 * 2.0 * PIXELS_PER_CELL,
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Glyph {
    ch: char,
    color: Rgb,
    alpha: u8,
}

pub struct TerminalRenderer<W: Write> {
    out: W,
    cols: usize,
    rows: usize,
    background: Rgb,
    pixels: Vec<Rgb>,
    glyphs: Vec<Option<Glyph>>,
    output_buf: Vec<u8>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, cols: usize, rows: usize) -> Self {
        Self {
            out,
            cols,
            rows,
            background: (0, 0, 0),
            pixels: vec![(0, 0, 0); cols * rows * 2],
            glyphs: vec![None; cols * rows],
            output_buf: Vec::with_capacity(cols * rows * 25),
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn grid_height(&self) -> usize {
        self.rows * 2
    }

    fn blend_pixel(&mut self, gx: i32, gy: i32, color: Rgb, alpha: u8) {
        if gx < 0 || gy < 0 || gx as usize >= self.cols || gy as usize >= self.grid_height() {
            return;
        }
        let idx = gy as usize * self.cols + gx as usize;
        self.pixels[idx] = blend(self.pixels[idx], color, alpha);
    }

    fn fill_rect(&mut self, cx: f32, cy: f32, side: f32, color: Rgb, alpha: u8) {
        let cells = ((side / PIXELS_PER_CELL).round() as i32).max(1);
        let gx0 = (cx / PIXELS_PER_CELL - cells as f32 / 2.0).round() as i32;
        let gy0 = (cy / PIXELS_PER_CELL - cells as f32 / 2.0).round() as i32;
        for dy in 0..cells {
            for dx in 0..cells {
                self.blend_pixel(gx0 + dx, gy0 + dy, color, alpha);
            }
        }
    }

    fn pixel_at(&self, gx: i32, gy: i32) -> Rgb {
        if gx < 0 || gy < 0 || gx as usize >= self.cols || gy as usize >= self.grid_height() {
            return self.background;
        }
        self.pixels[gy as usize * self.cols + gx as usize]
    }

    fn glyph_at(&self, col: i32, row: i32) -> Option<Glyph> {
        if col < 0 || row < 0 || col as usize >= self.cols || row as usize >= self.rows {
            return None;
        }
        self.glyphs[row as usize * self.cols + col as usize]
    }

    fn compose(&mut self, post: PostFx) -> std::io::Result<()> {
        let ox = (post.offset.0 as f32 / PIXELS_PER_CELL).round() as i32;
        let oy = (post.offset.1 as f32 / PIXELS_PER_CELL).round() as i32;
        let flash = |c: Rgb| if post.flash > 0 { blend(c, WHITE, post.flash) } else { c };

        self.output_buf.clear();
        self.output_buf.extend_from_slice(b"\x1b[H");

        // None after every reset, so the first cell of a row always sets both.
        let mut prev_bg: Option<Rgb> = None;
        let mut prev_fg: Option<Rgb> = None;

        for row in 0..self.rows {
            for col in 0..self.cols {
                let sx = col as i32 - ox;
                let top_y = (row * 2) as i32 - oy;
                let top = flash(self.pixel_at(sx, top_y));

                let (fg, ch) = match self.glyph_at(sx, row as i32 - oy / 2) {
                    Some(g) => (flash(blend(self.pixel_at(sx, top_y), g.color, g.alpha)), g.ch),
                    None => (flash(self.pixel_at(sx, top_y + 1)), '▄'),
                };

                if prev_bg != Some(top) {
                    write!(self.output_buf, "\x1b[48;2;{};{};{}m", top.0, top.1, top.2)?;
                    prev_bg = Some(top);
                }
                if prev_fg != Some(fg) {
                    write!(self.output_buf, "\x1b[38;2;{};{};{}m", fg.0, fg.1, fg.2)?;
                    prev_fg = Some(fg);
                }
                let mut utf8 = [0u8; 4];
                self.output_buf.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
            }
            self.output_buf.extend_from_slice(b"\x1b[0m");
            prev_bg = None;
            prev_fg = None;
            if row + 1 < self.rows {
                self.output_buf.extend_from_slice(b"\r\n");
            }
        }
        Ok(())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn clear(&mut self, color: Rgb) {
        self.background = color;
        self.pixels.fill(color);
        self.glyphs.fill(None);
    }

    fn fill(&mut self, shape: Shape, color: Rgb, alpha: u8) {
        if alpha == 0 {
            return;
        }
        match shape {
            Shape::Dot { x, y, radius } => {
                let r = (radius / PIXELS_PER_CELL).round() as i32;
                let (gx, gy) = ((x / PIXELS_PER_CELL) as i32, (y / PIXELS_PER_CELL) as i32);
                for dy in -r..=r {
                    for dx in -r..=r {
                        if dx * dx + dy * dy <= r * r {
                            self.blend_pixel(gx + dx, gy + dy, color, alpha);
                        }
                    }
                }
            }
            Shape::Square { x, y, size, angle } => {
                // A rotated square covers a wider box; that swelling is what
                // reads as spin at this resolution.
                let rad = angle.to_radians();
                let side = size * (rad.cos().abs() + rad.sin().abs());
                self.fill_rect(x + size / 2.0, y + size / 2.0, side, color, alpha);
            }
        }
    }

    fn text(&mut self, item: &TextItem) {
        let row = (item.y / (PIXELS_PER_CELL * 2.0)).floor() as i32;
        if row < 0 || row as usize >= self.rows {
            return;
        }
        let centre = item.x / PIXELS_PER_CELL;
        let half = item.content.chars().count() as f32 / 2.0;

        for (i, ch) in item.content.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let col = (centre + (i as f32 - half) * item.scale).round() as i32;
            if col < 0 || col as usize >= self.cols {
                continue;
            }
            let idx = row as usize * self.cols + col as usize;
            self.glyphs[idx] = Some(match self.glyphs[idx] {
                Some(under) if under.ch == ch => Glyph {
                    ch,
                    color: blend(under.color, item.color, item.alpha),
                    alpha: under.alpha.max(item.alpha),
                },
                _ => Glyph { ch, color: item.color, alpha: item.alpha },
            });
        }
    }

    fn present(&mut self, post: PostFx) -> Result<()> {
        self.compose(post)?;
        self.out.write_all(&self.output_buf)?;
        self.out.flush()?;
        Ok(())
    }
}
