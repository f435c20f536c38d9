use anyhow::Result;
use minifb::{Key, KeyRepeat, Window, WindowOptions};

use crate::render::canvas::{Canvas, PaintStyle, TextAlign};

/// u32 RGBフレームバッファに直接描くCanvas実装
pub struct FramebufferCanvas {
    buffer: Vec<u32>,
    width: usize,
    height: usize,
}

impl FramebufferCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            buffer: vec![0u32; width * height],
            width,
            height,
        }
    }

    pub fn buffer(&self) -> &[u32] {
        &self.buffer
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// バッファを単色で塗りつぶす
    pub fn fill(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    /// ピクセルをセット（境界チェック付き）
    fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            self.buffer[y as usize * self.width + x as usize] = color;
        }
    }

    /// Bresenhamのアルゴリズムで1ピクセル幅の線を描画
    fn draw_thin_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        let mut x = x0;
        let mut y = y0;

        loop {
            self.set_pixel(x, y, color);

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// 円を描画（塗りつぶし）
    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: u32) {
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= radius * radius {
                    self.set_pixel(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// 円を描画（縁のみ、太さ指定）
    fn stroke_circle(&mut self, cx: i32, cy: i32, radius: i32, width: i32, color: u32) {
        let inner = (radius - width).max(0);
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let d2 = dx * dx + dy * dy;
                if d2 <= radius * radius && d2 >= inner * inner {
                    self.set_pixel(cx + dx, cy + dy, color);
                }
            }
        }
    }

    fn draw_glyph(&mut self, glyph: &[u8; 7], x: i32, y: i32, scale: i32, color: u32) {
        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..5 {
                if bits & (0b10000 >> col) != 0 {
                    for sy in 0..scale {
                        for sx in 0..scale {
                            self.set_pixel(
                                x + col * scale + sx,
                                y + row as i32 * scale + sy,
                                color,
                            );
                        }
                    }
                }
            }
        }
    }
}

impl Canvas for FramebufferCanvas {
    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32, color: u32) {
        // 太さは主軸に直交する方向へ平行線を重ねて近似する
        let half = ((width / 2.0).round() as i32).max(0);
        let horizontal_major = (x2 - x1).abs() >= (y2 - y1).abs();
        for offset in -half..=half {
            let (ox, oy) = if horizontal_major { (0, offset) } else { (offset, 0) };
            self.draw_thin_line(
                x1.round() as i32 + ox,
                y1.round() as i32 + oy,
                x2.round() as i32 + ox,
                y2.round() as i32 + oy,
                color,
            );
        }
    }

    fn circle(&mut self, cx: f32, cy: f32, radius: f32, color: u32, style: PaintStyle) {
        let cx = cx.round() as i32;
        let cy = cy.round() as i32;
        let radius = radius.round() as i32;
        match style {
            PaintStyle::Fill => self.fill_circle(cx, cy, radius, color),
            PaintStyle::Stroke { width } => {
                self.stroke_circle(cx, cy, radius, (width.round() as i32).max(1), color)
            }
        }
    }

    fn point(&mut self, x: f32, y: f32, color: u32) {
        self.fill_circle(x.round() as i32, y.round() as i32, 2, color);
    }

    fn text(&mut self, text: &str, x: f32, y: f32, color: u32, size: f32, align: TextAlign) {
        let scale = ((size / 14.0).round() as i32).max(1);
        let advance = 6 * scale;
        let total_width = advance * text.chars().count() as i32;

        let mut px = match align {
            TextAlign::Left => x.round() as i32,
            TextAlign::Center => x.round() as i32 - total_width / 2,
        };
        let py = y.round() as i32 - (7 * scale) / 2;

        for ch in text.chars() {
            if let Some(glyph) = glyph_for(ch) {
                self.draw_glyph(glyph, px, py, scale, color);
            }
            px += advance;
        }
    }
}

/// 5x7ビットマップグリフ。角度ラベル ("-12.3°", "NaN°") と
/// インデックスラベル (0〜32) に必要な文字だけ持つ
fn glyph_for(ch: char) -> Option<&'static [u8; 7]> {
    static GLYPHS: [(char, [u8; 7]); 15] = [
        ('0', [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110]),
        ('1', [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
        ('2', [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111]),
        ('3', [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110]),
        ('4', [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010]),
        ('5', [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110]),
        ('6', [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110]),
        ('7', [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000]),
        ('8', [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110]),
        ('9', [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100]),
        ('.', [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100]),
        ('-', [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000]),
        ('°', [0b01110, 0b10001, 0b01110, 0b00000, 0b00000, 0b00000, 0b00000]),
        ('N', [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001]),
        ('a', [0b00000, 0b00000, 0b01110, 0b00001, 0b01111, 0b10001, 0b01111]),
    ];

    GLYPHS.iter().find(|(c, _)| *c == ch).map(|(_, g)| g)
}

/// minifbを使用したウィンドウレンダラ
pub struct MinifbRenderer {
    window: Window,
    pub canvas: FramebufferCanvas,
}

impl MinifbRenderer {
    /// ウィンドウを作成
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self> {
        let window = Window::new(
            title,
            width,
            height,
            WindowOptions {
                resize: false,
                ..WindowOptions::default()
            },
        )?;

        Ok(Self {
            window,
            canvas: FramebufferCanvas::new(width, height),
        })
    }

    /// ウィンドウが開いているか（ESCで終了）
    pub fn is_open(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(Key::Escape)
    }

    /// キーが今フレーム押されたか（リピートなし）
    pub fn key_pressed(&self, key: Key) -> bool {
        self.window.is_key_pressed(key, KeyRepeat::No)
    }

    /// バッファをウィンドウに表示
    pub fn update(&mut self) -> Result<()> {
        let (width, height) = self.canvas.size();
        self.window
            .update_with_buffer(self.canvas.buffer(), width, height)?;
        Ok(())
    }
}
