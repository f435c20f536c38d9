/// 円の塗りスタイル
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaintStyle {
    Fill,
    Stroke { width: f32 },
}

/// テキストのアンカー位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// 描画プリミティブ
///
/// 色は 0xRRGGBB。座標はビューポートピクセル。
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
        color: u32,
    },
    Circle {
        cx: f32,
        cy: f32,
        radius: f32,
        color: u32,
        style: PaintStyle,
    },
    Point {
        x: f32,
        y: f32,
        color: u32,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        color: u32,
        size: f32,
        align: TextAlign,
    },
}

/// 描画シンク
///
/// レンダラはこのトレイト越しにのみ描画する。実装は記録用の
/// DrawList とminifbフレームバッファの2つ。
pub trait Canvas {
    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32, color: u32);
    fn circle(&mut self, cx: f32, cy: f32, radius: f32, color: u32, style: PaintStyle);
    fn point(&mut self, x: f32, y: f32, color: u32);
    fn text(&mut self, text: &str, x: f32, y: f32, color: u32, size: f32, align: TextAlign);
}

/// プリミティブをそのまま記録するCanvas実装
///
/// テストのほか、プラットフォーム側のキャンバスへ橋渡しする
/// ホストからも使える。
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    pub ops: Vec<DrawOp>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl Canvas for DrawList {
    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32, color: u32) {
        self.ops.push(DrawOp::Line {
            x1,
            y1,
            x2,
            y2,
            width,
            color,
        });
    }

    fn circle(&mut self, cx: f32, cy: f32, radius: f32, color: u32, style: PaintStyle) {
        self.ops.push(DrawOp::Circle {
            cx,
            cy,
            radius,
            color,
            style,
        });
    }

    fn point(&mut self, x: f32, y: f32, color: u32) {
        self.ops.push(DrawOp::Point { x, y, color });
    }

    fn text(&mut self, text: &str, x: f32, y: f32, color: u32, size: f32, align: TextAlign) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            color,
            size,
            align,
        });
    }
}
