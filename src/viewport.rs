use serde::Deserialize;

use crate::pose::Landmark;

/// 表示ポリシー
///
/// Fit: アスペクト比維持でビューポート内に収める（レターボックス）。
/// 静止画・動画再生向け。
/// Fill: アスペクト比維持でビューポートを埋める（クロップ）。
/// ライブカメラプレビュー向け。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    Fit,
    Fill,
}

/// 描画面と入力フレームの寸法、およびそこから導出されるスケール
///
/// 結果とスケールは必ず同時に確定する（部分更新は見えない）。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub image_width: u32,
    pub image_height: u32,
    pub scale_factor: f32,
}

impl ViewportState {
    /// 寸法からスケールを導出して構築。いずれかの寸法が0なら None
    /// （描画スキップ扱い、エラーではない）
    pub fn new(
        viewport_width: u32,
        viewport_height: u32,
        image_width: u32,
        image_height: u32,
        mode: DisplayMode,
    ) -> Option<Self> {
        if viewport_width == 0 || viewport_height == 0 || image_width == 0 || image_height == 0 {
            return None;
        }

        let sx = viewport_width as f32 / image_width as f32;
        let sy = viewport_height as f32 / image_height as f32;
        let scale_factor = match mode {
            DisplayMode::Fit => sx.min(sy),
            DisplayMode::Fill => sx.max(sy),
        };

        Some(Self {
            viewport_width,
            viewport_height,
            image_width,
            image_height,
            scale_factor,
        })
    }

    /// 正規化座標をピクセル座標へ変換
    pub fn to_pixel(&self, landmark: &Landmark) -> (f32, f32) {
        (
            landmark.x * self.image_width as f32 * self.scale_factor,
            landmark.y * self.image_height as f32 * self.scale_factor,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimensions() {
        assert!(ViewportState::new(0, 480, 640, 480, DisplayMode::Fit).is_none());
        assert!(ViewportState::new(640, 0, 640, 480, DisplayMode::Fit).is_none());
        assert!(ViewportState::new(640, 480, 0, 480, DisplayMode::Fit).is_none());
        assert!(ViewportState::new(640, 480, 640, 0, DisplayMode::Fill).is_none());
    }

    #[test]
    fn test_fit_scale() {
        // 1000x1000 ビューポート、100x100 フレーム → 10倍
        let vp = ViewportState::new(1000, 1000, 100, 100, DisplayMode::Fit).unwrap();
        assert_eq!(vp.scale_factor, 10.0);
    }

    #[test]
    fn test_fill_scale() {
        // 1080x1920 ビューポート、480x640 フレーム → max(2.25, 3.0) = 3.0
        let vp = ViewportState::new(1080, 1920, 480, 640, DisplayMode::Fill).unwrap();
        assert_eq!(vp.scale_factor, 3.0);
    }

    #[test]
    fn test_fit_le_fill() {
        let fit = ViewportState::new(1080, 1920, 480, 640, DisplayMode::Fit).unwrap();
        let fill = ViewportState::new(1080, 1920, 480, 640, DisplayMode::Fill).unwrap();
        assert!(fit.scale_factor <= fill.scale_factor);
        assert_eq!(fit.scale_factor, 2.25);
    }

    #[test]
    fn test_fit_eq_fill_same_aspect() {
        // アスペクト比が一致すれば fit == fill
        let fit = ViewportState::new(1280, 960, 640, 480, DisplayMode::Fit).unwrap();
        let fill = ViewportState::new(1280, 960, 640, 480, DisplayMode::Fill).unwrap();
        assert_eq!(fit.scale_factor, fill.scale_factor);
        assert_eq!(fit.scale_factor, 2.0);
    }

    #[test]
    fn test_to_pixel() {
        let vp = ViewportState::new(1000, 1000, 100, 100, DisplayMode::Fit).unwrap();
        let (px, py) = vp.to_pixel(&Landmark::new(0.5, 0.5, 0.0));
        assert_eq!(px, 500.0);
        assert_eq!(py, 500.0);
    }

    #[test]
    fn test_to_pixel_linear() {
        // 固定スケールで画像寸法を k 倍すると出力座標も k 倍
        let vp1 = ViewportState {
            viewport_width: 1000,
            viewport_height: 1000,
            image_width: 100,
            image_height: 100,
            scale_factor: 2.0,
        };
        let vp2 = ViewportState {
            image_width: 300,
            image_height: 300,
            ..vp1
        };
        let lm = Landmark::new(0.25, 0.75, 0.0);
        let (x1, y1) = vp1.to_pixel(&lm);
        let (x2, y2) = vp2.to_pixel(&lm);
        assert_eq!(x2, x1 * 3.0);
        assert_eq!(y2, y1 * 3.0);
    }

    #[test]
    fn test_display_mode_deserialize() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: DisplayMode,
        }
        let w: Wrapper = toml::from_str(r#"mode = "fit""#).unwrap();
        assert_eq!(w.mode, DisplayMode::Fit);
        let w: Wrapper = toml::from_str(r#"mode = "fill""#).unwrap();
        assert_eq!(w.mode, DisplayMode::Fill);
    }
}
