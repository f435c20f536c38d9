use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::render::RenderMode;
use crate::viewport::DisplayMode;

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub calibration: CalibrationConfig,
    #[serde(default)]
    pub viewer: ViewerConfig,
}

/// 頭部姿勢と関節角度補正のキャリブレーション定数
///
/// オフセットと補正式は実測ベースの経験値で、導出根拠はない。
/// 不変条件ではなく設定値として扱う。
#[derive(Debug, Deserialize, Clone)]
pub struct CalibrationConfig {
    /// 正面視角度へ加算するオフセット（度）
    #[serde(default = "default_front_view_offset")]
    pub front_view_offset: f32,
    /// 側面視角度へ加算するオフセット（度）
    #[serde(default = "default_side_view_offset")]
    pub side_view_offset: f32,
    /// 側面視補正を適用する角度しきい値（度）
    #[serde(default = "default_side_view_gate")]
    pub side_view_gate: f32,
    /// 股関節・膝角度の側面視補正の強さ
    #[serde(default = "default_correction_strength")]
    pub correction_strength: f32,
    /// 手首複合角度の基準角（度）
    #[serde(default = "default_wrist_reference")]
    pub wrist_reference: f32,
}

fn default_front_view_offset() -> f32 { -120.0 }
fn default_side_view_offset() -> f32 { 80.0 }
fn default_side_view_gate() -> f32 { 20.0 }
fn default_correction_strength() -> f32 { 40.0 }
fn default_wrist_reference() -> f32 { 140.0 }

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            front_view_offset: default_front_view_offset(),
            side_view_offset: default_side_view_offset(),
            side_view_gate: default_side_view_gate(),
            correction_strength: default_correction_strength(),
            wrist_reference: default_wrist_reference(),
        }
    }
}

/// デモビューア (overlay_viewer) の設定
#[derive(Debug, Deserialize, Clone)]
pub struct ViewerConfig {
    /// ウィンドウ幅（ピクセル）
    #[serde(default = "default_viewer_width")]
    pub width: usize,
    /// ウィンドウ高さ（ピクセル）
    #[serde(default = "default_viewer_height")]
    pub height: usize,
    /// 表示モード ("fit" / "fill")
    #[serde(default = "default_display_mode")]
    pub display_mode: DisplayMode,
    /// 描画モード ("angle_annotated" / "indexed")
    #[serde(default = "default_render_mode")]
    pub render_mode: RenderMode,
}

fn default_viewer_width() -> usize { 640 }
fn default_viewer_height() -> usize { 480 }
fn default_display_mode() -> DisplayMode { DisplayMode::Fill }
fn default_render_mode() -> RenderMode { RenderMode::AngleAnnotated }

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: default_viewer_width(),
            height: default_viewer_height(),
            display_mode: default_display_mode(),
            render_mode: default_render_mode(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// ファイルがなければデフォルト設定を返す
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(_) => Config::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_calibration() {
        let calib = CalibrationConfig::default();
        assert_eq!(calib.front_view_offset, -120.0);
        assert_eq!(calib.side_view_offset, 80.0);
        assert_eq!(calib.side_view_gate, 20.0);
        assert_eq!(calib.correction_strength, 40.0);
        assert_eq!(calib.wrist_reference, 140.0);
    }

    #[test]
    fn test_parse_empty_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.calibration.front_view_offset, -120.0);
        assert_eq!(config.viewer.width, 640);
        assert_eq!(config.viewer.display_mode, DisplayMode::Fill);
    }

    #[test]
    fn test_parse_partial_toml() {
        let toml_str = r#"
            [calibration]
            side_view_gate = 25.0

            [viewer]
            width = 1280
            height = 720
            display_mode = "fit"
            render_mode = "indexed"
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.calibration.side_view_gate, 25.0);
        // 未指定フィールドはデフォルト
        assert_eq!(config.calibration.wrist_reference, 140.0);
        assert_eq!(config.viewer.width, 1280);
        assert_eq!(config.viewer.display_mode, DisplayMode::Fit);
        assert_eq!(config.viewer.render_mode, RenderMode::Indexed);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = Config::load_or_default("does_not_exist.toml");
        assert_eq!(config.calibration.front_view_offset, -120.0);
    }
}
