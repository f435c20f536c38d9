use serde::Deserialize;

use crate::config::CalibrationConfig;
use crate::pose::{JointAngles, LandmarkIndex, PersonLandmarks, PoseResult};
use crate::render::canvas::{Canvas, PaintStyle, TextAlign};
use crate::render::skeleton::{ANNOTATED_BONES, POSE_CONNECTIONS};
use crate::render::style::OverlayStyle;
use crate::state::OverlaySnapshot;
use crate::viewport::ViewportState;

/// 描画バリアント
///
/// AngleAnnotated: 16本の骨格線 + 全関節の円 + 角度注釈つき関節のラベル。
/// Indexed: 標準接続グラフ + 全関節の点とインデックスラベル。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    AngleAnnotated,
    Indexed,
}

/// ステートレスなオーバーレイレンダラ
///
/// (PoseResult, ViewportState) から描画プリミティブ列への純粋な写像。
/// 毎回全再計算で差分描画はしない。
#[derive(Debug, Clone)]
pub struct OverlayRenderer {
    mode: RenderMode,
    style: OverlayStyle,
    calibration: CalibrationConfig,
}

impl OverlayRenderer {
    pub fn new(mode: RenderMode, style: OverlayStyle, calibration: CalibrationConfig) -> Self {
        Self {
            mode,
            style,
            calibration,
        }
    }

    pub fn with_mode(mode: RenderMode) -> Self {
        Self::new(mode, OverlayStyle::default(), CalibrationConfig::default())
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: RenderMode) {
        self.mode = mode;
    }

    /// 最新スナップショットを描画。スナップショットがなければ何もしない
    pub fn render_snapshot(&self, snapshot: Option<&OverlaySnapshot>, canvas: &mut dyn Canvas) {
        if let Some(snapshot) = snapshot {
            self.render(&snapshot.result, &snapshot.viewport, canvas);
        }
    }

    /// 検出結果を描画。検出人数0なら何も出力しない
    pub fn render(&self, result: &PoseResult, viewport: &ViewportState, canvas: &mut dyn Canvas) {
        for person in &result.persons {
            match self.mode {
                RenderMode::AngleAnnotated => self.render_annotated(person, viewport, canvas),
                RenderMode::Indexed => self.render_indexed(person, viewport, canvas),
            }
        }
    }

    fn render_annotated(
        &self,
        person: &PersonLandmarks,
        viewport: &ViewportState,
        canvas: &mut dyn Canvas,
    ) {
        let style = &self.style;
        let angles = JointAngles::compute(person, &self.calibration);

        // 骨格線
        for (start, end) in ANNOTATED_BONES.iter() {
            let (x1, y1) = viewport.to_pixel(person.get(*start));
            let (x2, y2) = viewport.to_pixel(person.get(*end));
            canvas.line(x1, y1, x2, y2, style.bone_width, style.bone_color);
        }

        // 関節円。角度注釈のある関節は大きい円にして値を重ねる
        for (i, landmark) in person.iter() {
            let (x, y) = viewport.to_pixel(landmark);
            let label = LandmarkIndex::from_index(i).and_then(|index| angles.label_for(index));

            let radius = if label.is_some() {
                style.annotated_joint_radius
            } else {
                style.joint_radius
            };

            canvas.circle(x, y, radius, style.joint_fill_color, PaintStyle::Fill);
            canvas.circle(
                x,
                y,
                radius,
                style.joint_border_color,
                PaintStyle::Stroke {
                    width: style.joint_border_width,
                },
            );

            if let Some(angle) = label {
                canvas.text(
                    &format!("{:.1}°", angle),
                    x,
                    y + style.label_shift_y,
                    style.label_color,
                    style.label_size,
                    TextAlign::Center,
                );
            }
        }
    }

    fn render_indexed(
        &self,
        person: &PersonLandmarks,
        viewport: &ViewportState,
        canvas: &mut dyn Canvas,
    ) {
        let style = &self.style;

        // 標準接続グラフをそのまま描く
        for (start, end) in POSE_CONNECTIONS.iter() {
            let (x1, y1) = viewport.to_pixel(person.get(*start));
            let (x2, y2) = viewport.to_pixel(person.get(*end));
            canvas.line(x1, y1, x2, y2, style.bone_width, style.bone_color);
        }

        for (i, landmark) in person.iter() {
            let (x, y) = viewport.to_pixel(landmark);
            canvas.point(x, y, style.point_color);
            canvas.text(
                &i.to_string(),
                x,
                y,
                style.index_label_color,
                style.index_label_size,
                TextAlign::Left,
            );
        }
    }
}
