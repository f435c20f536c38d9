/// オーバーレイの描画スタイル（不変の設定オブジェクト）
///
/// フレーム間で共有されるミュータブルなペイント状態は持たず、
/// 呼び出し側が構築してレンダラへ渡す。色は 0xRRGGBB。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    /// 骨格線の色
    pub bone_color: u32,
    /// 骨格線の太さ（ピクセル）
    pub bone_width: f32,
    /// 関節円の塗り色
    pub joint_fill_color: u32,
    /// 関節円の縁色
    pub joint_border_color: u32,
    /// 縁の太さ
    pub joint_border_width: f32,
    /// 角度注釈のない関節の半径
    pub joint_radius: f32,
    /// 角度注釈のある関節の半径
    pub annotated_joint_radius: f32,
    /// 角度ラベルの色
    pub label_color: u32,
    /// 角度ラベルの文字サイズ
    pub label_size: f32,
    /// 角度ラベルのY方向シフト（円の中心から）
    pub label_shift_y: f32,
    /// インデックス表示モードの点の色
    pub point_color: u32,
    /// インデックスラベルの色
    pub index_label_color: u32,
    /// インデックスラベルの文字サイズ
    pub index_label_size: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            // MediaPipeサンプルのプライマリカラー
            bone_color: 0x007F8B,
            bone_width: 12.0,
            joint_fill_color: 0xFFFFFF,
            joint_border_color: 0x000000,
            joint_border_width: 5.0,
            joint_radius: 20.0,
            annotated_joint_radius: 80.0,
            label_color: 0x000000,
            label_size: 50.0,
            label_shift_y: 15.0,
            point_color: 0xFFFF00,
            index_label_color: 0xFFFFFF,
            index_label_size: 40.0,
        }
    }
}
