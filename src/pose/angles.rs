use nalgebra::Vector3;

use crate::config::CalibrationConfig;
use crate::pose::landmark::{Landmark, LandmarkIndex, PersonLandmarks};

fn to_vector(from: &Landmark, to: &Landmark) -> Vector3<f32> {
    Vector3::new(to.x - from.x, to.y - from.y, to.z - from.z)
}

/// 頂点Bにおける B→A と B→C のなす角（度）
///
/// cosθ は浮動小数点の行き過ぎ対策で [-1, 1] にクランプする。
/// AB または BC が零長の場合は NaN（呼び出し側でそのまま伝播させる）。
/// 負の値のみ0に潰す。NaNはそのまま通す（max(0.0)はNaNを0にしてしまう）
fn clamp_non_negative(value: f32) -> f32 {
    if value < 0.0 {
        0.0
    } else {
        value
    }
}

pub fn joint_angle(a: &Landmark, b: &Landmark, c: &Landmark) -> f32 {
    let ba = to_vector(b, a);
    let bc = to_vector(b, c);
    let cos = ba.dot(&bc) / (ba.norm() * bc.norm());
    cos.clamp(-1.0, 1.0).acos().to_degrees()
}

/// 鼻・目・肩から推定した頭部向き（補正オフセット適用済み、度）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadOrientation {
    pub front_view: f32,
    pub side_view: f32,
}

impl HeadOrientation {
    pub fn estimate(person: &PersonLandmarks, calib: &CalibrationConfig) -> Self {
        let nose = person.get(LandmarkIndex::Nose);
        let left_eye = person.get(LandmarkIndex::LeftEyeInner);
        let right_eye = person.get(LandmarkIndex::RightEyeInner);
        let left_shoulder = person.get(LandmarkIndex::LeftShoulder);
        let right_shoulder = person.get(LandmarkIndex::RightShoulder);

        let average_eye_y = (left_eye.y + right_eye.y) / 2.0;
        let average_eye_z = (left_eye.z + right_eye.z) / 2.0;
        let front_view = (nose.y - average_eye_y)
            .atan2(nose.z - average_eye_z)
            .to_degrees()
            + calib.front_view_offset;

        let average_shoulder_y = (left_shoulder.y + right_shoulder.y) / 2.0;
        let average_shoulder_x = (left_shoulder.x + right_shoulder.x) / 2.0;
        let side_view = (nose.y - average_shoulder_y)
            .atan2(nose.x - average_shoulder_x)
            .to_degrees()
            + calib.side_view_offset;

        Self {
            front_view,
            side_view,
        }
    }
}

/// 1人分のランドマークから導出した関節角度一式（度）
///
/// 各複合値 (combined_*) には経験的な変換が入る:
/// - 手首: |min(左, 右) - 基準角|
/// - 肘: max(0, min(左, 右))
/// - 股関節・膝: 左右平均。側面視角度がしきい値未満なら補正項を
///   引いた上で0以上にクランプ
/// - 足首・つま先: 左右平均のみ
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointAngles {
    pub head: HeadOrientation,
    pub shoulder_uprightness: f32,
    pub left_elbow: f32,
    pub right_elbow: f32,
    pub left_wrist: f32,
    pub right_wrist: f32,
    pub combined_wrist: f32,
    pub combined_elbow: f32,
    pub left_hip: f32,
    pub right_hip: f32,
    pub combined_hip: f32,
    pub left_knee: f32,
    pub right_knee: f32,
    pub combined_knee: f32,
    pub left_ankle: f32,
    pub right_ankle: f32,
    pub combined_ankle: f32,
    pub left_foot: f32,
    pub right_foot: f32,
    pub combined_foot: f32,
}

impl JointAngles {
    pub fn compute(person: &PersonLandmarks, calib: &CalibrationConfig) -> Self {
        use LandmarkIndex::*;

        let p = |i: LandmarkIndex| person.get(i);

        let head = HeadOrientation::estimate(person, calib);

        let shoulder_uprightness = joint_angle(p(LeftHip), p(LeftShoulder), p(RightShoulder));

        let left_elbow = joint_angle(p(LeftWrist), p(LeftElbow), p(LeftShoulder));
        let right_elbow = joint_angle(p(RightWrist), p(RightElbow), p(RightShoulder));
        let left_wrist = joint_angle(p(LeftElbow), p(LeftWrist), p(LeftShoulder));
        let right_wrist = joint_angle(p(RightElbow), p(RightWrist), p(RightShoulder));

        let combined_wrist = (left_wrist.min(right_wrist) - calib.wrist_reference).abs();
        let combined_elbow = clamp_non_negative(left_elbow.min(right_elbow));

        // 正面寄りの視点では股関節・膝の見かけ角度が浅くなるため、
        // 側面視角度がしきい値未満のときだけ補正項を引く
        let gate = calib.side_view_gate;
        let correction = calib.correction_strength * (gate - head.side_view.abs()) / gate;
        let apply_correction = head.side_view.abs() < gate;

        let left_hip = joint_angle(p(LeftShoulder), p(LeftHip), p(LeftKnee));
        let right_hip = joint_angle(p(RightShoulder), p(RightHip), p(RightKnee));
        let mut combined_hip = (left_hip + right_hip) / 2.0;
        if apply_correction {
            combined_hip -= correction;
        }
        let combined_hip = clamp_non_negative(combined_hip);

        let left_knee = joint_angle(p(LeftHip), p(LeftKnee), p(LeftHeel));
        let right_knee = joint_angle(p(RightHip), p(RightKnee), p(RightHeel));
        let mut combined_knee = (left_knee + right_knee) / 2.0;
        if apply_correction {
            combined_knee -= correction;
        }
        let combined_knee = clamp_non_negative(combined_knee);

        let left_ankle = joint_angle(p(LeftKnee), p(LeftAnkle), p(LeftHeel));
        let right_ankle = joint_angle(p(RightKnee), p(RightAnkle), p(RightHeel));
        let combined_ankle = (left_ankle + right_ankle) / 2.0;

        let left_foot = joint_angle(p(LeftKnee), p(LeftHeel), p(LeftFootIndex));
        let right_foot = joint_angle(p(RightKnee), p(RightHeel), p(RightFootIndex));
        let combined_foot = (left_foot + right_foot) / 2.0;

        Self {
            head,
            shoulder_uprightness,
            left_elbow,
            right_elbow,
            left_wrist,
            right_wrist,
            combined_wrist,
            combined_elbow,
            left_hip,
            right_hip,
            combined_hip,
            left_knee,
            right_knee,
            combined_knee,
            left_ankle,
            right_ankle,
            combined_ankle,
            left_foot,
            right_foot,
            combined_foot,
        }
    }

    /// 注釈対象の関節に表示する角度。対象外の関節は None（33個中14個が対象）
    pub fn label_for(&self, index: LandmarkIndex) -> Option<f32> {
        use LandmarkIndex::*;

        match index {
            LeftShoulder | RightShoulder => Some(self.shoulder_uprightness),
            LeftElbow => Some(self.left_elbow),
            RightElbow => Some(self.right_elbow),
            LeftWrist => Some(self.left_wrist),
            RightWrist => Some(self.right_wrist),
            LeftHip | RightHip => Some(self.combined_hip),
            LeftKnee | RightKnee => Some(self.combined_knee),
            LeftAnkle | RightAnkle => Some(self.combined_ankle),
            LeftFootIndex | RightFootIndex => Some(self.combined_foot),
            _ => None,
        }
    }
}
