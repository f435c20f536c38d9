use crate::pose::LandmarkIndex;

/// 角度注釈モードで描く骨格の接続定義 (開始ランドマーク, 終了ランドマーク)
pub const ANNOTATED_BONES: [(LandmarkIndex, LandmarkIndex); 16] = [
    // 腕
    (LandmarkIndex::LeftShoulder, LandmarkIndex::LeftElbow),
    (LandmarkIndex::LeftElbow, LandmarkIndex::LeftWrist),
    (LandmarkIndex::RightShoulder, LandmarkIndex::RightElbow),
    (LandmarkIndex::RightElbow, LandmarkIndex::RightWrist),
    // 胴体
    (LandmarkIndex::LeftShoulder, LandmarkIndex::RightShoulder),
    (LandmarkIndex::LeftHip, LandmarkIndex::RightHip),
    (LandmarkIndex::LeftShoulder, LandmarkIndex::LeftHip),
    (LandmarkIndex::RightShoulder, LandmarkIndex::RightHip),
    // 脚
    (LandmarkIndex::LeftHip, LandmarkIndex::LeftKnee),
    (LandmarkIndex::LeftKnee, LandmarkIndex::LeftAnkle),
    (LandmarkIndex::RightHip, LandmarkIndex::RightKnee),
    (LandmarkIndex::RightKnee, LandmarkIndex::RightAnkle),
    // 足
    (LandmarkIndex::LeftAnkle, LandmarkIndex::LeftFootIndex),
    (LandmarkIndex::RightAnkle, LandmarkIndex::RightFootIndex),
    (LandmarkIndex::LeftHeel, LandmarkIndex::LeftFootIndex),
    (LandmarkIndex::RightHeel, LandmarkIndex::RightFootIndex),
];

/// MediaPipe Pose標準の全接続グラフ（インデックス表示モード用）
pub const POSE_CONNECTIONS: [(LandmarkIndex, LandmarkIndex); 35] = [
    // 顔
    (LandmarkIndex::Nose, LandmarkIndex::LeftEyeInner),
    (LandmarkIndex::LeftEyeInner, LandmarkIndex::LeftEye),
    (LandmarkIndex::LeftEye, LandmarkIndex::LeftEyeOuter),
    (LandmarkIndex::LeftEyeOuter, LandmarkIndex::LeftEar),
    (LandmarkIndex::Nose, LandmarkIndex::RightEyeInner),
    (LandmarkIndex::RightEyeInner, LandmarkIndex::RightEye),
    (LandmarkIndex::RightEye, LandmarkIndex::RightEyeOuter),
    (LandmarkIndex::RightEyeOuter, LandmarkIndex::RightEar),
    (LandmarkIndex::MouthLeft, LandmarkIndex::MouthRight),
    // 上半身
    (LandmarkIndex::LeftShoulder, LandmarkIndex::RightShoulder),
    (LandmarkIndex::LeftShoulder, LandmarkIndex::LeftElbow),
    (LandmarkIndex::LeftElbow, LandmarkIndex::LeftWrist),
    (LandmarkIndex::LeftWrist, LandmarkIndex::LeftPinky),
    (LandmarkIndex::LeftWrist, LandmarkIndex::LeftIndex),
    (LandmarkIndex::LeftWrist, LandmarkIndex::LeftThumb),
    (LandmarkIndex::LeftPinky, LandmarkIndex::LeftIndex),
    (LandmarkIndex::RightShoulder, LandmarkIndex::RightElbow),
    (LandmarkIndex::RightElbow, LandmarkIndex::RightWrist),
    (LandmarkIndex::RightWrist, LandmarkIndex::RightPinky),
    (LandmarkIndex::RightWrist, LandmarkIndex::RightIndex),
    (LandmarkIndex::RightWrist, LandmarkIndex::RightThumb),
    (LandmarkIndex::RightPinky, LandmarkIndex::RightIndex),
    // 胴体
    (LandmarkIndex::LeftShoulder, LandmarkIndex::LeftHip),
    (LandmarkIndex::RightShoulder, LandmarkIndex::RightHip),
    (LandmarkIndex::LeftHip, LandmarkIndex::RightHip),
    // 下半身
    (LandmarkIndex::LeftHip, LandmarkIndex::LeftKnee),
    (LandmarkIndex::RightHip, LandmarkIndex::RightKnee),
    (LandmarkIndex::LeftKnee, LandmarkIndex::LeftAnkle),
    (LandmarkIndex::RightKnee, LandmarkIndex::RightAnkle),
    (LandmarkIndex::LeftAnkle, LandmarkIndex::LeftHeel),
    (LandmarkIndex::RightAnkle, LandmarkIndex::RightHeel),
    (LandmarkIndex::LeftHeel, LandmarkIndex::LeftFootIndex),
    (LandmarkIndex::RightHeel, LandmarkIndex::RightFootIndex),
    (LandmarkIndex::LeftAnkle, LandmarkIndex::LeftFootIndex),
    (LandmarkIndex::RightAnkle, LandmarkIndex::RightFootIndex),
];
