/// MediaPipe Pose の 33 ランドマークインデックス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum LandmarkIndex {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl LandmarkIndex {
    pub const COUNT: usize = 33;

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Nose),
            1 => Some(Self::LeftEyeInner),
            2 => Some(Self::LeftEye),
            3 => Some(Self::LeftEyeOuter),
            4 => Some(Self::RightEyeInner),
            5 => Some(Self::RightEye),
            6 => Some(Self::RightEyeOuter),
            7 => Some(Self::LeftEar),
            8 => Some(Self::RightEar),
            9 => Some(Self::MouthLeft),
            10 => Some(Self::MouthRight),
            11 => Some(Self::LeftShoulder),
            12 => Some(Self::RightShoulder),
            13 => Some(Self::LeftElbow),
            14 => Some(Self::RightElbow),
            15 => Some(Self::LeftWrist),
            16 => Some(Self::RightWrist),
            17 => Some(Self::LeftPinky),
            18 => Some(Self::RightPinky),
            19 => Some(Self::LeftIndex),
            20 => Some(Self::RightIndex),
            21 => Some(Self::LeftThumb),
            22 => Some(Self::RightThumb),
            23 => Some(Self::LeftHip),
            24 => Some(Self::RightHip),
            25 => Some(Self::LeftKnee),
            26 => Some(Self::RightKnee),
            27 => Some(Self::LeftAnkle),
            28 => Some(Self::RightAnkle),
            29 => Some(Self::LeftHeel),
            30 => Some(Self::RightHeel),
            31 => Some(Self::LeftFootIndex),
            32 => Some(Self::RightFootIndex),
            _ => None,
        }
    }
}

/// 単一ランドマーク（正規化座標）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmark {
    /// 正規化されたX座標 (0.0〜1.0)
    pub x: f32,
    /// 正規化されたY座標 (0.0〜1.0)
    pub y: f32,
    /// 相対深度（x,yと同スケール）
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl Default for Landmark {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }
}

/// 1人分の33ランドマーク
///
/// インデックスとセマンティクスの対応は上流モデルの不変条件。
/// 長さ33以外のスライスからは構築できない。
#[derive(Debug, Clone, PartialEq)]
pub struct PersonLandmarks {
    landmarks: [Landmark; LandmarkIndex::COUNT],
}

impl PersonLandmarks {
    pub fn new(landmarks: [Landmark; LandmarkIndex::COUNT]) -> Self {
        Self { landmarks }
    }

    /// スライスから構築。長さが33でなければ None
    pub fn from_slice(landmarks: &[Landmark]) -> Option<Self> {
        let landmarks: [Landmark; LandmarkIndex::COUNT] = landmarks.try_into().ok()?;
        Some(Self { landmarks })
    }

    /// インデックスでランドマークを取得
    pub fn get(&self, index: LandmarkIndex) -> &Landmark {
        &self.landmarks[index as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Landmark)> {
        self.landmarks.iter().enumerate()
    }
}

impl Default for PersonLandmarks {
    fn default() -> Self {
        Self {
            landmarks: [Landmark::default(); LandmarkIndex::COUNT],
        }
    }
}

/// 1フレーム分の検出結果（検出された人ごとに1エントリ）
///
/// 受信後は不変。空なら何も描画しない。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PoseResult {
    pub persons: Vec<PersonLandmarks>,
}

impl PoseResult {
    pub fn new(persons: Vec<PersonLandmarks>) -> Self {
        Self { persons }
    }

    pub fn single(person: PersonLandmarks) -> Self {
        Self {
            persons: vec![person],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landmark_index_count() {
        assert_eq!(LandmarkIndex::COUNT, 33);
    }

    #[test]
    fn test_landmark_index_from_index() {
        assert_eq!(LandmarkIndex::from_index(0), Some(LandmarkIndex::Nose));
        assert_eq!(
            LandmarkIndex::from_index(11),
            Some(LandmarkIndex::LeftShoulder)
        );
        assert_eq!(
            LandmarkIndex::from_index(32),
            Some(LandmarkIndex::RightFootIndex)
        );
        assert_eq!(LandmarkIndex::from_index(33), None);
    }

    #[test]
    fn test_from_index_roundtrip() {
        for i in 0..LandmarkIndex::COUNT {
            let index = LandmarkIndex::from_index(i).unwrap();
            assert_eq!(index as usize, i);
        }
    }

    #[test]
    fn test_person_from_slice_requires_33() {
        assert!(PersonLandmarks::from_slice(&[]).is_none());
        assert!(PersonLandmarks::from_slice(&[Landmark::default(); 17]).is_none());
        assert!(PersonLandmarks::from_slice(&[Landmark::default(); 33]).is_some());
        assert!(PersonLandmarks::from_slice(&[Landmark::default(); 34]).is_none());
    }

    #[test]
    fn test_person_get() {
        let mut landmarks = [Landmark::default(); LandmarkIndex::COUNT];
        landmarks[LandmarkIndex::LeftShoulder as usize] = Landmark::new(0.4, 0.3, -0.1);

        let person = PersonLandmarks::new(landmarks);
        let shoulder = person.get(LandmarkIndex::LeftShoulder);
        assert_eq!(shoulder.x, 0.4);
        assert_eq!(shoulder.y, 0.3);
        assert_eq!(shoulder.z, -0.1);
    }

    #[test]
    fn test_pose_result_empty() {
        let result = PoseResult::default();
        assert!(result.is_empty());

        let result = PoseResult::single(PersonLandmarks::default());
        assert!(!result.is_empty());
        assert_eq!(result.persons.len(), 1);
    }
}
