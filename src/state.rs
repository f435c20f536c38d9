use std::sync::{Arc, Mutex};

use crate::pose::PoseResult;
use crate::viewport::{DisplayMode, ViewportState};

/// 1描画パスが読む不変スナップショット
///
/// 検出結果とスケールは常にセットで置き換わり、部分更新は見えない。
#[derive(Debug, Clone, PartialEq)]
pub struct OverlaySnapshot {
    pub result: PoseResult,
    pub viewport: ViewportState,
}

/// 最新の検出結果とビューポートを保持するハンドオフ
///
/// 推論スレッドが set_results で丸ごと差し替え、描画スレッドは
/// snapshot で参照を1回だけ取得する (copy-on-set)。保持中の
/// スナップショットをその場で書き換えることはない。
#[derive(Debug)]
pub struct OverlayState {
    inner: Mutex<Inner>,
}

#[derive(Debug)]
struct Inner {
    viewport_width: u32,
    viewport_height: u32,
    snapshot: Option<Arc<OverlaySnapshot>>,
}

impl OverlayState {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                viewport_width: 0,
                viewport_height: 0,
                snapshot: None,
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// ホストビューのレイアウト/リサイズ時に呼ぶ
    pub fn set_viewport(&self, width: u32, height: u32) {
        let mut inner = self.lock();
        inner.viewport_width = width;
        inner.viewport_height = height;
    }

    /// 新しい検出結果をアトミックに差し替える
    ///
    /// フレーム寸法が不正 (0) な場合はスナップショットを消し、
    /// 以後の描画をスキップさせる（エラーではない）。
    pub fn set_results(
        &self,
        result: PoseResult,
        image_width: u32,
        image_height: u32,
        mode: DisplayMode,
    ) {
        let mut inner = self.lock();
        inner.snapshot = ViewportState::new(
            inner.viewport_width,
            inner.viewport_height,
            image_width,
            image_height,
            mode,
        )
        .map(|viewport| Arc::new(OverlaySnapshot { result, viewport }));
    }

    /// 保持中の結果を破棄する（明示リセット）
    pub fn clear(&self) {
        self.lock().snapshot = None;
    }

    /// 最新スナップショットを取得。未設定なら None
    pub fn snapshot(&self) -> Option<Arc<OverlaySnapshot>> {
        self.lock().snapshot.clone()
    }
}

impl Default for OverlayState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::{Landmark, LandmarkIndex, PersonLandmarks};

    fn person() -> PersonLandmarks {
        PersonLandmarks::new([Landmark::new(0.5, 0.5, 0.0); LandmarkIndex::COUNT])
    }

    #[test]
    fn test_no_snapshot_initially() {
        let state = OverlayState::new();
        assert!(state.snapshot().is_none());
    }

    #[test]
    fn test_set_and_clear() {
        let state = OverlayState::new();
        state.set_viewport(1000, 1000);
        state.set_results(PoseResult::single(person()), 100, 100, DisplayMode::Fit);

        let snapshot = state.snapshot().expect("snapshot after set_results");
        assert_eq!(snapshot.viewport.scale_factor, 10.0);
        assert_eq!(snapshot.result.persons.len(), 1);

        state.clear();
        assert!(state.snapshot().is_none());
    }

    #[test]
    fn test_invalid_image_dimensions_clear_snapshot() {
        let state = OverlayState::new();
        state.set_viewport(1000, 1000);
        state.set_results(PoseResult::single(person()), 100, 100, DisplayMode::Fit);
        assert!(state.snapshot().is_some());

        // 寸法0は描画スキップ扱い
        state.set_results(PoseResult::single(person()), 0, 100, DisplayMode::Fit);
        assert!(state.snapshot().is_none());
    }

    #[test]
    fn test_missing_viewport_yields_no_snapshot() {
        let state = OverlayState::new();
        // set_viewport 前はビューポート寸法が0
        state.set_results(PoseResult::single(person()), 100, 100, DisplayMode::Fill);
        assert!(state.snapshot().is_none());
    }

    #[test]
    fn test_replacement_is_wholesale() {
        let state = OverlayState::new();
        state.set_viewport(1000, 1000);
        state.set_results(PoseResult::single(person()), 100, 100, DisplayMode::Fit);
        let first = state.snapshot().unwrap();

        state.set_results(PoseResult::default(), 500, 500, DisplayMode::Fill);
        let second = state.snapshot().unwrap();

        // 旧スナップショットは差し替え後も不変のまま読める
        assert_eq!(first.viewport.scale_factor, 10.0);
        assert_eq!(first.result.persons.len(), 1);
        assert_eq!(second.viewport.scale_factor, 2.0);
        assert!(second.result.is_empty());
    }

    #[test]
    fn test_concurrent_set_and_read() {
        use std::sync::Arc as StdArc;
        use std::thread;

        let state = StdArc::new(OverlayState::new());
        state.set_viewport(640, 480);

        let writer = {
            let state = StdArc::clone(&state);
            thread::spawn(move || {
                for _ in 0..1000 {
                    state.set_results(PoseResult::single(person()), 640, 480, DisplayMode::Fill);
                }
            })
        };

        // 読み手は常に完全なスナップショットだけを観測する
        for _ in 0..1000 {
            if let Some(snapshot) = state.snapshot() {
                assert_eq!(snapshot.result.persons.len(), 1);
                assert_eq!(snapshot.viewport.image_width, 640);
            }
        }

        writer.join().unwrap();
    }
}
