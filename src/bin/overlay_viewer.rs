use anyhow::Result;
use std::time::Instant;

use shisei_overlay::config::Config;
use shisei_overlay::pose::{Landmark, LandmarkIndex, PersonLandmarks, PoseResult};
use shisei_overlay::render::{Key, MinifbRenderer, OverlayRenderer, RenderMode};
use shisei_overlay::state::OverlayState;
use shisei_overlay::viewport::DisplayMode;

const CONFIG_PATH: &str = "config.toml";

/// 合成フレームの仮想寸法
const IMAGE_WIDTH: u32 = 640;
const IMAGE_HEIGHT: u32 = 480;

fn main() -> Result<()> {
    println!("Overlay Viewer ({})", env!("GIT_VERSION"));
    println!("Space: 描画モード切替  Tab: fit/fill切替  ESC: 終了");

    let config = Config::load_or_default(CONFIG_PATH);
    let mut display_mode = config.viewer.display_mode;
    let mut renderer = OverlayRenderer::new(
        config.viewer.render_mode,
        Default::default(),
        config.calibration.clone(),
    );

    let mut window = MinifbRenderer::new(
        "Overlay Viewer",
        config.viewer.width,
        config.viewer.height,
    )?;

    let state = OverlayState::new();
    state.set_viewport(config.viewer.width as u32, config.viewer.height as u32);

    let start = Instant::now();
    let mut frame_count = 0u32;
    let mut fps_timer = Instant::now();

    while window.is_open() {
        if window.key_pressed(Key::Space) {
            let next = match renderer.mode() {
                RenderMode::AngleAnnotated => RenderMode::Indexed,
                RenderMode::Indexed => RenderMode::AngleAnnotated,
            };
            renderer.set_mode(next);
            println!("描画モード: {:?}", next);
        }
        if window.key_pressed(Key::Tab) {
            display_mode = match display_mode {
                DisplayMode::Fit => DisplayMode::Fill,
                DisplayMode::Fill => DisplayMode::Fit,
            };
            println!("表示モード: {:?}", display_mode);
        }

        // 合成スケルトンを推論結果の代わりに流し込む
        let t = start.elapsed().as_secs_f32();
        let result = PoseResult::single(synthetic_person(t));
        state.set_results(result, IMAGE_WIDTH, IMAGE_HEIGHT, display_mode);

        window.canvas.fill(0x202020);
        renderer.render_snapshot(state.snapshot().as_deref(), &mut window.canvas);
        window.update()?;

        frame_count += 1;
        let elapsed = fps_timer.elapsed().as_secs_f32();
        if elapsed >= 1.0 {
            println!("FPS: {:.1}", frame_count as f32 / elapsed);
            frame_count = 0;
            fps_timer = Instant::now();
        }
    }

    println!("Shutting down...");
    Ok(())
}

/// 腕を振る直立スケルトンを生成
fn synthetic_person(t: f32) -> PersonLandmarks {
    let swing = 0.08 * t.sin();
    let mut landmarks = [Landmark::default(); LandmarkIndex::COUNT];
    let mut set = |i: LandmarkIndex, x: f32, y: f32, z: f32| {
        landmarks[i as usize] = Landmark::new(x, y, z);
    };

    use LandmarkIndex::*;

    // 頭部
    set(Nose, 0.50, 0.10, -0.05);
    set(LeftEyeInner, 0.48, 0.08, -0.04);
    set(LeftEye, 0.47, 0.08, -0.04);
    set(LeftEyeOuter, 0.46, 0.08, -0.04);
    set(RightEyeInner, 0.52, 0.08, -0.04);
    set(RightEye, 0.53, 0.08, -0.04);
    set(RightEyeOuter, 0.54, 0.08, -0.04);
    set(LeftEar, 0.45, 0.09, 0.0);
    set(RightEar, 0.55, 0.09, 0.0);
    set(MouthLeft, 0.48, 0.13, -0.04);
    set(MouthRight, 0.52, 0.13, -0.04);

    // 腕（肘から先を前後に振る）
    set(LeftShoulder, 0.42, 0.28, 0.0);
    set(RightShoulder, 0.58, 0.28, 0.0);
    set(LeftElbow, 0.38, 0.42, 0.0);
    set(RightElbow, 0.62, 0.42, 0.0);
    set(LeftWrist, 0.36 + swing, 0.55, 0.0);
    set(RightWrist, 0.64 - swing, 0.55, 0.0);
    set(LeftPinky, 0.35 + swing, 0.58, 0.0);
    set(RightPinky, 0.65 - swing, 0.58, 0.0);
    set(LeftIndex, 0.34 + swing, 0.58, 0.0);
    set(RightIndex, 0.66 - swing, 0.58, 0.0);
    set(LeftThumb, 0.36 + swing, 0.57, 0.0);
    set(RightThumb, 0.64 - swing, 0.57, 0.0);

    // 脚
    set(LeftHip, 0.45, 0.55, 0.0);
    set(RightHip, 0.55, 0.55, 0.0);
    set(LeftKnee, 0.45, 0.73, 0.0);
    set(RightKnee, 0.55, 0.73, 0.0);
    set(LeftAnkle, 0.45, 0.90, 0.0);
    set(RightAnkle, 0.55, 0.90, 0.0);
    set(LeftHeel, 0.44, 0.93, 0.0);
    set(RightHeel, 0.56, 0.93, 0.0);
    set(LeftFootIndex, 0.42, 0.95, -0.03);
    set(RightFootIndex, 0.58, 0.95, -0.03);

    PersonLandmarks::new(landmarks)
}
