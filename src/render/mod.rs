pub mod canvas;
pub mod overlay;
pub mod skeleton;
pub mod style;
pub mod window;

pub use canvas::{Canvas, DrawList, DrawOp, PaintStyle, TextAlign};
pub use minifb::Key;
pub use overlay::{OverlayRenderer, RenderMode};
pub use skeleton::{ANNOTATED_BONES, POSE_CONNECTIONS};
pub use style::OverlayStyle;
pub use window::{FramebufferCanvas, MinifbRenderer};
