//! Rendering module
//!
//! `scene` turns game state into backend-neutral primitives. The browser
//! draws them with either the Canvas 2D backend or the WebGPU pipeline.

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

#[cfg(target_arch = "wasm32")]
pub use canvas2d::CanvasRenderer;
pub use pipeline::GpuRenderer;
pub use scene::{Scene, Shape, build_scene};
