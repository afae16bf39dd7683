//! Platform abstraction layer
//!
//! Handles browser-facing concerns that still have pure, testable cores:
//! - Keyboard events queued into intent flags
//! - Autopilot steering for demo runs

pub mod autopilot;
pub mod input;

pub use input::{Direction, InputEvent, InputQueue};
