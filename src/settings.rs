//! Game settings
//!
//! Read from the page URL query (`?renderer=webgpu&autopilot=1`), never
//! stored anywhere.

use serde::{Deserialize, Serialize};

/// Which drawing backend paints the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RenderBackend {
    /// `CanvasRenderingContext2d`
    #[default]
    Canvas2d,
    /// wgpu pipeline, labels on an overlay canvas
    WebGpu,
}

impl RenderBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderBackend::Canvas2d => "Canvas2d",
            RenderBackend::WebGpu => "WebGpu",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "canvas" | "canvas2d" | "2d" => Some(RenderBackend::Canvas2d),
            "webgpu" | "gpu" | "wgpu" => Some(RenderBackend::WebGpu),
            _ => None,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub renderer: RenderBackend,
    /// Start with the demo autopilot steering the paddle
    pub autopilot: bool,
    /// Web Audio sound effects
    pub sound: bool,
    /// Weekday and month labels around the grid
    pub show_labels: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            renderer: RenderBackend::Canvas2d,
            autopilot: false,
            sound: true,
            show_labels: true,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "on" | "yes" | "" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

impl Settings {
    /// Apply one `key=value` pair; unknown keys and bad values are ignored
    pub fn apply(&mut self, key: &str, value: &str) {
        let applied = match key {
            "renderer" => RenderBackend::from_str(value).map(|r| self.renderer = r),
            "autopilot" => parse_flag(value).map(|v| self.autopilot = v),
            "sound" => parse_flag(value).map(|v| self.sound = v),
            "labels" => parse_flag(value).map(|v| self.show_labels = v),
            _ => return,
        };
        if applied.is_none() {
            log::warn!("Ignoring setting {key}={value}");
        }
    }

    /// Parse a URL query string, with or without the leading `?`
    pub fn from_query(query: &str) -> Self {
        let mut settings = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            settings.apply(key, value);
        }
        settings
    }

    /// Load settings from the page URL (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let query = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();

        let settings = Self::from_query(&query);
        log::info!("Settings: {}", serde_json::to_string(&settings).unwrap_or_default());
        settings
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
