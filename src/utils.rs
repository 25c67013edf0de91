//! Utility functions

use crate::constants::APP_NAME;
use egui::Color32;
use std::path::{Path, PathBuf};

/// Get the app data directory path (settings, logs, default photos)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Resolve a photo reference against the photos directory.
/// Leading slashes are ignored so web-style refs ("/x.jpeg") still resolve.
pub fn resolve_photo(photos_dir: &Path, photo: &str) -> PathBuf {
    photos_dir.join(photo.trim_start_matches('/'))
}

/// Linear blend between two colors, `t` clamped to 0..=1
pub fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgba_premultiplied(
        mix(a.r(), b.r()),
        mix(a.g(), b.g()),
        mix(a.b(), b.b()),
        mix(a.a(), b.a()),
    )
}
