//! Photo texture loading

use super::App;
use crate::utils::resolve_photo;
use eframe::egui;
use tracing::{debug, warn};

impl App {
    /// Texture for a photo ref, decoded once and cached. `None` if the file
    /// is missing or unreadable.
    pub fn load_photo(&mut self, ctx: &egui::Context, photo: &'static str) -> Option<egui::TextureHandle> {
        if let Some(cached) = self.photo_cache.get(photo) {
            return cached.clone();
        }

        let path = resolve_photo(&self.photos_dir, photo);
        let texture = match image::open(&path) {
            Ok(img) => {
                let rgba = img.to_rgba8();
                let size = [rgba.width() as usize, rgba.height() as usize];
                let pixels = rgba.into_raw();
                debug!(path = %path.display(), width = size[0], height = size[1], "Photo loaded");
                Some(ctx.load_texture(
                    photo,
                    egui::ColorImage::from_rgba_unmultiplied(size, &pixels),
                    egui::TextureOptions::LINEAR,
                ))
            }
            Err(e) => {
                warn!(error = %e, path = %path.display(), "Failed to load photo");
                None
            }
        };
        self.photo_cache.insert(photo, texture.clone());
        texture
    }
}
