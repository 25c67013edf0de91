//! App module - contains the main application state and logic

mod photos;
mod user;
mod views;

use crate::settings::Settings;
use crate::theme;
use crate::users::directory_from_config;
use crate::vibe::VibeController;
use eframe::egui;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::oneshot;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) vibe: VibeController,
    pub(crate) runtime: tokio::runtime::Runtime,
    // One-shot user name lookup
    pub(crate) user_rx: Option<oneshot::Receiver<Option<String>>>,
    pub(crate) user_load_started: bool,
    // Photos
    pub(crate) photos_dir: PathBuf,
    pub(crate) photo_cache: HashMap<&'static str, Option<egui::TextureHandle>>,
    // Settings
    pub(crate) settings: Settings,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        data_dir: PathBuf,
        runtime: tokio::runtime::Runtime,
    ) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Phosphor icons for the hint/quote glyphs
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let photos_dir = settings.photos_dir_or_default(&data_dir);
        std::fs::create_dir_all(&photos_dir).ok();

        let mut app = Self {
            vibe: VibeController::new(settings.supersede_stale_timers),
            runtime,
            user_rx: None,
            user_load_started: false,
            photos_dir,
            photo_cache: HashMap::new(),
            settings,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        };

        let (backend_url, backend_key) = app.settings.backend();
        let directory = directory_from_config(backend_url.as_deref(), backend_key.as_deref());
        app.start_user_load(&cc.egui_ctx, directory);
        app
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            ..self.settings.clone()
        };
        settings.save(&self.data_dir);
    }

    /// Click handler for the indicator
    pub fn activate(&mut self) {
        self.vibe
            .on_vibe_activated(std::time::Instant::now(), &mut rand::rng());
    }
}
