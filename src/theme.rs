//! Centralized theme constants for Vibecoding
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x0a, 0x0a, 0x0a); // near-black
pub const BG_FLOW: Color32 = Color32::from_rgb(0x0f, 0x0a, 0x1a); // deep indigo tint in flow mode
pub const BG_CARD: Color32 = Color32::from_rgb(0x14, 0x14, 0x18); // quote card
pub const BG_TRACK: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800, progress track

// =============================================================================
// COLORS - Accent (Indigo)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x63, 0x66, 0xf1); // indigo-500, gradient start
pub const PARTICLE: Color32 = Color32::from_rgba_premultiplied(0x3a, 0x2e, 0x5e, 0x60); // violet haze

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe4, 0xe4, 0xe7); // zinc-200
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xa1, 0xa1, 0xaa); // zinc-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x71, 0x71, 0x7a); // zinc-500

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TITLE: f32 = 48.0;
pub const FONT_VIBE_LABEL: f32 = 22.0;
pub const FONT_QUOTE: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_SMALL: f32 = 11.0;

// =============================================================================
// DIMENSIONS - Indicator
// =============================================================================
pub const INDICATOR_RADIUS: f32 = 110.0;
pub const INDICATOR_BORDER: f32 = 3.0;
pub const INDICATOR_PULSE_SCALE: f32 = 1.06;
pub const GLOW_SPREAD: f32 = 60.0;
pub const PROGRESS_WIDTH: f32 = 120.0;
pub const PROGRESS_HEIGHT: f32 = 4.0;

// =============================================================================
// DIMENSIONS - Quote card
// =============================================================================
pub const QUOTE_CARD_WIDTH: f32 = 520.0;
pub const AVATAR_SIZE: f32 = 64.0;
pub const QUOTE_SLIDE: f32 = 12.0;
pub const QUOTE_FADE_SECS: f32 = 0.5;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_SMALL: f32 = 2.0;
pub const RADIUS_LARGE: f32 = 12.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 16.0;
pub const SPACING_XL: f32 = 32.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: BG_CARD,
        extreme_bg_color: BG_BASE,
        faint_bg_color: BG_CARD,
        hyperlink_color: ACCENT,
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    });
}

/// Panel background, tinted while flow mode is on
pub fn background(flow_amount: f32) -> Color32 {
    crate::utils::lerp_color(BG_BASE, BG_FLOW, flow_amount)
}

// =============================================================================
// HELPER - Quote card frame
// =============================================================================
pub fn quote_frame(opacity: f32) -> egui::Frame {
    egui::Frame::new()
        .fill(BG_CARD.gamma_multiply(opacity))
        .stroke(egui::Stroke::new(
            STROKE_DEFAULT,
            BORDER_SUBTLE.gamma_multiply(opacity),
        ))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}
