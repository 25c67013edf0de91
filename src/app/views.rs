//! View rendering (title, indicator, quote card, greeting)

use super::App;
use crate::constants::QUOTE_AUTHOR;
use crate::theme;
use crate::ui::components::{flow_particles, glow_ring, gradient_bar};
use crate::vibe::ViewState;
use eframe::egui::{self, Color32, RichText};

impl App {
    pub fn render_main(&mut self, ctx: &egui::Context) {
        let state = self.vibe.state().clone();
        let photo = self.load_photo(ctx, state.photo);

        let flow = ctx.animate_bool_with_time(egui::Id::new("flow_mode"), state.is_flow_mode(), 0.8);
        let pulse = ctx.animate_bool_with_time(egui::Id::new("pulse"), state.is_animating, 0.15);
        let quote_opacity = ctx.animate_bool_with_time(
            egui::Id::new("quote_visible"),
            state.is_quote_visible,
            theme::QUOTE_FADE_SECS,
        );

        let mut clicked = false;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme::background(flow)))
            .show(ctx, |ui| {
                let time = ui.input(|i| i.time);
                flow_particles(ui.painter(), ui.max_rect(), time, flow);

                ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
                    ui.add_space(theme::SPACING_XL);
                    render_title(ui, &state, flow);
                    ui.add_space(theme::SPACING_XL);

                    clicked = render_indicator(ui, &state, pulse);
                    ui.add_space(theme::SPACING_XL);

                    render_quote(ui, &state, photo.as_ref(), quote_opacity);

                    if let Some(greeting) = state.greeting() {
                        ui.add_space(theme::SPACING_LG);
                        ui.label(
                            RichText::new(greeting)
                                .size(theme::FONT_BODY)
                                .color(theme::TEXT_MUTED),
                        );
                    }
                });
            });

        if clicked {
            self.activate();
        }

        // Particles drift continuously while flow mode is (fading) on
        if flow > 0.0 {
            ctx.request_repaint();
        }
    }
}

fn render_title(ui: &mut egui::Ui, state: &ViewState, flow: f32) {
    let font = egui::FontId::proportional(theme::FONT_TITLE);
    let galley = ui.painter().layout_no_wrap("VIBECODING".to_string(), font.clone(), theme::TEXT_PRIMARY);
    let (rect, _) = ui.allocate_exact_size(galley.size(), egui::Sense::hover());
    let painter = ui.painter();

    if flow > 0.0 {
        let glow = state.current_vibe().color.gamma_multiply(0.25 * flow);
        for (dx, dy) in [(-2.0, 0.0), (2.0, 0.0), (0.0, -2.0), (0.0, 2.0), (0.0, 0.0)] {
            painter.text(
                rect.center() + egui::vec2(dx, dy),
                egui::Align2::CENTER_CENTER,
                "VIBECODING",
                font.clone(),
                glow,
            );
        }
    }
    painter.galley(rect.min, galley, theme::TEXT_PRIMARY);
}

/// Returns true when the indicator was clicked this frame
fn render_indicator(ui: &mut egui::Ui, state: &ViewState, pulse: f32) -> bool {
    let vibe = state.current_vibe();
    let extent = 2.0 * (theme::INDICATOR_RADIUS * theme::INDICATOR_PULSE_SCALE + theme::GLOW_SPREAD);
    let (rect, response) = ui.allocate_exact_size(egui::vec2(extent, extent), egui::Sense::click());
    let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        let center = rect.center();
        let radius = theme::INDICATOR_RADIUS * (1.0 + (theme::INDICATOR_PULSE_SCALE - 1.0) * pulse);

        glow_ring(painter, center, radius, vibe.color, vibe.glow);

        painter.text(
            center - egui::vec2(0.0, 14.0),
            egui::Align2::CENTER_CENTER,
            vibe.label,
            egui::FontId::proportional(theme::FONT_VIBE_LABEL),
            vibe.color,
        );

        let bar = egui::Rect::from_center_size(
            center + egui::vec2(0.0, 14.0),
            egui::vec2(theme::PROGRESS_WIDTH, theme::PROGRESS_HEIGHT),
        );
        gradient_bar(
            painter,
            bar,
            theme::ACCENT,
            vibe.color,
            state.progress_percent() as f32 / 100.0,
        );

        painter.text(
            center + egui::vec2(0.0, 38.0),
            egui::Align2::CENTER_CENTER,
            format!("{} click to vibe", egui_phosphor::regular::CURSOR_CLICK),
            egui::FontId::proportional(theme::FONT_SMALL),
            theme::TEXT_DIM,
        );
    }

    response.clicked()
}

fn render_quote(
    ui: &mut egui::Ui,
    state: &ViewState,
    photo: Option<&egui::TextureHandle>,
    opacity: f32,
) {
    // Hidden cards keep their last measured height so the greeting doesn't jump
    let height_id = egui::Id::new("quote_card_height");
    if opacity <= 0.0 {
        let reserved = ui
            .ctx()
            .data(|d| d.get_temp::<f32>(height_id))
            .unwrap_or(theme::AVATAR_SIZE + 2.0 * theme::SPACING_LG + ui.spacing().item_spacing.y);
        ui.add_space(theme::QUOTE_SLIDE + reserved);
        return;
    }

    let fade = |c: Color32| c.gamma_multiply(opacity);
    let slide = theme::QUOTE_SLIDE * (1.0 - opacity);
    ui.add_space(slide);

    let card = theme::quote_frame(opacity).show(ui, |ui| {
        ui.set_width(theme::QUOTE_CARD_WIDTH);
        ui.horizontal(|ui| {
            let avatar = egui::vec2(theme::AVATAR_SIZE, theme::AVATAR_SIZE);
            match photo {
                Some(tex) => {
                    ui.add(
                        egui::Image::new(egui::load::SizedTexture::new(tex.id(), avatar))
                            .tint(fade(Color32::WHITE)),
                    );
                }
                None => {
                    let (rect, _) = ui.allocate_exact_size(avatar, egui::Sense::hover());
                    ui.painter()
                        .circle_filled(rect.center(), theme::AVATAR_SIZE / 2.0, fade(theme::BG_TRACK));
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        egui_phosphor::regular::USER,
                        egui::FontId::proportional(theme::AVATAR_SIZE * 0.5),
                        fade(theme::TEXT_DIM),
                    );
                }
            }
            ui.add_space(theme::SPACING_MD);
            ui.vertical(|ui| {
                ui.add(
                    egui::Label::new(
                        RichText::new(format!("\"{}\"", state.quote))
                            .size(theme::FONT_QUOTE)
                            .italics()
                            .color(fade(theme::TEXT_SECONDARY)),
                    )
                    .wrap(),
                );
                ui.add_space(theme::SPACING_SM);
                ui.label(
                    RichText::new(QUOTE_AUTHOR)
                        .size(theme::FONT_SMALL)
                        .color(fade(theme::ACCENT)),
                );
            });
        });
    });

    let used = card.response.rect.height() + ui.spacing().item_spacing.y;
    ui.ctx().data_mut(|d| d.insert_temp(height_id, used));
    ui.add_space(theme::QUOTE_SLIDE - slide);
}
