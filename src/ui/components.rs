//! Reusable painted components
//!
//! Stateless painters used by the main view: the glowing indicator ring,
//! the gradient progress bar and the flow-mode particle field.

use crate::theme;
use eframe::egui::{self, Color32, Pos2, Rect};

const PARTICLE_COUNT: usize = 36;
const GLOW_STEPS: usize = 12;

/// Ring with an outer and inner glow, like a CSS box-shadow + inset pair
pub fn glow_ring(
    painter: &egui::Painter,
    center: Pos2,
    radius: f32,
    color: Color32,
    glow: Color32,
) {
    if glow.a() > 0 {
        let step = theme::GLOW_SPREAD / GLOW_STEPS as f32;
        for i in 0..GLOW_STEPS {
            // Quadratic falloff away from the border
            let fade = 1.0 - i as f32 / GLOW_STEPS as f32;
            let c = glow.gamma_multiply(fade * fade * 0.35);
            let offset = step * (i as f32 + 0.5);
            painter.circle_stroke(center, radius + offset, egui::Stroke::new(step, c));
            let inner = radius - offset;
            if inner > 0.0 {
                painter.circle_stroke(center, inner, egui::Stroke::new(step, c));
            }
        }
    }
    painter.circle_stroke(
        center,
        radius,
        egui::Stroke::new(theme::INDICATOR_BORDER, color),
    );
}

/// Track plus a left-to-right gradient fill covering `fraction` of it
pub fn gradient_bar(painter: &egui::Painter, rect: Rect, from: Color32, to: Color32, fraction: f32) {
    painter.rect_filled(rect, theme::RADIUS_SMALL, theme::BG_TRACK);

    let fraction = fraction.clamp(0.0, 1.0);
    if fraction <= 0.0 {
        return;
    }
    let fill = Rect::from_min_max(
        rect.min,
        egui::pos2(rect.min.x + rect.width() * fraction, rect.max.y),
    );

    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(fill.left_top(), from);
    mesh.colored_vertex(fill.right_top(), to);
    mesh.colored_vertex(fill.right_bottom(), to);
    mesh.colored_vertex(fill.left_bottom(), from);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(egui::Shape::mesh(mesh));
}

/// Slowly rising particle positions, wrapped inside `rect`
pub fn particle_positions(rect: Rect, time: f64) -> Vec<Pos2> {
    (0..PARTICLE_COUNT)
        .map(|i| {
            let seed = i as f64;
            let speed = 0.015 + (seed * 0.37).fract() * 0.03;
            let x = (seed * 0.618_034 + (time * 0.1 + seed).sin() * 0.02).rem_euclid(1.0);
            let y = (1.0 - (seed * 0.414_214 + time * speed).fract()).rem_euclid(1.0);
            egui::pos2(
                rect.min.x + rect.width() * x as f32,
                rect.min.y + rect.height() * y as f32,
            )
        })
        .collect()
}

/// Ambient particle field for flow mode. `amount` fades it in and out.
pub fn flow_particles(painter: &egui::Painter, rect: Rect, time: f64, amount: f32) {
    if amount <= 0.0 {
        return;
    }
    for (i, pos) in particle_positions(rect, time).into_iter().enumerate() {
        let r = 1.0 + (i % 3) as f32;
        painter.circle_filled(pos, r, theme::PARTICLE.gamma_multiply(amount));
    }
}
