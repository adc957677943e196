//! Circular progress indicator drawn on a braille canvas.
//!
//! A full track circle sits underneath; the progress arc is laid over it,
//! starting at 12 o'clock and running clockwise.

use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Circle, Points};
use std::f64::consts::TAU;

const RADIUS: f64 = 0.92;
/// Second pass just inside the first so the arc reads thicker than the track.
const STROKE_WIDTH: f64 = 0.04;
/// Points per full turn. Dense enough to leave no gaps at braille resolution.
const ARC_RESOLUTION: usize = 720;

pub fn render(frame: &mut Frame, area: Rect, fraction: f64, color: Color) {
    let mut arc = arc_points(fraction, RADIUS);
    arc.extend(arc_points(fraction, RADIUS - STROKE_WIDTH));

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-1.0, 1.0])
        .y_bounds([-1.0, 1.0])
        .paint(move |ctx| {
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: RADIUS,
                color: Theme::track(),
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &arc,
                color,
            });
        });
    frame.render_widget(canvas, area);
}

/// Points along the first `fraction` of a circle of `radius`, clockwise from
/// the top.
fn arc_points(fraction: f64, radius: f64) -> Vec<(f64, f64)> {
    let fraction = fraction.clamp(0.0, 1.0);
    let steps = (fraction * ARC_RESOLUTION as f64).round() as usize;
    if steps == 0 {
        return Vec::new();
    }
    (0..=steps)
        .map(|i| {
            let angle = TAU * i as f64 / ARC_RESOLUTION as f64;
            (radius * angle.sin(), radius * angle.cos())
        })
        .collect()
}
