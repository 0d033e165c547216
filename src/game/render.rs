//! Canvas drawing. Everything is laid out on the logical 400x600 surface and
//! scaled to the real canvas size with one transform per frame.

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::state::GameState;
use crate::answer::Verdict;
use crate::config::{GameConfig, LOGICAL_HEIGHT, LOGICAL_WIDTH};

// Face layout (logical units).
const CENTER: (f64, f64) = (200.0, 200.0);
const RIM_RADIUS: f64 = 190.0;
const RIM_WIDTH: f64 = 10.0;
const HUB_RADIUS: f64 = 10.0;
const TICK_RING_RADIUS: f64 = 160.0;
const MAJOR_TICK_RADIUS: f64 = 5.0;
const MINOR_TICK_RADIUS: f64 = 1.0;
const HOUR_HAND_LENGTH: f64 = 100.0;
const MINUTE_HAND_LENGTH: f64 = 150.0;

// Readout and button.
const READOUT_Y: f64 = 460.0;
const BUTTON_RECT: (f64, f64, f64, f64) = (20.0, 500.0, 360.0, 60.0);
const BUTTON_LABEL_Y: f64 = 540.0;

/// Fill colour of the submit button for a verdict.
pub fn button_color(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Incomplete => "grey",
        Verdict::Correct => "green",
        Verdict::Incorrect => "red",
    }
}

/// Point at `radius` from the centre along `angle` (0 = east, clockwise).
pub fn polar(angle: f64, radius: f64) -> (f64, f64) {
    (CENTER.0 + angle.cos() * radius, CENTER.1 + angle.sin() * radius)
}

/// Tick mark centres for `count` evenly spaced marks starting at 3 o'clock.
pub fn tick_positions(count: usize) -> impl Iterator<Item = (f64, f64)> {
    (0..count).map(move |i| polar(TAU / count as f64 * i as f64, TICK_RING_RADIUS))
}

pub fn render(ctx: &CanvasRenderingContext2d, state: &GameState, config: &GameConfig) {
    let (sx, sy) = config.scale();
    ctx.set_transform(sx, 0.0, 0.0, sy, 0.0, 0.0).ok();
    ctx.clear_rect(0.0, 0.0, LOGICAL_WIDTH, LOGICAL_HEIGHT);
    ctx.set_fill_style_str("black");
    ctx.set_stroke_style_str("black");

    draw_face(ctx);
    let hands = state.animation().current();
    ctx.set_line_width(RIM_WIDTH);
    draw_hand(ctx, hands.hour, HOUR_HAND_LENGTH);
    draw_hand(ctx, hands.minute, MINUTE_HAND_LENGTH);
    draw_readout(ctx, &state.input().readout());
    draw_button(ctx, state.verdict());
}

fn draw_face(ctx: &CanvasRenderingContext2d) {
    ctx.begin_path();
    ctx.arc(CENTER.0, CENTER.1, RIM_RADIUS, 0.0, TAU).ok();
    ctx.set_line_width(RIM_WIDTH);
    ctx.stroke();

    dot(ctx, CENTER.0, CENTER.1, HUB_RADIUS);
    for (x, y) in tick_positions(12) {
        dot(ctx, x, y, MAJOR_TICK_RADIUS);
    }
    for (x, y) in tick_positions(60) {
        dot(ctx, x, y, MINOR_TICK_RADIUS);
    }
}

fn draw_hand(ctx: &CanvasRenderingContext2d, angle: f64, length: f64) {
    let (x, y) = polar(angle, length);
    line(ctx, CENTER.0, CENTER.1, x, y);
}

fn draw_readout(ctx: &CanvasRenderingContext2d, text: &str) {
    ctx.set_font("48px sans-serif");
    ctx.set_text_align("center");
    ctx.fill_text(text, LOGICAL_WIDTH / 2.0, READOUT_Y).ok();
}

fn draw_button(ctx: &CanvasRenderingContext2d, verdict: Verdict) {
    let (x, y, w, h) = BUTTON_RECT;
    ctx.set_fill_style_str(button_color(verdict));
    ctx.fill_rect(x, y, w, h);

    ctx.set_fill_style_str("white");
    ctx.set_font("32px sans-serif");
    ctx.fill_text("Enter", LOGICAL_WIDTH / 2.0, BUTTON_LABEL_Y).ok();
    ctx.set_fill_style_str("black");
}

fn dot(ctx: &CanvasRenderingContext2d, x: f64, y: f64, r: f64) {
    ctx.begin_path();
    ctx.arc(x, y, r, 0.0, TAU).ok();
    ctx.fill();
}

fn line(ctx: &CanvasRenderingContext2d, x1: f64, y1: f64, x2: f64, y2: f64) {
    ctx.begin_path();
    ctx.move_to(x1, y1);
    ctx.line_to(x2, y2);
    ctx.stroke();
}
