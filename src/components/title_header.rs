use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, ColorStop, Fill, LinearGradient, Renderer,
    fonts, integrations::ratatui::ArtBox,
};
use ratatui::{Frame, layout::Rect};
use std::f32::consts::TAU;

use super::Component;
use crate::action::Action;
use crate::state::LOADING_ANIM_CYCLE_TICKS;

/// FIGlet title whose gradient follows the last temperature and sweeps while loading
pub struct TitleHeader;

pub struct TitleHeaderProps<'a> {
    pub title: &'a str,
    pub temperature: Option<f64>,
    pub is_animating: bool,
    pub tick_count: u32,
}

/// Tallest font in the stack; the header never needs more rows.
pub const HEADER_MAX_HEIGHT: u16 = 6;

pub(crate) fn gradient_colors(temp: Option<f64>) -> (ArtColor, ArtColor) {
    match temp {
        Some(t) if t < 0.0 => (
            ArtColor::rgb(150, 200, 255), // Ice blue
            ArtColor::rgb(200, 230, 255),
        ),
        Some(t) if t < 15.0 => (
            ArtColor::rgb(100, 180, 255), // Cool blue
            ArtColor::rgb(150, 220, 200),
        ),
        Some(t) if t < 25.0 => (
            ArtColor::rgb(100, 200, 150), // Green
            ArtColor::rgb(255, 220, 100),
        ),
        Some(t) if t < 35.0 => (
            ArtColor::rgb(255, 180, 80), // Orange
            ArtColor::rgb(255, 120, 80),
        ),
        Some(_) => (
            ArtColor::rgb(255, 100, 80), // Hot
            ArtColor::rgb(255, 60, 60),
        ),
        // Sky blue, like the card background before any query
        None => (ArtColor::rgb(96, 165, 250), ArtColor::rgb(37, 99, 235)),
    }
}

const TITLE_ANGLE: f32 = 5.0;
const SWEEP_STOPS: u16 = 8;

/// Cosine band between the two colors; `phase` slides it across the title.
fn title_fill((start, end): (ArtColor, ArtColor), phase: f32) -> Fill {
    let stops = (0..=SWEEP_STOPS)
        .map(|i| {
            let pos = f32::from(i) / f32::from(SWEEP_STOPS);
            let wave = ((pos - phase) * TAU).cos() * 0.5 + 0.5;
            ColorStop::new(pos, start.interpolate(end, wave))
        })
        .collect();
    Fill::Linear(LinearGradient::new(TITLE_ANGLE, stops))
}

fn animated_phase(tick_count: u32) -> f32 {
    let steps = LOADING_ANIM_CYCLE_TICKS.max(1);
    (tick_count % steps) as f32 / steps as f32
}

impl Component<Action> for TitleHeader {
    type Props<'a> = TitleHeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let phase = if props.is_animating {
            animated_phase(props.tick_count)
        } else {
            0.0
        };
        let fill = title_fill(gradient_colors(props.temperature), phase);

        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(fill);

        frame.render_widget(ArtBox::new(&renderer, props.title), area);
    }
}
