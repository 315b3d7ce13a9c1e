use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::{Constraint, Flex, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::title_header::HEADER_MAX_HEIGHT;
use super::{
    CityInput, CityInputProps, Component, TitleHeader, TitleHeaderProps, WeatherCard,
    WeatherCardProps,
};
use crate::action::Action;
use crate::particles;
use crate::state::{AppState, CardVariant};

pub const APP_TITLE: &str = "Weather App";

const CARD_MAX_WIDTH: u16 = 60;
const CARD_MAX_HEIGHT: u16 = 28;
const PARTICLE_SEED: u64 = 0x5eed_c0de;
const PARTICLE_DENSITY: u32 = 40;

/// Props for WeatherDisplay - read-only view of state
pub struct WeatherDisplayProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The whole screen: background, card with title, city input and result
#[derive(Default)]
pub struct WeatherDisplay {
    input: CityInput,
}

impl WeatherDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

struct Palette {
    card_bg: Color,
    input_bg: Color,
    border: Color,
}

fn palette(variant: CardVariant) -> Palette {
    match variant {
        CardVariant::Plain => Palette {
            card_bg: Color::Rgb(30, 64, 175),
            input_bg: Color::Rgb(59, 130, 246),
            border: Color::Rgb(96, 165, 250),
        },
        CardVariant::Glass => Palette {
            card_bg: Color::Rgb(28, 38, 64),
            input_bg: Color::Rgb(52, 66, 100),
            border: Color::Rgb(150, 180, 230),
        },
    }
}

impl Component<Action> for WeatherDisplay {
    type Props<'a> = WeatherDisplayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return vec![Action::Quit],
            KeyCode::Char('c') if ctrl => return vec![Action::Quit],
            KeyCode::Enter => return vec![Action::CitySubmit],
            KeyCode::Char('s') if ctrl => return vec![Action::CitySubmit],
            _ => {}
        }

        let palette = palette(props.state.variant);
        self.input
            .handle_event(
                event,
                CityInputProps {
                    value: &props.state.city_input,
                    is_focused: true,
                    bg: palette.input_bg,
                    on_change: Action::CityInputChange,
                    on_submit: |_| Action::CitySubmit,
                },
            )
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherDisplayProps<'_>) {
        let state = props.state;
        let palette = palette(state.variant);

        let [main, help] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);

        if state.variant == CardVariant::Glass {
            render_particles(frame, main, state.tick_count);
        }

        let [column] = Layout::horizontal([Constraint::Max(CARD_MAX_WIDTH)])
            .flex(Flex::Center)
            .areas(main);
        let [card] = Layout::vertical([Constraint::Max(CARD_MAX_HEIGHT)])
            .flex(Flex::Center)
            .areas(column);

        frame.render_widget(Clear, card);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.card_bg));
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let title_rows = match state.variant {
            CardVariant::Plain => 1,
            CardVariant::Glass => HEADER_MAX_HEIGHT,
        };
        let [title, _, input, _, body] = Layout::vertical([
            Constraint::Max(title_rows),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(inner);

        match state.variant {
            CardVariant::Plain => frame.render_widget(
                Paragraph::new(Line::from(APP_TITLE).centered())
                    .style(Style::default().add_modifier(Modifier::BOLD)),
                title,
            ),
            CardVariant::Glass => TitleHeader.render(
                frame,
                title,
                TitleHeaderProps {
                    title: APP_TITLE,
                    temperature: state.query.result().map(|r| r.temperature_celsius),
                    is_animating: state.loading_anim_active(),
                    tick_count: state.tick_count,
                },
            ),
        }

        self.input.render(
            frame,
            input,
            CityInputProps {
                value: &state.city_input,
                is_focused: props.is_focused,
                bg: palette.input_bg,
                on_change: Action::CityInputChange,
                on_submit: |_| Action::CitySubmit,
            },
        );

        WeatherCard.render(
            frame,
            body,
            WeatherCardProps {
                query: &state.query,
                variant: state.variant,
            },
        );

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            help,
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("enter", "search"),
                    StatusBarHint::new("esc", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

fn render_particles(frame: &mut Frame, area: Rect, tick: u32) {
    let field = particles::particle_field(
        PARTICLE_SEED,
        tick,
        area.width,
        area.height,
        PARTICLE_DENSITY,
    );
    let buf = frame.buffer_mut();
    for p in field {
        let level = (90.0 + 140.0 * p.brightness) as u8;
        if let Some(cell) = buf.cell_mut((area.x + p.x, area.y + p.y)) {
            cell.set_char(p.glyph)
                .set_fg(Color::Rgb(level, level, level.saturating_add(20)));
        }
    }
}
