use artbox::{
    Alignment as ArtAlignment, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use super::title_header::gradient_colors;
use crate::action::Action;
use crate::icons::{self, Icon};
use crate::sprites::{self, SPRITE_HEIGHT};
use crate::state::{CardVariant, QueryError, QueryState, TEMPERATURE_UNIT, WeatherResult};

pub const IDLE_PROMPT: &str = "Enter a city to get the weather";

/// Result area below the input: one presentation per query state
pub struct WeatherCard;

pub struct WeatherCardProps<'a> {
    pub query: &'a QueryState,
    pub variant: CardVariant,
}

/// Rows for name, description, humidity and one blank
const TEXT_ROWS: u16 = 4;
/// miniwi height; terminus would crowd out the icon on most terminals
const BIG_TEMP_ROWS: u16 = 4;
/// Columns for "°C"
const UNIT_WIDTH: u16 = 2;

impl Component<Action> for WeatherCard {
    type Props<'a> = WeatherCardProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        match props.query {
            QueryState::Idle => render_message(frame, area, IDLE_PROMPT),
            QueryState::Loading { city } => {
                render_message(frame, area, &format!("Fetching weather for {city}..."))
            }
            QueryState::Success(result) => match props.variant {
                CardVariant::Plain => render_plain_result(frame, area, result),
                CardVariant::Glass => render_glass_result(frame, area, result),
            },
            QueryState::Error(error) => render_error(frame, area, error, props.variant),
        }
    }
}

fn centered(text: impl Into<Line<'static>>) -> Paragraph<'static> {
    Paragraph::new(text.into().centered())
}

fn render_message(frame: &mut Frame, area: Rect, message: &str) {
    let [row] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(
        centered(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Gray),
        )),
        row,
    );
}

fn render_plain_result(frame: &mut Frame, area: Rect, result: &WeatherResult) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // name
        Constraint::Length(1), // blank
        Constraint::Length(1), // temperature
        Constraint::Length(1), // description
        Constraint::Length(1), // humidity
    ])
    .flex(Flex::Center)
    .split(area);

    frame.render_widget(
        centered(Span::from(result.location_name.clone()).bold()),
        chunks[0],
    );
    frame.render_widget(
        centered(Span::from(result.temperature_label()).bold().fg(Color::White)),
        chunks[2],
    );
    render_details(frame, &chunks[3..5], result);
}

fn render_glass_result(frame: &mut Frame, area: Rect, result: &WeatherResult) {
    let icon_rows = if area.height >= TEXT_ROWS + BIG_TEMP_ROWS + SPRITE_HEIGHT {
        SPRITE_HEIGHT
    } else {
        1
    };
    let chunks = Layout::vertical([
        Constraint::Length(icon_rows),
        Constraint::Length(1), // name
        Constraint::Max(BIG_TEMP_ROWS),
        Constraint::Length(1), // description
        Constraint::Length(1), // humidity
    ])
    .flex(Flex::Center)
    .split(area);

    let icon = icons::icon_for(&result.condition_description);
    frame.render_widget(
        Paragraph::new(sprites::icon_art(icon, icon_rows)).alignment(Alignment::Center),
        chunks[0],
    );
    frame.render_widget(
        centered(Span::from(result.location_name.clone()).bold()),
        chunks[1],
    );

    render_big_temperature(frame, chunks[2], result);
    render_details(frame, &chunks[3..5], result);
}

/// FIGlet digits with the unit as plain text beside them; miniwi has no `°`.
fn render_big_temperature(frame: &mut Frame, area: Rect, result: &WeatherResult) {
    let digits = result.rounded_temperature().to_string();
    let renderer = Renderer::new(fonts::stack(&["miniwi"]))
        .with_plain_fallback()
        .with_alignment(ArtAlignment::Left)
        .with_fill(temperature_fill(result.temperature_celsius));

    let digits_width = renderer
        .render(&digits, area.width.saturating_sub(UNIT_WIDTH), area.height)
        .ok()
        .and_then(|rendered| rendered.metrics())
        .map(|metrics| metrics.width);
    let Some(digits_width) = digits_width else {
        frame.render_widget(
            centered(Span::from(result.temperature_label()).bold().fg(Color::White)),
            area,
        );
        return;
    };

    let [digits_area, unit_area] = Layout::horizontal([
        Constraint::Length(digits_width),
        Constraint::Length(UNIT_WIDTH),
    ])
    .flex(Flex::Center)
    .areas(area);
    frame.render_widget(ArtBox::new(&renderer, &digits), digits_area);
    frame.render_widget(
        Paragraph::new(Span::from(TEMPERATURE_UNIT).bold().fg(Color::White)),
        unit_area,
    );
}

fn render_details(frame: &mut Frame, rows: &[Rect], result: &WeatherResult) {
    frame.render_widget(
        centered(Span::styled(
            result.display_description(),
            Style::default().fg(Color::Gray),
        )),
        rows[0],
    );
    frame.render_widget(
        centered(Span::styled(
            result.humidity_label(),
            Style::default().fg(Color::Gray),
        )),
        rows[1],
    );
}

fn render_error(frame: &mut Frame, area: Rect, error: &QueryError, variant: CardVariant) {
    let icon_rows = match variant {
        CardVariant::Glass if area.height >= SPRITE_HEIGHT + 5 => SPRITE_HEIGHT,
        CardVariant::Glass => 1,
        CardVariant::Plain => 0,
    };
    let chunks = Layout::vertical([
        Constraint::Length(icon_rows),
        Constraint::Length(1), // headline
        Constraint::Length(1), // detail
        Constraint::Length(1), // blank
        Constraint::Length(1), // hint
    ])
    .flex(Flex::Center)
    .split(area);

    if icon_rows > 0 {
        frame.render_widget(
            Paragraph::new(sprites::icon_art(Icon::Wrong, icon_rows))
                .alignment(Alignment::Center),
            chunks[0],
        );
    }
    frame.render_widget(
        centered(Span::styled(
            error.headline(),
            Style::default().fg(Color::Red).bold(),
        )),
        chunks[1],
    );
    frame.render_widget(
        centered(Span::styled(
            error.message.clone(),
            Style::default().fg(Color::Rgb(200, 100, 100)),
        )),
        chunks[2],
    );
    frame.render_widget(
        centered(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("enter", Style::default().fg(Color::Cyan).bold()),
            Span::styled(" to retry", Style::default().fg(Color::DarkGray)),
        ]),
        chunks[4],
    );
}

fn temperature_fill(celsius: f64) -> Fill {
    let (start, end) = gradient_colors(Some(celsius));
    Fill::Linear(LinearGradient::horizontal(start, end))
}
