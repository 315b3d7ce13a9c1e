use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{BaseStyle, Padding, TextInput, TextInputProps, TextInputStyle};

use super::Component;
use crate::action::Action;

pub const PLACEHOLDER: &str = "Enter city";
const BUTTON_LABEL: &str = "[ Search ]";

/// Text field plus the search control
#[derive(Default)]
pub struct CityInput {
    input: TextInput,
}

pub struct CityInputProps<'a> {
    pub value: &'a str,
    pub is_focused: bool,
    pub bg: Color,
    pub on_change: fn(String) -> Action,
    pub on_submit: fn(String) -> Action,
}

impl CityInput {
    pub fn new() -> Self {
        Self::default()
    }

    fn input_style(bg: Color) -> TextInputStyle {
        TextInputStyle {
            base: BaseStyle {
                border: None,
                padding: Padding::all(1),
                bg: Some(bg),
                fg: None,
            },
            placeholder_style: None,
            cursor_style: None,
        }
    }
}

impl Component<Action> for CityInput {
    type Props<'a> = CityInputProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }
        let input_props = TextInputProps {
            value: props.value,
            placeholder: PLACEHOLDER,
            is_focused: true,
            style: Self::input_style(props.bg),
            on_change: props.on_change,
            on_submit: props.on_submit,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input
            .handle_event(event, input_props)
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::horizontal([
            Constraint::Min(8),
            Constraint::Length(BUTTON_LABEL.len() as u16 + 2),
        ])
        .split(area);

        let input_props = TextInputProps {
            value: props.value,
            placeholder: PLACEHOLDER,
            is_focused: props.is_focused,
            style: Self::input_style(props.bg),
            on_change: props.on_change,
            on_submit: props.on_submit,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input.render(frame, chunks[0], input_props);

        let button_style = Style::default()
            .fg(Color::White)
            .bg(Color::Rgb(37, 99, 235))
            .add_modifier(Modifier::BOLD);
        let rows = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(chunks[1]);
        frame.render_widget(
            Paragraph::new(Line::from(BUTTON_LABEL).centered()).style(button_style),
            rows[1],
        );
    }
}
