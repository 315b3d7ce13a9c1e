//! Render tests using RenderHarness
//!
//! Render the full display into a test buffer and check the plain text.

use cityweather::{
    components::{Component, WeatherDisplay, WeatherDisplayProps},
    state::{AppState, CardVariant, FailureKind, QueryError, QueryState, WeatherResult},
};
use tui_dispatch::testing::*;

fn london() -> WeatherResult {
    WeatherResult {
        location_name: "London".into(),
        temperature_celsius: 21.4,
        humidity_percent: 64.0,
        condition_description: "light rain".into(),
    }
}

fn render(state: &AppState, width: u16, height: u16) -> String {
    let mut render = RenderHarness::new(width, height);
    let mut component = WeatherDisplay::new();
    render.render_to_string_plain(|frame| {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    })
}

#[test]
fn test_render_idle_prompt_both_variants() {
    for variant in [CardVariant::Plain, CardVariant::Glass] {
        let output = render(&AppState::new(variant), 70, 30);
        assert!(
            output.contains("Enter a city to get the weather"),
            "{variant:?} should prompt:\n{output}"
        );
    }
}

#[test]
fn test_render_plain_success_rounds_temperature() {
    let state = AppState {
        query: QueryState::Success(london()),
        ..AppState::new(CardVariant::Plain)
    };

    let output = render(&state, 60, 24);

    assert!(output.contains("London"), "location:\n{output}");
    assert!(output.contains("21°C"), "rounded temperature:\n{output}");
    assert!(!output.contains("21.4"), "no raw temperature:\n{output}");
    assert!(output.contains("Light Rain"), "description:\n{output}");
    assert!(output.contains("Humidity: 64%"), "humidity:\n{output}");
}

#[test]
fn test_render_glass_success() {
    let state = AppState {
        query: QueryState::Success(london()),
        ..AppState::new(CardVariant::Glass)
    };

    let output = render(&state, 70, 40);

    assert!(output.contains("London"), "location:\n{output}");
    assert!(output.contains("°C"), "temperature unit:\n{output}");
    assert!(output.contains("' ' ' ' '"), "rain sprite:\n{output}");
    assert!(output.contains("Light Rain"), "description:\n{output}");
    assert!(output.contains("Humidity: 64%"), "humidity:\n{output}");
}

#[test]
fn test_render_glass_keeps_unit_for_negative_temperature() {
    let state = AppState {
        query: QueryState::Success(WeatherResult {
            temperature_celsius: -2.5,
            ..london()
        }),
        ..AppState::new(CardVariant::Glass)
    };

    let output = render(&state, 80, 24);

    assert!(output.contains("°C"), "temperature unit:\n{output}");
}

#[test]
fn test_render_glass_draws_icon_for_description() {
    let state = AppState {
        query: QueryState::Success(WeatherResult {
            location_name: "Cairo".into(),
            temperature_celsius: 33.0,
            humidity_percent: 20.0,
            condition_description: "clear sky".into(),
        }),
        ..AppState::new(CardVariant::Glass)
    };

    let output = render(&state, 70, 40);

    assert!(output.contains("-- (     ) --"), "sun sprite:\n{output}");
    assert!(!output.contains("' ' ' ' '"), "no rain sprite:\n{output}");
}

#[test]
fn test_render_glass_error_draws_warning_sprite() {
    let state = AppState {
        query: QueryState::Error(QueryError::new(FailureKind::NotFound, "city not found")),
        ..AppState::new(CardVariant::Glass)
    };

    let output = render(&state, 70, 40);

    assert!(output.contains("/ !! \\"), "warning sprite:\n{output}");
}

#[test]
fn test_render_plain_error_has_no_sprite() {
    let state = AppState {
        query: QueryState::Error(QueryError::new(FailureKind::NotFound, "city not found")),
        ..AppState::new(CardVariant::Plain)
    };

    let output = render(&state, 70, 40);

    assert!(!output.contains("/ !! \\"), "{output}");
}

#[test]
fn test_render_loading() {
    let state = AppState {
        city_input: "Oslo".into(),
        query: QueryState::Loading {
            city: "Oslo".into(),
        },
        ..AppState::new(CardVariant::Plain)
    };

    let output = render(&state, 60, 24);

    assert!(output.contains("Fetching weather for Oslo"), "{output}");
}

#[test]
fn test_render_error_both_variants() {
    for variant in [CardVariant::Plain, CardVariant::Glass] {
        let state = AppState {
            query: QueryState::Error(QueryError::new(FailureKind::NotFound, "city not found")),
            ..AppState::new(variant)
        };

        let output = render(&state, 70, 40);

        assert!(output.contains("City not found"), "{variant:?} headline:\n{output}");
        assert!(output.contains("retry"), "{variant:?} hint:\n{output}");
        assert!(!output.contains("Humidity"), "{variant:?} no stale data:\n{output}");
    }
}

#[test]
fn test_render_network_error_headline() {
    let state = AppState {
        query: QueryState::Error(QueryError::new(FailureKind::Network, "connection refused")),
        ..AppState::new(CardVariant::Plain)
    };

    let output = render(&state, 60, 24);

    assert!(output.contains("Weather lookup failed"), "{output}");
    assert!(output.contains("connection refused"), "{output}");
}

#[test]
fn test_render_help_bar() {
    let output = render(&AppState::default(), 80, 24);

    assert!(output.contains("search"), "search hint:\n{output}");
    assert!(output.contains("quit"), "quit hint:\n{output}");
}

#[test]
fn test_render_tiny_terminal_does_not_panic() {
    let state = AppState {
        query: QueryState::Success(london()),
        ..AppState::new(CardVariant::Glass)
    };

    let output = render(&state, 12, 6);

    assert!(!output.is_empty());
}
