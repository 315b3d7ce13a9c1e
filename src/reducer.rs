//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, QueryState, LOADING_ANIM_CYCLE_TICKS};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== City actions =====
        Action::CityInputChange(text) => {
            if text == state.city_input {
                return DispatchResult::unchanged();
            }
            state.city_input = text;
            DispatchResult::changed()
        }

        Action::CitySubmit => {
            if state.city_input.is_empty() {
                return DispatchResult::unchanged();
            }
            state.latest_request += 1;
            let city = state.city_input.clone();
            state.query = QueryState::Loading { city: city.clone() };
            state.tick_count = 0;
            state.loading_anim_ticks_remaining = 0;
            DispatchResult::changed_with(Effect::FetchWeather {
                request: state.latest_request,
                city,
            })
        }

        // ===== Weather actions =====
        Action::WeatherDidLoad { request, result } => {
            if request != state.latest_request {
                tracing::debug!(
                    request,
                    latest = state.latest_request,
                    "dropping stale weather result"
                );
                return DispatchResult::unchanged();
            }
            state.query = QueryState::Success(result);
            state.loading_anim_ticks_remaining = ticks_to_phase_zero(state.tick_count);
            DispatchResult::changed()
        }

        Action::WeatherDidError { request, error } => {
            if request != state.latest_request {
                tracing::debug!(
                    request,
                    latest = state.latest_request,
                    "dropping stale weather error"
                );
                return DispatchResult::unchanged();
            }
            state.query = QueryState::Error(error);
            state.loading_anim_ticks_remaining = ticks_to_phase_zero(state.tick_count);
            DispatchResult::changed()
        }

        // ===== Global actions =====
        Action::Render => DispatchResult::changed(),

        Action::Tick => {
            if !state.wants_ticks() {
                return DispatchResult::unchanged();
            }
            state.tick_count = state.tick_count.wrapping_add(1);
            if state.loading_anim_ticks_remaining > 0 {
                state.loading_anim_ticks_remaining -= 1;
            }
            DispatchResult::changed()
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

fn ticks_to_phase_zero(tick_count: u32) -> u32 {
    let cycle = LOADING_ANIM_CYCLE_TICKS.max(1);
    if tick_count == 0 {
        return cycle;
    }
    let remainder = tick_count % cycle;
    if remainder == 0 { 0 } else { cycle - remainder }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CardVariant, FailureKind, QueryError, WeatherResult};

    fn london() -> WeatherResult {
        WeatherResult {
            location_name: "London".into(),
            temperature_celsius: 21.4,
            humidity_percent: 64.0,
            condition_description: "light rain".into(),
        }
    }

    #[test]
    fn test_input_change_updates_text() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::CityInputChange("Lon".into()));

        assert!(result.changed);
        assert_eq!(state.city_input, "Lon");
        assert!(result.effects.is_empty());
    }

    #[test]
    fn test_input_is_not_normalized() {
        let mut state = AppState::default();
        reducer(&mut state, Action::CityInputChange("  new york ".into()));

        let result = reducer(&mut state, Action::CitySubmit);

        assert_eq!(
            result.effects,
            vec![Effect::FetchWeather {
                request: 1,
                city: "  new york ".into(),
            }]
        );
    }

    #[test]
    fn test_empty_submit_is_ignored() {
        let mut state = AppState {
            query: QueryState::Success(london()),
            latest_request: 3,
            ..Default::default()
        };

        let result = reducer(&mut state, Action::CitySubmit);

        assert!(!result.changed);
        assert!(result.effects.is_empty());
        assert_eq!(state.latest_request, 3);
        assert_eq!(state.query, QueryState::Success(london()));
    }

    #[test]
    fn test_submit_sets_loading() {
        let mut state = AppState::with_city(CardVariant::Plain, "Paris");
        state.tick_count = 5;
        state.loading_anim_ticks_remaining = 7;

        let result = reducer(&mut state, Action::CitySubmit);

        assert!(result.changed);
        assert_eq!(
            state.query,
            QueryState::Loading {
                city: "Paris".into()
            }
        );
        assert_eq!(state.tick_count, 0);
        assert_eq!(state.loading_anim_ticks_remaining, 0);
        assert_eq!(result.effects.len(), 1);
    }

    #[test]
    fn test_did_load_replaces_error() {
        let mut state = AppState {
            query: QueryState::Error(QueryError::new(FailureKind::NotFound, "city not found")),
            latest_request: 2,
            tick_count: 1,
            ..Default::default()
        };

        let result = reducer(
            &mut state,
            Action::WeatherDidLoad {
                request: 2,
                result: london(),
            },
        );

        assert!(result.changed);
        assert_eq!(state.query.result(), Some(&london()));
        assert!(state.query.error().is_none());
        assert_eq!(
            state.loading_anim_ticks_remaining,
            LOADING_ANIM_CYCLE_TICKS - 1
        );
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut state = AppState::with_city(CardVariant::Plain, "Paris");
        reducer(&mut state, Action::CitySubmit);
        reducer(&mut state, Action::CityInputChange("Rome".into()));
        reducer(&mut state, Action::CitySubmit);

        let stale = reducer(
            &mut state,
            Action::WeatherDidError {
                request: 1,
                error: QueryError::new(FailureKind::Network, "timed out"),
            },
        );

        assert!(!stale.changed);
        assert_eq!(
            state.query,
            QueryState::Loading {
                city: "Rome".into()
            }
        );
    }

    #[test]
    fn test_tick_only_rerenders_when_animating() {
        let mut state = AppState::new(CardVariant::Plain);

        let result = reducer(&mut state, Action::Tick);
        assert!(!result.changed);

        state.loading_anim_ticks_remaining = 1;
        let result = reducer(&mut state, Action::Tick);
        assert!(result.changed);
        assert_eq!(state.loading_anim_ticks_remaining, 0);

        state.query = QueryState::Loading {
            city: "Oslo".into(),
        };
        let result = reducer(&mut state, Action::Tick);
        assert!(result.changed);
    }

    #[test]
    fn test_glass_card_always_ticks() {
        let mut state = AppState::new(CardVariant::Glass);

        let result = reducer(&mut state, Action::Tick);

        assert!(result.changed);
        assert_eq!(state.tick_count, 1);
    }
}
