//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const TEMPERATURE_UNIT: &str = "°C";

/// Current conditions for one city, as returned by the provider
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherResult {
    pub location_name: String,
    pub temperature_celsius: f64,
    pub humidity_percent: f64,
    pub condition_description: String,
}

impl WeatherResult {
    /// Temperature rounded half-up, the way the card displays it.
    pub fn rounded_temperature(&self) -> i64 {
        let t = self.temperature_celsius;
        let nearest = t.round();
        // f64::round breaks ties away from zero; ties go up here
        if (nearest - t).abs() == 0.5 {
            t.ceil() as i64
        } else {
            nearest as i64
        }
    }

    /// "21°C"
    pub fn temperature_label(&self) -> String {
        format!("{}{TEMPERATURE_UNIT}", self.rounded_temperature())
    }

    pub fn humidity_label(&self) -> String {
        format!("Humidity: {}%", self.humidity_percent)
    }

    /// Description with each word capitalized ("light rain" -> "Light Rain")
    pub fn display_description(&self) -> String {
        self.condition_description
            .split(' ')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Why a query failed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum FailureKind {
    /// Provider answered 404
    NotFound,
    /// Any other non-success status
    Provider,
    /// Transport failure or timeout
    Network,
    /// Success status but the body was not a weather report
    Malformed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct QueryError {
    pub kind: FailureKind,
    pub message: String,
}

impl QueryError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn headline(&self) -> &'static str {
        match self.kind {
            FailureKind::NotFound => "City not found",
            _ => "Weather lookup failed",
        }
    }
}

/// Lifecycle of the most recent query
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum QueryState {
    #[default]
    Idle,
    Loading {
        city: String,
    },
    Success(WeatherResult),
    Error(QueryError),
}

impl QueryState {
    pub fn is_idle(&self) -> bool {
        matches!(self, QueryState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, QueryState::Error(_))
    }

    pub fn result(&self) -> Option<&WeatherResult> {
        match self {
            QueryState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&QueryError> {
        match self {
            QueryState::Error(error) => Some(error),
            _ => None,
        }
    }
}

/// Card presentation
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum CardVariant {
    /// Flat text card
    Plain,
    /// Animated card with icon and particle background
    #[default]
    Glass,
}

/// Animation timing for the title gradient and particles.
pub const LOADING_ANIM_TICK_MS: u64 = 15;
pub const LOADING_ANIM_CYCLE_TICKS: u32 = 60;

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Text typed into the city field
    #[debug(section = "Input", label = "City")]
    pub city_input: String,

    /// Idle → Loading → Success/Error
    #[debug(section = "Weather", label = "Query", debug_fmt)]
    pub query: QueryState,

    /// Id of the last issued fetch; completions tagged otherwise are stale
    #[debug(section = "Weather", label = "Request")]
    pub latest_request: u64,

    #[debug(section = "Ui", label = "Variant", debug_fmt)]
    pub variant: CardVariant,

    // --- Animation internals (skipped) ---
    #[debug(skip)]
    pub tick_count: u32,

    /// Remaining ticks to finish the current gradient cycle after loading
    #[debug(skip)]
    pub loading_anim_ticks_remaining: u32,
}

impl AppState {
    pub fn new(variant: CardVariant) -> Self {
        Self {
            city_input: String::new(),
            query: QueryState::Idle,
            latest_request: 0,
            variant,
            tick_count: 0,
            loading_anim_ticks_remaining: 0,
        }
    }

    /// Start with the input pre-filled
    pub fn with_city(variant: CardVariant, city: impl Into<String>) -> Self {
        Self {
            city_input: city.into(),
            ..Self::new(variant)
        }
    }

    pub fn loading_anim_active(&self) -> bool {
        self.query.is_loading() || self.loading_anim_ticks_remaining > 0
    }

    /// Particles drift continuously on the glass card
    pub fn wants_ticks(&self) -> bool {
        self.variant == CardVariant::Glass || self.loading_anim_active()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(CardVariant::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(temp: f64) -> WeatherResult {
        WeatherResult {
            location_name: "London".into(),
            temperature_celsius: temp,
            humidity_percent: 64.0,
            condition_description: "light rain".into(),
        }
    }

    #[test]
    fn test_temperature_rounds_at_render_time() {
        assert_eq!(result(21.4).temperature_label(), "21°C");
        assert_eq!(result(21.5).temperature_label(), "22°C");
        assert_eq!(result(-2.5).temperature_label(), "-2°C");
        assert_eq!(result(-0.4).temperature_label(), "0°C");
    }

    #[test]
    fn test_rounding_ties_go_up_only_on_exact_halves() {
        assert_eq!(result(0.49999999999999994).rounded_temperature(), 0);
        assert_eq!(result(0.5).rounded_temperature(), 1);
        assert_eq!(result(-0.5).rounded_temperature(), 0);
        assert_eq!(result(-3.5).rounded_temperature(), -3);
        assert_eq!(result(-3.6).rounded_temperature(), -4);
    }

    #[test]
    fn test_humidity_label() {
        assert_eq!(result(0.0).humidity_label(), "Humidity: 64%");
    }

    #[test]
    fn test_description_is_capitalized() {
        assert_eq!(result(0.0).display_description(), "Light Rain");
    }

    #[test]
    fn test_headline_depends_on_kind() {
        let not_found = QueryError::new(FailureKind::NotFound, "city not found");
        let network = QueryError::new(FailureKind::Network, "timed out");
        assert_eq!(not_found.headline(), "City not found");
        assert_eq!(network.headline(), "Weather lookup failed");
    }
}
