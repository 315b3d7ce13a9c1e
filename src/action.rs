//! Actions: user intents and async results

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::{QueryError, WeatherResult};

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== City category =====
    /// City field text changed (every keystroke)
    CityInputChange(String),

    /// Search for the current city text (Enter / search control)
    CitySubmit,

    // ===== Weather category =====
    /// Result: provider answered with a weather report
    WeatherDidLoad {
        request: u64,
        result: WeatherResult,
    },

    /// Result: query failed
    WeatherDidError { request: u64, error: QueryError },

    // ===== Uncategorized (global) =====
    /// Force a re-render (for cursor movement, etc.)
    Render,

    /// Animation frame
    Tick,

    /// Exit the application
    Quit,
}
