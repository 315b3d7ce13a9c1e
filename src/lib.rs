//! cityweather - current weather for a typed city name
//!
//! The library exposes the app's modules for testing; `main.rs` wires them
//! into a tui-dispatch runtime.

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod effect;
pub mod icons;
pub mod logging;
pub mod particles;
pub mod reducer;
pub mod sprites;
pub mod state;
