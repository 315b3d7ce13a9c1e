//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Query the provider for `city`; the completion is tagged with `request`
    FetchWeather { request: u64, city: String },
}
