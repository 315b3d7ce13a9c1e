//! Description-to-icon mapping for the glass card

/// The five icon assets
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Sun,
    Cloud,
    Rain,
    /// Partly cloudy; also the fallback
    SunCloud,
    /// Shown for failed queries
    Wrong,
}

/// Ordered (substring, icon) rules. The first rule whose substring occurs in
/// the lower-cased description wins, so "sun" beats "rain" and "cloud"
/// shadows "few clouds".
pub const ICON_RULES: [(&str, Icon); 5] = [
    ("sun", Icon::Sun),
    ("cloud", Icon::Cloud),
    ("rain", Icon::Rain),
    ("clear", Icon::Sun),
    ("few clouds", Icon::SunCloud),
];

/// Icon used when no rule matches
pub const DEFAULT_ICON: Icon = Icon::SunCloud;

pub fn icon_for(description: &str) -> Icon {
    let description = description.to_lowercase();
    ICON_RULES
        .iter()
        .find(|(needle, _)| description.contains(needle))
        .map(|&(_, icon)| icon)
        .unwrap_or(DEFAULT_ICON)
}

impl Icon {
    /// Emoji representation for when sprites don't fit
    pub fn emoji(self) -> &'static str {
        match self {
            Icon::Sun => "\u{2600}\u{fe0f}",
            Icon::Cloud => "\u{2601}\u{fe0f}",
            Icon::Rain => "\u{1f327}\u{fe0f}",
            Icon::SunCloud => "\u{26c5}",
            Icon::Wrong => "\u{26a0}\u{fe0f}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_wins() {
        assert_eq!(icon_for("light rain and sun"), Icon::Sun);
        assert_eq!(icon_for("sun behind cloud"), Icon::Sun);
    }

    #[test]
    fn test_unmatched_falls_back_to_partly_cloudy() {
        assert_eq!(icon_for("overcast"), Icon::SunCloud);
        assert_eq!(icon_for(""), Icon::SunCloud);
    }

    #[test]
    fn test_common_descriptions() {
        assert_eq!(icon_for("clear sky"), Icon::Sun);
        assert_eq!(icon_for("broken clouds"), Icon::Cloud);
        assert_eq!(icon_for("moderate rain"), Icon::Rain);
        assert_eq!(icon_for("Light Rain"), Icon::Rain);
    }

    #[test]
    fn test_few_clouds_is_shadowed_by_cloud() {
        assert_eq!(icon_for("few clouds"), Icon::Cloud);
    }
}
