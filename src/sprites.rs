//! Icon sprites with multi-color layer support
//!
//! Each icon is drawn from one or more ASCII layers. Spaces are transparent,
//! so later layers sit on top of earlier ones.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};

use crate::icons::Icon;

mod sprite_data {
    pub const SUN: &str = r"    \   |   /
      .-.
 -- (     ) --
      `-'
    /   |   \";

    pub const CLOUD: &str = r"      .--.
   .-(    ).
  (___.__)__)

";

    pub const RAIN_CLOUD: &str = r"      .--.
   .-(    ).
  (___.__)__)
";

    pub const RAIN_DROPS: &str = r"


   ' ' ' ' '
  ' ' ' ' '";

    pub const SUN_CLOUD_SUN: &str = r"   \  /
 _ /''.-.

   /
";

    pub const SUN_CLOUD_CLOUD: &str = r"
        .-.
    \_(   ).
    /(___(__)
";

    pub const WRONG: &str = r"     /\
    /  \
   / !! \
  /  !!  \
 /________\";
}

/// Rows every sprite occupies
pub const SPRITE_HEIGHT: u16 = 5;

/// A single sprite layer with its content and color
struct SpriteLayer {
    content: &'static str,
    color: Color,
}

/// Composite multiple layers into Text, treating spaces as transparent
fn composite_layers(layers: &[SpriteLayer]) -> Text<'static> {
    if layers.is_empty() {
        return Text::default();
    }

    let layer_lines: Vec<Vec<Vec<char>>> = layers
        .iter()
        .map(|l| l.content.lines().map(|line| line.chars().collect()).collect())
        .collect();

    let max_lines = layer_lines.iter().map(|l| l.len()).max().unwrap_or(0);
    let max_width = layer_lines
        .iter()
        .flat_map(|lines| lines.iter())
        .map(|line| line.len())
        .max()
        .unwrap_or(0);

    let mut result_lines = Vec::with_capacity(max_lines);
    for line_idx in 0..max_lines {
        let mut spans = Vec::with_capacity(max_width);
        for col_idx in 0..max_width {
            // Topmost non-space character wins (last layer = foreground)
            let (ch, color) = layers
                .iter()
                .enumerate()
                .rev()
                .find_map(|(layer_idx, layer)| {
                    layer_lines[layer_idx]
                        .get(line_idx)
                        .and_then(|line| line.get(col_idx))
                        .filter(|ch| **ch != ' ')
                        .map(|ch| (*ch, layer.color))
                })
                .unwrap_or((' ', Color::Reset));
            spans.push(Span::styled(ch.to_string(), Style::default().fg(color)));
        }
        result_lines.push(Line::from(spans));
    }

    Text::from(result_lines)
}

/// Art for the given icon
pub fn icon_sprite(icon: Icon) -> Text<'static> {
    let layers = match icon {
        Icon::Sun => vec![SpriteLayer {
            content: sprite_data::SUN,
            color: Color::Yellow,
        }],
        Icon::Cloud => vec![SpriteLayer {
            content: sprite_data::CLOUD,
            color: Color::Rgb(190, 190, 205),
        }],
        Icon::Rain => vec![
            SpriteLayer {
                content: sprite_data::RAIN_CLOUD,
                color: Color::Rgb(160, 160, 175),
            },
            SpriteLayer {
                content: sprite_data::RAIN_DROPS,
                color: Color::Rgb(100, 160, 255),
            },
        ],
        Icon::SunCloud => vec![
            SpriteLayer {
                content: sprite_data::SUN_CLOUD_SUN,
                color: Color::Yellow,
            },
            SpriteLayer {
                content: sprite_data::SUN_CLOUD_CLOUD,
                color: Color::Rgb(200, 200, 210),
            },
        ],
        Icon::Wrong => vec![SpriteLayer {
            content: sprite_data::WRONG,
            color: Color::Rgb(230, 90, 90),
        }],
    };
    composite_layers(&layers)
}

/// Sprite when `available_height` rows are free, otherwise the emoji on one line.
pub fn icon_art(icon: Icon, available_height: u16) -> Text<'static> {
    if available_height >= SPRITE_HEIGHT {
        icon_sprite(icon)
    } else {
        Text::from(Line::from(icon.emoji()))
    }
}
