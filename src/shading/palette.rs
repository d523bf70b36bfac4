use serde::{Deserialize, Serialize};

/// Display theme of the host page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Page background behind the bubbles.
    #[must_use]
    pub fn background(self) -> &'static str {
        match self {
            Self::Dark => "#0a0a0f",
            Self::Light => "#f5f5f7",
        }
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// CSS colors for one bubble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BubbleColors {
    pub primary: String,
    pub secondary: String,
    pub dark: String,
    pub glow: String,
    pub text: String,
}

/// Picks bubble colors for a 24h change (in percent) under `theme`.
///
/// Gains map to the teal/green family and losses to pink/red. Saturation of
/// the effect grows with `|change|` and saturates at 20%.
#[must_use]
pub fn bubble_colors(change_24h: f64, theme: Theme) -> BubbleColors {
    let rising = change_24h >= 0.0;
    let k = (change_24h.abs() / 20.0).min(1.0);

    match (theme, rising) {
        (Theme::Dark, true) => BubbleColors {
            primary: hsl(160.0 + k * 40.0, 100.0, 50.0 + k * 10.0),
            secondary: hsl(180.0 + k * 30.0, 100.0, 60.0 + k * 10.0),
            dark: hsl(160.0, 100.0, 20.0),
            glow: rgba(0, 255, 200, 0.3 + k * 0.4),
            text: "#00ffc8".to_owned(),
        },
        (Theme::Dark, false) => BubbleColors {
            primary: hsl(340.0 - k * 20.0, 100.0, 55.0 + k * 10.0),
            secondary: hsl(0.0, 100.0, 60.0 + k * 10.0),
            dark: hsl(340.0, 100.0, 25.0),
            glow: rgba(255, 50, 100, 0.3 + k * 0.4),
            text: "#ff3264".to_owned(),
        },
        (Theme::Light, true) => BubbleColors {
            primary: hsl(160.0 + k * 30.0, 70.0, 35.0 + k * 15.0),
            secondary: hsl(170.0, 60.0, 45.0),
            dark: hsl(160.0, 80.0, 25.0),
            glow: rgba(0, 180, 140, 0.15 + k * 0.25),
            text: "#008060".to_owned(),
        },
        (Theme::Light, false) => BubbleColors {
            primary: hsl(350.0 - k * 10.0, 70.0, 40.0 + k * 10.0),
            secondary: hsl(0.0, 60.0, 45.0),
            dark: hsl(350.0, 80.0, 30.0),
            glow: rgba(200, 40, 60, 0.15 + k * 0.25),
            text: "#a02030".to_owned(),
        },
    }
}

fn hsl(h: f64, s: f64, l: f64) -> String {
    format!("hsl({}, {}%, {}%)", trim(h), trim(s), trim(l))
}

fn rgba(r: u8, g: u8, b: u8, a: f64) -> String {
    format!("rgba({r}, {g}, {b}, {})", trim(a))
}

/// Rounds away float noise (`0.7000000000000001` -> `0.7`).
fn trim(v: f64) -> f64 {
    (v * 1e6).round() / 1e6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_change_counts_as_rising() {
        let c = bubble_colors(0.0, Theme::Dark);
        assert_eq!(c.primary, "hsl(160, 100%, 50%)");
        assert_eq!(c.glow, "rgba(0, 255, 200, 0.3)");
        assert_eq!(c.text, "#00ffc8");
    }

    #[test]
    fn intensity_saturates_at_twenty_percent() {
        assert_eq!(bubble_colors(20.0, Theme::Dark), bubble_colors(55.0, Theme::Dark));
        let c = bubble_colors(-40.0, Theme::Dark);
        assert_eq!(c.primary, "hsl(320, 100%, 65%)");
        assert_eq!(c.glow, "rgba(255, 50, 100, 0.7)");
    }

    #[test]
    fn light_theme_is_muted() {
        let c = bubble_colors(-10.0, Theme::Light);
        assert_eq!(c.primary, "hsl(345, 70%, 45%)");
        assert_eq!(c.text, "#a02030");
    }

    #[test]
    fn theme_background_and_toggle() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.background(), "#f5f5f7");
    }
}
