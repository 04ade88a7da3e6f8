//! Color themes for the terminal UI, mirroring the web design's gray
//! surfaces and indigo accents.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Dark,
    Light,
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub variant: ThemeVariant,
    pub bg: Color,
    pub fg: Color,
    pub muted_fg: Color,
    pub primary: Color,
    pub destructive: Color,
    pub border: Color,
    pub border_focused: Color,
}

impl Theme {
    pub fn new(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Dark => Self::dark(),
            ThemeVariant::Light => Self::light(),
        }
    }

    fn dark() -> Self {
        Self {
            variant: ThemeVariant::Dark,
            bg: Color::Rgb(17, 24, 39),               // gray-900
            fg: Color::Rgb(243, 244, 246),            // gray-100
            muted_fg: Color::Rgb(156, 163, 175),      // gray-400
            primary: Color::Rgb(129, 140, 248),       // indigo-400
            destructive: Color::Rgb(248, 113, 113),   // red-400
            border: Color::Rgb(55, 65, 81),           // gray-700
            border_focused: Color::Rgb(99, 102, 241), // indigo-500
        }
    }

    fn light() -> Self {
        Self {
            variant: ThemeVariant::Light,
            bg: Color::Rgb(249, 250, 251),            // gray-50
            fg: Color::Rgb(17, 24, 39),               // gray-900
            muted_fg: Color::Rgb(75, 85, 99),         // gray-600
            primary: Color::Rgb(79, 70, 229),         // indigo-600
            destructive: Color::Rgb(239, 68, 68),     // red-500
            border: Color::Rgb(229, 231, 235),        // gray-200
            border_focused: Color::Rgb(99, 102, 241), // indigo-500
        }
    }

    /// Flip between dark and light, the sun/moon toggle.
    pub fn cycle(&mut self) {
        *self = match self.variant {
            ThemeVariant::Dark => Self::light(),
            ThemeVariant::Light => Self::dark(),
        };
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.fg).add_modifier(Modifier::BOLD)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted_fg)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.destructive)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused { self.border_focused } else { self.border })
    }
}

/// Read the terminal's color-scheme preference once at startup.
///
/// Terminals following the `COLORFGBG` convention export something like
/// `15;0` (light text on a dark background). Dark wins when the variable is
/// absent or unparseable.
pub fn detect_variant() -> ThemeVariant {
    match std::env::var("COLORFGBG") {
        Ok(value) => variant_from_colorfgbg(&value),
        Err(_) => ThemeVariant::Dark,
    }
}

fn variant_from_colorfgbg(value: &str) -> ThemeVariant {
    let bg = value.rsplit(';').next().and_then(|part| part.trim().parse::<u8>().ok());
    match bg {
        // 0-6 and 8 are the dark half of the 16-color palette.
        Some(index) if index <= 6 || index == 8 => ThemeVariant::Dark,
        Some(_) => ThemeVariant::Light,
        None => ThemeVariant::Dark,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_background_indices_map_to_dark() {
        assert_eq!(variant_from_colorfgbg("15;0"), ThemeVariant::Dark);
        assert_eq!(variant_from_colorfgbg("7;4"), ThemeVariant::Dark);
        assert_eq!(variant_from_colorfgbg("15;8"), ThemeVariant::Dark);
    }

    #[test]
    fn test_light_background_indices_map_to_light() {
        assert_eq!(variant_from_colorfgbg("0;15"), ThemeVariant::Light);
        assert_eq!(variant_from_colorfgbg("0;7"), ThemeVariant::Light);
    }

    #[test]
    fn test_three_part_value_uses_the_last_field() {
        // Some terminals export "fg;default;bg".
        assert_eq!(variant_from_colorfgbg("15;default;0"), ThemeVariant::Dark);
        assert_eq!(variant_from_colorfgbg("0;default;15"), ThemeVariant::Light);
    }

    #[test]
    fn test_unparseable_value_defaults_to_dark() {
        assert_eq!(variant_from_colorfgbg(""), ThemeVariant::Dark);
        assert_eq!(variant_from_colorfgbg("default;default"), ThemeVariant::Dark);
    }

    #[test]
    fn test_cycle_flips_the_variant() {
        let mut theme = Theme::new(ThemeVariant::Dark);
        theme.cycle();
        assert_eq!(theme.variant, ThemeVariant::Light);
        theme.cycle();
        assert_eq!(theme.variant, ThemeVariant::Dark);
    }
}
