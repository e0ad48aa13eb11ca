//! Light/dark theme: mode flag, palettes, and persistence
//!
//! The mode lives in `App` and is handed to the renderer; `apply` is the only
//! place that writes it out.

use ratatui::style::Color;

use crate::config::ThemeStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Interpret a stored token. Empty means "nothing stored"; anything other
    /// than "dark" reads as light.
    pub fn from_stored(token: &str) -> Option<Self> {
        if token.is_empty() {
            None
        } else if token == "dark" {
            Some(ThemeMode::Dark)
        } else {
            Some(ThemeMode::Light)
        }
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Startup mode: stored preference first, then the ambient one
    pub fn initial(stored: Option<&str>, ambient_dark: impl FnOnce() -> bool) -> Self {
        stored
            .and_then(Self::from_stored)
            .unwrap_or_else(|| Self::from_dark(ambient_dark()))
    }

    pub fn palette(self) -> Palette {
        match self {
            ThemeMode::Light => Palette::light(),
            ThemeMode::Dark => Palette::dark(),
        }
    }
}

/// Whether the desktop environment asks for a dark color scheme
pub fn detect_ambient_dark() -> bool {
    match dark_light::detect() {
        Ok(dark_light::Mode::Dark) => true,
        Ok(_) => false,
        Err(e) => {
            tracing::debug!("System theme detection failed: {:?}", e);
            false
        }
    }
}

/// Persist `mode`. Failures are logged, never fatal.
pub fn apply(mode: ThemeMode, store: &mut dyn ThemeStore) {
    match store.save_theme(mode.as_str()) {
        Ok(()) => tracing::info!("Theme set to {}", mode.as_str()),
        Err(e) => tracing::warn!("Could not save theme preference: {}", e),
    }
}

/// Colors for one theme mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,          // Page background
    pub surface: Color,     // Header, card, footer
    pub input_bg: Color,    // Text field
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub border_focus: Color,
    pub accent: Color,      // Play icon, errors
    pub link: Color,
    pub bg_selected: Color,
}

impl Palette {
    // Tailwind grays
    const GRAY_100: Color = Color::Rgb(243, 244, 246);
    const GRAY_300: Color = Color::Rgb(209, 213, 219);
    const GRAY_400: Color = Color::Rgb(156, 163, 175);
    const GRAY_600: Color = Color::Rgb(75, 85, 99);
    const GRAY_700: Color = Color::Rgb(55, 65, 81);
    const GRAY_800: Color = Color::Rgb(31, 41, 55);
    const GRAY_900: Color = Color::Rgb(17, 24, 39);
    const RED_600: Color = Color::Rgb(220, 38, 38);
    const BLUE_500: Color = Color::Rgb(59, 130, 246);

    pub fn light() -> Self {
        Self {
            bg: Self::GRAY_100,
            surface: Color::Rgb(255, 255, 255),
            input_bg: Color::Rgb(255, 255, 255),
            text: Color::Rgb(0, 0, 0),
            text_dim: Self::GRAY_600,
            border: Self::GRAY_300,
            border_focus: Self::BLUE_500,
            accent: Self::RED_600,
            link: Self::BLUE_500,
            bg_selected: Self::GRAY_300,
        }
    }

    pub fn dark() -> Self {
        Self {
            bg: Self::GRAY_900,
            surface: Self::GRAY_800,
            input_bg: Self::GRAY_700,
            text: Color::Rgb(255, 255, 255),
            text_dim: Self::GRAY_400,
            border: Self::GRAY_600,
            border_focus: Self::BLUE_500,
            accent: Self::RED_600,
            link: Self::BLUE_500,
            bg_selected: Self::GRAY_700,
        }
    }
}
