//! Theme palettes
//!
//! A theme is a named, ordered list of blob colors. Bodies take colors
//! round-robin, so a palette shorter than the body count simply repeats.

use crate::core::error::{BlobError, Result};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS color string, e.g. `rgba(168, 230, 207, 0.9)`
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::new(255, 255, 255, 0.9)
    }
}

#[derive(Debug, PartialEq)]
pub struct Palette {
    pub name: &'static str,
    pub colors: &'static [Rgba],
}

impl Palette {
    /// Color for the body at `index`, wrapping round-robin
    #[inline]
    pub fn color_for(&self, index: usize) -> Rgba {
        self.colors[index % self.colors.len()]
    }
}

pub const PASTEL: Palette = Palette {
    name: "pastel",
    colors: &[
        Rgba::new(168, 230, 207, 0.9), // green
        Rgba::new(212, 165, 230, 0.9), // purple
        Rgba::new(165, 199, 230, 0.9), // blue
        Rgba::new(255, 170, 165, 0.9), // red
        Rgba::new(255, 211, 182, 0.9), // yellow
    ],
};

pub const OCEAN: Palette = Palette {
    name: "ocean",
    colors: &[
        Rgba::new(72, 202, 228, 0.85),
        Rgba::new(0, 150, 199, 0.85),
        Rgba::new(144, 224, 239, 0.85),
        Rgba::new(2, 62, 138, 0.8),
    ],
};

pub const SUNSET: Palette = Palette {
    name: "sunset",
    colors: &[
        Rgba::new(255, 183, 3, 0.85),
        Rgba::new(251, 133, 0, 0.85),
        Rgba::new(230, 57, 70, 0.8),
        Rgba::new(255, 128, 170, 0.85),
        Rgba::new(142, 68, 173, 0.8),
    ],
};

pub const FOREST: Palette = Palette {
    name: "forest",
    colors: &[
        Rgba::new(82, 183, 136, 0.85),
        Rgba::new(45, 106, 79, 0.85),
        Rgba::new(183, 228, 199, 0.85),
    ],
};

pub const MIDNIGHT: Palette = Palette {
    name: "midnight",
    colors: &[
        Rgba::new(58, 12, 163, 0.8),
        Rgba::new(114, 9, 183, 0.8),
        Rgba::new(67, 97, 238, 0.8),
        Rgba::new(76, 201, 240, 0.8),
        Rgba::new(247, 37, 133, 0.8),
    ],
};

/// Fixed theme order; `change_theme` walks it and wraps around.
pub const THEMES: &[Palette] = &[PASTEL, OCEAN, SUNSET, FOREST, MIDNIGHT];

pub fn theme_index(name: &str) -> Option<usize> {
    THEMES.iter().position(|p| p.name == name)
}

/// Position in the theme table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeCycle {
    index: usize,
}

impl ThemeCycle {
    pub fn starting_at(name: &str) -> Result<Self> {
        theme_index(name)
            .map(|index| Self { index })
            .ok_or_else(|| BlobError::UnknownTheme(name.to_string()))
    }

    pub fn current(&self) -> &'static Palette {
        &THEMES[self.index]
    }

    /// Move to the next theme (wrapping) and return it
    pub fn advance(&mut self) -> &'static Palette {
        self.index = (self.index + 1) % THEMES.len();
        self.current()
    }

    pub fn select(&mut self, name: &str) -> Result<&'static Palette> {
        *self = Self::starting_at(name)?;
        Ok(self.current())
    }
}

impl Default for ThemeCycle {
    fn default() -> Self {
        Self { index: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_matches_page_format() {
        assert_eq!(PASTEL.colors[0].to_css(), "rgba(168, 230, 207, 0.9)");
    }

    #[test]
    fn every_theme_has_colors_and_a_unique_name() {
        for (i, p) in THEMES.iter().enumerate() {
            assert!(!p.colors.is_empty(), "{} is empty", p.name);
            assert_eq!(theme_index(p.name), Some(i));
        }
    }

    #[test]
    fn cycle_wraps_to_first_theme() {
        let mut cycle = ThemeCycle::default();
        for _ in 0..THEMES.len() {
            cycle.advance();
        }
        assert_eq!(cycle.current().name, "pastel");
    }

    #[test]
    fn color_for_is_round_robin() {
        assert_eq!(FOREST.color_for(3), FOREST.colors[0]);
        assert_eq!(FOREST.color_for(4), FOREST.colors[1]);
    }

    #[test]
    fn unknown_theme_is_an_error() {
        let mut cycle = ThemeCycle::default();
        assert!(matches!(cycle.select("neon"), Err(BlobError::UnknownTheme(_))));
        assert_eq!(cycle.current().name, "pastel");
    }
}
