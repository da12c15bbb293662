//! Colour theme for the folio TUI.
//!
//! Themes are defined as TOML files. The default theme is embedded in the
//! binary via [`include_str!`] so the application works without any files on
//! disk. Call [`Theme::load_default`] (or [`Theme::by_name`]) at startup and
//! pass the result through the application as a shared reference.
//!
//! # Colour assignment for tags
//!
//! Post tags are hashed to a stable index into the palette so the same tag
//! always gets the same colour within a session, regardless of the order in
//! which posts are listed.

use config::{Config, File, FileFormat};
use folio_core::{ProjectDifficulty, SkillCategory, SkillLevel};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");
const GRUVBOX_DARK_THEME_SRC: &str = include_str!("themes/gruvbox_dark.toml");

// ---------------------------------------------------------------------------
// Raw (serde) types, mirroring the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawStyle {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    dim: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    underlined: bool,
}

impl RawStyle {
    fn into_style(self) -> Style {
        let mut style = Style::default();
        if let Some(c) = self.fg.as_deref().and_then(parse_color) {
            style = style.fg(c);
        }
        if let Some(c) = self.bg.as_deref().and_then(parse_color) {
            style = style.bg(c);
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.dim {
            style = style.add_modifier(Modifier::DIM);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.underlined {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        style
    }
}

#[derive(Debug, Deserialize)]
struct RawLevels {
    learning: RawStyle,
    practiced: RawStyle,
    shipped: RawStyle,
    advanced: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawDifficulty {
    beginner: RawStyle,
    intermediate: RawStyle,
    advanced: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawCategories {
    programming: RawStyle,
    foundation: RawStyle,
    ml: RawStyle,
    engineering: RawStyle,
    domain: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawBorders {
    focused: RawStyle,
    command_bar: RawStyle,
    unfocused: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawSearch {
    highlight: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawText {
    heading: RawStyle,
    success: RawStyle,
    warning: RawStyle,
    muted: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawTags {
    palette: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    levels: RawLevels,
    difficulty: RawDifficulty,
    categories: RawCategories,
    borders: RawBorders,
    search: RawSearch,
    text: RawText,
    tags: RawTags,
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

/// Application colour theme.
///
/// All styles are pre-resolved ratatui [`Style`] values; no allocation at
/// render time.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Badge styles for each skill level.
    pub level_learning: Style,
    pub level_practiced: Style,
    pub level_shipped: Style,
    pub level_advanced: Style,

    pub difficulty_beginner: Style,
    pub difficulty_intermediate: Style,
    pub difficulty_advanced: Style,

    /// Roadmap category accents.
    pub category_programming: Style,
    pub category_foundation: Style,
    pub category_ml: Style,
    pub category_engineering: Style,
    pub category_domain: Style,

    /// Border style for the currently focused pane.
    pub border_focused: Style,
    /// Style of the `:` prompt in the command bar.
    pub border_command_bar: Style,
    /// Border style for unfocused panes.
    pub border_unfocused: Style,

    /// Inline highlight applied to matched search spans.
    pub search_highlight: Style,

    pub heading: Style,
    /// Outcome lines (`✓ …`) and success banners.
    pub success: Style,
    /// Pitfalls and validation errors.
    pub warning: Style,
    pub muted: Style,

    /// Ordered colour palette used for tag colour cycling.
    tag_palette: Vec<Color>,
}

impl Theme {
    /// Load and parse the embedded default theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed. Both embedded themes are
    /// covered by tests, so this should never happen in practice.
    pub fn load_default() -> Self {
        Self::from_toml_str(DEFAULT_THEME_SRC).expect("embedded default theme must be valid TOML")
    }

    /// Load and parse the embedded Gruvbox Dark theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_gruvbox_dark() -> Self {
        Self::from_toml_str(GRUVBOX_DARK_THEME_SRC)
            .expect("embedded gruvbox dark theme must be valid TOML")
    }

    /// Resolve a theme name from config or the `:theme` command. Unknown
    /// names fall back to the default theme.
    pub fn by_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "gruvbox" | "gruvbox_dark" | "gruvbox-dark" => Self::load_gruvbox_dark(),
            _ => Self::load_default(),
        }
    }

    /// Parse a theme from a TOML string.
    ///
    /// Returns an error if the string cannot be deserialised into a valid
    /// theme. Unknown keys are ignored.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            level_learning: raw.levels.learning.into_style(),
            level_practiced: raw.levels.practiced.into_style(),
            level_shipped: raw.levels.shipped.into_style(),
            level_advanced: raw.levels.advanced.into_style(),
            difficulty_beginner: raw.difficulty.beginner.into_style(),
            difficulty_intermediate: raw.difficulty.intermediate.into_style(),
            difficulty_advanced: raw.difficulty.advanced.into_style(),
            category_programming: raw.categories.programming.into_style(),
            category_foundation: raw.categories.foundation.into_style(),
            category_ml: raw.categories.ml.into_style(),
            category_engineering: raw.categories.engineering.into_style(),
            category_domain: raw.categories.domain.into_style(),
            border_focused: raw.borders.focused.into_style(),
            border_command_bar: raw.borders.command_bar.into_style(),
            border_unfocused: raw.borders.unfocused.into_style(),
            search_highlight: raw.search.highlight.into_style(),
            heading: raw.text.heading.into_style(),
            success: raw.text.success.into_style(),
            warning: raw.text.warning.into_style(),
            muted: raw.text.muted.into_style(),
            tag_palette: raw
                .tags
                .palette
                .iter()
                .filter_map(|s| parse_color(s))
                .collect(),
        })
    }

    pub fn level_style(&self, level: SkillLevel) -> Style {
        match level {
            SkillLevel::Learning => self.level_learning,
            SkillLevel::Practiced => self.level_practiced,
            SkillLevel::Shipped => self.level_shipped,
            SkillLevel::Advanced => self.level_advanced,
        }
    }

    pub fn difficulty_style(&self, difficulty: ProjectDifficulty) -> Style {
        match difficulty {
            ProjectDifficulty::Beginner => self.difficulty_beginner,
            ProjectDifficulty::Intermediate => self.difficulty_intermediate,
            ProjectDifficulty::Advanced => self.difficulty_advanced,
        }
    }

    pub fn category_style(&self, category: SkillCategory) -> Style {
        match category {
            SkillCategory::Programming => self.category_programming,
            SkillCategory::Foundation => self.category_foundation,
            SkillCategory::Ml => self.category_ml,
            SkillCategory::Engineering => self.category_engineering,
            SkillCategory::Domain => self.category_domain,
        }
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.border_focused
        } else {
            self.border_unfocused
        }
    }

    /// Return a stable [`Style`] for a post tag.
    ///
    /// The colour is determined by hashing the tag and taking the result
    /// modulo the palette length.
    pub fn tag_style(&self, tag: &str) -> Style {
        if self.tag_palette.is_empty() {
            return Style::default();
        }
        let idx = stable_hash(tag) % self.tag_palette.len();
        Style::default().fg(self.tag_palette[idx])
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load_default()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Simple djb2-style hash that is stable across Rust versions and process
/// restarts, making tag colour assignment deterministic.
fn stable_hash(s: &str) -> usize {
    s.bytes().fold(5381usize, |acc, b| {
        acc.wrapping_mul(31).wrapping_add(b as usize)
    })
}

/// Parse a colour name into a ratatui [`Color`].
///
/// Accepts:
/// - Named terminal colours (case-insensitive): `red`, `dark_gray`, etc.
/// - Hex RGB: `#rrggbb`
/// - 256-colour indexed: `indexed:N`
fn parse_color(s: &str) -> Option<Color> {
    match s.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "darkgray" | "dark_grey" | "darkgrey" => Some(Color::DarkGray),
        "light_red" => Some(Color::LightRed),
        "light_green" => Some(Color::LightGreen),
        "light_yellow" => Some(Color::LightYellow),
        "light_blue" => Some(Color::LightBlue),
        "light_magenta" => Some(Color::LightMagenta),
        "light_cyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        s if s.starts_with('#') && s.len() == 7 => {
            let r = u8::from_str_radix(&s[1..3], 16).ok()?;
            let g = u8::from_str_radix(&s[3..5], 16).ok()?;
            let b = u8::from_str_radix(&s[5..7], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        s if s.starts_with("indexed:") => {
            let n: u8 = s["indexed:".len()..].parse().ok()?;
            Some(Color::Indexed(n))
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
