//! Board configuration, read from TOML.
//!
//! ```toml
//! [display]
//! width = 480
//! height = 800
//! orientation = "portrait"
//! mode = "dual"
//! overflow = "truncate"
//! preview_path = "todo_preview.png"
//!
//! [owners]
//! first = "Bryan"
//! second = "Stacy"
//!
//! [fonts]
//! task = "8x13"
//! ```
//!
//! Every key is optional; missing keys take the 800x480 landscape single-list defaults.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use todo_display_core::{
    CanvasGeometry, FontBook, FontHandle, FontRole, GeometryError, LayoutConfig, ListMode,
    Orientation, OverflowPolicy, RegionAllocator,
};

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(toml::de::Error),
    ZeroDimension { width: u32, height: u32 },
    /// The display cannot hold the board layout, e.g. narrower than both margins.
    Layout(GeometryError),
    /// Dual mode needs both owner labels.
    MissingOwners,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "cannot read config `{}`: {source}", path.display())
            }
            ConfigError::Parse(err) => write!(f, "invalid config: {err}"),
            ConfigError::ZeroDimension { width, height } => {
                write!(f, "display size {width}x{height} has a zero dimension")
            }
            ConfigError::Layout(err) => write!(f, "display cannot hold the board: {err}"),
            ConfigError::MissingOwners => {
                write!(f, "dual mode needs both `owners.first` and `owners.second`")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(err) => Some(err),
            ConfigError::Layout(err) => Some(err),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    pub display: DisplaySection,
    pub owners: OwnersSection,
    pub fonts: FontsSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplaySection {
    pub width: u32,
    pub height: u32,
    pub orientation: Orientation,
    pub mode: ListMode,
    pub overflow: OverflowPolicy,
    /// Where to write the PNG preview, none when unset.
    pub preview_path: Option<PathBuf>,
}

impl Default for DisplaySection {
    fn default() -> Self {
        DisplaySection {
            width: 800,
            height: 480,
            orientation: Orientation::Landscape,
            mode: ListMode::Single,
            overflow: OverflowPolicy::Truncate,
            preview_path: None,
        }
    }
}

/// Labels of the two dual-mode lists, matched against each task's owner.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OwnersSection {
    pub first: Option<String>,
    pub second: Option<String>,
}

/// Font names per role; unset roles use the orientation's defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontsSection {
    pub title: Option<String>,
    pub task: Option<String>,
    pub small: Option<String>,
}

impl BoardConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: BoardConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&input)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let geometry = self.geometry()?;
        RegionAllocator::new(&self.layout())
            .allocate(&geometry, self.display.mode)
            .map_err(ConfigError::Layout)?;
        if self.display.mode == ListMode::Dual && self.owner_labels().is_none() {
            return Err(ConfigError::MissingOwners);
        }
        Ok(())
    }

    pub fn geometry(&self) -> Result<CanvasGeometry, ConfigError> {
        let display = &self.display;
        CanvasGeometry::new(display.width, display.height, display.orientation).map_err(|_| {
            ConfigError::ZeroDimension {
                width: display.width,
                height: display.height,
            }
        })
    }

    /// Both owner labels, `None` unless both are set and non-blank.
    pub fn owner_labels(&self) -> Option<(&str, &str)> {
        let first = self.owners.first.as_deref().map(str::trim)?;
        let second = self.owners.second.as_deref().map(str::trim)?;
        (!first.is_empty() && !second.is_empty()).then_some((first, second))
    }

    pub fn layout(&self) -> LayoutConfig {
        LayoutConfig::for_orientation(self.display.orientation).with_overflow(self.display.overflow)
    }

    /// The orientation's font book with any configured overrides applied.
    pub fn font_book(&self) -> FontBook {
        let fonts = &self.fonts;
        [
            (FontRole::Title, &fonts.title),
            (FontRole::Task, &fonts.task),
            (FontRole::Small, &fonts.small),
        ]
        .into_iter()
        .fold(
            FontBook::for_orientation(self.display.orientation),
            |book, (role, name)| match name {
                Some(name) => book.with_role(role, FontHandle::named(name)),
                None => book,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_the_default_board() {
        let config = BoardConfig::from_toml_str("").unwrap();
        assert_eq!(config, BoardConfig::default());
        assert_eq!(config.layout(), LayoutConfig::LANDSCAPE);
        assert_eq!(
            config.font_book(),
            FontBook::for_orientation(Orientation::Landscape)
        );
    }

    #[test]
    fn owner_labels_need_both_names() {
        let mut config = BoardConfig::default();
        config.owners.first = Some(String::from("Bryan"));
        assert_eq!(config.owner_labels(), None);
        config.owners.second = Some(String::from("  "));
        assert_eq!(config.owner_labels(), None);
        config.owners.second = Some(String::from(" Stacy "));
        assert_eq!(config.owner_labels(), Some(("Bryan", "Stacy")));
    }

    #[test]
    fn font_overrides_apply_per_role() {
        let config = BoardConfig::from_toml_str(
            r#"
            [display]
            orientation = "portrait"
            width = 480
            height = 800

            [fonts]
            task = "9x15"
            small = "wingdings"
            "#,
        )
        .unwrap();

        let book = config.font_book();
        assert_eq!(book.task.name(), "9x15");
        assert_eq!(book.small.name(), "6x10");
        assert_eq!(book.title.name(), "9x18_bold");
    }
}
