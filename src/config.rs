use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::constants::{DEFAULT_WINDOW_TITLE, TRANSITION_DURATION};
use crate::error::ShowcaseError;
use crate::item::{default_facilities, DisplayItem};
use crate::texture_loader::load_sorted_image_paths;

/// Showcase settings, read from a TOML file.
///
/// ```toml
/// transition_ms = 600
/// window_title = "Our Facilities"
///
/// [[items]]
/// image = "images/library.jpg"
/// title = "Modern Library"
/// description = "Quiet reading rooms"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub transition_ms: u64,
    pub window_title: String,
    pub items: Vec<DisplayItem>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            transition_ms: TRANSITION_DURATION.as_millis() as u64,
            window_title: DEFAULT_WINDOW_TITLE.into(),
            items: default_facilities(),
        }
    }
}

impl ShowcaseConfig {
    pub fn load(path: &Path) -> Result<Self, ShowcaseError> {
        let raw = fs::read_to_string(path).map_err(|e| ShowcaseError::io(path, e))?;
        let mut config = Self::parse(&raw).map_err(|source| ShowcaseError::Config {
            path: path.to_path_buf(),
            source,
        })?;

        // Image paths in the file are relative to the file itself
        if let Some(base) = path.parent() {
            config.items = config
                .items
                .into_iter()
                .map(|item| {
                    let image = Path::new(item.image());
                    if image.is_relative() {
                        let resolved = base.join(image).to_string_lossy().into_owned();
                        item.with_image(resolved)
                    } else {
                        item
                    }
                })
                .collect();
        }

        debug!(?path, items = config.items.len(), "loaded config");
        Ok(config)
    }

    pub fn parse(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

/// One item per image file in `dir`, titled after the file name.
pub fn items_from_directory(dir: &Path) -> Result<Vec<DisplayItem>, ShowcaseError> {
    let paths = load_sorted_image_paths(dir)?;
    Ok(paths
        .into_iter()
        .map(|path| {
            let title = path
                .file_stem()
                .and_then(|s| s.to_str())
                .map(title_from_file_stem)
                .unwrap_or_default();
            DisplayItem::new(path.to_string_lossy(), title, "")
        })
        .collect())
}

fn title_from_file_stem(stem: &str) -> String {
    stem.split(['_', '-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
