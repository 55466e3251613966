use serde::Deserialize;

/// One entry of the showcase: an image with its caption.
///
/// Items are built once when the showcase is created and never change.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DisplayItem {
    image: String,
    title: String,
    #[serde(default)]
    description: String,
}

impl DisplayItem {
    pub fn new(image: impl Into<String>, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub(crate) fn with_image(self, image: String) -> Self {
        Self { image, ..self }
    }
}

// Shown when neither a config file nor an image directory is given
pub fn default_facilities() -> Vec<DisplayItem> {
    vec![
        DisplayItem::new(
            "assets/facilities/library.jpg",
            "Modern Library",
            "Thousands of books, quiet reading rooms and digital resources for every grade.",
        ),
        DisplayItem::new(
            "assets/facilities/science-lab.jpg",
            "Science Laboratories",
            "Fully equipped physics, chemistry and biology labs for hands-on experiments.",
        ),
        DisplayItem::new(
            "assets/facilities/sports-complex.jpg",
            "Sports Complex",
            "Football pitch, basketball courts and an indoor hall for year-round training.",
        ),
        DisplayItem::new(
            "assets/facilities/computer-lab.jpg",
            "Computer Lab",
            "Networked workstations where students learn programming and digital skills.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_data_has_four_facilities() {
        let items = default_facilities();
        assert_eq!(items.len(), 4);
        assert!(items.iter().all(|item| !item.title().is_empty()));
        assert!(items.iter().all(|item| !item.image().is_empty()));
    }

    #[test]
    fn description_defaults_to_empty_when_missing() {
        let item: DisplayItem = toml::from_str("image = \"a.png\"\ntitle = \"A\"").unwrap();
        assert_eq!(item, DisplayItem::new("a.png", "A", ""));
    }
}
