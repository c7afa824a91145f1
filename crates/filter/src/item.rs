use serde::{Deserialize, Serialize};

/// Anything the filter can show or hide.
///
/// The engine only reads `tags` and `text` and only ever writes visibility,
/// so a UI binding can implement this over its own node type.
pub trait Card {
    fn tags(&self) -> &str;
    fn text(&self) -> &str;
    fn set_visible(&mut self, visible: bool);
}

/// One project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayItem {
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

const fn default_visible() -> bool {
    true
}

impl DisplayItem {
    pub fn new(tags: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tags: tags.into(),
            text: text.into(),
            visible: true,
        }
    }

    /// First non-blank line of the card text, used as a display label.
    pub fn headline(&self) -> &str {
        self.text
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("")
    }
}

impl Card for DisplayItem {
    fn tags(&self) -> &str {
        &self.tags
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
