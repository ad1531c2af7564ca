//! Theme selection.

use dotfield_common::Theme;
use serde::{Deserialize, Serialize};

/// Theme selection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// `"dark"` or `"light"`. Unknown names fall back to light.
    pub name: String,
}

impl ThemeConfig {
    pub fn theme(&self) -> Theme {
        Theme::from_signal(&self.name)
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "dark".into(),
        }
    }
}
