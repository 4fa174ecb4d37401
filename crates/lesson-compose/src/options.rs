use crate::tree::RunStyle;
use crate::types::*;
use serde::{Deserialize, Serialize};

/// Compositor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposeOptions {
    // Lesson text styling
    /// Font size in half-points
    pub font_size: u32,
    pub bold: bool,
    pub italic: bool,

    // Split borders, in eighths of a point
    pub thin_border: u32,
    /// Used when the template cell has no right border of its own
    pub thick_border: u32,

    // Labels
    pub room_prefix: String,
    pub subgroup_prefix: String,
    pub group_marker: String,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            font_size: 18,
            bold: true,
            italic: true,
            thin_border: 4,
            thick_border: 8,
            room_prefix: "КАБ".to_string(),
            subgroup_prefix: "ГР".to_string(),
            group_marker: "<Group>".to_string(),
        }
    }
}

impl ComposeOptions {
    /// Load options from JSON file
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| ComposeError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ComposeError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.font_size == 0 {
            return Err(ComposeError::Config("Font size must be positive".to_string()));
        }

        if self.thin_border == 0 || self.thick_border == 0 {
            return Err(ComposeError::Config(
                "Border weights must be positive".to_string(),
            ));
        }

        if self.thin_border >= self.thick_border {
            return Err(ComposeError::Config(format!(
                "Thin border ({}) must be lighter than thick border ({})",
                self.thin_border, self.thick_border
            )));
        }

        for (name, value) in [
            ("Room prefix", &self.room_prefix),
            ("Sub-group prefix", &self.subgroup_prefix),
            ("Group marker", &self.group_marker),
        ] {
            if value.trim().is_empty() {
                return Err(ComposeError::Config(format!("{} must not be empty", name)));
            }
        }

        Ok(())
    }

    /// Style applied to both lesson lines
    pub fn lesson_style(&self) -> RunStyle {
        RunStyle {
            bold: self.bold,
            italic: self.italic,
            font_size: Some(self.font_size),
        }
    }
}
