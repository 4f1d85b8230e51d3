//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const LAYOUT: &str = include_str!("../assets/components/layout.css");
const NAV: &str = include_str!("../assets/components/nav.css");
const INDEX_PAGE: &str = include_str!("../assets/page-index.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");

/// Name of the bundled stylesheet inside the assets directory.
pub const STORY_CSS: &str = "story.css";

/// Full stylesheet shared by every generated page.
pub fn story_css() -> String {
    [BASE, LAYOUT, NAV, INDEX_PAGE, MARKDOWN].join("\n")
}

/// Writes all bundled CSS assets to output directory
///
/// # Errors
///
/// Returns error if the directory cannot be created or written
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    fs::create_dir_all(assets_dir).with_context(|| {
        format!(
            "Failed to create assets directory: {}",
            assets_dir.display()
        )
    })?;
    fs::write(assets_dir.join(STORY_CSS), story_css())
        .with_context(|| format!("Failed to write CSS asset: {}", STORY_CSS))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_css_assets() {
        // Arrange
        let temp = TempDir::new().expect("Failed to create temp dir");
        let assets = temp.path().join("assets");

        // Act
        write_css_assets(&assets).expect("Failed to write assets");

        // Assert
        let css = fs::read_to_string(assets.join(STORY_CSS)).expect("Should exist");
        assert!(css.contains(".container"));
        assert!(css.contains(".markdown-body"));
    }
}
