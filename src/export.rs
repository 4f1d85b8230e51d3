//! Static preview site export.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::assets::write_css_assets;
use crate::markdown::MarkdownRenderer;
use crate::pages;
use crate::story::Story;

/// Files produced by an export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub index: PathBuf,
    pub chapters_written: usize,
    pub chapters_failed: usize,
}

/// Writes a browsable preview of `story` into `output`.
///
/// Layout of the output directory:
///
/// ```text
/// index.html
/// chapters/<n>.html
/// assets/story.css
/// ```
///
/// A chapter page that cannot be written is logged and skipped so one bad
/// page does not lose the rest of the site.
///
/// # Arguments
///
/// * `story`: Story to export
/// * `output`: Output directory, created if missing
///
/// # Returns
///
/// Summary with the index path and chapter page counts
///
/// # Errors
///
/// Returns error if the output directory, the index page or the stylesheet
/// cannot be written
///
/// # Examples
///
/// ```no_run
/// use storyloom::{Story, export_site};
/// use std::path::Path;
///
/// let story = Story::load("draft.story")?;
/// let summary = export_site(&story, Path::new("preview"))?;
/// println!("{}", summary.index.display());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn export_site(story: &Story, output: &Path) -> Result<ExportSummary> {
    let chapters_dir = output.join("chapters");
    fs::create_dir_all(&chapters_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            chapters_dir.display()
        )
    })?;

    write_css_assets(&output.join("assets")).context("Failed to write stylesheet")?;

    let renderer = MarkdownRenderer::new();
    let total = story.chapters.len();
    let mut chapters_written = 0;
    let mut chapters_failed = 0;

    for (i, chapter) in story.chapters.iter().enumerate() {
        let number = i + 1;
        let page = pages::chapter::generate(&story.title, chapter, number, total, &renderer);
        let path = chapters_dir.join(format!("{}.html", number));

        match fs::write(&path, page.into_string()) {
            Ok(()) => {
                debug!("Wrote chapter page: {}", path.display());
                chapters_written += 1;
            }
            Err(e) => {
                warn!("Failed to write chapter {}: {}", number, e);
                chapters_failed += 1;
            }
        }
    }

    let index = output.join("index.html");
    fs::write(&index, pages::index::generate(story).into_string())
        .with_context(|| format!("Failed to write index page: {}", index.display()))?;

    info!(
        "Exported {} chapter pages to {}",
        chapters_written,
        output.display()
    );

    Ok(ExportSummary {
        index,
        chapters_written,
        chapters_failed,
    })
}
