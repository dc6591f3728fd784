//! In-place placeholder substitution over the extracted template.

use std::ffi::OsStr;
use std::fs;

use anyhow::{Context, Result};
use camino::Utf8Path;
use tracing::debug;
use walkdir::WalkDir;

use crate::config::ScaffoldConfig;
use crate::settings::ProjectSettings;
use crate::util::bytes::replace_all;

/// Counts of files visited and of files whose bytes changed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RenderSummary {
    pub files: usize,
    pub rewritten: usize,
}

/// Substitute the template placeholders in every file below `root`.
///
/// The walk is depth-first in directory listing order and stops at the
/// first walk, read or write error. Every file is written back in place,
/// which keeps its existing permission mode.
pub fn render_tree(
    root: &Utf8Path,
    settings: &ProjectSettings,
    config: &ScaffoldConfig,
) -> Result<RenderSummary> {
    let mut summary = RenderSummary::default();
    for entry in WalkDir::new(root) {
        let entry = entry.with_context(|| format!("walking {root}"))?;
        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        debug!(path = %path.display(), "rendering");
        let original = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let dockerfile = is_dockerfile(entry.file_name(), config);
        let rendered = render_bytes(&original, dockerfile, settings, config);
        fs::write(path, &rendered).with_context(|| format!("writing {}", path.display()))?;

        summary.files += 1;
        if rendered != original {
            summary.rewritten += 1;
        }
    }
    Ok(summary)
}

/// Apply the substitutions for one file's contents.
///
/// The binary-name pass only runs for Dockerfiles and sees the output of the
/// module pass.
pub fn render_bytes(
    content: &[u8],
    dockerfile: bool,
    settings: &ProjectSettings,
    config: &ScaffoldConfig,
) -> Vec<u8> {
    let rendered = replace_all(
        content,
        config.placeholder.as_bytes(),
        settings.module().as_bytes(),
    );
    if !dockerfile {
        return rendered;
    }
    replace_all(
        &rendered,
        config.binary_placeholder.as_bytes(),
        settings.binary_name().as_bytes(),
    )
}

fn is_dockerfile(file_name: &OsStr, config: &ScaffoldConfig) -> bool {
    file_name == OsStr::new(&config.dockerfile_name)
}
